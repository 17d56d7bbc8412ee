use crate::{Error, Item, Problem, Result};

impl Problem {
	/// Orders items ascending by value. Equal values keep their original relative order.
	pub fn sorted(mut self) -> Self {
		sort_items(&mut self.items);

		self
	}

	pub fn is_sorted(&self) -> bool {
		check_sorted(&self.items).is_ok()
	}
}

pub fn sort_items(items: &mut [Item]) {
	items.sort_by_key(|item| item.value);
}

/// Fails with the first position whose value drops below its predecessor.
pub fn check_sorted(items: &[Item]) -> Result<()> {
	match items.windows(2).position(|pair| pair[1].value < pair[0].value) {
		Some(offset) => Err(Error::UnsortedInput { position: offset + 1 }),
		None => Ok(()),
	}
}
