use crate::{Error, Result};

/// A positive value pinned to its position in the caller's input.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Item {
	pub index: usize,
	pub value: u64,
}

/// The multiset and goal a search runs against.
///
/// Construction checks every value is positive and that the total fits in `u64`. Every running
/// sum the engine keeps is bounded by the total, so no later addition can overflow.
#[derive(Debug, Clone)]
pub struct Problem {
	pub(crate) items: Vec<Item>,
	goal: u64,
	total: u64,
}
impl Problem {
	pub fn new(values: &[u64], goal: u64) -> Result<Self> {
		let items =
			values.iter().enumerate().map(|(index, &value)| Item { index, value }).collect();

		Self::from_items(items, goal)
	}

	/// Builds a problem from items that already carry their original indices.
	///
	/// Indices must form a permutation of `0..items.len()`.
	pub fn from_items(items: Vec<Item>, goal: u64) -> Result<Self> {
		let mut seen = vec![false; items.len()];
		let mut total = 0_u64;

		for item in &items {
			match seen.get_mut(item.index) {
				Some(slot) if !*slot => *slot = true,
				_ => return Err(Error::InvalidIndex { index: item.index }),
			}

			if item.value == 0 {
				return Err(Error::NonPositiveValue { index: item.index });
			}

			total = total.checked_add(item.value).ok_or(Error::SumOverflow)?;
		}

		Ok(Self { items, goal, total })
	}

	pub fn items(&self) -> &[Item] {
		&self.items
	}

	pub fn goal(&self) -> u64 {
		self.goal
	}

	pub fn total(&self) -> u64 {
		self.total
	}

	pub fn len(&self) -> usize {
		self.items.len()
	}

	pub fn is_empty(&self) -> bool {
		self.items.is_empty()
	}
}
