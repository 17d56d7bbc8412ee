use std::ops::Range;

use crate::{Mask, Problem, Selection};

/// One exact-sum subset, owned outright by whoever receives it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Solution {
	mask: Mask,
	values: Vec<u64>,
}
impl Solution {
	/// Settles `selection` plus every position in `tail` into a mask over original indices.
	pub(crate) fn materialize(problem: &Problem, selection: &Selection, tail: Range<usize>) -> Self {
		let items = problem.items();
		let mut mask = Mask::new(items.len());
		let mut picked = Vec::with_capacity(selection.len() + tail.len());

		for position in selection.positions().chain(tail) {
			let item = items[position];

			mask.insert(item.index);
			picked.push((item.index, item.value));
		}

		picked.sort_unstable_by_key(|&(index, _)| index);

		Self { mask, values: picked.into_iter().map(|(_, value)| value).collect() }
	}

	pub fn mask(&self) -> &Mask {
		&self.mask
	}

	/// Original indices of the included items, ascending.
	pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
		self.mask.indices()
	}

	/// Included values in original input order.
	pub fn values(&self) -> &[u64] {
		&self.values
	}

	pub fn sum(&self) -> u64 {
		self.values.iter().sum()
	}

	pub fn len(&self) -> usize {
		self.values.len()
	}

	pub fn is_empty(&self) -> bool {
		self.values.is_empty()
	}
}
