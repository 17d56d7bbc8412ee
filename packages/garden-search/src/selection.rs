//! Inclusion state threaded through the search.
//!
//! [`Selection`] is the in-flight form: a persistent list of chosen positions where every
//! `include` shares the prefix it extends, so branching costs O(1) and siblings can never see
//! each other's choices. [`Mask`] is the settled form handed out with a solution: an owned bitset
//! over original indices.

use std::rc::Rc;

const WORD_BITS: usize = u64::BITS as usize;

#[derive(Debug)]
struct Link {
	position: usize,
	next: Option<Rc<Link>>,
}

#[derive(Debug, Clone, Default)]
pub struct Selection {
	head: Option<Rc<Link>>,
	len: usize,
}
impl Selection {
	pub fn empty() -> Self {
		Self::default()
	}

	/// Returns a new selection with `position` added; `self` is left untouched.
	pub fn include(&self, position: usize) -> Self {
		Self {
			head: Some(Rc::new(Link { position, next: self.head.clone() })),
			len: self.len + 1,
		}
	}

	pub fn len(&self) -> usize {
		self.len
	}

	pub fn is_empty(&self) -> bool {
		self.len == 0
	}

	/// Chosen positions, most recent first.
	pub fn positions(&self) -> Positions<'_> {
		Positions { cursor: self.head.as_deref() }
	}
}
impl Drop for Selection {
	fn drop(&mut self) {
		// Unlink iteratively; a recursive drop of a deep chain could exhaust the stack.
		let mut next = self.head.take();

		while let Some(link) = next {
			match Rc::try_unwrap(link) {
				Ok(mut link) => next = link.next.take(),
				Err(_) => break,
			}
		}
	}
}

pub struct Positions<'a> {
	cursor: Option<&'a Link>,
}
impl Iterator for Positions<'_> {
	type Item = usize;

	fn next(&mut self) -> Option<Self::Item> {
		let link = self.cursor?;

		self.cursor = link.next.as_deref();

		Some(link.position)
	}
}

/// Fixed-width bitset over original input indices.
#[derive(Debug, Clone, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct Mask {
	words: Vec<u64>,
	width: usize,
}
impl Mask {
	pub fn new(width: usize) -> Self {
		Self { words: vec![0; width.div_ceil(WORD_BITS)], width }
	}

	/// # Panics
	///
	/// Panics if `index` is not below the mask width.
	pub fn insert(&mut self, index: usize) {
		assert!(index < self.width, "mask index {index} out of width {}", self.width);

		self.words[index / WORD_BITS] |= 1_u64 << (index % WORD_BITS);
	}

	pub fn contains(&self, index: usize) -> bool {
		index < self.width && self.words[index / WORD_BITS] & (1_u64 << (index % WORD_BITS)) != 0
	}

	pub fn width(&self) -> usize {
		self.width
	}

	pub fn count(&self) -> usize {
		self.words.iter().map(|word| word.count_ones() as usize).sum()
	}

	/// Included indices in ascending order.
	pub fn indices(&self) -> impl Iterator<Item = usize> + '_ {
		self.words.iter().enumerate().flat_map(|(slot, &word)| {
			let mut rest = word;

			std::iter::from_fn(move || {
				if rest == 0 {
					return None;
				}

				let bit = rest.trailing_zeros() as usize;

				rest &= rest - 1;

				Some(slot * WORD_BITS + bit)
			})
		})
	}

	pub fn to_bools(&self) -> Vec<bool> {
		(0..self.width).map(|index| self.contains(index)).collect()
	}
}
