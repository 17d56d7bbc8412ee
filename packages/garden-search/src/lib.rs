//! Exact subset-sum enumeration.
//!
//! Given a multiset of positive integers and a goal, [`Search`] reports every subset whose
//! elements add up to the goal. Items are distinguished by position, so repeated values yield
//! distinct solutions.
//!
//! ```
//! use garden_search::{Search, Strategy};
//!
//! let search = Search::prepare(&[1, 2, 3, 4], 5, Strategy::Bounded)?;
//! let mut found: Vec<Vec<u64>> =
//! 	search.solutions()?.iter().map(|solution| solution.values().to_vec()).collect();
//!
//! found.sort();
//!
//! assert_eq!(found, vec![vec![1, 4], vec![2, 3]]);
//! # Ok::<(), garden_search::Error>(())
//! ```

pub mod engine;
pub mod selection;
pub mod sort;

mod error;
mod problem;
mod sink;
mod solution;

pub use engine::{Search, SearchStats, Strategy};
pub use error::{Error, Result};
pub use problem::{Item, Problem};
pub use selection::{Mask, Selection};
pub use sink::SolutionSink;
pub use solution::Solution;
