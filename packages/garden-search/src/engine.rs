//! Depth-first enumeration of exact-sum subsets.
//!
//! The engine walks include/exclude decisions one item at a time over an explicit stack of
//! frames rather than native recursion, so input length never threatens the call stack.
//! Each frame carries its own [`Selection`]; pushing the include branch after the exclude branch
//! makes the include side run first.
//!
//! Two strategies share the frame machinery:
//!
//! - [`Strategy::Naive`] stops a path only once its sum is already past the goal or the input
//!   runs out. Input order does not matter.
//! - [`Strategy::Bounded`] requires ascending input and uses it to cut whole subtrees up front:
//!   a path that cannot reach the goal even with every remaining item is dropped, a path whose
//!   remaining items exactly close the gap collapses into one solution, and a path whose next
//!   (smallest) item already overshoots is abandoned along with every later item.

use std::{fmt, str::FromStr};

use crate::{Error, Problem, Result, Selection, Solution, SolutionSink, sort};

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Strategy {
	Naive,
	#[default]
	Bounded,
}
impl Strategy {
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Naive => "naive",
			Self::Bounded => "bounded",
		}
	}

	/// Whether the strategy's pruning relies on ascending input.
	pub fn needs_sorted_input(self) -> bool {
		matches!(self, Self::Bounded)
	}
}
impl FromStr for Strategy {
	type Err = Error;

	fn from_str(raw: &str) -> Result<Self> {
		match raw.trim().to_ascii_lowercase().as_str() {
			"naive" => Ok(Self::Naive),
			"bounded" => Ok(Self::Bounded),
			_ => Err(Error::UnknownStrategy { name: raw.to_string() }),
		}
	}
}
impl fmt::Display for Strategy {
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
		f.write_str(self.as_str())
	}
}

/// Counters collected over one run.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct SearchStats {
	/// Frames evaluated; one per decision point, the analogue of a recursive call.
	pub visited: u64,
	pub solutions: u64,
	/// Paths whose sum was already past the goal.
	pub exceeded: u64,
	/// Paths that ran out of items short of the goal.
	pub exhausted: u64,
	/// Paths that could not reach the goal even by taking every remaining item.
	pub unreachable: u64,
	/// Paths abandoned because the smallest remaining item overshoots.
	pub overshoot: u64,
	/// Paths collapsed into a single solution by taking every remaining item.
	pub forced: u64,
	/// High-water mark of the frame stack.
	pub peak_frames: usize,
}

#[derive(Debug)]
struct Frame {
	position: usize,
	partial: u64,
	remaining: u64,
	selection: Selection,
}

#[derive(Debug, Clone)]
pub struct Search {
	problem: Problem,
	strategy: Strategy,
}
impl Search {
	/// Fails with [`Error::UnsortedInput`] when `strategy` needs ascending input and `problem`
	/// is not ordered that way.
	pub fn new(problem: Problem, strategy: Strategy) -> Result<Self> {
		if strategy.needs_sorted_input() {
			sort::check_sorted(problem.items())?;
		}

		Ok(Self { problem, strategy })
	}

	/// Builds the problem from raw values, sorting it first when the strategy needs that.
	pub fn prepare(values: &[u64], goal: u64, strategy: Strategy) -> Result<Self> {
		let mut problem = Problem::new(values, goal)?;

		if strategy.needs_sorted_input() {
			problem = problem.sorted();
		}

		Self::new(problem, strategy)
	}

	pub fn problem(&self) -> &Problem {
		&self.problem
	}

	pub fn strategy(&self) -> Strategy {
		self.strategy
	}

	/// Hands every exact-sum subset to `sink` and returns the run's counters.
	pub fn run<S>(&self, sink: &mut S) -> Result<SearchStats>
	where
		S: SolutionSink + ?Sized,
	{
		let mut stats = SearchStats::default();
		let mut stack = vec![Frame {
			position: 0,
			partial: 0,
			remaining: self.problem.total(),
			selection: Selection::empty(),
		}];

		tracing::debug!(
			strategy = %self.strategy,
			items = self.problem.len(),
			goal = self.problem.goal(),
			total = self.problem.total(),
			"Starting subset-sum search."
		);

		while let Some(frame) = stack.pop() {
			stats.visited += 1;

			match self.strategy {
				Strategy::Naive => self.expand_naive(frame, &mut stack, sink, &mut stats)?,
				Strategy::Bounded => self.expand_bounded(frame, &mut stack, sink, &mut stats)?,
			}

			stats.peak_frames = stats.peak_frames.max(stack.len());
		}

		tracing::debug!(
			strategy = %self.strategy,
			visited = stats.visited,
			solutions = stats.solutions,
			"Subset-sum search finished."
		);

		Ok(stats)
	}

	/// Runs the search and collects every solution in discovery order.
	pub fn solutions(&self) -> Result<Vec<Solution>> {
		let mut solutions: Vec<Solution> = Vec::new();

		self.run(&mut solutions)?;

		Ok(solutions)
	}

	fn expand_naive<S>(
		&self,
		frame: Frame,
		stack: &mut Vec<Frame>,
		sink: &mut S,
		stats: &mut SearchStats,
	) -> Result<()>
	where
		S: SolutionSink + ?Sized,
	{
		let goal = self.problem.goal();

		if frame.partial == goal {
			return self.emit(&frame.selection, frame.position..frame.position, sink, stats);
		}
		if frame.partial > goal {
			stats.exceeded += 1;

			return Ok(());
		}

		let Some(item) = self.problem.items().get(frame.position) else {
			stats.exhausted += 1;

			return Ok(());
		};
		let next = frame.position + 1;
		let remaining = frame.remaining - item.value;

		stack.push(Frame {
			position: next,
			partial: frame.partial,
			remaining,
			selection: frame.selection.clone(),
		});
		stack.push(Frame {
			position: next,
			partial: frame.partial + item.value,
			remaining,
			selection: frame.selection.include(frame.position),
		});

		Ok(())
	}

	fn expand_bounded<S>(
		&self,
		frame: Frame,
		stack: &mut Vec<Frame>,
		sink: &mut S,
		stats: &mut SearchStats,
	) -> Result<()>
	where
		S: SolutionSink + ?Sized,
	{
		let goal = self.problem.goal();
		let len = self.problem.len();

		// Only the root can land here, and only for a zero goal.
		if frame.partial == goal {
			return self.emit(&frame.selection, frame.position..frame.position, sink, stats);
		}

		let reachable = frame.partial + frame.remaining;

		if reachable < goal {
			stats.unreachable += 1;

			return Ok(());
		}
		if reachable == goal {
			stats.forced += 1;

			return self.emit(&frame.selection, frame.position..len, sink, stats);
		}

		// `reachable > goal` means something is left to decide.
		let Some(item) = self.problem.items().get(frame.position) else {
			stats.exhausted += 1;

			return Ok(());
		};
		let with_item = frame.partial + item.value;

		if with_item > goal {
			stats.overshoot += 1;

			return Ok(());
		}

		let next = frame.position + 1;
		let remaining = frame.remaining - item.value;
		let has_next = next < len;

		if has_next {
			stack.push(Frame {
				position: next,
				partial: frame.partial,
				remaining,
				selection: frame.selection.clone(),
			});
		}

		if with_item == goal {
			let selection = frame.selection.include(frame.position);

			self.emit(&selection, next..next, sink, stats)?;
		} else if has_next {
			stack.push(Frame {
				position: next,
				partial: with_item,
				remaining,
				selection: frame.selection.include(frame.position),
			});
		} else {
			stats.exhausted += 1;
		}

		Ok(())
	}

	fn emit<S>(
		&self,
		selection: &Selection,
		tail: std::ops::Range<usize>,
		sink: &mut S,
		stats: &mut SearchStats,
	) -> Result<()>
	where
		S: SolutionSink + ?Sized,
	{
		let solution = Solution::materialize(&self.problem, selection, tail);

		stats.solutions += 1;

		tracing::trace!(size = solution.len(), "Reporting solution.");

		sink.accept(solution)
	}
}

#[cfg(test)]
mod tests {
	use super::*;

	fn values_of(solutions: &[Solution]) -> Vec<Vec<u64>> {
		let mut values: Vec<Vec<u64>> =
			solutions.iter().map(|solution| solution.values().to_vec()).collect();

		values.sort();

		values
	}

	#[test]
	fn parses_strategy_names() {
		assert_eq!("naive".parse::<Strategy>().unwrap(), Strategy::Naive);
		assert_eq!(" Bounded ".parse::<Strategy>().unwrap(), Strategy::Bounded);
		assert!(matches!(
			"greedy".parse::<Strategy>(),
			Err(Error::UnknownStrategy { name }) if name == "greedy"
		));
		assert_eq!(Strategy::default().to_string(), "bounded");
	}

	#[test]
	fn bounded_rejects_unsorted_problems() {
		let problem = Problem::new(&[3, 1, 2], 3).unwrap();
		let err = Search::new(problem.clone(), Strategy::Bounded).unwrap_err();

		assert!(matches!(err, Error::UnsortedInput { position: 1 }));
		assert!(Search::new(problem, Strategy::Naive).is_ok());
	}

	#[test]
	fn prepare_sorts_only_for_bounded() {
		let bounded = Search::prepare(&[3, 1, 2], 3, Strategy::Bounded).unwrap();
		let naive = Search::prepare(&[3, 1, 2], 3, Strategy::Naive).unwrap();

		assert!(bounded.problem().is_sorted());
		assert_eq!(naive.problem().items()[0].value, 3);
	}

	#[test]
	fn both_strategies_find_the_two_splits_of_five() {
		for strategy in [Strategy::Naive, Strategy::Bounded] {
			let search = Search::prepare(&[1, 2, 3, 4], 5, strategy).unwrap();
			let solutions = search.solutions().unwrap();

			assert_eq!(values_of(&solutions), vec![vec![1, 4], vec![2, 3]], "{strategy}");
		}
	}

	#[test]
	fn zero_goal_reports_the_empty_subset_once() {
		for strategy in [Strategy::Naive, Strategy::Bounded] {
			for values in [&[][..], &[4, 1, 9][..]] {
				let search = Search::prepare(values, 0, strategy).unwrap();
				let solutions = search.solutions().unwrap();

				assert_eq!(solutions.len(), 1, "{strategy} on {values:?}");
				assert!(solutions[0].is_empty());
				assert_eq!(solutions[0].mask().width(), values.len());
			}
		}
	}

	#[test]
	fn empty_input_with_positive_goal_has_no_solutions() {
		for strategy in [Strategy::Naive, Strategy::Bounded] {
			let search = Search::prepare(&[], 5, strategy).unwrap();

			assert!(search.solutions().unwrap().is_empty());
		}
	}

	#[test]
	fn single_item_matches_only_its_own_value() {
		for strategy in [Strategy::Naive, Strategy::Bounded] {
			let hit = Search::prepare(&[7], 7, strategy).unwrap().solutions().unwrap();
			let miss = Search::prepare(&[7], 5, strategy).unwrap().solutions().unwrap();

			assert_eq!(values_of(&hit), vec![vec![7]]);
			assert!(miss.is_empty());
		}
	}

	#[test]
	fn forced_completion_collapses_at_the_root() {
		let bounded = Search::prepare(&[1, 2, 3], 6, Strategy::Bounded).unwrap();
		let naive = Search::prepare(&[1, 2, 3], 6, Strategy::Naive).unwrap();
		let mut solutions: Vec<Solution> = Vec::new();
		let bounded_stats = bounded.run(&mut solutions).unwrap();
		let naive_stats = naive.run(&mut Vec::<Solution>::new()).unwrap();

		assert_eq!(values_of(&solutions), vec![vec![1, 2, 3]]);
		assert_eq!(bounded_stats.visited, 1);
		assert_eq!(bounded_stats.forced, 1);
		assert_eq!(naive_stats.visited, 15);
		assert!(bounded_stats.visited * 2 < naive_stats.visited);
	}

	#[test]
	fn overshoot_abandons_the_whole_path() {
		let search = Search::prepare(&[5, 6, 7], 4, Strategy::Bounded).unwrap();
		let stats = search.run(&mut Vec::<Solution>::new()).unwrap();

		assert_eq!(stats.visited, 1);
		assert_eq!(stats.overshoot, 1);
		assert_eq!(stats.solutions, 0);
	}

	#[test]
	fn exact_inclusion_still_explores_the_exclude_side() {
		// Including the 4 hits the goal; skipping it still leaves room for 1 + 3.
		let search = Search::prepare(&[1, 3, 4], 4, Strategy::Bounded).unwrap();
		let solutions = search.solutions().unwrap();

		assert_eq!(values_of(&solutions), vec![vec![1, 3], vec![4]]);
	}

	#[test]
	fn duplicates_are_distinct_items() {
		for strategy in [Strategy::Naive, Strategy::Bounded] {
			let search = Search::prepare(&[2, 2, 2], 4, strategy).unwrap();
			let solutions = search.solutions().unwrap();
			let mut masks: Vec<Vec<usize>> =
				solutions.iter().map(|solution| solution.indices().collect()).collect();

			masks.sort();

			assert_eq!(masks, vec![vec![0, 1], vec![0, 2], vec![1, 2]], "{strategy}");
		}
	}

	#[test]
	fn sink_errors_stop_the_search() {
		let search = Search::prepare(&[1, 1, 1, 1], 1, Strategy::Naive).unwrap();
		let mut seen = 0;
		let mut sink = |_solution: Solution| -> Result<()> {
			seen += 1;

			Err(Error::Sink { message: "closed".to_string() })
		};
		let err = search.run(&mut sink).unwrap_err();

		assert!(matches!(err, Error::Sink { message } if message == "closed"));
		assert_eq!(seen, 1);
	}

	#[test]
	fn deep_inputs_run_on_the_heap() {
		// Only dropping the 1 reaches the goal; the include chain runs the full depth.
		let values: Vec<u64> = (1..=100_000).collect();
		let goal = values.iter().sum::<u64>() - 1;
		let search = Search::prepare(&values, goal, Strategy::Bounded).unwrap();
		let mut solutions: Vec<Solution> = Vec::new();
		let stats = search.run(&mut solutions).unwrap();

		assert_eq!(solutions.len(), 1);
		assert_eq!(solutions[0].len(), 99_999);
		assert!(!solutions[0].mask().contains(0));
		assert!(stats.peak_frames >= 99_999);
	}

	#[test]
	fn frame_stack_stays_linear_in_depth() {
		let values: Vec<u64> = (1..=16).collect();
		let stats = Search::prepare(&values, 40, Strategy::Naive)
			.unwrap()
			.run(&mut Vec::<Solution>::new())
			.unwrap();

		assert!(stats.peak_frames <= values.len() + 1, "peak {}", stats.peak_frames);
	}
}
