use crate::{Result, Solution};

/// Receives each solution as soon as the search finds it.
///
/// Returning an error stops the search; the error is handed back from
/// [`Search::run`](crate::Search::run) unchanged.
pub trait SolutionSink {
	fn accept(&mut self, solution: Solution) -> Result<()>;
}
impl SolutionSink for Vec<Solution> {
	fn accept(&mut self, solution: Solution) -> Result<()> {
		self.push(solution);

		Ok(())
	}
}
impl<F> SolutionSink for F
where
	F: FnMut(Solution) -> Result<()>,
{
	fn accept(&mut self, solution: Solution) -> Result<()> {
		self(solution)
	}
}
