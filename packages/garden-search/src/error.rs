pub type Result<T, E = Error> = std::result::Result<T, E>;

#[derive(Debug, thiserror::Error)]
pub enum Error {
	#[error("Input value at index {index} must be greater than zero.")]
	NonPositiveValue { index: usize },
	#[error("Input values sum past the 64-bit accumulator range.")]
	SumOverflow,
	#[error("Item index {index} is out of range or repeated.")]
	InvalidIndex { index: usize },
	#[error("Bounded search requires ascending input; position {position} is smaller than its predecessor.")]
	UnsortedInput { position: usize },
	#[error("Unknown search strategy {name:?}; expected naive or bounded.")]
	UnknownStrategy { name: String },
	#[error("Solution sink error: {message}")]
	Sink { message: String },
}
