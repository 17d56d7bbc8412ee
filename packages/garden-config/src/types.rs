use serde::Deserialize;

#[derive(Debug, Clone, Deserialize)]
pub struct Config {
	pub service: Service,
	pub problem: Problem,
	#[serde(default)]
	pub search: Search,
	#[serde(default)]
	pub output: Output,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Service {
	/// `tracing_subscriber::EnvFilter` directive, e.g. "info" or "garden_search=debug".
	pub log_level: String,
}

#[derive(Debug, Clone, Deserialize)]
pub struct Problem {
	pub goal: u64,
	/// Positive integers; repeated values are distinct items.
	pub input: Vec<u64>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Search {
	/// One of "naive" or "bounded".
	pub strategy: String,
}
impl Default for Search {
	fn default() -> Self {
		Self { strategy: "bounded".to_string() }
	}
}

#[derive(Debug, Clone, Deserialize)]
#[serde(default)]
pub struct Output {
	/// One of "text" or "json".
	pub format: String,
}
impl Default for Output {
	fn default() -> Self {
		Self { format: "text".to_string() }
	}
}
