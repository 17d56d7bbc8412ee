mod error;
mod types;

pub use error::{Error, Result};
pub use types::{Config, Output, Problem, Search, Service};

use std::{fs, path::Path};

pub fn load(path: &Path) -> Result<Config> {
	let raw = fs::read_to_string(path)
		.map_err(|err| Error::ReadConfig { path: path.to_path_buf(), source: err })?;

	let mut cfg: Config = toml::from_str(&raw)
		.map_err(|err| Error::ParseConfig { path: path.to_path_buf(), source: err })?;

	normalize(&mut cfg);

	validate(&cfg)?;

	Ok(cfg)
}

pub fn validate(cfg: &Config) -> Result<()> {
	if cfg.service.log_level.trim().is_empty() {
		return Err(Error::Validation {
			message: "service.log_level must be non-empty.".to_string(),
		});
	}

	if let Some(position) = cfg.problem.input.iter().position(|&value| value == 0) {
		return Err(Error::Validation {
			message: format!("problem.input[{position}] must be greater than zero."),
		});
	}
	if cfg.problem.input.iter().try_fold(0_u64, |sum, &value| sum.checked_add(value)).is_none() {
		return Err(Error::Validation {
			message: "problem.input must sum to a value that fits in 64 bits.".to_string(),
		});
	}

	if !matches!(cfg.search.strategy.as_str(), "naive" | "bounded") {
		return Err(Error::Validation {
			message: "search.strategy must be one of naive or bounded.".to_string(),
		});
	}
	if !matches!(cfg.output.format.as_str(), "text" | "json") {
		return Err(Error::Validation {
			message: "output.format must be one of text or json.".to_string(),
		});
	}

	Ok(())
}

/// Canonicalizes the free-form string settings in place.
pub fn normalize(cfg: &mut Config) {
	cfg.search.strategy = cfg.search.strategy.trim().to_ascii_lowercase();
	cfg.output.format = cfg.output.format.trim().to_ascii_lowercase();
}
