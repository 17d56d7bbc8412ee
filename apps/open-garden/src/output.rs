use std::{
	io::{self, Write},
	str::FromStr,
};

use color_eyre::eyre;
use serde::Serialize;

use garden_search::{Solution, SolutionSink};

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Format {
	/// The bracketed listing, one block per solution.
	Text,
	/// One JSON object per line.
	Json,
}
impl FromStr for Format {
	type Err = eyre::Report;

	fn from_str(raw: &str) -> Result<Self, Self::Err> {
		match raw {
			"text" => Ok(Self::Text),
			"json" => Ok(Self::Json),
			_ => Err(eyre::eyre!("Unknown output format {raw:?}; expected text or json.")),
		}
	}
}

#[derive(Debug, Serialize)]
struct SolutionRecord<'a> {
	indices: Vec<usize>,
	values: &'a [u64],
	sum: u64,
}

pub fn write_solution<W>(out: &mut W, format: Format, solution: &Solution) -> io::Result<()>
where
	W: Write,
{
	match format {
		Format::Text => {
			write!(out, "A solution: {{\n\t")?;

			for value in solution.values() {
				write!(out, "{value} ")?;
			}

			writeln!(out, "\n}}")
		},
		Format::Json => {
			let record = SolutionRecord {
				indices: solution.indices().collect(),
				values: solution.values(),
				sum: solution.sum(),
			};

			serde_json::to_writer(&mut *out, &record)?;

			writeln!(out)
		},
	}
}

/// Streams solutions to a writer; a failed write ends the search.
pub struct WriterSink<'a, W> {
	out: &'a mut W,
	format: Format,
}
impl<'a, W> WriterSink<'a, W> {
	pub fn new(out: &'a mut W, format: Format) -> Self {
		Self { out, format }
	}
}
impl<W> SolutionSink for WriterSink<'_, W>
where
	W: Write,
{
	fn accept(&mut self, solution: Solution) -> garden_search::Result<()> {
		write_solution(self.out, self.format, &solution)
			.map_err(|err| garden_search::Error::Sink { message: err.to_string() })
	}
}
