pub mod output;

use std::{
	io::{self, Write},
	path::PathBuf,
	time::{Duration, Instant},
};

use clap::Parser;
use tracing_subscriber::EnvFilter;

use garden_config::Config;
use garden_search::{Search, SearchStats, Strategy};

use crate::output::{Format, WriterSink};

#[derive(Debug, Parser)]
#[command(
	version = garden_cli::VERSION,
	rename_all = "kebab",
	styles = garden_cli::styles(),
)]
pub struct Args {
	#[arg(long, short = 'c', value_name = "FILE")]
	pub config: PathBuf,
	/// Overrides `search.strategy` (naive or bounded).
	#[arg(long, short = 's', value_name = "STRATEGY")]
	pub strategy: Option<String>,
	/// Overrides `problem.goal`.
	#[arg(long, short = 'g', value_name = "N")]
	pub goal: Option<u64>,
	/// Overrides `problem.input` with a comma-separated list.
	#[arg(long, value_name = "N,...", value_delimiter = ',')]
	pub input: Option<Vec<u64>>,
	/// Overrides `output.format` (text or json).
	#[arg(long, short = 'f', value_name = "FORMAT")]
	pub format: Option<String>,
}

#[derive(Debug, Clone, Copy)]
pub struct Summary {
	pub strategy: Strategy,
	pub stats: SearchStats,
	pub elapsed: Duration,
}

pub fn run(args: Args) -> color_eyre::Result<()> {
	let config = resolve_config(&args)?;

	init_tracing(&config);

	let stdout = io::stdout();
	let mut out = stdout.lock();
	let summary = solve(&config, &mut out)?;

	out.flush()?;

	tracing::info!(
		strategy = %summary.strategy,
		items = config.problem.input.len(),
		goal = config.problem.goal,
		solutions = summary.stats.solutions,
		visited = summary.stats.visited,
		elapsed_ms = summary.elapsed.as_millis() as u64,
		"Search complete."
	);

	Ok(())
}

/// Loads the config file and layers the command-line overrides on top.
pub fn resolve_config(args: &Args) -> color_eyre::Result<Config> {
	let mut config = garden_config::load(&args.config)?;

	if let Some(strategy) = &args.strategy {
		config.search.strategy = strategy.clone();
	}
	if let Some(goal) = args.goal {
		config.problem.goal = goal;
	}
	if let Some(input) = &args.input {
		config.problem.input = input.clone();
	}
	if let Some(format) = &args.format {
		config.output.format = format.clone();
	}

	garden_config::normalize(&mut config);
	garden_config::validate(&config)?;

	Ok(config)
}

/// Runs the configured search, streaming each solution to `out` as it is found.
pub fn solve<W>(config: &Config, out: &mut W) -> color_eyre::Result<Summary>
where
	W: Write,
{
	let strategy: Strategy = config.search.strategy.parse()?;
	let format: Format = config.output.format.parse()?;
	let search = Search::prepare(&config.problem.input, config.problem.goal, strategy)?;
	let started = Instant::now();
	let mut sink = WriterSink::new(out, format);
	let stats = search.run(&mut sink)?;

	Ok(Summary { strategy, stats, elapsed: started.elapsed() })
}

fn init_tracing(config: &Config) {
	let filter =
		EnvFilter::try_new(&config.service.log_level).unwrap_or_else(|_| EnvFilter::new("info"));

	tracing_subscriber::fmt().with_env_filter(filter).with_writer(io::stderr).init();
}
