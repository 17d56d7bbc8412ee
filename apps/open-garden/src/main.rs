use clap::Parser;

fn main() -> color_eyre::Result<()> {
	color_eyre::install()?;
	let args = open_garden::Args::parse();
	open_garden::run(args)
}
