use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use nvparam::config::{self, GenerateConfig, Mode};
use nvparam::generate;
use nvparam::logging;
use nvparam::text::symbol::Symbols;

/// Generates a board NV-parameter template or the firmware images built from one.
#[derive(Parser)]
#[command(version)]
struct Cli
{
	/// Generate a template from a parameter definition listing
	#[arg(short, long)]
	template: bool,
	/// Input file name
	#[arg(short, long)]
	filename: PathBuf,
	/// Output file name
	#[arg(short, long)]
	output: Option<PathBuf>,
	/// Define a symbol for template offset expressions (NAME=VALUE)
	#[arg(short = 'D', long = "define", value_name = "NAME=VALUE", value_parser = config::parse_define)]
	defines: Vec<(String, i64)>,
	/// Increase log verbosity
	#[arg(short, long, action = clap::ArgAction::Count)]
	verbose: u8,
}

fn print_err(err: &anyhow::Error)
{
	eprintln!("Error: {err}");
	for src in err.chain().skip(1)
	{
		eprintln!("\tsource: {src}");
	}
}

fn run(cli: Cli) -> anyhow::Result<()>
{
	let mode = if cli.template {Mode::Template} else {Mode::Binary};
	let symbols: Symbols = cli.defines.into_iter().collect();
	let config = GenerateConfig::new(mode, cli.filename, cli.output).with_symbols(symbols);
	let written = generate::run(&config).with_context(|| format!("could not process {}", config.input.display()))?;
	for path in written
	{
		println!("{}", path.display());
	}
	Ok(())
}

pub fn main() -> ExitCode
{
	let cli = Cli::parse();
	logging::init(cli.verbose);
	log::info!("NV-parameter generator v{}", env!("CARGO_PKG_VERSION"));
	match run(cli)
	{
		Ok(()) => ExitCode::SUCCESS,
		Err(e) =>
		{
			print_err(&e);
			ExitCode::FAILURE
		},
	}
}
