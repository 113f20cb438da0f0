use std::fs;
use std::path::PathBuf;
use std::process::ExitCode;

use anyhow::Context;
use clap::Parser;

use nvparam::image;
use nvparam::logging;

/// Decodes an NV-parameter image and verifies every record.
#[derive(Parser)]
#[command(version)]
struct Cli
{
	/// Image file to decode
	image: PathBuf,
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
	let data = fs::read(&cli.image).with_context(|| format!("could not read {}", cli.image.display()))?;
	let dump = image::decode(&data).with_context(|| format!("could not decode {}", cli.image.display()))?;
	for (index, (offset, value)) in dump.iter().enumerate()
	{
		println!("#{index}, 0x{offset:04X}, 0x{value:08X}");
	}
	println!("# {} parameter(s), {} padding record(s), {} byte(s)", dump.values.len(), dump.filler, data.len());
	Ok(())
}

pub fn main() -> ExitCode
{
	let cli = Cli::parse();
	logging::init(cli.verbose);
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
