//! File level entry points for both generator modes.
//!
//! Inputs are read whole and outputs are built in memory, so nothing is
//! written unless the input parsed and validated.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

use log::{info, warn};
use thiserror::Error;

use crate::config::{GenerateConfig, Mode};
use crate::image::{self, ImageError};
use crate::template::{self, TemplateError};

#[derive(Debug, Error)]
pub enum GenerateError
{
	#[error("could not read {}", .path.display())]
	Read{path: PathBuf, #[source] source: io::Error},
	#[error("could not write {}", .path.display())]
	Write{path: PathBuf, #[source] source: io::Error},
	#[error("template generation failed")]
	Template(#[from] TemplateError),
	#[error("image generation failed")]
	Image(#[from] ImageError),
}

/// Runs the generator selected by `config` and returns the written files.
pub fn run(config: &GenerateConfig) -> Result<Vec<PathBuf>, GenerateError>
{
	match config.mode
	{
		Mode::Template => generate_template(config),
		Mode::Binary => generate_images(config),
	}
}

pub fn generate_template(config: &GenerateConfig) -> Result<Vec<PathBuf>, GenerateError>
{
	info!("Generate NV-parameter template...");
	let source = read(&config.input)?;
	let text = template::generate(&source, config.symbols.clone())?;
	write_outputs(&[(config.output.as_path(), text.as_bytes())])?;
	Ok(vec![config.output.clone()])
}

pub fn generate_images(config: &GenerateConfig) -> Result<Vec<PathBuf>, GenerateError>
{
	info!("Generate NV-parameter image...");
	let source = read(&config.input)?;
	let images = image::generate(&source)?;
	let padded = config.padded_output();
	if images.padded.len() > image::IMAGE_LEN
	{
		warn!("{} parameter(s) do not fit in {} bytes, padded image gets no filler", images.entries.len(), image::IMAGE_LEN);
	}
	write_outputs(&[(config.output.as_path(), images.plain.as_slice()), (padded.as_path(), images.padded.as_slice())])?;
	Ok(vec![config.output.clone(), padded])
}

fn read(path: &Path) -> Result<String, GenerateError>
{
	fs::read_to_string(path).map_err(|source| GenerateError::Read{path: path.to_owned(), source})
}

/// Writes every output or none of them.
fn write_outputs(outputs: &[(&Path, &[u8])]) -> Result<(), GenerateError>
{
	for (pos, &(path, data)) in outputs.iter().enumerate()
	{
		if let Err(source) = fs::write(path, data)
		{
			for &(written, _) in &outputs[..=pos]
			{
				if let Err(e) = fs::remove_file(written)
				{
					if e.kind() != io::ErrorKind::NotFound {warn!("could not remove {}: {e}", written.display());}
				}
			}
			return Err(GenerateError::Write{path: path.to_owned(), source});
		}
	}
	Ok(())
}
