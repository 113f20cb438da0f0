use core::num::ParseIntError;
use std::path::{Path, PathBuf};

use thiserror::Error;

use crate::template;
use crate::text::symbol::Symbols;

pub const BIN_SUFFIX: &str = ".bin";
pub const PADDED_SUFFIX: &str = ".padded";

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Mode
{
	/// Definition listing to editable template.
	Template,
	/// Template to binary images.
	Binary,
}

/// Everything one generator run needs, resolved once from the command line.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct GenerateConfig
{
	pub mode: Mode,
	pub input: PathBuf,
	pub output: PathBuf,
	/// Symbols offset expressions may use before any entry is defined.
	pub symbols: Symbols,
}

impl GenerateConfig
{
	pub fn new(mode: Mode, input: PathBuf, output: Option<PathBuf>) -> Self
	{
		let output = match output
		{
			Some(path) => path,
			None => match mode
			{
				Mode::Template => PathBuf::from(template::DEFAULT_OUTPUT),
				Mode::Binary => with_suffix(&input, BIN_SUFFIX),
			},
		};
		Self{mode, input, output, symbols: Symbols::new()}
	}
	
	pub fn with_symbols(mut self, symbols: Symbols) -> Self
	{
		self.symbols = symbols;
		self
	}
	
	/// Path of the image padded to the full parameter area.
	pub fn padded_output(&self) -> PathBuf
	{
		with_suffix(&self.output, PADDED_SUFFIX)
	}
	
	/// All files a successful run writes.
	pub fn outputs(&self) -> Vec<PathBuf>
	{
		match self.mode
		{
			Mode::Template => vec![self.output.clone()],
			Mode::Binary => vec![self.output.clone(), self.padded_output()],
		}
	}
}

fn with_suffix(path: &Path, suffix: &str) -> PathBuf
{
	let mut name = path.as_os_str().to_owned();
	name.push(suffix);
	PathBuf::from(name)
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DefineError
{
	#[error("expected NAME=VALUE, got {0:?}")]
	Shape(String),
	#[error("invalid symbol name {0:?}")]
	Name(String),
	#[error("invalid value for {name}")]
	Value{name: String, #[source] source: ParseIntError},
}

/// Parses a `NAME=VALUE` symbol definition, the value being decimal or `0x` hex.
pub fn parse_define(text: &str) -> Result<(String, i64), DefineError>
{
	let Some((name, value)) = text.split_once('=')
	else
	{
		return Err(DefineError::Shape(text.to_owned()));
	};
	let name = name.trim();
	let mut chars = name.chars();
	let valid = matches!(chars.next(), Some('A'..='Z' | 'a'..='z' | '_')) && chars.all(|c| c.is_ascii_alphanumeric() || c == '_');
	if !valid
	{
		return Err(DefineError::Name(name.to_owned()));
	}
	let value = parse_int::parse::<i64>(value.trim()).map_err(|source| DefineError::Value{name: name.to_owned(), source})?;
	Ok((name.to_owned(), value))
}
