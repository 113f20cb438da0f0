//! Turns a parameter definition listing into an editable template.
//!
//! Definition lines look like
//!
//! ```text
//! NV_SI_RO_BOARD_VENDOR = (0 * 8) + NV_BOARD_BASE, /* Default: 0x0000CD3A */
//! ```
//!
//! The text between `=` and the `Default:` marker (up to a comment or a comma)
//! is the offset expression. The token following the marker, if any, is the
//! default value.

use log::{debug, trace, warn};
use thiserror::Error;

use crate::param::{self, ContiguityError, Entry};
use crate::text::expr::{self, ExprError};
use crate::text::line_number;
use crate::text::literal::{self, LiteralError};
use crate::text::symbol::Symbols;

#[cfg(test)]
mod test;

pub const DEFAULT_OUTPUT: &str = "nvparam_template.txt";
pub const DEFAULT_MARKER: &str = "Default:";
pub const HEADER: &str = "\
# Sample board setting
#
# This is a sample board setting generated from the
# NV-parameter definitions.
#
# Name, offset (hex), value
# value can be hex or decimal
#

";

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum TemplateError
{
	#[error("missing '=' in definition of {name} on line {line}")]
	MissingDefinition{name: String, line: u32},
	#[error("bad offset for {name} on line {line}")]
	Offset{name: String, line: u32, #[source] source: ExprError},
	#[error("offset {offset} of {name} on line {line} is out of range")]
	OffsetRange{name: String, line: u32, offset: i64},
	#[error("missing default value for {name} on line {line}")]
	MissingDefault{name: String, line: u32},
	#[error("bad default value for {name} on line {line}")]
	Default{name: String, line: u32, #[source] source: LiteralError},
	#[error(transparent)]
	Contiguity(#[from] ContiguityError),
}

/// Finds where the offset expression stops within a definition.
fn expression_end(definition: &str) -> usize
{
	["/*", "//", ","].iter().filter_map(|stop| definition.find(stop)).min().unwrap_or(definition.len())
}

/// Reads one definition line, resolving symbols in its offset expression
/// through `symbols`. Lines that are not parameter definitions yield `Ok(None)`.
pub fn parse_line(text: &str, line: u32, symbols: &Symbols) -> Result<Option<Entry>, TemplateError>
{
	if !param::qualifies(text)
	{
		return Ok(None);
	}
	let indent = text.len() - text.trim_start().len();
	let text = text.trim_end();
	let Some((name, definition)) = text[indent..].split_once('=')
	else
	{
		let name = text[indent..].split_whitespace().next().unwrap_or_default();
		return Err(TemplateError::MissingDefinition{name: name.to_owned(), line});
	};
	let def_start = indent + name.len() + 1;
	let name = name.trim();
	
	let (expression, default) = match definition.split_once(DEFAULT_MARKER)
	{
		None => (definition, None),
		Some((expression, default)) => (expression, Some(default)),
	};
	let expression = &expression[..expression_end(expression)];
	let col = u32::try_from(def_start + 1).unwrap_or(u32::MAX);
	let offset = expr::evaluate_str(expression, line, col, symbols)
		.map_err(|source| TemplateError::Offset{name: name.to_owned(), line, source})?;
	let offset = u32::try_from(offset).map_err(|_| TemplateError::OffsetRange{name: name.to_owned(), line, offset})?;
	
	let value = match default
	{
		None => 0,
		Some(default) =>
		{
			let Some(token) = default.split_whitespace().next()
			else
			{
				return Err(TemplateError::MissingDefault{name: name.to_owned(), line});
			};
			let token = token.trim_end_matches(['*', '/', ',', ';']);
			literal::parse_u32(token).map_err(|source| TemplateError::Default{name: name.to_owned(), line, source})?
		},
	};
	Ok(Some(Entry{name: name.to_owned(), offset, value, line}))
}

/// Reads every definition in order. Each entry's offset becomes a symbol
/// later expressions can refer to.
pub fn parse_source(text: &str, symbols: &mut Symbols) -> Result<Vec<Entry>, TemplateError>
{
	let mut entries = Vec::new();
	for (idx, curr) in text.lines().enumerate()
	{
		let line = line_number(idx);
		match parse_line(curr, line, symbols)?
		{
			None => trace!("skipping line {line}"),
			Some(entry) =>
			{
				debug!("{entry} (line {line})");
				if symbols.define(entry.name.clone(), entry.offset.into()).is_some()
				{
					warn!("{} redefined on line {line}", entry.name);
				}
				entries.push(entry);
			},
		}
	}
	Ok(entries)
}

pub fn render(entries: &[Entry]) -> String
{
	let mut out = String::from(HEADER);
	for entry in entries
	{
		out.push_str(&entry.to_string());
		out.push('\n');
	}
	out
}

/// Parses, validates and renders a definition listing.
pub fn generate(text: &str, mut symbols: Symbols) -> Result<String, TemplateError>
{
	let entries = parse_source(text, &mut symbols)?;
	param::check_contiguous(&entries)?;
	Ok(render(&entries))
}
