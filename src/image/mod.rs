use log::{debug, info, trace};
use thiserror::Error;

use crate::param::{self, ContiguityError, Entry, STRIDE};
use crate::record::{self, FILLER, RECORD_LEN};
use crate::text::line_number;
use crate::text::literal::{self, LiteralError};


/// Size of the flash area reserved for NV-parameters.
pub const IMAGE_LEN: usize = 64 * 1024;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum Padding
{
	None,
	/// Fill with erased records up to [`IMAGE_LEN`].
	Full,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ParseError
{
	#[error("expected name, offset and value on line {line}, found {count} field(s)")]
	Fields{line: u32, count: usize},
	#[error("bad number on line {line}")]
	Literal{line: u32, #[source] source: LiteralError},
}

/// Reads one `name, offset, value` line. Lines that are not parameter
/// declarations yield `Ok(None)`.
pub fn parse_line(text: &str, line: u32) -> Result<Option<Entry>, ParseError>
{
	let text = text.trim();
	if !param::qualifies(text)
	{
		return Ok(None);
	}
	let fields: Vec<&str> = text.split(',').map(str::trim).collect();
	let &[name, offset, value] = fields.as_slice()
	else
	{
		return Err(ParseError::Fields{line, count: fields.len()});
	};
	let offset = literal::parse_u32(offset).map_err(|source| ParseError::Literal{line, source})?;
	let value = literal::parse_u32(value).map_err(|source| ParseError::Literal{line, source})?;
	Ok(Some(Entry{name: name.to_owned(), offset, value, line}))
}

pub fn parse_template(text: &str) -> Result<Vec<Entry>, ParseError>
{
	let mut entries = Vec::new();
	for (idx, curr) in text.lines().enumerate()
	{
		let line = line_number(idx);
		match parse_line(curr, line)?
		{
			None => trace!("skipping line {line}"),
			Some(entry) =>
			{
				debug!("{entry} (line {line})");
				entries.push(entry);
			},
		}
	}
	Ok(entries)
}

/// Appends erased records until the image fills [`IMAGE_LEN`]. Images already at
/// or above that size are left untouched.
pub fn pad(image: &mut Vec<u8>)
{
	while image.len() < IMAGE_LEN
	{
		image.extend_from_slice(&FILLER);
	}
}

/// Serializes already validated entries in order.
pub fn build(entries: &[Entry], padding: Padding) -> Vec<u8>
{
	let len = entries.len() * RECORD_LEN;
	let mut image = Vec::with_capacity(if padding == Padding::Full {len.max(IMAGE_LEN)} else {len});
	for entry in entries
	{
		image.extend_from_slice(&record::encode(entry));
	}
	if padding == Padding::Full
	{
		pad(&mut image);
	}
	image
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ImageError
{
	#[error("could not parse template")]
	Parse(#[from] ParseError),
	#[error(transparent)]
	Contiguity(#[from] ContiguityError),
}

/// Both images built from one parsed entry set.
#[derive(Clone, Debug)]
pub struct Images
{
	pub entries: Vec<Entry>,
	pub plain: Vec<u8>,
	pub padded: Vec<u8>,
}

pub fn generate(text: &str) -> Result<Images, ImageError>
{
	let entries = parse_template(text)?;
	param::check_contiguous(&entries)?;
	info!("{} parameter(s), {} byte(s) unpadded", entries.len(), entries.len() * RECORD_LEN);
	let plain = build(&entries, Padding::None);
	let padded = build(&entries, Padding::Full);
	Ok(Images{entries, plain, padded})
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum DumpError
{
	#[error("image length {len} is not a multiple of {}", RECORD_LEN)]
	Truncated{len: usize},
	#[error("malformed record {index} (offset {:#06X})", .index * RECORD_LEN)]
	Record{index: usize, #[source] source: record::DecodeError},
	#[error("record {index} follows padding")]
	AfterPadding{index: usize},
}

/// Contents of a decoded image.
#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Dump
{
	pub values: Vec<u32>,
	/// Number of trailing padding records.
	pub filler: usize,
}

impl Dump
{
	/// Yields `(offset, value)` for each parameter record.
	pub fn iter(&self) -> impl Iterator<Item = (u64, u32)> + '_
	{
		self.values.iter().enumerate().map(|(i, &v)| (i as u64 * u64::from(STRIDE), v))
	}
}

pub fn decode(image: &[u8]) -> Result<Dump, DumpError>
{
	if image.len() % RECORD_LEN != 0
	{
		return Err(DumpError::Truncated{len: image.len()});
	}
	let mut values = Vec::with_capacity(image.len() / RECORD_LEN);
	let mut filler = 0;
	for (index, chunk) in image.chunks_exact(RECORD_LEN).enumerate()
	{
		let data: &[u8; RECORD_LEN] = chunk.try_into().map_err(|_| DumpError::Truncated{len: image.len()})?;
		if record::is_filler(data)
		{
			filler += 1;
			continue;
		}
		if filler > 0
		{
			return Err(DumpError::AfterPadding{index});
		}
		values.push(record::decode(data).map_err(|source| DumpError::Record{index, source})?);
	}
	Ok(Dump{values, filler})
}
