use core::fmt;

use thiserror::Error;

/// Marks a read-only, statically indexed parameter. Lines starting with anything
/// else are not parameter declarations.
pub const PREFIX: &str = "NV_SI_RO_";
/// Distance between two consecutive records.
pub const STRIDE: u32 = 8;

#[derive(Clone, Debug, Eq, PartialEq)]
pub struct Entry
{
	pub name: String,
	pub offset: u32,
	pub value: u32,
	/// Source line the entry was read from.
	pub line: u32,
}

/// Formats the entry as a template line.
impl fmt::Display for Entry
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "{}, 0x{:04X}, 0x{:08X}", self.name, self.offset, self.value)
	}
}

pub fn qualifies(line: &str) -> bool
{
	line.trim_start().starts_with(PREFIX)
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("invalid row parameter {name} on line {line} (offset {have:#06X}, expected {expect:#06X})")]
pub struct ContiguityError
{
	pub name: String,
	pub line: u32,
	pub expect: u64,
	pub have: u32,
}

/// Checks that offsets start at zero and advance by exactly [`STRIDE`].
pub fn check_contiguous(entries: &[Entry]) -> Result<(), ContiguityError>
{
	let mut expect = 0u64;
	for entry in entries
	{
		if u64::from(entry.offset) != expect
		{
			return Err(ContiguityError{name: entry.name.clone(), line: entry.line, expect, have: entry.offset});
		}
		expect += u64::from(STRIDE);
	}
	Ok(())
}
