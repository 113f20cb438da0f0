use core::fmt;
use std::error::Error;

pub mod expr;
pub mod literal;
pub mod symbol;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub struct Positioned<T>
{
	pub value: T,
	pub line: u32,
	pub col: u32,
}

impl<T> Positioned<T>
{
	pub fn map<U, F: FnOnce(T) -> U>(self, f: F) -> Positioned<U>
	{
		Positioned{value: f(self.value), line: self.line, col: self.col}
	}
}

impl<T: fmt::Display> fmt::Display for Positioned<T>
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		write!(f, "{} ({}:{})", self.value, self.line, self.col)
	}
}

impl<T: Error> Error for Positioned<T>
{
	fn source(&self) -> Option<&(dyn Error + 'static)>
	{
		self.value.source()
	}
}

/// Converts a zero-based line index from `str::lines` into a line number.
pub fn line_number(index: usize) -> u32
{
	u32::try_from(index).map_or(u32::MAX, |v| v.saturating_add(1))
}
