use core::num::ParseIntError;

use thiserror::Error;

#[derive(Clone, Debug, Eq, PartialEq, Error)]
#[error("malformed integer literal {token:?}")]
pub struct LiteralError
{
	pub token: String,
	#[source]
	pub source: ParseIntError,
}

/// Parses a decimal or `0x`-prefixed hexadecimal token into a 32-bit value.
pub fn parse_u32(token: &str) -> Result<u32, LiteralError>
{
	// unsigned targets never accept a sign
	let parsed = if token.starts_with('-') {token.parse::<u32>()} else {parse_int::parse::<u32>(token)};
	parsed.map_err(|source| LiteralError{token: token.to_owned(), source})
}

pub fn parse_i64(token: &str) -> Result<i64, LiteralError>
{
	parse_int::parse::<i64>(token).map_err(|source| LiteralError{token: token.to_owned(), source})
}
