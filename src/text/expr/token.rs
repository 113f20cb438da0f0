use core::fmt;

use thiserror::Error;

use crate::text::Positioned;

pub type Token<'l> = Positioned<TokenValue<'l>>;

#[derive(Clone, Copy, Debug, Eq, PartialEq)]
pub enum TokenValue<'l>
{
	Add, Subtract, Multiply,
	BeginGroup, EndGroup,
	Number(i64),
	Identifier(&'l str),
}

impl<'l> TokenValue<'l>
{
	pub fn desc(&self) -> &'static str
	{
		match self
		{
			TokenValue::Add => "'+'",
			TokenValue::Subtract => "'-'",
			TokenValue::Multiply => "'*'",
			TokenValue::BeginGroup => "'('",
			TokenValue::EndGroup => "')'",
			TokenValue::Number(..) => "number",
			TokenValue::Identifier(..) => "identifier",
		}
	}
}

impl<'l> fmt::Display for TokenValue<'l>
{
	fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result
	{
		f.write_str(self.desc())
	}
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum TokenErrorKind
{
	#[error("unexpected character {0:?}")]
	Unexpected(char),
	#[error("malformed number")]
	BadNumber,
}

pub type TokenError = Positioned<TokenErrorKind>;

/// Splits an offset expression into tokens, tracking the column of each one.
#[derive(Clone, Debug)]
pub struct Tokenizer<'l>
{
	data: &'l str,
	pos: usize,
	line: u32,
	col: u32,
}

impl<'l> Tokenizer<'l>
{
	pub fn new(data: &'l str, line: u32, col: u32) -> Self
	{
		Self{data, pos: 0, line, col}
	}
	
	pub fn get_line(&self) -> u32
	{
		self.line
	}
	
	pub fn get_column(&self) -> u32
	{
		self.col
	}
	
	pub fn clear(&mut self)
	{
		self.pos = self.data.len();
	}
	
	fn positioned<T>(&self, value: T, col: u32) -> Positioned<T>
	{
		Positioned{value, line: self.line, col}
	}
	
	fn peek_char(&self) -> Option<char>
	{
		self.data[self.pos..].chars().next()
	}
	
	fn advance(&mut self, c: char)
	{
		self.pos += c.len_utf8();
		self.col = self.col.saturating_add(1);
	}
	
	fn take_while<F: Fn(char) -> bool>(&mut self, accept: F) -> &'l str
	{
		let start = self.pos;
		while let Some(c) = self.peek_char()
		{
			if !accept(c) {break;}
			self.advance(c);
		}
		&self.data[start..self.pos]
	}
	
	fn next_token(&mut self) -> Option<Result<Token<'l>, TokenError>>
	{
		self.take_while(char::is_whitespace);
		let c = self.peek_char()?;
		let col = self.col;
		let single = match c
		{
			'+' => Some(TokenValue::Add),
			'-' => Some(TokenValue::Subtract),
			'*' => Some(TokenValue::Multiply),
			'(' => Some(TokenValue::BeginGroup),
			')' => Some(TokenValue::EndGroup),
			_ => None,
		};
		if let Some(value) = single
		{
			self.advance(c);
			return Some(Ok(self.positioned(value, col)));
		}
		match c
		{
			'0'..='9' =>
			{
				let text = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
				let (radix, digits) = if let Some(hex) = text.strip_prefix("0x").or_else(|| text.strip_prefix("0X")) {(16, hex)}
					else if let Some(bin) = text.strip_prefix("0b").or_else(|| text.strip_prefix("0B")) {(2, bin)}
					else {(10, text)};
				match i64::from_str_radix(digits, radix)
				{
					Ok(v) => Some(Ok(self.positioned(TokenValue::Number(v), col))),
					Err(..) =>
					{
						self.clear();
						Some(Err(self.positioned(TokenErrorKind::BadNumber, col)))
					},
				}
			},
			'A'..='Z' | '_' | 'a'..='z' =>
			{
				let name = self.take_while(|c| c.is_ascii_alphanumeric() || c == '_');
				Some(Ok(self.positioned(TokenValue::Identifier(name), col)))
			},
			c =>
			{
				self.clear();
				Some(Err(self.positioned(TokenErrorKind::Unexpected(c), col)))
			},
		}
	}
}

impl<'l> Iterator for Tokenizer<'l>
{
	type Item = Result<Token<'l>, TokenError>;
	
	fn next(&mut self) -> Option<Self::Item>
	{
		self.next_token()
	}
}
