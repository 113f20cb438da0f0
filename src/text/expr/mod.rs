//! Integer offset expressions.
//!
//! Only integer literals, identifiers, parentheses, unary minus and the
//! binary `+`, `-` and `*` operators are understood. Identifiers are looked up
//! in a [`Symbols`] table, anything else is rejected.

use thiserror::Error;

use crate::text::Positioned;
use crate::text::symbol::Symbols;

mod eval;
pub mod token;
#[cfg(test)]
mod test;

pub use eval::*;
use token::{Token, TokenErrorKind, TokenValue, Tokenizer};

#[derive(Clone, Debug, Eq, PartialEq)]
pub enum Expr<'l>
{
	Constant(i64),
	Identifier(&'l str),
	Negate(Box<Expr<'l>>),
	Add{lhs: Box<Expr<'l>>, rhs: Box<Expr<'l>>},
	Subtract{lhs: Box<Expr<'l>>, rhs: Box<Expr<'l>>},
	Multiply{lhs: Box<Expr<'l>>, rhs: Box<Expr<'l>>},
}

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum ParseErrorKind
{
	#[error(transparent)]
	Token(#[from] TokenErrorKind),
	#[error("empty expression")]
	Empty,
	#[error("unexpected {found}, expected {expect}")]
	Unexpected{found: &'static str, expect: &'static str},
	#[error("unexpected end of expression, expected {expect}")]
	UnexpectedEnd{expect: &'static str},
}

pub type ParseError = Positioned<ParseErrorKind>;

const OPERAND: &str = "number, identifier or '('";

pub struct Parser<'l>
{
	tokens: Tokenizer<'l>,
	peeked: Option<Token<'l>>,
}

impl<'l> Parser<'l>
{
	pub fn new(data: &'l str, line: u32, col: u32) -> Self
	{
		Self{tokens: Tokenizer::new(data, line, col), peeked: None}
	}
	
	/// Parses the whole input as a single expression.
	pub fn parse(mut self) -> Result<Expr<'l>, ParseError>
	{
		if self.peek()?.is_none()
		{
			return Err(self.end_error(ParseErrorKind::Empty));
		}
		let expr = self.parse_sum()?;
		match self.next()?
		{
			None => Ok(expr),
			Some(tok) => Err(tok.map(|v| ParseErrorKind::Unexpected{found: v.desc(), expect: "operator or end of expression"})),
		}
	}
	
	fn end_error(&self, value: ParseErrorKind) -> ParseError
	{
		Positioned{value, line: self.tokens.get_line(), col: self.tokens.get_column()}
	}
	
	fn peek(&mut self) -> Result<Option<&Token<'l>>, ParseError>
	{
		if self.peeked.is_none()
		{
			self.peeked = match self.tokens.next()
			{
				None => None,
				Some(Ok(tok)) => Some(tok),
				Some(Err(e)) => return Err(e.map(ParseErrorKind::Token)),
			};
		}
		Ok(self.peeked.as_ref())
	}
	
	fn next(&mut self) -> Result<Option<Token<'l>>, ParseError>
	{
		self.peek()?;
		Ok(self.peeked.take())
	}
	
	fn parse_sum(&mut self) -> Result<Expr<'l>, ParseError>
	{
		let mut lhs = self.parse_product()?;
		loop
		{
			let op = match self.peek()?
			{
				Some(Positioned{value: op @ (TokenValue::Add | TokenValue::Subtract), ..}) => *op,
				_ => return Ok(lhs),
			};
			self.next()?;
			let rhs = Box::new(self.parse_product()?);
			lhs = match op
			{
				TokenValue::Add => Expr::Add{lhs: Box::new(lhs), rhs},
				_ => Expr::Subtract{lhs: Box::new(lhs), rhs},
			};
		}
	}
	
	fn parse_product(&mut self) -> Result<Expr<'l>, ParseError>
	{
		let mut lhs = self.parse_unary()?;
		while matches!(self.peek()?, Some(Positioned{value: TokenValue::Multiply, ..}))
		{
			self.next()?;
			let rhs = self.parse_unary()?;
			lhs = Expr::Multiply{lhs: Box::new(lhs), rhs: Box::new(rhs)};
		}
		Ok(lhs)
	}
	
	fn parse_unary(&mut self) -> Result<Expr<'l>, ParseError>
	{
		if matches!(self.peek()?, Some(Positioned{value: TokenValue::Subtract, ..}))
		{
			self.next()?;
			return Ok(Expr::Negate(Box::new(self.parse_unary()?)));
		}
		self.parse_operand()
	}
	
	fn parse_operand(&mut self) -> Result<Expr<'l>, ParseError>
	{
		let Some(tok) = self.next()?
		else
		{
			return Err(self.end_error(ParseErrorKind::UnexpectedEnd{expect: OPERAND}));
		};
		match tok.value
		{
			TokenValue::Number(v) => Ok(Expr::Constant(v)),
			TokenValue::Identifier(name) => Ok(Expr::Identifier(name)),
			TokenValue::BeginGroup =>
			{
				let inner = self.parse_sum()?;
				match self.next()?
				{
					Some(Positioned{value: TokenValue::EndGroup, ..}) => Ok(inner),
					Some(tok) => Err(tok.map(|v| ParseErrorKind::Unexpected{found: v.desc(), expect: "')'"})),
					None => Err(self.end_error(ParseErrorKind::UnexpectedEnd{expect: "')'"})),
				}
			},
			v => Err(tok.map(|_| ParseErrorKind::Unexpected{found: v.desc(), expect: OPERAND})),
		}
	}
}

pub fn parse<'l>(data: &'l str, line: u32, col: u32) -> Result<Expr<'l>, ParseError>
{
	Parser::new(data, line, col).parse()
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum ExprError
{
	#[error("could not parse expression")]
	Parse(#[from] ParseError),
	#[error("could not evaluate expression")]
	Eval(#[from] EvalError),
}

/// Parses and evaluates `data` in one step.
pub fn evaluate_str(data: &str, line: u32, col: u32, symbols: &Symbols) -> Result<i64, ExprError>
{
	let expr = parse(data, line, col)?;
	Ok(evaluate(&expr, symbols)?)
}
