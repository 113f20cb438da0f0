use thiserror::Error;

use crate::text::expr::Expr;
use crate::text::symbol::{Lookup, Symbols};

#[derive(Clone, Copy, Debug, Eq, PartialEq, Error)]
pub enum OverflowError
{
	#[error("overflow in {lhs} plus {rhs}")]
	Add{lhs: i64, rhs: i64},
	#[error("overflow in {lhs} minus {rhs}")]
	Subtract{lhs: i64, rhs: i64},
	#[error("overflow in {lhs} times {rhs}")]
	Multiply{lhs: i64, rhs: i64},
	// only `i64::MIN` overflows negation
	#[error("overflow in negative {}", i64::MIN)]
	Negate,
}

#[derive(Clone, Debug, Eq, PartialEq, Error)]
pub enum EvalError
{
	#[error("no such symbol {name:?}")]
	NoSuchSymbol{name: String},
	#[error("arithmetic overflow")]
	Overflow(#[source] OverflowError),
}

impl From<OverflowError> for EvalError
{
	fn from(value: OverflowError) -> Self
	{
		Self::Overflow(value)
	}
}

pub fn evaluate(expr: &Expr<'_>, symbols: &Symbols) -> Result<i64, EvalError>
{
	match expr
	{
		&Expr::Constant(v) => Ok(v),
		&Expr::Identifier(name) =>
		{
			match symbols.get(name)
			{
				Lookup::Found(v) => Ok(v),
				Lookup::NotFound => Err(EvalError::NoSuchSymbol{name: name.to_owned()}),
			}
		},
		Expr::Negate(inner) =>
		{
			let v = evaluate(inner, symbols)?;
			Ok(v.checked_neg().ok_or(OverflowError::Negate)?)
		},
		Expr::Add{lhs, rhs} | Expr::Subtract{lhs, rhs} | Expr::Multiply{lhs, rhs} =>
		{
			let lhs = evaluate(lhs, symbols)?;
			let rhs = evaluate(rhs, symbols)?;
			let result = match expr
			{
				Expr::Add{..} => lhs.checked_add(rhs).ok_or(OverflowError::Add{lhs, rhs}),
				Expr::Subtract{..} => lhs.checked_sub(rhs).ok_or(OverflowError::Subtract{lhs, rhs}),
				_ => lhs.checked_mul(rhs).ok_or(OverflowError::Multiply{lhs, rhs}),
			};
			Ok(result?)
		},
	}
}
