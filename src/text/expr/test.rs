use crate::text::Positioned;
use crate::text::symbol::Symbols;

use super::*;

macro_rules!expect
{
	($symbols:expr, $($text:expr => $want:expr),+ $(,)?) =>
	{
		$(
			match evaluate_str($text, 1, 1, &$symbols)
			{
				Ok(v) => assert_eq!(v, $want, "evaluating {:?}", $text),
				Err(e) => panic!("could not evaluate {:?}: {e:?}", $text),
			}
		)+
	};
}

fn symbols() -> Symbols
{
	[("BASE".to_owned(), 0), ("NV_SI_RO_BOARD_START".to_owned(), 0x100), ("STRIDE".to_owned(), 8)].into_iter().collect()
}

#[test]
fn literals()
{
	expect!
	{
		Symbols::new(),
		"0" => 0,
		"8" => 8,
		"0x10" => 0x10,
		"0X1f" => 0x1F,
		"0b101" => 5,
		"  42  " => 42,
	}
}

#[test]
fn precedence()
{
	expect!
	{
		Symbols::new(),
		"1 + 2 * 3" => 7,
		"(1 + 2) * 3" => 9,
		"10 - 4 - 3" => 3,
		"2 * 3 * 4" => 24,
		"-4 + 12" => 8,
		"-(2 * 4)" => -8,
		"3 * -2" => -6,
		"--5" => 5,
	}
}

#[test]
fn identifiers()
{
	expect!
	{
		symbols(),
		"BASE + 8" => 8,
		"BASE" => 0,
		"(0 * 8) + BASE" => 0,
		"NV_SI_RO_BOARD_START + 3 * STRIDE" => 0x118,
		"STRIDE*STRIDE" => 64,
	}
}

#[test]
fn missing_symbol()
{
	let err = evaluate_str("BASE + 8", 3, 12, &Symbols::new()).unwrap_err();
	assert_eq!(err, ExprError::Eval(EvalError::NoSuchSymbol{name: "BASE".to_owned()}));
}

#[test]
fn overflow()
{
	let err = evaluate_str("0x7FFFFFFFFFFFFFFF + 1", 1, 1, &Symbols::new()).unwrap_err();
	assert!(matches!(err, ExprError::Eval(EvalError::Overflow(OverflowError::Add{rhs: 1, ..}))), "{err:?}");
	let err = evaluate_str("0x4000000000000000 * 2", 1, 1, &Symbols::new()).unwrap_err();
	assert!(matches!(err, ExprError::Eval(EvalError::Overflow(OverflowError::Multiply{..}))), "{err:?}");
}

#[test]
fn syntax()
{
	let err = parse("", 4, 9).unwrap_err();
	assert_eq!(err, Positioned{value: ParseErrorKind::Empty, line: 4, col: 9});
	
	let err = parse("1 +", 1, 1).unwrap_err();
	assert!(matches!(err.value, ParseErrorKind::UnexpectedEnd{..}), "{err:?}");
	
	let err = parse("(1 + 2", 1, 1).unwrap_err();
	assert_eq!(err.value, ParseErrorKind::UnexpectedEnd{expect: "')'"});
	
	let err = parse("1 2", 1, 1).unwrap_err();
	assert_eq!((err.line, err.col), (1, 3));
	assert!(matches!(err.value, ParseErrorKind::Unexpected{found: "number", ..}), "{err:?}");
	
	let err = parse("BASE / 2", 2, 20).unwrap_err();
	assert_eq!(err, Positioned{value: ParseErrorKind::Token(token::TokenErrorKind::Unexpected('/')), line: 2, col: 25});
	
	let err = parse("8U", 1, 1).unwrap_err();
	assert_eq!(err.value, ParseErrorKind::Token(token::TokenErrorKind::BadNumber));
}

#[test]
fn no_code_evaluation()
{
	// anything outside the arithmetic grammar is refused rather than executed
	for text in ["__import__('os')", "BASE; 1", "1 if 1 else 0", "BASE.x", "[1]"]
	{
		assert!(evaluate_str(text, 1, 1, &symbols()).is_err(), "{text:?} was accepted");
	}
}

#[test]
fn tree()
{
	let expr = parse("BASE + 2 * 4", 1, 1).unwrap();
	assert_eq!(expr, Expr::Add
	{
		lhs: Box::new(Expr::Identifier("BASE")),
		rhs: Box::new(Expr::Multiply{lhs: Box::new(Expr::Constant(2)), rhs: Box::new(Expr::Constant(4))}),
	});
}
