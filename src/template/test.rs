use super::*;
use crate::text::expr::{EvalError, ParseErrorKind};

fn base() -> Symbols
{
	[("BASE".to_owned(), 0)].into_iter().collect()
}

#[test]
fn default_marker()
{
	let entry = parse_line("NV_SI_RO_FOO = BASE + 8 Default: 0x10", 1, &base()).unwrap().unwrap();
	assert_eq!(entry, Entry{name: "NV_SI_RO_FOO".to_owned(), offset: 8, value: 0x10, line: 1});
	assert_eq!(entry.to_string(), "NV_SI_RO_FOO, 0x0008, 0x00000010");
}

#[test]
fn header_style()
{
	let symbols: Symbols = [("NV_BOARD_BASE".to_owned(), 0)].into_iter().collect();
	let entry = parse_line("  NV_SI_RO_BOARD_VENDOR = (2 * 8) + NV_BOARD_BASE, /* Default: 0x0000CD3A */", 12, &symbols).unwrap().unwrap();
	assert_eq!((entry.name.as_str(), entry.offset, entry.value), ("NV_SI_RO_BOARD_VENDOR", 16, 0xCD3A));
	let entry = parse_line("NV_SI_RO_X = 24, // Default: 42", 1, &symbols).unwrap().unwrap();
	assert_eq!((entry.offset, entry.value), (24, 42));
	let entry = parse_line("NV_SI_RO_Y = 24, /* Default: 0x5*/", 1, &symbols).unwrap().unwrap();
	assert_eq!(entry.value, 5);
}

#[test]
fn no_default()
{
	let entry = parse_line("NV_SI_RO_BAR = 0x20,", 1, &Symbols::new()).unwrap().unwrap();
	assert_eq!((entry.offset, entry.value), (0x20, 0));
	let entry = parse_line("NV_SI_RO_BAR = BASE + 16 /* no default */", 1, &base()).unwrap().unwrap();
	assert_eq!((entry.offset, entry.value), (16, 0));
}

#[test]
fn other_prefix()
{
	for text in
	[
		"NV_SI_RW_FOO = BASE + 8 Default: 0x10",
		"NV_PMPRO_REGION = BASE + UNKNOWN * 2",
		"#define NV_SI_RO_FOO 8",
		"typedef enum {",
		"",
	]
	{
		assert_eq!(parse_line(text, 1, &Symbols::new()), Ok(None), "{text:?}");
	}
}

#[test]
fn errors()
{
	let err = parse_line("NV_SI_RO_FOO BASE + 8", 3, &base()).unwrap_err();
	assert_eq!(err, TemplateError::MissingDefinition{name: "NV_SI_RO_FOO".to_owned(), line: 3});
	
	let err = parse_line("NV_SI_RO_FOO = BASE + 8", 3, &Symbols::new()).unwrap_err();
	let TemplateError::Offset{name, line, source} = err else {panic!("unexpected {err:?}")};
	assert_eq!((name.as_str(), line), ("NV_SI_RO_FOO", 3));
	assert_eq!(source, ExprError::Eval(EvalError::NoSuchSymbol{name: "BASE".to_owned()}));
	
	let err = parse_line("NV_SI_RO_FOO = BASE / 8", 5, &base()).unwrap_err();
	let TemplateError::Offset{source: ExprError::Parse(err), ..} = err else {panic!("unexpected {err:?}")};
	assert_eq!((err.line, err.col), (5, 21));
	assert!(matches!(err.value, ParseErrorKind::Token(..)));
	
	let err = parse_line("NV_SI_RO_FOO = BASE - 8", 1, &base()).unwrap_err();
	assert_eq!(err, TemplateError::OffsetRange{name: "NV_SI_RO_FOO".to_owned(), line: 1, offset: -8});
	
	let err = parse_line("NV_SI_RO_FOO = 0 Default: Disabled", 1, &base()).unwrap_err();
	assert!(matches!(err, TemplateError::Default{ref source, ..} if source.token == "Disabled"), "{err:?}");
	
	let err = parse_line("NV_SI_RO_FOO = 0 Default:", 1, &base()).unwrap_err();
	assert!(matches!(err, TemplateError::MissingDefault{line: 1, ..}), "{err:?}");
}

#[test]
fn incremental_symbols()
{
	let source = "\
typedef enum {
	NV_SI_RO_FIRST = BASE, /* Default: 1 */
	NV_SI_RO_SECOND = NV_SI_RO_FIRST + 8, /* Default: 0x2 */
	NV_SI_RO_THIRD = NV_SI_RO_SECOND + 8,
} NVPARAM;
";
	let mut symbols = base();
	let entries = parse_source(source, &mut symbols).unwrap();
	assert_eq!(entries.iter().map(|e| (e.offset, e.value, e.line)).collect::<Vec<_>>(), vec![(0, 1, 2), (8, 2, 3), (16, 0, 4)]);
	assert_eq!(symbols.get("NV_SI_RO_THIRD").value(), Some(16));
	assert_eq!(symbols.len(), 4);
}

#[test]
fn render_template()
{
	let source = "NV_SI_RO_ZERO = BASE Default: 0xFFFFFFFF\nNV_SI_RW_SKIP = 4\nNV_SI_RO_FOO = BASE + 8 Default: 0x10\n";
	let text = generate(source, base()).unwrap();
	assert!(text.starts_with(HEADER));
	assert_eq!(&text[HEADER.len()..], "NV_SI_RO_ZERO, 0x0000, 0xFFFFFFFF\nNV_SI_RO_FOO, 0x0008, 0x00000010\n");
	// every template line reads back as an image line
	let entries = crate::image::parse_template(&text).unwrap();
	assert_eq!(entries.iter().map(|e| (e.offset, e.value)).collect::<Vec<_>>(), vec![(0, 0xFFFFFFFF), (8, 0x10)]);
}

#[test]
fn gap()
{
	let source = "NV_SI_RO_A = 0\nNV_SI_RO_B = 8\nNV_SI_RO_C = 24\n";
	let err = generate(source, Symbols::new()).unwrap_err();
	let TemplateError::Contiguity(err) = err else {panic!("unexpected {err:?}")};
	assert_eq!((err.name.as_str(), err.line), ("NV_SI_RO_C", 3));
}
