//! Line-oriented reference converter.
//!
//! One statement per line: `print(expr)`, `name = expr`, or a `#` comment
//! carried through verbatim. Expressions are single-quoted strings, numbers,
//! `True`/`False`, or variable references. Anything else is a structured
//! parse failure, which is what makes the controller's fallback path
//! exercisable without a real structural converter behind the seam.

use tandem_document::{RAW_BLOCK_KIND, RAW_TEXT_FIELD, VisualDocument, VisualNode};

use crate::{ConvertError, ProgramConverter};

const KIND_PRINT: &str = "text_print";
const KIND_ASSIGN: &str = "variables_set";
const KIND_VAR_GET: &str = "variables_get";
const KIND_STRING: &str = "text";
const KIND_NUMBER: &str = "math_number";
const KIND_BOOL: &str = "logic_boolean";

const FIELD_VAR: &str = "VAR";
const FIELD_TEXT: &str = "TEXT";
const FIELD_NUM: &str = "NUM";
const FIELD_BOOL: &str = "BOOL";

/// Reference [`ProgramConverter`] over the line-statement mini language.
#[derive(Debug, Clone, Copy, Default)]
pub struct LineScriptConverter;

impl ProgramConverter for LineScriptConverter {
	fn text_to_visual(&self, text: &str) -> Result<VisualDocument, ConvertError> {
		let mut doc = VisualDocument::new();
		for (idx, raw) in text.lines().enumerate() {
			let line = raw.trim();
			if line.is_empty() {
				continue;
			}
			doc.push_root(parse_statement(line, idx + 1)?);
		}
		Ok(doc)
	}

	fn visual_to_text(&self, doc: &VisualDocument) -> String {
		let mut out = String::new();
		for node in doc.roots() {
			if let Some(line) = render_statement(node) {
				out.push_str(&line);
				out.push('\n');
			}
		}
		out
	}
}

fn parse_statement(line: &str, line_no: usize) -> Result<VisualNode, ConvertError> {
	if line.starts_with('#') {
		return Ok(VisualNode::new(RAW_BLOCK_KIND).with_field(RAW_TEXT_FIELD, line));
	}

	if let Some(inner) = line.strip_prefix("print(").and_then(|rest| rest.strip_suffix(')')) {
		let inner = inner.trim();
		if inner.is_empty() {
			return Err(ConvertError::parse(line_no, "print requires an argument"));
		}
		return Ok(VisualNode::new(KIND_PRINT).with_child(parse_expression(inner, line_no)?));
	}

	if let Some((lhs, rhs)) = line.split_once('=') {
		// `==` is a comparison, not an assignment.
		if !rhs.starts_with('=') {
			let name = lhs.trim();
			if !is_identifier(name) {
				return Err(ConvertError::parse(
					line_no,
					format!("assignment target `{name}` is not an identifier"),
				));
			}
			let value = parse_expression(rhs.trim(), line_no)?;
			return Ok(VisualNode::new(KIND_ASSIGN)
				.with_field(FIELD_VAR, name)
				.with_child(value));
		}
	}

	Err(ConvertError::parse(
		line_no,
		format!("unrecognized statement `{line}`"),
	))
}

fn parse_expression(src: &str, line_no: usize) -> Result<VisualNode, ConvertError> {
	if let Some(quote) = src.chars().next().filter(|c| matches!(c, '\'' | '"')) {
		let rest = &src[1..];
		return match rest.find(quote) {
			Some(end) if end == rest.len() - 1 => {
				Ok(VisualNode::new(KIND_STRING).with_field(FIELD_TEXT, &rest[..end]))
			}
			Some(_) => Err(ConvertError::parse(
				line_no,
				"trailing input after string literal",
			)),
			None => Err(ConvertError::parse(line_no, "unterminated string literal")),
		};
	}

	if src == "True" || src == "False" {
		let value = if src == "True" { "TRUE" } else { "FALSE" };
		return Ok(VisualNode::new(KIND_BOOL).with_field(FIELD_BOOL, value));
	}

	// Keep the author's spelling so round trips do not reformat numbers.
	if src.parse::<f64>().is_ok() {
		return Ok(VisualNode::new(KIND_NUMBER).with_field(FIELD_NUM, src));
	}

	if is_identifier(src) {
		return Ok(VisualNode::new(KIND_VAR_GET).with_field(FIELD_VAR, src));
	}

	Err(ConvertError::parse(
		line_no,
		format!("unrecognized expression `{src}`"),
	))
}

fn is_identifier(s: &str) -> bool {
	let mut chars = s.chars();
	chars.next().is_some_and(|c| c.is_ascii_alphabetic() || c == '_')
		&& chars.all(|c| c.is_ascii_alphanumeric() || c == '_')
}

fn render_statement(node: &VisualNode) -> Option<String> {
	match node.kind() {
		RAW_BLOCK_KIND => Some(node.field(RAW_TEXT_FIELD).unwrap_or_default().to_string()),
		KIND_PRINT => {
			let arg = node.children().first().map_or_else(|| "0".to_string(), render_expression);
			Some(format!("print({arg})"))
		}
		KIND_ASSIGN => {
			let var = node.field(FIELD_VAR)?;
			let value = node.children().first().map_or_else(|| "0".to_string(), render_expression);
			Some(format!("{var} = {value}"))
		}
		other => {
			tracing::debug!(kind = other, "convert.render.skipped_kind");
			None
		}
	}
}

fn render_expression(node: &VisualNode) -> String {
	match node.kind() {
		KIND_STRING => format!("'{}'", node.field(FIELD_TEXT).unwrap_or_default()),
		KIND_NUMBER => node.field(FIELD_NUM).unwrap_or("0").to_string(),
		KIND_BOOL => {
			if node.field(FIELD_BOOL) == Some("TRUE") {
				"True".to_string()
			} else {
				"False".to_string()
			}
		}
		KIND_VAR_GET => node.field(FIELD_VAR).unwrap_or("_").to_string(),
		other => {
			tracing::debug!(kind = other, "convert.render.unknown_expression");
			"0".to_string()
		}
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn parse(text: &str) -> VisualDocument {
		LineScriptConverter.text_to_visual(text).expect("parseable program")
	}

	#[test]
	fn test_parse_print_string() {
		let doc = parse("print('hello world')");
		assert_eq!(doc.roots().len(), 1);
		let stmt = &doc.roots()[0];
		assert_eq!(stmt.kind(), KIND_PRINT);
		assert_eq!(stmt.children()[0].kind(), KIND_STRING);
		assert_eq!(stmt.children()[0].field(FIELD_TEXT), Some("hello world"));
	}

	#[test]
	fn test_parse_assignment_number() {
		let doc = parse("count = 3.5");
		let stmt = &doc.roots()[0];
		assert_eq!(stmt.kind(), KIND_ASSIGN);
		assert_eq!(stmt.field(FIELD_VAR), Some("count"));
		assert_eq!(stmt.children()[0].field(FIELD_NUM), Some("3.5"));
	}

	#[test]
	fn test_parse_skips_blank_lines_and_keeps_comments() {
		let doc = parse("# setup\n\nx = 1\n");
		let kinds: Vec<_> = doc.roots().iter().map(|n| n.kind().to_string()).collect();
		assert_eq!(kinds, [RAW_BLOCK_KIND, KIND_ASSIGN]);
		assert_eq!(doc.roots()[0].field(RAW_TEXT_FIELD), Some("# setup"));
	}

	#[test]
	fn test_parse_reports_failing_line_number() {
		let err = LineScriptConverter
			.text_to_visual("x = 1\nwhile True:\n")
			.unwrap_err();
		assert_eq!(
			err,
			ConvertError::parse(2, "unrecognized statement `while True:`")
		);
	}

	#[test]
	fn test_parse_rejects_unterminated_string() {
		let err = LineScriptConverter.text_to_visual("print('oops)").unwrap_err();
		assert!(matches!(err, ConvertError::Parse { line: 1, .. }));
	}

	#[test]
	fn test_parse_rejects_comparison_as_statement() {
		let err = LineScriptConverter.text_to_visual("x == 1").unwrap_err();
		assert!(matches!(err, ConvertError::Parse { line: 1, .. }));
	}

	#[test]
	fn test_round_trip_is_idempotent() {
		let source = "# greeting\nname = 'ada'\nprint(name)\nready = True\nn = 42\n";
		let once = LineScriptConverter.visual_to_text(&parse(source));
		let twice = LineScriptConverter.visual_to_text(&parse(&once));
		assert_eq!(once, twice);
		assert_eq!(once, source);
	}

	#[test]
	fn test_render_skips_unknown_statement_kind() {
		let doc = VisualDocument::from_roots(vec![
			VisualNode::new("plot_line"),
			VisualNode::new(KIND_PRINT).with_child(VisualNode::new(KIND_NUMBER).with_field(FIELD_NUM, "1")),
		]);
		assert_eq!(LineScriptConverter.visual_to_text(&doc), "print(1)\n");
	}

	#[test]
	fn test_render_boolean_false() {
		let doc = VisualDocument::from_roots(vec![VisualNode::new(KIND_ASSIGN)
			.with_field(FIELD_VAR, "flag")
			.with_child(VisualNode::new(KIND_BOOL).with_field(FIELD_BOOL, "FALSE"))]);
		assert_eq!(LineScriptConverter.visual_to_text(&doc), "flag = False\n");
	}
}
