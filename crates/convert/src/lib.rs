//! Converter seam between the two program representations.
//!
//! The editor core never parses or generates code itself; it talks to a
//! [`ProgramConverter`]. Implementations wrap whatever structural converter
//! and code generator the host embeds. Two guarantees shape the trait:
//!
//! - `text_to_visual` is total over malformed input — failure is a value
//!   ([`ConvertError`]), never a panic, so the controller's fallback path is
//!   reachable deterministically;
//! - `error_to_visual` always succeeds, wrapping the offending text in one
//!   opaque passthrough node so an unparseable edit is preserved verbatim;
//! - `visual_to_text` is total because the visual surface cannot represent
//!   an unparseable program in the first place.
//!
//! [`LineScriptConverter`] is the in-tree reference implementation used by
//! the test suites and the demo binary.

mod line_script;

pub use line_script::LineScriptConverter;
use tandem_document::{VisualDocument, VisualNode};

/// Failure reported by the textual-to-visual conversion.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ConvertError {
	#[error("parse error at line {line}: {message}")]
	Parse { line: usize, message: String },
}

impl ConvertError {
	pub(crate) fn parse(line: usize, message: impl Into<String>) -> Self {
		Self::Parse {
			line,
			message: message.into(),
		}
	}
}

/// Bidirectional conversion between program text and the visual document.
pub trait ProgramConverter {
	/// Parses program text into a structured visual document.
	fn text_to_visual(&self, text: &str) -> Result<VisualDocument, ConvertError>;

	/// Generates program text from a visual document.
	fn visual_to_text(&self, doc: &VisualDocument) -> String;

	/// Permissive fallback conversion for text that failed to parse.
	///
	/// The default wraps the whole text in a single passthrough node.
	fn error_to_visual(&self, text: &str) -> VisualDocument {
		VisualDocument::from_roots(vec![VisualNode::raw_passthrough(text)])
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;
	use tandem_document::{RAW_BLOCK_KIND, RAW_TEXT_FIELD};

	use super::*;

	struct RejectEverything;

	impl ProgramConverter for RejectEverything {
		fn text_to_visual(&self, _text: &str) -> Result<VisualDocument, ConvertError> {
			Err(ConvertError::parse(1, "nope"))
		}

		fn visual_to_text(&self, _doc: &VisualDocument) -> String {
			String::new()
		}
	}

	#[test]
	fn test_default_fallback_wraps_text_in_one_passthrough_node() {
		let doc = RejectEverything.error_to_visual("while True:\n    pass");
		assert_eq!(doc.roots().len(), 1);
		let node = &doc.roots()[0];
		assert_eq!(node.kind(), RAW_BLOCK_KIND);
		assert_eq!(node.field(RAW_TEXT_FIELD), Some("while True:\n    pass"));
	}

	#[test]
	fn test_parse_error_formats_line_number() {
		let err = ConvertError::parse(3, "unterminated string");
		assert_eq!(err.to_string(), "parse error at line 3: unterminated string");
	}
}
