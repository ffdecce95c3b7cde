//! Built-in category table and block vocabulary.

use crate::def::{CategoryDef, Section};

/// Default display ordering used when the host does not supply one.
pub const DEFAULT_MODULE_ORDER: &[&str] = &[
	"Variables",
	"Decisions",
	"Iteration",
	"Calculation",
	"Output",
	"Values",
	"Lists",
	"Dictionaries",
];

/// Every built-in category, keyed by display id.
pub(crate) const CATEGORIES: &[CategoryDef] = &[
	CategoryDef {
		id: "Variables",
		section: Section::Core,
		fragment: r#"<category name="Variables" custom="VARIABLE" colour="240"></category>"#,
	},
	CategoryDef {
		id: "Decisions",
		section: Section::Core,
		fragment: concat!(
			r#"<category name="Decisions" colour="330">"#,
			r#"<block type="controls_if_better"></block>"#,
			r#"<block type="controls_if_better"><mutation else="1"></mutation></block>"#,
			r#"<block type="logic_compare"></block>"#,
			r#"<block type="logic_operation"></block>"#,
			r#"<block type="logic_negate"></block>"#,
			"</category>"
		),
	},
	CategoryDef {
		id: "Iteration",
		section: Section::Core,
		fragment: concat!(
			r#"<category name="Iteration" colour="300">"#,
			r#"<block type="controls_forEach"></block>"#,
			"</category>"
		),
	},
	CategoryDef {
		id: "Functions",
		section: Section::Core,
		fragment: r#"<category name="Functions" custom="PROCEDURE" colour="210"></category>"#,
	},
	CategoryDef {
		id: "Calculation",
		section: Section::Misc,
		fragment: concat!(
			r#"<category name="Calculation" colour="270">"#,
			r#"<block type="math_arithmetic"></block>"#,
			r#"<block type="math_round"></block>"#,
			"</category>"
		),
	},
	CategoryDef {
		id: "Python",
		section: Section::Misc,
		fragment: concat!(
			r#"<category name="Python" colour="180">"#,
			r#"<block type="raw_block"></block>"#,
			r#"<block type="raw_expression"></block>"#,
			"</category>"
		),
	},
	CategoryDef {
		id: "Output",
		section: Section::Misc,
		fragment: concat!(
			r#"<category name="Output" colour="160">"#,
			r#"<block type="text_print"></block>"#,
			"</category>"
		),
	},
	CategoryDef {
		id: "Values",
		section: Section::Values,
		fragment: concat!(
			r#"<category name="Values" colour="100">"#,
			r#"<block type="text"></block>"#,
			r#"<block type="math_number"></block>"#,
			r#"<block type="logic_boolean"></block>"#,
			"</category>"
		),
	},
	CategoryDef {
		id: "Lists",
		section: Section::Values,
		fragment: concat!(
			r#"<category name="Lists" colour="30">"#,
			r#"<block type="lists_create_with"></block>"#,
			r#"<block type="lists_create_empty"></block>"#,
			r#"<block type="lists_append"></block>"#,
			"</category>"
		),
	},
	CategoryDef {
		id: "Dictionaries",
		section: Section::Values,
		fragment: concat!(
			r#"<category name="Dictionaries" colour="0">"#,
			r#"<block type="dicts_create_with"></block>"#,
			r#"<block type="dict_get_literal"></block>"#,
			"</category>"
		),
	},
	CategoryDef {
		id: "Data - Parking",
		section: Section::Core,
		fragment: concat!(
			r#"<category name="Data - Parking" colour="45">"#,
			r#"<block type="datetime_day"></block>"#,
			r#"<block type="datetime_time"></block>"#,
			"</category>"
		),
	},
];

/// Node kinds the built-in block set understands.
///
/// Includes generator-only kinds (`variables_set`, `variables_get`,
/// procedure blocks) that appear in documents but not in any fragment,
/// because their categories are populated dynamically by the widget.
pub(crate) const BLOCK_KINDS: &[&str] = &[
	"controls_forEach",
	"controls_if_better",
	"datetime_day",
	"datetime_time",
	"dict_get_literal",
	"dicts_create_with",
	"lists_append",
	"lists_create_empty",
	"lists_create_with",
	"logic_boolean",
	"logic_compare",
	"logic_negate",
	"logic_operation",
	"math_arithmetic",
	"math_number",
	"math_round",
	"procedures_callnoreturn",
	"procedures_defnoreturn",
	"raw_block",
	"raw_expression",
	"text",
	"text_print",
	"variables_get",
	"variables_set",
];
