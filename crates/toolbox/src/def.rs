//! Category definition records and section groups.

/// Reserved id prefix marking a category as dataset-backed.
pub const DATA_PREFIX: &str = "Data - ";

/// Fragment inserted between toolbox sections.
pub const SEPARATOR_FRAGMENT: &str = "<sep></sep>";

/// Section group a category belongs to.
///
/// The first member of the misc and values groups in a composed menu is
/// preceded by a separator; dataset categories are grouped by the
/// [`DATA_PREFIX`] on their id instead of a section value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Section {
	/// Leading structural categories; no separator.
	Core,
	/// Calculation/output style categories.
	Misc,
	/// Literal-value categories, plus every free-form category.
	Values,
}

/// Static definition of a built-in category.
pub struct CategoryDef {
	/// Display id, also the key used in module orderings.
	pub id: &'static str,
	/// Markup fragment handed to the visual widget verbatim.
	pub fragment: &'static str,
	/// Section group for separator insertion.
	pub section: Section,
}
