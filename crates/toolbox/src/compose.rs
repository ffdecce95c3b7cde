//! Toolbox menu composition.

use crate::def::{DATA_PREFIX, SEPARATOR_FRAGMENT, Section};
use crate::registry::CategoryRegistry;

const TOOLBOX_OPEN: &str = r#"<xml id="toolbox" style="display: none">"#;
const TOOLBOX_CLOSE: &str = "</xml>";

/// Composes the toolbox menu for the given module ordering.
///
/// Modules are appended in the order given. A separator is inserted exactly
/// once immediately before the first member of the misc group, the values
/// group, and the dataset group (ids carrying [`DATA_PREFIX`]), in that fixed
/// order when one id triggers several groups at once. Ids absent from the
/// registry are a configuration error: they are reported and skipped, and
/// trigger no separator.
pub fn compose<'a>(
	registry: &CategoryRegistry,
	modules: impl IntoIterator<Item = &'a str>,
) -> String {
	let mut xml = String::from(TOOLBOX_OPEN);
	let mut entered_misc = false;
	let mut entered_values = false;
	let mut entered_data = false;

	for id in modules {
		let Some(category) = registry.get(id) else {
			tracing::warn!(module = id, "menu.unknown_category");
			continue;
		};
		if !entered_misc && category.section() == Section::Misc {
			entered_misc = true;
			xml.push_str(SEPARATOR_FRAGMENT);
		}
		if !entered_values && category.section() == Section::Values {
			entered_values = true;
			xml.push_str(SEPARATOR_FRAGMENT);
		}
		if !entered_data && id.starts_with(DATA_PREFIX) {
			entered_data = true;
			xml.push_str(SEPARATOR_FRAGMENT);
		}
		xml.push_str(category.fragment());
	}

	xml.push_str(TOOLBOX_CLOSE);
	xml
}
