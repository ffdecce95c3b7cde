//! Runtime category registry.

use indexmap::IndexMap;
use tandem_document::NodeKindSet;

use crate::builtins;
use crate::def::Section;

/// A registered category: id, widget fragment, and section group.
#[derive(Debug, Clone)]
pub struct Category {
	id: String,
	fragment: String,
	section: Section,
}

impl Category {
	pub fn id(&self) -> &str {
		&self.id
	}

	pub fn fragment(&self) -> &str {
		&self.fragment
	}

	pub fn section(&self) -> Section {
		self.section
	}
}

/// A host-supplied free-form category.
///
/// Free-form categories compose inside the values section and extend the
/// known node-kind set with their block kinds.
#[derive(Debug, Clone)]
pub struct CustomCategory {
	pub id: String,
	pub colour: u16,
	pub block_kinds: Vec<String>,
}

/// Read-mostly mapping from category id to its definition, plus the node
/// kinds the current block set understands.
///
/// Construct once with [`CategoryRegistry::builtin`], optionally extend with
/// [`CategoryRegistry::register_custom`], then share read-only.
#[derive(Debug, Clone)]
pub struct CategoryRegistry {
	categories: IndexMap<String, Category>,
	kinds: NodeKindSet,
}

impl CategoryRegistry {
	/// Registry holding the built-in category table.
	pub fn builtin() -> Self {
		let categories = builtins::CATEGORIES
			.iter()
			.map(|def| {
				(
					def.id.to_string(),
					Category {
						id: def.id.to_string(),
						fragment: def.fragment.to_string(),
						section: def.section,
					},
				)
			})
			.collect();
		Self {
			categories,
			kinds: builtins::BLOCK_KINDS.iter().copied().collect(),
		}
	}

	pub fn get(&self, id: &str) -> Option<&Category> {
		self.categories.get(id)
	}

	pub fn contains(&self, id: &str) -> bool {
		self.categories.contains_key(id)
	}

	/// Ids in registration order.
	pub fn ids(&self) -> impl Iterator<Item = &str> {
		self.categories.keys().map(String::as_str)
	}

	/// Node kinds a visual document may legally reference.
	pub fn known_kinds(&self) -> &NodeKindSet {
		&self.kinds
	}

	/// Registers a free-form category, building its fragment from the block
	/// list. Re-registering an id replaces the previous definition.
	pub fn register_custom(&mut self, custom: CustomCategory) {
		let mut fragment = format!(
			r#"<category name="{}" colour="{}">"#,
			escape_attr(&custom.id),
			custom.colour
		);
		for kind in &custom.block_kinds {
			fragment.push_str(&format!(r#"<block type="{}"></block>"#, escape_attr(kind)));
		}
		fragment.push_str("</category>");

		self.kinds.extend(custom.block_kinds.iter().cloned());
		let replaced = self
			.categories
			.insert(
				custom.id.clone(),
				Category {
					id: custom.id.clone(),
					fragment,
					section: Section::Values,
				},
			)
			.is_some();
		tracing::debug!(id = %custom.id, replaced, "menu.register_custom");
	}
}

fn escape_attr(value: &str) -> String {
	value
		.replace('&', "&amp;")
		.replace('<', "&lt;")
		.replace('>', "&gt;")
		.replace('"', "&quot;")
}
