//! Node tree types and orphan pruning.

use crate::kinds::NodeKindSet;
use crate::{RAW_BLOCK_KIND, RAW_TEXT_FIELD};

/// A named value attached to a node (a literal, a variable name, …).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Field {
	pub name: String,
	pub value: String,
}

/// One typed node in the visual document.
///
/// `kind` identifies the block type to the visual widget and the code
/// generator; `fields` carry its scalar payload; `children` are nested
/// nodes (expression inputs, statement bodies).
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VisualNode {
	kind: String,
	fields: Vec<Field>,
	children: Vec<VisualNode>,
}

impl VisualNode {
	/// Creates a node of the given kind with no fields or children.
	pub fn new(kind: impl Into<String>) -> Self {
		Self {
			kind: kind.into(),
			fields: Vec::new(),
			children: Vec::new(),
		}
	}

	/// Creates the opaque passthrough node wrapping unparseable source text.
	pub fn raw_passthrough(text: &str) -> Self {
		Self::new(RAW_BLOCK_KIND).with_field(RAW_TEXT_FIELD, text)
	}

	/// Builder-style field attachment.
	pub fn with_field(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
		self.fields.push(Field {
			name: name.into(),
			value: value.into(),
		});
		self
	}

	/// Builder-style child attachment.
	pub fn with_child(mut self, child: VisualNode) -> Self {
		self.children.push(child);
		self
	}

	pub fn kind(&self) -> &str {
		&self.kind
	}

	/// Returns the value of the first field with the given name.
	pub fn field(&self, name: &str) -> Option<&str> {
		self.fields
			.iter()
			.find(|f| f.name == name)
			.map(|f| f.value.as_str())
	}

	pub fn fields(&self) -> &[Field] {
		&self.fields
	}

	pub fn children(&self) -> &[VisualNode] {
		&self.children
	}

	pub fn push_child(&mut self, child: VisualNode) {
		self.children.push(child);
	}
}

/// Kinds discarded by a prune pass, in encounter order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct PruneReport {
	pub dropped: Vec<String>,
}

impl PruneReport {
	pub fn is_empty(&self) -> bool {
		self.dropped.is_empty()
	}

	pub fn dropped_count(&self) -> usize {
		self.dropped.len()
	}
}

/// An ordered forest of [`VisualNode`]s representing one whole program.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct VisualDocument {
	roots: Vec<VisualNode>,
}

impl VisualDocument {
	/// Creates an empty document (no program).
	pub fn new() -> Self {
		Self::default()
	}

	pub fn from_roots(roots: Vec<VisualNode>) -> Self {
		Self { roots }
	}

	pub fn is_empty(&self) -> bool {
		self.roots.is_empty()
	}

	pub fn roots(&self) -> &[VisualNode] {
		&self.roots
	}

	pub fn push_root(&mut self, node: VisualNode) {
		self.roots.push(node);
	}

	/// Removes every node.
	pub fn clear(&mut self) {
		self.roots.clear();
	}

	/// Total node count, all depths.
	pub fn node_count(&self) -> usize {
		self.iter().count()
	}

	/// Depth-first traversal over every node in the document.
	pub fn iter(&self) -> Nodes<'_> {
		Nodes {
			stack: self.roots.iter().rev().collect(),
		}
	}

	/// Discards nodes whose kind is not in `known`, splicing their children
	/// into the vacated position. Children are pruned before their parent is
	/// judged, so a known grandchild under an unknown parent survives.
	pub fn prune_unknown(&mut self, known: &NodeKindSet) -> PruneReport {
		let mut report = PruneReport::default();
		let roots = std::mem::take(&mut self.roots);
		self.roots = prune_nodes(roots, known, &mut report);
		if !report.is_empty() {
			tracing::debug!(
				dropped = report.dropped_count(),
				kinds = ?report.dropped,
				"document.prune_unknown"
			);
		}
		report
	}
}

fn prune_nodes(
	nodes: Vec<VisualNode>,
	known: &NodeKindSet,
	report: &mut PruneReport,
) -> Vec<VisualNode> {
	let mut kept = Vec::with_capacity(nodes.len());
	for mut node in nodes {
		let children = prune_nodes(std::mem::take(&mut node.children), known, report);
		if known.contains(node.kind()) {
			node.children = children;
			kept.push(node);
		} else {
			report.dropped.push(node.kind.clone());
			kept.extend(children);
		}
	}
	kept
}

/// Depth-first node iterator returned by [`VisualDocument::iter`].
pub struct Nodes<'a> {
	stack: Vec<&'a VisualNode>,
}

impl<'a> Iterator for Nodes<'a> {
	type Item = &'a VisualNode;

	fn next(&mut self) -> Option<Self::Item> {
		let node = self.stack.pop()?;
		self.stack.extend(node.children.iter().rev());
		Some(node)
	}
}

#[cfg(test)]
mod tests {
	use pretty_assertions::assert_eq;

	use super::*;

	fn known(kinds: &[&str]) -> NodeKindSet {
		kinds.iter().copied().collect()
	}

	#[test]
	fn test_raw_passthrough_carries_source() {
		let node = VisualNode::raw_passthrough("while True: pass");
		assert_eq!(node.kind(), RAW_BLOCK_KIND);
		assert_eq!(node.field(RAW_TEXT_FIELD), Some("while True: pass"));
	}

	#[test]
	fn test_iter_is_depth_first() {
		let doc = VisualDocument::from_roots(vec![
			VisualNode::new("a").with_child(VisualNode::new("b").with_child(VisualNode::new("c"))),
			VisualNode::new("d"),
		]);
		let kinds: Vec<_> = doc.iter().map(|n| n.kind().to_string()).collect();
		assert_eq!(kinds, ["a", "b", "c", "d"]);
		assert_eq!(doc.node_count(), 4);
	}

	#[test]
	fn test_prune_drops_exactly_the_unknown_kinds() {
		let mut doc = VisualDocument::from_roots(vec![
			VisualNode::new("text_print").with_child(VisualNode::new("text")),
			VisualNode::new("bogus_widget"),
		]);
		let report = doc.prune_unknown(&known(&["text_print", "text"]));
		assert_eq!(report.dropped, ["bogus_widget"]);
		assert_eq!(doc.node_count(), 2);
	}

	#[test]
	fn test_prune_promotes_children_of_dropped_node() {
		let mut doc = VisualDocument::from_roots(vec![
			VisualNode::new("bogus_wrapper")
				.with_child(VisualNode::new("text_print"))
				.with_child(VisualNode::new("variables_set")),
		]);
		let report = doc.prune_unknown(&known(&["text_print", "variables_set"]));
		assert_eq!(report.dropped, ["bogus_wrapper"]);
		let kinds: Vec<_> = doc.roots().iter().map(|n| n.kind().to_string()).collect();
		assert_eq!(kinds, ["text_print", "variables_set"]);
	}

	#[test]
	fn test_prune_keeps_known_grandchild_under_unknown_parent() {
		let mut doc = VisualDocument::from_roots(vec![VisualNode::new("gone").with_child(
			VisualNode::new("also_gone").with_child(VisualNode::new("text")),
		)]);
		let report = doc.prune_unknown(&known(&["text"]));
		assert_eq!(report.dropped, ["also_gone", "gone"]);
		assert_eq!(doc.roots().len(), 1);
		assert_eq!(doc.roots()[0].kind(), "text");
	}

	#[test]
	fn test_prune_on_fully_known_document_reports_nothing() {
		let mut doc = VisualDocument::from_roots(vec![VisualNode::new("text_print")]);
		let before = doc.clone();
		let report = doc.prune_unknown(&known(&["text_print"]));
		assert!(report.is_empty());
		assert_eq!(doc, before);
	}
}
