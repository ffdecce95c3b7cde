//! In-memory surface implementations.
//!
//! Reference implementations of the widget seams with no rendering behind
//! them. They record what the controller did to them (layout passes, resizes,
//! toolbox updates) so tests and the demo binary can observe engine behavior
//! without a real widget toolkit.

use tandem_document::VisualDocument;

use crate::surfaces::{TextSurface, VisualSurface};

/// Headless block workspace.
#[derive(Debug)]
pub struct HeadlessVisualSurface {
	doc: VisualDocument,
	events_enabled: bool,
	layout_passes: usize,
	layout_passes_with_events_enabled: usize,
	replace_count: usize,
	clear_count: usize,
	resize_count: usize,
	toolbox_xml: Option<String>,
}

impl Default for HeadlessVisualSurface {
	fn default() -> Self {
		Self::new()
	}
}

impl HeadlessVisualSurface {
	/// Empty workspace with change events enabled, as a real widget starts.
	pub fn new() -> Self {
		Self {
			doc: VisualDocument::new(),
			events_enabled: true,
			layout_passes: 0,
			layout_passes_with_events_enabled: 0,
			replace_count: 0,
			clear_count: 0,
			resize_count: 0,
			toolbox_xml: None,
		}
	}

	/// Mutable access to the document, standing in for a user edit made
	/// directly inside the visual widget.
	pub fn document_mut(&mut self) -> &mut VisualDocument {
		&mut self.doc
	}

	pub fn events_enabled(&self) -> bool {
		self.events_enabled
	}

	/// Total auto-layout passes run.
	pub fn layout_passes(&self) -> usize {
		self.layout_passes
	}

	/// Auto-layout passes that ran while change events were still enabled.
	///
	/// Any nonzero value means a cosmetic pass could have re-entered the
	/// sync path.
	pub fn layout_passes_with_events_enabled(&self) -> usize {
		self.layout_passes_with_events_enabled
	}

	pub fn replace_count(&self) -> usize {
		self.replace_count
	}

	pub fn clear_count(&self) -> usize {
		self.clear_count
	}

	pub fn resize_count(&self) -> usize {
		self.resize_count
	}

	/// Last toolbox markup pushed, if any.
	pub fn toolbox_xml(&self) -> Option<&str> {
		self.toolbox_xml.as_deref()
	}
}

impl VisualSurface for HeadlessVisualSurface {
	fn document(&self) -> VisualDocument {
		self.doc.clone()
	}

	fn replace_document(&mut self, doc: VisualDocument) {
		self.replace_count += 1;
		self.doc = doc;
	}

	fn clear(&mut self) {
		self.clear_count += 1;
		self.doc.clear();
	}

	fn set_change_events_enabled(&mut self, enabled: bool) {
		self.events_enabled = enabled;
	}

	fn auto_layout(&mut self) {
		self.layout_passes += 1;
		if self.events_enabled {
			self.layout_passes_with_events_enabled += 1;
		}
	}

	fn resize(&mut self) {
		self.resize_count += 1;
	}

	fn update_toolbox(&mut self, xml: &str) {
		self.toolbox_xml = Some(xml.to_string());
	}
}

/// Headless text buffer.
#[derive(Debug, Default)]
pub struct HeadlessTextSurface {
	value: String,
	set_count: usize,
}

impl HeadlessTextSurface {
	pub fn new() -> Self {
		Self::default()
	}

	/// Number of programmatic sets, echoes included.
	pub fn set_count(&self) -> usize {
		self.set_count
	}
}

impl TextSurface for HeadlessTextSurface {
	fn value(&self) -> String {
		self.value.clone()
	}

	fn set_value(&mut self, text: &str) {
		self.set_count += 1;
		self.value = text.to_string();
	}
}
