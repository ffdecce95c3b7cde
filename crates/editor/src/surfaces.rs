//! Trait seams for the two editing widgets.
//!
//! The engine never talks to a real widget directly; hosts implement these
//! traits over whatever block workspace and text editor they embed. Both
//! traits mirror the widgets' native entry points, nothing more — change
//! notifications flow the other way, from the host into
//! [`DualEditorController::on_visual_changed`] and
//! [`DualEditorController::on_text_changed`].
//!
//! [`DualEditorController::on_visual_changed`]: crate::DualEditorController::on_visual_changed
//! [`DualEditorController::on_text_changed`]: crate::DualEditorController::on_text_changed

use tandem_document::VisualDocument;

/// The block-based structured editor.
pub trait VisualSurface {
	/// Snapshot of the current document.
	fn document(&self) -> VisualDocument;

	/// Replaces the entire document.
	fn replace_document(&mut self, doc: VisualDocument);

	/// Removes all nodes.
	fn clear(&mut self);

	/// Enables or disables the widget's change-notification emission.
	///
	/// Used to bracket cosmetic passes (auto-layout) that must not be
	/// reported back as edits.
	fn set_change_events_enabled(&mut self, enabled: bool);

	/// Runs the widget's cosmetic auto-layout pass.
	fn auto_layout(&mut self);

	/// Forces the widget to recompute its window size.
	fn resize(&mut self);

	/// Replaces the widget's toolbox with the given composed markup.
	fn update_toolbox(&mut self, xml: &str);
}

/// The plain-text editor.
pub trait TextSurface {
	/// Current buffer contents.
	fn value(&self) -> String;

	/// Replaces the buffer contents.
	fn set_value(&mut self, text: &str);
}
