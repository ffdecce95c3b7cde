//! Dual-surface controller.
//!
//! [`DualEditorController`] owns both surfaces and the guard, and is the
//! only place conversions happen. Within one handler invocation the push
//! into the other surface and the latching of that surface happen in the
//! same call frame, with no event-loop turn in between — that ordering is
//! what makes suppression race-free against the widget's delayed echo.

use std::time::Instant;

use tandem_convert::ProgramConverter;
use tandem_toolbox::{CategoryRegistry, compose};

use crate::config::EditorConfig;
use crate::guard::{Direction, SyncGuard};
use crate::surfaces::{TextSurface, VisualSurface};

/// Owns the two surfaces and keeps them synchronized.
///
/// `V` and `T` are the host's widget adapters; `C` is the representation
/// converter. All entry points run on the host's UI thread; time enters
/// only through the `now` arguments and [`DualEditorController::tick`].
pub struct DualEditorController<V, T, C> {
	visual: V,
	text: T,
	converter: C,
	guard: SyncGuard,
	registry: CategoryRegistry,
	config: EditorConfig,
}

impl<V, T, C> DualEditorController<V, T, C>
where
	V: VisualSurface,
	T: TextSurface,
	C: ProgramConverter,
{
	/// Creates a controller and seeds both surfaces with the configured
	/// default program through the guard-bypassing load path.
	pub fn new(
		visual: V,
		text: T,
		converter: C,
		registry: CategoryRegistry,
		config: EditorConfig,
	) -> Self {
		let guard = SyncGuard::new(config.release_delay);
		let mut controller = Self {
			visual,
			text,
			converter,
			guard,
			registry,
			config,
		};
		let default = controller.config.default_program.clone();
		controller.load_program(Some(&default));
		controller
	}

	/// Native change notification from the visual widget.
	///
	/// Ignored while the visual surface is suppressed (the change is an echo
	/// of our own push). Otherwise generates text from the current document,
	/// latches the text surface, pushes, and arms the latch's release.
	pub fn on_visual_changed(&mut self, now: Instant) {
		if !self.guard.should_process(Direction::FromVisual) {
			tracing::trace!("sync.echo_suppressed.visual");
			return;
		}

		let generated = self.converter.visual_to_text(&self.visual.document());
		self.guard.begin_propagation(Direction::FromVisual);
		self.text.set_value(&normalize_program(Some(generated.as_str())));
		self.guard.schedule_release(Direction::FromVisual, now);
		tracing::debug!(chars = generated.len(), "editor.visual_to_text");
	}

	/// Native keystroke-level notification from the text widget.
	///
	/// A suppressed hit is consumed one-shot — the text widget emits exactly
	/// one echo per programmatic set, so the very next keystroke is live.
	/// A genuine edit latches the visual surface, rebuilds its document from
	/// the text (falling back to the passthrough document when the text does
	/// not parse), and arms the latch's release.
	pub fn on_text_changed(&mut self, now: Instant) {
		if self.guard.consume_echo(Direction::FromText) {
			tracing::trace!("sync.echo_suppressed.text");
			return;
		}

		let source = self.text.value();
		self.guard.begin_propagation(Direction::FromText);
		self.apply_text_to_visual(&source);
		self.guard.schedule_release(Direction::FromText, now);
	}

	/// Releases suppression latches whose deadline has elapsed. Driven by
	/// the host's event loop.
	pub fn tick(&mut self, now: Instant) {
		self.guard.tick(now);
	}

	/// Directly sets the text surface, bypassing the guard.
	///
	/// `None`, empty, and whitespace-only inputs normalize to a single blank
	/// line; the text widget needs at least one line to stay interactive.
	pub fn push_text(&mut self, text: Option<&str>) {
		self.text.set_value(&normalize_program(text));
	}

	/// Directly reads the text surface, bypassing the guard.
	pub fn pull_text(&self) -> String {
		self.text.value()
	}

	/// One-shot initial-load path: establishes both representations from
	/// the given text with no guard involvement (no notification is in
	/// flight yet).
	pub fn load_program(&mut self, text: Option<&str>) {
		let normalized = normalize_program(text);
		self.text.set_value(&normalized);
		self.apply_text_to_visual(&normalized);
		tracing::debug!(chars = normalized.len(), "editor.load_program");
	}

	/// Composes the toolbox menu from the configured module ordering.
	///
	/// With `apply`, pushes the result into the visual widget and triggers a
	/// layout resize; otherwise returns the markup for inspection.
	pub fn rebuild_menu(&mut self, apply: bool) -> Option<String> {
		let xml = compose(&self.registry, self.config.modules.iter().map(String::as_str));
		if apply {
			self.visual.update_toolbox(&xml);
			self.visual.resize();
			None
		} else {
			Some(xml)
		}
	}

	pub fn guard(&self) -> &SyncGuard {
		&self.guard
	}

	pub fn registry(&self) -> &CategoryRegistry {
		&self.registry
	}

	pub fn config(&self) -> &EditorConfig {
		&self.config
	}

	pub fn visual_surface(&self) -> &V {
		&self.visual
	}

	/// Mutable surface access, standing in for edits made directly inside
	/// the visual widget.
	pub fn visual_surface_mut(&mut self) -> &mut V {
		&mut self.visual
	}

	pub fn text_surface(&self) -> &T {
		&self.text
	}

	pub fn text_surface_mut(&mut self) -> &mut T {
		&mut self.text
	}

	/// Rebuilds the visual surface from program text.
	///
	/// Empty text clears the surface. A successful non-empty conversion is
	/// pruned of node kinds the registry does not know, then replaces the
	/// document wholesale. A failed or empty conversion falls back to the
	/// permissive passthrough conversion so the user's text is never lost.
	/// Every path ends with a cosmetic auto-layout pass bracketed by
	/// disabled change events.
	fn apply_text_to_visual(&mut self, source: &str) {
		if source.trim().is_empty() {
			self.visual.clear();
			tracing::debug!("editor.visual_cleared");
		} else {
			match self.converter.text_to_visual(source) {
				Ok(mut doc) if !doc.is_empty() => {
					let report = doc.prune_unknown(self.registry.known_kinds());
					if !report.is_empty() {
						tracing::warn!(dropped = ?report.dropped, "editor.prune_orphans");
					}
					self.visual.replace_document(doc);
				}
				Ok(_) => {
					tracing::warn!("editor.convert_empty_result");
					self.replace_with_fallback(source);
				}
				Err(err) => {
					tracing::warn!(error = %err, "editor.convert_failed");
					self.replace_with_fallback(source);
				}
			}
		}

		self.visual.set_change_events_enabled(false);
		self.visual.auto_layout();
		self.visual.set_change_events_enabled(true);
	}

	/// The fallback document is trusted by construction and not pruned;
	/// pruning it could break the always-succeeds guarantee on hosts whose
	/// registry omits the passthrough kind.
	fn replace_with_fallback(&mut self, source: &str) {
		let doc = self.converter.error_to_visual(source);
		self.visual.replace_document(doc);
	}
}

fn normalize_program(text: Option<&str>) -> String {
	match text {
		Some(t) if !t.trim().is_empty() => t.to_string(),
		_ => "\n".to_string(),
	}
}
