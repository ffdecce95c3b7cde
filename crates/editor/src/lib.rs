//! Synchronization engine for a dual-surface program editor.
//!
//! One program, two surfaces: a block-based visual document and plain text.
//! Editing either surface updates the other through a pair of converters,
//! and [`SyncGuard`] keeps the resulting widget echoes from being mistaken
//! for fresh user edits. [`DualEditorController`] owns both surfaces and
//! wires their native change notifications through the guard.
//!
//! # Execution model
//!
//! Single-threaded and cooperative. The host calls the controller's entry
//! points from its UI loop and drives time explicitly through
//! [`DualEditorController::tick`]; latch releases are deadlines, not ambient
//! timers, so the engine is deterministic under test.
//!
//! # Availability over strictness
//!
//! Nothing in this crate panics on user input. Text that fails structural
//! conversion is preserved verbatim in an opaque passthrough node, and
//! documents referencing node kinds the registry no longer knows are pruned
//! down to their known parts before a replace.

pub mod config;
pub mod controller;
pub mod guard;
pub mod headless;
pub mod surfaces;

pub use config::{DEFAULT_PROGRAM, EditorConfig};
pub use controller::DualEditorController;
pub use guard::{DEFAULT_RELEASE_DELAY, Direction, SurfaceKind, SyncGuard, SyncState};
pub use surfaces::{TextSurface, VisualSurface};
