//! Controller configuration.

use std::time::Duration;

use tandem_toolbox::DEFAULT_MODULE_ORDER;

use crate::guard::DEFAULT_RELEASE_DELAY;

/// The canonical program both surfaces are seeded with at construction.
pub const DEFAULT_PROGRAM: &str = "print('hello world')";

/// Host-tunable knobs for one controller instance.
#[derive(Debug, Clone)]
pub struct EditorConfig {
	/// Suppression-latch release delay.
	pub release_delay: Duration,
	/// Program loaded into both surfaces at construction.
	pub default_program: String,
	/// Category ids composed into the toolbox, in display order.
	pub modules: Vec<String>,
}

impl Default for EditorConfig {
	fn default() -> Self {
		Self {
			release_delay: DEFAULT_RELEASE_DELAY,
			default_program: DEFAULT_PROGRAM.to_string(),
			modules: DEFAULT_MODULE_ORDER.iter().map(ToString::to_string).collect(),
		}
	}
}
