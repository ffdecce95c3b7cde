//! Echo suppression between the two surfaces.
//!
//! [`SyncGuard`] owns one suppression latch per surface. A latch is set
//! exactly while a propagation triggered by the *other* surface is in flight
//! toward this one, and holds until the surface has had a chance to finish
//! emitting its own echo notification — widget-internal change propagation
//! is not synchronous with the push, so an immediate clear would race the
//! echo. Releases are explicit deadlines driven by [`SyncGuard::tick`];
//! rearming is symmetric per direction, and a burst of
//! [`SyncGuard::schedule_release`] calls coalesces into a single release,
//! one delay after the last call.
//!
//! There is no parallelism here: the guard is a scheduling discipline, not
//! a mutex. All state is owned by one controller and touched from one
//! thread.

use std::time::{Duration, Instant};

/// Default release delay.
///
/// One cooperative-scheduling tick plus headroom for the widget's coalesced
/// keystroke batching.
pub const DEFAULT_RELEASE_DELAY: Duration = Duration::from_millis(40);

/// One of the two editing surfaces.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SurfaceKind {
	Visual,
	Text,
}

/// Logical direction of a propagation, named for the originating surface.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Direction {
	/// A visual edit propagating toward the text surface.
	FromVisual,
	/// A textual edit propagating toward the visual surface.
	FromText,
}

impl Direction {
	/// Surface the propagation originated from.
	pub fn origin(self) -> SurfaceKind {
		match self {
			Direction::FromVisual => SurfaceKind::Visual,
			Direction::FromText => SurfaceKind::Text,
		}
	}

	/// Surface the converted result is pushed into.
	pub fn target(self) -> SurfaceKind {
		match self {
			Direction::FromVisual => SurfaceKind::Text,
			Direction::FromText => SurfaceKind::Visual,
		}
	}
}

/// Suppression state for one surface: the latch and its release deadline.
#[derive(Debug, Default)]
struct Latch {
	suppressed: bool,
	release_at: Option<Instant>,
}

/// Per-controller suppression state for both surfaces.
///
/// A value, not a module-level singleton: every controller instance carries
/// its own, so multiple independent editors can coexist in one process.
#[derive(Debug, Default)]
pub struct SyncState {
	visual: Latch,
	text: Latch,
}

/// Mutual-exclusion discipline preventing edit echoes between the surfaces.
#[derive(Debug)]
pub struct SyncGuard {
	state: SyncState,
	release_delay: Duration,
}

impl SyncGuard {
	pub fn new(release_delay: Duration) -> Self {
		Self {
			state: SyncState::default(),
			release_delay,
		}
	}

	pub fn release_delay(&self) -> Duration {
		self.release_delay
	}

	/// Whether a native change notification from the direction's origin
	/// surface should be processed as a genuine user edit.
	pub fn should_process(&self, direction: Direction) -> bool {
		!self.latch(direction.origin()).suppressed
	}

	/// Latches the direction's target surface ahead of a push.
	///
	/// Idempotent while the latch is already set; an existing release
	/// deadline is left untouched so repeated calls cannot shrink the
	/// protection window on their own.
	pub fn begin_propagation(&mut self, direction: Direction) {
		let target = direction.target();
		let latch = self.latch_mut(target);
		if !latch.suppressed {
			latch.suppressed = true;
			tracing::trace!(surface = ?target, "sync.latch_set");
		}
	}

	/// One-shot absorption of an echo on the direction's origin surface.
	///
	/// Returns `true` and clears both the latch and any pending release when
	/// the surface was suppressed, so the very next notification is live.
	/// Used for surfaces that emit exactly one echo per programmatic set.
	pub fn consume_echo(&mut self, direction: Direction) -> bool {
		let origin = direction.origin();
		let latch = self.latch_mut(origin);
		if latch.suppressed {
			latch.suppressed = false;
			latch.release_at = None;
			tracing::trace!(surface = ?origin, "sync.echo_consumed");
			true
		} else {
			false
		}
	}

	/// (Re)arms the release deadline for the direction's target surface to
	/// `now + release_delay`. Last writer wins: a pending deadline for the
	/// same surface is superseded, so notification bursts coalesce into one
	/// release after the final call.
	pub fn schedule_release(&mut self, direction: Direction, now: Instant) {
		let delay = self.release_delay;
		self.latch_mut(direction.target()).release_at = Some(now + delay);
	}

	/// Clears every latch whose release deadline has elapsed.
	pub fn tick(&mut self, now: Instant) {
		for surface in [SurfaceKind::Visual, SurfaceKind::Text] {
			let latch = self.latch_mut(surface);
			if latch.release_at.is_some_and(|at| now >= at) {
				latch.release_at = None;
				if latch.suppressed {
					latch.suppressed = false;
					tracing::debug!(surface = ?surface, "sync.latch_release");
				}
			}
		}
	}

	pub fn is_suppressed(&self, surface: SurfaceKind) -> bool {
		self.latch(surface).suppressed
	}

	/// Whether a release deadline is pending for the surface.
	pub fn release_pending(&self, surface: SurfaceKind) -> bool {
		self.latch(surface).release_at.is_some()
	}

	fn latch(&self, surface: SurfaceKind) -> &Latch {
		match surface {
			SurfaceKind::Visual => &self.state.visual,
			SurfaceKind::Text => &self.state.text,
		}
	}

	fn latch_mut(&mut self, surface: SurfaceKind) -> &mut Latch {
		match surface {
			SurfaceKind::Visual => &mut self.state.visual,
			SurfaceKind::Text => &mut self.state.text,
		}
	}
}

impl Default for SyncGuard {
	fn default() -> Self {
		Self::new(DEFAULT_RELEASE_DELAY)
	}
}

#[cfg(test)]
mod tests;
