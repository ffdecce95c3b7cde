use std::time::{Duration, Instant};

use proptest::prelude::*;

use super::*;

const DELAY: Duration = Duration::from_millis(40);

fn guard() -> SyncGuard {
	SyncGuard::new(DELAY)
}

#[test]
fn test_begin_propagation_latches_target_surface() {
	let mut g = guard();
	g.begin_propagation(Direction::FromText);

	assert!(g.is_suppressed(SurfaceKind::Visual));
	assert!(!g.is_suppressed(SurfaceKind::Text));
	assert!(!g.should_process(Direction::FromVisual));
	assert!(g.should_process(Direction::FromText));
}

#[test]
fn test_release_clears_latch_only_after_deadline() {
	let now = Instant::now();
	let mut g = guard();
	g.begin_propagation(Direction::FromVisual);
	g.schedule_release(Direction::FromVisual, now);

	g.tick(now + DELAY - Duration::from_millis(1));
	assert!(g.is_suppressed(SurfaceKind::Text));

	g.tick(now + DELAY);
	assert!(!g.is_suppressed(SurfaceKind::Text));
	assert!(!g.release_pending(SurfaceKind::Text));
}

#[test]
fn test_release_bursts_coalesce_to_one_release_after_last_call() {
	let now = Instant::now();
	let mut g = guard();
	g.begin_propagation(Direction::FromText);
	for ms in [0, 10, 20] {
		g.schedule_release(Direction::FromText, now + Duration::from_millis(ms));
	}

	// Deadline measured from the first call has passed; the latch holds.
	g.tick(now + DELAY + Duration::from_millis(10));
	assert!(g.is_suppressed(SurfaceKind::Visual));

	g.tick(now + Duration::from_millis(20) + DELAY);
	assert!(!g.is_suppressed(SurfaceKind::Visual));
}

#[test]
fn test_begin_propagation_is_idempotent_and_keeps_deadline() {
	let now = Instant::now();
	let mut g = guard();
	g.begin_propagation(Direction::FromText);
	g.schedule_release(Direction::FromText, now);
	g.begin_propagation(Direction::FromText);

	g.tick(now + DELAY);
	assert!(!g.is_suppressed(SurfaceKind::Visual), "second begin must not extend the window");
}

#[test]
fn test_consume_echo_is_one_shot_and_cancels_release() {
	let now = Instant::now();
	let mut g = guard();
	g.begin_propagation(Direction::FromVisual);
	g.schedule_release(Direction::FromVisual, now);

	assert!(g.consume_echo(Direction::FromText));
	assert!(!g.is_suppressed(SurfaceKind::Text));
	assert!(!g.release_pending(SurfaceKind::Text));

	// The next notification is live.
	assert!(!g.consume_echo(Direction::FromText));
	assert!(g.should_process(Direction::FromText));
}

#[test]
fn test_directions_do_not_cancel_each_other() {
	let now = Instant::now();
	let mut g = guard();
	g.begin_propagation(Direction::FromVisual);
	g.schedule_release(Direction::FromVisual, now);
	g.begin_propagation(Direction::FromText);
	g.schedule_release(Direction::FromText, now + Duration::from_millis(30));

	g.tick(now + DELAY);
	assert!(!g.is_suppressed(SurfaceKind::Text));
	assert!(g.is_suppressed(SurfaceKind::Visual), "other direction's window must survive");

	g.tick(now + Duration::from_millis(30) + DELAY);
	assert!(!g.is_suppressed(SurfaceKind::Visual));
}

#[test]
fn test_tick_without_pending_release_is_a_no_op() {
	let mut g = guard();
	g.begin_propagation(Direction::FromText);
	g.tick(Instant::now() + Duration::from_secs(60));
	assert!(g.is_suppressed(SurfaceKind::Visual), "no deadline was armed");
}

proptest! {
	/// However releases are rearmed, the latch clears exactly one delay
	/// after the last schedule call and not before.
	#[test]
	fn prop_latch_clears_one_delay_after_last_schedule(offsets in prop::collection::vec(0u64..200, 1..16)) {
		let now = Instant::now();
		let mut g = guard();
		g.begin_propagation(Direction::FromText);

		for ms in offsets {
			g.schedule_release(Direction::FromText, now + Duration::from_millis(ms));
		}
		// Rearms are last-writer-wins, so the surviving deadline is the one
		// from the final call.
		let deadline = g.tick_deadline_for_test();

		g.tick(deadline - Duration::from_millis(1));
		prop_assert!(g.is_suppressed(SurfaceKind::Visual));

		g.tick(deadline);
		prop_assert!(!g.is_suppressed(SurfaceKind::Visual));
		prop_assert!(!g.release_pending(SurfaceKind::Visual));
	}
}

impl SyncGuard {
	fn tick_deadline_for_test(&self) -> Instant {
		self.latch(SurfaceKind::Visual)
			.release_at
			.expect("release must be pending")
	}
}
