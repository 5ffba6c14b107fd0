//! Process-wide primary/secondary image switch.
//!
//! Pictures with a secondary image crop alternate between their two crops,
//! and all of them flip at the same moment. The switch is therefore one
//! shared flag rather than per-picture state. The host calls [`advance`]
//! once per tick; the flag flips every `period_ticks` ticks.

use std::sync::atomic::{AtomicBool, AtomicU32, Ordering};

static PRIMARY: AtomicBool = AtomicBool::new(true);
static TICKS: AtomicU32 = AtomicU32::new(0);

/// Returns `true` while the primary crop should be drawn
pub fn is_primary() -> bool {
	PRIMARY.load(Ordering::Relaxed)
}

/// Forces the flag
pub fn set_primary(primary: bool) {
	PRIMARY.store(primary, Ordering::Relaxed);
}

/// Flips the flag
pub fn toggle() {
	PRIMARY.fetch_xor(true, Ordering::Relaxed);
}

/// Counts one tick and flips the flag every `period_ticks` ticks
///
/// Returns `true` when this tick flipped the flag. A period of 0 never flips.
pub fn advance(period_ticks: u32) -> bool {
	if period_ticks == 0 {
		return false;
	}
	let ticks = TICKS.fetch_add(1, Ordering::Relaxed).wrapping_add(1);
	if ticks % period_ticks == 0 {
		toggle();
		return true;
	}
	false
}

/// Restores the initial state (primary, no ticks counted)
pub fn reset() {
	TICKS.store(0, Ordering::Relaxed);
	set_primary(true);
}
