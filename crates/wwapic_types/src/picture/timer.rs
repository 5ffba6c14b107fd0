//! Tick driven timers.
//!
//! The host only provides a periodic tick, so the one-shot delays of a
//! picture are countdowns advanced by the elapsed milliseconds of each tick.

/// One-shot countdown
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Countdown {
	duration_ms: u32,
	elapsed_ms: u32,
	running: bool,
	fired: bool,
}

impl Countdown {
	/// Creates a stopped countdown
	pub fn new(duration_ms: u32) -> Self {
		Self {
			duration_ms,
			..Self::default()
		}
	}

	/// Starts or resumes the countdown; a fired countdown stays fired
	pub fn start(&mut self) {
		if !self.fired {
			self.running = true;
		}
	}

	/// Pauses the countdown, keeping the elapsed time
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Advances the countdown, returning `true` exactly once when it elapses
	pub fn tick(&mut self, elapsed_ms: u32) -> bool {
		if !self.running {
			return false;
		}
		self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
		if self.elapsed_ms >= self.duration_ms {
			self.running = false;
			self.fired = true;
			return true;
		}
		false
	}

	/// Returns `true` while counting down
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Returns `true` once elapsed
	pub fn has_fired(&self) -> bool {
		self.fired
	}

	/// Milliseconds left before firing
	pub fn remaining_ms(&self) -> u32 {
		self.duration_ms.saturating_sub(self.elapsed_ms)
	}
}

/// `[start, end)` window measured from the moment a picture became visible
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct AnimationWindow {
	start_ms: u32,
	end_ms: Option<u32>,
	elapsed_ms: u32,
	running: bool,
}

impl AnimationWindow {
	/// Window that is open from `start_ms` until `end_ms` (forever when `None`)
	pub fn new(start_ms: u32, end_ms: Option<u32>) -> Self {
		Self {
			start_ms,
			end_ms,
			..Self::default()
		}
	}

	/// Starts or resumes measuring
	pub fn start(&mut self) {
		self.running = true;
	}

	/// Stops measuring, freezing the window
	pub fn stop(&mut self) {
		self.running = false;
	}

	/// Advances the clock and reports whether animations may run this tick
	pub fn tick(&mut self, elapsed_ms: u32) -> bool {
		if !self.running {
			return false;
		}
		let open = self.is_open();
		self.elapsed_ms = self.elapsed_ms.saturating_add(elapsed_ms);
		open
	}

	/// Returns `true` while the current time lies inside the window
	pub fn is_open(&self) -> bool {
		self.elapsed_ms >= self.start_ms && self.end_ms.is_none_or(|end| self.elapsed_ms < end)
	}

	/// Start of the window
	pub fn start_ms(&self) -> u32 {
		self.start_ms
	}

	/// End of the window
	pub fn end_ms(&self) -> Option<u32> {
		self.end_ms
	}
}
