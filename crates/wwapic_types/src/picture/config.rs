//! Engine-wide configuration.
//!
//! Field geometry, tick resolution and blink cadence are fixed for a running
//! game, so every picture carries a copy of the same [`EngineConfig`].

use serde::Deserialize;

/// Configuration shared by every picture of a running game.
///
/// # Examples
///
/// ```
/// use wwapic_types::picture::EngineConfig;
///
/// let config = EngineConfig::default();
/// assert_eq!(config.chip_size, 40);
///
/// // A smaller field with 20 ms ticks
/// let config = EngineConfig::new(32, 320, 320).with_tick_ms(20);
/// assert_eq!(config.tick_ms, 20);
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct EngineConfig {
	/// Size of one map chip in pixels
	pub chip_size: u32,
	/// Width of the visible field in pixels
	pub field_width: u32,
	/// Height of the visible field in pixels
	pub field_height: u32,
	/// Milliseconds advanced by one host tick
	pub tick_ms: u32,
	/// Number of ticks between primary/secondary image flips
	pub blink_period_ticks: u32,
	/// Number of picture slots in a store
	pub store_capacity: usize,
}

impl Default for EngineConfig {
	fn default() -> Self {
		Self {
			chip_size: 40,
			field_width: 440,
			field_height: 440,
			tick_ms: 10,
			blink_period_ticks: 30,
			store_capacity: 100,
		}
	}
}

impl EngineConfig {
	/// Create a configuration with custom field geometry and default timing.
	///
	/// # Arguments
	/// * `chip_size` - Size of one chip in pixels
	/// * `field_width` - Visible field width in pixels
	/// * `field_height` - Visible field height in pixels
	pub fn new(chip_size: u32, field_width: u32, field_height: u32) -> Self {
		Self {
			chip_size,
			field_width,
			field_height,
			..Self::default()
		}
	}

	/// Replaces the tick resolution
	pub fn with_tick_ms(mut self, tick_ms: u32) -> Self {
		self.tick_ms = tick_ms;
		self
	}

	/// Replaces the store capacity
	pub fn with_store_capacity(mut self, store_capacity: usize) -> Self {
		self.store_capacity = store_capacity;
		self
	}

	/// Chip size as a real number
	pub fn chip_size_f64(&self) -> f64 {
		f64::from(self.chip_size)
	}
}
