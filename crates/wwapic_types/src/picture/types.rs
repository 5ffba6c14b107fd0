//! Value types shared by properties, animations and render parameters.

use std::{
	fmt::Formatter,
	ops::{Add, AddAssign, Sub},
};

use serde::Serialize;

use super::error::PictureError;

/// Mutable `(x, y)` pair
///
/// Integer coordinates are used for chip-unit values (crop, clip, repeat),
/// real coordinates for pixel values that animations move in sub-pixel steps.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Coord<T> {
	/// Horizontal component
	pub x: T,
	/// Vertical component
	pub y: T,
}

impl<T> Coord<T> {
	/// Creates a new coordinate
	pub const fn new(x: T, y: T) -> Self {
		Self {
			x,
			y,
		}
	}
}

impl Coord<i32> {
	/// Converts chip-unit coordinates into real coordinates
	pub fn to_f64(self) -> Coord<f64> {
		Coord::new(f64::from(self.x), f64::from(self.y))
	}
}

impl<T: Add<Output = T>> Add for Coord<T> {
	type Output = Self;

	fn add(self, rhs: Self) -> Self::Output {
		Self::new(self.x + rhs.x, self.y + rhs.y)
	}
}

impl<T: Sub<Output = T>> Sub for Coord<T> {
	type Output = Self;

	fn sub(self, rhs: Self) -> Self::Output {
		Self::new(self.x - rhs.x, self.y - rhs.y)
	}
}

impl<T: AddAssign> AddAssign for Coord<T> {
	fn add_assign(&mut self, rhs: Self) {
		self.x += rhs.x;
		self.y += rhs.y;
	}
}

impl<T: std::fmt::Display> std::fmt::Display for Coord<T> {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "({}, {})", self.x, self.y)
	}
}

/// Axis aligned rectangle in pixels
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Rect {
	/// Left edge
	pub x: f64,
	/// Top edge
	pub y: f64,
	/// Width
	pub width: f64,
	/// Height
	pub height: f64,
}

impl Rect {
	/// Creates a new rectangle
	pub const fn new(x: f64, y: f64, width: f64, height: f64) -> Self {
		Self {
			x,
			y,
			width,
			height,
		}
	}

	/// Center point of the rectangle
	pub fn center(&self) -> Coord<f64> {
		Coord::new(self.x + self.width / 2.0, self.y + self.height / 2.0)
	}
}

/// Angle in degrees, always normalized into `[0, 360)`
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Angle {
	degrees: f64,
}

impl Angle {
	/// Creates a normalized angle from degrees
	pub fn from_degrees(degrees: f64) -> Self {
		Self {
			degrees: normalize_degrees(degrees),
		}
	}

	/// Angle in degrees
	pub fn degrees(&self) -> f64 {
		self.degrees
	}

	/// Angle in radians
	pub fn radians(&self) -> f64 {
		self.degrees.to_radians()
	}

	/// Adds `delta` degrees and re-normalizes
	pub fn rotate(&mut self, delta: f64) {
		self.degrees = normalize_degrees(self.degrees + delta);
	}
}

fn normalize_degrees(degrees: f64) -> f64 {
	if !degrees.is_finite() {
		return 0.0;
	}
	let normalized = degrees.rem_euclid(360.0);
	// rem_euclid can round up to exactly 360.0 for tiny negative inputs
	if normalized >= 360.0 {
		0.0
	} else {
		normalized
	}
}

/// Range policy of a [`Rate`]
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum RateMode {
	/// Values must stay within `[0.0, 1.0]`
	Clamped,
	/// Any value is accepted
	Unbounded,
}

/// Real value with a range policy
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct Rate {
	value: f64,
	mode: RateMode,
}

impl Rate {
	/// Creates a clamped rate, failing when `value` is outside `[0.0, 1.0]`
	pub fn clamped(value: f64) -> Result<Self, PictureError> {
		let mut rate = Self::opaque();
		rate.set(value)?;
		Ok(rate)
	}

	/// Clamped rate at full value
	pub const fn opaque() -> Self {
		Self {
			value: 1.0,
			mode: RateMode::Clamped,
		}
	}

	/// Creates an unbounded rate
	pub fn unbounded(value: f64) -> Self {
		Self {
			value,
			mode: RateMode::Unbounded,
		}
	}

	/// Current value
	pub fn value(&self) -> f64 {
		self.value
	}

	/// Range policy
	pub fn mode(&self) -> RateMode {
		self.mode
	}

	/// Replaces the value, enforcing the range policy
	pub fn set(&mut self, value: f64) -> Result<(), PictureError> {
		if self.mode == RateMode::Clamped && !(0.0..=1.0).contains(&value) {
			return Err(PictureError::validation(
				"opacity",
				format!("{value} is outside [0.0, 1.0]"),
			));
		}
		self.value = value;
		Ok(())
	}

	/// Adds `delta` without enforcing the range policy
	pub fn add(&mut self, delta: f64) {
		self.value += delta;
	}

	/// Value clamped into `[0.0, 1.0]`
	pub fn clamped_value(&self) -> f64 {
		self.value.clamp(0.0, 1.0)
	}
}

/// 24-bit RGB color
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Color {
	/// Red channel
	pub red: u8,
	/// Green channel
	pub green: u8,
	/// Blue channel
	pub blue: u8,
}

impl Color {
	/// Creates a new color
	pub const fn new(red: u8, green: u8, blue: u8) -> Self {
		Self {
			red,
			green,
			blue,
		}
	}

	/// CSS color string understood by the renderer
	pub fn css(&self) -> String {
		format!("rgb({}, {}, {})", self.red, self.green, self.blue)
	}
}

/// Identifies a picture slot by the parts that defines it and its store id
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub struct PicturePointer {
	/// Number of the part that defines the picture
	pub parts_number: i32,
	/// Picture store id
	pub id: i32,
}

impl PicturePointer {
	/// Creates a new pointer
	pub const fn new(parts_number: i32, id: i32) -> Self {
		Self {
			parts_number,
			id,
		}
	}
}

impl std::fmt::Display for PicturePointer {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		write!(f, "parts {} / picture {}", self.parts_number, self.id)
	}
}

/// Layer a part lives on
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum PartsType {
	/// Background map part
	Map,
	/// Object part
	#[default]
	Object,
}

impl PartsType {
	/// Converts the boolean config value (`true` = map)
	pub fn from_bool(is_map: bool) -> Self {
		if is_map { Self::Map } else { Self::Object }
	}
}

impl std::fmt::Display for PartsType {
	fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Map => write!(f, "Map"),
			Self::Object => write!(f, "Object"),
		}
	}
}

/// Fully resolved request to make a part appear on the field
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct PartsAppearance {
	/// Position of the part that triggered the picture
	pub trigger_pos: Coord<i32>,
	/// Absolute target x
	pub x: i32,
	/// Absolute target y
	pub y: i32,
	/// Absolute part id to place
	pub parts_id: i32,
	/// Layer of the part
	pub parts_type: PartsType,
}
