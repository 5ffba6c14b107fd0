//! Draw parameters handed to the external renderer once per frame.

use serde::Serialize;

use super::{
	property::PropertySet,
	types::{Coord, Rect},
};

/// Everything the renderer needs to draw one visible picture
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct RenderParams {
	/// Crop of the chip image, in pixels
	pub source: Rect,
	/// Area covered by the picture, in pixels
	pub dest: Rect,
	/// Rotation in radians
	pub rotation: f64,
	/// Point the rotation is applied around
	pub pivot: Coord<f64>,
	/// Global alpha, clamped into `[0, 1]`
	pub opacity: f64,
	/// CSS font shorthand
	pub font: String,
	/// CSS fill color
	pub fill_style: String,
	/// Canvas text alignment
	pub text_align: &'static str,
	/// Canvas text baseline
	pub text_baseline: &'static str,
	/// Text drawn at the picture position
	pub text: String,
	/// Number of cells per axis
	pub repeat: Coord<i32>,
	/// Distance between neighbouring cells
	pub chip_size: Coord<f64>,
	/// Diagonal stagger between cells
	pub shift: Coord<f64>,
	/// Destination of every repeated cell, row by row
	pub tiles: Vec<Rect>,
}

impl RenderParams {
	/// Composes the draw parameters from a property set and the image crop
	/// currently selected, given in chips
	pub fn compose(properties: &PropertySet, crop: Coord<i32>) -> Self {
		let chip = properties.config().chip_size_f64();
		let clip = properties.clip().to_f64();
		let pos = properties.pos().current();
		let dest = Rect::new(pos.x, pos.y, properties.width(), properties.height());
		let text = properties.text();

		Self {
			source: Rect::new(
				f64::from(crop.x) * chip,
				f64::from(crop.y) * chip,
				clip.x * chip,
				clip.y * chip,
			),
			dest,
			rotation: properties.angle().radians(),
			pivot: dest.center(),
			opacity: properties.opacity().clamped_value(),
			font: properties.font().descriptor(),
			fill_style: properties.color().css(),
			text_align: text.align.as_str(),
			text_baseline: text.baseline.as_str(),
			text: text.content.clone(),
			repeat: properties.repeat_count(),
			chip_size: properties.chip_size(),
			shift: properties.interval().shift.to_f64(),
			tiles: tile_plan(properties),
		}
	}
}

/// Destination rectangle of every repeated cell
///
/// Cells advance by the pitch along a row and by the `y` shift per column;
/// rows advance by the pitch and by the `x` shift. In fill mode the first
/// cell starts one pitch before the field edge so scrolling never shows a gap.
pub fn tile_plan(properties: &PropertySet) -> Vec<Rect> {
	let count = properties.repeat_count();
	let pitch = properties.chip_size();
	let size = properties.size();
	let shift = properties.interval().shift.to_f64();
	let pos = properties.pos().current();

	let origin = if properties.repeat().fill {
		Coord::new(wrap(pos.x, pitch.x), wrap(pos.y, pitch.y))
	} else {
		pos
	};

	let columns = usize::try_from(count.x).unwrap_or(0);
	let rows = usize::try_from(count.y).unwrap_or(0);
	let mut tiles = Vec::with_capacity(columns.checked_mul(rows).unwrap_or(0));

	let mut row_begin = origin;
	for _ in 0..rows {
		let mut cell = row_begin;
		for _ in 0..columns {
			tiles.push(Rect::new(cell.x, cell.y, size.x, size.y));
			cell.x += pitch.x;
			cell.y += shift.y;
		}
		row_begin.y += pitch.y;
		row_begin.x += shift.x;
	}
	tiles
}

fn wrap(value: f64, pitch: f64) -> f64 {
	if !pitch.is_finite() || pitch <= 0.0 {
		return value;
	}
	value.rem_euclid(pitch) - pitch
}
