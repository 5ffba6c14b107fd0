//! Description of the map part that triggered a picture.

use super::types::{Coord, PicturePointer};

/// Everything a picture needs to know about the part that displays it
///
/// Relative values in a picture script resolve against these fields: `next`
/// pointers against [`PictureSource::pointer`], the `wait` spawn target
/// against the trigger part id and position.
///
/// # Examples
///
/// ```
/// use wwapic_types::picture::{Coord, PicturePointer, PictureSource};
///
/// let source = PictureSource::new(PicturePointer::new(120, 3))
/// 	.with_trigger(Coord::new(5, 6), 120)
/// 	.with_image(Coord::new(2, 0), Coord::new(3, 0))
/// 	.with_sound(12);
/// assert!(source.has_secondary_image());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct PictureSource {
	/// Slot of the picture being defined
	pub pointer: PicturePointer,
	/// Position of the trigger part, in chips
	pub trigger_pos: Coord<i32>,
	/// Id of the trigger part
	pub trigger_parts_id: i32,
	/// Primary image crop, in chips
	pub image_crop: Coord<i32>,
	/// Secondary image crop used for blinking, `(0, 0)` when absent
	pub second_image_crop: Coord<i32>,
	/// Sound played when the picture appears, 0 for silence
	pub sound: u32,
}

impl PictureSource {
	/// Creates a source for the given slot; the trigger part defaults to the
	/// defining part
	pub fn new(pointer: PicturePointer) -> Self {
		Self {
			pointer,
			trigger_parts_id: pointer.parts_number,
			..Self::default()
		}
	}

	/// Sets the trigger part position and id
	pub fn with_trigger(mut self, pos: Coord<i32>, parts_id: i32) -> Self {
		self.trigger_pos = pos;
		self.trigger_parts_id = parts_id;
		self
	}

	/// Sets the primary and secondary image crops
	pub fn with_image(mut self, crop: Coord<i32>, second_crop: Coord<i32>) -> Self {
		self.image_crop = crop;
		self.second_image_crop = second_crop;
		self
	}

	/// Sets the sound index
	pub fn with_sound(mut self, sound: u32) -> Self {
		self.sound = sound;
		self
	}

	/// Returns `true` when a secondary crop is configured
	pub fn has_secondary_image(&self) -> bool {
		self.second_image_crop != Coord::new(0, 0)
	}
}
