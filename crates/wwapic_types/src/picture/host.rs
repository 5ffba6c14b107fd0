//! Interface to the game runtime that hosts the pictures.

use log::trace;

use super::types::{PartsAppearance, PicturePointer};

/// Collaborators a picture calls back into while it runs
///
/// The host also owns the periodic tick: it calls
/// [`PictureStore::update`](super::PictureStore::update) once per tick.
pub trait PictureHost {
	/// Plays the sound with the given index
	fn play_sound(&mut self, index: u32);

	/// Places a part on the field
	fn appear_parts(&mut self, appearance: &PartsAppearance);

	/// A picture started waiting for its delay to elapse
	fn start_picture_waiting(&mut self, picture: PicturePointer);

	/// A picture stopped waiting, because it appeared or was stopped
	fn stop_picture_waiting(&mut self, picture: PicturePointer);
}

/// Host that ignores every callback
#[derive(Debug, Clone, Copy, Default)]
pub struct NullHost;

impl PictureHost for NullHost {
	fn play_sound(&mut self, index: u32) {
		trace!("Ignoring sound {index}");
	}

	fn appear_parts(&mut self, appearance: &PartsAppearance) {
		trace!("Ignoring parts appearance {appearance:?}");
	}

	fn start_picture_waiting(&mut self, _picture: PicturePointer) {}

	fn stop_picture_waiting(&mut self, _picture: PicturePointer) {}
}
