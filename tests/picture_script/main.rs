//! Integration tests running whole picture scripts through `wwapic-rs`

mod chain;
mod lifecycle;
mod recording;
mod scenarios;

use wwapic_rs::prelude::*;

/// Slot of the picture under test unless a test says otherwise
pub(crate) const PARTS_NUMBER: i32 = 100;

/// Source with the trigger part 7 at chip (4, 5)
pub(crate) fn source(id: i32) -> PictureSource {
	PictureSource::new(PicturePointer::new(PARTS_NUMBER, id)).with_trigger(Coord::new(4, 5), 7)
}

/// Builds a picture with the default configuration
pub(crate) fn build(lines: &[&str]) -> Result<Picture, PictureError> {
	Picture::from_lines(source(0), EngineConfig::default(), lines)
}
