//! Host that records every callback

use wwapic_rs::prelude::*;

/// Callback made by a picture, in call order
#[derive(Debug, Clone, PartialEq, Eq)]
pub(crate) enum HostEvent {
	Sound(u32),
	Appear(PartsAppearance),
	StartWaiting(PicturePointer),
	StopWaiting(PicturePointer),
}

#[derive(Debug, Default)]
pub(crate) struct RecordingHost {
	pub(crate) events: Vec<HostEvent>,
}

impl RecordingHost {
	pub(crate) fn sounds(&self) -> Vec<u32> {
		self.events
			.iter()
			.filter_map(|event| match event {
				HostEvent::Sound(index) => Some(*index),
				_ => None,
			})
			.collect()
	}

	pub(crate) fn appearances(&self) -> Vec<PartsAppearance> {
		self.events
			.iter()
			.filter_map(|event| match event {
				HostEvent::Appear(appearance) => Some(*appearance),
				_ => None,
			})
			.collect()
	}
}

impl PictureHost for RecordingHost {
	fn play_sound(&mut self, index: u32) {
		log::info!("Sound {index}");
		self.events.push(HostEvent::Sound(index));
	}

	fn appear_parts(&mut self, appearance: &PartsAppearance) {
		log::info!("Appear {appearance:?}");
		self.events.push(HostEvent::Appear(*appearance));
	}

	fn start_picture_waiting(&mut self, picture: PicturePointer) {
		self.events.push(HostEvent::StartWaiting(picture));
	}

	fn stop_picture_waiting(&mut self, picture: PicturePointer) {
		self.events.push(HostEvent::StopWaiting(picture));
	}
}
