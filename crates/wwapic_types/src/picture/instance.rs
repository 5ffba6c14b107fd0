//! A single picture: properties, animations and lifecycle.
//!
//! # Lifecycle
//!
//! ```text
//!            start()               wait elapsed           time elapsed
//! Pending ─────────────▶ (waiting) ─────────────▶ Visible ─────────────▶ TimedOut
//!    │                                               ▲
//!    └──────────── start() without `wait` ───────────┘
//! ```
//!
//! - Becoming visible starts the `time_anim` window and the `time` countdown,
//!   plays the sound and, when the `wait` line named a spawn target, asks the
//!   host to place that part.
//! - `stop()` pauses every timer and the animation loop without touching the
//!   state; calling it twice is harmless.
//! - `TimedOut` is terminal; the picture keeps its last geometry.

use std::collections::BTreeMap;

use log::{debug, warn};
use serde::Serialize;

use super::{
	animation::{ACCELERATION_PREFIX, ANIMATION_PREFIX, Acceleration, Animation, AnimationKind},
	blink,
	config::EngineConfig,
	error::PictureError,
	host::PictureHost,
	parser::PropertyLine,
	property::{PropertyKind, PropertySet, Wait},
	render::RenderParams,
	source::PictureSource,
	timer::{AnimationWindow, Countdown},
	types::{Angle, Coord, PicturePointer},
};

/// Name of the convenience line switching repeat into fill mode
pub const FILL_NAME: &str = "fill";

/// Lifecycle state of a picture
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum PictureState {
	/// Not visible yet; the wait delay runs once started
	Pending,
	/// Visible and animating
	Visible,
	/// Duration elapsed; no longer visible
	TimedOut,
}

impl std::fmt::Display for PictureState {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		match self {
			Self::Pending => write!(f, "Pending"),
			Self::Visible => write!(f, "Visible"),
			Self::TimedOut => write!(f, "Timed out"),
		}
	}
}

/// Visual overlay defined by a picture script
#[derive(Debug, Clone)]
pub struct Picture {
	source: PictureSource,
	properties: PropertySet,
	animations: BTreeMap<AnimationKind, Animation>,
	accelerations: BTreeMap<AnimationKind, Acceleration>,
	state: PictureState,
	running: bool,
	waiting: bool,
	wait_timer: Option<Countdown>,
	duration_timer: Option<Countdown>,
	animation_window: AnimationWindow,
}

impl Picture {
	/// Creates a picture with every property at its default
	pub fn new(source: PictureSource, config: EngineConfig) -> Self {
		Self {
			source,
			properties: PropertySet::new(config),
			animations: BTreeMap::new(),
			accelerations: BTreeMap::new(),
			state: PictureState::Pending,
			running: false,
			waiting: false,
			wait_timer: None,
			duration_timer: None,
			animation_window: AnimationWindow::default(),
		}
	}

	/// Builds a picture from its script, one property per line
	///
	/// Any invalid line fails the whole construction.
	///
	/// # Examples
	///
	/// ```
	/// use wwapic_types::picture::{EngineConfig, Picture, PicturePointer, PictureSource};
	///
	/// # fn main() -> Result<(), wwapic_types::picture::PictureError> {
	/// let source = PictureSource::new(PicturePointer::new(10, 0));
	/// let picture = Picture::from_lines(
	/// 	source,
	/// 	EngineConfig::default(),
	/// 	["pos=40,80", "anim_straight=1,0", "time=1000"],
	/// )?;
	/// assert_eq!(picture.pos().x, 40.0);
	/// # Ok(())
	/// # }
	/// ```
	pub fn from_lines<I, S>(
		source: PictureSource,
		config: EngineConfig,
		lines: I,
	) -> Result<Self, PictureError>
	where
		I: IntoIterator<Item = S>,
		S: AsRef<str>,
	{
		let mut picture = Self::new(source, config);
		for line in lines {
			picture.apply_line(line.as_ref())?;
		}

		for kind in picture.accelerations.keys() {
			if !picture.animations.contains_key(kind) {
				warn!(
					"Picture {}: {ACCELERATION_PREFIX}{} has no animation",
					source.pointer,
					kind.suffix()
				);
			}
		}

		debug!(
			"Picture {} configured with {} animation(s)",
			source.pointer,
			picture.animations.len()
		);
		Ok(picture)
	}

	/// Configures one more line
	pub fn apply_line(&mut self, text: &str) -> Result<(), PictureError> {
		let line = PropertyLine::parse(text)?;
		let name = line.name();

		if name == FILL_NAME {
			return self.properties.apply_fill(&line);
		}
		if let Some(kind) = PropertyKind::from_name(name) {
			return self.properties.apply(kind, &line, &self.source);
		}
		if let Some(suffix) = name.strip_prefix(ANIMATION_PREFIX) {
			let kind = AnimationKind::from_suffix(suffix)
				.ok_or_else(|| PictureError::UnknownAnimation(name.to_string()))?;
			self.set_animation(Animation::parse(kind, &line)?);
			return Ok(());
		}
		if let Some(suffix) = name.strip_prefix(ACCELERATION_PREFIX) {
			let kind = AnimationKind::from_suffix(suffix)
				.ok_or_else(|| PictureError::UnknownAnimation(name.to_string()))?;
			self.set_acceleration(Acceleration::parse(kind, &line)?);
			return Ok(());
		}

		Err(PictureError::UnknownProperty(name.to_string()))
	}

	/// Installs an animation, replacing any animation of the same kind
	///
	/// An acceleration configured for that kind, before or after, applies.
	pub fn set_animation(&mut self, mut animation: Animation) {
		let kind = animation.kind();
		if let Some(acceleration) = self.accelerations.get(&kind) {
			animation.set_acceleration(*acceleration);
		}
		if self.animations.insert(kind, animation).is_some() {
			debug!("Picture {}: replaced {kind}", self.source.pointer);
		}
	}

	/// Configures the acceleration of an animation kind
	///
	/// Applied immediately when that animation exists, otherwise as soon as
	/// it is installed.
	pub fn set_acceleration(&mut self, acceleration: Acceleration) {
		let kind = acceleration.kind();
		if let Some(animation) = self.animations.get_mut(&kind) {
			animation.set_acceleration(acceleration);
		}
		self.accelerations.insert(kind, acceleration);
	}

	/// Starts the picture: the wait delay when configured, otherwise it
	/// appears immediately
	pub fn start(&mut self, host: &mut impl PictureHost) {
		if self.running || self.state == PictureState::TimedOut {
			return;
		}
		self.running = true;

		match self.state {
			PictureState::Pending => match self.properties.wait().map(Wait::delay_ms) {
				Some(delay_ms) => {
					self.wait_timer.get_or_insert_with(|| Countdown::new(delay_ms)).start();
					if !self.waiting {
						self.waiting = true;
						host.start_picture_waiting(self.source.pointer);
					}
					debug!("Picture {} waiting {delay_ms} ms", self.source.pointer);
				}
				None => self.appear(host),
			},
			PictureState::Visible => {
				self.animation_window.start();
				if let Some(timer) = self.duration_timer.as_mut() {
					timer.start();
				}
			}
			PictureState::TimedOut => {}
		}
	}

	/// Halts every timer and the animation loop, keeping the state
	pub fn stop(&mut self, host: &mut impl PictureHost) {
		if !self.running {
			return;
		}
		self.running = false;

		if let Some(timer) = self.wait_timer.as_mut() {
			timer.stop();
		}
		if let Some(timer) = self.duration_timer.as_mut() {
			timer.stop();
		}
		self.animation_window.stop();

		if self.waiting {
			self.waiting = false;
			host.stop_picture_waiting(self.source.pointer);
		}
		debug!("Picture {} stopped while {}", self.source.pointer, self.state);
	}

	/// Advances the picture by one tick of `elapsed_ms`
	///
	/// Returns `true` when the picture timed out during this tick.
	pub fn update(&mut self, elapsed_ms: u32, host: &mut impl PictureHost) -> bool {
		if !self.running {
			return false;
		}

		match self.state {
			PictureState::Pending => {
				if self.wait_timer.as_mut().is_some_and(|timer| timer.tick(elapsed_ms)) {
					self.appear(host);
				}
				false
			}
			PictureState::Visible => {
				if self.animation_window.tick(elapsed_ms) {
					for animation in self.animations.values_mut() {
						animation.step(&mut self.properties);
					}
				}
				if self.duration_timer.as_mut().is_some_and(|timer| timer.tick(elapsed_ms)) {
					self.time_out();
					return true;
				}
				false
			}
			PictureState::TimedOut => false,
		}
	}

	fn appear(&mut self, host: &mut impl PictureHost) {
		self.state = PictureState::Visible;

		self.animation_window = self.properties.animation_window();
		self.animation_window.start();

		self.duration_timer = self.properties.time().map(Countdown::new);
		if let Some(timer) = self.duration_timer.as_mut() {
			timer.start();
		}

		if self.source.sound != 0 {
			host.play_sound(self.source.sound);
		}
		if self.waiting {
			self.waiting = false;
			host.stop_picture_waiting(self.source.pointer);
		}
		if let Some(appearance) = self.properties.wait().and_then(Wait::spawn).copied() {
			host.appear_parts(&appearance);
		}

		debug!("Picture {} visible", self.source.pointer);
	}

	fn time_out(&mut self) {
		self.state = PictureState::TimedOut;
		self.running = false;
		self.animation_window.stop();
		debug!("Picture {} timed out", self.source.pointer);
	}

	/// Moves the base position by `delta`
	pub fn move_by(&mut self, delta: Coord<f64>) {
		self.properties.move_pos(delta);
	}

	/// Sets the drawn position, keeping the base
	pub fn jump_to(&mut self, pos: Coord<f64>) {
		self.properties.jump_pos(pos);
	}

	/// Grows by `delta` around the center
	pub fn resize(&mut self, delta: Coord<f64>) {
		self.properties.resize(delta);
	}

	/// Rotates by `degrees`
	pub fn rotate(&mut self, degrees: f64) {
		self.properties.rotate(degrees);
	}

	/// Adds `delta` to the opacity
	pub fn fade(&mut self, delta: f64) {
		self.properties.fade(delta);
	}

	/// Draw parameters, `None` unless visible
	pub fn render(&self) -> Option<RenderParams> {
		self.is_visible().then(|| RenderParams::compose(&self.properties, self.image_crop()))
	}

	/// Image crop currently drawn, following the shared blink switch
	pub fn image_crop(&self) -> Coord<i32> {
		if self.has_secondary_image() && !blink::is_primary() {
			self.source.second_image_crop
		} else {
			self.source.image_crop
		}
	}

	/// Returns `true` when a secondary crop is configured
	pub fn has_secondary_image(&self) -> bool {
		self.source.has_secondary_image()
	}

	/// Lifecycle state
	pub fn state(&self) -> PictureState {
		self.state
	}

	/// Returns `true` while visible
	pub fn is_visible(&self) -> bool {
		self.state == PictureState::Visible
	}

	/// Returns `true` once the duration elapsed
	pub fn is_timeout(&self) -> bool {
		self.state == PictureState::TimedOut
	}

	/// Returns `true` while timers and animations advance
	pub fn is_running(&self) -> bool {
		self.running
	}

	/// Description of the trigger part
	pub fn source(&self) -> &PictureSource {
		&self.source
	}

	/// Slot of this picture
	pub fn pointer(&self) -> PicturePointer {
		self.source.pointer
	}

	/// Sound played on appearance
	pub fn sound_number(&self) -> u32 {
		self.source.sound
	}

	/// Properties
	pub fn properties(&self) -> &PropertySet {
		&self.properties
	}

	/// Installed animation of `kind`
	pub fn animation(&self, kind: AnimationKind) -> Option<&Animation> {
		self.animations.get(&kind)
	}

	/// Installed animations in execution order
	pub fn animations(&self) -> impl Iterator<Item = &Animation> {
		self.animations.values()
	}

	/// Pictures to show once this one times out: the `time` follow-up first,
	/// then the `next` chain
	pub fn next_pictures(&self) -> Vec<PicturePointer> {
		self.properties
			.time_next()
			.into_iter()
			.chain(self.properties.next().iter().copied())
			.collect()
	}

	/// Current position
	pub fn pos(&self) -> Coord<f64> {
		self.properties.pos().current()
	}

	/// Base position
	pub fn base_pos(&self) -> Coord<f64> {
		self.properties.pos().base()
	}

	/// Cell size
	pub fn size(&self) -> Coord<f64> {
		self.properties.size()
	}

	/// Angle
	pub fn angle(&self) -> Angle {
		self.properties.angle()
	}

	/// Opacity as configured and animated, not clamped
	pub fn opacity(&self) -> f64 {
		self.properties.opacity().value()
	}

	/// Width covered by the picture
	pub fn width(&self) -> f64 {
		self.properties.width()
	}

	/// Height covered by the picture
	pub fn height(&self) -> f64 {
		self.properties.height()
	}

	/// Distance between neighbouring cells
	pub fn chip_size(&self) -> Coord<f64> {
		self.properties.chip_size()
	}

	/// Returns `true` in fill mode
	pub fn is_fill(&self) -> bool {
		self.properties.repeat().fill
	}
}
