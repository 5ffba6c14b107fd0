//! Typed picture properties.
//!
//! A [`PropertySet`] owns exactly one value of every [`PropertyKind`]. All of
//! them start from their defaults, so a picture is fully defined even when
//! its script only mentions a few properties. Each kind consumes the tokens
//! of its line through [`PropertySet::apply`].

use log::debug;
use serde::Serialize;

use super::{
	config::EngineConfig,
	error::PictureError,
	parser::PropertyLine,
	relative::RelativeValue,
	source::PictureSource,
	timer::AnimationWindow,
	types::{Angle, Color, Coord, PartsAppearance, PartsType, PicturePointer, Rate},
};

/// Default font size in pixels
pub const DEFAULT_FONT_SIZE: u32 = 16;

/// Default font family
pub const DEFAULT_FONT_FAMILY: &str = "sans-serif";

/// Every property a picture has
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum PropertyKind {
	/// `pos`
	Pos,
	/// `time`
	Time,
	/// `time_anim`
	AnimationTimer,
	/// `wait`
	Wait,
	/// `next`
	Next,
	/// `size`
	Size,
	/// `clip`
	Clip,
	/// `angle`
	Angle,
	/// `repeat`
	Repeat,
	/// `interval`
	Interval,
	/// `opacity`
	Opacity,
	/// `text`
	Text,
	/// `font`
	Font,
	/// `color`
	Color,
}

impl PropertyKind {
	/// All property kinds in declaration order
	pub const ALL: [Self; 14] = [
		Self::Pos,
		Self::Time,
		Self::AnimationTimer,
		Self::Wait,
		Self::Next,
		Self::Size,
		Self::Clip,
		Self::Angle,
		Self::Repeat,
		Self::Interval,
		Self::Opacity,
		Self::Text,
		Self::Font,
		Self::Color,
	];

	/// Name used in picture scripts
	pub fn name(self) -> &'static str {
		match self {
			Self::Pos => "pos",
			Self::Time => "time",
			Self::AnimationTimer => "time_anim",
			Self::Wait => "wait",
			Self::Next => "next",
			Self::Size => "size",
			Self::Clip => "clip",
			Self::Angle => "angle",
			Self::Repeat => "repeat",
			Self::Interval => "interval",
			Self::Opacity => "opacity",
			Self::Text => "text",
			Self::Font => "font",
			Self::Color => "color",
		}
	}

	/// Looks a property up by its script name
	pub fn from_name(name: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.name() == name)
	}
}

impl std::fmt::Display for PropertyKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		f.write_str(self.name())
	}
}

/// Position with a separate base
///
/// Straight moves and zooms shift the base; a circular move only jumps the
/// current position around it, so the orbit follows a moving anchor.
#[derive(Debug, Clone, Copy, PartialEq, Default, Serialize)]
pub struct Pos {
	base: Coord<f64>,
	current: Coord<f64>,
}

impl Pos {
	/// Sets both base and current position
	pub fn set(&mut self, pos: Coord<f64>) {
		self.base = pos;
		self.current = pos;
	}

	/// Moves the base and syncs the current position to it
	pub fn move_by(&mut self, delta: Coord<f64>) {
		self.base += delta;
		self.current = self.base;
	}

	/// Offsets base and current position alike, keeping any jump offset
	pub fn shift(&mut self, delta: Coord<f64>) {
		self.base += delta;
		self.current += delta;
	}

	/// Sets the current position, leaving the base untouched
	pub fn jump_to(&mut self, pos: Coord<f64>) {
		self.current = pos;
	}

	/// Base position
	pub fn base(&self) -> Coord<f64> {
		self.base
	}

	/// Current (drawn) position
	pub fn current(&self) -> Coord<f64> {
		self.current
	}
}

/// Part to spawn when the wait delay elapses, as written in the script
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct SpawnTarget {
	/// Part id, relative to the trigger part id
	pub parts_id: RelativeValue,
	/// X position, relative to the trigger x
	pub x: RelativeValue,
	/// Y position, relative to the trigger y
	pub y: RelativeValue,
	/// Layer of the part
	pub parts_type: PartsType,
}

impl SpawnTarget {
	/// Resolves every relative value against the trigger part
	pub fn resolve(&self, source: &PictureSource) -> PartsAppearance {
		PartsAppearance {
			trigger_pos: source.trigger_pos,
			x: self.x.resolve(source.trigger_pos.x),
			y: self.y.resolve(source.trigger_pos.y),
			parts_id: self.parts_id.resolve(source.trigger_parts_id),
			parts_type: self.parts_type,
		}
	}
}

/// `wait` property: delay before appearing, optionally spawning a part
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Wait {
	delay_ms: u32,
	target: SpawnTarget,
	appearance: PartsAppearance,
	spawns: bool,
}

impl Wait {
	/// Delay before the picture becomes visible
	pub fn delay_ms(&self) -> u32 {
		self.delay_ms
	}

	/// Target as written in the script
	pub fn target(&self) -> &SpawnTarget {
		&self.target
	}

	/// Resolved absolute part id of the spawn target
	pub fn target_parts_id(&self) -> i32 {
		self.appearance.parts_id
	}

	/// Appearance request, `None` when no spawn was configured
	pub fn spawn(&self) -> Option<&PartsAppearance> {
		self.spawns.then_some(&self.appearance)
	}
}

/// Horizontal text alignment
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextAlign {
	/// Text starts at the position
	#[default]
	Start,
	/// Text is centered on the position
	Center,
	/// Text ends at the position
	End,
}

impl TextAlign {
	/// Converts the script index
	pub fn from_index(index: i32) -> Option<Self> {
		match index {
			0 => Some(Self::Start),
			1 => Some(Self::Center),
			2 => Some(Self::End),
			_ => None,
		}
	}

	/// Canvas name of the alignment
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Start => "start",
			Self::Center => "center",
			Self::End => "end",
		}
	}
}

/// Vertical text baseline
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub enum TextBaseline {
	/// Top of the em square
	#[default]
	Top,
	/// Middle of the em square
	Middle,
	/// Alphabetic baseline
	Alphabetic,
	/// Bottom of the em square
	Bottom,
}

impl TextBaseline {
	/// Converts the script index
	pub fn from_index(index: i32) -> Option<Self> {
		match index {
			0 => Some(Self::Top),
			1 => Some(Self::Middle),
			2 => Some(Self::Alphabetic),
			3 => Some(Self::Bottom),
			_ => None,
		}
	}

	/// Canvas name of the baseline
	pub fn as_str(self) -> &'static str {
		match self {
			Self::Top => "top",
			Self::Middle => "middle",
			Self::Alphabetic => "alphabetic",
			Self::Bottom => "bottom",
		}
	}
}

/// `text` property
#[derive(Debug, Clone, PartialEq, Eq, Default, Serialize)]
pub struct Text {
	/// Text to draw
	pub content: String,
	/// Horizontal alignment
	pub align: TextAlign,
	/// Vertical baseline
	pub baseline: TextBaseline,
}

/// `font` property
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Font {
	/// Size in pixels
	pub size: u32,
	/// Bold weight
	pub bold: bool,
	/// Italic style
	pub italic: bool,
	/// Font family
	pub family: String,
}

impl Default for Font {
	fn default() -> Self {
		Self {
			size: DEFAULT_FONT_SIZE,
			bold: false,
			italic: false,
			family: DEFAULT_FONT_FAMILY.to_string(),
		}
	}
}

impl Font {
	/// CSS font shorthand, e.g. `"italic bold 16px sans-serif"`
	pub fn descriptor(&self) -> String {
		let style = if self.italic { "italic" } else { "normal" };
		let weight = if self.bold { "bold" } else { "normal" };
		format!("{style} {weight} {}px {}", self.size, self.family)
	}
}

/// `repeat` property together with the `fill` switch
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Repeat {
	/// Explicit cell count
	pub count: Coord<i32>,
	/// Tile over the whole field instead of using `count`
	pub fill: bool,
}

impl Default for Repeat {
	fn default() -> Self {
		Self {
			count: Coord::new(1, 1),
			fill: false,
		}
	}
}

/// `interval` property
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize)]
pub struct Interval {
	/// Gap between neighbouring cells
	pub gap: Coord<i32>,
	/// Diagonal stagger: `x` per row, `y` per column
	pub shift: Coord<i32>,
}

/// One value of every property kind
#[derive(Debug, Clone, PartialEq)]
pub struct PropertySet {
	config: EngineConfig,
	pos: Pos,
	time: Option<u32>,
	time_next: Option<PicturePointer>,
	animation_timer: Option<(u32, Option<u32>)>,
	wait: Option<Wait>,
	next: Vec<PicturePointer>,
	size: Coord<f64>,
	clip: Coord<i32>,
	angle: Angle,
	repeat: Repeat,
	interval: Interval,
	opacity: Rate,
	text: Text,
	font: Font,
	color: Color,
}

impl PropertySet {
	/// Creates a property set with every property at its default
	pub fn new(config: EngineConfig) -> Self {
		let chip = config.chip_size_f64();
		Self {
			config,
			pos: Pos::default(),
			time: None,
			time_next: None,
			animation_timer: None,
			wait: None,
			next: Vec::new(),
			size: Coord::new(chip, chip),
			clip: Coord::new(1, 1),
			angle: Angle::default(),
			repeat: Repeat::default(),
			interval: Interval::default(),
			opacity: Rate::opaque(),
			text: Text::default(),
			font: Font::default(),
			color: Color::default(),
		}
	}

	/// Configures `kind` from the tokens of `line`
	pub fn apply(
		&mut self,
		kind: PropertyKind,
		line: &PropertyLine,
		source: &PictureSource,
	) -> Result<(), PictureError> {
		match kind {
			PropertyKind::Pos => {
				let x = line.require_int(0)?;
				let y = line.require_int(1)?;
				self.pos.set(Coord::new(x, y).to_f64());
			}
			PropertyKind::Time => {
				let time = non_negative(line, 0)?;
				let next = match line.int(1)? {
					Some(_) => non_negative(line, 1)?,
					None => 0,
				};
				self.time = Some(time);
				self.time_next = i32::try_from(next)
					.ok()
					.filter(|&parts_number| parts_number != 0)
					.map(|parts_number| PicturePointer::new(parts_number, source.pointer.id));
			}
			PropertyKind::AnimationTimer => {
				let start = non_negative(line, 0)?;
				let end = match line.int(1)? {
					Some(_) => Some(non_negative(line, 1)?),
					None => None,
				};
				if end.is_some_and(|end| end < start) {
					return Err(PictureError::validation(line.name(), "end is before start"));
				}
				self.animation_timer = Some((start, end));
			}
			PropertyKind::Wait => {
				let delay_ms = non_negative(line, 0)?;
				let target = SpawnTarget {
					parts_id: line.relative_or(1, RelativeValue::SAME)?,
					x: line.relative_or(2, RelativeValue::SAME)?,
					y: line.relative_or(3, RelativeValue::SAME)?,
					parts_type: line.parts_type(4)?.unwrap_or_default(),
				};
				self.wait = Some(Wait {
					delay_ms,
					target,
					appearance: target.resolve(source),
					spawns: line.len() >= 4,
				});
			}
			PropertyKind::Next => {
				if line.len() % 2 != 0 {
					return Err(PictureError::MissingValue {
						property: line.name().to_string(),
						index: line.len(),
					});
				}
				let own = source.pointer;
				self.next = (0..line.len())
					.step_by(2)
					.map(|i| {
						Ok(PicturePointer::new(
							line.require_relative(i)?.resolve(own.parts_number),
							line.require_relative(i + 1)?.resolve(own.id),
						))
					})
					.collect::<Result<_, PictureError>>()?;
			}
			PropertyKind::Size => {
				let w = non_negative(line, 0)?;
				let h = non_negative(line, 1)?;
				self.size = Coord::new(f64::from(w), f64::from(h));
			}
			PropertyKind::Clip => {
				let w = line.require_int(0)?;
				let h = line.require_int(1)?;
				if w < 1 || h < 1 {
					return Err(PictureError::validation(line.name(), "clip must be at least 1x1"));
				}
				self.clip = Coord::new(w, h);
			}
			PropertyKind::Angle => {
				self.angle = Angle::from_degrees(line.require_float(0)?);
			}
			PropertyKind::Repeat => {
				let x = line.require_int(0)?;
				let y = line.require_int(1)?;
				if x < 0 || y < 0 {
					return Err(PictureError::validation(line.name(), "count must not be negative"));
				}
				self.repeat.count = Coord::new(x, y);
			}
			PropertyKind::Interval => {
				self.interval = Interval {
					gap: Coord::new(line.require_int(0)?, line.require_int(1)?),
					shift: Coord::new(line.int_or(2, 0)?, line.int_or(3, 0)?),
				};
			}
			PropertyKind::Opacity => {
				self.opacity.set(line.require_float(0)?)?;
			}
			PropertyKind::Text => {
				let content = line.require_string(0)?;
				let align_index = line.int_or(1, 0)?;
				let baseline_index = line.int_or(2, 0)?;
				let align = TextAlign::from_index(align_index).ok_or_else(|| {
					PictureError::validation(line.name(), format!("no alignment {align_index}"))
				})?;
				let baseline = TextBaseline::from_index(baseline_index).ok_or_else(|| {
					PictureError::validation(line.name(), format!("no baseline {baseline_index}"))
				})?;
				self.text = Text {
					content,
					align,
					baseline,
				};
			}
			PropertyKind::Font => {
				let size = line.require_int(0)?;
				if size < 1 {
					return Err(PictureError::validation(line.name(), "size must be at least 1"));
				}
				self.font = Font {
					size: size.unsigned_abs(),
					bold: line.bool_or(1, false)?,
					italic: line.bool_or(2, false)?,
					family: line.string_or(3, DEFAULT_FONT_FAMILY)?,
				};
			}
			PropertyKind::Color => {
				self.color = Color::new(channel(line, 0)?, channel(line, 1)?, channel(line, 2)?);
			}
		}

		debug!("Configured `{kind}` with {:?}", line.tokens());
		Ok(())
	}

	/// Applies the `fill` switch
	pub fn apply_fill(&mut self, line: &PropertyLine) -> Result<(), PictureError> {
		let fill = line.bool(0)?.ok_or_else(|| PictureError::MissingValue {
			property: line.name().to_string(),
			index: 0,
		})?;
		self.repeat.fill = fill;
		debug!("Fill mode {}", if fill { "on" } else { "off" });
		Ok(())
	}

	/// Moves the base position and syncs the current position
	pub fn move_pos(&mut self, delta: Coord<f64>) {
		self.pos.move_by(delta);
	}

	/// Sets the current position only
	pub fn jump_pos(&mut self, pos: Coord<f64>) {
		self.pos.jump_to(pos);
	}

	/// Grows the size by `delta`, shifting the position so the center stays put
	pub fn resize(&mut self, delta: Coord<f64>) {
		self.size += delta;
		self.pos.shift(Coord::new(-delta.x / 2.0, -delta.y / 2.0));
	}

	/// Rotates by `degrees`
	pub fn rotate(&mut self, degrees: f64) {
		self.angle.rotate(degrees);
	}

	/// Adds `delta` to the opacity without range checks
	pub fn fade(&mut self, delta: f64) {
		self.opacity.add(delta);
	}

	/// Engine configuration
	pub fn config(&self) -> &EngineConfig {
		&self.config
	}

	/// Position
	pub fn pos(&self) -> &Pos {
		&self.pos
	}

	/// Visible duration in milliseconds
	pub fn time(&self) -> Option<u32> {
		self.time
	}

	/// Fresh animation window built from `time_anim`
	pub fn animation_window(&self) -> AnimationWindow {
		match self.animation_timer {
			Some((start, end)) => AnimationWindow::new(start, end),
			None => AnimationWindow::new(0, None),
		}
	}

	/// `wait` property
	pub fn wait(&self) -> Option<&Wait> {
		self.wait.as_ref()
	}

	/// Picture named by the second `time` token, shown in the same slot
	pub fn time_next(&self) -> Option<PicturePointer> {
		self.time_next
	}

	/// Resolved next pictures
	pub fn next(&self) -> &[PicturePointer] {
		&self.next
	}

	/// Size of one cell in pixels
	pub fn size(&self) -> Coord<f64> {
		self.size
	}

	/// Crop size in chips
	pub fn clip(&self) -> Coord<i32> {
		self.clip
	}

	/// Angle
	pub fn angle(&self) -> Angle {
		self.angle
	}

	/// Repeat settings
	pub fn repeat(&self) -> &Repeat {
		&self.repeat
	}

	/// Interval settings
	pub fn interval(&self) -> &Interval {
		&self.interval
	}

	/// Opacity
	pub fn opacity(&self) -> Rate {
		self.opacity
	}

	/// Text
	pub fn text(&self) -> &Text {
		&self.text
	}

	/// Font
	pub fn font(&self) -> &Font {
		&self.font
	}

	/// Color
	pub fn color(&self) -> Color {
		self.color
	}

	/// Distance between the origins of neighbouring cells
	pub fn chip_size(&self) -> Coord<f64> {
		self.size + self.interval.gap.to_f64()
	}

	/// Cell count actually drawn; fill mode covers the field plus one cell
	pub fn repeat_count(&self) -> Coord<i32> {
		if !self.repeat.fill {
			return self.repeat.count;
		}
		let pitch = self.chip_size();
		Coord::new(
			fill_count(self.config.field_width, pitch.x),
			fill_count(self.config.field_height, pitch.y),
		)
	}

	/// Width covered by the picture
	pub fn width(&self) -> f64 {
		if self.repeat.fill {
			return f64::from(self.config.field_width);
		}
		extent(self.repeat.count.x, self.chip_size().x, self.interval.gap.x)
	}

	/// Height covered by the picture
	pub fn height(&self) -> f64 {
		if self.repeat.fill {
			return f64::from(self.config.field_height);
		}
		extent(self.repeat.count.y, self.chip_size().y, self.interval.gap.y)
	}
}

fn non_negative(line: &PropertyLine, index: usize) -> Result<u32, PictureError> {
	let value = line.require_int(index)?;
	u32::try_from(value).map_err(|_| {
		PictureError::validation(line.name(), format!("{value} at index {index} is negative"))
	})
}

fn channel(line: &PropertyLine, index: usize) -> Result<u8, PictureError> {
	let value = line.require_int(index)?;
	u8::try_from(value).map_err(|_| {
		PictureError::validation(line.name(), format!("channel {value} is outside 0..=255"))
	})
}

fn fill_count(field: u32, pitch: f64) -> i32 {
	if !pitch.is_finite() || pitch <= 0.0 {
		return 1;
	}
	// cells narrower than a pixel are counted as one pixel wide
	let cells = (f64::from(field) / pitch.max(1.0)).ceil() as i32;
	cells.saturating_add(1)
}

fn extent(count: i32, pitch: f64, gap: i32) -> f64 {
	(f64::from(count) * pitch - f64::from(gap)).max(0.0)
}
