//! Per-tick property animations.
//!
//! An [`Animation`] never owns the property it changes. It names its target
//! through [`AnimationKind::target`] and receives the owning picture's
//! [`PropertySet`] on every step. Each animation applies its delta first and
//! then adds its acceleration to the delta, once per tick.
//!
//! | Line | Acceleration line | Target |
//! |------|-------------------|--------|
//! | `anim_straight=dx,dy` | `accel_straight=ax,ay` | `pos` (moves the base) |
//! | `anim_circle=rx,ry,speed[,angle]` | `accel_circle=angular[,rx,ry]` | `pos` (jumps around the base) |
//! | `anim_zoom=dx,dy` | `accel_zoom=ax,ay` | `size` (centered) |
//! | `anim_rotate=deg` | `accel_rotate=deg` | `angle` |
//! | `anim_fade=value` | `accel_fade=value` | `opacity` (unclamped) |

use log::trace;
use serde::Serialize;

use super::{
	error::PictureError,
	parser::PropertyLine,
	property::{PropertyKind, PropertySet},
	types::{Coord, Rate},
};

/// Prefix of animation lines
pub const ANIMATION_PREFIX: &str = "anim_";

/// Prefix of acceleration lines
pub const ACCELERATION_PREFIX: &str = "accel_";

/// Every animation a picture can run, in execution order
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize)]
pub enum AnimationKind {
	/// Straight line movement
	StraightMove,
	/// Circular movement around the base position
	CircleMove,
	/// Centered size change
	Zoom,
	/// Rotation
	Rotate,
	/// Opacity change
	Fade,
}

impl AnimationKind {
	/// All animation kinds in execution order
	pub const ALL: [Self; 5] =
		[Self::StraightMove, Self::CircleMove, Self::Zoom, Self::Rotate, Self::Fade];

	/// Name without the `anim_`/`accel_` prefix
	pub fn suffix(self) -> &'static str {
		match self {
			Self::StraightMove => "straight",
			Self::CircleMove => "circle",
			Self::Zoom => "zoom",
			Self::Rotate => "rotate",
			Self::Fade => "fade",
		}
	}

	/// Looks a kind up by its suffix
	pub fn from_suffix(suffix: &str) -> Option<Self> {
		Self::ALL.into_iter().find(|kind| kind.suffix() == suffix)
	}

	/// Property this animation changes
	pub fn target(self) -> PropertyKind {
		match self {
			Self::StraightMove | Self::CircleMove => PropertyKind::Pos,
			Self::Zoom => PropertyKind::Size,
			Self::Rotate => PropertyKind::Angle,
			Self::Fade => PropertyKind::Opacity,
		}
	}
}

impl std::fmt::Display for AnimationKind {
	fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
		write!(f, "{ANIMATION_PREFIX}{}", self.suffix())
	}
}

/// Acceleration of one animation, same shape as its delta
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Acceleration {
	/// Added to the straight move delta
	StraightMove(Coord<f64>),
	/// Added to the circular speed and radius
	CircleMove {
		/// Degrees added to the speed each tick
		angular: f64,
		/// Added to the radius each tick
		radius: Coord<f64>,
	},
	/// Added to the zoom delta
	Zoom(Coord<f64>),
	/// Added to the rotation delta
	Rotate(f64),
	/// Added to the fade delta
	Fade(f64),
}

impl Acceleration {
	/// Parses an `accel_*` line for `kind`
	pub fn parse(kind: AnimationKind, line: &PropertyLine) -> Result<Self, PictureError> {
		Ok(match kind {
			AnimationKind::StraightMove => Self::StraightMove(require_pair(line)?),
			AnimationKind::CircleMove => Self::CircleMove {
				angular: line.require_float(0)?,
				radius: Coord::new(line.float_or(1, 0.0)?, line.float_or(2, 0.0)?),
			},
			AnimationKind::Zoom => Self::Zoom(require_pair(line)?),
			AnimationKind::Rotate => Self::Rotate(line.require_float(0)?),
			AnimationKind::Fade => Self::Fade(line.require_float(0)?),
		})
	}

	/// Animation kind this acceleration belongs to
	pub fn kind(&self) -> AnimationKind {
		match self {
			Self::StraightMove(_) => AnimationKind::StraightMove,
			Self::CircleMove {
				..
			} => AnimationKind::CircleMove,
			Self::Zoom(_) => AnimationKind::Zoom,
			Self::Rotate(_) => AnimationKind::Rotate,
			Self::Fade(_) => AnimationKind::Fade,
		}
	}
}

/// Running animation with its current delta and acceleration
#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub enum Animation {
	/// Moves the base position by `delta` every tick
	StraightMove {
		/// Pixels per tick
		delta: Coord<f64>,
		/// Added to `delta` every tick
		accel: Coord<f64>,
	},
	/// Orbits the base position
	CircleMove {
		/// Orbit radius per axis
		radius: Coord<f64>,
		/// Current angle in degrees
		angle: f64,
		/// Degrees per tick
		speed: f64,
		/// Added to `speed` every tick
		angular_accel: f64,
		/// Added to `radius` every tick
		radius_accel: Coord<f64>,
	},
	/// Grows the size by `delta` every tick, keeping the center
	Zoom {
		/// Pixels per tick
		delta: Coord<f64>,
		/// Added to `delta` every tick
		accel: Coord<f64>,
	},
	/// Rotates by `delta` degrees every tick
	Rotate {
		/// Degrees per tick
		delta: f64,
		/// Added to `delta` every tick
		accel: f64,
	},
	/// Adds `delta` to the opacity every tick
	Fade {
		/// Opacity per tick, free to leave `[0, 1]`
		delta: Rate,
		/// Added to `delta` every tick
		accel: Rate,
	},
}

impl Animation {
	/// Parses an `anim_*` line for `kind`, with no acceleration
	pub fn parse(kind: AnimationKind, line: &PropertyLine) -> Result<Self, PictureError> {
		Ok(match kind {
			AnimationKind::StraightMove => Self::StraightMove {
				delta: require_pair(line)?,
				accel: Coord::default(),
			},
			AnimationKind::CircleMove => Self::CircleMove {
				radius: require_pair(line)?,
				speed: line.require_float(2)?,
				angle: line.float_or(3, 0.0)?,
				angular_accel: 0.0,
				radius_accel: Coord::default(),
			},
			AnimationKind::Zoom => Self::Zoom {
				delta: require_pair(line)?,
				accel: Coord::default(),
			},
			AnimationKind::Rotate => Self::Rotate {
				delta: line.require_float(0)?,
				accel: 0.0,
			},
			AnimationKind::Fade => Self::Fade {
				delta: Rate::unbounded(line.require_float(0)?),
				accel: Rate::unbounded(0.0),
			},
		})
	}

	/// Kind of this animation
	pub fn kind(&self) -> AnimationKind {
		match self {
			Self::StraightMove {
				..
			} => AnimationKind::StraightMove,
			Self::CircleMove {
				..
			} => AnimationKind::CircleMove,
			Self::Zoom {
				..
			} => AnimationKind::Zoom,
			Self::Rotate {
				..
			} => AnimationKind::Rotate,
			Self::Fade {
				..
			} => AnimationKind::Fade,
		}
	}

	/// Property changed by this animation
	pub fn target(&self) -> PropertyKind {
		self.kind().target()
	}

	/// Replaces the acceleration; returns `false` when the kinds differ
	pub fn set_acceleration(&mut self, acceleration: Acceleration) -> bool {
		match (self, acceleration) {
			(
				Self::StraightMove {
					accel,
					..
				},
				Acceleration::StraightMove(value),
			)
			| (
				Self::Zoom {
					accel,
					..
				},
				Acceleration::Zoom(value),
			) => *accel = value,
			(
				Self::CircleMove {
					angular_accel,
					radius_accel,
					..
				},
				Acceleration::CircleMove {
					angular,
					radius,
				},
			) => {
				*angular_accel = angular;
				*radius_accel = radius;
			}
			(
				Self::Rotate {
					accel,
					..
				},
				Acceleration::Rotate(value),
			) => *accel = value,
			(
				Self::Fade {
					accel,
					..
				},
				Acceleration::Fade(value),
			) => *accel = Rate::unbounded(value),
			_ => return false,
		}
		true
	}

	/// Applies one tick to `properties`, then accelerates
	pub fn step(&mut self, properties: &mut PropertySet) {
		match self {
			Self::StraightMove {
				delta,
				accel,
			} => {
				properties.move_pos(*delta);
				*delta += *accel;
			}
			Self::CircleMove {
				radius,
				angle,
				speed,
				angular_accel,
				radius_accel,
			} => {
				let radians = angle.to_radians();
				let offset =
					Coord::new((radians.cos() * radius.x).trunc(), (radians.sin() * radius.y).trunc());
				let base = properties.pos().base();
				properties.jump_pos(base + offset);
				*angle = (*angle + *speed).rem_euclid(360.0);
				*speed += *angular_accel;
				*radius += *radius_accel;
			}
			Self::Zoom {
				delta,
				accel,
			} => {
				properties.resize(*delta);
				*delta += *accel;
			}
			Self::Rotate {
				delta,
				accel,
			} => {
				properties.rotate(*delta);
				*delta += *accel;
			}
			Self::Fade {
				delta,
				accel,
			} => {
				properties.fade(delta.value());
				delta.add(accel.value());
			}
		}
		trace!("{} stepped: {:?}", self.kind(), self);
	}
}

fn require_pair(line: &PropertyLine) -> Result<Coord<f64>, PictureError> {
	Ok(Coord::new(line.require_float(0)?, line.require_float(1)?))
}
