//! Picture animation engine for `wwapic-rs`.
//!
//! A picture is a visual overlay attached to a map part. Its script is a list
//! of `name=v1,v2,...` lines, parsed by [`PropertyLine`] into the typed
//! properties of a [`PropertySet`] plus the animations of a [`Picture`].
//! The host drives a [`PictureStore`] with a periodic tick and draws the
//! [`RenderParams`] of every visible picture.

mod error;

pub mod animation;
pub mod blink;
pub mod config;
pub mod host;
pub mod instance;
pub mod parser;
pub mod property;
pub mod relative;
pub mod render;
pub mod source;
pub mod store;
pub mod timer;
pub mod types;

// Re-export unified error type
pub use error::PictureError;

pub use animation::{Acceleration, Animation, AnimationKind};
pub use config::EngineConfig;
pub use host::{NullHost, PictureHost};
pub use instance::{Picture, PictureState};
pub use parser::PropertyLine;
pub use property::{
	Font, Interval, Pos, PropertyKind, PropertySet, Repeat, SpawnTarget, Text, TextAlign,
	TextBaseline, Wait,
};
pub use relative::{RelativeValue, Sign};
pub use render::{RenderParams, tile_plan};
pub use source::PictureSource;
pub use store::PictureStore;
pub use timer::{AnimationWindow, Countdown};
pub use types::{
	Angle, Color, Coord, PartsAppearance, PartsType, PicturePointer, Rate, RateMode, Rect,
};
