//! Prelude module for `wwapic_types`.
//!
//! This module provides a convenient way to import commonly used types, traits, and constants.
//!
//! # Examples
//!
//! ```
//! use wwapic_types::prelude::*;
//!
//! // Now you can use all common types directly
//! let config = EngineConfig::default();
//! let picture = Picture::new(PictureSource::default(), config);
//! assert_eq!(picture.state(), PictureState::Pending);
//! ```

#[doc(inline)]
pub use crate::picture::{
	// Engine
	EngineConfig,
	NullHost,
	Picture,
	PictureError,
	PictureHost,
	PictureSource,
	PictureState,
	PictureStore,

	// Values
	Coord,
	PartsAppearance,
	PartsType,
	PicturePointer,
	PropertyLine,
	RelativeValue,

	// Output
	RenderParams,
};

// Re-export the picture module for advanced usage
#[doc(inline)]
pub use crate::picture;
