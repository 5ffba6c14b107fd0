//! This module is separated into its own crate so the root crate only re-exports, and should not be used directly.

/// `use wwapic_rs::prelude::*;` to import commonly used items.
pub mod prelude;

// Re-export wwapic_types for convenience
pub use wwapic_types;

// Re-export commonly used types at crate root
pub use wwapic_types::picture::{
	EngineConfig, Picture, PictureError, PictureHost, PictureSource, PictureStore, RenderParams,
};
