//! Prelude module for `wwapic_internal`.
//!
//! This module provides a convenient way to import commonly used types and traits.
//!
//! # Examples
//!
//! ```rust
//! use wwapic_internal::prelude::*;
//!
//! // Now you can use all common types directly
//! let mut store = PictureStore::with_config(EngineConfig::default());
//! let source = PictureSource::new(PicturePointer::new(3, 0));
//! store.create_picture(0, source, ["text=\"Hello\"", "color=255,0,0"]).unwrap();
//!
//! // Nothing is drawn before the picture starts
//! assert!(store.render_all().is_empty());
//! store.start(&mut NullHost);
//! assert_eq!(store.render_all()[0].1.fill_style, "rgb(255, 0, 0)");
//! ```

// Re-export everything from wwapic_types::prelude
#[doc(inline)]
pub use wwapic_types::prelude::*;

// Re-export the entire wwapic_types module for advanced usage
#[doc(inline)]
pub use wwapic_types;
