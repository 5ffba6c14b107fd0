//! This crate provides the picture animation engine of the `wwapic-rs` project.
//!
//! # Modules
//!
//! - **parser**: Tokenizer for `name=v1,v2,...` property lines with typed extraction
//! - **property**: One typed value per property kind (`pos`, `size`, `wait`, ...)
//! - **animation**: Accelerating straight, circle, zoom, rotate and fade animations
//! - **instance**: The picture lifecycle (`wait`, `time`, `time_anim`)
//! - **store**: Fixed capacity picture slots driven by the host tick
//!
//! # Examples
//!
//! Using the prelude (recommended):
//!
//! ```
//! use wwapic_types::prelude::*;
//!
//! let mut store = PictureStore::new(10);
//! let source = PictureSource::new(PicturePointer::new(120, 0));
//! store
//! 	.create_picture(0, source, ["pos=40,40", "anim_rotate=15", "time=500"])
//! 	.unwrap();
//! store.start(&mut NullHost);
//! store.update(&mut NullHost);
//! ```
//!
//! Or use explicit paths:
//!
//! ```
//! use wwapic_types::picture::{PictureError, PropertyLine};
//!
//! let err = PropertyLine::parse("not a property").unwrap_err();
//! assert!(matches!(err, PictureError::Parse { .. }));
//! ```

pub mod picture;

/// `use wwapic_types::prelude::*;` to import commonly used items.
pub mod prelude;
