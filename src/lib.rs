#![cfg_attr(docsrs, feature(doc_auto_cfg))]

//! `wwapic-rs` is a picture overlay animation engine for a tile-based game runtime.
//!
//! Pictures are defined by short property scripts attached to map parts. The
//! engine parses those scripts, animates the resulting properties on every
//! host tick and hands render parameters to an external canvas.
//!
pub use wwapic_internal::*;
