//! Benchmark helper utilities for wwapic-rs
//!
//! This module provides generators for synthetic picture scripts and a store
//! builder shared by the benchmark suite.

use wwapic_types::picture::{PicturePointer, PictureSource, PictureStore};

/// Script exercising every animation kind with accelerations
pub fn animated_script() -> Vec<String> {
	[
		"pos=100,100",
		"size=40,40",
		"time_anim=0",
		"anim_straight=1,0.5",
		"accel_straight=0.01,0",
		"anim_circle=20,10,3,45",
		"accel_circle=0.1,0.05,0",
		"anim_zoom=0.2,0.2",
		"anim_rotate=2",
		"accel_rotate=0.01",
		"anim_fade=-0.001",
	]
	.into_iter()
	.map(str::to_string)
	.collect()
}

/// Script of a field-filling scrolling background
pub fn fill_script(chip_size: u32) -> Vec<String> {
	vec![
		format!("size={chip_size},{chip_size}"),
		"interval=2,2,1,1".to_string(),
		"fill=1".to_string(),
		"anim_straight=-1,-1".to_string(),
	]
}

/// Script with `count` text and style lines, the worst case for parsing
pub fn long_script(count: usize) -> Vec<String> {
	(0..count)
		.map(|i| match i % 4 {
			0 => format!("pos={i},{}", i * 2),
			1 => format!(r#"text="line {i}, with a comma",1,2"#),
			2 => format!(r#"font={},1,0,"serif""#, 12 + i % 20),
			_ => format!("next=+{i},-1,{i},+0"),
		})
		.collect()
}

/// Builds a store with `count` started pictures running `script`
pub fn populated_store(count: usize, script: &[String]) -> PictureStore {
	let mut store = PictureStore::new(count);
	for id in 0..count {
		let parts_number = i32::try_from(id).unwrap_or(i32::MAX);
		let source = PictureSource::new(PicturePointer::new(parts_number, 0));
		store.create_picture(id, source, script).expect("benchmark script must be valid");
	}
	store
}
