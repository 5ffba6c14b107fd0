//! Configuration scenarios

use wwapic_rs::prelude::*;

use crate::build;

#[test_log::test]
fn test_position() {
	let picture = build(&["pos=10,20"]).unwrap();
	assert_eq!(picture.pos(), Coord::new(10.0, 20.0));
	assert_eq!(picture.base_pos(), Coord::new(10.0, 20.0));
}

#[test_log::test]
fn test_opacity_out_of_range() {
	let err = build(&["opacity=1.5"]).unwrap_err();
	assert!(err.is_validation_error(), "{err}");
}

#[test_log::test]
fn test_fill_mode() {
	let picture = build(&["repeat=3,2", "fill=1"]).unwrap();
	assert!(picture.is_fill());
	assert_eq!(picture.properties().repeat().count, Coord::new(3, 2));
	assert_eq!(picture.width(), 440.0);
	assert_eq!(picture.height(), 440.0);
}

#[test_log::test]
fn test_wait_target_is_relative_to_trigger() {
	let picture = build(&["wait=20,+5"]).unwrap();
	let wait = picture.properties().wait().unwrap();
	assert_eq!(wait.delay_ms(), 20);
	assert_eq!(wait.target_parts_id(), 12);
}

#[test_log::test]
fn test_quoted_text_keeps_commas() {
	let picture = build(&[r#"text="a,b""#]).unwrap();
	assert_eq!(picture.properties().text().content, "a,b");
}

#[test_log::test]
fn test_unknown_property_never_registers() {
	let mut store = PictureStore::new(5);
	let err = store.create_picture(0, crate::source(0), ["pos=1,1", "foo=1"]).unwrap_err();
	assert_eq!(err, PictureError::UnknownProperty("foo".to_string()));
	assert!(store.is_empty(0).unwrap());
}

#[test_log::test]
fn test_store_bounds() {
	let store = PictureStore::new(5);
	for id in 0..5 {
		assert!(store.get_picture(id).is_ok());
	}
	assert!(matches!(
		store.get_picture(5),
		Err(PictureError::IndexOutOfRange {
			id: 5,
			capacity: 5
		})
	));
}

#[test_log::test]
fn test_error_taxonomy() {
	let cases: [(&str, fn(&PictureError) -> bool); 6] = [
		("pos", PictureError::is_parse_error),
		("pos=a,1", PictureError::is_value_error),
		("pos=1", PictureError::is_value_error),
		("text=unquoted", PictureError::is_value_error),
		("clip=0,1", PictureError::is_validation_error),
		("time=-5", PictureError::is_validation_error),
	];
	for (line, check) in cases {
		let err = build(&[line]).unwrap_err();
		assert!(check(&err), "{line}: {err}");
	}

	assert!(matches!(build(&["anim_wobble=1"]), Err(PictureError::UnknownAnimation(_))));
	assert!(matches!(build(&["accel_wobble=1"]), Err(PictureError::UnknownAnimation(_))));
}

#[test_log::test]
fn test_present_invalid_token_is_not_replaced_by_fallback() {
	// the shift tokens are optional, but a bad one still fails
	assert!(build(&["interval=1,1,x"]).unwrap_err().is_value_error());
	assert!(build(&["interval=1,1"]).is_ok());
}

#[test_log::test]
fn test_render_parameters() {
	let source = crate::source(0).with_image(Coord::new(2, 3), Coord::new(0, 0));
	let mut picture = Picture::from_lines(
		source,
		EngineConfig::default(),
		[
			"pos=40,80",
			"size=20,10",
			"clip=2,1",
			"angle=90",
			"opacity=0.5",
			r#"text="Score",1,1"#,
			r#"font=12,1,0,"monospace""#,
			"color=10,20,30",
		],
	)
	.unwrap();
	assert!(picture.render().is_none());

	picture.start(&mut NullHost);
	let params = picture.render().unwrap();
	assert_eq!(params.source.x, 80.0);
	assert_eq!(params.source.y, 120.0);
	assert_eq!(params.source.width, 80.0);
	assert_eq!(params.source.height, 40.0);
	assert_eq!(params.dest.width, 20.0);
	assert_eq!(params.dest.height, 10.0);
	assert_eq!(params.pivot, Coord::new(50.0, 85.0));
	assert!((params.rotation - std::f64::consts::FRAC_PI_2).abs() < 1e-12);
	assert_eq!(params.opacity, 0.5);
	assert_eq!(params.font, "normal bold 12px monospace");
	assert_eq!(params.fill_style, "rgb(10, 20, 30)");
	assert_eq!(params.text_align, "center");
	assert_eq!(params.text_baseline, "middle");
	assert_eq!(params.text, "Score");

	let json = serde_json::to_value(&params).unwrap();
	assert_eq!(json["text_align"], "center");
	assert_eq!(json["tiles"].as_array().map(Vec::len), Some(1));
}

#[test_log::test]
fn test_sample_script_is_valid() {
	let cargo_root = std::env::var("CARGO_MANIFEST_DIR").unwrap();
	let path = std::path::Path::new(&cargo_root).join("demos/picture_utils/sample.pic");
	let text = std::fs::read_to_string(path).unwrap();

	let picture = Picture::from_lines(crate::source(0), EngineConfig::default(), text.lines()).unwrap();
	assert_eq!(picture.animations().count(), 3);
	assert_eq!(picture.next_pictures(), vec![PicturePointer::new(crate::PARTS_NUMBER, 1)]);
}
