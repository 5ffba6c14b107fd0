//! `next` chains handled the way a host does it

use std::collections::HashMap;

use wwapic_rs::prelude::*;

use crate::{PARTS_NUMBER, recording::RecordingHost, source};

/// Scripts keyed by picture pointer, standing in for the map part data
fn scripts() -> HashMap<PicturePointer, Vec<&'static str>> {
	HashMap::from([
		(PicturePointer::new(PARTS_NUMBER, 0), vec!["time=20", "next=+0,+1"]),
		(PicturePointer::new(PARTS_NUMBER, 1), vec!["time=30", "next=+0,+1,200,0"]),
		(PicturePointer::new(PARTS_NUMBER, 2), vec!["pos=1,1"]),
	])
}

#[test_log::test]
fn test_next_pictures_follow_each_other() {
	let scripts = scripts();
	let mut host = RecordingHost::default();
	let mut store = PictureStore::new(3);

	let first = PicturePointer::new(PARTS_NUMBER, 0);
	store.create_picture(0, source(0), &scripts[&first]).unwrap();
	store.start(&mut host);

	let mut started = vec![(0, first)];
	let mut unknown = Vec::new();
	for tick in 1..=10 {
		for pointer in store.update(&mut host) {
			let Some(lines) = scripts.get(&pointer) else {
				unknown.push(pointer);
				continue;
			};
			let id = usize::try_from(pointer.id).unwrap();
			store.create_picture(id, source(pointer.id), lines).unwrap();
			store.start_picture(id, &mut host).unwrap();
			started.push((tick, pointer));
		}
	}

	assert_eq!(
		started,
		vec![
			(0, first),
			(2, PicturePointer::new(PARTS_NUMBER, 1)),
			(5, PicturePointer::new(PARTS_NUMBER, 2)),
		]
	);
	assert_eq!(unknown, vec![PicturePointer::new(200, 0)]);

	let visible: Vec<usize> = store.render_all().into_iter().map(|(id, _)| id).collect();
	assert_eq!(visible, vec![2]);
	assert!(store.get_picture(0).unwrap().unwrap().is_timeout());
	assert!(store.get_picture(1).unwrap().unwrap().is_timeout());
}

#[test_log::test]
fn test_odd_next_is_rejected() {
	let err = crate::build(&["next=1,2,3"]).unwrap_err();
	assert!(matches!(err, PictureError::MissingValue { .. }), "{err}");
}
