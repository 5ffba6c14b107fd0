//! Wait, time and animation timers driven through the store tick

use wwapic_rs::prelude::{picture::blink, *};

use crate::{
	PARTS_NUMBER,
	recording::{HostEvent, RecordingHost},
	source,
};

fn store_with(lines: &[&str]) -> PictureStore {
	let mut store = PictureStore::new(4);
	store.create_picture(0, source(0).with_sound(3), lines).unwrap();
	store
}

fn picture(store: &PictureStore) -> &Picture {
	store.get_picture(0).unwrap().unwrap()
}

#[test_log::test]
fn test_wait_spawn_then_timeout() {
	let mut host = RecordingHost::default();
	let mut store = store_with(&["wait=50,+1,-1,+2,1", "time=100", "anim_straight=2,0"]);
	let pointer = PicturePointer::new(PARTS_NUMBER, 0);

	store.start(&mut host);
	assert_eq!(host.events, vec![HostEvent::StartWaiting(pointer)]);

	for _ in 0..4 {
		store.update(&mut host);
	}
	assert_eq!(picture(&store).state(), PictureState::Pending);
	assert!(store.render_all().is_empty());

	store.update(&mut host);
	assert!(picture(&store).is_visible());
	assert_eq!(
		host.events[1..],
		[
			HostEvent::Sound(3),
			HostEvent::StopWaiting(pointer),
			HostEvent::Appear(PartsAppearance {
				trigger_pos: Coord::new(4, 5),
				x: 3,
				y: 7,
				parts_id: 8,
				parts_type: PartsType::Map,
			}),
		]
	);

	// ten ticks of 10 ms reach `time=100`
	let mut timed_out_at = None;
	for tick in 1..=20 {
		store.update(&mut host);
		if picture(&store).is_timeout() {
			timed_out_at = Some(tick);
			break;
		}
	}
	assert_eq!(timed_out_at, Some(10));
	assert_eq!(picture(&store).pos(), Coord::new(20.0, 0.0));
	assert!(!picture(&store).is_visible());

	for _ in 0..5 {
		store.update(&mut host);
	}
	assert_eq!(picture(&store).pos(), Coord::new(20.0, 0.0));
	assert_eq!(host.sounds(), vec![3]);
	assert_eq!(host.appearances().len(), 1);
}

#[test_log::test]
fn test_silent_picture_without_wait() {
	let mut host = RecordingHost::default();
	let mut store = PictureStore::new(1);
	store.create_picture(0, source(0), ["pos=0,0"]).unwrap();
	store.start_picture(0, &mut host).unwrap();
	assert!(picture(&store).is_visible());
	assert!(host.events.is_empty());
}

#[test_log::test]
fn test_stop_pauses_wait_and_animations() {
	let mut host = RecordingHost::default();
	let mut store = store_with(&["wait=30", "anim_rotate=10"]);
	store.start(&mut host);
	store.update(&mut host);

	store.stop(&mut host);
	store.stop(&mut host);
	for _ in 0..10 {
		store.update(&mut host);
	}
	assert_eq!(picture(&store).state(), PictureState::Pending);

	store.start(&mut host);
	store.update(&mut host);
	store.update(&mut host);
	assert!(picture(&store).is_visible());
	store.update(&mut host);
	assert_eq!(picture(&store).angle().degrees(), 10.0);

	store.stop(&mut host);
	store.update(&mut host);
	assert_eq!(picture(&store).angle().degrees(), 10.0);
	assert!(picture(&store).is_visible());
}

#[test_log::test]
fn test_animation_window_limits_animations() {
	let mut store = store_with(&["time_anim=30,60", "anim_fade=-0.1"]);
	store.start(&mut NullHost);
	for _ in 0..10 {
		store.update(&mut NullHost);
	}
	let opacity = picture(&store).opacity();
	assert!((opacity - 0.7).abs() < 1e-9, "{opacity}");
}

#[test_log::test]
fn test_runtime_mutators() {
	let mut store = store_with(&["pos=100,100", "size=40,40"]);
	store.start(&mut NullHost);

	let picture = store.get_picture_mut(0).unwrap().unwrap();
	picture.move_by(Coord::new(10.0, -10.0));
	assert_eq!(picture.pos(), Coord::new(110.0, 90.0));
	picture.jump_to(Coord::new(0.0, 0.0));
	assert_eq!(picture.base_pos(), Coord::new(110.0, 90.0));
	picture.move_by(Coord::new(0.0, 0.0));
	assert_eq!(picture.pos(), Coord::new(110.0, 90.0));

	picture.resize(Coord::new(10.0, 20.0));
	assert_eq!(picture.size(), Coord::new(50.0, 60.0));
	assert_eq!(picture.pos(), Coord::new(105.0, 80.0));

	picture.rotate(300.0);
	picture.rotate(120.0);
	assert_eq!(picture.angle().degrees(), 60.0);

	picture.fade(-0.25);
	assert_eq!(picture.opacity(), 0.75);

	picture.apply_line("opacity=0.4").unwrap();
	assert_eq!(picture.opacity(), 0.4);
	assert!(picture.apply_line("opacity=4").unwrap_err().is_validation_error());
}

#[test_log::test]
fn test_blinking_image() {
	let source = source(0).with_image(Coord::new(1, 0), Coord::new(2, 0));
	let mut store = PictureStore::new(1);
	store.create_picture(0, source, ["pos=0,0"]).unwrap();
	store.start(&mut NullHost);

	let period = store.config().blink_period_ticks;
	blink::reset();
	let mut crops = Vec::new();
	for _ in 0..period * 2 {
		store.update(&mut NullHost);
		blink::advance(period);
		crops.push(store.render_all()[0].1.source.x);
	}
	blink::reset();

	let period = period as usize;
	assert!(crops[..period - 1].iter().all(|&x| x == 40.0));
	assert!(crops[period - 1..period * 2 - 1].iter().all(|&x| x == 80.0));
	assert_eq!(crops[period * 2 - 1], 40.0);
}
