use cloth::cloth::Cloth;
use cloth::pointer::PointerState;
use cloth::posbox::Canvas;
use cloth::tunables::{Tunables, DT};
use cloth::V2;
use protocol::user_event::{PointerButton, PointerEvent};

fn draped() -> (Cloth, Canvas) {
	let mut cloth = Cloth::new(300, 150, 10).unwrap();
	cloth.init(V2::new(200., 100.), &Tunables::default());
	(cloth, Canvas::new(1000., 1000.).unwrap())
}

#[test]
fn previous_position_is_last_frame_position() {
	let (mut cloth, canvas) = draped();
	let t = Tunables::default();
	let pointer = PointerState::default();
	for _ in 0..20 {
		let before: Vec<V2> = cloth.particles().iter().map(|p| p.pos).collect();
		cloth.update(&pointer, &t, &canvas, DT);
		for (p, pos) in cloth.particles().iter().zip(before.iter()) {
			if !p.pinned {
				assert_eq!(p.ppos, *pos);
			}
		}
	}
}

#[test]
fn pins_hold_under_drag_and_gravity() {
	let (mut cloth, canvas) = draped();
	let t = Tunables::default().with_gravity(500.);
	let mut pointer = PointerState::default();
	pointer.apply(PointerEvent::Moved(200., 100.));
	pointer.apply(PointerEvent::Pressed(PointerButton::Primary));
	pointer.apply(PointerEvent::DragStarted);
	let pinned: Vec<(usize, V2)> = cloth
		.particles()
		.iter()
		.enumerate()
		.filter(|(_, p)| p.pinned)
		.map(|(id, p)| (id, p.pos))
		.collect();
	for i in 0..60 {
		pointer.apply(PointerEvent::Moved(200. + 3. * i as f64, 100. + 2. * i as f64));
		pointer.advance(DT);
		cloth.update(&pointer, &t, &canvas, DT);
	}
	for (id, pos) in pinned {
		assert_eq!(cloth.particles()[id].pos, pos);
	}
}

#[test]
fn ctrl_click_pins_under_pointer() {
	let (mut cloth, canvas) = draped();
	let t = Tunables::default();
	let id = cloth.index(3, 4);
	let target = cloth.particles()[id].pos;
	let mut pointer = PointerState::default();
	pointer.apply(PointerEvent::Moved(target[0] + 1., target[1]));
	pointer.apply(PointerEvent::Modifier(true));
	pointer.apply(PointerEvent::Pressed(PointerButton::Primary));
	cloth.update(&pointer, &t, &canvas, DT);
	assert!(cloth.particles()[id].pinned);
	let pos = cloth.particles()[id].pos;
	pointer.apply(PointerEvent::Released(PointerButton::Primary));
	for _ in 0..30 {
		cloth.update(&pointer, &t, &canvas, DT);
	}
	assert_eq!(cloth.particles()[id].pos, pos);
}

#[test]
fn particles_stay_on_canvas() {
	let (mut cloth, _) = draped();
	let canvas = Canvas::new(600., 300.).unwrap();
	let t = Tunables::default().with_gravity(500.);
	let pointer = PointerState::default();
	for _ in 0..300 {
		cloth.update(&pointer, &t, &canvas, DT);
	}
	for p in cloth.particles() {
		assert!(p.pos[0] >= 0. && p.pos[0] <= 600.);
		assert!(p.pos[1] >= 0. && p.pos[1] <= 300.);
		if p.pos[1] == 300. {
			assert_eq!(p.ppos[1], p.pos[1]);
		}
	}
}

#[test]
fn right_click_cuts_focus_area() {
	let (mut cloth, canvas) = draped();
	let t = Tunables::default();
	let centre = cloth.particles()[cloth.index(15, 8)].pos;
	let mut pointer = PointerState::default();
	pointer.apply(PointerEvent::Moved(centre[0], centre[1]));
	pointer.apply(PointerEvent::Pressed(PointerButton::Secondary));
	cloth.update(&pointer, &t, &canvas, DT);
	let cut = cloth.particles().iter().filter(|p| !p.active).count();
	assert!(cut > 0);
	assert!(cloth.dangling_count() > 0);
	for p in cloth.particles().iter().filter(|p| !p.active) {
		assert!((p.ppos - centre).magnitude() < 50.);
	}
	let model = cloth.pr_model();
	assert_eq!(model.particles.len(), cloth.particle_count() - cut);
}
