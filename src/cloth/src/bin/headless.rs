// Scripted pointer session: random drags, cuts, pins and scrolls.
//
// usage: headless [frames] [seed] [realtime]

use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use cloth::controller_message::ControllerMessage;
use cloth::time_manager::{TimeManager, TimeModel};
use cloth::world::World;
use protocol::user_event::{PointerButton, PointerEvent};

const WIDTH: f64 = 1024.;
const HEIGHT: f64 = 640.;

struct Gesture {
	button: PointerButton,
	ctrl: bool,
	target: [f64; 2],
	frames: usize,
}

fn random_gesture(rng: &mut StdRng) -> Gesture {
	let button = if rng.gen_bool(0.2) {
		PointerButton::Secondary
	} else {
		PointerButton::Primary
	};
	Gesture {
		button,
		ctrl: button == PointerButton::Primary && rng.gen_bool(0.1),
		target: [rng.gen_range(0.0..WIDTH), rng.gen_range(0.0..HEIGHT)],
		frames: rng.gen_range(5..60),
	}
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let mut iter = std::env::args();
	iter.next();
	let frames: u64 = iter.next().map(|x| x.parse()).transpose()?.unwrap_or(1000);
	let seed: u64 = iter.next().map(|x| x.parse()).transpose()?.unwrap_or(0);
	let model = match iter.next().as_deref() {
		Some("realtime") => TimeModel::RtFrameLock,
		_ => TimeModel::VideoRender,
	};

	let mut rng = StdRng::seed_from_u64(seed);
	let mut world = World::new(WIDTH, HEIGHT, 6)?;
	let mut tm = TimeManager::default().with_model(model);
	let mut gesture: Option<(Gesture, usize)> = None;
	let mut cursor = [WIDTH / 2., HEIGHT / 2.];
	let mut torn = 0;

	while world.frame() < frames {
		world.dt = tm.take_time();
		match gesture.take() {
			None => {
				if rng.gen_bool(0.05) {
					let g = random_gesture(&mut rng);
					world.handle(ControllerMessage::Pointer(PointerEvent::Modifier(g.ctrl)));
					world.handle(ControllerMessage::Pointer(PointerEvent::Pressed(g.button)));
					gesture = Some((g, 0));
				} else if rng.gen_bool(0.02) {
					let dy = rng.gen_range(-30.0..30.0);
					world.handle(ControllerMessage::Pointer(PointerEvent::Scrolled(dy)));
				}
			}
			Some((g, step)) => {
				if step == 1 && g.button == PointerButton::Primary {
					world.handle(ControllerMessage::Pointer(PointerEvent::DragStarted));
				}
				if step >= g.frames {
					world.handle(ControllerMessage::Pointer(PointerEvent::Released(g.button)));
				} else {
					let k = 1. / (g.frames - step) as f64;
					cursor[0] += (g.target[0] - cursor[0]) * k;
					cursor[1] += (g.target[1] - cursor[1]) * k;
					world.handle(ControllerMessage::Pointer(PointerEvent::Moved(
						cursor[0], cursor[1],
					)));
					gesture = Some((g, step + 1));
				}
			}
		}

		let info = world.run_frame();
		torn += info.torn;
		if world.frame() % 100 == 0 {
			log::info!(
				"frame {}: load {:.2}%, {} particles, {:?} constraints, {} torn",
				world.frame(),
				tm.load() * 100.,
				info.particle_len,
				info.constraint_len,
				torn,
			);
		}
	}

	let model = world.pr_model();
	log::info!(
		"done: {} visible particles, {} visible segments, {} torn",
		model.particles.len(),
		model.segments().count(),
		torn,
	);
	Ok(())
}
