use std::time::Instant;

use cloth::world::World;

fn main() -> Result<(), Box<dyn std::error::Error>> {
	env_logger::init();
	let start = Instant::now();
	let mut world = World::new(1024., 640., 6)?;
	let rframes = 600;
	for _ in 0..rframes {
		world.run_frame();
	}
	let time = rframes as f64 * world.dt;
	let duration = start.elapsed().as_secs_f64();
	log::info!(
		"{} particles, {} frames: {:.3}%",
		world.cloth().particle_count(),
		rframes,
		duration / time * 100.
	);
	Ok(())
}
