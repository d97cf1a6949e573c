use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::tunables::Tunables;
use protocol::pr_model::PrConstraint;

// share of the stretch corrected per frame
const RELAXATION: f64 = 0.4;
const MIN_DISTANCE: f64 = 1e-9;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Relaxation {
	/// At or below rest length, constraints do not resist compression.
	Slack,
	/// Endpoints coincide, no direction to correct along.
	Degenerate,
	Corrected,
	/// Stretched past the rip distance while dragging.
	Torn,
}

#[derive(Clone, Debug, PartialEq)]
pub struct Constraint {
	pub p1: usize,
	pub p2: usize,
	pub length: f64,
	pub active: bool,
	pub selected: bool,
}

impl Constraint {
	pub fn new(p1: usize, p2: usize, length: f64) -> Self {
		Self {
			p1,
			p2,
			length,
			active: true,
			selected: false,
		}
	}

	pub fn is_live(&self, particles: &[Particle]) -> bool {
		particles[self.p1].active && particles[self.p2].active
	}

	/// Single relaxation pass. A torn constraint applies no correction,
	/// the caller drops it from the cloth.
	pub fn update(
		&self,
		particles: &mut [Particle],
		pointer: &PointerState,
		tunables: &Tunables,
	) -> Relaxation {
		let dp = particles[self.p1].pos - particles[self.p2].pos;
		let l = dp.magnitude();
		if l < MIN_DISTANCE {
			return Relaxation::Degenerate;
		}
		if l <= self.length {
			return Relaxation::Slack;
		}
		if pointer.dragging() && l > tunables.rip_distance {
			return Relaxation::Torn;
		}

		let diff = (self.length - l) / l;
		let mul = diff * RELAXATION * (1.0 - self.length / l);
		let offset = dp * mul;
		if !particles[self.p1].pinned {
			particles[self.p1].add_pos(offset);
		}
		if !particles[self.p2].pinned {
			particles[self.p2].add_pos(-offset);
		}
		Relaxation::Corrected
	}

	pub fn render(&self) -> PrConstraint {
		PrConstraint {
			particles: [self.p1, self.p2],
			selected: self.selected,
		}
	}
}
