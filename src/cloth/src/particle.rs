use crate::pointer::PointerState;
use crate::posbox::Canvas;
use crate::tunables::{Tunables, PIN_DIST};
use crate::V2;
use protocol::pr_model::PrParticle;

// f64::clamp panics on inverted bounds, tunables are not validated
fn clamp(value: f64, min: f64, max: f64) -> f64 {
	value.max(min).min(max)
}

#[derive(Clone, Debug, PartialEq)]
pub struct Particle {
	pub pos: V2,
	pub ppos: V2,
	pub vel: V2,
	pub friction: f64,
	pub elasticity: f64,
	pub drag_force: f64,
	pub pinned: bool,
	pub active: bool,
	pub highlighted: bool,
}

impl Particle {
	pub fn new(pos: V2, tunables: &Tunables) -> Self {
		Self {
			pos,
			ppos: pos,
			vel: V2::zeros(),
			friction: tunables.friction,
			elasticity: tunables.elasticity,
			drag_force: tunables.drag_force,
			pinned: false,
			active: true,
			highlighted: false,
		}
	}

	pub fn add_pos(&mut self, dp: V2) {
		self.pos += dp
	}

	pub fn offset_pos(&mut self, dp: V2) {
		self.pos += dp;
		self.ppos += dp;
	}

	fn increase_force(&mut self, force: f64, max_drag_force: f64) {
		self.drag_force = (self.drag_force + force).min(max_drag_force);
	}

	/// One Verlet step, coupled with the pointer.
	pub fn update(
		&mut self,
		pointer: &PointerState,
		tunables: &Tunables,
		canvas: &Canvas,
		dt: f64,
	) {
		self.highlighted = false;
		if !self.active {
			return;
		}
		self.drag_force = tunables.drag_force;
		self.elasticity = tunables.elasticity;
		self.friction = tunables.friction;

		if self.pinned {
			// only a window resize moves a pinned particle
			self.offset_pos(canvas.offset);
			return;
		}

		if pointer.primary() {
			self.increase_force(pointer.force(), tunables.max_drag_force);
		}

		let dist = (self.pos - pointer.pos()).magnitude();
		if pointer.dragging() && dist < tunables.tear_distance {
			let e = self.elasticity;
			let dp = pointer.displacement().map(|x| clamp(x, -e, e));
			self.ppos = self.pos - dp * self.drag_force;
		}

		if pointer.ctrl() && dist < PIN_DIST {
			self.pinned = true;
		}

		let focus = clamp(
			pointer.focus_radius(),
			tunables.min_focus,
			tunables.max_focus,
		);
		if dist < focus {
			self.highlighted = true;
			if pointer.secondary() {
				self.active = false;
			}
		}

		self.vel[1] += tunables.gravity;
		let ppos = self.pos;
		self.pos += (self.pos - self.ppos) * self.friction + self.vel * (dt * dt);
		self.ppos = ppos;

		let clamped = canvas.posbox.apply(&mut self.pos);
		for axis in 0..2 {
			if clamped[axis] {
				self.ppos[axis] = self.pos[axis];
			}
		}
		self.vel = V2::zeros();
	}

	pub fn render(&self) -> PrParticle {
		PrParticle {
			pos: [self.pos[0], self.pos[1]],
			pinned: self.pinned,
			highlighted: self.highlighted,
		}
	}
}
