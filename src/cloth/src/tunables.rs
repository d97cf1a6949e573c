//! Named simulation parameters read by the engine every frame.
//!
//! The engine never owns these: the configuration surface (sliders) keeps
//! a `Tunables` value and hands a copy to each frame update.

/// Nominal frame step, independent of wall-clock frame time.
pub const DT: f64 = 0.022;
/// Radius around the pointer in which ctrl+click pins a particle.
pub const PIN_DIST: f64 = 4.0;
pub const DEFAULT_FOCUS: f64 = 50.0;
/// Pointer force gained per second of holding the primary button.
pub const FORCE_RATE: f64 = 5.0;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum TunableKind {
	DragForce,
	Gravity,
	Elasticity,
	Friction,
	TearDistance,
}

impl TunableKind {
	pub const ALL: [TunableKind; 5] = [
		TunableKind::DragForce,
		TunableKind::Gravity,
		TunableKind::Elasticity,
		TunableKind::Friction,
		TunableKind::TearDistance,
	];

	pub fn title(self) -> &'static str {
		match self {
			TunableKind::DragForce => "Dragging force",
			TunableKind::Gravity => "Gravity",
			TunableKind::Elasticity => "Cloth elasticity",
			TunableKind::Friction => "Cloth friction",
			TunableKind::TearDistance => "Tear distance",
		}
	}

	/// `[min, default, max]` of the slider backing this parameter.
	pub fn range(self) -> [f64; 3] {
		match self {
			TunableKind::DragForce => [1.1, 2.0, 15.0],
			TunableKind::Gravity => [100.0, 250.0, 500.0],
			TunableKind::Elasticity => [10.0, 30.0, 50.0],
			TunableKind::Friction => [0.95, 0.98, 0.99],
			TunableKind::TearDistance => [5.0, 15.0, 50.0],
		}
	}
}

#[derive(Clone, Copy, Debug, PartialEq)]
pub struct Tunables {
	/// Baseline drag force each particle starts a frame with.
	pub drag_force: f64,
	/// Cap for the drag force accumulated while the primary button is held.
	pub max_drag_force: f64,
	/// Downward velocity increment per frame.
	pub gravity: f64,
	/// Per-axis bound of the pointer displacement injected by a drag.
	pub elasticity: f64,
	/// Velocity retention in `[0, 1]`.
	pub friction: f64,
	/// Pointer radius within which dragging moves particles.
	pub tear_distance: f64,
	pub min_focus: f64,
	pub max_focus: f64,
	/// Constraint length beyond which a dragged cloth rips.
	pub rip_distance: f64,
}

impl Default for Tunables {
	fn default() -> Self {
		Self {
			drag_force: TunableKind::DragForce.range()[1],
			max_drag_force: TunableKind::DragForce.range()[2],
			gravity: TunableKind::Gravity.range()[1],
			elasticity: TunableKind::Elasticity.range()[1],
			friction: TunableKind::Friction.range()[1],
			tear_distance: TunableKind::TearDistance.range()[1],
			min_focus: 30.0,
			max_focus: 120.0,
			rip_distance: 150.0,
		}
	}
}

impl Tunables {
	pub fn with_drag_force(mut self, drag_force: f64, max_drag_force: f64) -> Self {
		self.drag_force = drag_force;
		self.max_drag_force = max_drag_force;
		self
	}

	pub fn with_gravity(mut self, gravity: f64) -> Self {
		self.gravity = gravity;
		self
	}

	pub fn with_elasticity(mut self, elasticity: f64) -> Self {
		self.elasticity = elasticity;
		self
	}

	pub fn with_friction(mut self, friction: f64) -> Self {
		self.friction = friction;
		self
	}

	pub fn with_tear_distance(mut self, tear_distance: f64) -> Self {
		self.tear_distance = tear_distance;
		self
	}

	pub fn with_focus_range(mut self, min: f64, max: f64) -> Self {
		self.min_focus = min;
		self.max_focus = max;
		self
	}

	pub fn with_rip_distance(mut self, rip_distance: f64) -> Self {
		self.rip_distance = rip_distance;
		self
	}

	pub fn get(&self, kind: TunableKind) -> f64 {
		match kind {
			TunableKind::DragForce => self.drag_force,
			TunableKind::Gravity => self.gravity,
			TunableKind::Elasticity => self.elasticity,
			TunableKind::Friction => self.friction,
			TunableKind::TearDistance => self.tear_distance,
		}
	}

	/// Slider write; the value is kept inside the slider range.
	pub fn set(&mut self, kind: TunableKind, value: f64) {
		let [min, _, max] = kind.range();
		let value = value.max(min).min(max);
		match kind {
			TunableKind::DragForce => self.drag_force = value,
			TunableKind::Gravity => self.gravity = value,
			TunableKind::Elasticity => self.elasticity = value,
			TunableKind::Friction => self.friction = value,
			TunableKind::TearDistance => self.tear_distance = value,
		}
	}

	pub fn reset_defaults(&mut self) {
		for kind in TunableKind::ALL {
			self.set(kind, kind.range()[1]);
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_defaults_inside_range() {
		let t = Tunables::default();
		for kind in TunableKind::ALL {
			let [min, default, max] = kind.range();
			assert!(min <= default && default <= max, "{}", kind.title());
			assert_eq!(t.get(kind), default);
		}
		assert_eq!(t.max_drag_force, 15.0);
	}

	#[test]
	fn test_set_clamps_and_reset() {
		let mut t = Tunables::default();
		t.set(TunableKind::Gravity, 1e6);
		assert_eq!(t.gravity, 500.0);
		t.set(TunableKind::Friction, 0.0);
		assert_eq!(t.friction, 0.95);
		t.set(TunableKind::TearDistance, 20.0);
		assert_eq!(t.tear_distance, 20.0);
		t.reset_defaults();
		assert_eq!(t, Tunables::default());
	}

	#[test]
	fn test_builder_skips_slider_clamp() {
		let t = Tunables::default().with_gravity(0.0).with_friction(1.0);
		assert_eq!(t.gravity, 0.0);
		assert_eq!(t.friction, 1.0);
	}
}
