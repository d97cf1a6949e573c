//! The tearable cloth: a row-major particle grid linked by distance
//! constraints, advanced once per rendered frame.

use fnv::FnvHashSet;

use crate::constraint::{Constraint, Relaxation};
use crate::error::ClothError;
use crate::particle::Particle;
use crate::pointer::PointerState;
use crate::posbox::Canvas;
use crate::tunables::Tunables;
use crate::V2;
use protocol::pr_model::PrModel;

// one pinned anchor per this many columns of the top edge
const PIN_SECTIONS: usize = 10;

#[derive(Clone, Debug)]
pub struct Cloth {
	width: u32,
	height: u32,
	spacing: u32,
	particles: Vec<Particle>,
	constraints: Vec<Constraint>,
	initialized: bool,
}

impl Cloth {
	pub fn new(width: u32, height: u32, spacing: u32) -> Result<Self, ClothError> {
		if spacing == 0 {
			return Err(ClothError::ZeroSpacing);
		}
		Ok(Self {
			width,
			height,
			spacing,
			particles: Vec::new(),
			constraints: Vec::new(),
			initialized: false,
		})
	}

	/// Takes effect on the next reset.
	pub fn set_size(&mut self, width: u32, height: u32) {
		self.width = width;
		self.height = height;
	}

	pub fn size(&self) -> [u32; 2] {
		[self.width, self.height]
	}

	// grid cells, one less than particles per row/column
	pub fn columns(&self) -> usize {
		(self.width / self.spacing) as usize
	}

	pub fn rows(&self) -> usize {
		(self.height / self.spacing) as usize
	}

	pub fn index(&self, col: usize, row: usize) -> usize {
		row * (self.columns() + 1) + col
	}

	pub fn is_initialized(&self) -> bool {
		self.initialized
	}

	/// Builds the grid with its top-left particle at `anchor`.
	/// No-op on an initialized cloth, see [`Cloth::reset`].
	pub fn init(&mut self, anchor: V2, tunables: &Tunables) {
		if self.initialized {
			return;
		}
		let cols = self.columns();
		let rows = self.rows();
		let spacing = self.spacing as f64;
		let pin_every = (cols / PIN_SECTIONS).max(1);
		self.particles.reserve((cols + 1) * (rows + 1));
		for y in 0..=rows {
			for x in 0..=cols {
				let pos = anchor + V2::new(x as f64, y as f64) * spacing;
				let mut particle = Particle::new(pos, tunables);
				let id = self.particles.len();
				if y != 0 {
					let top = self.index(x, y - 1);
					self.constraints.push(Constraint::new(top, id, spacing));
				}
				if x != 0 {
					self.constraints.push(Constraint::new(id - 1, id, spacing));
				}
				if y == 0 && x % pin_every == 0 {
					particle.pinned = true;
				}
				self.particles.push(particle);
			}
		}
		self.initialized = true;
		log::info!(
			"cloth init at ({}, {}): {} particles, {} constraints",
			anchor[0],
			anchor[1],
			self.particles.len(),
			self.constraints.len(),
		);
	}

	pub fn reset(&mut self, anchor: V2, tunables: &Tunables) {
		self.particles.clear();
		self.constraints.clear();
		self.initialized = false;
		self.init(anchor, tunables);
	}

	/// Integrates every particle, then relaxes every constraint.
	/// Returns the number of constraints torn this frame.
	pub fn update(
		&mut self,
		pointer: &PointerState,
		tunables: &Tunables,
		canvas: &Canvas,
		dt: f64,
	) -> usize {
		self.integrate(pointer, tunables, canvas, dt);
		let torn = self.relax(pointer, tunables);
		if torn > 0 {
			log::debug!("{} constraints torn", torn);
		}
		torn
	}

	pub fn integrate(
		&mut self,
		pointer: &PointerState,
		tunables: &Tunables,
		canvas: &Canvas,
		dt: f64,
	) {
		for p in self.particles.iter_mut() {
			p.update(pointer, tunables, canvas, dt);
		}
	}

	/// Sequential single pass, later constraints see the corrections of
	/// earlier ones. Torn constraints are compacted out afterwards,
	/// keeping the order of the survivors.
	pub fn relax(&mut self, pointer: &PointerState, tunables: &Tunables) -> usize {
		let mut torn = FnvHashSet::default();
		for (idx, c) in self.constraints.iter_mut().enumerate() {
			c.active = c.is_live(&self.particles);
			if !c.active {
				c.selected = false;
				continue;
			}
			if c.update(&mut self.particles, pointer, tunables) == Relaxation::Torn {
				torn.insert(idx);
				continue;
			}
			c.selected =
				self.particles[c.p1].highlighted && self.particles[c.p2].highlighted;
		}
		if !torn.is_empty() {
			let mut idx = 0;
			self.constraints.retain(|_| {
				let keep = !torn.contains(&idx);
				idx += 1;
				keep
			});
		}
		torn.len()
	}

	pub fn particles(&self) -> &[Particle] {
		&self.particles
	}

	pub fn particle_mut(&mut self, id: usize) -> Option<&mut Particle> {
		self.particles.get_mut(id)
	}

	pub fn constraints(&self) -> &[Constraint] {
		&self.constraints
	}

	pub fn particle_count(&self) -> usize {
		self.particles.len()
	}

	pub fn constraint_count(&self) -> usize {
		self.constraints.len()
	}

	// constraints left behind by a cut, still referencing inactive particles
	pub fn dangling_count(&self) -> usize {
		self.constraints
			.iter()
			.filter(|c| !c.is_live(&self.particles))
			.count()
	}

	pub fn pr_model(&self) -> PrModel {
		let particles = self
			.particles
			.iter()
			.enumerate()
			.filter(|(_, p)| p.active)
			.map(|(id, p)| (id, p.render()))
			.collect();
		let constraints = self
			.constraints
			.iter()
			.filter(|c| c.is_live(&self.particles))
			.map(|c| c.render())
			.collect();
		PrModel {
			particles,
			constraints,
		}
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_zero_spacing() {
		assert_eq!(Cloth::new(10, 10, 0).unwrap_err(), ClothError::ZeroSpacing);
	}

	#[test]
	fn test_links_point_up_and_left() {
		let mut cloth = Cloth::new(20, 10, 10).unwrap();
		cloth.init(V2::new(0., 0.), &Tunables::default());
		let links: Vec<_> = cloth.constraints().iter().map(|c| [c.p1, c.p2]).collect();
		// row 0: 0 1 2, row 1: 3 4 5
		assert_eq!(
			links,
			vec![[0, 1], [1, 2], [0, 3], [1, 4], [3, 4], [2, 5], [4, 5]]
		);
		assert!(cloth.constraints().iter().all(|c| c.length == 10.));
	}

	#[test]
	fn test_pin_every_nth_column() {
		let mut cloth = Cloth::new(300, 10, 10).unwrap();
		cloth.init(V2::new(0., 0.), &Tunables::default());
		let pinned: Vec<_> = cloth
			.particles()
			.iter()
			.enumerate()
			.filter(|(_, p)| p.pinned)
			.map(|(id, _)| id)
			.collect();
		assert_eq!(pinned, vec![0, 3, 6, 9, 12, 15, 18, 21, 24, 27, 30]);
	}

	#[test]
	fn test_narrow_cloth_pins_whole_edge() {
		let mut cloth = Cloth::new(30, 10, 10).unwrap();
		cloth.init(V2::new(0., 0.), &Tunables::default());
		let top = &cloth.particles()[..4];
		assert!(top.iter().all(|p| p.pinned));
		assert!(cloth.particles()[4..].iter().all(|p| !p.pinned));
	}

	#[test]
	fn test_init_is_idempotent() {
		let t = Tunables::default();
		let mut cloth = Cloth::new(40, 40, 10).unwrap();
		cloth.init(V2::new(0., 0.), &t);
		let n = (cloth.particle_count(), cloth.constraint_count());
		cloth.init(V2::new(50., 50.), &t);
		assert_eq!((cloth.particle_count(), cloth.constraint_count()), n);
		assert_eq!(cloth.particles()[0].pos, V2::new(0., 0.));
		cloth.reset(V2::new(50., 50.), &t);
		assert_eq!((cloth.particle_count(), cloth.constraint_count()), n);
		assert_eq!(cloth.particles()[0].pos, V2::new(50., 50.));
	}
}
