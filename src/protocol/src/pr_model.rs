// pr_model: Physical model for rendering

use std::collections::HashMap;

#[derive(Clone, Debug, PartialEq)]
pub struct PrParticle {
	pub pos: [f64; 2],
	pub pinned: bool,
	pub highlighted: bool,
}

#[derive(Clone, Debug, PartialEq)]
pub struct PrConstraint {
	pub particles: [usize; 2],
	pub selected: bool,
}

#[derive(Clone, Debug, Default)]
pub struct PrModel {
	pub particles: HashMap<usize, PrParticle>,
	pub constraints: Vec<PrConstraint>,
}

impl PrModel {
	pub fn segments(&self) -> impl Iterator<Item = ([f64; 2], [f64; 2])> + '_ {
		// snapshot only holds live constraints, both ends are present
		self.constraints.iter().filter_map(move |c| {
			let p1 = self.particles.get(&c.particles[0])?;
			let p2 = self.particles.get(&c.particles[1])?;
			Some((p1.pos, p2.pos))
		})
	}
}

#[cfg(test)]
mod test {
	use super::*;

	#[test]
	fn test_segments_skip_missing() {
		let mut model = PrModel::default();
		model.particles.insert(
			0,
			PrParticle {
				pos: [0., 0.],
				pinned: true,
				highlighted: false,
			},
		);
		model.particles.insert(
			1,
			PrParticle {
				pos: [1., 0.],
				pinned: false,
				highlighted: false,
			},
		);
		model.constraints.push(PrConstraint {
			particles: [0, 1],
			selected: false,
		});
		model.constraints.push(PrConstraint {
			particles: [1, 2],
			selected: false,
		});
		let segs: Vec<_> = model.segments().collect();
		assert_eq!(segs, vec![([0., 0.], [1., 0.])]);
	}
}
