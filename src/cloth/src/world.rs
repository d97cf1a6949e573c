use std::time::Instant;

use crate::cloth::Cloth;
use crate::controller_message::ControllerMessage;
use crate::error::ClothError;
use crate::pointer::PointerState;
use crate::posbox::{Canvas, Posbox};
use crate::tunables::{Tunables, DT};
use crate::V2;
use protocol::pr_model::PrModel;
use protocol::user_event::UpdateInfo;

// cloth covers the canvas width and a third of its height
const CLOTH_HEIGHT: f64 = 0.33;
const ANCHOR_HEIGHT: f64 = 0.2;

/// A single cloth session: the engine plus the state the input layer and
/// the configuration surface feed into it.
pub struct World {
	pub dt: f64,
	pub tunables: Tunables,
	cloth: Cloth,
	pointer: PointerState,
	canvas: Canvas,
	frame: u64,
}

impl World {
	pub fn new(width: f64, height: f64, spacing: u32) -> Result<Self, ClothError> {
		let canvas = Canvas::new(width, height)?;
		let cloth = Cloth::new(width as u32, (height * CLOTH_HEIGHT) as u32, spacing)?;
		let mut result = Self {
			dt: DT,
			tunables: Tunables::default(),
			cloth,
			pointer: PointerState::default(),
			canvas,
			frame: 0,
		};
		result.cloth.init(result.anchor(), &result.tunables);
		Ok(result)
	}

	pub fn with_dt(mut self, dt: f64) -> Self {
		self.dt = dt;
		self
	}

	/// Rebuilds the cloth so its particles start from the given values.
	pub fn with_tunables(mut self, tunables: Tunables) -> Self {
		self.tunables = tunables;
		self.pointer
			.set_focus_range(self.tunables.min_focus, self.tunables.max_focus);
		self.cloth.reset(self.anchor(), &self.tunables);
		self
	}

	pub fn anchor(&self) -> V2 {
		let [width, height] = self.canvas.posbox.size();
		let cloth_width = self.cloth.size()[0] as f64;
		V2::new(((width - cloth_width) / 2.).floor(), (height * ANCHOR_HEIGHT).floor())
	}

	pub fn handle(&mut self, msg: ControllerMessage) {
		match msg {
			ControllerMessage::Pointer(event) => {
				// tunables is public, pick up focus bounds set since the last event
				self.pointer
					.set_focus_range(self.tunables.min_focus, self.tunables.max_focus);
				self.pointer.apply(event);
			}
			ControllerMessage::Reset => {
				log::info!("reset cloth");
				self.cloth.reset(self.anchor(), &self.tunables);
			}
			ControllerMessage::Resize(width, height) => self.resize(width, height),
			ControllerMessage::SetTunable(kind, value) => self.tunables.set(kind, value),
			ControllerMessage::ResetTunables => self.tunables.reset_defaults(),
		}
	}

	fn resize(&mut self, width: f64, height: f64) {
		let posbox = match Posbox::from_size(width, height) {
			Ok(posbox) => posbox,
			Err(e) => {
				log::warn!("resize ignored: {}", e);
				return;
			}
		};
		let [old_width, old_height] = self.canvas.posbox.size();
		self.canvas.offset += V2::new((width - old_width) / 2., (height - old_height) / 4.);
		self.canvas.posbox = posbox;
		log::info!("resize to {}x{}", width, height);
		// resize may arrive before the first layout
		self.cloth.init(self.anchor(), &self.tunables);
	}

	pub fn run_frame(&mut self) -> UpdateInfo {
		let start = Instant::now();
		self.pointer.advance(self.dt);
		let torn = self
			.cloth
			.update(&self.pointer, &self.tunables, &self.canvas, self.dt);
		self.canvas.offset = V2::zeros();
		self.frame += 1;
		let dangling = self.cloth.dangling_count();
		UpdateInfo {
			load: (start.elapsed().as_secs_f64() / self.dt) as f32,
			particle_len: self.cloth.particle_count(),
			constraint_len: [self.cloth.constraint_count() - dangling, dangling],
			torn,
		}
	}

	pub fn pr_model(&self) -> PrModel {
		self.cloth.pr_model()
	}

	pub fn cloth(&self) -> &Cloth {
		&self.cloth
	}

	pub fn pointer(&self) -> &PointerState {
		&self.pointer
	}

	pub fn canvas(&self) -> &Canvas {
		&self.canvas
	}

	pub fn frame(&self) -> u64 {
		self.frame
	}
}
