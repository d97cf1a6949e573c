use std::time::{Duration, Instant};

use crate::tunables::DT;

pub enum TimeModel {
	// as fast as possible, e.g. benchmarks and scripted runs
	VideoRender,
	RtFrameLock,
}

/// Hands out the nominal frame step, optionally pacing the caller to it.
pub struct TimeManager {
	pft: f64,
	model: TimeModel,
	start_time: Instant,
}

impl Default for TimeManager {
	fn default() -> Self {
		Self {
			pft: DT,
			model: TimeModel::RtFrameLock,
			start_time: Instant::now(),
		}
	}
}

impl TimeManager {
	pub fn with_model(mut self, model: TimeModel) -> Self {
		self.model = model;
		self
	}

	pub fn with_pft(mut self, pft: f64) -> Self {
		self.pft = pft;
		self
	}

	// wall time since the last call, in frames
	pub fn load(&self) -> f32 {
		(self.start_time.elapsed().as_secs_f64() / self.pft) as f32
	}

	pub fn take_time(&mut self) -> f64 {
		if let TimeModel::RtFrameLock = self.model {
			let frame = Duration::from_secs_f64(self.pft);
			let passed = self.start_time.elapsed();
			if passed < frame {
				std::thread::sleep(frame - passed);
			}
		}
		self.start_time = Instant::now();
		self.pft
	}
}
