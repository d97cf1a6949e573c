use crate::error::ClothError;
use crate::V2;

#[derive(Clone, Debug, PartialEq)]
pub struct Posbox {
	pub xmin: f64,
	pub xmax: f64,
	pub ymin: f64,
	pub ymax: f64,
}

impl Posbox {
	pub fn from_size(width: f64, height: f64) -> Result<Self, ClothError> {
		if !(width > 0.0 && height > 0.0) {
			return Err(ClothError::EmptyCanvas { width, height });
		}
		Ok(Self {
			xmin: 0.0,
			xmax: width,
			ymin: 0.0,
			ymax: height,
		})
	}

	pub fn size(&self) -> [f64; 2] {
		[self.xmax - self.xmin, self.ymax - self.ymin]
	}

	// returns which axes were clamped
	pub fn apply(&self, pos: &mut V2) -> [bool; 2] {
		let mut flag = [false; 2];
		if pos[0] < self.xmin {
			pos[0] = self.xmin;
			flag[0] = true;
		} else if pos[0] >= self.xmax {
			pos[0] = self.xmax;
			flag[0] = true;
		};
		if pos[1] < self.ymin {
			pos[1] = self.ymin;
			flag[1] = true;
		} else if pos[1] > self.ymax {
			pos[1] = self.ymax;
			flag[1] = true;
		};
		flag
	}
}

/// Drawable area plus the pending one-frame window-resize offset.
#[derive(Clone, Debug, PartialEq)]
pub struct Canvas {
	pub posbox: Posbox,
	pub offset: V2,
}

impl Canvas {
	pub fn new(width: f64, height: f64) -> Result<Self, ClothError> {
		Ok(Self {
			posbox: Posbox::from_size(width, height)?,
			offset: V2::zeros(),
		})
	}
}
