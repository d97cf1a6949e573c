use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum ClothError {
	#[error("cloth spacing must be non-zero")]
	ZeroSpacing,
	#[error("canvas must have a positive extent, got {width}x{height}")]
	EmptyCanvas { width: f64, height: f64 },
}
