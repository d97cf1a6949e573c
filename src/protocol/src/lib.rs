pub mod pr_model;
pub mod user_event;

pub type V2 = nalgebra::Vector2<f64>;
