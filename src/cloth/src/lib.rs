pub mod cloth;
pub mod constraint;
pub mod controller_message;
pub mod error;
pub mod particle;
pub mod pointer;
pub mod posbox;
pub mod time_manager;
pub mod tunables;
pub mod world;

pub use protocol::V2;
