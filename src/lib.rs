pub mod errors;
pub mod coordinate;
pub mod config;
pub mod utils;
pub mod commands;

pub use coordinate::{Bounds, Point};
pub use config::MapConfiguration;
pub use errors::{MapError, MapResult};
