//! Coordinate value types for map surfaces
//!
//! This module provides the point and bounds values that map components
//! pass around. All arithmetic is planar: no reference-system transforms
//! are applied, so the same types serve geographic and pixel coordinates.

mod bounds;
mod point;
#[cfg(test)]
mod tests;

// Re-export key types
pub use self::bounds::Bounds;
pub use self::point::Point;
