//! Geometric Primitives and Operations

pub mod angles;

// Re-export commonly used items
pub use angles::{direction_degrees, is_axis_aligned, normalize_degrees, same_direction};
