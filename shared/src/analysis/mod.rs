//! Client-side image heuristics for fruit ripeness and health
//!
//! A deliberately cheap stand-in for a real vision model: the ripeness score
//! comes from the average color of the image and the health status from the
//! share of pixels that fall under fixed darkness thresholds.

mod analyzer;
mod buffer;
mod color;
mod detection;

pub use analyzer::*;
pub use buffer::*;
pub use color::*;
pub use detection::*;
