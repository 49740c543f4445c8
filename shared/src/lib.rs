//! Shared domain crate for the Lychee Guard price-risk and insurance platform
//!
//! This crate holds everything with actual decision logic and is used by both
//! the backend service and the browser (via WASM):
//! - the image heuristic that scores fruit ripeness and health
//! - the payout engine that turns four risk indices into a payout decision
//! - insurance plan quoting and assessment statistics

pub mod analysis;
pub mod error;
pub mod models;
pub mod payout;
pub mod stats;
pub mod types;
pub mod validation;

pub use analysis::*;
pub use error::*;
pub use models::*;
pub use payout::*;
pub use stats::*;
pub use types::*;
pub use validation::*;
