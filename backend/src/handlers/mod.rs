//! HTTP handlers for the Lychee Guard API

pub mod assessment;
pub mod health;
pub mod payout;
pub mod plan;

pub use assessment::*;
pub use health::*;
pub use payout::*;
pub use plan::*;
