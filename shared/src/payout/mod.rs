//! Insurance payout calculation
//!
//! Four independently scored risk dimensions are combined under fixed
//! actuarial weights into a total payout index, which then drives the payout,
//! pre-payout and subsidy amounts.

mod engine;
mod indices;
mod plans;

pub use engine::*;
pub use indices::*;
pub use plans::*;
