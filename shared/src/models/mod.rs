//! Domain models for the Lychee Guard platform

mod assessment;
mod behavior;
mod payout;
mod plan;
mod price;
mod region;
mod weather;

pub use assessment::*;
pub use behavior::*;
pub use payout::*;
pub use plan::*;
pub use price::*;
pub use region::*;
pub use weather::*;
