//! Business logic services for the Lychee Guard platform

pub mod assessment;
pub mod payout;
pub mod plan;

pub use assessment::AssessmentService;
pub use payout::PayoutService;
pub use plan::PlanService;
