//! Roth Planner - RMD projection engine for a two-spouse household
//!
//! This library provides:
//! - The statutory RMD distribution schedule (ages 75-120) and calculator
//! - Year-by-year projections of each spouse's pre-tax retirement account
//! - The shared household planning horizon
//! - An editable year-keyed ledger of Roth conversions and other income
//! - Projection totals and household plan assembly
//!
//! All amounts use `rust_decimal::Decimal`; nothing is binary floating point.

pub mod account;
pub mod assumptions;
pub mod error;
pub mod horizon;
pub mod household;
pub mod ledger;
pub mod money;
pub mod projection;

// Re-export commonly used types
pub use account::AccountInputs;
pub use assumptions::{DistributionSchedule, RmdCalculator};
pub use error::PlannerError;
pub use horizon::{Horizon, HorizonRow};
pub use household::{HouseholdInputs, HouseholdPlan, HouseholdPlanner, HouseholdTotals};
pub use ledger::{Ledger, LedgerField, LedgerYearEntry};
pub use projection::{AccountProjection, AccountProjector, AccountSnapshot, ProjectionTotals};
