//! Statutory assumptions: the RMD distribution schedule

mod distribution;

pub use distribution::{DistributionSchedule, RmdCalculator, RMD_END_AGE, RMD_START_AGE};
