//! Editable year-by-year ledger of discretionary income events
//!
//! Roth conversions, salaries, rental income, interest/dividends, short-term
//! capital gains and pension, keyed by calendar year across the household
//! horizon. The ledger is independent of the account projections.

mod entry;
mod book;

pub use entry::{LedgerField, LedgerYearEntry};
pub use book::Ledger;
