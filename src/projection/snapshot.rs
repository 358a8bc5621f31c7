//! Per-year account snapshots, projections and their totals

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::money::{format_cents, round_cents, ZERO_DISPLAY};

/// One projection year for one account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountSnapshot {
    pub year: i32,
    pub age: u32,

    // Full-precision amounts; rounding is applied only when rendered
    pub starting_value: Decimal,
    pub investment_return: Decimal,
    pub rmd: Decimal,
    pub ending_value: Decimal,
}

impl AccountSnapshot {
    /// Amounts rendered to cents for display
    pub fn rounded(&self) -> SnapshotDisplay {
        SnapshotDisplay {
            year: self.year,
            age: self.age,
            starting_value: format_cents(self.starting_value),
            investment_return: format_cents(self.investment_return),
            rmd: format_cents(self.rmd),
            ending_value: format_cents(self.ending_value),
        }
    }
}

/// A snapshot with every amount rendered to two fraction digits
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SnapshotDisplay {
    pub year: i32,
    pub age: u32,
    pub starting_value: String,
    pub investment_return: String,
    pub rmd: String,
    pub ending_value: String,
}

/// Complete year-by-year projection of one account
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct AccountProjection {
    snapshots: Vec<AccountSnapshot>,
}

impl AccountProjection {
    pub fn new() -> Self {
        Self::default()
    }

    pub(crate) fn with_capacity(years: usize) -> Self {
        Self {
            snapshots: Vec::with_capacity(years),
        }
    }

    pub(crate) fn add_snapshot(&mut self, snapshot: AccountSnapshot) {
        self.snapshots.push(snapshot);
    }

    pub fn snapshots(&self) -> &[AccountSnapshot] {
        &self.snapshots
    }

    pub fn iter(&self) -> std::slice::Iter<'_, AccountSnapshot> {
        self.snapshots.iter()
    }

    pub fn len(&self) -> usize {
        self.snapshots.len()
    }

    pub fn is_empty(&self) -> bool {
        self.snapshots.is_empty()
    }

    pub fn first(&self) -> Option<&AccountSnapshot> {
        self.snapshots.first()
    }

    pub fn last(&self) -> Option<&AccountSnapshot> {
        self.snapshots.last()
    }

    /// Snapshot for a calendar year, if the projection covers it
    pub fn snapshot_for_year(&self, year: i32) -> Option<&AccountSnapshot> {
        let first_year = self.first()?.year;
        let idx = usize::try_from(i64::from(year) - i64::from(first_year)).ok()?;
        self.snapshots.get(idx)
    }

    pub fn rmd_for_year(&self, year: i32) -> Option<Decimal> {
        self.snapshot_for_year(year).map(|s| s.rmd)
    }

    /// RMD for a calendar year rendered to cents, `"0.00"` when the year is not projected
    pub fn rmd_display_for_year(&self, year: i32) -> String {
        self.rmd_for_year(year)
            .map(format_cents)
            .unwrap_or_else(|| ZERO_DISPLAY.to_string())
    }

    /// Summary totals for this projection
    pub fn totals(&self) -> ProjectionTotals {
        ProjectionTotals::from_projection(self)
    }
}

impl<'a> IntoIterator for &'a AccountProjection {
    type Item = &'a AccountSnapshot;
    type IntoIter = std::slice::Iter<'a, AccountSnapshot>;

    fn into_iter(self) -> Self::IntoIter {
        self.snapshots.iter()
    }
}

/// Summary totals for one account's projection
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct ProjectionTotals {
    /// Sum of every year's RMD, each taken at its displayed cent value
    pub total_rmd: Decimal,

    /// Ending value of the final year, in cents; zero for an empty projection
    pub terminal_balance: Decimal,
}

impl ProjectionTotals {
    /// Aggregate a projection.
    ///
    /// Each RMD is rounded to cents before summing so the total reconciles
    /// with the per-year figures a reader sees.
    pub fn from_projection(projection: &AccountProjection) -> Self {
        let total_rmd = projection
            .iter()
            .map(|s| round_cents(s.rmd))
            .fold(Decimal::ZERO, Decimal::saturating_add);

        let terminal_balance = projection
            .last()
            .map(|s| round_cents(s.ending_value))
            .unwrap_or(Decimal::ZERO);

        Self { total_rmd, terminal_balance }
    }
}
