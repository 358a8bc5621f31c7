//! Household runner: both spouses' projections, the shared horizon and ledger
//!
//! Each input change is handled by building a fresh `HouseholdPlan`; nothing
//! is cached between runs.

use chrono::Datelike;
use log::debug;
use rust_decimal::Decimal;
use rust_decimal_macros::dec;
use serde::{Deserialize, Serialize};

use crate::account::AccountInputs;
use crate::horizon::{Horizon, HorizonRow};
use crate::ledger::{Ledger, LedgerYearEntry};
use crate::money::format_cents;
use crate::projection::{AccountProjection, AccountProjector, ProjectionTotals};

/// Planning inputs for a two-spouse household
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct HouseholdInputs {
    pub spouse1: AccountInputs,
    pub spouse2: AccountInputs,

    /// Annual return applied to both accounts, as a percentage
    #[serde(default = "default_return_rate_percent")]
    pub annual_return_rate_percent: Decimal,

    /// First projection year (default: the current calendar year)
    #[serde(default)]
    pub start_year: Option<i32>,
}

fn default_return_rate_percent() -> Decimal {
    DEFAULT_RETURN_RATE_PERCENT
}

/// Annual return used when none is configured (5%)
pub const DEFAULT_RETURN_RATE_PERCENT: Decimal = dec!(5);

/// Current calendar year on the local clock
pub fn current_year() -> i32 {
    chrono::Local::now().year()
}

impl HouseholdInputs {
    pub fn new(spouse1: AccountInputs, spouse2: AccountInputs, annual_return_rate_percent: Decimal) -> Self {
        Self {
            spouse1,
            spouse2,
            annual_return_rate_percent,
            start_year: None,
        }
    }

    pub fn starting_in(mut self, year: i32) -> Self {
        self.start_year = Some(year);
        self
    }

    /// Configured start year, or the current calendar year
    pub fn resolved_start_year(&self) -> i32 {
        self.start_year.unwrap_or_else(current_year)
    }

    pub fn horizon(&self) -> Horizon {
        self.horizon_from(self.resolved_start_year())
    }

    fn horizon_from(&self, start_year: i32) -> Horizon {
        Horizon::plan(
            start_year,
            self.spouse1.age,
            self.spouse2.age,
            self.spouse1.life_expectancy,
            self.spouse2.life_expectancy,
        )
    }
}

/// Totals for both spouses, with the household sums
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct HouseholdTotals {
    pub spouse1: ProjectionTotals,
    pub spouse2: ProjectionTotals,
}

impl HouseholdTotals {
    pub fn combined_rmd(&self) -> Decimal {
        self.spouse1.total_rmd.saturating_add(self.spouse2.total_rmd)
    }

    /// Pre-tax balance left to heirs across both accounts
    pub fn combined_terminal_balance(&self) -> Decimal {
        self.spouse1.terminal_balance.saturating_add(self.spouse2.terminal_balance)
    }
}

/// One horizon year with ages, ledger amounts and each spouse's RMD
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HouseholdYearRow<'a> {
    pub year: i32,
    pub age_spouse1: u32,
    pub age_spouse2: u32,
    pub ledger: &'a LedgerYearEntry,

    /// RMD to cents, `"0.00"` when spouse 1's projection has no such year
    pub rmd_spouse1: String,
    pub rmd_spouse2: String,
}

/// Everything computed for one set of household inputs
#[derive(Debug, Clone, Serialize)]
pub struct HouseholdPlan {
    pub inputs: HouseholdInputs,
    pub start_year: i32,
    pub horizon: Horizon,
    pub spouse1: AccountProjection,
    pub spouse2: AccountProjection,
    pub totals: HouseholdTotals,
    ledger: Ledger,
}

impl HouseholdPlan {
    pub fn ledger(&self) -> &Ledger {
        &self.ledger
    }

    pub fn ledger_mut(&mut self) -> &mut Ledger {
        &mut self.ledger
    }

    /// Merge the horizon, ledger and both projections by year
    pub fn rows(&self) -> Vec<HouseholdYearRow<'_>> {
        self.horizon
            .rows()
            .filter_map(|row| self.year_row(row))
            .collect()
    }

    fn year_row(&self, row: HorizonRow) -> Option<HouseholdYearRow<'_>> {
        // The ledger is keyed by the same horizon, so every row has an entry
        let ledger = self.ledger.entry(row.year).ok()?;
        Some(HouseholdYearRow {
            year: row.year,
            age_spouse1: row.age_spouse1,
            age_spouse2: row.age_spouse2,
            ledger,
            rmd_spouse1: self.spouse1.rmd_display_for_year(row.year),
            rmd_spouse2: self.spouse2.rmd_display_for_year(row.year),
        })
    }

    /// Totals block rendered to cents: (label, spouse 1, spouse 2, household)
    pub fn totals_display(&self) -> [(&'static str, String, String, String); 2] {
        let t = &self.totals;
        [
            (
                "Total RMDs",
                format_cents(t.spouse1.total_rmd),
                format_cents(t.spouse2.total_rmd),
                format_cents(t.combined_rmd()),
            ),
            (
                "Inherited Pre-Tax IRA",
                format_cents(t.spouse1.terminal_balance),
                format_cents(t.spouse2.terminal_balance),
                format_cents(t.combined_terminal_balance()),
            ),
        ]
    }
}

/// Runs both account projections and builds the household plan
#[derive(Debug, Clone)]
pub struct HouseholdPlanner {
    inputs: HouseholdInputs,
}

impl HouseholdPlanner {
    pub fn new(inputs: HouseholdInputs) -> Self {
        Self { inputs }
    }

    /// Project both accounts and lay out a default ledger over the horizon
    pub fn run(&self) -> HouseholdPlan {
        let start_year = self.inputs.resolved_start_year();
        let projector = AccountProjector::new(self.inputs.annual_return_rate_percent);

        let spouse1 = projector.project_account(start_year, &self.inputs.spouse1);
        let spouse2 = projector.project_account(start_year, &self.inputs.spouse2);

        let horizon = self.inputs.horizon_from(start_year);
        let ledger = Ledger::create(&horizon);

        debug!(
            "Household plan from {}: horizon {} years, spouse 1 {} years, spouse 2 {} years",
            start_year,
            horizon.len(),
            spouse1.len(),
            spouse2.len()
        );

        let totals = HouseholdTotals {
            spouse1: spouse1.totals(),
            spouse2: spouse2.totals(),
        };

        HouseholdPlan {
            inputs: self.inputs.clone(),
            start_year,
            horizon,
            spouse1,
            spouse2,
            totals,
            ledger,
        }
    }
}
