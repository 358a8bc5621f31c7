//! Ledger fields and per-year entries

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

use crate::error::PlannerError;

/// The eight editable amounts recorded for each horizon year
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub enum LedgerField {
    RothConversionSpouse1,
    RothConversionSpouse2,
    SalarySpouse1,
    SalarySpouse2,
    RentalIncome,
    InterestDividendIncome,
    ShortTermCapitalGains,
    Pension,
}

impl LedgerField {
    /// All fields in display order
    pub const ALL: [LedgerField; 8] = [
        LedgerField::RothConversionSpouse1,
        LedgerField::RothConversionSpouse2,
        LedgerField::SalarySpouse1,
        LedgerField::SalarySpouse2,
        LedgerField::RentalIncome,
        LedgerField::InterestDividendIncome,
        LedgerField::ShortTermCapitalGains,
        LedgerField::Pension,
    ];

    /// Name used at the text boundary
    pub fn as_str(&self) -> &'static str {
        match self {
            LedgerField::RothConversionSpouse1 => "rothConversionSpouse1",
            LedgerField::RothConversionSpouse2 => "rothConversionSpouse2",
            LedgerField::SalarySpouse1 => "salarySpouse1",
            LedgerField::SalarySpouse2 => "salarySpouse2",
            LedgerField::RentalIncome => "rentalIncome",
            LedgerField::InterestDividendIncome => "interestDividendIncome",
            LedgerField::ShortTermCapitalGains => "shortTermCapitalGains",
            LedgerField::Pension => "pension",
        }
    }

    /// Column heading for tabular output
    pub fn label(&self) -> &'static str {
        match self {
            LedgerField::RothConversionSpouse1 => "Roth Conversion 1",
            LedgerField::RothConversionSpouse2 => "Roth Conversion 2",
            LedgerField::SalarySpouse1 => "Salary 1",
            LedgerField::SalarySpouse2 => "Salary 2",
            LedgerField::RentalIncome => "Rental Income",
            LedgerField::InterestDividendIncome => "Interest / Dividend",
            LedgerField::ShortTermCapitalGains => "Capital Gains",
            LedgerField::Pension => "Pension",
        }
    }

    /// Capital gains may record a loss; every other amount is non-negative
    pub fn allows_negative(&self) -> bool {
        matches!(self, LedgerField::ShortTermCapitalGains)
    }
}

impl fmt::Display for LedgerField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for LedgerField {
    type Err = PlannerError;

    /// Accepts the camelCase name or its snake_case spelling
    fn from_str(name: &str) -> Result<Self, Self::Err> {
        let field = match name {
            "rothConversionSpouse1" | "roth_conversion_spouse1" => LedgerField::RothConversionSpouse1,
            "rothConversionSpouse2" | "roth_conversion_spouse2" => LedgerField::RothConversionSpouse2,
            "salarySpouse1" | "salary_spouse1" => LedgerField::SalarySpouse1,
            "salarySpouse2" | "salary_spouse2" => LedgerField::SalarySpouse2,
            "rentalIncome" | "rental_income" => LedgerField::RentalIncome,
            "interestDividendIncome" | "interest_dividend_income" => LedgerField::InterestDividendIncome,
            "shortTermCapitalGains" | "short_term_capital_gains" => LedgerField::ShortTermCapitalGains,
            "pension" => LedgerField::Pension,
            other => {
                return Err(PlannerError::UnknownField {
                    name: other.to_string(),
                })
            }
        };
        Ok(field)
    }
}

/// Discretionary amounts for one calendar year, all zero by default
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct LedgerYearEntry {
    pub roth_conversion_spouse1: Decimal,
    pub roth_conversion_spouse2: Decimal,
    pub salary_spouse1: Decimal,
    pub salary_spouse2: Decimal,
    pub rental_income: Decimal,
    pub interest_dividend_income: Decimal,
    pub short_term_capital_gains: Decimal,
    pub pension: Decimal,
}

impl LedgerYearEntry {
    pub fn get(&self, field: LedgerField) -> Decimal {
        match field {
            LedgerField::RothConversionSpouse1 => self.roth_conversion_spouse1,
            LedgerField::RothConversionSpouse2 => self.roth_conversion_spouse2,
            LedgerField::SalarySpouse1 => self.salary_spouse1,
            LedgerField::SalarySpouse2 => self.salary_spouse2,
            LedgerField::RentalIncome => self.rental_income,
            LedgerField::InterestDividendIncome => self.interest_dividend_income,
            LedgerField::ShortTermCapitalGains => self.short_term_capital_gains,
            LedgerField::Pension => self.pension,
        }
    }

    /// Replace a single field
    pub fn set(&mut self, field: LedgerField, value: Decimal) {
        let slot = match field {
            LedgerField::RothConversionSpouse1 => &mut self.roth_conversion_spouse1,
            LedgerField::RothConversionSpouse2 => &mut self.roth_conversion_spouse2,
            LedgerField::SalarySpouse1 => &mut self.salary_spouse1,
            LedgerField::SalarySpouse2 => &mut self.salary_spouse2,
            LedgerField::RentalIncome => &mut self.rental_income,
            LedgerField::InterestDividendIncome => &mut self.interest_dividend_income,
            LedgerField::ShortTermCapitalGains => &mut self.short_term_capital_gains,
            LedgerField::Pension => &mut self.pension,
        };
        *slot = value;
    }

    /// `(field, amount)` pairs in display order
    pub fn amounts(&self) -> impl Iterator<Item = (LedgerField, Decimal)> + '_ {
        LedgerField::ALL.iter().map(move |&field| (field, self.get(field)))
    }

    pub fn is_blank(&self) -> bool {
        self.amounts().all(|(_, amount)| amount.is_zero())
    }
}
