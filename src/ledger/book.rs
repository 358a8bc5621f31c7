//! Year-keyed ledger of discretionary amounts

use rust_decimal::Decimal;
use serde::Serialize;
use std::collections::BTreeMap;

use super::entry::{LedgerField, LedgerYearEntry};
use crate::error::{PlannerError, Result};
use crate::horizon::Horizon;
use crate::money::parse_amount;

/// Editable amounts for every year of the planning horizon.
///
/// Every key is populated with a zeroed entry at creation; the key set never
/// changes afterwards. Edits replace one field of one year.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
#[serde(transparent)]
pub struct Ledger {
    entries: BTreeMap<i32, LedgerYearEntry>,
}

impl Ledger {
    /// One default entry per horizon year
    pub fn create(horizon: &Horizon) -> Self {
        Self::from_years(horizon.years())
    }

    /// One default entry per distinct year
    pub fn from_years<I: IntoIterator<Item = i32>>(years: I) -> Self {
        Self {
            entries: years
                .into_iter()
                .map(|year| (year, LedgerYearEntry::default()))
                .collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn first_year(&self) -> Option<i32> {
        self.entries.keys().next().copied()
    }

    pub fn last_year(&self) -> Option<i32> {
        self.entries.keys().next_back().copied()
    }

    /// Years in ascending order
    pub fn years(&self) -> impl Iterator<Item = i32> + '_ {
        self.entries.keys().copied()
    }

    /// `(year, entry)` pairs in ascending year order
    pub fn iter(&self) -> impl Iterator<Item = (i32, &LedgerYearEntry)> + '_ {
        self.entries.iter().map(|(year, entry)| (*year, entry))
    }

    pub fn entry(&self, year: i32) -> Result<&LedgerYearEntry> {
        self.entries.get(&year).ok_or_else(|| self.out_of_range(year))
    }

    /// Read one field of one year
    pub fn get_field(&self, year: i32, field_name: &str) -> Result<Decimal> {
        let entry = self.entry(year)?;
        let field: LedgerField = field_name.parse()?;
        Ok(entry.get(field))
    }

    /// Replace one field of one year in place
    pub fn set_field(&mut self, year: i32, field: LedgerField, value: Decimal) -> Result<()> {
        let range_error = self.out_of_range(year);
        let entry = self.entries.get_mut(&year).ok_or(range_error)?;
        entry.set(field, value);
        Ok(())
    }

    /// Copy of this ledger with one field of one year replaced
    pub fn with_field(&self, year: i32, field_name: &str, value: Decimal) -> Result<Ledger> {
        self.entry(year)?;
        let field: LedgerField = field_name.parse()?;

        let mut updated = self.clone();
        updated.set_field(year, field, value)?;
        Ok(updated)
    }

    /// Parse user-entered text and store it in one field of one year.
    ///
    /// Year and field are validated before the text, so a caller defect is
    /// reported ahead of a user-input problem.
    pub fn set_field_text(&mut self, year: i32, field_name: &str, raw_text: &str) -> Result<()> {
        self.entry(year)?;
        let field: LedgerField = field_name.parse()?;
        let value = Self::parse_for_field(field, raw_text)?;
        self.set_field(year, field, value)
    }

    fn parse_for_field(field: LedgerField, raw_text: &str) -> Result<Decimal> {
        let invalid = || PlannerError::InvalidAmount {
            field: field.as_str().to_string(),
            raw: raw_text.to_string(),
        };

        let value = parse_amount(raw_text).ok_or_else(invalid)?;
        if value.is_sign_negative() && !value.is_zero() && !field.allows_negative() {
            return Err(invalid());
        }
        Ok(value)
    }

    fn out_of_range(&self, year: i32) -> PlannerError {
        PlannerError::OutOfRangeYear {
            year,
            first: self.first_year(),
            last: self.last_year(),
        }
    }
}
