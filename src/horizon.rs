//! Household planning horizon
//!
//! The horizon runs from the start year until the longer-lived spouse's life
//! expectancy, measured from the younger spouse's age:
//! `max(le1, le2) - min(age1, age2) + 1` years. It is derived from ages
//! alone and is independent of either account's own projection length.

use serde::Serialize;

/// Contiguous range of calendar years shared by both spouses
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct Horizon {
    start_year: i32,
    year_count: u32,
    age_spouse1: u32,
    age_spouse2: u32,
}

/// One horizon year with both spouses' attained ages
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct HorizonRow {
    pub year: i32,
    pub age_spouse1: u32,
    pub age_spouse2: u32,
}

impl Horizon {
    /// Derive the horizon from both spouses' ages and life expectancies.
    ///
    /// A life expectancy below the younger age yields an empty horizon.
    pub fn plan(
        start_year: i32,
        age1: u32,
        age2: u32,
        life_expectancy1: u32,
        life_expectancy2: u32,
    ) -> Self {
        let last_age = i64::from(life_expectancy1.max(life_expectancy2));
        let first_age = i64::from(age1.min(age2));
        let year_count = (last_age - first_age + 1).max(0) as u32;

        Self {
            start_year,
            year_count,
            age_spouse1: age1,
            age_spouse2: age2,
        }
    }

    pub fn len(&self) -> usize {
        self.year_count as usize
    }

    pub fn is_empty(&self) -> bool {
        self.year_count == 0
    }

    pub fn first_year(&self) -> Option<i32> {
        (!self.is_empty()).then_some(self.start_year)
    }

    pub fn last_year(&self) -> Option<i32> {
        (!self.is_empty()).then(|| self.start_year + self.year_count as i32 - 1)
    }

    /// Calendar years in ascending order
    pub fn years(&self) -> impl Iterator<Item = i32> {
        let start = self.start_year;
        (0..self.year_count).map(move |offset| start + offset as i32)
    }

    /// Every horizon year with both spouses' ages advancing in lockstep
    pub fn rows(&self) -> impl Iterator<Item = HorizonRow> {
        let Self { start_year, year_count, age_spouse1, age_spouse2 } = *self;
        (0..year_count).map(move |offset| HorizonRow {
            year: start_year + offset as i32,
            age_spouse1: age_spouse1 + offset,
            age_spouse2: age_spouse2 + offset,
        })
    }
}
