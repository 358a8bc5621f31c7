//! Projection state tracking for a single account

use rust_decimal::Decimal;

use crate::account::AccountInputs;

/// State of an account at the start of a projection year
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProjectionState {
    /// Calendar year
    pub year: i32,

    /// Attained age
    pub age: u32,

    /// Beginning of year account value, full precision
    pub balance: Decimal,
}

impl ProjectionState {
    /// Initialize state for the first projection year
    pub fn from_inputs(inputs: &AccountInputs, start_year: i32) -> Self {
        Self {
            year: start_year,
            age: inputs.age,
            balance: inputs.balance,
        }
    }

    /// Roll into the next year, carrying the ending value forward unrounded.
    ///
    /// Returns `false`, leaving the state unchanged, when the age or the
    /// calendar year has no successor.
    pub fn advance_year(&mut self, ending_value: Decimal) -> bool {
        let (Some(age), Some(year)) = (self.age.checked_add(1), self.year.checked_add(1)) else {
            return false;
        };
        self.balance = ending_value;
        self.age = age;
        self.year = year;
        true
    }

    /// Whether the current year is still within the projection
    pub fn is_within(&self, life_expectancy: u32) -> bool {
        self.age <= life_expectancy
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_advance_year_moves_in_lockstep() {
        let inputs = AccountInputs::new(74, 76, dec!(1000));
        let mut state = ProjectionState::from_inputs(&inputs, 2030);

        assert!(state.advance_year(dec!(1010.123456)));

        assert_eq!(state.year, 2031);
        assert_eq!(state.age, 75);
        assert_eq!(state.balance, dec!(1010.123456));
        assert!(state.is_within(76));

        state.advance_year(dec!(0));
        state.advance_year(dec!(0));
        assert!(!state.is_within(76));
    }

    #[test]
    fn test_advance_year_stops_at_last_age() {
        let inputs = AccountInputs::new(u32::MAX, u32::MAX, dec!(1));
        let mut state = ProjectionState::from_inputs(&inputs, 2030);

        assert!(!state.advance_year(dec!(2)));
        assert_eq!(state.age, u32::MAX);
        assert_eq!(state.year, 2030);
        assert_eq!(state.balance, dec!(1));
    }
}
