//! Core projection engine for annual account projections

use rust_decimal::Decimal;

use super::snapshot::{AccountProjection, AccountSnapshot};
use super::state::ProjectionState;
use crate::account::AccountInputs;
use crate::assumptions::RmdCalculator;

/// Upper bound on the snapshots reserved up front; longer runs grow as needed
const RESERVED_YEARS: u32 = 128;

/// Projects one account from its starting age to its life expectancy
#[derive(Debug, Clone)]
pub struct AccountProjector {
    /// Annual return as a percentage, e.g. 5 for 5%
    annual_return_rate_percent: Decimal,

    rmd: RmdCalculator,
}

impl AccountProjector {
    /// Create a projector using the statutory distribution schedule
    pub fn new(annual_return_rate_percent: Decimal) -> Self {
        Self {
            annual_return_rate_percent,
            rmd: RmdCalculator::default(),
        }
    }

    /// Run the projection for one account.
    ///
    /// # Arguments
    /// * `start_year` - Calendar year of the first snapshot
    /// * `starting_age` - Attained age in `start_year`
    /// * `life_expectancy` - Last age projected (inclusive)
    /// * `starting_balance` - Account value at the start of `start_year`
    ///
    /// # Returns
    /// One snapshot per age from `starting_age` to `life_expectancy`; empty
    /// when `starting_age > life_expectancy`.
    pub fn project(
        &self,
        start_year: i32,
        starting_age: u32,
        life_expectancy: u32,
        starting_balance: Decimal,
    ) -> AccountProjection {
        let inputs = AccountInputs::new(starting_age, life_expectancy, starting_balance);
        self.project_account(start_year, &inputs)
    }

    /// Run the projection for an account described by `inputs`
    pub fn project_account(&self, start_year: i32, inputs: &AccountInputs) -> AccountProjection {
        let reserved = inputs.projection_years().min(RESERVED_YEARS);
        let mut projection = AccountProjection::with_capacity(reserved as usize);
        let mut state = ProjectionState::from_inputs(inputs, start_year);

        while state.is_within(inputs.life_expectancy) {
            let snapshot = self.calculate_year(&state);
            let advanced = state.advance_year(snapshot.ending_value);
            projection.add_snapshot(snapshot);
            if !advanced {
                break;
            }
        }

        projection
    }

    /// Growth, then the required distribution, both on the opening balance.
    ///
    /// Values beyond `Decimal`'s range saturate at `Decimal::MAX` / `Decimal::MIN`.
    fn calculate_year(&self, state: &ProjectionState) -> AccountSnapshot {
        let investment_return = state
            .balance
            .saturating_mul(self.annual_return_rate_percent / Decimal::ONE_HUNDRED);
        let rmd = self.rmd.rmd(state.age, state.balance);
        let ending_value = state.balance.saturating_add(investment_return).saturating_sub(rmd);

        AccountSnapshot {
            year: state.year,
            age: state.age,
            starting_value: state.balance,
            investment_return,
            rmd,
            ending_value,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::money::format_cents;
    use proptest::prelude::{prop_assert, prop_assert_eq, proptest};
    use rust_decimal_macros::dec;

    #[test]
    fn test_two_year_reference_values() {
        let projector = AccountProjector::new(dec!(5));
        let projection = projector.project(2026, 75, 76, dec!(1000000.00));

        assert_eq!(projection.len(), 2);

        let year1 = projection.snapshots()[0].rounded();
        assert_eq!(year1.year, 2026);
        assert_eq!(year1.age, 75);
        assert_eq!(year1.starting_value, "1000000.00");
        assert_eq!(year1.investment_return, "50000.00");
        assert_eq!(year1.rmd, "40650.41");
        assert_eq!(year1.ending_value, "1009349.59");

        let year2 = projection.snapshots()[1].rounded();
        assert_eq!(year2.year, 2027);
        assert_eq!(year2.age, 76);
        assert_eq!(year2.starting_value, "1009349.59");
        assert_eq!(year2.investment_return, "50467.48");
        assert_eq!(year2.rmd, "42588.59");
        assert_eq!(year2.ending_value, "1017228.48");
    }

    #[test]
    fn test_recurrence_carries_full_precision() {
        let projector = AccountProjector::new(dec!(5));
        let projection = projector.project(2026, 75, 77, dec!(1000000));

        let year3 = &projection.snapshots()[2];
        assert_eq!(format_cents(year3.starting_value), "1017228.48");
        assert_eq!(format_cents(year3.rmd), "44420.46");
        assert_eq!(format_cents(year3.ending_value), "1023669.45");
    }

    #[test]
    fn test_empty_when_age_exceeds_life_expectancy() {
        let projector = AccountProjector::new(dec!(5));
        let projection = projector.project(2026, 80, 75, dec!(100000));

        assert!(projection.is_empty());
        let totals = projection.totals();
        assert_eq!(totals.total_rmd, Decimal::ZERO);
        assert_eq!(totals.terminal_balance, Decimal::ZERO);
    }

    #[test]
    fn test_zero_balance_still_ages_through_horizon() {
        let projector = AccountProjector::new(dec!(7));
        let projection = projector.project(2026, 70, 95, Decimal::ZERO);

        assert_eq!(projection.len(), 26);
        assert!(projection.iter().all(|s| s.investment_return.is_zero()
            && s.rmd.is_zero()
            && s.ending_value.is_zero()));
        assert_eq!(projection.last().map(|s| s.age), Some(95));
    }

    #[test]
    fn test_no_rmd_before_start_age() {
        let projector = AccountProjector::new(dec!(4));
        let projection = projector.project(2026, 70, 76, dec!(500000));

        for snapshot in &projection {
            if snapshot.age < 75 {
                assert_eq!(snapshot.rmd, Decimal::ZERO);
                assert_eq!(snapshot.ending_value, snapshot.starting_value + snapshot.investment_return);
            } else {
                assert!(snapshot.rmd > Decimal::ZERO);
            }
        }
    }

    #[test]
    fn test_zero_growth_is_flat_less_rmd_and_deterministic() {
        let projector = AccountProjector::new(Decimal::ZERO);
        let first = projector.project(2026, 75, 100, dec!(750000));
        let second = projector.project(2026, 75, 100, dec!(750000));

        for snapshot in &first {
            assert_eq!(snapshot.ending_value, snapshot.starting_value - snapshot.rmd);
        }
        assert_eq!(first, second);
    }

    #[test]
    fn test_past_table_end_has_no_rmd() {
        let projector = AccountProjector::new(dec!(3));
        let projection = projector.project(2026, 119, 122, dec!(10000));

        let rmds: Vec<_> = projection.iter().map(|s| s.rmd).collect();
        assert_eq!(rmds[0], dec!(10000) / dec!(2.3));
        assert!(rmds[1] > Decimal::ZERO);
        assert_eq!(rmds[2], Decimal::ZERO);
        assert_eq!(rmds[3], Decimal::ZERO);
    }

    #[test]
    fn test_negative_rate_shrinks_balance() {
        let projector = AccountProjector::new(dec!(-10));
        let projection = projector.project(2026, 60, 61, dec!(1000));

        assert_eq!(projection.snapshots()[0].ending_value, dec!(900));
        assert_eq!(projection.snapshots()[1].ending_value, dec!(810));
    }

    #[test]
    fn test_runaway_growth_saturates() {
        // 100% growth doubles 1e10 past Decimal::MAX well before age 74
        let projector = AccountProjector::new(dec!(100));
        let projection = projector.project(2026, 0, 74, dec!(10000000000));

        assert_eq!(projection.len(), 75);
        assert_eq!(projection.last().map(|s| s.ending_value), Some(Decimal::MAX));
        assert_eq!(projection.totals().terminal_balance, Decimal::MAX);
    }

    #[test]
    fn test_saturated_balance_with_rmds() {
        let projector = AccountProjector::new(dec!(100));
        let projection = projector.project(2026, 75, 120, Decimal::MAX);

        assert_eq!(projection.len(), 46);
        for snapshot in &projection {
            assert!(snapshot.rmd > Decimal::ZERO);
            assert!(snapshot.ending_value < Decimal::MAX);
        }
        // 46 distributions of at least MAX / 24.6 each
        assert_eq!(projection.totals().total_rmd, Decimal::MAX);
    }

    #[test]
    fn test_last_representable_age_ends_projection() {
        let projector = AccountProjector::new(dec!(5));
        let projection = projector.project(2026, u32::MAX - 1, u32::MAX, dec!(1000));

        assert_eq!(projection.len(), 2);
        assert_eq!(projection.last().map(|s| (s.year, s.age)), Some((2027, u32::MAX)));
    }

    #[test]
    fn test_last_representable_year_ends_projection() {
        let projector = AccountProjector::new(dec!(5));
        let projection = projector.project(i32::MAX - 1, 70, 90, dec!(1000));

        assert_eq!(projection.len(), 2);
        assert_eq!(projection.last().map(|s| (s.year, s.age)), Some((i32::MAX, 71)));
    }

    proptest! {
        #![proptest_config(proptest::test_runner::Config::with_cases(48))]

        #[test]
        fn prop_ages_and_years_are_consecutive(
            start_year in 2000i32..2100,
            starting_age in 50u32..110,
            span in 0u32..40,
            balance_cents in 0i64..500_000_000,
            rate_bp in -500i64..1500
        ) {
            let projector = AccountProjector::new(Decimal::new(rate_bp, 2));
            let life_expectancy = starting_age + span;
            let projection = projector.project(
                start_year, starting_age, life_expectancy, Decimal::new(balance_cents, 2));

            prop_assert_eq!(projection.len() as u32, span + 1);
            for (offset, snapshot) in projection.iter().enumerate() {
                prop_assert_eq!(snapshot.age, starting_age + offset as u32);
                prop_assert_eq!(snapshot.year, start_year + offset as i32);
            }
        }

        #[test]
        fn prop_starting_value_equals_prior_ending_value(
            starting_age in 60u32..100,
            span in 1u32..30,
            balance_cents in 0i64..500_000_000,
            rate_bp in -300i64..1200
        ) {
            let projector = AccountProjector::new(Decimal::new(rate_bp, 2));
            let projection = projector.project(
                2026, starting_age, starting_age + span, Decimal::new(balance_cents, 2));

            for pair in projection.snapshots().windows(2) {
                prop_assert_eq!(pair[1].starting_value, pair[0].ending_value);
            }
            for snapshot in &projection {
                prop_assert!(snapshot.rmd >= Decimal::ZERO);
                prop_assert_eq!(
                    snapshot.ending_value,
                    snapshot.starting_value + snapshot.investment_return - snapshot.rmd
                );
            }
        }
    }
}
