//! Per-spouse retirement account inputs

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

/// Starting position of one spouse's pre-tax retirement account
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct AccountInputs {
    /// Attained age in the first projection year
    pub age: u32,

    /// Age at which the projection ends (inclusive)
    pub life_expectancy: u32,

    /// Account value at the start of the first projection year
    #[serde(default)]
    pub balance: Decimal,
}

impl AccountInputs {
    pub fn new(age: u32, life_expectancy: u32, balance: Decimal) -> Self {
        Self { age, life_expectancy, balance }
    }

    /// Number of projection years, zero when the age is already past life expectancy
    pub fn projection_years(&self) -> u32 {
        if self.age > self.life_expectancy {
            0
        } else {
            self.life_expectancy - self.age + 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use rust_decimal_macros::dec;

    #[test]
    fn test_projection_years_inclusive() {
        assert_eq!(AccountInputs::new(75, 76, dec!(1)).projection_years(), 2);
        assert_eq!(AccountInputs::new(70, 70, dec!(1)).projection_years(), 1);
        assert_eq!(AccountInputs::new(80, 75, dec!(1)).projection_years(), 0);
    }

    #[test]
    fn test_deserialize_balance_from_string_or_number() {
        let from_str: AccountInputs =
            serde_json::from_str(r#"{"age": 72, "life_expectancy": 90, "balance": "250000.50"}"#).unwrap();
        assert_eq!(from_str.balance, dec!(250000.50));

        let from_num: AccountInputs =
            serde_json::from_str(r#"{"age": 72, "life_expectancy": 90, "balance": 1000}"#).unwrap();
        assert_eq!(from_num.balance, dec!(1000));

        let defaulted: AccountInputs =
            serde_json::from_str(r#"{"age": 72, "life_expectancy": 90}"#).unwrap();
        assert_eq!(defaulted.balance, Decimal::ZERO);
    }
}
