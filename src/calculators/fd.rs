//! Fixed Deposit (FD) maturity calculator
//!
//! Annual compounding on the deposited principal, same growth curve as a
//! lumpsum investment but reported in deposit terms.

use serde::{Deserialize, Serialize};

use crate::calculators::lumpsum;
use crate::input::{AMOUNT, RATE_PERCENT, TENURE_YEARS};
use crate::series::{project_yearly, YearlyPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct FdInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct FdResult {
    pub principal: f64,
    pub maturity_amount: f64,
    pub interest_earned: f64,
    pub yearly: Vec<YearlyPoint>,
}

impl FdResult {
    pub fn zero() -> Self {
        Self {
            principal: 0.0,
            maturity_amount: 0.0,
            interest_earned: 0.0,
            yearly: Vec::new(),
        }
    }
}

impl FdInputs {
    fn is_valid(&self) -> bool {
        AMOUNT.accepts(self.principal)
            && RATE_PERCENT.accepts(self.annual_rate_percent)
            && TENURE_YEARS.accepts(self.years as f64)
    }
}

pub fn compute(inputs: &FdInputs) -> FdResult {
    if !inputs.is_valid() {
        return FdResult::zero();
    }

    let maturity = lumpsum::future_value(inputs.principal, inputs.annual_rate_percent, inputs.years);
    let yearly = project_yearly(inputs.years, |year| {
        (
            inputs.principal,
            lumpsum::future_value(inputs.principal, inputs.annual_rate_percent, year),
        )
    });

    FdResult {
        principal: inputs.principal,
        maturity_amount: maturity,
        interest_earned: maturity - inputs.principal,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_annual_compounding() {
        // 200,000 at 6.5% for 5 years
        let result = compute(&FdInputs {
            principal: 200_000.0,
            annual_rate_percent: 6.5,
            years: 5,
        });
        let expected = 200_000.0 * 1.065f64.powi(5);
        assert_relative_eq!(result.maturity_amount, expected, max_relative = 1e-12);
        assert_relative_eq!(
            result.interest_earned,
            expected - 200_000.0,
            max_relative = 1e-12
        );
    }

    #[test]
    fn test_zero_rate_returns_principal() {
        let result = compute(&FdInputs {
            principal: 75_000.0,
            annual_rate_percent: 0.0,
            years: 3,
        });
        assert_eq!(result.maturity_amount, 75_000.0);
        assert_eq!(result.interest_earned, 0.0);
    }

    #[test]
    fn test_invalid_input_returns_zero() {
        assert_eq!(
            compute(&FdInputs {
                principal: -5.0,
                annual_rate_percent: 6.5,
                years: 5
            }),
            FdResult::zero()
        );
        assert_eq!(
            compute(&FdInputs {
                principal: 75_000.0,
                annual_rate_percent: 6.5,
                years: 60
            }),
            FdResult::zero()
        );
    }
}
