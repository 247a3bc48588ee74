//! Public Provident Fund (PPF) calculator
//!
//! Annual contribution at the statutory fixed rate, 15-year minimum
//! lock-in. Each year the deposit lands first, then the whole balance earns
//! the annual rate, so the balance is built iteratively rather than from a
//! plain annuity closed form.

use serde::{Deserialize, Serialize};

use crate::input::{FieldRange, TENURE_YEARS};
use crate::series::YearlyPoint;

/// Current statutory PPF rate.
pub const PPF_RATE_PERCENT: f64 = 7.1;

/// Statutory lock-in.
pub const MIN_TENURE_YEARS: u32 = 15;

/// Statutory contribution bounds per financial year.
pub const CONTRIBUTION: FieldRange = FieldRange::new(500.0, 150_000.0);

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct PpfInputs {
    pub yearly_amount: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PpfResult {
    pub invested: f64,
    pub maturity_amount: f64,
    pub interest_earned: f64,
    pub yearly: Vec<YearlyPoint>,
}

impl PpfResult {
    pub fn zero() -> Self {
        Self {
            invested: 0.0,
            maturity_amount: 0.0,
            interest_earned: 0.0,
            yearly: Vec::new(),
        }
    }
}

impl PpfInputs {
    fn is_valid(&self) -> bool {
        CONTRIBUTION.accepts(self.yearly_amount)
            && TENURE_YEARS.accepts(self.years as f64)
            && self.years >= MIN_TENURE_YEARS
    }
}

pub fn compute(inputs: &PpfInputs) -> PpfResult {
    if !inputs.is_valid() {
        return PpfResult::zero();
    }

    let rate = PPF_RATE_PERCENT / 100.0;
    let mut balance = 0.0;
    let mut yearly = Vec::with_capacity(inputs.years as usize);

    for year in 1..=inputs.years {
        // Deposit first, then the annual interest credit
        balance = (balance + inputs.yearly_amount) * (1.0 + rate);
        yearly.push(YearlyPoint {
            year,
            invested: inputs.yearly_amount * year as f64,
            value: balance,
        });
    }

    let invested = inputs.yearly_amount * inputs.years as f64;
    PpfResult {
        invested,
        maturity_amount: balance,
        interest_earned: balance - invested,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_matches_annuity_due_closed_form() {
        // Deposit-then-compound over n years is A * (1+g) * ((1+g)^n - 1) / g
        let result = compute(&PpfInputs {
            yearly_amount: 150_000.0,
            years: 15,
        });
        let g = PPF_RATE_PERCENT / 100.0;
        let expected = 150_000.0 * (1.0 + g) * ((1.0 + g).powi(15) - 1.0) / g;
        assert_relative_eq!(result.maturity_amount, expected, max_relative = 1e-9);
        assert_eq!(result.invested, 2_250_000.0);
        assert!(result.interest_earned > 0.0);
    }

    #[test]
    fn test_tenure_monotonic() {
        let base = compute(&PpfInputs {
            yearly_amount: 50_000.0,
            years: 15,
        });
        let longer = compute(&PpfInputs {
            yearly_amount: 50_000.0,
            years: 20,
        });
        assert!(longer.maturity_amount > base.maturity_amount);
    }

    #[test]
    fn test_lock_in_enforced() {
        // Below the 15-year lock-in the calculator refuses to project
        assert_eq!(
            compute(&PpfInputs {
                yearly_amount: 50_000.0,
                years: 14
            }),
            PpfResult::zero()
        );
    }

    #[test]
    fn test_contribution_cap_enforced() {
        assert_eq!(
            compute(&PpfInputs {
                yearly_amount: 150_001.0,
                years: 15
            }),
            PpfResult::zero()
        );
        assert_eq!(
            compute(&PpfInputs {
                yearly_amount: 400.0,
                years: 15
            }),
            PpfResult::zero()
        );
    }
}
