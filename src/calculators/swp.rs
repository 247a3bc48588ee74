//! SWP (systematic withdrawal plan) depletion simulator
//!
//! Month-by-month roll-forward of a corpus under a fixed withdrawal:
//! interest is credited first, then the withdrawal is taken. Withdrawals
//! never go past zero — a final short month takes only what is left, and
//! the simulation stops there even if the requested horizon is longer.

use serde::{Deserialize, Serialize};

use crate::input::{AMOUNT, RATE_PERCENT, TENURE_YEARS};
use crate::series::YearlyPoint;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SwpInputs {
    pub corpus: f64,
    pub monthly_withdrawal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SwpResult {
    pub final_balance: f64,
    pub total_withdrawn: f64,
    /// Months the corpus actually sustained withdrawals; equals the full
    /// horizon when the corpus outlives it.
    pub months_sustained: u32,
    /// `invested` carries cumulative withdrawals, `value` the end-of-year
    /// balance.
    pub yearly: Vec<YearlyPoint>,
}

impl SwpResult {
    pub fn zero() -> Self {
        Self {
            final_balance: 0.0,
            total_withdrawn: 0.0,
            months_sustained: 0,
            yearly: Vec::new(),
        }
    }
}

impl SwpInputs {
    fn is_valid(&self) -> bool {
        AMOUNT.accepts(self.corpus)
            && AMOUNT.accepts(self.monthly_withdrawal)
            && RATE_PERCENT.accepts(self.annual_rate_percent)
            && TENURE_YEARS.accepts(self.years as f64)
    }
}

pub fn compute(inputs: &SwpInputs) -> SwpResult {
    if !inputs.is_valid() {
        return SwpResult::zero();
    }

    let r = inputs.annual_rate_percent / 12.0 / 100.0;
    let horizon = inputs.years * 12;

    let mut balance = inputs.corpus;
    let mut total_withdrawn = 0.0;
    let mut months_sustained = 0;
    let mut yearly = Vec::new();

    for month in 1..=horizon {
        balance *= 1.0 + r;
        let withdrawal = inputs.monthly_withdrawal.min(balance);
        balance -= withdrawal;
        total_withdrawn += withdrawal;
        months_sustained = month;

        if month % 12 == 0 {
            yearly.push(YearlyPoint {
                year: month / 12,
                invested: total_withdrawn,
                value: balance,
            });
        }

        if balance <= 0.0 {
            balance = 0.0;
            break;
        }
    }

    SwpResult {
        final_balance: balance,
        total_withdrawn,
        months_sustained,
        yearly,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_depletion_at_zero_rate() {
        // 100,000 corpus, 10,000/month, no growth: exactly 10 withdrawals
        let result = compute(&SwpInputs {
            corpus: 100_000.0,
            monthly_withdrawal: 10_000.0,
            annual_rate_percent: 0.0,
            years: 20,
        });
        assert_eq!(result.months_sustained, 10);
        assert_relative_eq!(result.total_withdrawn, 100_000.0, max_relative = 1e-12);
        assert_eq!(result.final_balance, 0.0);
    }

    #[test]
    fn test_final_partial_withdrawal_never_overdraws() {
        // 25,000 corpus, 10,000/month: two full months, then 5,000
        let result = compute(&SwpInputs {
            corpus: 25_000.0,
            monthly_withdrawal: 10_000.0,
            annual_rate_percent: 0.0,
            years: 5,
        });
        assert_eq!(result.months_sustained, 3);
        assert_relative_eq!(result.total_withdrawn, 25_000.0, max_relative = 1e-12);
        assert_eq!(result.final_balance, 0.0);
    }

    #[test]
    fn test_corpus_outlives_horizon_when_growth_covers_withdrawal() {
        // 1% monthly growth on 1,000,000 is 10,000; withdrawing less grows the corpus
        let result = compute(&SwpInputs {
            corpus: 1_000_000.0,
            monthly_withdrawal: 5_000.0,
            annual_rate_percent: 12.0,
            years: 10,
        });
        assert_eq!(result.months_sustained, 120);
        assert!(result.final_balance > 1_000_000.0);
        assert_relative_eq!(
            result.total_withdrawn,
            5_000.0 * 120.0,
            max_relative = 1e-12
        );
        assert_eq!(result.yearly.len(), 10);
    }

    #[test]
    fn test_withdrawal_monotonic() {
        let base = SwpInputs {
            corpus: 500_000.0,
            monthly_withdrawal: 3_000.0,
            annual_rate_percent: 8.0,
            years: 10,
        };
        let heavier = SwpInputs {
            monthly_withdrawal: 4_000.0,
            ..base
        };
        assert!(compute(&heavier).final_balance < compute(&base).final_balance);
    }

    #[test]
    fn test_invalid_input_returns_zero() {
        assert_eq!(
            compute(&SwpInputs {
                corpus: 100_000.0,
                monthly_withdrawal: 10_000.0,
                annual_rate_percent: -1.0,
                years: 20
            }),
            SwpResult::zero()
        );
        assert_eq!(
            compute(&SwpInputs {
                corpus: 100_000.0,
                monthly_withdrawal: 0.0,
                annual_rate_percent: 8.0,
                years: 20
            }),
            SwpResult::zero()
        );
    }
}
