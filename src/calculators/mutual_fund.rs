//! Mutual fund calculator with a lumpsum/SIP mode toggle
//!
//! One parameter set, two interpretations: `amount` is either a single
//! purchase or a monthly contribution depending on the mode. Dispatches to
//! the lumpsum and SIP calculators and reports a common result shape.

use serde::{Deserialize, Serialize};

use crate::calculators::{lumpsum, sip};
use crate::series::YearlyPoint;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum InvestmentMode {
    Lumpsum,
    Sip,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct MutualFundInputs {
    pub mode: InvestmentMode,
    pub amount: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MutualFundResult {
    pub mode: InvestmentMode,
    pub invested: f64,
    pub future_value: f64,
    pub returns: f64,
    pub yearly: Vec<YearlyPoint>,
}

impl MutualFundResult {
    pub fn zero(mode: InvestmentMode) -> Self {
        Self {
            mode,
            invested: 0.0,
            future_value: 0.0,
            returns: 0.0,
            yearly: Vec::new(),
        }
    }
}

pub fn compute(inputs: &MutualFundInputs) -> MutualFundResult {
    match inputs.mode {
        InvestmentMode::Lumpsum => {
            let r = lumpsum::compute(&lumpsum::LumpsumInputs {
                principal: inputs.amount,
                annual_rate_percent: inputs.annual_rate_percent,
                years: inputs.years,
            });
            MutualFundResult {
                mode: inputs.mode,
                invested: r.invested,
                future_value: r.future_value,
                returns: r.returns,
                yearly: r.yearly,
            }
        }
        InvestmentMode::Sip => {
            let r = sip::compute(&sip::SipInputs {
                monthly_amount: inputs.amount,
                annual_rate_percent: inputs.annual_rate_percent,
                years: inputs.years,
            });
            MutualFundResult {
                mode: inputs.mode,
                invested: r.invested,
                future_value: r.future_value,
                returns: r.returns,
                yearly: r.yearly,
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use approx::assert_relative_eq;

    #[test]
    fn test_lumpsum_mode_matches_lumpsum() {
        let result = compute(&MutualFundInputs {
            mode: InvestmentMode::Lumpsum,
            amount: 100_000.0,
            annual_rate_percent: 12.0,
            years: 10,
        });
        let direct = lumpsum::compute(&lumpsum::LumpsumInputs {
            principal: 100_000.0,
            annual_rate_percent: 12.0,
            years: 10,
        });
        assert_relative_eq!(result.future_value, direct.future_value, max_relative = 1e-12);
        assert_eq!(result.invested, 100_000.0);
    }

    #[test]
    fn test_sip_mode_matches_sip() {
        let result = compute(&MutualFundInputs {
            mode: InvestmentMode::Sip,
            amount: 5_000.0,
            annual_rate_percent: 12.0,
            years: 10,
        });
        let direct = sip::compute(&sip::SipInputs {
            monthly_amount: 5_000.0,
            annual_rate_percent: 12.0,
            years: 10,
        });
        assert_relative_eq!(result.future_value, direct.future_value, max_relative = 1e-12);
        assert_eq!(result.invested, 5_000.0 * 120.0);
    }

    #[test]
    fn test_invalid_input_returns_zero_in_both_modes() {
        for mode in [InvestmentMode::Lumpsum, InvestmentMode::Sip] {
            let result = compute(&MutualFundInputs {
                mode,
                amount: -1.0,
                annual_rate_percent: 12.0,
                years: 10,
            });
            assert_eq!(result, MutualFundResult::zero(mode));
        }
    }
}
