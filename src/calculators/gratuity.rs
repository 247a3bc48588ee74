//! Statutory gratuity calculator
//!
//! Gratuity = salary * 15/26 per year of service, payable only after five
//! years of continuous service. Falling short of the gate is not an input
//! error — the inputs are valid, the payout is simply nil — so the result
//! carries an explicit eligibility flag.

use serde::{Deserialize, Serialize};

use crate::input::{AMOUNT, SERVICE_YEARS};

/// Minimum continuous service for a payout.
pub const MIN_SERVICE_YEARS: f64 = 5.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GratuityInputs {
    /// Last drawn monthly salary (basic + dearness allowance).
    pub monthly_salary: f64,
    pub service_years: f64,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GratuityResult {
    pub eligible: bool,
    pub gratuity: f64,
}

impl GratuityResult {
    pub fn zero() -> Self {
        Self {
            eligible: false,
            gratuity: 0.0,
        }
    }
}

impl GratuityInputs {
    fn is_valid(&self) -> bool {
        AMOUNT.accepts(self.monthly_salary) && SERVICE_YEARS.accepts(self.service_years)
    }
}

pub fn compute(inputs: &GratuityInputs) -> GratuityResult {
    if !inputs.is_valid() {
        return GratuityResult::zero();
    }

    if inputs.service_years < MIN_SERVICE_YEARS {
        return GratuityResult {
            eligible: false,
            gratuity: 0.0,
        };
    }

    GratuityResult {
        eligible: true,
        gratuity: inputs.monthly_salary * 15.0 * inputs.service_years / 26.0,
    }
}
