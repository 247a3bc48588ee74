//! Retirement corpus and required-SIP calculator
//!
//! Inflates today's monthly expense to the retirement date, sizes a corpus
//! for a fixed 25-year retirement, and inverts the SIP future-value formula
//! to find the monthly contribution that reaches it at an assumed 12%
//! annual return. Both constants are product decisions, not inputs.

use serde::{Deserialize, Serialize};

use crate::calculators::sip;
use crate::input::{AGE_YEARS, AMOUNT, RATE_PERCENT};
use crate::series::{project_yearly, YearlyPoint};

/// Fixed post-retirement horizon the corpus must fund.
pub const RETIREMENT_DURATION_YEARS: f64 = 25.0;

/// Assumed annual return used to solve for the required SIP.
pub const ASSUMED_RETURN_PERCENT: f64 = 12.0;

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct RetirementInputs {
    pub current_age: u32,
    pub retirement_age: u32,
    pub monthly_expense: f64,
    pub inflation_percent: f64,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RetirementResult {
    pub years_to_retirement: u32,
    pub future_monthly_expense: f64,
    pub corpus_needed: f64,
    pub required_monthly_sip: f64,
    pub yearly: Vec<YearlyPoint>,
}

impl RetirementResult {
    pub fn zero() -> Self {
        Self {
            years_to_retirement: 0,
            future_monthly_expense: 0.0,
            corpus_needed: 0.0,
            required_monthly_sip: 0.0,
            yearly: Vec::new(),
        }
    }
}

impl RetirementInputs {
    fn is_valid(&self) -> bool {
        AGE_YEARS.accepts(self.current_age as f64)
            && AGE_YEARS.accepts(self.retirement_age as f64)
            && self.retirement_age > self.current_age
            && AMOUNT.accepts(self.monthly_expense)
            && RATE_PERCENT.accepts(self.inflation_percent)
    }
}

pub fn compute(inputs: &RetirementInputs) -> RetirementResult {
    if !inputs.is_valid() {
        return RetirementResult::zero();
    }

    let years = inputs.retirement_age - inputs.current_age;
    let future_expense =
        inputs.monthly_expense * (1.0 + inputs.inflation_percent / 100.0).powi(years as i32);
    let corpus = future_expense * 12.0 * RETIREMENT_DURATION_YEARS;

    // FV scales linearly in the contribution, so the factor for a unit SIP
    // inverts the formula directly.
    let unit_fv = sip::future_value(1.0, ASSUMED_RETURN_PERCENT, years);
    let required_sip = corpus / unit_fv;

    let yearly = project_yearly(years, |year| {
        (
            required_sip * (year * 12) as f64,
            sip::future_value(required_sip, ASSUMED_RETURN_PERCENT, year),
        )
    });

    RetirementResult {
        years_to_retirement: years,
        future_monthly_expense: future_expense,
        corpus_needed: corpus,
        required_monthly_sip: required_sip,
        yearly,
    }
}
