//! Systematic Investment Plan (SIP) future-value calculator
//!
//! A level monthly contribution compounding at a monthly rate, with the
//! contribution made at the start of each month (annuity-due).

use serde::{Deserialize, Serialize};

use crate::input::{AMOUNT, RATE_PERCENT, TENURE_YEARS};
use crate::series::{project_yearly, YearlyPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct SipInputs {
    pub monthly_amount: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SipResult {
    pub invested: f64,
    pub future_value: f64,
    pub returns: f64,
    pub yearly: Vec<YearlyPoint>,
}

impl SipResult {
    pub fn zero() -> Self {
        Self {
            invested: 0.0,
            future_value: 0.0,
            returns: 0.0,
            yearly: Vec::new(),
        }
    }
}

impl SipInputs {
    fn is_valid(&self) -> bool {
        AMOUNT.accepts(self.monthly_amount)
            && RATE_PERCENT.accepts(self.annual_rate_percent)
            && TENURE_YEARS.accepts(self.years as f64)
    }
}

/// Future value of `monthly_amount` contributed at the start of every month
/// for `years` years at the given annual rate.
///
/// FV = P * (((1+r)^n - 1) / r) * (1+r), with r the monthly rate and
/// n the month count. At a zero rate the series is a plain sum.
pub fn future_value(monthly_amount: f64, annual_rate_percent: f64, years: u32) -> f64 {
    let months = years * 12;
    let r = annual_rate_percent / 12.0 / 100.0;
    if r == 0.0 {
        return monthly_amount * months as f64;
    }
    monthly_amount * (((1.0 + r).powi(months as i32) - 1.0) / r) * (1.0 + r)
}

pub fn compute(inputs: &SipInputs) -> SipResult {
    if !inputs.is_valid() {
        return SipResult::zero();
    }

    let invested = inputs.monthly_amount * (inputs.years * 12) as f64;
    let fv = future_value(inputs.monthly_amount, inputs.annual_rate_percent, inputs.years);

    let yearly = project_yearly(inputs.years, |year| {
        (
            inputs.monthly_amount * (year * 12) as f64,
            future_value(inputs.monthly_amount, inputs.annual_rate_percent, year),
        )
    });

    SipResult {
        invested,
        future_value: fv,
        returns: fv - invested,
        yearly,
    }
}
