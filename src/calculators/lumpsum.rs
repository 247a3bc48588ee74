//! Lumpsum compound-growth calculator
//!
//! A single principal compounded annually.

use serde::{Deserialize, Serialize};

use crate::input::{AMOUNT, RATE_PERCENT, TENURE_YEARS};
use crate::series::{project_yearly, YearlyPoint};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct LumpsumInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct LumpsumResult {
    pub invested: f64,
    pub future_value: f64,
    pub returns: f64,
    pub yearly: Vec<YearlyPoint>,
}

impl LumpsumResult {
    pub fn zero() -> Self {
        Self {
            invested: 0.0,
            future_value: 0.0,
            returns: 0.0,
            yearly: Vec::new(),
        }
    }
}

impl LumpsumInputs {
    fn is_valid(&self) -> bool {
        AMOUNT.accepts(self.principal)
            && RATE_PERCENT.accepts(self.annual_rate_percent)
            && TENURE_YEARS.accepts(self.years as f64)
    }
}

/// FV = P * (1 + rate/100)^years
pub fn future_value(principal: f64, annual_rate_percent: f64, years: u32) -> f64 {
    principal * (1.0 + annual_rate_percent / 100.0).powi(years as i32)
}

pub fn compute(inputs: &LumpsumInputs) -> LumpsumResult {
    if !inputs.is_valid() {
        return LumpsumResult::zero();
    }

    let fv = future_value(inputs.principal, inputs.annual_rate_percent, inputs.years);
    let yearly = project_yearly(inputs.years, |year| {
        (
            inputs.principal,
            future_value(inputs.principal, inputs.annual_rate_percent, year),
        )
    });

    LumpsumResult {
        invested: inputs.principal,
        future_value: fv,
        returns: fv - inputs.principal,
        yearly,
    }
}
