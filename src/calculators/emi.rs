//! EMI (equated monthly installment) loan calculator
//!
//! Standard amortization: a level monthly payment covering interest on the
//! outstanding principal plus principal repayment.

use serde::{Deserialize, Serialize};

use crate::input::{AMOUNT, RATE_PERCENT, TENURE_YEARS};

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiInputs {
    pub principal: f64,
    pub annual_rate_percent: f64,
    pub years: u32,
}

#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct EmiResult {
    pub emi: f64,
    pub total_amount: f64,
    pub total_interest: f64,
}

impl EmiResult {
    pub fn zero() -> Self {
        Self {
            emi: 0.0,
            total_amount: 0.0,
            total_interest: 0.0,
        }
    }
}

impl EmiInputs {
    fn is_valid(&self) -> bool {
        AMOUNT.accepts(self.principal)
            && RATE_PERCENT.accepts(self.annual_rate_percent)
            && TENURE_YEARS.accepts(self.years as f64)
    }
}

/// EMI = P * r * (1+r)^n / ((1+r)^n - 1), with r the monthly rate and
/// n the month count. An interest-free loan amortizes linearly.
pub fn monthly_installment(principal: f64, annual_rate_percent: f64, years: u32) -> f64 {
    let months = years * 12;
    let r = annual_rate_percent / 12.0 / 100.0;
    if r == 0.0 {
        return principal / months as f64;
    }
    let growth = (1.0 + r).powi(months as i32);
    principal * r * growth / (growth - 1.0)
}

pub fn compute(inputs: &EmiInputs) -> EmiResult {
    if !inputs.is_valid() {
        return EmiResult::zero();
    }

    let months = (inputs.years * 12) as f64;
    let emi = monthly_installment(inputs.principal, inputs.annual_rate_percent, inputs.years);
    let total_amount = emi * months;

    EmiResult {
        emi,
        total_amount,
        total_interest: total_amount - inputs.principal,
    }
}
