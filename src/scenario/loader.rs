//! Load calculator scenarios from CSV
//!
//! One row per scenario. The `Calculator` column selects the calculator;
//! the remaining columns are optional and read per calculator:
//!
//! - `Amount` — principal, monthly contribution or yearly contribution,
//!   whichever the calculator takes
//! - `AnnualRatePercent`, `Years` — rate and tenure
//! - `MonthlyWithdrawal` — SWP only
//! - `CurrentAge`, `RetirementAge`, `MonthlyExpense`, `InflationPercent` —
//!   retirement only
//! - `MonthlySalary`, `ServiceYears` — gratuity only
//! - `Mode` — mutual fund only (`lumpsum` or `sip`)
//!
//! A malformed batch file is a real error, unlike calculator inputs: the
//! quiet-zero policy covers out-of-range numbers, not a file we cannot
//! read.

use std::path::Path;

use thiserror::Error;

use super::Scenario;
use crate::{
    EmiInputs, FdInputs, GratuityInputs, InvestmentMode, LumpsumInputs, MutualFundInputs,
    PpfInputs, RetirementInputs, SipInputs, SwpInputs,
};

#[derive(Debug, Error)]
pub enum ScenarioError {
    #[error("row {row}: unknown calculator '{name}'")]
    UnknownCalculator { row: usize, name: String },

    #[error("row {row}: missing column {column}")]
    MissingField { row: usize, column: &'static str },

    #[error("row {row}: unknown mode '{mode}' (expected 'lumpsum' or 'sip')")]
    UnknownMode { row: usize, mode: String },

    #[error(transparent)]
    Csv(#[from] csv::Error),
}

/// Raw CSV row; every column beyond `Calculator` is optional.
#[derive(Debug, serde::Deserialize)]
struct CsvRow {
    #[serde(rename = "Calculator")]
    calculator: String,
    #[serde(rename = "Amount")]
    amount: Option<f64>,
    #[serde(rename = "AnnualRatePercent")]
    rate: Option<f64>,
    #[serde(rename = "Years")]
    years: Option<u32>,
    #[serde(rename = "MonthlyWithdrawal")]
    monthly_withdrawal: Option<f64>,
    #[serde(rename = "CurrentAge")]
    current_age: Option<u32>,
    #[serde(rename = "RetirementAge")]
    retirement_age: Option<u32>,
    #[serde(rename = "MonthlyExpense")]
    monthly_expense: Option<f64>,
    #[serde(rename = "InflationPercent")]
    inflation_percent: Option<f64>,
    #[serde(rename = "MonthlySalary")]
    monthly_salary: Option<f64>,
    #[serde(rename = "ServiceYears")]
    service_years: Option<f64>,
    #[serde(rename = "Mode")]
    mode: Option<String>,
}

fn req<T>(value: Option<T>, row: usize, column: &'static str) -> Result<T, ScenarioError> {
    value.ok_or(ScenarioError::MissingField { row, column })
}

impl CsvRow {
    fn to_scenario(self, row: usize) -> Result<Scenario, ScenarioError> {
        match self.calculator.as_str() {
            "sip" => Ok(Scenario::Sip(SipInputs {
                monthly_amount: req(self.amount, row, "Amount")?,
                annual_rate_percent: req(self.rate, row, "AnnualRatePercent")?,
                years: req(self.years, row, "Years")?,
            })),
            "lumpsum" => Ok(Scenario::Lumpsum(LumpsumInputs {
                principal: req(self.amount, row, "Amount")?,
                annual_rate_percent: req(self.rate, row, "AnnualRatePercent")?,
                years: req(self.years, row, "Years")?,
            })),
            "fixed_deposit" => Ok(Scenario::FixedDeposit(FdInputs {
                principal: req(self.amount, row, "Amount")?,
                annual_rate_percent: req(self.rate, row, "AnnualRatePercent")?,
                years: req(self.years, row, "Years")?,
            })),
            "ppf" => Ok(Scenario::Ppf(PpfInputs {
                yearly_amount: req(self.amount, row, "Amount")?,
                years: req(self.years, row, "Years")?,
            })),
            "emi" => Ok(Scenario::Emi(EmiInputs {
                principal: req(self.amount, row, "Amount")?,
                annual_rate_percent: req(self.rate, row, "AnnualRatePercent")?,
                years: req(self.years, row, "Years")?,
            })),
            "retirement" => Ok(Scenario::Retirement(RetirementInputs {
                current_age: req(self.current_age, row, "CurrentAge")?,
                retirement_age: req(self.retirement_age, row, "RetirementAge")?,
                monthly_expense: req(self.monthly_expense, row, "MonthlyExpense")?,
                inflation_percent: req(self.inflation_percent, row, "InflationPercent")?,
            })),
            "swp" => Ok(Scenario::Swp(SwpInputs {
                corpus: req(self.amount, row, "Amount")?,
                monthly_withdrawal: req(self.monthly_withdrawal, row, "MonthlyWithdrawal")?,
                annual_rate_percent: req(self.rate, row, "AnnualRatePercent")?,
                years: req(self.years, row, "Years")?,
            })),
            "mutual_fund" => {
                let mode = match req(self.mode, row, "Mode")?.as_str() {
                    "lumpsum" => InvestmentMode::Lumpsum,
                    "sip" => InvestmentMode::Sip,
                    other => {
                        return Err(ScenarioError::UnknownMode {
                            row,
                            mode: other.to_string(),
                        })
                    }
                };
                Ok(Scenario::MutualFund(MutualFundInputs {
                    mode,
                    amount: req(self.amount, row, "Amount")?,
                    annual_rate_percent: req(self.rate, row, "AnnualRatePercent")?,
                    years: req(self.years, row, "Years")?,
                }))
            }
            "gratuity" => Ok(Scenario::Gratuity(GratuityInputs {
                monthly_salary: req(self.monthly_salary, row, "MonthlySalary")?,
                service_years: req(self.service_years, row, "ServiceYears")?,
            })),
            other => Err(ScenarioError::UnknownCalculator {
                row,
                name: other.to_string(),
            }),
        }
    }
}

/// Load all scenarios from a CSV file.
pub fn load_scenarios<P: AsRef<Path>>(path: P) -> Result<Vec<Scenario>, ScenarioError> {
    let mut reader = csv::Reader::from_path(path)?;
    let scenarios = read_scenarios(&mut reader)?;
    log::info!("loaded {} scenarios", scenarios.len());
    Ok(scenarios)
}

/// Load scenarios from any reader (e.g., string buffer, network stream).
pub fn load_scenarios_from_reader<R: std::io::Read>(
    reader: R,
) -> Result<Vec<Scenario>, ScenarioError> {
    let mut csv_reader = csv::Reader::from_reader(reader);
    read_scenarios(&mut csv_reader)
}

fn read_scenarios<R: std::io::Read>(
    reader: &mut csv::Reader<R>,
) -> Result<Vec<Scenario>, ScenarioError> {
    let mut scenarios = Vec::new();
    for (idx, result) in reader.deserialize().enumerate() {
        let row: CsvRow = result?;
        // Row numbers are 1-based and count the header
        scenarios.push(row.to_scenario(idx + 2)?);
    }
    Ok(scenarios)
}
