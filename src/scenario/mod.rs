//! Batch scenario evaluation
//!
//! A `Scenario` wraps one calculator's inputs; a `ScenarioRunner` evaluates
//! a list of them into flattened `Outcome` rows for reporting. Scenarios
//! typically come from a CSV file (see [`loader`]).

pub mod loader;

use serde::{Deserialize, Serialize};

use crate::calculators::{emi, fd, gratuity, lumpsum, mutual_fund, ppf, retirement, sip, swp};
use crate::{
    EmiInputs, FdInputs, GratuityInputs, LumpsumInputs, MutualFundInputs, PpfInputs,
    RetirementInputs, SipInputs, SwpInputs,
};

/// One calculator invocation with its inputs.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "calculator", rename_all = "snake_case")]
pub enum Scenario {
    Sip(SipInputs),
    Lumpsum(LumpsumInputs),
    FixedDeposit(FdInputs),
    Ppf(PpfInputs),
    Emi(EmiInputs),
    Retirement(RetirementInputs),
    Swp(SwpInputs),
    MutualFund(MutualFundInputs),
    Gratuity(GratuityInputs),
}

/// Flattened summary of one scenario run, shared across calculators so a
/// batch can be reported in a single table.
///
/// Meaning per calculator:
/// - growth calculators (SIP, lumpsum, FD, PPF, mutual fund): money in,
///   projected value, gain
/// - EMI: principal, total repaid, total interest
/// - SWP: corpus, total withdrawn, final balance
/// - retirement: total contributions, corpus needed, required monthly SIP
/// - gratuity: zero, payout, payout
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct Outcome {
    pub calculator: &'static str,
    pub money_in: f64,
    pub money_out: f64,
    pub gain: f64,
}

impl Scenario {
    pub fn name(&self) -> &'static str {
        match self {
            Scenario::Sip(_) => "sip",
            Scenario::Lumpsum(_) => "lumpsum",
            Scenario::FixedDeposit(_) => "fixed_deposit",
            Scenario::Ppf(_) => "ppf",
            Scenario::Emi(_) => "emi",
            Scenario::Retirement(_) => "retirement",
            Scenario::Swp(_) => "swp",
            Scenario::MutualFund(_) => "mutual_fund",
            Scenario::Gratuity(_) => "gratuity",
        }
    }

    /// Evaluate the wrapped calculator. Total like the calculators
    /// themselves: invalid inputs produce an all-zero outcome.
    pub fn run(&self) -> Outcome {
        let calculator = self.name();
        match self {
            Scenario::Sip(inputs) => {
                let r = sip::compute(inputs);
                Outcome {
                    calculator,
                    money_in: r.invested,
                    money_out: r.future_value,
                    gain: r.returns,
                }
            }
            Scenario::Lumpsum(inputs) => {
                let r = lumpsum::compute(inputs);
                Outcome {
                    calculator,
                    money_in: r.invested,
                    money_out: r.future_value,
                    gain: r.returns,
                }
            }
            Scenario::FixedDeposit(inputs) => {
                let r = fd::compute(inputs);
                Outcome {
                    calculator,
                    money_in: r.principal,
                    money_out: r.maturity_amount,
                    gain: r.interest_earned,
                }
            }
            Scenario::Ppf(inputs) => {
                let r = ppf::compute(inputs);
                Outcome {
                    calculator,
                    money_in: r.invested,
                    money_out: r.maturity_amount,
                    gain: r.interest_earned,
                }
            }
            Scenario::Emi(inputs) => {
                let r = emi::compute(inputs);
                Outcome {
                    calculator,
                    money_in: inputs.principal,
                    money_out: r.total_amount,
                    gain: r.total_interest,
                }
            }
            Scenario::Retirement(inputs) => {
                let r = retirement::compute(inputs);
                Outcome {
                    calculator,
                    money_in: r.required_monthly_sip * (r.years_to_retirement * 12) as f64,
                    money_out: r.corpus_needed,
                    gain: r.required_monthly_sip,
                }
            }
            Scenario::Swp(inputs) => {
                let r = swp::compute(inputs);
                Outcome {
                    calculator,
                    money_in: inputs.corpus,
                    money_out: r.total_withdrawn,
                    gain: r.final_balance,
                }
            }
            Scenario::MutualFund(inputs) => {
                let r = mutual_fund::compute(inputs);
                Outcome {
                    calculator,
                    money_in: r.invested,
                    money_out: r.future_value,
                    gain: r.returns,
                }
            }
            Scenario::Gratuity(inputs) => {
                let r = gratuity::compute(inputs);
                Outcome {
                    calculator,
                    money_in: 0.0,
                    money_out: r.gratuity,
                    gain: r.gratuity,
                }
            }
        }
    }
}

/// Evaluates a loaded scenario list.
#[derive(Debug, Clone, Default)]
pub struct ScenarioRunner {
    scenarios: Vec<Scenario>,
}

impl ScenarioRunner {
    pub fn new(scenarios: Vec<Scenario>) -> Self {
        Self { scenarios }
    }

    /// Load scenarios from a CSV file.
    pub fn from_csv<P: AsRef<std::path::Path>>(path: P) -> Result<Self, loader::ScenarioError> {
        Ok(Self::new(loader::load_scenarios(path)?))
    }

    pub fn scenarios(&self) -> &[Scenario] {
        &self.scenarios
    }

    pub fn len(&self) -> usize {
        self.scenarios.len()
    }

    pub fn is_empty(&self) -> bool {
        self.scenarios.is_empty()
    }

    /// Run every scenario in order.
    pub fn run_all(&self) -> Vec<Outcome> {
        log::debug!("running {} scenarios", self.scenarios.len());
        self.scenarios.iter().map(Scenario::run).collect()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_runner_preserves_order() {
        let runner = ScenarioRunner::new(vec![
            Scenario::Sip(SipInputs {
                monthly_amount: 5_000.0,
                annual_rate_percent: 12.0,
                years: 10,
            }),
            Scenario::Emi(EmiInputs {
                principal: 1_000_000.0,
                annual_rate_percent: 9.0,
                years: 20,
            }),
            Scenario::Gratuity(GratuityInputs {
                monthly_salary: 50_000.0,
                service_years: 3.0,
            }),
        ]);

        let outcomes = runner.run_all();
        assert_eq!(outcomes.len(), 3);
        assert_eq!(outcomes[0].calculator, "sip");
        assert_eq!(outcomes[1].calculator, "emi");
        // Ineligible gratuity flattens to zero
        assert_eq!(outcomes[2].money_out, 0.0);
    }

    #[test]
    fn test_higher_rate_scenarios_rank_higher() {
        let scenarios: Vec<_> = [8.0, 10.0, 12.0]
            .iter()
            .map(|&rate| {
                Scenario::Lumpsum(LumpsumInputs {
                    principal: 100_000.0,
                    annual_rate_percent: rate,
                    years: 10,
                })
            })
            .collect();

        let outcomes = ScenarioRunner::new(scenarios).run_all();
        assert!(outcomes[2].money_out > outcomes[1].money_out);
        assert!(outcomes[1].money_out > outcomes[0].money_out);
    }

    #[test]
    fn test_invalid_scenario_flattens_to_zero() {
        let runner = ScenarioRunner::new(vec![Scenario::Swp(SwpInputs {
            corpus: 100_000.0,
            monthly_withdrawal: 10_000.0,
            annual_rate_percent: -5.0,
            years: 10,
        })]);
        let outcome = &runner.run_all()[0];
        assert_eq!(outcome.money_out, 0.0);
        assert_eq!(outcome.gain, 0.0);
    }
}
