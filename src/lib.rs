//! Financial Calculator Engine - planning calculators for a consumer savings app
//!
//! This library provides:
//! - SIP, lumpsum and mutual-fund future-value projections
//! - Fixed deposit and PPF maturity calculations
//! - Loan EMI amortization
//! - Retirement corpus and required-SIP planning
//! - SWP (systematic withdrawal) depletion simulation
//! - Statutory gratuity with eligibility gating
//! - Batch scenario evaluation from CSV
//!
//! Every calculator is a pure, total function: invalid input yields the
//! calculator's zero-valued result, never a panic or an error.

pub mod calculators;
pub mod debounce;
pub mod input;
pub mod scenario;
pub mod series;

// Re-export commonly used types
pub use calculators::{
    emi::{EmiInputs, EmiResult},
    fd::{FdInputs, FdResult},
    gratuity::{GratuityInputs, GratuityResult},
    lumpsum::{LumpsumInputs, LumpsumResult},
    mutual_fund::{InvestmentMode, MutualFundInputs, MutualFundResult},
    ppf::{PpfInputs, PpfResult},
    retirement::{RetirementInputs, RetirementResult},
    sip::{SipInputs, SipResult},
    swp::{SwpInputs, SwpResult},
};
pub use debounce::Debounced;
pub use scenario::{Outcome, Scenario, ScenarioRunner};
pub use series::YearlyPoint;
