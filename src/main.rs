//! Financial Calculator Engine CLI
//!
//! One subcommand per calculator. Prints a summary plus the yearly series
//! to the console, or the full result record as JSON with --json.

use anyhow::Result;
use clap::{Parser, Subcommand, ValueEnum};
use serde::Serialize;

use fincalc_engine::calculators::{emi, fd, gratuity, lumpsum, mutual_fund, ppf, retirement, sip, swp};
use fincalc_engine::{
    EmiInputs, FdInputs, GratuityInputs, InvestmentMode, LumpsumInputs, MutualFundInputs,
    PpfInputs, RetirementInputs, SipInputs, SwpInputs, YearlyPoint,
};

#[derive(Parser)]
#[command(name = "fincalc", version, about = "Financial planning calculators")]
struct Cli {
    /// Emit the full result record as JSON
    #[arg(long, global = true)]
    json: bool,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand)]
enum Command {
    /// SIP future value
    Sip {
        #[arg(long)]
        monthly: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// Lumpsum compound growth
    Lumpsum {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// Fixed deposit maturity
    Fd {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// PPF maturity (statutory 7.1% rate, 15-year lock-in)
    Ppf {
        #[arg(long)]
        yearly: f64,
        #[arg(long, default_value_t = 15)]
        years: u32,
    },
    /// Loan EMI
    Emi {
        #[arg(long)]
        principal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// Retirement corpus and required SIP
    Retirement {
        #[arg(long)]
        current_age: u32,
        #[arg(long)]
        retirement_age: u32,
        #[arg(long)]
        expense: f64,
        #[arg(long, default_value_t = 6.0)]
        inflation: f64,
    },
    /// SWP depletion simulation
    Swp {
        #[arg(long)]
        corpus: f64,
        #[arg(long)]
        withdrawal: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// Mutual fund (lumpsum or SIP mode)
    MutualFund {
        #[arg(long, value_enum)]
        mode: ModeArg,
        #[arg(long)]
        amount: f64,
        #[arg(long)]
        rate: f64,
        #[arg(long)]
        years: u32,
    },
    /// Statutory gratuity
    Gratuity {
        #[arg(long)]
        salary: f64,
        #[arg(long)]
        service_years: f64,
    },
}

#[derive(Clone, Copy, ValueEnum)]
enum ModeArg {
    Lumpsum,
    Sip,
}

impl From<ModeArg> for InvestmentMode {
    fn from(mode: ModeArg) -> Self {
        match mode {
            ModeArg::Lumpsum => InvestmentMode::Lumpsum,
            ModeArg::Sip => InvestmentMode::Sip,
        }
    }
}

fn main() -> Result<()> {
    env_logger::init();
    let cli = Cli::parse();

    match cli.command {
        Command::Sip {
            monthly,
            rate,
            years,
        } => {
            let result = sip::compute(&SipInputs {
                monthly_amount: monthly,
                annual_rate_percent: rate,
                years,
            });
            if cli.json {
                return print_json(&result);
            }
            print_growth("SIP", result.invested, result.future_value, result.returns);
            print_yearly(&result.yearly);
        }
        Command::Lumpsum {
            principal,
            rate,
            years,
        } => {
            let result = lumpsum::compute(&LumpsumInputs {
                principal,
                annual_rate_percent: rate,
                years,
            });
            if cli.json {
                return print_json(&result);
            }
            print_growth(
                "Lumpsum",
                result.invested,
                result.future_value,
                result.returns,
            );
            print_yearly(&result.yearly);
        }
        Command::Fd {
            principal,
            rate,
            years,
        } => {
            let result = fd::compute(&FdInputs {
                principal,
                annual_rate_percent: rate,
                years,
            });
            if cli.json {
                return print_json(&result);
            }
            print_growth(
                "Fixed Deposit",
                result.principal,
                result.maturity_amount,
                result.interest_earned,
            );
            print_yearly(&result.yearly);
        }
        Command::Ppf { yearly, years } => {
            let result = ppf::compute(&PpfInputs {
                yearly_amount: yearly,
                years,
            });
            if cli.json {
                return print_json(&result);
            }
            print_growth(
                &format!("PPF ({}% fixed)", ppf::PPF_RATE_PERCENT),
                result.invested,
                result.maturity_amount,
                result.interest_earned,
            );
            print_yearly(&result.yearly);
        }
        Command::Emi {
            principal,
            rate,
            years,
        } => {
            let result = emi::compute(&EmiInputs {
                principal,
                annual_rate_percent: rate,
                years,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("EMI");
            println!("  Monthly Installment: {:.2}", result.emi);
            println!("  Total Payment:       {:.2}", result.total_amount);
            println!("  Total Interest:      {:.2}", result.total_interest);
        }
        Command::Retirement {
            current_age,
            retirement_age,
            expense,
            inflation,
        } => {
            let result = retirement::compute(&RetirementInputs {
                current_age,
                retirement_age,
                monthly_expense: expense,
                inflation_percent: inflation,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("Retirement Plan ({} years to go)", result.years_to_retirement);
            println!(
                "  Future Monthly Expense: {:.2}",
                result.future_monthly_expense
            );
            println!("  Corpus Needed:          {:.2}", result.corpus_needed);
            println!("  Required Monthly SIP:   {:.2}", result.required_monthly_sip);
            print_yearly(&result.yearly);
        }
        Command::Swp {
            corpus,
            withdrawal,
            rate,
            years,
        } => {
            let result = swp::compute(&SwpInputs {
                corpus,
                monthly_withdrawal: withdrawal,
                annual_rate_percent: rate,
                years,
            });
            if cli.json {
                return print_json(&result);
            }
            println!("SWP");
            println!("  Months Sustained: {}", result.months_sustained);
            println!("  Total Withdrawn:  {:.2}", result.total_withdrawn);
            println!("  Final Balance:    {:.2}", result.final_balance);
            print_yearly(&result.yearly);
        }
        Command::MutualFund {
            mode,
            amount,
            rate,
            years,
        } => {
            let result = mutual_fund::compute(&MutualFundInputs {
                mode: mode.into(),
                amount,
                annual_rate_percent: rate,
                years,
            });
            if cli.json {
                return print_json(&result);
            }
            print_growth(
                "Mutual Fund",
                result.invested,
                result.future_value,
                result.returns,
            );
            print_yearly(&result.yearly);
        }
        Command::Gratuity {
            salary,
            service_years,
        } => {
            let result = gratuity::compute(&GratuityInputs {
                monthly_salary: salary,
                service_years,
            });
            if cli.json {
                return print_json(&result);
            }
            if result.eligible {
                println!("Gratuity: {:.2}", result.gratuity);
            } else {
                println!("Gratuity: Not Eligible (minimum 5 years of service)");
            }
        }
    }

    Ok(())
}

fn print_json<T: Serialize>(result: &T) -> Result<()> {
    println!("{}", serde_json::to_string_pretty(result)?);
    Ok(())
}

fn print_growth(label: &str, invested: f64, value: f64, gain: f64) {
    println!("{label}");
    println!("  Invested:     {invested:.2}");
    println!("  Future Value: {value:.2}");
    println!("  Returns:      {gain:.2}");
}

/// Print the chart series, truncated past 20 years.
fn print_yearly(yearly: &[YearlyPoint]) {
    if yearly.is_empty() {
        return;
    }
    println!();
    println!("{:>5} {:>16} {:>16}", "Year", "Invested", "Value");
    println!("{}", "-".repeat(40));
    for point in yearly.iter().take(20) {
        println!(
            "{:>5} {:>16.2} {:>16.2}",
            point.year, point.invested, point.value
        );
    }
    if yearly.len() > 20 {
        println!("... ({} more years)", yearly.len() - 20);
    }
}
