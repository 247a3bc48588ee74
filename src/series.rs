//! Year-by-year projection series for chart rendering

use serde::{Deserialize, Serialize};

/// One point of a calculator's yearly chart series.
///
/// `invested` is the cumulative money put in through the end of that year
/// and `value` the projected worth at that point. The SWP simulator reuses
/// the shape with `invested` carrying cumulative withdrawals instead.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct YearlyPoint {
    pub year: u32,
    pub invested: f64,
    pub value: f64,
}

/// Evaluate a closed-form calculator at each elapsed year `1..=years`.
///
/// The closure returns `(invested, value)` for the given year count. Each
/// point is a fresh evaluation of the same formula, so the series is a pure
/// function of the inputs.
pub fn project_yearly<F>(years: u32, eval: F) -> Vec<YearlyPoint>
where
    F: Fn(u32) -> (f64, f64),
{
    (1..=years)
        .map(|year| {
            let (invested, value) = eval(year);
            YearlyPoint {
                year,
                invested,
                value,
            }
        })
        .collect()
}
