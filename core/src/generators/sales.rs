use serde::Serialize;
use std::fmt;

use crate::random::RandomSource;

pub const MONTHS: [&str; 12] = [
    "Jan", "Feb", "Mar", "Apr", "May", "Jun", "Jul", "Aug", "Sep", "Oct", "Nov", "Dec",
];

pub const MIN_SALE: i64 = 1_000;
pub const MAX_SALE: i64 = 10_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct MonthFigure {
    pub month: &'static str,
    pub amount: u32,
}

/// Twelve monthly figures plus the statistics derived from them.
///
/// `best` and `worst` name the first month (in calendar order) holding the
/// maximum and minimum amount respectively.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SalesReport {
    pub figures: Vec<MonthFigure>,
    pub total: u64,
    pub mean: u64,
    pub best: MonthFigure,
    pub worst: MonthFigure,
}

impl SalesReport {
    /// Samples one figure per month, January first.
    pub fn generate(rng: &mut dyn RandomSource) -> Self {
        let mut amounts = [0u32; 12];
        for amount in amounts.iter_mut() {
            // MIN_SALE..=MAX_SALE always fits
            *amount = rng.range_inclusive(MIN_SALE, MAX_SALE) as u32;
        }
        Self::from_figures(amounts)
    }

    pub fn from_figures(amounts: [u32; 12]) -> Self {
        let figures: Vec<MonthFigure> = MONTHS
            .iter()
            .zip(amounts.iter())
            .map(|(month, amount)| MonthFigure {
                month: *month,
                amount: *amount,
            })
            .collect();

        let total: u64 = amounts.iter().map(|amount| u64::from(*amount)).sum();
        let mean = total / MONTHS.len() as u64;

        // strict comparisons so ties keep the earlier month
        let mut best = figures[0];
        let mut worst = figures[0];
        for figure in &figures[1..] {
            if figure.amount > best.amount {
                best = *figure;
            }
            if figure.amount < worst.amount {
                worst = *figure;
            }
        }

        SalesReport {
            figures,
            total,
            mean,
            best,
            worst,
        }
    }
}

impl fmt::Display for SalesReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for figure in &self.figures {
            writeln!(f, "{}: ${:>6}", figure.month, figure.amount)?;
        }
        writeln!(f, "Total: ${}", self.total)?;
        writeln!(f, "Average: ${}", self.mean)?;
        writeln!(f, "Best month: {} (${})", self.best.month, self.best.amount)?;
        write!(f, "Worst month: {} (${})", self.worst.month, self.worst.amount)
    }
}
