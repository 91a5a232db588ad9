//! Text and JSON rendering of command outcomes.

use crate::domain::model::{DiceTable, NumberSummary};
use crate::domain::ports::ConfigProvider;
use crate::utils::error::Result;
use serde::Serialize;

/// Result of one toolkit operation, ready for display.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Outcome {
    Prime {
        n: i64,
        prime: bool,
    },
    Factors {
        n: i64,
        factors: Vec<i64>,
    },
    Gcd {
        a: i64,
        b: i64,
        gcd: u64,
    },
    Leap {
        year: i64,
        leap: bool,
    },
    Interest {
        principal: f64,
        rate: f64,
        years: u32,
        times_per_year: u32,
        amount: f64,
    },
    Dice {
        rolls: i64,
        table: DiceTable,
    },
    Factorial {
        n: u32,
        value: u64,
    },
    Summary {
        summary: Option<NumberSummary>,
    },
    Celsius {
        readings: Vec<(f64, f64)>,
    },
}

/// Presentation settings: how many dice sums to show and currency precision.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportStyle {
    pub display_limit: usize,
    pub decimals: usize,
}

impl Default for ReportStyle {
    fn default() -> Self {
        Self {
            display_limit: crate::config::toml_config::DEFAULT_DISPLAY_LIMIT,
            decimals: crate::config::toml_config::DEFAULT_CURRENCY_DECIMALS,
        }
    }
}

impl ReportStyle {
    pub fn from_config<C: ConfigProvider>(config: &C) -> Self {
        Self {
            display_limit: config.display_limit(),
            decimals: config.currency_decimals(),
        }
    }
}

pub fn render_text(outcome: &Outcome, style: &ReportStyle) -> String {
    match outcome {
        Outcome::Prime { n, prime } => format!("{} is prime? {}", n, prime),
        Outcome::Factors { n, factors } => format!("Factors of {}: {:?}", n, factors),
        Outcome::Gcd { a, b, gcd } => format!("gcd({}, {}) = {}", a, b, gcd),
        Outcome::Leap { year, leap } => format!("{} is a leap year? {}", year, leap),
        Outcome::Interest { years, amount, .. } => format!(
            "Final amount after {} years: {}",
            years,
            format_currency(*amount, style.decimals)
        ),
        Outcome::Dice { table, .. } => render_dice_table(table, style.display_limit),
        Outcome::Factorial { n, value } => format!("{}! = {}", n, value),
        Outcome::Summary { summary } => render_summary(summary.as_ref()),
        Outcome::Celsius { readings } => {
            let values: Vec<String> = readings.iter().map(|(_, c)| format!("{:.1}", c)).collect();
            format!("Celsius values: [{}]", values.join(", "))
        }
    }
}

pub fn render_json(outcome: &Outcome) -> Result<String> {
    Ok(serde_json::to_string_pretty(outcome)?)
}

pub fn format_currency(amount: f64, decimals: usize) -> String {
    format!("{:.*}", decimals, amount)
}

/// Header line plus one `sum -> count` line per shown entry, ascending by sum.
pub fn render_dice_table(table: &DiceTable, limit: usize) -> String {
    if table.is_empty() {
        return "No dice were rolled".to_string();
    }

    let mut lines = vec![format!(
        "Dice roll simulation summary (first {} totals counts):",
        limit
    )];
    lines.extend(
        table
            .first(limit)
            .into_iter()
            .map(|(sum, count)| format!("{} -> {}", sum, count)),
    );
    lines.join("\n")
}

fn render_summary(summary: Option<&NumberSummary>) -> String {
    match summary {
        Some(s) => [
            format!("Count: {}", s.count),
            format!("Sum: {}", s.sum),
            format!("Mean: {}", s.mean),
            format!("Median: {}", s.median),
            format!("Min, Max: {}, {}", s.min, s.max),
        ]
        .join("\n"),
        None => "No numbers to summarize".to_string(),
    }
}
