//! # Prize Aggregation
//!
//! Prize amounts arrive as numbers or as display strings such as
//! `"$10,000"`. [`parse_prize_amount()`] normalizes either to `f64`;
//! [`total_prize()`] sums a hackathon's cohorts.
//!
//! The total is the sum of listed cohort amounts. It is not multiplied by
//! `number_of_winners`.

use serde::{Deserialize, Serialize};

use crate::lenient;

/// A prize amount as stored upstream.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum PrizeAmount {
    Number(f64),
    Text(String),
    /// Any other shape (booleans, arrays, objects). Counts as 0.
    Other(serde_json::Value),
}

impl From<f64> for PrizeAmount {
    fn from(n: f64) -> Self {
        Self::Number(n)
    }
}

impl From<&str> for PrizeAmount {
    fn from(s: &str) -> Self {
        Self::Text(s.to_string())
    }
}

/// A named prize bucket.
///
/// Reads camelCase (provider) or snake_case keys and serializes snake_case,
/// matching the rest of the hackathon record.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct PrizeCohort {
    #[serde(default, deserialize_with = "lenient::or_default")]
    pub name: String,
    #[serde(default, alias = "prizeAmount")]
    pub prize_amount: Option<PrizeAmount>,
    #[serde(default, alias = "numberOfWinners", deserialize_with = "lenient::option")]
    pub number_of_winners: Option<u32>,
    #[serde(default, deserialize_with = "lenient::option")]
    pub description: Option<String>,
    #[serde(default, alias = "judgingMode", deserialize_with = "lenient::option")]
    pub judging_mode: Option<String>,
}

impl PrizeCohort {
    /// Cohort with only a name and an amount.
    pub fn new(name: impl Into<String>, amount: impl Into<PrizeAmount>) -> Self {
        Self {
            name: name.into(),
            prize_amount: Some(amount.into()),
            ..Default::default()
        }
    }

    /// This cohort's amount, 0 if missing or unparseable.
    pub fn amount(&self) -> f64 {
        self.prize_amount.as_ref().map_or(0.0, parse_prize_amount)
    }
}

/// Numeric value of a prize amount. Never NaN or infinite; anything that
/// cannot be read is 0.
///
/// Strings keep only ASCII digits and `.` before parsing, so currency
/// symbols, thousands separators, and suffixes are dropped. A string left
/// with more than one `.` (European grouping such as `"€1.500.000"`) is
/// ambiguous and reads as 0 rather than as its leading `1.5`.
pub fn parse_prize_amount(amount: &PrizeAmount) -> f64 {
    let value = match amount {
        PrizeAmount::Number(n) => *n,
        PrizeAmount::Text(text) => {
            let digits: String = text
                .chars()
                .filter(|c| c.is_ascii_digit() || *c == '.')
                .collect();
            digits.parse::<f64>().unwrap_or(0.0)
        }
        PrizeAmount::Other(_) => 0.0,
    };
    if value.is_finite() {
        value
    } else {
        0.0
    }
}

/// Sum of every cohort's amount. An empty list totals `+0.0`.
pub fn total_prize(cohorts: &[PrizeCohort]) -> f64 {
    cohorts.iter().fold(0.0, |acc, cohort| acc + cohort.amount())
}
