//! Fund return-rate tables for the three investment strategies

mod series;

pub use series::ReturnSeries;

use serde::{Deserialize, Serialize};
use std::fmt;

/// Named investment strategy backing a return series
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Fund {
    /// Stable returns in the 1-9% band with no negative years
    LowVolatility,
    /// Mixed returns between roughly -26% and +37%
    MediumVolatility,
    /// Aggressive returns between roughly -37% and +38%
    HighVolatility,
}

impl Fund {
    /// Get the string representation used in console and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Fund::LowVolatility => "low-volatility",
            Fund::MediumVolatility => "medium-volatility",
            Fund::HighVolatility => "high-volatility",
        }
    }
}

impl fmt::Display for Fund {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}
