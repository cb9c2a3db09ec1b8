//! Error types for rate lookups and growth projections

use crate::funds::Fund;
use thiserror::Error;

/// Failures surfaced by the rate provider and the growth engine
///
/// All variants are immediate, synchronous failures. Nothing is retried or
/// clamped; callers see the first violation and stop.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum ProjectionError {
    /// Requested year is outside the fund's covered range
    #[error("year {year} is not covered by the {fund} fund ({first_year}-{last_year})")]
    UncoveredYear {
        fund: Fund,
        year: u32,
        first_year: u32,
        last_year: u32,
    },

    /// Fund queried before any return rates were populated
    #[error("the {fund} fund has no return rates")]
    UninitializedSeries { fund: Fund },

    /// Projection range with start year after end year
    #[error("start year {start_year} is after end year {end_year}")]
    InvalidRange { start_year: u32, end_year: u32 },
}
