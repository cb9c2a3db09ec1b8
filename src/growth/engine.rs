//! Core compounding engine for annual growth projections

use crate::error::ProjectionError;
use crate::funds::{Fund, ReturnSeries};
use super::projection::{GrowthProjection, ProjectionPoint};

/// Compounding engine bound to one return series
///
/// The engine applies contribution-then-growth ordering: each year's
/// contribution is deposited before that year's return is applied, so the
/// deposit compounds immediately.
pub struct GrowthEngine {
    series: ReturnSeries,
}

impl GrowthEngine {
    /// Create an engine over a return series
    pub fn new(series: ReturnSeries) -> Self {
        Self { series }
    }

    /// Create an engine over a built-in fund series
    pub fn for_fund(fund: Fund) -> Self {
        Self::new(ReturnSeries::for_fund(fund))
    }

    /// Get the underlying return series
    pub fn series(&self) -> &ReturnSeries {
        &self.series
    }

    /// Compound a principal with annual contributions over an inclusive year range
    ///
    /// For each year y from start_year through end_year in order:
    /// `value = (value + annual_contribution) * (1 + rate_for_year(y))`.
    /// Both endpoints must lie inside the series' covered range.
    pub fn compound(
        &self,
        principal: f64,
        annual_contribution: f64,
        start_year: u32,
        end_year: u32,
    ) -> Result<f64, ProjectionError> {
        if start_year > end_year {
            return Err(ProjectionError::InvalidRange {
                start_year,
                end_year,
            });
        }

        let mut value = principal;
        for year in start_year..=end_year {
            let rate = self.series.rate_for_year(year)?;
            value = (value + annual_contribution) * (1.0 + rate);
        }
        Ok(value)
    }

    /// Build the per-year growth series for external rendering
    ///
    /// One point per year from start_year + 1 through end_year. Cumulative
    /// contributions count the years elapsed since start_year, while the fund
    /// value compounds start_year through the point's year inclusive.
    pub fn project(
        &self,
        principal: f64,
        your_contribution: f64,
        employer_contribution: f64,
        start_year: u32,
        end_year: u32,
    ) -> Result<GrowthProjection, ProjectionError> {
        if start_year > end_year {
            return Err(ProjectionError::InvalidRange {
                start_year,
                end_year,
            });
        }

        let total = your_contribution + employer_contribution;
        let mut result = GrowthProjection::new(self.series.fund(), start_year);

        let mut value = principal;
        for year in start_year..=end_year {
            let rate = self.series.rate_for_year(year)?;
            value = (value + total) * (1.0 + rate);

            if year > start_year {
                let elapsed = (year - start_year) as f64;
                result.add_point(ProjectionPoint {
                    year,
                    cumulative_individual: your_contribution * elapsed,
                    cumulative_employer: employer_contribution * elapsed,
                    cumulative_contributions: principal + total * elapsed,
                    fund_value: value,
                });
            }
        }
        Ok(result)
    }
}
