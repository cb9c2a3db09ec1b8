//! Projection output structures for the visualization path

use crate::funds::Fund;
use serde::{Deserialize, Serialize};

/// A single row of projection output for one plan year
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionPoint {
    /// Calendar year this point describes
    pub year: u32,

    /// Individual contributions deposited through this year
    pub cumulative_individual: f64,

    /// Employer contributions deposited through this year
    pub cumulative_employer: f64,

    /// Principal plus all contributions deposited through this year
    pub cumulative_contributions: f64,

    /// Compounded fund value at the end of this year
    pub fund_value: f64,
}

/// Complete per-year growth series for one configuration
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct GrowthProjection {
    /// Fund whose return series drove the projection
    pub fund: Fund,

    /// Year the money started compounding (has no point of its own)
    pub start_year: u32,

    /// One point per year from start_year + 1 through the end year
    pub points: Vec<ProjectionPoint>,
}

impl GrowthProjection {
    pub fn new(fund: Fund, start_year: u32) -> Self {
        Self {
            fund,
            start_year,
            points: Vec::new(),
        }
    }

    /// Add a projection point
    pub fn add_point(&mut self, point: ProjectionPoint) {
        self.points.push(point);
    }

    /// Get summary statistics
    pub fn summary(&self) -> ProjectionSummary {
        let last = self.points.last();

        ProjectionSummary {
            years_projected: self.points.len() as u32,
            total_individual: last.map(|p| p.cumulative_individual).unwrap_or(0.0),
            total_employer: last.map(|p| p.cumulative_employer).unwrap_or(0.0),
            ending_value: last.map(|p| p.fund_value).unwrap_or(0.0),
        }
    }
}

/// Summary statistics for a growth projection
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ProjectionSummary {
    pub years_projected: u32,
    pub total_individual: f64,
    pub total_employer: f64,
    pub ending_value: f64,
}
