//! Compound-growth engine, contribution rules, and projection output

mod contributions;
mod engine;
mod projection;

pub use contributions::{employer_match, total_contribution, ANNUAL_CONTRIBUTION_LIMIT};
pub use engine::GrowthEngine;
pub use projection::{GrowthProjection, ProjectionPoint, ProjectionSummary};
