//! Named retirement scenarios built on the compounding engine
//!
//! Each scenario fixes a contribution percentage, an employer match, a fund,
//! and a year range, then feeds them into the growth engine. Two-phase
//! scenarios run the engine twice with an explicit principal hand-off instead
//! of threading conditional contribution logic through the compounding loop.

use crate::error::ProjectionError;
use crate::funds::Fund;
use crate::growth::{employer_match, total_contribution, GrowthEngine};
use serde::{Deserialize, Serialize};
use std::fmt;

/// First plan year for every scenario
pub const PLAN_START_YEAR: u32 = 2025;

/// Year the contribution-timing scenarios switch phases
pub const CONTRIBUTION_PIVOT_YEAR: u32 = 2035;

/// Retirement year closing the standard scenarios
pub const RETIREMENT_YEAR: u32 = 2065;

/// One year past retirement, covering the large negative return in the
/// high-volatility series
pub const POST_CRASH_YEAR: u32 = 2066;

/// Named retirement scenario
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Scenario {
    /// 10% of salary plus match, low-volatility fund, 2025-2065
    Conservative,
    /// 6% plus match for the first ten years, then growth only
    EarlyContributions,
    /// Growth only until 2035, then 6% plus match through retirement
    LateContributions,
    /// 10% plus match, high-volatility fund, stopping before the crash year
    RiskyTo2065,
    /// Same as RiskyTo2065 but one more year, riding through the crash
    RiskyTo2066,
}

impl Scenario {
    /// All scenarios in presentation order
    pub const ALL: [Scenario; 5] = [
        Scenario::Conservative,
        Scenario::EarlyContributions,
        Scenario::LateContributions,
        Scenario::RiskyTo2065,
        Scenario::RiskyTo2066,
    ];

    /// Get the string representation used in console and CSV output
    pub fn as_str(&self) -> &'static str {
        match self {
            Scenario::Conservative => "conservative",
            Scenario::EarlyContributions => "early-contributions",
            Scenario::LateContributions => "late-contributions",
            Scenario::RiskyTo2065 => "risky-to-2065",
            Scenario::RiskyTo2066 => "risky-to-2066",
        }
    }
}

impl fmt::Display for Scenario {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Planner holding the saver's salary and starting principal
#[derive(Debug, Clone)]
pub struct RetirementPlanner {
    salary: f64,
    principal: f64,
}

impl RetirementPlanner {
    /// Default annual salary in dollars
    pub const DEFAULT_SALARY: f64 = 100_000.0;

    /// Create a planner with the default salary and no starting principal
    pub fn new() -> Self {
        Self {
            salary: Self::DEFAULT_SALARY,
            principal: 0.0,
        }
    }

    /// Create a planner with a specific salary and starting principal
    pub fn with_salary(salary: f64, principal: f64) -> Self {
        Self { salary, principal }
    }

    /// Annual salary in dollars
    pub fn salary(&self) -> f64 {
        self.salary
    }

    /// Starting principal in dollars
    pub fn principal(&self) -> f64 {
        self.principal
    }

    /// Combined annual contribution for a salary percentage: the individual
    /// deposit plus the employer match, capped at the annual limit
    pub fn annual_contribution(&self, contribution_pct: f64) -> f64 {
        let yours = self.salary * contribution_pct / 100.0;
        let employer = employer_match(self.salary, contribution_pct);
        total_contribution(yours, employer)
    }

    /// Run a named scenario to its ending value in dollars
    pub fn run(&self, scenario: Scenario) -> Result<f64, ProjectionError> {
        match scenario {
            Scenario::Conservative => self.conservative_retirement(),
            Scenario::EarlyContributions => self.early_contributions_only(),
            Scenario::LateContributions => self.late_contributions_only(),
            Scenario::RiskyTo2065 => self.risky_retirement_to_2065(),
            Scenario::RiskyTo2066 => self.risky_retirement_to_2066(),
        }
    }

    /// Contribute 10% of salary plus match into the low-volatility fund for
    /// the full 2025-2065 span
    pub fn conservative_retirement(&self) -> Result<f64, ProjectionError> {
        let engine = GrowthEngine::for_fund(Fund::LowVolatility);
        let contribution = self.annual_contribution(10.0);
        engine.compound(self.principal, contribution, PLAN_START_YEAR, RETIREMENT_YEAR)
    }

    /// Contribute 6% of salary plus match for 2025-2034 only, then let the
    /// balance compound untouched through retirement
    pub fn early_contributions_only(&self) -> Result<f64, ProjectionError> {
        let engine = GrowthEngine::for_fund(Fund::LowVolatility);
        let contribution = self.annual_contribution(6.0);

        let at_pivot = engine.compound(
            self.principal,
            contribution,
            PLAN_START_YEAR,
            CONTRIBUTION_PIVOT_YEAR - 1,
        )?;
        engine.compound(at_pivot, 0.0, CONTRIBUTION_PIVOT_YEAR, RETIREMENT_YEAR)
    }

    /// Let the principal ride untouched until 2035, then contribute 6% of
    /// salary plus match through retirement
    pub fn late_contributions_only(&self) -> Result<f64, ProjectionError> {
        let engine = GrowthEngine::for_fund(Fund::LowVolatility);
        let contribution = self.annual_contribution(6.0);

        let at_pivot = engine.compound(
            self.principal,
            0.0,
            PLAN_START_YEAR,
            CONTRIBUTION_PIVOT_YEAR - 1,
        )?;
        engine.compound(at_pivot, contribution, CONTRIBUTION_PIVOT_YEAR, RETIREMENT_YEAR)
    }

    /// Contribute 10% of salary plus match into the high-volatility fund,
    /// retiring in 2065 just before the crash year
    pub fn risky_retirement_to_2065(&self) -> Result<f64, ProjectionError> {
        let engine = GrowthEngine::for_fund(Fund::HighVolatility);
        let contribution = self.annual_contribution(10.0);
        engine.compound(self.principal, contribution, PLAN_START_YEAR, RETIREMENT_YEAR)
    }

    /// Contribute 10% of salary plus match into the high-volatility fund
    /// through 2066, capturing the crash immediately before retirement
    pub fn risky_retirement_to_2066(&self) -> Result<f64, ProjectionError> {
        let engine = GrowthEngine::for_fund(Fund::HighVolatility);
        let contribution = self.annual_contribution(10.0);
        engine.compound(self.principal, contribution, PLAN_START_YEAR, POST_CRASH_YEAR)
    }
}

impl Default for RetirementPlanner {
    fn default() -> Self {
        Self::new()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::funds::ReturnSeries;
    use approx::assert_relative_eq;

    #[test]
    fn test_contribution_amounts() {
        let planner = RetirementPlanner::new();

        // 10% of 100k plus the 4% cap on the match
        assert_eq!(planner.annual_contribution(10.0), 14_000.0);
        // 6% of 100k plus the full 4% match
        assert_eq!(planner.annual_contribution(6.0), 10_000.0);
    }

    #[test]
    fn test_cap_engages_for_large_salaries() {
        let planner = RetirementPlanner::with_salary(300_000.0, 0.0);

        // 30k individual + 12k match, capped at the annual limit
        assert_eq!(planner.annual_contribution(10.0), 24_500.0);
    }

    #[test]
    fn test_conservative_regression() {
        let planner = RetirementPlanner::new();

        let value = planner.conservative_retirement().unwrap();
        assert_relative_eq!(value, 1_285_247.5860235309, max_relative = 1e-10);
    }

    #[test]
    fn test_early_contributions_regression() {
        let planner = RetirementPlanner::new();

        let value = planner.early_contributions_only().unwrap();
        assert_relative_eq!(value, 416_345.2250204350, max_relative = 1e-10);
    }

    #[test]
    fn test_late_contributions_regression() {
        let planner = RetirementPlanner::new();

        let value = planner.late_contributions_only().unwrap();
        assert_relative_eq!(value, 501_688.7649963729, max_relative = 1e-10);
    }

    #[test]
    fn test_risky_regressions() {
        let planner = RetirementPlanner::new();

        let before = planner.risky_retirement_to_2065().unwrap();
        let after = planner.risky_retirement_to_2066().unwrap();

        assert_relative_eq!(before, 7_961_649.6159460116, max_relative = 1e-10);
        assert_relative_eq!(after, 5_096_440.1045895014, max_relative = 1e-10);
    }

    #[test]
    fn test_crash_year_reduces_outcome() {
        let planner = RetirementPlanner::new();

        let before = planner.risky_retirement_to_2065().unwrap();
        let after = planner.risky_retirement_to_2066().unwrap();

        // Riding through 2066 ends below even a flat 0% extra year
        assert!(after < before);
        assert!(after < before + planner.annual_contribution(10.0));
    }

    #[test]
    fn test_two_phase_handoff_counts_every_year_once() {
        let planner = RetirementPlanner::new();
        let contribution = planner.annual_contribution(6.0);

        // Independent single loop over the same table: contributions through
        // 2034, growth only from 2035
        let series = ReturnSeries::low_volatility();
        let mut expected = 0.0;
        for year in PLAN_START_YEAR..=RETIREMENT_YEAR {
            let deposit = if year < CONTRIBUTION_PIVOT_YEAR {
                contribution
            } else {
                0.0
            };
            expected = (expected + deposit) * (1.0 + series.rate_for_year(year).unwrap());
        }

        let value = planner.early_contributions_only().unwrap();
        assert_relative_eq!(value, expected, max_relative = 1e-12);
    }

    #[test]
    fn test_ending_value_linear_in_salary() {
        let full = RetirementPlanner::new().conservative_retirement().unwrap();
        let half = RetirementPlanner::with_salary(50_000.0, 0.0)
            .conservative_retirement()
            .unwrap();

        // With zero principal the whole trajectory scales with the deposit
        assert_relative_eq!(half * 2.0, full, max_relative = 1e-12);
    }

    #[test]
    fn test_run_dispatch_matches_direct_calls() {
        let planner = RetirementPlanner::new();

        for scenario in Scenario::ALL {
            assert!(planner.run(scenario).is_ok());
        }
        assert_eq!(
            planner.run(Scenario::Conservative).unwrap(),
            planner.conservative_retirement().unwrap()
        );
    }
}
