//! Employer matching and contribution-cap rules

/// Combined annual contribution ceiling in dollars (individual + employer)
pub const ANNUAL_CONTRIBUTION_LIMIT: f64 = 24_500.0;

/// Salary percentage matched dollar-for-dollar
const FULL_MATCH_PCT: f64 = 2.0;

/// Salary percentage up to which the employer matches fifty cents on the dollar
const HALF_MATCH_PCT: f64 = 6.0;

/// Calculate the employer matching contribution in dollars
///
/// The employer matches 100% of the first 2% of salary contributed and 50% of
/// the next 4%. Contributions above 6% earn no additional match, so the match
/// tops out at 4% of salary.
pub fn employer_match(salary: f64, contribution_pct: f64) -> f64 {
    let pct = contribution_pct.max(0.0);
    let match_pct = pct.min(FULL_MATCH_PCT) + (pct.min(HALF_MATCH_PCT) - FULL_MATCH_PCT).max(0.0) * 0.5;
    match_pct / 100.0 * salary
}

/// Combine individual and employer contributions, capped at the annual limit
pub fn total_contribution(your_contribution: f64, employer_contribution: f64) -> f64 {
    (your_contribution + employer_contribution).min(ANNUAL_CONTRIBUTION_LIMIT)
}
