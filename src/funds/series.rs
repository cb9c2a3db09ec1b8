//! Annual return series with fixed per-fund rate tables
//!
//! Each series is an immutable table of annual percentage returns covering a
//! contiguous year range. Lookups convert the stored percentage to a decimal
//! fraction; a year outside the covered range is a hard error, never a clamp.

use crate::error::ProjectionError;
use crate::funds::Fund;

/// Annual percentage returns for one fund, indexed from the first covered year
#[derive(Debug, Clone)]
pub struct ReturnSeries {
    fund: Fund,

    /// First year covered by the table
    first_year: u32,

    /// Annual returns in percent (8.81 means 8.81%); index 0 = first_year
    rates_pct: Vec<f64>,
}

impl ReturnSeries {
    /// Create a series from a custom rate table
    pub fn new(fund: Fund, first_year: u32, rates_pct: Vec<f64>) -> Self {
        Self {
            fund,
            first_year,
            rates_pct,
        }
    }

    /// Get the built-in series for a fund
    pub fn for_fund(fund: Fund) -> Self {
        match fund {
            Fund::LowVolatility => Self::low_volatility(),
            Fund::MediumVolatility => Self::medium_volatility(),
            Fund::HighVolatility => Self::high_volatility(),
        }
    }

    /// Conservative strategy with stable returns, 2025-2065
    pub fn low_volatility() -> Self {
        Self::new(Fund::LowVolatility, 2025, Self::low_volatility_rates())
    }

    /// Balanced strategy with moderate swings, 2025-2065
    pub fn medium_volatility() -> Self {
        Self::new(Fund::MediumVolatility, 2025, Self::medium_volatility_rates())
    }

    /// Aggressive strategy, 2025-2066; 2066 is a single large negative year
    pub fn high_volatility() -> Self {
        Self::new(Fund::HighVolatility, 2025, Self::high_volatility_rates())
    }

    /// Fund backing this series
    pub fn fund(&self) -> Fund {
        self.fund
    }

    /// First covered year
    pub fn first_year(&self) -> u32 {
        self.first_year
    }

    /// Last covered year
    pub fn last_year(&self) -> u32 {
        self.first_year + self.rates_pct.len().saturating_sub(1) as u32
    }

    /// Number of covered years
    pub fn len(&self) -> usize {
        self.rates_pct.len()
    }

    /// Whether the table has no entries
    pub fn is_empty(&self) -> bool {
        self.rates_pct.is_empty()
    }

    /// Whether a year falls inside the covered range
    pub fn covers(&self, year: u32) -> bool {
        !self.is_empty() && year >= self.first_year && year <= self.last_year()
    }

    /// Get the annual return for a year as a decimal fraction (0.0881 for 8.81%)
    pub fn rate_for_year(&self, year: u32) -> Result<f64, ProjectionError> {
        if self.rates_pct.is_empty() {
            return Err(ProjectionError::UninitializedSeries { fund: self.fund });
        }
        if !self.covers(year) {
            return Err(ProjectionError::UncoveredYear {
                fund: self.fund,
                year,
                first_year: self.first_year,
                last_year: self.last_year(),
            });
        }
        let idx = (year - self.first_year) as usize;
        Ok(self.rates_pct[idx] / 100.0)
    }

    /// Low-volatility annual returns from the fund history
    fn low_volatility_rates() -> Vec<f64> {
        vec![
            // 2025-2034
            8.81, 8.81, 8.90, 8.15, 7.23, 6.14, 7.22, 7.03, 6.76, 6.77,
            // 2035-2044
            5.74, 5.99, 6.42, 5.39, 5.00, 4.11, 4.30, 4.49, 4.93, 4.87,
            // 2045-2054
            3.75, 2.97, 2.81, 2.45, 1.47, 1.89, 2.31, 2.04, 1.82, 2.33,
            // 2055-2064
            2.91, 2.24, 0.97, 1.38, 2.98, 4.22, 4.40, 3.25, 4.01, 1.38,
            // 2065
            1.58,
        ]
    }

    /// Medium-volatility annual returns from the fund history
    fn medium_volatility_rates() -> Vec<f64> {
        vec![
            // 2025-2034
            -9.04, -18.14, 36.92, 18.03, 10.45, 15.30, 5.49, -20.32, 34.85, 20.06,
            // 2035-2044
            -3.38, 18.57, 30.35, 7.80, -2.92, 16.35, 18.22, -9.26, 27.97, 25.85,
            // 2045-2054
            12.45, -26.26, 25.30, 16.93, 5.17, 18.91, 7.59, 10.12, -14.66, 19.34,
            // 2055-2064
            24.75, 6.17, 12.28, -14.87, 19.34, 16.89, 7.25, 12.01, -10.75, 14.12,
            // 2065
            8.56,
        ]
    }

    /// High-volatility annual returns from the fund history
    fn high_volatility_rates() -> Vec<f64> {
        vec![
            // 2025-2034
            12.40, 27.25, -6.56, 26.31, 4.46, 7.06, 1.32, 37.58, 22.96, 33.36,
            // 2035-2044
            28.58, 21.04, -9.10, -11.89, -22.10, 28.67, 10.88, 4.91, 15.79, 5.49,
            // 2045-2054
            -36.78, 26.46, 15.10, 2.11, 15.90, 32.15, 13.69, 1.38, 12.01, 21.82,
            // 2055-2064
            -4.41, 28.88, 18.40, 28.68, -19.44, 26.50, 17.50, 10.38, 13.91, 5.21,
            // 2065-2066
            14.32, -36.1,
        ]
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_rate_is_percentage_over_100() {
        let series = ReturnSeries::low_volatility();

        assert_eq!(series.rate_for_year(2025).unwrap(), 8.81 / 100.0);
        assert_eq!(series.rate_for_year(2030).unwrap(), 6.14 / 100.0);
        assert_eq!(series.rate_for_year(2065).unwrap(), 1.58 / 100.0);
    }

    #[test]
    fn test_series_ranges() {
        let low = ReturnSeries::low_volatility();
        assert_eq!(low.first_year(), 2025);
        assert_eq!(low.last_year(), 2065);
        assert_eq!(low.len(), 41);

        let medium = ReturnSeries::medium_volatility();
        assert_eq!(medium.first_year(), 2025);
        assert_eq!(medium.last_year(), 2065);
        assert_eq!(medium.len(), 41);

        let high = ReturnSeries::high_volatility();
        assert_eq!(high.first_year(), 2025);
        assert_eq!(high.last_year(), 2066);
        assert_eq!(high.len(), 42);
    }

    #[test]
    fn test_every_covered_year_resolves() {
        for fund in [
            Fund::LowVolatility,
            Fund::MediumVolatility,
            Fund::HighVolatility,
        ] {
            let series = ReturnSeries::for_fund(fund);
            for year in series.first_year()..=series.last_year() {
                assert!(
                    series.rate_for_year(year).is_ok(),
                    "{} year {} should resolve",
                    fund,
                    year
                );
            }
        }
    }

    #[test]
    fn test_uncovered_year_fails() {
        let series = ReturnSeries::low_volatility();

        let before = series.rate_for_year(2024);
        assert_eq!(
            before,
            Err(ProjectionError::UncoveredYear {
                fund: Fund::LowVolatility,
                year: 2024,
                first_year: 2025,
                last_year: 2065,
            })
        );

        // The crash year exists only in the high-volatility table
        assert!(series.rate_for_year(2066).is_err());
        assert_eq!(
            ReturnSeries::high_volatility().rate_for_year(2066).unwrap(),
            -36.1 / 100.0
        );
    }

    #[test]
    fn test_empty_series_fails() {
        let series = ReturnSeries::new(Fund::MediumVolatility, 2025, Vec::new());

        assert_eq!(
            series.rate_for_year(2025),
            Err(ProjectionError::UninitializedSeries {
                fund: Fund::MediumVolatility,
            })
        );
        assert!(!series.covers(2025));
    }

    #[test]
    fn test_negative_rates_convert() {
        let medium = ReturnSeries::medium_volatility();
        assert_eq!(medium.rate_for_year(2025).unwrap(), -9.04 / 100.0);
        assert_eq!(medium.rate_for_year(2046).unwrap(), -26.26 / 100.0);
    }
}
