//! Retirement System CLI
//!
//! Command-line interface for running retirement growth scenarios and dumping
//! per-year projection series for external plotting.

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};
use log::info;
use retirement_system::growth::employer_match;
use retirement_system::{Fund, GrowthEngine, GrowthProjection, RetirementPlanner, Scenario};
use std::fs::File;
use std::io::Write;
use std::path::PathBuf;

#[derive(Debug, Clone, Copy, ValueEnum)]
enum ScenarioArg {
    Conservative,
    EarlyOnly,
    LateOnly,
    Risky2065,
    Risky2066,
}

impl From<ScenarioArg> for Scenario {
    fn from(arg: ScenarioArg) -> Self {
        match arg {
            ScenarioArg::Conservative => Scenario::Conservative,
            ScenarioArg::EarlyOnly => Scenario::EarlyContributions,
            ScenarioArg::LateOnly => Scenario::LateContributions,
            ScenarioArg::Risky2065 => Scenario::RiskyTo2065,
            ScenarioArg::Risky2066 => Scenario::RiskyTo2066,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum FundArg {
    Low,
    Medium,
    High,
}

impl From<FundArg> for Fund {
    fn from(arg: FundArg) -> Self {
        match arg {
            FundArg::Low => Fund::LowVolatility,
            FundArg::Medium => Fund::MediumVolatility,
            FundArg::High => Fund::HighVolatility,
        }
    }
}

#[derive(Parser, Debug)]
#[command(name = "retirement-system")]
#[command(about = "Compound-growth projections for retirement savings scenarios")]
struct Cli {
    /// Annual salary in dollars
    #[arg(long, default_value_t = RetirementPlanner::DEFAULT_SALARY)]
    salary: f64,

    /// Starting principal in dollars
    #[arg(long, default_value_t = 0.0)]
    principal: f64,

    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Print ending values for the named retirement scenarios
    Scenarios {
        /// Run a single scenario instead of all five
        #[arg(long, value_enum)]
        scenario: Option<ScenarioArg>,
    },
    /// Emit the per-year growth series for one configuration
    Project {
        /// Fund whose return series to use
        #[arg(long, value_enum, default_value = "low")]
        fund: FundArg,

        /// Salary percentage contributed each year
        #[arg(long, default_value_t = 10.0)]
        contribution_pct: f64,

        /// First plan year
        #[arg(long, default_value_t = 2025)]
        start_year: u32,

        /// Last plan year (inclusive)
        #[arg(long, default_value_t = 2065)]
        end_year: u32,

        /// Write the series to this CSV file
        #[arg(long)]
        csv: Option<PathBuf>,

        /// Write the series to this JSON file
        #[arg(long)]
        json: Option<PathBuf>,
    },
}

fn main() -> anyhow::Result<()> {
    env_logger::init();

    let cli = Cli::parse();
    let planner = RetirementPlanner::with_salary(cli.salary, cli.principal);

    println!("Retirement System v0.1.0");
    println!("========================\n");

    match cli.command {
        Command::Scenarios { scenario } => run_scenarios(&planner, scenario),
        Command::Project {
            fund,
            contribution_pct,
            start_year,
            end_year,
            csv,
            json,
        } => run_projection(
            &planner,
            fund.into(),
            contribution_pct,
            start_year,
            end_year,
            csv,
            json,
        ),
    }
}

fn run_scenarios(planner: &RetirementPlanner, scenario: Option<ScenarioArg>) -> anyhow::Result<()> {
    println!("Salary: ${:.2}", planner.salary());
    println!("Principal: ${:.2}\n", planner.principal());

    let scenarios: Vec<Scenario> = match scenario {
        Some(arg) => vec![arg.into()],
        None => Scenario::ALL.to_vec(),
    };

    println!("{:<22} {:>18}", "Scenario", "Ending Value");
    println!("{}", "-".repeat(41));
    for scenario in scenarios {
        let value = planner
            .run(scenario)
            .with_context(|| format!("scenario {} failed", scenario))?;
        println!("{:<22} {:>18.2}", scenario.as_str(), value);
    }

    Ok(())
}

fn run_projection(
    planner: &RetirementPlanner,
    fund: Fund,
    contribution_pct: f64,
    start_year: u32,
    end_year: u32,
    csv: Option<PathBuf>,
    json: Option<PathBuf>,
) -> anyhow::Result<()> {
    let yours = planner.salary() * contribution_pct / 100.0;
    let employer = employer_match(planner.salary(), contribution_pct);

    info!(
        "projecting {} fund, {}% of salary, {}-{}",
        fund, contribution_pct, start_year, end_year
    );

    let engine = GrowthEngine::for_fund(fund);
    let projection = engine
        .project(planner.principal(), yours, employer, start_year, end_year)
        .with_context(|| format!("projection over the {} fund failed", fund))?;

    println!("Fund: {}", fund);
    println!("Individual: ${:.2}/year, Employer: ${:.2}/year\n", yours, employer);

    println!(
        "{:>6} {:>14} {:>14} {:>16} {:>16}",
        "Year", "Individual", "Employer", "Contributions", "Fund Value"
    );
    println!("{}", "-".repeat(70));
    for point in &projection.points {
        println!(
            "{:>6} {:>14.2} {:>14.2} {:>16.2} {:>16.2}",
            point.year,
            point.cumulative_individual,
            point.cumulative_employer,
            point.cumulative_contributions,
            point.fund_value,
        );
    }

    let summary = projection.summary();
    println!("\nSummary:");
    println!("  Years Projected: {}", summary.years_projected);
    println!("  Total Individual: ${:.2}", summary.total_individual);
    println!("  Total Employer: ${:.2}", summary.total_employer);
    println!("  Ending Value: ${:.2}", summary.ending_value);

    if let Some(path) = csv {
        write_csv(&path, &projection)?;
        println!("\nSeries written to: {}", path.display());
    }

    if let Some(path) = json {
        let file = File::create(&path)
            .with_context(|| format!("unable to create {}", path.display()))?;
        serde_json::to_writer_pretty(file, &projection)?;
        println!("\nSeries written to: {}", path.display());
    }

    Ok(())
}

fn write_csv(path: &PathBuf, projection: &GrowthProjection) -> anyhow::Result<()> {
    let mut file =
        File::create(path).with_context(|| format!("unable to create {}", path.display()))?;

    writeln!(
        file,
        "Year,CumulativeIndividual,CumulativeEmployer,CumulativeContributions,FundValue"
    )?;
    for point in &projection.points {
        writeln!(
            file,
            "{},{:.2},{:.2},{:.2},{:.2}",
            point.year,
            point.cumulative_individual,
            point.cumulative_employer,
            point.cumulative_contributions,
            point.fund_value,
        )?;
    }

    Ok(())
}
