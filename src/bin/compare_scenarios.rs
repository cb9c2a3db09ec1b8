//! Run all retirement scenarios side by side
//!
//! Prints a comparison table and writes scenario_comparison.csv

use log::info;
use retirement_system::{RetirementPlanner, Scenario};
use std::fs::File;
use std::io::Write;

fn main() {
    env_logger::init();

    let planner = RetirementPlanner::new();
    info!("comparing scenarios at ${:.0} salary", planner.salary());

    println!("Scenario Comparison (salary ${:.0})", planner.salary());
    println!("{:<22} {:>18} {:>14}", "Scenario", "Ending Value", "vs Conservative");
    println!("{}", "-".repeat(56));

    let baseline = planner
        .run(Scenario::Conservative)
        .expect("conservative scenario failed");

    let mut rows = Vec::new();
    for scenario in Scenario::ALL {
        let value = planner.run(scenario).expect("scenario failed");
        println!(
            "{:<22} {:>18.2} {:>14.2}",
            scenario.as_str(),
            value,
            value - baseline,
        );
        rows.push((scenario, value));
    }

    let before_crash = planner
        .run(Scenario::RiskyTo2065)
        .expect("risky scenario failed");
    let after_crash = planner
        .run(Scenario::RiskyTo2066)
        .expect("risky scenario failed");
    println!(
        "\nOne extra high-volatility year costs ${:.2}",
        before_crash - after_crash
    );

    let output_path = "scenario_comparison.csv";
    let mut file = File::create(output_path).expect("unable to create output file");

    writeln!(file, "Scenario,EndingValue").unwrap();
    for (scenario, value) in &rows {
        writeln!(file, "{},{:.2}", scenario.as_str(), value).unwrap();
    }

    println!("Output written to {}", output_path);
}
