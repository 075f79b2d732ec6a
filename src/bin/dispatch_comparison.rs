//! Renders the canonical shapes under every dispatch strategy and checks
//! that they agree.
//!
//! Run with: cargo run --bin dispatch_comparison

use colored::Colorize;
use shape_dispatch::gallery::reports_agree;
use shape_dispatch::{compare_strategies, logging, ShapeKind};
use std::process::ExitCode;

fn main() -> ExitCode {
    logging::init();

    let reports = match compare_strategies(&ShapeKind::ALL) {
        Ok(reports) => reports,
        Err(err) => {
            eprintln!("{} {}", "error:".red().bold(), err);
            return ExitCode::FAILURE;
        }
    };

    for report in &reports {
        println!(
            "{} {}",
            format!("=== {} ===", report.strategy).cyan().bold(),
            format!("({})", report.strategy.describe()).dimmed()
        );
        print!("{}", report.output);
        println!();
    }

    if reports_agree(&reports) {
        println!("{}", "✓ all strategies produce identical output".green());
        ExitCode::SUCCESS
    } else {
        println!("{}", "✗ strategies disagree".red().bold());
        ExitCode::FAILURE
    }
}
