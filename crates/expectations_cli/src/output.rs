use colored::*;
use expectations_core::{Status, ValidationOutcome};
use std::path::Path;

pub fn print_summary(outcome: &ValidationOutcome, result_path: &Path) {
    let summary = &outcome.summary;

    println!("\n{}", "═".repeat(60));
    println!("{}", "  VALIDATION SUMMARY".bold());
    println!("{}", "═".repeat(60));

    match summary.status() {
        Status::Succeeded => println!(
            "\n{} {}",
            "✓".green().bold(),
            format!("Suite '{}' SUCCEEDED", outcome.suite_name)
                .green()
                .bold()
        ),
        Status::Failed => println!(
            "\n{} {}",
            "✗".red().bold(),
            format!("Suite '{}' FAILED", outcome.suite_name).red().bold()
        ),
    }

    println!("\n{}", "Statistics:".bold());
    println!("  Rows read:         {}", summary.total_rows);
    println!("  Evaluated:         {}", summary.evaluated());
    println!("  Successful:        {}", summary.successful);
    println!("  Unsuccessful:      {}", summary.unsuccessful);
    match summary.success_percent() {
        Some(p) => println!("  Success percent:   {p:.2}%"),
        None => println!("  Success percent:   N/A"),
    }
    println!("{}", "═".repeat(60));

    print_success(&format!("Report written to {}", result_path.display()));
}

pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message.green());
}

pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}
