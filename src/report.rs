use chrono::Local;
use console::Style;

use crate::config::TargetConfig;
use crate::types::CheckResult;

const RULE_WIDTH: usize = 60;

/// Banner printed before the first check.
pub fn print_banner(config: &TargetConfig) {
    let bold = Style::new().bold();
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("{}", bold.apply_to("AIR WATCH BACKEND SMOKE TEST"));
    println!("{}", "=".repeat(RULE_WIDTH));
    println!("Target:  {}", config.base_url);
    println!("Started: {}", Local::now().format("%Y-%m-%d %H:%M:%S"));
    println!("{}", "=".repeat(RULE_WIDTH));
    println!();
}

pub fn passed_count(results: &[CheckResult]) -> usize {
    results.iter().filter(|r| r.passed).count()
}

/// Styled per-check summary plus the final tally.
pub fn print_summary(results: &[CheckResult]) {
    let green = Style::new().green().bold();
    let red = Style::new().red().bold();

    println!();
    println!("Summary:");
    println!("{}", "-".repeat(RULE_WIDTH));
    for r in results {
        if r.passed {
            println!("  {} {}: {}", green.apply_to("PASS"), r.name, r.detail);
        } else {
            println!("  {} {}: {}", red.apply_to("FAIL"), r.name, r.detail);
            if let Some(hint) = &r.hint {
                println!("       hint: {hint}");
            }
        }
    }
    println!("{}", "-".repeat(RULE_WIDTH));

    let passed = passed_count(results);
    let total = results.len();
    println!("{passed}/{total} checks passed");

    if passed == total {
        println!(
            "{}",
            green.apply_to("All checks passed, the backend looks healthy.")
        );
    } else {
        println!(
            "{}",
            red.apply_to(format!(
                "{} check(s) failed, see details above.",
                total - passed
            ))
        );
    }
    println!();
}

/// Machine-readable variant for --json runs.
pub fn print_json(results: &[CheckResult]) {
    match serde_json::to_string_pretty(results) {
        Ok(json) => println!("{json}"),
        Err(e) => eprintln!("Error serializing results: {e}"),
    }
}
