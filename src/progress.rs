use console::Style;
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner shown while a check's request is in flight.
pub fn check_spinner(message: &str) -> ProgressBar {
    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::default_spinner()
            .tick_strings(&["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"])
            .template("{spinner} {msg}")
            .expect("invalid spinner template"),
    );
    pb.set_message(message.to_string());
    pb.enable_steady_tick(std::time::Duration::from_millis(80));
    pb
}

/// Replace the spinner with a colored ✓/✗ mark once the check settles.
pub fn finish_check(pb: &ProgressBar, passed: bool) {
    let mark = if passed {
        Style::new().green().apply_to("✓")
    } else {
        Style::new().red().apply_to("✗")
    };
    pb.finish_with_message(format!("{mark} {}", pb.message()));
}
