use console::style;
use std::io::Write;
use std::time::Duration;

/// Prints one status line per migration step:
/// `    > create schema app done (time: 0.012s)`
#[derive(Debug, Clone, Copy, Default)]
pub struct StepReporter {
    quiet: bool,
}

impl StepReporter {
    pub fn new(quiet: bool) -> Self {
        Self { quiet }
    }

    pub fn start_step(&self, description: &str) {
        if self.quiet {
            return;
        }
        print!("    > {}", description);
        // Flush so the description is visible while the statement runs
        let _ = std::io::stdout().flush();
    }

    pub fn complete_step(&self, elapsed: Duration) {
        if self.quiet {
            return;
        }
        println!(
            " {} (time: {})",
            style("done").green(),
            format_elapsed(elapsed)
        );
    }

    pub fn fail_step(&self, error: &anyhow::Error) {
        if self.quiet {
            return;
        }
        println!(" {}", style("failed").red());
        println!("      {}", style(failure_detail(error)).dim());
    }

    pub fn plan_summary(&self, steps: usize, total_duration: Duration) {
        if self.quiet {
            return;
        }
        println!(
            "{} Applied {} step{} in {}",
            style("✓").green(),
            steps,
            if steps == 1 { "" } else { "s" },
            style(format_duration(total_duration)).green()
        );
    }
}

/// Full error chain, so the database's own message follows the step context
fn failure_detail(error: &anyhow::Error) -> String {
    format!("{:#}", error)
}

/// Seconds with millisecond precision, as printed after each step
pub fn format_elapsed(d: Duration) -> String {
    format!("{:.3}s", d.as_secs_f64())
}

fn format_duration(d: Duration) -> String {
    let total_secs = d.as_secs();
    let millis = d.subsec_millis();

    if total_secs == 0 {
        format!("{}ms", millis)
    } else if total_secs < 60 {
        if millis > 0 {
            format!("{}.{}s", total_secs, millis / 100)
        } else {
            format!("{}s", total_secs)
        }
    } else {
        let mins = total_secs / 60;
        let secs = total_secs % 60;
        if secs > 0 {
            format!("{}m{}s", mins, secs)
        } else {
            format!("{}m", mins)
        }
    }
}
