use ftl_core::{ErrorCategory, ValidationResult};
use owo_colors::OwoColorize;

use crate::VERSION;

/// Print a styled banner for verbose mode
pub fn print_banner() {
    eprintln!(
        "\n{} {} {}",
        "FTL Document".bold().bright_blue(),
        "v".dimmed(),
        VERSION.dimmed()
    );
    eprintln!("{}", "Turn human documentation into structured FTL documents\n".dimmed());
}

/// Print a styled step message
pub fn print_step(step: usize, total: usize, message: &str) {
    eprintln!("{} {}", format!("[{}/{}]", step, total).dimmed(), message.bright_cyan());
}

/// Print a labelled detail line under a step
pub fn print_detail(label: &str, value: &str) {
    eprintln!("  {} {}", format!("{}:", label).dimmed(), value.bright_white());
}

/// Print a success message
pub fn print_success(message: &str) {
    eprintln!("{} {}", "✓".green(), message.bright_green());
}

/// Print an info message
pub fn print_info(message: &str) {
    eprintln!("{} {}", "ℹ".blue(), message.bright_blue());
}

/// Print a warning message
pub fn print_warning(message: &str) {
    eprintln!("{} {}", "⚠".yellow(), message.bright_yellow());
}

/// Print an error message
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red(), message.bright_red());
}

/// Print an error prefixed with its category
pub fn print_categorized_error(category: Option<ErrorCategory>, message: &str) {
    match category {
        Some(category) => print_error(&format!("{}: {}", category, message)),
        None => print_error(message),
    }
}

fn colored_score(score: u8) -> String {
    let label = format!("{}/100", score);
    match score {
        80..=100 => label.bright_green().to_string(),
        50..=79 => label.bright_yellow().to_string(),
        _ => label.bright_red().to_string(),
    }
}

/// Print the validator's warnings and the quality score
pub fn print_quality(result: &ValidationResult) {
    for warning in &result.warnings {
        print_warning(warning);
    }
    eprintln!("{} {}", "Document quality score:".dimmed(), colored_score(result.score));
}

/// Print a full validation report
///
/// The verdict, warnings and score go to stdout; a failed verdict and its
/// errors go to stderr.
pub fn print_validation_report(result: &ValidationResult) {
    println!("{}", "═".repeat(60).dimmed());
    println!("{}", "Validation Report".bold().cyan());
    println!("{}", "═".repeat(60).dimmed());

    if result.valid {
        println!("{} {}", "✓".green(), "Document is valid".bright_green());
    } else {
        print_error("Document is invalid");
        for error in &result.errors {
            eprintln!("  {} {}", "error:".red(), error);
        }
    }

    for warning in &result.warnings {
        println!("{} {}", "⚠".yellow(), warning.bright_yellow());
    }
    println!("{} {}", "Document quality score:".dimmed(), colored_score(result.score));
}

/// Format file size for display
pub fn format_size(bytes: usize) -> String {
    const KB: usize = 1024;
    const MB: usize = 1024 * KB;

    if bytes >= MB {
        format!("{:.1} MB", bytes as f64 / MB as f64)
    } else if bytes >= KB {
        format!("{:.1} KB", bytes as f64 / KB as f64)
    } else {
        format!("{} B", bytes)
    }
}
