//! Display utilities for the gzkit CLI

use console::style;
use gzkit_codec::TranscodeStats;
use indicatif::{ProgressBar, ProgressStyle};
use std::path::Path;
use std::time::Duration;

/// Create a spinner shown while a single file is transcoded
pub fn create_spinner(quiet: bool, input: &Path) -> Option<ProgressBar> {
    if quiet {
        return None;
    }

    let pb = ProgressBar::new_spinner();
    pb.set_style(
        ProgressStyle::with_template("{spinner:.green} {msg}")
            .unwrap_or_else(|_| ProgressStyle::default_spinner()),
    );
    pb.set_message(format!("Processing {}", input.display()));
    pb.enable_steady_tick(Duration::from_millis(100));
    Some(pb)
}

/// Print the one-line summary of a transcoded file
pub fn display_file_summary(input: &Path, output: &Path, stats: &TranscodeStats) {
    println!(
        "{} {} {} {} ({} {} {}, {})",
        style("✓").green().bold(),
        style(input.display()).cyan(),
        style("→").dim(),
        style(output.display()).cyan(),
        format_bytes(stats.bytes_read),
        style("→").dim(),
        format_bytes(stats.bytes_written),
        style(format_ratio(stats)).yellow()
    );
}

/// Print the summary of a `pipe` run
///
/// Goes to stderr, stdout carries the payload.
pub fn display_pipe_summary(stats: &TranscodeStats) {
    eprintln!(
        "{} {} read, {} written ({})",
        style("ℹ").blue().bold(),
        format_bytes(stats.bytes_read),
        format_bytes(stats.bytes_written),
        style(format_ratio(stats)).yellow()
    );
}

/// Display a success message with proper formatting
pub fn display_success(message: &str) {
    println!("{} {}", style("✓").green().bold(), style(message).green());
}

/// Format bytes in human-readable format
pub fn format_bytes(bytes: u64) -> String {
    const UNITS: &[&str] = &["B", "KB", "MB", "GB", "TB"];
    let mut size = bytes as f64;
    let mut unit_index = 0;

    while size >= 1024.0 && unit_index < UNITS.len() - 1 {
        size /= 1024.0;
        unit_index += 1;
    }

    if unit_index == 0 {
        format!("{bytes} B")
    } else {
        format!("{:.2} {}", size, UNITS[unit_index])
    }
}

/// Format the output/input ratio as a percentage
pub fn format_ratio(stats: &TranscodeStats) -> String {
    format!("{:.1}%", stats.ratio() * 100.0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case(0, "0 B")]
    #[case(1023, "1023 B")]
    #[case(1024, "1.00 KB")]
    #[case(1536, "1.50 KB")]
    #[case(5 * 1024 * 1024, "5.00 MB")]
    fn test_format_bytes(#[case] bytes: u64, #[case] expected: &str) {
        assert_eq!(format_bytes(bytes), expected);
    }

    #[test]
    fn test_format_ratio() {
        let stats = TranscodeStats {
            bytes_read: 200,
            bytes_written: 50,
        };
        assert_eq!(format_ratio(&stats), "25.0%");
        assert_eq!(format_ratio(&TranscodeStats::default()), "100.0%");
    }

    #[test]
    fn test_spinner_hidden_when_quiet() {
        assert!(create_spinner(true, Path::new("a.txt")).is_none());
    }
}
