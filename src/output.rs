//! CLI output formatting.
//!
//! The shell shows exactly one message per run: a success message naming the
//! output path, or an error message naming the failure reason.
//!
//! ```text
//! Image compressed and saved to:
//! photos/out.jpg
//!     Source: photos/IMG_0001.png (4000x2000)
//!     Output: 1920x960, scale 0.48, quality 85
//!     Size: 412.7 KB
//! ```
//!
//! Each message has a `format_*` function (returns `Vec<String>`) for
//! testability and a `print_*` wrapper that writes to stdout or stderr.
//! Format functions are pure: no I/O, no side effects.

use crate::config::ConfigError;
use crate::imaging::{CompressError, CompressReport};

const INDENT: &str = "    ";

/// Human-readable byte count: `512 B`, `3.2 KB`, `1.4 MB`.
pub fn format_bytes(bytes: u64) -> String {
    const KB: f64 = 1024.0;
    const MB: f64 = KB * 1024.0;
    let b = bytes as f64;
    if b >= MB {
        format!("{:.1} MB", b / MB)
    } else if b >= KB {
        format!("{:.1} KB", b / KB)
    } else {
        format!("{bytes} B")
    }
}

fn detail_lines(report: &CompressReport) -> Vec<String> {
    vec![
        format!(
            "{INDENT}Source: {} ({}x{})",
            report.source.display(),
            report.original.width,
            report.original.height
        ),
        format!(
            "{INDENT}Output: {}x{}, scale {:.2}, quality {}",
            report.resized.width, report.resized.height, report.scale, report.quality
        ),
    ]
}

/// Success message after a file was written.
pub fn format_success(report: &CompressReport) -> Vec<String> {
    let mut lines = vec![
        "Image compressed and saved to:".to_string(),
        report.output.display().to_string(),
    ];
    lines.extend(detail_lines(report));
    if let Some(bytes) = report.bytes_written {
        lines.push(format!("{INDENT}Size: {}", format_bytes(bytes)));
    }
    lines
}

/// Plan shown by `--dry-run`.
pub fn format_plan(report: &CompressReport) -> Vec<String> {
    let mut lines = vec![format!("Would write {}", report.output.display())];
    lines.extend(detail_lines(report));
    lines
}

/// The single error line for a failed compression.
pub fn format_error(err: &CompressError) -> String {
    format!("Error: {}", err.user_message())
}

/// The single error line when the settings could not be loaded.
pub fn format_config_error(err: &ConfigError) -> String {
    format!("Error: {err}")
}

pub fn print_success(report: &CompressReport) {
    for line in format_success(report) {
        println!("{line}");
    }
}

pub fn print_plan(report: &CompressReport) {
    for line in format_plan(report) {
        println!("{line}");
    }
}

pub fn print_error(err: &CompressError) {
    eprintln!("{}", format_error(err));
}

pub fn print_config_error(err: &ConfigError) {
    eprintln!("{}", format_config_error(err));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::imaging::Dimensions;
    use std::path::PathBuf;

    fn report(bytes_written: Option<u64>) -> CompressReport {
        CompressReport {
            source: PathBuf::from("in/photo.png"),
            output: PathBuf::from("out/photo.jpg"),
            original: Dimensions {
                width: 4000,
                height: 2000,
            },
            resized: Dimensions {
                width: 1920,
                height: 960,
            },
            scale: 0.48,
            quality: 85,
            bytes_written,
        }
    }

    #[test]
    fn success_names_output_path_first() {
        let lines = format_success(&report(Some(2048)));
        assert_eq!(lines[0], "Image compressed and saved to:");
        assert_eq!(lines[1], "out/photo.jpg");
        assert_eq!(lines[2], "    Source: in/photo.png (4000x2000)");
        assert_eq!(lines[3], "    Output: 1920x960, scale 0.48, quality 85");
        assert_eq!(lines[4], "    Size: 2.0 KB");
    }

    #[test]
    fn plan_has_no_size_line() {
        let lines = format_plan(&report(None));
        assert_eq!(lines[0], "Would write out/photo.jpg");
        assert_eq!(lines.len(), 3);
    }

    #[test]
    fn error_line_carries_reason() {
        let err = CompressError::InvalidInput("quality must be between 1 and 100, got 0".into());
        assert_eq!(
            format_error(&err),
            "Error: Failed to compress image: invalid input: quality must be between 1 and 100, got 0"
        );
    }

    #[test]
    fn config_error_uses_display_text() {
        let err = ConfigError::Io(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "config file not found: custom.toml",
        ));
        assert_eq!(
            format_config_error(&err),
            "Error: IO error: config file not found: custom.toml"
        );
    }

    #[test]
    fn bytes_formatting() {
        assert_eq!(format_bytes(512), "512 B");
        assert_eq!(format_bytes(3 * 1024 + 205), "3.2 KB");
        assert_eq!(format_bytes(3 * 1024 * 1024 / 2), "1.5 MB");
    }
}
