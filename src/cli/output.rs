// Output formatting utilities for CLI

/// Output formatter for consistent CLI output
pub struct OutputFormatter;

impl OutputFormatter {
    /// One result line; `None` falls back to the placeholder
    pub fn eta(result: Option<&str>, placeholder: &str) -> String {
        result.unwrap_or(placeholder).to_string()
    }

    /// Format a key-value pair for verbose display
    pub fn key_value(key: &str, value: &str, width: usize) -> String {
        format!("{:>width$} : {}", key, value, width = width)
    }
}
