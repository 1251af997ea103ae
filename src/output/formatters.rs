//! Formatting utilities for terminal output

use std::time::Duration;

/// Space out the characters of a string, e.g. `"ABC"` becomes `"A B C"`
#[must_use]
pub fn spaced(text: &str) -> String {
    let mut result = String::with_capacity(text.len() * 2);
    for (i, ch) in text.chars().enumerate() {
        if i > 0 {
            result.push(' ');
        }
        result.push(ch);
    }
    result
}

/// Create a progress bar string
#[must_use]
pub fn create_progress_bar(value: f64, max: f64, width: usize) -> String {
    if max <= 0.0 {
        return "░".repeat(width);
    }

    // Cast is safe: values are clamped to [0, width]
    let filled = ((value / max) * width as f64) as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Bar showing how many cryptogram words an alphabet decodes
#[must_use]
pub fn score_bar(score: usize, total: usize, width: usize) -> String {
    create_progress_bar(score as f64, total as f64, width)
}

/// Format a duration with a unit suited to its magnitude
#[must_use]
pub fn format_duration(duration: Duration) -> String {
    let secs = duration.as_secs_f64();
    if secs >= 1.0 {
        format!("{secs:.3}s")
    } else if secs >= 0.001 {
        format!("{:.2}ms", secs * 1_000.0)
    } else {
        format!("{}µs", duration.as_micros())
    }
}
