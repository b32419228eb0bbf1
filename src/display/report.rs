//! Report formatting helpers for terminal output

use crate::reports::aggregator::UsageLevel;

/// Format a percentage with one decimal place
pub fn format_percentage(pct: f64) -> String {
    format!("{:.1}%", pct)
}

/// Create a simple bar chart representation
pub fn format_bar(value: f64, max_value: f64, width: usize) -> String {
    if max_value <= 0.0 || value <= 0.0 {
        return "░".repeat(width);
    }

    let filled = ((value / max_value) * width as f64).round() as usize;
    let filled = filled.min(width);

    format!("{}{}", "█".repeat(filled), "░".repeat(width - filled))
}

/// Progress bar for a usage percentage, capped at 100%
pub fn format_progress(pct: f64, width: usize) -> String {
    format_bar(pct.min(100.0), 100.0, width)
}

/// Short marker for a usage level
pub fn usage_marker(level: UsageLevel) -> &'static str {
    match level {
        UsageLevel::OnTrack => "OK",
        UsageLevel::Warning => "!",
        UsageLevel::Critical => "!!",
    }
}

/// Truncate a string to a maximum number of characters with ellipsis
pub fn truncate(s: &str, max_len: usize) -> String {
    if s.chars().count() <= max_len {
        s.to_string()
    } else if max_len <= 3 {
        ".".repeat(max_len)
    } else {
        let kept: String = s.chars().take(max_len - 3).collect();
        format!("{}...", kept)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_percentage() {
        assert_eq!(format_percentage(80.0), "80.0%");
        assert_eq!(format_percentage(12.345), "12.3%");
    }

    #[test]
    fn test_format_bar() {
        assert_eq!(format_bar(50.0, 100.0, 10), "█████░░░░░");
        assert_eq!(format_bar(0.0, 100.0, 4), "░░░░");
        assert_eq!(format_bar(10.0, 0.0, 4), "░░░░");
    }

    #[test]
    fn test_progress_is_capped() {
        assert_eq!(format_progress(250.0, 5), "█████");
    }

    #[test]
    fn test_truncate() {
        assert_eq!(truncate("Groceries", 20), "Groceries");
        assert_eq!(truncate("Bills & Utilities", 12), "Bills & U...");
        assert_eq!(truncate("Café au lait", 7), "Café...");
    }
}
