// Text formatters
//
// Shared formatting utilities for star counts and column-limited text.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Format a star count with commas for readability
///
/// # Examples
/// ```ignore
/// assert_eq!(format_number(228000), "228,000");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: u64) -> String {
    let s = n.to_string();
    let mut result = String::new();

    for (count, ch) in s.chars().rev().enumerate() {
        if count > 0 && count % 3 == 0 {
            result.insert(0, ',');
        }
        result.insert(0, ch);
    }

    result
}

/// Format a number compactly with K/M suffixes
///
/// Used in dropdown rows where the star column is narrow.
pub fn format_compact_number(n: u64) -> String {
    if n >= 1_000_000 {
        format!("{:.1}M", n as f64 / 1_000_000.0)
    } else if n >= 1_000 {
        format!("{:.1}K", n as f64 / 1_000.0)
    } else {
        n.to_string()
    }
}

/// Cut `text` to at most `max_width` terminal columns, ending in `…` if cut
pub fn truncate_to_width(text: &str, max_width: usize) -> String {
    if text.width() <= max_width {
        return text.to_string();
    }
    if max_width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = ch.width().unwrap_or(0);
        // Reserve one column for the ellipsis
        if used + w > max_width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_number() {
        assert_eq!(format_number(0), "0");
        assert_eq!(format_number(999), "999");
        assert_eq!(format_number(228000), "228,000");
        assert_eq!(format_number(1234567), "1,234,567");
    }

    #[test]
    fn test_format_compact_number() {
        assert_eq!(format_compact_number(42), "42");
        assert_eq!(format_compact_number(1_500), "1.5K");
        assert_eq!(format_compact_number(228_000), "228.0K");
        assert_eq!(format_compact_number(2_500_000), "2.5M");
    }

    #[test]
    fn test_truncate_to_width() {
        assert_eq!(truncate_to_width("react", 10), "react");
        assert_eq!(truncate_to_width("react-native", 6), "react…");
        assert_eq!(truncate_to_width("abc", 0), "");
        // Wide characters count as two columns
        assert_eq!(truncate_to_width("日本語", 4), "日…");
    }
}
