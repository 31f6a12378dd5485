//! Helper functions and constants for UI rendering
//!
//! Contains utility functions for truncation, icons, and common UI patterns.

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

use crate::models::{MomentType, Visibility};

/// Spinner frames for loading animation
pub const SPINNER_FRAMES: [&str; 10] = ["⠋", "⠙", "⠹", "⠸", "⠼", "⠴", "⠦", "⠧", "⠇", "⠏"];

/// Ticks per spinner frame (the event loop ticks every 16ms)
const TICKS_PER_FRAME: u64 = 5;

pub fn spinner_frame(tick: u64) -> &'static str {
    SPINNER_FRAMES[((tick / TICKS_PER_FRAME) % SPINNER_FRAMES.len() as u64) as usize]
}

/// Returns the icon for a moment type
pub fn moment_icon(kind: MomentType) -> &'static str {
    match kind {
        MomentType::Photo => "📷",
        MomentType::Art => "🎨",
        MomentType::Audio => "🎵",
        MomentType::Other => "•",
    }
}

pub fn visibility_badge(visibility: Visibility) -> String {
    format!("[{}]", visibility.label())
}

/// Truncate a string to fit `max_width` terminal columns, adding "..." when cut.
///
/// Width is measured in display columns, so wide characters count double.
pub fn truncate_string(s: &str, max_width: usize) -> String {
    if s.width() <= max_width {
        return s.to_string();
    }
    if max_width <= 3 {
        return ".".repeat(max_width);
    }

    let budget = max_width - 3;
    let mut used = 0;
    let mut out = String::new();
    for c in s.chars() {
        let w = c.width().unwrap_or(0);
        if used + w > budget {
            break;
        }
        used += w;
        out.push(c);
    }
    out.push_str("...");
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_spinner_cycles() {
        assert_eq!(spinner_frame(0), "⠋");
        assert_eq!(spinner_frame(TICKS_PER_FRAME), "⠙");
        assert_eq!(spinner_frame(TICKS_PER_FRAME * 10), "⠋");
    }

    #[test]
    fn test_truncate_string() {
        assert_eq!(truncate_string("hello", 10), "hello");
        assert_eq!(truncate_string("hello world", 8), "hello...");
        assert_eq!(truncate_string("hello", 2), "..");
    }

    #[test]
    fn test_truncate_counts_wide_chars() {
        // Each CJK character is two columns wide
        assert_eq!(truncate_string("日本語テキスト", 9), "日本語...");
    }

    #[test]
    fn test_moment_icon_and_badge() {
        assert_eq!(moment_icon(MomentType::Photo), "📷");
        assert_eq!(moment_icon(MomentType::Other), "•");
        assert_eq!(visibility_badge(Visibility::Private), "[private]");
    }
}
