//! Text helpers shared by the player parser and the renderer.

use std::time::Duration;


const ELLIPSIS: &str = "...";

/// Limit `text` to `max` characters, replacing the tail with `...` when cut.
///
/// Counts chars rather than bytes so multi-byte titles are never split
/// mid code point. The result is at most `max` characters long.
pub fn truncate(text: &str, max: usize) -> String {
    if text.chars().count() <= max {
        return text.to_string();
    }

    let ellipsis_len = ELLIPSIS.chars().count();
    if max < ellipsis_len {
        return text.chars().take(max).collect();
    }

    let mut out: String = text.chars().take(max - ellipsis_len).collect();
    out.push_str(ELLIPSIS);
    out
}

/// Format a `Duration` as `MM:SS`. Minutes keep counting past 59.
pub fn format_mmss(d: Duration) -> String {
    let secs = d.as_secs();
    format!("{:02}:{:02}", secs / 60, secs % 60)
}

/// Number of filled cells in a `width`-cell progress bar.
///
/// Linear in `position / length`, rounded down and clamped to `0..=width`.
/// An unknown (zero) length shows an empty bar.
pub fn progress_filled(position: Duration, length: Duration, width: usize) -> usize {
    if length.is_zero() || width == 0 {
        return 0;
    }

    let ratio = position.as_secs_f64() / length.as_secs_f64();
    let filled = (ratio * width as f64).floor();
    if filled <= 0.0 {
        0
    } else {
        (filled as usize).min(width)
    }
}
