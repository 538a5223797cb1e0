//! Reusable line-level widgets.

pub mod header;
pub mod share_bar;

use unicode_width::{UnicodeWidthChar, UnicodeWidthStr};

/// Pad or truncate `text` to exactly `width` display columns.
///
/// Truncated text ends in `…`.
pub fn fit_width(text: &str, width: usize) -> String {
    let current = UnicodeWidthStr::width(text);
    if current <= width {
        return format!("{text}{}", " ".repeat(width - current));
    }
    if width == 0 {
        return String::new();
    }

    let mut out = String::new();
    let mut used = 0;
    for ch in text.chars() {
        let w = UnicodeWidthChar::width(ch).unwrap_or(0);
        if used + w > width - 1 {
            break;
        }
        out.push(ch);
        used += w;
    }
    out.push('…');
    used += 1;
    out.push_str(&" ".repeat(width.saturating_sub(used)));
    out
}
