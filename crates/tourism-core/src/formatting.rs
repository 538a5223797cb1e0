/// Format a visitor count with thousands separators.
///
/// # Examples
///
/// ```
/// use tourism_core::formatting::format_count;
///
/// assert_eq!(format_count(0), "0");
/// assert_eq!(format_count(800_000), "800,000");
/// assert_eq!(format_count(1_234_567), "1,234,567");
/// ```
pub fn format_count(value: u64) -> String {
    group_thousands(&value.to_string())
}

/// Whole-percent share of `part` in `total`, rounded half up.
///
/// ```
/// use tourism_core::formatting::share_percent;
///
/// assert_eq!(share_percent(500_000, 800_000), 63);
/// assert_eq!(share_percent(1, 0), 0);
/// ```
pub fn share_percent(part: u64, total: u64) -> u32 {
    if total == 0 {
        return 0;
    }
    // Integer form of floor(part * 100 / total + 0.5).
    let scaled = (u128::from(part) * 200 + u128::from(total)) / (u128::from(total) * 2);
    u32::try_from(scaled).unwrap_or(u32::MAX)
}

// ── Internal helpers ──────────────────────────────────────────────────────────

/// Insert commas every three digits from the right of an integer string.
fn group_thousands(s: &str) -> String {
    if s.len() <= 3 {
        return s.to_string();
    }
    let mut result = String::with_capacity(s.len() + s.len() / 3);
    let remainder = s.len() % 3;
    for (i, c) in s.chars().enumerate() {
        if i != 0 && (i % 3 == remainder) {
            result.push(',');
        }
        result.push(c);
    }
    result
}

// ── Tests ──────────────────────────────────────────────────────────────────────
