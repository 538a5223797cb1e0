//! Plain-text rendering of a monthly summary for the `summary` view.

use std::fmt::Write;

use tourism_core::formatting::format_count;
use tourism_data::summary::MonthlySummary;

/// Render the caption followed by a ranked region table.
///
/// ```text
/// 800,000 Tourists Have Visited Canada on Jul 2010
///
///  #  Region                      Visitors  Share
///  1  Ontario                      500,000    63%
///  2  Quebec                       300,000    38%
///     TOTAL                        800,000
/// ```
pub fn render_summary_text(summary: &MonthlySummary) -> String {
    let mut out = String::new();
    // Writing into a String cannot fail.
    let _ = writeln!(out, "{}", summary.caption);
    let _ = writeln!(out);

    if summary.is_empty() {
        let _ = writeln!(out, "No regions reported for this month.");
        return out;
    }

    let _ = writeln!(out, "{:>2}  {:<26}{:>10}  {:>5}", "#", "Region", "Visitors", "Share");
    for (rank, share) in summary.shares.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}  {:<26}{:>10}  {:>4}%",
            rank + 1,
            share.region,
            format_count(share.visitors),
            share.percent
        );
    }
    let _ = writeln!(out, "{:>2}  {:<26}{:>10}", "", "TOTAL", format_count(summary.total));
    out
}
