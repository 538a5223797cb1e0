//! Monthly dashboard screen.
//!
//! Stacks the header, the monthly caption and the share bar above two panels:
//! a ranked visitor bar chart on the left and the regional colour table (the
//! terminal rendition of the choropleth map) on the right. The map's threshold
//! legend, a tooltip line for the selected region and the key hints close the
//! screen.

use ratatui::{
    layout::{Constraint, Direction, Layout, Rect},
    text::{Line, Span, Text},
    widgets::{Block, Borders, Cell, Paragraph, Row, Table, Wrap},
    Frame,
};

use tourism_core::color_scale::ThresholdScale;
use tourism_core::formatting::format_count;
use tourism_data::summary::MonthlySummary;

use crate::components::fit_width;
use crate::components::header::Header;
use crate::components::share_bar::{ShareBar, VisitorBar};
use crate::themes::Theme;

/// Display columns reserved for region names in the bar chart.
const NAME_COLUMNS: usize = 22;
/// Display columns reserved for the marker, spacing and count label.
const BAR_CHROME_COLUMNS: u16 = 2 + 1 + 12;

/// `"Jul 2010"` for the summary's period.
pub fn period_label(summary: &MonthlySummary) -> String {
    format!(
        "{} {}",
        tourism_core::constants::month_label(summary.period.month).unwrap_or("?"),
        summary.period.year
    )
}

/// Render the full dashboard for a non-empty month.
///
/// `selected` is a rank position in the sorted slice; out-of-range values
/// simply highlight nothing.
pub fn render_dashboard(
    frame: &mut Frame,
    area: Rect,
    summary: &MonthlySummary,
    selected: usize,
    theme: &Theme,
) {
    let chunks = Layout::default()
        .direction(Direction::Vertical)
        .constraints([
            Constraint::Length(4),
            Constraint::Length(1),
            Constraint::Length(1),
            Constraint::Min(8),
            Constraint::Length(2),
            Constraint::Length(1),
            Constraint::Length(1),
        ])
        .split(area);

    let label = period_label(summary);
    let header = Header::new(&label, summary.records.len(), theme);
    frame.render_widget(Paragraph::new(Text::from(header.to_lines())), chunks[0]);

    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(summary.caption.clone(), theme.caption))),
        chunks[1],
    );

    let mut share_bar = ShareBar::new(&summary.shares, theme);
    share_bar.width = chunks[2].width.saturating_sub(1).min(50);
    frame.render_widget(Paragraph::new(share_bar.to_line()), chunks[2]);

    let body = Layout::default()
        .direction(Direction::Horizontal)
        .constraints([Constraint::Percentage(55), Constraint::Percentage(45)])
        .split(chunks[3]);

    render_bar_chart(frame, body[0], summary, selected, theme);
    render_region_table(frame, body[1], summary, theme);

    frame.render_widget(
        Paragraph::new(build_legend_line(theme)).wrap(Wrap { trim: true }),
        chunks[4],
    );

    let tooltip = summary.tooltip(selected).unwrap_or_default();
    frame.render_widget(
        Paragraph::new(Line::from(Span::styled(tooltip, theme.info))),
        chunks[5],
    );

    frame.render_widget(Paragraph::new(key_hints(theme)), chunks[6]);
}

/// Map legend: one swatch per visitor threshold, `"0"` then `"~ 500"` up to
/// `"~ 1,700,000"`, closed by the unit.
pub fn build_legend_line(theme: &Theme) -> Line<'static> {
    let mut spans = Vec::new();
    for (threshold, color) in ThresholdScale::visitors().legend() {
        let label = if threshold == 0 {
            "0".to_string()
        } else {
            format!("~ {}", format_count(threshold))
        };
        spans.push(Span::styled("█", theme.swatch_style(color)));
        spans.push(Span::styled(format!(" {label} "), theme.dim));
    }
    spans.push(Span::styled("persons", theme.label));
    Line::from(spans)
}

/// Ranked bars, one line per region of the month.
pub fn build_bar_lines<'a>(
    summary: &MonthlySummary,
    selected: usize,
    bar_width: u16,
    theme: &'a Theme,
) -> Vec<Line<'a>> {
    let max = summary.shares.first().map_or(0, |s| s.visitors);

    summary
        .shares
        .iter()
        .enumerate()
        .map(|(rank, share)| {
            let is_selected = rank == selected;
            let (marker, name_style) = if is_selected {
                ("▶ ", theme.selected)
            } else {
                ("  ", theme.label)
            };

            let bar = VisitorBar::new(share.visitors, max, theme.rank_style(rank), theme)
                .with_width(bar_width)
                .to_line();

            let mut spans = vec![
                Span::styled(marker, theme.selected),
                Span::styled(fit_width(&share.region, NAME_COLUMNS), name_style),
                Span::raw(" "),
            ];
            spans.extend(bar.spans);
            Line::from(spans)
        })
        .collect()
}

fn render_bar_chart(
    frame: &mut Frame,
    area: Rect,
    summary: &MonthlySummary,
    selected: usize,
    theme: &Theme,
) {
    let inner_width = area.width.saturating_sub(2);
    let bar_width = inner_width.saturating_sub(NAME_COLUMNS as u16 + BAR_CHROME_COLUMNS);
    let lines = build_bar_lines(summary, selected, bar_width, theme);

    frame.render_widget(
        Paragraph::new(Text::from(lines)).block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(" Visitors by Region "),
        ),
        area,
    );
}

fn render_region_table(frame: &mut Frame, area: Rect, summary: &MonthlySummary, theme: &Theme) {
    let header = Row::new(
        ["", "Region", "Visitors", "Share"]
            .iter()
            .map(|h| Cell::from(*h).style(theme.table_header)),
    )
    .height(1);

    let mut rows: Vec<Row> = summary
        .fills
        .iter()
        .enumerate()
        .map(|(i, fill)| {
            let style = if i % 2 == 0 {
                theme.table_row
            } else {
                theme.table_row_alt
            };
            let visitors = fill
                .visitors
                .map(format_count)
                .unwrap_or_else(|| "n/a".to_string());
            let share = summary
                .shares
                .iter()
                .find(|s| s.region == fill.region)
                .map(|s| format!("{}%", s.percent))
                .unwrap_or_default();

            Row::new(vec![
                Cell::from(Span::styled("██", theme.swatch_style(fill.color))),
                Cell::from(fill.region.clone()),
                Cell::from(visitors),
                Cell::from(share),
            ])
            .style(style)
        })
        .collect();

    rows.push(
        Row::new(vec![
            Cell::from(""),
            Cell::from("TOTAL"),
            Cell::from(format_count(summary.total)),
            Cell::from(if summary.is_empty() { "" } else { "100%" }),
        ])
        .style(theme.table_total),
    );

    let widths = [
        Constraint::Length(2),
        Constraint::Min(12),
        Constraint::Length(11),
        Constraint::Length(5),
    ];

    let table = Table::new(rows, widths)
        .header(header)
        .block(
            Block::default()
                .borders(Borders::ALL)
                .border_style(theme.table_border)
                .title(" Regional Map "),
        )
        .style(theme.text);

    frame.render_widget(table, area);
}

fn key_hints(theme: &Theme) -> Line<'static> {
    Line::from(vec![
        Span::styled("←/→", theme.value),
        Span::styled(" month  ", theme.dim),
        Span::styled("↑/↓", theme.value),
        Span::styled(" year  ", theme.dim),
        Span::styled("Tab", theme.value),
        Span::styled(" region  ", theme.dim),
        Span::styled("q", theme.value),
        Span::styled(" quit", theme.dim),
    ])
}

/// Render a "no data" placeholder when the selected month has no records.
pub fn render_no_data(frame: &mut Frame, area: Rect, period: &str, theme: &Theme) {
    let text = vec![
        Line::from(""),
        Line::from(Span::styled(
            format!("No tourism data for {period}"),
            theme.warning,
        )),
        Line::from(""),
        Line::from(Span::styled(
            "Use ←/→ to change month and ↑/↓ to change year.",
            theme.dim,
        )),
        Line::from(Span::styled("Press 'q' or Ctrl+C to exit", theme.dim)),
    ];
    frame.render_widget(
        Paragraph::new(Text::from(text)).block(
            Block::default()
                .borders(Borders::ALL)
                .title(" Canadian Tourism Dashboard "),
        ),
        area,
    );
}

// ── Tests ──────────────────────────────────────────────────────────────────────
