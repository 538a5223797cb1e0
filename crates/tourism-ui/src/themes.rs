use ratatui::style::{Color, Modifier, Style};
use tourism_core::color_scale::{hex_to_rgb, rank_color};

/// Terminal background type detection.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum BackgroundType {
    Dark,
    Light,
    Unknown,
}

/// Detect terminal background type from the `COLORFGBG` environment variable.
///
/// The variable has the format `"foreground;background"`. Background values
/// 0–6 are considered dark; 7–15 are considered light. If the variable is
/// absent or unparseable, `BackgroundType::Dark` is returned.
pub fn detect_background() -> BackgroundType {
    if let Ok(val) = std::env::var("COLORFGBG") {
        if let Some(bg) = val.split(';').next_back() {
            if let Ok(bg_num) = bg.parse::<u8>() {
                return if bg_num <= 6 {
                    BackgroundType::Dark
                } else {
                    BackgroundType::Light
                };
            }
        }
    }
    BackgroundType::Dark
}

/// Convert a `#rrggbb` string into a 24-bit terminal colour.
///
/// Malformed input yields [`Color::Reset`].
pub fn hex_color(hex: &str) -> Color {
    hex_to_rgb(hex)
        .map(|(r, g, b)| Color::Rgb(r, g, b))
        .unwrap_or(Color::Reset)
}

/// ANSI stand-ins for the rank palette, used by the classic theme.
const CLASSIC_RANK_COLORS: [Color; 6] = [
    Color::Cyan,
    Color::Green,
    Color::Yellow,
    Color::Magenta,
    Color::Blue,
    Color::Red,
];

/// Complete theme definition carrying all UI styles used by the dashboard.
#[derive(Debug, Clone)]
pub struct Theme {
    // ── Header ───────────────────────────────────────────────────────────────
    pub header: Style,
    pub header_sparkle: Style,
    pub separator: Style,

    // ── Text ─────────────────────────────────────────────────────────────────
    pub text: Style,
    pub dim: Style,
    pub bold: Style,
    pub label: Style,
    pub value: Style,

    // ── Status ───────────────────────────────────────────────────────────────
    pub info: Style,
    pub warning: Style,
    pub error: Style,

    // ── Caption / bars ───────────────────────────────────────────────────────
    /// Monthly headline ("N Tourists Have Visited Canada on ...").
    pub caption: Style,
    /// Unfilled portion of a visitor bar.
    pub bar_empty: Style,
    /// Count printed after a bar.
    pub bar_label: Style,
    /// Highlight for the selected region.
    pub selected: Style,

    // ── Table ────────────────────────────────────────────────────────────────
    pub table_header: Style,
    pub table_border: Style,
    pub table_row: Style,
    pub table_row_alt: Style,
    pub table_total: Style,

    /// Render data colours as 24-bit RGB; `false` maps them onto ANSI colours.
    pub truecolor: bool,
}

impl Theme {
    // ── Constructors ─────────────────────────────────────────────────────────

    /// Dark-background terminal theme (default).
    pub fn dark() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Yellow),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::Gray),
            value: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Cyan),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            caption: Style::default()
                .fg(Color::White)
                .add_modifier(Modifier::BOLD),
            bar_empty: Style::default().fg(Color::DarkGray),
            bar_label: Style::default().fg(Color::Gray),
            selected: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(Color::Cyan)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default()
                .fg(Color::Yellow)
                .add_modifier(Modifier::BOLD),

            truecolor: true,
        }
    }

    /// Light-background terminal theme.
    ///
    /// Uses dark colours for text so that content remains legible against a
    /// white/light-grey terminal canvas.
    pub fn light() -> Self {
        Self {
            header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            header_sparkle: Style::default().fg(Color::Magenta),
            separator: Style::default().fg(Color::Gray),

            text: Style::default().fg(Color::Black),
            dim: Style::default().fg(Color::Gray),
            bold: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            label: Style::default().fg(Color::DarkGray),
            value: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),

            info: Style::default().fg(Color::Blue),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            caption: Style::default()
                .fg(Color::Black)
                .add_modifier(Modifier::BOLD),
            bar_empty: Style::default().fg(Color::Gray),
            bar_label: Style::default().fg(Color::DarkGray),
            selected: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            table_header: Style::default()
                .fg(Color::Blue)
                .add_modifier(Modifier::BOLD),
            table_border: Style::default().fg(Color::Gray),
            table_row: Style::default().fg(Color::Black),
            table_row_alt: Style::default().fg(Color::DarkGray),
            table_total: Style::default()
                .fg(Color::Magenta)
                .add_modifier(Modifier::BOLD),

            truecolor: true,
        }
    }

    /// Classic terminal theme using only the basic ANSI palette.
    ///
    /// No bold modifiers, and data colours are mapped onto ANSI colours so it
    /// works on terminals without 24-bit support.
    pub fn classic() -> Self {
        Self {
            header: Style::default().fg(Color::Cyan),
            header_sparkle: Style::default().fg(Color::White),
            separator: Style::default().fg(Color::DarkGray),

            text: Style::default().fg(Color::White),
            dim: Style::default().fg(Color::DarkGray),
            bold: Style::default().fg(Color::White),
            label: Style::default().fg(Color::Gray),
            value: Style::default().fg(Color::White),

            info: Style::default().fg(Color::Cyan),
            warning: Style::default().fg(Color::Yellow),
            error: Style::default().fg(Color::Red),

            caption: Style::default().fg(Color::White),
            bar_empty: Style::default().fg(Color::DarkGray),
            bar_label: Style::default().fg(Color::White),
            selected: Style::default().fg(Color::Yellow),

            table_header: Style::default().fg(Color::Cyan),
            table_border: Style::default().fg(Color::DarkGray),
            table_row: Style::default().fg(Color::White),
            table_row_alt: Style::default().fg(Color::Gray),
            table_total: Style::default().fg(Color::Yellow),

            truecolor: false,
        }
    }

    /// Choose a theme automatically based on the detected terminal background.
    pub fn auto_detect() -> Self {
        match detect_background() {
            BackgroundType::Light => Self::light(),
            _ => Self::dark(),
        }
    }

    /// Construct a theme by name. Falls back to `auto_detect` for unknown
    /// names.
    pub fn from_name(name: &str) -> Self {
        match name {
            "light" => Self::light(),
            "dark" => Self::dark(),
            "classic" => Self::classic(),
            _ => Self::auto_detect(),
        }
    }

    // ── Style helpers ────────────────────────────────────────────────────────

    /// Foreground style for the bar/share at rank position `rank`.
    pub fn rank_style(&self, rank: usize) -> Style {
        if self.truecolor {
            Style::default().fg(hex_color(rank_color(rank)))
        } else {
            Style::default().fg(CLASSIC_RANK_COLORS[rank % CLASSIC_RANK_COLORS.len()])
        }
    }

    /// Foreground style for a visitor-threshold swatch.
    ///
    /// The classic theme buckets the blue ramp by lightness.
    pub fn swatch_style(&self, hex: &str) -> Style {
        if self.truecolor {
            return Style::default().fg(hex_color(hex));
        }
        let color = match hex_to_rgb(hex) {
            Some((r, g, b)) => {
                let lightness = (u32::from(r) + u32::from(g) + u32::from(b)) / 3;
                if lightness >= 200 {
                    Color::White
                } else if lightness >= 120 {
                    Color::Cyan
                } else {
                    Color::Blue
                }
            }
            None => Color::Reset,
        };
        Style::default().fg(color)
    }
}

// ── Tests ─────────────────────────────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_dark_theme_creation() {
        let t = Theme::dark();
        assert_eq!(t.header.fg, Some(Color::Cyan));
        assert_eq!(t.warning.fg, Some(Color::Yellow));
        assert_eq!(t.error.fg, Some(Color::Red));
        assert!(t.truecolor);
    }

    #[test]
    fn test_light_theme_creation() {
        let t = Theme::light();
        assert_eq!(t.header.fg, Some(Color::Blue));
        assert_eq!(t.text.fg, Some(Color::Black));
        assert_eq!(t.table_row.fg, Some(Color::Black));
    }

    #[test]
    fn test_classic_theme_creation() {
        let t = Theme::classic();
        assert!(!t.bold.add_modifier.contains(Modifier::BOLD));
        assert!(!t.header.add_modifier.contains(Modifier::BOLD));
        assert_eq!(t.table_total.fg, Some(Color::Yellow));
        assert!(!t.truecolor);
    }

    #[test]
    fn test_from_name() {
        assert_eq!(Theme::from_name("dark").header.fg, Some(Color::Cyan));
        assert_eq!(Theme::from_name("light").header.fg, Some(Color::Blue));
        assert!(!Theme::from_name("classic").truecolor);
    }

    #[test]
    fn test_from_name_unknown_falls_back() {
        let t = Theme::from_name("does-not-exist");
        assert!(t.header.fg.is_some());
    }

    #[test]
    fn test_hex_color() {
        assert_eq!(hex_color("#08306b"), Color::Rgb(0x08, 0x30, 0x6b));
        assert_eq!(hex_color("blue"), Color::Reset);
    }

    #[test]
    fn test_rank_style_truecolor_uses_palette() {
        let t = Theme::dark();
        assert_eq!(t.rank_style(0).fg, Some(hex_color(rank_color(0))));
        assert_eq!(t.rank_style(13).fg, Some(hex_color(rank_color(13))));
    }

    #[test]
    fn test_rank_style_classic_cycles_ansi() {
        let t = Theme::classic();
        assert_eq!(t.rank_style(0).fg, Some(Color::Cyan));
        assert_eq!(t.rank_style(6).fg, Some(Color::Cyan));
        assert_eq!(t.rank_style(1).fg, Some(Color::Green));
    }

    #[test]
    fn test_swatch_style_classic_buckets_by_lightness() {
        let t = Theme::classic();
        assert_eq!(t.swatch_style("#ffffff").fg, Some(Color::White));
        assert_eq!(t.swatch_style("#6daed5").fg, Some(Color::Cyan));
        assert_eq!(t.swatch_style("#08306b").fg, Some(Color::Blue));
    }

    #[test]
    fn test_swatch_style_truecolor() {
        let t = Theme::dark();
        assert_eq!(t.swatch_style("#4b97c9").fg, Some(Color::Rgb(0x4b, 0x97, 0xc9)));
    }
}
