//! Threshold and categorical colour scales for visitor counts.

use crate::constants::{RANK_PALETTE, VISITOR_COLORS, VISITOR_THRESHOLDS};

/// Maps a value to a colour by the bucket it falls into.
///
/// With `n` thresholds the range holds `n + 1` colours: values below the first
/// threshold take `range[0]`, and a value equal to a threshold belongs to the
/// bucket that starts there.
#[derive(Debug, Clone, Copy)]
pub struct ThresholdScale {
    domain: &'static [u64],
    range: &'static [&'static str],
}

impl ThresholdScale {
    /// Scale used to colour regions by visitor count.
    pub fn visitors() -> Self {
        Self {
            domain: &VISITOR_THRESHOLDS,
            range: &VISITOR_COLORS,
        }
    }

    /// Index of the bucket `value` falls into.
    pub fn bucket(&self, value: u64) -> usize {
        self.domain.partition_point(|&t| t <= value)
    }

    /// Hex colour for `value`.
    ///
    /// ```
    /// use tourism_core::color_scale::ThresholdScale;
    ///
    /// let scale = ThresholdScale::visitors();
    /// assert_eq!(scale.color_for(0), "#f7fbff");
    /// assert_eq!(scale.color_for(2_000_000), "#08306b");
    /// ```
    pub fn color_for(&self, value: u64) -> &'static str {
        self.range[self.bucket(value)]
    }

    /// Legend entries: each threshold with the colour of the bucket it opens.
    pub fn legend(&self) -> impl Iterator<Item = (u64, &'static str)> {
        let scale = *self;
        self.domain.iter().map(move |&t| (t, scale.color_for(t)))
    }
}

/// Colour for the item at zero-based rank `index`, cycling through the palette.
pub fn rank_color(index: usize) -> &'static str {
    RANK_PALETTE[index % RANK_PALETTE.len()]
}

/// Parse a `#rrggbb` string into its RGB components.
pub fn hex_to_rgb(hex: &str) -> Option<(u8, u8, u8)> {
    let digits = hex.strip_prefix('#')?;
    if digits.len() != 6 || !digits.is_ascii() {
        return None;
    }
    let r = u8::from_str_radix(&digits[0..2], 16).ok()?;
    let g = u8::from_str_radix(&digits[2..4], 16).ok()?;
    let b = u8::from_str_radix(&digits[4..6], 16).ok()?;
    Some((r, g, b))
}
