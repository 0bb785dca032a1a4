//! Deterministic palette assignment.
//!
//! Hues are stepped by 137 degrees per index. 137 is coprime to 360, so
//! consecutive indices land far apart on the wheel and small palettes get
//! maximal perceptual spread without a lookup table. The same index always
//! yields the same color, which keeps charts stable across refreshes.

/// Fixed border color for the highlighted (current user) subject.
pub const HIGHLIGHT_BORDER: &str = "rgba(75, 192, 192, 1)";

/// Fixed fill color for the highlighted (current user) subject.
pub const HIGHLIGHT_FILL: &str = "rgba(75, 192, 192, 0.7)";

/// A stable palette slot derived from a series index.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ColorAssignment {
    /// Hue in degrees, `0..360`.
    pub hue: u16,
}

impl ColorAssignment {
    /// Opaque CSS color string for borders and lines.
    pub fn rgb(&self) -> String {
        format!("hsl({}, 70%, 60%)", self.hue)
    }

    /// Translucent CSS color string for fills.
    pub fn rgba(&self, alpha: f32) -> String {
        format!("hsla({}, 70%, 60%, {})", self.hue, alpha)
    }
}

/// Maps a series index to its palette slot: `hue = (index * 137) % 360`.
pub fn assign_color(index: usize) -> ColorAssignment {
    ColorAssignment {
        hue: ((index * 137) % 360) as u16,
    }
}
