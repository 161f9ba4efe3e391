//! Core types for the journal app.
//!
//! Holds the transient view state shared by the other crates: the sticky
//! note drag tracker, the virtual timer wheel and the effect scheduler that
//! drives the mascot bounce and sparkle bursts.

pub mod drag;
pub mod effects;
pub mod timer;

use ratatui::style::Color;
use serde::{Deserialize, Serialize};

pub use drag::{DragPosition, DragTracker, Tilt};
pub use effects::{EffectScheduler, Particle, Viewport};
pub use timer::{TimerEvent, TimerHandle, Timers};

/// Sticky note width in terminal cells.
pub const STICKY_NOTE_WIDTH: u16 = 14;

/// Sticky note height in terminal cells.
pub const STICKY_NOTE_HEIGHT: u16 = 6;

/// Accent palette used for the title bar, help keys and the sparkle button.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum AccentTheme {
    #[default]
    Lavender,
    Rose,
    Sky,
    Mint,
    Peach,
}

impl AccentTheme {
    /// Cycle to the next accent theme.
    pub fn next(&self) -> Self {
        match self {
            AccentTheme::Lavender => AccentTheme::Rose,
            AccentTheme::Rose => AccentTheme::Sky,
            AccentTheme::Sky => AccentTheme::Mint,
            AccentTheme::Mint => AccentTheme::Peach,
            AccentTheme::Peach => AccentTheme::Lavender,
        }
    }

    /// Convert theme to Ratatui Color.
    pub fn color(self) -> Color {
        match self {
            AccentTheme::Lavender => Color::Rgb(168, 85, 247),
            AccentTheme::Rose => Color::Rgb(236, 72, 153),
            AccentTheme::Sky => Color::Rgb(59, 130, 246),
            AccentTheme::Mint => Color::Rgb(34, 197, 94),
            AccentTheme::Peach => Color::Rgb(249, 115, 22),
        }
    }
}

/// Backdrop drawn behind the cards.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BackgroundStyle {
    /// Gradient wash with a dotted paper pattern and accent dots.
    #[default]
    Dotted,
    /// Gradient wash only.
    Plain,
    /// Terminal default background.
    None,
}

impl BackgroundStyle {
    /// Whether the pastel gradient wash is painted.
    pub fn has_wash(self) -> bool {
        !matches!(self, BackgroundStyle::None)
    }
}

/// Pastel tint of a content card.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum CardTint {
    Pink,
    Purple,
    Blue,
    Yellow,
    Green,
    Indigo,
    Orange,
}

impl CardTint {
    /// Light fill behind the card contents.
    pub fn wash(self) -> Color {
        match self {
            CardTint::Pink => Color::Rgb(252, 231, 243),
            CardTint::Purple => Color::Rgb(243, 232, 255),
            CardTint::Blue => Color::Rgb(219, 234, 254),
            CardTint::Yellow => Color::Rgb(254, 249, 195),
            CardTint::Green => Color::Rgb(220, 252, 231),
            CardTint::Indigo => Color::Rgb(224, 231, 255),
            CardTint::Orange => Color::Rgb(255, 237, 213),
        }
    }

    /// Card border and field outlines.
    pub fn border(self) -> Color {
        match self {
            CardTint::Pink => Color::Rgb(249, 168, 212),
            CardTint::Purple => Color::Rgb(216, 180, 254),
            CardTint::Blue => Color::Rgb(147, 197, 253),
            CardTint::Yellow => Color::Rgb(253, 224, 71),
            CardTint::Green => Color::Rgb(134, 239, 172),
            CardTint::Indigo => Color::Rgb(165, 180, 252),
            CardTint::Orange => Color::Rgb(253, 186, 116),
        }
    }

    /// Icons and selected options.
    pub fn accent(self) -> Color {
        match self {
            CardTint::Pink => Color::Rgb(236, 72, 153),
            CardTint::Purple => Color::Rgb(168, 85, 247),
            CardTint::Blue => Color::Rgb(59, 130, 246),
            CardTint::Yellow => Color::Rgb(234, 179, 8),
            CardTint::Green => Color::Rgb(34, 197, 94),
            CardTint::Indigo => Color::Rgb(99, 102, 241),
            CardTint::Orange => Color::Rgb(249, 115, 22),
        }
    }

    /// Titles and body text.
    pub fn ink(self) -> Color {
        match self {
            CardTint::Pink => Color::Rgb(157, 23, 77),
            CardTint::Purple => Color::Rgb(107, 33, 168),
            CardTint::Blue => Color::Rgb(30, 64, 175),
            CardTint::Yellow => Color::Rgb(133, 77, 14),
            CardTint::Green => Color::Rgb(22, 101, 52),
            CardTint::Indigo => Color::Rgb(55, 48, 163),
            CardTint::Orange => Color::Rgb(154, 52, 18),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_accent_cycle_returns_to_start() {
        let mut theme = AccentTheme::default();
        for _ in 0..5 {
            theme = theme.next();
        }
        assert_eq!(theme, AccentTheme::Lavender);
    }

    #[test]
    fn test_background_wash() {
        assert!(BackgroundStyle::Dotted.has_wash());
        assert!(BackgroundStyle::Plain.has_wash());
        assert!(!BackgroundStyle::None.has_wash());
    }
}
