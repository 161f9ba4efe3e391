//! Icon glyphs and ASCII art for the journal app.

/// Height of the mascot art in rows, including the row freed by a bounce.
pub const MASCOT_HEIGHT: usize = 4;

/// Width of the mascot art in columns.
pub const MASCOT_WIDTH: usize = 7;

/// Pen mascot (3 lines tall, 7 chars wide)
const PEN: [&str; 3] = [
    "    _/|", //
    "  _/ / ",
    " /__/  ",
];

/// Smiling mascot (3 lines tall, 7 chars wide)
const SMILE: [&str; 3] = [
    " .---. ", //
    "( ^‿^ )",
    " '---' ",
];

const BLANK: &str = "       ";

/// Icons used in card headers and buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Icon {
    Heart,
    Star,
    StarFilled,
    Sparkles,
    PenTool,
    Smile,
    Coffee,
    Music,
    Camera,
    Palette,
    BookOpen,
}

impl Icon {
    /// Terminal glyph for the icon.
    pub fn glyph(self) -> &'static str {
        match self {
            Icon::Heart => "♥",
            Icon::Star => "☆",
            Icon::StarFilled => "★",
            Icon::Sparkles => "✦",
            Icon::PenTool => "✎",
            Icon::Smile => "☺",
            Icon::Coffee => "☕",
            Icon::Music => "♪",
            Icon::Camera => "◙",
            Icon::Palette => "✿",
            Icon::BookOpen => "▤",
        }
    }
}

/// Which mascot to draw beside the title.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Mascot {
    Pen,
    Smile,
}

/// Build the mascot rows.
///
/// A resting mascot sits on the bottom row; a bouncing one is lifted by a
/// row, leaving the bottom blank.
pub fn build_mascot_art(mascot: Mascot, bouncing: bool) -> Vec<String> {
    let art = match mascot {
        Mascot::Pen => PEN,
        Mascot::Smile => SMILE,
    };

    let mut lines = Vec::with_capacity(MASCOT_HEIGHT);
    if !bouncing {
        lines.push(BLANK.to_string());
    }
    lines.extend(art.iter().map(|row| row.to_string()));
    if bouncing {
        lines.push(BLANK.to_string());
    }
    lines
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_mascot_height_is_stable() {
        for mascot in [Mascot::Pen, Mascot::Smile] {
            assert_eq!(build_mascot_art(mascot, false).len(), MASCOT_HEIGHT);
            assert_eq!(build_mascot_art(mascot, true).len(), MASCOT_HEIGHT);
        }
    }

    #[test]
    fn test_bounce_lifts_mascot() {
        let resting = build_mascot_art(Mascot::Smile, false);
        let bouncing = build_mascot_art(Mascot::Smile, true);
        assert_eq!(resting[0].trim(), "");
        assert_eq!(bouncing[MASCOT_HEIGHT - 1].trim(), "");
        assert_eq!(resting[1], bouncing[0]);
    }

    #[test]
    fn test_mascot_rows_have_fixed_width() {
        for row in PEN.iter().chain(SMILE.iter()) {
            assert_eq!(row.chars().count(), MASCOT_WIDTH);
        }
    }
}
