//! Pastel paper backdrop (stateless, computed from position only).

use journal_core::BackgroundStyle;
use ratatui::{
    style::{Color, Style},
    text::Span,
};

use crate::chars::{ACCENT_DOTS, PAPER_DOT};
use crate::color::{WASH_STOPS, sample_stops};

/// Horizontal spacing of the paper dots.
const DOT_SPACING_X: u16 = 4;

/// Vertical spacing of the paper dots.
const DOT_SPACING_Y: u16 = 2;

/// Soft radial tints: center (fractions of the page), tint color.
const TINTS: [((f32, f32), (f32, f32, f32)); 3] = [
    ((0.2, 0.2), (255.0, 182.0, 193.0)),
    ((0.8, 0.8), (173.0, 216.0, 230.0)),
    ((0.4, 0.6), (221.0, 160.0, 221.0)),
];

/// Strength of a tint at its center.
const TINT_ALPHA: f32 = 0.1;

/// Compute the wash color of a single cell.
pub fn wash_color(x: u16, y: u16, width: u16, height: u16) -> Color {
    let x_norm = x as f32 / width.max(1) as f32;
    let y_norm = y as f32 / height.max(1) as f32;

    // Diagonal pink -> purple -> blue
    let Color::Rgb(r, g, b) = sample_stops(&WASH_STOPS, (x_norm + y_norm) / 2.0) else {
        return Color::Reset;
    };
    let (mut r, mut g, mut b) = (r as f32, g as f32, b as f32);

    for ((cx, cy), (tr, tg, tb)) in TINTS {
        let dist = ((x_norm - cx).powi(2) + (y_norm - cy).powi(2)).sqrt();
        // Fades out at half the page, like a radial gradient to 50%
        let alpha = TINT_ALPHA * (1.0 - dist / 0.5).max(0.0);
        r += (tr - r) * alpha;
        g += (tg - g) * alpha;
        b += (tb - b) * alpha;
    }

    Color::Rgb(r as u8, g as u8, b as u8)
}

/// Accent dot at a cell, if any: glyph and color.
fn accent_dot(x: u16, y: u16, width: u16, height: u16) -> Option<(char, Color)> {
    let right = |offset: u16| width.saturating_sub(offset);
    let bottom = |offset: u16| height.saturating_sub(offset);

    let dots = [
        ((2, 1), ACCENT_DOTS[1], Color::Rgb(249, 168, 212)),
        ((right(5), 2), ACCENT_DOTS[0], Color::Rgb(216, 180, 254)),
        ((4, bottom(3)), ACCENT_DOTS[2], Color::Rgb(147, 197, 253)),
        ((right(3), bottom(2)), ACCENT_DOTS[1], Color::Rgb(253, 224, 71)),
    ];

    dots.into_iter()
        .find(|((dx, dy), _, _)| *dx == x && *dy == y)
        .map(|(_, ch, color)| (ch, color))
}

/// Render a paper backdrop character.
pub fn render_paper_char(
    x: u16,
    y: u16,
    width: u16,
    height: u16,
    wash: Color,
    style: BackgroundStyle,
) -> Span<'static> {
    let base = Style::new().bg(wash);

    if style != BackgroundStyle::Dotted {
        return Span::styled(" ", base);
    }

    if let Some((ch, color)) = accent_dot(x, y, width, height) {
        return Span::styled(ch.to_string(), base.fg(color));
    }

    if x % DOT_SPACING_X == 0 && y % DOT_SPACING_Y == 0 {
        Span::styled(PAPER_DOT.to_string(), base.fg(Color::Rgb(214, 208, 222)))
    } else {
        Span::styled(" ", base)
    }
}
