//! Color utility functions for backdrop and title rendering.

use ratatui::style::Color;

/// Title gradient stops: purple, pink, blue.
const TITLE_STOPS: [(u8, u8, u8); 3] = [(147, 51, 234), (219, 39, 119), (37, 99, 235)];

/// Page wash stops: pink-50, purple-50, blue-50.
pub(crate) const WASH_STOPS: [(u8, u8, u8); 3] =
    [(253, 242, 248), (250, 245, 255), (239, 246, 255)];

/// Sample the title gradient at `t` (0.0-1.0).
pub fn title_gradient(t: f32) -> Color {
    sample_stops(&TITLE_STOPS, t)
}

/// Sample a three-stop gradient at `t` (0.0-1.0).
pub(crate) fn sample_stops(stops: &[(u8, u8, u8); 3], t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    if t < 0.5 {
        lerp_rgb(stops[0], stops[1], t * 2.0)
    } else {
        lerp_rgb(stops[1], stops[2], (t - 0.5) * 2.0)
    }
}

/// Linear blend between two RGB triples.
pub fn lerp_rgb(from: (u8, u8, u8), to: (u8, u8, u8), t: f32) -> Color {
    let t = t.clamp(0.0, 1.0);
    let mix = |a: u8, b: u8| (a as f32 + (b as f32 - a as f32) * t).round() as u8;
    Color::Rgb(mix(from.0, to.0), mix(from.1, to.1), mix(from.2, to.2))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_gradient_endpoints() {
        assert_eq!(title_gradient(0.0), Color::Rgb(147, 51, 234));
        assert_eq!(title_gradient(0.5), Color::Rgb(219, 39, 119));
        assert_eq!(title_gradient(1.0), Color::Rgb(37, 99, 235));
        assert_eq!(title_gradient(7.0), title_gradient(1.0));
    }

    #[test]
    fn test_lerp_rgb_clamps() {
        assert_eq!(lerp_rgb((0, 0, 0), (200, 100, 50), 0.5), Color::Rgb(100, 50, 25));
        assert_eq!(lerp_rgb((0, 0, 0), (200, 100, 50), 2.0), Color::Rgb(200, 100, 50));
    }
}
