//! Sparkle overlay (stateful, driven by the effect scheduler's batch).

use journal_core::Particle;
use ratatui::{
    Frame,
    style::{Color, Style},
};

use crate::chars::SPARKLE_FRAMES;
use crate::color::lerp_rgb;

/// How long each sparkle frame stays up.
const FRAME_MS: u64 = 120;

/// Shimmer stops: yellow-400 and amber-400.
const GOLD: (u8, u8, u8) = (250, 204, 21);
const AMBER: (u8, u8, u8) = (251, 191, 36);

/// Draw each particle over whatever is already in the frame.
///
/// Particles outside the frame (e.g. after the terminal shrank) are skipped.
pub fn render_sparkles(frame: &mut Frame, sparkles: &[Particle], elapsed_ms: u64) {
    let area = frame.area();
    let buf = frame.buffer_mut();

    for particle in sparkles {
        if particle.x >= area.right() || particle.y >= area.bottom() {
            continue;
        }

        // Offset each particle's phase by its id so the batch doesn't pulse in lockstep
        let step = (elapsed_ms / FRAME_MS).wrapping_add(particle.id) as usize;
        let ch = SPARKLE_FRAMES[step % SPARKLE_FRAMES.len()];

        let color = shimmer(step);
        if let Some(cell) = buf.cell_mut((particle.x, particle.y)) {
            cell.set_char(ch).set_style(Style::new().fg(color));
        }
    }
}

/// Warm yellow shimmer, cycling over three shades.
fn shimmer(step: usize) -> Color {
    lerp_rgb(GOLD, AMBER, (step % 3) as f32 / 2.0)
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn test_sparkles_drawn_inside_frame_only() {
        let mut terminal = Terminal::new(TestBackend::new(20, 10)).unwrap();
        let sparkles = [
            Particle { id: 0, x: 3, y: 4 },
            Particle { id: 1, x: 25, y: 4 },
        ];

        terminal
            .draw(|frame| render_sparkles(frame, &sparkles, 0))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(3, 4)].symbol(), "✦");
        let drawn = buffer
            .content()
            .iter()
            .filter(|cell| cell.symbol() != " ")
            .count();
        assert_eq!(drawn, 1);
        assert_eq!(buffer[(3, 4)].fg, Color::Rgb(250, 204, 21));
    }

    #[test]
    fn test_shimmer_cycles_between_stops() {
        assert_eq!(shimmer(0), Color::Rgb(250, 204, 21));
        assert_eq!(shimmer(2), Color::Rgb(251, 191, 36));
        assert_eq!(shimmer(3), shimmer(0));
        assert_ne!(shimmer(1), shimmer(0));
    }
}
