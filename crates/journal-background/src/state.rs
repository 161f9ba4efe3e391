//! Backdrop state management.

use journal_core::BackgroundStyle;
use ratatui::{
    Frame,
    style::Color,
    text::{Line, Span},
    widgets::Paragraph,
};

use crate::animations::paper;

/// Backdrop state.
///
/// The wash is the same every frame for a given size, so it is cached and
/// only recomputed when the terminal is resized.
#[derive(Debug, Default)]
pub struct BackgroundState {
    /// Cached wash colors, row-major.
    wash: Vec<Color>,
    /// Last known terminal width.
    last_width: u16,
    /// Last known terminal height.
    last_height: u16,
}

impl BackgroundState {
    /// Create a new background state.
    pub fn new() -> Self {
        Self::default()
    }

    /// Render the backdrop to the frame.
    pub fn render(&mut self, frame: &mut Frame, style: BackgroundStyle) {
        if !style.has_wash() {
            return;
        }

        let area = frame.area();
        let width = area.width;
        let height = area.height;

        // Reinitialize if dimensions changed or the wash was never computed
        if width != self.last_width || height != self.last_height || self.wash.is_empty() {
            self.wash = (0..height)
                .flat_map(|y| (0..width).map(move |x| paper::wash_color(x, y, width, height)))
                .collect();
            self.last_width = width;
            self.last_height = height;
        }

        let lines: Vec<Line> = (0..height)
            .map(|y| {
                let spans: Vec<Span> = (0..width)
                    .map(|x| {
                        let wash = self.wash[y as usize * width as usize + x as usize];
                        paper::render_paper_char(x, y, width, height, wash, style)
                    })
                    .collect();
                Line::from(spans)
            })
            .collect();

        frame.render_widget(Paragraph::new(lines), area);
    }
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    #[test]
    fn test_none_leaves_frame_untouched() {
        let mut terminal = Terminal::new(TestBackend::new(10, 4)).unwrap();
        let mut state = BackgroundState::new();
        terminal
            .draw(|frame| state.render(frame, BackgroundStyle::None))
            .unwrap();
        assert!(state.wash.is_empty());
        assert_eq!(terminal.backend().buffer()[(0, 0)].bg, Color::Reset);
    }

    #[test]
    fn test_wash_recomputed_on_resize() {
        let mut state = BackgroundState::new();

        let mut small = Terminal::new(TestBackend::new(10, 4)).unwrap();
        small
            .draw(|frame| state.render(frame, BackgroundStyle::Plain))
            .unwrap();
        assert_eq!(state.wash.len(), 40);

        let mut large = Terminal::new(TestBackend::new(30, 8)).unwrap();
        large
            .draw(|frame| state.render(frame, BackgroundStyle::Dotted))
            .unwrap();
        assert_eq!((state.last_width, state.last_height), (30, 8));
        assert_eq!(state.wash.len(), 240);
        assert_eq!(large.backend().buffer()[(29, 7)].bg, state.wash[239]);
    }
}
