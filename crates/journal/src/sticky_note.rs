//! The draggable sticky note.

use journal_core::{DragPosition, STICKY_NOTE_HEIGHT, STICKY_NOTE_WIDTH, Tilt};
use ratatui::{
    Frame,
    buffer::Buffer,
    layout::Rect,
    style::{Color, Style},
    widgets::{Block, BorderType, Widget},
};

use crate::canvas::{blit, covers};

const PAPER: Color = Color::Rgb(254, 240, 138);
const INK: Color = Color::Rgb(133, 77, 14);
const EDGE: Color = Color::Rgb(234, 179, 8);
const SHADOW: Color = Color::Rgb(120, 113, 108);

/// Draw the note at `position`, clipped to the frame.
///
/// A lifted note gets a heavy border, a drop shadow and its text nudged to
/// the right; a resting note lies flat with a rounded border.
pub fn render(frame: &mut Frame, position: DragPosition, tilt: Tilt, lines: &[String]) {
    let shadow = u16::from(tilt == Tilt::Lifted);
    let mut note = Buffer::empty(Rect::new(
        0,
        0,
        STICKY_NOTE_WIDTH + shadow,
        STICKY_NOTE_HEIGHT + shadow,
    ));

    if tilt == Tilt::Lifted {
        note.set_style(
            Rect::new(1, 1, STICKY_NOTE_WIDTH, STICKY_NOTE_HEIGHT),
            Style::new().bg(SHADOW),
        );
    }

    let paper = Rect::new(0, 0, STICKY_NOTE_WIDTH, STICKY_NOTE_HEIGHT);
    let border_type = match tilt {
        Tilt::Lifted => BorderType::Thick,
        Tilt::Resting => BorderType::Rounded,
    };
    let block = Block::bordered()
        .border_type(border_type)
        .border_style(Style::new().fg(EDGE))
        .style(Style::new().bg(PAPER).fg(INK));
    let inner = block.inner(paper);
    block.render(paper, &mut note);

    let indent = match tilt {
        Tilt::Lifted => 1,
        Tilt::Resting => 0,
    };
    for (row, line) in lines.iter().take(inner.height as usize).enumerate() {
        note.set_stringn(
            inner.x + indent,
            inner.y + row as u16,
            line,
            inner.width.saturating_sub(indent) as usize,
            Style::new().fg(INK),
        );
    }

    // Copy the paper and the two shadow strips, leaving the empty corners alone.
    let buf = frame.buffer_mut();
    blit(&note, paper, buf, position.x, position.y);
    if tilt == Tilt::Lifted {
        let right = Rect::new(STICKY_NOTE_WIDTH, 1, 1, STICKY_NOTE_HEIGHT);
        let bottom = Rect::new(1, STICKY_NOTE_HEIGHT, STICKY_NOTE_WIDTH, 1);
        blit(&note, right, buf, position.x, position.y);
        blit(&note, bottom, buf, position.x, position.y);
    }
}

/// Whether a pointer cell lands on the note.
pub fn hit(position: DragPosition, column: u16, row: u16) -> bool {
    covers(
        position.x,
        position.y,
        STICKY_NOTE_WIDTH,
        STICKY_NOTE_HEIGHT,
        column,
        row,
    )
}

#[cfg(test)]
mod tests {
    use ratatui::{Terminal, backend::TestBackend};

    use super::*;

    fn lines() -> Vec<String> {
        vec!["Drag me!".to_string()]
    }

    #[test]
    fn test_resting_note_is_flat() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let position = DragPosition { x: 2, y: 1 };
        terminal
            .draw(|frame| render(frame, position, Tilt::Resting, &lines()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(2, 1)].symbol(), "╭");
        assert_eq!(buffer[(3, 2)].symbol(), "D");
        assert_eq!(buffer[(16, 7)].bg, Color::Reset);
    }

    #[test]
    fn test_lifted_note_casts_shadow() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let position = DragPosition { x: 2, y: 1 };
        terminal
            .draw(|frame| render(frame, position, Tilt::Lifted, &lines()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(2, 1)].symbol(), "┏");
        assert_eq!(buffer[(4, 2)].symbol(), "D");
        assert_eq!(buffer[(16, 7)].bg, SHADOW);
    }

    #[test]
    fn test_note_partly_offscreen() {
        let mut terminal = Terminal::new(TestBackend::new(30, 12)).unwrap();
        let position = DragPosition { x: -4, y: -2 };
        terminal
            .draw(|frame| render(frame, position, Tilt::Resting, &lines()))
            .unwrap();

        let buffer = terminal.backend().buffer();
        assert_eq!(buffer[(0, 0)].bg, PAPER);
        assert!(hit(position, 0, 0));
        assert!(!hit(position, 10, 4));
    }
}
