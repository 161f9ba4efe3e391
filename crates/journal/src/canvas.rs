//! Offscreen buffer helpers.
//!
//! Widgets that can hang off the edge of the terminal (the scrolled card
//! grid, the sticky note) are drawn into their own buffer first and then
//! copied onto the frame with a signed offset.

use ratatui::{
    buffer::Buffer,
    layout::{Position, Rect},
};

/// Copy `region` of `src` onto `dst`, shifted by (`offset_x`, `offset_y`).
///
/// Cells landing outside `dst` are dropped.
pub fn blit(src: &Buffer, region: Rect, dst: &mut Buffer, offset_x: i32, offset_y: i32) {
    let region = region.intersection(src.area);
    let bounds = dst.area;

    for Position { x, y } in region.positions() {
        let target_x = i32::from(x) + offset_x;
        let target_y = i32::from(y) + offset_y;
        let (Ok(target_x), Ok(target_y)) = (u16::try_from(target_x), u16::try_from(target_y)) else {
            continue;
        };
        if !bounds.contains(Position::new(target_x, target_y)) {
            continue;
        }
        if let (Some(cell), Some(target)) = (src.cell((x, y)), dst.cell_mut((target_x, target_y))) {
            *target = cell.clone();
        }
    }
}

/// Whether a signed rectangle origin and size covers a cell.
pub fn covers(x: i32, y: i32, width: u16, height: u16, column: u16, row: u16) -> bool {
    let (column, row) = (i32::from(column), i32::from(row));
    column >= x && column < x + i32::from(width) && row >= y && row < y + i32::from(height)
}

#[cfg(test)]
mod tests {
    use ratatui::style::Style;

    use super::*;

    #[test]
    fn test_blit_clips_negative_offset() {
        let mut src = Buffer::empty(Rect::new(0, 0, 4, 2));
        src.set_string(0, 0, "abcd", Style::new());
        src.set_string(0, 1, "efgh", Style::new());

        let mut dst = Buffer::empty(Rect::new(0, 0, 5, 3));
        blit(&src, src.area, &mut dst, -2, 1);

        assert_eq!(dst[(0, 1)].symbol(), "c");
        assert_eq!(dst[(1, 1)].symbol(), "d");
        assert_eq!(dst[(1, 2)].symbol(), "h");
        assert_eq!(dst[(2, 1)].symbol(), " ");
    }

    #[test]
    fn test_covers() {
        assert!(covers(-3, -1, 14, 6, 0, 0));
        assert!(covers(5, 5, 14, 6, 18, 10));
        assert!(!covers(5, 5, 14, 6, 19, 10));
        assert!(!covers(5, 5, 14, 6, 4, 5));
    }
}
