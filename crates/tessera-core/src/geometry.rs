//! Terminal rectangles.

use std::fmt;

/// A rectangle on the terminal, in cells, origin at the top-left corner.
///
/// Fields follow the `(height, width, y, x)` order used by panel
/// constructors.
#[derive(Debug, Default, Clone, Copy, PartialEq, Eq, Hash)]
pub struct Rect {
    /// Number of rows.
    pub height: u16,
    /// Number of columns.
    pub width: u16,
    /// Row of the top edge.
    pub y: u16,
    /// Column of the left edge.
    pub x: u16,
}

impl Rect {
    /// Create a rectangle from height, width, and origin.
    pub const fn new(height: u16, width: u16, y: u16, x: u16) -> Self {
        Self {
            height,
            width,
            y,
            x,
        }
    }

    /// A `height` x `width` rectangle placed near the middle of a
    /// `rows` x `cols` terminal.
    ///
    /// The origin sits one cell up and left of the exact center and never
    /// goes negative.
    pub fn centered(rows: u16, cols: u16, height: u16, width: u16) -> Self {
        let y = ((i32::from(rows) - i32::from(height)) / 2 - 1).max(0);
        let x = ((i32::from(cols) - i32::from(width)) / 2 - 1).max(0);
        Self::new(height, width, y as u16, x as u16)
    }

    /// One past the last row.
    pub fn bottom(&self) -> u32 {
        u32::from(self.y) + u32::from(self.height)
    }

    /// One past the last column.
    pub fn right(&self) -> u32 {
        u32::from(self.x) + u32::from(self.width)
    }

    /// Whether the rectangle lies entirely inside a `rows` x `cols` terminal.
    pub fn fits_within(&self, rows: u16, cols: u16) -> bool {
        self.bottom() <= u32::from(rows) && self.right() <= u32::from(cols)
    }

    /// The area inside a one-cell border.
    pub fn inner(&self) -> Rect {
        Rect::new(
            self.height.saturating_sub(2),
            self.width.saturating_sub(2),
            self.y.saturating_add(1),
            self.x.saturating_add(1),
        )
    }
}

impl fmt::Display for Rect {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(
            f,
            "{}x{} at ({}, {})",
            self.height, self.width, self.y, self.x
        )
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn centered_offsets_up_and_left() {
        let r = Rect::centered(24, 80, 4, 50);
        assert_eq!(r, Rect::new(4, 50, 9, 14));
    }

    #[test]
    fn centered_never_negative() {
        let r = Rect::centered(3, 10, 4, 50);
        assert_eq!((r.y, r.x), (0, 0));
    }

    #[test]
    fn fits_within_checks_far_edges() {
        let r = Rect::new(10, 20, 14, 60);
        assert!(r.fits_within(24, 80));
        assert!(!r.fits_within(23, 80));
        assert!(!r.fits_within(24, 79));
    }

    #[test]
    fn fits_within_does_not_overflow() {
        let r = Rect::new(u16::MAX, u16::MAX, u16::MAX, u16::MAX);
        assert!(!r.fits_within(u16::MAX, u16::MAX));
    }

    #[test]
    fn inner_shrinks_by_border() {
        assert_eq!(Rect::new(5, 10, 1, 2).inner(), Rect::new(3, 8, 2, 3));
        assert_eq!(Rect::new(1, 1, 0, 0).inner(), Rect::new(0, 0, 1, 1));
    }

    #[test]
    fn display_lists_height_width_origin() {
        assert_eq!(Rect::new(4, 50, 9, 14).to_string(), "4x50 at (9, 14)");
    }
}
