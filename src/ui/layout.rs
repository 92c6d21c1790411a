//! Grid layout for the skill cards
//!
//! Provides:
//! - Responsive column count (3 on wide terminals, down to 1)
//! - Row-major ordering, like the web grid
//! - Navigation helpers (up/down/left/right, tab wrap)
//! - Pagination when the grid is taller than the screen

use std::ops::Range;

/// Narrowest a card may get before a column is dropped
pub const MIN_CARD_WIDTH: u16 = 26;

/// Grid layout configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct GridLayout {
    /// Number of columns (default: 3)
    pub columns: u16,
    /// Number of rows that fit on screen (default: 3)
    pub visible_rows: u16,
}

impl Default for GridLayout {
    fn default() -> Self {
        Self {
            columns: 3,
            visible_rows: 3,
        }
    }
}

impl GridLayout {
    /// Widest grid the layout supports
    pub const MAX_COLUMNS: u16 = 6;

    /// Create a new grid layout
    pub fn new(columns: u16, visible_rows: u16) -> Self {
        Self {
            columns: columns.clamp(1, Self::MAX_COLUMNS),
            visible_rows: visible_rows.clamp(1, 20),
        }
    }

    /// As many columns as fit in `width`, at most `max_columns`
    /// and never more than [`Self::MAX_COLUMNS`]
    pub fn responsive(max_columns: u16, width: u16, gap: u16) -> u16 {
        let fit = width.saturating_add(gap) / (MIN_CARD_WIDTH + gap);
        fit.clamp(1, max_columns.clamp(1, Self::MAX_COLUMNS))
    }

    /// Total number of visible entries (columns × rows)
    pub fn visible_count(&self) -> usize {
        (self.columns as usize) * (self.visible_rows as usize)
    }

    /// Range of entries on the page holding `selected`
    pub fn visible_range(&self, selected: usize, total: usize) -> Range<usize> {
        if total == 0 {
            return 0..0;
        }

        let page_size = self.visible_count();
        let page = selected.min(total - 1) / page_size;
        let start = page * page_size;
        let end = (start + page_size).min(total);
        start..end
    }

    /// Convert flat index to (row, col) position, row-major:
    /// ```text
    /// Index:  0 1 2
    ///         3 4 5
    ///         6 7 8
    /// ```
    pub fn index_to_position(&self, index: usize) -> (u16, u16) {
        let cols = self.columns as usize;
        ((index / cols) as u16, (index % cols) as u16)
    }

    /// Previous row, same column
    pub fn move_up(&self, current: usize) -> usize {
        current.checked_sub(self.columns as usize).unwrap_or(current)
    }

    /// Next row, same column; stays put on the last row
    pub fn move_down(&self, current: usize, total: usize) -> usize {
        let next = current + self.columns as usize;
        if next < total {
            next
        } else {
            current
        }
    }

    /// Previous card in reading order
    pub fn move_left(&self, current: usize) -> usize {
        current.saturating_sub(1)
    }

    /// Next card in reading order
    pub fn move_right(&self, current: usize, total: usize) -> usize {
        if current + 1 < total {
            current + 1
        } else {
            current
        }
    }

    /// Move to last entry
    pub fn move_end(&self, total: usize) -> usize {
        total.saturating_sub(1)
    }

    /// Tab navigation (next with wrap)
    pub fn tab_next(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else {
            (current + 1) % total
        }
    }

    /// Shift+Tab navigation (previous with wrap)
    pub fn tab_prev(&self, current: usize, total: usize) -> usize {
        if total == 0 {
            0
        } else if current == 0 {
            total - 1
        } else {
            current - 1
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_visible_range() {
        let layout = GridLayout::new(3, 2);
        assert_eq!(layout.visible_count(), 6);

        assert_eq!(layout.visible_range(0, 9), 0..6);
        assert_eq!(layout.visible_range(5, 9), 0..6);
        assert_eq!(layout.visible_range(6, 9), 6..9);
        assert_eq!(layout.visible_range(20, 9), 6..9);
        assert_eq!(layout.visible_range(0, 0), 0..0);
    }

    #[test]
    fn test_row_major_positions() {
        let layout = GridLayout::new(3, 3);
        assert_eq!(layout.index_to_position(0), (0, 0));
        assert_eq!(layout.index_to_position(2), (0, 2));
        assert_eq!(layout.index_to_position(4), (1, 1));
        assert_eq!(layout.index_to_position(6), (2, 0));
    }

    #[test]
    fn test_navigation() {
        let layout = GridLayout::new(3, 3);
        let total = 8;

        assert_eq!(layout.move_up(4), 1);
        assert_eq!(layout.move_up(1), 1); // Top row stays
        assert_eq!(layout.move_down(4, total), 7);
        assert_eq!(layout.move_down(5, total), 5); // No card below
        assert_eq!(layout.move_left(0), 0);
        assert_eq!(layout.move_right(7, total), 7);
        assert_eq!(layout.move_end(total), 7);
    }

    #[test]
    fn test_tab_wrap() {
        let layout = GridLayout::default();
        assert_eq!(layout.tab_next(8, 9), 0);
        assert_eq!(layout.tab_prev(0, 9), 8);
        assert_eq!(layout.tab_next(0, 0), 0);
    }

    #[test]
    fn test_responsive_columns() {
        assert_eq!(GridLayout::responsive(3, 120, 2), 3);
        assert_eq!(GridLayout::responsive(3, 60, 2), 2);
        assert_eq!(GridLayout::responsive(3, 20, 2), 1);
        assert_eq!(GridLayout::responsive(1, 200, 2), 1);
        assert_eq!(GridLayout::responsive(10, 400, 2), GridLayout::MAX_COLUMNS);
    }
}
