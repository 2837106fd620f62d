//! Layout density derived from the terminal width.

use super::paginate::ViewMode;

/// Terminals narrower than this many columns get the compact layout
pub const NARROW_WIDTH: u16 = 100;

/// Title length above which a card title scrolls, compact layout
pub const MARQUEE_THRESHOLD_NARROW: usize = 20;
/// Title length above which a card title scrolls, full layout
pub const MARQUEE_THRESHOLD_WIDE: usize = 54;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Viewport {
    pub width: u16,
}

impl Default for Viewport {
    fn default() -> Self {
        Self { width: NARROW_WIDTH }
    }
}

impl Viewport {
    pub fn new(width: u16) -> Self {
        Self { width }
    }

    pub fn is_narrow(&self) -> bool {
        self.width < NARROW_WIDTH
    }

    /// Narrow terminals only offer the grid
    pub fn effective_mode(&self, selected: ViewMode) -> ViewMode {
        if self.is_narrow() {
            ViewMode::Grid
        } else {
            selected
        }
    }

    pub fn can_switch_mode(&self) -> bool {
        !self.is_narrow()
    }

    /// Pages shown on each side of the current page
    pub fn page_radius(&self) -> usize {
        if self.is_narrow() {
            1
        } else {
            2
        }
    }

    pub fn marquee_threshold(&self) -> usize {
        if self.is_narrow() {
            MARQUEE_THRESHOLD_NARROW
        } else {
            MARQUEE_THRESHOLD_WIDE
        }
    }

    pub fn grid_columns(&self) -> usize {
        if self.is_narrow() {
            1
        } else {
            3
        }
    }
}
