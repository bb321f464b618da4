//! Hover-reactive card highlight.
//!
//! Tracks the last mouse cell. A card under the pointer renders its
//! highlight centered on the pointer; once the pointer leaves, the
//! highlight reverts to the card's center.

use ratatui::layout::Rect;

#[derive(Debug, Default)]
pub struct HoverHighlight {
    pos: Option<(u16, u16)>,
}

impl HoverHighlight {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record mouse movement in absolute terminal coordinates.
    pub fn set(&mut self, column: u16, row: u16) {
        self.pos = Some((column, row));
    }

    /// Forget the pointer (mouse left the terminal).
    pub fn clear(&mut self) {
        self.pos = None;
    }

    /// Highlight anchor for a card: the pointer position when it is inside
    /// `rect`, otherwise the card center.
    pub fn anchor_in(&self, rect: Rect) -> (u16, u16) {
        match self.pos {
            Some((x, y))
                if x >= rect.x
                    && x < rect.x + rect.width
                    && y >= rect.y
                    && y < rect.y + rect.height =>
            {
                (x, y)
            }
            _ => (rect.x + rect.width / 2, rect.y + rect.height / 2),
        }
    }

    /// Whether the pointer is currently inside `rect`.
    pub fn hovers(&self, rect: Rect) -> bool {
        matches!(self.pos, Some((x, y))
            if x >= rect.x && x < rect.x + rect.width
                && y >= rect.y && y < rect.y + rect.height)
    }
}
