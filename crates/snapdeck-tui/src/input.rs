//! Input adapters: keyboard, wheel, and click.
//!
//! Each adapter translates raw crossterm events into exactly one normalized
//! [`Action`]; resolution and backpressure live entirely in the navigation
//! controller. Raw mode already suppresses the terminal's native scrolling,
//! so consuming the wheel here replaces it with discrete snaps outright.

use crossterm::event::{KeyCode, KeyEvent, KeyModifiers, MouseButton, MouseEvent, MouseEventKind};
use ratatui::layout::Rect;

use snapdeck_core::{Direction, InputSource, MoveIntent};

/// What an input event asks the application to do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Action {
    Quit,
    /// A navigation request, tagged with the adapter that produced it.
    Move(MoveIntent, InputSource),
    /// Pointer moved; feeds the hover highlight only.
    Hover(u16, u16),
    None,
}

/// Keyboard adapter. Fixed key set: Down/PageDown/Space snap forward,
/// Up/PageUp snap backward, q/Ctrl-C quits. Unhandled keys fall through.
pub fn handle_key_event(key: KeyEvent) -> Action {
    match (key.code, key.modifiers) {
        (KeyCode::Char('q'), KeyModifiers::NONE) => Action::Quit,
        (KeyCode::Char('c'), KeyModifiers::CONTROL) => Action::Quit,

        (KeyCode::Down, KeyModifiers::NONE)
        | (KeyCode::PageDown, KeyModifiers::NONE)
        | (KeyCode::Char(' '), KeyModifiers::NONE) => {
            Action::Move(MoveIntent::Relative(Direction::Forward), InputSource::Key)
        }

        (KeyCode::Up, KeyModifiers::NONE) | (KeyCode::PageUp, KeyModifiers::NONE) => {
            Action::Move(MoveIntent::Relative(Direction::Backward), InputSource::Key)
        }

        _ => Action::None,
    }
}

/// Wheel and click adapter. Click targets are resolved against the hit
/// boxes the widgets recorded during the last draw.
pub fn handle_mouse_event(mouse: MouseEvent, hits: &HitMap) -> Action {
    match mouse.kind {
        MouseEventKind::ScrollDown => {
            Action::Move(MoveIntent::Relative(Direction::Forward), InputSource::Wheel)
        }
        MouseEventKind::ScrollUp => {
            Action::Move(MoveIntent::Relative(Direction::Backward), InputSource::Wheel)
        }
        MouseEventKind::Down(MouseButton::Left) => {
            match hits.lookup(mouse.column, mouse.row) {
                Some(id) => Action::Move(MoveIntent::Absolute(id.to_string()), InputSource::Link),
                None => Action::None,
            }
        }
        MouseEventKind::Moved | MouseEventKind::Drag(_) => {
            Action::Hover(mouse.column, mouse.row)
        }
        _ => Action::None,
    }
}

/// Clickable regions recorded at render time.
///
/// Rebuilt every draw, so hit boxes always match what is on screen. The
/// scroll indicator carries a fixed target id regardless of where it sits.
#[derive(Debug, Default)]
pub struct HitMap {
    links: Vec<(Rect, String)>,
    indicator: Option<(Rect, String)>,
}

impl HitMap {
    pub fn new() -> Self {
        Self::default()
    }

    /// Drop all hit boxes; called at the start of every draw.
    pub fn clear(&mut self) {
        self.links.clear();
        self.indicator = None;
    }

    /// Register a nav-bar link targeting `id`.
    pub fn push_link(&mut self, rect: Rect, id: impl Into<String>) {
        self.links.push((rect, id.into()));
    }

    /// Register the scroll indicator with its fixed target.
    pub fn set_indicator(&mut self, rect: Rect, target: impl Into<String>) {
        self.indicator = Some((rect, target.into()));
    }

    /// Target id under the given cell, if any.
    pub fn lookup(&self, column: u16, row: u16) -> Option<&str> {
        let inside = |rect: &Rect| {
            column >= rect.x
                && column < rect.x + rect.width
                && row >= rect.y
                && row < rect.y + rect.height
        };
        if let Some((rect, target)) = &self.indicator {
            if inside(rect) {
                return Some(target);
            }
        }
        self.links
            .iter()
            .find(|(rect, _)| inside(rect))
            .map(|(_, id)| id.as_str())
    }
}
