use std::time::Duration;

use anyhow::Result;
use crossterm::event::{self, Event, KeyEvent, KeyEventKind, MouseEvent};

/// Event handler for terminal events.
///
/// Polls at a relaxed tick rate normally and at the animation frame rate
/// while a snap is in flight, so interpolation stays smooth without burning
/// CPU at rest.
pub struct EventHandler {
    tick_rate: Duration,
    animation_tick: Duration,
}

impl EventHandler {
    pub fn new(tick_rate_ms: u64) -> Self {
        Self::with_animation_fps(tick_rate_ms, 60)
    }

    pub fn with_animation_fps(tick_rate_ms: u64, fps: u16) -> Self {
        let animation_tick = if fps == 0 {
            Duration::from_millis(16) // ~60fps fallback
        } else {
            Duration::from_millis(1000 / fps as u64)
        };
        Self {
            tick_rate: Duration::from_millis(tick_rate_ms),
            animation_tick,
        }
    }

    /// Poll for the next event at the normal tick rate.
    pub fn next(&self) -> Result<Option<AppEvent>> {
        self.poll(self.tick_rate)
    }

    /// Poll for the next event at the animation frame rate.
    pub fn next_animation(&self) -> Result<Option<AppEvent>> {
        self.poll(self.animation_tick)
    }

    fn poll(&self, timeout: Duration) -> Result<Option<AppEvent>> {
        if event::poll(timeout)? {
            match event::read()? {
                Event::Key(key) => {
                    // Only handle key press events, ignore release events
                    // (crossterm sends release events on some systems)
                    if key.kind == KeyEventKind::Press {
                        Ok(Some(AppEvent::Key(key)))
                    } else {
                        Ok(None)
                    }
                }
                Event::Mouse(mouse) => Ok(Some(AppEvent::Mouse(mouse))),
                Event::Resize(w, h) => Ok(Some(AppEvent::Resize(w, h))),
                _ => Ok(None),
            }
        } else {
            Ok(Some(AppEvent::Tick))
        }
    }
}

/// Application events
#[derive(Debug)]
pub enum AppEvent {
    /// A key was pressed
    Key(KeyEvent),
    /// Any mouse activity: wheel, click, movement
    Mouse(MouseEvent),
    /// Terminal was resized
    Resize(u16, u16),
    /// Tick event for periodic updates
    Tick,
}
