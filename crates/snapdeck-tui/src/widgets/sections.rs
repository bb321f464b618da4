//! Full-viewport section renderer.
//!
//! Sections are stacked vertically, one viewport tall each, and the widget
//! translates them by the presented scroll offset. The ambient layers (dot
//! lattice, wandering glow) are painted first, fixed to the viewport, and
//! the content scrolls over them.

use std::time::Instant;

use ratatui::{
    layout::{Alignment, Rect},
    style::{Color, Modifier, Style},
    text::{Line, Span},
    widgets::{Paragraph, Wrap},
    Frame,
};
use unicode_width::UnicodeWidthStr;

use snapdeck_core::{Card, SectionKind};

use crate::app::App;
use crate::theme::{blend, Theme};

pub struct SectionsWidget;

impl SectionsWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App, now: Instant) {
        if area.width == 0 || area.height == 0 {
            return;
        }

        paint_backdrop(frame, area, app, now);

        let vh = area.height as i32;
        let offset = app.offset() as i32;
        let count = app.registry.len();

        for ordinal in 0..count {
            let top = ordinal as i32 * vh - offset;
            if top >= vh || top + vh <= 0 {
                continue;
            }
            render_section(frame, area, app, ordinal, top);
        }
    }
}

/// Background fill, glow tint, and dot lattice.
fn paint_backdrop(frame: &mut Frame, area: Rect, app: &App, now: Instant) {
    let theme = &app.theme;
    let opacity = if app.config.ui.show_glow {
        app.glow.opacity(now)
    } else {
        0.0
    };
    let (cx, cy) = app.glow.center();
    let cx = cx * area.width as f32;
    let cy = cy * area.height as f32;
    // Terminal cells are roughly twice as tall as wide.
    let radius = (area.width.max(area.height * 2) as f32 / 3.0).max(1.0);

    let buf = frame.buffer_mut();
    for row in 0..area.height {
        for col in 0..area.width {
            let bg = if opacity > 0.01 {
                let dx = col as f32 - cx;
                let dy = (row as f32 - cy) * 2.0;
                let falloff = (1.0 - (dx * dx + dy * dy).sqrt() / radius).max(0.0);
                blend(theme.bg, theme.glow, opacity * falloff)
            } else {
                theme.bg
            };
            if let Some(cell) = buf.cell_mut((area.x + col, area.y + row)) {
                cell.set_char(' ').set_bg(bg);
            }
        }
    }

    if app.config.ui.show_dots {
        for (x, y) in app.dots.positions() {
            if x < area.width && y < area.height {
                if let Some(cell) = buf.cell_mut((area.x + x, area.y + y)) {
                    cell.set_char('·').set_fg(theme.dot);
                }
            }
        }
    }
}

fn render_section(frame: &mut Frame, area: Rect, app: &mut App, ordinal: usize, top: i32) {
    let vh = area.height;
    let alpha = app.fade.alpha(ordinal);
    let theme = app.theme.clone();

    // Clip to the viewport; a negative top means the first rows are cut off.
    let cut = (-top).max(0) as u16;
    let vis_y = area.y + top.max(0) as u16;
    let vis_h = vh - cut - (top.max(0) as u16);
    if vis_h == 0 {
        return;
    }
    let visible = Rect::new(area.x, vis_y, area.width, vis_h);

    if ordinal == 0 {
        render_hero(frame, visible, cut, area, top, app, alpha);
        return;
    }

    let section = app.deck.sections[ordinal - 1].clone();
    match &section.kind {
        SectionKind::Text { body } => {
            let lines = titled_lines(&section.title, vh, &theme, alpha, |lines| {
                for para in body.lines() {
                    lines.push(Line::from(Span::styled(
                        para.to_string(),
                        fade_fg(&theme, theme.fg, alpha),
                    )));
                }
            });
            let para = Paragraph::new(lines)
                .wrap(Wrap { trim: true })
                .scroll((cut, 0));
            frame.render_widget(para, inset(visible));
        }
        SectionKind::Cards { cards } => {
            let lines = titled_lines(&section.title, 4, &theme, alpha, |_| {});
            frame.render_widget(Paragraph::new(lines).scroll((cut, 0)), inset(visible));
            render_cards(frame, area, top, cards, app, alpha);
        }
        SectionKind::Contact { lines: body } => {
            let lines = titled_lines(&section.title, vh, &theme, alpha, |lines| {
                for entry in body {
                    lines.push(
                        Line::from(Span::styled(
                            entry.clone(),
                            fade_fg(&theme, theme.accent, alpha),
                        ))
                        .alignment(Alignment::Center),
                    );
                }
            });
            frame.render_widget(Paragraph::new(lines).scroll((cut, 0)), inset(visible));
        }
    }
}

/// Hero: centered heading and tagline, plus the scroll indicator pinned to
/// the second-to-last row. Clicking the indicator always targets the same
/// section id, wherever the deck puts it.
fn render_hero(
    frame: &mut Frame,
    visible: Rect,
    cut: u16,
    area: Rect,
    top: i32,
    app: &mut App,
    alpha: f32,
) {
    let theme = app.theme.clone();
    let vh = area.height;
    let hero = app.deck.hero.clone();

    let mut lines: Vec<Line> = Vec::with_capacity(vh as usize);
    let pad = (vh / 2).saturating_sub(2);
    for _ in 0..pad {
        lines.push(Line::default());
    }
    lines.push(
        Line::from(Span::styled(
            hero.heading.clone(),
            fade_fg(&theme, theme.heading, alpha).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            hero.tagline.clone(),
            fade_fg(&theme, theme.dim, alpha),
        ))
        .alignment(Alignment::Center),
    );

    let indicator_row = vh.saturating_sub(2);
    while (lines.len() as u16) < indicator_row {
        lines.push(Line::default());
    }
    let label = format!("▼ {}", hero.indicator_label);
    lines.push(
        Line::from(Span::styled(
            label.clone(),
            fade_fg(&theme, theme.accent, alpha),
        ))
        .alignment(Alignment::Center),
    );

    frame.render_widget(Paragraph::new(lines).scroll((cut, 0)), visible);

    // Hit box only while the indicator row is actually on screen.
    let abs_row = top + indicator_row as i32;
    if (0..vh as i32).contains(&abs_row) {
        let width = label.width() as u16;
        let x = area.x + area.width.saturating_sub(width) / 2;
        app.hits.set_indicator(
            Rect::new(x, area.y + abs_row as u16, width, 1),
            app.config.ambience.indicator_target.clone(),
        );
    }
}

fn render_cards(
    frame: &mut Frame,
    area: Rect,
    top: i32,
    cards: &[Card],
    app: &mut App,
    alpha: f32,
) {
    if cards.is_empty() {
        return;
    }
    let theme = app.theme.clone();
    let n = cards.len() as u16;
    let gap = 2u16;
    let card_w = area.width.saturating_sub(gap * (n + 1)) / n;
    if card_w < 4 {
        return;
    }
    let card_h = (area.height / 2).max(4);
    let card_top = top + 4;

    for (i, card) in cards.iter().enumerate() {
        let x = area.x + gap + (card_w + gap) * i as u16;
        let full = clip_rows(area, card_top, card_h);
        let Some((rect, cut)) = full else { continue };
        let rect = Rect::new(x, rect.y, card_w, rect.height);

        let hovered = app.hover.hovers(rect);
        let base_bg = if hovered {
            blend(theme.card, theme.card_highlight, 0.4)
        } else {
            theme.card
        };

        let mut lines = vec![
            Line::default(),
            Line::from(Span::styled(
                card.name.clone(),
                fade_fg(&theme, theme.heading, alpha).add_modifier(Modifier::BOLD),
            ))
            .alignment(Alignment::Center),
            Line::default(),
            Line::from(Span::styled(
                card.blurb.clone(),
                fade_fg(&theme, theme.fg, alpha),
            ))
            .alignment(Alignment::Center),
        ];
        while (lines.len() as u16) < card_h {
            lines.push(Line::default());
        }
        let para = Paragraph::new(lines)
            .style(Style::default().bg(base_bg))
            .wrap(Wrap { trim: true })
            .scroll((cut, 0));
        frame.render_widget(para, rect);

        // Radial brightening around the pointer, fg glyphs left intact.
        if hovered {
            let (ax, ay) = app.hover.anchor_in(rect);
            let radius = (card_w as f32 / 2.0).max(1.0);
            let buf = frame.buffer_mut();
            for row in rect.y..rect.y + rect.height {
                for col in rect.x..rect.x + rect.width {
                    let dx = col as f32 - ax as f32;
                    let dy = (row as f32 - ay as f32) * 2.0;
                    let falloff = (1.0 - (dx * dx + dy * dy).sqrt() / radius).max(0.0);
                    if falloff > 0.0 {
                        if let Some(cell) = buf.cell_mut((col, row)) {
                            let bg = cell.bg;
                            cell.set_bg(blend(bg, theme.card_highlight, falloff));
                        }
                    }
                }
            }
        }
    }
}

/// Title header shared by the non-hero section kinds: a blank row, the
/// centered title, an underline row, then the body via `fill`.
fn titled_lines<'a>(
    title: &str,
    capacity: u16,
    theme: &Theme,
    alpha: f32,
    fill: impl FnOnce(&mut Vec<Line<'a>>),
) -> Vec<Line<'a>> {
    let mut lines: Vec<Line> = Vec::with_capacity(capacity as usize);
    lines.push(Line::default());
    lines.push(
        Line::from(Span::styled(
            title.to_string(),
            fade_fg(theme, theme.heading, alpha).add_modifier(Modifier::BOLD),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(
        Line::from(Span::styled(
            "─".repeat(title.width().min(24)),
            fade_fg(theme, theme.accent, alpha),
        ))
        .alignment(Alignment::Center),
    );
    lines.push(Line::default());
    fill(&mut lines);
    lines
}

/// Entrance fade: foreground sinks into the background as alpha drops.
fn fade_fg(theme: &Theme, fg: Color, alpha: f32) -> Style {
    Style::default().fg(blend(theme.bg, fg, alpha))
}

/// Horizontal content margin.
fn inset(rect: Rect) -> Rect {
    let margin = (rect.width / 8).min(8);
    Rect::new(
        rect.x + margin,
        rect.y,
        rect.width.saturating_sub(margin * 2),
        rect.height,
    )
}

/// Clip a row span `[top, top + height)` in section space against the
/// viewport, returning the on-screen rect and how many leading rows were cut.
fn clip_rows(area: Rect, top: i32, height: u16) -> Option<(Rect, u16)> {
    let vh = area.height as i32;
    let bottom = top + height as i32;
    if bottom <= 0 || top >= vh {
        return None;
    }
    let cut = (-top).max(0) as u16;
    let y = area.y + top.max(0) as u16;
    let h = (bottom.min(vh) - top.max(0)) as u16;
    Some((Rect::new(area.x, y, area.width, h), cut))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_clip_fully_visible() {
        let area = Rect::new(0, 1, 80, 24);
        let (rect, cut) = clip_rows(area, 4, 10).unwrap();
        assert_eq!(rect, Rect::new(0, 5, 80, 10));
        assert_eq!(cut, 0);
    }

    #[test]
    fn test_clip_top_overhang() {
        let area = Rect::new(0, 0, 80, 24);
        let (rect, cut) = clip_rows(area, -6, 10).unwrap();
        assert_eq!(rect, Rect::new(0, 0, 80, 4));
        assert_eq!(cut, 6);
    }

    #[test]
    fn test_clip_bottom_overhang() {
        let area = Rect::new(0, 0, 80, 24);
        let (rect, cut) = clip_rows(area, 20, 10).unwrap();
        assert_eq!(rect, Rect::new(0, 20, 80, 4));
        assert_eq!(cut, 0);
    }

    #[test]
    fn test_clip_off_screen() {
        let area = Rect::new(0, 0, 80, 24);
        assert!(clip_rows(area, 24, 10).is_none());
        assert!(clip_rows(area, -10, 10).is_none());
    }
}
