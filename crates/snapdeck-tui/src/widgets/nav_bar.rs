use ratatui::{
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::Paragraph,
    Frame,
};
use unicode_width::UnicodeWidthStr;

use crate::app::App;

pub struct NavBarWidget;

impl NavBarWidget {
    pub fn render(frame: &mut Frame, area: Rect, app: &mut App) {
        if area.height == 0 {
            return;
        }
        let theme = app.theme.clone();

        // "Scrolled past top" styling is keyed to the raw presented offset,
        // not to the snap controller.
        let scrolled = app.offset() >= 1;
        let bar_bg = if scrolled { theme.panel } else { theme.bg };
        let title_style = Style::default()
            .fg(theme.heading)
            .bg(bar_bg)
            .add_modifier(Modifier::BOLD);
        let link_style = if scrolled {
            Style::default()
                .fg(theme.accent)
                .bg(bar_bg)
                .add_modifier(Modifier::UNDERLINED)
        } else {
            Style::default().fg(theme.accent).bg(bar_bg)
        };

        let title = format!(" {} ", app.deck.title);
        let mut spans = vec![Span::styled(title.clone(), title_style)];
        let mut cursor = area.x + title.width() as u16;

        // One link per identified section, document order.
        let links: Vec<(String, String)> = app
            .registry
            .iter()
            .filter_map(|s| s.id.clone().map(|id| (id, s.title.clone())))
            .collect();

        for (id, link_title) in links {
            let gap = "  ";
            spans.push(Span::styled(gap, Style::default().bg(bar_bg)));
            cursor += gap.width() as u16;

            let label = link_title;
            let width = label.width() as u16;
            if cursor + width > area.x + area.width {
                break;
            }
            app.hits
                .push_link(Rect::new(cursor, area.y, width, 1), id);
            spans.push(Span::styled(label, link_style));
            cursor += width;
        }

        // Pad the remainder so the bar background spans the full row.
        let used: u16 = cursor - area.x;
        let pad = area.width.saturating_sub(used) as usize;
        spans.push(Span::styled(" ".repeat(pad), Style::default().bg(bar_bg)));

        frame.render_widget(Paragraph::new(Line::from(spans)), area);
    }
}
