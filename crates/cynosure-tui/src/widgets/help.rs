//! Help popup — centred floating overlay listing all keybindings.
//!
//! Toggle with `?`; close with `?` or `Escape`.

use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Clear, Paragraph, Widget},
};

const BINDINGS: &[(&str, &str)] = &[
    ("q  /  Ctrl+c", "Quit"),
    ("1  /  2", "Search tab / Timelines tab"),
    ("Tab", "Cycle focus: filters → results → query → age"),
    ("/", "Edit the search query"),
    ("a", "Edit the age / category filter"),
    ("Escape", "Leave a text field"),
    ("↑ k  /  ↓ j", "Move in filters, results or timelines"),
    ("← h  /  → l", "Collapse / expand a filter group"),
    ("Space", "Toggle a filter option (or a whole group)"),
    ("Enter", "Toggle option, expand group, or open brochure"),
    ("PageUp  /  Ctrl+u", "Scroll up a page"),
    ("PageDown / Ctrl+d", "Scroll down a page"),
    ("g  /  G", "Jump to first / last"),
    ("x", "Clear every filter and the query"),
    (":", "Command line (q, help, theme, clear, tab, brochure)"),
    ("?", "Toggle this help popup"),
];

const TIP: &str = "Tip: type words from a name, domain, venue, teacher or category. \
Every word must appear somewhere in the event.";

pub struct HelpPopup<'a> {
    theme: &'a Theme,
}

impl<'a> HelpPopup<'a> {
    pub fn new(theme: &'a Theme) -> Self {
        Self { theme }
    }
}

impl Widget for HelpPopup<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let popup = centered_rect(84, BINDINGS.len() as u16 + 5, area);
        Clear.render(popup, buf);

        let block = Block::bordered()
            .title(" cynosure — keybindings (? to close) ")
            .border_style(self.theme.border_focused.add_modifier(Modifier::BOLD));

        let inner = block.inner(popup);
        block.render(popup, buf);

        let mut lines: Vec<Line> = BINDINGS
            .iter()
            .map(|(key, desc)| {
                Line::from(vec![
                    Span::styled(format!("  {:<22}", key), self.theme.badge_label),
                    Span::raw(*desc),
                ])
            })
            .collect();
        lines.push(Line::default());
        lines.push(Line::from(Span::styled(
            format!("  {TIP}"),
            Style::default().add_modifier(Modifier::DIM | Modifier::ITALIC),
        )));

        Paragraph::new(lines)
            .wrap(ratatui::widgets::Wrap { trim: false })
            .render(inner, buf);
    }
}

fn centered_rect(width: u16, height: u16, area: Rect) -> Rect {
    let x = area.x + area.width.saturating_sub(width) / 2;
    let y = area.y + area.height.saturating_sub(height) / 2;
    Rect {
        x,
        y,
        width: width.min(area.width),
        height: height.min(area.height),
    }
}
