//! Tab bar widget — the strip of tabs at the top of the screen.

use crate::app::Tab;
use crate::theme::Theme;
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::Line,
    widgets::{Tabs, Widget},
};

/// Renders the 1-line tab strip.
///
/// The active tab is highlighted; a `●` suffix on the search tab means
/// filters are narrowing the results. Keybinding hints (`q:quit  ?:help`)
/// are right-aligned in the same row.
pub struct TabBar<'a> {
    active: Tab,
    filtered: bool,
    theme: &'a Theme,
}

impl<'a> TabBar<'a> {
    pub fn new(active: Tab, filtered: bool, theme: &'a Theme) -> Self {
        Self { active, filtered, theme }
    }
}

impl Widget for TabBar<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let labels: Vec<Line> = Tab::ALL
            .iter()
            .enumerate()
            .map(|(i, tab)| {
                let marker = if *tab == Tab::Search && self.filtered { " ●" } else { "" };
                Line::from(format!(" {}:{}{} ", i + 1, tab.title(), marker))
            })
            .collect();

        Tabs::new(labels)
            .select(self.active.index())
            .highlight_style(self.theme.border_focused.add_modifier(Modifier::BOLD | Modifier::REVERSED))
            .divider("")
            .render(area, buf);

        let hint = " q:quit  ?:help  ::command ";
        let hint_x = area.right().saturating_sub(hint.len() as u16);
        buf.set_string(
            hint_x,
            area.y,
            hint,
            Style::default().add_modifier(Modifier::DIM),
        );
    }
}
