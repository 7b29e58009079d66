//! Timelines tab — one column per configured festival day.
//!
//! Timelines are built from the whole catalog and ignore the search query
//! and filters.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use cynosure_core::{present, timeline, Event};
use ratatui::{
    buffer::Buffer,
    layout::{Constraint, Layout, Rect},
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, Paragraph, Widget, Wrap},
};

pub struct DayTimeline<'a> {
    pub label: String,
    pub events: Vec<&'a Event>,
}

#[derive(Default)]
pub struct TimelineState<'a> {
    pub days: Vec<DayTimeline<'a>>,
    /// Lines scrolled off the top of every column.
    pub scroll: u16,
}

impl<'a> TimelineState<'a> {
    /// Build one timeline per day token, labelled `Day 1`, `Day 2`, ...
    pub fn build(events: &'a [Event], days: &[String]) -> Self {
        let days = days
            .iter()
            .enumerate()
            .map(|(i, day)| DayTimeline {
                label: present::day_label(i + 1, day),
                events: timeline(events, day),
            })
            .collect();
        Self { days, scroll: 0 }
    }

    fn longest(&self) -> usize {
        self.days.iter().map(|d| d.events.len()).max().unwrap_or(0)
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let max = u16::try_from(self.longest().saturating_sub(1)).unwrap_or(u16::MAX);
        match event {
            AppEvent::Nav(Direction::Up) => self.scroll = self.scroll.saturating_sub(1),
            AppEvent::Nav(Direction::Down) => self.scroll = (self.scroll + 1).min(max),
            AppEvent::ScrollUp => self.scroll = self.scroll.saturating_sub(10),
            AppEvent::ScrollDown => self.scroll = self.scroll.saturating_add(10).min(max),
            AppEvent::ScrollToTop => self.scroll = 0,
            AppEvent::ScrollToEnd => self.scroll = max,
            _ => return,
        }
        tracing::debug!(scroll = self.scroll, "timelines: scrolled");
    }
}

pub struct Timelines<'a> {
    state: &'a TimelineState<'a>,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> Timelines<'a> {
    pub fn new(state: &'a TimelineState<'a>, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }
}

impl Widget for Timelines<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        if self.state.days.is_empty() {
            Paragraph::new("No festival days configured.").render(area, buf);
            return;
        }

        let columns = Layout::horizontal(
            self.state.days.iter().map(|_| Constraint::Fill(1)),
        )
        .split(area);

        for (day, col) in self.state.days.iter().zip(columns.iter()) {
            let block = Block::bordered()
                .title(Span::styled(day.label.clone(), self.theme.card_title))
                .border_style(self.theme.border(self.focused));

            let lines: Vec<Line> = if day.events.is_empty() {
                vec![Line::from(Span::styled(
                    "Nothing scheduled.",
                    Style::default().add_modifier(Modifier::DIM),
                ))]
            } else {
                day.events
                    .iter()
                    .map(|e| Line::from(present::timeline_line(e)))
                    .collect()
            };

            Paragraph::new(lines)
                .block(block)
                .wrap(Wrap { trim: false })
                .scroll((self.state.scroll, 0))
                .render(*col, buf);
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    fn event(name: &str, date: &str, time: Option<&str>) -> Event {
        Event {
            event_name: name.into(),
            date: date.into(),
            time: time.map(Into::into),
            ..Event::default()
        }
    }

    #[test]
    fn build_labels_days_and_shares_both() {
        let events = vec![
            event("Quiz", "2025-09-26", Some("10:00 AM")),
            event("Expo", "Both", None),
            event("Debate", "2025-09-27", Some("09:00 AM")),
        ];
        let days = ["2025-09-26".to_string(), "2025-09-27".to_string()];
        let s = TimelineState::build(&events, &days);

        assert_eq!(s.days[0].label, "Day 1 – Friday, 26 Sep 2025");
        let names = |i: usize| -> Vec<&str> {
            s.days[i].events.iter().map(|e| e.event_name.as_str()).collect()
        };
        assert_eq!(names(0), vec!["Quiz", "Expo"]);
        assert_eq!(names(1), vec!["Debate", "Expo"]);
    }

    #[test]
    fn scroll_is_bounded_by_longest_day() {
        let events = vec![event("A", "d1", None), event("B", "d1", None)];
        let mut s = TimelineState::build(&events, &["d1".into()]);
        s.handle(&AppEvent::ScrollDown);
        assert_eq!(s.scroll, 1);
        s.handle(&AppEvent::Nav(Direction::Up));
        s.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(s.scroll, 0);
    }
}
