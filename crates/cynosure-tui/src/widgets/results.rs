//! Results pane — one card per matching event, in catalog order.
//!
//! # Navigation (when pane is focused)
//!
//! | Key | Action |
//! |-----|--------|
//! | `↑` / `k` | Previous card |
//! | `↓` / `j` | Next card |
//! | `PageUp` / `Ctrl+u` | Up one page of cards |
//! | `PageDown` / `Ctrl+d` | Down one page of cards |
//! | `g` / `G` | First / last card |
//! | `Enter` | Expand or collapse the brochure extract |
//!
//! # Scroll semantics
//!
//! Scrolling is card-granular. `cursor` is an index into `rows`; the first
//! visible card is cached in `offset` and adjusted at render time so the
//! cursor card is always on screen.

use std::cell::Cell;
use std::collections::HashSet;

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use cynosure_core::{
    present::{self, Badge},
    Event, Restricted,
};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{
        Block, Paragraph, Scrollbar, ScrollbarOrientation, ScrollbarState, StatefulWidget, Widget,
    },
};

const PAGE_STEP: usize = 5;

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

pub struct ResultListState<'a> {
    pub rows: Vec<&'a Event>,
    /// Index into `rows` of the highlighted card.
    pub cursor: usize,
    /// Show every brochure extract, not just the expanded ones.
    pub show_brochure: bool,
    /// Event names whose brochure the user expanded with `Enter`.
    expanded: HashSet<&'a str>,
    /// First visible card, fixed up during render.
    offset: Cell<usize>,
}

impl<'a> ResultListState<'a> {
    pub fn new(rows: Vec<&'a Event>, show_brochure: bool) -> Self {
        Self {
            rows,
            cursor: 0,
            show_brochure,
            expanded: HashSet::new(),
            offset: Cell::new(0),
        }
    }

    /// Replace the result set after a recomputation. The cursor is clamped
    /// and the view returns to the top.
    pub fn set_rows(&mut self, rows: Vec<&'a Event>) {
        self.rows = rows;
        self.cursor = 0;
        self.offset.set(0);
    }

    pub fn selected(&self) -> Option<&'a Event> {
        self.rows.get(self.cursor).copied()
    }

    pub fn brochure_open(&self, event: &Event) -> bool {
        self.show_brochure || self.expanded.contains(event.event_name.as_str())
    }

    pub fn handle(&mut self, event: &AppEvent) {
        let total = self.rows.len();
        if total == 0 {
            return;
        }
        let last = total - 1;

        match event {
            AppEvent::Nav(Direction::Up) => {
                self.cursor = self.cursor.saturating_sub(1);
            }
            AppEvent::Nav(Direction::Down) => {
                self.cursor = (self.cursor + 1).min(last);
            }
            AppEvent::ScrollUp => {
                self.cursor = self.cursor.saturating_sub(PAGE_STEP);
            }
            AppEvent::ScrollDown => {
                self.cursor = (self.cursor + PAGE_STEP).min(last);
            }
            AppEvent::ScrollToTop => self.cursor = 0,
            AppEvent::ScrollToEnd => self.cursor = last,
            AppEvent::Enter => {
                let Some(row) = self.selected() else { return };
                if row.brochure_extract.is_none() {
                    return;
                }
                let name = row.event_name.as_str();
                if !self.expanded.remove(name) {
                    self.expanded.insert(name);
                }
                tracing::debug!(event = name, open = self.expanded.contains(name), "results: toggle brochure");
                return;
            }
            _ => return,
        }
        tracing::debug!(cursor = self.cursor, total, "results: cursor moved");
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct ResultList<'a> {
    state: &'a ResultListState<'a>,
    terms: &'a [String],
    focused: bool,
    theme: &'a Theme,
}

impl<'a> ResultList<'a> {
    /// `terms` are the lower-cased query terms, highlighted in card titles.
    pub fn new(
        state: &'a ResultListState<'a>,
        terms: &'a [String],
        focused: bool,
        theme: &'a Theme,
    ) -> Self {
        Self { state, terms, focused, theme }
    }
}

impl Widget for ResultList<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let title = present::result_count_line(self.state.rows.len());
        let block = Block::bordered()
            .title(title)
            .border_style(self.theme.border(self.focused));
        let inner = block.inner(area);
        block.render(area, buf);

        let text_area = Rect { width: inner.width.saturating_sub(1), ..inner };
        let sb_area = Rect {
            x: inner.right().saturating_sub(1),
            width: 1,
            ..inner
        };
        let width = text_area.width as usize;
        let height = text_area.height as usize;

        let cards: Vec<Vec<Line<'static>>> = self
            .state
            .rows
            .iter()
            .map(|e| card_lines(e, self.state.brochure_open(e), self.terms, width, self.theme))
            .collect();

        let cursor = self.state.cursor.min(cards.len().saturating_sub(1));
        let mut offset = self.state.offset.get().min(cursor);
        // Drop cards off the top until the cursor card fits.
        while offset < cursor
            && cards[offset..=cursor].iter().map(Vec::len).sum::<usize>() > height
        {
            offset += 1;
        }
        self.state.offset.set(offset);

        let lines: Vec<Line<'static>> = cards
            .into_iter()
            .enumerate()
            .skip(offset)
            .flat_map(|(i, mut card)| {
                if self.focused && i == cursor {
                    if let Some(first) = card.first_mut() {
                        *first = std::mem::take(first)
                            .patch_style(Style::default().add_modifier(Modifier::REVERSED));
                    }
                }
                card
            })
            .take(height)
            .collect();

        Paragraph::new(lines).render(text_area, buf);

        if !self.state.rows.is_empty() {
            let mut sb_state = ScrollbarState::new(self.state.rows.len()).position(cursor);
            StatefulWidget::render(
                Scrollbar::new(ScrollbarOrientation::VerticalRight)
                    .begin_symbol(None)
                    .end_symbol(None),
                sb_area,
                buf,
                &mut sb_state,
            );
        }
    }
}

// ---------------------------------------------------------------------------
// Card rendering
// ---------------------------------------------------------------------------

fn card_lines(
    event: &Event,
    brochure_open: bool,
    terms: &[String],
    width: usize,
    theme: &Theme,
) -> Vec<Line<'static>> {
    let dim = Style::default().add_modifier(Modifier::DIM);
    let mut lines = vec![Line::from(highlight_title(&event.event_name, terms, theme))];

    lines.push(badge_line(&present::header_badges(event), theme, |b| {
        (b.label == "Domain").then(|| theme.domain_style(&b.value))
    }));
    lines.push(badge_line(&present::detail_badges(event), theme, |b| {
        (b.label == "Restricted").then(|| theme.restricted_style(Restricted::of(event)))
    }));

    if let Some(categories) = present::categories_line(event) {
        lines.extend(wrap(&categories, width).into_iter().map(Line::from));
    }

    let participants = present::participant_lines(event);
    if !participants.is_empty() {
        lines.push(Line::from(Span::styled("Participants per category:", theme.badge_label)));
        lines.extend(participants.into_iter().map(|p| Line::from(format!("  {p}"))));
    }

    if let Some(extract) = event.brochure_extract.as_deref() {
        if brochure_open {
            lines.push(Line::from(Span::styled("▼ Brochure extract / details", theme.badge_label)));
            for paragraph in extract.lines() {
                lines.extend(
                    wrap(paragraph, width.saturating_sub(2))
                        .into_iter()
                        .map(|l| Line::from(format!("  {l}"))),
                );
            }
        } else {
            lines.push(Line::from(Span::styled("▶ Brochure extract / details (Enter)", dim)));
        }
    }

    lines.push(Line::default());
    lines
}

fn badge_line(
    badges: &[Badge],
    theme: &Theme,
    value_style: impl Fn(&Badge) -> Option<Style>,
) -> Line<'static> {
    let mut spans = Vec::with_capacity(badges.len() * 3);
    for (i, badge) in badges.iter().enumerate() {
        if i > 0 {
            spans.push(Span::raw("  "));
        }
        spans.push(Span::styled(format!("{}: ", badge.label), theme.badge_label));
        let style = value_style(badge).unwrap_or(theme.badge_value);
        spans.push(Span::styled(badge.value.clone(), style));
    }
    Line::from(spans)
}

/// Split `name` into spans, styling every case-insensitive occurrence of a
/// query term with the search highlight.
fn highlight_title(name: &str, terms: &[String], theme: &Theme) -> Vec<Span<'static>> {
    let lower = name.to_lowercase();
    // Byte offsets only line up when lower-casing kept the length.
    if terms.is_empty() || lower.len() != name.len() {
        return vec![Span::styled(name.to_string(), theme.card_title)];
    }

    let mut marked = vec![false; name.len()];
    for term in terms.iter().filter(|t| !t.is_empty()) {
        for (start, _) in lower.match_indices(term.as_str()) {
            marked[start..start + term.len()].iter_mut().for_each(|m| *m = true);
        }
    }

    let mut spans = Vec::new();
    let mut run_start = 0;
    let mut run_marked = marked.first().copied().unwrap_or(false);
    for (i, _) in name.char_indices().skip(1) {
        if marked[i] != run_marked {
            spans.push(title_span(&name[run_start..i], run_marked, theme));
            run_start = i;
            run_marked = marked[i];
        }
    }
    spans.push(title_span(&name[run_start..], run_marked, theme));
    spans
}

fn title_span(text: &str, marked: bool, theme: &Theme) -> Span<'static> {
    let style = if marked {
        theme.card_title.patch(theme.search_highlight)
    } else {
        theme.card_title
    };
    Span::styled(text.to_string(), style)
}

/// Greedy word wrap on whitespace. Words longer than `width` get a line
/// of their own.
pub(crate) fn wrap(text: &str, width: usize) -> Vec<String> {
    if width == 0 {
        return vec![text.to_string()];
    }
    let mut out = Vec::new();
    let mut line = String::new();
    for word in text.split_whitespace() {
        let needed = if line.is_empty() { 0 } else { 1 } + word.chars().count();
        if !line.is_empty() && line.chars().count() + needed > width {
            out.push(std::mem::take(&mut line));
        }
        if !line.is_empty() {
            line.push(' ');
        }
        line.push_str(word);
    }
    if !line.is_empty() || out.is_empty() {
        out.push(line);
    }
    out
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use ratatui::{backend::TestBackend, Terminal};

    fn event(name: &str) -> Event {
        Event {
            event_name: name.to_string(),
            domain: "Sports".to_string(),
            date: "2025-09-26".to_string(),
            ..Event::default()
        }
    }

    fn with_brochure(name: &str) -> Event {
        Event {
            brochure_extract: Some("Teams of four.\nBring your own bats.".to_string()),
            ..event(name)
        }
    }

    fn render(state: &ResultListState<'_>, terms: &[String], w: u16, h: u16) -> String {
        let theme = Theme::load_default();
        let mut terminal = Terminal::new(TestBackend::new(w, h)).unwrap();
        terminal
            .draw(|f| f.render_widget(ResultList::new(state, terms, true, &theme), f.area()))
            .unwrap();
        let buffer = terminal.backend().buffer().clone();
        buffer
            .content()
            .chunks(w as usize)
            .map(|row| row.iter().map(|c| c.symbol()).collect::<String>())
            .collect::<Vec<_>>()
            .join("\n")
    }

    #[test]
    fn cursor_stays_in_bounds() {
        let events = [event("A"), event("B"), event("C")];
        let mut s = ResultListState::new(events.iter().collect(), false);
        s.handle(&AppEvent::Nav(Direction::Up));
        assert_eq!(s.cursor, 0);
        s.handle(&AppEvent::ScrollDown);
        assert_eq!(s.cursor, 2);
        s.handle(&AppEvent::ScrollToTop);
        assert_eq!(s.selected().map(|e| e.event_name.as_str()), Some("A"));
    }

    #[test]
    fn enter_toggles_brochure_only_when_present() {
        let events = [event("Quiz"), with_brochure("Cricket")];
        let mut s = ResultListState::new(events.iter().collect(), false);
        s.handle(&AppEvent::Enter);
        assert!(!s.brochure_open(&events[0]));

        s.handle(&AppEvent::Nav(Direction::Down));
        s.handle(&AppEvent::Enter);
        assert!(s.brochure_open(&events[1]));
        s.handle(&AppEvent::Enter);
        assert!(!s.brochure_open(&events[1]));
    }

    #[test]
    fn set_rows_resets_cursor() {
        let events = [event("A"), event("B")];
        let mut s = ResultListState::new(events.iter().collect(), false);
        s.handle(&AppEvent::ScrollToEnd);
        s.set_rows(vec![&events[0]]);
        assert_eq!(s.cursor, 0);
    }

    #[test]
    fn title_shows_result_count() {
        let events = [event("Inter-House Basketball")];
        let s = ResultListState::new(events.iter().collect(), false);
        let screen = render(&s, &[], 60, 8);
        assert!(screen.contains("1 result(s)."), "{screen}");
        assert!(screen.contains("Inter-House Basketball"));
        assert!(screen.contains("Restricted: No"));
    }

    #[test]
    fn brochure_collapsed_until_opened() {
        let events = [with_brochure("Cricket")];
        let mut s = ResultListState::new(events.iter().collect(), false);
        assert!(!render(&s, &[], 60, 10).contains("Bring your own bats."));
        s.show_brochure = true;
        assert!(render(&s, &[], 60, 10).contains("Bring your own bats."));
    }

    #[test]
    fn render_scrolls_cursor_into_view() {
        let events: Vec<Event> = (0..10).map(|i| event(&format!("Event {i}"))).collect();
        let mut s = ResultListState::new(events.iter().collect(), false);
        s.handle(&AppEvent::ScrollToEnd);
        let screen = render(&s, &[], 40, 10);
        assert!(screen.contains("Event 9"), "{screen}");
        assert!(!screen.contains("Event 0"));
    }

    #[test]
    fn highlight_splits_on_terms() {
        let theme = Theme::load_default();
        let spans = highlight_title("Inter-House Basketball", &["basket".into()], &theme);
        let texts: Vec<_> = spans.iter().map(|s| s.content.as_ref()).collect();
        assert_eq!(texts, vec!["Inter-House ", "Basket", "ball"]);
    }

    #[test]
    fn wrap_breaks_on_words() {
        assert_eq!(wrap("one two three four", 9), vec!["one two", "three", "four"]);
        assert_eq!(wrap("", 10), vec![""]);
        assert_eq!(wrap("supercalifragilistic", 5), vec!["supercalifragilistic"]);
    }
}
