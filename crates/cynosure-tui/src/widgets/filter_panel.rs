//! Filter panel widget — collapsible multi-select groups in the left pane.
//!
//! Three groups are shown: Date, Domain and Restricted. Each option is a
//! checkbox; a group header summarises its children.
//!
//! # Navigation
//! - `↑`/`k` and `↓`/`j` move the cursor up and down the visible list.
//! - `→`/`l` expands the focused group; `←`/`h` collapses it (from an option
//!   row the cursor jumps back to the header).
//! - `Space` toggles the focused option, or every option of a focused group.
//! - `Enter` toggles an option, or expands/collapses a group.

use crate::event::{AppEvent, Direction};
use crate::theme::Theme;
use cynosure_core::{Filters, Restricted};
use ratatui::{
    buffer::Buffer,
    layout::Rect,
    style::{Modifier, Style},
    text::{Line, Span},
    widgets::{Block, List, ListItem, ListState, StatefulWidget, Widget},
};

// ---------------------------------------------------------------------------
// Model
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FilterKind {
    Date,
    Domain,
    Restricted,
}

impl FilterKind {
    fn title(self) -> &'static str {
        match self {
            FilterKind::Date => "Date",
            FilterKind::Domain => "Domain",
            FilterKind::Restricted => "Restricted?",
        }
    }
}

/// Summary state of a group header.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum GroupSelection {
    All,
    None,
    Partial,
}

#[derive(Debug, Clone)]
pub struct FilterOption {
    pub value: String,
    pub selected: bool,
}

#[derive(Debug, Clone)]
pub struct FilterGroup {
    pub kind: FilterKind,
    pub expanded: bool,
    pub options: Vec<FilterOption>,
}

impl FilterGroup {
    pub fn new<S: Into<String>>(kind: FilterKind, values: impl IntoIterator<Item = S>) -> Self {
        Self {
            kind,
            expanded: true,
            options: values
                .into_iter()
                .map(|v| FilterOption { value: v.into(), selected: false })
                .collect(),
        }
    }

    pub fn selection(&self) -> GroupSelection {
        let picked = self.options.iter().filter(|o| o.selected).count();
        match picked {
            0 => GroupSelection::None,
            n if n == self.options.len() => GroupSelection::All,
            _ => GroupSelection::Partial,
        }
    }

    pub fn selected_values(&self) -> impl Iterator<Item = &str> {
        self.options.iter().filter(|o| o.selected).map(|o| o.value.as_str())
    }

    /// Partial or full selections clear; an empty group selects everything.
    fn toggle_all(&mut self) {
        let select = self.selection() == GroupSelection::None;
        for option in &mut self.options {
            option.selected = select;
        }
    }
}

/// One line of the flattened panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Row {
    Group(usize),
    Option(usize, usize),
}

// ---------------------------------------------------------------------------
// State
// ---------------------------------------------------------------------------

#[derive(Debug, Default)]
pub struct FilterPanelState {
    pub groups: Vec<FilterGroup>,
    /// Index into the currently-visible (flattened) rows.
    pub cursor: usize,
}

impl FilterPanelState {
    pub fn new(dates: &[String], domains: &[String]) -> Self {
        Self {
            groups: vec![
                FilterGroup::new(FilterKind::Date, dates.iter().cloned()),
                FilterGroup::new(FilterKind::Domain, domains.iter().cloned()),
                FilterGroup::new(FilterKind::Restricted, Restricted::ALL.map(|r| r.as_str())),
            ],
            cursor: 0,
        }
    }

    /// Flatten the groups into rows, respecting expanded state.
    pub fn visible(&self) -> Vec<Row> {
        let mut rows = Vec::new();
        for (g, group) in self.groups.iter().enumerate() {
            rows.push(Row::Group(g));
            if group.expanded {
                rows.extend((0..group.options.len()).map(|o| Row::Option(g, o)));
            }
        }
        rows
    }

    fn cursor_row(&self) -> Option<Row> {
        self.visible().get(self.cursor).copied()
    }

    /// Handle an [`AppEvent`]. Returns `true` when a selection changed.
    pub fn handle(&mut self, event: &AppEvent) -> bool {
        match (event, self.cursor_row()) {
            (AppEvent::Nav(Direction::Up), _) => {
                self.cursor = self.cursor.saturating_sub(1);
                tracing::debug!(cursor = self.cursor, "filters: cursor up");
                false
            }
            (AppEvent::Nav(Direction::Down), _) => {
                let max = self.visible().len().saturating_sub(1);
                if self.cursor < max {
                    self.cursor += 1;
                }
                tracing::debug!(cursor = self.cursor, "filters: cursor down");
                false
            }
            (AppEvent::ScrollToTop, _) => {
                self.cursor = 0;
                false
            }
            (AppEvent::ScrollToEnd, _) => {
                self.cursor = self.visible().len().saturating_sub(1);
                false
            }
            (AppEvent::Nav(Direction::Right), Some(Row::Group(g))) => {
                tracing::debug!(group = ?self.groups[g].kind, "filters: expand");
                self.groups[g].expanded = true;
                false
            }
            (AppEvent::Nav(Direction::Left), Some(Row::Group(g) | Row::Option(g, _))) => {
                tracing::debug!(group = ?self.groups[g].kind, "filters: collapse");
                self.groups[g].expanded = false;
                self.cursor = self
                    .visible()
                    .iter()
                    .position(|r| *r == Row::Group(g))
                    .unwrap_or(0);
                false
            }
            (AppEvent::Enter, Some(Row::Group(g))) => {
                self.groups[g].expanded = !self.groups[g].expanded;
                tracing::debug!(group = ?self.groups[g].kind, expanded = self.groups[g].expanded, "filters: toggle expand");
                self.clamp_cursor();
                false
            }
            (AppEvent::Char(' '), Some(Row::Group(g))) => {
                self.groups[g].toggle_all();
                tracing::debug!(group = ?self.groups[g].kind, selection = ?self.groups[g].selection(), "filters: toggle group");
                true
            }
            (AppEvent::Char(' ') | AppEvent::Enter, Some(Row::Option(g, o))) => {
                let option = &mut self.groups[g].options[o];
                option.selected = !option.selected;
                tracing::debug!(value = %option.value, selected = option.selected, "filters: toggle option");
                true
            }
            _ => false,
        }
    }

    fn clamp_cursor(&mut self) {
        let max = self.visible().len().saturating_sub(1);
        if self.cursor > max {
            self.cursor = max;
        }
    }

    pub fn group(&self, kind: FilterKind) -> Option<&FilterGroup> {
        self.groups.iter().find(|g| g.kind == kind)
    }

    /// Select `value` in group `kind`. Returns `false` if no such option.
    pub fn select(&mut self, kind: FilterKind, value: &str) -> bool {
        self.groups
            .iter_mut()
            .filter(|g| g.kind == kind)
            .flat_map(|g| g.options.iter_mut())
            .find(|o| o.value == value)
            .map(|o| o.selected = true)
            .is_some()
    }

    /// Copy the checkbox selections into `filters`, leaving the age field alone.
    pub fn apply(&self, filters: &mut Filters) {
        filters.dates.clear();
        filters.domains.clear();
        filters.restricted.clear();
        for group in &self.groups {
            match group.kind {
                FilterKind::Date => filters
                    .dates
                    .extend(group.selected_values().map(str::to_string)),
                FilterKind::Domain => filters
                    .domains
                    .extend(group.selected_values().map(str::to_string)),
                FilterKind::Restricted => filters
                    .restricted
                    .extend(group.selected_values().filter_map(|v| v.parse::<Restricted>().ok())),
            }
        }
    }

    pub fn clear(&mut self) {
        for option in self.groups.iter_mut().flat_map(|g| g.options.iter_mut()) {
            option.selected = false;
        }
    }

    pub fn active_count(&self) -> usize {
        self.groups.iter().map(|g| g.selected_values().count()).sum()
    }
}

// ---------------------------------------------------------------------------
// Widget
// ---------------------------------------------------------------------------

pub struct FilterPanel<'a> {
    state: &'a FilterPanelState,
    focused: bool,
    theme: &'a Theme,
}

impl<'a> FilterPanel<'a> {
    pub fn new(state: &'a FilterPanelState, focused: bool, theme: &'a Theme) -> Self {
        Self { state, focused, theme }
    }

    fn option_style(&self, kind: FilterKind, value: &str) -> Style {
        match kind {
            FilterKind::Domain => self.theme.domain_style(value),
            FilterKind::Restricted => value
                .parse::<Restricted>()
                .map(|r| self.theme.restricted_style(r))
                .unwrap_or_default(),
            FilterKind::Date => Style::default(),
        }
    }
}

impl Widget for FilterPanel<'_> {
    fn render(self, area: Rect, buf: &mut Buffer) {
        let block = Block::bordered()
            .title("Filters")
            .border_style(self.theme.border(self.focused));

        let inner = block.inner(area);
        block.render(area, buf);

        let items: Vec<ListItem> = self
            .state
            .visible()
            .into_iter()
            .map(|row| match row {
                Row::Group(g) => {
                    let group = &self.state.groups[g];
                    let expand = if group.expanded { "▼ " } else { "▶ " };
                    let sel = match group.selection() {
                        GroupSelection::All => " ✓",
                        GroupSelection::None => " ○",
                        GroupSelection::Partial => " ◐",
                    };
                    ListItem::new(Line::from(vec![
                        Span::raw(expand),
                        Span::styled(
                            group.kind.title(),
                            Style::default().add_modifier(Modifier::BOLD),
                        ),
                        Span::raw(sel),
                    ]))
                }
                Row::Option(g, o) => {
                    let group = &self.state.groups[g];
                    let option = &group.options[o];
                    let mark = if option.selected { "  ✓ " } else { "  ○ " };
                    ListItem::new(Line::from(vec![
                        Span::raw(mark),
                        Span::styled(
                            option.value.clone(),
                            self.option_style(group.kind, &option.value),
                        ),
                    ]))
                }
            })
            .collect();

        let highlight = if self.focused {
            Style::default().add_modifier(Modifier::REVERSED)
        } else {
            Style::default()
        };
        let list = List::new(items).highlight_style(highlight);

        let mut list_state = ListState::default().with_selected(Some(self.state.cursor));
        StatefulWidget::render(list, inner, buf, &mut list_state);
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
