//! Top-level application state and the main event loop.
//!
//! [`App::run`] sets up the terminal, drives the crossterm event loop, and
//! tears everything down cleanly on exit or panic.

use crate::{
    commands::{execute_command, Command},
    event::{self, AppEvent},
    theme::Theme,
    widgets::{
        command_bar::{CommandBar, CommandBarState},
        filter_panel::{FilterPanel, FilterPanelState},
        help::HelpPopup,
        query_bar::{QueryBar, QueryBarState},
        results::{ResultList, ResultListState},
        tab_bar::TabBar,
        timeline::{TimelineState, Timelines},
    },
};
use crossterm::{
    event::{self as ct_event, Event},
    execute,
    terminal::{disable_raw_mode, enable_raw_mode, EnterAlternateScreen, LeaveAlternateScreen},
};
use cynosure_core::{config::Config, search, Catalog, Filters, Query};
use ratatui::{
    backend::CrosstermBackend,
    layout::{Constraint, Layout, Rect},
    Frame, Terminal,
};
use std::{io, time::Duration};

// ---------------------------------------------------------------------------
// Focus + tab types
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Focus {
    Filters,
    Results,
    Query,
    Age,
    /// Vim-style `:` command line is active.
    Command,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Tab {
    Search,
    Timelines,
}

impl Tab {
    pub const ALL: [Tab; 2] = [Tab::Search, Tab::Timelines];

    pub fn title(self) -> &'static str {
        match self {
            Tab::Search => "search",
            Tab::Timelines => "timelines",
        }
    }

    pub fn index(self) -> usize {
        match self {
            Tab::Search => 0,
            Tab::Timelines => 1,
        }
    }

    pub fn from_index(i: usize) -> Option<Tab> {
        Tab::ALL.get(i).copied()
    }
}

// ---------------------------------------------------------------------------
// AppState
// ---------------------------------------------------------------------------

pub struct AppState<'a> {
    pub catalog: &'a Catalog,
    pub tab: Tab,
    pub focus: Focus,
    /// Focus state before entering command mode, restored on exit.
    pub prev_focus: Focus,
    pub theme: Theme,
    pub config: Config,
    pub show_help: bool,
    pub command_bar: CommandBarState,
    pub query: QueryBarState,
    pub age: QueryBarState,
    pub panel: FilterPanelState,
    /// Mirrors `panel` and `age`; rebuilt on every recomputation.
    pub filters: Filters,
    pub results: ResultListState<'a>,
    pub timelines: TimelineState<'a>,
    pub quit: bool,
}

impl<'a> AppState<'a> {
    /// Re-run the query pipeline over the whole catalog.
    pub fn recompute(&mut self) {
        self.panel.apply(&mut self.filters);
        self.filters.age_substring = self.age.query.clone();
        let rows = search(self.catalog.events(), &self.query.query, &self.filters);
        tracing::debug!(
            query = %self.query.query,
            filters = ?self.filters,
            results = rows.len(),
            "recomputed results"
        );
        self.results.set_rows(rows);
    }

    pub fn clear_all(&mut self) {
        tracing::debug!("clearing query and filters");
        self.query.clear();
        self.age.clear();
        self.panel.clear();
        self.recompute();
    }

    pub fn quit_or_leave_tab(&mut self) {
        if self.tab == Tab::Search {
            tracing::debug!("quit");
            self.quit = true;
        } else {
            tracing::debug!(tab = ?self.tab, "leaving tab");
            self.tab = Tab::Search;
        }
    }

    fn filtered(&self) -> bool {
        !self.filters.is_empty() || !self.query.query.trim().is_empty()
    }
}

/// Options offered by a filter group: the configured list first, then any
/// value seen in the catalog that the configuration does not mention.
fn merge_options(configured: &[String], seen: Vec<&str>) -> Vec<String> {
    let mut options = configured.to_vec();
    for value in seen {
        if !options.iter().any(|o| o == value) {
            options.push(value.to_string());
        }
    }
    options
}

// ---------------------------------------------------------------------------
// App
// ---------------------------------------------------------------------------

pub struct App<'a> {
    state: AppState<'a>,
}

impl<'a> App<'a> {
    pub fn new(catalog: &'a Catalog, config: Config, theme: Theme) -> Self {
        let dates = merge_options(&config.schedule.dates, catalog.distinct(|e| e.date.as_str()));
        let domains =
            merge_options(&config.schedule.domains, catalog.distinct(|e| e.domain.as_str()));

        let mut state = AppState {
            catalog,
            tab: Tab::Search,
            focus: Focus::Query,
            prev_focus: Focus::Query,
            theme,
            show_help: false,
            command_bar: CommandBarState::default(),
            query: QueryBarState::default(),
            age: QueryBarState::default(),
            panel: FilterPanelState::new(&dates, &domains),
            filters: Filters::new(),
            results: ResultListState::new(Vec::new(), config.ui.show_brochure),
            timelines: TimelineState::build(catalog.events(), &config.schedule.days),
            config,
            quit: false,
        };
        state.recompute();

        App { state }
    }

    pub fn state(&self) -> &AppState<'a> {
        &self.state
    }

    /// Set up the terminal, run the event loop, and restore the terminal on exit.
    pub fn run(mut self) -> anyhow::Result<()> {
        install_panic_hook();

        enable_raw_mode()?;
        execute!(io::stdout(), EnterAlternateScreen)?;
        let backend = CrosstermBackend::new(io::stdout());
        let mut terminal = Terminal::new(backend)?;

        let result = self.event_loop(&mut terminal);

        // Always restore terminal, even if the loop returned an error
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        let _ = terminal.show_cursor();

        result
    }

    fn event_loop(
        &mut self,
        terminal: &mut Terminal<CrosstermBackend<io::Stdout>>,
    ) -> anyhow::Result<()> {
        loop {
            {
                let s = &self.state;
                terminal.draw(|frame| draw(frame, s))?;
            }

            if self.state.quit {
                break;
            }

            if ct_event::poll(Duration::from_millis(16))? {
                match ct_event::read()? {
                    Event::Key(key) if key.kind == ct_event::KeyEventKind::Press => {
                        let raw = Event::Key(key);
                        // Use insert-mode mapping when a text field is focused
                        let app_event = if is_insert_mode(&self.state) {
                            event::to_app_event_insert(raw)
                        } else {
                            event::to_app_event(raw)
                        };
                        if let Some(ev) = app_event {
                            tracing::debug!(focus = ?self.state.focus, event = ?ev, "key event");
                            self.handle(ev);
                        }
                    }
                    other => {
                        if let Some(ev) = event::to_app_event(other) {
                            self.handle(ev);
                        }
                    }
                }
            }
        }
        Ok(())
    }

    pub fn handle(&mut self, event: AppEvent) {
        let s = &mut self.state;

        // Help popup intercepts all events; only close keys pass through.
        if s.show_help {
            if matches!(event, AppEvent::Char('?') | AppEvent::Escape | AppEvent::Quit) {
                tracing::debug!("help popup closed");
                s.show_help = false;
            }
            return;
        }

        // Command mode intercepts all events.
        if s.focus == Focus::Command {
            match event {
                AppEvent::Escape => {
                    tracing::debug!("command bar cancelled");
                    s.command_bar.clear();
                    s.focus = s.prev_focus;
                }
                AppEvent::Enter => match Command::parse(&s.command_bar.input) {
                    Ok(cmd) => {
                        tracing::debug!(command = ?cmd, "executing command");
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                        execute_command(s, cmd);
                    }
                    Err(msg) if msg.is_empty() => {
                        s.command_bar.clear();
                        s.focus = s.prev_focus;
                    }
                    Err(msg) => s.command_bar.error = Some(msg),
                },
                other => s.command_bar.handle(&other),
            }
            return;
        }

        let typing = is_insert_mode(s);

        match event {
            AppEvent::Char('?') if !typing => {
                tracing::debug!("help popup opened");
                s.show_help = true;
            }

            AppEvent::Char(':') if !typing => {
                tracing::debug!(prev_focus = ?s.focus, "entering command mode");
                s.prev_focus = s.focus;
                s.command_bar.clear();
                s.focus = Focus::Command;
            }

            // Ctrl+c while typing quits outright
            AppEvent::Quit if typing => s.quit = true,
            AppEvent::Quit => s.quit_or_leave_tab(),

            AppEvent::SelectTab(i) => {
                if let Some(tab) = Tab::from_index(i) {
                    tracing::debug!(tab = ?tab, "tab selected");
                    s.tab = tab;
                }
            }

            AppEvent::ClearFilters => s.clear_all(),

            AppEvent::Escape | AppEvent::Enter if typing => {
                tracing::debug!(from = ?s.focus, "focus -> Results");
                s.focus = Focus::Results;
            }

            AppEvent::FocusNext => {
                let next = match s.focus {
                    Focus::Filters => Focus::Results,
                    Focus::Results => Focus::Query,
                    Focus::Query => Focus::Age,
                    Focus::Age | Focus::Command => Focus::Filters,
                };
                tracing::debug!(from = ?s.focus, to = ?next, "focus cycle");
                s.focus = next;
            }

            AppEvent::QueryFocus | AppEvent::AgeFocus => {
                s.tab = Tab::Search;
                s.focus = if event == AppEvent::QueryFocus { Focus::Query } else { Focus::Age };
                tracing::debug!(focus = ?s.focus, "focus -> text field");
            }

            // Terminal resize is handled automatically by ratatui
            AppEvent::Resize(_, _) => {}

            other => dispatch_to_focused(s, other),
        }
    }
}

/// True when a text field owns the keyboard, so letters type rather than
/// trigger shortcuts.
fn is_insert_mode(s: &AppState<'_>) -> bool {
    s.focus == Focus::Command
        || (s.tab == Tab::Search && matches!(s.focus, Focus::Query | Focus::Age))
}

/// Route an event to the widget that owns the current focus.
fn dispatch_to_focused(s: &mut AppState<'_>, event: AppEvent) {
    if s.tab == Tab::Timelines {
        s.timelines.handle(&event);
        return;
    }
    let changed = match s.focus {
        Focus::Filters => s.panel.handle(&event),
        Focus::Results => {
            s.results.handle(&event);
            false
        }
        Focus::Query => s.query.handle(&event),
        Focus::Age => s.age.handle(&event),
        Focus::Command => false, // handled before dispatch
    };
    if changed {
        s.recompute();
    }
}

// ---------------------------------------------------------------------------
// Rendering
// ---------------------------------------------------------------------------

pub fn draw(frame: &mut Frame, state: &AppState<'_>) {
    let area = frame.area();

    let [tabs_area, body, inputs] = Layout::vertical([
        Constraint::Length(1),
        Constraint::Fill(1),
        Constraint::Length(if state.tab == Tab::Search { 3 } else { 0 }),
    ])
    .areas(area);

    frame.render_widget(TabBar::new(state.tab, state.filtered(), &state.theme), tabs_area);

    match state.tab {
        Tab::Search => draw_search(frame, state, body, inputs),
        Tab::Timelines => frame.render_widget(
            Timelines::new(&state.timelines, state.focus != Focus::Command, &state.theme),
            body,
        ),
    }

    if state.show_help {
        frame.render_widget(HelpPopup::new(&state.theme), area);
    }

    // Command bar overlays the bottom row of the screen
    if state.focus == Focus::Command {
        let cmd_area = Rect { y: area.bottom().saturating_sub(1), height: 1, ..area };
        frame.render_widget(CommandBar::new(&state.command_bar, &state.theme), cmd_area);
        let col = state.command_bar.cursor_col(cmd_area);
        frame.set_cursor_position((col, cmd_area.y));
    }
}

fn draw_search(frame: &mut Frame, state: &AppState<'_>, body: Rect, inputs: Rect) {
    let pct = state.config.ui.filter_pane_width_pct.min(80);
    let [left, right] =
        Layout::horizontal([Constraint::Percentage(pct), Constraint::Fill(1)]).areas(body);
    let [query_area, age_area] =
        Layout::horizontal([Constraint::Fill(3), Constraint::Fill(1)]).areas(inputs);

    let query = Query::parse(&state.query.query);

    frame.render_widget(
        FilterPanel::new(&state.panel, state.focus == Focus::Filters, &state.theme),
        left,
    );
    frame.render_widget(
        ResultList::new(&state.results, query.terms(), state.focus == Focus::Results, &state.theme),
        right,
    );

    let query_bar = QueryBar::new(
        &state.query,
        "Search",
        "/ to search names, venues, teachers, categories…",
        state.focus == Focus::Query,
        &state.theme,
    );
    let age_bar = QueryBar::new(
        &state.age,
        "Age / category",
        "a to filter, e.g. 9th",
        state.focus == Focus::Age,
        &state.theme,
    );

    // Position the terminal cursor in the focused text field
    let cursor = match state.focus {
        Focus::Query => Some(query_bar.cursor_position(query_area)),
        Focus::Age => Some(age_bar.cursor_position(age_area)),
        _ => None,
    };
    frame.render_widget(query_bar, query_area);
    frame.render_widget(age_bar, age_area);
    if let Some(pos) = cursor {
        frame.set_cursor_position(pos);
    }
}

// ---------------------------------------------------------------------------
// Terminal helpers
// ---------------------------------------------------------------------------

fn install_panic_hook() {
    let original = std::panic::take_hook();
    std::panic::set_hook(Box::new(move |info| {
        let _ = disable_raw_mode();
        let _ = execute!(io::stdout(), LeaveAlternateScreen);
        original(info);
    }));
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------
