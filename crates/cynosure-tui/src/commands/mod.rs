// ---------------------------------------------------------------------------
// Command
// ---------------------------------------------------------------------------

use crate::{
    app::{AppState, Tab},
    theme::Theme,
};

/// A parsed, validated command ready to be executed by the app shell.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Command {
    // Leave the timelines tab; on the search tab, close the app
    Quit,
    // Regardless of tab, close the app
    Exit,
    Help,
    Theme(String),
    // Reset query, age field and every filter
    Clear,
    // 1-based tab number
    Tab(usize),
    // Toggle expanding every brochure extract
    Brochure,
}

impl Command {
    /// Parse a raw command string (the text after the `:` prefix).
    ///
    /// Returns `Ok(cmd)` on success, `Err(message)` on failure. An empty
    /// string returns `Err("")` as a sentinel meaning "close without acting".
    pub fn parse(input: &str) -> Result<Command, String> {
        let input = input.trim();
        if input.is_empty() {
            return Err(String::new());
        }

        let (word, rest) = input
            .split_once(char::is_whitespace)
            .map(|(w, r)| (w, r.trim()))
            .unwrap_or((input, ""));

        match word {
            "q" | "quit" => Ok(Command::Quit),
            "q!" | "quit!" => Ok(Command::Exit),
            "help" => Ok(Command::Help),
            "clear" => Ok(Command::Clear),
            "brochure" => Ok(Command::Brochure),
            "theme" => {
                if rest.is_empty() {
                    Err("usage: theme <default|gruvbox>".to_string())
                } else {
                    Ok(Command::Theme(rest.to_string()))
                }
            }
            "tab" => match rest.parse::<usize>() {
                Ok(n) if (1..=Tab::ALL.len()).contains(&n) => Ok(Command::Tab(n)),
                Ok(_) => Err(format!("tab must be 1–{}", Tab::ALL.len())),
                Err(_) => Err("usage: tab <n>".to_string()),
            },
            other => Err(format!("unknown command: {other}")),
        }
    }
}

/// Execute a parsed [`Command`] against the application state.
pub fn execute_command(s: &mut AppState<'_>, cmd: Command) {
    match cmd {
        Command::Quit => s.quit_or_leave_tab(),
        Command::Exit => s.quit = true,
        Command::Help => s.show_help = !s.show_help,
        Command::Theme(name) => s.theme = Theme::by_name(&name),
        Command::Clear => s.clear_all(),
        Command::Tab(n) => {
            if let Some(tab) = Tab::from_index(n - 1) {
                s.tab = tab;
            }
        }
        Command::Brochure => {
            s.results.show_brochure = !s.results.show_brochure;
            tracing::debug!(show = s.results.show_brochure, "brochures toggled");
        }
    }
}
