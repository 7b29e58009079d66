//! cynosure TUI — ratatui application shell.

pub mod app;
pub mod commands;
pub mod event;
pub mod theme;
pub mod widgets;

pub use app::App;

use cynosure_core::{config::Config, Catalog};

/// Start the interactive browser over an already-loaded catalog.
pub fn run(catalog: &Catalog, config: Config) -> anyhow::Result<()> {
    let theme = theme::Theme::by_name(&config.ui.theme);
    tracing::info!(events = catalog.len(), theme = %config.ui.theme, "starting tui");
    App::new(catalog, config, theme).run()
}
