//! Ratatui widgets for the cynosure TUI.

pub mod command_bar;
pub mod filter_panel;
pub mod help;
pub mod query_bar;
pub mod results;
pub mod tab_bar;
pub mod timeline;
