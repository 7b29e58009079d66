//! Colour theme for the cynosure TUI.
//!
//! Themes are defined as TOML files. The built-in themes are embedded in the
//! binary via [`include_str!`] so the application works without any files on
//! disk. Call [`Theme::by_name`] at startup and pass the result through the
//! application as a shared reference.
//!
//! # Colour assignment for domains
//!
//! Domain names are hashed to a stable index into the palette so the same
//! domain always gets the same colour, regardless of the order in which
//! domains appear in the schedule.

use config::{Config, File, FileFormat};
use cynosure_core::Restricted;
use ratatui::style::{Color, Modifier, Style};
use serde::Deserialize;

const DEFAULT_THEME_SRC: &str = include_str!("themes/default.toml");
const GRUVBOX_DARK_THEME_SRC: &str = include_str!("themes/gruvbox_dark.toml");

// ---------------------------------------------------------------------------
// Raw (serde) types — mirror the TOML structure
// ---------------------------------------------------------------------------

#[derive(Debug, Deserialize)]
struct RawStyle {
    fg: Option<String>,
    bg: Option<String>,
    #[serde(default)]
    bold: bool,
    #[serde(default)]
    dim: bool,
    #[serde(default)]
    italic: bool,
    #[serde(default)]
    underlined: bool,
}

impl RawStyle {
    fn into_style(self) -> Style {
        let mut style = Style::default();
        if let Some(c) = self.fg.as_deref().and_then(parse_color) {
            style = style.fg(c);
        }
        if let Some(c) = self.bg.as_deref().and_then(parse_color) {
            style = style.bg(c);
        }
        if self.bold {
            style = style.add_modifier(Modifier::BOLD);
        }
        if self.dim {
            style = style.add_modifier(Modifier::DIM);
        }
        if self.italic {
            style = style.add_modifier(Modifier::ITALIC);
        }
        if self.underlined {
            style = style.add_modifier(Modifier::UNDERLINED);
        }
        style
    }
}

#[derive(Debug, Deserialize)]
struct RawCards {
    title: RawStyle,
    label: RawStyle,
    value: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawRestricted {
    yes: RawStyle,
    no: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawBorders {
    focused: RawStyle,
    command_bar: RawStyle,
    unfocused: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawSearch {
    highlight: RawStyle,
}

#[derive(Debug, Deserialize)]
struct RawDomains {
    palette: Vec<String>,
}

#[derive(Debug, Deserialize)]
struct RawTheme {
    cards: RawCards,
    restricted: RawRestricted,
    borders: RawBorders,
    search: RawSearch,
    domains: RawDomains,
}

// ---------------------------------------------------------------------------
// Public Theme type
// ---------------------------------------------------------------------------

/// Application colour theme.
///
/// All styles are pre-resolved ratatui [`Style`] values — no allocation at
/// render time.
#[derive(Debug, Clone)]
pub struct Theme {
    /// Event name on a result card.
    pub card_title: Style,
    /// `Label:` part of a badge.
    pub badge_label: Style,
    /// Value part of a badge.
    pub badge_value: Style,

    pub restricted_yes: Style,
    pub restricted_no: Style,

    /// Border style for the currently focused pane.
    pub border_focused: Style,
    /// Style of the `:` prompt in the command bar.
    pub border_command_bar: Style,
    /// Border style for unfocused panes.
    pub border_unfocused: Style,

    /// Inline highlight applied to query terms inside event names.
    pub search_highlight: Style,

    /// Ordered colour palette used for domain colouring.
    domain_palette: Vec<Color>,
}

impl Theme {
    /// Load and parse the embedded default theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed, which the unit tests rule out.
    pub fn load_default() -> Self {
        Self::from_toml_str(DEFAULT_THEME_SRC).expect("embedded default theme must be valid TOML")
    }

    /// Load and parse the embedded Gruvbox Dark theme.
    ///
    /// # Panics
    ///
    /// Panics if the embedded TOML is malformed.
    pub fn load_gruvbox_dark() -> Self {
        Self::from_toml_str(GRUVBOX_DARK_THEME_SRC)
            .expect("embedded gruvbox dark theme must be valid TOML")
    }

    /// Resolve a theme name from config or the `:theme` command. Unknown
    /// names fall back to the default theme.
    pub fn by_name(name: &str) -> Self {
        match name.to_ascii_lowercase().as_str() {
            "gruvbox" | "gruvbox_dark" | "gruvbox-dark" => Self::load_gruvbox_dark(),
            other => {
                if other != "default" {
                    tracing::debug!(theme = other, "unknown theme, using default");
                }
                Self::load_default()
            }
        }
    }

    /// Parse a theme from a TOML string.
    ///
    /// Unknown keys are ignored so user themes stay forward-compatible.
    pub fn from_toml_str(src: &str) -> anyhow::Result<Self> {
        let raw: RawTheme = Config::builder()
            .add_source(File::from_str(src, FileFormat::Toml))
            .build()?
            .try_deserialize()?;

        Ok(Self {
            card_title: raw.cards.title.into_style(),
            badge_label: raw.cards.label.into_style(),
            badge_value: raw.cards.value.into_style(),
            restricted_yes: raw.restricted.yes.into_style(),
            restricted_no: raw.restricted.no.into_style(),
            border_focused: raw.borders.focused.into_style(),
            border_command_bar: raw.borders.command_bar.into_style(),
            border_unfocused: raw.borders.unfocused.into_style(),
            search_highlight: raw.search.highlight.into_style(),
            domain_palette: raw
                .domains
                .palette
                .iter()
                .filter_map(|s| parse_color(s))
                .collect(),
        })
    }

    pub fn restricted_style(&self, label: Restricted) -> Style {
        match label {
            Restricted::Yes => self.restricted_yes,
            Restricted::No => self.restricted_no,
        }
    }

    /// Return a stable [`Style`] for a domain name.
    pub fn domain_style(&self, domain: &str) -> Style {
        if self.domain_palette.is_empty() {
            return Style::default();
        }
        let idx = stable_hash(domain) % self.domain_palette.len();
        Style::default().fg(self.domain_palette[idx])
    }

    pub fn border(&self, focused: bool) -> Style {
        if focused {
            self.border_focused
        } else {
            self.border_unfocused
        }
    }
}

// ---------------------------------------------------------------------------
// Helpers
// ---------------------------------------------------------------------------

/// djb2-style hash, stable across Rust versions and process restarts.
fn stable_hash(s: &str) -> usize {
    s.bytes().fold(5381usize, |acc, b| {
        acc.wrapping_mul(31).wrapping_add(b as usize)
    })
}

/// Parse a colour name into a ratatui [`Color`].
///
/// Accepts:
/// - Named terminal colours (case-insensitive): `red`, `dark_gray`, etc.
/// - Hex RGB: `#rrggbb`
/// - 256-colour indexed: `indexed:N`
fn parse_color(s: &str) -> Option<Color> {
    match s.to_ascii_lowercase().as_str() {
        "black" => Some(Color::Black),
        "red" => Some(Color::Red),
        "green" => Some(Color::Green),
        "yellow" => Some(Color::Yellow),
        "blue" => Some(Color::Blue),
        "magenta" => Some(Color::Magenta),
        "cyan" => Some(Color::Cyan),
        "gray" | "grey" => Some(Color::Gray),
        "dark_gray" | "darkgray" | "dark_grey" | "darkgrey" => Some(Color::DarkGray),
        "light_red" => Some(Color::LightRed),
        "light_green" => Some(Color::LightGreen),
        "light_yellow" => Some(Color::LightYellow),
        "light_blue" => Some(Color::LightBlue),
        "light_magenta" => Some(Color::LightMagenta),
        "light_cyan" => Some(Color::LightCyan),
        "white" => Some(Color::White),
        s if s.starts_with('#') && s.len() == 7 => {
            let r = u8::from_str_radix(&s[1..3], 16).ok()?;
            let g = u8::from_str_radix(&s[3..5], 16).ok()?;
            let b = u8::from_str_radix(&s[5..7], 16).ok()?;
            Some(Color::Rgb(r, g, b))
        }
        s if s.starts_with("indexed:") => {
            let n: u8 = s["indexed:".len()..].parse().ok()?;
            Some(Color::Indexed(n))
        }
        _ => None,
    }
}

// ---------------------------------------------------------------------------
// Tests
// ---------------------------------------------------------------------------

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn default_theme_loads() {
        let theme = Theme::load_default();
        assert_ne!(theme.card_title, Style::default());
        assert_ne!(theme.border_focused, Style::default());
        assert_ne!(theme.search_highlight, Style::default());
        assert!(!theme.domain_palette.is_empty());
    }

    #[test]
    fn gruvbox_dark_theme_loads() {
        let theme = Theme::load_gruvbox_dark();
        assert_ne!(theme.restricted_yes, Style::default());
        assert_ne!(theme.border_focused, Style::default());
        assert_eq!(theme.domain_palette.len(), 6);
    }

    #[test]
    fn by_name_resolves_aliases() {
        let gruvbox = Theme::load_gruvbox_dark();
        assert_eq!(Theme::by_name("Gruvbox").border_focused, gruvbox.border_focused);
        assert_eq!(
            Theme::by_name("no-such-theme").border_focused,
            Theme::load_default().border_focused
        );
    }

    #[test]
    fn restricted_styles_differ() {
        let theme = Theme::load_default();
        assert_ne!(
            theme.restricted_style(Restricted::Yes),
            theme.restricted_style(Restricted::No)
        );
    }

    #[test]
    fn domain_style_is_stable() {
        let theme = Theme::load_default();
        assert_eq!(theme.domain_style("Sports"), theme.domain_style("Sports"));
    }

    #[test]
    fn different_domains_can_differ() {
        let theme = Theme::load_default();
        let styles: Vec<_> = ["Literary", "Fine Arts", "Commerce", "Performing Arts", "Cynoshow", "Sports"]
            .iter()
            .map(|n| theme.domain_style(n))
            .collect();
        let unique: std::collections::HashSet<_> = styles.iter().collect();
        assert!(unique.len() > 1, "all domains mapped to the same colour");
    }

    #[test]
    fn parse_hex_color() {
        assert_eq!(parse_color("#ff0080"), Some(Color::Rgb(255, 0, 128)));
    }

    #[test]
    fn parse_indexed_color() {
        assert_eq!(parse_color("indexed:42"), Some(Color::Indexed(42)));
    }

    #[test]
    fn parse_unknown_color_returns_none() {
        assert_eq!(parse_color("chartreuse"), None);
    }
}
