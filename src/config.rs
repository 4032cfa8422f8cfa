//! Puzzle options.

use std::time::Duration;

use serde::{Deserialize, Deserializer};

/// Default length of the reveal stagger.
pub const DEFAULT_REVEAL_DURATION: Duration = Duration::from_millis(1000);

/// Options supplied by the host when a puzzle is mounted.
///
/// Deserializes from the widget's camelCase props, with `revealDuration` in
/// milliseconds:
///
/// ```
/// use crossword_rust::CrosswordOptions;
///
/// let options: CrosswordOptions =
///     serde_json::from_str(r#"{"theme": "amelia", "revealDuration": 400}"#).unwrap();
/// assert_eq!(options.theme_class(), "theme-amelia");
/// assert_eq!(options.reveal_duration.as_millis(), 400);
/// ```
#[derive(Clone, Debug, PartialEq, Eq, Deserialize)]
#[serde(default, rename_all = "camelCase")]
pub struct CrosswordOptions {
    /// Cosmetic theme name.
    pub theme: Option<String>,
    #[serde(deserialize_with = "duration_from_millis")]
    pub reveal_duration: Duration,
    /// Start with every answer filled in.
    pub revealed: bool,
    pub hide_reset: bool,
    pub hide_reveal: bool,
}

impl Default for CrosswordOptions {
    fn default() -> Self {
        Self {
            theme: None,
            reveal_duration: DEFAULT_REVEAL_DURATION,
            revealed: false,
            hide_reset: false,
            hide_reveal: false,
        }
    }
}

impl CrosswordOptions {
    #[must_use]
    pub fn with_theme(mut self, theme: &str) -> Self {
        self.theme = Some(theme.to_string());
        self
    }

    #[must_use]
    pub const fn with_reveal_duration(mut self, reveal_duration: Duration) -> Self {
        self.reveal_duration = reveal_duration;
        self
    }

    #[must_use]
    pub const fn with_revealed(mut self, revealed: bool) -> Self {
        self.revealed = revealed;
        self
    }

    /// Class name for the theme, empty without one.
    #[must_use]
    pub fn theme_class(&self) -> String {
        self.theme
            .as_deref()
            .filter(|theme| !theme.is_empty())
            .map(|theme| format!("theme-{theme}"))
            .unwrap_or_default()
    }
}

fn duration_from_millis<'de, D>(deserializer: D) -> Result<Duration, D::Error>
where
    D: Deserializer<'de>,
{
    let millis = u64::deserialize(deserializer)?;
    Ok(Duration::from_millis(millis))
}
