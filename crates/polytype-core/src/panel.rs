//! Language panels and their row slots.

/// Language code shared by every Chinese variant's fallback flag.
pub const CHINESE_CODE: &str = "zh-cn";

/// One of the four simultaneous language display regions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Panel {
    /// Shows the phrase in its own language.
    Main,
    English,
    Chinese,
    Russian,
}

impl Panel {
    /// All panels in display order (top to bottom).
    pub const ALL: [Panel; 4] = [Panel::Main, Panel::English, Panel::Chinese, Panel::Russian];

    /// Position of this panel in [`Panel::ALL`].
    pub fn index(self) -> usize {
        match self {
            Panel::Main => 0,
            Panel::English => 1,
            Panel::Chinese => 2,
            Panel::Russian => 3,
        }
    }

    /// Language code this panel always renders in.
    ///
    /// Returns `None` for the main panel, whose language follows the phrase.
    pub fn fixed_language(self) -> Option<&'static str> {
        match self {
            Panel::Main => None,
            Panel::English => Some("en"),
            Panel::Chinese => Some(CHINESE_CODE),
            Panel::Russian => Some("ru"),
        }
    }

    /// Short display name for panel titles.
    pub fn label(self) -> &'static str {
        match self {
            Panel::Main => "main",
            Panel::English => "english",
            Panel::Chinese => "chinese",
            Panel::Russian => "russian",
        }
    }
}

/// The two text rows of a panel.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Row {
    /// Row 1: the line pushed up when the active line overflows.
    Overflow,
    /// Row 2: the line currently being typed.
    Active,
}
