//! Reveal engine: types one panel's text into its two rows.
//!
//! Chinese text is revealed a character at a time, everything else a word at
//! a time. After every token the active row is measured; once it grows past
//! the wrap threshold, the previous line moves up to the overflow row and the
//! token that overflowed starts a fresh active line.

use std::time::Duration;

use crate::config::Config;
use crate::panel::{Panel, Row};
use crate::surface::Surface;

/// Commas that earn an extra pause (ASCII and full-width).
const COMMAS: [char; 2] = [',', '，'];

/// Returns true for any Chinese language code (`zh`, `zh-cn`, `zh-tw`, ...).
pub fn is_chinese(language: &str) -> bool {
    language.starts_with("zh")
}

/// Splits text into reveal tokens.
///
/// Chinese yields one token per character, other languages one token per
/// whitespace-separated word. Empty text yields no tokens.
pub fn tokenize<'a>(text: &'a str, language: &str) -> Vec<&'a str> {
    if is_chinese(language) {
        text.char_indices()
            .map(|(i, c)| &text[i..i + c.len_utf8()])
            .collect()
    } else {
        text.split_whitespace().collect()
    }
}

/// Returns true if the token should be followed by a comma pause.
pub fn has_comma(token: &str) -> bool {
    token.contains(COMMAS)
}

/// Per-token pacing.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct RevealTiming {
    /// Base delay per token; non-Chinese tokens wait twice this.
    pub char_delay: Duration,
    pub comma_pause: Duration,
}

impl RevealTiming {
    /// Delay after each token for the given language.
    pub fn token_delay(&self, language: &str) -> Duration {
        if is_chinese(language) {
            self.char_delay
        } else {
            self.char_delay * 2
        }
    }
}

/// The two row buffers of one panel while a phrase is being revealed.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RevealState {
    pub overflow: String,
    pub active: String,
}

/// What happened while revealing one panel.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct RevealReport {
    pub tokens: usize,
    pub wraps: usize,
    pub comma_pauses: usize,
}

/// Reveals text token by token into a [`Surface`].
#[derive(Debug, Clone, Copy)]
pub struct RevealEngine {
    timing: RevealTiming,
    wrap_ratio: f64,
}

impl RevealEngine {
    pub fn new(timing: RevealTiming, wrap_ratio: f64) -> Self {
        Self { timing, wrap_ratio }
    }

    pub fn from_config(config: &Config) -> Self {
        Self::new(
            RevealTiming {
                char_delay: config.timing.char_delay(),
                comma_pause: config.timing.comma_pause(),
            },
            config.wrap_ratio,
        )
    }

    /// Width a line may reach before the next token wraps.
    fn wrap_limit(&self, viewport_width: usize) -> f64 {
        viewport_width as f64 * self.wrap_ratio
    }

    /// Animates `text` into `panel`, starting from empty rows.
    ///
    /// Completes once every token has been written and paced. Text with no
    /// tokens completes immediately and leaves both rows empty.
    pub async fn reveal<S: Surface + ?Sized>(
        &self,
        surface: &S,
        panel: Panel,
        text: &str,
        language: &str,
    ) -> RevealReport {
        let chinese = is_chinese(language);
        let delay = self.timing.token_delay(language);
        let mut state = RevealState::default();
        let mut report = RevealReport::default();

        for token in tokenize(text, language) {
            let separator = if !chinese && !state.active.is_empty() {
                " "
            } else {
                ""
            };
            let candidate = format!("{}{separator}{token}", state.active);
            surface.set_row(panel, Row::Active, &candidate);

            let limit = self.wrap_limit(surface.viewport_width());
            if surface.measure_active(panel) as f64 > limit {
                state.overflow = std::mem::replace(&mut state.active, token.to_string());
                surface.set_row(panel, Row::Overflow, &state.overflow);
                surface.set_row(panel, Row::Active, &state.active);
                report.wraps += 1;
            } else {
                state.active = candidate;
            }
            report.tokens += 1;

            tokio::time::sleep(delay).await;

            if has_comma(token) {
                tokio::time::sleep(self.timing.comma_pause).await;
                report.comma_pauses += 1;
            }
        }

        tracing::trace!(
            panel = panel.label(),
            tokens = report.tokens,
            wraps = report.wraps,
            "panel revealed"
        );
        report
    }
}
