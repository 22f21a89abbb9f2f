//! Phrase renderer: fans one phrase out to the four panels.

use crate::content::{FlagTable, Phrase};
use crate::panel::{CHINESE_CODE, Panel};
use crate::reveal::{RevealEngine, RevealReport};
use crate::surface::Surface;

/// Per-panel results for one rendered phrase, indexed like [`Panel::ALL`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PhraseReport {
    pub panels: [RevealReport; 4],
}

impl PhraseReport {
    pub fn panel(&self, panel: Panel) -> RevealReport {
        self.panels[panel.index()]
    }

    pub fn total_tokens(&self) -> usize {
        self.panels.iter().map(|r| r.tokens).sum()
    }
}

/// Drives the reveal engine for every panel of a surface.
pub struct Renderer<'a, S: ?Sized> {
    surface: &'a S,
    engine: RevealEngine,
}

impl<'a, S: Surface + ?Sized> Renderer<'a, S> {
    pub fn new(surface: &'a S, engine: RevealEngine) -> Self {
        Self { surface, engine }
    }

    pub fn surface(&self) -> &'a S {
        self.surface
    }

    /// Sets the static translation flags and the main panel's startup flag.
    ///
    /// The main flag is replaced as soon as the first phrase renders.
    pub fn show_initial_flags(&self, flags: &FlagTable, initial_language: &str) {
        self.surface.set_flag(Panel::English, flags.resolve("en"));
        self.surface.set_flag(Panel::Russian, flags.resolve("ru"));
        self.surface
            .set_flag(Panel::Chinese, flags.resolve(CHINESE_CODE));
        self.surface
            .set_flag(Panel::Main, flags.resolve(initial_language));
    }

    /// Renders one phrase and resolves once all four panels are done.
    pub async fn render(&self, phrase: &Phrase, flags: &FlagTable) -> PhraseReport {
        let main_flag = flags.resolve(&phrase.language);
        if main_flag.is_none() {
            tracing::debug!(language = %phrase.language, "no flag for language");
        }
        self.surface.set_flag(Panel::Main, main_flag);
        self.surface.clear_rows();

        let (main, english, chinese, russian) = tokio::join!(
            self.reveal(phrase, Panel::Main),
            self.reveal(phrase, Panel::English),
            self.reveal(phrase, Panel::Chinese),
            self.reveal(phrase, Panel::Russian),
        );

        PhraseReport {
            panels: [main, english, chinese, russian],
        }
    }

    async fn reveal(&self, phrase: &Phrase, panel: Panel) -> RevealReport {
        self.engine
            .reveal(
                self.surface,
                panel,
                phrase.text_for(panel),
                phrase.language_for(panel),
            )
            .await
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use tokio::time::Instant;

    use super::*;
    use crate::panel::Row;
    use crate::reveal::tests::{CharSurface, TIMING};
    use crate::surface::Board;

    fn flags() -> FlagTable {
        [
            ("es", "es.png"),
            ("en", "en.png"),
            ("zh-cn", "cn.png"),
            ("ru", "ru.png"),
        ]
        .into_iter()
        .collect()
    }

    fn phrase() -> Phrase {
        Phrase {
            language: "es".into(),
            main: "Hola, mundo".into(),
            en: "hi there".into(),
            zh_cn: "你好，世界".into(),
            ru: String::new(),
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_waits_for_slowest_panel() {
        let surface = CharSurface::new(200);
        let renderer = Renderer::new(&surface, RevealEngine::new(TIMING, 0.6667));
        let start = Instant::now();

        let report = renderer.render(&phrase(), &flags()).await;

        // main: 2 words * 400 + comma 400 = 1200; zh: 5 * 200 + 400 = 1400.
        assert_eq!(start.elapsed(), Duration::from_millis(1400));
        assert_eq!(report.panel(Panel::Chinese).tokens, 5);
        assert_eq!(report.panel(Panel::Chinese).comma_pauses, 1);
        assert_eq!(report.panel(Panel::English).tokens, 2);
        assert_eq!(report.panel(Panel::English).comma_pauses, 0);
        assert_eq!(report.panel(Panel::Russian), RevealReport::default());
        assert_eq!(report.total_tokens(), 9);
    }

    #[tokio::test(start_paused = true)]
    async fn test_every_panel_shows_its_full_text() {
        let board = Board::new(200);
        let renderer = Renderer::new(&board, RevealEngine::new(TIMING, 0.6667));
        let phrase = phrase();

        renderer.render(&phrase, &flags()).await;

        for panel in Panel::ALL {
            assert_eq!(board.row(panel, Row::Overflow), "");
            assert_eq!(board.row(panel, Row::Active), phrase.text_for(panel));
        }
    }

    #[tokio::test(start_paused = true)]
    async fn test_rerender_clears_previous_phrase() {
        let board = Board::new(20);
        let renderer = Renderer::new(&board, RevealEngine::new(TIMING, 0.5));
        let long = Phrase {
            language: "en".into(),
            main: "one two three four five".into(),
            ..Phrase::default()
        };
        renderer.render(&long, &flags()).await;
        assert!(!board.row(Panel::Main, Row::Overflow).is_empty());

        let short = Phrase {
            language: "en".into(),
            main: "six".into(),
            ..Phrase::default()
        };
        renderer.render(&short, &flags()).await;
        assert_eq!(board.row(Panel::Main, Row::Overflow), "");
        assert_eq!(board.row(Panel::Main, Row::Active), "six");
    }

    #[tokio::test(start_paused = true)]
    async fn test_main_flag_follows_phrase_language() {
        let board = Board::default();
        let renderer = Renderer::new(&board, RevealEngine::new(TIMING, 0.6667));
        let mut phrase = phrase();

        phrase.language = "zh-tw".into();
        renderer.render(&phrase, &flags()).await;
        assert_eq!(
            board.snapshot().panel(Panel::Main).flag.as_deref(),
            Some("cn.png")
        );

        phrase.language = "fr".into();
        renderer.render(&phrase, &flags()).await;
        assert_eq!(board.snapshot().panel(Panel::Main).flag, None);
    }

    #[test]
    fn test_initial_flags() {
        let board = Board::default();
        let renderer = Renderer::new(&board, RevealEngine::new(TIMING, 0.6667));

        renderer.show_initial_flags(&flags(), "es");

        let snapshot = board.snapshot();
        assert_eq!(snapshot.panel(Panel::Main).flag.as_deref(), Some("es.png"));
        assert_eq!(snapshot.panel(Panel::English).flag.as_deref(), Some("en.png"));
        assert_eq!(snapshot.panel(Panel::Chinese).flag.as_deref(), Some("cn.png"));
        assert_eq!(snapshot.panel(Panel::Russian).flag.as_deref(), Some("ru.png"));
        assert!(snapshot.panels.iter().all(|p| p.active.is_empty()));
    }
}
