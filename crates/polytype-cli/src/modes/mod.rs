//! Runtime execution modes.
//!
//! - `tui`: Full-screen terminal player (optional feature)

#[cfg(feature = "tui")]
pub use polytype_tui::run_player;

#[cfg(not(feature = "tui"))]
pub fn run_player(
    _config: polytype_core::config::Config,
    _bundle: polytype_core::content::ContentBundle,
    _source_label: &str,
) -> anyhow::Result<()> {
    anyhow::bail!("TUI support is disabled in this build (feature \"tui\").");
}
