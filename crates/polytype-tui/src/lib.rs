//! Full-screen terminal player for polytype.

pub mod effects;
pub mod events;
pub mod playback;
pub mod render;
pub mod runtime;
pub mod state;
pub mod terminal;
pub mod update;

use std::io::{IsTerminal, stdout};

use anyhow::Result;
use polytype_core::config::Config;
use polytype_core::content::ContentBundle;
pub use runtime::TuiRuntime;

/// Plays a loaded bundle full-screen until the user quits.
///
/// Must be called from within a tokio runtime; playback runs as a spawned task.
///
/// # Errors
/// Fails when stdout is not a terminal or the terminal cannot be set up.
pub fn run_player(config: Config, bundle: ContentBundle, source_label: &str) -> Result<()> {
    if !stdout().is_terminal() {
        anyhow::bail!(
            "The player requires a terminal.\n\
             Use `polytype check` to validate content non-interactively."
        );
    }

    let mut runtime = TuiRuntime::new(source_label)?;
    runtime.run(bundle, config)
}
