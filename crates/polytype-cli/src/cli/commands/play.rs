//! Play command: load content once, then hand over to the terminal player.

use std::path::Path;

use anyhow::Result;
use polytype_core::config::Config;
use polytype_core::interrupt;

use crate::modes;

pub fn run(config: Config, content_path: &Path) -> Result<()> {
    // A load failure ends here: the player never starts.
    let bundle = super::load_content(content_path)?;

    let label = content_path.display().to_string();
    modes::run_player(config, bundle, &label)?;

    if interrupt::is_interrupted() {
        return Err(interrupt::InterruptedError.into());
    }
    Ok(())
}
