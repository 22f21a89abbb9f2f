//! CLI command handlers.

pub mod check;
pub mod config;
pub mod play;

use std::path::Path;

use anyhow::Result;
use polytype_core::content::ContentBundle;

/// Loads the bundle, logging the failure before it propagates.
fn load_content(path: &Path) -> Result<ContentBundle> {
    let bundle = ContentBundle::load(path)
        .inspect_err(|e| tracing::error!(error = %e, "failed to load content"))?;
    Ok(bundle)
}
