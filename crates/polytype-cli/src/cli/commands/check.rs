//! Check command: validate a content bundle without playing it.

use std::path::Path;

use anyhow::Result;

pub fn run(content_path: &Path) -> Result<()> {
    let bundle = super::load_content(content_path)?;

    let missing = bundle.missing_flags();
    println!("Content: {}", content_path.display());
    println!("Phrases: {}", bundle.phrases.len());
    println!("Languages: {}", bundle.languages().join(", "));
    println!("Flags: {}", bundle.flags.len());
    if missing.is_empty() {
        println!("Missing flags: none");
    } else {
        println!("Missing flags: {}", missing.join(", "));
    }

    let empty = bundle
        .phrases
        .iter()
        .filter(|p| p.main.trim().is_empty())
        .count();
    if empty > 0 {
        println!("Phrases without main text: {empty}");
    }
    Ok(())
}
