use anyhow::{Context, Result};
use screenrec_core::Settings;

use crate::app::apply_overrides;
use crate::args::Overrides;

pub fn run(overrides: Overrides, show: bool) -> Result<()> {
    let mut settings = Settings::load();

    if !overrides.is_empty() {
        apply_overrides(&mut settings, &overrides);
        let path = settings.save().context("Failed to save settings")?;
        println!("Saved settings to {}", path.display());
    } else if !show {
        println!("Nothing to change. Use --show to print the current settings.");
    }

    if show {
        println!("{}", serde_json::to_string_pretty(&settings)?);
    }
    Ok(())
}
