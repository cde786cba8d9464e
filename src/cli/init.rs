use std::fs;
use std::path::PathBuf;

use anyhow::{Context, Result};

use crate::presets::{PRESET_ALPHANUMERIC, PRESET_DEFAULT};
use mr3x_docs::config::CONFIG_FILE;

pub fn run_init(preset: &str, force: bool) -> Result<()> {
    let config_path = PathBuf::from(CONFIG_FILE);

    if config_path.exists() && !force {
        anyhow::bail!(
            "{CONFIG_FILE} already exists. Use --force to overwrite the existing configuration."
        );
    }

    let contents = match preset {
        "alphanumeric" => PRESET_ALPHANUMERIC,
        _ => PRESET_DEFAULT,
    };

    fs::write(&config_path, contents)
        .with_context(|| format!("Failed to write configuration to {}", config_path.display()))?;

    println!(
        "{CONFIG_FILE} created with '{preset}' preset at {}",
        config_path.display()
    );

    Ok(())
}
