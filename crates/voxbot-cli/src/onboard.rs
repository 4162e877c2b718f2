//! `voxbot onboard` — write a default config file.
//!
//! API keys are left empty; they normally come from `.env` or the
//! deployment's secret store.

use std::path::Path;

use anyhow::{Context, Result};
use colored::Colorize;

use voxbot_core::config::{save_config, Config};

use crate::helpers;

/// Run the onboard command.
pub fn run(config_path: &Path) -> Result<()> {
    helpers::print_banner("Setup");

    if write_default_config(config_path)? {
        println!("  {} created config at {}", "✓".green(), config_path.display());
    } else {
        println!(
            "  {} config already exists at {}",
            "✓".green(),
            config_path.display()
        );
    }

    println!();
    println!("  Next steps:");
    println!("    1. Put CARTESIA_API_KEY and OPENAI_API_KEY or COHERE_API_KEY in .env");
    println!("    2. Run {} to verify", "voxbot check".cyan());
    println!();

    Ok(())
}

/// Write `Config::default()` unless a file is already there.
/// Returns whether a file was written.
fn write_default_config(path: &Path) -> Result<bool> {
    if path.exists() {
        return Ok(false);
    }
    save_config(&Config::default(), Some(path))
        .with_context(|| format!("failed to write config: {}", path.display()))?;
    Ok(true)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn writes_once() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("voxbot").join("config.json");

        assert!(write_default_config(&path).unwrap());
        assert!(path.exists());

        std::fs::write(&path, "{}").unwrap();
        assert!(!write_default_config(&path).unwrap());
        assert_eq!(std::fs::read_to_string(&path).unwrap(), "{}");
    }
}
