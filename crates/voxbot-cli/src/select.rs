//! `voxbot select` — print the LLM provider chosen from the available keys.
//!
//! Exits non-zero when no provider is usable, so deploy scripts can gate on it.

use anyhow::{Context, Result};

use voxbot_core::config::Config;
use voxbot_providers::{require_provider, select_provider, CredentialSet, ProviderChoice};

/// Run the select command.
pub fn run(config: &Config, json: bool) -> Result<()> {
    let credentials = CredentialSet::from_config(&config.providers);

    println!("{}", render(select_provider(&credentials), json)?);

    require_provider(&credentials).context("refusing to start the voice pipeline")?;
    Ok(())
}

fn render(choice: ProviderChoice, json: bool) -> Result<String> {
    if json {
        return Ok(serde_json::to_string(&choice)?);
    }
    Ok(choice
        .provider()
        .map_or_else(|| "unconfigured".to_string(), |id| id.to_string()))
}
