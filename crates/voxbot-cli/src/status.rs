//! `voxbot status` — show configuration and credential status.
//!
//! - Shows config path, listen address, voice, STT settings
//! - Shows API key status for every service
//! - Shows which LLM provider would be selected

use anyhow::Result;
use colored::Colorize;

use voxbot_providers::preflight::{credential_checks, CredentialRole};
use voxbot_providers::{select_provider, CredentialSet, SELECTION_ORDER};

use crate::helpers::{self, Paths};

/// Run the status command. Never fails on missing keys; use `check` for that.
pub fn run(paths: &Paths) -> Result<()> {
    let config = paths.load();

    helpers::print_banner("Status");

    // Config
    let config_exists = paths.config.exists();
    println!(
        "  {:<18} {} {}",
        "Config:".bold(),
        paths.config.display(),
        if config_exists {
            "✓".green().to_string()
        } else {
            "(not found, using defaults)".red().to_string()
        }
    );

    println!("  {:<18} {}", "Bot:".bold(), config.bot.name);
    println!(
        "  {:<18} {}:{}",
        "Listen:".bold(),
        config.server.host,
        config.server.port
    );
    println!(
        "  {:<18} {} ({})",
        "STT:".bold(),
        config.speech.stt_model,
        config.speech.stt_language
    );
    println!("  {:<18} {}", "Voice:".bold(), config.speech.voice_id);
    println!(
        "  {:<18} {}",
        "VAD:".bold(),
        format!("stop after {}s of silence", config.audio.vad_stop_secs).dimmed()
    );

    // Credentials
    println!();
    println!("  {}", "API keys:".bold());
    for check in credential_checks(&config) {
        let role = match check.role {
            CredentialRole::Required => "required",
            CredentialRole::Llm => "llm",
            CredentialRole::Optional => "optional",
        };
        let status = match (&check.preview, check.present) {
            (Some(preview), true) => helpers::mark(true, &format!("configured ({preview})")),
            _ if check.role == CredentialRole::Optional => {
                format!("{}", "· not configured".dimmed())
            }
            _ => helpers::mark(false, "missing"),
        };
        println!(
            "    {:<12} {:<20} {:<10} {}",
            check.service,
            check.env_key.dimmed(),
            role.dimmed(),
            status
        );
    }

    // Selection
    println!();
    let credentials = CredentialSet::from_config(&config.providers);
    let selection = match select_provider(&credentials).provider() {
        Some(id) => helpers::mark(true, id.display_name()),
        None => helpers::mark(false, "no usable provider"),
    };
    let order: Vec<&str> = SELECTION_ORDER.iter().map(|id| id.display_name()).collect();
    println!(
        "  {:<18} {} {}",
        "LLM:".bold(),
        selection,
        format!("(order: {})", order.join(" → ")).dimmed()
    );

    println!();

    Ok(())
}
