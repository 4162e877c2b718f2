//! `voxbot check` — run the start-up preflight and print the plan.
//!
//! This is the gate the bot process runs before starting its pipeline:
//! a missing Cartesia key or no usable LLM key exits with status 1.

use anyhow::{Context, Result};
use colored::Colorize;
use tracing::info;

use voxbot_core::config::Config;
use voxbot_providers::{run_preflight, StartupPlan};

use crate::helpers;

/// Run the check command.
pub fn run(config: &Config, json: bool) -> Result<()> {
    let plan = run_preflight(config).context("refusing to start the voice pipeline")?;

    info!(
        provider = %plan.llm.provider,
        model = %plan.llm.model,
        listen = %plan.listen,
        "Preflight passed"
    );

    if json {
        println!("{}", serde_json::to_string_pretty(&plan)?);
    } else {
        print_plan(&plan);
    }
    Ok(())
}

fn print_plan(plan: &StartupPlan) {
    helpers::print_banner("Preflight");

    println!("  {:<18} {}", "Bot:".bold(), plan.bot_name);
    println!(
        "  {:<18} {} {}",
        "LLM:".bold(),
        helpers::mark(true, plan.llm.display_name),
        plan.llm.model.dimmed()
    );
    if let Some(base) = &plan.llm.api_base {
        println!("  {:<18} {}", "LLM endpoint:".bold(), base);
    }
    println!("  {:<18} {}", "Sampling:".bold(), format_params(plan).dimmed());
    println!(
        "  {:<18} {} ({})",
        "STT:".bold(),
        plan.stt_model,
        plan.stt_language
    );
    println!("  {:<18} {}", "Voice:".bold(), plan.voice_id);
    println!("  {:<18} {}s", "VAD stop:".bold(), plan.vad_stop_secs);
    println!(
        "  {:<18} metrics: {} | usage: {}",
        "Metrics:".bold(),
        plan.enable_metrics,
        plan.enable_usage_metrics
    );
    println!("  {:<18} {}", "Listen:".bold(), plan.listen);
    println!();
    println!("  {} {}", "Greeting:".bold(), plan.greeting.italic());
    println!();
}

fn format_params(plan: &StartupPlan) -> String {
    let p = &plan.llm.params;
    let mut parts = Vec::new();
    if let Some(t) = p.temperature {
        parts.push(format!("temperature {t}"));
    }
    if let Some(m) = p.max_tokens {
        parts.push(format!("max_tokens {m}"));
    }
    if let Some(top_p) = p.top_p {
        parts.push(format!("top_p {top_p}"));
    }
    if parts.is_empty() {
        "provider defaults".to_string()
    } else {
        parts.join(", ")
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn config(cartesia: &str, openai: &str, cohere: &str) -> Config {
        let mut config = Config::default();
        config.speech.cartesia.api_key = cartesia.to_string();
        config.providers.openai.api_key = openai.to_string();
        config.providers.cohere.api_key = cohere.to_string();
        config
    }

    #[test]
    fn check_passes_with_keys() {
        assert!(run(&config("ca-1", "sk-1", ""), true).is_ok());
    }

    #[test]
    fn check_fails_without_cartesia() {
        let err = run(&config("", "sk-1", ""), false).unwrap_err();
        assert!(format!("{err:#}").contains("CARTESIA_API_KEY"));
    }

    #[test]
    fn check_fails_without_llm() {
        let err = run(&config("ca-1", "", ""), false).unwrap_err();
        assert!(format!("{err:#}").contains("missing credentials"));
    }

    #[test]
    fn params_formatting() {
        let c = config("ca-1", "", "co-1");
        let plan = run_preflight(&c).unwrap();
        assert_eq!(format_params(&plan), "temperature 0.7, max_tokens 1000, top_p 0.9");

        let c = config("ca-1", "sk-1", "");
        let plan = run_preflight(&c).unwrap();
        assert_eq!(format_params(&plan), "provider defaults");
    }
}
