//! Config loader — reads `~/.voxbot/config.json`, then applies environment
//! variables on top.
//!
//! # Loading precedence
//! 1. Defaults (from `Config::default()`)
//! 2. JSON file at `~/.voxbot/config.json`
//! 3. `.env` file, loaded into the process environment with override semantics
//! 4. Vendor variables (`OPENAI_API_KEY`, `CARTESIA_API_KEY`, `PORT`, ...)
//! 5. `VOXBOT_<SECTION>__<FIELD>` variables (override everything above)

use std::path::{Path, PathBuf};
use tracing::{debug, info, warn};

use super::schema::{Config, ProviderConfig};

/// Default config file path.
pub fn get_config_path() -> PathBuf {
    crate::utils::get_data_path().join("config.json")
}

/// Load a `.env` file into the process environment.
///
/// Values from the file replace variables that are already set. Without an
/// explicit path the file is searched from the current directory upwards.
/// A missing file is not an error; returns the path that was loaded, if any.
pub fn load_dotenv(path: Option<&Path>) -> Option<PathBuf> {
    let result = match path {
        Some(p) => dotenvy::from_path_override(p).map(|_| p.to_path_buf()),
        None => dotenvy::dotenv_override(),
    };

    match result {
        Ok(loaded) => {
            debug!("Loaded environment from {}", loaded.display());
            Some(loaded)
        }
        Err(e) if e.not_found() => {
            debug!("No .env file found");
            None
        }
        Err(e) => {
            warn!("Failed to load .env file: {}", e);
            None
        }
    }
}

/// Load configuration from the default path (or `path`) + env vars.
///
/// Falls back to `Config::default()` if the file doesn't exist or can't be parsed.
pub fn load_config(path: Option<&Path>) -> Config {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    apply_env_overrides(load_config_file(&config_path))
}

/// Read the JSON file only, without looking at the environment.
fn load_config_file(path: &Path) -> Config {
    if !path.exists() {
        info!("No config file found at {}, using defaults", path.display());
        return Config::default();
    }

    debug!("Loading config from {}", path.display());

    let content = match std::fs::read_to_string(path) {
        Ok(c) => c,
        Err(e) => {
            warn!("Failed to read config file {}: {}", path.display(), e);
            return Config::default();
        }
    };

    match serde_json::from_str(&content) {
        Ok(config) => config,
        Err(e) => {
            warn!("Failed to parse config {}: {}", path.display(), e);
            Config::default()
        }
    }
}

/// Save configuration to disk (pretty-printed JSON with camelCase keys).
pub fn save_config(config: &Config, path: Option<&Path>) -> std::io::Result<()> {
    let config_path = path.map(PathBuf::from).unwrap_or_else(get_config_path);

    if let Some(parent) = config_path.parent() {
        std::fs::create_dir_all(parent)?;
    }

    let json = serde_json::to_string_pretty(config)
        .map_err(std::io::Error::other)?;

    std::fs::write(&config_path, json)?;
    debug!("Config saved to {}", config_path.display());
    Ok(())
}

/// Apply process environment overrides on top of a loaded config.
pub fn apply_env_overrides(config: Config) -> Config {
    apply_env_overrides_with(config, |key| std::env::var(key).ok())
}

/// Apply overrides using an arbitrary variable lookup.
///
/// Supported variables:
/// - `OPENAI_API_KEY`, `COHERE_API_KEY`
/// - `CARTESIA_API_KEY`, `DEEPGRAM_API_KEY`
/// - `PORT`
/// - `VOXBOT_BOT__NAME`, `VOXBOT_BOT__PERSONALITY`
/// - `VOXBOT_PROVIDERS__<NAME>__API_KEY` / `__API_BASE` / `__MODEL`
/// - `VOXBOT_SPEECH__VOICE_ID`, `VOXBOT_SPEECH__STT_LANGUAGE`, `VOXBOT_SPEECH__STT_MODEL`
/// - `VOXBOT_AUDIO__VAD_STOP_SECS`
/// - `VOXBOT_SERVER__HOST`, `VOXBOT_SERVER__PORT`
pub fn apply_env_overrides_with<F>(mut config: Config, lookup: F) -> Config
where
    F: Fn(&str) -> Option<String>,
{
    // Vendor variables
    set_string(&lookup, "OPENAI_API_KEY", &mut config.providers.openai.api_key);
    set_string(&lookup, "COHERE_API_KEY", &mut config.providers.cohere.api_key);
    set_string(&lookup, "CARTESIA_API_KEY", &mut config.speech.cartesia.api_key);
    set_string(&lookup, "DEEPGRAM_API_KEY", &mut config.speech.deepgram.api_key);
    set_parsed(&lookup, "PORT", &mut config.server.port);

    // Bot
    set_string(&lookup, "VOXBOT_BOT__NAME", &mut config.bot.name);
    set_string(&lookup, "VOXBOT_BOT__PERSONALITY", &mut config.bot.personality);

    // Providers
    apply_provider_env(&lookup, &mut config.providers.openai, "OPENAI");
    apply_provider_env(&lookup, &mut config.providers.cohere, "COHERE");
    apply_provider_env(&lookup, &mut config.speech.cartesia, "CARTESIA");
    apply_provider_env(&lookup, &mut config.speech.deepgram, "DEEPGRAM");

    // Speech
    set_string(&lookup, "VOXBOT_SPEECH__VOICE_ID", &mut config.speech.voice_id);
    set_string(&lookup, "VOXBOT_SPEECH__STT_LANGUAGE", &mut config.speech.stt_language);
    set_string(&lookup, "VOXBOT_SPEECH__STT_MODEL", &mut config.speech.stt_model);

    // Audio
    set_parsed(&lookup, "VOXBOT_AUDIO__VAD_STOP_SECS", &mut config.audio.vad_stop_secs);

    // Server
    set_string(&lookup, "VOXBOT_SERVER__HOST", &mut config.server.host);
    set_parsed(&lookup, "VOXBOT_SERVER__PORT", &mut config.server.port);

    config
}

/// Apply `VOXBOT_PROVIDERS__<NAME>__*` overrides for a single provider.
fn apply_provider_env<F>(lookup: &F, provider: &mut ProviderConfig, name: &str)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(&format!("VOXBOT_PROVIDERS__{name}__API_KEY")) {
        provider.api_key = val;
    }
    if let Some(val) = lookup(&format!("VOXBOT_PROVIDERS__{name}__API_BASE")) {
        provider.api_base = Some(val);
    }
    if let Some(val) = lookup(&format!("VOXBOT_PROVIDERS__{name}__MODEL")) {
        provider.model = Some(val);
    }
}

fn set_string<F>(lookup: &F, key: &str, target: &mut String)
where
    F: Fn(&str) -> Option<String>,
{
    if let Some(val) = lookup(key) {
        *target = val;
    }
}

fn set_parsed<F, T>(lookup: &F, key: &str, target: &mut T)
where
    F: Fn(&str) -> Option<String>,
    T: std::str::FromStr,
{
    if let Some(val) = lookup(key) {
        match val.trim().parse::<T>() {
            Ok(parsed) => *target = parsed,
            Err(_) => warn!("Ignoring {}: cannot parse {:?}", key, val),
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
