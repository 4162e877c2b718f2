//! Configuration schema for the voice bot process.
//!
//! Hierarchy: `Config` → `BotConfig`, `ProvidersConfig`,
//! `SpeechConfig`, `AudioConfig`, `ServerConfig`.
//!
//! JSON on disk uses **camelCase** keys; Rust uses snake_case.

use serde::{Deserialize, Serialize};

use crate::persona;
use crate::utils::is_credential_present;

// ─────────────────────────────────────────────
// Root Config
// ─────────────────────────────────────────────

/// Root configuration — loaded from `~/.voxbot/config.json` + `.env` + env vars.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct Config {
    pub bot: BotConfig,
    pub providers: ProvidersConfig,
    pub speech: SpeechConfig,
    pub audio: AudioConfig,
    pub server: ServerConfig,
}

// ─────────────────────────────────────────────
// Bot persona
// ─────────────────────────────────────────────

/// Name and system prompt of the assistant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct BotConfig {
    /// Name spoken in the greeting and used in logs.
    pub name: String,
    /// System prompt seeded into the LLM context.
    pub personality: String,
}

impl Default for BotConfig {
    fn default() -> Self {
        Self {
            name: persona::DEFAULT_BOT_NAME.to_string(),
            personality: persona::DEFAULT_PERSONALITY.to_string(),
        }
    }
}

// ─────────────────────────────────────────────
// Providers
// ─────────────────────────────────────────────

/// Credentials and overrides for one hosted service.
///
/// `None` fields fall back to the provider registry defaults.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProviderConfig {
    /// API key for authentication.
    pub api_key: String,
    /// Custom API base URL.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    /// Model identifier override.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub model: Option<String>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub temperature: Option<f64>,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub max_tokens: Option<u32>,
    /// Nucleus sampling (`p` for Cohere, `top_p` elsewhere).
    #[serde(skip_serializing_if = "Option::is_none")]
    pub top_p: Option<f64>,
}

impl ProviderConfig {
    /// Whether this provider has a usable API key.
    ///
    /// Empty keys and template placeholders (`your_openai_api_key`) do not count.
    pub fn is_configured(&self) -> bool {
        is_credential_present(&self.api_key)
    }
}

/// LLM provider configurations, one per supported backend.
#[derive(Clone, Debug, Default, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ProvidersConfig {
    pub openai: ProviderConfig,
    pub cohere: ProviderConfig,
}

impl ProvidersConfig {
    /// Get a provider config by name (e.g. `"cohere"`).
    pub fn get_by_name(&self, name: &str) -> Option<&ProviderConfig> {
        match name {
            "openai" => Some(&self.openai),
            "cohere" => Some(&self.cohere),
            _ => None,
        }
    }
}

// ─────────────────────────────────────────────
// Speech (STT / TTS)
// ─────────────────────────────────────────────

/// Speech services. Cartesia handles both STT and TTS in production;
/// Deepgram is only used by the custom bot variant.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct SpeechConfig {
    pub cartesia: ProviderConfig,
    pub deepgram: ProviderConfig,
    pub stt_language: String,
    pub stt_model: String,
    /// Cartesia voice used by TTS.
    pub voice_id: String,
}

impl Default for SpeechConfig {
    fn default() -> Self {
        Self {
            cartesia: ProviderConfig::default(),
            deepgram: ProviderConfig::default(),
            stt_language: "en".to_string(),
            stt_model: "sonic-english".to_string(),
            voice_id: persona::DEFAULT_VOICE_ID.to_string(),
        }
    }
}

// ─────────────────────────────────────────────
// Audio
// ─────────────────────────────────────────────

/// Voice activity detection and pipeline metrics.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct AudioConfig {
    /// Silence (seconds) before the VAD decides the user stopped talking.
    pub vad_stop_secs: f64,
    pub enable_metrics: bool,
    pub enable_usage_metrics: bool,
}

impl Default for AudioConfig {
    fn default() -> Self {
        Self {
            vad_stop_secs: 0.3,
            enable_metrics: true,
            enable_usage_metrics: true,
        }
    }
}

// ─────────────────────────────────────────────
// Server
// ─────────────────────────────────────────────

/// Address the bot runner listens on.
#[derive(Clone, Debug, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", default)]
pub struct ServerConfig {
    pub host: String,
    pub port: u16,
}

impl Default for ServerConfig {
    fn default() -> Self {
        Self {
            host: "0.0.0.0".to_string(),
            port: 8080,
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
