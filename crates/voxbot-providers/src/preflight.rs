//! Start-up preflight — everything the voice bot checks before it hands a
//! pipeline to the framework.
//!
//! Steps:
//! 1. Cartesia key (used for both STT and TTS) must be present
//! 2. LLM provider is selected: OpenAI if its key is present, else Cohere
//! 3. A [`StartupPlan`] is assembled from the config
//!
//! No network I/O happens here; a key that is present may still be rejected
//! by its vendor later.

use serde::Serialize;
use tracing::{info, warn};

use voxbot_core::config::schema::{Config, ProviderConfig};
use voxbot_core::persona::{greeting_instruction, ChatMessage};
use voxbot_core::utils::mask_secret;

use crate::credentials::CredentialSet;
use crate::error::PreflightError;
use crate::registry::PROVIDERS;
use crate::selector::require_provider;
use crate::settings::{resolve_llm_settings, LlmSelection};

// ─────────────────────────────────────────────
// Credential checks
// ─────────────────────────────────────────────

/// What a credential is used for.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum CredentialRole {
    /// The bot refuses to start without it.
    Required,
    /// Candidate LLM backend.
    Llm,
    /// Only used by alternative bot variants.
    Optional,
}

/// Status of one credential, safe to print.
#[derive(Clone, Debug, PartialEq, Eq, Serialize)]
pub struct CredentialCheck {
    pub service: &'static str,
    pub env_key: &'static str,
    pub role: CredentialRole,
    pub present: bool,
    /// Masked key prefix, only when present.
    #[serde(skip_serializing_if = "Option::is_none")]
    pub preview: Option<String>,
}

impl CredentialCheck {
    fn new(
        service: &'static str,
        env_key: &'static str,
        role: CredentialRole,
        config: &ProviderConfig,
    ) -> Self {
        let present = config.is_configured();
        Self {
            service,
            env_key,
            role,
            present,
            preview: present.then(|| mask_secret(config.api_key.trim())),
        }
    }
}

/// Status of every credential the bot knows about.
pub fn credential_checks(config: &Config) -> Vec<CredentialCheck> {
    let mut checks = vec![CredentialCheck::new(
        "Cartesia",
        "CARTESIA_API_KEY",
        CredentialRole::Required,
        &config.speech.cartesia,
    )];

    for spec in PROVIDERS {
        if let Some(provider) = config.providers.get_by_name(spec.name) {
            checks.push(CredentialCheck::new(
                spec.display_name,
                spec.env_key,
                CredentialRole::Llm,
                provider,
            ));
        }
    }

    checks.push(CredentialCheck::new(
        "Deepgram",
        "DEEPGRAM_API_KEY",
        CredentialRole::Optional,
        &config.speech.deepgram,
    ));

    checks
}

// ─────────────────────────────────────────────
// Startup plan
// ─────────────────────────────────────────────

/// Validated start-up settings for one bot session.
#[derive(Clone, Debug, Serialize)]
pub struct StartupPlan {
    pub bot_name: String,
    pub llm: LlmSelection,
    pub stt_language: String,
    pub stt_model: String,
    pub voice_id: String,
    pub vad_stop_secs: f64,
    pub enable_metrics: bool,
    pub enable_usage_metrics: bool,
    /// `host:port` the runner listens on.
    pub listen: String,
    pub greeting: String,
    /// Seed context; the greeting instruction is appended on client connect.
    pub initial_context: Vec<ChatMessage>,
}

impl StartupPlan {
    /// Context after a client connects: seed messages plus the greeting instruction.
    pub fn context_on_connect(&self) -> Vec<ChatMessage> {
        let mut messages = self.initial_context.clone();
        messages.push(greeting_instruction(&self.greeting));
        messages
    }
}

/// Validate `config` and build the start-up plan.
pub fn run_preflight(config: &Config) -> Result<StartupPlan, PreflightError> {
    for check in credential_checks(config) {
        match (check.role, check.present) {
            (_, true) => info!("{} API key: configured", check.service),
            (CredentialRole::Required, false) => {
                return Err(PreflightError::MissingCredential {
                    service: check.service,
                    env_key: check.env_key,
                });
            }
            (CredentialRole::Llm, false) => info!("{} API key: missing", check.service),
            (CredentialRole::Optional, false) => {}
        }
    }

    let credentials = CredentialSet::from_config(&config.providers);
    let provider = require_provider(&credentials)?;
    let llm = resolve_llm_settings(provider, &config.providers);

    if config.audio.vad_stop_secs <= 0.0 {
        warn!(
            vad_stop_secs = config.audio.vad_stop_secs,
            "VAD stop threshold is not positive; turns may end immediately"
        );
    }

    let greeting = config.bot.greeting(llm.display_name);

    Ok(StartupPlan {
        bot_name: config.bot.name.clone(),
        llm,
        stt_language: config.speech.stt_language.clone(),
        stt_model: config.speech.stt_model.clone(),
        voice_id: config.speech.voice_id.clone(),
        vad_stop_secs: config.audio.vad_stop_secs,
        enable_metrics: config.audio.enable_metrics,
        enable_usage_metrics: config.audio.enable_usage_metrics,
        listen: format!("{}:{}", config.server.host, config.server.port),
        greeting,
        initial_context: config.bot.initial_context(),
    })
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::SelectionError;
    use crate::registry::ProviderId;

    fn config_with(cartesia: &str, openai: &str, cohere: &str) -> Config {
        let mut config = Config::default();
        config.speech.cartesia.api_key = cartesia.to_string();
        config.providers.openai.api_key = openai.to_string();
        config.providers.cohere.api_key = cohere.to_string();
        config
    }

    fn preflight(config: &Config) -> Result<StartupPlan, PreflightError> {
        run_preflight(config)
    }

    #[test]
    fn test_openai_plan() {
        let plan = preflight(&config_with("ca-1", "sk-1", "co-1")).unwrap();
        assert_eq!(plan.llm.provider, ProviderId::OpenAi);
        assert_eq!(plan.llm.model, "gpt-4o-mini");
        assert_eq!(plan.listen, "0.0.0.0:8080");
        assert!(plan.greeting.contains("and OpenAI."));
    }

    #[test]
    fn test_cohere_plan() {
        let plan = preflight(&config_with("ca-1", "", "co-1")).unwrap();
        assert_eq!(plan.llm.provider, ProviderId::Cohere);
        assert!(plan.greeting.contains("and Cohere."));
        assert_eq!(plan.llm.params.max_tokens, Some(1000));
    }

    #[test]
    fn test_missing_cartesia_fails_first() {
        let err = preflight(&config_with("", "", "")).unwrap_err();
        assert_eq!(
            err,
            PreflightError::MissingCredential {
                service: "Cartesia",
                env_key: "CARTESIA_API_KEY"
            }
        );
    }

    #[test]
    fn test_placeholder_cartesia_counts_as_missing() {
        let err = preflight(&config_with("your_cartesia_api_key", "sk-1", "")).unwrap_err();
        assert!(matches!(err, PreflightError::MissingCredential { .. }));
    }

    #[test]
    fn test_no_llm_key_is_fatal() {
        let err = preflight(&config_with("ca-1", "", "your_cohere_api_key")).unwrap_err();
        assert_eq!(
            err,
            PreflightError::Selection(SelectionError::NoUsableProvider {
                missing: vec!["OPENAI_API_KEY", "COHERE_API_KEY"]
            })
        );
        assert!(err.to_string().contains("missing credentials"));
    }

    #[test]
    fn test_openai_wins_over_cohere_and_speech_keys() {
        let mut config = config_with("ca-1", "sk-1", "co-1");
        config.speech.deepgram.api_key = "dg-1".to_string();
        let plan = preflight(&config).unwrap();
        assert_eq!(plan.llm.provider, ProviderId::OpenAi);
        assert_eq!(plan.llm.api_key, "sk-1");
    }

    #[test]
    fn test_speech_keys_alone_do_not_select_an_llm() {
        let mut config = config_with("ca-1", "", "");
        config.speech.deepgram.api_key = "dg-1".to_string();
        let err = preflight(&config).unwrap_err();
        assert!(matches!(
            err,
            PreflightError::Selection(SelectionError::NoUsableProvider { .. })
        ));
    }

    #[test]
    fn test_context_on_connect_appends_greeting() {
        let plan = preflight(&config_with("ca-1", "sk-1", "")).unwrap();
        let ctx = plan.context_on_connect();
        assert_eq!(ctx.len(), 2);
        assert_eq!(ctx[0], plan.initial_context[0]);
        assert_eq!(ctx[1].content, format!("Say: '{}'", plan.greeting));
    }

    #[test]
    fn test_credential_checks_cover_all_services() {
        let checks = credential_checks(&config_with("ca-123456789", "", "co-1"));
        let keys: Vec<&str> = checks.iter().map(|c| c.env_key).collect();
        assert_eq!(
            keys,
            vec![
                "CARTESIA_API_KEY",
                "OPENAI_API_KEY",
                "COHERE_API_KEY",
                "DEEPGRAM_API_KEY"
            ]
        );
        assert!(checks[0].present);
        assert_eq!(checks[0].preview.as_deref(), Some("ca-..."));
        assert!(!checks[1].present);
        assert_eq!(checks[1].preview, None);
    }
}
