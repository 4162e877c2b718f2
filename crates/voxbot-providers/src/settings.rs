//! LLM settings for the selected provider: registry defaults merged with
//! per-provider config overrides.

use std::fmt;

use serde::Serialize;
use voxbot_core::config::schema::ProvidersConfig;
use voxbot_core::utils::mask_secret;

use crate::registry::ProviderId;

/// Sampling parameters. `None` leaves the vendor default in place.
#[derive(Clone, Copy, Debug, Default, PartialEq, Serialize)]
pub struct LlmParams {
    pub temperature: Option<f64>,
    pub max_tokens: Option<u32>,
    pub top_p: Option<f64>,
}

impl LlmParams {
    /// Field-wise override: values set in `other` win.
    pub fn merged_with(self, other: LlmParams) -> LlmParams {
        LlmParams {
            temperature: other.temperature.or(self.temperature),
            max_tokens: other.max_tokens.or(self.max_tokens),
            top_p: other.top_p.or(self.top_p),
        }
    }
}

/// Everything the bot needs to construct its LLM adapter.
#[derive(Clone, PartialEq, Serialize)]
pub struct LlmSelection {
    pub provider: ProviderId,
    pub display_name: &'static str,
    pub model: String,
    #[serde(skip)]
    pub api_key: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    pub api_base: Option<String>,
    pub params: LlmParams,
}

impl fmt::Debug for LlmSelection {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("LlmSelection")
            .field("provider", &self.provider)
            .field("model", &self.model)
            .field("api_key", &mask_secret(&self.api_key))
            .field("api_base", &self.api_base)
            .field("params", &self.params)
            .finish()
    }
}

/// Resolve model, endpoint, and sampling for `provider`.
pub fn resolve_llm_settings(provider: ProviderId, providers: &ProvidersConfig) -> LlmSelection {
    let spec = provider.spec();
    let config = providers.get_by_name(spec.name).cloned().unwrap_or_default();

    let overrides = LlmParams {
        temperature: config.temperature,
        max_tokens: config.max_tokens,
        top_p: config.top_p,
    };

    LlmSelection {
        provider,
        display_name: spec.display_name,
        model: config
            .model
            .filter(|m| !m.trim().is_empty())
            .unwrap_or_else(|| spec.default_model.to_string()),
        api_key: config.api_key.trim().to_string(),
        api_base: config.api_base,
        params: spec.default_params.merged_with(overrides),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use voxbot_core::config::schema::ProviderConfig;

    #[test]
    fn test_openai_defaults() {
        let mut providers = ProvidersConfig::default();
        providers.openai.api_key = "sk-test".to_string();

        let sel = resolve_llm_settings(ProviderId::OpenAi, &providers);
        assert_eq!(sel.model, "gpt-4o-mini");
        assert_eq!(sel.display_name, "OpenAI");
        assert_eq!(sel.api_key, "sk-test");
        assert_eq!(sel.api_base, None);
        assert_eq!(sel.params, LlmParams::default());
    }

    #[test]
    fn test_cohere_defaults() {
        let sel = resolve_llm_settings(ProviderId::Cohere, &ProvidersConfig::default());
        assert_eq!(sel.model, "command-r-plus-08-2024");
        assert_eq!(sel.params.temperature, Some(0.7));
        assert_eq!(sel.params.max_tokens, Some(1000));
        assert_eq!(sel.params.top_p, Some(0.9));
    }

    #[test]
    fn test_config_overrides_single_fields() {
        let providers = ProvidersConfig {
            cohere: ProviderConfig {
                api_key: "co-1".to_string(),
                model: Some("command-r-08-2024".to_string()),
                temperature: Some(0.3),
                ..Default::default()
            },
            ..Default::default()
        };

        let sel = resolve_llm_settings(ProviderId::Cohere, &providers);
        assert_eq!(sel.model, "command-r-08-2024");
        assert_eq!(sel.params.temperature, Some(0.3));
        // Untouched fields keep registry defaults
        assert_eq!(sel.params.max_tokens, Some(1000));
    }

    #[test]
    fn test_blank_model_falls_back_to_default() {
        let mut providers = ProvidersConfig::default();
        providers.openai.model = Some("  ".to_string());
        let sel = resolve_llm_settings(ProviderId::OpenAi, &providers);
        assert_eq!(sel.model, "gpt-4o-mini");
    }

    #[test]
    fn test_api_base_comes_from_config() {
        let mut providers = ProvidersConfig::default();
        providers.openai.api_base = Some("http://localhost:4000/v1".to_string());
        let sel = resolve_llm_settings(ProviderId::OpenAi, &providers);
        assert_eq!(sel.api_base.as_deref(), Some("http://localhost:4000/v1"));
    }

    #[test]
    fn test_debug_masks_key() {
        let mut providers = ProvidersConfig::default();
        providers.openai.api_key = "sk-proj-supersecretvalue".to_string();
        let sel = resolve_llm_settings(ProviderId::OpenAi, &providers);
        let rendered = format!("{sel:?}");
        assert!(!rendered.contains("supersecretvalue"));
    }

    #[test]
    fn test_serialized_selection_omits_key() {
        let mut providers = ProvidersConfig::default();
        providers.openai.api_key = "sk-secret".to_string();
        let raw = serde_json::to_value(resolve_llm_settings(ProviderId::OpenAi, &providers)).unwrap();
        assert!(raw.get("api_key").is_none());
        assert_eq!(raw["provider"], "openai");
    }
}
