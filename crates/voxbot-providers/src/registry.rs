//! Provider registry — static specs for the supported LLM backends.
//!
//! Each `ProviderSpec` describes how the bot connects to one backend:
//! the env var holding its key, its default model, and default sampling.
//! [`SELECTION_ORDER`] fixes which backend wins when several have keys.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::settings::LlmParams;

// ─────────────────────────────────────────────
// ProviderId
// ─────────────────────────────────────────────

/// Identifier of a hosted LLM backend.
#[derive(Clone, Copy, Debug, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ProviderId {
    OpenAi,
    Cohere,
}

impl ProviderId {
    /// Static spec for this provider.
    pub fn spec(self) -> &'static ProviderSpec {
        // Every id has exactly one entry in PROVIDERS.
        match self {
            ProviderId::OpenAi => &PROVIDERS[0],
            ProviderId::Cohere => &PROVIDERS[1],
        }
    }

    /// Internal name (e.g. `"cohere"`).
    pub fn name(self) -> &'static str {
        self.spec().name
    }

    /// Env var holding this provider's API key.
    pub fn env_key(self) -> &'static str {
        self.spec().env_key
    }

    /// Human-readable name used in logs and the greeting.
    pub fn display_name(self) -> &'static str {
        self.spec().display_name
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ─────────────────────────────────────────────
// ProviderSpec
// ─────────────────────────────────────────────

/// Static specification describing one LLM provider.
#[derive(Clone, Debug)]
pub struct ProviderSpec {
    pub id: ProviderId,
    /// Internal name, also the key under `providers` in the config file.
    pub name: &'static str,
    /// Human-readable name. E.g. `"OpenAI"`.
    pub display_name: &'static str,
    /// Environment variable for the API key. E.g. `"COHERE_API_KEY"`.
    pub env_key: &'static str,
    /// Model used when the config does not name one.
    pub default_model: &'static str,
    /// Sampling defaults. `None` fields are left to the vendor.
    pub default_params: LlmParams,
}

/// All supported providers, in registry order.
pub static PROVIDERS: &[ProviderSpec] = &[
    ProviderSpec {
        id: ProviderId::OpenAi,
        name: "openai",
        display_name: "OpenAI",
        env_key: "OPENAI_API_KEY",
        default_model: "gpt-4o-mini",
        default_params: LlmParams {
            temperature: None,
            max_tokens: None,
            top_p: None,
        },
    },
    // Command R+ tuned for short spoken answers
    ProviderSpec {
        id: ProviderId::Cohere,
        name: "cohere",
        display_name: "Cohere",
        env_key: "COHERE_API_KEY",
        default_model: "command-r-plus-08-2024",
        default_params: LlmParams {
            temperature: Some(0.7),
            max_tokens: Some(1000),
            top_p: Some(0.9),
        },
    },
];

/// Selection priority: the first provider with a usable key wins.
///
/// A new backend joins by adding a `ProviderId` variant, a `PROVIDERS`
/// entry, and a slot here after the existing ones.
pub const SELECTION_ORDER: &[ProviderId] = &[ProviderId::OpenAi, ProviderId::Cohere];

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
