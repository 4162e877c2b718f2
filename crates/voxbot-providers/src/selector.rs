//! Provider Selector — picks the LLM backend for a session.
//!
//! Selection is a pure function of the [`CredentialSet`]: the first provider
//! in [`SELECTION_ORDER`] (OpenAI, then Cohere) whose key is present wins.
//! The order is fixed; configuration cannot reorder or drop providers.

use serde::Serialize;
use tracing::{error, info};

use crate::credentials::CredentialSet;
use crate::error::SelectionError;
use crate::registry::{ProviderId, SELECTION_ORDER};

/// Result of provider selection. Fixed for the lifetime of a session.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase", tag = "status", content = "provider")]
pub enum ProviderChoice {
    Selected(ProviderId),
    /// No provider has a usable key.
    Unconfigured,
}

impl ProviderChoice {
    pub fn provider(self) -> Option<ProviderId> {
        match self {
            ProviderChoice::Selected(id) => Some(id),
            ProviderChoice::Unconfigured => None,
        }
    }
}

/// Choose the first provider in [`SELECTION_ORDER`] whose credential is present.
pub fn select_provider(credentials: &CredentialSet) -> ProviderChoice {
    SELECTION_ORDER
        .iter()
        .copied()
        .find(|id| credentials.is_present(*id))
        .map_or(ProviderChoice::Unconfigured, ProviderChoice::Selected)
}

/// Like [`select_provider`], but `Unconfigured` becomes
/// [`SelectionError::NoUsableProvider`] naming every env var tried.
pub fn require_provider(credentials: &CredentialSet) -> Result<ProviderId, SelectionError> {
    match select_provider(credentials).provider() {
        Some(id) => {
            info!(provider = %id, "Using {} for LLM", id.display_name());
            Ok(id)
        }
        None => {
            let missing: Vec<&'static str> =
                SELECTION_ORDER.iter().map(|id| id.env_key()).collect();
            error!(missing = ?missing, "No valid LLM API key found");
            Err(SelectionError::NoUsableProvider { missing })
        }
    }
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────
