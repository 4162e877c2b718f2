//! Credential Set — which LLM provider keys are usable in this process.
//!
//! Built once at start-up and never mutated afterwards. Only presence is
//! recorded; key values stay in the config.

use std::collections::BTreeMap;

use voxbot_core::config::schema::{ProviderConfig, ProvidersConfig};

use crate::registry::{ProviderId, PROVIDERS};

/// Presence of each provider's API key. Providers without an entry are absent.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CredentialSet {
    present: BTreeMap<ProviderId, bool>,
}

impl CredentialSet {
    /// A set where every provider is absent.
    pub fn new() -> Self {
        Self::default()
    }

    /// Builder-style setter, mostly for tests and embedding code.
    pub fn with(mut self, id: ProviderId, present: bool) -> Self {
        self.present.insert(id, present);
        self
    }

    /// Derive presence from a loaded config (which already merged the environment).
    pub fn from_config(providers: &ProvidersConfig) -> Self {
        let present = PROVIDERS
            .iter()
            .map(|spec| {
                let ok = providers
                    .get_by_name(spec.name)
                    .is_some_and(ProviderConfig::is_configured);
                (spec.id, ok)
            })
            .collect();
        Self { present }
    }

    /// Whether `id` has a usable key.
    pub fn is_present(&self, id: ProviderId) -> bool {
        self.present.get(&id).copied().unwrap_or(false)
    }
}
