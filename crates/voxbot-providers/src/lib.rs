//! LLM provider layer for Voxbot.
//!
//! # Architecture
//!
//! - [`registry`] — static specs for the supported LLM backends
//! - [`credentials::CredentialSet`] — which provider keys are usable
//! - [`selector`] — the fixed OpenAI → Cohere policy that picks one backend per session
//! - [`settings`] — model and sampling parameters for the chosen backend
//! - [`preflight`] — start-up validation producing a [`preflight::StartupPlan`]

pub mod credentials;
pub mod error;
pub mod preflight;
pub mod registry;
pub mod selector;
pub mod settings;

pub use credentials::CredentialSet;
pub use error::{PreflightError, SelectionError};
pub use preflight::{run_preflight, StartupPlan};
pub use registry::{ProviderId, ProviderSpec, PROVIDERS, SELECTION_ORDER};
pub use selector::{require_provider, select_provider, ProviderChoice};
pub use settings::{resolve_llm_settings, LlmParams, LlmSelection};
