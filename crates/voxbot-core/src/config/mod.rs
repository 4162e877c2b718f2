//! Configuration system — schema, loading, `.env` files, and env var overrides.
//!
//! # Usage
//! ```no_run
//! use voxbot_core::config;
//!
//! config::load_dotenv(None);
//! let cfg = config::load_config(None);
//! println!("Voice: {}", cfg.speech.voice_id);
//! ```

pub mod loader;
pub mod schema;

pub use loader::{get_config_path, load_config, load_dotenv, save_config};
pub use schema::{Config, ProviderConfig};
