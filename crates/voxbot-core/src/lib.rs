//! Core types for Voxbot: configuration, paths, and the bot persona.
//!
//! Nothing in this crate talks to a vendor API. It only describes what the
//! voice bot process is configured with before the pipeline starts.

pub mod config;
pub mod persona;
pub mod utils;

pub use config::Config;
