//! Utility helpers — path resolution and credential handling.

use std::path::PathBuf;

/// Get the Voxbot data directory (e.g. `~/.voxbot/`).
pub fn get_data_path() -> PathBuf {
    let home = dirs_next::home_dir().unwrap_or_else(|| PathBuf::from("."));
    home.join(".voxbot")
}

/// Expand `~` to the home directory in a path string.
pub fn expand_home(path: &str) -> PathBuf {
    if let Some(rest) = path.strip_prefix("~/") {
        if let Some(home) = dirs_next::home_dir() {
            return home.join(rest);
        }
    }
    if path == "~" {
        if let Some(home) = dirs_next::home_dir() {
            return home;
        }
    }
    PathBuf::from(path)
}

/// Whether a credential value is usable.
///
/// Blank values and `.env` template placeholders such as
/// `your_openai_api_key` are treated as absent.
pub fn is_credential_present(value: &str) -> bool {
    let value = value.trim();
    !value.is_empty() && !is_placeholder(value)
}

fn is_placeholder(value: &str) -> bool {
    let lower = value.to_ascii_lowercase();
    lower.starts_with("your_") && lower.ends_with("_api_key")
}

/// Mask a secret for display, keeping a short prefix.
///
/// Unicode-safe. Secrets of eight characters or fewer are fully hidden.
pub fn mask_secret(secret: &str) -> String {
    let count = secret.chars().count();
    if count <= 8 {
        return "*".repeat(count.max(3));
    }
    let visible = (count / 4).min(8);
    let prefix: String = secret.chars().take(visible).collect();
    format!("{prefix}...")
}
