//! Shared CLI helpers — path resolution, config loading, and status marks.

use std::path::{Path, PathBuf};

use colored::Colorize;

use voxbot_core::config::{get_config_path, load_config, load_dotenv, Config};
use voxbot_core::utils::expand_home;

/// Files the CLI reads, after `~` expansion.
pub struct Paths {
    pub config: PathBuf,
    pub env_file: Option<PathBuf>,
}

impl Paths {
    pub fn resolve(config: Option<&Path>, env_file: Option<&Path>) -> Self {
        Self {
            config: config
                .map(|p| expand_home(&p.to_string_lossy()))
                .unwrap_or_else(get_config_path),
            env_file: env_file.map(|p| expand_home(&p.to_string_lossy())),
        }
    }

    /// Load `.env` into the environment, then the config file plus env overrides.
    pub fn load(&self) -> Config {
        load_dotenv(self.env_file.as_deref());
        load_config(Some(&self.config))
    }
}

/// `✓ label` in green or `✗ label` in red.
pub fn mark(ok: bool, label: &str) -> String {
    if ok {
        format!("{} {}", "✓".green(), label)
    } else {
        format!("{} {}", "✗".red(), label)
    }
}

/// Print the banner shown at the top of interactive commands.
pub fn print_banner(title: &str) {
    let version = env!("CARGO_PKG_VERSION");
    println!();
    println!("{}  v{}", format!("🎙 Voxbot {title}").cyan().bold(), version.dimmed());
    println!();
}

// ─────────────────────────────────────────────
// Tests
// ─────────────────────────────────────────────

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn resolve_defaults_to_data_dir() {
        let paths = Paths::resolve(None, None);
        assert!(paths.config.ends_with(".voxbot/config.json"));
        assert!(paths.env_file.is_none());
    }

    #[test]
    fn resolve_expands_tilde() {
        let paths = Paths::resolve(Some(Path::new("~/bots/voxbot.json")), Some(Path::new("~/.env")));
        assert!(paths.config.ends_with("bots/voxbot.json"));
        assert!(!paths.config.starts_with("~"));
        assert!(paths.env_file.unwrap().ends_with(".env"));
    }

    #[test]
    fn load_reads_explicit_config_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("config.json");
        std::fs::write(&path, r#"{ "bot": { "name": "Lobby Bot" } }"#).unwrap();

        let env_file = dir.path().join("missing.env");
        let paths = Paths::resolve(Some(path.as_path()), Some(env_file.as_path()));
        assert_eq!(paths.load().bot.name, "Lobby Bot");
    }

    #[test]
    fn mark_contains_label() {
        assert!(mark(true, "configured").contains("configured"));
        assert!(mark(false, "missing").contains("missing"));
    }
}
