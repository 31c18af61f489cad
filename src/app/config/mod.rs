use std::fs;
use std::path::PathBuf;

pub mod user;

pub use user::UserConfig;

pub struct AppConfig;

impl AppConfig {
    pub fn config_dir() -> PathBuf {
        let home = dirs::home_dir().unwrap_or_else(|| PathBuf::from("."));
        let xdg_dir = home.join(".config").join("resonance-desk");

        if !xdg_dir.exists() {
            let _ = fs::create_dir_all(&xdg_dir);
        }

        xdg_dir
    }

    pub fn config_path() -> PathBuf {
        Self::config_dir().join("config.toml")
    }

    /// Where the rolling log file lands.
    pub fn log_dir() -> PathBuf {
        Self::config_dir().join("logs")
    }

    /// Load the user config, writing a default config.toml on first run.
    /// A malformed file degrades to defaults rather than failing startup.
    pub fn load() -> UserConfig {
        let path = Self::config_path();

        if path.exists() {
            if let Ok(content) = fs::read_to_string(&path) {
                toml::from_str(&content).unwrap_or_else(|_| UserConfig::default())
            } else {
                UserConfig::default()
            }
        } else {
            let c = UserConfig::default();
            if let Ok(content) = toml::to_string_pretty(&c) {
                let _ = fs::write(&path, content);
            }
            c
        }
    }
}
