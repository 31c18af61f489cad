use serde::{Deserialize, Serialize};

/// User-editable settings in `~/.config/resonance-desk/config.toml`.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct UserConfig {
    /// Where the demo reels live; tracks are `<slug>-demo.mp3`.
    #[serde(default = "default_audio_directory")]
    pub audio_directory: String,

    /// Animation tick interval in milliseconds (~60 fps by default).
    #[serde(default = "default_tick_rate_ms")]
    pub tick_rate_ms: u64,

    /// tracing filter directive for the log file.
    #[serde(default = "default_log_level")]
    pub log_level: String,
}

fn default_audio_directory() -> String {
    "resources/audio".to_string()
}

fn default_tick_rate_ms() -> u64 {
    16
}

fn default_log_level() -> String {
    "info".to_string()
}

impl Default for UserConfig {
    fn default() -> Self {
        Self {
            audio_directory: default_audio_directory(),
            tick_rate_ms: default_tick_rate_ms(),
            log_level: default_log_level(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn defaults_round_trip_through_toml() {
        let config = UserConfig::default();
        let text = toml::to_string_pretty(&config).unwrap();
        let back: UserConfig = toml::from_str(&text).unwrap();
        assert_eq!(back.audio_directory, config.audio_directory);
        assert_eq!(back.tick_rate_ms, 16);
    }

    #[test]
    fn missing_fields_fall_back_to_defaults() {
        let back: UserConfig = toml::from_str("audio_directory = \"/srv/demos\"").unwrap();
        assert_eq!(back.audio_directory, "/srv/demos");
        assert_eq!(back.tick_rate_ms, 16);
        assert_eq!(back.log_level, "info");
    }
}
