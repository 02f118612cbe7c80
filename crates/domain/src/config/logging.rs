use serde::{Deserialize, Serialize};

const KNOWN_LEVELS: [&str; 5] = ["trace", "debug", "info", "warn", "error"];

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct LoggingConfig {
    #[serde(default = "default_log_level")]
    pub level: String,

    /// `pretty` for terminals, `json` for log collectors
    #[serde(default = "default_log_format")]
    pub format: String,
}

impl LoggingConfig {
    pub fn has_known_level(&self) -> bool {
        KNOWN_LEVELS.contains(&self.level.to_ascii_lowercase().as_str())
    }

    pub fn has_known_format(&self) -> bool {
        matches!(self.format.as_str(), "pretty" | "json")
    }
}

impl Default for LoggingConfig {
    fn default() -> Self {
        Self {
            level: default_log_level(),
            format: default_log_format(),
        }
    }
}

fn default_log_level() -> String {
    "info".to_string()
}

fn default_log_format() -> String {
    "pretty".to_string()
}
