use serde::{Deserialize, Serialize};
use std::path::{Path, PathBuf};

#[derive(Debug, Clone, Deserialize, Serialize)]
pub struct ProfileConfig {
    /// Profile to load after the built-in default; `None` keeps the default
    #[serde(default)]
    pub path: Option<String>,

    /// Directory relative references inside the profile resolve against.
    /// Falls back to the profile's own directory.
    #[serde(default)]
    pub base_dir: Option<String>,

    /// Working directory used for the built-in default profile
    #[serde(default = "default_home_dir")]
    pub home_dir: String,
}

impl ProfileConfig {
    /// Base directory for the configured profile, `None` when no profile is set.
    pub fn resolved_base_dir(&self) -> Option<PathBuf> {
        let path = Path::new(self.path.as_deref()?);
        let dir = match &self.base_dir {
            Some(dir) => PathBuf::from(dir),
            None => match path.parent() {
                Some(parent) if !parent.as_os_str().is_empty() => parent.to_path_buf(),
                _ => PathBuf::from("."),
            },
        };
        Some(dir)
    }
}

impl Default for ProfileConfig {
    fn default() -> Self {
        Self {
            path: None,
            base_dir: None,
            home_dir: default_home_dir(),
        }
    }
}

fn default_home_dir() -> String {
    ".".to_string()
}
