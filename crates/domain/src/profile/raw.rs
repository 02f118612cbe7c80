use crate::errors::ProfileError;
use serde::Deserialize;
use std::collections::BTreeMap;

/// Profile document as written by the user, before any validation.
///
/// Accepts both the legacy capitalized section names (`Proxy`,
/// `Proxy Group`, `Rule`) and the modern kebab-case ones. Unknown keys
/// are ignored.
#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawConfig {
    pub port: u16,
    pub socks_port: u16,
    pub redir_port: u16,
    pub allow_lan: bool,
    pub bind_address: String,
    pub mode: String,
    #[serde(alias = "log")]
    pub log_level: String,
    pub external_controller: String,
    pub external_ui: String,
    pub secret: String,

    #[serde(rename = "Proxy", alias = "proxies")]
    pub proxies: Vec<serde_yaml::Mapping>,

    #[serde(rename = "Proxy Group", alias = "proxy-groups")]
    pub proxy_groups: Vec<serde_yaml::Mapping>,

    #[serde(rename = "Rule", alias = "rules")]
    pub rules: Vec<String>,

    pub hosts: BTreeMap<String, String>,

    pub dns: RawDns,
}

impl Default for RawConfig {
    fn default() -> Self {
        Self {
            port: 0,
            socks_port: 0,
            redir_port: 0,
            allow_lan: false,
            bind_address: "*".to_string(),
            mode: "rule".to_string(),
            log_level: "info".to_string(),
            external_controller: String::new(),
            external_ui: String::new(),
            secret: String::new(),
            proxies: vec![],
            proxy_groups: vec![],
            rules: vec![],
            hosts: BTreeMap::new(),
            dns: RawDns::default(),
        }
    }
}

impl RawConfig {
    /// Decodes a YAML profile. An empty document yields the defaults.
    pub fn from_yaml(data: &[u8]) -> Result<Self, ProfileError> {
        let text = std::str::from_utf8(data)
            .map_err(|e| ProfileError::Parse(format!("profile is not valid UTF-8: {}", e)))?;

        if text.trim().is_empty() {
            return Ok(Self::default());
        }

        serde_yaml::from_str(text).map_err(|e| ProfileError::Parse(e.to_string()))
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default, rename_all = "kebab-case")]
pub struct RawDns {
    pub enable: bool,
    pub ipv6: bool,
    pub listen: String,
    pub nameserver: Vec<String>,
    pub fallback: Vec<String>,
    pub fallback_filter: RawFallbackFilter,
    pub enhanced_mode: String,
    pub fake_ip_range: String,
    pub fake_ip_filter: Vec<String>,
}

impl Default for RawDns {
    fn default() -> Self {
        Self {
            enable: false,
            ipv6: false,
            listen: String::new(),
            nameserver: vec![],
            fallback: vec![],
            fallback_filter: RawFallbackFilter::default(),
            enhanced_mode: "normal".to_string(),
            fake_ip_range: crate::resolver::FALLBACK_FAKE_IP_RANGE.to_string(),
            fake_ip_filter: vec![],
        }
    }
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct RawFallbackFilter {
    pub geoip: bool,
    pub ipcidr: Vec<String>,
}

impl Default for RawFallbackFilter {
    fn default() -> Self {
        Self {
            geoip: true,
            ipcidr: vec![],
        }
    }
}
