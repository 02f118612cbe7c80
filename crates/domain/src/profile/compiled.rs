use crate::fake_ip::FakeIpPool;
use crate::name_server::NameServer;
use crate::proxy::{Proxy, ProxyGroup};
use crate::resolver::EnhancedMode;
use crate::rule::Rule;
use ipnetwork::IpNetwork;
use serde::Serialize;
use std::collections::BTreeMap;
use std::fmt;
use std::net::IpAddr;
use std::path::PathBuf;
use std::str::FromStr;
use std::sync::Arc;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum Mode {
    Global,
    #[default]
    Rule,
    Direct,
}

impl FromStr for Mode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "global" => Ok(Self::Global),
            "rule" => Ok(Self::Rule),
            "direct" => Ok(Self::Direct),
            other => Err(format!("Unsupported mode '{}'", other)),
        }
    }
}

impl fmt::Display for Mode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Global => "global",
            Self::Rule => "rule",
            Self::Direct => "direct",
        };
        f.write_str(name)
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize)]
pub enum LogLevel {
    Debug,
    #[default]
    Info,
    Warning,
    Error,
    Silent,
}

impl FromStr for LogLevel {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "debug" => Ok(Self::Debug),
            "info" => Ok(Self::Info),
            "warning" | "warn" => Ok(Self::Warning),
            "error" => Ok(Self::Error),
            "silent" => Ok(Self::Silent),
            other => Err(format!("Unsupported log level '{}'", other)),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct General {
    pub port: u16,
    pub socks_port: u16,
    pub redir_port: u16,
    pub allow_lan: bool,
    pub bind_address: String,
    pub mode: Mode,
    pub log_level: LogLevel,
    pub external_controller: String,
    pub external_ui: String,
    pub secret: String,
}

impl Default for General {
    fn default() -> Self {
        Self {
            port: 0,
            socks_port: 0,
            redir_port: 0,
            allow_lan: false,
            bind_address: "*".to_string(),
            mode: Mode::default(),
            log_level: LogLevel::default(),
            external_controller: String::new(),
            external_ui: String::new(),
            secret: String::new(),
        }
    }
}

/// Decides whether an answer from the main servers should be distrusted.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FallbackFilter {
    pub geoip: bool,
    pub ip_cidr: Vec<IpNetwork>,
    /// Country database consulted when `geoip` is on.
    pub geoip_database: Option<PathBuf>,
}

#[derive(Debug, Clone, Default)]
pub struct DnsSection {
    pub enable: bool,
    pub ipv6: bool,
    pub listen: String,
    pub name_servers: Vec<NameServer>,
    pub fallback: Vec<NameServer>,
    pub enhanced_mode: EnhancedMode,
    /// Present only in fake-IP mode.
    pub fake_ip_pool: Option<Arc<FakeIpPool>>,
    pub fallback_filter: FallbackFilter,
}

/// Fully validated profile, ready to become the engine's active state.
#[derive(Debug, Clone, Default)]
pub struct CompiledConfig {
    pub general: General,
    pub proxies: Vec<Proxy>,
    pub proxy_groups: Vec<ProxyGroup>,
    pub rules: Vec<Rule>,
    pub hosts: BTreeMap<String, IpAddr>,
    pub dns: DnsSection,
    pub base_dir: PathBuf,
}

impl CompiledConfig {
    pub fn has_target(&self, name: &str) -> bool {
        crate::proxy::is_builtin_target(name)
            || self.proxies.iter().any(|p| p.name == name)
            || self.proxy_groups.iter().any(|g| g.name == name)
    }
}
