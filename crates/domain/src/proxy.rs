use serde::Serialize;
use std::fmt;
use std::str::FromStr;

/// Targets every profile can route to without declaring them.
pub const BUILTIN_TARGETS: [&str; 2] = ["DIRECT", "REJECT"];

pub fn is_builtin_target(name: &str) -> bool {
    BUILTIN_TARGETS.contains(&name)
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ProxyKind {
    Shadowsocks,
    Socks5,
    Http,
    Vmess,
    Snell,
    Trojan,
}

impl ProxyKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Shadowsocks => "ss",
            Self::Socks5 => "socks5",
            Self::Http => "http",
            Self::Vmess => "vmess",
            Self::Snell => "snell",
            Self::Trojan => "trojan",
        }
    }
}

impl FromStr for ProxyKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "ss" | "shadowsocks" => Ok(Self::Shadowsocks),
            "socks5" | "socks" => Ok(Self::Socks5),
            "http" => Ok(Self::Http),
            "vmess" => Ok(Self::Vmess),
            "snell" => Ok(Self::Snell),
            "trojan" => Ok(Self::Trojan),
            other => Err(format!("Unsupported proxy type '{}'", other)),
        }
    }
}

impl fmt::Display for ProxyKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outbound proxy declared in a profile.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Proxy {
    pub name: String,
    pub kind: ProxyKind,
    pub server: String,
    pub port: u16,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "kebab-case")]
pub enum GroupKind {
    Select,
    UrlTest,
    Fallback,
    LoadBalance,
}

impl GroupKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Select => "select",
            Self::UrlTest => "url-test",
            Self::Fallback => "fallback",
            Self::LoadBalance => "load-balance",
        }
    }

    /// Whether the group probes its members and therefore needs a test URL.
    pub fn needs_health_check(&self) -> bool {
        !matches!(self, Self::Select)
    }
}

impl FromStr for GroupKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_lowercase().as_str() {
            "select" => Ok(Self::Select),
            "url-test" => Ok(Self::UrlTest),
            "fallback" => Ok(Self::Fallback),
            "load-balance" => Ok(Self::LoadBalance),
            other => Err(format!("Unsupported proxy group type '{}'", other)),
        }
    }
}

impl fmt::Display for GroupKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ProxyGroup {
    pub name: String,
    pub kind: GroupKind,
    pub proxies: Vec<String>,
    pub url: Option<String>,
    pub interval: Option<u64>,
}
