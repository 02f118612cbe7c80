use crate::errors::ResolverError;
use crate::fake_ip::{FakeIpPool, HostFilter};
use crate::name_server::NameServer;
use crate::profile::compiled::{DnsSection, FallbackFilter};
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;
use std::sync::Arc;

/// Address block the fallback resolver allocates fake IPs from.
pub const FALLBACK_FAKE_IP_RANGE: &str = "198.18.0.1/16";

/// Number of host mappings a fake-IP pool keeps before evicting.
pub const FAKE_IP_POOL_CAPACITY: usize = 1000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default, Serialize, Deserialize)]
pub enum EnhancedMode {
    #[default]
    #[serde(rename = "normal")]
    Normal,
    #[serde(rename = "fake-ip")]
    FakeIp,
    #[serde(rename = "redir-host")]
    RedirHost,
}

impl EnhancedMode {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Normal => "normal",
            Self::FakeIp => "fake-ip",
            Self::RedirHost => "redir-host",
        }
    }
}

impl FromStr for EnhancedMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_ascii_lowercase().as_str() {
            "" | "normal" => Ok(Self::Normal),
            "fake-ip" | "fakeip" => Ok(Self::FakeIp),
            "redir-host" | "mapping" => Ok(Self::RedirHost),
            other => Err(format!("Unsupported enhanced mode '{}'", other)),
        }
    }
}

impl fmt::Display for EnhancedMode {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Main name servers of the fallback resolver, in query order.
pub fn fallback_name_servers() -> Vec<NameServer> {
    vec![
        NameServer::tcp("1.1.1.1:53"),
        NameServer::tcp("208.67.222.222:53"),
        NameServer::udp("119.29.29.29:53"),
        NameServer::udp("223.5.5.5:53"),
    ]
}

/// Everything needed to construct a [`Resolver`].
#[derive(Debug, Clone)]
pub struct ResolverConfig {
    pub main: Vec<NameServer>,
    pub fallback: Vec<NameServer>,
    pub ipv6: bool,
    pub enhanced_mode: EnhancedMode,
    pub pool: Option<Arc<FakeIpPool>>,
    pub fallback_filter: FallbackFilter,
}

impl ResolverConfig {
    /// Copies the DNS section of a compiled profile without reordering or filtering.
    pub fn from_dns_section(dns: &DnsSection) -> Self {
        Self {
            main: dns.name_servers.clone(),
            fallback: dns.fallback.clone(),
            ipv6: dns.ipv6,
            enhanced_mode: dns.enhanced_mode,
            pool: dns.fake_ip_pool.clone(),
            fallback_filter: dns.fallback_filter.clone(),
        }
    }

    /// Resolver used when nothing else provides DNS settings.
    ///
    /// Fake-IP mode over [`FALLBACK_FAKE_IP_RANGE`], IPv6 off, no fallback
    /// servers and a fallback filter that trusts every answer.
    pub fn fallback_default() -> Result<Self, ResolverError> {
        let pool = FakeIpPool::from_cidr(
            FALLBACK_FAKE_IP_RANGE,
            FAKE_IP_POOL_CAPACITY,
            HostFilter::default(),
        )?;

        Ok(Self {
            main: fallback_name_servers(),
            fallback: Vec::new(),
            ipv6: false,
            enhanced_mode: EnhancedMode::FakeIp,
            pool: Some(Arc::new(pool)),
            fallback_filter: FallbackFilter {
                geoip: false,
                ip_cidr: Vec::new(),
                geoip_database: None,
            },
        })
    }
}

/// Resolver instance handed to the engine's DNS paths.
///
/// Construction validates the settings; query handling itself belongs to
/// the DNS subsystem.
#[derive(Debug)]
pub struct Resolver {
    config: ResolverConfig,
}

impl Resolver {
    pub fn new(config: ResolverConfig) -> Result<Self, ResolverError> {
        if config.main.is_empty() {
            return Err(ResolverError::NoNameServers);
        }
        if config.enhanced_mode == EnhancedMode::FakeIp && config.pool.is_none() {
            return Err(ResolverError::MissingPool);
        }
        Ok(Self { config })
    }

    pub fn main(&self) -> &[NameServer] {
        &self.config.main
    }

    pub fn fallback(&self) -> &[NameServer] {
        &self.config.fallback
    }

    pub fn ipv6(&self) -> bool {
        self.config.ipv6
    }

    pub fn enhanced_mode(&self) -> EnhancedMode {
        self.config.enhanced_mode
    }

    pub fn pool(&self) -> Option<&Arc<FakeIpPool>> {
        self.config.pool.as_ref()
    }

    pub fn fallback_filter(&self) -> &FallbackFilter {
        &self.config.fallback_filter
    }

    pub fn is_fake_ip(&self) -> bool {
        self.config.enhanced_mode == EnhancedMode::FakeIp
    }
}
