//! Tunnel Profile Domain Layer
pub mod config;
pub mod errors;
pub mod fake_ip;
pub mod name_server;
pub mod profile;
pub mod proxy;
pub mod resolver;
pub mod rule;

pub use config::{AppConfig, CliOverrides, ConfigError};
pub use errors::{CompileError, ProfileError, ResolverError};
pub use fake_ip::{FakeIpPool, HostFilter};
pub use name_server::{NameServer, NameServerNet};
pub use profile::{
    sanitize_for_tun, tun_reject_rule, CompiledConfig, DnsSection, FallbackFilter, General,
    LogLevel, Mode, RawConfig, RawDns, DEFAULT_PROFILE, TUN_ADDRESS,
};
pub use proxy::{GroupKind, Proxy, ProxyGroup, ProxyKind, BUILTIN_TARGETS};
pub use resolver::{
    fallback_name_servers, EnhancedMode, Resolver, ResolverConfig, FAKE_IP_POOL_CAPACITY,
    FALLBACK_FAKE_IP_RANGE,
};
pub use rule::{Rule, RuleKind};
