//! Profile documents and their lifecycle up to the engine boundary.
//!
//! - `raw`: the loosely typed document as decoded from YAML
//! - `tun_safety`: rewrites applied before a profile reaches the engine
//! - `default_profile`: the built-in document used when nothing is selected
//! - `compiled`: the validated form consumed by the engine

pub mod compiled;
pub mod default_profile;
pub mod raw;
pub mod tun_safety;

pub use compiled::{CompiledConfig, DnsSection, FallbackFilter, General, LogLevel, Mode};
pub use default_profile::DEFAULT_PROFILE;
pub use raw::{RawConfig, RawDns, RawFallbackFilter};
pub use tun_safety::{sanitize_for_tun, tun_reject_rule, TUN_ADDRESS};
