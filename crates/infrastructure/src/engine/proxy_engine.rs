use arc_swap::ArcSwap;
use serde::Serialize;
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::PathBuf;
use std::sync::Arc;
use tracing::info;
use tunnel_profile_application::ports::ConfigApplier;
use tunnel_profile_domain::{CompiledConfig, General, Proxy, ProxyGroup, Rule};

/// Routing state the engine is currently running with.
#[derive(Debug, Clone, Default, Serialize)]
pub struct EngineSnapshot {
    /// Number of applies so far; 0 means nothing has been applied yet.
    pub generation: u64,
    pub general: General,
    pub proxies: Vec<Proxy>,
    pub proxy_groups: Vec<ProxyGroup>,
    pub rules: Vec<Rule>,
    pub hosts: BTreeMap<String, IpAddr>,
    pub base_dir: PathBuf,
}

/// Holds the active routing state.
///
/// Readers take a snapshot without blocking; every apply publishes a new
/// snapshot atomically so no reader ever sees half of a profile.
pub struct ProxyEngine {
    state: ArcSwap<EngineSnapshot>,
}

impl ProxyEngine {
    pub fn new() -> Self {
        Self {
            state: ArcSwap::from_pointee(EngineSnapshot::default()),
        }
    }

    pub fn snapshot(&self) -> Arc<EngineSnapshot> {
        self.state.load_full()
    }

    pub fn generation(&self) -> u64 {
        self.state.load().generation
    }
}

impl Default for ProxyEngine {
    fn default() -> Self {
        Self::new()
    }
}

impl ConfigApplier for ProxyEngine {
    /// With `force` everything is replaced. Without it the running
    /// listeners and outbound set are kept and only rules and hosts move.
    fn apply(&self, config: Arc<CompiledConfig>, force: bool) {
        let previous = self.state.rcu(|current| {
            let (general, proxies, proxy_groups) = if force {
                (
                    config.general.clone(),
                    config.proxies.clone(),
                    config.proxy_groups.clone(),
                )
            } else {
                (
                    current.general.clone(),
                    current.proxies.clone(),
                    current.proxy_groups.clone(),
                )
            };

            Arc::new(EngineSnapshot {
                generation: current.generation + 1,
                general,
                proxies,
                proxy_groups,
                rules: config.rules.clone(),
                hosts: config.hosts.clone(),
                base_dir: config.base_dir.clone(),
            })
        });

        info!(
            generation = previous.generation + 1,
            force,
            mode = %config.general.mode,
            rules = config.rules.len(),
            proxies = config.proxies.len(),
            "Configuration applied"
        );
    }
}
