use arc_swap::ArcSwap;
use serde::Serialize;
use std::sync::atomic::{AtomicU64, Ordering};
use std::sync::Arc;
use tracing::{debug, info};
use tunnel_profile_application::ports::DnsRedirect;
use tunnel_profile_application::services::ResolverRegistry;
use tunnel_profile_domain::EnhancedMode;

/// How DNS packets arriving on the tun device are handled.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct RedirectState {
    /// Hijack port 53 traffic into the resolver.
    pub enabled: bool,
    pub enhanced_mode: Option<EnhancedMode>,
    /// Address block answers are drawn from in fake-IP mode.
    pub fake_ip_range: Option<String>,
}

/// Tun-side DNS redirect, re-derived from the installed resolver.
pub struct TunDnsRedirect {
    registry: Arc<ResolverRegistry>,
    state: ArcSwap<RedirectState>,
    resets: AtomicU64,
}

impl TunDnsRedirect {
    pub fn new(registry: Arc<ResolverRegistry>) -> Self {
        Self {
            registry,
            state: ArcSwap::from_pointee(RedirectState::default()),
            resets: AtomicU64::new(0),
        }
    }

    pub fn state(&self) -> Arc<RedirectState> {
        self.state.load_full()
    }

    pub fn generation(&self) -> u64 {
        self.resets.load(Ordering::Acquire)
    }

    fn compute(&self) -> RedirectState {
        match self.registry.current() {
            Some(resolver) => RedirectState {
                enabled: true,
                enhanced_mode: Some(resolver.enhanced_mode()),
                fake_ip_range: resolver.pool().map(|pool| pool.network().to_string()),
            },
            None => RedirectState::default(),
        }
    }
}

impl DnsRedirect for TunDnsRedirect {
    fn reset_redirect(&self) {
        let next = self.compute();
        let changed = *self.state.load_full() != next;
        self.state.store(Arc::new(next));
        let generation = self.resets.fetch_add(1, Ordering::AcqRel) + 1;

        if changed {
            let state = self.state.load();
            info!(
                generation,
                enabled = state.enabled,
                mode = ?state.enhanced_mode,
                "Tun DNS redirect updated"
            );
        } else {
            debug!(generation, "Tun DNS redirect unchanged");
        }
    }
}
