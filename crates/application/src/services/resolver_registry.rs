use arc_swap::ArcSwapOption;
use std::sync::{Arc, Mutex};
use tracing::{debug, info};
use tunnel_profile_domain::Resolver;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InstallOutcome {
    AlreadyPresent,
    Installed,
}

/// Holder of the process-wide active resolver.
///
/// Readers load the current resolver without locking. Installation is a
/// single check-then-set step serialized by `install_lock`, so concurrent
/// profile loads cannot both observe an empty slot and both build one.
/// Once installed the resolver is never cleared.
pub struct ResolverRegistry {
    current: ArcSwapOption<Resolver>,
    install_lock: Mutex<()>,
}

impl ResolverRegistry {
    pub fn new() -> Self {
        Self {
            current: ArcSwapOption::const_empty(),
            install_lock: Mutex::new(()),
        }
    }

    pub fn current(&self) -> Option<Arc<Resolver>> {
        self.current.load_full()
    }

    pub fn is_set(&self) -> bool {
        self.current.load().is_some()
    }

    /// Runs `build` and installs its result only if no resolver is set.
    ///
    /// `build` runs while the install lock is held. On error nothing is
    /// installed and the error is returned unchanged.
    pub fn install_if_absent<F, E>(&self, build: F) -> Result<InstallOutcome, E>
    where
        F: FnOnce() -> Result<Resolver, E>,
    {
        let _guard = self.install_lock.lock().unwrap_or_else(|e| e.into_inner());

        if self.current.load().is_some() {
            debug!("Resolver already installed, keeping it");
            return Ok(InstallOutcome::AlreadyPresent);
        }

        let resolver = Arc::new(build()?);
        info!(
            mode = %resolver.enhanced_mode(),
            name_servers = resolver.main().len(),
            ipv6 = resolver.ipv6(),
            "Resolver installed"
        );
        self.current.store(Some(resolver));

        Ok(InstallOutcome::Installed)
    }
}

impl Default for ResolverRegistry {
    fn default() -> Self {
        Self::new()
    }
}
