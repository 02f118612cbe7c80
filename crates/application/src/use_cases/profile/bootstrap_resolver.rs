use crate::services::{InstallOutcome, ResolverRegistry};
use std::sync::Arc;
use tracing::debug;
use tunnel_profile_domain::{CompiledConfig, Resolver, ResolverConfig, ResolverError};

/// Which tier of the bootstrap decision was taken.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ResolverBootstrap {
    /// A resolver was already installed and was left alone.
    Kept,
    /// Built from the profile's own DNS section.
    FromProfile,
    /// Built from the hard-coded fallback settings.
    Fallback,
}

/// Guarantees a resolver exists after a profile has been applied.
///
/// An installed resolver is never replaced from here; it may hold live
/// caches and in-flight state.
pub struct BootstrapResolverUseCase {
    registry: Arc<ResolverRegistry>,
}

impl BootstrapResolverUseCase {
    pub fn new(registry: Arc<ResolverRegistry>) -> Self {
        Self { registry }
    }

    pub fn execute(&self, config: &CompiledConfig) -> Result<ResolverBootstrap, ResolverError> {
        let mut tier = ResolverBootstrap::Kept;

        let outcome = self.registry.install_if_absent(|| {
            let resolver_config = if config.dns.enable {
                tier = ResolverBootstrap::FromProfile;
                debug!(
                    name_servers = config.dns.name_servers.len(),
                    fallback = config.dns.fallback.len(),
                    mode = %config.dns.enhanced_mode,
                    "Building resolver from profile DNS settings"
                );
                ResolverConfig::from_dns_section(&config.dns)
            } else {
                tier = ResolverBootstrap::Fallback;
                debug!("Profile has no DNS settings, building fallback resolver");
                ResolverConfig::fallback_default()?
            };
            Resolver::new(resolver_config)
        })?;

        Ok(match outcome {
            InstallOutcome::AlreadyPresent => ResolverBootstrap::Kept,
            InstallOutcome::Installed => tier,
        })
    }
}
