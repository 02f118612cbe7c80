use super::bootstrap_resolver::BootstrapResolverUseCase;
use super::pipeline::ProfilePipeline;
use crate::ports::{ConfigApplier, DnsRedirect};
use std::path::Path;
use std::sync::Arc;
use tracing::{info, instrument, warn};
use tunnel_profile_domain::ProfileError;

/// Loads a user profile from disk and makes it the active engine state.
pub struct LoadProfileUseCase {
    pipeline: Arc<ProfilePipeline>,
    applier: Arc<dyn ConfigApplier>,
    bootstrap: Arc<BootstrapResolverUseCase>,
    redirect: Arc<dyn DnsRedirect>,
}

impl LoadProfileUseCase {
    pub fn new(
        pipeline: Arc<ProfilePipeline>,
        applier: Arc<dyn ConfigApplier>,
        bootstrap: Arc<BootstrapResolverUseCase>,
        redirect: Arc<dyn DnsRedirect>,
    ) -> Self {
        Self {
            pipeline,
            applier,
            bootstrap,
            redirect,
        }
    }

    /// Read errors and invalid profiles are returned before the engine is
    /// touched. Once the profile is applied the load counts as successful:
    /// a resolver that fails to build is logged and left absent.
    #[instrument(skip(self), fields(path = %path.display()))]
    pub fn execute(&self, path: &Path, base_dir: &Path) -> Result<(), ProfileError> {
        let data = std::fs::read(path).map_err(|e| ProfileError::Io {
            path: path.display().to_string(),
            message: e.to_string(),
        })?;

        let config = Arc::new(self.pipeline.compile(&data, base_dir)?);

        self.applier.apply(Arc::clone(&config), true);

        match self.bootstrap.execute(&config) {
            Ok(tier) => info!(resolver = ?tier, "Resolver bootstrap finished"),
            Err(e) => warn!(error = %e, "Failed to build resolver, continuing without DNS"),
        }

        self.redirect.reset_redirect();

        info!("Profile {} loaded", path.display());
        Ok(())
    }
}
