use super::bootstrap_resolver::BootstrapResolverUseCase;
use super::pipeline::ProfilePipeline;
use crate::ports::{ConfigApplier, DnsRedirect};
use std::path::PathBuf;
use std::sync::Arc;
use tracing::{debug, instrument, warn};
use tunnel_profile_domain::DEFAULT_PROFILE;

/// Loads the built-in profile.
///
/// Unlike file loads this never reports failure: a broken default is
/// logged and the engine keeps whatever state it already had.
pub struct LoadDefaultProfileUseCase {
    pipeline: Arc<ProfilePipeline>,
    applier: Arc<dyn ConfigApplier>,
    bootstrap: Arc<BootstrapResolverUseCase>,
    redirect: Arc<dyn DnsRedirect>,
    home_dir: PathBuf,
}

impl LoadDefaultProfileUseCase {
    pub fn new(
        pipeline: Arc<ProfilePipeline>,
        applier: Arc<dyn ConfigApplier>,
        bootstrap: Arc<BootstrapResolverUseCase>,
        redirect: Arc<dyn DnsRedirect>,
        home_dir: impl Into<PathBuf>,
    ) -> Self {
        Self {
            pipeline,
            applier,
            bootstrap,
            redirect,
            home_dir: home_dir.into(),
        }
    }

    #[instrument(skip(self))]
    pub fn execute(&self) {
        let config = match self.pipeline.compile(DEFAULT_PROFILE.as_bytes(), &self.home_dir) {
            Ok(config) => Arc::new(config),
            Err(e) => {
                warn!(error = %e, "Load default profile failure");
                return;
            }
        };

        self.applier.apply(Arc::clone(&config), true);

        match self.bootstrap.execute(&config) {
            Ok(tier) => debug!(resolver = ?tier, "Resolver bootstrap finished"),
            Err(e) => warn!(error = %e, "Failed to build resolver, continuing without DNS"),
        }

        self.redirect.reset_redirect();
    }
}
