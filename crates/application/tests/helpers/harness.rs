#![allow(dead_code)]

use super::mock_ports::{CallLog, MockConfigApplier, MockConfigCompiler, MockDnsRedirect};
use std::path::PathBuf;
use std::sync::Arc;
use tunnel_profile_application::services::ResolverRegistry;
use tunnel_profile_application::use_cases::{
    BootstrapResolverUseCase, LoadDefaultProfileUseCase, LoadProfileUseCase, ProfilePipeline,
};

/// Both load entry points wired to the same mocks and registry.
pub struct ProfileHarness {
    pub log: CallLog,
    pub compiler: Arc<MockConfigCompiler>,
    pub applier: Arc<MockConfigApplier>,
    pub redirect: Arc<MockDnsRedirect>,
    pub registry: Arc<ResolverRegistry>,
    pub load_profile: LoadProfileUseCase,
    pub load_default: LoadDefaultProfileUseCase,
}

impl ProfileHarness {
    pub fn new() -> Self {
        Self::with_home_dir("/home/tester")
    }

    pub fn with_home_dir(home_dir: impl Into<PathBuf>) -> Self {
        let log = CallLog::new();
        let compiler = Arc::new(MockConfigCompiler::new(log.clone()));
        let applier = Arc::new(MockConfigApplier::new(log.clone()));
        let redirect = Arc::new(MockDnsRedirect::new(log.clone()));
        let registry = Arc::new(ResolverRegistry::new());

        let pipeline = Arc::new(ProfilePipeline::new(compiler.clone()));
        let bootstrap = Arc::new(BootstrapResolverUseCase::new(registry.clone()));

        let load_profile = LoadProfileUseCase::new(
            pipeline.clone(),
            applier.clone(),
            bootstrap.clone(),
            redirect.clone(),
        );
        let load_default = LoadDefaultProfileUseCase::new(
            pipeline,
            applier.clone(),
            bootstrap,
            redirect.clone(),
            home_dir,
        );

        Self {
            log,
            compiler,
            applier,
            redirect,
            registry,
            load_profile,
            load_default,
        }
    }
}
