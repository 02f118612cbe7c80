use super::Adapters;
use std::sync::Arc;
use tunnel_profile_application::use_cases::{
    BootstrapResolverUseCase, LoadDefaultProfileUseCase, LoadProfileUseCase, ProfilePipeline,
};
use tunnel_profile_domain::AppConfig;

pub struct UseCases {
    pub load_default: Arc<LoadDefaultProfileUseCase>,
    pub load_profile: Arc<LoadProfileUseCase>,
}

impl UseCases {
    pub fn new(config: &AppConfig, adapters: &Adapters) -> Self {
        let pipeline = Arc::new(ProfilePipeline::new(adapters.compiler.clone()));
        let bootstrap = Arc::new(BootstrapResolverUseCase::new(adapters.registry.clone()));

        Self {
            load_default: Arc::new(LoadDefaultProfileUseCase::new(
                pipeline.clone(),
                adapters.engine.clone(),
                bootstrap.clone(),
                adapters.redirect.clone(),
                config.profile.home_dir.clone(),
            )),
            load_profile: Arc::new(LoadProfileUseCase::new(
                pipeline,
                adapters.engine.clone(),
                bootstrap,
                adapters.redirect.clone(),
            )),
        }
    }
}
