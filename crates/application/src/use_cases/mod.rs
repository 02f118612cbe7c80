pub mod profile;

pub use profile::{
    BootstrapResolverUseCase, LoadDefaultProfileUseCase, LoadProfileUseCase, ProfilePipeline,
    ResolverBootstrap,
};
