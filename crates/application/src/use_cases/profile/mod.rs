pub mod bootstrap_resolver;
pub mod load_default;
pub mod load_profile;
pub mod pipeline;

pub use bootstrap_resolver::{BootstrapResolverUseCase, ResolverBootstrap};
pub use load_default::LoadDefaultProfileUseCase;
pub use load_profile::LoadProfileUseCase;
pub use pipeline::ProfilePipeline;
