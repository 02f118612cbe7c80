pub mod resolver_registry;

pub use resolver_registry::{InstallOutcome, ResolverRegistry};
