use std::sync::Arc;
use tunnel_profile_domain::CompiledConfig;

/// Commits a compiled configuration as the engine's active state.
///
/// With `force` set the whole state is replaced; otherwise only the parts
/// that can change without rebuilding listeners and proxies are updated.
pub trait ConfigApplier: Send + Sync {
    fn apply(&self, config: Arc<CompiledConfig>, force: bool);
}
