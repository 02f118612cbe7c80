use std::path::Path;
use tunnel_profile_domain::{CompileError, CompiledConfig, RawConfig};

/// Turns a sanitized raw profile into a validated configuration.
///
/// Relative references inside the profile resolve against `base_dir`.
pub trait ConfigCompiler: Send + Sync {
    fn compile(&self, raw: RawConfig, base_dir: &Path) -> Result<CompiledConfig, CompileError>;
}
