use crate::ports::ConfigCompiler;
use std::path::Path;
use std::sync::Arc;
use tracing::debug;
use tunnel_profile_domain::{sanitize_for_tun, CompiledConfig, ProfileError, RawConfig};

/// Parse, tun-sanitize and compile a profile document.
///
/// Nothing here touches engine state; any error leaves it as it was.
pub struct ProfilePipeline {
    compiler: Arc<dyn ConfigCompiler>,
}

impl ProfilePipeline {
    pub fn new(compiler: Arc<dyn ConfigCompiler>) -> Self {
        Self { compiler }
    }

    pub fn compile(&self, data: &[u8], base_dir: &Path) -> Result<CompiledConfig, ProfileError> {
        let raw = sanitize_for_tun(RawConfig::from_yaml(data)?);

        debug!(
            rules = raw.rules.len(),
            proxies = raw.proxies.len(),
            proxy_groups = raw.proxy_groups.len(),
            dns_enabled = raw.dns.enable,
            "Profile parsed and sanitized"
        );

        Ok(self.compiler.compile(raw, base_dir)?)
    }
}
