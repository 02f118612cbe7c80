use std::sync::Arc;
use tunnel_profile_application::services::ResolverRegistry;
use tunnel_profile_infrastructure::compiler::ClashConfigCompiler;
use tunnel_profile_infrastructure::engine::ProxyEngine;
use tunnel_profile_infrastructure::tun::TunDnsRedirect;

pub struct Adapters {
    pub compiler: Arc<ClashConfigCompiler>,
    pub engine: Arc<ProxyEngine>,
    pub redirect: Arc<TunDnsRedirect>,
    pub registry: Arc<ResolverRegistry>,
}

impl Adapters {
    pub fn new() -> Self {
        let registry = Arc::new(ResolverRegistry::new());
        Self {
            compiler: Arc::new(ClashConfigCompiler::new()),
            engine: Arc::new(ProxyEngine::new()),
            redirect: Arc::new(TunDnsRedirect::new(registry.clone())),
            registry,
        }
    }
}
