#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::Arc;
use tempfile::TempDir;
use tunnel_profile_application::services::ResolverRegistry;
use tunnel_profile_application::use_cases::{
    BootstrapResolverUseCase, LoadDefaultProfileUseCase, LoadProfileUseCase, ProfilePipeline,
};
use tunnel_profile_infrastructure::compiler::ClashConfigCompiler;
use tunnel_profile_infrastructure::engine::ProxyEngine;
use tunnel_profile_infrastructure::tun::TunDnsRedirect;

pub const WORK_PROFILE: &str = r#"
port: 7890
mode: rule
external-controller: 0.0.0.0:9090
external-ui: /srv/yacd
secret: hunter2
Proxy:
  - name: office
    type: socks5
    server: proxy.corp.example
    port: 1080
Proxy Group:
  - name: corp
    type: select
    proxies: [office, DIRECT]
Rule:
  - DOMAIN-SUFFIX,corp.example,corp
  - IP-CIDR,192.168.0.0/16,DIRECT
  - MATCH,DIRECT
dns:
  enable: true
  nameserver:
    - 10.0.0.53
  enhanced-mode: redir-host
"#;

/// The production adapters wired exactly as the binary wires them.
pub struct Stack {
    pub registry: Arc<ResolverRegistry>,
    pub engine: Arc<ProxyEngine>,
    pub redirect: Arc<TunDnsRedirect>,
    pub load_profile: LoadProfileUseCase,
    pub load_default: LoadDefaultProfileUseCase,
}

impl Stack {
    pub fn new(home_dir: &Path) -> Self {
        let registry = Arc::new(ResolverRegistry::new());
        let engine = Arc::new(ProxyEngine::new());
        let redirect = Arc::new(TunDnsRedirect::new(registry.clone()));

        let pipeline = Arc::new(ProfilePipeline::new(Arc::new(ClashConfigCompiler::new())));
        let bootstrap = Arc::new(BootstrapResolverUseCase::new(registry.clone()));

        Self {
            load_profile: LoadProfileUseCase::new(
                pipeline.clone(),
                engine.clone(),
                bootstrap.clone(),
                redirect.clone(),
            ),
            load_default: LoadDefaultProfileUseCase::new(
                pipeline,
                engine.clone(),
                bootstrap,
                redirect.clone(),
                home_dir,
            ),
            registry,
            engine,
            redirect,
        }
    }
}

/// Writes `content` as `name` inside a fresh temporary directory.
pub fn profile_file(name: &str, content: &str) -> (TempDir, PathBuf) {
    let dir = tempfile::tempdir().unwrap();
    let path = dir.path().join(name);
    std::fs::write(&path, content).unwrap();
    (dir, path)
}
