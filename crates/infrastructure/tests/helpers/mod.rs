#![allow(dead_code)]

use std::path::Path;
use tunnel_profile_application::ports::ConfigCompiler;
use tunnel_profile_domain::{CompileError, CompiledConfig, RawConfig};
use tunnel_profile_infrastructure::compiler::ClashConfigCompiler;

pub const FULL_PROFILE: &str = r#"
port: 7890
socks-port: 7891
allow-lan: true
mode: rule
log-level: warning
Proxy:
  - name: hk
    type: ss
    server: hk.example.net
    port: 8388
  - name: jp
    type: vmess
    server: jp.example.net
    port: "443"
Proxy Group:
  - name: auto
    type: url-test
    proxies: [hk, jp]
    url: http://www.gstatic.com/generate_204
    interval: 300
  - name: manual
    type: select
    proxies: [auto, hk, DIRECT]
Rule:
  - DOMAIN-SUFFIX,google.com,auto
  - IP-CIDR,10.0.0.0/8,DIRECT,no-resolve
  - GEOIP,CN,DIRECT
  - MATCH,manual
hosts:
  router.lan: 192.168.1.1
dns:
  enable: true
  ipv6: false
  nameserver:
    - 114.114.114.114
    - tls://dns.rubyfish.cn:853
  fallback:
    - https://1.1.1.1/dns-query
  enhanced-mode: fake-ip
  fake-ip-filter:
    - "+.lan"
    - "*.msftncsi.com"
"#;

pub fn raw(yaml: &str) -> RawConfig {
    RawConfig::from_yaml(yaml.as_bytes()).unwrap()
}

pub fn compile(yaml: &str) -> Result<CompiledConfig, CompileError> {
    ClashConfigCompiler::new().compile(raw(yaml), Path::new("/profiles"))
}

pub fn compile_err(yaml: &str) -> CompileError {
    match compile(yaml) {
        Ok(_) => panic!("expected profile to be rejected"),
        Err(e) => e,
    }
}
