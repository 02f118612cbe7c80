/// Built-in profile loaded when no user profile is selected.
///
/// Routes everything direct. The `broadcast` proxy points at the limited
/// broadcast address and only exists so the proxy list is never empty.
pub const DEFAULT_PROFILE: &str = r#"
log: debug
mode: Direct
Proxy:
- name: "broadcast"
  type: socks5
  server: 255.255.255.255
  port: 1080

Proxy Group:
- name: "select"
  type: select
  proxies: [DIRECT]

Rule:
- 'MATCH,DIRECT'
"#;
