use std::sync::Arc;
use tunnel_profile_domain::{EnhancedMode, Mode, TUN_ADDRESS};

#[path = "../common/mod.rs"]
mod common;
use common::Stack;

#[test]
fn test_default_profile_boots_direct_engine() {
    let home = tempfile::tempdir().unwrap();
    let stack = Stack::new(home.path());

    stack.load_default.execute();

    let snapshot = stack.engine.snapshot();
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.general.mode, Mode::Direct);
    assert_eq!(snapshot.rules.len(), 2);
    assert_eq!(snapshot.rules[0].payload, TUN_ADDRESS);
    assert_eq!(snapshot.rules[1].to_string(), "MATCH,DIRECT");
    assert_eq!(snapshot.proxies[0].name, "broadcast");
    assert_eq!(snapshot.base_dir, home.path());
}

#[test]
fn test_default_profile_installs_fallback_resolver() {
    let home = tempfile::tempdir().unwrap();
    let stack = Stack::new(home.path());

    stack.load_default.execute();

    let resolver = stack.registry.current().unwrap();
    assert_eq!(resolver.enhanced_mode(), EnhancedMode::FakeIp);
    let servers: Vec<String> = resolver.main().iter().map(|s| s.to_string()).collect();
    assert_eq!(
        servers,
        vec![
            "tcp://1.1.1.1:53",
            "tcp://208.67.222.222:53",
            "udp://119.29.29.29:53",
            "udp://223.5.5.5:53",
        ]
    );

    let state = stack.redirect.state();
    assert!(state.enabled);
    assert_eq!(state.fake_ip_range.as_deref(), Some("198.18.0.1/16"));
}

#[test]
fn test_default_profile_twice_keeps_one_resolver() {
    let home = tempfile::tempdir().unwrap();
    let stack = Stack::new(home.path());

    stack.load_default.execute();
    let first = stack.registry.current().unwrap();
    stack.load_default.execute();

    assert!(Arc::ptr_eq(&first, &stack.registry.current().unwrap()));
    assert_eq!(stack.engine.generation(), 2);
}

#[test]
fn test_fallback_pool_hands_out_fake_addresses() {
    let home = tempfile::tempdir().unwrap();
    let stack = Stack::new(home.path());
    stack.load_default.execute();

    let resolver = stack.registry.current().unwrap();
    let pool = resolver.pool().unwrap();
    let ip = pool.lookup("example.com");

    assert_eq!(ip.to_string(), "198.18.0.2");
    assert_eq!(pool.look_back(ip).as_deref(), Some("example.com"));
    assert_eq!(pool.gateway().to_string(), "198.18.0.1");
}
