use tunnel_profile_domain::{EnhancedMode, ProfileError, RuleKind, TUN_ADDRESS};

#[path = "../common/mod.rs"]
mod common;
use common::{profile_file, Stack, WORK_PROFILE};

#[test]
fn test_user_profile_reaches_engine_sanitized() {
    let (dir, path) = profile_file("work.yaml", WORK_PROFILE);
    let stack = Stack::new(dir.path());

    stack.load_profile.execute(&path, dir.path()).unwrap();

    let snapshot = stack.engine.snapshot();
    assert_eq!(snapshot.generation, 1);
    assert_eq!(snapshot.rules.len(), 4);
    assert_eq!(snapshot.rules[0].kind, RuleKind::IpCidr);
    assert_eq!(snapshot.rules[0].payload, TUN_ADDRESS);
    assert_eq!(snapshot.rules[0].target, "REJECT");
    assert_eq!(snapshot.rules[1].target, "corp");
    assert!(snapshot.general.external_controller.is_empty());
    assert!(snapshot.general.external_ui.is_empty());
    assert_eq!(snapshot.general.secret, "hunter2");
    assert_eq!(snapshot.proxies[0].name, "office");
}

#[test]
fn test_first_profile_with_dns_provides_resolver() {
    let (dir, path) = profile_file("work.yaml", WORK_PROFILE);
    let stack = Stack::new(dir.path());

    stack.load_profile.execute(&path, dir.path()).unwrap();

    let resolver = stack.registry.current().unwrap();
    assert_eq!(resolver.enhanced_mode(), EnhancedMode::RedirHost);
    assert_eq!(resolver.main()[0].to_string(), "udp://10.0.0.53:53");
    assert_eq!(
        resolver.fallback_filter().geoip_database.as_deref(),
        Some(dir.path().join("Country.mmdb").as_path())
    );

    let redirect = stack.redirect.state();
    assert!(redirect.enabled);
    assert_eq!(redirect.enhanced_mode, Some(EnhancedMode::RedirHost));
    assert_eq!(redirect.fake_ip_range, None);
}

#[test]
fn test_user_profile_after_default_keeps_fallback_resolver() {
    let (dir, path) = profile_file("work.yaml", WORK_PROFILE);
    let stack = Stack::new(dir.path());

    stack.load_default.execute();
    let fallback = stack.registry.current().unwrap();
    stack.load_profile.execute(&path, dir.path()).unwrap();

    assert!(std::sync::Arc::ptr_eq(
        &fallback,
        &stack.registry.current().unwrap()
    ));
    assert_eq!(stack.engine.generation(), 2);
    assert_eq!(stack.redirect.generation(), 2);
    assert_eq!(
        stack.redirect.state().enhanced_mode,
        Some(EnhancedMode::FakeIp)
    );
}

#[test]
fn test_rejected_profile_leaves_engine_untouched() {
    let (dir, path) = profile_file("broken.yaml", "Rule:\n  - DOMAIN,example.com,ghost\n");
    let stack = Stack::new(dir.path());
    stack.load_default.execute();
    let before = stack.engine.snapshot();

    let result = stack.load_profile.execute(&path, dir.path());

    assert!(matches!(result, Err(ProfileError::Compile(_))));
    let after = stack.engine.snapshot();
    assert_eq!(after.generation, before.generation);
    assert_eq!(after.rules, before.rules);
    assert_eq!(stack.redirect.generation(), 1);
}

#[test]
fn test_unreadable_profile_is_io_error() {
    let dir = tempfile::tempdir().unwrap();
    let stack = Stack::new(dir.path());

    let result = stack
        .load_profile
        .execute(&dir.path().join("absent.yaml"), dir.path());

    assert!(matches!(result, Err(ProfileError::Io { .. })));
    assert_eq!(stack.engine.generation(), 0);
    assert!(!stack.registry.is_set());
}

#[test]
fn test_active_state_serializes() {
    let (dir, path) = profile_file("work.yaml", WORK_PROFILE);
    let stack = Stack::new(dir.path());
    stack.load_profile.execute(&path, dir.path()).unwrap();

    let value = serde_json::json!({
        "engine": &*stack.engine.snapshot(),
        "dns_redirect": &*stack.redirect.state(),
    });

    assert_eq!(
        value["engine"]["rules"][0]["payload"],
        serde_json::Value::from(TUN_ADDRESS)
    );
    assert_eq!(value["dns_redirect"]["enabled"], true);
}
