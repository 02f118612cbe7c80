use super::raw::RawConfig;

/// Point-to-point block owned by the tun interface itself.
pub const TUN_ADDRESS: &str = "172.31.255.253/30";

/// Rule rejecting traffic addressed to [`TUN_ADDRESS`].
pub fn tun_reject_rule() -> String {
    format!("IP-CIDR,{},REJECT", TUN_ADDRESS)
}

/// Prepares a user profile for an engine embedded behind the tun device.
///
/// Clears the external UI and controller so the engine never opens its own
/// control surface, and puts the tun reject rule first. Rules match
/// first-rule-wins, so no user rule can route the tun's own traffic back
/// into the proxy.
pub fn sanitize_for_tun(mut raw: RawConfig) -> RawConfig {
    raw.external_ui.clear();
    raw.external_controller.clear();
    raw.rules.insert(0, tun_reject_rule());
    raw
}
