/// Tun-side DNS redirection, refreshed after every profile load.
///
/// Implementations must be idempotent.
pub trait DnsRedirect: Send + Sync {
    fn reset_redirect(&self);
}
