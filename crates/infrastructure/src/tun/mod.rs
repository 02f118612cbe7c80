mod dns_redirect;

pub use dns_redirect::{RedirectState, TunDnsRedirect};
