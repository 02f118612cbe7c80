mod config_applier;
mod config_compiler;
mod dns_redirect;

pub use config_applier::ConfigApplier;
pub use config_compiler::ConfigCompiler;
pub use dns_redirect::DnsRedirect;
