pub mod harness;
pub mod mock_ports;

pub use harness::ProfileHarness;
pub use mock_ports::{CallLog, MockConfigApplier, MockConfigCompiler, MockDnsRedirect};
