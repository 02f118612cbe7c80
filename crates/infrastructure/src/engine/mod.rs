mod proxy_engine;

pub use proxy_engine::{EngineSnapshot, ProxyEngine};
