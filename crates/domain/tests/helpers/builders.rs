#![allow(dead_code)]

use tunnel_profile_domain::{FakeIpPool, HostFilter, RawConfig};

pub struct RawConfigBuilder {
    raw: RawConfig,
}

impl RawConfigBuilder {
    pub fn new() -> Self {
        Self {
            raw: RawConfig::default(),
        }
    }

    pub fn rule(mut self, rule: &str) -> Self {
        self.raw.rules.push(rule.to_string());
        self
    }

    pub fn external_controller(mut self, addr: &str) -> Self {
        self.raw.external_controller = addr.to_string();
        self
    }

    pub fn external_ui(mut self, dir: &str) -> Self {
        self.raw.external_ui = dir.to_string();
        self
    }

    pub fn secret(mut self, secret: &str) -> Self {
        self.raw.secret = secret.to_string();
        self
    }

    pub fn port(mut self, port: u16) -> Self {
        self.raw.port = port;
        self
    }

    pub fn build(self) -> RawConfig {
        self.raw
    }
}

pub fn small_pool(cidr: &str, capacity: usize) -> FakeIpPool {
    FakeIpPool::from_cidr(cidr, capacity, HostFilter::default()).unwrap()
}
