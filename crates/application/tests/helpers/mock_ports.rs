#![allow(dead_code)]

use std::path::{Path, PathBuf};
use std::sync::{Arc, Mutex};
use tunnel_profile_application::ports::{ConfigApplier, ConfigCompiler, DnsRedirect};
use tunnel_profile_domain::{CompileError, CompiledConfig, DnsSection, RawConfig, Rule};

/// Ordered record of port calls shared between mocks.
#[derive(Clone, Default)]
pub struct CallLog {
    calls: Arc<Mutex<Vec<&'static str>>>,
}

impl CallLog {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&self, call: &'static str) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn calls(&self) -> Vec<&'static str> {
        self.calls.lock().unwrap().clone()
    }
}

/// Compiler that parses rules, copies the controller fields and hands
/// back a preset DNS section.
pub struct MockConfigCompiler {
    log: CallLog,
    dns: Mutex<DnsSection>,
    failure: Mutex<Option<CompileError>>,
    received: Mutex<Vec<(RawConfig, PathBuf)>>,
}

impl MockConfigCompiler {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            dns: Mutex::new(DnsSection::default()),
            failure: Mutex::new(None),
            received: Mutex::new(Vec::new()),
        }
    }

    pub fn set_dns(&self, dns: DnsSection) {
        *self.dns.lock().unwrap() = dns;
    }

    pub fn set_failure(&self, issue: &str) {
        *self.failure.lock().unwrap() = Some(CompileError::new(issue));
    }

    pub fn received(&self) -> Vec<(RawConfig, PathBuf)> {
        self.received.lock().unwrap().clone()
    }

    pub fn last_raw(&self) -> Option<RawConfig> {
        self.received.lock().unwrap().last().map(|(raw, _)| raw.clone())
    }
}

impl ConfigCompiler for MockConfigCompiler {
    fn compile(&self, raw: RawConfig, base_dir: &Path) -> Result<CompiledConfig, CompileError> {
        self.log.push("compile");
        self.received
            .lock()
            .unwrap()
            .push((raw.clone(), base_dir.to_path_buf()));

        if let Some(err) = self.failure.lock().unwrap().clone() {
            return Err(err);
        }

        let rules = raw
            .rules
            .iter()
            .map(|r| r.parse::<Rule>().map_err(CompileError::new))
            .collect::<Result<Vec<_>, _>>()?;

        let mut config = CompiledConfig {
            rules,
            dns: self.dns.lock().unwrap().clone(),
            base_dir: base_dir.to_path_buf(),
            ..Default::default()
        };
        config.general.external_controller = raw.external_controller;
        config.general.external_ui = raw.external_ui;
        Ok(config)
    }
}

#[derive(Default)]
pub struct MockConfigApplier {
    log: CallLog,
    applied: Mutex<Vec<(Arc<CompiledConfig>, bool)>>,
}

impl MockConfigApplier {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            applied: Mutex::new(Vec::new()),
        }
    }

    pub fn applied(&self) -> Vec<(Arc<CompiledConfig>, bool)> {
        self.applied.lock().unwrap().clone()
    }

    pub fn apply_count(&self) -> usize {
        self.applied.lock().unwrap().len()
    }
}

impl ConfigApplier for MockConfigApplier {
    fn apply(&self, config: Arc<CompiledConfig>, force: bool) {
        self.log.push("apply");
        self.applied.lock().unwrap().push((config, force));
    }
}

#[derive(Default)]
pub struct MockDnsRedirect {
    log: CallLog,
    resets: Mutex<usize>,
}

impl MockDnsRedirect {
    pub fn new(log: CallLog) -> Self {
        Self {
            log,
            resets: Mutex::new(0),
        }
    }

    pub fn reset_count(&self) -> usize {
        *self.resets.lock().unwrap()
    }
}

impl DnsRedirect for MockDnsRedirect {
    fn reset_redirect(&self) {
        self.log.push("reset_redirect");
        *self.resets.lock().unwrap() += 1;
    }
}
