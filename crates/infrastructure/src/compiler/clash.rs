use super::dns::compile_dns;
use super::proxies::{compile_groups, compile_proxies};
use std::collections::BTreeMap;
use std::net::IpAddr;
use std::path::Path;
use tracing::{debug, instrument};
use tunnel_profile_application::ports::ConfigCompiler;
use tunnel_profile_domain::{
    CompileError, CompiledConfig, General, LogLevel, Mode, RawConfig, Rule,
};

/// Compiles Clash-style raw profiles.
///
/// Every section is checked even after a failure so the caller sees all
/// problems at once.
#[derive(Debug, Default, Clone, Copy)]
pub struct ClashConfigCompiler;

impl ClashConfigCompiler {
    pub fn new() -> Self {
        Self
    }
}

impl ConfigCompiler for ClashConfigCompiler {
    #[instrument(skip(self, raw), fields(base_dir = %base_dir.display()))]
    fn compile(&self, raw: RawConfig, base_dir: &Path) -> Result<CompiledConfig, CompileError> {
        let mut issues = Vec::new();

        let general = compile_general(&raw, &mut issues);
        let proxies = compile_proxies(&raw.proxies, &mut issues);
        let proxy_groups = compile_groups(&raw.proxy_groups, &proxies, &mut issues);
        let hosts = compile_hosts(&raw.hosts, &mut issues);
        let dns = compile_dns(&raw.dns, base_dir, &mut issues);

        let mut config = CompiledConfig {
            general,
            proxies,
            proxy_groups,
            rules: Vec::new(),
            hosts,
            dns,
            base_dir: base_dir.to_path_buf(),
        };
        config.rules = compile_rules(&raw.rules, &config, &mut issues);

        if !issues.is_empty() {
            debug!(issues = issues.len(), "Profile rejected");
            return Err(CompileError::from_issues(issues));
        }

        debug!(
            proxies = config.proxies.len(),
            proxy_groups = config.proxy_groups.len(),
            rules = config.rules.len(),
            dns_enabled = config.dns.enable,
            "Profile compiled"
        );

        Ok(config)
    }
}

fn compile_general(raw: &RawConfig, issues: &mut Vec<String>) -> General {
    let mode = raw.mode.parse::<Mode>().unwrap_or_else(|e| {
        issues.push(e);
        Mode::default()
    });
    let log_level = raw.log_level.parse::<LogLevel>().unwrap_or_else(|e| {
        issues.push(e);
        LogLevel::default()
    });

    General {
        port: raw.port,
        socks_port: raw.socks_port,
        redir_port: raw.redir_port,
        allow_lan: raw.allow_lan,
        bind_address: raw.bind_address.clone(),
        mode,
        log_level,
        external_controller: raw.external_controller.clone(),
        external_ui: raw.external_ui.clone(),
        secret: raw.secret.clone(),
    }
}

fn compile_rules(raw: &[String], config: &CompiledConfig, issues: &mut Vec<String>) -> Vec<Rule> {
    let mut rules = Vec::with_capacity(raw.len());

    for (idx, line) in raw.iter().enumerate() {
        match line.parse::<Rule>() {
            Ok(rule) if config.has_target(&rule.target) => rules.push(rule),
            Ok(rule) => issues.push(format!(
                "rule {}: unknown target '{}'",
                idx, rule.target
            )),
            Err(e) => issues.push(format!("rule {}: {}", idx, e)),
        }
    }

    rules
}

fn compile_hosts(raw: &BTreeMap<String, String>, issues: &mut Vec<String>) -> BTreeMap<String, IpAddr> {
    let mut hosts = BTreeMap::new();

    for (domain, addr) in raw {
        match addr.trim().parse::<IpAddr>() {
            Ok(ip) => {
                hosts.insert(domain.trim_end_matches('.').to_lowercase(), ip);
            }
            Err(_) => issues.push(format!("hosts: invalid address '{}' for {}", addr, domain)),
        }
    }

    hosts
}
