use serde_yaml::{Mapping, Value};
use std::collections::HashSet;
use tunnel_profile_domain::proxy::is_builtin_target;
use tunnel_profile_domain::{GroupKind, Proxy, ProxyGroup, ProxyKind};

fn str_field<'a>(entry: &'a Mapping, key: &str) -> Option<&'a str> {
    entry.get(key).and_then(Value::as_str).map(str::trim)
}

fn port_field(entry: &Mapping) -> Option<u16> {
    let port = match entry.get("port")? {
        Value::Number(n) => n.as_u64().and_then(|p| u16::try_from(p).ok()),
        Value::String(s) => s.trim().parse().ok(),
        _ => None,
    };
    port.filter(|p| *p != 0)
}

pub(super) fn compile_proxies(raw: &[Mapping], issues: &mut Vec<String>) -> Vec<Proxy> {
    let mut proxies = Vec::with_capacity(raw.len());
    let mut seen = HashSet::new();

    for (idx, entry) in raw.iter().enumerate() {
        let Some(name) = str_field(entry, "name").filter(|n| !n.is_empty()) else {
            issues.push(format!("proxy {}: missing name", idx));
            continue;
        };

        if is_builtin_target(name) {
            issues.push(format!("proxy '{}': name is reserved", name));
            continue;
        }
        if !seen.insert(name.to_string()) {
            issues.push(format!("proxy '{}': duplicate name", name));
            continue;
        }

        let kind = match str_field(entry, "type").map(str::parse::<ProxyKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(e)) => {
                issues.push(format!("proxy '{}': {}", name, e));
                continue;
            }
            None => {
                issues.push(format!("proxy '{}': missing type", name));
                continue;
            }
        };

        let Some(server) = str_field(entry, "server").filter(|s| !s.is_empty()) else {
            issues.push(format!("proxy '{}': missing server", name));
            continue;
        };

        let Some(port) = port_field(entry) else {
            issues.push(format!("proxy '{}': missing or invalid port", name));
            continue;
        };

        proxies.push(Proxy {
            name: name.to_string(),
            kind,
            server: server.to_string(),
            port,
        });
    }

    proxies
}

pub(super) fn compile_groups(
    raw: &[Mapping],
    proxies: &[Proxy],
    issues: &mut Vec<String>,
) -> Vec<ProxyGroup> {
    let group_names: HashSet<&str> = raw
        .iter()
        .filter_map(|entry| str_field(entry, "name"))
        .collect();
    let known = |member: &str| {
        is_builtin_target(member)
            || group_names.contains(member)
            || proxies.iter().any(|p| p.name == member)
    };

    let mut groups = Vec::with_capacity(raw.len());
    let mut seen = HashSet::new();

    for (idx, entry) in raw.iter().enumerate() {
        let Some(name) = str_field(entry, "name").filter(|n| !n.is_empty()) else {
            issues.push(format!("proxy group {}: missing name", idx));
            continue;
        };

        if is_builtin_target(name) || proxies.iter().any(|p| p.name == name) {
            issues.push(format!("proxy group '{}': name already in use", name));
            continue;
        }
        if !seen.insert(name.to_string()) {
            issues.push(format!("proxy group '{}': duplicate name", name));
            continue;
        }

        let kind = match str_field(entry, "type").map(str::parse::<GroupKind>) {
            Some(Ok(kind)) => kind,
            Some(Err(e)) => {
                issues.push(format!("proxy group '{}': {}", name, e));
                continue;
            }
            None => {
                issues.push(format!("proxy group '{}': missing type", name));
                continue;
            }
        };

        let members: Vec<String> = entry
            .get("proxies")
            .and_then(Value::as_sequence)
            .map(|seq| {
                seq.iter()
                    .filter_map(Value::as_str)
                    .map(|m| m.trim().to_string())
                    .collect()
            })
            .unwrap_or_default();

        if members.is_empty() {
            issues.push(format!("proxy group '{}': no members", name));
            continue;
        }

        let unknown: Vec<&str> = members
            .iter()
            .map(String::as_str)
            .filter(|m| *m == name || !known(*m))
            .collect();
        if !unknown.is_empty() {
            issues.push(format!(
                "proxy group '{}': unknown members {}",
                name,
                unknown.join(", ")
            ));
            continue;
        }

        let url = str_field(entry, "url").filter(|u| !u.is_empty()).map(str::to_string);
        if kind.needs_health_check() && url.is_none() {
            issues.push(format!("proxy group '{}': {} requires a url", name, kind));
            continue;
        }

        groups.push(ProxyGroup {
            name: name.to_string(),
            kind,
            proxies: members,
            url,
            interval: entry.get("interval").and_then(Value::as_u64),
        });
    }

    groups
}
