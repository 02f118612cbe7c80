use ipnetwork::IpNetwork;
use std::path::Path;
use std::sync::Arc;
use tunnel_profile_domain::profile::RawDns;
use tunnel_profile_domain::{
    DnsSection, EnhancedMode, FakeIpPool, FallbackFilter, HostFilter, NameServer,
    FAKE_IP_POOL_CAPACITY,
};

const GEOIP_DATABASE: &str = "Country.mmdb";

fn parse_servers(field: &str, raw: &[String], issues: &mut Vec<String>) -> Vec<NameServer> {
    raw.iter()
        .filter_map(|entry| match entry.parse::<NameServer>() {
            Ok(ns) => Some(ns),
            Err(e) => {
                issues.push(format!("dns.{}: {}", field, e));
                None
            }
        })
        .collect()
}

pub(super) fn compile_dns(raw: &RawDns, base_dir: &Path, issues: &mut Vec<String>) -> DnsSection {
    if !raw.enable {
        return DnsSection::default();
    }

    if raw.nameserver.is_empty() {
        issues.push("dns: enabled without any nameserver".to_string());
    }

    let name_servers = parse_servers("nameserver", &raw.nameserver, issues);
    let fallback = parse_servers("fallback", &raw.fallback, issues);

    let enhanced_mode = raw.enhanced_mode.parse::<EnhancedMode>().unwrap_or_else(|e| {
        issues.push(format!("dns: {}", e));
        EnhancedMode::default()
    });

    let fake_ip_pool = if enhanced_mode == EnhancedMode::FakeIp {
        let exclusions = HostFilter::new(&raw.fake_ip_filter);
        match FakeIpPool::from_cidr(&raw.fake_ip_range, FAKE_IP_POOL_CAPACITY, exclusions) {
            Ok(pool) => Some(Arc::new(pool)),
            Err(e) => {
                issues.push(format!("dns.fake-ip-range: {}", e));
                None
            }
        }
    } else {
        None
    };

    let ip_cidr = raw
        .fallback_filter
        .ipcidr
        .iter()
        .filter_map(|cidr| match cidr.trim().parse::<IpNetwork>() {
            Ok(net) => Some(net),
            Err(e) => {
                issues.push(format!("dns.fallback-filter.ipcidr: '{}': {}", cidr, e));
                None
            }
        })
        .collect();

    let geoip = raw.fallback_filter.geoip;
    let fallback_filter = FallbackFilter {
        geoip,
        ip_cidr,
        geoip_database: geoip.then(|| base_dir.join(GEOIP_DATABASE)),
    };

    DnsSection {
        enable: true,
        ipv6: raw.ipv6,
        listen: raw.listen.clone(),
        name_servers,
        fallback,
        enhanced_mode,
        fake_ip_pool,
        fallback_filter,
    }
}
