//! Fake-IP address pool.
//!
//! Hands out synthetic IPv4 addresses for hostnames so that the real
//! answer never leaves the resolver. The first address of the network is
//! the network itself, the second is the gateway, and allocation starts at
//! the third. Mappings live in an LRU of fixed capacity: once it is full
//! the least recently used host gives its address up.

use crate::errors::ResolverError;
use ipnetwork::Ipv4Network;
use lru::LruCache;
use std::collections::HashMap;
use std::net::{IpAddr, Ipv4Addr};
use std::num::NonZeroUsize;
use std::sync::Mutex;

/// Hostname patterns that must never receive a fake address.
///
/// Supported forms:
/// - `example.com` exact match
/// - `*.example.com` exactly one extra label
/// - `+.example.com` the domain itself and any subdomain
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct HostFilter {
    exact: Vec<String>,
    single_label: Vec<String>,
    any_depth: Vec<String>,
}

impl HostFilter {
    pub fn new<I, S>(patterns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: AsRef<str>,
    {
        let mut filter = Self::default();
        for pattern in patterns {
            let pattern = pattern.as_ref().trim().trim_end_matches('.').to_lowercase();
            if pattern.is_empty() {
                continue;
            }
            if let Some(base) = pattern.strip_prefix("+.") {
                filter.any_depth.push(base.to_string());
            } else if let Some(base) = pattern.strip_prefix("*.") {
                filter.single_label.push(base.to_string());
            } else {
                filter.exact.push(pattern);
            }
        }
        filter
    }

    pub fn is_empty(&self) -> bool {
        self.exact.is_empty() && self.single_label.is_empty() && self.any_depth.is_empty()
    }

    pub fn matches(&self, host: &str) -> bool {
        let host = host.trim_end_matches('.').to_lowercase();

        if self.exact.iter().any(|e| *e == host) {
            return true;
        }

        if self.any_depth.iter().any(|base| {
            host == *base || host.ends_with(&format!(".{}", base))
        }) {
            return true;
        }

        self.single_label.iter().any(|base| {
            host.strip_suffix(base.as_str())
                .and_then(|prefix| prefix.strip_suffix('.'))
                .is_some_and(|label| !label.is_empty() && !label.contains('.'))
        })
    }
}

struct PoolState {
    by_offset: LruCache<u32, String>,
    by_host: HashMap<String, u32>,
    cursor: u32,
}

pub struct FakeIpPool {
    network: Ipv4Network,
    first: u32,
    total: u32,
    capacity: usize,
    exclusions: HostFilter,
    state: Mutex<PoolState>,
}

impl FakeIpPool {
    pub fn new(
        network: Ipv4Network,
        capacity: usize,
        exclusions: HostFilter,
    ) -> Result<Self, ResolverError> {
        let cache_size = NonZeroUsize::new(capacity).ok_or(ResolverError::ZeroCapacity)?;

        let host_bits = 32 - u32::from(network.prefix());
        let total = (1u64 << host_bits).saturating_sub(2);
        if total == 0 {
            return Err(ResolverError::EmptyPool(network.to_string()));
        }
        let total = total.min(u64::from(u32::MAX)) as u32;
        let first = u32::from(network.network()).wrapping_add(2);

        Ok(Self {
            network,
            first,
            total,
            capacity,
            exclusions,
            state: Mutex::new(PoolState {
                by_offset: LruCache::new(cache_size),
                by_host: HashMap::new(),
                cursor: total - 1,
            }),
        })
    }

    /// Parses `cidr` (host bits allowed, e.g. `198.18.0.1/16`) and builds a pool over it.
    pub fn from_cidr(
        cidr: &str,
        capacity: usize,
        exclusions: HostFilter,
    ) -> Result<Self, ResolverError> {
        let network: Ipv4Network = cidr
            .trim()
            .parse()
            .map_err(|e| ResolverError::InvalidCidr(format!("{}: {}", cidr, e)))?;
        Self::new(network, capacity, exclusions)
    }

    /// Returns the fake address for `host`, allocating one if needed.
    pub fn lookup(&self, host: &str) -> Ipv4Addr {
        let host = host.trim_end_matches('.').to_lowercase();
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());

        let existing = state.by_host.get(&host).copied();
        if let Some(offset) = existing {
            state.by_offset.promote(&offset);
            return self.offset_to_ip(offset);
        }

        let offset = Self::next_free_offset(&mut state, self.total);
        if let Some((old_offset, old_host)) = state.by_offset.push(offset, host.clone()) {
            if state.by_host.get(&old_host) == Some(&old_offset) {
                state.by_host.remove(&old_host);
            }
        }
        state.by_host.insert(host, offset);

        self.offset_to_ip(offset)
    }

    /// Returns the host an address was handed out to, if it is still mapped.
    pub fn look_back(&self, ip: Ipv4Addr) -> Option<String> {
        let offset = self.ip_to_offset(ip)?;
        let mut state = self.state.lock().unwrap_or_else(|e| e.into_inner());
        state.by_offset.get(&offset).cloned()
    }

    /// Whether `ip` is currently mapped to some host.
    pub fn exists(&self, ip: IpAddr) -> bool {
        let IpAddr::V4(ip) = ip else {
            return false;
        };
        match self.ip_to_offset(ip) {
            Some(offset) => {
                let state = self.state.lock().unwrap_or_else(|e| e.into_inner());
                state.by_offset.contains(&offset)
            }
            None => false,
        }
    }

    /// Whether `host` is excluded from fake-IP allocation.
    pub fn should_skip(&self, host: &str) -> bool {
        self.exclusions.matches(host)
    }

    pub fn gateway(&self) -> Ipv4Addr {
        Ipv4Addr::from(self.first.wrapping_sub(1))
    }

    pub fn network(&self) -> Ipv4Network {
        self.network
    }

    pub fn capacity(&self) -> usize {
        self.capacity
    }

    pub fn size(&self) -> u32 {
        self.total
    }

    pub fn exclusions(&self) -> &HostFilter {
        &self.exclusions
    }

    pub fn len(&self) -> usize {
        self.state
            .lock()
            .unwrap_or_else(|e| e.into_inner())
            .by_offset
            .len()
    }

    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Next offset after the cursor that is not mapped. When every offset
    /// is taken the one right after the cursor is reused.
    fn next_free_offset(state: &mut PoolState, total: u32) -> u32 {
        state.cursor = (state.cursor + 1) % total;
        if state.by_offset.len() as u64 >= u64::from(total) {
            return state.cursor;
        }
        while state.by_offset.contains(&state.cursor) {
            state.cursor = (state.cursor + 1) % total;
        }
        state.cursor
    }

    fn offset_to_ip(&self, offset: u32) -> Ipv4Addr {
        Ipv4Addr::from(self.first.wrapping_add(offset))
    }

    fn ip_to_offset(&self, ip: Ipv4Addr) -> Option<u32> {
        let value = u32::from(ip);
        let offset = value.checked_sub(self.first)?;
        (offset < self.total).then_some(offset)
    }
}

impl std::fmt::Debug for FakeIpPool {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("FakeIpPool")
            .field("network", &self.network)
            .field("capacity", &self.capacity)
            .field("size", &self.total)
            .finish_non_exhaustive()
    }
}
