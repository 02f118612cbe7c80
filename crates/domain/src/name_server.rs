use std::fmt;
use std::net::Ipv6Addr;
use std::str::FromStr;

/// Transport used to reach an upstream name server.
///
/// `Default` is plain UDP; it is what a bare `host:port` entry and the
/// `udp://` scheme both resolve to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub enum NameServerNet {
    #[default]
    Default,
    Tcp,
    Tls,
    Https,
}

impl NameServerNet {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Default => "",
            Self::Tcp => "tcp",
            Self::Tls => "tcp-tls",
            Self::Https => "https",
        }
    }

    pub fn default_port(&self) -> u16 {
        match self {
            Self::Default | Self::Tcp => 53,
            Self::Tls => 853,
            Self::Https => 443,
        }
    }
}

/// Upstream name server: a (transport, address) pair.
///
/// For `Https` the address is the full request URL, for every other
/// transport it is `host:port`.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct NameServer {
    pub net: NameServerNet,
    pub addr: String,
}

impl NameServer {
    pub fn new(net: NameServerNet, addr: impl Into<String>) -> Self {
        Self {
            net,
            addr: addr.into(),
        }
    }

    pub fn udp(addr: impl Into<String>) -> Self {
        Self::new(NameServerNet::Default, addr)
    }

    pub fn tcp(addr: impl Into<String>) -> Self {
        Self::new(NameServerNet::Tcp, addr)
    }
}

fn parse_host_port(s: &str) -> Option<(&str, u16)> {
    if s.starts_with('[') {
        let end = s.find(']')?;
        let host = &s[1..end];
        let rest = &s[end + 1..];
        let port_str = rest.strip_prefix(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    } else {
        let (host, port_str) = s.rsplit_once(':')?;
        let port = port_str.parse::<u16>().ok()?;
        Some((host, port))
    }
}

fn with_default_port(s: &str, default_port: u16) -> Result<String, String> {
    if s.is_empty() {
        return Err("Empty name server address".to_string());
    }
    if let Ok(ip) = s.parse::<Ipv6Addr>() {
        return Ok(format!("[{}]:{}", ip, default_port));
    }
    if let Some(host) = s.strip_prefix('[').and_then(|rest| rest.strip_suffix(']')) {
        return Ok(format!("[{}]:{}", host, default_port));
    }
    match parse_host_port(s) {
        Some(("", _)) => Err(format!("Missing host in name server address '{}'", s)),
        Some((host, port)) if host.contains(':') => Ok(format!("[{}]:{}", host, port)),
        Some((host, port)) => Ok(format!("{}:{}", host, port)),
        None if s.contains(':') => Err(format!("Invalid port in name server address '{}'", s)),
        None => Ok(format!("{}:{}", s, default_port)),
    }
}

impl FromStr for NameServer {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let s = s.trim();

        if s.starts_with("https://") {
            let has_host = s
                .strip_prefix("https://")
                .and_then(|rest| rest.split('/').next())
                .is_some_and(|host| !host.is_empty());
            if !has_host {
                return Err(format!("Invalid HTTPS name server URL: {}", s));
            }
            return Ok(NameServer::new(NameServerNet::Https, s));
        }

        let (net, rest) = if let Some(rest) = s.strip_prefix("udp://") {
            (NameServerNet::Default, rest)
        } else if let Some(rest) = s.strip_prefix("tcp://") {
            (NameServerNet::Tcp, rest)
        } else if let Some(rest) = s.strip_prefix("tls://") {
            (NameServerNet::Tls, rest)
        } else if let Some((scheme, _)) = s.split_once("://") {
            return Err(format!(
                "Unsupported name server scheme '{}' in '{}'. Expected udp://, tcp://, tls:// or https://",
                scheme, s
            ));
        } else {
            (NameServerNet::Default, s)
        };

        let addr = with_default_port(rest, net.default_port())?;
        Ok(NameServer::new(net, addr))
    }
}

impl fmt::Display for NameServer {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.net {
            NameServerNet::Default => write!(f, "udp://{}", self.addr),
            NameServerNet::Tcp => write!(f, "tcp://{}", self.addr),
            NameServerNet::Tls => write!(f, "tls://{}", self.addr),
            NameServerNet::Https => write!(f, "{}", self.addr),
        }
    }
}
