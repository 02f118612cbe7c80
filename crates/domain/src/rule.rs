use ipnetwork::IpNetwork;
use serde::Serialize;
use std::fmt;
use std::str::FromStr;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
pub enum RuleKind {
    Domain,
    DomainSuffix,
    DomainKeyword,
    GeoIp,
    IpCidr,
    IpCidr6,
    SrcIpCidr,
    SrcPort,
    DstPort,
    Match,
}

impl RuleKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Domain => "DOMAIN",
            Self::DomainSuffix => "DOMAIN-SUFFIX",
            Self::DomainKeyword => "DOMAIN-KEYWORD",
            Self::GeoIp => "GEOIP",
            Self::IpCidr => "IP-CIDR",
            Self::IpCidr6 => "IP-CIDR6",
            Self::SrcIpCidr => "SRC-IP-CIDR",
            Self::SrcPort => "SRC-PORT",
            Self::DstPort => "DST-PORT",
            Self::Match => "MATCH",
        }
    }

    pub fn is_ip_rule(&self) -> bool {
        matches!(
            self,
            Self::GeoIp | Self::IpCidr | Self::IpCidr6 | Self::SrcIpCidr
        )
    }
}

impl FromStr for RuleKind {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_ascii_uppercase().as_str() {
            "DOMAIN" => Ok(Self::Domain),
            "DOMAIN-SUFFIX" => Ok(Self::DomainSuffix),
            "DOMAIN-KEYWORD" => Ok(Self::DomainKeyword),
            "GEOIP" => Ok(Self::GeoIp),
            "IP-CIDR" => Ok(Self::IpCidr),
            "IP-CIDR6" => Ok(Self::IpCidr6),
            "SRC-IP-CIDR" => Ok(Self::SrcIpCidr),
            "SRC-PORT" => Ok(Self::SrcPort),
            "DST-PORT" => Ok(Self::DstPort),
            "MATCH" | "FINAL" => Ok(Self::Match),
            other => Err(format!("Unsupported rule type '{}'", other)),
        }
    }
}

impl fmt::Display for RuleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// A single routing rule in `TYPE,PAYLOAD,TARGET[,OPTION...]` form.
///
/// Rules are evaluated first-match-wins by the engine, so the position of
/// a rule in its list is significant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct Rule {
    pub kind: RuleKind,
    pub payload: String,
    pub target: String,
    pub no_resolve: bool,
}

impl Rule {
    pub fn new(kind: RuleKind, payload: impl Into<String>, target: impl Into<String>) -> Self {
        Self {
            kind,
            payload: payload.into(),
            target: target.into(),
            no_resolve: false,
        }
    }

    /// Parsed network for CIDR rules; `None` for every other kind.
    pub fn network(&self) -> Option<IpNetwork> {
        match self.kind {
            RuleKind::IpCidr | RuleKind::IpCidr6 | RuleKind::SrcIpCidr => {
                self.payload.parse().ok()
            }
            _ => None,
        }
    }
}

fn validate_payload(kind: RuleKind, payload: &str) -> Result<(), String> {
    if payload.is_empty() {
        return Err(format!("Empty payload for {} rule", kind));
    }

    match kind {
        RuleKind::IpCidr | RuleKind::SrcIpCidr => payload
            .parse::<IpNetwork>()
            .map(|_| ())
            .map_err(|e| format!("Invalid CIDR '{}' in {} rule: {}", payload, kind, e)),
        RuleKind::IpCidr6 => match payload.parse::<IpNetwork>() {
            Ok(IpNetwork::V6(_)) => Ok(()),
            Ok(IpNetwork::V4(_)) => Err(format!("IP-CIDR6 rule requires an IPv6 network: '{}'", payload)),
            Err(e) => Err(format!("Invalid CIDR '{}' in {} rule: {}", payload, kind, e)),
        },
        RuleKind::SrcPort | RuleKind::DstPort => payload
            .parse::<u16>()
            .map(|_| ())
            .map_err(|_| format!("Invalid port '{}' in {} rule", payload, kind)),
        _ => Ok(()),
    }
}

impl FromStr for Rule {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let parts: Vec<&str> = s.split(',').map(str::trim).collect();

        let (kind_str, payload, target, options) = match parts.as_slice() {
            [kind, target] => (*kind, "", *target, &[][..]),
            [kind, payload, target, options @ ..] => (*kind, *payload, *target, options),
            _ => return Err(format!("Malformed rule '{}'", s)),
        };

        let kind: RuleKind = kind_str.parse()?;

        if target.is_empty() {
            return Err(format!("Missing target in rule '{}'", s));
        }

        let payload = match kind {
            RuleKind::Match if parts.len() == 2 => "",
            RuleKind::Match => return Err(format!("MATCH rule takes no payload: '{}'", s)),
            _ if parts.len() == 2 => return Err(format!("Missing payload in rule '{}'", s)),
            _ => payload,
        };

        if kind != RuleKind::Match {
            validate_payload(kind, payload)?;
        }

        let mut no_resolve = false;
        for option in options {
            match *option {
                "no-resolve" if kind.is_ip_rule() => no_resolve = true,
                "no-resolve" => {
                    return Err(format!("'no-resolve' only applies to IP rules: '{}'", s))
                }
                other => return Err(format!("Unknown rule option '{}' in '{}'", other, s)),
            }
        }

        Ok(Rule {
            kind,
            payload: payload.to_string(),
            target: target.to_string(),
            no_resolve,
        })
    }
}

impl fmt::Display for Rule {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.kind == RuleKind::Match {
            return write!(f, "{},{}", self.kind, self.target);
        }
        write!(f, "{},{},{}", self.kind, self.payload, self.target)?;
        if self.no_resolve {
            write!(f, ",no-resolve")?;
        }
        Ok(())
    }
}
