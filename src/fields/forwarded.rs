use std::fmt;
use std::net::IpAddr;

use crate::headers::{HeaderName, standard};
use super::ListWriter;

/// `Forwarded` header value ([RFC 7239][rfc]).
///
/// Pairs are `;` separated and omitted when unset. An IPv6 identifier renders bracketed and
/// quoted as the grammar requires. An all-default record renders as the empty string.
///
/// ```
/// use fieldline::fields::Forwarded;
///
/// let forwarded = Forwarded {
///     identifier: Some("192.0.2.60".parse().unwrap()),
///     proto: "http".into(),
///     ..Default::default()
/// };
/// assert_eq!(forwarded.to_string(), "for=192.0.2.60;proto=http");
/// ```
///
/// [rfc]: <https://datatracker.ietf.org/doc/html/rfc7239>
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Forwarded {
    /// Interface where the request came in to the proxy server, the `by` pair.
    pub by: String,
    /// Client that initiated the request, the `for` pair.
    pub identifier: Option<IpAddr>,
    /// Host request header as received by the proxy, the `host` pair.
    pub host: String,
    /// Protocol used to make the request, the `proto` pair.
    pub proto: String,
}

impl Forwarded {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::FORWARDED;
}

impl fmt::Display for Forwarded {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = ListWriter::new(f, ";");

        if !self.by.is_empty() {
            write!(list.item()?, "by={}", self.by)?;
        }
        if let Some(identifier) = self.identifier {
            match identifier {
                IpAddr::V4(addr) => write!(list.item()?, "for={addr}")?,
                // node with an ipv6 address is quoted and bracketed
                IpAddr::V6(addr) => write!(list.item()?, "for=\"[{addr}]\"")?,
            }
        }
        if !self.host.is_empty() {
            write!(list.item()?, "host={}", self.host)?;
        }
        if !self.proto.is_empty() {
            write!(list.item()?, "proto={}", self.proto)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty() {
        assert_eq!(Forwarded::default().to_string(), "");
    }

    #[test]
    fn ipv4_identifier() {
        let forwarded = Forwarded {
            identifier: Some("192.0.2.60".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(forwarded.to_string(), "for=192.0.2.60");
    }

    #[test]
    fn ipv6_identifier_is_quoted() {
        let forwarded = Forwarded {
            identifier: Some("2001:db8:cafe::17".parse().unwrap()),
            ..Default::default()
        };
        assert_eq!(forwarded.to_string(), "for=\"[2001:db8:cafe::17]\"");
    }

    #[test]
    fn all_pairs() {
        let forwarded = Forwarded {
            by: "203.0.113.43".into(),
            identifier: Some("192.0.2.60".parse().unwrap()),
            host: "example.com".into(),
            proto: "https".into(),
        };
        assert_eq!(
            forwarded.to_string(),
            "by=203.0.113.43;for=192.0.2.60;host=example.com;proto=https",
        );
    }
}
