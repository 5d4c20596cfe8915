use std::fmt;

use crate::headers::{HeaderName, standard};
use super::{HttpDate, ListWriter};

/// Single `name=value` pair of a [`Cookie`] header.
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct CookiePair {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
}

impl fmt::Display for CookiePair {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)
    }
}

/// `Cookie` header value, the stored cookies sent back to the server.
///
/// ```
/// use fieldline::fields::{Cookie, CookiePair};
///
/// let cookie = Cookie {
///     pairs: vec![
///         CookiePair { name: "hello".into(), value: "world".into() },
///         CookiePair { name: "id".into(), value: "28".into() },
///     ],
/// };
/// assert_eq!(cookie.to_string(), "hello=world; id=28");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Cookie {
    /// Cookie pairs, `; ` separated.
    pub pairs: Vec<CookiePair>,
}

impl Cookie {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::COOKIE;
}

impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = ListWriter::new(f, "; ");
        for pair in &self.pairs {
            write!(list.item()?, "{pair}")?;
        }
        Ok(())
    }
}

/// `SameSite` attribute of a [`SetCookie`] header.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SameSite {
    /// Sent only in a first-party context.
    Strict,
    /// Withheld on cross-site subrequests, sent on navigation.
    Lax,
    /// Sent in all contexts, requires `Secure`.
    None,
}

impl SameSite {
    const fn as_str(self) -> &'static str {
        match self {
            Self::Strict => "Strict",
            Self::Lax => "Lax",
            Self::None => "None",
        }
    }
}

/// `Set-Cookie` header value.
///
/// Attributes are `; ` separated and rendered in the conventional order, each omitted when
/// unset.
///
/// ```
/// use fieldline::fields::SetCookie;
///
/// let cookie = SetCookie {
///     name: "id".into(),
///     value: "a3fWa".into(),
///     max_age: Some(2592000),
///     secure: true,
///     http_only: true,
///     ..Default::default()
/// };
/// assert_eq!(cookie.to_string(), "id=a3fWa; Max-Age=2592000; Secure; HttpOnly");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct SetCookie {
    /// Cookie name.
    pub name: String,
    /// Cookie value.
    pub value: String,
    /// `Expires` attribute.
    pub expires: Option<HttpDate>,
    /// `Max-Age` attribute in seconds.
    pub max_age: Option<u32>,
    /// `Domain` attribute, omitted when empty.
    pub domain: String,
    /// `Path` attribute, omitted when empty.
    pub path: String,
    /// `Secure` attribute.
    pub secure: bool,
    /// `HttpOnly` attribute.
    pub http_only: bool,
    /// `SameSite` attribute.
    pub same_site: Option<SameSite>,
}

impl SetCookie {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::SET_COOKIE;
}

impl fmt::Display for SetCookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.name, self.value)?;

        if let Some(expires) = self.expires {
            write!(f, "; Expires={expires}")?;
        }
        if let Some(max_age) = self.max_age {
            write!(f, "; Max-Age={max_age}")?;
        }
        if !self.domain.is_empty() {
            write!(f, "; Domain={}", self.domain)?;
        }
        if !self.path.is_empty() {
            write!(f, "; Path={}", self.path)?;
        }
        if self.secure {
            f.write_str("; Secure")?;
        }
        if self.http_only {
            f.write_str("; HttpOnly")?;
        }
        if let Some(same_site) = self.same_site {
            write!(f, "; SameSite={}", same_site.as_str())?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use std::time::{Duration, UNIX_EPOCH};
    use super::*;

    #[test]
    fn cookie_single_pair() {
        let cookie = Cookie {
            pairs: vec![CookiePair { name: "hello".into(), value: "world".into() }],
        };
        assert_eq!(cookie.to_string(), "hello=world");
    }

    #[test]
    fn cookie_empty() {
        assert_eq!(Cookie::default().to_string(), "");
    }

    #[test]
    fn cookie_multiple_pairs() {
        let cookie = Cookie {
            pairs: vec![
                CookiePair { name: "a".into(), value: "1".into() },
                CookiePair { name: "b".into(), value: "2".into() },
                CookiePair { name: "c".into(), value: "3".into() },
            ],
        };
        assert_eq!(cookie.to_string(), "a=1; b=2; c=3");
    }

    #[test]
    fn set_cookie_bare() {
        let cookie = SetCookie {
            name: "session".into(),
            value: "38afes7a8".into(),
            ..Default::default()
        };
        assert_eq!(cookie.to_string(), "session=38afes7a8");
    }

    #[test]
    fn set_cookie_attributes() {
        let cookie = SetCookie {
            name: "id".into(),
            value: "a3fWa".into(),
            expires: Some(HttpDate::from(UNIX_EPOCH + Duration::from_secs(1445412480))),
            domain: "example.com".into(),
            path: "/".into(),
            secure: true,
            http_only: true,
            same_site: Some(SameSite::Lax),
            ..Default::default()
        };
        assert_eq!(
            cookie.to_string(),
            "id=a3fWa; Expires=Wed, 21 Oct 2015 07:28:00 GMT; Domain=example.com; Path=/; \
             Secure; HttpOnly; SameSite=Lax",
        );
    }

    #[test]
    fn set_cookie_same_site_values() {
        for (same_site, expected) in [
            (SameSite::Strict, "a=b; SameSite=Strict"),
            (SameSite::Lax, "a=b; SameSite=Lax"),
            (SameSite::None, "a=b; SameSite=None"),
        ] {
            let cookie = SetCookie {
                name: "a".into(),
                value: "b".into(),
                same_site: Some(same_site),
                ..Default::default()
            };
            assert_eq!(cookie.to_string(), expected);
        }
    }
}
