use std::fmt;

use crate::headers::{HeaderName, standard};
use super::ListWriter;

/// `Cache-Control` header value.
///
/// Boolean fields toggle bare directives, seconds valued fields render as `name=value` and are
/// omitted when unset. Directives are written comma separated in declaration order.
///
/// ```
/// use fieldline::fields::CacheControl;
///
/// let cc = CacheControl { public: true, ..Default::default() };
/// assert_eq!(cc.to_string(), "public");
///
/// let cc = CacheControl {
///     no_cache: true,
///     max_age: Some(0),
///     ..Default::default()
/// };
/// assert_eq!(cc.to_string(), "no-cache, max-age=0");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct CacheControl {
    /// May be stored by any cache.
    pub public: bool,
    /// May only be stored by the client cache.
    pub private: bool,
    /// Stored response must be validated before use.
    pub no_cache: bool,
    /// Response must not be stored at all.
    pub no_store: bool,
    /// Intermediaries must not transform the content.
    pub no_transform: bool,
    /// Only an already stored response is acceptable.
    pub only_if_cached: bool,
    /// A stale response must not be used without revalidation.
    pub must_revalidate: bool,
    /// Like `must-revalidate`, for shared caches only.
    pub proxy_revalidate: bool,
    /// Response will not be updated while fresh.
    pub immutable: bool,
    /// Freshness lifetime in seconds.
    pub max_age: Option<u32>,
    /// Freshness lifetime for shared caches, in seconds.
    pub s_maxage: Option<u32>,
    /// Acceptable staleness in seconds.
    pub max_stale: Option<u32>,
    /// Required remaining freshness in seconds.
    pub min_fresh: Option<u32>,
    /// Staleness window during background revalidation, in seconds.
    pub stale_while_revalidate: Option<u32>,
    /// Staleness window on upstream errors, in seconds.
    pub stale_if_error: Option<u32>,
}

impl CacheControl {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::CACHE_CONTROL;
}

impl fmt::Display for CacheControl {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = ListWriter::new(f, ", ");

        for (token, set) in [
            ("public", self.public),
            ("private", self.private),
            ("no-cache", self.no_cache),
            ("no-store", self.no_store),
            ("no-transform", self.no_transform),
            ("only-if-cached", self.only_if_cached),
            ("must-revalidate", self.must_revalidate),
            ("proxy-revalidate", self.proxy_revalidate),
            ("immutable", self.immutable),
        ] {
            if set {
                list.item()?.write_str(token)?;
            }
        }

        for (token, secs) in [
            ("max-age", self.max_age),
            ("s-maxage", self.s_maxage),
            ("max-stale", self.max_stale),
            ("min-fresh", self.min_fresh),
            ("stale-while-revalidate", self.stale_while_revalidate),
            ("stale-if-error", self.stale_if_error),
        ] {
            if let Some(secs) = secs {
                write!(list.item()?, "{token}={secs}")?;
            }
        }

        Ok(())
    }
}

/// `Clear-Site-Data` header value.
///
/// Directives are quoted strings in this header's grammar. The wildcard clears every data type
/// and renders alone when set.
///
/// ```
/// use fieldline::fields::ClearSiteData;
///
/// let csd = ClearSiteData { cache: true, cookies: true, ..Default::default() };
/// assert_eq!(csd.to_string(), r#""cache", "cookies""#);
///
/// let csd = ClearSiteData { wildcard: true, cache: true, ..Default::default() };
/// assert_eq!(csd.to_string(), r#""*""#);
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ClearSiteData {
    /// Clear locally cached data.
    pub cache: bool,
    /// Clear cookies.
    pub cookies: bool,
    /// Clear DOM storage.
    pub storage: bool,
    /// Reload execution contexts of the origin.
    pub execution_contexts: bool,
    /// Clear every data type, overrides the other directives.
    pub wildcard: bool,
}

impl ClearSiteData {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::CLEAR_SITE_DATA;
}

impl fmt::Display for ClearSiteData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.wildcard {
            return f.write_str("\"*\"");
        }

        let mut list = ListWriter::new(f, ", ");
        for (token, set) in [
            ("\"cache\"", self.cache),
            ("\"cookies\"", self.cookies),
            ("\"storage\"", self.storage),
            ("\"executionContexts\"", self.execution_contexts),
        ] {
            if set {
                list.item()?.write_str(token)?;
            }
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_directive() {
        let cc = CacheControl { public: true, ..Default::default() };
        assert_eq!(cc.to_string(), "public");
    }

    #[test]
    fn empty_renders_nothing() {
        assert_eq!(CacheControl::default().to_string(), "");
    }

    #[test]
    fn flags_and_seconds() {
        let cc = CacheControl {
            public: true,
            must_revalidate: true,
            max_age: Some(600),
            stale_if_error: Some(30),
            ..Default::default()
        };
        assert_eq!(cc.to_string(), "public, must-revalidate, max-age=600, stale-if-error=30");
    }

    #[test]
    fn zero_seconds_is_not_unset() {
        let cc = CacheControl { no_store: true, max_age: Some(0), ..Default::default() };
        assert_eq!(cc.to_string(), "no-store, max-age=0");
    }

    #[test]
    fn output_is_deterministic() {
        let cc = CacheControl {
            private: true,
            s_maxage: Some(90),
            ..Default::default()
        };
        assert_eq!(cc.to_string(), cc.to_string());
    }

    #[test]
    fn clear_site_data() {
        let csd = ClearSiteData {
            cache: true,
            storage: true,
            execution_contexts: true,
            ..Default::default()
        };
        assert_eq!(csd.to_string(), r#""cache", "storage", "executionContexts""#);
    }

    #[test]
    fn clear_site_data_wildcard_overrides() {
        let csd = ClearSiteData { wildcard: true, cookies: true, ..Default::default() };
        assert_eq!(csd.to_string(), r#""*""#);
    }
}
