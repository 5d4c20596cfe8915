use std::fmt;

use crate::headers::{HeaderName, standard};
use super::{write_or_wildcard, write_weight};

/// `Accept` header value.
///
/// Advertises which content types, expressed as MIME types, the sender is able to understand.
/// An unset type or subtype renders as the `*` wildcard, an unset weight is omitted.
///
/// ```
/// use fieldline::fields::Accept;
///
/// assert_eq!(Accept::default().to_string(), "*/*");
///
/// let accept = Accept {
///     mime_type: "image".into(),
///     mime_subtype: "png".into(),
///     q: Some(0.9),
/// };
/// assert_eq!(accept.to_string(), "image/png;q=0.9");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Accept {
    /// MIME type, `*` when empty.
    pub mime_type: String,
    /// MIME subtype, `*` when empty.
    pub mime_subtype: String,
    /// Relative quality weight.
    pub q: Option<f32>,
}

impl Accept {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::ACCEPT;
}

impl fmt::Display for Accept {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_or_wildcard(f, &self.mime_type)?;
        f.write_str("/")?;
        write_or_wildcard(f, &self.mime_subtype)?;
        write_weight(f, self.q)
    }
}

/// `Accept-Charset` header value.
///
/// Advertises which character encoding the sender understands, `*` when unset.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptCharset {
    /// Charset name, `*` when empty.
    pub charset: String,
    /// Relative quality weight.
    pub q: Option<f32>,
}

impl AcceptCharset {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::ACCEPT_CHARSET;
}

impl fmt::Display for AcceptCharset {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_or_wildcard(f, &self.charset)?;
        write_weight(f, self.q)
    }
}

/// `Accept-Encoding` header value.
///
/// Advertises which content encoding, usually a compression algorithm, the sender understands.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptEncoding {
    /// Content coding name, `*` when empty.
    pub coding: String,
    /// Relative quality weight.
    pub q: Option<f32>,
}

impl AcceptEncoding {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::ACCEPT_ENCODING;
}

impl fmt::Display for AcceptEncoding {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_or_wildcard(f, &self.coding)?;
        write_weight(f, self.q)
    }
}

/// `Accept-Language` header value.
///
/// Advertises which human language the sender prefers in the response.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct AcceptLanguage {
    /// Language range, `*` when empty.
    pub language: String,
    /// Relative quality weight.
    pub q: Option<f32>,
}

impl AcceptLanguage {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::ACCEPT_LANGUAGE;
}

impl fmt::Display for AcceptLanguage {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_or_wildcard(f, &self.language)?;
        write_weight(f, self.q)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_default_is_full_wildcard() {
        assert_eq!(Accept::default().to_string(), "*/*");
    }

    #[test]
    fn accept_with_weight() {
        let accept = Accept {
            mime_type: "image".into(),
            mime_subtype: "png".into(),
            q: Some(0.9),
        };
        assert_eq!(accept.to_string(), "image/png;q=0.9");
    }

    #[test]
    fn accept_subtype_wildcard() {
        let accept = Accept {
            mime_type: "text".into(),
            ..Default::default()
        };
        assert_eq!(accept.to_string(), "text/*");
    }

    #[test]
    fn accept_weight_is_one_decimal() {
        let accept = Accept {
            mime_type: "text".into(),
            mime_subtype: "html".into(),
            q: Some(1.0),
        };
        assert_eq!(accept.to_string(), "text/html;q=1.0");
    }

    #[test]
    fn accept_charset() {
        assert_eq!(AcceptCharset::default().to_string(), "*");

        let charset = AcceptCharset {
            charset: "utf-8".into(),
            q: Some(0.8),
        };
        assert_eq!(charset.to_string(), "utf-8;q=0.8");
    }

    #[test]
    fn accept_encoding() {
        let encoding = AcceptEncoding {
            coding: "gzip".into(),
            q: Some(0.2),
        };
        assert_eq!(encoding.to_string(), "gzip;q=0.2");
    }

    #[test]
    fn accept_language() {
        let language = AcceptLanguage {
            language: "en-US".into(),
            q: None,
        };
        assert_eq!(language.to_string(), "en-US");
    }

    #[test]
    fn name_pairing() {
        assert_eq!(Accept::NAME.as_str(), "accept");
        assert_eq!(AcceptCharset::NAME.as_str(), "accept-charset");
        assert_eq!(AcceptEncoding::NAME.as_str(), "accept-encoding");
        assert_eq!(AcceptLanguage::NAME.as_str(), "accept-language");
    }
}
