//! Typed HTTP header field values.
//!
//! Each type here is a plain record of one header's grammar components. Build it with struct
//! literal syntax, leave everything else at its default, and render the canonical header value
//! through [`Display`][std::fmt::Display]:
//!
//! ```
//! use fieldline::fields::{CacheControl, ContentRange};
//!
//! let cc = CacheControl { public: true, max_age: Some(600), ..Default::default() };
//! assert_eq!(cc.to_string(), "public, max-age=600");
//!
//! assert_eq!(ContentRange::default().to_string(), "bytes */*");
//! ```
//!
//! Rendering never fails. Components left at their default are substituted with the wildcard
//! token where the grammar requires a value, and omitted entirely where they are optional.
//! Every record also carries the [`HeaderName`][crate::headers::HeaderName] it pairs with as an
//! associated `NAME` constant.
mod accept;
mod cache;
mod client_hints;
mod content;
mod cookie;
mod date;
mod etag;
mod forwarded;
mod policy;
mod range;

pub use accept::{Accept, AcceptCharset, AcceptEncoding, AcceptLanguage};
pub use cache::{CacheControl, ClearSiteData};
pub use client_hints::{
    AcceptCh, AcceptChLifetime, ContentDpr, DeviceMemory, Dpr, SaveData, ViewportWidth, Width,
};
pub use content::{ContentDisposition, ContentType};
pub use cookie::{Cookie, CookiePair, SameSite, SetCookie};
pub use date::{HttpDate, RetryAfter};
pub use etag::ETag;
pub use forwarded::Forwarded;
pub use policy::{FeaturePolicy, StrictTransportSecurity};
pub use range::{AcceptRanges, ContentRange, Range, Span};

use std::fmt;

// ===== Render helpers =====

/// Write a `;q=` weight parameter with one decimal, or nothing when unset.
///
/// weight = OWS ";" OWS "q=" qvalue
pub(crate) fn write_weight(f: &mut fmt::Formatter<'_>, q: Option<f32>) -> fmt::Result {
    match q {
        Some(q) => write!(f, ";q={q:.1}"),
        None => Ok(()),
    }
}

/// Write a token, substituting the `*` wildcard when empty.
pub(crate) fn write_or_wildcard(f: &mut fmt::Formatter<'_>, part: &str) -> fmt::Result {
    if part.is_empty() {
        f.write_str("*")
    } else {
        f.write_str(part)
    }
}

/// Write a double quoted string, escaping `"` and `\`.
pub(crate) fn write_quoted(f: &mut fmt::Formatter<'_>, value: &str) -> fmt::Result {
    use std::fmt::Write;

    f.write_char('"')?;
    for c in value.chars() {
        if matches!(c, '"' | '\\') {
            f.write_char('\\')?;
        }
        f.write_char(c)?;
    }
    f.write_char('"')
}

/// Separator-joined list writer over a [`fmt::Formatter`].
///
/// The separator is written before every item except the first.
pub(crate) struct ListWriter<'a, 'f> {
    f: &'a mut fmt::Formatter<'f>,
    sep: &'static str,
    first: bool,
}

impl<'a, 'f> ListWriter<'a, 'f> {
    pub(crate) fn new(f: &'a mut fmt::Formatter<'f>, sep: &'static str) -> Self {
        Self { f, sep, first: true }
    }

    /// Start the next item, returning the formatter to write it into.
    pub(crate) fn item(&mut self) -> Result<&mut fmt::Formatter<'f>, fmt::Error> {
        if !std::mem::take(&mut self.first) {
            self.f.write_str(self.sep)?;
        }
        Ok(&mut *self.f)
    }
}
