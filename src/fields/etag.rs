use std::fmt;

use crate::headers::{HeaderName, standard};

/// `ETag` header value.
///
/// The opaque tag is always quoted, the weak form carries the `W/` prefix.
///
/// ```
/// use fieldline::fields::ETag;
///
/// let etag = ETag { value: "1224".into(), weak: true };
/// assert_eq!(etag.to_string(), "W/\"1224\"");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ETag {
    /// Opaque entity tag.
    pub value: String,
    /// Weak validator marker.
    pub weak: bool,
}

impl ETag {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::ETAG;
}

impl fmt::Display for ETag {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if self.weak {
            f.write_str("W/")?;
        }
        // etagc grammar has no quotes or backslashes, write the tag as given
        write!(f, "\"{}\"", self.value)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn strong() {
        let etag = ETag { value: "33a64df5".into(), weak: false };
        assert_eq!(etag.to_string(), "\"33a64df5\"");
    }

    #[test]
    fn weak() {
        let etag = ETag { value: "1224".into(), weak: true };
        assert_eq!(etag.to_string(), "W/\"1224\"");
    }

    #[test]
    fn empty_value() {
        assert_eq!(ETag::default().to_string(), "\"\"");
    }
}
