use std::fmt;
use std::str::FromStr;
use bytes::Bytes;

use crate::headers::matches;
use crate::headers::error::HeaderError;

/// HTTP Header Value.
///
/// This API does not support non-ASCII value.
#[derive(Clone)]
pub struct HeaderValue {
    /// is ASCII
    bytes: Bytes,
}

impl HeaderValue {
    /// Parse header value from static bytes.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header value.
    #[inline]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        match validate_header_value(bytes) {
            Ok(()) => Self {
                bytes: Bytes::from_static(bytes),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header value from [`Bytes`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_bytes<B: Into<Bytes>>(value: B) -> Result<Self, HeaderError> {
        let bytes = value.into();
        match validate_header_value(&bytes) {
            Ok(()) => Ok(Self { bytes }),
            Err(err) => Err(err),
        }
    }

    /// Parse header value by copying from slice of bytes.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header value.
    #[inline]
    pub fn from_slice<A: AsRef<[u8]>>(value: A) -> Result<Self, HeaderError> {
        match validate_header_value(value.as_ref()) {
            Ok(()) => Ok(Self {
                bytes: Bytes::copy_from_slice(value.as_ref()),
            }),
            Err(err) => Err(err),
        }
    }

    /// Parse [`HeaderValue`] from string.
    ///
    /// # Panics
    ///
    /// This function will panic if value contains invalid character.
    #[inline]
    pub fn from_string<S: Into<String>>(value: S) -> HeaderValue {
        match Self::from_bytes(Bytes::from(value.into().into_bytes())) {
            Ok(value) => value,
            Err(err) => err.panic_const(),
        }
    }

    /// Render an integer into a [`HeaderValue`].
    ///
    /// Decimal digits are always a valid value, so this operation is infallible.
    #[inline]
    pub fn from_u64(value: u64) -> HeaderValue {
        Self {
            bytes: Bytes::copy_from_slice(itoa::Buffer::new().format(value).as_bytes()),
        }
    }

    /// Render a typed field value into a [`HeaderValue`].
    ///
    /// Formatters in [`fields`][crate::fields] always produce valid values, so for them this
    /// operation never returns an error.
    ///
    /// # Errors
    ///
    /// Returns error if the rendered output is not a valid header value.
    pub fn from_display<T: fmt::Display>(value: &T) -> Result<Self, HeaderError> {
        Self::from_bytes(Bytes::from(value.to_string().into_bytes()))
    }

    /// Returns header value as a byte slice.
    #[inline]
    pub fn as_bytes(&self) -> &[u8] {
        &self.bytes
    }

    /// Returns header value as `str`.
    #[inline]
    pub fn as_str(&self) -> &str {
        // SAFETY: `bytes` is valid ASCII
        unsafe { str::from_utf8_unchecked(&self.bytes) }
    }
}

// ===== Parsing =====

const MAX_HEADER_VALUE_LEN: usize = 1 << 13;  // 8KB

const fn validate_header_value(mut bytes: &[u8]) -> Result<(), HeaderError> {
    use HeaderError as E;
    match bytes {
        // no leading SP / HTAB
        | [b' ' | b'\t', ..]
        // no trailing SP / HTAB
        | [.., b' ' | b'\t'] => {
            return Err(E::Invalid);
        },
        _ => {}
    }
    // too long
    if bytes.len() > MAX_HEADER_VALUE_LEN {
        return Err(E::TooLong);
    }
    let mut error = false;
    while let [byte, rest @ ..] = bytes {
        error |= !matches::is_header_value(*byte);
        bytes = rest;
    }
    if !error { Ok(()) } else { Err(E::Invalid) }
}

// ===== Traits =====

impl fmt::Debug for HeaderValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_tuple("HeaderValue").field(&self.as_str()).finish()
    }
}

impl FromStr for HeaderValue {
    type Err = HeaderError;

    #[inline]
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_slice(s)
    }
}

impl PartialEq for HeaderValue {
    #[inline]
    fn eq(&self, other: &Self) -> bool {
        self.bytes == other.bytes
    }
}

impl PartialEq<[u8]> for HeaderValue {
    #[inline]
    fn eq(&self, other: &[u8]) -> bool {
        self.bytes == other
    }
}

impl PartialEq<str> for HeaderValue {
    #[inline]
    fn eq(&self, other: &str) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl PartialEq<String> for HeaderValue {
    #[inline]
    fn eq(&self, other: &String) -> bool {
        self.bytes == other.as_bytes()
    }
}

impl From<HeaderValue> for Bytes {
    #[inline]
    fn from(value: HeaderValue) -> Self {
        value.bytes
    }
}
