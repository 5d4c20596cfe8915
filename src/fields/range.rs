use std::fmt;

use crate::headers::{HeaderName, standard};
use super::ListWriter;

/// `Accept-Ranges` header value.
///
/// ```
/// use fieldline::fields::AcceptRanges;
///
/// assert_eq!(AcceptRanges { bytes: true }.to_string(), "bytes");
/// assert_eq!(AcceptRanges::default().to_string(), "none");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AcceptRanges {
    /// Whether byte ranges are supported.
    pub bytes: bool,
}

impl AcceptRanges {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::ACCEPT_RANGES;
}

impl fmt::Display for AcceptRanges {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.bytes { "bytes" } else { "none" })
    }
}

/// Single span of a [`Range`] request.
///
/// int-range    = first "-" [ last ]
/// suffix-range = "-" suffix-length
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Span {
    /// First byte position, suffix form when unset.
    pub start: Option<u64>,
    /// Last byte position, open ended when unset.
    pub end: Option<u64>,
}

impl fmt::Display for Span {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();
        if let Some(start) = self.start {
            f.write_str(buf.format(start))?;
        }
        f.write_str("-")?;
        if let Some(end) = self.end {
            f.write_str(buf.format(end))?;
        }
        Ok(())
    }
}

/// `Range` header value.
///
/// ```
/// use fieldline::fields::{Range, Span};
///
/// let range = Range {
///     spans: vec![
///         Span { start: Some(0), end: Some(499) },
///         Span { start: Some(9500), end: None },
///     ],
///     ..Default::default()
/// };
/// assert_eq!(range.to_string(), "bytes=0-499, 9500-");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct Range {
    /// Range unit, `bytes` when empty.
    pub unit: String,
    /// Requested spans, comma separated.
    pub spans: Vec<Span>,
}

impl Range {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::RANGE;
}

impl fmt::Display for Range {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_unit(f, &self.unit)?;
        f.write_str("=")?;
        let mut list = ListWriter::new(f, ", ");
        for span in &self.spans {
            write!(list.item()?, "{span}")?;
        }
        Ok(())
    }
}

/// `Content-Range` header value.
///
/// An unset span or size renders as the `*` wildcard:
///
/// ```
/// use fieldline::fields::ContentRange;
///
/// assert_eq!(ContentRange::default().to_string(), "bytes */*");
///
/// let range = ContentRange {
///     start: Some(0),
///     end: Some(999),
///     size: Some(1234),
///     ..Default::default()
/// };
/// assert_eq!(range.to_string(), "bytes 0-999/1234");
/// ```
#[derive(Clone, Debug, Default, PartialEq, Eq)]
pub struct ContentRange {
    /// Range unit, `bytes` when empty.
    pub unit: String,
    /// First byte position of the enclosed part.
    pub start: Option<u64>,
    /// Last byte position of the enclosed part.
    pub end: Option<u64>,
    /// Complete length of the selected representation.
    pub size: Option<u64>,
}

impl ContentRange {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::CONTENT_RANGE;
}

impl fmt::Display for ContentRange {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut buf = itoa::Buffer::new();

        write_unit(f, &self.unit)?;
        f.write_str(" ")?;

        // range is only expressible with both ends, otherwise unsatisfied-range
        match (self.start, self.end) {
            (Some(start), Some(end)) => {
                f.write_str(buf.format(start))?;
                f.write_str("-")?;
                f.write_str(buf.format(end))?;
            }
            _ => f.write_str("*")?,
        }

        f.write_str("/")?;
        match self.size {
            Some(size) => f.write_str(buf.format(size)),
            None => f.write_str("*"),
        }
    }
}

fn write_unit(f: &mut fmt::Formatter<'_>, unit: &str) -> fmt::Result {
    if unit.is_empty() {
        f.write_str("bytes")
    } else {
        f.write_str(unit)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_ranges() {
        assert_eq!(AcceptRanges { bytes: true }.to_string(), "bytes");
        assert_eq!(AcceptRanges { bytes: false }.to_string(), "none");
    }

    #[test]
    fn content_range_default() {
        assert_eq!(ContentRange::default().to_string(), "bytes */*");
    }

    #[test]
    fn content_range_full() {
        let range = ContentRange {
            start: Some(0),
            end: Some(999),
            size: Some(1234),
            ..Default::default()
        };
        assert_eq!(range.to_string(), "bytes 0-999/1234");
    }

    #[test]
    fn content_range_unknown_size() {
        let range = ContentRange {
            start: Some(0),
            end: Some(999),
            ..Default::default()
        };
        assert_eq!(range.to_string(), "bytes 0-999/*");
    }

    #[test]
    fn content_range_unsatisfied() {
        let range = ContentRange {
            size: Some(1234),
            ..Default::default()
        };
        assert_eq!(range.to_string(), "bytes */1234");
    }

    #[test]
    fn content_range_half_open_degrades_to_wildcard() {
        let range = ContentRange {
            start: Some(0),
            size: Some(1234),
            ..Default::default()
        };
        assert_eq!(range.to_string(), "bytes */1234");
    }

    #[test]
    fn range_spans() {
        let range = Range {
            spans: vec![
                Span { start: Some(200), end: Some(1000) },
                Span { start: Some(2000), end: Some(6576) },
            ],
            ..Default::default()
        };
        assert_eq!(range.to_string(), "bytes=200-1000, 2000-6576");
    }

    #[test]
    fn range_suffix_span() {
        let range = Range {
            spans: vec![Span { start: None, end: Some(500) }],
            ..Default::default()
        };
        assert_eq!(range.to_string(), "bytes=-500");
    }

    #[test]
    fn range_custom_unit() {
        let range = Range {
            unit: "items".into(),
            spans: vec![Span { start: Some(0), end: Some(9) }],
        };
        assert_eq!(range.to_string(), "items=0-9");
    }
}
