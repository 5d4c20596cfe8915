//! HTTP header name constants and value formatters.
//!
//! The [`headers`] module enumerates the standard header field names as
//! documented constants, and the [`fields`] module provides per-header value
//! records that render themselves into canonical header value strings.
//!
//! ```
//! use fieldline::headers::standard;
//! use fieldline::fields::Accept;
//!
//! let accept = Accept {
//!     mime_type: "image".into(),
//!     mime_subtype: "png".into(),
//!     q: Some(0.9),
//! };
//!
//! assert_eq!(standard::ACCEPT.as_str(), "accept");
//! assert_eq!(accept.to_string(), "image/png;q=0.9");
//! ```
#![warn(missing_debug_implementations)]

pub mod headers;
pub mod fields;

mod matches;
