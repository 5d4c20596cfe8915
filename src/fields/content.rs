use std::fmt;

use crate::headers::{HeaderName, standard};
use super::{write_or_wildcard, write_quoted};

/// `Content-Type` header value.
///
/// An unset type or subtype renders as the `*` wildcard, unset parameters are omitted.
///
/// ```
/// use fieldline::fields::ContentType;
///
/// let ct = ContentType {
///     mime_type: "text".into(),
///     mime_subtype: "plain".into(),
///     charset: "utf-8".into(),
///     boundary: "something".into(),
/// };
/// assert_eq!(ct.to_string(), "text/plain;charset=utf-8;boundary=something");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentType {
    /// MIME type, `*` when empty.
    pub mime_type: String,
    /// MIME subtype, `*` when empty.
    pub mime_subtype: String,
    /// `charset` parameter, omitted when empty.
    pub charset: String,
    /// `boundary` parameter for multipart types, omitted when empty.
    pub boundary: String,
}

impl ContentType {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::CONTENT_TYPE;
}

impl fmt::Display for ContentType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write_or_wildcard(f, &self.mime_type)?;
        f.write_str("/")?;
        write_or_wildcard(f, &self.mime_subtype)?;
        if !self.charset.is_empty() {
            write!(f, ";charset={}", self.charset)?;
        }
        if !self.boundary.is_empty() {
            write!(f, ";boundary={}", self.boundary)?;
        }
        Ok(())
    }
}

/// `Content-Disposition` header value.
///
/// The disposition type defaults to `inline`. The `name` and `filename` parameters are always
/// quoted and omitted when empty.
///
/// ```
/// use fieldline::fields::ContentDisposition;
///
/// assert_eq!(ContentDisposition::default().to_string(), "inline");
///
/// let cd = ContentDisposition {
///     attachment: true,
///     filename: "hello.html".into(),
///     ..Default::default()
/// };
/// assert_eq!(cd.to_string(), "attachment;filename=\"hello.html\"");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct ContentDisposition {
    /// Download disposition, `inline` when unset.
    pub attachment: bool,
    /// Multipart form field disposition, takes precedence over `attachment`.
    pub form_data: bool,
    /// `name` parameter of a form field.
    pub name: String,
    /// `filename` parameter.
    pub filename: String,
}

impl ContentDisposition {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::CONTENT_DISPOSITION;
}

impl fmt::Display for ContentDisposition {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.form_data {
            "form-data"
        } else if self.attachment {
            "attachment"
        } else {
            "inline"
        })?;

        if !self.name.is_empty() {
            f.write_str(";name=")?;
            write_quoted(f, &self.name)?;
        }
        if !self.filename.is_empty() {
            f.write_str(";filename=")?;
            write_quoted(f, &self.filename)?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn content_type_default_is_full_wildcard() {
        assert_eq!(ContentType::default().to_string(), "*/*");
    }

    #[test]
    fn content_type_plain() {
        let ct = ContentType {
            mime_type: "application".into(),
            mime_subtype: "json".into(),
            ..Default::default()
        };
        assert_eq!(ct.to_string(), "application/json");
    }

    #[test]
    fn content_type_with_charset() {
        let ct = ContentType {
            mime_type: "text".into(),
            mime_subtype: "html".into(),
            charset: "utf-8".into(),
            ..Default::default()
        };
        assert_eq!(ct.to_string(), "text/html;charset=utf-8");
    }

    #[test]
    fn content_type_multipart() {
        let ct = ContentType {
            mime_type: "multipart".into(),
            mime_subtype: "form-data".into(),
            boundary: "x29Ab7".into(),
            ..Default::default()
        };
        assert_eq!(ct.to_string(), "multipart/form-data;boundary=x29Ab7");
    }

    #[test]
    fn content_disposition_inline() {
        assert_eq!(ContentDisposition::default().to_string(), "inline");
    }

    #[test]
    fn content_disposition_attachment() {
        let cd = ContentDisposition {
            attachment: true,
            filename: "hello.html".into(),
            ..Default::default()
        };
        assert_eq!(cd.to_string(), "attachment;filename=\"hello.html\"");
    }

    #[test]
    fn content_disposition_form_data() {
        let cd = ContentDisposition {
            form_data: true,
            name: "upload".into(),
            filename: "report.pdf".into(),
            ..Default::default()
        };
        assert_eq!(cd.to_string(), "form-data;name=\"upload\";filename=\"report.pdf\"");
    }

    #[test]
    fn content_disposition_escapes_quotes() {
        let cd = ContentDisposition {
            attachment: true,
            filename: "he said \"hi\".txt".into(),
            ..Default::default()
        };
        assert_eq!(cd.to_string(), r#"attachment;filename="he said \"hi\".txt""#);
    }
}
