use std::fmt;

use crate::headers::{HeaderName, standard};
use super::ListWriter;

/// `Feature-Policy` header value.
///
/// Each field holds the allowlist for one browser feature and is omitted when empty.
/// Directives are `; ` separated `feature allowlist` pairs in declaration order. The keywords
/// `none`, `self` and `src` are single quoted per the grammar, `*` and origins stay bare.
///
/// ```
/// use fieldline::fields::FeaturePolicy;
///
/// let policy = FeaturePolicy {
///     accelerometer: "*".into(),
///     camera: "none".into(),
///     ..Default::default()
/// };
/// assert_eq!(policy.to_string(), "accelerometer *; camera 'none'");
/// ```
#[derive(Clone, Debug, Default, PartialEq)]
pub struct FeaturePolicy {
    /// Allowlist of the `accelerometer` feature.
    pub accelerometer: String,
    /// Allowlist of the `ambient-light-sensor` feature.
    pub ambient_light_sensor: String,
    /// Allowlist of the `autoplay` feature.
    pub autoplay: String,
    /// Allowlist of the `battery` feature.
    pub battery: String,
    /// Allowlist of the `camera` feature.
    pub camera: String,
    /// Allowlist of the `display-capture` feature.
    pub display_capture: String,
    /// Allowlist of the `document-domain` feature.
    pub document_domain: String,
    /// Allowlist of the `encrypted-media` feature.
    pub encrypted_media: String,
    /// Allowlist of the `fullscreen` feature.
    pub fullscreen: String,
    /// Allowlist of the `geolocation` feature.
    pub geolocation: String,
    /// Allowlist of the `gyroscope` feature.
    pub gyroscope: String,
    /// Allowlist of the `magnetometer` feature.
    pub magnetometer: String,
    /// Allowlist of the `microphone` feature.
    pub microphone: String,
    /// Allowlist of the `midi` feature.
    pub midi: String,
    /// Allowlist of the `payment` feature.
    pub payment: String,
    /// Allowlist of the `picture-in-picture` feature.
    pub picture_in_picture: String,
    /// Allowlist of the `speaker` feature.
    pub speaker: String,
    /// Allowlist of the `usb` feature.
    pub usb: String,
    /// Allowlist of the `vibrate` feature.
    pub vibrate: String,
    /// Allowlist of the `vr` feature.
    pub vr: String,
}

impl FeaturePolicy {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::FEATURE_POLICY;
}

impl fmt::Display for FeaturePolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = ListWriter::new(f, "; ");
        for (feature, allowlist) in [
            ("accelerometer", &self.accelerometer),
            ("ambient-light-sensor", &self.ambient_light_sensor),
            ("autoplay", &self.autoplay),
            ("battery", &self.battery),
            ("camera", &self.camera),
            ("display-capture", &self.display_capture),
            ("document-domain", &self.document_domain),
            ("encrypted-media", &self.encrypted_media),
            ("fullscreen", &self.fullscreen),
            ("geolocation", &self.geolocation),
            ("gyroscope", &self.gyroscope),
            ("magnetometer", &self.magnetometer),
            ("microphone", &self.microphone),
            ("midi", &self.midi),
            ("payment", &self.payment),
            ("picture-in-picture", &self.picture_in_picture),
            ("speaker", &self.speaker),
            ("usb", &self.usb),
            ("vibrate", &self.vibrate),
            ("vr", &self.vr),
        ] {
            if allowlist.is_empty() {
                continue;
            }
            let f = list.item()?;
            f.write_str(feature)?;
            f.write_str(" ")?;
            write_allowlist(f, allowlist)?;
        }
        Ok(())
    }
}

/// allowlist keywords are single quoted, `*` and origins stay bare
fn write_allowlist(f: &mut fmt::Formatter<'_>, allowlist: &str) -> fmt::Result {
    if matches!(allowlist, "none" | "self" | "src") {
        write!(f, "'{allowlist}'")
    } else {
        f.write_str(allowlist)
    }
}

/// `Strict-Transport-Security` header value.
///
/// ```
/// use fieldline::fields::StrictTransportSecurity;
///
/// let sts = StrictTransportSecurity {
///     max_age: 31536000,
///     include_subdomains: true,
///     ..Default::default()
/// };
/// assert_eq!(sts.to_string(), "max-age=31536000; includeSubDomains");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct StrictTransportSecurity {
    /// Policy lifetime in seconds, always rendered.
    pub max_age: u64,
    /// Apply the policy to all subdomains.
    pub include_subdomains: bool,
    /// Consent to preload list inclusion.
    pub preload: bool,
}

impl StrictTransportSecurity {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::STRICT_TRANSPORT_SECURITY;
}

impl fmt::Display for StrictTransportSecurity {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str("max-age=")?;
        f.write_str(itoa::Buffer::new().format(self.max_age))?;
        if self.include_subdomains {
            f.write_str("; includeSubDomains")?;
        }
        if self.preload {
            f.write_str("; preload")?;
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn feature_policy_pairs() {
        let policy = FeaturePolicy {
            accelerometer: "*".into(),
            camera: "none".into(),
            ..Default::default()
        };
        assert_eq!(policy.to_string(), "accelerometer *; camera 'none'");
    }

    #[test]
    fn feature_policy_keywords_are_quoted() {
        let policy = FeaturePolicy {
            fullscreen: "self".into(),
            geolocation: "src".into(),
            ..Default::default()
        };
        assert_eq!(policy.to_string(), "fullscreen 'self'; geolocation 'src'");
    }

    #[test]
    fn feature_policy_origin_stays_bare() {
        let policy = FeaturePolicy {
            microphone: "https://example.com".into(),
            ..Default::default()
        };
        assert_eq!(policy.to_string(), "microphone https://example.com");
    }

    #[test]
    fn feature_policy_empty() {
        assert_eq!(FeaturePolicy::default().to_string(), "");
    }

    #[test]
    fn strict_transport_security() {
        assert_eq!(StrictTransportSecurity::default().to_string(), "max-age=0");

        let sts = StrictTransportSecurity {
            max_age: 63072000,
            include_subdomains: true,
            preload: true,
        };
        assert_eq!(sts.to_string(), "max-age=63072000; includeSubDomains; preload");
    }
}
