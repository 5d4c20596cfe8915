use std::fmt;

use crate::headers::{HeaderName, standard};
use super::ListWriter;

/// `Accept-CH` header value.
///
/// Each flag advertises one client hint header the server wants to receive on subsequent
/// requests. Set hints render as a comma separated lowercase token list in declaration order;
/// an all-default record renders as the empty string.
///
/// ```
/// use fieldline::fields::AcceptCh;
///
/// let ch = AcceptCh { dpr: true, viewport_width: true, ..Default::default() };
/// assert_eq!(ch.to_string(), "dpr, viewport-width");
/// ```
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AcceptCh {
    /// Advertise the `dpr` hint.
    pub dpr: bool,
    /// Advertise the `width` hint.
    pub width: bool,
    /// Advertise the `viewport-width` hint.
    pub viewport_width: bool,
    /// Advertise the `device-memory` hint.
    pub device_memory: bool,
    /// Advertise the `rtt` hint.
    pub rtt: bool,
    /// Advertise the `downlink` hint.
    pub downlink: bool,
    /// Advertise the `ect` hint.
    pub ect: bool,
    /// Advertise the `save-data` hint.
    pub save_data: bool,
}

impl AcceptCh {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::ACCEPT_CH;
}

impl fmt::Display for AcceptCh {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut list = ListWriter::new(f, ", ");
        for (token, set) in [
            ("dpr", self.dpr),
            ("width", self.width),
            ("viewport-width", self.viewport_width),
            ("device-memory", self.device_memory),
            ("rtt", self.rtt),
            ("downlink", self.downlink),
            ("ect", self.ect),
            ("save-data", self.save_data),
        ] {
            if set {
                list.item()?.write_str(token)?;
            }
        }
        Ok(())
    }
}

/// `Accept-CH-Lifetime` header value, persistence of the `Accept-CH` preference in seconds.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct AcceptChLifetime {
    /// Persistence in seconds.
    pub seconds: u64,
}

impl AcceptChLifetime {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::ACCEPT_CH_LIFETIME;
}

impl fmt::Display for AcceptChLifetime {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.seconds))
    }
}

/// `DPR` header value, the client device pixel ratio.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Dpr {
    /// Physical pixels per CSS pixel.
    pub ratio: f32,
}

impl Dpr {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::DPR;
}

impl fmt::Display for Dpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ratio)
    }
}

/// `Content-DPR` header value, the image device pixel ratio the server selected.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct ContentDpr {
    /// Image pixels per CSS pixel.
    pub ratio: f32,
}

impl ContentDpr {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::CONTENT_DPR;
}

impl fmt::Display for ContentDpr {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.ratio)
    }
}

/// `Device-Memory` header value, approximate client RAM in gibibytes.
///
/// The defined value space is the power of two range `0.25` to `8`.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct DeviceMemory {
    /// Amount of RAM in gibibytes.
    pub gib: f32,
}

impl DeviceMemory {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::DEVICE_MEMORY;
}

impl fmt::Display for DeviceMemory {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.gib)
    }
}

/// `Viewport-Width` header value, the layout viewport width in CSS pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct ViewportWidth {
    /// Layout viewport width.
    pub width: u32,
}

impl ViewportWidth {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::VIEWPORT_WIDTH;
}

impl fmt::Display for ViewportWidth {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.width))
    }
}

/// `Width` header value, the desired resource width in physical pixels.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct Width {
    /// Desired resource width.
    pub width: u32,
}

impl Width {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::WIDTH;
}

impl fmt::Display for Width {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(itoa::Buffer::new().format(self.width))
    }
}

/// `Save-Data` header value, the client preference for reduced data usage.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub struct SaveData {
    /// Whether reduced data usage is preferred.
    pub on: bool,
}

impl SaveData {
    /// Header name this value pairs with.
    pub const NAME: HeaderName = standard::SAVE_DATA;
}

impl fmt::Display for SaveData {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(if self.on { "on" } else { "off" })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn accept_ch_list() {
        let ch = AcceptCh {
            dpr: true,
            viewport_width: true,
            device_memory: true,
            ..Default::default()
        };
        assert_eq!(ch.to_string(), "dpr, viewport-width, device-memory");
    }

    #[test]
    fn accept_ch_single() {
        let ch = AcceptCh { save_data: true, ..Default::default() };
        assert_eq!(ch.to_string(), "save-data");
    }

    #[test]
    fn accept_ch_empty() {
        assert_eq!(AcceptCh::default().to_string(), "");
    }

    #[test]
    fn accept_ch_lifetime() {
        assert_eq!(AcceptChLifetime::default().to_string(), "0");
        assert_eq!(AcceptChLifetime { seconds: 86400 }.to_string(), "86400");
    }

    #[test]
    fn dpr() {
        assert_eq!(Dpr { ratio: 1.0 }.to_string(), "1");
        assert_eq!(Dpr { ratio: 2.5 }.to_string(), "2.5");
    }

    #[test]
    fn device_memory() {
        assert_eq!(DeviceMemory { gib: 0.25 }.to_string(), "0.25");
        assert_eq!(DeviceMemory { gib: 8.0 }.to_string(), "8");
    }

    #[test]
    fn widths() {
        assert_eq!(ViewportWidth { width: 320 }.to_string(), "320");
        assert_eq!(Width { width: 1280 }.to_string(), "1280");
    }

    #[test]
    fn save_data() {
        assert_eq!(SaveData { on: true }.to_string(), "on");
        assert_eq!(SaveData::default().to_string(), "off");
    }
}
