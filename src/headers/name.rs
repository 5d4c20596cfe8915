use bytes::Bytes;

use crate::headers::matches;
use crate::headers::error::HeaderError;

/// HTTP Header name.
///
/// # Case Normalization
///
/// Input is normalized to lowercase at construction time. [`from_static`][HeaderName::from_static]
/// will panic at compile time when name contains uppercase character.
///
/// Normalization requires copying the bytes. If the input is known to not contains uppercase
/// character, use [`from_bytes_lowercase`][HeaderName::from_bytes_lowercase] that does not incur
/// copy but returns error instead.
//
// HeaderName is optimized towards predefined standard headers
//
// predefined headers skip validation and avoid allocation entirely
// while arbitrary headers must pass validation
#[derive(Clone)]
pub struct HeaderName {
    repr: Repr,
}

#[derive(Clone)]
enum Repr {
    Static(&'static str),
    /// is valid lowercase ASCII
    Arbitrary(Bytes),
}

impl HeaderName {
    /// Parse header name from static bytes.
    ///
    /// The input must not contains ASCII uppercase characters.
    ///
    /// # Panics
    ///
    /// Panics if the input is not a valid header name or contains ASCII uppercase characters.
    #[inline]
    pub const fn from_static(bytes: &'static [u8]) -> Self {
        match validate_header_name_lowercase(bytes) {
            Ok(()) => Self {
                repr: Repr::Arbitrary(Bytes::from_static(bytes)),
            },
            Err(err) => err.panic_const(),
        }
    }

    /// Parse header name from [`Bytes`].
    ///
    /// The input must not contains ASCII uppercase characters.
    ///
    /// For more flexible API use [`HeaderName::from_slice`].
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name or contains ASCII uppercase
    /// characters.
    #[inline]
    pub fn from_bytes_lowercase<B: Into<Bytes>>(name: B) -> Result<Self, HeaderError> {
        let name = name.into();
        match validate_header_name_lowercase(&name) {
            Ok(()) => Ok(Self {
                repr: Repr::Arbitrary(name),
            }),
            Err(err) => Err(err),
        }
    }

    /// Parse header name by copying from slice of bytes.
    ///
    /// Input name is normalized to lowercase.
    ///
    /// # Errors
    ///
    /// Returns error if the input is not a valid header name.
    #[inline]
    pub fn from_slice<A: AsRef<[u8]>>(name: A) -> Result<Self, HeaderError> {
        let bytes = name.as_ref();
        if matches!(bytes.len(), 1..=MAX_HEADER_NAME_LEN) {
            copy_to_header_name(bytes)
        } else {
            Err(HeaderError::invalid_len(bytes.len()))
        }
    }

    /// Extracts a string slice of the header name.
    ///
    /// The returned string will always in ASCII lowercase.
    #[inline]
    pub fn as_str(&self) -> &str {
        match &self.repr {
            Repr::Static(s) => s,
            // SAFETY: arbitrary repr is validated lowercase ASCII
            Repr::Arbitrary(bytes) => unsafe { str::from_utf8_unchecked(bytes) },
        }
    }

    /// Checks that two header name are an ASCII case-insensitive match.
    ///
    /// Header names are case-insensitive.
    #[inline]
    pub fn eq_ignore_ascii_case(&self, name: &str) -> bool {
        self.as_str().eq_ignore_ascii_case(name)
    }

    pub(crate) const fn validate_lowercase(s: &[u8]) {
        if let Err(err) = validate_header_name_lowercase(s) {
            err.panic_const();
        }
    }
}

// ===== Parser =====

const MAX_HEADER_NAME_LEN: usize = 1024;  // 1KB

/// token       = 1*tchar
/// field-name  = token
const fn validate_header_name_lowercase(mut bytes: &[u8]) -> Result<(), HeaderError> {
    use HeaderError as E;

    if !matches!(bytes.len(), 1..=MAX_HEADER_NAME_LEN) {
        return Err(E::invalid_len(bytes.len()));
    }

    while let [byte, rest @ ..] = bytes {
        if matches::is_token_lowercase(*byte) {
            bytes = rest;
        } else {
            return Err(E::Invalid)
        }
    }

    Ok(())
}

fn copy_to_header_name(bytes: &[u8]) -> Result<HeaderName, HeaderError> {
    use HeaderError as E;

    let mut name = vec![0; bytes.len()];

    for (output, input) in name.iter_mut().zip(bytes) {
        *output = matches::HEADER_NAME[*input as usize];

        // Any invalid character will have it MSB set
        if *output & 128 == 128 {
            return Err(E::Invalid);
        }
    }

    Ok(HeaderName {
        repr: Repr::Arbitrary(name.into()),
    })
}

// ===== Traits =====

impl std::fmt::Display for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        str::fmt(self.as_str(), f)
    }
}

impl std::fmt::Debug for HeaderName {
    #[inline]
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_tuple("HeaderName").field(&self.as_str()).finish()
    }
}

impl std::hash::Hash for HeaderName {
    #[inline]
    fn hash<H: std::hash::Hasher>(&self, state: &mut H) {
        state.write(self.as_str().as_bytes());
    }
}

impl PartialEq for HeaderName {
    fn eq(&self, other: &Self) -> bool {
        // HeaderName is guaranteed to have ascii lowercase value,
        // therefore it is correct for case-insensitive eq
        self.as_str() == other.as_str()
    }
}

// ===== Standard Headers =====

// https://developer.mozilla.org/en-US/docs/Web/HTTP/Reference/Headers

standard_header! {
    /// HTTP Standard Headers
    mod standard;

    // ===== Authentication =====

    /// Defines the authentication method that should be used to access a resource.
    pub const WWW_AUTHENTICATE: HeaderName = "www-authenticate";

    /// Contains the credentials to authenticate a user-agent with a server.
    pub const AUTHORIZATION: HeaderName = "authorization";

    /// Defines the authentication method that should be used to access a resource behind a proxy
    /// server.
    pub const PROXY_AUTHENTICATE: HeaderName = "proxy-authenticate";

    /// Contains the credentials to authenticate a user agent with a proxy server.
    pub const PROXY_AUTHORIZATION: HeaderName = "proxy-authorization";

    // ===== Caching =====

    /// The time, in seconds, that the object has been in a proxy cache.
    pub const AGE: HeaderName = "age";

    /// Directives for caching mechanisms in both requests and responses.
    pub const CACHE_CONTROL: HeaderName = "cache-control";

    /// Clears browsing data (e.g., cookies, storage, cache) associated with the requesting website.
    pub const CLEAR_SITE_DATA: HeaderName = "clear-site-data";

    /// The date/time after which the response is considered stale.
    pub const EXPIRES: HeaderName = "expires";

    /// Implementation-specific caching directive, kept for HTTP/1.0 backward compatibility.
    pub const PRAGMA: HeaderName = "pragma";

    /// General warning information about possible problems with the message.
    pub const WARNING: HeaderName = "warning";

    // ===== Client hints =====

    /// Set by the server to advertise which client hint headers the client should include in
    /// subsequent requests.
    pub const ACCEPT_CH: HeaderName = "accept-ch";

    /// Set by the server to specify for how long the `accept-ch` preference should persist.
    pub const ACCEPT_CH_LIFETIME: HeaderName = "accept-ch-lifetime";

    /// The image device pixel ratio the server actually selected for the response.
    pub const CONTENT_DPR: HeaderName = "content-dpr";

    /// Approximate amount of available RAM on the client device, in gibibytes.
    pub const DEVICE_MEMORY: HeaderName = "device-memory";

    /// The client device pixel ratio, physical pixels per CSS pixel.
    pub const DPR: HeaderName = "dpr";

    /// Approximate bandwidth of the client connection, in Mbps.
    pub const DOWNLINK: HeaderName = "downlink";

    /// The effective connection type, e.g. `4g`, best matching the measured network quality.
    pub const ECT: HeaderName = "ect";

    /// Indicates that the request has been conveyed in TLS early data.
    pub const EARLY_DATA: HeaderName = "early-data";

    /// Application round trip time estimate of the client connection, in milliseconds.
    pub const RTT: HeaderName = "rtt";

    /// The client preference for reduced data usage.
    pub const SAVE_DATA: HeaderName = "save-data";

    /// The layout viewport width of the client, in CSS pixels.
    pub const VIEWPORT_WIDTH: HeaderName = "viewport-width";

    /// The desired resource width in physical pixels.
    pub const WIDTH: HeaderName = "width";

    // ===== Conditionals =====

    /// The last modification date of the resource, used to compare several versions of the same
    /// resource. It is less accurate than ETag, but easier to calculate in some environments.
    /// Conditional requests using If-Modified-Since and If-Unmodified-Since use this value to
    /// change the behavior of the request.
    pub const LAST_MODIFIED: HeaderName = "last-modified";

    /// A unique string identifying the version of the resource. Conditional requests using
    /// If-Match and If-None-Match use this value to change the behavior of the request.
    pub const ETAG: HeaderName = "etag";

    /// Makes the request conditional, and applies the method only if the stored resource matches
    /// one of the given ETags.
    pub const IF_MATCH: HeaderName = "if-match";

    /// Makes the request conditional, and applies the method only if the stored resource doesn't
    /// match any of the given ETags.
    pub const IF_NONE_MATCH: HeaderName = "if-none-match";

    /// Makes the request conditional, and expects the resource to be transmitted only if it has
    /// been modified after the given date.
    pub const IF_MODIFIED_SINCE: HeaderName = "if-modified-since";

    /// Makes the request conditional, and expects the resource to be transmitted only if it has
    /// not been modified after the given date.
    pub const IF_UNMODIFIED_SINCE: HeaderName = "if-unmodified-since";

    /// Determines how to match request headers to decide whether a cached response can be used
    /// rather than requesting a fresh one from the origin server.
    pub const VARY: HeaderName = "vary";

    // ===== Connection management =====

    /// Controls whether the network connection stays open after the current transaction finishes.
    pub const CONNECTION: HeaderName = "connection";

    /// Controls how long a persistent connection should stay open.
    pub const KEEP_ALIVE: HeaderName = "keep-alive";

    // ===== Content negotiation =====
    // more details on [mdn]<https://developer.mozilla.org/en-US/docs/Web/HTTP/Guides/Content_negotiation>

    /// Informs the server about the types of data that can be sent back.
    pub const ACCEPT: HeaderName = "accept";

    /// Advertises the sender preferences for charsets in textual response content.
    pub const ACCEPT_CHARSET: HeaderName = "accept-charset";

    /// The encoding algorithm, usually a compression algorithm, that can be used on the resource
    /// sent back.
    pub const ACCEPT_ENCODING: HeaderName = "accept-encoding";

    /// Informs the server about the human language the server is expected to send back.
    pub const ACCEPT_LANGUAGE: HeaderName = "accept-language";

    /// Advertises which media type the server is able to understand in a PATCH request.
    pub const ACCEPT_PATCH: HeaderName = "accept-patch";

    /// Advertises which media type the server is able to understand in a POST request.
    pub const ACCEPT_POST: HeaderName = "accept-post";

    // ===== Controls =====

    /// Indicates expectations that need to be fulfilled by the server to properly handle the
    /// request.
    pub const EXPECT: HeaderName = "expect";

    /// When using TRACE, indicates the maximum number of hops the request can do before being
    /// reflected to the sender.
    pub const MAX_FORWARDS: HeaderName = "max-forwards";

    // ===== Cookies =====

    /// Contains stored HTTP cookies previously sent by the server with the Set-Cookie header.
    pub const COOKIE: HeaderName = "cookie";

    /// Send cookies from the server to the user-agent.
    pub const SET_COOKIE: HeaderName = "set-cookie";

    // ===== CORS =====

    /// Indicates whether the response to the request can be exposed when the credentials flag is
    /// true.
    pub const ACCESS_CONTROL_ALLOW_CREDENTIALS: HeaderName = "access-control-allow-credentials";

    /// Used in response to a preflight request to indicate which HTTP headers can be used when
    /// making the actual request.
    pub const ACCESS_CONTROL_ALLOW_HEADERS: HeaderName = "access-control-allow-headers";

    /// Specifies the methods allowed when accessing the resource in response to a preflight
    /// request.
    pub const ACCESS_CONTROL_ALLOW_METHODS: HeaderName = "access-control-allow-methods";

    /// Indicates whether the response can be shared.
    pub const ACCESS_CONTROL_ALLOW_ORIGIN: HeaderName = "access-control-allow-origin";

    /// Indicates which headers can be exposed as part of the response by listing their names.
    pub const ACCESS_CONTROL_EXPOSE_HEADERS: HeaderName = "access-control-expose-headers";

    /// Indicates how long the results of a preflight request can be cached.
    pub const ACCESS_CONTROL_MAX_AGE: HeaderName = "access-control-max-age";

    /// Used when issuing a preflight request to let the server know which HTTP headers will be
    /// used when the actual request is made.
    pub const ACCESS_CONTROL_REQUEST_HEADERS: HeaderName = "access-control-request-headers";

    /// Used when issuing a preflight request to let the server know which HTTP method will be used
    /// when the actual request is made.
    pub const ACCESS_CONTROL_REQUEST_METHOD: HeaderName = "access-control-request-method";

    /// Indicates where a fetch originates from.
    pub const ORIGIN: HeaderName = "origin";

    /// Specifies origins that are allowed to see values of attributes retrieved via features of
    /// the Resource Timing API.
    pub const TIMING_ALLOW_ORIGIN: HeaderName = "timing-allow-origin";

    // ===== Downloads =====

    /// Indicates if the resource transmitted should be displayed inline (default behavior without
    /// the header), or if it should be handled like a download and the browser should present a
    /// "Save As" dialog.
    pub const CONTENT_DISPOSITION: HeaderName = "content-disposition";

    // ===== Message body information =====

    /// The size of the resource, in decimal number of bytes.
    pub const CONTENT_LENGTH: HeaderName = "content-length";

    /// Indicates the media type of the resource.
    pub const CONTENT_TYPE: HeaderName = "content-type";

    /// Used to specify the compression algorithm.
    pub const CONTENT_ENCODING: HeaderName = "content-encoding";

    /// Describes the human language(s) intended for the audience.
    pub const CONTENT_LANGUAGE: HeaderName = "content-language";

    /// Indicates an alternate location for the returned data.
    pub const CONTENT_LOCATION: HeaderName = "content-location";

    // ===== Proxies =====

    /// Contains information from the client-facing side of proxy servers that is altered or lost
    /// when a proxy is involved in the path of the request.
    pub const FORWARDED: HeaderName = "forwarded";

    /// Added by proxies, both forward and reverse proxies, and can appear in the request headers
    /// and the response headers.
    pub const VIA: HeaderName = "via";

    /// De-facto header identifying the originating client addresses behind a proxy.
    pub const X_FORWARDED_FOR: HeaderName = "x-forwarded-for";

    /// De-facto header identifying the original host requested by the client.
    pub const X_FORWARDED_HOST: HeaderName = "x-forwarded-host";

    /// De-facto header identifying the protocol the client used to connect to the proxy.
    pub const X_FORWARDED_PROTO: HeaderName = "x-forwarded-proto";

    // ===== Range requests =====

    /// Indicates if the server supports range requests, and if so in which unit the range can be
    /// expressed.
    pub const ACCEPT_RANGES: HeaderName = "accept-ranges";

    /// Indicates the part of a document that the server should return.
    pub const RANGE: HeaderName = "range";

    /// Creates a conditional range request that is only fulfilled if the given etag or date
    /// matches the remote resource.
    pub const IF_RANGE: HeaderName = "if-range";

    /// Indicates where in a full body message a partial message belongs.
    pub const CONTENT_RANGE: HeaderName = "content-range";

    // ===== Redirects =====

    /// Indicates the URL to redirect a page to.
    pub const LOCATION: HeaderName = "location";

    /// Directs the browser to reload the page or redirect to another.
    pub const REFRESH: HeaderName = "refresh";

    // ===== Web Linking =====

    /// Provides a means for serializing one or more links in HTTP headers.
    pub const LINK: HeaderName = "link";

    // ===== Request context =====

    /// Contains an Internet email address for a human user who controls the requesting user agent.
    pub const FROM: HeaderName = "from";

    /// Specifies the domain name of the server (for virtual hosting), and (optionally) the TCP
    /// port number on which the server is listening.
    pub const HOST: HeaderName = "host";

    /// The address of the previous web page from which a link to the currently requested page was
    /// followed.
    pub const REFERER: HeaderName = "referer";

    /// Governs which referrer information sent in the Referer header should be included with
    /// requests made.
    pub const REFERRER_POLICY: HeaderName = "referrer-policy";

    /// Contains a characteristic string that allows the network protocol peers to identify the
    /// application type, operating system, software vendor or software version of the requesting
    /// software user agent.
    pub const USER_AGENT: HeaderName = "user-agent";

    // ===== Response context =====

    /// Lists the set of HTTP request methods supported by a resource.
    pub const ALLOW: HeaderName = "allow";

    /// Contains information about the software used by the origin server to handle the request.
    pub const SERVER: HeaderName = "server";

    // ===== Security =====

    /// Allows a server to declare an embedder policy for a given document.
    pub const CROSS_ORIGIN_EMBEDDER_POLICY: HeaderName = "cross-origin-embedder-policy";

    /// Prevents other domains from opening/controlling a window.
    pub const CROSS_ORIGIN_OPENER_POLICY: HeaderName = "cross-origin-opener-policy";

    /// Prevents other domains from reading the response of the resources to which this header is
    /// applied.
    pub const CROSS_ORIGIN_RESOURCE_POLICY: HeaderName = "cross-origin-resource-policy";

    /// Controls resources the user agent is allowed to load for a given page.
    pub const CONTENT_SECURITY_POLICY: HeaderName = "content-security-policy";

    /// Allows web developers to experiment with policies by monitoring, but not enforcing, their
    /// effects.
    pub const CONTENT_SECURITY_POLICY_REPORT_ONLY: HeaderName = "content-security-policy-report-only";

    /// Allows sites to opt in to reporting or enforcement of Certificate Transparency
    /// requirements.
    pub const EXPECT_CT: HeaderName = "expect-ct";

    /// Provides a mechanism to allow and deny the use of browser features in a document and in
    /// the frames it embeds.
    pub const FEATURE_POLICY: HeaderName = "feature-policy";

    /// Successor of `feature-policy`, same mechanism under a structured-field syntax.
    pub const PERMISSIONS_POLICY: HeaderName = "permissions-policy";

    /// Force communication using HTTPS instead of HTTP.
    pub const STRICT_TRANSPORT_SECURITY: HeaderName = "strict-transport-security";

    /// Sends a signal to the server expressing the client's preference for an encrypted and
    /// authenticated response.
    pub const UPGRADE_INSECURE_REQUESTS: HeaderName = "upgrade-insecure-requests";

    /// Hints the browser that an upcoming allocation will be large, so a fresh process may be
    /// spawned for it.
    pub const LARGE_ALLOCATION: HeaderName = "large-allocation";

    /// Disables MIME sniffing and forces browser to use the type given in Content-Type.
    pub const X_CONTENT_TYPE_OPTIONS: HeaderName = "x-content-type-options";

    /// Controls DNS prefetching of links within the document.
    pub const X_DNS_PREFETCH_CONTROL: HeaderName = "x-dns-prefetch-control";

    /// Indicates whether a browser should be allowed to render a page in a `<frame>`, `<iframe>`,
    /// `<embed>` or `<object>`.
    pub const X_FRAME_OPTIONS: HeaderName = "x-frame-options";

    /// Overrides cross-domain policy files so that clients still block unwanted requests.
    pub const X_PERMITTED_CROSS_DOMAIN_POLICIES: HeaderName = "x-permitted-cross-domain-policies";

    /// May be set by hosting environments or other frameworks and contains information about them.
    /// Unset this header to avoid exposing potential vulnerabilities.
    pub const X_POWERED_BY: HeaderName = "x-powered-by";

    /// Enables cross-site scripting filtering.
    pub const X_XSS_PROTECTION: HeaderName = "x-xss-protection";

    // ===== Fetch metadata request headers =====

    /// Indicates the relationship between a request initiator's origin and its target's origin.
    pub const SEC_FETCH_SITE: HeaderName = "sec-fetch-site";

    /// Indicates the request's mode to a server, e.g. `cors` or `navigate`.
    pub const SEC_FETCH_MODE: HeaderName = "sec-fetch-mode";

    /// Indicates whether or not a navigation request was triggered by user activation.
    pub const SEC_FETCH_USER: HeaderName = "sec-fetch-user";

    /// Indicates the request's destination, e.g. `document` or `image`.
    pub const SEC_FETCH_DEST: HeaderName = "sec-fetch-dest";

    // ===== Transfer coding =====

    /// Specifies the form of encoding used to safely transfer the resource to the user.
    pub const TRANSFER_ENCODING: HeaderName = "transfer-encoding";

    /// Specifies the transfer encodings the user agent is willing to accept.
    pub const TE: HeaderName = "te";

    /// Allows the sender to include additional fields at the end of chunked message.
    pub const TRAILER: HeaderName = "trailer";

    // ===== WebSockets =====

    /// Response header that indicates that the server is willing to upgrade to a WebSocket
    /// connection.
    pub const SEC_WEBSOCKET_ACCEPT: HeaderName = "sec-websocket-accept";

    /// Indicates the WebSocket extensions supported by the client, or selected by the server.
    pub const SEC_WEBSOCKET_EXTENSIONS: HeaderName = "sec-websocket-extensions";

    /// Request header containing a key that verifies that the client explicitly intends to open a
    /// WebSocket.
    pub const SEC_WEBSOCKET_KEY: HeaderName = "sec-websocket-key";

    /// Indicates the sub-protocols supported by the client, or selected by the server.
    pub const SEC_WEBSOCKET_PROTOCOL: HeaderName = "sec-websocket-protocol";

    /// Indicates the version of the WebSocket protocol used by the client.
    pub const SEC_WEBSOCKET_VERSION: HeaderName = "sec-websocket-version";

    // ===== Other =====

    /// Contains the date and time at which the message was originated.
    pub const DATE: HeaderName = "date";

    /// Expresses the user tracking preference (Do Not Track).
    pub const DNT: HeaderName = "dnt";

    /// Indicates the tracking status that applied to the corresponding request.
    pub const TK: HeaderName = "tk";

    /// Indicates how long the user agent should wait before making a follow-up request.
    pub const RETRY_AFTER: HeaderName = "retry-after";

    /// Communicates one or more metrics and descriptions for the given request-response cycle.
    pub const SERVER_TIMING: HeaderName = "server-timing";

    /// Links to a source map so that debuggers can step through original source code instead of
    /// generated or transformed code.
    pub const SOURCEMAP: HeaderName = "sourcemap";

    /// This HTTP/1.1 (only) header can be used to upgrade an already established client/server
    /// connection to a different protocol (over the same transport protocol).
    pub const UPGRADE: HeaderName = "upgrade";
}

// ===== Macros =====

macro_rules! standard_header {
    (
        $(#[$mod_doc:meta])*
        mod $mod_name:ident;

        $(
            $(#[$doc:meta])*
            $vis:vis const $id:ident: $t:ty = $name:literal;
        )*
    ) => {
        $(#[$mod_doc])*
        pub mod $mod_name {
            use super::*;
            $(
                $(#[$doc])*
                $vis const $id: $t = {
                    HeaderName::validate_lowercase($name.as_bytes());
                    HeaderName { repr: Repr::Static($name) }
                };
            )*
        }
    };
}

use standard_header;
