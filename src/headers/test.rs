use crate::headers::{HeaderError, HeaderName, HeaderValue, standard};

const fn is_send_sync<T: Send + Sync>() { }
const _: () = {
    is_send_sync::<HeaderName>();
    is_send_sync::<HeaderValue>();
    is_send_sync::<HeaderError>();
};

#[test]
fn header_name_normalization() {
    let name = HeaderName::from_slice("Content-Type").unwrap();
    assert_eq!(name.as_str(), "content-type");
    assert_eq!(name, standard::CONTENT_TYPE);

    let name = HeaderName::from_slice("X-CUSTOM-HEADER").unwrap();
    assert_eq!(name.as_str(), "x-custom-header");

    assert!(name.eq_ignore_ascii_case("X-Custom-Header"));
}

#[test]
fn header_name_invalid() {
    assert_eq!(HeaderName::from_slice(""), Err(HeaderError::Empty));
    assert_eq!(HeaderName::from_slice("content type"), Err(HeaderError::Invalid));
    assert_eq!(HeaderName::from_slice("content-type:"), Err(HeaderError::Invalid));
    assert_eq!(
        HeaderName::from_bytes_lowercase(&b"Accept"[..]),
        Err(HeaderError::Invalid),
    );
}

#[test]
fn header_name_from_static() {
    const NAME: HeaderName = HeaderName::from_static(b"x-request-id");
    assert_eq!(NAME.as_str(), "x-request-id");
}

#[test]
fn standard_names_are_lowercase() {
    for name in [
        &standard::ACCEPT,
        &standard::ACCEPT_CH,
        &standard::ACCEPT_CH_LIFETIME,
        &standard::CACHE_CONTROL,
        &standard::CONTENT_DISPOSITION,
        &standard::CONTENT_RANGE,
        &standard::CONTENT_TYPE,
        &standard::COOKIE,
        &standard::DEVICE_MEMORY,
        &standard::DPR,
        &standard::ETAG,
        &standard::FEATURE_POLICY,
        &standard::FORWARDED,
        &standard::SET_COOKIE,
        &standard::STRICT_TRANSPORT_SECURITY,
    ] {
        assert!(!name.as_str().bytes().any(|b| b.is_ascii_uppercase()));

        // uppercase input round-trips to the same constant
        let roundtrip = HeaderName::from_slice(name.as_str().to_ascii_uppercase()).unwrap();
        assert_eq!(&roundtrip, name);
    }
}

#[test]
fn header_value() {
    let value = HeaderValue::from_string("image/png;q=0.9");
    assert_eq!(value.as_str(), "image/png;q=0.9");
    assert_eq!(value.as_bytes(), b"image/png;q=0.9");

    let value = HeaderValue::from_u64(31536000);
    assert_eq!(value.as_str(), "31536000");
}

#[test]
fn header_value_invalid() {
    assert_eq!(HeaderValue::from_slice(" leading"), Err(HeaderError::Invalid));
    assert_eq!(HeaderValue::from_slice("trailing "), Err(HeaderError::Invalid));
    assert_eq!(HeaderValue::from_slice("line\r\nfeed"), Err(HeaderError::Invalid));
    assert_eq!(HeaderValue::from_slice(vec![b'x'; 1 << 14]), Err(HeaderError::TooLong));
}

#[test]
fn header_value_from_display() {
    let accept = crate::fields::Accept {
        mime_type: "text".into(),
        mime_subtype: "html".into(),
        q: None,
    };
    let value = HeaderValue::from_display(&accept).unwrap();
    assert_eq!(value.as_str(), "text/html");
}
