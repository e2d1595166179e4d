use std::borrow::Cow;

use crate::grammar::{valid_cookie_domain, valid_cookie_path_byte, valid_cookie_value_byte};

/// Replace line breaks in a cookie name, so it can't break out of the header.
pub(crate) fn sanitize_name(n: &str) -> Cow<'_, str> {
    if n.contains(&['\r', '\n'][..]) {
        Cow::Owned(n.replace(&['\r', '\n'][..], "-"))
    } else {
        Cow::Borrowed(n)
    }
}

/// Produce a suitable cookie-value from `v`.
///
/// The value is quoted if it contains space or comma, or if it was quoted
/// when parsed.
pub(crate) fn sanitize_value(v: &str, quoted: bool) -> Cow<'_, str> {
    let v = sanitize_or_warn("Cookie.Value", valid_cookie_value_byte, v);

    if v.is_empty() {
        return v;
    }

    if quoted || v.contains(&[' ', ','][..]) {
        return Cow::Owned(format!("\"{}\"", v));
    }

    v
}

pub(crate) fn sanitize_path(v: &str) -> Cow<'_, str> {
    sanitize_or_warn("Cookie.Path", valid_cookie_path_byte, v)
}

/// Domain value to emit, without leading dot. `None` if unusable.
pub(crate) fn sanitize_domain(v: &str) -> Option<Cow<'_, str>> {
    let d = sanitize_or_warn("Cookie.Domain", valid_cookie_path_byte, v);

    if !valid_cookie_domain(&d) {
        warn!("Invalid Cookie.Domain {:?}; dropping domain attribute", v);
        return None;
    }

    Some(match d {
        Cow::Borrowed(b) => Cow::Borrowed(b.strip_prefix('.').unwrap_or(b)),
        Cow::Owned(o) => match o.strip_prefix('.') {
            Some(s) => Cow::Owned(s.to_string()),
            None => Cow::Owned(o),
        },
    })
}

/// Keep `v` as is if all bytes are valid, otherwise copy only the valid
/// bytes and log a warning.
pub(crate) fn sanitize_or_warn<'a>(
    field: &str,
    valid: fn(u8) -> bool,
    v: &'a str,
) -> Cow<'a, str> {
    let Some(bad) = v.bytes().find(|b| !valid(*b)) else {
        return Cow::Borrowed(v);
    };

    warn!(
        "Invalid byte {:?} in {}; dropping invalid bytes",
        bad as char, field
    );

    // Valid bytes are all ASCII, so this can't split a char.
    let kept: String = v
        .bytes()
        .filter(|b| valid(*b))
        .map(|b| b as char)
        .collect();

    Cow::Owned(kept)
}
