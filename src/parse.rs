//! Reading `Cookie` and `Set-Cookie` header values.
//!
//! The request side is lenient: a malformed `name=value` pair is skipped and
//! the rest of the line is still used. `Set-Cookie` parsing fails on a bad
//! `name=value` but tolerates bad attributes, which end up in
//! [`Cookie::unparsed`].

use crate::cookie::{Cookie, SameSite};
use crate::date::parse_expires;
use crate::grammar::{is_cookie_name_valid, valid_cookie_domain, valid_cookie_value_byte};
use crate::util::{compare_lowercase_ascii, trim_ascii_space};
use crate::Error;

/// Parse the value of a request `Cookie` header.
///
/// Pairs that are malformed are left out. If `filter` is given, only cookies
/// with exactly that name are returned. Duplicate names are all kept, in the
/// order they appear.
///
/// ```
/// let cookies = hootcookie::parse_request_cookies("a=1; bad name=2; b=\"3\"", None);
///
/// assert_eq!(cookies.len(), 2);
/// assert_eq!(cookies[1].name, "b");
/// assert_eq!(cookies[1].value, "3");
/// assert!(cookies[1].quoted);
/// ```
pub fn parse_request_cookies(line: &str, filter: Option<&str>) -> Vec<Cookie> {
    let mut cookies = Vec::new();
    read_request_line(line, filter, &mut cookies);
    cookies
}

/// Parse several `Cookie` header values, as [`parse_request_cookies`] does
/// for one.
pub fn read_cookies<'a, I>(lines: I, filter: Option<&str>) -> Vec<Cookie>
where
    I: IntoIterator<Item = &'a str>,
{
    let mut cookies = Vec::new();
    for line in lines {
        read_request_line(line, filter, &mut cookies);
    }
    cookies
}

fn read_request_line(line: &str, filter: Option<&str>, cookies: &mut Vec<Cookie>) {
    for part in trim_ascii_space(line).split(';') {
        let part = trim_ascii_space(part);
        if part.is_empty() {
            continue;
        }

        let Some((name, val)) = part.split_once('=') else {
            debug!("Skip cookie without '=': {:?}", part);
            continue;
        };

        let name = trim_ascii_space(name);
        if !is_cookie_name_valid(name) {
            debug!("Skip cookie with invalid name: {:?}", name);
            continue;
        }

        if let Some(filter) = filter {
            if filter != name {
                continue;
            }
        }

        let Some((value, quoted)) = parse_cookie_value(val, true) else {
            debug!("Skip cookie with invalid value: {}", name);
            continue;
        };

        cookies.push(Cookie {
            name: name.to_string(),
            value: value.to_string(),
            quoted,
            ..Default::default()
        });
    }
}

/// Parse the value of a `Cookie` header, failing on the first bad pair.
///
/// Only a blank line is [`Error::BlankCookie`]. An empty pair inside the
/// line, like the trailing one in `a=1;`, has no `=` and is
/// [`Error::MissingSeparator`].
///
/// See [`parse_request_cookies`] for the lenient version.
pub fn parse_cookie(line: &str) -> Result<Vec<Cookie>, Error> {
    let line = trim_ascii_space(line);
    if line.is_empty() {
        return Err(Error::BlankCookie);
    }

    line.split(';')
        .map(|part| {
            if trim_ascii_space(part).is_empty() {
                return Err(Error::MissingSeparator);
            }
            let (name, value, quoted) = parse_name_value(part)?;
            Ok(Cookie {
                name: name.to_string(),
                value: value.to_string(),
                quoted,
                ..Default::default()
            })
        })
        .collect()
}

/// Parse the value of a `Set-Cookie` header.
///
/// ```
/// use hootcookie::{parse_set_cookie, SameSite};
///
/// let c = parse_set_cookie("id=a3fWa; Max-Age=2592000; Secure; SameSite=Lax").unwrap();
///
/// assert_eq!(c.name, "id");
/// assert_eq!(c.max_age, 2592000);
/// assert!(c.secure);
/// assert_eq!(c.same_site, SameSite::Lax);
/// ```
pub fn parse_set_cookie(line: &str) -> Result<Cookie, Error> {
    let mut parts = trim_ascii_space(line).split(';');

    // split always yields at least one item.
    let first = parts.next().unwrap_or_default();
    let (name, value, quoted) = parse_name_value(first)?;

    let mut c = Cookie {
        name: name.to_string(),
        value: value.to_string(),
        quoted,
        raw: Some(line.to_string()),
        ..Default::default()
    };

    for part in parts {
        let part = trim_ascii_space(part);
        if part.is_empty() {
            continue;
        }

        let (attr, val) = part.split_once('=').unwrap_or((part, ""));
        if !attr.is_ascii() {
            continue;
        }

        let Some((val, _)) = parse_cookie_value(val, false) else {
            c.unparsed.push(part.to_string());
            continue;
        };

        if !apply_attribute(&mut c, attr, val) {
            c.unparsed.push(part.to_string());
        }
    }

    Ok(c)
}

/// Parse several `Set-Cookie` header values, keeping those that parse.
pub fn read_set_cookies<'a, I>(lines: I) -> Vec<Cookie>
where
    I: IntoIterator<Item = &'a str>,
{
    lines
        .into_iter()
        .filter_map(|line| match parse_set_cookie(line) {
            Ok(c) => Some(c),
            Err(e) => {
                debug!("Skip Set-Cookie {:?}: {}", line, e);
                None
            }
        })
        .collect()
}

/// Returns false if the attribute is unknown or its value unusable.
fn apply_attribute(c: &mut Cookie, attr: &str, val: &str) -> bool {
    let is = |lower: &str| compare_lowercase_ascii(attr, lower);

    if is("samesite") {
        c.same_site = if compare_lowercase_ascii(val, "lax") {
            SameSite::Lax
        } else if compare_lowercase_ascii(val, "strict") {
            SameSite::Strict
        } else if compare_lowercase_ascii(val, "none") {
            SameSite::None
        } else {
            trace!("Unknown SameSite: {:?}", val);
            SameSite::Default
        };
    } else if is("secure") {
        c.secure = true;
    } else if is("httponly") {
        c.http_only = true;
    } else if is("partitioned") {
        c.partitioned = true;
    } else if is("path") {
        c.path = Some(val.to_string());
    } else if is("domain") {
        if !valid_cookie_domain(val) {
            debug!("Drop invalid Domain: {:?}", val);
            return false;
        }
        c.domain = Some(val.to_string());
    } else if is("max-age") {
        let Some(secs) = parse_max_age(val) else {
            return false;
        };
        c.max_age = secs;
    } else if is("expires") {
        c.raw_expires = Some(val.to_string());
        let Some(t) = parse_expires(val) else {
            c.expires = None;
            return false;
        };
        c.expires = Some(t);
    } else {
        return false;
    }

    true
}

/// `Max-Age` of zero or less means delete now, normalized to -1.
fn parse_max_age(val: &str) -> Option<i64> {
    let secs: i64 = val.parse().ok()?;

    // A leading zero is only allowed for "0" itself.
    if secs != 0 && val.starts_with('0') {
        return None;
    }

    Some(if secs <= 0 { -1 } else { secs })
}

/// Split and check a `name=value` pair.
fn parse_name_value(part: &str) -> Result<(&str, &str, bool), Error> {
    let part = trim_ascii_space(part);
    if part.is_empty() {
        return Err(Error::BlankCookie);
    }

    let (name, value) = part.split_once('=').ok_or(Error::MissingSeparator)?;

    let name = trim_ascii_space(name);
    if !is_cookie_name_valid(name) {
        return Err(Error::InvalidName);
    }

    let (value, quoted) = parse_cookie_value(value, true).ok_or(Error::InvalidValue)?;

    Ok((name, value, quoted))
}

/// Check a cookie value, optionally stripping surrounding double quotes.
///
/// Returns the value and whether it was quoted, or `None` if it has bytes
/// not allowed in a cookie value.
fn parse_cookie_value(raw: &str, allow_double_quote: bool) -> Option<(&str, bool)> {
    let mut raw = raw;
    let mut quoted = false;

    if allow_double_quote && raw.len() > 1 && raw.starts_with('"') && raw.ends_with('"') {
        raw = &raw[1..raw.len() - 1];
        quoted = true;
    }

    if !raw.bytes().all(valid_cookie_value_byte) {
        return None;
    }

    Some((raw, quoted))
}
