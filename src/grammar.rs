//! Character classes and validators from RFC 6265 and RFC 7230.
//!
//! ```text
//! token          = 1*tchar
//! tchar          = "!" / "#" / "$" / "%" / "&" / "'" / "*"
//!                / "+" / "-" / "." / "^" / "_" / "`" / "|" / "~"
//!                / DIGIT / ALPHA
//!
//! cookie-octet   = %x21 / %x23-2B / %x2D-3A / %x3C-5B / %x5D-7E
//! path-value     = <any CHAR except CTLs or ";">
//! ```

use std::net::IpAddr;

static TOKEN: [bool; 128] = token_table();

const fn token_table() -> [bool; 128] {
    let mut t = [false; 128];
    let mut c = b'0';
    while c <= b'9' {
        t[c as usize] = true;
        c += 1;
    }
    c = b'a';
    while c <= b'z' {
        t[c as usize] = true;
        t[(c - 32) as usize] = true;
        c += 1;
    }
    let extra = b"!#$%&'*+-.^_`|~";
    let mut i = 0;
    while i < extra.len() {
        t[extra[i] as usize] = true;
        i += 1;
    }
    t
}

pub(crate) fn is_token_byte(b: u8) -> bool {
    (b as usize) < TOKEN.len() && TOKEN[b as usize]
}

/// Whether `name` is a non-empty token and thus usable as a cookie name.
pub fn is_cookie_name_valid(name: &str) -> bool {
    !name.is_empty() && name.bytes().all(is_token_byte)
}

/// Bytes accepted in a cookie value.
///
/// Wider than the RFC cookie-octet: space and comma are common in the wild,
/// values holding them are quoted on output.
pub(crate) fn valid_cookie_value_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b'"' && b != b';' && b != b'\\'
}

pub(crate) fn valid_cookie_path_byte(b: u8) -> bool {
    (0x20..0x7f).contains(&b) && b != b';'
}

/// Reports whether `v` is usable as the value of a `Domain` attribute.
///
/// Either a cookie domain name, see [`is_cookie_domain_name`], or an IP
/// address literal without zone or port.
pub fn valid_cookie_domain(v: &str) -> bool {
    is_cookie_domain_name(v) || v.parse::<IpAddr>().is_ok()
}

/// Reports whether `s` is a domain name, optionally with a leading dot.
///
/// Labels are letters, digits and hyphens of 1-63 bytes. No `_` unlike
/// plain DNS names, and at least one letter must be present so that
/// dotted numbers are not mistaken for names.
pub fn is_cookie_domain_name(s: &str) -> bool {
    if s.is_empty() || s.len() > 255 {
        return false;
    }

    let s = s.strip_prefix('.').unwrap_or(s);

    let mut last = b'.';
    let mut seen_letter = false;
    let mut label_len = 0;

    for c in s.bytes() {
        match c {
            b'a'..=b'z' | b'A'..=b'Z' => {
                seen_letter = true;
                label_len += 1;
            }
            b'0'..=b'9' => {
                label_len += 1;
            }
            b'-' => {
                // Byte before dash cannot be dot.
                if last == b'.' {
                    return false;
                }
                label_len += 1;
            }
            b'.' => {
                // Byte before dot cannot be dot or dash.
                if last == b'.' || last == b'-' {
                    return false;
                }
                if label_len > 63 || label_len == 0 {
                    return false;
                }
                label_len = 0;
            }
            _ => return false,
        }
        last = c;
    }

    if last == b'-' || label_len > 63 {
        return false;
    }

    seen_letter
}

#[cfg(test)]
mod test {
    use super::*;

    #[test]
    fn cookie_names() {
        assert!(is_cookie_name_valid("session_id"));
        assert!(is_cookie_name_valid("X-Auth.1"));
        assert!(is_cookie_name_valid("!#$%&'*+-.^_`|~"));

        assert!(!is_cookie_name_valid(""));
        assert!(!is_cookie_name_valid("a=b"));
        assert!(!is_cookie_name_valid("a;b"));
        assert!(!is_cookie_name_valid("a b"));
        assert!(!is_cookie_name_valid("a\tb"));
        assert!(!is_cookie_name_valid("\"a\""));
        assert!(!is_cookie_name_valid("a\r\n"));
        assert!(!is_cookie_name_valid("nåme"));
    }

    #[test]
    fn value_bytes() {
        assert!(valid_cookie_value_byte(b' '));
        assert!(valid_cookie_value_byte(b','));
        assert!(valid_cookie_value_byte(b'~'));
        assert!(!valid_cookie_value_byte(b'"'));
        assert!(!valid_cookie_value_byte(b';'));
        assert!(!valid_cookie_value_byte(b'\\'));
        assert!(!valid_cookie_value_byte(0x7f));
        assert!(!valid_cookie_value_byte(b'\n'));
    }

    #[test]
    fn path_bytes() {
        assert!(valid_cookie_path_byte(b'/'));
        assert!(valid_cookie_path_byte(b'"'));
        assert!(!valid_cookie_path_byte(b';'));
        assert!(!valid_cookie_path_byte(b'\r'));
    }

    #[test]
    fn domain_names() {
        assert!(is_cookie_domain_name("example.com"));
        assert!(is_cookie_domain_name(".example.com"));
        assert!(is_cookie_domain_name("a-b.c0.example"));
        assert!(is_cookie_domain_name("localhost"));

        assert!(!is_cookie_domain_name(""));
        assert!(!is_cookie_domain_name("."));
        assert!(!is_cookie_domain_name("evil..com"));
        assert!(!is_cookie_domain_name("-a.com"));
        assert!(!is_cookie_domain_name("a.-b.com"));
        assert!(!is_cookie_domain_name("a-.com"));
        assert!(!is_cookie_domain_name("a.com-"));
        assert!(!is_cookie_domain_name("under_score.com"));
        assert!(!is_cookie_domain_name("127.0.0.1"));
        assert!(!is_cookie_domain_name(&format!("{}.com", "a".repeat(64))));
        assert!(is_cookie_domain_name(&format!("{}.com", "a".repeat(63))));
        assert!(!is_cookie_domain_name(&"a.".repeat(128)));
    }

    #[test]
    fn domain_values() {
        assert!(valid_cookie_domain("example.com"));
        assert!(valid_cookie_domain("127.0.0.1"));
        assert!(valid_cookie_domain("::1"));
        assert!(valid_cookie_domain("2001:db8::68"));

        assert!(!valid_cookie_domain("127.0.0.1:8080"));
        assert!(!valid_cookie_domain("fe80::1%eth0"));
        assert!(!valid_cookie_domain("[::1]"));
        assert!(!valid_cookie_domain("evil..com"));
    }
}
