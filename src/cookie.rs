use core::fmt;
use core::str::FromStr;

use time::OffsetDateTime;

use crate::date::{format_expires, valid_cookie_expires};
use crate::grammar::{
    is_cookie_name_valid, valid_cookie_domain, valid_cookie_path_byte, valid_cookie_value_byte,
};
use crate::sanitize::{sanitize_domain, sanitize_name, sanitize_path, sanitize_value};
use crate::Error;

/// Cross-site policy for a cookie.
///
/// `Default` means no `SameSite` attribute at all.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum SameSite {
    #[default]
    Default,
    Lax,
    Strict,
    /// Browsers require `Secure` together with this.
    None,
}

/// An HTTP cookie as sent in `Set-Cookie` or `Cookie` headers.
///
/// Fields are public and plain. To change a parsed cookie, build a new one
/// (or mutate a clone) and serialize that.
///
/// ```
/// use hootcookie::{Cookie, SameSite};
///
/// let c = Cookie::new("session", "abc123")
///     .with_path("/")
///     .with_http_only(true)
///     .with_same_site(SameSite::Lax);
///
/// assert_eq!(c.to_string(), "session=abc123; Path=/; HttpOnly; SameSite=Lax");
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Cookie {
    pub name: String,
    pub value: String,
    /// The value was enclosed in double quotes.
    pub quoted: bool,

    pub path: Option<String>,
    pub domain: Option<String>,
    pub expires: Option<OffsetDateTime>,
    /// `Expires` exactly as received.
    pub raw_expires: Option<String>,

    /// 0 means no `Max-Age`. Negative means delete now, i.e. `Max-Age=0`.
    pub max_age: i64,
    pub secure: bool,
    pub http_only: bool,
    pub same_site: SameSite,
    pub partitioned: bool,

    /// The whole `Set-Cookie` line this was parsed from.
    pub raw: Option<String>,
    /// Attributes that could not be parsed, verbatim.
    pub unparsed: Vec<String>,
}

impl Cookie {
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Cookie {
            name: name.into(),
            value: value.into(),
            ..Default::default()
        }
    }

    pub fn with_quoted(mut self, quoted: bool) -> Self {
        self.quoted = quoted;
        self
    }

    pub fn with_path(mut self, path: impl Into<String>) -> Self {
        self.path = Some(path.into());
        self
    }

    pub fn with_domain(mut self, domain: impl Into<String>) -> Self {
        self.domain = Some(domain.into());
        self
    }

    pub fn with_expires(mut self, expires: OffsetDateTime) -> Self {
        self.expires = Some(expires);
        self
    }

    pub fn with_max_age(mut self, seconds: i64) -> Self {
        self.max_age = seconds;
        self
    }

    pub fn with_secure(mut self, secure: bool) -> Self {
        self.secure = secure;
        self
    }

    pub fn with_http_only(mut self, http_only: bool) -> Self {
        self.http_only = http_only;
        self
    }

    pub fn with_same_site(mut self, same_site: SameSite) -> Self {
        self.same_site = same_site;
        self
    }

    pub fn with_partitioned(mut self, partitioned: bool) -> Self {
        self.partitioned = partitioned;
        self
    }

    /// A cookie that tells the client to delete `name` right away.
    pub fn removal(name: impl Into<String>) -> Self {
        Cookie::new(name, "").with_max_age(-1)
    }

    /// Check the cookie can be serialized without anything being dropped.
    pub fn valid(&self) -> Result<(), Error> {
        if !is_cookie_name_valid(&self.name) {
            return Err(Error::InvalidName);
        }

        if let Some(expires) = &self.expires {
            if !valid_cookie_expires(expires) {
                return Err(Error::InvalidExpires);
            }
        }

        if let Some(b) = self.value.bytes().find(|b| !valid_cookie_value_byte(*b)) {
            return Err(Error::InvalidValueByte(b as char));
        }

        if let Some(path) = &self.path {
            if let Some(b) = path.bytes().find(|b| !valid_cookie_path_byte(*b)) {
                return Err(Error::InvalidPathByte(b as char));
            }
        }

        if let Some(domain) = &self.domain {
            if !valid_cookie_domain(domain) {
                return Err(Error::InvalidDomain);
            }
        }

        if self.partitioned && !self.secure {
            return Err(Error::PartitionedNotSecure);
        }

        Ok(())
    }

    /// The `name=value` pair for a request `Cookie` header.
    ///
    /// Empty if the name is not a valid token.
    pub fn request_pair(&self) -> String {
        if !self.warn_invalid_name() {
            return String::new();
        }
        format!(
            "{}={}",
            sanitize_name(&self.name),
            sanitize_value(&self.value, self.quoted)
        )
    }

    fn warn_invalid_name(&self) -> bool {
        let ok = is_cookie_name_valid(&self.name);
        if !ok {
            warn!("Invalid Cookie.Name {:?}; dropping cookie", self.name);
        }
        ok
    }
}

/// Serializes to a `Set-Cookie` header value.
///
/// Invalid bytes are dropped with a warning, this never fails. A cookie
/// whose name is not a valid token serializes to the empty string.
impl fmt::Display for Cookie {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        if !self.warn_invalid_name() {
            return Ok(());
        }

        write!(
            f,
            "{}={}",
            sanitize_name(&self.name),
            sanitize_value(&self.value, self.quoted)
        )?;

        if let Some(path) = self.path.as_deref().filter(|p| !p.is_empty()) {
            write!(f, "; Path={}", sanitize_path(path))?;
        }

        if let Some(domain) = self.domain.as_deref().filter(|d| !d.is_empty()) {
            if let Some(domain) = sanitize_domain(domain) {
                write!(f, "; Domain={}", domain)?;
            }
        }

        if let Some(expires) = self.expires.as_ref().filter(|t| valid_cookie_expires(t)) {
            if let Some(v) = format_expires(expires) {
                write!(f, "; Expires={}", v)?;
            }
        }

        if self.max_age > 0 {
            write!(f, "; Max-Age={}", self.max_age)?;
        } else if self.max_age < 0 {
            write!(f, "; Max-Age=0")?;
        }

        if self.http_only {
            write!(f, "; HttpOnly")?;
        }

        if self.secure {
            write!(f, "; Secure")?;
        }

        if self.partitioned {
            write!(f, "; Partitioned")?;
        }

        match self.same_site {
            SameSite::Default => {}
            SameSite::Lax => write!(f, "; SameSite=Lax")?,
            SameSite::Strict => write!(f, "; SameSite=Strict")?,
            SameSite::None => write!(f, "; SameSite=None")?,
        }

        Ok(())
    }
}

impl FromStr for Cookie {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        crate::parse_set_cookie(s)
    }
}

impl fmt::Display for SameSite {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let s = match self {
            SameSite::Default => "Default",
            SameSite::Lax => "Lax",
            SameSite::Strict => "Strict",
            SameSite::None => "None",
        };
        write!(f, "{}", s)
    }
}

#[cfg(test)]
mod test {
    use super::*;
    use time::macros::datetime;

    #[test]
    fn plain() {
        let c = Cookie::new("cookie-1", "v$1");
        assert_eq!(c.to_string(), "cookie-1=v$1");
    }

    #[test]
    fn all_attributes_in_order() {
        let c = Cookie::new("cookie-2", "two")
            .with_path("/")
            .with_domain(".example.com")
            .with_expires(datetime!(2015-10-21 07:28:00 UTC))
            .with_max_age(3600)
            .with_http_only(true)
            .with_secure(true)
            .with_partitioned(true)
            .with_same_site(SameSite::Strict);

        assert_eq!(
            c.to_string(),
            "cookie-2=two; Path=/; Domain=example.com; \
            Expires=Wed, 21 Oct 2015 07:28:00 GMT; Max-Age=3600; \
            HttpOnly; Secure; Partitioned; SameSite=Strict"
        );
    }

    #[test]
    fn same_site_modes() {
        let c = Cookie::new("a", "b");
        assert_eq!(c.clone().with_same_site(SameSite::Default).to_string(), "a=b");
        assert_eq!(
            c.clone().with_same_site(SameSite::Lax).to_string(),
            "a=b; SameSite=Lax"
        );
        assert_eq!(
            c.with_same_site(SameSite::None).with_secure(true).to_string(),
            "a=b; Secure; SameSite=None"
        );
    }

    #[test]
    fn max_age() {
        assert_eq!(Cookie::new("a", "b").with_max_age(0).to_string(), "a=b");
        assert_eq!(Cookie::removal("a").to_string(), "a=; Max-Age=0");
        assert_eq!(
            Cookie::new("a", "b").with_max_age(-100).to_string(),
            "a=b; Max-Age=0"
        );
    }

    #[test]
    fn quoting() {
        assert_eq!(
            Cookie::new("name", "hello, world").to_string(),
            "name=\"hello, world\""
        );
        assert_eq!(Cookie::new("a", "b c").to_string(), "a=\"b c\"");
        assert_eq!(
            Cookie::new("a", "b").with_quoted(true).to_string(),
            "a=\"b\""
        );
        assert_eq!(Cookie::new("a", "").with_quoted(true).to_string(), "a=");
    }

    #[test]
    fn strips_invalid_bytes() {
        let c = Cookie::new("a", "x\"y;z\\w").with_path("/p;q\n");
        assert_eq!(c.to_string(), "a=xyzw; Path=/pq");
    }

    #[test]
    fn invalid_name_serializes_to_nothing() {
        let c = Cookie::new("x; Domain=evil.com", "v");
        assert_eq!(c.to_string(), "");
        assert_eq!(c.request_pair(), "");

        let c = Cookie::new("a\r\nSet-Cookie: evil", "b");
        assert_eq!(c.to_string(), "");

        let c = Cookie::new("", "b").with_path("/");
        assert_eq!(c.to_string(), "");
    }

    #[test]
    fn drops_invalid_domain() {
        let c = Cookie::new("a", "b").with_domain("evil..com");
        assert_eq!(c.to_string(), "a=b");

        let c = Cookie::new("a", "b").with_domain("127.0.0.1");
        assert_eq!(c.to_string(), "a=b; Domain=127.0.0.1");

        let c = Cookie::new("a", "b").with_domain("");
        assert_eq!(c.to_string(), "a=b");
    }

    #[test]
    fn drops_expires_before_1601() {
        let c = Cookie::new("a", "b").with_expires(datetime!(1600-06-01 00:00:00 UTC));
        assert_eq!(c.to_string(), "a=b");
    }

    #[test]
    fn request_pair() {
        assert_eq!(Cookie::new("a", "b").with_path("/").request_pair(), "a=b");
        assert_eq!(Cookie::new("a", "b c").request_pair(), "a=\"b c\"");
    }

    #[test]
    fn valid() {
        assert_eq!(Cookie::new("a", "b").valid(), Ok(()));
        assert_eq!(Cookie::new("", "b").valid(), Err(Error::InvalidName));
        assert_eq!(Cookie::new("a b", "b").valid(), Err(Error::InvalidName));
        assert_eq!(
            Cookie::new("a", "b")
                .with_expires(datetime!(1600-01-01 00:00:00 UTC))
                .valid(),
            Err(Error::InvalidExpires)
        );
        assert_eq!(
            Cookie::new("a", "b;").valid(),
            Err(Error::InvalidValueByte(';'))
        );
        assert_eq!(
            Cookie::new("a", "b").with_path("/\x7f").valid(),
            Err(Error::InvalidPathByte('\x7f'))
        );
        assert_eq!(
            Cookie::new("a", "b").with_domain("a..b").valid(),
            Err(Error::InvalidDomain)
        );
        assert_eq!(
            Cookie::new("a", "b").with_partitioned(true).valid(),
            Err(Error::PartitionedNotSecure)
        );
        assert_eq!(
            Cookie::new("a", "b")
                .with_partitioned(true)
                .with_secure(true)
                .valid(),
            Ok(())
        );
    }
}
