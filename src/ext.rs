use http::header::{COOKIE, SET_COOKIE};
use http::{HeaderMap, HeaderValue};

use crate::grammar::is_cookie_name_valid;
use crate::{read_cookies, read_set_cookies, Cookie, Error};

/// Cookie access on [`http::HeaderMap`].
///
/// ```
/// use hootcookie::http::HeaderMap;
/// use hootcookie::{Cookie, HeaderMapExt};
///
/// let mut res = HeaderMap::new();
/// res.set_cookie(&Cookie::new("theme", "dark").with_path("/")).unwrap();
///
/// assert_eq!(res["set-cookie"], "theme=dark; Path=/");
/// assert_eq!(res.set_cookies()[0].value, "dark");
/// ```
pub trait HeaderMapExt {
    /// All cookies in the `Cookie` headers of a request.
    fn cookies(&self) -> Vec<Cookie>;

    /// The request cookies named `name`.
    fn cookies_named(&self, name: &str) -> Vec<Cookie>;

    /// The first request cookie named `name`.
    fn cookie(&self, name: &str) -> Option<Cookie>;

    /// All cookies in the `Set-Cookie` headers of a response that parse.
    fn set_cookies(&self) -> Vec<Cookie>;

    /// Add a cookie to the request `Cookie` header.
    ///
    /// Only name and value are used. All cookies go into one header,
    /// separated by `"; "`.
    fn add_cookie(&mut self, cookie: &Cookie) -> Result<(), Error>;

    /// Append a `Set-Cookie` header to a response.
    ///
    /// Cookies with an invalid name are refused.
    fn set_cookie(&mut self, cookie: &Cookie) -> Result<(), Error>;
}

impl HeaderMapExt for HeaderMap {
    fn cookies(&self) -> Vec<Cookie> {
        read_cookies(str_values(self, &COOKIE), None)
    }

    fn cookies_named(&self, name: &str) -> Vec<Cookie> {
        // A filter of "" would match nothing anyway.
        if name.is_empty() {
            return vec![];
        }
        read_cookies(str_values(self, &COOKIE), Some(name))
    }

    fn cookie(&self, name: &str) -> Option<Cookie> {
        self.cookies_named(name).into_iter().next()
    }

    fn set_cookies(&self) -> Vec<Cookie> {
        read_set_cookies(str_values(self, &SET_COOKIE))
    }

    fn add_cookie(&mut self, cookie: &Cookie) -> Result<(), Error> {
        if !is_cookie_name_valid(&cookie.name) {
            warn!("Refusing Cookie with invalid name: {:?}", cookie.name);
            return Err(Error::InvalidName);
        }

        let pair = cookie.request_pair();

        let joined = match self.get(COOKIE).and_then(|v| v.to_str().ok()) {
            Some(prev) if !prev.is_empty() => format!("{}; {}", prev, pair),
            _ => pair,
        };

        self.insert(COOKIE, HeaderValue::try_from(joined)?);

        Ok(())
    }

    fn set_cookie(&mut self, cookie: &Cookie) -> Result<(), Error> {
        if !is_cookie_name_valid(&cookie.name) {
            warn!("Refusing Set-Cookie with invalid name: {:?}", cookie.name);
            return Err(Error::InvalidName);
        }

        let value = HeaderValue::try_from(cookie.to_string())?;
        self.append(SET_COOKIE, value);

        Ok(())
    }
}

fn str_values<'a>(
    headers: &'a HeaderMap,
    name: &'a http::HeaderName,
) -> impl Iterator<Item = &'a str> + 'a {
    headers.get_all(name).iter().filter_map(move |v| match v.to_str() {
        Ok(s) => Some(s),
        Err(_) => {
            debug!("Skip non-ascii {} header", name);
            None
        }
    })
}
