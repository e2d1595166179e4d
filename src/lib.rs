//! Sans-IO HTTP cookie library.
//!
//! Parses `Cookie` request headers and `Set-Cookie` response headers per
//! RFC 6265, and serializes cookies back to `Set-Cookie` values.
//!
//! * [`parse_request_cookies`] never fails. Malformed pairs are skipped.
//! * [`parse_set_cookie`] fails on a bad `name=value`, but bad attributes
//!   only end up in [`Cookie::unparsed`].
//! * Serializing (`to_string()`) never fails. Invalid bytes are dropped
//!   and reported with `log::warn!`.
//!
//! # Example
//!
//! ```
//! use hootcookie::{parse_request_cookies, parse_set_cookie, Cookie};
//!
//! let c = parse_set_cookie("lang=en-US; Path=/; Max-Age=3600").unwrap();
//! assert_eq!(c.path.as_deref(), Some("/"));
//!
//! let out = Cookie::new("lang", "sv-SE").with_path("/").to_string();
//! assert_eq!(out, "lang=sv-SE; Path=/");
//!
//! let req = parse_request_cookies("lang=en-US; theme=dark", Some("theme"));
//! assert_eq!(req[0].value, "dark");
//! ```
//!
//! With the `http_crate` feature (default), [`HeaderMapExt`] gives the same
//! on an `http::HeaderMap`.

#[macro_use]
extern crate log;

// Re-export so callers can build Expires values.
pub use time;

#[cfg(feature = "http_crate")]
pub use http;

mod error;
pub use error::Error;

mod util;

mod grammar;
pub use grammar::{is_cookie_domain_name, is_cookie_name_valid, valid_cookie_domain};

mod sanitize;

mod date;
pub use date::{valid_cookie_expires, MIN_EXPIRES_YEAR};

mod cookie;
pub use cookie::{Cookie, SameSite};

mod parse;
pub use parse::{
    parse_cookie, parse_request_cookies, parse_set_cookie, read_cookies, read_set_cookies,
};

#[cfg(feature = "http_crate")]
mod ext;
#[cfg(feature = "http_crate")]
pub use ext::HeaderMapExt;
