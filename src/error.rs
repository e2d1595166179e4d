use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum Error {
    #[error("blank cookie")]
    BlankCookie,

    #[error("'=' not found in cookie")]
    MissingSeparator,

    #[error("invalid cookie name")]
    InvalidName,

    #[error("invalid cookie value")]
    InvalidValue,

    #[error("invalid Cookie.Expires")]
    InvalidExpires,

    #[error("invalid byte {0:?} in Cookie.Value")]
    InvalidValueByte(char),

    #[error("invalid byte {0:?} in Cookie.Path")]
    InvalidPathByte(char),

    #[error("invalid Cookie.Domain")]
    InvalidDomain,

    #[error("partitioned cookies must be set with Secure")]
    PartitionedNotSecure,

    #[error("cookie is not a valid header value")]
    InvalidHeaderValue,
}

#[cfg(feature = "http_crate")]
impl From<http::header::InvalidHeaderValue> for Error {
    fn from(_: http::header::InvalidHeaderValue) -> Self {
        Error::InvalidHeaderValue
    }
}
