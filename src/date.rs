//! `Expires` dates.
//!
//! Output is always the IMF-fixdate, `Sun, 06 Nov 1994 08:49:37 GMT`. Input
//! additionally accepts the dashed form `Sun, 06-Nov-1994 08:49:37 GMT`
//! that older servers still send.

use time::format_description::BorrowedFormatItem;
use time::macros::format_description;
use time::{OffsetDateTime, PrimitiveDateTime, UtcOffset};

/// RFC 6265 section 5.1.1: the year must not be less than 1601.
pub const MIN_EXPIRES_YEAR: i32 = 1601;

const IMF_FIXDATE: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short], [day] [month repr:short] [year] [hour]:[minute]:[second] GMT"
);

const IMF_FIXDATE_LENIENT: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short case_sensitive:false], [day] [month repr:short case_sensitive:false] [year] [hour]:[minute]:[second] GMT"
);

const DASHED: &[BorrowedFormatItem<'static>] = format_description!(
    "[weekday repr:short case_sensitive:false], [day]-[month repr:short case_sensitive:false]-[year] [hour]:[minute]:[second] GMT"
);

/// Whether `t` can be used as a cookie expiry.
pub fn valid_cookie_expires(t: &OffsetDateTime) -> bool {
    t.year() >= MIN_EXPIRES_YEAR
}

pub(crate) fn format_expires(t: &OffsetDateTime) -> Option<String> {
    t.to_offset(UtcOffset::UTC).format(IMF_FIXDATE).ok()
}

/// Parse the value of an `Expires` attribute.
///
/// Dates before [`MIN_EXPIRES_YEAR`] are rejected.
pub(crate) fn parse_expires(v: &str) -> Option<OffsetDateTime> {
    let t = PrimitiveDateTime::parse(v, IMF_FIXDATE_LENIENT)
        .or_else(|_| {
            trace!("Expires not IMF-fixdate, trying dashed: {}", v);
            PrimitiveDateTime::parse(v, DASHED)
        })
        .ok()?
        .assume_utc();

    if !valid_cookie_expires(&t) {
        debug!("Expires before {}: {}", MIN_EXPIRES_YEAR, v);
        return None;
    }

    Some(t)
}
