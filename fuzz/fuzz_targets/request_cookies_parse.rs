#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };

    let all = hootcookie::parse_request_cookies(s, None);
    for c in &all {
        assert!(hootcookie::is_cookie_name_valid(&c.name));
        let _ = c.request_pair();
    }

    if let Some(first) = all.first() {
        let named = hootcookie::parse_request_cookies(s, Some(&first.name));
        assert!(!named.is_empty());
    }

    let _ = hootcookie::parse_cookie(s);
});
