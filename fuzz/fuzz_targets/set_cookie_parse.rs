#![no_main]

use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let Ok(s) = std::str::from_utf8(data) else {
        return;
    };
    let Ok(c) = hootcookie::parse_set_cookie(s) else {
        return;
    };

    // Whatever parsed must serialize, and the name survives a reparse.
    let out = c.to_string();
    let again = hootcookie::parse_set_cookie(&out).expect("reparse serialized cookie");
    assert_eq!(again.name, c.name);
    let _ = c.valid();
});
