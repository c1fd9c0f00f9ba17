#![no_main]
use libfuzzer_sys::fuzz_target;
use rainbow::fmt::{Csi, scan_csi, strip_escapes};

fuzz_target!(|data: &[u8]| {
    // A match never claims more bytes than it was given
    if let Csi::Match(len) = scan_csi(data) {
        assert!(len <= data.len());
        assert!(matches!(data[len - 1], b'm' | b'K'));
    }
    // Stripping only ever removes bytes
    assert!(strip_escapes(data).len() <= data.len());
});
