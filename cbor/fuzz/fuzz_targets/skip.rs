#![no_main]

use cbor_walk::decode::{Cursor, DEFAULT_MAX_RECURSION};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    let r = cursor.skip_sequence(DEFAULT_MAX_RECURSION);
    assert!(cursor.offset() <= data.len());
    if r.is_ok() {
        assert!(cursor.is_empty());
    }
});
