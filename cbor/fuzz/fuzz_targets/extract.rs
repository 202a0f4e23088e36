#![no_main]

use cbor_walk::decode::{Cursor, Value};
use libfuzzer_sys::fuzz_target;

fuzz_target!(|data: &[u8]| {
    let mut cursor = Cursor::new(data);
    while let Ok(item) = cursor.extract() {
        assert!(item.start < cursor.offset());
        match item.value {
            Value::Bytes(b) | Value::Text(b) => {
                assert_eq!(b, &data[cursor.offset() - b.len()..cursor.offset()])
            }
            Value::Array(r) | Value::Map(r) => assert_eq!(cursor.offset(), r.offset),
            _ => {}
        }
    }
    assert!(cursor.offset() <= data.len());
});
