/*!
Minimal zero-copy CBOR ([RFC 8949](https://www.rfc-editor.org/rfc/rfc8949.html)) decoder.

The decoder walks the structure of encoded items in a borrowed buffer without
allocating or copying payload bytes. Strings are returned as slices of the
original buffer, arrays and maps as child counts, and whole items can be
skipped in one call.
*/
#![cfg_attr(not(any(test, feature = "std")), no_std)]

mod error;
mod skip;
mod value;

pub mod decode;

pub use error::Error;
