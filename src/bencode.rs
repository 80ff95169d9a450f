//! Bencode encoding and decoding ([BEP-3]).
//!
//! Bencode is the serialization format of `.torrent` files.
//!
//! # Data Types
//!
//! | Type | Format | Example |
//! |------|--------|---------|
//! | Integer | `i<number>e` | `i42e` → 42 |
//! | Byte String | `<length>:<data>` | `4:spam` → "spam" |
//! | List | `l<items>e` | `l4:spami42ee` → ["spam", 42] |
//! | Dictionary | `d<key><value>...e` | `d3:foo3:bare` → {"foo": "bar"} |
//!
//! Dictionaries are kept in the order their keys appear in the input, so
//! [`decode`] followed by [`encode`] reproduces the input byte for byte.
//!
//! # Examples
//!
//! ```
//! use torrent_pprint::bencode::{decode, encode, Value};
//!
//! let value = decode(b"d3:foo3:bare").unwrap();
//! assert_eq!(value.get(b"foo").and_then(|v| v.as_str()), Some("bar"));
//!
//! let encoded = encode(&Value::List(vec![Value::Integer(1), Value::Integer(2)])).unwrap();
//! assert_eq!(encoded, b"li1ei2ee");
//! ```
//!
//! # Error Handling
//!
//! - [`BencodeError::UnexpectedEof`] - Input ended unexpectedly
//! - [`BencodeError::InvalidInteger`] - Malformed integer (e.g., leading zeros)
//! - [`BencodeError::UnexpectedChar`] - Unexpected character in input
//! - [`BencodeError::DuplicateKey`] - A dictionary repeats a key
//! - [`BencodeError::NestingTooDeep`] - Nesting exceeds [`MAX_DEPTH`]
//! - [`BencodeError::TrailingData`] - Extra data after the value
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html

mod decode;
mod encode;
mod error;
mod value;

pub use decode::{decode, MAX_DEPTH};
pub use encode::{encode, encode_to};
pub use error::BencodeError;
pub use value::{Dict, Value};

#[cfg(test)]
mod tests;
