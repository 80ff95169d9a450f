//! torrent-pprint - Inspect BitTorrent metainfo files
//!
//! Decodes a `.torrent` file and pretty-prints its structure with the bulky
//! binary parts hidden: v1 `pieces` and v2 `piece layers` are reduced to their
//! size, and v2 file `pieces root` hashes are shown as hex.
//!
//! # Modules
//!
//! - [`bencode`] - BEP-3 Bencode encoding/decoding
//! - [`metainfo`] - Metainfo document checks, v2 file trees, torrent file I/O
//! - [`redact`] - Hiding binary blobs and hexlifying piece roots
//! - [`display`] - The redacted tree handed to the renderer
//! - [`render`] - pprint-style text rendering
//! - [`cli`] - The `torrent-pprint` command line
//!
//! # Examples
//!
//! ```
//! use torrent_pprint::{decode, pformat_torrent, RenderOptions};
//!
//! let metainfo = decode(b"d4:infod4:name5:a.txt6:pieces4:\x00\x01\x02\x03ee").unwrap();
//! let text = pformat_torrent(&metainfo, &RenderOptions::default()).unwrap();
//! assert_eq!(
//!     text,
//!     "{b\"info\": {b\"name\": b\"a.txt\", b\"pieces\": \"4 bytes (hidden in this output)\"}}"
//! );
//! ```

pub mod bencode;
pub mod cli;
pub mod display;
pub mod metainfo;
pub mod redact;
pub mod render;

pub use bencode::{decode, encode, BencodeError, Value};
pub use display::DisplayValue;
pub use metainfo::{load_torrent, save_torrent, FileTree, Metainfo, MetainfoError};
pub use redact::{redact, redact_owned};
pub use render::{pformat_torrent, pprint_torrent, render, RenderOptions};
