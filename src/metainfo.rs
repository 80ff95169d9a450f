//! Torrent metainfo handling ([BEP-3], [BEP-52]).
//!
//! This module gives a typed view over the parts of a decoded `.torrent` file
//! that need more than generic bencode handling.
//!
//! # Torrent Structure
//!
//! - **info** - Core torrent metadata
//!   - `pieces` - Concatenated SHA1 hashes of each piece (v1)
//!   - `file tree` - Nested directories of files with merkle roots (v2)
//! - **piece layers** - Merkle layer hashes keyed by file pieces root (v2)
//! - **announce**, **comment**, **created by**, ... - passed through untouched
//!
//! A hybrid torrent carries both the v1 and the v2 fields.
//!
//! # Examples
//!
//! ```
//! use torrent_pprint::bencode::decode;
//! use torrent_pprint::metainfo::Metainfo;
//!
//! # fn main() -> Result<(), Box<dyn std::error::Error>> {
//! let value = decode(b"d4:infod9:file treed5:a.txtd0:d6:lengthi2e11:pieces root2:\x01\x02eeeee")?;
//! let metainfo = Metainfo::from_value(value)?;
//!
//! let tree = metainfo.file_tree().expect("v2 torrent")?;
//! let files = tree.flatten();
//! assert_eq!(files[0].path.to_str(), Some("a.txt"));
//! assert_eq!(files[0].length, Some(2));
//! # Ok(())
//! # }
//! ```
//!
//! [BEP-3]: http://bittorrent.org/beps/bep_0003.html
//! [BEP-52]: http://bittorrent.org/beps/bep_0052.html

mod document;
mod error;
mod file_tree;
mod io;
mod keys;

pub use document::{Metainfo, TorrentVersion};
pub use error::MetainfoError;
pub use file_tree::{FileTree, FileTreeEntry, FlattenedFile, MAX_FILE_TREE_DEPTH};
pub use io::{load_torrent, save_torrent};
pub use keys::Key;
