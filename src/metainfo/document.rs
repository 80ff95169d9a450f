use std::fmt;

use super::error::MetainfoError;
use super::file_tree::FileTree;
use super::keys::Key;
use crate::bencode::{Dict, Value};

/// The version of a torrent file.
///
/// BitTorrent has evolved through multiple versions:
/// - **V1**: Original BitTorrent protocol (BEP-3)
/// - **V2**: BitTorrent v2 with merkle piece hashing (BEP-52)
/// - **Hybrid**: Supports both v1 and v2 clients (BEP-47)
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum TorrentVersion {
    /// BitTorrent v1 (BEP-3) - SHA1 piece hashes.
    V1,
    /// BitTorrent v2 (BEP-52) - SHA256 piece hashes with merkle trees.
    V2,
    /// Hybrid torrent (BEP-47) - Compatible with both v1 and v2 clients.
    Hybrid,
}

impl fmt::Display for TorrentVersion {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            TorrentVersion::V1 => "v1",
            TorrentVersion::V2 => "v2",
            TorrentVersion::Hybrid => "hybrid",
        })
    }
}

/// A decoded metainfo document whose top level has been checked.
///
/// The only guarantee is the one every torrent file must meet: the top level
/// is a dictionary holding an `info` dictionary. Everything else is kept
/// as decoded.
///
/// # Examples
///
/// ```
/// use torrent_pprint::bencode::decode;
/// use torrent_pprint::metainfo::{Metainfo, TorrentVersion};
///
/// let value = decode(b"d4:infod6:pieces20:aaaaaaaaaaaaaaaaaaaaee").unwrap();
/// let metainfo = Metainfo::from_value(value).unwrap();
/// assert_eq!(metainfo.version(), TorrentVersion::V1);
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Metainfo {
    root: Dict,
}

impl Metainfo {
    /// Checks the top-level shape of a decoded torrent and takes ownership of it.
    ///
    /// # Errors
    ///
    /// - [`MetainfoError::InvalidField`] with `"root"` if the value is not a dictionary
    /// - [`MetainfoError::MissingField`] with `"info"` if there is no info dictionary
    /// - [`MetainfoError::InvalidField`] with `"info"` if `info` is not a dictionary
    pub fn from_value(value: Value) -> Result<Self, MetainfoError> {
        let root = value
            .into_dict()
            .ok_or(MetainfoError::InvalidField("root"))?;

        match root.get(Key::Info.as_bytes()) {
            None => return Err(MetainfoError::MissingField(Key::Info.name())),
            Some(Value::Dict(_)) => {}
            Some(_) => return Err(MetainfoError::InvalidField(Key::Info.name())),
        }

        Ok(Self { root })
    }

    /// The top-level dictionary.
    pub fn root(&self) -> &Dict {
        &self.root
    }

    /// The info dictionary.
    pub fn info(&self) -> &Dict {
        match self.root.get(Key::Info.as_bytes()) {
            Some(Value::Dict(info)) => info,
            _ => unreachable!("info dictionary checked in Metainfo::from_value"),
        }
    }

    /// The top-level `piece layers` value, if any.
    pub fn piece_layers(&self) -> Option<&Value> {
        self.root.get(Key::PieceLayers.as_bytes())
    }

    /// Parses the v2 file tree, if the info dictionary has one.
    pub fn file_tree(&self) -> Option<Result<FileTree, MetainfoError>> {
        self.info()
            .get(Key::FileTree.as_bytes())
            .map(FileTree::from_bencode)
    }

    /// Detects the torrent version from the fields present in the info dictionary.
    pub fn version(&self) -> TorrentVersion {
        let info = self.info();
        let has_pieces = info.contains_key(Key::Pieces.as_bytes());
        let has_file_tree = info.contains_key(Key::FileTree.as_bytes());
        let meta_version = info
            .get(Key::MetaVersion.as_bytes())
            .and_then(Value::as_integer);

        match (has_pieces, has_file_tree, meta_version) {
            (true, true, _) => TorrentVersion::Hybrid,
            (false, true, Some(2)) => TorrentVersion::V2,
            _ => TorrentVersion::V1,
        }
    }

    /// Gives back the top-level dictionary.
    pub fn into_dict(self) -> Dict {
        self.root
    }
}

impl From<Metainfo> for Value {
    fn from(metainfo: Metainfo) -> Self {
        Value::Dict(metainfo.root)
    }
}
