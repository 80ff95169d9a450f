//! Metainfo dictionary keys this crate looks up.

/// A well-known key of the metainfo schema ([BEP-3], [BEP-52]).
///
/// [BEP-3]: http://bittorrent.org/beps/bep_0003.html
/// [BEP-52]: http://bittorrent.org/beps/bep_0052.html
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Key {
    /// `info`, the info dictionary at the top level.
    Info,
    /// `pieces`, concatenated v1 SHA1 piece hashes inside `info`.
    Pieces,
    /// `piece layers`, v2 merkle layers at the top level.
    PieceLayers,
    /// `file tree`, the v2 directory tree inside `info`.
    FileTree,
    /// `pieces root`, a file's merkle root inside a file tree leaf.
    PiecesRoot,
    /// `length`, a file's size in bytes.
    Length,
    /// `meta version`, the metainfo format version inside `info`.
    MetaVersion,
}

impl Key {
    /// The key as it appears on the wire.
    pub const fn name(self) -> &'static str {
        match self {
            Key::Info => "info",
            Key::Pieces => "pieces",
            Key::PieceLayers => "piece layers",
            Key::FileTree => "file tree",
            Key::PiecesRoot => "pieces root",
            Key::Length => "length",
            Key::MetaVersion => "meta version",
        }
    }

    /// The key as a byte string, for dictionary lookups.
    pub const fn as_bytes(self) -> &'static [u8] {
        self.name().as_bytes()
    }

    /// Returns true if `key` is exactly this schema key.
    pub fn matches(self, key: &[u8]) -> bool {
        key == self.as_bytes()
    }
}
