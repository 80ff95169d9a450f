//! BitTorrent v2 file tree structure (BEP-52).

use std::path::PathBuf;

use bytes::Bytes;
use indexmap::IndexMap;

use super::error::MetainfoError;
use super::keys::Key;
use crate::bencode::{Dict, Value};

/// Deepest file tree accepted by [`FileTree::from_value`].
///
/// Kept below [`crate::bencode::MAX_DEPTH`] so that decoded torrents hit this
/// limit rather than the decoder's.
pub const MAX_FILE_TREE_DEPTH: usize = 256;

/// A file leaf in a v2 file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FileTreeEntry {
    /// Merkle root of the file's pieces. Empty files carry none.
    pub pieces_root: Option<Bytes>,
    /// Every other key of the leaf (`length`, `attr`, ...), in file order.
    pub attrs: Dict,
    root_index: usize,
}

/// Hierarchical file structure for BitTorrent v2 torrents (BEP-52).
///
/// Directories are nested dictionaries keyed by path segment. A dictionary
/// holding `pieces root` is a file. BEP-52 places the file dictionary under an
/// empty-string key, so a file `a.txt` is `{"a.txt": {"": {...}}}`; an empty
/// file has no `pieces root` and is recognised by its `length` under that key.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum FileTree {
    /// A file node.
    File(FileTreeEntry),
    /// A directory node containing child entries.
    Directory(IndexMap<Bytes, FileTree>),
}

/// Flattened file from a file tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FlattenedFile {
    /// Full path to the file.
    pub path: PathBuf,
    /// File length in bytes, if the leaf declares one.
    pub length: Option<u64>,
    /// Pieces root hash for v2 verification.
    pub pieces_root: Option<Bytes>,
}

impl FileTreeEntry {
    /// Returns the leaf's `length`, if present and non-negative.
    pub fn length(&self) -> Option<u64> {
        self.attrs
            .get(Key::Length.as_bytes())
            .and_then(Value::as_integer)
            .and_then(|l| u64::try_from(l).ok())
    }

    /// Position of `pieces root` among the leaf's keys in the original dictionary.
    pub fn root_index(&self) -> usize {
        self.root_index
    }
}

impl FileTree {
    /// Parses a file tree from a bencoded value.
    ///
    /// The value should be the `file tree` dictionary from a v2 torrent's info dict.
    pub fn from_bencode(value: &Value) -> Result<Self, MetainfoError> {
        Self::from_value(value.clone())
    }

    /// Parses a file tree, taking ownership of the decoded value.
    ///
    /// # Errors
    ///
    /// [`MetainfoError::MalformedFileTree`] when a directory holds something other
    /// than a dictionary, or a `pieces root` is not a byte string.
    /// [`MetainfoError::RecursionLimitExceeded`] past [`MAX_FILE_TREE_DEPTH`] levels.
    pub fn from_value(value: Value) -> Result<Self, MetainfoError> {
        let mut path = Vec::new();
        parse_node(value, &mut path)
    }

    /// Flattens the file tree into a list of files with full paths.
    ///
    /// Empty path segments (the BEP-52 file marker) are dropped from paths.
    pub fn flatten(&self) -> Vec<FlattenedFile> {
        let mut files = Vec::new();
        flatten_recursive(self, PathBuf::new(), &mut files);
        files
    }

    /// Returns true if this is a file node.
    pub fn is_file(&self) -> bool {
        matches!(self, FileTree::File(_))
    }

    /// Returns true if this is a directory node.
    pub fn is_directory(&self) -> bool {
        matches!(self, FileTree::Directory(_))
    }

    /// Returns the file entry if this is a file node.
    pub fn as_file(&self) -> Option<&FileTreeEntry> {
        match self {
            FileTree::File(entry) => Some(entry),
            FileTree::Directory(_) => None,
        }
    }

    /// Returns the directory contents if this is a directory node.
    pub fn as_directory(&self) -> Option<&IndexMap<Bytes, FileTree>> {
        match self {
            FileTree::File(_) => None,
            FileTree::Directory(children) => Some(children),
        }
    }
}

fn malformed(path: &[Bytes]) -> MetainfoError {
    if path.is_empty() {
        return MetainfoError::MalformedFileTree {
            path: "<root>".to_string(),
        };
    }

    let path = path
        .iter()
        .map(|segment| String::from_utf8_lossy(segment))
        .collect::<Vec<_>>()
        .join("/");
    MetainfoError::MalformedFileTree { path }
}

fn parse_node(value: Value, path: &mut Vec<Bytes>) -> Result<FileTree, MetainfoError> {
    if path.len() >= MAX_FILE_TREE_DEPTH {
        return Err(MetainfoError::RecursionLimitExceeded {
            limit: MAX_FILE_TREE_DEPTH,
        });
    }

    let dict = value.into_dict().ok_or_else(|| malformed(path.as_slice()))?;

    if let Some(root_index) = dict.get_index_of(Key::PiecesRoot.as_bytes()) {
        return parse_file(dict, Some(root_index), path);
    }

    let is_file_marker = path.last().is_some_and(|segment| segment.is_empty());
    if is_file_marker && dict.contains_key(Key::Length.as_bytes()) {
        return parse_file(dict, None, path);
    }

    let mut children = IndexMap::with_capacity(dict.len());
    for (name, child) in dict {
        path.push(name.clone());
        let node = parse_node(child, path)?;
        path.pop();
        children.insert(name, node);
    }

    Ok(FileTree::Directory(children))
}

fn parse_file(
    mut dict: Dict,
    root_index: Option<usize>,
    path: &[Bytes],
) -> Result<FileTree, MetainfoError> {
    let pieces_root = match root_index {
        Some(index) => match dict.shift_remove_index(index) {
            Some((_, Value::Bytes(root))) => Some(root),
            _ => return Err(malformed(path)),
        },
        None => None,
    };

    Ok(FileTree::File(FileTreeEntry {
        pieces_root,
        root_index: root_index.unwrap_or(dict.len()),
        attrs: dict,
    }))
}

fn flatten_recursive(tree: &FileTree, current_path: PathBuf, files: &mut Vec<FlattenedFile>) {
    match tree {
        FileTree::File(entry) => {
            files.push(FlattenedFile {
                path: current_path,
                length: entry.length(),
                pieces_root: entry.pieces_root.clone(),
            });
        }
        FileTree::Directory(children) => {
            for (name, child) in children {
                let child_path = if name.is_empty() {
                    current_path.clone()
                } else {
                    current_path.join(&*String::from_utf8_lossy(name))
                };
                flatten_recursive(child, child_path, files);
            }
        }
    }
}
