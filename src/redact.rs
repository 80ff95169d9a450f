//! Redaction of a decoded torrent for display.
//!
//! Three places of a metainfo document hold data that is useless to read as
//! raw bytes:
//!
//! | Location | Shown as |
//! |----------|----------|
//! | `info.pieces` | `"<N> bytes (hidden in this output)"` |
//! | `piece layers` entries | hex key → `"<N> bytes (hidden in this output)"` |
//! | `pieces root` of each `info.file tree` file | lowercase hex |
//!
//! Every other value converts to the display tree unchanged, in the same key
//! order.
//!
//! # Examples
//!
//! ```
//! use torrent_pprint::bencode::decode;
//! use torrent_pprint::redact::redact;
//!
//! let value = decode(b"d4:infod4:name1:a6:pieces3:xyzee").unwrap();
//! let display = redact(&value).unwrap();
//!
//! let info = display.get(b"info").unwrap();
//! assert_eq!(
//!     info.get(b"pieces").and_then(|v| v.as_text()),
//!     Some("3 bytes (hidden in this output)")
//! );
//! ```

use bytes::Bytes;
use indexmap::IndexMap;

use crate::bencode::{Dict, Value};
use crate::display::DisplayValue;
use crate::metainfo::{FileTree, Key, Metainfo, MetainfoError};

/// Redacts a borrowed document, leaving the caller's tree untouched.
///
/// # Errors
///
/// See [`redact_owned`].
pub fn redact(doc: &Value) -> Result<DisplayValue, MetainfoError> {
    redact_owned(doc.clone())
}

/// Redacts a document, consuming it.
///
/// Byte strings that survive redaction are moved into the display tree rather
/// than copied.
///
/// # Errors
///
/// - [`MetainfoError::InvalidField`] if the document is not a dictionary, or
///   `info`, `pieces` or `piece layers` has the wrong type
/// - [`MetainfoError::MissingField`] if there is no `info` dictionary
/// - [`MetainfoError::MalformedFileTree`] if the file tree holds a node that is
///   neither a file nor a directory
/// - [`MetainfoError::RecursionLimitExceeded`] if the file tree is too deep
pub fn redact_owned(doc: Value) -> Result<DisplayValue, MetainfoError> {
    let metainfo = Metainfo::from_value(doc)?;
    let version = metainfo.version();

    let mut stats = Stats::default();
    let root = metainfo
        .into_dict()
        .into_iter()
        .map(|(key, value)| {
            let display = if Key::Info.matches(&key) {
                redact_info(value, &mut stats)?
            } else if Key::PieceLayers.matches(&key) {
                redact_piece_layers(value, &mut stats)?
            } else {
                DisplayValue::from(value)
            };
            Ok((key, display))
        })
        .collect::<Result<IndexMap<_, _>, MetainfoError>>()?;

    tracing::debug!(
        "redacted {:?} torrent: pieces={}, piece layers={}, pieces roots={}",
        version,
        stats.pieces,
        stats.piece_layers,
        stats.pieces_roots
    );

    Ok(DisplayValue::Dict(root))
}

#[derive(Debug, Default)]
struct Stats {
    pieces: bool,
    piece_layers: usize,
    pieces_roots: usize,
}

fn hidden(len: usize) -> DisplayValue {
    DisplayValue::Text(format!("{} bytes (hidden in this output)", len))
}

fn redact_info(info: Value, stats: &mut Stats) -> Result<DisplayValue, MetainfoError> {
    let info = info
        .into_dict()
        .ok_or(MetainfoError::InvalidField(Key::Info.name()))?;

    let info = info
        .into_iter()
        .map(|(key, value)| {
            let display = if Key::Pieces.matches(&key) {
                let pieces = value
                    .as_bytes()
                    .ok_or(MetainfoError::InvalidField(Key::Pieces.name()))?;
                stats.pieces = true;
                hidden(pieces.len())
            } else if Key::FileTree.matches(&key) {
                let tree = FileTree::from_value(value)?;
                file_tree_display(tree, stats)
            } else {
                DisplayValue::from(value)
            };
            Ok((key, display))
        })
        .collect::<Result<IndexMap<_, _>, MetainfoError>>()?;

    Ok(DisplayValue::Dict(info))
}

fn redact_piece_layers(layers: Value, stats: &mut Stats) -> Result<DisplayValue, MetainfoError> {
    let layers: Dict = layers
        .into_dict()
        .ok_or(MetainfoError::InvalidField(Key::PieceLayers.name()))?;

    let layers = layers
        .into_iter()
        .map(|(root, hashes)| {
            let hashes = hashes
                .as_bytes()
                .ok_or(MetainfoError::InvalidField(Key::PieceLayers.name()))?;
            Ok((Bytes::from(hex::encode(&root)), hidden(hashes.len())))
        })
        .collect::<Result<IndexMap<_, _>, MetainfoError>>()?;

    stats.piece_layers = layers.len();
    Ok(DisplayValue::Dict(layers))
}

fn file_tree_display(tree: FileTree, stats: &mut Stats) -> DisplayValue {
    match tree {
        FileTree::Directory(children) => DisplayValue::Dict(
            children
                .into_iter()
                .map(|(name, child)| (name, file_tree_display(child, stats)))
                .collect(),
        ),
        FileTree::File(entry) => {
            let root_index = entry.root_index();
            let mut fields: IndexMap<Bytes, DisplayValue> = entry
                .attrs
                .into_iter()
                .map(|(k, v)| (k, DisplayValue::from(v)))
                .collect();
            if let Some(root) = entry.pieces_root {
                stats.pieces_roots += 1;
                fields.shift_insert(
                    root_index,
                    Bytes::from_static(Key::PiecesRoot.as_bytes()),
                    DisplayValue::Text(hex::encode(&root)),
                );
            }
            DisplayValue::Dict(fields)
        }
    }
}
