use std::fs;
use std::path::Path;

use super::error::MetainfoError;
use crate::bencode::{decode, encode, Value};

/// Loads a torrent file and returns its decoded top-level dictionary.
///
/// # Errors
///
/// Fails if the file cannot be read, is not valid bencode, or its top-level
/// value is not a dictionary.
///
/// # Examples
///
/// ```no_run
/// use torrent_pprint::metainfo::load_torrent;
///
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// let metainfo = load_torrent("example.torrent")?;
/// assert!(metainfo.get(b"info").is_some());
/// # Ok(())
/// # }
/// ```
pub fn load_torrent(path: impl AsRef<Path>) -> Result<Value, MetainfoError> {
    let path = path.as_ref();
    let data = fs::read(path)?;
    tracing::debug!("read {} bytes from {}", data.len(), path.display());

    let metainfo = decode(&data)?;
    if metainfo.as_dict().is_none() {
        return Err(MetainfoError::InvalidField("root"));
    }

    Ok(metainfo)
}

/// Encodes `metainfo` and writes it to `path`, replacing any existing file.
pub fn save_torrent(path: impl AsRef<Path>, metainfo: &Value) -> Result<(), MetainfoError> {
    let path = path.as_ref();
    let data = encode(metainfo)?;
    fs::write(path, &data)?;
    tracing::debug!("wrote {} bytes to {}", data.len(), path.display());
    Ok(())
}
