//! Command line front end of the `torrent-pprint` binary.

use std::io::Write;
use std::path::PathBuf;

use clap::builder::RangedU64ValueParser;
use clap::Parser;
use thiserror::Error;

use crate::bencode::Value;
use crate::metainfo::{load_torrent, Key, Metainfo, MetainfoError};
use crate::redact::redact_owned;
use crate::render::{render, RenderOptions, DEFAULT_INDENT, DEFAULT_WIDTH};

/// Pretty-print a given torrent file's metainfo dict to stdout.
#[derive(Debug, Clone, Parser)]
#[command(name = "torrent-pprint", version, about, long_about = None)]
pub struct Args {
    /// Path to the torrent file
    pub torrent_file: PathBuf,

    /// Indentation width
    #[arg(short, long, default_value_t = DEFAULT_INDENT)]
    pub indent: usize,

    /// Maximum width of a line
    #[arg(
        short,
        long,
        default_value_t = DEFAULT_WIDTH,
        value_parser = RangedU64ValueParser::<usize>::new().range(1..)
    )]
    pub width: usize,

    /// Maximum depth to show (default: unlimited)
    #[arg(short, long, value_parser = RangedU64ValueParser::<usize>::new().range(1..))]
    pub depth: Option<usize>,

    /// List the files of the v2 file tree instead of the whole metainfo
    #[arg(short, long)]
    pub files: bool,
}

impl Args {
    /// Layout settings taken from the command line.
    pub fn render_options(&self) -> RenderOptions {
        RenderOptions::default()
            .with_indent(self.indent)
            .with_width(self.width)
            .with_depth(self.depth)
    }
}

/// Errors reported by [`run`].
#[derive(Debug, Error)]
pub enum CliError {
    /// The path is missing or is not a regular file.
    #[error("not a torrent file: {}", .0.display())]
    NotAFile(PathBuf),

    #[error(transparent)]
    Metainfo(#[from] MetainfoError),

    #[error("io error: {0}")]
    Io(#[from] std::io::Error),
}

/// Loads the torrent named by `args` and writes its redacted rendering to `out`.
///
/// Nothing is written when loading or redaction fails.
pub fn run<W: Write>(args: &Args, out: &mut W) -> Result<(), CliError> {
    if !args.torrent_file.is_file() {
        return Err(CliError::NotAFile(args.torrent_file.clone()));
    }

    tracing::debug!("inspecting {}", args.torrent_file.display());
    let metainfo = load_torrent(&args.torrent_file)?;

    if args.files {
        return list_files(metainfo, out);
    }

    // The decoded tree is not needed after rendering.
    let display = redact_owned(metainfo)?;
    writeln!(out, "{}", render(&display, &args.render_options()))?;
    Ok(())
}

fn list_files<W: Write>(metainfo: Value, out: &mut W) -> Result<(), CliError> {
    let metainfo = Metainfo::from_value(metainfo)?;
    let tree = metainfo
        .file_tree()
        .ok_or(MetainfoError::MissingField(Key::FileTree.name()))??;

    let files = tree.flatten();
    let mut listing = format!("# {} torrent, {} files\n", metainfo.version(), files.len());
    for file in files {
        let length = file
            .length
            .map_or_else(|| "-".to_string(), |length| length.to_string());
        let root = file
            .pieces_root
            .map_or_else(|| "-".to_string(), hex::encode);
        listing.push_str(&format!("{}\t{}\t{}\n", file.path.display(), length, root));
    }

    out.write_all(listing.as_bytes())?;
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bencode::encode;
    use bytes::Bytes;
    use tempfile::TempDir;

    fn args(path: PathBuf) -> Args {
        Args {
            torrent_file: path,
            indent: DEFAULT_INDENT,
            width: DEFAULT_WIDTH,
            depth: None,
            files: false,
        }
    }

    fn hybrid_torrent() -> Vec<u8> {
        let value = Value::dict([
            ("announce", Value::string("http://tracker")),
            (
                "info",
                Value::dict([
                    (
                        "file tree",
                        Value::dict([
                            (
                                "a.txt",
                                Value::dict([(
                                    "",
                                    Value::dict([
                                        ("length", Value::Integer(2)),
                                        (
                                            "pieces root",
                                            Value::Bytes(Bytes::from_static(b"\x01\x02")),
                                        ),
                                    ]),
                                )]),
                            ),
                            (
                                "empty",
                                Value::dict([("", Value::dict([("length", Value::Integer(0))]))]),
                            ),
                        ]),
                    ),
                    ("meta version", Value::Integer(2)),
                    ("pieces", Value::Bytes(Bytes::from(vec![7u8; 20]))),
                ]),
            ),
            (
                "piece layers",
                Value::Dict(
                    [(Bytes::from_static(b"\xaa\xbb"), Value::Bytes(Bytes::from(vec![0u8; 64])))]
                        .into_iter()
                        .collect(),
                ),
            ),
        ]);
        encode(&value).unwrap()
    }

    fn write_torrent(temp: &TempDir, data: &[u8]) -> PathBuf {
        let path = temp.path().join("test.torrent");
        std::fs::write(&path, data).unwrap();
        path
    }

    #[test]
    fn test_parse_defaults() {
        let args = Args::try_parse_from(["torrent-pprint", "x.torrent"]).unwrap();
        assert_eq!(args.torrent_file, PathBuf::from("x.torrent"));
        assert_eq!(args.render_options(), RenderOptions::default());
        assert!(!args.files);
    }

    #[test]
    fn test_parse_overrides() {
        let args = Args::try_parse_from([
            "torrent-pprint",
            "-i",
            "4",
            "--width",
            "80",
            "-d",
            "3",
            "x.torrent",
        ])
        .unwrap();
        assert_eq!(
            args.render_options(),
            RenderOptions {
                indent: 4,
                width: 80,
                depth: Some(3),
            }
        );
    }

    #[test]
    fn test_parse_rejects_zero_width_and_depth() {
        assert!(Args::try_parse_from(["torrent-pprint", "-w", "0", "x.torrent"]).is_err());
        assert!(Args::try_parse_from(["torrent-pprint", "-d", "0", "x.torrent"]).is_err());
        assert!(Args::try_parse_from(["torrent-pprint"]).is_err());
    }

    #[test]
    fn test_missing_file() {
        let temp = TempDir::new().unwrap();
        let mut out = Vec::new();
        let result = run(&args(temp.path().join("missing.torrent")), &mut out);

        assert!(matches!(result, Err(CliError::NotAFile(_))));
        assert!(out.is_empty());
    }

    #[test]
    fn test_directory_is_not_a_file() {
        let temp = TempDir::new().unwrap();
        let mut out = Vec::new();
        let result = run(&args(temp.path().to_path_buf()), &mut out);
        assert!(matches!(result, Err(CliError::NotAFile(_))));
    }

    #[test]
    fn test_run_prints_redacted_tree() {
        let temp = TempDir::new().unwrap();
        let path = write_torrent(&temp, &hybrid_torrent());

        let mut out = Vec::new();
        run(&args(path), &mut out).unwrap();
        let text = String::from_utf8(out).unwrap();

        assert!(text.ends_with('\n'));
        assert!(text.contains("b\"pieces\": \"20 bytes (hidden in this output)\""));
        assert!(text.contains("b\"pieces root\": \"0102\""));
        assert!(text.contains("b\"aabb\": \"64 bytes (hidden in this output)\""));
        assert!(text.contains("b\"announce\": b\"http://tracker\""));
    }

    #[test]
    fn test_run_respects_depth() {
        let temp = TempDir::new().unwrap();
        let path = write_torrent(&temp, &hybrid_torrent());

        let mut options = args(path);
        options.depth = Some(1);
        let mut out = Vec::new();
        run(&options, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "{b\"announce\": b\"http://tracker\", b\"info\": {...}, b\"piece layers\": {...}}\n"
        );
    }

    #[test]
    fn test_run_missing_info_prints_nothing() {
        let temp = TempDir::new().unwrap();
        let path = write_torrent(&temp, b"d8:announce3:urle");

        let mut out = Vec::new();
        let result = run(&args(path), &mut out);

        assert!(matches!(
            result,
            Err(CliError::Metainfo(MetainfoError::MissingField("info")))
        ));
        assert!(out.is_empty());
    }

    #[test]
    fn test_run_decode_error() {
        let temp = TempDir::new().unwrap();
        let path = write_torrent(&temp, b"d4:infod");

        let result = run(&args(path), &mut Vec::new());
        assert!(matches!(
            result,
            Err(CliError::Metainfo(MetainfoError::Bencode(_)))
        ));
    }

    #[test]
    fn test_list_files() {
        let temp = TempDir::new().unwrap();
        let path = write_torrent(&temp, &hybrid_torrent());

        let mut options = args(path);
        options.files = true;
        let mut out = Vec::new();
        run(&options, &mut out).unwrap();

        assert_eq!(
            String::from_utf8(out).unwrap(),
            "# hybrid torrent, 2 files\na.txt\t2\t0102\nempty\t0\t-\n"
        );
    }

    #[test]
    fn test_list_files_requires_file_tree() {
        let temp = TempDir::new().unwrap();
        let path = write_torrent(&temp, b"d4:infod4:name1:aee");

        let mut options = args(path);
        options.files = true;
        assert!(matches!(
            run(&options, &mut Vec::new()),
            Err(CliError::Metainfo(MetainfoError::MissingField("file tree")))
        ));
    }
}
