//! Source loading: the line-indexed character buffer the tokenizer walks.

use std::fs;
use std::io;
use std::path::{Path, PathBuf};

/// Character appended as the final record so every real line is followed by
/// at least one more token.
pub const PADDING: char = ' ';

#[derive(Debug, thiserror::Error)]
pub enum LoadError {
    #[error("File not found: {0}")]
    NotFound(PathBuf),
    #[error("IO error reading {path}: {source}")]
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
}

/// Line-indexed source characters plus the padding record.
///
/// Each record runs up to and including its newline; text after the last
/// newline forms its own record. Concatenating every record therefore gives
/// back the source followed by [`PADDING`].
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SourceBuffer {
    lines: Vec<Vec<char>>,
    size: usize,
}

impl SourceBuffer {
    pub fn from_text(text: &str) -> Self {
        let mut lines: Vec<Vec<char>> = text
            .split_inclusive('\n')
            .map(|line| line.chars().collect())
            .collect();
        lines.push(vec![PADDING]);
        let size = lines.iter().map(Vec::len).sum();
        Self { lines, size }
    }

    /// A buffer holding no data at all, not even padding.
    pub fn empty() -> Self {
        Self::default()
    }

    pub fn lines(&self) -> &[Vec<char>] {
        &self.lines
    }

    /// Total character count including the padding character.
    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn row_len(&self, row: usize) -> Option<usize> {
        self.lines.get(row).map(Vec::len)
    }

    pub fn char_at(&self, row: usize, col: usize) -> Option<char> {
        self.lines.get(row)?.get(col).copied()
    }
}

/// Outcome of a load that did not hit a hard failure.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Loaded {
    Source(SourceBuffer),
    /// Extension did not match; nothing was read.
    InvalidFile,
}

/// True if `path` ends in `.{extension}`.
pub fn has_extension(path: &Path, extension: &str) -> bool {
    path.extension().is_some_and(|ext| ext == extension)
}

/// Validate the extension, then read the whole file into a [`SourceBuffer`].
///
/// A wrong extension is a soft outcome ([`Loaded::InvalidFile`]). A missing or
/// unreadable file is a hard error. Invalid UTF-8 is replaced rather than
/// rejected.
pub fn load_file(path: &Path, extension: &str) -> Result<Loaded, LoadError> {
    if !has_extension(path, extension) {
        return Ok(Loaded::InvalidFile);
    }
    let bytes = fs::read(path).map_err(|source| match source.kind() {
        io::ErrorKind::NotFound => LoadError::NotFound(path.to_path_buf()),
        _ => LoadError::Io {
            path: path.to_path_buf(),
            source,
        },
    })?;
    let text = String::from_utf8_lossy(&bytes);
    log::info!("Loaded {} ({} bytes)", path.display(), bytes.len());

    Ok(Loaded::Source(SourceBuffer::from_text(&text)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;
    use tempfile::TempDir;

    fn rows(buffer: &SourceBuffer) -> Vec<String> {
        buffer.lines().iter().map(|l| l.iter().collect()).collect()
    }

    #[test]
    fn records_keep_their_newline() {
        let buffer = SourceBuffer::from_text("# Title\nbody\n");
        assert_eq!(rows(&buffer), vec!["# Title\n", "body\n", " "]);
        assert_eq!(buffer.size(), 14);
    }

    #[test]
    fn trailing_text_is_its_own_record() {
        let buffer = SourceBuffer::from_text("a\nbc");
        assert_eq!(rows(&buffer), vec!["a\n", "bc", " "]);
        assert_eq!(buffer.size(), 5);
    }

    #[test]
    fn empty_text_is_only_padding() {
        let buffer = SourceBuffer::from_text("");
        assert_eq!(rows(&buffer), vec![" "]);
        assert_eq!(buffer.size(), 1);
    }

    #[test]
    fn blank_lines_are_records() {
        let buffer = SourceBuffer::from_text("\n\n");
        assert_eq!(rows(&buffer), vec!["\n", "\n", " "]);
    }

    #[test]
    fn size_counts_chars_not_bytes() {
        let buffer = SourceBuffer::from_text("é\n");
        assert_eq!(buffer.size(), 3);
        assert_eq!(buffer.char_at(0, 0), Some('é'));
    }

    #[test]
    fn char_at_out_of_range() {
        let buffer = SourceBuffer::from_text("ab");
        assert_eq!(buffer.char_at(0, 2), None);
        assert_eq!(buffer.char_at(9, 0), None);
        assert_eq!(buffer.row_len(1), Some(1));
        assert_eq!(buffer.row_len(2), None);
    }

    #[test]
    fn empty_buffer_has_no_padding() {
        let buffer = SourceBuffer::empty();
        assert!(buffer.is_empty());
        assert!(buffer.lines().is_empty());
    }

    #[test]
    fn extension_check() {
        assert!(has_extension(Path::new("notes/today.md"), "md"));
        assert!(!has_extension(Path::new("notes/today.txt"), "md"));
        assert!(!has_extension(Path::new("README"), "md"));
        assert!(!has_extension(Path::new("archive.md.bak"), "md"));
    }

    #[test]
    fn load_reads_file() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.md");
        fs::write(&path, "# Hi\n").unwrap();

        let loaded = load_file(&path, "md").unwrap();
        assert_eq!(loaded, Loaded::Source(SourceBuffer::from_text("# Hi\n")));
    }

    #[test]
    fn load_wrong_extension_is_soft() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("doc.txt");
        fs::write(&path, "# Hi\n").unwrap();

        assert_eq!(load_file(&path, "md").unwrap(), Loaded::InvalidFile);
    }

    #[test]
    fn load_missing_file_is_hard() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("missing.md");

        let result = load_file(&path, "md");
        assert!(matches!(result, Err(LoadError::NotFound(_))));
    }

    #[cfg(unix)]
    #[test]
    fn load_through_file_parent_is_io_error() {
        let dir = TempDir::new().unwrap();
        let parent = dir.path().join("note.md");
        fs::write(&parent, "# Hi\n").unwrap();

        // the path does not exist, but the failure is not a missing file
        let result = load_file(&parent.join("inner.md"), "md");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_directory_is_io_error() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("folder.md");
        fs::create_dir(&path).unwrap();

        let result = load_file(&path, "md");
        assert!(matches!(result, Err(LoadError::Io { .. })));
    }

    #[test]
    fn load_replaces_invalid_utf8() {
        let dir = TempDir::new().unwrap();
        let path = dir.path().join("bytes.md");
        fs::write(&path, [b'a', 0xff, b'\n']).unwrap();

        let Loaded::Source(buffer) = load_file(&path, "md").unwrap() else {
            panic!("expected source");
        };
        assert_eq!(rows(&buffer), vec!["a\u{fffd}\n", " "]);
    }
}
