use std::fs::File;
use std::io::{BufRead, BufReader, Lines};
use std::path::Path;

use keysweep_types::Key;
use tracing::warn;

use crate::error::ReadError;

/// Lazy, finite, non-restartable sequence of keys from a line-oriented
/// input: one key per line, in input order, no dedup, no trimming beyond
/// the line terminator. Trailing blank lines yield empty keys, which are
/// valid inputs the store will simply fail to find.
///
/// A mid-stream read error ends the sequence; the keys produced before it
/// are kept (partial-success policy) and the error is available through
/// [`KeySource::take_error`].
#[derive(Debug)]
pub struct KeySource<R: BufRead> {
    lines: Lines<R>,
    keys_read: usize,
    error: Option<ReadError>,
}

impl KeySource<BufReader<File>> {
    /// Open a key file for reading.
    pub fn open(path: &Path) -> Result<Self, ReadError> {
        let file = File::open(path).map_err(|source| ReadError::Open {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::from_reader(BufReader::new(file)))
    }

    /// Read a key file eagerly.
    ///
    /// Fails only if the file cannot be opened. A mid-stream failure is
    /// reported inside the returned [`KeyList`] alongside the prefix of
    /// keys that was read before it.
    pub fn load(path: &Path) -> Result<KeyList, ReadError> {
        let mut source = Self::open(path)?;
        let keys = source.by_ref().collect();
        Ok(KeyList {
            keys,
            error: source.take_error(),
        })
    }
}

impl<R: BufRead> KeySource<R> {
    /// Wrap any buffered reader as a key source.
    pub fn from_reader(reader: R) -> Self {
        Self {
            lines: reader.lines(),
            keys_read: 0,
            error: None,
        }
    }

    /// The read error that ended the sequence, if any.
    pub fn take_error(&mut self) -> Option<ReadError> {
        self.error.take()
    }
}

impl<R: BufRead> Iterator for KeySource<R> {
    type Item = Key;

    fn next(&mut self) -> Option<Key> {
        if self.error.is_some() {
            return None;
        }
        match self.lines.next() {
            Some(Ok(line)) => {
                self.keys_read += 1;
                Some(Key::from(line))
            }
            Some(Err(source)) => {
                warn!(keys_read = self.keys_read, error = %source, "key read failed");
                self.error = Some(ReadError::Stream {
                    keys_read: self.keys_read,
                    source,
                });
                None
            }
            None => None,
        }
    }
}

/// The outcome of eagerly reading a key file: the keys, plus the error that
/// cut the read short, if one did.
#[derive(Debug)]
pub struct KeyList {
    pub keys: Vec<Key>,
    pub error: Option<ReadError>,
}

impl KeyList {
    /// An empty key list with no error.
    pub fn empty() -> Self {
        Self {
            keys: Vec::new(),
            error: None,
        }
    }

    /// Number of keys read.
    pub fn len(&self) -> usize {
        self.keys.len()
    }

    /// Returns `true` if no keys were read.
    pub fn is_empty(&self) -> bool {
        self.keys.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::{self, Cursor, Read};

    /// A reader that fails on its first read, for simulating a source that
    /// dies mid-stream when chained after a cursor.
    struct BrokenReader;

    impl Read for BrokenReader {
        fn read(&mut self, _buf: &mut [u8]) -> io::Result<usize> {
            Err(io::Error::other("simulated read failure"))
        }
    }

    #[test]
    fn yields_keys_in_input_order() {
        let source = KeySource::from_reader(Cursor::new("a\nb\nc\n"));
        let keys: Vec<Key> = source.collect();
        assert_eq!(keys, vec![Key::new("a"), Key::new("b"), Key::new("c")]);
    }

    #[test]
    fn preserves_duplicates_and_blank_lines() {
        let source = KeySource::from_reader(Cursor::new("a\na\n\n"));
        let keys: Vec<Key> = source.collect();
        assert_eq!(keys, vec![Key::new("a"), Key::new("a"), Key::new("")]);
    }

    #[test]
    fn last_line_without_newline_is_a_key() {
        let source = KeySource::from_reader(Cursor::new("a\nb"));
        let keys: Vec<Key> = source.collect();
        assert_eq!(keys.len(), 2);
        assert_eq!(keys[1], Key::new("b"));
    }

    #[test]
    fn empty_input_yields_no_keys() {
        let mut source = KeySource::from_reader(Cursor::new(""));
        assert!(source.next().is_none());
        assert!(source.take_error().is_none());
    }

    #[test]
    fn mid_stream_failure_keeps_prefix() {
        let reader = BufReader::new(Cursor::new(&b"a\nb\n"[..]).chain(BrokenReader));
        let mut source = KeySource::from_reader(reader);

        let keys: Vec<Key> = source.by_ref().collect();
        assert_eq!(keys, vec![Key::new("a"), Key::new("b")]);

        let error = source.take_error().expect("error should be recorded");
        assert!(matches!(error, ReadError::Stream { keys_read: 2, .. }));
    }

    #[test]
    fn sequence_stays_ended_after_failure() {
        let reader = BufReader::new(Cursor::new(&b"a\n"[..]).chain(BrokenReader));
        let mut source = KeySource::from_reader(reader);
        assert!(source.next().is_some());
        assert!(source.next().is_none());
        assert!(source.next().is_none());
    }

    #[test]
    fn open_missing_file_fails() {
        let err = KeySource::open(Path::new("/nonexistent/keys.txt")).unwrap_err();
        assert!(matches!(err, ReadError::Open { .. }));
    }

    #[test]
    fn load_reads_whole_file() {
        let dir = tempfile::TempDir::new().unwrap();
        let path = dir.path().join("keys.txt");
        std::fs::write(&path, "k1\nk2\nk3\n").unwrap();

        let list = KeySource::load(&path).unwrap();
        assert_eq!(list.len(), 3);
        assert!(list.error.is_none());
    }
}
