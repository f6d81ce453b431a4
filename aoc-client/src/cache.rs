//! File-based cache for puzzle inputs and submitted answers

use crate::error::ClientError;
use std::fs;
use std::path::{Path, PathBuf};

/// Directory-backed store mapping a (year, day, slot) key to a text blob
///
/// Layout under the root:
/// `inputs/input-{year}-day-{day:02}.txt` and
/// `answers/answer-{year}-day-{day:02}-part-{1|2}.txt`
///
/// Entries are written once and never evicted; deleting the file is the
/// only way to refresh one.
pub struct PuzzleCache {
    root: PathBuf,
}

impl PuzzleCache {
    /// Create a cache rooted at the given directory
    pub fn new(root: PathBuf) -> Self {
        Self { root }
    }

    /// Cache path for a day's puzzle input
    pub fn input_path(&self, year: u16, day: u8) -> PathBuf {
        self.root
            .join("inputs")
            .join(format!("input-{}-day-{:02}.txt", year, day))
    }

    /// Cache path for one submitted answer slot
    pub fn answer_path(&self, year: u16, day: u8, part: u8) -> PathBuf {
        self.root
            .join("answers")
            .join(format!("answer-{}-day-{:02}-part-{}.txt", year, day, part))
    }

    /// Check whether an entry exists
    pub fn contains(&self, path: &Path) -> bool {
        path.exists()
    }

    /// Read an entry, failing if it was never written
    pub fn read(&self, path: &Path) -> Result<String, ClientError> {
        if !path.exists() {
            return Err(ClientError::CacheMiss {
                path: path.to_path_buf(),
            });
        }
        Ok(fs::read_to_string(path)?)
    }

    /// Read an entry if present
    pub fn read_opt(&self, path: &Path) -> Result<Option<String>, ClientError> {
        if path.exists() {
            Ok(Some(fs::read_to_string(path)?))
        } else {
            Ok(None)
        }
    }

    /// Store an entry, creating parent directories as needed
    ///
    /// The text is written to a sibling temp file and renamed into place so
    /// a reader never observes a partially written entry. No locking;
    /// single-writer assumption.
    pub fn write(&self, path: &Path, text: &str) -> Result<(), ClientError> {
        if let Some(parent) = path.parent() {
            fs::create_dir_all(parent)?;
        }
        let tmp = path.with_extension("txt.tmp");
        fs::write(&tmp, text)?;
        fs::rename(&tmp, path)?;
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use tempfile::TempDir;

    #[test]
    fn test_input_path_format() {
        let cache = PuzzleCache::new(PathBuf::from("/tmp/aoc"));

        let path = cache.input_path(2022, 5);
        assert!(path.ends_with("inputs/input-2022-day-05.txt"));

        let path = cache.input_path(2022, 1);
        assert!(path.ends_with("inputs/input-2022-day-01.txt"));

        let path = cache.input_path(2022, 25);
        assert!(path.ends_with("inputs/input-2022-day-25.txt"));
    }

    #[test]
    fn test_answer_path_format() {
        let cache = PuzzleCache::new(PathBuf::from("/tmp/aoc"));

        let path = cache.answer_path(2022, 5, 1);
        assert!(path.ends_with("answers/answer-2022-day-05-part-1.txt"));

        let path = cache.answer_path(2022, 5, 2);
        assert!(path.ends_with("answers/answer-2022-day-05-part-2.txt"));

        let path = cache.answer_path(2022, 25, 1);
        assert!(path.ends_with("answers/answer-2022-day-25-part-1.txt"));
    }

    #[test]
    fn test_roundtrip_preserves_newlines() {
        let temp = TempDir::new().unwrap();
        let cache = PuzzleCache::new(temp.path().to_path_buf());
        let path = cache.input_path(2022, 1);

        assert!(!cache.contains(&path));
        cache.write(&path, "abc\ndef").unwrap();

        assert!(cache.contains(&path));
        assert_eq!(cache.read(&path).unwrap(), "abc\ndef");
        assert_eq!(cache.read_opt(&path).unwrap(), Some("abc\ndef".to_string()));
    }

    #[test]
    fn test_read_missing_entry() {
        let temp = TempDir::new().unwrap();
        let cache = PuzzleCache::new(temp.path().to_path_buf());
        let path = cache.answer_path(2022, 3, 2);

        match cache.read(&path) {
            Err(ClientError::CacheMiss { path: missing }) => assert_eq!(missing, path),
            other => panic!("Expected CacheMiss, got {:?}", other.map(|_| ())),
        }
        assert_eq!(cache.read_opt(&path).unwrap(), None);
    }

    #[test]
    fn test_write_leaves_no_temp_file() {
        let temp = TempDir::new().unwrap();
        let cache = PuzzleCache::new(temp.path().to_path_buf());
        let path = cache.input_path(2022, 9);

        cache.write(&path, "contents").unwrap();

        let entries: Vec<_> = fs::read_dir(path.parent().unwrap())
            .unwrap()
            .map(|e| e.unwrap().file_name())
            .collect();
        assert_eq!(entries, vec!["input-2022-day-09.txt"]);
    }

    #[test]
    fn test_overwrite_replaces_content() {
        let temp = TempDir::new().unwrap();
        let cache = PuzzleCache::new(temp.path().to_path_buf());
        let path = cache.input_path(2022, 12);

        cache.write(&path, "first").unwrap();
        cache.write(&path, "second").unwrap();
        assert_eq!(cache.read(&path).unwrap(), "second");
    }
}
