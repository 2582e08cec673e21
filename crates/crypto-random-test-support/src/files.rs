//! Temporary input files for CLI tests.

use std::fs;
use std::path::{Path, PathBuf};

use uuid::Uuid;

/// A uniquely named file in the system temp directory, removed on drop.
#[derive(Debug)]
pub struct TempLineFile {
    path: PathBuf,
}

impl TempLineFile {
    /// Write `contents` verbatim to a fresh temp file.
    ///
    /// # Panics
    ///
    /// Panics if the file cannot be written.
    #[must_use]
    pub fn with_contents(contents: impl AsRef<[u8]>) -> Self {
        let path = Self::unused_path();
        fs::write(&path, contents).unwrap();
        Self { path }
    }

    /// Write each line followed by `\n`.
    #[must_use]
    pub fn with_lines(lines: &[&str]) -> Self {
        let mut contents = String::new();
        for line in lines {
            contents.push_str(line);
            contents.push('\n');
        }
        Self::with_contents(contents)
    }

    /// A path in the temp directory that no test has created.
    #[must_use]
    pub fn unused_path() -> PathBuf {
        std::env::temp_dir().join(format!("crypto-random-{}.txt", Uuid::new_v4()))
    }

    /// Location of the file.
    #[must_use]
    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl Drop for TempLineFile {
    fn drop(&mut self) {
        let _ = fs::remove_file(&self.path);
    }
}
