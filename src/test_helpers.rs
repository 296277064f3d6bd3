//! Shared test utilities for the album-index test suite.
//!
//! Collection trees are small enough to build programmatically, so fixtures
//! are created on the fly in a temp directory rather than copied from disk.
//!
//! # Usage
//!
//! ```rust
//! use crate::test_helpers::*;
//!
//! let tmp = make_collection(&[("berlin-2024", &["1.jpg", "2.png"])]);
//! let index = crate::scan::build_index(tmp.path()).unwrap();
//! assert_eq!(slugs(&index), vec!["berlin-2024"]);
//! ```

use std::fs;
use tempfile::TempDir;

use crate::types::Index;

/// Build a collection root in a temp directory: one subdirectory per
/// `(slug, files)` pair, each file written with placeholder content (the
/// scanner only looks at names and types).
pub fn make_collection(entries: &[(&str, &[&str])]) -> TempDir {
    let tmp = TempDir::new().unwrap();
    for (slug, files) in entries {
        let dir = tmp.path().join(slug);
        fs::create_dir_all(&dir).unwrap();
        for file in *files {
            fs::write(dir.join(file), "fake image").unwrap();
        }
    }
    tmp
}

/// All slugs in index order.
pub fn slugs(index: &Index) -> Vec<&str> {
    index.keys().map(String::as_str).collect()
}

/// All entry titles in index order.
pub fn entry_titles(index: &Index) -> Vec<&str> {
    index.values().map(|e| e.title.as_str()).collect()
}
