//! Index serialization: write one index as a pretty-printed JSON file.
//!
//! Stage 2 of the build. Output is 2-space indented UTF-8 JSON with
//! non-ASCII characters kept literal (serde_json never escapes them), and
//! each file is fully overwritten on every run — there is no merging with
//! prior content. Because [`Index`](crate::types::Index) iterates its keys in
//! sorted order, the bytes written are identical across runs over an
//! unchanged filesystem.

use crate::types::Index;
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum GenerateError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
    #[error("JSON serialization error: {0}")]
    Json(#[from] serde_json::Error),
}

/// Serialize `index` to `<out_dir>/<file_name>`, creating `out_dir` (and
/// parents) if needed. Returns the path written.
pub fn write_index(out_dir: &Path, file_name: &str, index: &Index) -> Result<PathBuf, GenerateError> {
    fs::create_dir_all(out_dir)?;
    let path = out_dir.join(file_name);
    let json = serde_json::to_string_pretty(index)?;
    fs::write(&path, json)?;
    Ok(path)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;
    use tempfile::TempDir;

    fn sample_index() -> Index {
        let mut index = Index::new();
        index.insert(
            "berlin-2024".to_string(),
            Entry {
                title: "Berlin 2024".to_string(),
                images: vec!["1.jpg".to_string(), "2.png".to_string()],
            },
        );
        index
    }

    #[test]
    fn writes_two_space_indented_json() {
        let tmp = TempDir::new().unwrap();
        let path = write_index(tmp.path(), "albums.json", &sample_index()).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert_eq!(
            content,
            "{\n  \"berlin-2024\": {\n    \"title\": \"Berlin 2024\",\n    \"images\": [\n      \"1.jpg\",\n      \"2.png\"\n    ]\n  }\n}"
        );
    }

    #[test]
    fn empty_index_writes_empty_object() {
        let tmp = TempDir::new().unwrap();
        let path = write_index(tmp.path(), "selections.json", &Index::new()).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn creates_output_directory_with_parents() {
        let tmp = TempDir::new().unwrap();
        let out = tmp.path().join("nested/data");
        let path = write_index(&out, "albums.json", &Index::new()).unwrap();

        assert!(path.exists());
        assert_eq!(path, out.join("albums.json"));
    }

    #[test]
    fn overwrites_previous_content() {
        let tmp = TempDir::new().unwrap();
        write_index(tmp.path(), "albums.json", &sample_index()).unwrap();
        let path = write_index(tmp.path(), "albums.json", &Index::new()).unwrap();

        assert_eq!(std::fs::read_to_string(path).unwrap(), "{}");
    }

    #[test]
    fn non_ascii_kept_literal() {
        let tmp = TempDir::new().unwrap();
        let mut index = Index::new();
        index.insert(
            "café".to_string(),
            Entry {
                title: "Café".to_string(),
                images: vec![],
            },
        );
        let path = write_index(tmp.path(), "albums.json", &index).unwrap();

        let content = std::fs::read_to_string(path).unwrap();
        assert!(content.contains("café"));
        assert!(content.contains("Café"));
        assert!(!content.contains("\\u"));
    }

    #[test]
    fn repeated_writes_are_byte_identical() {
        let tmp = TempDir::new().unwrap();
        let index = sample_index();

        let first = write_index(tmp.path(), "albums.json", &index).unwrap();
        let first_bytes = std::fs::read(first).unwrap();
        let second = write_index(tmp.path(), "albums.json", &index).unwrap();
        let second_bytes = std::fs::read(second).unwrap();

        assert_eq!(first_bytes, second_bytes);
    }
}
