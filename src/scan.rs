//! Filesystem scanning: one collection root → one index.
//!
//! Stage 1 of the build. A collection root (`assets/images/albums` or
//! `assets/images/selections`) holds one subdirectory per album:
//!
//! ```text
//! assets/images/albums/            # Collection root
//! ├── berlin-2024/                 # Slug = directory name
//! │   ├── 01.jpg
//! │   ├── 02.jpg
//! │   └── notes.txt                # Not an image — excluded
//! ├── my_photo-trip/
//! │   └── cover.webp
//! └── README.md                    # Not a directory — skipped
//! ```
//!
//! Each subdirectory becomes an [`Entry`] keyed by its raw name, with a
//! derived display title and the lexicographically sorted list of direct
//! child image files. Everything is listed in sorted order so the result is
//! deterministic regardless of the platform's directory iteration order.
//!
//! A missing root is reported as [`ScanError::MissingRoot`]; the caller
//! decides whether that is fatal (albums) or yields an empty index
//! (selections). Any other I/O failure below the root aborts the scan.

use crate::naming::human_title;
use crate::types::{Entry, Index};
use std::fs;
use std::path::{Path, PathBuf};
use thiserror::Error;

#[derive(Error, Debug)]
pub enum ScanError {
    #[error("directory not found: {0}")]
    MissingRoot(PathBuf),
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

/// Image file extensions recognized by the scanner (matched case-insensitively).
const IMAGE_EXTENSIONS: &[&str] = &["jpg", "jpeg", "png", "gif", "webp", "avif", "svg"];

/// A directory child paired with its (non-followed) file type.
struct Child {
    name: String,
    file_type: fs::FileType,
}

/// Scan a collection root into an [`Index`].
///
/// Lists the immediate subdirectories of `root` in lexicographic order and
/// builds one entry per subdirectory. Non-directories directly under `root`
/// are skipped silently. Returns [`ScanError::MissingRoot`] when `root` does
/// not exist; any other I/O failure propagates as fatal.
pub fn build_index(root: &Path) -> Result<Index, ScanError> {
    if !root.is_dir() {
        return Err(ScanError::MissingRoot(root.to_path_buf()));
    }

    let mut index = Index::new();
    for child in sorted_children(root)? {
        if !child.file_type.is_dir() {
            continue;
        }
        let images = list_images(&root.join(&child.name))?;
        let title = human_title(&child.name);
        index.insert(child.name, Entry { title, images });
    }
    Ok(index)
}

/// List the image filenames directly inside one entry directory.
///
/// Regular files only — subdirectories and symlinks are skipped silently.
/// Filenames are returned sorted ascending, name only, no path.
fn list_images(dir: &Path) -> Result<Vec<String>, ScanError> {
    let images = sorted_children(dir)?
        .into_iter()
        .filter(|c| c.file_type.is_file() && is_image_name(&c.name))
        .map(|c| c.name)
        .collect();
    Ok(images)
}

/// List a directory's immediate children sorted ascending by name.
///
/// File types come from the directory entry without following symlinks, so a
/// symlink never counts as a file or directory here.
fn sorted_children(path: &Path) -> Result<Vec<Child>, ScanError> {
    let mut children = Vec::new();
    for entry in fs::read_dir(path)? {
        let entry = entry?;
        children.push(Child {
            name: entry.file_name().to_string_lossy().into_owned(),
            file_type: entry.file_type()?,
        });
    }
    children.sort_by(|a, b| a.name.cmp(&b.name));
    Ok(children)
}

/// Check a filename's extension (lowercased) against the allow-list.
fn is_image_name(name: &str) -> bool {
    Path::new(name)
        .extension()
        .map(|e| e.to_string_lossy().to_lowercase())
        .is_some_and(|ext| IMAGE_EXTENSIONS.contains(&ext.as_str()))
}
