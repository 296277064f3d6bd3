//! CLI output formatting.
//!
//! Each line the tool prints is built by a pure `format_*` function (no I/O,
//! no side effects) with a thin `print_*` wrapper writing to stdout, so the
//! exact console output is unit-testable.
//!
//! ## Build output
//!
//! ```text
//! Wrote data/albums.json (3 albums)
//! No selections folder at assets/images/selections, writing empty selections.json
//! Wrote data/selections.json (0 selections)
//! ```
//!
//! ## Check output
//!
//! Information-first: each entry leads with its positional index and title;
//! the source directory is indented context.
//!
//! ```text
//! Albums
//!     001 Berlin 2024 (3 photos)
//!         Source: berlin-2024/
//!     002 My Photo Trip (1 photo)
//!         Source: my_photo-trip/
//! ```

use crate::types::Index;
use std::path::Path;

/// Format a 1-based positional index as 3-digit zero-padded.
fn format_index(pos: usize) -> String {
    format!("{:0>3}", pos)
}

/// Pluralize a photo count: `(1 photo)` / `(3 photos)`.
fn photo_count(n: usize) -> String {
    if n == 1 {
        "(1 photo)".to_string()
    } else {
        format!("({n} photos)")
    }
}

/// Confirmation line for one written index file.
pub fn format_wrote_line(path: &Path, count: usize, noun: &str) -> String {
    format!("Wrote {} ({} {})", path.display(), count, noun)
}

/// Notice printed when an optional input tree is absent.
pub fn format_missing_optional_notice(path: &Path, file_name: &str) -> String {
    format!(
        "No folder at {}, writing empty {}",
        path.display(),
        file_name
    )
}

/// Format one collection for the `check` listing.
///
/// `label` is the section header ("Albums" / "Selections").
pub fn format_check_output(label: &str, index: &Index) -> Vec<String> {
    let mut lines = vec![label.to_string()];
    if index.is_empty() {
        lines.push("    (none)".to_string());
        return lines;
    }
    for (pos, (slug, entry)) in index.iter().enumerate() {
        lines.push(format!(
            "    {} {} {}",
            format_index(pos + 1),
            entry.title,
            photo_count(entry.images.len())
        ));
        lines.push(format!("        Source: {slug}/"));
    }
    lines
}

/// Print a check listing to stdout.
pub fn print_check_output(label: &str, index: &Index) {
    for line in format_check_output(label, index) {
        println!("{line}");
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::types::Entry;

    fn index_of(entries: &[(&str, &str, usize)]) -> Index {
        let mut index = Index::new();
        for (slug, title, n) in entries {
            index.insert(
                slug.to_string(),
                Entry {
                    title: title.to_string(),
                    images: (1..=*n).map(|i| format!("{i}.jpg")).collect(),
                },
            );
        }
        index
    }

    #[test]
    fn wrote_line_with_count() {
        let line = format_wrote_line(Path::new("data/albums.json"), 3, "albums");
        assert_eq!(line, "Wrote data/albums.json (3 albums)");
    }

    #[test]
    fn wrote_line_zero_entries() {
        let line = format_wrote_line(Path::new("data/selections.json"), 0, "selections");
        assert_eq!(line, "Wrote data/selections.json (0 selections)");
    }

    #[test]
    fn missing_optional_notice() {
        let line = format_missing_optional_notice(
            Path::new("assets/images/selections"),
            "selections.json",
        );
        assert_eq!(
            line,
            "No folder at assets/images/selections, writing empty selections.json"
        );
    }

    #[test]
    fn check_output_lists_entries_with_positions() {
        let index = index_of(&[("berlin-2024", "Berlin 2024", 3), ("trip", "Trip", 1)]);
        let lines = format_check_output("Albums", &index);

        assert_eq!(
            lines,
            vec![
                "Albums",
                "    001 Berlin 2024 (3 photos)",
                "        Source: berlin-2024/",
                "    002 Trip (1 photo)",
                "        Source: trip/",
            ]
        );
    }

    #[test]
    fn check_output_empty_index() {
        let lines = format_check_output("Selections", &Index::new());
        assert_eq!(lines, vec!["Selections", "    (none)"]);
    }

    #[test]
    fn format_index_pads_to_three_digits() {
        assert_eq!(format_index(1), "001");
        assert_eq!(format_index(42), "042");
        assert_eq!(format_index(100), "100");
    }
}
