//! Shared types serialized to the output index files.
//!
//! These shapes are the tool's external contract: `albums.json` and
//! `selections.json` are both an [`Index`] serialized as a JSON object.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;

/// One album or selection: a display title plus its ordered image filenames.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Entry {
    /// Display title derived from the directory name.
    pub title: String,
    /// Image filenames (name only, no path), lexicographic ascending.
    pub images: Vec<String>,
}

/// Ordered mapping from slug (directory name) to [`Entry`].
///
/// A `BTreeMap` keyed by the raw directory name gives the lexicographic
/// key order the output format requires, and makes serialization
/// deterministic across runs.
pub type Index = BTreeMap<String, Entry>;
