//! # Album Index
//!
//! A one-shot batch tool that turns a gallery content tree into JSON index
//! files. Your filesystem is the data source: each subdirectory of the
//! albums tree becomes one index entry keyed by its directory name (the
//! slug), with a display title derived from that name and the sorted list of
//! its image files.
//!
//! # Architecture: Scan, Then Write
//!
//! The build is a linear two-stage pass, run once per collection:
//!
//! ```text
//! 1. Scan    assets/images/albums/      →  Index   (filesystem → ordered mapping)
//! 2. Write   Index                      →  data/albums.json   (pretty JSON)
//! ```
//!
//! The albums tree is required — a missing root aborts the run with a
//! non-zero exit before anything is written. The selections tree is
//! optional — a missing root yields an empty `selections.json` and a notice.
//!
//! # Module Map
//!
//! | Module | Role |
//! |--------|------|
//! | [`scan`] | Stage 1 — walks one collection root into an ordered [`types::Index`] |
//! | [`generate`] | Stage 2 — serializes an index to a pretty-printed JSON file |
//! | [`config`] | Paths configuration with optional sparse `config.toml` override |
//! | [`types`] | The `Entry`/`Index` shapes serialized to the output files |
//! | [`naming`] | Slug → display title derivation |
//! | [`output`] | CLI output formatting — pure `format_*` functions, `print_*` wrappers |
//!
//! # Design Decisions
//!
//! ## Determinism Over Filesystem Order
//!
//! Directory iteration order is platform-dependent, so every listing is
//! sorted by name before use and the index itself is a `BTreeMap`. Two runs
//! over an unchanged tree produce byte-identical output files.
//!
//! ## Explicit Paths, No Fixed Layout
//!
//! The albums/selections/output locations are an [`config::IndexConfig`]
//! passed into the builder rather than process-wide constants, so the whole
//! pipeline runs against arbitrary temporary directories in tests.
//!
//! ## Fail Fast, Write Nothing Partial
//!
//! The required albums scan runs before the output directory is even
//! created. Per-entry I/O failures below a root (permission errors and the
//! like) abort the run rather than producing an index that silently omits
//! entries.

pub mod config;
pub mod generate;
pub mod naming;
pub mod output;
pub mod scan;
pub mod types;

#[cfg(test)]
pub(crate) mod test_helpers;
