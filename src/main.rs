use album_index::{config, generate, output, scan, types::Index};
use clap::{Parser, Subcommand};
use std::path::{Path, PathBuf};

fn version_string() -> &'static str {
    let on_tag = env!("ON_RELEASE_TAG");
    if on_tag == "true" {
        env!("CARGO_PKG_VERSION")
    } else {
        let hash = env!("GIT_HASH");
        if hash.is_empty() {
            "dev@unknown"
        } else {
            // Leaked once at startup — trivial, called exactly once
            Box::leak(format!("dev@{hash}").into_boxed_str())
        }
    }
}

#[derive(Parser)]
#[command(name = "album-index")]
#[command(about = "Build JSON album indexes from a gallery content tree")]
#[command(long_about = "\
Build JSON album indexes from a gallery content tree

Your filesystem is the data source. Each subdirectory of the albums tree
becomes one entry keyed by its directory name, with a derived display title
and the sorted list of its image files.

Content structure:

  <root>/
  ├── config.toml                      # Optional path overrides
  ├── assets/images/albums/            # Required input tree
  │   ├── berlin-2024/
  │   │   ├── 01.jpg
  │   │   └── 02.jpg
  │   └── my_photo-trip/
  │       └── cover.webp
  ├── assets/images/selections/        # Optional input tree
  │   └── best-of/
  │       └── 01.jpg
  └── data/                            # Output (created if absent)
      ├── albums.json
      └── selections.json

Titles are derived from directory names: dashes and underscores become
spaces, each word is capitalized (my_photo-trip → \"My Photo Trip\").

Run 'album-index gen-config' to print a documented config.toml.")]
#[command(version = version_string())]
struct Cli {
    /// Project root directory
    #[arg(long, default_value = ".", global = true)]
    root: PathBuf,

    #[command(subcommand)]
    command: Option<Command>,
}

#[derive(Subcommand)]
enum Command {
    /// Scan both input trees and write the JSON indexes (the default)
    Build,
    /// Scan and print the discovered structure without writing anything
    Check,
    /// Print a stock config.toml with all options documented
    GenConfig,
}

fn main() -> Result<(), Box<dyn std::error::Error>> {
    let cli = Cli::parse();

    match cli.command.unwrap_or(Command::Build) {
        Command::Build => build(&cli.root)?,
        Command::Check => check(&cli.root)?,
        Command::GenConfig => print!("{}", config::stock_config_toml()),
    }

    Ok(())
}

/// Run the full build: scan albums (required), scan selections (optional),
/// write both indexes.
///
/// A missing albums root propagates before anything is written, so a failed
/// run leaves no partial output.
fn build(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(root)?;

    let albums = scan::build_index(&config.albums_root(root))?;

    let out_dir = config.output_root(root);
    let path = generate::write_index(&out_dir, "albums.json", &albums)?;
    println!("{}", output::format_wrote_line(&path, albums.len(), "albums"));

    let selections = scan_optional(&config.selections_root(root))?;
    let path = generate::write_index(&out_dir, "selections.json", &selections)?;
    println!(
        "{}",
        output::format_wrote_line(&path, selections.len(), "selections")
    );

    Ok(())
}

/// Scan both trees and print their structure; nothing is written.
fn check(root: &Path) -> Result<(), Box<dyn std::error::Error>> {
    let config = config::load_config(root)?;

    let albums = scan::build_index(&config.albums_root(root))?;
    output::print_check_output("Albums", &albums);

    println!();
    let selections = scan_optional(&config.selections_root(root))?;
    output::print_check_output("Selections", &selections);

    Ok(())
}

/// Scan an optional input tree: a missing root prints a notice and yields an
/// empty index instead of failing.
fn scan_optional(root: &Path) -> Result<Index, scan::ScanError> {
    match scan::build_index(root) {
        Ok(index) => Ok(index),
        Err(scan::ScanError::MissingRoot(path)) => {
            println!(
                "{}",
                output::format_missing_optional_notice(&path, "selections.json")
            );
            Ok(Index::new())
        }
        Err(e) => Err(e),
    }
}
