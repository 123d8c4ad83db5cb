// src/cli.rs
// =============================================================================
// This file defines our command-line interface using the `clap` crate.
//
//   export-bookmarks [BOOKMARKS_FILE] [-o OUTPUT] [-check-status] [-y]
//
// `-check-status` is spelled with ONE dash for compatibility with the
// original tool. clap only knows `--long` flags, so normalize_args()
// rewrites that one spelling before clap sees it.
// =============================================================================

use crate::checker::CheckSettings;
use clap::Parser;
use std::ffi::OsString;
use std::path::PathBuf;
use std::time::Duration;

#[derive(Parser, Debug, Clone)]
#[command(
    name = "export-bookmarks",
    version,
    about = "Export your browser bookmarks to a CSV file",
    long_about = "export-bookmarks flattens a Chrome/Chromium Bookmarks file into a \
                  Folder,Title,URL table and can optionally check which links are still alive."
)]
pub struct Cli {
    /// Path to your Bookmarks file (searched for in the default browser profile if omitted)
    pub bookmarks_file: Option<PathBuf>,

    /// Output file name, should end with .csv
    #[arg(short, long, default_value = "exported_bookmarks.csv")]
    pub output: PathBuf,

    /// Additionally check each website's status: online / not found / failed to check
    #[arg(long = "check-status")]
    pub check_status: bool,

    /// Answer "yes" to every confirmation prompt
    #[arg(short = 'y', long)]
    pub yes: bool,

    /// Per-request timeout in seconds when links are checked one at a time
    #[arg(long = "timeout", value_name = "SECS", default_value_t = 5)]
    pub timeout_secs: u64,

    /// Time limit in seconds for the whole batch when links are checked concurrently
    #[arg(long = "batch-timeout", value_name = "SECS", default_value_t = 30)]
    pub batch_timeout_secs: u64,

    /// How many links to check at the same time
    #[arg(long = "max-in-flight", value_name = "N", default_value_t = 50)]
    pub max_in_flight: usize,

    /// Don't draw the progress bar while checking links
    #[arg(long)]
    pub no_progress: bool,
}

impl Cli {
    /// Parses the process arguments, accepting `-check-status`
    pub fn parse_args() -> Self {
        Cli::parse_from(normalize_args(std::env::args_os()))
    }

    pub fn check_settings(&self) -> CheckSettings {
        CheckSettings {
            request_timeout: Duration::from_secs(self.timeout_secs),
            batch_timeout: Duration::from_secs(self.batch_timeout_secs),
            max_in_flight: self.max_in_flight,
            show_progress: !self.no_progress,
        }
    }
}

// Rewrites the single-dash `-check-status` into `--check-status`
pub fn normalize_args<I>(args: I) -> Vec<OsString>
where
    I: IntoIterator,
    I::Item: Into<OsString>,
{
    args.into_iter()
        .map(Into::into)
        .map(|arg| {
            if arg == "-check-status" {
                OsString::from("--check-status")
            } else {
                arg
            }
        })
        .collect()
}
