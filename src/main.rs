// src/main.rs
// =============================================================================
// This is the entry point of our CLI application.
//
// What happens here:
// 1. Parse command-line arguments using clap
// 2. Find and read the Bookmarks file, checking its version
// 3. Flatten the folder tree into (folder, title, url) records
// 4. Optionally check every link (--check-status)
// 5. Write everything to a CSV file
//
// The tool always exits with code 0. Problems (missing file, broken JSON,
// a declined prompt) are reported as a message, not as an exit code.
// =============================================================================

mod bookmarks;
mod checker;
mod cli;
mod export;
mod logging;
mod prompt;

use anyhow::Result;
use bookmarks::{locate, BookmarksDocument, SUPPORTED_VERSION};
use checker::{CheckStrategy, Checker};
use cli::Cli;
use prompt::{AssumeYes, Confirm, Terminal};
use std::path::PathBuf;
use tracing::info;

// How a run ended, when it didn't end in an error
#[derive(Debug, PartialEq, Eq)]
enum Outcome {
    /// The CSV file was written
    Exported { path: PathBuf, count: usize },
    /// No path given and no Bookmarks file in the default locations
    NoBookmarksFile,
    /// The user said no to a prompt
    Cancelled,
}

#[tokio::main]
async fn main() {
    if let Err(e) = logging::init_logging() {
        eprintln!("Warning: {}", e);
    }

    let cli = Cli::parse_args();

    let mut confirm: Box<dyn Confirm> = if cli.yes {
        Box::new(AssumeYes)
    } else {
        Box::new(Terminal::stdio())
    };

    // Detect once which checking strategy this runtime supports
    let strategy = CheckStrategy::detect();

    match run(&cli, strategy, confirm.as_mut()).await {
        Ok(outcome) => report(&outcome),
        Err(e) => eprintln!("Error: {:#}", e),
    }

    std::process::exit(0);
}

// This is the main application logic
async fn run(cli: &Cli, strategy: CheckStrategy, confirm: &mut dyn Confirm) -> Result<Outcome> {
    let path = match &cli.bookmarks_file {
        Some(path) => path.clone(),
        None => match locate::find_default() {
            Some(path) => path,
            None => return Ok(Outcome::NoBookmarksFile),
        },
    };
    info!(path = %path.display(), "reading bookmarks");

    let document = BookmarksDocument::read(&path)?;

    if !document.is_supported_version() {
        println!(
            "Unfortunately, the current version of the Bookmarks file is \"{}\", \
             but this tool was designed to work with version \"{}\"",
            document.version_label(),
            SUPPORTED_VERSION
        );
        if !confirm.confirm("Do you want to proceed [Y/n]? ")? {
            return Ok(Outcome::Cancelled);
        }
    }

    let mut records = document.flatten()?;
    println!("📄 Found {} bookmark(s)", records.len());

    // Stays false if the check was skipped at the prompt, so the Status
    // column is left out
    let mut include_status = false;
    if cli.check_status {
        let checker = Checker::new(strategy, cli.check_settings());
        println!("\n🌐 Checking {} link(s) ({:?})...\n", records.len(), checker.strategy());
        let checked = checker.check(records, confirm).await?;
        include_status = checked.annotated;
        records = checked.records;
    }

    export::write_csv(&cli.output, &records, include_status)?;

    Ok(Outcome::Exported {
        path: cli.output.clone(),
        count: records.len(),
    })
}

fn report(outcome: &Outcome) {
    match outcome {
        Outcome::Exported { path, count } => {
            println!(
                "✅ Success! {} bookmark(s) were exported to \"{}\"",
                count,
                path.display()
            );
        }
        Outcome::NoBookmarksFile => {
            println!(
                "Sorry, the Bookmarks file was not found. Please specify the path manually:\n  \
                 export-bookmarks {{Your_correct_path}}/Bookmarks"
            );
        }
        Outcome::Cancelled => println!("Nothing was exported."),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::prompt::Scripted;
    use std::path::Path;

    const SCENARIO: &str = r#"{"version":1,"roots":{"bookmark_bar":{"name":"Bar","children":[{"type":"folder","name":"Sub","children":[{"name":"Ex","url":"http://example.com"}]}]}}}"#;

    fn cli_for(input: &Path, output: &Path, check_status: bool) -> Cli {
        Cli {
            bookmarks_file: Some(input.to_path_buf()),
            output: output.to_path_buf(),
            check_status,
            yes: false,
            timeout_secs: 5,
            batch_timeout_secs: 30,
            max_in_flight: 50,
            no_progress: true,
        }
    }

    fn read_csv(path: &Path) -> String {
        let bytes = std::fs::read(path).unwrap();
        String::from_utf8(bytes[3..].to_vec()).unwrap()
    }

    #[tokio::test]
    async fn test_scenario_exports_one_record() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Bookmarks");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, SCENARIO).unwrap();

        let mut confirm = Scripted::new(&[]);
        let outcome = run(&cli_for(&input, &output, false), CheckStrategy::Sequential, &mut confirm)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Exported { path: output.clone(), count: 1 });
        assert_eq!(read_csv(&output), "Folder,Title,URL\r\nBar/Sub,Ex,http://example.com\r\n");
        assert!(confirm.asked.is_empty());
    }

    #[tokio::test]
    async fn test_version_mismatch_declined_writes_nothing() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Bookmarks");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, SCENARIO.replace("\"version\":1", "\"version\":2")).unwrap();

        let mut confirm = Scripted::new(&[false]);
        let outcome = run(&cli_for(&input, &output, false), CheckStrategy::Sequential, &mut confirm)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Cancelled);
        assert!(!output.exists());
        assert_eq!(confirm.asked.len(), 1);
    }

    #[tokio::test]
    async fn test_version_mismatch_accepted_exports() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Bookmarks");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, SCENARIO.replace("\"version\":1,", "")).unwrap();

        let mut confirm = Scripted::new(&[true]);
        let outcome = run(&cli_for(&input, &output, false), CheckStrategy::Sequential, &mut confirm)
            .await
            .unwrap();

        assert!(matches!(outcome, Outcome::Exported { count: 1, .. }));
        assert!(output.exists());
    }

    #[tokio::test]
    async fn test_missing_input_file_is_reported() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Bookmarks");
        let output = dir.path().join("out.csv");

        let err = run(&cli_for(&input, &output, false), CheckStrategy::Sequential, &mut Scripted::new(&[]))
            .await
            .unwrap_err();

        assert!(err.to_string().starts_with("Oops! No such file or directory"));
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_malformed_tree_aborts_before_output() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Bookmarks");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, SCENARIO.replace(",\"url\":\"http://example.com\"", "")).unwrap();

        let result = run(&cli_for(&input, &output, false), CheckStrategy::Sequential, &mut Scripted::new(&[]))
            .await;

        assert!(result.is_err());
        assert!(!output.exists());
    }

    #[tokio::test]
    async fn test_declined_sequential_check_omits_status_column() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Bookmarks");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, SCENARIO).unwrap();

        let mut confirm = Scripted::new(&[false]);
        run(&cli_for(&input, &output, true), CheckStrategy::Sequential, &mut confirm)
            .await
            .unwrap();

        assert!(read_csv(&output).starts_with("Folder,Title,URL\r\n"));
    }

    #[tokio::test]
    async fn test_declined_check_of_empty_file_omits_status_column() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Bookmarks");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, r#"{"version":1,"roots":{"other":{"name":"Other","children":[]}}}"#)
            .unwrap();

        let mut confirm = Scripted::new(&[false]);
        let outcome = run(&cli_for(&input, &output, true), CheckStrategy::Sequential, &mut confirm)
            .await
            .unwrap();

        assert_eq!(outcome, Outcome::Exported { path: output.clone(), count: 0 });
        assert_eq!(read_csv(&output), "Folder,Title,URL\r\n");
    }

    #[tokio::test]
    async fn test_check_of_empty_file_keeps_status_column() {
        let dir = tempfile::tempdir().unwrap();
        let input = dir.path().join("Bookmarks");
        let output = dir.path().join("out.csv");
        std::fs::write(&input, r#"{"version":1,"roots":{"other":{"name":"Other","children":[]}}}"#)
            .unwrap();

        let mut confirm = Scripted::new(&[true]);
        run(&cli_for(&input, &output, true), CheckStrategy::Sequential, &mut confirm)
            .await
            .unwrap();

        assert_eq!(read_csv(&output), "Folder,Title,URL,Status\r\n");
    }
}
