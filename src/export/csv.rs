// src/export/csv.rs

use crate::bookmarks::BookmarkRecord;
use anyhow::{Context, Result};
use std::fs::File;
use std::io::{BufWriter, Write};
use std::path::Path;

const UTF8_BOM: &[u8] = b"\xEF\xBB\xBF";

/// Writes `records` to `path`, replacing the file if it exists
pub fn write_csv(path: &Path, records: &[BookmarkRecord], include_status: bool) -> Result<()> {
    let file = File::create(path)
        .with_context(|| format!("failed to create output file {}", path.display()))?;
    to_writer(BufWriter::new(file), records, include_status)
        .with_context(|| format!("failed to write {}", path.display()))
}

/// Writes the BOM, a header row and one row per record.
///
/// The Status column is only written when `include_status` is set.
pub fn to_writer<W: Write>(mut out: W, records: &[BookmarkRecord], include_status: bool) -> Result<()> {
    out.write_all(UTF8_BOM)?;

    let mut writer = ::csv::WriterBuilder::new()
        .terminator(::csv::Terminator::CRLF)
        .from_writer(out);

    let mut header = vec!["Folder", "Title", "URL"];
    if include_status {
        header.push("Status");
    }
    writer.write_record(&header)?;

    for record in records {
        let mut row = vec![record.folder.as_str(), record.title.as_str(), record.url.as_str()];
        if include_status {
            row.push(record.status.map(|s| s.as_str()).unwrap_or(""));
        }
        writer.write_record(&row)?;
    }

    writer.flush()?;
    Ok(())
}
