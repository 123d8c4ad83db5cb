// src/export/mod.rs
// =============================================================================
// Writes the flattened bookmarks to a CSV file.
//
// The file starts with a UTF-8 byte-order mark. Without it, Excel opens
// UTF-8 CSV files as Latin-1 and mangles any non-ASCII title (Cyrillic,
// CJK, emoji, ...).
// =============================================================================

mod csv;

pub use self::csv::write_csv;
