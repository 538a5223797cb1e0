//! CSV discovery and loading.
//!
//! Reads the tourism export (one file, or every `.csv` under a directory) into
//! raw [`TouristRecord`]s. Columns are mapped by header name; extra columns are
//! ignored and columns absent from the header come back as empty strings, so
//! shape problems are left for the processor to judge. Rows that cannot be
//! decoded at all are skipped and counted.

use std::io::Read;
use std::path::{Path, PathBuf};

use tourism_core::error::{DashboardError, Result};
use tourism_core::models::TouristRecord;
use tracing::{debug, info, warn};

// ── Public API ────────────────────────────────────────────────────────────────

/// Find all `.csv` files recursively under `dir`, sorted by path.
pub fn find_csv_files(dir: &Path) -> Vec<PathBuf> {
    if !dir.exists() {
        warn!("Data path does not exist: {}", dir.display());
        return Vec::new();
    }

    let mut files: Vec<PathBuf> = walkdir::WalkDir::new(dir)
        .follow_links(true)
        .into_iter()
        .filter_map(|entry| entry.ok())
        .filter(|entry| {
            entry.file_type().is_file()
                && entry
                    .path()
                    .extension()
                    .map(|ext| ext.eq_ignore_ascii_case("csv"))
                    .unwrap_or(false)
        })
        .map(|entry| entry.into_path())
        .collect();

    files.sort();
    files
}

/// Load every raw record under `path`.
///
/// A file is read directly; a directory contributes all of its CSV files in
/// path order.
pub fn load_records(path: &Path) -> Result<Vec<TouristRecord>> {
    if !path.exists() {
        return Err(DashboardError::DataPathNotFound(path.to_path_buf()));
    }

    let files = if path.is_dir() {
        let found = find_csv_files(path);
        if found.is_empty() {
            return Err(DashboardError::NoDataFiles(path.to_path_buf()));
        }
        found
    } else {
        vec![path.to_path_buf()]
    };

    let mut all_records = Vec::new();
    let mut total_skipped = 0usize;

    for file_path in &files {
        let file = std::fs::File::open(file_path).map_err(|source| DashboardError::FileRead {
            path: file_path.clone(),
            source,
        })?;
        let (records, skipped) = read_records(file, &file_path.display().to_string())?;
        debug!(
            file = %file_path.display(),
            records = records.len(),
            skipped,
            "read CSV file"
        );
        all_records.extend(records);
        total_skipped += skipped;
    }

    info!(
        "Loaded {} raw records from {} file(s) ({} unreadable rows skipped)",
        all_records.len(),
        files.len(),
        total_skipped
    );

    Ok(all_records)
}

/// Deserialize records from any CSV byte stream with a header row.
///
/// Rows that fail to decode are skipped and counted; an I/O failure of the
/// underlying stream aborts the read. `source` only labels log messages.
pub fn read_records<R: Read>(reader: R, source: &str) -> Result<(Vec<TouristRecord>, usize)> {
    let mut rdr = csv::ReaderBuilder::new()
        .flexible(true)
        .has_headers(true)
        .from_reader(reader);

    let mut records = Vec::new();
    let mut skipped = 0usize;

    for (row, result) in rdr.deserialize::<TouristRecord>().enumerate() {
        match result {
            Ok(record) => records.push(record),
            Err(e) if e.is_io_error() => return Err(DashboardError::Csv(e)),
            Err(e) => {
                // Row 0 is the first data line; +2 accounts for the header.
                warn!("{}: skipping row {}: {}", source, row + 2, e);
                skipped += 1;
            }
        }
    }

    Ok((records, skipped))
}

// ── Tests ─────────────────────────────────────────────────────────────────────
