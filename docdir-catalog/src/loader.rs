//! Loading provider snapshots from files.
//!
//! Two formats are accepted:
//! - YAML: a single file holding a sequence of providers, or a directory of
//!   such files (read in file-name order).
//! - CSV: a spreadsheet export whose header row uses either the field names
//!   (`display_name`, `suburb`, ...) or the upstream column names
//!   (`DOCTOR SURNAME`, `SUBURB`, ...).
//!
//! Records without an id are assigned one after the highest id present, in
//! file order.

use std::path::Path;

use thiserror::Error;

use crate::types::{Provider, ProviderId, Snapshot};

#[derive(Debug, Error)]
pub enum SnapshotError {
    #[error("I/O error reading {path}: {source}")]
    Io {
        path: String,
        source: std::io::Error,
    },
    #[error("YAML parse error in {path}: {source}")]
    Yaml {
        path: String,
        source: serde_yml::Error,
    },
    #[error("CSV parse error in {path}: {source}")]
    Csv { path: String, source: csv::Error },
    #[error("Unsupported snapshot format: {0}")]
    UnsupportedFormat(String),
    #[error("Directory not found: {0}")]
    DirNotFound(String),
}

/// Load a snapshot, choosing the format from the path.
///
/// Directories and `.yaml`/`.yml` files are read as YAML, `.csv` files as CSV.
pub fn load_snapshot(path: &Path) -> Result<Snapshot, SnapshotError> {
    if path.is_dir() {
        return load_yaml(path);
    }
    match path.extension().and_then(|e| e.to_str()) {
        Some(ext) if ext.eq_ignore_ascii_case("yaml") || ext.eq_ignore_ascii_case("yml") => {
            load_yaml(path)
        }
        Some(ext) if ext.eq_ignore_ascii_case("csv") => load_csv(path),
        _ => Err(SnapshotError::UnsupportedFormat(path.display().to_string())),
    }
}

/// Load providers from a YAML file or a directory of YAML files.
///
/// Each file should contain a YAML sequence (list) of `Provider` entries.
pub fn load_yaml(path: &Path) -> Result<Snapshot, SnapshotError> {
    if !path.exists() {
        return Err(SnapshotError::DirNotFound(path.display().to_string()));
    }

    let files = if path.is_dir() {
        yaml_files_in(path)?
    } else {
        vec![path.to_path_buf()]
    };

    let mut all = Vec::new();
    for file in files {
        let contents = std::fs::read_to_string(&file).map_err(|e| SnapshotError::Io {
            path: file.display().to_string(),
            source: e,
        })?;
        let providers: Vec<Provider> =
            serde_yml::from_str(&contents).map_err(|e| SnapshotError::Yaml {
                path: file.display().to_string(),
                source: e,
            })?;
        log::debug!("Loaded {} providers from {}", providers.len(), file.display());
        all.extend(providers);
    }

    Ok(Snapshot::new(assign_missing_ids(all)))
}

/// Load providers from a CSV spreadsheet export.
///
/// Empty cells are read as missing values. Rows that fail to parse are
/// skipped with a warning rather than aborting the whole load.
pub fn load_csv(path: &Path) -> Result<Snapshot, SnapshotError> {
    let mut reader = csv::ReaderBuilder::new()
        .trim(csv::Trim::Headers)
        .flexible(true)
        .from_path(path)
        .map_err(|e| SnapshotError::Csv {
            path: path.display().to_string(),
            source: e,
        })?;

    let mut providers = Vec::new();
    for (row, record) in reader.deserialize::<Provider>().enumerate() {
        match record {
            Ok(provider) => providers.push(provider),
            Err(e) => {
                // Header is line 1, so data row N sits on line N + 2.
                log::warn!("Skipping {} line {}: {}", path.display(), row + 2, e);
            }
        }
    }
    log::debug!("Loaded {} providers from {}", providers.len(), path.display());

    Ok(Snapshot::new(assign_missing_ids(providers)))
}

/// Give every unassigned record an id above the current maximum.
fn assign_missing_ids(mut providers: Vec<Provider>) -> Vec<Provider> {
    let mut next = providers.iter().map(|p| p.id.0).max().unwrap_or(0).max(0) + 1;
    for provider in providers.iter_mut().filter(|p| p.id.is_unassigned()) {
        provider.id = ProviderId(next);
        next += 1;
    }
    providers
}

fn yaml_files_in(dir: &Path) -> Result<Vec<std::path::PathBuf>, SnapshotError> {
    let mut entries: Vec<_> = std::fs::read_dir(dir)
        .map_err(|e| SnapshotError::Io {
            path: dir.display().to_string(),
            source: e,
        })?
        .filter_map(|e| e.ok())
        .filter(|e| {
            e.path()
                .extension()
                .is_some_and(|ext| ext == "yaml" || ext == "yml")
        })
        .collect();
    entries.sort_by_key(|e| e.file_name());
    Ok(entries.into_iter().map(|e| e.path()).collect())
}
