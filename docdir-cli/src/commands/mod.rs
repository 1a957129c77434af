pub(crate) mod audit;
pub(crate) mod config;
pub(crate) mod edit;
pub(crate) mod facets;
pub(crate) mod import;
pub(crate) mod list;
pub(crate) mod resolve;
pub(crate) mod sitemap;
pub(crate) mod slug;
pub(crate) mod stats;

use std::path::{Path, PathBuf};

use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use docdir_catalog::{Provider, Snapshot};
use docdir_db::Connection;
use docdir_lib::Settings;

use crate::CliError;

/// Where commands read providers from, plus the settings they run under.
pub(crate) struct Source {
    pub db: Option<PathBuf>,
    pub snapshot: Option<PathBuf>,
    pub settings: Settings,
    pub quiet: bool,
}

impl Source {
    pub(crate) fn db_path(&self) -> PathBuf {
        self.settings.database_path(self.db.clone())
    }

    /// Load the full provider set from `--snapshot` or the database.
    ///
    /// A missing database is not an error: the directory is simply empty.
    pub(crate) fn load(&self) -> Result<Snapshot, CliError> {
        if let Some(path) = &self.snapshot {
            let snapshot = docdir_catalog::load_snapshot(path)?;
            log::debug!("Loaded {} providers from {}", snapshot.len(), path.display());
            return Ok(snapshot);
        }

        let db_path = self.db_path();
        if !db_path.exists() {
            log::warn!("No provider database found at {}", db_path.display());
            log::warn!("Run 'docdir import <file>' to create one.");
            return Ok(Snapshot::default());
        }
        let conn = open_db(&db_path)?;
        docdir_db::fetch_snapshot(&conn)
            .map_err(|e| CliError::database(format!("Failed to fetch providers: {}", e)))
    }

    /// Open the database for modification, creating it if needed.
    pub(crate) fn open_for_write(&self) -> Result<Connection, CliError> {
        if self.snapshot.is_some() {
            return Err(CliError::other(
                "--snapshot files are read-only; drop the flag to modify the database",
            ));
        }
        open_db(&self.db_path())
    }
}

fn open_db(path: &Path) -> Result<Connection, CliError> {
    docdir_db::open_database(path).map_err(|e| {
        CliError::database(format!(
            "Failed to open provider database at {}: {}",
            path.display(),
            e
        ))
    })
}

/// Display name, or a placeholder for records without one.
pub(crate) fn name_or_placeholder(provider: &Provider) -> &str {
    match provider.display_name().trim() {
        "" => "(unnamed)",
        name => name,
    }
}

/// Print one provider as an indented block of its non-empty fields.
pub(crate) fn log_provider(provider: &Provider) {
    log::info!(
        "  {} {}",
        name_or_placeholder(provider).if_supports_color(Stdout, |t| t.bold()),
        format!("#{}", provider.id).if_supports_color(Stdout, |t| t.dimmed()),
    );
    let fields = [
        ("Profession", provider.profession()),
        ("Region", provider.region()),
        ("Province", provider.province()),
        ("Suburb", provider.suburb()),
        ("Telephone", provider.telephone()),
        ("Address", provider.address()),
    ];
    for (label, value) in fields {
        if !value.trim().is_empty() {
            log::info!(
                "    {} {}",
                format!("{}:", label).if_supports_color(Stdout, |t| t.cyan()),
                value,
            );
        }
    }
    log::info!(
        "    {} {}",
        "Slug:".if_supports_color(Stdout, |t| t.cyan()),
        docdir_catalog::encode(provider),
    );
}

/// Print machine-readable output directly to stdout, bypassing the logger.
pub(crate) fn print_json(value: &serde_json::Value) -> Result<(), CliError> {
    let text = serde_json::to_string_pretty(value)
        .map_err(|e| CliError::other(format!("Failed to encode JSON: {}", e)))?;
    println!("{}", text);
    Ok(())
}

/// Truncate a string to a maximum width in characters, appending "..." if needed.
pub(crate) fn truncate_str(s: &str, max: usize) -> String {
    if s.chars().count() <= max {
        s.to_string()
    } else if max > 3 {
        let kept: String = s.chars().take(max - 3).collect();
        format!("{}...", kept)
    } else {
        s.chars().take(max).collect()
    }
}
