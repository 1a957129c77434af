use std::path::Path;

use indicatif::{ProgressBar, ProgressStyle};
use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use crate::CliError;

use super::Source;

/// Rows inserted per transaction.
const IMPORT_BATCH: usize = 500;

/// Load a YAML or CSV file and append its providers to the database.
///
/// Storage assigns fresh ids, so ids in the file only decide the import
/// order.
pub(crate) fn run_import(source: &Source, file: &Path) -> Result<(), CliError> {
    let snapshot = docdir_catalog::load_snapshot(file)?;
    if snapshot.is_empty() {
        log::warn!("No providers found in {}", file.display());
        return Ok(());
    }

    let mut conn = source.open_for_write()?;

    let pb = if source.quiet {
        ProgressBar::hidden()
    } else {
        let pb = ProgressBar::new(snapshot.len() as u64);
        let style = ProgressStyle::with_template("  {bar:40.cyan/blue} {pos}/{len} {msg}")
            .map_err(|e| CliError::other(e.to_string()))?
            .progress_chars("=> ");
        pb.set_style(style);
        pb.set_message("importing");
        pb
    };

    let mut imported = 0usize;
    for batch in snapshot.providers().chunks(IMPORT_BATCH) {
        let ids = docdir_db::insert_providers(&mut conn, batch).map_err(|e| {
            pb.abandon();
            CliError::database(format!("Import failed after {} providers: {}", imported, e))
        })?;
        imported += ids.len();
        pb.inc(ids.len() as u64);
    }
    pb.finish_and_clear();

    log::info!(
        "{} Imported {} providers into {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        imported,
        source.db_path().display(),
    );
    Ok(())
}
