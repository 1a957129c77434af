use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use docdir_lib::QualityReport;

use crate::CliError;

use super::Source;
use super::audit::log_report;

pub(crate) fn run_stats(source: &Source) -> Result<(), CliError> {
    let snapshot = if source.snapshot.is_some() {
        source.load()?
    } else {
        let db_path = source.db_path();
        if !db_path.exists() {
            log::warn!("No provider database found at {}", db_path.display());
            log::info!("Run 'docdir import <file>' to create one.");
            return Ok(());
        }

        let conn = docdir_db::open_database(&db_path)
            .map_err(|e| CliError::database(format!("Failed to open provider database: {}", e)))?;
        let stats = docdir_db::directory_stats(&conn)
            .map_err(|e| CliError::database(format!("Failed to query statistics: {}", e)))?;

        log::info!(
            "{}",
            "Provider Database Statistics".if_supports_color(Stdout, |t| t.bold()),
        );
        log::info!("  Database: {}", db_path.display());
        crate::log_blank();
        log::info!("  Providers:         {:>8}", stats.providers);
        log::info!(
            "  Highest id:        {:>8}",
            stats.max_id.map(|id| id.to_string()).unwrap_or_else(|| "-".into()),
        );
        log::info!("  Professions:       {:>8}", stats.professions);
        log::info!("  Suburbs:           {:>8}", stats.suburbs);
        if let Some(updated) = &stats.last_updated {
            log::info!("  Last updated:      {}", updated);
        }
        crate::log_blank();

        docdir_db::fetch_snapshot(&conn)
            .map_err(|e| CliError::database(format!("Failed to fetch providers: {}", e)))?
    };

    log_report(&QualityReport::from_providers(snapshot.providers()));
    Ok(())
}
