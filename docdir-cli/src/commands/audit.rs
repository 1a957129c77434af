use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use docdir_lib::{QualityReport, evaluate};

use crate::CliError;

use super::{Source, name_or_placeholder, truncate_str};

/// Score every provider and summarize how complete the directory is.
pub(crate) fn run_audit(source: &Source, incomplete_only: bool) -> Result<(), CliError> {
    let snapshot = source.load()?;
    let report = QualityReport::from_providers(snapshot.providers());

    log_report(&report);
    if report.total == 0 {
        return Ok(());
    }
    crate::log_blank();

    let mut shown = 0usize;
    for provider in snapshot.providers() {
        let quality = evaluate(provider);
        if incomplete_only && quality.is_complete {
            continue;
        }
        shown += 1;

        let score = format!("{:>3}", quality.score);
        let score = if quality.is_sitemap_eligible() {
            score.if_supports_color(Stdout, |t| t.green()).to_string()
        } else {
            score.if_supports_color(Stdout, |t| t.red()).to_string()
        };
        let missing = quality.missing();
        log::info!(
            "  {} {:>6} {:<28} {}",
            score,
            format!("#{}", provider.id),
            truncate_str(name_or_placeholder(provider), 28),
            if missing.is_empty() {
                String::new()
            } else {
                format!("missing: {}", missing.join(", "))
                    .if_supports_color(Stdout, |t| t.dimmed())
                    .to_string()
            },
        );
    }

    if incomplete_only && shown == 0 {
        log::info!(
            "{} Every provider is complete.",
            "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        );
    }
    Ok(())
}

/// Print the aggregate quality figures.
pub(crate) fn log_report(report: &QualityReport) {
    log::info!(
        "{}",
        "Data Quality".if_supports_color(Stdout, |t| t.bold()),
    );
    log::info!("  Providers:         {:>8}", report.total);
    log::info!(
        "  Complete:          {:>8} ({:.1}%)",
        report.complete,
        report.complete_percent(),
    );
    log::info!("  Sitemap eligible:  {:>8}", report.sitemap_eligible);
    log::info!("  Missing name:      {:>8}", report.missing_name);
    log::info!("  Missing specialty: {:>8}", report.missing_specialty);
    log::info!("  Missing location:  {:>8}", report.missing_location);
    log::info!("  Missing contact:   {:>8}", report.missing_contact);
}
