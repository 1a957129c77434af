use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use docdir_lib::{MatchKind, resolve};

use crate::CliError;

use super::{Source, log_provider, print_json};

/// Resolve a profile slug and show the provider it leads to.
pub(crate) fn run_resolve(source: &Source, slug: &str, json: bool) -> Result<(), CliError> {
    let snapshot = source.load()?;
    let resolution = resolve(snapshot.providers(), slug);

    if json {
        print_json(&serde_json::json!({
            "slug": slug,
            "match": resolution.kind(),
            "canonical_slug": resolution.provider().map(docdir_catalog::encode),
            "provider": resolution.provider(),
        }))?;
    } else if let Some(provider) = resolution.provider() {
        let label = match resolution.kind() {
            MatchKind::Exact => "Exact match"
                .if_supports_color(Stdout, |t| t.green())
                .to_string(),
            _ => "Fuzzy match"
                .if_supports_color(Stdout, |t| t.yellow())
                .to_string(),
        };
        log::info!("{} for '{}'", label, slug);
        crate::log_blank();
        log_provider(provider);
    }

    if !resolution.is_found() {
        log::warn!(
            "{} No provider found for '{}'",
            "\u{2718}".if_supports_color(Stdout, |t| t.red()),
            slug,
        );
        log::warn!("Run 'docdir list' to browse the directory.");
        return Err(CliError::not_found(slug));
    }
    Ok(())
}
