use docdir_lib::filter_sitemap_providers;

use crate::CliError;

use super::Source;

/// Print one profile URL per provider complete enough to be indexed.
///
/// Output is plain text on stdout so it can be redirected straight into a
/// sitemap file.
pub(crate) fn run_sitemap(source: &Source, base_url: Option<String>) -> Result<(), CliError> {
    let base_url = base_url
        .or_else(|| source.settings.site.base_url.clone())
        .ok_or_else(|| {
            CliError::config(
                "no base URL; pass --base-url or run 'docdir config set-base-url <url>'",
            )
        })?;
    let base_url = base_url.trim_end_matches('/');

    let snapshot = source.load()?;
    let eligible = filter_sitemap_providers(snapshot.providers());
    for provider in &eligible {
        println!("{}/doctor/{}", base_url, docdir_catalog::encode(provider));
    }
    log::debug!(
        "{} of {} providers eligible for the sitemap",
        eligible.len(),
        snapshot.len(),
    );
    Ok(())
}
