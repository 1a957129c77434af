use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use docdir_lib::facets;

use crate::CliError;

use super::Source;

pub(crate) fn run_facets(source: &Source) -> Result<(), CliError> {
    let snapshot = source.load()?;
    let facets = facets(snapshot.providers());

    let groups = [
        ("Regions", &facets.regions),
        ("Provinces", &facets.provinces),
        ("Suburbs", &facets.suburbs),
        ("Professions", &facets.professions),
    ];
    for (i, (label, values)) in groups.iter().enumerate() {
        if i > 0 {
            crate::log_blank();
        }
        log::info!(
            "{} {}",
            label.if_supports_color(Stdout, |t| t.bold()),
            format!("({})", values.len()).if_supports_color(Stdout, |t| t.dimmed()),
        );
        for value in values.iter() {
            log::info!("  {}", value);
        }
    }
    Ok(())
}
