use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use docdir_catalog::{Provider, ProviderId};
use docdir_db::OperationError;

use crate::CliError;
use crate::cli_types::AddArgs;

use super::{Source, name_or_placeholder};

impl AddArgs {
    fn into_provider(self) -> Provider {
        Provider {
            id: ProviderId::default(),
            display_name: Some(self.name),
            profession: self.profession,
            region: self.region,
            province: self.province,
            suburb: self.suburb,
            telephone: self.telephone,
            address: self.address,
            profile_picture_url: self.picture,
        }
    }
}

pub(crate) fn run_add(source: &Source, args: AddArgs) -> Result<(), CliError> {
    let conn = source.open_for_write()?;
    let mut provider = args.into_provider();
    provider.id = docdir_db::insert_provider(&conn, &provider)
        .map_err(|e| CliError::database(format!("Failed to add provider: {}", e)))?;

    let quality = docdir_lib::evaluate(&provider);
    log::info!(
        "{} Added {} as #{} ({})",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        name_or_placeholder(&provider).if_supports_color(Stdout, |t| t.bold()),
        provider.id,
        docdir_catalog::encode(&provider),
    );
    if !quality.is_complete {
        log::warn!(
            "  Incomplete record, missing: {}",
            quality.missing().join(", "),
        );
    }
    Ok(())
}

pub(crate) fn run_remove(source: &Source, id: i64) -> Result<(), CliError> {
    let conn = source.open_for_write()?;
    let id = ProviderId(id);
    let existing = docdir_db::get_provider(&conn, id)
        .map_err(|e| CliError::database(format!("Failed to look up provider: {}", e)))?;

    match docdir_db::delete_provider(&conn, id) {
        Ok(()) => {
            let name = existing
                .as_ref()
                .map(|p| name_or_placeholder(p).to_string())
                .unwrap_or_default();
            log::info!(
                "{} Removed #{} {}",
                "\u{2714}".if_supports_color(Stdout, |t| t.green()),
                id,
                name,
            );
            Ok(())
        }
        Err(OperationError::NotFound(_)) => {
            log::warn!("No provider with id {}", id);
            Err(CliError::not_found(id.to_string()))
        }
        Err(e) => Err(CliError::database(format!("Failed to remove provider: {}", e))),
    }
}
