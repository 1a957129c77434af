use docdir_catalog::ProviderId;

use crate::CliError;

use super::Source;

pub(crate) fn run_slug(source: &Source, id: i64) -> Result<(), CliError> {
    let snapshot = source.load()?;
    match snapshot.get(ProviderId(id)) {
        Some(provider) => {
            log::info!("{}", docdir_catalog::encode(provider));
            Ok(())
        }
        None => {
            log::warn!("No provider with id {}", id);
            Err(CliError::not_found(id.to_string()))
        }
    }
}
