use owo_colors::OwoColorize;
use owo_colors::Stream::Stdout;

use docdir_lib::settings::{save_setting, settings_path};

use crate::CliError;

use super::Source;

/// Show the effective settings and where they come from.
pub(crate) fn run_config_show(source: &Source) -> Result<(), CliError> {
    let path = settings_path();
    let settings = &source.settings;

    log::info!(
        "{}",
        "docdir Configuration".if_supports_color(Stdout, |t| t.bold()),
    );
    crate::log_blank();

    if path.exists() {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(exists)".if_supports_color(Stdout, |t| t.green()),
        );
    } else {
        log::info!(
            "  Settings file: {} {}",
            path.display().if_supports_color(Stdout, |t| t.cyan()),
            "(not found, using defaults)".if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    crate::log_blank();

    let origin = if source.db.is_some() {
        "(--db)"
    } else if settings.directory.database.is_some() {
        "(settings)"
    } else {
        "(default)"
    };
    let base_url = match &settings.site.base_url {
        Some(url) => url.clone(),
        None => "not set"
            .if_supports_color(Stdout, |t| t.yellow())
            .to_string(),
    };
    let fields = [
        ("page_size", settings.directory.page_size.to_string(), ""),
        (
            "scroll_threshold",
            settings.directory.scroll_threshold.to_string(),
            "",
        ),
        ("database", source.db_path().display().to_string(), origin),
        ("base_url", base_url, ""),
    ];
    for (name, value, note) in fields {
        log::info!(
            "  {} {} {}",
            format!("{}:", name).if_supports_color(Stdout, |t| t.cyan()),
            value,
            note.if_supports_color(Stdout, |t| t.dimmed()),
        );
    }
    Ok(())
}

/// Print the settings file path.
pub(crate) fn run_config_path() -> Result<(), CliError> {
    log::info!("{}", settings_path().display());
    Ok(())
}

pub(crate) fn run_config_set_page_size(size: usize) -> Result<(), CliError> {
    if size == 0 {
        return Err(CliError::config("page size must be at least 1"));
    }
    let value = i64::try_from(size).map_err(|_| CliError::config("page size is too large"))?;
    save_setting("directory", "page_size", toml::Value::Integer(value))?;
    log_saved("directory.page_size", &size.to_string());
    Ok(())
}

pub(crate) fn run_config_set_base_url(url: &str) -> Result<(), CliError> {
    let url = url.trim().trim_end_matches('/');
    if !(url.starts_with("http://") || url.starts_with("https://")) {
        return Err(CliError::config(format!(
            "base URL must start with http:// or https://, got '{}'",
            url
        )));
    }
    save_setting("site", "base_url", toml::Value::String(url.to_string()))?;
    log_saved("site.base_url", url);
    Ok(())
}

fn log_saved(key: &str, value: &str) {
    log::info!(
        "{} Set {} = {} in {}",
        "\u{2714}".if_supports_color(Stdout, |t| t.green()),
        key.if_supports_color(Stdout, |t| t.bold()),
        value,
        settings_path()
            .display()
            .if_supports_color(Stdout, |t| t.cyan()),
    );
}
