//! docdir CLI
//!
//! Command-line interface for resolving profile slugs and browsing the
//! provider directory.

mod cli_types;
mod commands;
mod error;
mod logging;

use clap::Parser;

use cli_types::{Cli, Commands, ConfigAction};
use commands::Source;
use docdir_lib::Settings;

pub(crate) use error::CliError;
pub(crate) use logging::log_blank;

fn main() {
    let cli = Cli::parse();

    if let Err(e) = logging::init(cli.quiet, cli.verbose, cli.logfile.as_deref()) {
        eprintln!("Failed to set up logging: {}", e);
        std::process::exit(1);
    }

    let settings = match Settings::load() {
        Ok(s) => s,
        Err(e) => {
            log::warn!("{}; using default settings", e);
            Settings::default()
        }
    };

    let source = Source {
        db: cli.db,
        snapshot: cli.snapshot,
        settings,
        quiet: cli.quiet,
    };

    let result = match cli.command {
        Commands::Resolve { slug, json } => commands::resolve::run_resolve(&source, &slug, json),
        Commands::List {
            filters,
            desc,
            pages,
            page_size,
            json,
        } => commands::list::run_list(&source, &filters, desc, pages, page_size, json),
        Commands::Slug { id } => commands::slug::run_slug(&source, id),
        Commands::Audit { incomplete } => commands::audit::run_audit(&source, incomplete),
        Commands::Sitemap { base_url } => commands::sitemap::run_sitemap(&source, base_url),
        Commands::Facets => commands::facets::run_facets(&source),
        Commands::Import { file } => commands::import::run_import(&source, &file),
        Commands::Add(args) => commands::edit::run_add(&source, args),
        Commands::Remove { id } => commands::edit::run_remove(&source, id),
        Commands::Stats => commands::stats::run_stats(&source),
        Commands::Config { action } => match action {
            ConfigAction::Show => commands::config::run_config_show(&source),
            ConfigAction::Path => commands::config::run_config_path(),
            ConfigAction::SetPageSize { size } => commands::config::run_config_set_page_size(size),
            ConfigAction::SetBaseUrl { url } => commands::config::run_config_set_base_url(&url),
        },
    };

    if let Err(e) = result {
        // Misses are reported by the command itself.
        if !matches!(e, CliError::NotFound(_)) {
            log::error!("{}", e);
        }
        log::logger().flush();
        std::process::exit(1);
    }
    log::logger().flush();
}
