//! CLI type definitions: command enums and argument structs.

use std::path::PathBuf;

use clap::{Args, Parser, Subcommand};

#[derive(Parser)]
#[command(name = "docdir")]
#[command(about = "Resolve and browse the provider directory", long_about = None)]
pub(crate) struct Cli {
    /// Path to the provider database (overrides settings)
    #[arg(long, global = true)]
    pub db: Option<PathBuf>,

    /// Read providers from a YAML or CSV file instead of the database
    #[arg(long, global = true)]
    pub snapshot: Option<PathBuf>,

    /// Only show warnings and errors (suppress normal output)
    #[arg(long, global = true)]
    pub quiet: bool,

    /// Enable verbose/debug logging (timestamps + debug-level messages)
    #[arg(short, long, global = true)]
    pub verbose: bool,

    /// Write log output to a file (ANSI codes stripped)
    #[arg(long, global = true)]
    pub logfile: Option<PathBuf>,

    #[command(subcommand)]
    pub command: Commands,
}

/// Listing filters shared by commands that browse the directory.
#[derive(Args, Clone, Default)]
pub(crate) struct FilterArgs {
    /// Free-text search over name, telephone, suburb and address
    #[arg(short, long)]
    pub search: Option<String>,

    /// Only providers in this region
    #[arg(long)]
    pub region: Option<String>,

    /// Only providers in this province
    #[arg(long)]
    pub province: Option<String>,

    /// Only providers in this suburb
    #[arg(long)]
    pub suburb: Option<String>,

    /// Only providers with this profession
    #[arg(short, long)]
    pub profession: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum Commands {
    /// Resolve a profile URL slug to a provider
    Resolve {
        /// Slug such as dr-smith-sandton
        slug: String,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// List providers, filtered and sorted by name
    List {
        #[command(flatten)]
        filters: FilterArgs,

        /// Sort names Z to A
        #[arg(long)]
        desc: bool,

        /// Number of pages to reveal
        #[arg(long, default_value_t = 1)]
        pages: usize,

        /// Providers per page (defaults to the configured page size)
        #[arg(long)]
        page_size: Option<usize>,

        /// Print the result as JSON
        #[arg(long)]
        json: bool,
    },

    /// Print the profile slug for a provider
    Slug {
        /// Provider id
        id: i64,
    },

    /// Report data completeness per provider
    Audit {
        /// Only show providers that are not complete
        #[arg(long)]
        incomplete: bool,
    },

    /// Print sitemap URLs for providers complete enough to index
    Sitemap {
        /// Site root, e.g. https://example.com (defaults to the configured URL)
        #[arg(long)]
        base_url: Option<String>,
    },

    /// Show the distinct values available for each filter
    Facets,

    /// Import providers from a YAML or CSV file into the database
    Import {
        /// File (or directory of YAML files) to import
        file: PathBuf,
    },

    /// Add a provider to the database
    Add(AddArgs),

    /// Remove a provider from the database
    Remove {
        /// Provider id
        id: i64,
    },

    /// Show database and data quality statistics
    Stats,

    /// Manage settings
    Config {
        #[command(subcommand)]
        action: ConfigAction,
    },
}

#[derive(Args, Clone)]
pub(crate) struct AddArgs {
    /// Display name (surname)
    #[arg(long)]
    pub name: String,

    #[arg(long)]
    pub profession: Option<String>,

    #[arg(long)]
    pub region: Option<String>,

    #[arg(long)]
    pub province: Option<String>,

    #[arg(long)]
    pub suburb: Option<String>,

    #[arg(long)]
    pub telephone: Option<String>,

    #[arg(long)]
    pub address: Option<String>,

    /// Profile picture URL
    #[arg(long)]
    pub picture: Option<String>,
}

#[derive(Subcommand)]
pub(crate) enum ConfigAction {
    /// Show current settings and their file location
    Show,

    /// Print the settings file path
    Path,

    /// Set the number of providers revealed per page
    SetPageSize {
        size: usize,
    },

    /// Set the site root used for sitemap URLs
    SetBaseUrl {
        url: String,
    },
}
