//! Directory resolution and listing engine.
//!
//! Everything here works over an in-memory provider set supplied by a
//! storage collaborator:
//!
//! - [`resolver`]: turn a possibly stale URL slug into a provider.
//! - [`quality`]: score a record for public indexing.
//! - [`listing`]: filter and sort the provider set for display.
//! - [`window`]: reveal a listing incrementally, page by page.
//! - [`accumulator`]: assemble a snapshot from paged fetches.
//! - [`view`]: tie listing and window together for one browsing session.
//!
//! All of it is synchronous and free of I/O apart from [`settings`].

pub mod accumulator;
pub mod error;
pub mod listing;
pub mod quality;
pub mod resolver;
pub mod settings;
pub mod view;
pub mod window;

pub use accumulator::PageAccumulator;
pub use error::SettingsError;
pub use listing::{Facets, FilterCriteria, Matcher, SortOrder, facets, list, list_indices};
pub use quality::{
    QualityReport, QualityScore, SITEMAP_MIN_SCORE, evaluate, filter_sitemap_providers,
};
pub use resolver::{MatchKind, Resolution, resolve};
pub use settings::Settings;
pub use view::DirectoryView;
pub use window::{LoadTicket, PageWindow, ScrollMetrics};

pub use docdir_catalog::{Provider, ProviderField, ProviderId, Snapshot, encode, normalize};
