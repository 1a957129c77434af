//! Slug-to-provider resolution.
//!
//! Links in the wild go stale: names get corrected, suburbs get renamed,
//! people hand-type URLs. Resolution therefore runs two passes over the
//! provider set, first hit wins:
//!
//! 1. **Exact**: the provider whose encoded slug equals the input.
//! 2. **Fuzzy**: decode the slug into name/suburb candidates and take the
//!    first provider whose normalized name and suburb contain (or are
//!    contained in) those candidates.
//!
//! The two outcomes are kept apart in [`Resolution`] so callers can monitor
//! how often stale links are being rescued by the fuzzy pass.

use docdir_catalog::{Provider, decode, encode, normalize};
use serde::Serialize;

/// How a slug was matched to a provider.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum MatchKind {
    Exact,
    Fuzzy,
    NotFound,
}

impl MatchKind {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Exact => "exact",
            Self::Fuzzy => "fuzzy",
            Self::NotFound => "not found",
        }
    }
}

impl std::fmt::Display for MatchKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Outcome of resolving a slug against a provider set.
///
/// `NotFound` is an expected result (deleted providers, typos), not a fault.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Resolution<'a> {
    Exact(&'a Provider),
    Fuzzy(&'a Provider),
    NotFound,
}

impl<'a> Resolution<'a> {
    pub fn provider(&self) -> Option<&'a Provider> {
        match *self {
            Self::Exact(p) | Self::Fuzzy(p) => Some(p),
            Self::NotFound => None,
        }
    }

    pub fn is_found(&self) -> bool {
        !matches!(self, Self::NotFound)
    }

    pub fn kind(&self) -> MatchKind {
        match self {
            Self::Exact(_) => MatchKind::Exact,
            Self::Fuzzy(_) => MatchKind::Fuzzy,
            Self::NotFound => MatchKind::NotFound,
        }
    }
}

/// Resolve `slug` to a provider.
///
/// Pure read over `providers`. When several providers qualify, the earliest
/// in slice order wins, so pass a stably ordered slice (such as
/// [`docdir_catalog::Snapshot::providers`]) when reproducibility matters.
/// Never fails on any input; the worst case is [`Resolution::NotFound`].
pub fn resolve<'a>(providers: &'a [Provider], slug: &str) -> Resolution<'a> {
    if let Some(p) = providers.iter().find(|p| encode(p) == slug) {
        log::debug!("Slug '{}' matched provider {} exactly", slug, p.id);
        return Resolution::Exact(p);
    }

    let parts = decode(slug);
    let name = normalize(&parts.name);
    let suburb = normalize(&parts.suburb);

    if name.is_empty() && suburb.is_empty() {
        log::debug!("Slug '{}' has no name or suburb candidate; not found", slug);
        return Resolution::NotFound;
    }

    match providers.iter().find(|p| fuzzy_matches(p, &name, &suburb)) {
        Some(p) => {
            log::info!(
                "Slug '{}' resolved by fuzzy match to provider {} ({})",
                slug,
                p.id,
                encode(p)
            );
            Resolution::Fuzzy(p)
        }
        None => {
            log::debug!("Slug '{}' matched no provider", slug);
            Resolution::NotFound
        }
    }
}

/// Name and suburb conditions of the fuzzy pass, both as two-way
/// containment of normalized text.
///
/// A blank provider name is never contained in the name candidate. With no
/// name candidate, the suburb must match on non-empty text on both sides;
/// otherwise every blank-suburb record would catch any single-token slug.
fn fuzzy_matches(provider: &Provider, name: &str, suburb: &str) -> bool {
    let provider_name = normalize(provider.display_name());
    let provider_suburb = normalize(provider.suburb());

    let name_hit = provider_name.contains(name)
        || (!provider_name.is_empty() && name.contains(provider_name.as_str()));
    let suburb_hit = suburb.is_empty()
        || provider_suburb.contains(suburb)
        || suburb.contains(provider_suburb.as_str());
    let grounded = !name.is_empty() || (!suburb.is_empty() && !provider_suburb.is_empty());

    name_hit && suburb_hit && grounded
}

#[cfg(test)]
#[path = "tests/resolver_tests.rs"]
mod tests;
