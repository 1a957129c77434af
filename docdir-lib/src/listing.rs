//! Directory listing: filtering, sorting, and facet values.
//!
//! A provider is listed when it passes every active filter:
//! - `search`: raw case-insensitive substring over name, telephone, suburb
//!   and address. Separators are kept so phone numbers and street addresses
//!   can be searched the way they are written.
//! - `region`, `province`, `suburb`, `profession`: exact equality after
//!   [`normalize`], so "Cape Town" and " cape   town " are the same suburb.
//!
//! Results are stably sorted by normalized display name.

use std::cmp::Ordering;
use std::collections::HashMap;

use docdir_catalog::{Provider, ProviderField, normalize};
use serde::{Deserialize, Serialize};

/// Sort direction for the listing.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum SortOrder {
    #[default]
    Asc,
    Desc,
}

impl SortOrder {
    pub fn toggled(self) -> Self {
        match self {
            Self::Asc => Self::Desc,
            Self::Desc => Self::Asc,
        }
    }
}

/// User-entered listing query. The default value is the unfiltered query.
#[derive(Debug, Clone, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct FilterCriteria {
    #[serde(default)]
    pub search: String,
    #[serde(default)]
    pub region: String,
    #[serde(default)]
    pub province: String,
    #[serde(default)]
    pub suburb: String,
    #[serde(default)]
    pub profession: String,
}

impl FilterCriteria {
    pub fn with_search(mut self, search: impl Into<String>) -> Self {
        self.search = search.into();
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = region.into();
        self
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = province.into();
        self
    }

    pub fn with_suburb(mut self, suburb: impl Into<String>) -> Self {
        self.suburb = suburb.into();
        self
    }

    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = profession.into();
        self
    }

    /// The categorical criterion for a field, if that field is filterable.
    pub fn categorical(&self, field: ProviderField) -> Option<&str> {
        match field {
            ProviderField::Region => Some(&self.region),
            ProviderField::Province => Some(&self.province),
            ProviderField::Suburb => Some(&self.suburb),
            ProviderField::Profession => Some(&self.profession),
            _ => None,
        }
    }

    /// True when no filter is active.
    pub fn is_unfiltered(&self) -> bool {
        self.search.is_empty()
            && ProviderField::CATEGORICAL
                .iter()
                .all(|f| self.categorical(*f).is_none_or(|c| normalize(c).is_empty()))
    }

    /// Compile into a predicate, normalizing each criterion once.
    pub fn matcher(&self) -> Matcher {
        let categorical = ProviderField::CATEGORICAL
            .iter()
            .filter_map(|&field| {
                let key = normalize(self.categorical(field)?);
                (!key.is_empty()).then_some((field, key))
            })
            .collect();

        Matcher {
            search: (!self.search.is_empty()).then(|| self.search.to_lowercase()),
            categorical,
        }
    }
}

/// A compiled [`FilterCriteria`].
#[derive(Debug, Clone)]
pub struct Matcher {
    search: Option<String>,
    categorical: Vec<(ProviderField, String)>,
}

/// Fields scanned by the free-text search.
const SEARCH_FIELDS: [ProviderField; 4] = [
    ProviderField::DisplayName,
    ProviderField::Telephone,
    ProviderField::Suburb,
    ProviderField::Address,
];

impl Matcher {
    pub fn matches(&self, provider: &Provider) -> bool {
        self.matches_search(provider)
            && self
                .categorical
                .iter()
                .all(|(field, key)| normalize(provider.get(*field)) == *key)
    }

    fn matches_search(&self, provider: &Provider) -> bool {
        let Some(needle) = &self.search else {
            return true;
        };
        SEARCH_FIELDS
            .iter()
            .any(|&field| provider.get(field).to_lowercase().contains(needle.as_str()))
    }
}

/// Filter and sort `providers` for display.
///
/// Ties on the normalized name keep their input order in both directions.
pub fn list<'a>(
    providers: &'a [Provider],
    criteria: &FilterCriteria,
    order: SortOrder,
) -> Vec<&'a Provider> {
    list_indices(providers, criteria, order)
        .into_iter()
        .map(|idx| &providers[idx])
        .collect()
}

/// Like [`list`], but returns positions in `providers` instead of references.
pub fn list_indices(
    providers: &[Provider],
    criteria: &FilterCriteria,
    order: SortOrder,
) -> Vec<usize> {
    let matcher = criteria.matcher();
    let mut keyed: Vec<(String, usize)> = providers
        .iter()
        .enumerate()
        .filter(|(_, p)| matcher.matches(p))
        .map(|(idx, p)| (normalize(p.display_name()), idx))
        .collect();

    // `sort_by` is stable; reversing the comparator keeps ties in input order.
    keyed.sort_by(|(a, _), (b, _)| compare(a, b, order));

    log::debug!(
        "Listing matched {} of {} providers",
        keyed.len(),
        providers.len()
    );
    keyed.into_iter().map(|(_, idx)| idx).collect()
}

fn compare(a: &str, b: &str, order: SortOrder) -> Ordering {
    match order {
        SortOrder::Asc => a.cmp(b),
        SortOrder::Desc => b.cmp(a),
    }
}

// ── Facets ──────────────────────────────────────────────────────────────────

/// Distinct values available for each categorical filter.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Facets {
    pub regions: Vec<String>,
    pub provinces: Vec<String>,
    pub suburbs: Vec<String>,
    pub professions: Vec<String>,
}

/// Collect filter values from a provider set.
///
/// Values are deduplicated by normalized key with the first spelling seen
/// kept for display, blanks are dropped, and each list is ordered by key.
pub fn facets(providers: &[Provider]) -> Facets {
    Facets {
        regions: distinct(providers, ProviderField::Region),
        provinces: distinct(providers, ProviderField::Province),
        suburbs: distinct(providers, ProviderField::Suburb),
        professions: distinct(providers, ProviderField::Profession),
    }
}

fn distinct(providers: &[Provider], field: ProviderField) -> Vec<String> {
    let mut seen: HashMap<String, String> = HashMap::new();
    for provider in providers {
        let value = provider.get(field);
        let key = normalize(value);
        if !key.is_empty() {
            seen.entry(key).or_insert_with(|| value.trim().to_string());
        }
    }

    let mut values: Vec<(String, String)> = seen.into_iter().collect();
    values.sort_by(|(a, _), (b, _)| a.cmp(b));
    values.into_iter().map(|(_, display)| display).collect()
}

#[cfg(test)]
#[path = "tests/listing_tests.rs"]
mod tests;
