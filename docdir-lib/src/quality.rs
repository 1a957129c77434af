//! Listing quality scoring.
//!
//! Every provider record is scored against a fixed rubric to decide whether
//! it is fit for public indexing. The weights sum to 100:
//!
//! | Facet        | Present when                          | Weight |
//! |--------------|---------------------------------------|--------|
//! | name         | display name non-blank                | 40     |
//! | specialty    | profession non-blank                  | 30     |
//! | location     | suburb or province non-blank          | 20     |
//! | contact      | telephone or address non-blank        | 10     |
//!
//! Contact details add to the score but are not required for completeness.

use docdir_catalog::Provider;
use serde::Serialize;

pub const NAME_WEIGHT: u8 = 40;
pub const SPECIALTY_WEIGHT: u8 = 30;
pub const LOCATION_WEIGHT: u8 = 20;
pub const CONTACT_WEIGHT: u8 = 10;

/// Minimum score for a complete provider to be listed in the sitemap.
pub const SITEMAP_MIN_SCORE: u8 = 90;

/// Rubric evaluation for a single provider at one instant.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct QualityScore {
    pub has_name: bool,
    pub has_specialty: bool,
    pub has_location: bool,
    pub has_contact: bool,
    /// Weighted sum of the present facets, in `0..=100`.
    pub score: u8,
    /// Name, specialty and location are all present.
    pub is_complete: bool,
}

impl QualityScore {
    /// Whether this score passes the public-indexing policy.
    pub fn is_sitemap_eligible(&self) -> bool {
        self.is_complete && self.score >= SITEMAP_MIN_SCORE
    }

    /// Names of the facets this provider is missing.
    pub fn missing(&self) -> Vec<&'static str> {
        [
            (self.has_name, "name"),
            (self.has_specialty, "specialty"),
            (self.has_location, "location"),
            (self.has_contact, "contact"),
        ]
        .into_iter()
        .filter(|(present, _)| !present)
        .map(|(_, facet)| facet)
        .collect()
    }
}

fn present(value: &str) -> bool {
    !value.trim().is_empty()
}

/// Score a provider against the rubric.
pub fn evaluate(provider: &Provider) -> QualityScore {
    let has_name = present(provider.display_name());
    let has_specialty = present(provider.profession());
    let has_location = present(provider.suburb()) || present(provider.province());
    let has_contact = present(provider.telephone()) || present(provider.address());

    let score = [
        (has_name, NAME_WEIGHT),
        (has_specialty, SPECIALTY_WEIGHT),
        (has_location, LOCATION_WEIGHT),
        (has_contact, CONTACT_WEIGHT),
    ]
    .into_iter()
    .filter(|(facet, _)| *facet)
    .map(|(_, weight)| weight)
    .sum();

    QualityScore {
        has_name,
        has_specialty,
        has_location,
        has_contact,
        score,
        is_complete: has_name && has_specialty && has_location,
    }
}

/// Providers eligible for public indexing, in input order.
pub fn filter_sitemap_providers(providers: &[Provider]) -> Vec<&Provider> {
    providers
        .iter()
        .filter(|p| evaluate(p).is_sitemap_eligible())
        .collect()
}

/// Aggregate quality figures over a provider set.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct QualityReport {
    pub total: usize,
    pub complete: usize,
    pub sitemap_eligible: usize,
    pub missing_name: usize,
    pub missing_specialty: usize,
    pub missing_location: usize,
    pub missing_contact: usize,
}

impl QualityReport {
    pub fn from_providers(providers: &[Provider]) -> Self {
        providers
            .iter()
            .map(evaluate)
            .fold(Self::default(), |mut report, q| {
                report.total += 1;
                report.complete += usize::from(q.is_complete);
                report.sitemap_eligible += usize::from(q.is_sitemap_eligible());
                report.missing_name += usize::from(!q.has_name);
                report.missing_specialty += usize::from(!q.has_specialty);
                report.missing_location += usize::from(!q.has_location);
                report.missing_contact += usize::from(!q.has_contact);
                report
            })
    }

    /// Share of complete providers as a percentage, 0 for an empty set.
    pub fn complete_percent(&self) -> f64 {
        if self.total == 0 {
            0.0
        } else {
            self.complete as f64 * 100.0 / self.total as f64
        }
    }
}

#[cfg(test)]
#[path = "tests/quality_tests.rs"]
mod tests;
