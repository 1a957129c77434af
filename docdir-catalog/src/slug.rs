//! Public URL identifiers for providers.
//!
//! A slug is derived from a provider's name and suburb every time a link is
//! needed; it is never stored. Slugs follow the shape:
//! ```text
//! dr-<name>-<suburb>
//! ```
//! with the suburb segment omitted when the provider has none.
//!
//! [`decode`] is a heuristic inverse only. Names and suburbs can contain
//! hyphens of their own, so the split between the two is a guess: the last
//! hyphen-separated token is taken as the suburb.

use crate::types::Provider;

/// Prefix carried by every encoded slug.
pub const SLUG_PREFIX: &str = "dr-";

/// Name and suburb candidates recovered from a slug.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SlugParts {
    /// Every token before the last, joined with spaces.
    pub name: String,
    /// The last token. Empty when the slug has no tokens at all.
    pub suburb: String,
}

/// Encode a provider as a slug.
///
/// Deterministic: providers with identical name and suburb encode to the
/// same slug. Collisions are accepted; lookups fall back to first match.
///
/// # Examples
///
/// ```
/// use docdir_catalog::{Provider, ProviderId, encode};
///
/// let p = Provider::new(ProviderId(1))
///     .with_display_name("Smith")
///     .with_suburb("Sandton Central");
/// assert_eq!(encode(&p), "dr-smith-sandton-central");
///
/// let p = Provider::new(ProviderId(2)).with_display_name("O'Brien");
/// assert_eq!(encode(&p), "dr-obrien");
/// ```
pub fn encode(provider: &Provider) -> String {
    let name = slugify_segment(provider.display_name());
    let suburb = slugify_segment(provider.suburb());

    let mut slug = String::with_capacity(SLUG_PREFIX.len() + name.len() + suburb.len() + 1);
    slug.push_str(SLUG_PREFIX);
    slug.push_str(&name);
    if !suburb.is_empty() {
        if !name.is_empty() {
            slug.push('-');
        }
        slug.push_str(&suburb);
    }
    slug
}

/// Convert free text into one slug segment.
///
/// Lowercases, drops every character outside `[a-z0-9]`, whitespace and
/// `-`, then turns each run of whitespace and hyphens into a single hyphen.
/// Hyphens never lead or trail the segment.
pub fn slugify_segment(text: &str) -> String {
    let lower = text.to_lowercase();
    let mut out = String::with_capacity(lower.len());
    let mut pending_hyphen = false;

    for c in lower.chars() {
        if c.is_ascii_lowercase() || c.is_ascii_digit() {
            if pending_hyphen && !out.is_empty() {
                out.push('-');
            }
            pending_hyphen = false;
            out.push(c);
        } else if c == '-' || c.is_whitespace() {
            pending_hyphen = true;
        }
    }

    out
}

/// Split a slug into name and suburb candidates.
///
/// Accepts any input. An optional leading `dr-` is stripped, the remainder
/// is split on hyphens, the last token becomes the suburb candidate and the
/// rest (joined with spaces) the name candidate.
///
/// # Examples
///
/// ```
/// use docdir_catalog::decode;
///
/// let parts = decode("dr-john-smith-sandton");
/// assert_eq!(parts.name, "john smith");
/// assert_eq!(parts.suburb, "sandton");
///
/// let parts = decode("");
/// assert!(parts.name.is_empty() && parts.suburb.is_empty());
/// ```
pub fn decode(slug: &str) -> SlugParts {
    let rest = slug.strip_prefix(SLUG_PREFIX).unwrap_or(slug);
    let mut tokens: Vec<&str> = rest.split('-').collect();
    let suburb = tokens.pop().unwrap_or_default().to_string();

    SlugParts {
        name: tokens.join(" "),
        suburb,
    }
}
