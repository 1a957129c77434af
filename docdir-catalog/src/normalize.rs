//! Comparison keys for free-text fields.
//!
//! Source location names are entered inconsistently ("Cape Town",
//! "CapeTown", " cape town "). Normalizing lowercases and removes every
//! whitespace character so all of those compare equal. The result is a
//! comparison key only and must never be shown to users.

/// Lowercase `text` and remove all whitespace, including internal runs.
///
/// # Examples
///
/// ```
/// use docdir_catalog::normalize;
///
/// assert_eq!(normalize(" Cape   Town "), "capetown");
/// assert_eq!(normalize("CapeTown"), "capetown");
/// assert_eq!(normalize(""), "");
/// ```
pub fn normalize(text: &str) -> String {
    text.chars()
        .filter(|c| !c.is_whitespace())
        .flat_map(char::to_lowercase)
        .collect()
}
