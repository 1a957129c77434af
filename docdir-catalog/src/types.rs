//! Data model types for the provider directory.
//!
//! Every attribute except the identifier is optional and inconsistently
//! populated in the source data. The accessors on [`Provider`] are the one
//! place where "missing" becomes "empty string"; engine code never looks at
//! the underlying `Option`s.

use std::fmt;

use serde::{Deserialize, Serialize};

// ── Identity ────────────────────────────────────────────────────────────────

/// Storage-assigned provider identifier.
///
/// Immutable for the lifetime of a record and never reused after deletion.
#[derive(
    Debug, Clone, Copy, Default, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize,
)]
#[serde(transparent)]
pub struct ProviderId(pub i64);

impl ProviderId {
    /// Returns true for the placeholder id carried by records that have not
    /// been assigned one by storage yet.
    pub fn is_unassigned(&self) -> bool {
        self.0 <= 0
    }
}

impl fmt::Display for ProviderId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl std::str::FromStr for ProviderId {
    type Err = std::num::ParseIntError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        s.trim().parse().map(ProviderId)
    }
}

// ── Provider ────────────────────────────────────────────────────────────────

/// A healthcare provider listed in the public directory.
///
/// Field aliases accept the column headers used by the upstream spreadsheet
/// exports (e.g. `DOCTOR SURNAME`), so YAML and CSV snapshots can be loaded
/// without a translation step.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Provider {
    #[serde(default, alias = "ID", deserialize_with = "id_or_unassigned")]
    pub id: ProviderId,
    #[serde(default, alias = "DOCTOR SURNAME", alias = "displayName")]
    pub display_name: Option<String>,
    #[serde(default, alias = "PROFESSION")]
    pub profession: Option<String>,
    #[serde(default, alias = "REGION")]
    pub region: Option<String>,
    #[serde(default, alias = "PROVINCE")]
    pub province: Option<String>,
    #[serde(default, alias = "SUBURB")]
    pub suburb: Option<String>,
    #[serde(default, alias = "TELEPHONE")]
    pub telephone: Option<String>,
    #[serde(default, alias = "ADDRESS")]
    pub address: Option<String>,
    #[serde(
        default,
        alias = "PROFILE PICTURE",
        alias = "profilePictureUrl",
        skip_serializing_if = "Option::is_none"
    )]
    pub profile_picture_url: Option<String>,
}

// Spreadsheet exports leave the id cell blank for new rows.
fn id_or_unassigned<'de, D>(deserializer: D) -> Result<ProviderId, D::Error>
where
    D: serde::Deserializer<'de>,
{
    Ok(Option::<ProviderId>::deserialize(deserializer)?.unwrap_or_default())
}

fn text(field: &Option<String>) -> &str {
    field.as_deref().unwrap_or("")
}

impl Provider {
    pub fn new(id: ProviderId) -> Self {
        Self {
            id,
            ..Self::default()
        }
    }

    pub fn display_name(&self) -> &str {
        text(&self.display_name)
    }

    pub fn profession(&self) -> &str {
        text(&self.profession)
    }

    pub fn region(&self) -> &str {
        text(&self.region)
    }

    pub fn province(&self) -> &str {
        text(&self.province)
    }

    pub fn suburb(&self) -> &str {
        text(&self.suburb)
    }

    pub fn telephone(&self) -> &str {
        text(&self.telephone)
    }

    pub fn address(&self) -> &str {
        text(&self.address)
    }

    pub fn profile_picture_url(&self) -> &str {
        text(&self.profile_picture_url)
    }

    /// Read a text field by name, with missing values as `""`.
    pub fn get(&self, field: ProviderField) -> &str {
        match field {
            ProviderField::DisplayName => self.display_name(),
            ProviderField::Profession => self.profession(),
            ProviderField::Region => self.region(),
            ProviderField::Province => self.province(),
            ProviderField::Suburb => self.suburb(),
            ProviderField::Telephone => self.telephone(),
            ProviderField::Address => self.address(),
        }
    }

    pub fn with_display_name(mut self, name: impl Into<String>) -> Self {
        self.display_name = Some(name.into());
        self
    }

    pub fn with_profession(mut self, profession: impl Into<String>) -> Self {
        self.profession = Some(profession.into());
        self
    }

    pub fn with_region(mut self, region: impl Into<String>) -> Self {
        self.region = Some(region.into());
        self
    }

    pub fn with_province(mut self, province: impl Into<String>) -> Self {
        self.province = Some(province.into());
        self
    }

    pub fn with_suburb(mut self, suburb: impl Into<String>) -> Self {
        self.suburb = Some(suburb.into());
        self
    }

    pub fn with_telephone(mut self, telephone: impl Into<String>) -> Self {
        self.telephone = Some(telephone.into());
        self
    }

    pub fn with_address(mut self, address: impl Into<String>) -> Self {
        self.address = Some(address.into());
        self
    }
}

/// Text attributes of a [`Provider`] that can be read generically.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ProviderField {
    DisplayName,
    Profession,
    Region,
    Province,
    Suburb,
    Telephone,
    Address,
}

impl ProviderField {
    /// The fields offered as exact-match filters in the directory listing.
    pub const CATEGORICAL: [ProviderField; 4] = [
        ProviderField::Region,
        ProviderField::Province,
        ProviderField::Suburb,
        ProviderField::Profession,
    ];

    pub fn as_str(&self) -> &'static str {
        match self {
            Self::DisplayName => "display_name",
            Self::Profession => "profession",
            Self::Region => "region",
            Self::Province => "province",
            Self::Suburb => "suburb",
            Self::Telephone => "telephone",
            Self::Address => "address",
        }
    }
}

impl fmt::Display for ProviderField {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

// ── Snapshot ────────────────────────────────────────────────────────────────

/// An immutable value snapshot of the full provider set.
///
/// Records are ordered by [`ProviderId`] on construction, which makes every
/// first-match-wins operation over a snapshot independent of the order the
/// storage layer happened to return rows in. The sort is stable, so records
/// sharing an id keep their relative order.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Snapshot {
    providers: Vec<Provider>,
}

impl Snapshot {
    pub fn new(mut providers: Vec<Provider>) -> Self {
        providers.sort_by_key(|p| p.id);
        Self { providers }
    }

    pub fn providers(&self) -> &[Provider] {
        &self.providers
    }

    pub fn len(&self) -> usize {
        self.providers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.providers.is_empty()
    }

    pub fn get(&self, id: ProviderId) -> Option<&Provider> {
        self.providers
            .binary_search_by_key(&id, |p| p.id)
            .ok()
            .map(|idx| &self.providers[idx])
    }

    pub fn into_providers(self) -> Vec<Provider> {
        self.providers
    }
}

impl From<Vec<Provider>> for Snapshot {
    fn from(providers: Vec<Provider>) -> Self {
        Self::new(providers)
    }
}
