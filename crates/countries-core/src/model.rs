// crates/countries-core/src/model.rs
use serde::{Deserialize, Serialize};

/// One country as written to `countries.json`.
///
/// Field order is the serialized order: name, capital, continent, code, tld.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct CountryRecord {
    /// Display name after renaming.
    pub name: String,
    /// Distinct capitals joined with `,`. Empty when none are known.
    pub capital: String,
    /// Distinct continent slugs in first-seen order.
    pub continent: Vec<String>,
    /// Lowercased ISO 3166-1 alpha-2 code.
    pub code: Option<String>,
    /// First TLD seen for the country, verbatim.
    pub tld: Option<String>,
}
