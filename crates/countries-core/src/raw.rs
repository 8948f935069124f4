use serde::Deserialize;

/// One row of the source dump: a (country, capital, continent, TLD) combination.
///
/// NOTE: This type mirrors the external SPARQL export. Every column can be
/// missing or `null` there, so all of them are optional. Extra columns are
/// ignored.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RawRecord {
    #[serde(rename = "countryLabel", default)]
    pub country_label: Option<String>,
    #[serde(rename = "capitalLabel", default)]
    pub capital_label: Option<String>,
    #[serde(rename = "continentLabel", default)]
    pub continent_label: Option<String>,
    #[serde(default)]
    pub iso2: Option<String>,
    #[serde(rename = "tldLabel", default)]
    pub tld_label: Option<String>,
}

pub type RawRecords = Vec<RawRecord>;
