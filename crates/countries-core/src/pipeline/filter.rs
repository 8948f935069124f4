// crates/countries-core/src/pipeline/filter.rs
use crate::raw::RawRecord;
use once_cell::sync::Lazy;
use regex::Regex;

/// A dot followed by exactly two lowercase ASCII letters (`.fr`, not `.info` or `.XY`).
static COUNTRY_TLD: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"^\.[a-z]{2}$").expect("country TLD pattern is valid"));

pub fn is_country_tld(tld: &str) -> bool {
    COUNTRY_TLD.is_match(tld)
}

/// Keeps rows with a two-letter country TLD that is not excluded. Order is preserved.
pub fn filter_records(records: Vec<RawRecord>, excluded: &[String]) -> Vec<RawRecord> {
    records
        .into_iter()
        .filter(|r| match r.tld_label.as_deref() {
            Some(tld) => is_country_tld(tld) && !excluded.iter().any(|x| x == tld),
            None => false,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::BuildConfig;

    fn row(country: &str, tld: Option<&str>) -> RawRecord {
        RawRecord {
            country_label: Some(country.to_string()),
            tld_label: tld.map(str::to_string),
            ..Default::default()
        }
    }

    #[test]
    fn pattern_accepts_only_dot_two_lowercase() {
        assert!(is_country_tld(".fr"));
        assert!(is_country_tld(".jp"));
        assert!(!is_country_tld(".info"));
        assert!(!is_country_tld(".XY"));
        assert!(!is_country_tld(".f"));
        assert!(!is_country_tld("fr"));
        assert!(!is_country_tld("..fr"));
        assert!(!is_country_tld(".fr "));
        assert!(!is_country_tld(".é1"));
    }

    #[test]
    fn drops_excluded_and_malformed_tlds_in_order() {
        let excluded = BuildConfig::default().excluded_tlds;
        let rows = vec![
            row("フランス", Some(".fr")),
            row("イギリス", Some(".gb")),
            row("イギリス", Some(".uk")),
            row("ソビエト連邦", Some(".su")),
            row("欧州連合", Some(".eu")),
            row("どこか", Some(".info")),
            row("不明", None),
        ];

        let kept: Vec<_> = filter_records(rows, &excluded)
            .into_iter()
            .map(|r| r.tld_label.unwrap())
            .collect();

        assert_eq!(kept, vec![".fr", ".uk", ".eu"]);
    }
}
