// crates/countries-core/src/pipeline/duplicates.rs
use crate::common::OrderedSet;
use crate::model::CountryRecord;
use std::collections::HashMap;
use tracing::warn;

/// Names carried by more than one record, in first-seen order.
pub fn find_duplicate_names(records: &[CountryRecord]) -> Vec<String> {
    let mut counts: HashMap<&str, usize> = HashMap::new();
    for r in records {
        *counts.entry(r.name.as_str()).or_default() += 1;
    }

    records
        .iter()
        .filter(|r| counts[r.name.as_str()] > 1)
        .map(|r| r.name.clone())
        .collect::<OrderedSet<_>>()
        .into_vec()
}

/// Soft warning only: the records are written regardless.
pub fn report_duplicates(duplicates: &[String]) {
    if duplicates.is_empty() {
        return;
    }
    warn!("Duplicate country labels found");
    for name in duplicates {
        warn!(name = %name, "duplicate country label");
    }
}
