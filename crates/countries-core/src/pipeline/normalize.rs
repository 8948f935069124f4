// crates/countries-core/src/pipeline/normalize.rs
use crate::model::CountryRecord;

/// Looks a name up in the rename table; unknown names pass through.
pub fn rename<'a>(name: &'a str, renames: &'a [(String, String)]) -> &'a str {
    renames
        .iter()
        .find(|(from, _)| from == name)
        .map_or(name, |(_, to)| to.as_str())
}

/// Lowercases ISO codes and applies the rename table, in place.
pub fn normalize(records: &mut [CountryRecord], renames: &[(String, String)]) {
    for record in records.iter_mut() {
        if let Some(code) = record.code.as_mut() {
            *code = code.to_lowercase();
        }
        let renamed = rename(&record.name, renames);
        if renamed != record.name {
            record.name = renamed.to_owned();
        }
    }
}
