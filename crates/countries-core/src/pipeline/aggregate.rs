// crates/countries-core/src/pipeline/aggregate.rs
use crate::common::OrderedSet;
use crate::config::ContinentMap;
use crate::model::CountryRecord;
use crate::raw::RawRecord;
use std::collections::HashMap;

/// Per-country accumulator while rows are folded in.
struct Group {
    name: String,
    capitals: OrderedSet<String>,
    continent_labels: OrderedSet<String>,
    iso2: Option<String>,
    tld: Option<String>,
}

impl Group {
    fn new(name: String) -> Self {
        Self {
            name,
            capitals: OrderedSet::new(),
            continent_labels: OrderedSet::new(),
            iso2: None,
            tld: None,
        }
    }

    fn absorb(&mut self, row: RawRecord) {
        if let Some(capital) = row.capital_label {
            self.capitals.insert(capital);
        }
        if let Some(continent) = row.continent_label {
            self.continent_labels.insert(continent);
        }
        // First non-null value wins.
        if self.iso2.is_none() {
            self.iso2 = row.iso2;
        }
        if self.tld.is_none() {
            self.tld = row.tld_label;
        }
    }

    fn finish(self, continents: &ContinentMap) -> CountryRecord {
        let continent = self
            .continent_labels
            .as_slice()
            .iter()
            .filter_map(|label| continents.slug_for(label))
            .map(str::to_string)
            .collect::<OrderedSet<_>>()
            .into_vec();

        CountryRecord {
            name: self.name,
            capital: self.capitals.into_vec().join(","),
            continent,
            code: self.iso2,
            tld: self.tld,
        }
    }
}

/// Groups rows by `countryLabel` in first-seen order, one record per country.
///
/// Rows without a country label are dropped. `code` is copied verbatim here;
/// lowercasing happens in [`super::normalize`].
pub fn aggregate(records: Vec<RawRecord>, continents: &ContinentMap) -> Vec<CountryRecord> {
    let mut index: HashMap<String, usize> = HashMap::new();
    let mut groups: Vec<Group> = Vec::new();

    for mut row in records {
        let Some(name) = row.country_label.take() else {
            continue;
        };
        let slot = match index.get(&name) {
            Some(&i) => i,
            None => {
                index.insert(name.clone(), groups.len());
                groups.push(Group::new(name));
                groups.len() - 1
            }
        };
        groups[slot].absorb(row);
    }

    groups.into_iter().map(|g| g.finish(continents)).collect()
}
