// src/detail.rs
//
// Detail records keyed by entity id. Loading is best-effort: a missing or
// malformed document yields an empty cache, which is what triggers live
// acquisition at startup.

use std::collections::HashMap;

use serde_json::Value;

use crate::{model::DetailRecord, source::Source};

#[derive(Clone, Debug, Default)]
pub struct DetailCache {
    records: HashMap<String, DetailRecord>,
}

impl DetailCache {
    /// Never fails; every problem degrades to "no detail".
    pub fn load(source: &Source) -> Self {
        match source.read_to_string() {
            Ok(text) => {
                let cache = Self::from_json(&text, &source.to_string());
                logf!("Detail: Loaded {} records from {}", cache.len(), source);
                cache
            }
            Err(e) => {
                logw!("Detail: Unavailable, treating as empty ({e})");
                Self::default()
            }
        }
    }

    pub fn from_json(text: &str, origin: &str) -> Self {
        let map = match serde_json::from_str::<Value>(text) {
            Ok(Value::Object(map)) => map,
            Ok(_) => {
                logw!("Detail: {origin} is not an object keyed by id, treating as empty");
                return Self::default();
            }
            Err(e) => {
                logw!("Detail: Malformed JSON in {origin}, treating as empty ({e})");
                return Self::default();
            }
        };

        let mut records = HashMap::with_capacity(map.len());
        let mut skipped = 0usize;
        for (id, value) in map {
            match serde_json::from_value::<DetailRecord>(value) {
                Ok(rec) => {
                    records.insert(id, rec);
                }
                Err(e) => {
                    logd!("Detail: Skipping {id}: {e}");
                    skipped += 1;
                }
            }
        }
        if skipped > 0 {
            logw!("Detail: Skipped {skipped} unreadable records in {origin}");
        }
        Self { records }
    }

    pub fn is_populated(&self) -> bool {
        !self.records.is_empty()
    }

    pub fn lookup(&self, id: &str) -> Option<&DetailRecord> {
        self.records.get(id)
    }

    pub fn len(&self) -> usize { self.records.len() }
    pub fn is_empty(&self) -> bool { self.records.is_empty() }
}

impl FromIterator<(String, DetailRecord)> for DetailCache {
    fn from_iter<I: IntoIterator<Item = (String, DetailRecord)>>(iter: I) -> Self {
        Self { records: iter.into_iter().collect() }
    }
}
