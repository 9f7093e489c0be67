// src/model.rs
//
// Catalog records.
//
// - Entity: one master-index row (state, county or university). Immutable.
// - DetailRecord: the richer statistics for an entity, tagged by category.
//   Every statistic is optional; the "N/A" placeholder is applied only when
//   displaying (see `display_or_na`).

use std::fmt;

use serde::Deserialize;

use crate::config::consts::NOT_AVAILABLE;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum EntityType {
    State,
    County,
    University,
}

impl EntityType {
    pub const ALL: [EntityType; 3] = [EntityType::State, EntityType::County, EntityType::University];

    /// Exact spelling used in the documents.
    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "State" => Some(EntityType::State),
            "County" => Some(EntityType::County),
            "University" => Some(EntityType::University),
            _ => None,
        }
    }

    /// Case-insensitive, singular or plural (CLI input).
    pub fn parse_loose(s: &str) -> Option<Self> {
        match s.trim().to_ascii_lowercase().as_str() {
            "state" | "states" => Some(EntityType::State),
            "county" | "counties" => Some(EntityType::County),
            "university" | "universities" | "uni" => Some(EntityType::University),
            _ => None,
        }
    }

    pub fn label(self) -> &'static str {
        match self {
            EntityType::State => "State",
            EntityType::County => "County",
            EntityType::University => "University",
        }
    }

    pub fn plural(self) -> &'static str {
        match self {
            EntityType::State => "States",
            EntityType::County => "Counties",
            EntityType::University => "Universities",
        }
    }
}

impl fmt::Display for EntityType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Entity {
    pub id: String,
    pub kind: EntityType,
    /// Counties read "<County>, <StateAbbr>"
    pub name: String,
    pub slug: String,
    pub url: String,
}

/* ---------------- Detail records ---------------- */

/// A statistic as published: either a bare number or display text ("$75,149").
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(untagged)]
pub enum StatValue {
    Number(f64),
    Text(String),
}

impl fmt::Display for StatValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            StatValue::Number(n) if n.fract() == 0.0 && n.abs() < 1e15 => write!(f, "{}", *n as i64),
            StatValue::Number(n) => write!(f, "{n}"),
            StatValue::Text(t) => f.write_str(t),
        }
    }
}

/// State and county statistics.
#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct AreaStats {
    pub population: Option<StatValue>,
    pub median_age: Option<StatValue>,
    pub income: Option<StatValue>,
    pub poverty_rate: Option<StatValue>,
    pub property_value: Option<StatValue>,
}

#[derive(Clone, Debug, Default, PartialEq, Deserialize)]
#[serde(default)]
pub struct UniversityStats {
    pub tuition: Option<StatValue>,
    pub enrolled: Option<StatValue>,
    pub net_price: Option<StatValue>,
    pub growth: Option<StatValue>,
    pub acceptance_rate: Option<StatValue>,
    pub full_time: Option<StatValue>,
}

/// Column key (document field) and the label shown to users.
pub const AREA_FIELDS: &[(&str, &str)] = &[
    ("population", "Population"),
    ("median_age", "Median Age"),
    ("income", "Median Household Income"),
    ("poverty_rate", "Poverty Rate"),
    ("property_value", "Median Property Value"),
];

pub const UNIVERSITY_FIELDS: &[(&str, &str)] = &[
    ("tuition", "Undergraduate Tuition"),
    ("enrolled", "Enrolled Students"),
    ("net_price", "Average Net Price"),
    ("growth", "1 Year Growth"),
    ("acceptance_rate", "Acceptance Rate"),
    ("full_time", "Full-Time Enrollment"),
];

/// Tagged by the document's `type` field. Echoed `id`/`name`/`slug`/`url` are ignored;
/// the master entity is authoritative for those.
#[derive(Clone, Debug, PartialEq, Deserialize)]
#[serde(tag = "type")]
pub enum DetailRecord {
    State(AreaStats),
    County(AreaStats),
    University(UniversityStats),
}

/// One statistic of a detail record, ready for display or export.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct StatField<'a> {
    pub key: &'static str,
    pub label: &'static str,
    pub value: Option<&'a StatValue>,
}

impl DetailRecord {
    pub fn kind(&self) -> EntityType {
        match self {
            DetailRecord::State(_) => EntityType::State,
            DetailRecord::County(_) => EntityType::County,
            DetailRecord::University(_) => EntityType::University,
        }
    }

    /// Statistics in display order.
    pub fn fields(&self) -> Vec<StatField<'_>> {
        let values: Vec<Option<&StatValue>> = match self {
            DetailRecord::State(a) | DetailRecord::County(a) => vec![
                a.population.as_ref(),
                a.median_age.as_ref(),
                a.income.as_ref(),
                a.poverty_rate.as_ref(),
                a.property_value.as_ref(),
            ],
            DetailRecord::University(u) => vec![
                u.tuition.as_ref(),
                u.enrolled.as_ref(),
                u.net_price.as_ref(),
                u.growth.as_ref(),
                u.acceptance_rate.as_ref(),
                u.full_time.as_ref(),
            ],
        };
        field_table(self.kind())
            .iter()
            .zip(values)
            .map(|(&(key, label), value)| StatField { key, label, value })
            .collect()
    }

    /// Number of statistics actually present.
    pub fn known_count(&self) -> usize {
        self.fields().iter().filter(|f| f.value.is_some()).count()
    }
}

pub fn field_table(kind: EntityType) -> &'static [(&'static str, &'static str)] {
    match kind {
        EntityType::State | EntityType::County => AREA_FIELDS,
        EntityType::University => UNIVERSITY_FIELDS,
    }
}

pub fn display_or_na(value: Option<&StatValue>) -> String {
    match value {
        Some(v) => v.to_string(),
        None => s!(NOT_AVAILABLE),
    }
}
