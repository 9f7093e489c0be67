// src/index.rs
//
// Master index: every browsable entity, keyed by id, in document order.
// Loaded once per session; read-only afterwards.

use std::collections::HashMap;

use serde::Deserialize;
use serde_json::Value;

use crate::{
    core::text::title_from_slug,
    error::LoadError,
    model::{Entity, EntityType},
    source::Source,
};

/// Master entry as written by the loaders. Several label spellings exist in the
/// wild; the first present one wins.
#[derive(Debug, Default, Deserialize)]
#[serde(default)]
struct RawEntity {
    #[serde(rename = "type")]
    kind: Option<String>,
    name: Option<String>,
    label: Option<String>,
    display_name: Option<String>,
    slug: Option<String>,
    url: Option<String>,
}

#[derive(Clone, Debug, Default)]
pub struct CatalogIndex {
    entities: Vec<Entity>,
    by_id: HashMap<String, usize>,
}

impl CatalogIndex {
    /// Unreachable or malformed master document is fatal.
    pub fn load(source: &Source) -> Result<Self, LoadError> {
        let text = source.read_to_string()?;
        let index = Self::from_json(&text, &source.to_string())?;
        logf!("Index: Loaded {} entities from {}", index.len(), source);
        Ok(index)
    }

    pub fn from_json(text: &str, origin: &str) -> Result<Self, LoadError> {
        let doc: Value = serde_json::from_str(text).map_err(|err| LoadError::Parse {
            origin: s!(origin),
            err,
        })?;

        let Value::Object(map) = doc else {
            return Err(LoadError::Shape {
                origin: s!(origin),
                msg: s!("expected an object keyed by id"),
            });
        };

        let mut index = CatalogIndex::default();
        let mut skipped = 0usize;

        for (id, value) in map {
            let raw: RawEntity = serde_json::from_value(value).map_err(|e| LoadError::Shape {
                origin: s!(origin),
                msg: format!("entry {id}: {e}"),
            })?;

            let Some(kind) = raw.kind.as_deref().and_then(EntityType::parse) else {
                logd!("Index: Skipping {id}, unsupported type {:?}", raw.kind);
                skipped += 1;
                continue;
            };

            index.push(entity_from_raw(id, kind, raw));
        }

        if skipped > 0 {
            logw!("Index: Skipped {skipped} entries of unsupported type in {origin}");
        }
        Ok(index)
    }

    /// Later duplicates replace earlier ones in place, keeping the first position.
    fn push(&mut self, entity: Entity) {
        match self.by_id.get(&entity.id) {
            Some(&ix) => self.entities[ix] = entity,
            None => {
                self.by_id.insert(entity.id.clone(), self.entities.len());
                self.entities.push(entity);
            }
        }
    }

    pub fn get(&self, id: &str) -> Option<&Entity> {
        self.by_id.get(id).map(|&ix| &self.entities[ix])
    }

    /// Entities of one category, in source order.
    pub fn by_type(&self, kind: EntityType) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter().filter(move |e| e.kind == kind)
    }

    /// Exact-name lookup among states.
    pub fn find_state(&self, name: &str) -> Option<&Entity> {
        self.by_type(EntityType::State).find(|e| e.name == name)
    }

    pub fn iter(&self) -> impl Iterator<Item = &Entity> + '_ {
        self.entities.iter()
    }

    pub fn count(&self, kind: EntityType) -> usize {
        self.by_type(kind).count()
    }

    pub fn len(&self) -> usize { self.entities.len() }
    pub fn is_empty(&self) -> bool { self.entities.is_empty() }
}

impl FromIterator<Entity> for CatalogIndex {
    fn from_iter<I: IntoIterator<Item = Entity>>(iter: I) -> Self {
        let mut index = CatalogIndex::default();
        for e in iter {
            index.push(e);
        }
        index
    }
}

fn entity_from_raw(id: String, kind: EntityType, raw: RawEntity) -> Entity {
    let slug = raw.slug.unwrap_or_default();
    let name = raw
        .name
        .or(raw.label)
        .or(raw.display_name)
        .filter(|n| !n.trim().is_empty())
        .unwrap_or_else(|| if slug.is_empty() { id.clone() } else { title_from_slug(&slug) });

    Entity {
        id,
        kind,
        name,
        slug,
        url: raw.url.unwrap_or_default(),
    }
}
