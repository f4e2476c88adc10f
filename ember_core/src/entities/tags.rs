//! Tag index - bidirectional entity <-> label classification.

use std::collections::{BTreeSet, HashMap};

use super::Entity;

/// Normalize a raw tag: lowercase ASCII letters, then keep only `a-z`, `0-9` and `_`.
///
/// An empty result means "no tag".
pub fn normalize_tag(raw: &str) -> String {
    raw.chars()
        .map(|c| c.to_ascii_lowercase())
        .filter(|c| c.is_ascii_lowercase() || c.is_ascii_digit() || *c == '_')
        .collect()
}

/// Dual index of entity tags.
///
/// Both directions are updated inside the same `&mut self` call, so no reader
/// ever sees one side without the other.
#[derive(Debug, Clone, Default)]
pub struct TagIndex {
    /// Entity -> its tags.
    entity_tags: HashMap<Entity, BTreeSet<String>>,

    /// Reverse index: tag -> entities carrying it.
    tag_entities: HashMap<String, BTreeSet<Entity>>,
}

impl TagIndex {
    /// Create an empty index.
    pub fn new() -> Self {
        Self::default()
    }

    /// Attach a tag to an entity. Empty or duplicate tags are ignored.
    pub fn add_tag(&mut self, entity: Entity, raw_tag: &str) {
        let tag = normalize_tag(raw_tag);
        if tag.is_empty() {
            return;
        }

        let tags = self.entity_tags.entry(entity).or_default();
        if tags.contains(&tag) {
            return;
        }
        tags.insert(tag.clone());
        self.tag_entities.entry(tag).or_default().insert(entity);
    }

    /// Detach a tag from an entity. Absent tags are ignored.
    pub fn remove_tag(&mut self, entity: Entity, raw_tag: &str) {
        let tag = normalize_tag(raw_tag);
        if tag.is_empty() {
            return;
        }

        if let Some(tags) = self.entity_tags.get_mut(&entity) {
            tags.remove(&tag);
            if tags.is_empty() {
                self.entity_tags.remove(&entity);
            }
        }
        self.unlink(&tag, entity);
    }

    /// Check whether an entity carries a tag.
    pub fn has_tag(&self, entity: Entity, raw_tag: &str) -> bool {
        let tag = normalize_tag(raw_tag);
        if tag.is_empty() {
            return false;
        }
        self.entity_tags
            .get(&entity)
            .is_some_and(|tags| tags.contains(&tag))
    }

    /// All tags of an entity, sorted. The result is a copy.
    pub fn tags_of(&self, entity: Entity) -> Vec<String> {
        self.entity_tags
            .get(&entity)
            .map(|tags| tags.iter().cloned().collect())
            .unwrap_or_default()
    }

    /// All entities carrying a tag, in ascending id order.
    ///
    /// One hash lookup plus a walk over the matches; never scans all entities.
    pub fn entities_with_tag(&self, raw_tag: &str) -> Vec<Entity> {
        let tag = normalize_tag(raw_tag);
        self.tag_entities
            .get(&tag)
            .map(|entities| entities.iter().copied().collect())
            .unwrap_or_default()
    }

    /// Number of entities carrying a tag, without materializing them.
    pub fn count_with_tag(&self, raw_tag: &str) -> usize {
        let tag = normalize_tag(raw_tag);
        self.tag_entities.get(&tag).map_or(0, BTreeSet::len)
    }

    /// Drop every tag association of an entity. Called by registry cleanup.
    pub fn purge(&mut self, entity: Entity) {
        let Some(tags) = self.entity_tags.remove(&entity) else {
            return;
        };
        for tag in &tags {
            self.unlink(tag, entity);
        }
    }

    fn unlink(&mut self, tag: &str, entity: Entity) {
        if let Some(entities) = self.tag_entities.get_mut(tag) {
            entities.remove(&entity);
            if entities.is_empty() {
                self.tag_entities.remove(tag);
            }
        }
    }
}
