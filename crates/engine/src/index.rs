//! Case-insensitive mark index over discovered entities.

use std::collections::HashMap;

use crate::model::{Entity, EntityRef};

/// Occurrences of one distinct mark across the entity list.
#[derive(Debug, Clone, Default)]
pub struct MarkEntry {
    pub count: usize,
    pub refs: Vec<EntityRef>,
}

/// Mapping from normalized mark to occurrence data, built once per
/// reconciliation pass.
#[derive(Debug, Default)]
pub struct MarkIndex {
    entries: HashMap<String, MarkEntry>,
}

impl MarkIndex {
    /// Trimmed, lowercased lookup key. Matching is case-insensitive but
    /// otherwise exact.
    pub fn normalize(mark: &str) -> String {
        mark.trim().to_lowercase()
    }

    /// Group entities by normalized mark, counting occurrences and keeping
    /// back-references for selection. Entities without a mark value are
    /// unmatchable and ignored.
    pub fn build(entities: &[Entity]) -> Self {
        let mut entries: HashMap<String, MarkEntry> = HashMap::new();
        for entity in entities {
            let key = Self::normalize(&entity.mark);
            if key.is_empty() {
                continue;
            }
            let entry = entries.entry(key).or_default();
            entry.count += 1;
            entry.refs.push(EntityRef {
                container_id: entity.container_id.clone(),
                member_id: entity.member_id.clone(),
            });
        }
        Self { entries }
    }

    pub fn lookup(&self, mark: &str) -> Option<&MarkEntry> {
        self.entries.get(&Self::normalize(mark))
    }

    /// Number of distinct marks indexed.
    pub fn distinct(&self) -> usize {
        self.entries.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn entity(container: &str, member: &str, mark: &str) -> Entity {
        Entity {
            container_id: container.into(),
            member_id: member.into(),
            mark: mark.into(),
        }
    }

    #[test]
    fn groups_case_insensitively() {
        let index = MarkIndex::build(&[
            entity("m1", "o1", "B-101"),
            entity("m1", "o2", "b-101"),
            entity("m2", "o3", "C-205"),
        ]);
        assert_eq!(index.distinct(), 2);
        let entry = index.lookup("B-101").unwrap();
        assert_eq!(entry.count, 2);
        assert_eq!(entry.refs.len(), 2);
    }

    #[test]
    fn lookup_normalizes_the_probe() {
        let index = MarkIndex::build(&[entity("m1", "o1", "B-101")]);
        assert!(index.lookup("  b-101 ").is_some());
        assert!(index.lookup("B-102").is_none());
    }

    #[test]
    fn markless_entities_ignored() {
        let index = MarkIndex::build(&[entity("m1", "o1", "  "), entity("m1", "o2", "B-101")]);
        assert_eq!(index.distinct(), 1);
    }

    #[test]
    fn empty_entity_list_is_legitimate() {
        let index = MarkIndex::build(&[]);
        assert_eq!(index.distinct(), 0);
        assert!(index.lookup("B-101").is_none());
    }
}
