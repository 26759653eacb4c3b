//! Relationship type resolution
//!
//! Answers two questions over the static tables: which verbs may connect
//! type A to type B, and which types A may point at. Every function here is
//! total; unknown types fall back to an empty list or to `related-to`.

mod tables;

use std::collections::HashMap;
use std::sync::LazyLock;

use crate::entity_type::{join_key, second_segment, strip_from_type};

pub use tables::Entry;

/// Generic verb allowed between any two domain entities
pub const RELATED_TO: &str = "related-to";

/// Verbs that take part in an attack's kill chain
pub const KILL_CHAIN_VERBS: [&str; 4] = ["uses", "exploits", "drops", "indicates"];

static GENERIC: RelationsTable = RelationsTable {
    name: "relations",
    entries: tables::RELATIONS,
    index: LazyLock::new(|| index_entries(tables::RELATIONS)),
};

static OBSERVABLES: RelationsTable = RelationsTable {
    name: "observable-relations",
    entries: tables::OBSERVABLE_RELATIONS,
    index: LazyLock::new(|| index_entries(tables::OBSERVABLE_RELATIONS)),
};

fn index_entries(entries: &'static [Entry]) -> HashMap<&'static str, &'static [&'static str]> {
    entries.iter().copied().collect()
}

/// An immutable mapping from `from_to` keys to ordered verb lists
///
/// Iteration follows table order. Lookups go through a hash index built on
/// first use.
pub struct RelationsTable {
    name: &'static str,
    entries: &'static [Entry],
    index: LazyLock<HashMap<&'static str, &'static [&'static str]>>,
}

impl RelationsTable {
    /// Table of relationships between generic domain entities
    pub fn generic() -> &'static Self {
        &GENERIC
    }

    /// Table of relationships between cyber observables
    pub fn observables() -> &'static Self {
        &OBSERVABLES
    }

    /// Short name used in listings
    pub fn name(&self) -> &'static str {
        self.name
    }

    /// Number of keys
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// True when the table holds no keys
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Iterate `(key, verbs)` in table order
    pub fn entries(&self) -> impl Iterator<Item = Entry> + '_ {
        self.entries.iter().copied()
    }

    /// Verbs stored under a raw key
    pub fn lookup(&self, key: &str) -> Option<&'static [&'static str]> {
        self.index.get(key).copied()
    }

    /// Verbs stored for the pair `from_type` → `to_type`
    pub fn get(&self, from_type: &str, to_type: &str) -> Option<&'static [&'static str]> {
        self.lookup(&join_key(from_type, to_type))
    }

    /// Whether the pair has an entry
    pub fn contains(&self, from_type: &str, to_type: &str) -> bool {
        self.get(from_type, to_type).is_some()
    }

    /// Target types of every key containing `from_type` anywhere
    ///
    /// This is a substring scan, not a match on the first segment: `Actor`
    /// matches `Threat-Actor_*` keys, and the empty string matches every key.
    /// The returned type is the second separator-delimited segment, so
    /// `Course-Of_Action_Indicator` yields `Action`. Duplicates are kept.
    pub fn target_types(&self, from_type: &str) -> Vec<&'static str> {
        self.entries()
            .filter(|(key, _)| key.contains(from_type))
            .filter_map(|(key, _)| second_segment(key))
            .collect()
    }

    /// Target types of keys that start with exactly `from_type` and a separator
    pub fn target_types_exact(&self, from_type: &str) -> Vec<&'static str> {
        self.entries()
            .filter_map(|(key, _)| strip_from_type(key, from_type))
            .collect()
    }
}

impl std::fmt::Debug for RelationsTable {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("RelationsTable")
            .field("name", &self.name)
            .field("len", &self.entries.len())
            .finish()
    }
}

/// Verbs allowed from `from_type` to `to_type`
///
/// With `related_to`, the generic `related-to` verb is appended to whatever
/// the table holds (without deduplication), and is the sole verb for unknown
/// pairs. Without it, unknown pairs yield an empty list.
pub fn resolve_relations_types(
    from_type: &str,
    to_type: &str,
    related_to: bool,
) -> Vec<&'static str> {
    let mut verbs = RelationsTable::generic()
        .get(from_type, to_type)
        .map(<[_]>::to_vec)
        .unwrap_or_default();
    if related_to {
        verbs.push(RELATED_TO);
    }
    verbs
}

/// Verbs allowed between two observable types
///
/// Never falls back to `related-to`.
pub fn resolve_stix_cyber_observable_relationships_types(
    from_type: &str,
    to_type: &str,
) -> Vec<&'static str> {
    RelationsTable::observables()
        .get(from_type, to_type)
        .map(<[_]>::to_vec)
        .unwrap_or_default()
}

/// Types reachable from `from_type` in the generic table (substring scan)
pub fn resolve_target_types(from_type: &str) -> Vec<&'static str> {
    RelationsTable::generic().target_types(from_type)
}

/// Types reachable from `from_type` in the observable table (substring scan)
pub fn resolve_stix_cyber_observable_relationships_target_types(
    from_type: &str,
) -> Vec<&'static str> {
    RelationsTable::observables().target_types(from_type)
}

/// Types reachable from exactly `from_type` in the generic table
pub fn resolve_target_types_exact(from_type: &str) -> Vec<&'static str> {
    RelationsTable::generic().target_types_exact(from_type)
}

/// Types reachable from exactly `from_type` in the observable table
pub fn resolve_stix_cyber_observable_relationships_target_types_exact(
    from_type: &str,
) -> Vec<&'static str> {
    RelationsTable::observables().target_types_exact(from_type)
}

/// Whether `verb` is one of the kill-chain verbs (exact, case-sensitive)
pub fn has_kill_chain_phase(verb: &str) -> bool {
    KILL_CHAIN_VERBS.contains(&verb)
}
