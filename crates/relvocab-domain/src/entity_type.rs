//! Entity type pairs and their lookup keys

use serde::Serialize;

/// Separator placed between the two halves of a lookup key
pub const KEY_SEPARATOR: char = '_';

/// An ordered pair of entity types
///
/// Joined as `from_to` to address the relation tables. Type names are
/// case-sensitive and may themselves contain hyphens (`Attack-Pattern`),
/// so the separator is the only structural marker in a key.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize)]
pub struct EntityTypePair {
    /// Source entity type
    pub from_type: String,

    /// Target entity type
    pub to_type: String,
}

impl EntityTypePair {
    /// Create a new pair
    pub fn new(from_type: impl Into<String>, to_type: impl Into<String>) -> Self {
        Self {
            from_type: from_type.into(),
            to_type: to_type.into(),
        }
    }

    /// Build the table key for this pair
    pub fn key(&self) -> String {
        join_key(&self.from_type, &self.to_type)
    }

    /// Split a table key on its first separator
    ///
    /// Returns `None` when the key has no separator.
    pub fn parse_key(key: &str) -> Option<Self> {
        key.split_once(KEY_SEPARATOR)
            .map(|(from, to)| Self::new(from, to))
    }
}

impl std::fmt::Display for EntityTypePair {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}{}{}", self.from_type, KEY_SEPARATOR, self.to_type)
    }
}

/// Join two type names into a table key
pub fn join_key(from_type: &str, to_type: &str) -> String {
    let mut key = String::with_capacity(from_type.len() + to_type.len() + 1);
    key.push_str(from_type);
    key.push(KEY_SEPARATOR);
    key.push_str(to_type);
    key
}

/// Second separator-delimited segment of a key
///
/// Keys such as `Course-Of_Action_Indicator` carry more than one separator;
/// only the segment right after the first one is returned, and anything past
/// the next separator is dropped.
pub fn second_segment(key: &str) -> Option<&str> {
    key.split(KEY_SEPARATOR).nth(1)
}

/// Remainder of `key` once `from_type` and the separator are stripped
///
/// Exact-prefix counterpart of the substring scan.
pub fn strip_from_type<'a>(key: &'a str, from_type: &str) -> Option<&'a str> {
    key.strip_prefix(from_type)?.strip_prefix(KEY_SEPARATOR)
}
