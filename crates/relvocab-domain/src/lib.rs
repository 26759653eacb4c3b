//! Relvocab Domain Layer
//!
//! This crate holds the relationship vocabulary of the threat-intelligence
//! model: which relationship verbs may connect two entity types, which types
//! a given type may point at, and how tri-state flags are displayed.
//!
//! ## Key Concepts
//!
//! - **Entity type pair**: `(from, to)` joined with `_` into a lookup key
//! - **Relations table**: generic domain entities (threat actors, malware, locations)
//! - **Observable table**: low-level artifacts (files, traffic, email parts, addresses)
//! - **Kill-chain verb**: a verb that takes part in an attack's progression
//! - **Status chip**: style and text for a `Confirmed | Denied | NotApplicable` flag
//!
//! ## Architecture
//!
//! Everything here is pure and total. The tables are `'static` data and can
//! be read from any number of threads without synchronization. Translation is
//! injected through the [`traits::Translator`] trait rather than read from
//! global state.

#![warn(missing_docs)]
#![warn(clippy::all)]

pub mod entity_type;
pub mod relations;
pub mod status;
pub mod traits;

// Re-exports for convenience
pub use entity_type::{EntityTypePair, KEY_SEPARATOR};
pub use relations::{
    has_kill_chain_phase, resolve_relations_types,
    resolve_stix_cyber_observable_relationships_target_types,
    resolve_stix_cyber_observable_relationships_target_types_exact,
    resolve_stix_cyber_observable_relationships_types, resolve_target_types,
    resolve_target_types_exact, RelationsTable, KILL_CHAIN_VERBS, RELATED_TO,
};
pub use status::{render, BooleanDisplayStatus, ChipColor, ChipStyle, ChipVariant, StatusChip};
pub use traits::{IdentityTranslator, Translator};
