//! schema.org-shaped vocabulary encoded as typed Rust data.
//!
//! The `schemagen-vocab` crate provides the read-only vocabulary graph the
//! generator works from: types with their declared superclasses, properties
//! with their domains and ranges, and the named instances that make up
//! enumerations. It also computes the per-property [`CardinalityIndex`] and
//! defines the [`VocabularyBridge`] oracle used for advisory checks.
//!
//! # Entry Point
//!
//! ```
//! use schemagen_vocab::{Graph, Ontology, VocabularyType};
//!
//! let graph = Graph::new()
//!     .with_type(VocabularyType::new("https://schema.org/Thing"))
//!     .with_type(VocabularyType::new("https://schema.org/Book").with_superclass("https://schema.org/Thing"));
//! let ontology = Ontology::new(vec![graph]);
//! assert_eq!(ontology.type_count(), 2);
//! ```

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod bridge;
pub mod cardinality;
pub mod error;
#[cfg(feature = "jsonld")]
pub mod jsonld;
pub mod model;

pub use bridge::{GoodRelationsBridge, VocabularyBridge};
pub use cardinality::{Cardinality, CardinalityIndex};
pub use error::Error;
pub use model::{
    is_datatype, is_datatype_name, is_enumeration_marker, local_name, Graph, Ontology,
    VocabularyInstance, VocabularyProperty, VocabularyType,
};
