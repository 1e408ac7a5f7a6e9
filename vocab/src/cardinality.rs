//! Property cardinalities.
//!
//! The [`CardinalityIndex`] is computed once from the whole vocabulary before
//! generation begins and is read-only afterwards.

use std::collections::BTreeMap;
use std::fmt;
use std::str::FromStr;

use crate::bridge::VocabularyBridge;
use crate::model::Ontology;

/// Cardinality category of a property, written in UML multiplicity notation.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Cardinality {
    /// `(0..1)`
    #[cfg_attr(feature = "serde", serde(rename = "(0..1)"))]
    ZeroToOne,
    /// `(0..*)`
    #[cfg_attr(feature = "serde", serde(rename = "(0..*)"))]
    ZeroToMany,
    /// `(1..1)`
    #[cfg_attr(feature = "serde", serde(rename = "(1..1)"))]
    OneToOne,
    /// `(1..*)`
    #[cfg_attr(feature = "serde", serde(rename = "(1..*)"))]
    OneToMany,
    /// `(*..0)`
    #[cfg_attr(feature = "serde", serde(rename = "(*..0)"))]
    ManyToZero,
    /// `(*..1)`
    #[cfg_attr(feature = "serde", serde(rename = "(*..1)"))]
    ManyToOne,
    /// `(*..*)`
    #[cfg_attr(feature = "serde", serde(rename = "(*..*)"))]
    ManyToMany,
    /// Nothing in the vocabulary constrains the cardinality.
    #[default]
    #[cfg_attr(feature = "serde", serde(rename = "unknown"))]
    Unknown,
}

impl Cardinality {
    /// Every category, in notation order.
    pub const ALL: [Cardinality; 8] = [
        Cardinality::ZeroToOne,
        Cardinality::ZeroToMany,
        Cardinality::OneToOne,
        Cardinality::OneToMany,
        Cardinality::ManyToZero,
        Cardinality::ManyToOne,
        Cardinality::ManyToMany,
        Cardinality::Unknown,
    ];

    /// Returns the multiplicity notation.
    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Cardinality::ZeroToOne => "(0..1)",
            Cardinality::ZeroToMany => "(0..*)",
            Cardinality::OneToOne => "(1..1)",
            Cardinality::OneToMany => "(1..*)",
            Cardinality::ManyToZero => "(*..0)",
            Cardinality::ManyToOne => "(*..1)",
            Cardinality::ManyToMany => "(*..*)",
            Cardinality::Unknown => "unknown",
        }
    }

    /// Returns true if a field with this cardinality holds a collection.
    #[must_use]
    pub fn is_array(self) -> bool {
        matches!(
            self,
            Cardinality::ZeroToMany | Cardinality::OneToMany | Cardinality::ManyToMany
        )
    }

    /// Returns true if a field with this cardinality may be left unset.
    #[must_use]
    pub fn is_nullable(self) -> bool {
        !matches!(self, Cardinality::OneToOne | Cardinality::OneToMany)
    }

    /// Finds the first multiplicity token embedded anywhere in `text`.
    #[must_use]
    pub fn find_in(text: &str) -> Option<Cardinality> {
        Cardinality::ALL
            .iter()
            .filter(|c| **c != Cardinality::Unknown)
            .filter_map(|c| text.find(c.as_str()).map(|pos| (pos, *c)))
            .min_by_key(|(pos, _)| *pos)
            .map(|(_, c)| c)
    }

    /// Derives a cardinality from a property's local name and description
    /// when no authoritative source knows it.
    #[must_use]
    pub fn guess(name: &str, comment: &str) -> Cardinality {
        if comment.contains("(s)")
            || comment.starts_with("The most generic uni-directional social relation.")
            || comment.to_lowercase().contains("one or more")
        {
            return Cardinality::ZeroToMany;
        }
        if name.starts_with("is") || comment.starts_with("The ") {
            return Cardinality::ZeroToOne;
        }
        Cardinality::Unknown
    }
}

impl fmt::Display for Cardinality {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

/// Error returned when parsing an unrecognised multiplicity string.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("unknown cardinality `{0}` (expected one of (0..1), (0..*), (1..1), (1..*), (*..0), (*..1), (*..*), unknown)")]
pub struct ParseCardinalityError(pub String);

impl FromStr for Cardinality {
    type Err = ParseCardinalityError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Cardinality::ALL
            .iter()
            .find(|c| c.as_str() == s.trim())
            .copied()
            .ok_or_else(|| ParseCardinalityError(s.to_string()))
    }
}

/// Immutable mapping from property local name to [`Cardinality`].
#[derive(Debug, Clone, Default)]
pub struct CardinalityIndex {
    entries: BTreeMap<String, Cardinality>,
}

impl CardinalityIndex {
    /// Builds the index over every property of every source.
    ///
    /// The bridge is consulted first; properties it does not know fall back
    /// to [`Cardinality::guess`]. When a name is declared by several sources,
    /// the first declaration wins.
    #[must_use]
    pub fn build(ontology: &Ontology, bridge: &dyn VocabularyBridge) -> Self {
        let mut entries = BTreeMap::new();
        for property in ontology.properties() {
            entries.entry(property.name.clone()).or_insert_with(|| {
                bridge
                    .cardinality(&property.name)
                    .unwrap_or_else(|| Cardinality::guess(&property.name, &property.comment))
            });
        }
        Self { entries }
    }

    /// Returns the cardinality of `property`, or [`Cardinality::Unknown`].
    #[must_use]
    pub fn get(&self, property: &str) -> Cardinality {
        self.entries.get(property).copied().unwrap_or_default()
    }

    /// Number of indexed properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.entries.len()
    }

    /// Returns true if no property is indexed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::bridge::GoodRelationsBridge;
    use crate::model::{Graph, VocabularyProperty};

    #[test]
    fn guesses_from_description() {
        assert_eq!(
            Cardinality::guess("acceptedPaymentMethod", "The payment method(s) accepted."),
            Cardinality::ZeroToMany
        );
        assert_eq!(
            Cardinality::guess("knows", "The most generic uni-directional social relation."),
            Cardinality::ZeroToMany
        );
        assert_eq!(
            Cardinality::guess("isFamilyFriendly", "Indicates whether it is family friendly."),
            Cardinality::ZeroToOne
        );
        assert_eq!(
            Cardinality::guess("isbn", "The ISBN of the book."),
            Cardinality::ZeroToOne
        );
        assert_eq!(
            Cardinality::guess("author", "Author of this content."),
            Cardinality::Unknown
        );
    }

    #[test]
    fn array_and_nullable_flags() {
        assert!(Cardinality::ZeroToMany.is_array());
        assert!(Cardinality::OneToMany.is_array());
        assert!(!Cardinality::ZeroToOne.is_array());
        assert!(!Cardinality::OneToOne.is_nullable());
        assert!(!Cardinality::OneToMany.is_nullable());
        assert!(Cardinality::Unknown.is_nullable());
    }

    #[test]
    fn parses_notation() {
        assert_eq!("(1..*)".parse::<Cardinality>(), Ok(Cardinality::OneToMany));
        assert!("(2..3)".parse::<Cardinality>().is_err());
        assert_eq!(
            Cardinality::find_in("An offer (0..*) for the product (1..1)"),
            Some(Cardinality::ZeroToMany)
        );
    }

    #[test]
    fn bridge_takes_precedence() {
        let graph = Graph::new().with_property(
            VocabularyProperty::new("https://schema.org/price").with_comment("The price(s)."),
        );
        let ontology = Ontology::new(vec![graph]);
        let bridge = GoodRelationsBridge::parse("price (1..1)\n");
        let index = CardinalityIndex::build(&ontology, &bridge);
        assert_eq!(index.get("price"), Cardinality::OneToOne);
        assert_eq!(index.get("missing"), Cardinality::Unknown);
    }
}
