//! Bridge to the GoodRelations commerce vocabulary.
//!
//! The bridge is advisory: generation only asks it whether a property name is
//! known and, optionally, what cardinality GoodRelations documents for it.

use std::collections::BTreeMap;
use std::path::Path;

use crate::cardinality::Cardinality;
use crate::error::Error;

/// Oracle over a reference vocabulary.
pub trait VocabularyBridge {
    /// Returns true if `property` (a local name) exists in the reference vocabulary.
    fn exists(&self, property: &str) -> bool;

    /// Returns the cardinality the reference vocabulary documents for `property`.
    fn cardinality(&self, _property: &str) -> Option<Cardinality> {
        None
    }
}

/// A bridge backed by a list of GoodRelations property names.
///
/// The list format is one property per line. A multiplicity token such as
/// `(0..1)` anywhere after the name records its cardinality. Blank lines and
/// lines starting with `#` are ignored.
///
/// ```text
/// # name        cardinality
/// acceptedPaymentMethod (0..*)
/// price         (1..1)
/// eligibleRegion
/// ```
#[derive(Debug, Clone, Default)]
pub struct GoodRelationsBridge {
    properties: BTreeMap<String, Option<Cardinality>>,
}

impl GoodRelationsBridge {
    /// Parses a property list.
    #[must_use]
    pub fn parse(text: &str) -> Self {
        let mut properties = BTreeMap::new();
        for line in text.lines() {
            let line = line.trim();
            if line.is_empty() || line.starts_with('#') {
                continue;
            }
            let (name, rest) = line.split_once(char::is_whitespace).unwrap_or((line, ""));
            properties.insert(name.to_string(), Cardinality::find_in(rest));
        }
        Self { properties }
    }

    /// Reads and parses a property list file.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Io`] if the file cannot be read.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
            path: path.to_path_buf(),
            source,
        })?;
        Ok(Self::parse(&text))
    }

    /// Builds a bridge from bare property names.
    pub fn from_names<I, S>(names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            properties: names.into_iter().map(|n| (n.into(), None)).collect(),
        }
    }

    /// Number of known properties.
    #[must_use]
    pub fn len(&self) -> usize {
        self.properties.len()
    }

    /// Returns true if the bridge knows no property.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.properties.is_empty()
    }
}

impl VocabularyBridge for GoodRelationsBridge {
    fn exists(&self, property: &str) -> bool {
        self.properties.contains_key(property)
    }

    fn cardinality(&self, property: &str) -> Option<Cardinality> {
        self.properties.get(property).copied().flatten()
    }
}
