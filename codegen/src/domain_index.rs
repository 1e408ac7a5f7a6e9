//! Property lookup by domain type.

use std::collections::{HashMap, HashSet};

use schemagen_vocab::{Ontology, VocabularyProperty, VocabularyType};

/// Maps each selected type IRI to the properties whose domain includes it.
///
/// Built with one pass over every property of every source. Properties keep
/// declaration order; a property IRI declared by several sources is listed once.
#[derive(Debug, Default)]
pub struct PropertyDomainIndex<'o> {
    by_domain: HashMap<&'o str, Vec<&'o VocabularyProperty>>,
}

impl<'o> PropertyDomainIndex<'o> {
    /// Builds the index for `selected`.
    pub fn build(ontology: &'o Ontology, selected: &[&'o VocabularyType]) -> Self {
        let wanted: HashSet<&str> = selected.iter().map(|t| t.id.as_str()).collect();
        let mut by_domain: HashMap<&'o str, Vec<&'o VocabularyProperty>> = HashMap::new();
        let mut seen: HashSet<(&'o str, &'o str)> = HashSet::new();

        for property in ontology.properties() {
            for domain in &property.domains {
                let domain = domain.as_str();
                if wanted.contains(domain) && seen.insert((domain, property.id.as_str())) {
                    by_domain.entry(domain).or_default().push(property);
                }
            }
        }
        Self { by_domain }
    }

    /// Properties whose domain includes `type_iri`.
    pub fn properties_of(&self, type_iri: &str) -> &[&'o VocabularyProperty] {
        self.by_domain
            .get(type_iri)
            .map(Vec::as_slice)
            .unwrap_or_default()
    }
}
