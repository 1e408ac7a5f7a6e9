//! Type selection.

use std::collections::HashSet;

use schemagen_vocab::{is_datatype, Ontology, VocabularyType};

use crate::config::Config;
use crate::diagnostics::Diagnostics;

/// Selects the vocabulary types to generate.
///
/// Without an allow-list every type of every source is selected in document
/// order, except datatypes, which map to primitives. When two sources declare
/// the same local name the first declaration wins. With an allow-list each
/// configured name is looked up across all sources; a name that resolves
/// nowhere is reported as critical and dropped.
pub fn select_types<'o>(
    ontology: &'o Ontology,
    config: &Config,
    diagnostics: &Diagnostics,
) -> Vec<&'o VocabularyType> {
    if !config.has_type_allow_list() {
        let mut seen = HashSet::new();
        return ontology
            .types()
            .filter(|t| !is_datatype(&t.id))
            .filter(|t| seen.insert(t.name.as_str()))
            .collect();
    }

    config
        .types
        .keys()
        .filter_map(|name| {
            let found = ontology.find_type_by_name(name);
            if found.is_none() {
                diagnostics.critical(format!("Type \"{name}\" cannot be found"));
            }
            found
        })
        .collect()
}
