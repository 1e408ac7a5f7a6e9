//! Cross-descriptor passes that need the complete descriptor set.

use std::collections::{BTreeSet, HashMap};

use schemagen_vocab::is_datatype_name;

use crate::descriptor::{ClassDescriptor, ClassMap};
use crate::diagnostics::Diagnostics;
use crate::extension::AnnotationGenerator;

/// Sets the type hint of every non-datatype field.
///
/// The hint is the referenced descriptor's interface name when it exposes
/// one, otherwise its class name. A range that names no descriptor of the run
/// keeps the range name and is reported as a warning.
pub fn resolve_type_hints(classes: &mut ClassMap, diagnostics: &Diagnostics) {
    let hints: HashMap<String, String> = classes
        .values()
        .map(|c| {
            let hint = c.interface_name.clone().unwrap_or_else(|| c.name.clone());
            (c.name.clone(), hint)
        })
        .collect();

    for class in classes.values_mut() {
        for field in &mut class.fields {
            if is_datatype_name(&field.range) {
                field.type_hint = None;
                continue;
            }
            field.type_hint = Some(match hints.get(&field.range) {
                Some(hint) => hint.clone(),
                None => {
                    diagnostics.warning(format!(
                        "The range \"{}\" of \"{}::{}\" is not generated",
                        field.range, class.name, field.name
                    ));
                    field.range.clone()
                }
            });
        }
    }
}

/// Computes the sorted, deduplicated import paths of one descriptor.
///
/// `interfaces` maps a class name to the path of its interface.
pub fn compute_uses(
    class: &ClassDescriptor,
    interfaces: &HashMap<String, String>,
    generators: &[Box<dyn AnnotationGenerator + '_>],
) -> Vec<String> {
    let mut uses: BTreeSet<String> = BTreeSet::new();

    if let (Some(path), Some(ns)) = (class.interface_path(), &class.interface_namespace) {
        if ns != &class.namespace {
            uses.insert(path);
        }
    }
    for field in &class.fields {
        if let Some(path) = interfaces.get(&field.range) {
            uses.insert(path.clone());
        }
    }
    for generator in generators {
        uses.extend(generator.uses(class));
    }
    uses.into_iter().collect()
}

/// Fills the `uses` list of every descriptor.
pub fn resolve_uses(classes: &mut ClassMap, generators: &[Box<dyn AnnotationGenerator + '_>]) {
    let interfaces: HashMap<String, String> = classes
        .values()
        .filter_map(|c| c.interface_path().map(|p| (c.name.clone(), p)))
        .collect();

    for class in classes.values_mut() {
        class.uses = compute_uses(class, &interfaces, generators);
    }
}
