//! Enumeration detection and member collection.
//!
//! A vocabulary type whose only declared superclass is the Enumeration marker
//! becomes an enumeration; its instances become constants.

use schemagen_vocab::{is_enumeration_marker, Ontology, VocabularyType};

use crate::descriptor::ConstantDescriptor;
use crate::mapping::to_constant_name;

/// Returns true if `ty` is generated as an enumeration.
pub fn is_enum(ty: &VocabularyType) -> bool {
    matches!(ty.subclass_of.as_slice(), [only] if is_enumeration_marker(only))
}

/// Builds one constant per instance of `ty`, in declaration order.
///
/// An instance typed more than once, or declared by several sources, yields
/// a single constant.
pub fn constants(ontology: &Ontology, ty: &VocabularyType) -> Vec<ConstantDescriptor> {
    let mut constants: Vec<ConstantDescriptor> = Vec::new();
    for instance in ontology.instances_of(&ty.id) {
        let name = to_constant_name(&instance.name);
        if constants.iter().any(|c| c.name == name) {
            continue;
        }
        constants.push(ConstantDescriptor {
            name,
            resource: instance.id.clone(),
            value: instance.id.clone(),
            comment: instance.comment.clone(),
            annotations: Vec::new(),
        });
    }
    constants
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagen_vocab::{Graph, VocabularyInstance};

    const ENUMERATION: &str = "https://schema.org/Enumeration";

    #[test]
    fn single_enumeration_parent_is_enum() {
        let ty = VocabularyType::new("https://schema.org/BookFormatType").with_superclass(ENUMERATION);
        assert!(is_enum(&ty));
        let legacy = VocabularyType::new("http://schema.org/BookFormatType")
            .with_superclass("http://schema.org/Enumeration");
        assert!(is_enum(&legacy));
    }

    #[test]
    fn other_shapes_are_not_enums() {
        assert!(!is_enum(&VocabularyType::new("https://schema.org/Thing")));
        assert!(!is_enum(
            &VocabularyType::new("https://schema.org/Book").with_superclass("https://schema.org/CreativeWork")
        ));
        // Two parents, one of them the marker.
        assert!(!is_enum(
            &VocabularyType::new("https://schema.org/Specialty")
                .with_superclass(ENUMERATION)
                .with_superclass("https://schema.org/Intangible")
        ));
    }

    #[test]
    fn constants_from_instances() {
        let ty = VocabularyType::new("https://schema.org/BookFormatType").with_superclass(ENUMERATION);
        let ontology = Ontology::new(vec![Graph::new()
            .with_type(ty.clone())
            .with_instance(VocabularyInstance::new("https://schema.org/EBook", ty.id.clone()))
            .with_instance(VocabularyInstance::new("https://schema.org/Hardcover", ty.id.clone()))
            .with_instance(VocabularyInstance::new("https://schema.org/EBook", ty.id.clone()))]);

        let constants = constants(&ontology, &ty);
        let names: Vec<&str> = constants.iter().map(|c| c.name.as_str()).collect();
        assert_eq!(names, vec!["E_BOOK", "HARDCOVER"]);
        assert_eq!(constants[0].value, "https://schema.org/EBook");
    }
}
