//! `validator`: `#[validate]` rules derived from ranges and cardinalities.

use crate::descriptor::{ClassDescriptor, ClassMap, FieldDescriptor};
use crate::extension::{AnnotationGenerator, ExtensionContext};

/// Emits `Validate` derives and per-field rules.
#[derive(Debug, Clone, Copy)]
pub struct ValidatorGenerator<'a> {
    classes: &'a ClassMap,
}

/// Registry factory.
pub fn factory<'a>(ctx: ExtensionContext<'a>) -> Box<dyn AnnotationGenerator + 'a> {
    Box::new(ValidatorGenerator::new(ctx.classes))
}

impl<'a> ValidatorGenerator<'a> {
    /// Creates a generator that resolves ranges against `classes`.
    #[must_use]
    pub fn new(classes: &'a ClassMap) -> Self {
        Self { classes }
    }

    fn is_entity(&self, range: &str) -> bool {
        self.classes.get(range).is_some_and(|c| !c.is_enum)
    }

    fn rules(&self, field: &FieldDescriptor) -> Vec<&'static str> {
        let mut rules = Vec::new();
        if self.is_entity(&field.range) {
            if !field.is_array && !field.is_nullable {
                rules.push("required");
            }
            rules.push("nested");
        } else if !field.is_array {
            if field.range == "URL" {
                rules.push("url");
            } else if field.range == "Text" && field.name.to_lowercase().contains("email") {
                rules.push("email");
            }
        }
        if field.is_array && !field.is_nullable {
            rules.push("length(min = 1)");
        }
        rules
    }
}

impl AnnotationGenerator for ValidatorGenerator<'_> {
    fn class_annotations(&self, class: &ClassDescriptor) -> Vec<String> {
        if class.is_enum {
            return Vec::new();
        }
        vec!["#[derive(Validate)]".to_string()]
    }

    fn field_annotations(&self, class: &ClassDescriptor, field: &FieldDescriptor) -> Vec<String> {
        if class.is_enum {
            return Vec::new();
        }
        let rules = self.rules(field);
        if rules.is_empty() {
            Vec::new()
        } else {
            vec![format!("#[validate({})]", rules.join(", "))]
        }
    }

    fn uses(&self, class: &ClassDescriptor) -> Vec<String> {
        if class.is_enum {
            return Vec::new();
        }
        vec!["validator::Validate".to_string()]
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use schemagen_vocab::Cardinality;

    fn classes() -> ClassMap {
        let mut classes = ClassMap::new();
        for name in ["Book", "Person"] {
            classes.insert(
                name.to_string(),
                ClassDescriptor::new(name, "crate::entity", format!("https://schema.org/{name}")),
            );
        }
        classes
    }

    fn rules_of(field: &FieldDescriptor) -> Vec<String> {
        let classes = classes();
        let generator = ValidatorGenerator::new(&classes);
        generator.field_annotations(&classes["Book"], field)
    }

    #[test]
    fn datatype_rules() {
        let url = FieldDescriptor::new("url", "https://schema.org/url", "URL", Cardinality::ZeroToOne);
        assert_eq!(rules_of(&url), vec!["#[validate(url)]"]);
        let email =
            FieldDescriptor::new("email", "https://schema.org/email", "Text", Cardinality::Unknown);
        assert_eq!(rules_of(&email), vec!["#[validate(email)]"]);
        let isbn = FieldDescriptor::new("isbn", "https://schema.org/isbn", "Text", Cardinality::ZeroToOne);
        assert!(rules_of(&isbn).is_empty());
    }

    #[test]
    fn entity_and_cardinality_rules() {
        let author =
            FieldDescriptor::new("author", "https://schema.org/author", "Person", Cardinality::OneToOne);
        assert_eq!(rules_of(&author), vec!["#[validate(required, nested)]"]);
        let editors =
            FieldDescriptor::new("editor", "https://schema.org/editor", "Person", Cardinality::OneToMany);
        assert_eq!(rules_of(&editors), vec!["#[validate(nested, length(min = 1))]"]);
        let same_as =
            FieldDescriptor::new("sameAs", "https://schema.org/sameAs", "URL", Cardinality::OneToMany);
        assert_eq!(rules_of(&same_as), vec!["#[validate(length(min = 1))]"]);
    }
}
