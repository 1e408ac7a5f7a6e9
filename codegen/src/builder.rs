//! Class model resolution: the first pass over the vocabulary.
//!
//! For every selected type the builder decides enum vs. entity, resolves the
//! single parent, and computes the field set from the domain index. Ambiguous
//! parents and ranges are reported as errors and resolved by taking the first
//! candidate in declaration order.

use schemagen_vocab::{
    is_datatype, local_name, CardinalityIndex, Ontology, VocabularyBridge, VocabularyProperty,
    VocabularyType,
};

use crate::config::{Config, PropertyConfig, TypeConfig};
use crate::descriptor::{ClassDescriptor, ClassMap, FieldDescriptor};
use crate::diagnostics::Diagnostics;
use crate::domain_index::PropertyDomainIndex;
use crate::enums;
use crate::mapping::TEXT;
use crate::selector::select_types;

/// Builds the base descriptors of a run.
pub struct ClassModelBuilder<'a> {
    ontology: &'a Ontology,
    config: &'a Config,
    cardinalities: &'a CardinalityIndex,
    bridge: &'a dyn VocabularyBridge,
    diagnostics: &'a Diagnostics,
}

impl<'a> ClassModelBuilder<'a> {
    /// Creates a builder over the given run inputs.
    pub fn new(
        ontology: &'a Ontology,
        config: &'a Config,
        cardinalities: &'a CardinalityIndex,
        bridge: &'a dyn VocabularyBridge,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            ontology,
            config,
            cardinalities,
            bridge,
            diagnostics,
        }
    }

    /// Selects, classifies, and resolves every type into a descriptor.
    pub fn build(&self) -> ClassMap {
        let selected = select_types(self.ontology, self.config, self.diagnostics);
        let domain_index = PropertyDomainIndex::build(self.ontology, &selected);

        let mut classes = ClassMap::new();
        for ty in selected {
            let descriptor = self.build_class(ty, domain_index.properties_of(&ty.id));
            tracing::debug!(
                class = %descriptor.name,
                is_enum = descriptor.is_enum,
                fields = descriptor.fields.len(),
                constants = descriptor.constants.len(),
                "resolved class"
            );
            classes.insert(descriptor.name.clone(), descriptor);
        }
        classes
    }

    /// Resolves one type.
    pub fn build_class(
        &self,
        ty: &VocabularyType,
        properties: &[&VocabularyProperty],
    ) -> ClassDescriptor {
        let type_config = self.config.type_config(&ty.name);
        let is_enum = enums::is_enum(ty);

        let mut class = ClassDescriptor::new(
            ty.name.clone(),
            self.config.class_namespace(&ty.name, is_enum),
            ty.id.clone(),
        );
        class.comment = ty.comment.clone();
        class.is_enum = is_enum;

        if is_enum {
            class.constants = enums::constants(self.ontology, ty);
            return class;
        }

        class.parent = self.resolve_parent(ty, type_config);
        if self.config.use_rte {
            class.interface_name = Some(format!("{}Interface", ty.name));
            class.interface_namespace = Some(self.config.interface_namespace(&ty.name));
        }
        class.fields = self.resolve_fields(ty, type_config, properties);
        class
    }

    /// Resolves the single parent of a non-enum type.
    pub fn resolve_parent(
        &self,
        ty: &VocabularyType,
        type_config: Option<&TypeConfig>,
    ) -> Option<String> {
        let parent = match type_config.and_then(|t| t.parent.clone()) {
            Some(explicit) => explicit,
            None => match ty.subclass_of.as_slice() {
                [] => return None,
                [only] => local_name(only).to_string(),
                [first, ..] => {
                    let names: Vec<&str> = ty.subclass_of.iter().map(|s| local_name(s)).collect();
                    self.diagnostics.error(format!(
                        "The type \"{}\" has several supertypes ({}). Using the first one: \"{}\"",
                        ty.name,
                        names.join(", "),
                        local_name(first)
                    ));
                    local_name(first).to_string()
                }
            },
        };

        if self.config.has_type_allow_list() && !self.config.types.contains_key(&parent) {
            self.diagnostics.error(format!(
                "The type \"{parent}\" (parent of \"{}\") is not part of the generated types",
                ty.name
            ));
        }
        Some(parent)
    }

    /// Resolves the field set of a non-enum type.
    pub fn resolve_fields(
        &self,
        ty: &VocabularyType,
        type_config: Option<&TypeConfig>,
        properties: &[&VocabularyProperty],
    ) -> Vec<FieldDescriptor> {
        let explicit = type_config.filter(|t| t.has_property_allow_list());
        let mut fields: Vec<FieldDescriptor> = Vec::new();
        let mut matched: Vec<&str> = Vec::new();

        for property in properties {
            let property_config = match explicit {
                Some(t) => match t.properties.get(&property.name) {
                    Some(c) => {
                        matched.push(&property.name);
                        Some(c)
                    }
                    None => continue,
                },
                None => None,
            };

            if property.is_legacy() {
                if explicit.is_none() {
                    self.diagnostics.info(format!(
                        "The property \"{}\" (type \"{}\") is a legacy spelling and was skipped",
                        property.name, ty.name
                    ));
                    continue;
                }
                self.diagnostics.warning(format!(
                    "The property \"{}\" (type \"{}\") is a legacy spelling",
                    property.name, ty.name
                ));
            }

            if fields.iter().any(|f| f.name == property.name) {
                tracing::debug!(class = %ty.name, property = %property.name, "duplicate property name");
                continue;
            }

            let Some(range) = self.resolve_range(ty, property, property_config) else {
                continue;
            };

            if self.config.check_is_good_relations && !self.bridge.exists(&property.name) {
                self.diagnostics.warning(format!(
                    "The property \"{}\" (type \"{}\") is not part of GoodRelations",
                    property.name, ty.name
                ));
            }

            let cardinality = property_config
                .and_then(|c| c.cardinality)
                .unwrap_or_else(|| self.cardinalities.get(&property.name));
            let mut field =
                FieldDescriptor::new(property.name.clone(), property.id.clone(), range, cardinality);
            field.comment = property.comment.clone();
            if let Some(nullable) = property_config.and_then(|c| c.nullable) {
                field.is_nullable = nullable;
            }
            fields.push(field);
        }

        if let Some(t) = explicit {
            for name in t.properties.keys() {
                if !matched.contains(&name.as_str()) {
                    self.diagnostics.warning(format!(
                        "The property \"{name}\" (type \"{}\") is not found in the vocabulary",
                        ty.name
                    ));
                }
            }
        }
        fields
    }

    /// Resolves the single range of a field.
    ///
    /// Returns `None`, with an error diagnostic, when no acceptable range remains.
    pub fn resolve_range(
        &self,
        ty: &VocabularyType,
        property: &VocabularyProperty,
        property_config: Option<&PropertyConfig>,
    ) -> Option<String> {
        if let Some(range) = property_config.and_then(|c| c.range.clone()) {
            return Some(range);
        }

        let mut candidates: Vec<String> = Vec::new();
        for range_iri in &property.ranges {
            let range_name = local_name(range_iri);
            let datatype = is_datatype(range_iri);
            if !datatype
                && self.config.has_type_allow_list()
                && !self.config.types.contains_key(range_name)
            {
                continue;
            }
            let resolved = if !datatype
                && self
                    .ontology
                    .find_type(range_iri)
                    .is_some_and(enums::is_enum)
            {
                TEXT.to_string()
            } else {
                range_name.to_string()
            };
            if !candidates.contains(&resolved) {
                candidates.push(resolved);
            }
        }

        match candidates.len() {
            0 => {
                self.diagnostics.error(format!(
                    "The property \"{}\" (type \"{}\") has no usable range and was skipped",
                    property.name, ty.name
                ));
                None
            }
            1 => candidates.pop(),
            _ => {
                self.diagnostics.error(format!(
                    "The property \"{}\" (type \"{}\") has several types ({}). Using the first one: \"{}\"",
                    property.name,
                    ty.name,
                    candidates.join(", "),
                    candidates[0]
                ));
                candidates.into_iter().next()
            }
        }
    }
}

#[cfg(test)]
#[allow(clippy::unwrap_used)]
mod tests {
    use super::*;
    use crate::config::TypeConfig;
    use crate::diagnostics::Severity;
    use schemagen_vocab::{Cardinality, GoodRelationsBridge, Graph, VocabularyInstance};

    const S: &str = "https://schema.org/";

    fn iri(name: &str) -> String {
        format!("{S}{name}")
    }

    fn ontology() -> Ontology {
        Ontology::new(vec![Graph::new()
            .with_type(VocabularyType::new(iri("Thing")))
            .with_type(VocabularyType::new(iri("Person")).with_superclass(iri("Thing")))
            .with_type(VocabularyType::new(iri("Organization")).with_superclass(iri("Thing")))
            .with_type(VocabularyType::new(iri("Enumeration")).with_superclass(iri("Thing")))
            .with_type(VocabularyType::new(iri("BookFormatType")).with_superclass(iri("Enumeration")))
            .with_type(
                VocabularyType::new(iri("Book"))
                    .with_superclass(iri("CreativeWork"))
                    .with_superclass(iri("Product")),
            )
            .with_instance(VocabularyInstance::new(iri("EBook"), iri("BookFormatType")))
            .with_property(
                VocabularyProperty::new(iri("author"))
                    .with_domain(iri("Book"))
                    .with_range(iri("Person"))
                    .with_range(iri("Organization")),
            )
            .with_property(
                VocabularyProperty::new(iri("bookFormat"))
                    .with_domain(iri("Book"))
                    .with_range(iri("BookFormatType")),
            )
            .with_property(
                VocabularyProperty::new(iri("isbn"))
                    .with_comment("The ISBN of the book.")
                    .with_domain(iri("Book"))
                    .with_range(iri("Text")),
            )
            .with_property(
                VocabularyProperty::new(iri("bookEdition"))
                    .with_comment("The edition of the book. Legacy spelling for edition.")
                    .with_domain(iri("Book"))
                    .with_range(iri("Text")),
            )])
    }

    struct Fixture {
        ontology: Ontology,
        config: Config,
        cardinalities: CardinalityIndex,
        bridge: GoodRelationsBridge,
        diagnostics: Diagnostics,
    }

    impl Fixture {
        fn new(config: Config) -> Self {
            let ontology = ontology();
            let bridge = GoodRelationsBridge::from_names(["isbn"]);
            let cardinalities = CardinalityIndex::build(&ontology, &bridge);
            Self {
                ontology,
                config,
                cardinalities,
                bridge,
                diagnostics: Diagnostics::new(),
            }
        }

        fn builder(&self) -> ClassModelBuilder<'_> {
            ClassModelBuilder::new(
                &self.ontology,
                &self.config,
                &self.cardinalities,
                &self.bridge,
                &self.diagnostics,
            )
        }

        fn ty(&self, name: &str) -> &VocabularyType {
            self.ontology.find_type_by_name(name).unwrap()
        }
    }

    fn allow(names: &[&str]) -> Config {
        let mut config = Config::default();
        for name in names {
            config.types.insert((*name).to_string(), TypeConfig::default());
        }
        config
    }

    #[test]
    fn several_parents_pick_first_with_one_error() {
        let fx = Fixture::new(Config::default());
        let parent = fx.builder().resolve_parent(fx.ty("Book"), None);
        assert_eq!(parent.as_deref(), Some("CreativeWork"));
        assert_eq!(fx.diagnostics.count(Severity::Error), 1);
    }

    #[test]
    fn no_parent_without_superclass() {
        let fx = Fixture::new(Config::default());
        assert_eq!(fx.builder().resolve_parent(fx.ty("Thing"), None), None);
        assert!(fx.diagnostics.is_empty());
    }

    #[test]
    fn explicit_parent_wins() {
        let mut config = allow(&["Book", "Thing"]);
        config.types.get_mut("Book").unwrap().parent = Some("Thing".to_string());
        let fx = Fixture::new(config);
        let parent = fx
            .builder()
            .resolve_parent(fx.ty("Book"), fx.config.type_config("Book"));
        assert_eq!(parent.as_deref(), Some("Thing"));
        assert!(fx.diagnostics.is_empty());
    }

    #[test]
    fn parent_outside_allow_list_is_still_emitted() {
        let fx = Fixture::new(allow(&["Person"]));
        let parent = fx
            .builder()
            .resolve_parent(fx.ty("Person"), fx.config.type_config("Person"));
        assert_eq!(parent.as_deref(), Some("Thing"));
        assert_eq!(fx.diagnostics.count(Severity::Error), 1);
    }

    #[test]
    fn several_ranges_pick_first_with_one_error() {
        let fx = Fixture::new(Config::default());
        let author = &fx.ontology.sources()[0].properties()[0];
        let range = fx.builder().resolve_range(fx.ty("Book"), author, None);
        assert_eq!(range.as_deref(), Some("Person"));
        assert_eq!(fx.diagnostics.count(Severity::Error), 1);
    }

    #[test]
    fn allow_list_filters_ranges() {
        let fx = Fixture::new(allow(&["Book", "Organization"]));
        let author = &fx.ontology.sources()[0].properties()[0];
        let range = fx.builder().resolve_range(fx.ty("Book"), author, None);
        assert_eq!(range.as_deref(), Some("Organization"));
        assert!(fx.diagnostics.is_empty());
    }

    #[test]
    fn allow_list_excluding_every_range_skips_field() {
        let fx = Fixture::new(allow(&["Book"]));
        let author = &fx.ontology.sources()[0].properties()[0];
        assert_eq!(fx.builder().resolve_range(fx.ty("Book"), author, None), None);
        assert_eq!(fx.diagnostics.count(Severity::Error), 1);
    }

    #[test]
    fn enum_range_becomes_text() {
        let fx = Fixture::new(Config::default());
        let format = &fx.ontology.sources()[0].properties()[1];
        let range = fx.builder().resolve_range(fx.ty("Book"), format, None);
        assert_eq!(range.as_deref(), Some("Text"));
    }

    #[test]
    fn range_override_is_verbatim() {
        let fx = Fixture::new(Config::default());
        let author = &fx.ontology.sources()[0].properties()[0];
        let config = PropertyConfig {
            range: Some("Organization".to_string()),
            ..PropertyConfig::default()
        };
        let range = fx.builder().resolve_range(fx.ty("Book"), author, Some(&config));
        assert_eq!(range.as_deref(), Some("Organization"));
        assert!(fx.diagnostics.is_empty());
    }

    #[test]
    fn legacy_property_skipped_without_property_list() {
        let fx = Fixture::new(Config::default());
        let classes = fx.builder().build();
        let book = &classes["Book"];
        assert!(book.field("bookEdition").is_none());
        assert_eq!(fx.diagnostics.count(Severity::Info), 1);
    }

    #[test]
    fn legacy_property_kept_with_warning_when_listed() {
        let mut config = allow(&["Book"]);
        let book = config.types.get_mut("Book").unwrap();
        book.properties.insert("bookEdition".to_string(), PropertyConfig::default());
        let fx = Fixture::new(config);
        let classes = fx.builder().build();
        assert!(classes["Book"].field("bookEdition").is_some());
        assert_eq!(fx.diagnostics.count(Severity::Warning), 1);
    }

    #[test]
    fn goodrelations_check_warns_only() {
        let mut config = Config::default();
        config.check_is_good_relations = true;
        let fx = Fixture::new(config);
        let classes = fx.builder().build();
        let book = &classes["Book"];
        assert!(book.field("author").is_some());
        let warnings = fx.diagnostics.messages(Severity::Warning);
        assert!(warnings.iter().any(|w| w.contains("\"author\"")));
        assert!(!warnings.iter().any(|w| w.contains("\"isbn\"")));
    }

    #[test]
    fn enums_get_constants_and_no_fields() {
        let fx = Fixture::new(Config::default());
        let classes = fx.builder().build();
        let format = &classes["BookFormatType"];
        assert!(format.is_enum);
        assert_eq!(format.namespace, "crate::enumeration");
        assert_eq!(format.parent, None);
        assert!(format.fields.is_empty());
        assert_eq!(format.constants.len(), 1);
    }

    #[test]
    fn interfaces_follow_use_rte() {
        let mut config = Config::default();
        config.use_rte = true;
        let fx = Fixture::new(config);
        let classes = fx.builder().build();
        assert_eq!(classes["Book"].interface_name.as_deref(), Some("BookInterface"));
        assert_eq!(classes["Book"].interface_namespace.as_deref(), Some("crate::model"));
        assert_eq!(classes["BookFormatType"].interface_name, None);
    }

    #[test]
    fn cardinality_overrides_apply() {
        let mut config = allow(&["Book", "Person"]);
        config.types.get_mut("Book").unwrap().properties.insert(
            "author".to_string(),
            PropertyConfig {
                cardinality: Some(Cardinality::OneToMany),
                ..PropertyConfig::default()
            },
        );
        config.types.get_mut("Book").unwrap().properties.insert(
            "isbn".to_string(),
            PropertyConfig {
                nullable: Some(false),
                ..PropertyConfig::default()
            },
        );
        let fx = Fixture::new(config);
        let classes = fx.builder().build();
        let author = classes["Book"].field("author").unwrap();
        assert!(author.is_array);
        assert!(!author.is_nullable);
        let isbn = classes["Book"].field("isbn").unwrap();
        assert_eq!(isbn.cardinality, Cardinality::ZeroToOne);
        assert!(!isbn.is_nullable);
    }

    #[test]
    fn listed_property_missing_from_vocabulary_warns() {
        let mut config = allow(&["Book"]);
        config
            .types
            .get_mut("Book")
            .unwrap()
            .properties
            .insert("subtitle".to_string(), PropertyConfig::default());
        let fx = Fixture::new(config);
        let classes = fx.builder().build();
        assert!(classes["Book"].fields.is_empty());
        assert_eq!(fx.diagnostics.count(Severity::Warning), 1);
    }

    #[test]
    fn listed_property_without_range_is_not_reported_missing() {
        let mut config = allow(&["Book"]);
        config
            .types
            .get_mut("Book")
            .unwrap()
            .properties
            .insert("author".to_string(), PropertyConfig::default());
        let fx = Fixture::new(config);
        let classes = fx.builder().build();
        assert!(classes["Book"].field("author").is_none());
        let errors = fx.diagnostics.messages(Severity::Error);
        assert_eq!(errors.iter().filter(|e| e.contains("no usable range")).count(), 1);
        let warnings = fx.diagnostics.messages(Severity::Warning);
        assert!(!warnings.iter().any(|w| w.contains("not found in the vocabulary")));
    }
}
