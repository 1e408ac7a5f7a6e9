//! Annotation extensions.
//!
//! An [`AnnotationGenerator`] contributes extra lines (attributes, doc
//! comments) to generated items and extra `use` paths to generated files.
//! Generators are created from a [`GeneratorRegistry`] by identifier, once per
//! run, and all receive the same [`ExtensionContext`].

pub mod doc;
pub mod serde;
pub mod validator;

use std::collections::BTreeMap;
use std::fmt;

use schemagen_vocab::{CardinalityIndex, Ontology};

use crate::config::Config;
use crate::descriptor::{ClassDescriptor, ClassMap, ConstantDescriptor, FieldDescriptor};
use crate::diagnostics::Diagnostics;
use crate::error::Error;

/// Contributes generated metadata to descriptors.
///
/// Every hook defaults to contributing nothing. Output from several
/// generators is concatenated in the order the generators are configured.
pub trait AnnotationGenerator {
    /// Lines placed above the class, struct, or enumeration item.
    fn class_annotations(&self, _class: &ClassDescriptor) -> Vec<String> {
        Vec::new()
    }

    /// Lines placed above the companion interface trait.
    fn interface_annotations(&self, _class: &ClassDescriptor) -> Vec<String> {
        Vec::new()
    }

    /// Lines placed above a struct field.
    fn field_annotations(&self, _class: &ClassDescriptor, _field: &FieldDescriptor) -> Vec<String> {
        Vec::new()
    }

    /// Lines placed above a field's getter.
    fn getter_annotations(&self, _class: &ClassDescriptor, _field: &FieldDescriptor) -> Vec<String> {
        Vec::new()
    }

    /// Lines placed above a field's setter.
    fn setter_annotations(&self, _class: &ClassDescriptor, _field: &FieldDescriptor) -> Vec<String> {
        Vec::new()
    }

    /// Lines placed above an enumeration constant.
    fn constant_annotations(
        &self,
        _class: &ClassDescriptor,
        _constant: &ConstantDescriptor,
    ) -> Vec<String> {
        Vec::new()
    }

    /// Item paths the generated file must import.
    fn uses(&self, _class: &ClassDescriptor) -> Vec<String> {
        Vec::new()
    }
}

/// Everything a generator may consult. Identical for every generator of a run.
#[derive(Clone, Copy)]
pub struct ExtensionContext<'a> {
    /// Run-wide diagnostics sink.
    pub diagnostics: &'a Diagnostics,
    /// Every vocabulary source.
    pub ontology: &'a Ontology,
    /// Property cardinalities.
    pub cardinalities: &'a CardinalityIndex,
    /// Run configuration.
    pub config: &'a Config,
    /// Snapshot of every descriptor as built by the first pass.
    pub classes: &'a ClassMap,
}

/// Creates a generator bound to a run.
pub type GeneratorFactory =
    for<'a> fn(ExtensionContext<'a>) -> Box<dyn AnnotationGenerator + 'a>;

/// Maps generator identifiers to factories.
#[derive(Clone, Default)]
pub struct GeneratorRegistry {
    factories: BTreeMap<String, GeneratorFactory>,
}

impl GeneratorRegistry {
    /// Creates an empty registry.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates a registry holding the `doc`, `serde`, and `validator` generators.
    #[must_use]
    pub fn builtin() -> Self {
        let mut registry = Self::new();
        registry
            .register("doc", doc::factory)
            .register("serde", serde::factory)
            .register("validator", validator::factory);
        registry
    }

    /// Registers `factory` under `id`, replacing any previous registration.
    pub fn register(&mut self, id: impl Into<String>, factory: GeneratorFactory) -> &mut Self {
        self.factories.insert(id.into(), factory);
        self
    }

    /// Looks up the factories of `ids`, in the given order.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGenerator`] for the first identifier that is
    /// not registered.
    pub fn resolve(&self, ids: &[String]) -> Result<Vec<GeneratorFactory>, Error> {
        ids.iter()
            .map(|id| {
                self.factories
                    .get(id)
                    .copied()
                    .ok_or_else(|| Error::UnknownGenerator {
                        name: id.clone(),
                        known: self.identifiers().map(str::to_string).collect(),
                    })
            })
            .collect()
    }

    /// Registered identifiers, sorted.
    pub fn identifiers(&self) -> impl Iterator<Item = &str> {
        self.factories.keys().map(String::as_str)
    }
}

impl fmt::Debug for GeneratorRegistry {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_set().entries(self.identifiers()).finish()
    }
}

/// Instantiates every factory with the same context.
pub fn instantiate<'a>(
    factories: &[GeneratorFactory],
    ctx: ExtensionContext<'a>,
) -> Vec<Box<dyn AnnotationGenerator + 'a>> {
    factories.iter().map(|factory| factory(ctx)).collect()
}

fn collect<F>(generators: &[Box<dyn AnnotationGenerator + '_>], hook: F) -> Vec<String>
where
    F: Fn(&dyn AnnotationGenerator) -> Vec<String>,
{
    generators.iter().flat_map(|g| hook(g.as_ref())).collect()
}

/// Runs every annotation hook over every descriptor.
///
/// The interface hook only runs for classes that expose an interface.
pub fn annotate(classes: &mut ClassMap, generators: &[Box<dyn AnnotationGenerator + '_>]) {
    for class in classes.values_mut() {
        let annotations = collect(generators, |g| g.class_annotations(class));
        let interface_annotations = if class.interface_name.is_some() {
            collect(generators, |g| g.interface_annotations(class))
        } else {
            Vec::new()
        };

        for i in 0..class.fields.len() {
            let field = &class.fields[i];
            let field_annotations = collect(generators, |g| g.field_annotations(class, field));
            let getter_annotations = collect(generators, |g| g.getter_annotations(class, field));
            let setter_annotations = collect(generators, |g| g.setter_annotations(class, field));

            let field = &mut class.fields[i];
            field.annotations.extend(field_annotations);
            field.getter_annotations.extend(getter_annotations);
            field.setter_annotations.extend(setter_annotations);
        }

        for i in 0..class.constants.len() {
            let constant = &class.constants[i];
            let constant_annotations =
                collect(generators, |g| g.constant_annotations(class, constant));
            class.constants[i].annotations.extend(constant_annotations);
        }

        class.annotations.extend(annotations);
        class.interface_annotations.extend(interface_annotations);
    }
}
