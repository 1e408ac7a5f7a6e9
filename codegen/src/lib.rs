//! schemagen code generator.
//!
//! Resolves schema.org vocabulary types into class descriptors and writes
//! them out as Rust source. A run goes through four stages:
//!
//! 1. [`builder::ClassModelBuilder`] selects the types, classifies
//!    enumerations, and resolves parents and fields.
//! 2. The configured [`extension::AnnotationGenerator`]s annotate every
//!    descriptor.
//! 3. [`second_pass`] resolves type hints and imports across descriptors.
//! 4. [`render::Renderer`] writes the files, and [`postprocess`] normalizes
//!    exactly the files written.
//!
//! Ambiguities never stop a run: they are recorded in [`Diagnostics`] and
//! resolved deterministically.

#![deny(
    clippy::unwrap_used,
    clippy::expect_used,
    clippy::panic,
    missing_docs,
    clippy::missing_errors_doc
)]

pub mod builder;
pub mod config;
pub mod descriptor;
pub mod diagnostics;
pub mod domain_index;
pub mod emit;
pub mod enums;
pub mod error;
pub mod extension;
pub mod mapping;
pub mod paths;
pub mod postprocess;
pub mod render;
pub mod second_pass;
pub mod selector;

use std::path::PathBuf;

use anyhow::Result;
use schemagen_vocab::{CardinalityIndex, Ontology, VocabularyBridge};

pub use builder::ClassModelBuilder;
pub use config::Config;
pub use descriptor::{ClassDescriptor, ClassMap, ConstantDescriptor, FieldDescriptor};
pub use diagnostics::{Diagnostic, Diagnostics, Severity};
pub use error::Error;
pub use extension::{AnnotationGenerator, ExtensionContext, GeneratorRegistry};

use paths::OutputPathResolver;
use render::Renderer;

/// Report of what was generated.
#[derive(Debug, Default)]
pub struct GenerationReport {
    /// Number of entity classes generated.
    pub class_count: usize,
    /// Number of enumerations generated.
    pub enum_count: usize,
    /// Number of interfaces generated.
    pub interface_count: usize,
    /// Number of entity fields generated.
    pub field_count: usize,
    /// Number of enumeration constants generated.
    pub const_count: usize,
    /// Files written.
    pub files: Vec<PathBuf>,
    /// Number of info diagnostics.
    pub info_count: usize,
    /// Number of warning diagnostics.
    pub warning_count: usize,
    /// Number of error diagnostics.
    pub error_count: usize,
    /// Number of critical diagnostics.
    pub critical_count: usize,
}

/// Inputs of one generation run.
#[derive(Clone, Copy)]
pub struct Run<'a> {
    /// Every vocabulary source.
    pub ontology: &'a Ontology,
    /// Property cardinalities.
    pub cardinalities: &'a CardinalityIndex,
    /// GoodRelations oracle.
    pub bridge: &'a dyn VocabularyBridge,
    /// Run configuration.
    pub config: &'a Config,
    /// Available annotation generators.
    pub registry: &'a GeneratorRegistry,
}

impl<'a> Run<'a> {
    /// Builds, annotates, and cross-resolves every descriptor.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGenerator`] before anything is built if the
    /// configuration names an unregistered annotation generator.
    pub fn resolve(&self, diagnostics: &Diagnostics) -> Result<ClassMap, Error> {
        let factories = self.registry.resolve(&self.config.annotation_generators)?;

        let mut classes = ClassModelBuilder::new(
            self.ontology,
            self.config,
            self.cardinalities,
            self.bridge,
            diagnostics,
        )
        .build();

        let snapshot = classes.clone();
        let generators = extension::instantiate(
            &factories,
            ExtensionContext {
                diagnostics,
                ontology: self.ontology,
                cardinalities: self.cardinalities,
                config: self.config,
                classes: &snapshot,
            },
        );
        extension::annotate(&mut classes, &generators);
        second_pass::resolve_type_hints(&mut classes, diagnostics);
        second_pass::resolve_uses(&mut classes, &generators);
        Ok(classes)
    }

    /// Resolves every descriptor and writes the generated sources to the
    /// configured output directory.
    ///
    /// # Errors
    ///
    /// Returns an error if the configuration is invalid or a file cannot be
    /// written.
    pub fn generate(&self, diagnostics: &Diagnostics) -> Result<GenerationReport> {
        let classes = self.resolve(diagnostics)?;

        let paths = OutputPathResolver::new(self.config.output.clone());
        let files = Renderer::new(&classes, self.config, &paths, diagnostics).write_all()?;
        let normalized = postprocess::normalize_files(&files)?;
        tracing::info!(
            output = %self.config.output.display(),
            files = files.len(),
            normalized,
            "generation finished"
        );

        let mut report = GenerationReport {
            files,
            info_count: diagnostics.count(Severity::Info),
            warning_count: diagnostics.count(Severity::Warning),
            error_count: diagnostics.count(Severity::Error),
            critical_count: diagnostics.count(Severity::Critical),
            ..GenerationReport::default()
        };
        for class in classes.values() {
            if class.is_enum {
                report.enum_count += 1;
                report.const_count += class.constants.len();
            } else {
                report.class_count += 1;
                report.field_count += class.fields.len();
            }
            if class.interface_name.is_some() {
                report.interface_count += 1;
            }
        }
        Ok(report)
    }
}
