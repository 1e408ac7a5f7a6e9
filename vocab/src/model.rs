//! Core vocabulary model types.
//!
//! These types represent a schema.org-shaped vocabulary as owned Rust data.
//! Every list keeps the order in which its entries were declared in the source
//! document, so consumers that break ties by "first declared" get a stable
//! answer regardless of how the graph was assembled.

use std::collections::HashMap;

/// Extracts the local name from a full IRI (after the last `/` or `#`).
#[must_use]
pub fn local_name(iri: &str) -> &str {
    let after_slash = iri.rsplit('/').next().unwrap_or(iri);
    after_slash.rsplit('#').next().unwrap_or(after_slash)
}

/// A vocabulary type (`rdfs:Class`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VocabularyType {
    /// Full IRI (e.g., `"https://schema.org/Book"`).
    pub id: String,
    /// Local name (e.g., `"Book"`).
    pub name: String,
    /// Human-readable description.
    pub comment: String,
    /// Full IRIs of declared parent types (`rdfs:subClassOf`), in declaration order.
    pub subclass_of: Vec<String>,
}

impl VocabularyType {
    /// Creates a type from its IRI with no comment and no superclasses.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = local_name(&id).to_string();
        Self {
            id,
            name,
            comment: String::new(),
            subclass_of: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Appends a declared superclass.
    #[must_use]
    pub fn with_superclass(mut self, iri: impl Into<String>) -> Self {
        self.subclass_of.push(iri.into());
        self
    }
}

/// A vocabulary property (`rdf:Property`).
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VocabularyProperty {
    /// Full IRI.
    pub id: String,
    /// Local name (e.g., `"author"`).
    pub name: String,
    /// Human-readable description.
    pub comment: String,
    /// Full IRIs of the types that may carry this property (`schema:domainIncludes`).
    pub domains: Vec<String>,
    /// Full IRIs of acceptable value types or datatypes (`schema:rangeIncludes`).
    pub ranges: Vec<String>,
}

impl VocabularyProperty {
    /// Creates a property from its IRI with no comment, domains, or ranges.
    pub fn new(id: impl Into<String>) -> Self {
        let id = id.into();
        let name = local_name(&id).to_string();
        Self {
            id,
            name,
            comment: String::new(),
            domains: Vec::new(),
            ranges: Vec::new(),
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }

    /// Appends a domain type.
    #[must_use]
    pub fn with_domain(mut self, iri: impl Into<String>) -> Self {
        self.domains.push(iri.into());
        self
    }

    /// Appends a range type or datatype.
    #[must_use]
    pub fn with_range(mut self, iri: impl Into<String>) -> Self {
        self.ranges.push(iri.into());
        self
    }

    /// Returns true if the description marks this property as a legacy spelling
    /// of another one.
    #[must_use]
    pub fn is_legacy(&self) -> bool {
        self.comment.to_lowercase().contains("legacy spelling")
    }
}

/// A named resource typed by one or more vocabulary types.
///
/// Members of an enumeration type are instances of that type.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct VocabularyInstance {
    /// Full IRI (e.g., `"https://schema.org/EBook"`).
    pub id: String,
    /// Local name (e.g., `"EBook"`).
    pub name: String,
    /// Human-readable description.
    pub comment: String,
    /// Full IRIs of the instance's types (`rdf:type`).
    pub types: Vec<String>,
}

impl VocabularyInstance {
    /// Creates an instance of `type_iri`.
    pub fn new(id: impl Into<String>, type_iri: impl Into<String>) -> Self {
        let id = id.into();
        let name = local_name(&id).to_string();
        Self {
            id,
            name,
            comment: String::new(),
            types: vec![type_iri.into()],
        }
    }

    /// Sets the description.
    #[must_use]
    pub fn with_comment(mut self, comment: impl Into<String>) -> Self {
        self.comment = comment.into();
        self
    }
}

/// One vocabulary source: every type, property, and instance of a single
/// document, in document order.
#[derive(Debug, Clone, Default)]
pub struct Graph {
    types: Vec<VocabularyType>,
    properties: Vec<VocabularyProperty>,
    instances: Vec<VocabularyInstance>,
    type_index: HashMap<String, usize>,
}

impl Graph {
    /// Creates an empty graph.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a type. A type whose IRI is already present replaces the earlier
    /// declaration in place, keeping its original position.
    pub fn add_type(&mut self, ty: VocabularyType) -> &mut Self {
        match self.type_index.get(&ty.id) {
            Some(&pos) => self.types[pos] = ty,
            None => {
                self.type_index.insert(ty.id.clone(), self.types.len());
                self.types.push(ty);
            }
        }
        self
    }

    /// Adds a property.
    pub fn add_property(&mut self, property: VocabularyProperty) -> &mut Self {
        self.properties.push(property);
        self
    }

    /// Adds an instance.
    pub fn add_instance(&mut self, instance: VocabularyInstance) -> &mut Self {
        self.instances.push(instance);
        self
    }

    /// Builder form of [`Graph::add_type`].
    #[must_use]
    pub fn with_type(mut self, ty: VocabularyType) -> Self {
        self.add_type(ty);
        self
    }

    /// Builder form of [`Graph::add_property`].
    #[must_use]
    pub fn with_property(mut self, property: VocabularyProperty) -> Self {
        self.add_property(property);
        self
    }

    /// Builder form of [`Graph::add_instance`].
    #[must_use]
    pub fn with_instance(mut self, instance: VocabularyInstance) -> Self {
        self.add_instance(instance);
        self
    }

    /// All types, in document order.
    #[must_use]
    pub fn types(&self) -> &[VocabularyType] {
        &self.types
    }

    /// All properties, in document order.
    #[must_use]
    pub fn properties(&self) -> &[VocabularyProperty] {
        &self.properties
    }

    /// All instances, in document order.
    #[must_use]
    pub fn instances(&self) -> &[VocabularyInstance] {
        &self.instances
    }

    /// Looks up a type by its full IRI.
    #[must_use]
    pub fn find_type(&self, iri: &str) -> Option<&VocabularyType> {
        self.type_index.get(iri).map(|&pos| &self.types[pos])
    }

    /// Looks up a type by its local name.
    #[must_use]
    pub fn find_type_by_name(&self, name: &str) -> Option<&VocabularyType> {
        self.types.iter().find(|t| t.name == name)
    }

    /// Returns every instance whose `rdf:type` includes `type_iri`.
    pub fn instances_of<'a>(
        &'a self,
        type_iri: &'a str,
    ) -> impl Iterator<Item = &'a VocabularyInstance> + 'a {
        self.instances
            .iter()
            .filter(move |i| i.types.iter().any(|t| t == type_iri))
    }
}

/// The complete vocabulary: an ordered list of sources queried together.
#[derive(Debug, Clone, Default)]
pub struct Ontology {
    sources: Vec<Graph>,
}

impl Ontology {
    /// Creates an ontology over `sources`, queried in the given order.
    #[must_use]
    pub fn new(sources: Vec<Graph>) -> Self {
        Self { sources }
    }

    /// All sources, in query order.
    #[must_use]
    pub fn sources(&self) -> &[Graph] {
        &self.sources
    }

    /// Every type of every source, sources in order, each in document order.
    pub fn types(&self) -> impl Iterator<Item = &VocabularyType> {
        self.sources.iter().flat_map(|g| g.types().iter())
    }

    /// Every property of every source.
    pub fn properties(&self) -> impl Iterator<Item = &VocabularyProperty> {
        self.sources.iter().flat_map(|g| g.properties().iter())
    }

    /// Looks up a type by its full IRI across all sources. First match wins.
    #[must_use]
    pub fn find_type(&self, iri: &str) -> Option<&VocabularyType> {
        self.sources.iter().find_map(|g| g.find_type(iri))
    }

    /// Looks up a type by its local name across all sources. First match wins.
    #[must_use]
    pub fn find_type_by_name(&self, name: &str) -> Option<&VocabularyType> {
        self.sources.iter().find_map(|g| g.find_type_by_name(name))
    }

    /// Every instance of `type_iri` across all sources.
    pub fn instances_of<'a>(
        &'a self,
        type_iri: &'a str,
    ) -> impl Iterator<Item = &'a VocabularyInstance> + 'a {
        self.sources.iter().flat_map(move |g| g.instances_of(type_iri))
    }

    /// Returns the total number of types across all sources.
    #[must_use]
    pub fn type_count(&self) -> usize {
        self.sources.iter().map(|g| g.types().len()).sum()
    }

    /// Returns the total number of properties across all sources.
    #[must_use]
    pub fn property_count(&self) -> usize {
        self.sources.iter().map(|g| g.properties().len()).sum()
    }

    /// Returns the total number of instances across all sources.
    #[must_use]
    pub fn instance_count(&self) -> usize {
        self.sources.iter().map(|g| g.instances().len()).sum()
    }
}

/// Returns true if `iri` is the distinguished Enumeration marker type.
#[must_use]
pub fn is_enumeration_marker(iri: &str) -> bool {
    iri == iris::SCHEMA_ENUMERATION || iri == iris::SCHEMA_ENUMERATION_HTTP
}

/// Returns true if `iri` names a primitive datatype rather than a type.
///
/// schema.org datatypes are recognised by local name under either scheme;
/// XSD datatypes are recognised by namespace.
#[must_use]
pub fn is_datatype(iri: &str) -> bool {
    if iri.starts_with(iris::XSD) {
        return true;
    }
    let in_schema = iri.starts_with(iris::SCHEMA) || iri.starts_with(iris::SCHEMA_HTTP);
    in_schema && is_datatype_name(local_name(iri))
}

/// Returns true if `name` is the local name of a schema.org datatype.
#[must_use]
pub fn is_datatype_name(name: &str) -> bool {
    iris::DATATYPE_NAMES.contains(&name)
}

/// Standard IRI constants.
pub mod iris {
    /// schema.org namespace (current, `https`).
    pub const SCHEMA: &str = "https://schema.org/";
    /// schema.org namespace (legacy, `http`).
    pub const SCHEMA_HTTP: &str = "http://schema.org/";
    /// RDF namespace.
    pub const RDF: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#";
    /// RDFS namespace.
    pub const RDFS: &str = "http://www.w3.org/2000/01/rdf-schema#";
    /// XSD namespace.
    pub const XSD: &str = "http://www.w3.org/2001/XMLSchema#";

    /// `schema:Enumeration`, the marker whose direct subclasses become enumerations.
    pub const SCHEMA_ENUMERATION: &str = "https://schema.org/Enumeration";
    /// `schema:Enumeration` under the legacy `http` scheme.
    pub const SCHEMA_ENUMERATION_HTTP: &str = "http://schema.org/Enumeration";

    /// `rdfs:Class`.
    pub const RDFS_CLASS: &str = "http://www.w3.org/2000/01/rdf-schema#Class";
    /// `rdf:Property`.
    pub const RDF_PROPERTY: &str = "http://www.w3.org/1999/02/22-rdf-syntax-ns#Property";
    /// `rdfs:subClassOf`.
    pub const RDFS_SUBCLASS_OF: &str = "http://www.w3.org/2000/01/rdf-schema#subClassOf";
    /// `rdfs:comment`.
    pub const RDFS_COMMENT: &str = "http://www.w3.org/2000/01/rdf-schema#comment";

    /// Local names of the schema.org primitive datatypes.
    pub const DATATYPE_NAMES: &[&str] = &[
        "Boolean", "DataType", "Date", "DateTime", "Float", "Integer", "Number", "Text", "Time",
        "URL",
    ];
}
