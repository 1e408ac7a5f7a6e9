//! JSON-LD vocabulary importer.
//!
//! Reads a schema.org-style JSON-LD document (a `@context` of prefixes and a
//! flat `@graph` of nodes) that has already been decoded into a
//! [`serde_json::Value`], and builds a [`Graph`] from it. Node order in
//! `@graph`, and value order inside every array, is preserved.
//!
//! ```
//! let doc = serde_json::json!({
//!     "@context": { "schema": "https://schema.org/", "rdfs": "http://www.w3.org/2000/01/rdf-schema#" },
//!     "@graph": [
//!         { "@id": "schema:Thing", "@type": "rdfs:Class", "rdfs:comment": "The most generic type of item." }
//!     ]
//! });
//! let graph = schemagen_vocab::jsonld::from_json_ld(&doc).unwrap();
//! assert_eq!(graph.types()[0].name, "Thing");
//! ```

use std::collections::HashMap;
use std::path::Path;

use serde_json::{Map, Value};

use crate::error::Error;
use crate::model::iris::*;
use crate::model::{Graph, VocabularyInstance, VocabularyProperty, VocabularyType};

const DOMAIN_INCLUDES: &[&str] = &[
    "https://schema.org/domainIncludes",
    "http://schema.org/domainIncludes",
];
const RANGE_INCLUDES: &[&str] = &[
    "https://schema.org/rangeIncludes",
    "http://schema.org/rangeIncludes",
];

/// Builds a graph from a decoded JSON-LD document.
///
/// # Errors
///
/// Returns [`Error::InvalidDocument`] if the document has neither a `@graph`
/// array nor is itself an array of nodes.
pub fn from_json_ld(document: &Value) -> Result<Graph, Error> {
    let context = Context::from_document(document);
    let nodes = match document.get("@graph") {
        Some(Value::Array(nodes)) => nodes,
        Some(_) => {
            return Err(Error::InvalidDocument(
                "`@graph` must be an array".to_string(),
            ))
        }
        None => match document {
            Value::Array(nodes) => nodes,
            _ => {
                return Err(Error::InvalidDocument(
                    "expected a `@graph` array".to_string(),
                ))
            }
        },
    };

    let mut graph = Graph::new();
    for node in nodes.iter().filter_map(Value::as_object) {
        let Some(id) = node.get("@id").and_then(Value::as_str) else {
            continue;
        };
        let id = context.expand(id);
        let types = context.ids(node.get("@type"));
        let comment = literal(context.get(node, &[RDFS_COMMENT]));

        if types.iter().any(|t| t == RDFS_CLASS) {
            let mut ty = VocabularyType::new(id).with_comment(comment);
            ty.subclass_of = context.ids(context.get(node, &[RDFS_SUBCLASS_OF]));
            graph.add_type(ty);
        } else if types.iter().any(|t| t == RDF_PROPERTY) {
            let mut property = VocabularyProperty::new(id).with_comment(comment);
            property.domains = context.ids(context.get(node, DOMAIN_INCLUDES));
            property.ranges = context.ids(context.get(node, RANGE_INCLUDES));
            graph.add_property(property);
        } else if !types.is_empty() {
            let mut instance = VocabularyInstance::new(id, String::new()).with_comment(comment);
            instance.types = types;
            graph.add_instance(instance);
        }
    }
    Ok(graph)
}

/// Decodes `text` as JSON and builds a graph from it.
///
/// # Errors
///
/// Returns [`Error::Json`] for malformed JSON and [`Error::InvalidDocument`]
/// for JSON that is not a vocabulary document.
pub fn from_json_ld_str(text: &str) -> Result<Graph, Error> {
    let document: Value = serde_json::from_str(text)?;
    from_json_ld(&document)
}

/// Reads a JSON-LD file and builds a graph from it.
///
/// # Errors
///
/// Returns [`Error::Io`] if the file cannot be read, otherwise as
/// [`from_json_ld_str`].
pub fn load(path: &Path) -> Result<Graph, Error> {
    let text = std::fs::read_to_string(path).map_err(|source| Error::Io {
        path: path.to_path_buf(),
        source,
    })?;
    from_json_ld_str(&text)
}

/// Prefix table from `@context`.
struct Context {
    prefixes: HashMap<String, String>,
}

impl Context {
    fn from_document(document: &Value) -> Self {
        let mut prefixes = HashMap::new();
        if let Some(Value::Object(ctx)) = document.get("@context") {
            for (prefix, value) in ctx {
                let iri = match value {
                    Value::String(s) => Some(s.as_str()),
                    Value::Object(o) => o.get("@id").and_then(Value::as_str),
                    _ => None,
                };
                if let Some(iri) = iri {
                    prefixes.insert(prefix.clone(), iri.to_string());
                }
            }
        }
        Self { prefixes }
    }

    /// Expands a compact IRI (`schema:Book`) against the prefix table.
    fn expand(&self, term: &str) -> String {
        if term.contains("://") {
            return term.to_string();
        }
        match term.split_once(':') {
            Some((prefix, suffix)) => match self.prefixes.get(prefix) {
                Some(base) => format!("{base}{suffix}"),
                None => term.to_string(),
            },
            None => term.to_string(),
        }
    }

    /// Returns the value of the first key of `node` that expands to one of `iris`.
    fn get<'v>(&self, node: &'v Map<String, Value>, iris: &[&str]) -> Option<&'v Value> {
        node.iter()
            .find(|(key, _)| {
                let expanded = self.expand(key);
                iris.iter().any(|iri| *iri == expanded)
            })
            .map(|(_, value)| value)
    }

    /// Collects node references (`"x"`, `{"@id": "x"}`, or arrays of either).
    fn ids(&self, value: Option<&Value>) -> Vec<String> {
        match value {
            Some(Value::String(s)) => vec![self.expand(s)],
            Some(Value::Object(o)) => o
                .get("@id")
                .and_then(Value::as_str)
                .map(|s| vec![self.expand(s)])
                .unwrap_or_default(),
            Some(Value::Array(items)) => items.iter().flat_map(|v| self.ids(Some(v))).collect(),
            _ => Vec::new(),
        }
    }
}

/// Extracts a literal string, preferring English when several languages are present.
fn literal(value: Option<&Value>) -> String {
    match value {
        Some(Value::String(s)) => s.clone(),
        Some(Value::Object(o)) => o
            .get("@value")
            .and_then(Value::as_str)
            .unwrap_or_default()
            .to_string(),
        Some(Value::Array(items)) => items
            .iter()
            .find(|v| v.get("@language").and_then(Value::as_str) == Some("en"))
            .or_else(|| items.first())
            .map(|v| literal(Some(v)))
            .unwrap_or_default(),
        _ => String::new(),
    }
}
