//! Run configuration.
//!
//! Deserialized from TOML or JSON with `camelCase` keys:
//!
//! ```toml
//! useRte = true
//! checkIsGoodRelations = false
//! fieldVisibility = "private"
//! output = "src"
//! annotationGenerators = ["doc", "serde", "validator"]
//!
//! [namespaces]
//! entity = "crate::entity"
//! enum = "crate::enumeration"
//! interface = "crate::model"
//!
//! [types.Book]
//! parent = "CreativeWork"
//!
//! [types.Book.properties.title]
//! [types.Book.properties.author]
//! range = "Person"
//! cardinality = "(1..*)"
//! ```

use std::collections::BTreeMap;
use std::path::{Path, PathBuf};

use schemagen_vocab::Cardinality;
use serde::Deserialize;

use crate::error::Error;
use crate::extension::GeneratorRegistry;

/// Complete configuration of one generation run.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Config {
    /// Explicit type allow-list with per-type settings. Empty means every
    /// vocabulary type is generated.
    pub types: BTreeMap<String, TypeConfig>,
    /// Default namespaces.
    pub namespaces: Namespaces,
    /// Emit a companion interface (trait) for every entity class.
    pub use_rte: bool,
    /// Warn about properties the GoodRelations bridge does not know.
    pub check_is_good_relations: bool,
    /// Visibility of generated struct fields.
    pub field_visibility: FieldVisibility,
    /// Free text placed at the top of every generated file.
    pub header: Option<String>,
    /// Base output directory.
    pub output: PathBuf,
    /// Annotation generator identifiers, in the order their output is concatenated.
    pub annotation_generators: Vec<String>,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            types: BTreeMap::new(),
            namespaces: Namespaces::default(),
            use_rte: false,
            check_is_good_relations: false,
            field_visibility: FieldVisibility::default(),
            header: None,
            output: PathBuf::from("generated"),
            annotation_generators: vec!["doc".to_string()],
        }
    }
}

/// Per-type settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TypeConfig {
    /// Explicit property allow-list. Empty means every property whose domain
    /// includes the type.
    pub properties: BTreeMap<String, PropertyConfig>,
    /// Parent override.
    pub parent: Option<String>,
    /// Namespace overrides.
    pub namespaces: TypeNamespaces,
}

/// Per-property settings.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct PropertyConfig {
    /// Range override, used verbatim.
    pub range: Option<String>,
    /// Cardinality override.
    pub cardinality: Option<Cardinality>,
    /// Nullability override.
    pub nullable: Option<bool>,
}

/// Per-type namespace overrides.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct TypeNamespaces {
    /// Namespace of the generated class or enumeration.
    pub class: Option<String>,
    /// Namespace of the generated interface.
    pub interface: Option<String>,
}

/// Default namespaces.
#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "camelCase", default, deny_unknown_fields)]
pub struct Namespaces {
    /// Namespace of enumerations.
    #[serde(rename = "enum")]
    pub enumeration: String,
    /// Namespace of entity classes.
    pub entity: String,
    /// Namespace of interfaces.
    pub interface: String,
}

impl Default for Namespaces {
    fn default() -> Self {
        Self {
            enumeration: "crate::enumeration".to_string(),
            entity: "crate::entity".to_string(),
            interface: "crate::model".to_string(),
        }
    }
}

/// Visibility of generated struct fields.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum FieldVisibility {
    /// No visibility modifier.
    #[default]
    Private,
    /// `pub(crate)`.
    Crate,
    /// `pub`.
    Public,
}

impl FieldVisibility {
    /// Returns the visibility prefix, including a trailing space when non-empty.
    #[must_use]
    pub fn as_prefix(self) -> &'static str {
        match self {
            FieldVisibility::Private => "",
            FieldVisibility::Crate => "pub(crate) ",
            FieldVisibility::Public => "pub ",
        }
    }
}

impl Config {
    /// Parses a TOML configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Toml`] if the text is not a valid configuration.
    pub fn from_toml_str(text: &str) -> Result<Self, Error> {
        Ok(toml::from_str(text)?)
    }

    /// Parses a JSON configuration.
    ///
    /// # Errors
    ///
    /// Returns [`Error::Json`] if the text is not a valid configuration.
    pub fn from_json_str(text: &str) -> Result<Self, Error> {
        Ok(serde_json::from_str(text)?)
    }

    /// Loads a configuration file, choosing the format from its extension.
    ///
    /// # Errors
    ///
    /// Returns an error if the file cannot be read, has an unsupported
    /// extension, or does not parse.
    pub fn load(path: &Path) -> Result<Self, Error> {
        let text = std::fs::read_to_string(path).map_err(|source| Error::ConfigIo {
            path: path.to_path_buf(),
            source,
        })?;
        match path.extension().and_then(|e| e.to_str()) {
            Some("toml") => Self::from_toml_str(&text),
            Some("json") => Self::from_json_str(&text),
            _ => Err(Error::UnsupportedConfigFormat(path.to_path_buf())),
        }
    }

    /// Checks every configured annotation generator against `registry`.
    ///
    /// # Errors
    ///
    /// Returns [`Error::UnknownGenerator`] for the first unregistered identifier.
    pub fn validate(&self, registry: &GeneratorRegistry) -> Result<(), Error> {
        registry.resolve(&self.annotation_generators).map(|_| ())
    }

    /// Returns true if an explicit type allow-list is active.
    #[must_use]
    pub fn has_type_allow_list(&self) -> bool {
        !self.types.is_empty()
    }

    /// Returns the settings of `type_name`, if it is configured.
    #[must_use]
    pub fn type_config(&self, type_name: &str) -> Option<&TypeConfig> {
        self.types.get(type_name)
    }

    /// Namespace of the class or enumeration generated for `type_name`.
    #[must_use]
    pub fn class_namespace(&self, type_name: &str, is_enum: bool) -> String {
        self.type_config(type_name)
            .and_then(|t| t.namespaces.class.clone())
            .unwrap_or_else(|| {
                if is_enum {
                    self.namespaces.enumeration.clone()
                } else {
                    self.namespaces.entity.clone()
                }
            })
    }

    /// Namespace of the interface generated for `type_name`.
    #[must_use]
    pub fn interface_namespace(&self, type_name: &str) -> String {
        self.type_config(type_name)
            .and_then(|t| t.namespaces.interface.clone())
            .unwrap_or_else(|| self.namespaces.interface.clone())
    }
}

impl TypeConfig {
    /// Returns true if an explicit property allow-list is active.
    #[must_use]
    pub fn has_property_allow_list(&self) -> bool {
        !self.properties.is_empty()
    }
}
