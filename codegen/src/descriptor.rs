//! In-memory descriptors of the classes, interfaces, and enumerations to generate.

use std::collections::BTreeMap;

use schemagen_vocab::Cardinality;

/// Every descriptor of a run, keyed by class name.
pub type ClassMap = BTreeMap<String, ClassDescriptor>;

/// A class, its optional companion interface, or an enumeration.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ClassDescriptor {
    /// Class name (the vocabulary type's local name).
    pub name: String,
    /// Namespace the class is generated into.
    pub namespace: String,
    /// IRI of the backing vocabulary type.
    pub resource: String,
    /// Description of the backing vocabulary type.
    pub comment: String,
    /// Single resolved parent class name.
    pub parent: Option<String>,
    /// True when generated as an enumeration.
    pub is_enum: bool,
    /// Companion interface name, when interfaces are enabled.
    pub interface_name: Option<String>,
    /// Companion interface namespace, when interfaces are enabled.
    pub interface_namespace: Option<String>,
    /// Fields, in property declaration order.
    pub fields: Vec<FieldDescriptor>,
    /// Enumeration constants, in instance declaration order.
    pub constants: Vec<ConstantDescriptor>,
    /// Class-level annotations.
    pub annotations: Vec<String>,
    /// Interface-level annotations.
    pub interface_annotations: Vec<String>,
    /// Sorted, deduplicated item paths the generated file imports.
    pub uses: Vec<String>,
}

impl ClassDescriptor {
    /// Creates a descriptor with no parent, fields, constants, or annotations.
    pub fn new(
        name: impl Into<String>,
        namespace: impl Into<String>,
        resource: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            namespace: namespace.into(),
            resource: resource.into(),
            comment: String::new(),
            parent: None,
            is_enum: false,
            interface_name: None,
            interface_namespace: None,
            fields: Vec::new(),
            constants: Vec::new(),
            annotations: Vec::new(),
            interface_annotations: Vec::new(),
            uses: Vec::new(),
        }
    }

    /// Looks up a field by name.
    #[must_use]
    pub fn field(&self, name: &str) -> Option<&FieldDescriptor> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Fully qualified path of the companion interface.
    #[must_use]
    pub fn interface_path(&self) -> Option<String> {
        match (&self.interface_namespace, &self.interface_name) {
            (Some(ns), Some(name)) => Some(item_path(ns, name)),
            _ => None,
        }
    }
}

/// A field backed by one vocabulary property.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldDescriptor {
    /// Field name (the property's local name).
    pub name: String,
    /// IRI of the backing property.
    pub resource: String,
    /// Description of the backing property.
    pub comment: String,
    /// The single resolved range: a datatype or class name.
    pub range: String,
    /// Interface or class name referenced by the field, or `None` for datatypes.
    pub type_hint: Option<String>,
    /// Cardinality of the backing property.
    pub cardinality: Cardinality,
    /// True when the field holds a collection.
    pub is_array: bool,
    /// True when the field may be left unset.
    pub is_nullable: bool,
    /// Field-level annotations.
    pub annotations: Vec<String>,
    /// Getter-level annotations.
    pub getter_annotations: Vec<String>,
    /// Setter-level annotations.
    pub setter_annotations: Vec<String>,
}

impl FieldDescriptor {
    /// Creates a field with the given range; array/nullable flags follow `cardinality`.
    pub fn new(
        name: impl Into<String>,
        resource: impl Into<String>,
        range: impl Into<String>,
        cardinality: Cardinality,
    ) -> Self {
        Self {
            name: name.into(),
            resource: resource.into(),
            comment: String::new(),
            range: range.into(),
            type_hint: None,
            cardinality,
            is_array: cardinality.is_array(),
            is_nullable: cardinality.is_nullable(),
            annotations: Vec::new(),
            getter_annotations: Vec::new(),
            setter_annotations: Vec::new(),
        }
    }
}

/// An enumeration member.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ConstantDescriptor {
    /// Constant name (upper snake case).
    pub name: String,
    /// IRI of the backing instance.
    pub resource: String,
    /// Literal value: the instance's full IRI.
    pub value: String,
    /// Description of the backing instance.
    pub comment: String,
    /// Constant-level annotations.
    pub annotations: Vec<String>,
}

/// Joins a namespace and an item name into a path.
#[must_use]
pub fn item_path(namespace: &str, name: &str) -> String {
    if namespace.is_empty() {
        name.to_string()
    } else {
        format!("{namespace}::{name}")
    }
}
