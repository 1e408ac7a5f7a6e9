//! `serde`: (de)serialization attributes for entity structs.
//!
//! Structs derive `Serialize` and `Deserialize` with a container-level
//! `#[serde(default)]`, so absent keys fall back to `Default`. Fields keep
//! their vocabulary spelling on the wire; unset and empty values are skipped.
//! Enumerations are left alone: they serialize through their IRI string.

use crate::descriptor::{ClassDescriptor, FieldDescriptor};
use crate::extension::{AnnotationGenerator, ExtensionContext};
use crate::mapping::to_snake_case;

/// Emits serde derives and field attributes.
#[derive(Debug, Clone, Copy, Default)]
pub struct SerdeGenerator;

/// Registry factory.
pub fn factory<'a>(_ctx: ExtensionContext<'a>) -> Box<dyn AnnotationGenerator + 'a> {
    Box::new(SerdeGenerator)
}

impl AnnotationGenerator for SerdeGenerator {
    fn class_annotations(&self, class: &ClassDescriptor) -> Vec<String> {
        if class.is_enum {
            return Vec::new();
        }
        vec![
            "#[derive(Serialize, Deserialize)]".to_string(),
            "#[serde(default)]".to_string(),
        ]
    }

    fn field_annotations(&self, class: &ClassDescriptor, field: &FieldDescriptor) -> Vec<String> {
        if class.is_enum {
            return Vec::new();
        }
        let mut args = Vec::new();
        if to_snake_case(&field.name) != field.name {
            args.push(format!("rename = \"{}\"", field.name));
        }
        if field.is_array {
            args.push("skip_serializing_if = \"Vec::is_empty\"".to_string());
        } else if field.is_nullable {
            args.push("skip_serializing_if = \"Option::is_none\"".to_string());
        }
        if args.is_empty() {
            Vec::new()
        } else {
            vec![format!("#[serde({})]", args.join(", "))]
        }
    }

    fn uses(&self, class: &ClassDescriptor) -> Vec<String> {
        if class.is_enum {
            return Vec::new();
        }
        vec![
            "serde::Deserialize".to_string(),
            "serde::Serialize".to_string(),
        ]
    }
}
