//! `doc`: documentation comments taken from the vocabulary.

use crate::descriptor::{ClassDescriptor, ConstantDescriptor, FieldDescriptor};
use crate::emit::normalize_comment;
use crate::extension::{AnnotationGenerator, ExtensionContext};
use crate::mapping::to_snake_case;

/// Emits `///` lines for classes, interfaces, fields, accessors, and constants.
#[derive(Debug, Clone, Copy, Default)]
pub struct DocGenerator;

/// Registry factory.
pub fn factory<'a>(_ctx: ExtensionContext<'a>) -> Box<dyn AnnotationGenerator + 'a> {
    Box::new(DocGenerator)
}

/// Formats `text` as `///` lines, then a blank doc line and an IRI reference.
fn doc_lines(text: &str, iri: Option<&str>) -> Vec<String> {
    let text = normalize_comment(text);
    let mut lines: Vec<String> = text
        .lines()
        .map(|l| if l.is_empty() { "///".to_string() } else { format!("/// {l}") })
        .collect();
    if let Some(iri) = iri {
        if !lines.is_empty() {
            lines.push("///".to_string());
        }
        lines.push(format!("/// See <{iri}>."));
    }
    lines
}

impl AnnotationGenerator for DocGenerator {
    fn class_annotations(&self, class: &ClassDescriptor) -> Vec<String> {
        doc_lines(&class.comment, Some(&class.resource))
    }

    fn interface_annotations(&self, class: &ClassDescriptor) -> Vec<String> {
        doc_lines(
            &format!("Behaviour shared by `{}` values.", class.name),
            Some(&class.resource),
        )
    }

    fn field_annotations(&self, _class: &ClassDescriptor, field: &FieldDescriptor) -> Vec<String> {
        doc_lines(&field.comment, Some(&field.resource))
    }

    fn getter_annotations(&self, _class: &ClassDescriptor, field: &FieldDescriptor) -> Vec<String> {
        doc_lines(&format!("Returns `{}`.", to_snake_case(&field.name)), None)
    }

    fn setter_annotations(&self, _class: &ClassDescriptor, field: &FieldDescriptor) -> Vec<String> {
        doc_lines(&format!("Sets `{}`.", to_snake_case(&field.name)), None)
    }

    fn constant_annotations(
        &self,
        _class: &ClassDescriptor,
        constant: &ConstantDescriptor,
    ) -> Vec<String> {
        doc_lines(&constant.comment, Some(&constant.resource))
    }
}
