//! Rust source rendering.
//!
//! Every descriptor becomes one file at `<output>/<namespace path>/<snake name>.rs`:
//!
//! - entity classes become structs with getters, setters, and adders for
//!   collection fields. A generated entity parent is embedded as a `base`
//!   field and exposed through `Deref`/`DerefMut`; a datatype parent embeds
//!   its primitive type. Enumeration parents and parents outside the run are
//!   not embedded.
//! - enumerations become newtypes over the member IRI with one associated
//!   constant per member.
//! - interfaces become object-safe traits implemented by their class.
//!
//! Each written directory below the output root gets a `mod.rs` that declares
//! its modules and re-exports the generated items.

use std::collections::BTreeMap;
use std::fmt::Write as FmtWrite;
use std::path::{Path, PathBuf};

use anyhow::Result;
use schemagen_vocab::is_datatype_name;

use crate::config::Config;
use crate::descriptor::{item_path, ClassDescriptor, ClassMap, FieldDescriptor};
use crate::diagnostics::Diagnostics;
use crate::emit::{self, RustFile};
use crate::mapping::{datatype_is_copy, datatype_to_rust, to_snake_case};
use crate::paths::OutputPathResolver;

/// Module name → re-exported item, per directory.
type ModuleTree = BTreeMap<PathBuf, BTreeMap<String, Option<String>>>;

/// How a field's range is represented.
enum FieldKind {
    /// A primitive Rust type.
    Datatype { rust: &'static str, copy: bool },
    /// A generated enumeration (a `Copy` newtype).
    Enum(String),
    /// A generated entity, boxed when single-valued.
    Entity {
        ty: String,
        /// Trait object type returned by the getter, when an interface exists.
        interface: Option<String>,
    },
}

impl FieldKind {
    fn storage(&self, field: &FieldDescriptor) -> String {
        match self {
            FieldKind::Datatype { rust, .. } if field.is_array => format!("Vec<{rust}>"),
            FieldKind::Datatype { rust, .. } if field.is_nullable => format!("Option<{rust}>"),
            FieldKind::Datatype { rust, .. } => (*rust).to_string(),
            FieldKind::Enum(ty) if field.is_array => format!("Vec<{ty}>"),
            FieldKind::Enum(ty) => format!("Option<{ty}>"),
            FieldKind::Entity { ty, .. } if field.is_array => format!("Vec<{ty}>"),
            FieldKind::Entity { ty, .. } => format!("Option<Box<{ty}>>"),
        }
    }

    fn element(&self) -> &str {
        match self {
            FieldKind::Datatype { rust, .. } => *rust,
            FieldKind::Enum(ty) | FieldKind::Entity { ty, .. } => ty.as_str(),
        }
    }
}

/// Renders descriptors and writes them below an output root.
pub struct Renderer<'a> {
    classes: &'a ClassMap,
    config: &'a Config,
    paths: &'a OutputPathResolver,
    diagnostics: &'a Diagnostics,
}

impl<'a> Renderer<'a> {
    /// Creates a renderer for `classes`.
    pub fn new(
        classes: &'a ClassMap,
        config: &'a Config,
        paths: &'a OutputPathResolver,
        diagnostics: &'a Diagnostics,
    ) -> Self {
        Self {
            classes,
            config,
            paths,
            diagnostics,
        }
    }

    /// Writes every descriptor, interface, and `mod.rs`; returns the written paths.
    ///
    /// # Errors
    ///
    /// Returns an error if a directory or file cannot be written.
    pub fn write_all(&self) -> Result<Vec<PathBuf>> {
        let mut written = Vec::new();
        let mut tree = ModuleTree::new();

        for class in self.classes.values() {
            let content = if class.is_enum {
                self.render_enum(class)
            } else {
                self.render_entity(class)
            };
            let dir = self.paths.ensure_dir(&class.namespace)?;
            written.push(self.write_item(&mut tree, &dir, &class.name, &content)?);

            if let (Some(name), Some(ns)) = (&class.interface_name, &class.interface_namespace) {
                let dir = self.paths.ensure_dir(ns)?;
                let content = self.render_interface(class);
                written.push(self.write_item(&mut tree, &dir, name, &content)?);
            }
        }

        for (dir, modules) in &tree {
            if dir.as_path() == self.paths.root() {
                continue;
            }
            let path = dir.join("mod.rs");
            emit::write_file(&path, &self.render_mod(dir, modules))?;
            tracing::debug!(path = %path.display(), "wrote module index");
            written.push(path);
        }
        Ok(written)
    }

    fn write_item(
        &self,
        tree: &mut ModuleTree,
        dir: &Path,
        item: &str,
        content: &str,
    ) -> Result<PathBuf> {
        let module = to_snake_case(item);
        let path = dir.join(format!("{module}.rs"));
        emit::write_file(&path, content)?;
        tracing::debug!(path = %path.display(), item, "wrote item");

        tree.entry(dir.to_path_buf())
            .or_default()
            .insert(module, Some(item.to_string()));
        let mut child = dir;
        while child != self.paths.root() {
            let (Some(parent), Some(name)) = (child.parent(), child.file_name()) else {
                break;
            };
            if !parent.starts_with(self.paths.root()) {
                break;
            }
            tree.entry(parent.to_path_buf())
                .or_default()
                .entry(name.to_string_lossy().into_owned())
                .or_insert(None);
            child = parent;
        }
        Ok(path)
    }

    /// Renders a `mod.rs` declaring `modules`.
    fn render_mod(&self, dir: &Path, modules: &BTreeMap<String, Option<String>>) -> String {
        let name = dir
            .file_name()
            .map(|n| n.to_string_lossy().into_owned())
            .unwrap_or_default();
        let mut f = RustFile::new(self.config.header.as_deref(), &format!("The `{name}` module."));
        for module in modules.keys() {
            let _ = writeln!(f.buf, "pub mod {module};");
        }
        f.blank();
        for (module, item) in modules {
            if let Some(item) = item {
                let _ = writeln!(f.buf, "pub use {module}::{item};");
            }
        }
        f.finish()
    }

    /// How `current` refers to the item `name` in `namespace`.
    fn reference(&self, current: &ClassDescriptor, namespace: &str, name: &str) -> String {
        let path = item_path(namespace, name);
        if current.uses.contains(&path) {
            name.to_string()
        } else if namespace == current.namespace {
            format!("super::{name}")
        } else {
            path
        }
    }

    /// Type of the `base` field of `class`, if its parent can be embedded.
    fn base_type(&self, class: &ClassDescriptor) -> Option<String> {
        let parent = class.parent.as_deref()?;
        if is_datatype_name(parent) {
            return Some(datatype_to_rust(parent).unwrap_or("String").to_string());
        }
        match self.classes.get(parent) {
            Some(target) if !target.is_enum => {
                Some(self.reference(class, &target.namespace, &target.name))
            }
            Some(_) => {
                self.diagnostics.warning(format!(
                    "The parent \"{parent}\" of \"{}\" is an enumeration and is not embedded",
                    class.name
                ));
                None
            }
            None => {
                self.diagnostics.warning(format!(
                    "The parent \"{parent}\" of \"{}\" is not generated and is not embedded",
                    class.name
                ));
                None
            }
        }
    }

    fn field_kind(&self, current: &ClassDescriptor, field: &FieldDescriptor) -> FieldKind {
        if is_datatype_name(&field.range) {
            let rust = datatype_to_rust(&field.range).unwrap_or("String");
            return FieldKind::Datatype {
                rust,
                copy: datatype_is_copy(&field.range),
            };
        }
        match self.classes.get(&field.range) {
            Some(target) if target.is_enum => {
                FieldKind::Enum(self.reference(current, &target.namespace, &target.name))
            }
            Some(target) => {
                let interface = match (&field.type_hint, &target.interface_namespace) {
                    (Some(hint), Some(ns)) if Some(hint) == target.interface_name.as_ref() => {
                        Some(format!("dyn {}", self.reference(current, ns, hint)))
                    }
                    _ => None,
                };
                FieldKind::Entity {
                    ty: self.reference(current, &target.namespace, &target.name),
                    interface,
                }
            }
            // Reported as a warning when type hints are resolved.
            None => FieldKind::Datatype {
                rust: "String",
                copy: false,
            },
        }
    }

    /// Renders an entity struct.
    #[must_use]
    pub fn render_entity(&self, class: &ClassDescriptor) -> String {
        let vis = self.config.field_visibility.as_prefix();
        let mut f = RustFile::new(
            self.config.header.as_deref(),
            &format!("The `{}` entity.", class.name),
        );
        render_uses(&mut f, &class.uses);

        let parent = self.base_type(class);
        let kinds: Vec<FieldKind> = class
            .fields
            .iter()
            .map(|field| self.field_kind(class, field))
            .collect();

        f.lines("", &class.annotations);
        f.line("#[derive(Debug, Clone, Default, PartialEq)]");
        f.line(&format!("pub struct {} {{", class.name));
        if let Some(parent) = &parent {
            f.line(&format!("    {vis}base: {parent},"));
        }
        for (field, kind) in class.fields.iter().zip(&kinds) {
            f.lines("    ", &field.annotations);
            f.line(&format!(
                "    {vis}{}: {},",
                to_snake_case(&field.name),
                kind.storage(field)
            ));
        }
        f.line("}");
        f.blank();

        f.line(&format!("impl {} {{", class.name));
        f.indented_doc_comment("IRI of the vocabulary type.");
        f.line(&format!(
            "    pub const IRI: &'static str = \"{}\";",
            class.resource
        ));
        for (field, kind) in class.fields.iter().zip(&kinds) {
            f.blank();
            render_accessors(&mut f, field, kind);
        }
        f.line("}");

        if let Some(parent) = &parent {
            f.blank();
            f.line(&format!("impl std::ops::Deref for {} {{", class.name));
            f.line(&format!("    type Target = {parent};"));
            f.blank();
            f.line("    fn deref(&self) -> &Self::Target {");
            f.line("        &self.base");
            f.line("    }");
            f.line("}");
            f.blank();
            f.line(&format!("impl std::ops::DerefMut for {} {{", class.name));
            f.line("    fn deref_mut(&mut self) -> &mut Self::Target {");
            f.line("        &mut self.base");
            f.line("    }");
            f.line("}");
        }

        if let (Some(name), Some(ns)) = (&class.interface_name, &class.interface_namespace) {
            f.blank();
            f.line(&format!(
                "impl {} for {} {{",
                self.reference(class, ns, name),
                class.name
            ));
            f.line("    fn type_iri(&self) -> &'static str {");
            f.line("        Self::IRI");
            f.line("    }");
            f.line("}");
        }
        f.finish()
    }

    /// Renders the companion interface trait of `class`.
    #[must_use]
    pub fn render_interface(&self, class: &ClassDescriptor) -> String {
        let name = class
            .interface_name
            .clone()
            .unwrap_or_else(|| format!("{}Interface", class.name));
        let mut f = RustFile::new(
            self.config.header.as_deref(),
            &format!("The `{name}` interface."),
        );
        f.lines("", &class.interface_annotations);
        f.line(&format!("pub trait {name}: std::fmt::Debug {{"));
        f.indented_doc_comment("IRI of the vocabulary type.");
        f.line("    fn type_iri(&self) -> &'static str;");
        f.line("}");
        f.finish()
    }

    /// Renders an enumeration newtype.
    #[must_use]
    pub fn render_enum(&self, class: &ClassDescriptor) -> String {
        let mut f = RustFile::new(
            self.config.header.as_deref(),
            &format!("The `{}` enumeration.", class.name),
        );
        render_uses(&mut f, &class.uses);

        f.lines("", &class.annotations);
        f.line("#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]");
        f.line(&format!("pub struct {}(&'static str);", class.name));
        f.blank();

        f.line(&format!("impl {} {{", class.name));
        for constant in &class.constants {
            f.lines("    ", &constant.annotations);
            f.line(&format!(
                "    pub const {}: Self = Self(\"{}\");",
                constant.name, constant.value
            ));
            f.blank();
        }
        let members: Vec<String> = class
            .constants
            .iter()
            .map(|c| format!("Self::{}", c.name))
            .collect();
        f.indented_doc_comment("Every member, in declaration order.");
        f.line(&format!(
            "    pub const VALUES: &'static [Self] = &[{}];",
            members.join(", ")
        ));
        f.blank();
        f.indented_doc_comment("IRI of the vocabulary type.");
        f.line(&format!(
            "    pub const IRI: &'static str = \"{}\";",
            class.resource
        ));
        f.blank();
        f.indented_doc_comment("Returns the member IRI.");
        f.line("    pub fn iri(self) -> &'static str {");
        f.line("        self.0");
        f.line("    }");
        f.blank();
        f.indented_doc_comment("Looks up a member by IRI.");
        f.line("    pub fn from_iri(iri: &str) -> Option<Self> {");
        f.line("        Self::VALUES.iter().copied().find(|v| v.0 == iri)");
        f.line("    }");
        f.line("}");
        f.blank();
        f.line(&format!("impl std::fmt::Display for {} {{", class.name));
        f.line("    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {");
        f.line("        f.write_str(self.0)");
        f.line("    }");
        f.line("}");
        f.finish()
    }
}

fn render_uses(f: &mut RustFile, uses: &[String]) {
    if uses.is_empty() {
        return;
    }
    for path in uses {
        f.line(&format!("use {path};"));
    }
    f.blank();
}

fn render_accessors(f: &mut RustFile, field: &FieldDescriptor, kind: &FieldKind) {
    let ident = to_snake_case(&field.name);
    let method = ident.trim_end_matches('_');
    let element = kind.element();

    f.lines("    ", &field.getter_annotations);
    let (ret, body) = match kind {
        _ if field.is_array => (format!("&[{element}]"), format!("&self.{ident}")),
        FieldKind::Datatype { copy: false, .. } if field.is_nullable => (
            "Option<&str>".to_string(),
            format!("self.{ident}.as_deref()"),
        ),
        FieldKind::Datatype { copy: false, .. } => ("&str".to_string(), format!("&self.{ident}")),
        FieldKind::Datatype { rust, .. } if field.is_nullable => {
            (format!("Option<{rust}>"), format!("self.{ident}"))
        }
        FieldKind::Datatype { rust, .. } => ((*rust).to_string(), format!("self.{ident}")),
        FieldKind::Enum(ty) => (format!("Option<{ty}>"), format!("self.{ident}")),
        FieldKind::Entity {
            interface: Some(dyn_ty),
            ..
        } => (
            format!("Option<&{dyn_ty}>"),
            format!("self.{ident}.as_deref().map(|v| v as &{dyn_ty})"),
        ),
        FieldKind::Entity { ty, .. } => (format!("Option<&{ty}>"), format!("self.{ident}.as_deref()")),
    };
    f.line(&format!("    pub fn {ident}(&self) -> {ret} {{"));
    f.line(&format!("        {body}"));
    f.line("    }");
    f.blank();

    f.lines("    ", &field.setter_annotations);
    let (param, assign) = match kind {
        _ if field.is_array => (format!("Vec<{element}>"), "value"),
        FieldKind::Entity { ty, .. } => (format!("Option<{ty}>"), "value.map(Box::new)"),
        FieldKind::Enum(ty) => (format!("Option<{ty}>"), "value"),
        FieldKind::Datatype { rust, .. } if field.is_nullable => (format!("Option<{rust}>"), "value"),
        FieldKind::Datatype { copy: false, .. } => ("impl Into<String>".to_string(), "value.into()"),
        FieldKind::Datatype { rust, .. } => ((*rust).to_string(), "value"),
    };
    f.line(&format!(
        "    pub fn set_{method}(&mut self, value: {param}) -> &mut Self {{"
    ));
    f.line(&format!("        self.{ident} = {assign};"));
    f.line("        self");
    f.line("    }");

    if field.is_array {
        f.blank();
        f.indented_doc_comment(&format!("Appends one value to `{ident}`."));
        f.line(&format!(
            "    pub fn add_{method}(&mut self, value: {element}) -> &mut Self {{"
        ));
        f.line(&format!("        self.{ident}.push(value);"));
        f.line("        self");
        f.line("    }");
    }
}
