//! Vocabulary → Rust mapping tables.
//!
//! Deterministic mappings from vocabulary names and datatypes to Rust
//! identifiers and types.

pub use schemagen_vocab::local_name;

/// The datatype every enumeration-typed range is coerced to.
pub const TEXT: &str = "Text";

/// Maps a schema.org datatype name to the Rust type of a generated field.
pub fn datatype_to_rust(datatype: &str) -> Option<&'static str> {
    match datatype {
        "Text" | "URL" => Some("String"),
        "Boolean" => Some("bool"),
        "Integer" => Some("i64"),
        "Float" | "Number" => Some("f64"),
        "Date" | "DateTime" | "Time" => Some("String"), // ISO 8601 text
        "DataType" => Some("String"),
        _ => None,
    }
}

/// Returns true if the Rust type of `datatype` is `Copy`.
pub fn datatype_is_copy(datatype: &str) -> bool {
    matches!(datatype, "Boolean" | "Integer" | "Float" | "Number")
}

/// Converts a camelCase or PascalCase name into a snake_case Rust identifier.
pub fn to_snake_case(s: &str) -> String {
    let mut result = String::with_capacity(s.len() + 4);
    let mut prev: Option<char> = None;
    for ch in s.chars() {
        if ch.is_uppercase() {
            // No underscore inside an acronym run (e.g., "URL", "ISBN")
            if prev.is_some_and(|p| p.is_lowercase() || p.is_ascii_digit()) {
                result.push('_');
            }
            result.extend(ch.to_lowercase());
        } else if ch.is_alphanumeric() || ch == '_' {
            result.push(ch);
        } else {
            result.push('_');
        }
        prev = Some(ch);
    }
    // Handle Rust keywords
    match result.as_str() {
        "type" | "self" | "super" | "crate" | "mod" | "fn" | "pub" | "use" | "let" | "mut"
        | "ref" | "as" | "in" | "for" | "if" | "else" | "match" | "return" | "struct" | "enum"
        | "trait" | "impl" | "where" | "loop" | "while" | "break" | "continue" | "move" | "box"
        | "dyn" | "true" | "false" | "async" | "await" | "const" | "static" | "unsafe"
        | "extern" | "abstract" | "final" | "override" | "yield" => {
            result.push('_');
            result
        }
        _ => result,
    }
}

/// Converts an instance local name into an enumeration constant name.
///
/// Every uppercase letter starts a new word; a leading separator produced by
/// a capitalised first letter is dropped (`"EBook"` → `"E_BOOK"`).
pub fn to_constant_name(local: &str) -> String {
    let mut result = String::with_capacity(local.len() + 4);
    for ch in local.chars() {
        if ch.is_uppercase() {
            result.push('_');
        }
        if ch.is_alphanumeric() {
            result.extend(ch.to_uppercase());
        } else {
            result.push('_');
        }
    }
    match result.strip_prefix('_') {
        Some(stripped) => stripped.to_string(),
        None => result,
    }
}
