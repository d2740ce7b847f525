//! Name resolution: packages, qualified identifiers, quoted symbols.

use tidl_types::ast::{ProgramInfo, Service, StructDef};

use super::{DEFAULT_PACKAGE, LANGUAGE};

/// The Lisp package a program's declarations live in.
pub fn package_of(program: &ProgramInfo) -> &str {
    program.namespace(LANGUAGE).unwrap_or(DEFAULT_PACKAGE)
}

/// The identifier for `name`, declared in `owner`, as seen from `current`.
///
/// Declarations from another program are prefixed with `<package>:` unless
/// both programs share a package. A missing owner counts as local.
pub fn qualify(name: &str, owner: Option<&ProgramInfo>, current: &ProgramInfo) -> String {
    match owner {
        Some(owner) if owner.name != current.name => {
            let package = package_of(owner);
            if package == package_of(current) {
                name.to_string()
            } else {
                format!("{package}:{name}")
            }
        }
        _ => name.to_string(),
    }
}

/// Struct and exception identifiers are lower-cased.
pub fn record_name(def: &StructDef, current: &ProgramInfo) -> String {
    qualify(&def.name.to_lowercase(), def.program.as_deref(), current)
}

pub fn service_name(def: &Service, current: &ProgramInfo) -> String {
    qualify(&def.name, def.program.as_deref(), current)
}

/// Declared names are emitted as string designators.
pub fn symbol(name: &str) -> String {
    format!("\"{name}\"")
}

/// Documentation text made safe to embed in a string literal.
///
/// Double quotes become single quotes and backslashes are doubled.
pub fn docstring(raw: &str) -> String {
    raw.replace('\\', "\\\\").replace('"', "'")
}
