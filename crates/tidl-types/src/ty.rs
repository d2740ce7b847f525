//! The IDL type tree.
//!
//! [`Type`] is what fields, constants, arguments and return values are
//! declared with. User-defined types point at their shared declaration
//! node; containers own their element types.

use std::fmt;
use std::sync::Arc;

use serde::{Deserialize, Serialize};

use crate::ast::{EnumDef, StructDef, Typedef};

// ══════════════════════════════════════════════════════════════════════════════
// Base Types
// ══════════════════════════════════════════════════════════════════════════════

/// A built-in scalar type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum BaseType {
    /// Only valid as a function return type.
    Void,
    Bool,
    Byte,
    I16,
    I32,
    I64,
    Double,
    String,
}

impl BaseType {
    /// The IDL keyword for this base type.
    pub fn name(self) -> &'static str {
        match self {
            Self::Void => "void",
            Self::Bool => "bool",
            Self::Byte => "byte",
            Self::I16 => "i16",
            Self::I32 => "i32",
            Self::I64 => "i64",
            Self::Double => "double",
            Self::String => "string",
        }
    }

    /// Returns true for the integral kinds (`byte`, `i16`, `i32`, `i64`).
    pub fn is_integral(self) -> bool {
        matches!(self, Self::Byte | Self::I16 | Self::I32 | Self::I64)
    }
}

impl fmt::Display for BaseType {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Type
// ══════════════════════════════════════════════════════════════════════════════

/// A declared IDL type.
///
/// Typedef chains always end in a non-typedef type: nodes are immutable
/// and shared through [`Arc`], so a cycle cannot be built.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
#[non_exhaustive]
pub enum Type {
    Base(BaseType),
    Enum(Arc<EnumDef>),
    Struct(Arc<StructDef>),
    Exception(Arc<StructDef>),
    List(Box<Type>),
    Set(Box<Type>),
    Map(Box<Type>, Box<Type>),
    Typedef(Arc<Typedef>),
}

impl Type {
    /// `list<elem>`
    pub fn list(elem: impl Into<Type>) -> Self {
        Type::List(Box::new(elem.into()))
    }

    /// `set<elem>`
    pub fn set(elem: impl Into<Type>) -> Self {
        Type::Set(Box::new(elem.into()))
    }

    /// `map<key, val>`
    pub fn map(key: impl Into<Type>, val: impl Into<Type>) -> Self {
        Type::Map(Box::new(key.into()), Box::new(val.into()))
    }

    /// Follow typedefs until the first non-typedef type.
    pub fn true_type(&self) -> &Type {
        let mut ty = self;
        while let Type::Typedef(def) = ty {
            ty = &def.target;
        }
        ty
    }
}

impl From<BaseType> for Type {
    fn from(base: BaseType) -> Self {
        Type::Base(base)
    }
}

// ══════════════════════════════════════════════════════════════════════════════
// Display
// ══════════════════════════════════════════════════════════════════════════════

impl fmt::Display for Type {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Type::Base(base) => write!(f, "{base}"),
            Type::Enum(def) => write!(f, "enum {}", def.name),
            Type::Struct(def) => write!(f, "struct {}", def.name),
            Type::Exception(def) => write!(f, "exception {}", def.name),
            Type::List(elem) => write!(f, "list<{elem}>"),
            Type::Set(elem) => write!(f, "set<{elem}>"),
            Type::Map(key, val) => write!(f, "map<{key}, {val}>"),
            Type::Typedef(def) => write!(f, "{}", def.name),
        }
    }
}
