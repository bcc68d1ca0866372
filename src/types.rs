//! CUBRID type registry.
//!
//! A [`TypeDescriptor`] is a closed kind tag plus the attribute bag the
//! vendor syntax needs (precision, scale, length, varying, national,
//! collection elements). Rendering lives in [`crate::transpiler::types`].

use std::fmt;
use std::num::NonZeroU32;

use serde::{Deserialize, Serialize};

/// Kind tag of a CUBRID type.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum TypeKind {
    SmallInt,
    Integer,
    BigInt,
    Numeric,
    Decimal,
    Float,
    Real,
    Double,
    Monetary,
    Date,
    Time,
    Timestamp,
    Datetime,
    Boolean,
    Bit,
    Char,
    Varchar,
    NChar,
    NVarchar,
    String,
    Blob,
    Clob,
    Object,
    Set,
    Multiset,
    Sequence,
    /// Unknown catalog type; produced only by reflection.
    Null,
}

impl TypeKind {
    /// The visit-name keyword of this kind.
    pub const fn visit_name(&self) -> &'static str {
        match self {
            Self::SmallInt => "SMALLINT",
            Self::Integer => "INTEGER",
            Self::BigInt => "BIGINT",
            Self::Numeric => "NUMERIC",
            Self::Decimal => "DECIMAL",
            Self::Float => "FLOAT",
            Self::Real => "REAL",
            Self::Double => "DOUBLE",
            Self::Monetary => "MONETARY",
            Self::Date => "DATE",
            Self::Time => "TIME",
            Self::Timestamp => "TIMESTAMP",
            Self::Datetime => "DATETIME",
            Self::Boolean => "BOOLEAN",
            Self::Bit => "BIT",
            Self::Char => "CHAR",
            Self::Varchar => "VARCHAR",
            Self::NChar => "NCHAR",
            Self::NVarchar => "NVARCHAR",
            Self::String => "STRING",
            Self::Blob => "BLOB",
            Self::Clob => "CLOB",
            Self::Object => "OBJECT",
            Self::Set => "SET",
            Self::Multiset => "MULTISET",
            Self::Sequence => "SEQUENCE",
            Self::Null => "NULL",
        }
    }

    pub const fn is_integer(&self) -> bool {
        matches!(self, Self::SmallInt | Self::Integer | Self::BigInt)
    }

    /// Look up a type name as printed by the catalog (`SHOW COLUMNS`).
    ///
    /// Matching is case-insensitive and ignores the parenthesised suffix,
    /// which the caller must strip first.
    pub fn from_catalog_name(name: &str) -> Option<Self> {
        let upper = name.trim().to_ascii_uppercase();
        let kind = match upper.as_str() {
            "SHORT" | "SMALLINT" => Self::SmallInt,
            "INT" | "INTEGER" => Self::Integer,
            "BIGINT" => Self::BigInt,
            "NUMERIC" => Self::Numeric,
            "DEC" | "DECIMAL" => Self::Decimal,
            "FLOAT" => Self::Float,
            "REAL" => Self::Real,
            "DOUBLE" | "DOUBLE PRECISION" => Self::Double,
            "MONETARY" => Self::Monetary,
            "DATE" => Self::Date,
            "TIME" => Self::Time,
            "TIMESTAMP" => Self::Timestamp,
            "DATETIME" => Self::Datetime,
            "BIT" | "BIT VARYING" => Self::Bit,
            "CHAR" | "CHARACTER" => Self::Char,
            "VARCHAR" | "CHAR VARYING" | "CHARACTER VARYING" => Self::Varchar,
            "NCHAR" | "NATIONAL CHARACTER" => Self::NChar,
            "NCHAR VARYING" | "NATIONAL CHARACTER VARYING" => Self::NVarchar,
            "STRING" => Self::String,
            "BLOB" => Self::Blob,
            "CLOB" => Self::Clob,
            "OBJECT" => Self::Object,
            "SET" | "SET_OF" => Self::Set,
            "MULTISET" | "MULTISET_OF" => Self::Multiset,
            "SEQUENCE" | "SEQUENCE_OF" | "LIST" => Self::Sequence,
            _ => return None,
        };
        Some(kind)
    }
}

impl fmt::Display for TypeKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.visit_name())
    }
}

/// Abstract types without a CUBRID counterpart of their own.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum GenericType {
    Text,
    UnicodeText,
    LargeBinary,
    Boolean,
}

/// One element of a collection type's DDL list.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum CollectionElement {
    /// Rendered verbatim.
    Value(String),
    /// Rendered as the element type's visit-name keyword.
    Type(TypeKind),
}

impl From<TypeKind> for CollectionElement {
    fn from(kind: TypeKind) -> Self {
        CollectionElement::Type(kind)
    }
}

impl From<&str> for CollectionElement {
    fn from(s: &str) -> Self {
        CollectionElement::Value(s.to_string())
    }
}

/// A CUBRID type with its rendering attributes.
///
/// Precision, scale and length are either unset (vendor default applies)
/// or positive; the constructors map zero to unset.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TypeDescriptor {
    pub kind: TypeKind,
    #[serde(default)]
    pub precision: Option<NonZeroU32>,
    #[serde(default)]
    pub scale: Option<NonZeroU32>,
    #[serde(default)]
    pub length: Option<NonZeroU32>,
    #[serde(default)]
    pub varying: bool,
    #[serde(default)]
    pub national: bool,
    #[serde(default)]
    pub elements: Vec<CollectionElement>,
}

fn positive(n: Option<u32>) -> Option<NonZeroU32> {
    n.and_then(NonZeroU32::new)
}

impl TypeDescriptor {
    /// A bare descriptor of the given kind with every attribute unset.
    pub fn new(kind: TypeKind) -> Self {
        Self {
            kind,
            precision: None,
            scale: None,
            length: None,
            varying: false,
            national: false,
            elements: Vec::new(),
        }
    }

    pub fn smallint() -> Self {
        Self::new(TypeKind::SmallInt)
    }

    pub fn integer() -> Self {
        Self::new(TypeKind::Integer)
    }

    pub fn bigint() -> Self {
        Self::new(TypeKind::BigInt)
    }

    pub fn numeric(precision: Option<u32>, scale: Option<u32>) -> Self {
        Self {
            precision: positive(precision),
            scale: positive(scale),
            ..Self::new(TypeKind::Numeric)
        }
    }

    pub fn decimal(precision: Option<u32>, scale: Option<u32>) -> Self {
        Self {
            precision: positive(precision),
            scale: positive(scale),
            ..Self::new(TypeKind::Decimal)
        }
    }

    pub fn float(precision: Option<u32>) -> Self {
        Self {
            precision: positive(precision),
            ..Self::new(TypeKind::Float)
        }
    }

    pub fn real() -> Self {
        Self::new(TypeKind::Real)
    }

    pub fn double() -> Self {
        Self::new(TypeKind::Double)
    }

    pub fn monetary() -> Self {
        Self::new(TypeKind::Monetary)
    }

    pub fn date() -> Self {
        Self::new(TypeKind::Date)
    }

    pub fn time() -> Self {
        Self::new(TypeKind::Time)
    }

    pub fn timestamp() -> Self {
        Self::new(TypeKind::Timestamp)
    }

    pub fn datetime() -> Self {
        Self::new(TypeKind::Datetime)
    }

    pub fn boolean() -> Self {
        Self::new(TypeKind::Boolean)
    }

    /// Fixed-width BIT. An unset length defaults to 1.
    pub fn bit(length: Option<u32>) -> Self {
        Self {
            length: positive(length).or(NonZeroU32::new(1)),
            ..Self::new(TypeKind::Bit)
        }
    }

    /// BIT VARYING; an unset length stays unset.
    pub fn bit_varying(length: Option<u32>) -> Self {
        Self {
            length: positive(length),
            varying: true,
            ..Self::new(TypeKind::Bit)
        }
    }

    pub fn char(length: Option<u32>) -> Self {
        Self {
            length: positive(length),
            ..Self::new(TypeKind::Char)
        }
    }

    pub fn varchar(length: Option<u32>) -> Self {
        Self {
            length: positive(length),
            ..Self::new(TypeKind::Varchar)
        }
    }

    pub fn nchar(length: Option<u32>) -> Self {
        Self {
            length: positive(length),
            national: true,
            ..Self::new(TypeKind::NChar)
        }
    }

    pub fn nvarchar(length: Option<u32>) -> Self {
        Self {
            length: positive(length),
            national: true,
            ..Self::new(TypeKind::NVarchar)
        }
    }

    pub fn string() -> Self {
        Self::new(TypeKind::String)
    }

    pub fn blob() -> Self {
        Self::new(TypeKind::Blob)
    }

    pub fn clob() -> Self {
        Self::new(TypeKind::Clob)
    }

    pub fn object() -> Self {
        Self::new(TypeKind::Object)
    }

    pub fn set<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<CollectionElement>,
    {
        Self::collection(TypeKind::Set, elements)
    }

    pub fn multiset<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<CollectionElement>,
    {
        Self::collection(TypeKind::Multiset, elements)
    }

    pub fn sequence<I, E>(elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<CollectionElement>,
    {
        Self::collection(TypeKind::Sequence, elements)
    }

    fn collection<I, E>(kind: TypeKind, elements: I) -> Self
    where
        I: IntoIterator<Item = E>,
        E: Into<CollectionElement>,
    {
        Self {
            elements: elements.into_iter().map(Into::into).collect(),
            ..Self::new(kind)
        }
    }

    /// The unknown-type marker used when reflection meets a foreign name.
    pub fn null() -> Self {
        Self::new(TypeKind::Null)
    }

    /// Map an abstract type onto its CUBRID storage type.
    pub fn from_generic(generic: GenericType) -> Self {
        match generic {
            GenericType::Text | GenericType::UnicodeText => Self::string(),
            GenericType::LargeBinary => Self::blob(),
            GenericType::Boolean => Self::boolean(),
        }
    }

    /// Route a CHAR/VARCHAR through the national-character rendering path.
    pub fn with_national(mut self) -> Self {
        self.national = true;
        self
    }

    pub fn length(&self) -> Option<u32> {
        self.length.map(NonZeroU32::get)
    }

    pub fn precision(&self) -> Option<u32> {
        self.precision.map(NonZeroU32::get)
    }

    pub fn scale(&self) -> Option<u32> {
        self.scale.map(NonZeroU32::get)
    }
}

impl From<TypeKind> for TypeDescriptor {
    fn from(kind: TypeKind) -> Self {
        match kind {
            TypeKind::Bit => Self::bit(None),
            TypeKind::NChar => Self::nchar(None),
            TypeKind::NVarchar => Self::nvarchar(None),
            other => Self::new(other),
        }
    }
}
