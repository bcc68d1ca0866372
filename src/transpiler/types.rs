//! CUBRID type compiler: [`TypeDescriptor`] to DDL type text.

use crate::types::{CollectionElement, TypeDescriptor, TypeKind};

/// Length used for VARCHAR / NCHAR VARYING when none is given.
pub const DEFAULT_VARCHAR_LENGTH: u32 = 4096;

/// Render a type descriptor as CUBRID type syntax.
///
/// Total over every kind; the unknown-type marker renders as an empty
/// string.
pub fn render_type(t: &TypeDescriptor) -> String {
    match t.kind {
        TypeKind::SmallInt | TypeKind::Boolean => "SMALLINT".to_string(),
        TypeKind::Integer => "INTEGER".to_string(),
        TypeKind::BigInt => "BIGINT".to_string(),
        TypeKind::Numeric | TypeKind::Decimal => numeric(t),
        TypeKind::Float => match t.precision() {
            Some(p) => format!("FLOAT({})", p),
            None => "FLOAT".to_string(),
        },
        TypeKind::Real => "REAL".to_string(),
        TypeKind::Double => "DOUBLE".to_string(),
        TypeKind::Monetary => "MONETARY".to_string(),
        TypeKind::Date => "DATE".to_string(),
        TypeKind::Time => "TIME".to_string(),
        TypeKind::Timestamp => "TIMESTAMP".to_string(),
        TypeKind::Datetime => "DATETIME".to_string(),
        TypeKind::Bit => bit(t),
        TypeKind::Char if t.national => nchar(t),
        TypeKind::Char => match t.length() {
            Some(len) => format!("CHAR({})", len),
            None => "CHAR".to_string(),
        },
        TypeKind::Varchar if t.national => nvarchar(t),
        TypeKind::Varchar => format!("VARCHAR({})", t.length().unwrap_or(DEFAULT_VARCHAR_LENGTH)),
        TypeKind::NChar => nchar(t),
        TypeKind::NVarchar => nvarchar(t),
        TypeKind::String => "STRING".to_string(),
        TypeKind::Blob => "BLOB".to_string(),
        TypeKind::Clob => "CLOB".to_string(),
        TypeKind::Object => "OBJECT".to_string(),
        TypeKind::Set | TypeKind::Multiset | TypeKind::Sequence => collection(t),
        TypeKind::Null => String::new(),
    }
}

fn numeric(t: &TypeDescriptor) -> String {
    let keyword = t.kind.visit_name();
    match (t.precision(), t.scale()) {
        (None, _) => keyword.to_string(),
        (Some(p), None) => format!("{}({})", keyword, p),
        (Some(p), Some(s)) => format!("{}({}, {})", keyword, p, s),
    }
}

fn bit(t: &TypeDescriptor) -> String {
    match (t.varying, t.length()) {
        (true, Some(len)) => format!("BIT VARYING({})", len),
        (true, None) => "BIT VARYING".to_string(),
        (false, Some(len)) => format!("BIT({})", len),
        (false, None) => "BIT".to_string(),
    }
}

fn nchar(t: &TypeDescriptor) -> String {
    match t.length() {
        Some(len) => format!("NCHAR({})", len),
        None => "NCHAR".to_string(),
    }
}

fn nvarchar(t: &TypeDescriptor) -> String {
    format!(
        "NCHAR VARYING({})",
        t.length().unwrap_or(DEFAULT_VARCHAR_LENGTH)
    )
}

fn collection(t: &TypeDescriptor) -> String {
    let keyword = t.kind.visit_name();
    if t.elements.is_empty() {
        return keyword.to_string();
    }
    let elements = t
        .elements
        .iter()
        .map(|e| match e {
            CollectionElement::Value(v) => v.clone(),
            CollectionElement::Type(kind) => kind.visit_name().to_string(),
        })
        .collect::<Vec<_>>()
        .join(",");
    format!("{}({})", keyword, elements)
}

#[cfg(test)]
mod tests {
    use super::*;
    use pretty_assertions::assert_eq;

    #[test]
    fn test_numeric_and_decimal() {
        assert_eq!(render_type(&TypeDescriptor::numeric(None, None)), "NUMERIC");
        assert_eq!(render_type(&TypeDescriptor::numeric(Some(10), None)), "NUMERIC(10)");
        assert_eq!(render_type(&TypeDescriptor::numeric(Some(10), Some(2))), "NUMERIC(10, 2)");
        assert_eq!(render_type(&TypeDescriptor::decimal(Some(38), Some(6))), "DECIMAL(38, 6)");
        assert_eq!(render_type(&TypeDescriptor::decimal(None, Some(2))), "DECIMAL");
    }

    #[test]
    fn test_float() {
        assert_eq!(render_type(&TypeDescriptor::float(Some(7))), "FLOAT(7)");
        assert_eq!(render_type(&TypeDescriptor::float(None)), "FLOAT");
    }

    #[test]
    fn test_bit() {
        assert_eq!(render_type(&TypeDescriptor::bit(None)), "BIT(1)");
        assert_eq!(render_type(&TypeDescriptor::bit(Some(8))), "BIT(8)");
        assert_eq!(render_type(&TypeDescriptor::bit_varying(Some(64))), "BIT VARYING(64)");
        assert_eq!(render_type(&TypeDescriptor::bit_varying(None)), "BIT VARYING");
    }

    #[test]
    fn test_character_types() {
        assert_eq!(render_type(&TypeDescriptor::varchar(Some(50))), "VARCHAR(50)");
        assert_eq!(render_type(&TypeDescriptor::varchar(None)), "VARCHAR(4096)");
        assert_eq!(render_type(&TypeDescriptor::char(Some(3))), "CHAR(3)");
        assert_eq!(render_type(&TypeDescriptor::char(None)), "CHAR");
        assert_eq!(render_type(&TypeDescriptor::nchar(Some(3))), "NCHAR(3)");
        assert_eq!(render_type(&TypeDescriptor::nchar(None)), "NCHAR");
        assert_eq!(render_type(&TypeDescriptor::nvarchar(Some(20))), "NCHAR VARYING(20)");
        assert_eq!(render_type(&TypeDescriptor::nvarchar(None)), "NCHAR VARYING(4096)");
    }

    #[test]
    fn test_national_flag_delegates() {
        let t = TypeDescriptor::varchar(Some(10)).with_national();
        assert_eq!(render_type(&t), "NCHAR VARYING(10)");
        let t = TypeDescriptor::char(Some(2)).with_national();
        assert_eq!(render_type(&t), "NCHAR(2)");
    }

    #[test]
    fn test_boolean_is_smallint() {
        assert_eq!(render_type(&TypeDescriptor::boolean()), "SMALLINT");
    }

    #[test]
    fn test_collections() {
        let t = TypeDescriptor::set([TypeKind::Integer, TypeKind::Varchar]);
        assert_eq!(render_type(&t), "SET(INTEGER,VARCHAR)");
        let t = TypeDescriptor::multiset(["'a'", "'b'"]);
        assert_eq!(render_type(&t), "MULTISET('a','b')");
        let t = TypeDescriptor::sequence([TypeKind::Date]);
        assert_eq!(render_type(&t), "SEQUENCE(DATE)");
    }

    #[test]
    fn test_large_objects_and_strings() {
        assert_eq!(render_type(&TypeDescriptor::string()), "STRING");
        assert_eq!(render_type(&TypeDescriptor::blob()), "BLOB");
        assert_eq!(render_type(&TypeDescriptor::clob()), "CLOB");
    }

    #[test]
    fn test_render_is_deterministic() {
        let t = TypeDescriptor::numeric(Some(12), Some(4));
        assert_eq!(render_type(&t), render_type(&t.clone()));
    }
}
