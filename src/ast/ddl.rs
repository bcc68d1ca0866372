//! Table, column and index definitions for DDL compilation.
//!
//! ```toml
//! name = "users"
//!
//! [[columns]]
//! name = "id"
//! type = { kind = "integer" }
//! primary_key = true
//!
//! [[columns]]
//! name = "email"
//! type = { kind = "varchar", length = 255 }
//! nullable = false
//! ```

use serde::{Deserialize, Serialize};

use crate::types::{TypeDescriptor, TypeKind};

/// How a column takes part in AUTO_INCREMENT designation.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum Autoincrement {
    /// Eligible when it is the table's only integer primary-key column.
    #[default]
    Auto,
    Always,
    Never,
}

/// A table definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Table {
    pub name: String,
    #[serde(default)]
    pub schema: Option<String>,
    #[serde(default)]
    pub columns: Vec<Column>,
    #[serde(default)]
    pub unique: Vec<Vec<String>>,
    #[serde(default)]
    pub foreign_keys: Vec<ForeignKey>,
    #[serde(default)]
    pub indexes: Vec<Index>,
}

/// A column definition.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Column {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: TypeDescriptor,
    #[serde(default = "default_nullable")]
    pub nullable: bool,
    #[serde(default)]
    pub primary_key: bool,
    /// Server-side default, rendered verbatim.
    #[serde(default)]
    pub default: Option<String>,
    #[serde(default)]
    pub autoincrement: Autoincrement,
}

fn default_nullable() -> bool {
    true
}

/// An index definition. Name and table are optional so that malformed
/// requests can be represented and rejected at compile time.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Index {
    #[serde(default)]
    pub name: Option<String>,
    #[serde(default)]
    pub table: Option<String>,
    /// Owner of the table.
    #[serde(default)]
    pub schema: Option<String>,
    pub columns: Vec<String>,
    #[serde(default)]
    pub unique: bool,
}

/// A foreign-key constraint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ForeignKey {
    #[serde(default)]
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub ref_table: String,
    pub ref_columns: Vec<String>,
    #[serde(default)]
    pub on_delete: Option<String>,
    #[serde(default)]
    pub on_update: Option<String>,
}

impl Table {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            schema: None,
            columns: Vec::new(),
            unique: Vec::new(),
            foreign_keys: Vec::new(),
            indexes: Vec::new(),
        }
    }

    pub fn column(mut self, col: Column) -> Self {
        self.columns.push(col);
        self
    }

    pub fn unique<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.unique.push(columns.into_iter().map(Into::into).collect());
        self
    }

    pub fn foreign_key(mut self, fk: ForeignKey) -> Self {
        self.foreign_keys.push(fk);
        self
    }

    pub fn primary_key_columns(&self) -> Vec<&Column> {
        self.columns.iter().filter(|c| c.primary_key).collect()
    }

    /// The column that receives AUTO_INCREMENT, if any.
    ///
    /// An `Always` column wins; otherwise the sole primary-key column
    /// qualifies when it is integer-typed and left on `Auto`.
    pub fn autoincrement_column(&self) -> Option<&Column> {
        if let Some(col) = self
            .columns
            .iter()
            .find(|c| c.autoincrement == Autoincrement::Always)
        {
            return Some(col);
        }
        match self.primary_key_columns().as_slice() {
            [only]
                if only.autoincrement == Autoincrement::Auto
                    && only.data_type.kind.is_integer() =>
            {
                Some(*only)
            }
            _ => None,
        }
    }
}

impl Column {
    pub fn new(name: impl Into<String>, data_type: TypeDescriptor) -> Self {
        Self {
            name: name.into(),
            data_type,
            nullable: true,
            primary_key: false,
            default: None,
            autoincrement: Autoincrement::Auto,
        }
    }

    pub fn not_null(mut self) -> Self {
        self.nullable = false;
        self
    }

    /// Mark as primary key; primary-key columns are NOT NULL.
    pub fn primary_key(mut self) -> Self {
        self.primary_key = true;
        self.nullable = false;
        self
    }

    pub fn default(mut self, value: impl Into<String>) -> Self {
        self.default = Some(value.into());
        self
    }

    pub fn autoincrement(mut self, mode: Autoincrement) -> Self {
        self.autoincrement = mode;
        self
    }

    pub fn is_timestamp(&self) -> bool {
        self.data_type.kind == TypeKind::Timestamp
    }
}

impl Index {
    pub fn new(name: impl Into<String>, table: impl Into<String>) -> Self {
        Self {
            name: Some(name.into()),
            table: Some(table.into()),
            schema: None,
            columns: Vec::new(),
            unique: false,
        }
    }

    pub fn schema(mut self, owner: impl Into<String>) -> Self {
        self.schema = Some(owner.into());
        self
    }

    pub fn columns<I, S>(mut self, columns: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns = columns.into_iter().map(Into::into).collect();
        self
    }

    pub fn unique(mut self) -> Self {
        self.unique = true;
        self
    }
}

impl ForeignKey {
    pub fn new<I, J, S>(columns: I, ref_table: impl Into<String>, ref_columns: J) -> Self
    where
        I: IntoIterator<Item = S>,
        J: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            name: None,
            columns: columns.into_iter().map(Into::into).collect(),
            ref_table: ref_table.into(),
            ref_columns: ref_columns.into_iter().map(Into::into).collect(),
            on_delete: None,
            on_update: None,
        }
    }

    pub fn name(mut self, name: impl Into<String>) -> Self {
        self.name = Some(name.into());
        self
    }

    pub fn on_delete(mut self, action: impl Into<String>) -> Self {
        self.on_delete = Some(action.into());
        self
    }

    pub fn on_update(mut self, action: impl Into<String>) -> Self {
        self.on_update = Some(action.into());
        self
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_single_integer_pk_is_autoincrement() {
        let table = Table::new("users")
            .column(Column::new("id", TypeDescriptor::integer()).primary_key())
            .column(Column::new("name", TypeDescriptor::varchar(Some(50))));
        assert_eq!(table.autoincrement_column().map(|c| c.name.as_str()), Some("id"));
    }

    #[test]
    fn test_composite_pk_has_no_autoincrement() {
        let table = Table::new("pairs")
            .column(Column::new("a", TypeDescriptor::integer()).primary_key())
            .column(Column::new("b", TypeDescriptor::integer()).primary_key());
        assert!(table.autoincrement_column().is_none());
    }

    #[test]
    fn test_string_pk_is_not_autoincrement() {
        let table = Table::new("codes")
            .column(Column::new("code", TypeDescriptor::varchar(Some(8))).primary_key());
        assert!(table.autoincrement_column().is_none());
    }

    #[test]
    fn test_explicit_always() {
        let table = Table::new("log")
            .column(Column::new("seq", TypeDescriptor::bigint()).autoincrement(Autoincrement::Always));
        assert_eq!(table.autoincrement_column().map(|c| c.name.as_str()), Some("seq"));
    }

    #[test]
    fn test_deserialize_from_toml() {
        let src = r#"
            name = "users"

            [[columns]]
            name = "id"
            type = { kind = "integer" }
            primary_key = true
            nullable = false

            [[columns]]
            name = "email"
            type = { kind = "varchar", length = 255 }
        "#;
        let table: Table = toml::from_str(src).unwrap();
        assert_eq!(table.columns.len(), 2);
        assert_eq!(table.columns[1].data_type.length(), Some(255));
        assert!(table.columns[1].nullable);
    }
}
