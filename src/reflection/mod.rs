//! Schema reflection.
//!
//! Reads CUBRID catalog metadata through a caller-supplied [`Connection`]
//! and normalises it into descriptors.
//!
//! # Example
//!
//! ```ignore
//! let mut inspector = Inspector::new(&mut conn);
//! for table in inspector.list_tables(None)? {
//!     let columns = inspector.get_columns(&table, None)?;
//!     println!("{}: {} columns", table, columns.len());
//! }
//! ```

pub mod catalog;
pub mod driver;
pub mod parse;

use std::any::Any;
use std::collections::HashMap;

use serde::Serialize;

use crate::error::DialectResult;
use crate::types::TypeDescriptor;

pub use driver::{CatalogValue, Connection, Cursor, Row, ScopedCursor, query};
pub use parse::ServerVersion;

/// A reflected column.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ColumnDescriptor {
    pub name: String,
    #[serde(rename = "type")]
    pub data_type: TypeDescriptor,
    pub nullable: bool,
    pub default: Option<String>,
    pub autoincrement: bool,
}

/// A reflected secondary index.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct IndexDescriptor {
    pub name: String,
    /// In catalog row order.
    pub column_names: Vec<String>,
    pub unique: bool,
    #[serde(rename = "type")]
    pub index_type: Option<String>,
}

/// A reflected primary key.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct PrimaryKey {
    pub name: Option<String>,
    pub columns: Vec<String>,
}

/// A reflected foreign key.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ForeignKeyDescriptor {
    pub name: Option<String>,
    pub columns: Vec<String>,
    pub referred_schema: Option<String>,
    pub referred_table: String,
    pub referred_columns: Vec<String>,
}

#[derive(Debug, Clone, PartialEq, Eq, Hash)]
struct CacheKey {
    op: &'static str,
    name: String,
    schema: Option<String>,
}

/// Memoising reflection front over one connection.
///
/// Results are cached per (operation, object name, schema) for the life of
/// the inspector; call [`Inspector::clear_cache`] to start a fresh pass.
pub struct Inspector<'c, C: Connection + ?Sized> {
    conn: &'c mut C,
    cache: HashMap<CacheKey, Box<dyn Any>>,
}

impl<'c, C: Connection + ?Sized> Inspector<'c, C> {
    pub fn new(conn: &'c mut C) -> Self {
        Self {
            conn,
            cache: HashMap::new(),
        }
    }

    pub fn clear_cache(&mut self) {
        self.cache.clear();
    }

    /// The wrapped connection, for statements outside reflection.
    pub fn connection(&mut self) -> &mut C {
        &mut *self.conn
    }

    fn cached<T, F>(
        &mut self,
        op: &'static str,
        name: &str,
        schema: Option<&str>,
        compute: F,
    ) -> DialectResult<T>
    where
        T: Clone + 'static,
        F: FnOnce(&mut C) -> DialectResult<T>,
    {
        let key = CacheKey {
            op,
            name: name.to_string(),
            schema: schema.map(str::to_string),
        };
        if let Some(hit) = self.cache.get(&key).and_then(|v| v.downcast_ref::<T>()) {
            tracing::debug!("Reflection cache hit: {} {}", op, name);
            return Ok(hit.clone());
        }
        let value = compute(&mut *self.conn)?;
        self.cache.insert(key, Box::new(value.clone()));
        Ok(value)
    }

    pub fn list_tables(&mut self, schema: Option<&str>) -> DialectResult<Vec<String>> {
        self.cached("tables", "", schema, |c| catalog::list_tables(c, schema))
    }

    pub fn list_views(&mut self, schema: Option<&str>) -> DialectResult<Vec<String>> {
        self.cached("views", "", schema, |c| catalog::list_views(c, schema))
    }

    pub fn get_view_definition(
        &mut self,
        view: &str,
        schema: Option<&str>,
    ) -> DialectResult<Option<String>> {
        self.cached("view_definition", view, schema, |c| {
            catalog::get_view_definition(c, view, schema)
        })
    }

    pub fn get_columns(
        &mut self,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<Vec<ColumnDescriptor>> {
        self.cached("columns", table, schema, |c| {
            catalog::get_columns(c, table, schema)
        })
    }

    pub fn get_pk_constraint(
        &mut self,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<PrimaryKey> {
        self.cached("pk_constraint", table, schema, |c| {
            catalog::get_pk_constraint(c, table, schema)
        })
    }

    pub fn get_foreign_keys(
        &mut self,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<Vec<ForeignKeyDescriptor>> {
        self.cached("foreign_keys", table, schema, |c| {
            catalog::get_foreign_keys(c, table, schema)
        })
    }

    pub fn get_indexes(
        &mut self,
        table: &str,
        schema: Option<&str>,
    ) -> DialectResult<Vec<IndexDescriptor>> {
        self.cached("indexes", table, schema, |c| {
            catalog::get_indexes(c, table, schema)
        })
    }

    // Existence checks always go to the catalog.
    pub fn has_table(&mut self, table: &str, schema: Option<&str>) -> DialectResult<bool> {
        catalog::has_table(&mut *self.conn, table, schema)
    }

    pub fn has_sequence(&mut self, sequence: &str) -> DialectResult<bool> {
        catalog::has_sequence(&mut *self.conn, sequence)
    }

    pub fn get_server_version(&mut self) -> DialectResult<Option<ServerVersion>> {
        self.cached("server_version", "", None, catalog::get_server_version)
    }

    pub fn get_default_schema(&mut self) -> DialectResult<Option<String>> {
        self.cached("default_schema", "", None, catalog::get_default_schema)
    }
}
