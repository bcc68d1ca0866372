//! Catalog queries and row normalisation.
//!
//! Each function issues its catalog SQL through the caller's connection and
//! turns the rows into descriptors. Nothing here caches; see
//! [`super::Inspector`] for the memoising front.

use crate::ast::{Expr, Select};
use crate::error::DialectResult;
use crate::transpiler::{ToSql, format_table};
use crate::types::TypeDescriptor;

use super::driver::{Connection, Row, cell, query};
use super::parse::{ServerVersion, descriptor_from_type_text};
use super::{ColumnDescriptor, ForeignKeyDescriptor, IndexDescriptor, PrimaryKey};

// SHOW COLUMNS layout.
const COL_FIELD: usize = 0;
const COL_TYPE: usize = 1;
const COL_NULL: usize = 2;
const COL_KEY: usize = 3;
const COL_DEFAULT: usize = 4;
const COL_EXTRA: usize = 5;

// SHOW INDEXES layout.
const IDX_NON_UNIQUE: usize = 1;
const IDX_KEY_NAME: usize = 2;
const IDX_COLUMN_NAME: usize = 4;
const IDX_INDEX_TYPE: usize = 10;

fn class_query(class_type: &str, schema: Option<&str>) -> String {
    let mut select = Select::new()
        .columns(["class_name"])
        .from("db_class")
        .filter(Expr::col("is_system_class").eq(Expr::lit("NO")))
        .filter(Expr::col("class_type").eq(Expr::lit(class_type)));
    if let Some(owner) = schema {
        // Owner names are stored upper-cased.
        select = select.filter(Expr::col("owner_name").eq(Expr::lit(owner.to_uppercase())));
    }
    select.to_sql()
}

fn first_text_column<C: Connection + ?Sized>(conn: &mut C, sql: &str) -> DialectResult<Vec<String>> {
    Ok(query(conn, sql)?
        .iter()
        .filter_map(|row| cell(row, 0).to_text())
        .collect())
}

/// Names of user tables, in catalog order.
pub fn list_tables<C: Connection + ?Sized>(
    conn: &mut C,
    schema: Option<&str>,
) -> DialectResult<Vec<String>> {
    first_text_column(conn, &class_query("CLASS", schema))
}

/// Names of views, in catalog order.
pub fn list_views<C: Connection + ?Sized>(
    conn: &mut C,
    schema: Option<&str>,
) -> DialectResult<Vec<String>> {
    first_text_column(conn, &class_query("VCLASS", schema))
}

/// The definition text of a view, from the first row of `SHOW CREATE VIEW`.
pub fn get_view_definition<C: Connection + ?Sized>(
    conn: &mut C,
    view: &str,
    schema: Option<&str>,
) -> DialectResult<Option<String>> {
    let sql = format!("SHOW CREATE VIEW {}", format_table(view, schema));
    let rows = query(conn, &sql)?;
    Ok(rows.first().and_then(|row| {
        // (name, definition); a single-column result carries the text alone.
        if row.len() > 1 {
            cell(row, 1).to_text()
        } else {
            cell(row, 0).to_text()
        }
    }))
}

fn show_columns<C: Connection + ?Sized>(
    conn: &mut C,
    table: &str,
    schema: Option<&str>,
) -> DialectResult<Vec<Row>> {
    query(conn, &format!("SHOW COLUMNS IN {}", format_table(table, schema)))
}

fn column_from_row(table: &str, row: &Row) -> ColumnDescriptor {
    let name = cell(row, COL_FIELD).to_text().unwrap_or_default();
    let type_text = cell(row, COL_TYPE).to_text().unwrap_or_default();
    let data_type = match descriptor_from_type_text(&type_text) {
        Ok(Some(descriptor)) => descriptor,
        Ok(None) => {
            tracing::warn!(
                "Did not recognize type '{}' of column '{}.{}'",
                type_text,
                table,
                name
            );
            TypeDescriptor::null()
        }
        Err(e) => {
            tracing::warn!("Unreadable type of column '{}.{}': {}", table, name, e);
            TypeDescriptor::null()
        }
    };
    let flag = |idx: usize, expected: &str| {
        cell(row, idx)
            .as_str()
            .is_some_and(|v| v.eq_ignore_ascii_case(expected))
    };
    ColumnDescriptor {
        nullable: flag(COL_NULL, "YES"),
        default: cell(row, COL_DEFAULT).to_text(),
        autoincrement: flag(COL_EXTRA, "auto_increment"),
        name,
        data_type,
    }
}

/// Columns of `table` in declaration order. Unknown type names are
/// reported with a warning and typed as the null type.
pub fn get_columns<C: Connection + ?Sized>(
    conn: &mut C,
    table: &str,
    schema: Option<&str>,
) -> DialectResult<Vec<ColumnDescriptor>> {
    let rows = show_columns(conn, table, schema)?;
    Ok(rows.iter().map(|row| column_from_row(table, row)).collect())
}

/// Primary-key columns of `table` in row order.
pub fn get_pk_constraint<C: Connection + ?Sized>(
    conn: &mut C,
    table: &str,
    schema: Option<&str>,
) -> DialectResult<PrimaryKey> {
    let rows = show_columns(conn, table, schema)?;
    let columns = rows
        .iter()
        .filter(|row| cell(row, COL_KEY).as_str() == Some("PRI"))
        .filter_map(|row| cell(row, COL_FIELD).to_text())
        .collect();
    Ok(PrimaryKey {
        name: None,
        columns,
    })
}

/// Foreign keys are not read from the catalog; always empty.
pub fn get_foreign_keys<C: Connection + ?Sized>(
    _conn: &mut C,
    _table: &str,
    _schema: Option<&str>,
) -> DialectResult<Vec<ForeignKeyDescriptor>> {
    Ok(Vec::new())
}

/// Whether the named index backs a primary key.
fn is_primary_key_index<C: Connection + ?Sized>(
    conn: &mut C,
    table: &str,
    schema: Option<&str>,
    index: &str,
) -> DialectResult<bool> {
    let mut select = Select::new()
        .columns(["is_primary_key"])
        .from("db_index")
        .filter(Expr::col("class_name").eq(Expr::lit(table)))
        .filter(Expr::col("index_name").eq(Expr::lit(index)));
    if let Some(owner) = schema {
        select = select.filter(Expr::col("owner_name").eq(Expr::lit(owner.to_uppercase())));
    }
    let rows = query(conn, &select.to_sql())?;
    Ok(rows
        .first()
        .and_then(|row| cell(row, 0).as_str())
        .is_some_and(|v| v.eq_ignore_ascii_case("YES")))
}

/// Secondary indexes of `table`. Rows sharing an index name collapse into
/// one descriptor in row order; primary-key indexes are left out.
pub fn get_indexes<C: Connection + ?Sized>(
    conn: &mut C,
    table: &str,
    schema: Option<&str>,
) -> DialectResult<Vec<IndexDescriptor>> {
    let rows = query(
        conn,
        &format!("SHOW INDEXES IN {}", format_table(table, schema)),
    )?;

    let mut indexes: Vec<IndexDescriptor> = Vec::new();
    for row in &rows {
        let Some(name) = cell(row, IDX_KEY_NAME).to_text() else {
            continue;
        };
        let column = cell(row, IDX_COLUMN_NAME).to_text().unwrap_or_default();
        match indexes.iter_mut().find(|idx| idx.name == name) {
            Some(existing) => existing.column_names.push(column),
            None => indexes.push(IndexDescriptor {
                name,
                column_names: vec![column],
                unique: cell(row, IDX_NON_UNIQUE).as_i64() == Some(0),
                index_type: cell(row, IDX_INDEX_TYPE).to_text(),
            }),
        }
    }

    let mut result = Vec::with_capacity(indexes.len());
    for index in indexes {
        if !is_primary_key_index(conn, table, schema, &index.name)? {
            result.push(index);
        }
    }
    Ok(result)
}

/// Whether a user table of that exact name exists.
pub fn has_table<C: Connection + ?Sized>(
    conn: &mut C,
    table: &str,
    schema: Option<&str>,
) -> DialectResult<bool> {
    let mut select = Select::new()
        .columns(["class_name"])
        .from("db_class")
        .filter(Expr::col("class_name").eq(Expr::lit(table)));
    if let Some(owner) = schema {
        select = select.filter(Expr::col("owner_name").eq(Expr::lit(owner.to_uppercase())));
    }
    Ok(!query(conn, &select.to_sql())?.is_empty())
}

/// Whether a serial (sequence) of that exact name exists.
pub fn has_sequence<C: Connection + ?Sized>(conn: &mut C, sequence: &str) -> DialectResult<bool> {
    let sql = Select::new()
        .columns(["name"])
        .from("db_serial")
        .filter(Expr::col("name").eq(Expr::lit(sequence)))
        .to_sql();
    Ok(!query(conn, &sql)?.is_empty())
}

/// The server version, or `None` when the reported text has no
/// four-part version in it.
pub fn get_server_version<C: Connection + ?Sized>(
    conn: &mut C,
) -> DialectResult<Option<ServerVersion>> {
    let sql = Select::new().column(Expr::func("VERSION", vec![])).to_sql();
    let rows = query(conn, &sql)?;
    Ok(rows
        .first()
        .and_then(|row| cell(row, 0).to_text())
        .and_then(|text| ServerVersion::parse(&text)))
}

/// The session's current schema name.
pub fn get_default_schema<C: Connection + ?Sized>(conn: &mut C) -> DialectResult<Option<String>> {
    let sql = Select::new().column(Expr::func("SCHEMA", vec![])).to_sql();
    let rows = query(conn, &sql)?;
    Ok(rows.first().and_then(|row| cell(row, 0).to_text()))
}
