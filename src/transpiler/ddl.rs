//! CUBRID DDL generation: tables, columns, indexes and foreign keys.

use crate::ast::*;
use crate::error::{DialectError, DialectResult};
use crate::transpiler::identifier::format_table;
use crate::transpiler::traits::SqlGenerator;
use crate::transpiler::types::render_type;

/// Action used for ON DELETE / ON UPDATE when none is given.
pub const DEFAULT_REFERENTIAL_ACTION: &str = "RESTRICT";

/// Generate a column specification:
/// `<name> <type> [DEFAULT d] [NOT NULL | NULL] [AUTO_INCREMENT]`.
pub fn build_column_spec(
    table: &Table,
    col: &Column,
    generator: &dyn SqlGenerator,
) -> DialectResult<String> {
    let type_sql = render_type(&col.data_type);
    if type_sql.is_empty() {
        return Err(DialectError::compile(format!(
            "Can't generate DDL for column '{}' of unknown type",
            col.name
        )));
    }

    let mut line = format!("{} {}", generator.quote_identifier(&col.name), type_sql);

    if let Some(default) = &col.default {
        line.push_str(" DEFAULT ");
        line.push_str(default);
    }

    // Primary-key columns are never nullable. A nullable TIMESTAMP without
    // a default needs an explicit NULL.
    if !col.nullable || col.primary_key {
        line.push_str(" NOT NULL");
    } else if col.is_timestamp() && col.default.is_none() {
        line.push_str(" NULL");
    }

    let is_autoincrement = table
        .autoincrement_column()
        .is_some_and(|auto| auto.name == col.name);
    if is_autoincrement && col.default.is_none() {
        line.push_str(" AUTO_INCREMENT");
    }

    Ok(line)
}

/// Generate CREATE TABLE SQL.
pub fn build_create_table(table: &Table, generator: &dyn SqlGenerator) -> DialectResult<String> {
    if table.columns.is_empty() {
        return Err(DialectError::compile(format!(
            "CREATE TABLE '{}' requires at least one column",
            table.name
        )));
    }

    let mut defs = Vec::new();
    for col in &table.columns {
        defs.push(format!("    {}", build_column_spec(table, col, generator)?));
    }

    let pk = table.primary_key_columns();
    if !pk.is_empty() {
        let col_list = pk
            .iter()
            .map(|c| generator.quote_identifier(&c.name))
            .collect::<Vec<_>>()
            .join(", ");
        defs.push(format!("    PRIMARY KEY ({})", col_list));
    }

    for cols in &table.unique {
        defs.push(format!("    UNIQUE ({})", column_list(cols, generator)));
    }

    for fk in &table.foreign_keys {
        defs.push(format!("    {}", build_foreign_key(fk, generator)));
    }

    let sql = format!(
        "CREATE TABLE {} (\n{}\n)",
        format_table(&table.name, table.schema.as_deref()),
        defs.join(",\n")
    );
    tracing::debug!("Compiled CREATE TABLE for '{}'", table.name);
    Ok(sql)
}

/// Generate DROP TABLE SQL.
pub fn build_drop_table(name: &str, schema: Option<&str>) -> String {
    format!("DROP TABLE {}", format_table(name, schema))
}

/// Generate CREATE INDEX SQL.
///
/// The index must belong to a table and must be named: CUBRID has no
/// generated index names.
pub fn build_create_index(index: &Index, generator: &dyn SqlGenerator) -> DialectResult<String> {
    let Some(table) = index.table.as_deref() else {
        return Err(DialectError::compile(format!(
            "Index '{}' is not associated with any table",
            index.name.as_deref().unwrap_or("<unnamed>")
        )));
    };
    let name = required_index_name(index, "CREATE INDEX")?;
    if index.columns.is_empty() {
        return Err(DialectError::compile(format!(
            "CREATE INDEX '{}' requires at least one column",
            name
        )));
    }

    let unique = if index.unique { "UNIQUE " } else { "" };
    let sql = format!(
        "CREATE {}INDEX {} ON {} ({})",
        unique,
        generator.quote_identifier(name),
        format_table(table, index.schema.as_deref()),
        column_list(&index.columns, generator)
    );
    tracing::debug!("Compiled CREATE INDEX '{}' on '{}'", name, table);
    Ok(sql)
}

/// Generate DROP INDEX SQL. The ON clause is only emitted when the owning
/// table is known.
pub fn build_drop_index(index: &Index, generator: &dyn SqlGenerator) -> DialectResult<String> {
    let name = required_index_name(index, "DROP INDEX")?;
    let unique = if index.unique { "UNIQUE " } else { "" };
    let mut sql = format!("DROP {}INDEX {}", unique, generator.quote_identifier(name));
    if let Some(table) = &index.table {
        sql.push_str(" ON ");
        sql.push_str(&format_table(table, index.schema.as_deref()));
    }
    Ok(sql)
}

/// Generate a FOREIGN KEY table constraint with its cascade clause.
pub fn build_foreign_key(fk: &ForeignKey, generator: &dyn SqlGenerator) -> String {
    let mut sql = String::new();
    if let Some(name) = &fk.name {
        sql.push_str("CONSTRAINT ");
        sql.push_str(&generator.quote_identifier(name));
        sql.push(' ');
    }
    sql.push_str(&format!(
        "FOREIGN KEY ({}) REFERENCES {} ({})",
        column_list(&fk.columns, generator),
        generator.quote_identifier(&fk.ref_table),
        column_list(&fk.ref_columns, generator)
    ));
    sql.push_str(&build_cascade_clause(fk));
    sql
}

/// ` ON DELETE <action> ON UPDATE <action>`, each defaulting to RESTRICT.
pub fn build_cascade_clause(fk: &ForeignKey) -> String {
    format!(
        " ON DELETE {} ON UPDATE {}",
        fk.on_delete.as_deref().unwrap_or(DEFAULT_REFERENTIAL_ACTION),
        fk.on_update.as_deref().unwrap_or(DEFAULT_REFERENTIAL_ACTION)
    )
}

fn required_index_name<'a>(index: &'a Index, statement: &str) -> DialectResult<&'a str> {
    match index.name.as_deref() {
        Some(name) if !name.is_empty() => Ok(name),
        _ => Err(DialectError::compile(format!(
            "{} requires that the index have a name",
            statement
        ))),
    }
}

fn column_list(cols: &[String], generator: &dyn SqlGenerator) -> String {
    cols.iter()
        .map(|c| generator.quote_identifier(c))
        .collect::<Vec<_>>()
        .join(", ")
}
