//! SQL Transpiler for the CUBRID dialect.
//!
//! Converts statement, expression and table definitions into CUBRID SQL
//! strings.

pub mod ddl;
pub mod dml;
pub mod identifier;
pub mod sql;
pub mod traits;
pub mod types;

#[cfg(test)]
mod tests;

use crate::ast::*;
pub use identifier::{format_table, quote_free_identifiers, quote_identifier, quote_if_needed};
pub use sql::cubrid::CubridGenerator;
pub use traits::SqlGenerator;
pub use types::render_type;

/// Trait for converting AST nodes to SQL.
pub trait ToSql {
    /// Convert this node to a SQL string using the CUBRID generator.
    fn to_sql(&self) -> String {
        self.to_sql_with(&CubridGenerator)
    }
    /// Convert this node to a SQL string with a specific generator.
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> String;
}

impl ToSql for Select {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> String {
        let sql = dml::select::build_select(self, generator);
        tracing::debug!("Compiled SELECT: {}", sql);
        sql
    }
}

impl ToSql for Update {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> String {
        let sql = dml::update::build_update(self, generator);
        tracing::debug!("Compiled UPDATE: {}", sql);
        sql
    }
}

impl ToSql for Expr {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> String {
        dml::expr::build_expr(self, generator)
    }
}

impl ToSql for Join {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> String {
        dml::select::build_join(self, generator)
    }
}

impl ToSql for Literal {
    fn to_sql_with(&self, generator: &dyn SqlGenerator) -> String {
        generator.render_literal(self)
    }
}
