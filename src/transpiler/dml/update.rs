//! UPDATE SQL generation.

use crate::ast::*;
use crate::transpiler::dml::expr::build_expr;
use crate::transpiler::traits::SqlGenerator;

/// Generate UPDATE SQL.
pub fn build_update(update: &Update, generator: &dyn SqlGenerator) -> String {
    let mut sql = String::from("UPDATE ");
    sql.push_str(&generator.update_tables_clause(&update.tables));

    // SET clause
    if !update.assignments.is_empty() {
        let set_clauses: Vec<String> = update
            .assignments
            .iter()
            .map(|(col, value)| {
                format!(
                    "{} = {}",
                    generator.quote_identifier(col),
                    build_expr(value, generator)
                )
            })
            .collect();
        sql.push_str(" SET ");
        sql.push_str(&set_clauses.join(", "));
    }

    // FROM clause (multi-table update)
    if let Some(from) = generator.update_from_clause(&update.extra_from) {
        sql.push(' ');
        sql.push_str(&from);
    }

    // WHERE clause
    if let Some(filter) = &update.filter {
        sql.push_str(" WHERE ");
        sql.push_str(&build_expr(filter, generator));
    }

    if let Some(limit) = generator.update_limit_clause(update.cubrid_limit) {
        sql.push(' ');
        sql.push_str(&limit);
    }

    sql
}
