//! SELECT SQL generation.

use crate::ast::*;
use crate::transpiler::dml::expr::build_expr;
use crate::transpiler::traits::SqlGenerator;

/// Generate SELECT SQL.
pub fn build_select(select: &Select, generator: &dyn SqlGenerator) -> String {
    let mut sql = String::from("SELECT ");
    sql.push_str(&generator.select_modifier(select.distinct));

    // Columns
    if select.columns.is_empty() {
        sql.push('*');
    } else {
        let cols: Vec<String> = select
            .columns
            .iter()
            .map(|c| build_expr(c, generator))
            .collect();
        sql.push_str(&cols.join(", "));
    }

    // FROM
    if !select.from.is_empty() {
        let froms: Vec<String> = select
            .from
            .iter()
            .map(|f| build_from_item(f, generator))
            .collect();
        sql.push_str(" \nFROM ");
        sql.push_str(&froms.join(", "));
    }

    // WHERE
    if let Some(filter) = &select.filter {
        sql.push_str(" \nWHERE ");
        sql.push_str(&build_expr(filter, generator));
    }

    // ORDER BY
    if !select.order_by.is_empty() {
        let order: Vec<String> = select
            .order_by
            .iter()
            .map(|(expr, dir)| {
                let dir = match dir {
                    SortOrder::Asc => "ASC",
                    SortOrder::Desc => "DESC",
                };
                format!("{} {}", build_expr(expr, generator), dir)
            })
            .collect();
        sql.push_str(" ORDER BY ");
        sql.push_str(&order.join(", "));
    }

    sql.push_str(&generator.limit_offset(select.limit, select.offset));
    sql.push_str(&generator.for_update_clause(select.for_update));

    sql
}

/// Generate a FROM item: a table reference or a join tree.
pub fn build_from_item(item: &FromItem, generator: &dyn SqlGenerator) -> String {
    match item {
        FromItem::Table(t) => generator.table_ref(t),
        FromItem::Join(join) => build_join(join, generator),
    }
}

/// Generate `<left> <JOIN> <right> ON <condition>`.
pub fn build_join(join: &Join, generator: &dyn SqlGenerator) -> String {
    let mut sql = build_from_item(&join.left, generator);
    sql.push_str(generator.join_keyword(join.outer));
    sql.push_str(&build_from_item(&join.right, generator));
    sql.push_str(" ON ");
    sql.push_str(&build_expr(&join.on, generator));
    sql
}
