//! Expression rendering.

use crate::ast::{BinaryOp, Expr};
use crate::transpiler::traits::SqlGenerator;
use crate::transpiler::types::render_type;

/// Render an expression node.
pub fn build_expr(expr: &Expr, generator: &dyn SqlGenerator) -> String {
    match expr {
        Expr::Star => "*".to_string(),
        Expr::Named(name) => generator.quote_identifier(name),
        Expr::Qualified { table, column } => format!(
            "{}.{}",
            generator.quote_identifier(table),
            generator.quote_identifier(column)
        ),
        Expr::Literal(lit) => generator.render_literal(lit),
        Expr::Param(n) => generator.placeholder(*n),
        Expr::Binary { left, op, right } => format!(
            "{} {} {}",
            operand(left, *op, generator),
            op,
            operand(right, *op, generator)
        ),
        Expr::Cast { expr, target_type } => {
            let type_sql = render_type(target_type);
            if type_sql.is_empty() {
                // Nothing to cast to: emit the operand on its own.
                build_grouped(expr, generator)
            } else {
                format!("CAST({} AS {})", build_expr(expr, generator), type_sql)
            }
        }
        Expr::Function { name, args } => {
            let args = args
                .iter()
                .map(|a| build_expr(a, generator))
                .collect::<Vec<_>>()
                .join(", ");
            format!("{}({})", name, args)
        }
        Expr::Builtin(func) => generator.builtin(*func).to_string(),
        Expr::Aliased { expr, alias } => format!(
            "{} AS {}",
            build_expr(expr, generator),
            generator.quote_identifier(alias)
        ),
    }
}

/// Render an expression as a self-contained group, parenthesising it when
/// it is compound.
pub fn build_grouped(expr: &Expr, generator: &dyn SqlGenerator) -> String {
    if expr.needs_grouping() {
        format!("({})", build_expr(expr, generator))
    } else {
        build_expr(expr, generator)
    }
}

/// Operands of a different operator are grouped so precedence survives.
fn operand(expr: &Expr, parent: BinaryOp, generator: &dyn SqlGenerator) -> String {
    match expr {
        Expr::Binary { op, .. } if *op != parent => format!("({})", build_expr(expr, generator)),
        _ => build_expr(expr, generator),
    }
}
