//! Generic SQL rendering hooks.
//!
//! The default method bodies are the dialect-neutral renderings; a dialect
//! generator overrides the ones where its grammar differs.

use crate::ast::{Builtin, Literal, TableRef};
use crate::transpiler::identifier;

/// Trait for dialect-specific SQL generation.
pub trait SqlGenerator {
    /// Quote an identifier (table or column name) when required.
    fn quote_identifier(&self, name: &str) -> String {
        identifier::quote_if_needed(name)
    }

    /// Generate the parameter placeholder for a given 1-based index.
    fn placeholder(&self, _index: usize) -> String {
        "?".to_string()
    }

    /// Get the boolean literal.
    fn bool_literal(&self, val: bool) -> String {
        if val {
            "true".to_string()
        } else {
            "false".to_string()
        }
    }

    /// The LIMIT/OFFSET suffix of a SELECT, including its leading separator.
    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        let mut sql = String::new();
        if let Some(n) = limit {
            sql.push_str(&format!(" \n LIMIT {}", n));
        }
        if let Some(n) = offset {
            sql.push_str(&format!(" OFFSET {}", n));
        }
        sql
    }

    /// Modifier placed between SELECT and the column list.
    fn select_modifier(&self, distinct: bool) -> String {
        if distinct {
            "DISTINCT ".to_string()
        } else {
            String::new()
        }
    }

    /// Row-locking suffix of a SELECT.
    fn for_update_clause(&self, for_update: bool) -> String {
        if for_update {
            " FOR UPDATE".to_string()
        } else {
            String::new()
        }
    }

    /// The join keyword including surrounding spaces.
    fn join_keyword(&self, outer: bool) -> &'static str {
        if outer { " LEFT OUTER JOIN " } else { " JOIN " }
    }

    /// Render a literal inline.
    fn render_literal(&self, lit: &Literal) -> String {
        generic_literal(self, lit)
    }

    /// Keyword for a niladic builtin function.
    fn builtin(&self, func: Builtin) -> &'static str {
        match func {
            Builtin::SysDate | Builtin::CurrentDate => "CURRENT_DATE",
            Builtin::SysTime | Builtin::CurrentTime => "CURRENT_TIME",
            Builtin::SysDatetime | Builtin::CurrentDatetime => "CURRENT_TIMESTAMP",
            Builtin::SysTimestamp | Builtin::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Builtin::LocalTimestamp => "LOCALTIMESTAMP",
            Builtin::CurrentUser => "CURRENT_USER",
        }
    }

    /// Target table list of an UPDATE.
    fn update_tables_clause(&self, tables: &[TableRef]) -> String {
        tables
            .iter()
            .map(|t| self.table_ref(t))
            .collect::<Vec<_>>()
            .join(", ")
    }

    /// FROM portion of a multi-table UPDATE.
    fn update_from_clause(&self, extra_from: &[TableRef]) -> Option<String> {
        if extra_from.is_empty() {
            return None;
        }
        Some(format!(
            "FROM {}",
            extra_from
                .iter()
                .map(|t| self.table_ref(t))
                .collect::<Vec<_>>()
                .join(", ")
        ))
    }

    /// Per-statement row limit of an UPDATE.
    fn update_limit_clause(&self, _limit: Option<u64>) -> Option<String> {
        None
    }

    /// A table reference with its alias.
    fn table_ref(&self, table: &TableRef) -> String {
        match &table.alias {
            Some(alias) => format!(
                "{} AS {}",
                self.quote_identifier(&table.name),
                self.quote_identifier(alias)
            ),
            None => self.quote_identifier(&table.name),
        }
    }
}

/// Dialect-neutral literal rendering, shared by generators that post-process
/// it.
pub fn generic_literal<G: SqlGenerator + ?Sized>(generator: &G, lit: &Literal) -> String {
    match lit {
        Literal::Null => "NULL".to_string(),
        Literal::Bool(b) => generator.bool_literal(*b),
        Literal::Int(n) => n.to_string(),
        Literal::Float(n) => n.to_string(),
        Literal::String(s) => format!("'{}'", s.replace('\'', "''")),
        Literal::Date(d) => format!("DATE'{}'", d.format("%Y-%m-%d")),
        Literal::Time(t) => format!("TIME'{}'", t.format("%H:%M:%S")),
        Literal::Datetime(dt) => format!("DATETIME'{}'", dt.format("%Y-%m-%d %H:%M:%S%.3f")),
    }
}
