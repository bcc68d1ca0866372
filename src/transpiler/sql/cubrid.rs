use crate::ast::{Builtin, Literal, TableRef};
use crate::transpiler::traits::{SqlGenerator, generic_literal};

/// Largest row count CUBRID accepts; stands in for "no limit" when only an
/// offset is given.
pub const MAX_ROW_COUNT: u64 = 1_073_741_823;

/// CUBRID Generator.
#[derive(Debug, Clone, Copy, Default)]
pub struct CubridGenerator;

impl SqlGenerator for CubridGenerator {
    fn bool_literal(&self, val: bool) -> String {
        if val { "1".to_string() } else { "0".to_string() }
    }

    fn limit_offset(&self, limit: Option<u64>, offset: Option<u64>) -> String {
        // CUBRID uses LIMIT [offset,] row_count
        match (limit, offset) {
            (None, None) => String::new(),
            (None, Some(off)) => format!(" \n LIMIT {}, {}", off, MAX_ROW_COUNT),
            (Some(lim), Some(off)) => format!(" \n LIMIT {}, {}", off, lim),
            (Some(lim), None) => format!(" \n LIMIT {}", lim),
        }
    }

    fn for_update_clause(&self, _for_update: bool) -> String {
        String::new()
    }

    fn join_keyword(&self, outer: bool) -> &'static str {
        if outer {
            " LEFT OUTER JOIN "
        } else {
            " INNER JOIN "
        }
    }

    fn render_literal(&self, lit: &Literal) -> String {
        // Backslash is an escape introducer in CUBRID string literals.
        generic_literal(self, lit).replace('\\', "\\\\")
    }

    fn builtin(&self, func: Builtin) -> &'static str {
        match func {
            Builtin::SysDate => "SYSDATE",
            Builtin::SysTime => "SYSTIME",
            Builtin::SysDatetime => "SYSDATETIME",
            Builtin::SysTimestamp => "SYSTIMESTAMP",
            Builtin::CurrentDate => "CURRENT_DATE",
            Builtin::CurrentTime => "CURRENT_TIME",
            Builtin::CurrentDatetime => "CURRENT_DATETIME",
            Builtin::CurrentTimestamp => "CURRENT_TIMESTAMP",
            Builtin::LocalTimestamp => "LOCALTIMESTAMP",
            Builtin::CurrentUser => "CURRENT_USER",
        }
    }

    fn update_from_clause(&self, _extra_from: &[TableRef]) -> Option<String> {
        None
    }

    fn update_limit_clause(&self, limit: Option<u64>) -> Option<String> {
        limit.map(|n| format!("LIMIT {}", n))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_limit_offset_cases() {
        let g = CubridGenerator;
        assert_eq!(g.limit_offset(None, None), "");
        assert_eq!(g.limit_offset(None, Some(5)), " \n LIMIT 5, 1073741823");
        assert_eq!(g.limit_offset(Some(10), Some(5)), " \n LIMIT 5, 10");
        assert_eq!(g.limit_offset(Some(10), None), " \n LIMIT 10");
    }

    #[test]
    fn test_backslash_doubled() {
        let g = CubridGenerator;
        assert_eq!(g.render_literal(&Literal::from("a\\b")), "'a\\\\b'");
        assert_eq!(g.render_literal(&Literal::from("it's")), "'it''s'");
    }

    #[test]
    fn test_no_row_locking() {
        assert_eq!(CubridGenerator.for_update_clause(true), "");
    }
}
