use chrono::{NaiveDate, NaiveDateTime, NaiveTime};
use serde::{Deserialize, Serialize};

use crate::types::TypeDescriptor;

/// Binary operators for expressions
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum BinaryOp {
    Eq,
    Ne,
    Lt,
    Lte,
    Gt,
    Gte,
    And,
    Or,
    Like,
    /// String concatenation (||)
    Concat,
    Add,
    Sub,
    Mul,
    Div,
}

impl std::fmt::Display for BinaryOp {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let op = match self {
            BinaryOp::Eq => "=",
            BinaryOp::Ne => "<>",
            BinaryOp::Lt => "<",
            BinaryOp::Lte => "<=",
            BinaryOp::Gt => ">",
            BinaryOp::Gte => ">=",
            BinaryOp::And => "AND",
            BinaryOp::Or => "OR",
            BinaryOp::Like => "LIKE",
            BinaryOp::Concat => "||",
            BinaryOp::Add => "+",
            BinaryOp::Sub => "-",
            BinaryOp::Mul => "*",
            BinaryOp::Div => "/",
        };
        f.write_str(op)
    }
}

/// A literal value rendered inline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Literal {
    Null,
    Bool(bool),
    Int(i64),
    Float(f64),
    String(String),
    Date(NaiveDate),
    Time(NaiveTime),
    Datetime(NaiveDateTime),
}

impl From<bool> for Literal {
    fn from(b: bool) -> Self {
        Literal::Bool(b)
    }
}

impl From<i32> for Literal {
    fn from(n: i32) -> Self {
        Literal::Int(n as i64)
    }
}

impl From<i64> for Literal {
    fn from(n: i64) -> Self {
        Literal::Int(n)
    }
}

impl From<f64> for Literal {
    fn from(n: f64) -> Self {
        Literal::Float(n)
    }
}

impl From<&str> for Literal {
    fn from(s: &str) -> Self {
        Literal::String(s.to_string())
    }
}

impl From<String> for Literal {
    fn from(s: String) -> Self {
        Literal::String(s)
    }
}

impl From<NaiveDate> for Literal {
    fn from(d: NaiveDate) -> Self {
        Literal::Date(d)
    }
}

impl From<NaiveDateTime> for Literal {
    fn from(dt: NaiveDateTime) -> Self {
        Literal::Datetime(dt)
    }
}

/// Niladic date/time and session functions. These render as bare keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Builtin {
    SysDate,
    SysTime,
    SysDatetime,
    SysTimestamp,
    CurrentDate,
    CurrentTime,
    CurrentDatetime,
    CurrentTimestamp,
    LocalTimestamp,
    CurrentUser,
}

/// A general expression node.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum Expr {
    /// All columns (*)
    Star,
    /// A named column
    Named(String),
    /// A table-qualified column
    Qualified { table: String, column: String },
    /// Inline literal
    Literal(Literal),
    /// Positional bind parameter
    Param(usize),
    Binary {
        left: Box<Expr>,
        op: BinaryOp,
        right: Box<Expr>,
    },
    /// CAST(expr AS type)
    Cast {
        expr: Box<Expr>,
        target_type: TypeDescriptor,
    },
    /// Function call with arguments
    Function { name: String, args: Vec<Expr> },
    Builtin(Builtin),
    /// An aliased expression (expr AS alias)
    Aliased { expr: Box<Expr>, alias: String },
}

impl Expr {
    pub fn col(name: impl Into<String>) -> Self {
        Expr::Named(name.into())
    }

    pub fn qualified(table: impl Into<String>, column: impl Into<String>) -> Self {
        Expr::Qualified {
            table: table.into(),
            column: column.into(),
        }
    }

    pub fn lit(value: impl Into<Literal>) -> Self {
        Expr::Literal(value.into())
    }

    pub fn binary(left: Expr, op: BinaryOp, right: Expr) -> Self {
        Expr::Binary {
            left: Box::new(left),
            op,
            right: Box::new(right),
        }
    }

    pub fn eq(self, right: Expr) -> Self {
        Expr::binary(self, BinaryOp::Eq, right)
    }

    pub fn and(self, right: Expr) -> Self {
        Expr::binary(self, BinaryOp::And, right)
    }

    pub fn cast(self, target_type: TypeDescriptor) -> Self {
        Expr::Cast {
            expr: Box::new(self),
            target_type,
        }
    }

    pub fn alias(self, alias: impl Into<String>) -> Self {
        Expr::Aliased {
            expr: Box::new(self),
            alias: alias.into(),
        }
    }

    pub fn func(name: impl Into<String>, args: Vec<Expr>) -> Self {
        Expr::Function {
            name: name.into(),
            args,
        }
    }

    /// Whether this node must be parenthesised when it stands alone as an
    /// operand.
    pub fn needs_grouping(&self) -> bool {
        matches!(self, Expr::Binary { .. })
    }
}
