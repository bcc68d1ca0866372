use serde::{Deserialize, Serialize};

use crate::ast::Expr;

/// Sort direction for ORDER BY.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum SortOrder {
    Asc,
    Desc,
}

/// A table reference with an optional alias.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TableRef {
    pub name: String,
    #[serde(default)]
    pub alias: Option<String>,
}

impl TableRef {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            alias: None,
        }
    }

    pub fn alias(mut self, alias: impl Into<String>) -> Self {
        self.alias = Some(alias.into());
        self
    }
}

/// A FROM-clause item: a table or a join tree.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub enum FromItem {
    Table(TableRef),
    Join(Box<Join>),
}

impl From<TableRef> for FromItem {
    fn from(t: TableRef) -> Self {
        FromItem::Table(t)
    }
}

impl From<&str> for FromItem {
    fn from(name: &str) -> Self {
        FromItem::Table(TableRef::new(name))
    }
}

impl From<Join> for FromItem {
    fn from(j: Join) -> Self {
        FromItem::Join(Box::new(j))
    }
}

/// A join between two FROM items.
///
/// `outer` selects LEFT OUTER JOIN; everything else is an INNER JOIN.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Join {
    pub left: FromItem,
    pub right: FromItem,
    pub on: Expr,
    #[serde(default)]
    pub outer: bool,
}

impl Join {
    pub fn inner(left: impl Into<FromItem>, right: impl Into<FromItem>, on: Expr) -> Self {
        Self {
            left: left.into(),
            right: right.into(),
            on,
            outer: false,
        }
    }

    pub fn left_outer(left: impl Into<FromItem>, right: impl Into<FromItem>, on: Expr) -> Self {
        Self {
            outer: true,
            ..Self::inner(left, right, on)
        }
    }
}

/// A SELECT statement.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Select {
    pub distinct: bool,
    pub columns: Vec<Expr>,
    pub from: Vec<FromItem>,
    pub filter: Option<Expr>,
    pub order_by: Vec<(Expr, SortOrder)>,
    pub limit: Option<u64>,
    pub offset: Option<u64>,
    /// Row locking request; CUBRID never renders it.
    pub for_update: bool,
}

impl Select {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn from(mut self, item: impl Into<FromItem>) -> Self {
        self.from.push(item.into());
        self
    }

    pub fn column(mut self, expr: Expr) -> Self {
        self.columns.push(expr);
        self
    }

    pub fn columns<I, S>(mut self, names: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.columns
            .extend(names.into_iter().map(|n| Expr::Named(n.into())));
        self
    }

    pub fn distinct(mut self) -> Self {
        self.distinct = true;
        self
    }

    /// Add a WHERE condition, ANDed with any existing one.
    pub fn filter(mut self, cond: Expr) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(cond),
            None => cond,
        });
        self
    }

    pub fn order_by(mut self, expr: Expr, order: SortOrder) -> Self {
        self.order_by.push((expr, order));
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.limit = Some(n);
        self
    }

    pub fn offset(mut self, n: u64) -> Self {
        self.offset = Some(n);
        self
    }

    pub fn for_update(mut self) -> Self {
        self.for_update = true;
        self
    }
}

/// An UPDATE statement, possibly spanning several tables.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Update {
    pub tables: Vec<TableRef>,
    pub assignments: Vec<(String, Expr)>,
    /// Extra FROM tables of a multi-table update; CUBRID never renders them.
    pub extra_from: Vec<TableRef>,
    pub filter: Option<Expr>,
    /// The `cubrid_limit` option: per-statement row limit.
    pub cubrid_limit: Option<u64>,
}

impl Update {
    pub fn new(table: impl Into<String>) -> Self {
        Self {
            tables: vec![TableRef::new(table)],
            ..Self::default()
        }
    }

    pub fn table(mut self, table: impl Into<String>) -> Self {
        self.tables.push(TableRef::new(table));
        self
    }

    pub fn set(mut self, column: impl Into<String>, value: Expr) -> Self {
        self.assignments.push((column.into(), value));
        self
    }

    pub fn extra_from(mut self, table: impl Into<String>) -> Self {
        self.extra_from.push(TableRef::new(table));
        self
    }

    pub fn filter(mut self, cond: Expr) -> Self {
        self.filter = Some(match self.filter.take() {
            Some(existing) => existing.and(cond),
            None => cond,
        });
        self
    }

    pub fn limit(mut self, n: u64) -> Self {
        self.cubrid_limit = Some(n);
        self
    }
}
