//! The slice of the external driver that reflection needs.
//!
//! The driver itself lives outside this crate; callers hand in anything that
//! can open a cursor, run SQL text and return rows.

use serde::Serialize;

use crate::error::{DialectError, DialectResult};

/// A single catalog cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(untagged)]
pub enum CatalogValue {
    Null,
    Int(i64),
    Text(String),
}

impl CatalogValue {
    pub fn is_null(&self) -> bool {
        matches!(self, CatalogValue::Null)
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            CatalogValue::Text(s) => Some(s),
            _ => None,
        }
    }

    /// Integer view of the cell; numeric text is accepted too.
    pub fn as_i64(&self) -> Option<i64> {
        match self {
            CatalogValue::Int(n) => Some(*n),
            CatalogValue::Text(s) => s.trim().parse().ok(),
            CatalogValue::Null => None,
        }
    }

    /// Text view of the cell; integers are formatted.
    pub fn to_text(&self) -> Option<String> {
        match self {
            CatalogValue::Text(s) => Some(s.clone()),
            CatalogValue::Int(n) => Some(n.to_string()),
            CatalogValue::Null => None,
        }
    }
}

impl From<&str> for CatalogValue {
    fn from(s: &str) -> Self {
        CatalogValue::Text(s.to_string())
    }
}

impl From<String> for CatalogValue {
    fn from(s: String) -> Self {
        CatalogValue::Text(s)
    }
}

impl From<i64> for CatalogValue {
    fn from(n: i64) -> Self {
        CatalogValue::Int(n)
    }
}

impl<T: Into<CatalogValue>> From<Option<T>> for CatalogValue {
    fn from(v: Option<T>) -> Self {
        v.map_or(CatalogValue::Null, Into::into)
    }
}

/// A result row in column order.
pub type Row = Vec<CatalogValue>;

/// Cell `idx` of `row`, or NULL when the row is short.
pub fn cell(row: &Row, idx: usize) -> &CatalogValue {
    static NULL: CatalogValue = CatalogValue::Null;
    row.get(idx).unwrap_or(&NULL)
}

/// A driver cursor.
pub trait Cursor {
    fn execute(&mut self, sql: &str) -> DialectResult<()>;
    fn fetch_all(&mut self) -> DialectResult<Vec<Row>>;
    fn close(&mut self) -> DialectResult<()>;
}

/// A driver connection able to hand out cursors.
pub trait Connection {
    fn cursor(&mut self) -> DialectResult<Box<dyn Cursor + '_>>;
}

/// A cursor that is closed on every exit path.
///
/// [`ScopedCursor::close`] surfaces the close error; dropping the guard
/// without closing closes it and only logs a failure.
pub struct ScopedCursor<'a> {
    inner: Option<Box<dyn Cursor + 'a>>,
}

impl<'a> ScopedCursor<'a> {
    pub fn open<C: Connection + ?Sized>(conn: &'a mut C) -> DialectResult<Self> {
        Ok(Self {
            inner: Some(conn.cursor()?),
        })
    }

    pub fn execute(&mut self, sql: &str) -> DialectResult<()> {
        tracing::debug!("Executing: {}", sql);
        match self.inner.as_mut() {
            Some(cursor) => cursor.execute(sql),
            None => Err(closed()),
        }
    }

    pub fn fetch_all(&mut self) -> DialectResult<Vec<Row>> {
        match self.inner.as_mut() {
            Some(cursor) => cursor.fetch_all(),
            None => Err(closed()),
        }
    }

    pub fn close(mut self) -> DialectResult<()> {
        match self.inner.take() {
            Some(mut cursor) => cursor.close(),
            None => Ok(()),
        }
    }
}

impl Drop for ScopedCursor<'_> {
    fn drop(&mut self) {
        if let Some(mut cursor) = self.inner.take() {
            if let Err(e) = cursor.close() {
                tracing::warn!("Failed to close cursor: {}", e);
            }
        }
    }
}

fn closed() -> DialectError {
    DialectError::Driver("cursor already closed".to_string())
}

/// Run one statement on a fresh cursor and return every row.
pub fn query<C: Connection + ?Sized>(conn: &mut C, sql: &str) -> DialectResult<Vec<Row>> {
    let mut cursor = ScopedCursor::open(conn)?;
    cursor.execute(sql)?;
    let rows = cursor.fetch_all()?;
    cursor.close()?;
    Ok(rows)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_value_views() {
        assert_eq!(CatalogValue::from("42").as_i64(), Some(42));
        assert_eq!(CatalogValue::Int(7).to_text().as_deref(), Some("7"));
        assert!(CatalogValue::from(None::<&str>).is_null());
        assert_eq!(CatalogValue::Int(1).as_str(), None);
    }

    #[test]
    fn test_short_row_reads_null() {
        let row: Row = vec!["a".into()];
        assert!(cell(&row, 3).is_null());
    }
}
