//! Transaction isolation levels.
//!
//! CUBRID names its levels by pairing a schema (class) lock level with an
//! instance lock level. The seven levels below run from strictest to
//! loosest.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{DialectError, DialectResult};
use crate::reflection::driver::{Connection, ScopedCursor, cell};

/// Isolation level tokens, strictest first.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
pub enum IsolationLevel {
    Serializable,
    RepeatableRead,
    ReadCommitted,
    RepeatableReadClassUncommittedInstances,
    ReadCommittedClass,
    ReadCommittedClassUncommittedInstances,
    ReadUncommitted,
}

impl IsolationLevel {
    /// Every level, strictest to loosest.
    pub const ALL: [IsolationLevel; 7] = [
        IsolationLevel::Serializable,
        IsolationLevel::RepeatableRead,
        IsolationLevel::ReadCommitted,
        IsolationLevel::RepeatableReadClassUncommittedInstances,
        IsolationLevel::ReadCommittedClass,
        IsolationLevel::ReadCommittedClassUncommittedInstances,
        IsolationLevel::ReadUncommitted,
    ];

    /// The vendor phrase used after `SET TRANSACTION ISOLATION LEVEL`.
    pub const fn phrase(&self) -> &'static str {
        match self {
            IsolationLevel::Serializable => "SERIALIZABLE",
            IsolationLevel::RepeatableRead => "REPEATABLE READ CLASS, REPEATABLE READ INSTANCES",
            IsolationLevel::ReadCommitted => "REPEATABLE READ CLASS, READ COMMITTED INSTANCES",
            IsolationLevel::RepeatableReadClassUncommittedInstances => {
                "REPEATABLE READ CLASS, READ UNCOMMITTED INSTANCES"
            }
            IsolationLevel::ReadCommittedClass => "READ COMMITTED CLASS, READ COMMITTED INSTANCES",
            IsolationLevel::ReadCommittedClassUncommittedInstances => {
                "READ COMMITTED CLASS, READ UNCOMMITTED INSTANCES"
            }
            IsolationLevel::ReadUncommitted => "READ UNCOMMITTED",
        }
    }

    /// The generic token, e.g. `READ COMMITTED`.
    pub const fn token(&self) -> &'static str {
        match self {
            IsolationLevel::Serializable => "SERIALIZABLE",
            IsolationLevel::RepeatableRead => "REPEATABLE READ",
            IsolationLevel::ReadCommitted => "READ COMMITTED",
            IsolationLevel::RepeatableReadClassUncommittedInstances => {
                "REPEATABLE READ CLASS UNCOMMITTED INSTANCES"
            }
            IsolationLevel::ReadCommittedClass => "READ COMMITTED CLASS",
            IsolationLevel::ReadCommittedClassUncommittedInstances => {
                "READ COMMITTED CLASS UNCOMMITTED INSTANCES"
            }
            IsolationLevel::ReadUncommitted => "READ UNCOMMITTED",
        }
    }

    /// `SET TRANSACTION ISOLATION LEVEL <phrase>`.
    pub fn set_statement(&self) -> String {
        format!("SET TRANSACTION ISOLATION LEVEL {}", self.phrase())
    }
}

impl fmt::Display for IsolationLevel {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.token())
    }
}

impl FromStr for IsolationLevel {
    type Err = DialectError;

    /// Accepts the generic token with spaces, underscores or dashes,
    /// case-insensitively.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s
            .trim()
            .split(|c: char| c.is_whitespace() || c == '_' || c == '-')
            .filter(|w| !w.is_empty())
            .collect::<Vec<_>>()
            .join(" ")
            .to_ascii_uppercase();
        IsolationLevel::ALL
            .into_iter()
            .find(|level| level.token() == normalized)
            .ok_or_else(|| DialectError::Config(format!("Unknown isolation level '{}'", s)))
    }
}

/// Set the session isolation level and commit.
///
/// The cursor is closed on every exit path, including a failed SET.
pub fn set_isolation_level<C: Connection + ?Sized>(
    conn: &mut C,
    level: IsolationLevel,
) -> DialectResult<()> {
    let mut cursor = ScopedCursor::open(conn)?;
    cursor.execute(&level.set_statement())?;
    cursor.execute("COMMIT")?;
    cursor.close()
}

/// The raw session isolation value as the server reports it.
pub fn get_isolation_level<C: Connection + ?Sized>(conn: &mut C) -> DialectResult<Option<String>> {
    let mut cursor = ScopedCursor::open(conn)?;
    cursor.execute("GET TRANSACTION ISOLATION LEVEL")?;
    let rows = cursor.fetch_all()?;
    cursor.close()?;
    Ok(rows.first().and_then(|row| cell(row, 0).to_text()))
}
