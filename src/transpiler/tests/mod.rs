//! Transpiler test modules.
//!
//! Tests are organized by category:
//! - `core`: SELECT, JOIN, CAST, UPDATE and literal rendering
//! - `ddl`: CREATE/DROP TABLE, column specs, indexes and foreign keys
