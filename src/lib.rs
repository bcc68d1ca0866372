//! # cubrid-dialect
//!
//! SQL dialect adapter for CUBRID.
//!
//! Compiles abstract statement, DDL and type trees into CUBRID SQL text, and
//! reads CUBRID catalog metadata back into normalised descriptors.
//!
//! ## Quick Example
//!
//! ```rust
//! use cubrid_dialect::prelude::*;
//!
//! let select = Select::new()
//!     .columns(["id", "email"])
//!     .from("users")
//!     .limit(10)
//!     .offset(20);
//! assert_eq!(select.to_sql(), "SELECT id, email \nFROM users \n LIMIT 20, 10");
//!
//! let ty = TypeDescriptor::numeric(Some(10), Some(2));
//! assert_eq!(render_type(&ty), "NUMERIC(10, 2)");
//! ```
//!
//! ## Components
//!
//! | Module          | Role                                               |
//! |-----------------|----------------------------------------------------|
//! | [`types`]       | Type registry (`TypeDescriptor`, `TypeKind`)       |
//! | [`transpiler`]  | Identifier, type, statement and DDL compilers      |
//! | [`connect`]     | URL to driver connect arguments                    |
//! | [`reflection`]  | Catalog queries and the caching `Inspector`        |
//! | [`isolation`]   | Isolation level phrases and the session SET        |
//! | [`dialect`]     | Registration name, driver and capability flags     |

pub mod ast;
pub mod config;
pub mod connect;
pub mod dialect;
pub mod error;
pub mod isolation;
pub mod reflection;
pub mod transpiler;
pub mod types;

pub mod prelude {
    pub use crate::ast::*;
    pub use crate::connect::{ConnectArgs, ConnectionParams, create_connect_args};
    pub use crate::dialect::{Capabilities, CubridDialect};
    pub use crate::error::*;
    pub use crate::isolation::IsolationLevel;
    pub use crate::reflection::{ColumnDescriptor, IndexDescriptor, Inspector};
    pub use crate::transpiler::{CubridGenerator, SqlGenerator, ToSql, render_type};
    pub use crate::types::{GenericType, TypeDescriptor, TypeKind};
}
