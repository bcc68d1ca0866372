//! Abstract statement and DDL trees consumed by the compilers.

pub mod ddl;
pub mod expr;
pub mod stmt;

pub use ddl::*;
pub use expr::*;
pub use stmt::*;
