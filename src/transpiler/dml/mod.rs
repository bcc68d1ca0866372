pub mod expr;
pub mod select;
pub mod update;
