//! # Typed Table Module
//!
//! The storage core: validated column schemas, schema-conformant rows of
//! typed cells, read-only tables, and the fixed-width ASCII sizing helpers.

pub mod ascii;
pub mod column;
pub mod row;
pub mod table;

pub use column::{ColumnDescription, ColumnError, ColumnInfo, ColumnType, NameList};
pub use row::{Row, RowError, Value};
pub use table::{Table, TableError};
