use crate::table::column::ColumnError;
use crate::table::column::ColumnType;
use crate::table::row::Row;
use crate::table::row::RowError;
use std::any::Any;
use std::fmt::Debug;
use thiserror::Error;

/// Errors related to attribute extractor binding and extraction.
#[derive(Error, Debug)]
pub enum CatalogError {
    #[error("Column '{0}' was not found in the column info")]
    MissingColumn(String),

    #[error("Expected one value per filter: {expected} filters but {actual} values")]
    FilterCountMismatch { expected: usize, actual: usize },

    #[error("Cell bound for filter '{filter}' holds {actual}, expected double")]
    UnexpectedCellKind { filter: String, actual: ColumnType },

    #[error("{0}")]
    ColumnError(#[from] ColumnError),

    #[error("{0}")]
    RowError(#[from] RowError),
}

/// A derived value attached to a catalog source, produced from one table row.
/// Concrete attribute types are recovered by the catalog layer via `as_any`.
pub trait Attribute: Debug + Any {
    fn as_any(&self) -> &dyn Any;
}

/// Capability for building a source attribute from a table row.
///
/// Implementations bind the columns they need by name once, in their
/// constructor, against the column info shared by the whole table; the
/// binding fails there if a required column is absent. `create_attribute`
/// is then called once per row reusing the bound indices, and holds no
/// mutable per-call state, so one extractor serves all rows of a table.
pub trait AttributeFromRow {
    /// Creates one attribute from a table row.
    fn create_attribute(&self, row: &Row) -> Result<Box<dyn Attribute>, CatalogError>;
}
