use thiserror::Error;

/// Main error type for the astrotable crate.
/// Aggregates the errors of the table and catalog modules.
#[derive(Error, Debug)]
pub enum AstroTableError {
    // Table module errors
    #[error("{0}")]
    ColumnError(#[from] crate::table::column::ColumnError),

    #[error("{0}")]
    RowError(#[from] crate::table::row::RowError),

    #[error("{0}")]
    TableError(#[from] crate::table::table::TableError),

    // Catalog module errors
    #[error("{0}")]
    CatalogError(#[from] crate::catalog::attribute::CatalogError),
}
