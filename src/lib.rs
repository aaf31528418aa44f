//! # Astrotable
//!
//! A typed, schema-validated table engine for catalog-style astronomical
//! records: one row per observed source, one column per measured quantity.
//!
//! ## Features
//!
//! - **Validated column schemas**: ordered, named, typed column lists with
//!   uniqueness and well-formedness enforced at construction
//! - **Typed cell storage**: six primitive cell kinds (bool, int, long,
//!   float, double, string) held in a closed sum type, checked against the
//!   schema when a row is built
//! - **Read-only tables**: ordered row collections guaranteed to share one
//!   schema, safe to read concurrently without locking
//! - **Fixed-width sizing**: per-column type keywords and minimum display
//!   widths for rendering tables as aligned ASCII text
//! - **Pluggable attribute extraction**: extractors bind named columns to
//!   indices once per table and then project every row into a derived
//!   attribute, such as per-filter photometry
//!
//! File parsing, catalog assembly, and configuration loading are collaborator
//! responsibilities; this crate only defines the in-memory core they consume.

pub mod catalog;
pub mod error;
pub mod table;

pub use crate::catalog::{Attribute, AttributeFromRow, CatalogError};
pub use crate::catalog::{FluxErrorPair, Photometry, PhotometryFromRow};
pub use crate::error::AstroTableError;
pub use crate::table::ascii::column_widths;
pub use crate::table::{ColumnDescription, ColumnError, ColumnInfo, ColumnType, NameList};
pub use crate::table::{Row, RowError, Table, TableError, Value};
