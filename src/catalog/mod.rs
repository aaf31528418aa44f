//! # Catalog Attribute Module
//!
//! The attribute-extraction protocol: the `AttributeFromRow` capability,
//! binding named columns to indices once per table, and the photometry
//! extractor producing per-filter flux/error pairs from each row.

pub mod attribute;
pub mod photometry;

pub use attribute::{Attribute, AttributeFromRow, CatalogError};
pub use photometry::{FluxErrorPair, Photometry, PhotometryFromRow};
