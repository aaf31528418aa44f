use crate::catalog::attribute::Attribute;
use crate::catalog::attribute::AttributeFromRow;
use crate::catalog::attribute::CatalogError;
use crate::table::column::ColumnInfo;
use crate::table::column::NameList;
use crate::table::row::Row;
use crate::table::row::Value;
use std::any::Any;
use std::sync::Arc;

/// A measured flux and its uncertainty, with an explicit missing-data flag.
#[derive(Copy, Clone, Debug)]
pub struct FluxErrorPair {
    pub flux: f64,
    pub error: f64,
    /// True when no measurement exists; the numeric fields are then meaningless
    pub missing: bool,
}

impl FluxErrorPair {
    /// Creates a flux/error pair.
    pub const fn new(flux: f64, error: f64, missing: bool) -> Self {
        Self {
            flux,
            error,
            missing,
        }
    }
}

impl PartialEq for FluxErrorPair {
    /// Two pairs are equal when both are flagged missing, whatever their
    /// numeric fields hold, or when flux and error both compare equal.
    fn eq(&self, other: &Self) -> bool {
        (self.missing && other.missing) || (self.flux == other.flux && self.error == other.error)
    }
}

/// Per-filter photometry of one source: a shared, ordered filter-name list
/// and one flux/error pair per filter, positionally aligned.
#[derive(Clone, Debug)]
pub struct Photometry {
    filter_names: Arc<NameList>,
    values: Vec<FluxErrorPair>,
}

impl Photometry {
    /// Creates a photometry attribute; the value list must align with the
    /// filter-name list.
    pub fn new(
        filter_names: Arc<NameList>,
        values: Vec<FluxErrorPair>,
    ) -> Result<Self, CatalogError> {
        if values.len() != filter_names.size() {
            return Err(CatalogError::FilterCountMismatch {
                expected: filter_names.size(),
                actual: values.len(),
            });
        }
        Ok(Self {
            filter_names,
            values,
        })
    }

    /// Returns the number of filters.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns the flux/error pair of the named filter, or None when the
    /// filter is not part of this photometry.
    pub fn value(&self, filter_name: &str) -> Option<&FluxErrorPair> {
        self.filter_names
            .index(filter_name)
            .and_then(|index| self.values.get(index))
    }

    /// Iterates over (filter name, flux/error pair) in filter order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &FluxErrorPair)> {
        self.filter_names.iter().zip(self.values.iter())
    }
}

impl Attribute for Photometry {
    fn as_any(&self) -> &dyn Any {
        self
    }
}

/// Builds `Photometry` attributes from table rows.
///
/// The filter mapping gives, per filter, the names of the flux and error
/// columns in the input catalog. Both names are resolved to column indices
/// here, once for the whole table; extraction then uses only the bound
/// indices, so no name lookup happens per row.
pub struct PhotometryFromRow {
    filter_names: Arc<NameList>,
    /// (flux column index, error column index) per filter, aligned with filter_names
    index_mapping: Vec<(usize, usize)>,
}

impl PhotometryFromRow {
    /// Creates the extractor, resolving every mapped column name against the
    /// column info. Fails naming the first missing column; no partial
    /// binding is retained.
    pub fn new(
        info: &ColumnInfo,
        filter_mapping: &[(String, (String, String))],
    ) -> Result<Self, CatalogError> {
        let mut index_mapping = Vec::with_capacity(filter_mapping.len());
        for (_, (flux_name, error_name)) in filter_mapping {
            let flux_index = info
                .index(flux_name)
                .ok_or_else(|| CatalogError::MissingColumn(flux_name.to_owned()))?;
            let error_index = info
                .index(error_name)
                .ok_or_else(|| CatalogError::MissingColumn(error_name.to_owned()))?;
            index_mapping.push((flux_index, error_index));
        }
        let filter_names = NameList::new(
            filter_mapping
                .iter()
                .map(|(filter, _)| filter.to_owned())
                .collect(),
        )?;
        Ok(Self {
            filter_names: Arc::new(filter_names),
            index_mapping,
        })
    }

    /// Returns the bound (flux, error) column index pair per filter.
    pub fn filter_index_mapping(&self) -> &[(usize, usize)] {
        &self.index_mapping
    }

    /// Reads the cell at a bound index as a double.
    fn double_cell(
        &self,
        row: &Row,
        cell_index: usize,
        filter_index: usize,
    ) -> Result<f64, CatalogError> {
        match row.cell(cell_index)? {
            Value::Double(value) => Ok(*value),
            other => Err(CatalogError::UnexpectedCellKind {
                filter: self
                    .filter_names
                    .name(filter_index)
                    .unwrap_or_default()
                    .to_owned(),
                actual: other.kind(),
            }),
        }
    }
}

impl AttributeFromRow for PhotometryFromRow {
    /// Creates the photometry of one row, reading the bound flux and error
    /// cells of every filter by index.
    fn create_attribute(&self, row: &Row) -> Result<Box<dyn Attribute>, CatalogError> {
        let mut values = Vec::with_capacity(self.index_mapping.len());
        for (filter_index, (flux_index, error_index)) in self.index_mapping.iter().enumerate() {
            let flux = self.double_cell(row, *flux_index, filter_index)?;
            let error = self.double_cell(row, *error_index, filter_index)?;
            values.push(FluxErrorPair::new(flux, error, false));
        }
        let photometry = Photometry::new(Arc::clone(&self.filter_names), values)?;
        Ok(Box::new(photometry))
    }
}
