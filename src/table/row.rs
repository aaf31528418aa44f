use crate::table::column::ColumnInfo;
use crate::table::column::ColumnType;
use std::fmt::Display;
use std::sync::Arc;
use thiserror::Error;

/// Errors related to row construction and cell access.
#[derive(Error, Debug)]
pub enum RowError {
    #[error("Expected {expected} cells but got {actual}")]
    CellCountMismatch { expected: usize, actual: usize },

    #[error("Cell type mismatch for column '{column}': expected {expected}, got {actual}")]
    CellTypeMismatch {
        column: String,
        expected: ColumnType,
        actual: ColumnType,
    },

    #[error("Cell index {index} is out of range for row of size {size}")]
    CellOutOfRange { index: usize, size: usize },

    #[error("Unknown column name '{0}'")]
    UnknownColumn(String),
}

/// A single typed cell value. One variant per supported column type,
/// so every access site dispatches exhaustively on the actual kind.
#[derive(Clone, Debug, PartialEq)]
pub enum Value {
    Boolean(bool),
    Int(i32),
    Long(i64),
    Float(f32),
    Double(f64),
    String(String),
}

impl Value {
    /// Returns the column type this value conforms to.
    pub const fn kind(&self) -> ColumnType {
        match self {
            Value::Boolean(_) => ColumnType::Boolean,
            Value::Int(_) => ColumnType::Int,
            Value::Long(_) => ColumnType::Long,
            Value::Float(_) => ColumnType::Float,
            Value::Double(_) => ColumnType::Double,
            Value::String(_) => ColumnType::String,
        }
    }
}

impl Display for Value {
    /// Renders the value the way the fixed-width ASCII writer does.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let text = match self {
            Value::Boolean(value) => if *value { "true" } else { "false" }.to_owned(),
            Value::Int(value) => value.to_string(),
            Value::Long(value) => value.to_string(),
            Value::Float(value) => format_float(*value),
            Value::Double(value) => format_double(*value),
            Value::String(value) => value.to_owned(),
        };
        write!(f, "{}", text)
    }
}

/// One record of typed values positionally aligned to a shared column schema.
/// Immutable once built; holds the schema by reference, never copies it.
#[derive(Clone, Debug)]
pub struct Row {
    values: Vec<Value>,
    info: Arc<ColumnInfo>,
}

impl Row {
    /// Creates a row, checking the value count and every value's type
    /// against the schema.
    pub fn new(values: Vec<Value>, info: Arc<ColumnInfo>) -> Result<Self, RowError> {
        if values.len() != info.size() {
            return Err(RowError::CellCountMismatch {
                expected: info.size(),
                actual: values.len(),
            });
        }
        for (value, column) in values.iter().zip(info.iter()) {
            if value.kind() != column.kind {
                return Err(RowError::CellTypeMismatch {
                    column: column.name.to_owned(),
                    expected: column.kind,
                    actual: value.kind(),
                });
            }
        }
        Ok(Self { values, info })
    }

    /// Returns the number of cells.
    pub fn size(&self) -> usize {
        self.values.len()
    }

    /// Returns the shared column schema.
    pub fn info(&self) -> &Arc<ColumnInfo> {
        &self.info
    }

    /// Returns the cell at the given index.
    pub fn cell(&self, index: usize) -> Result<&Value, RowError> {
        self.values.get(index).ok_or(RowError::CellOutOfRange {
            index,
            size: self.values.len(),
        })
    }

    /// Returns the cell of the named column, resolving the name via the schema.
    pub fn cell_by_name(&self, name: &str) -> Result<&Value, RowError> {
        let index = self
            .info
            .index(name)
            .ok_or_else(|| RowError::UnknownColumn(name.to_owned()))?;
        self.cell(index)
    }

    /// Iterates over the cells in column order.
    pub fn iter(&self) -> impl Iterator<Item = &Value> {
        self.values.iter()
    }
}

/// Formats a double with six significant digits, matching the fixed-width
/// ASCII writer: fixed notation for decimal exponents in [-5, 6), scientific
/// notation outside, trailing fraction zeros trimmed.
pub(crate) fn format_double(value: f64) -> String {
    if value == 0.0 {
        return "0".to_owned();
    }
    if !value.is_finite() {
        return value.to_string();
    }
    let exponent = value.abs().log10().floor() as i32;
    if (-5..6).contains(&exponent) {
        let precision = (5 - exponent).max(0) as usize;
        trim_fraction(format!("{:.*}", precision, value))
    } else {
        let text = format!("{:.5e}", value);
        match text.split_once('e') {
            Some((mantissa, exponent)) => {
                format!("{}e{}", trim_fraction(mantissa.to_owned()), exponent)
            }
            None => text,
        }
    }
}

/// Formats a single-precision float through the double path; the six
/// significant digits hide the widening noise of the f32 to f64 cast.
pub(crate) fn format_float(value: f32) -> String {
    format_double(f64::from(value))
}

/// Removes trailing zeros after the decimal point, and the point itself
/// when nothing remains behind it.
fn trim_fraction(text: String) -> String {
    if text.contains('.') {
        text.trim_end_matches('0').trim_end_matches('.').to_owned()
    } else {
        text
    }
}
