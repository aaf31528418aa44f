use crate::table::column::ColumnInfo;
use crate::table::row::Row;
use std::sync::Arc;
use thiserror::Error;

/// Errors related to table assembly and row access.
#[derive(Error, Debug)]
pub enum TableError {
    #[error("Cannot build a table from an empty row list")]
    NoRows,

    #[error("Row {row} does not conform to the table column info")]
    InfoMismatch { row: usize },

    #[error("Row index {index} is out of range for table of {size} rows")]
    RowOutOfRange { index: usize, size: usize },
}

/// An ordered collection of rows sharing one column schema.
/// Read-only after construction.
#[derive(Clone, Debug)]
pub struct Table {
    info: Arc<ColumnInfo>,
    rows: Vec<Row>,
}

impl Table {
    /// Creates a table from a non-empty list of rows. Every row must carry
    /// a schema structurally equal to the first row's; rows assembled
    /// independently may hold distinct references to equal schemas.
    pub fn new(rows: Vec<Row>) -> Result<Self, TableError> {
        let first = rows.first().ok_or(TableError::NoRows)?;
        let info = Arc::clone(first.info());
        for (index, row) in rows.iter().enumerate().skip(1) {
            if **row.info() != *info {
                return Err(TableError::InfoMismatch { row: index });
            }
        }
        Ok(Self { info, rows })
    }

    /// Creates a table with a known schema and no rows.
    pub fn empty(info: Arc<ColumnInfo>) -> Self {
        Self {
            info,
            rows: Vec::new(),
        }
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the row at the given index.
    pub fn row(&self, index: usize) -> Result<&Row, TableError> {
        self.rows.get(index).ok_or(TableError::RowOutOfRange {
            index,
            size: self.rows.len(),
        })
    }

    /// Returns the shared column schema.
    pub fn info(&self) -> &Arc<ColumnInfo> {
        &self.info
    }

    /// Iterates over the rows in order.
    pub fn iter(&self) -> impl Iterator<Item = &Row> {
        self.rows.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::table::column::ColumnDescription;
    use crate::table::column::ColumnType;
    use crate::table::row::Value;

    fn info() -> Arc<ColumnInfo> {
        Arc::new(
            ColumnInfo::new(vec![
                ColumnDescription::new("id", ColumnType::Long),
                ColumnDescription::new("flux", ColumnType::Double),
            ])
            .unwrap(),
        )
    }

    fn row(info: &Arc<ColumnInfo>, id: i64, flux: f64) -> Row {
        Row::new(
            vec![Value::Long(id), Value::Double(flux)],
            Arc::clone(info),
        )
        .unwrap()
    }

    #[test]
    fn table_construction() {
        let info = info();
        let table = Table::new(vec![row(&info, 1, 0.5), row(&info, 2, 1.5)]).unwrap();

        assert_eq!(table.row_count(), 2);
        assert_eq!(table.row(0).unwrap().cell(0).unwrap(), &Value::Long(1));
        assert_eq!(table.row(1).unwrap().cell(1).unwrap(), &Value::Double(1.5));
        assert_eq!(**table.info(), *info);
    }

    #[test]
    fn table_accepts_equal_info_behind_distinct_references() {
        // Rows built independently against equal schemas still assemble
        let table = Table::new(vec![row(&info(), 1, 0.5), row(&info(), 2, 1.5)]).unwrap();

        assert_eq!(table.row_count(), 2);
    }

    #[test]
    fn table_rejects_info_mismatch() {
        let other = Arc::new(
            ColumnInfo::new(vec![
                ColumnDescription::new("id", ColumnType::Long),
                ColumnDescription::new("err", ColumnType::Double),
            ])
            .unwrap(),
        );
        let result = Table::new(vec![row(&info(), 1, 0.5), row(&other, 2, 1.5)]);

        assert!(matches!(result, Err(TableError::InfoMismatch { row: 1 })));
    }

    #[test]
    fn table_rejects_empty_row_list() {
        let result = Table::new(vec![]);
        assert!(matches!(result, Err(TableError::NoRows)));
    }

    #[test]
    fn table_empty_degenerate_case() {
        let info = info();
        let table = Table::empty(Arc::clone(&info));

        assert_eq!(table.row_count(), 0);
        assert_eq!(**table.info(), *info);
        assert!(matches!(
            table.row(0),
            Err(TableError::RowOutOfRange { index: 0, size: 0 })
        ));
    }
}
