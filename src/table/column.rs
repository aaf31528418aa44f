use regex::Regex;
use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;

/// Errors related to column schema construction and type keyword parsing.
#[derive(Error, Debug)]
pub enum ColumnError {
    #[error("Empty column list is not allowed")]
    EmptyColumnList,

    #[error("Empty column names are not allowed")]
    EmptyName,

    #[error("Column name '{0}' contains whitespace characters")]
    WhitespaceName(String),

    #[error("Duplicate column name '{0}'")]
    DuplicateName(String),

    #[error("Unknown column type keyword '{0}'")]
    UnknownType(String),
}

/// Supported column data types for catalog tables.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum ColumnType {
    /// Boolean values (true/false)
    Boolean,
    /// 32-bit signed integers
    Int,
    /// 64-bit signed integers
    Long,
    /// Single-precision floating point numbers
    Float,
    /// Double-precision floating point numbers
    Double,
    /// Variable-length strings
    String,
}

impl ColumnType {
    /// Returns the keyword used for this type in fixed-width ASCII headers.
    pub const fn as_keyword(&self) -> &'static str {
        match self {
            ColumnType::Boolean => "bool",
            ColumnType::Int => "int",
            ColumnType::Long => "long",
            ColumnType::Float => "float",
            ColumnType::Double => "double",
            ColumnType::String => "string",
        }
    }

    /// Parses a column type from its ASCII header keyword.
    pub fn parse(keyword: &str) -> Result<Self, ColumnError> {
        match keyword {
            "bool" => Ok(Self::Boolean),
            "int" => Ok(Self::Int),
            "long" => Ok(Self::Long),
            "float" => Ok(Self::Float),
            "double" => Ok(Self::Double),
            "string" => Ok(Self::String),
            _ => Err(ColumnError::UnknownType(keyword.to_owned())),
        }
    }
}

impl Display for ColumnType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_keyword())
    }
}

/// Describes a single table column with name and data type.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnDescription {
    /// Column name (from catalog header or configuration)
    pub name: String,
    /// Column data type
    pub kind: ColumnType,
}

impl ColumnDescription {
    /// Creates a column description from a name and a type.
    pub fn new(name: &str, kind: ColumnType) -> Self {
        Self {
            name: name.to_owned(),
            kind,
        }
    }
}

/// Validates a list of column or filter names.
/// Names must be non-empty, free of whitespace, and pairwise distinct.
fn validate_names<'a>(names: impl Iterator<Item = &'a str>) -> Result<(), ColumnError> {
    let whitespace = Regex::new(r"\s").expect("Hardcode regex pattern");
    let mut seen = HashSet::<&str>::new();
    let mut count = 0;
    for name in names {
        if name.is_empty() {
            return Err(ColumnError::EmptyName);
        }
        if whitespace.is_match(name) {
            return Err(ColumnError::WhitespaceName(name.to_owned()));
        }
        if !seen.insert(name) {
            return Err(ColumnError::DuplicateName(name.to_owned()));
        }
        count += 1;
    }
    if count == 0 {
        return Err(ColumnError::EmptyColumnList);
    }
    Ok(())
}

/// Ordered, validated list of typed columns shared by all rows of a table.
/// Immutable after construction; shared by reference through an `Arc`.
#[derive(Clone, Debug, PartialEq)]
pub struct ColumnInfo {
    columns: Vec<ColumnDescription>,
}

impl ColumnInfo {
    /// Creates a column schema from an ordered list of column descriptions.
    pub fn new(columns: Vec<ColumnDescription>) -> Result<Self, ColumnError> {
        validate_names(columns.iter().map(|column| column.name.as_str()))?;
        Ok(Self { columns })
    }

    /// Returns the number of columns.
    pub fn size(&self) -> usize {
        self.columns.len()
    }

    /// Returns the name of the column at the given index, or None when out of range.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.columns.get(index).map(|column| column.name.as_str())
    }

    /// Returns the index of the named column, or None when absent.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.columns.iter().position(|column| column.name == name)
    }

    /// Returns the declared type of the column at the given index, or None when out of range.
    pub fn kind(&self, index: usize) -> Option<ColumnType> {
        self.columns.get(index).map(|column| column.kind)
    }

    /// Iterates over the column descriptions in order.
    pub fn iter(&self) -> impl Iterator<Item = &ColumnDescription> {
        self.columns.iter()
    }
}

/// Ordered, validated list of names without types, for catalog display purposes
/// (e.g., the filter names shared by all photometry attributes of a catalog).
#[derive(Clone, Debug, PartialEq)]
pub struct NameList {
    names: Vec<String>,
}

impl NameList {
    /// Creates a name list, applying the same validation as column names.
    pub fn new(names: Vec<String>) -> Result<Self, ColumnError> {
        validate_names(names.iter().map(|name| name.as_str()))?;
        Ok(Self { names })
    }

    /// Returns the number of names.
    pub fn size(&self) -> usize {
        self.names.len()
    }

    /// Returns the name at the given index, or None when out of range.
    pub fn name(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(|name| name.as_str())
    }

    /// Returns the index of the given name, or None when absent.
    pub fn index(&self, name: &str) -> Option<usize> {
        self.names.iter().position(|item| item == name)
    }

    /// Iterates over the names in order.
    pub fn iter(&self) -> impl Iterator<Item = &str> {
        self.names.iter().map(|name| name.as_str())
    }
}
