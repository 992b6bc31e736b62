//! # Table Module
//!
//! The in-memory table: an ordered column list, rows aligned to it, and the
//! dtype of every column. Construction always goes through schema
//! normalization, so every row holds exactly one value per column.
//!
//! Operations that mutate in place (`add_column`, `add_row`, `rename_columns`,
//! `fill_na`) affect only the receiver. All other operations return a new table
//! that owns its rows.
use crate::options::ArrayOptions;
use crate::table::dtype::Dtype;
use crate::table::schema::Schema;
use crate::table::value::Value;
use indexmap::IndexMap;
use indexmap::IndexSet;
use std::collections::HashMap;
use thiserror::Error;

pub(crate) mod aggregate;
pub(crate) mod dtype;
pub(crate) mod export;
pub(crate) mod fill;
pub(crate) mod join;
pub(crate) mod schema;
pub(crate) mod transpose;
pub(crate) mod value;

pub use schema::Record;

/// Errors raised by table operations.
///
/// Every operation validates its input before touching the table, so a
/// failed call leaves the receiver unchanged.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum TableError {
    /// Required construction input is missing or inconsistent
    #[error("{0}")]
    ConfigurationError(String),

    /// The operation references a column absent from the schema
    #[error("Column \"{0}\" does not exist in the table")]
    UnknownColumnError(String),

    /// The column name is already taken
    #[error("Column \"{0}\" already exists in the table")]
    DuplicateColumnError(String),

    /// A value sequence does not cover exactly one value per row
    #[error("Length of values ({values}) does not match the number of rows ({rows})")]
    LengthMismatchError { values: usize, rows: usize },

    /// The transpose key column does not hold unique values
    #[error("Duplicate values found in column \"{0}\". Each key must be unique for transposing")]
    DuplicateKeyError(String),
}

/// Values for a new column: one scalar for every row, or one value per row.
#[derive(Clone, Debug, PartialEq)]
pub enum ColumnData {
    Scalar(Value),
    Values(Vec<Value>),
}

impl From<Value> for ColumnData {
    fn from(value: Value) -> Self {
        ColumnData::Scalar(value)
    }
}

impl From<Vec<Value>> for ColumnData {
    fn from(values: Vec<Value>) -> Self {
        ColumnData::Values(values)
    }
}

/// An in-memory table with typed columns.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct Table {
    /// Column names in display order
    columns: Vec<String>,
    /// Rows, each aligned to `columns`
    rows: Vec<Vec<Value>>,
    /// Cached dtype per column, aligned to `columns`
    dtypes: Vec<Dtype>,
}

impl Table {
    /// Builds a table from normalized data and computes its dtypes.
    pub(crate) fn from_schema(schema: Schema) -> Self {
        let Schema { columns, rows } = schema;
        let mut table = Table {
            columns,
            rows,
            dtypes: Vec::new(),
        };
        table.refresh_dtypes();
        log::debug!("Built table with {} columns and {} rows", table.columns.len(), table.rows.len());
        table
    }

    /// Creates a table from row records.
    ///
    /// The column list is the union of the record keys in first-seen order;
    /// missing keys are filled with `Null`.
    pub fn from_records(records: Vec<Record>) -> Self {
        let columns = schema::detect_columns(&records);
        let rows = schema::align_records(records, &columns);
        Self::from_schema(Schema { columns, rows })
    }

    /// Creates a table from row records using an explicit column order.
    ///
    /// Keys outside `columns` are dropped, columns missing from a record are `Null`.
    pub fn from_records_with_columns(records: Vec<Record>, columns: Vec<String>) -> Result<Self, TableError> {
        Ok(Self::from_schema(schema::normalize_records(records, Some(columns))?))
    }

    /// Creates a table from a 2-D array of values and the names of its columns.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if `columns` is `None` or names a column twice.
    pub fn from_rows(rows: Vec<Vec<Value>>, columns: Option<Vec<String>>) -> Result<Self, TableError> {
        Ok(Self::from_schema(schema::normalize_rows(rows, columns)?))
    }

    /// Creates a table from a 2-D array, reading or generating column names.
    ///
    /// With `options.header` the first row supplies the column names; otherwise
    /// the columns are named `col1`, `col2`, ... after the width of the first row.
    /// String cells listed in `options.nulls` are read as `Null`.
    pub fn from_array(data: Vec<Vec<Value>>, options: &ArrayOptions) -> Result<Self, TableError> {
        let mut data = data.into_iter();
        let Some(first) = data.next() else {
            return Ok(Self::default());
        };
        let (columns, body): (Vec<String>, Vec<Vec<Value>>) = if options.header {
            (first.iter().map(|name| name.to_string()).collect(), data.collect())
        } else {
            let columns = (1..=first.len()).map(|index| format!("col{index}")).collect();
            (columns, std::iter::once(first).chain(data).collect())
        };
        let body = body
            .into_iter()
            .map(|row| {
                row.into_iter()
                    .map(|value| match value {
                        Value::String(string) if options.nulls.contains(&string) => Value::Null,
                        value => value,
                    })
                    .collect()
            })
            .collect();
        Self::from_rows(body, Some(columns))
    }

    /// Creates a table from column-oriented data.
    ///
    /// The row count is the length of the first column.
    pub fn from_columns(data: IndexMap<String, Vec<Value>>) -> Self {
        Self::from_schema(schema::normalize_columns(data))
    }

    /// Returns the column names in order.
    pub fn column_names(&self) -> &[String] {
        &self.columns
    }

    /// Returns the position of a column, if present.
    pub fn column_index(&self, column: &str) -> Option<usize> {
        self.columns.iter().position(|name| name == column)
    }

    /// Returns the position of a column or an `UnknownColumnError`.
    pub(crate) fn require_column(&self, column: &str) -> Result<usize, TableError> {
        self.column_index(column)
            .ok_or_else(|| TableError::UnknownColumnError(column.to_owned()))
    }

    /// Returns the number of rows.
    pub fn row_count(&self) -> usize {
        self.rows.len()
    }

    /// Returns the rows, each aligned to `column_names()`.
    pub fn rows(&self) -> &[Vec<Value>] {
        &self.rows
    }

    /// Gets the value of a cell by row index and column name.
    pub fn get(&self, row: usize, column: &str) -> Option<&Value> {
        let index = self.column_index(column)?;
        self.rows.get(row)?.get(index)
    }

    /// Returns the dtype of every column, in column order.
    pub fn dtypes(&self) -> IndexMap<String, Dtype> {
        self.columns
            .iter()
            .cloned()
            .zip(self.dtypes.iter().copied())
            .collect()
    }

    /// Returns the dtype of a column, if present.
    pub fn dtype(&self, column: &str) -> Option<Dtype> {
        self.dtypes.get(self.column_index(column)?).copied()
    }

    fn detect_dtype(&self, index: usize) -> Dtype {
        Dtype::detect(self.rows.iter().map(|row| &row[index]))
    }

    /// Recomputes the dtype of every column.
    pub(crate) fn refresh_dtypes(&mut self) {
        self.dtypes = (0..self.columns.len())
            .map(|index| self.detect_dtype(index))
            .collect();
    }

    /// Returns a new table holding only the requested columns.
    ///
    /// A requested name absent from this table becomes a column of `Null`s.
    /// Repeated names are kept once.
    pub fn select_cols(&self, columns: &[&str]) -> Table {
        let columns: IndexSet<&str> = columns.iter().copied().collect();
        let indices: Vec<Option<usize>> = columns.iter().map(|column| self.column_index(column)).collect();
        let rows = self
            .rows
            .iter()
            .map(|row| {
                indices
                    .iter()
                    .map(|index| index.map(|index| row[index].clone()).unwrap_or_default())
                    .collect()
            })
            .collect();
        Self::from_schema(Schema {
            columns: columns.into_iter().map(str::to_owned).collect(),
            rows,
        })
    }

    /// Returns a new table without the given columns. Unknown names are ignored.
    pub fn drop_cols(&self, columns: &[&str]) -> Table {
        let kept: Vec<&str> = self
            .columns
            .iter()
            .map(String::as_str)
            .filter(|column| !columns.contains(column))
            .collect();
        self.select_cols(&kept)
    }

    /// Returns a new table with the rows where every `(column, value)` pair
    /// matches under strict equality. A pair naming an absent column matches no row.
    pub fn select_rows(&self, filter: &[(&str, Value)]) -> Table {
        let filter: Option<Vec<(usize, &Value)>> = filter
            .iter()
            .map(|(column, value)| self.column_index(column).map(|index| (index, value)))
            .collect();
        let rows = match filter {
            Some(filter) => self
                .rows
                .iter()
                .filter(|row| filter.iter().all(|(index, value)| row[*index] == **value))
                .cloned()
                .collect(),
            None => Vec::new(),
        };
        Self::from_schema(Schema {
            columns: self.columns.clone(),
            rows,
        })
    }

    /// Adds a column, filled from a scalar or from one value per row.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateColumnError` if the name is taken and
    /// `LengthMismatchError` if the values do not cover every row. The table
    /// is unchanged on error.
    pub fn add_column(&mut self, column: &str, data: impl Into<ColumnData>) -> Result<(), TableError> {
        if self.column_index(column).is_some() {
            Err(TableError::DuplicateColumnError(column.to_owned()))?
        }
        match data.into() {
            ColumnData::Values(values) => {
                if values.len() != self.rows.len() {
                    Err(TableError::LengthMismatchError {
                        values: values.len(),
                        rows: self.rows.len(),
                    })?
                }
                for (row, value) in self.rows.iter_mut().zip(values) {
                    row.push(value);
                }
            }
            ColumnData::Scalar(value) => {
                for row in self.rows.iter_mut() {
                    row.push(value.clone());
                }
            }
        }
        self.columns.push(column.to_owned());
        let dtype = self.detect_dtype(self.columns.len() - 1);
        self.dtypes.push(dtype);
        Ok(())
    }

    /// Appends a row.
    ///
    /// Keys not yet in the table become new columns, back-filled with `Null`
    /// for the existing rows. Columns missing from the record are `Null`.
    pub fn add_row(&mut self, mut record: Record) {
        let new_columns: Vec<String> = record
            .keys()
            .filter(|key| self.column_index(key).is_none())
            .cloned()
            .collect();
        if !new_columns.is_empty() {
            let width = self.columns.len() + new_columns.len();
            for row in self.rows.iter_mut() {
                row.resize(width, Value::Null);
            }
            self.columns.extend(new_columns);
        }
        let row = self
            .columns
            .iter()
            .map(|column| record.swap_remove(column).unwrap_or_default())
            .collect();
        self.rows.push(row);
        self.refresh_dtypes();
    }

    /// Renames columns in place. Columns not in `renames` keep their name.
    ///
    /// # Errors
    ///
    /// Returns `DuplicateColumnError` if the renamed column list would hold a
    /// name twice; the table is unchanged in that case.
    pub fn rename_columns(&mut self, renames: &HashMap<&str, &str>) -> Result<(), TableError> {
        let columns: Vec<String> = self
            .columns
            .iter()
            .map(|column| renames.get(column.as_str()).map_or_else(|| column.to_owned(), |name| name.to_string()))
            .collect();
        let mut seen = IndexSet::with_capacity(columns.len());
        for column in &columns {
            if !seen.insert(column.as_str()) {
                Err(TableError::DuplicateColumnError(column.to_owned()))?
            }
        }
        self.columns = columns;
        self.refresh_dtypes();
        Ok(())
    }

    /// Returns the distinct values of a column in first-seen order.
    ///
    /// NaN values count as one distinct value.
    pub fn unique(&self, column: &str) -> Result<Vec<Value>, TableError> {
        let index = self.require_column(column)?;
        let mut values: Vec<Value> = Vec::new();
        for row in &self.rows {
            let value = &row[index];
            if !values.iter().any(|seen| seen.same_value(value)) {
                values.push(value.clone());
            }
        }
        Ok(values)
    }
}
