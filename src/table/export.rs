//! Views of a table as plain data, and the JSON front-end built on them.
use crate::error::ResultMessage;
use crate::error::RustyFrameError;
use crate::table::schema::Record;
use crate::table::value::Value;
use crate::table::Table;
use indexmap::IndexMap;
use serde::Deserialize;

/// The JSON shapes a table can be read from.
#[derive(Deserialize)]
#[serde(untagged)]
enum JsonTable {
    /// `[{"id": 1, ...}, ...]`
    Records(Vec<Record>),
    /// `{"id": [1, ...], ...}`
    Columns(IndexMap<String, Vec<Value>>),
}

impl Table {
    /// Returns one record per row, keyed by column name in column order.
    pub fn to_records(&self) -> Vec<Record> {
        self.rows.iter().map(|row| self.to_record(row)).collect()
    }

    /// Returns the values of every column, in column order.
    pub fn to_columns(&self) -> IndexMap<String, Vec<Value>> {
        self.columns
            .iter()
            .enumerate()
            .map(|(index, column)| {
                let values = self.rows.iter().map(|row| row[index].clone()).collect();
                (column.to_owned(), values)
            })
            .collect()
    }

    /// Returns the rows as a 2-D array, led by the column names if `include_header`.
    pub fn to_array(&self, include_header: bool) -> Vec<Vec<Value>> {
        let header: Option<Vec<Value>> =
            include_header.then(|| self.columns.iter().map(|column| Value::from(column.as_str())).collect());
        header.into_iter().chain(self.rows.iter().cloned()).collect()
    }

    /// Serializes the table as JSON: an array of records if `records`, otherwise
    /// an object of column arrays. NaN cells are written as `null`.
    pub fn to_json(&self, records: bool) -> Result<String, RustyFrameError> {
        let json = if records {
            serde_json::to_string(&self.to_records())?
        } else {
            serde_json::to_string(&self.to_columns())?
        };
        Ok(json)
    }

    /// Parses a table from JSON holding either an array of records or an
    /// object of column arrays.
    pub fn from_json(json: &str) -> Result<Table, RustyFrameError> {
        let data = serde_json::from_str::<JsonTable>(json)
            .map_err(RustyFrameError::from)
            .with_prefix("Parse table JSON failed")?;
        Ok(match data {
            JsonTable::Records(records) => Table::from_records(records),
            JsonTable::Columns(columns) => Table::from_columns(columns),
        })
    }
}
