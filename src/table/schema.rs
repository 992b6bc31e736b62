//! Schema normalization: turns irregular input into a canonical column list
//! and same-shape rows.
use crate::table::value::Value;
use crate::table::TableError;
use indexmap::IndexMap;
use indexmap::IndexSet;

/// A row record: column name to cell value, in insertion order.
pub type Record = IndexMap<String, Value>;

/// Canonical columns plus rows aligned to them.
#[derive(Clone, Debug, Default, PartialEq)]
pub(crate) struct Schema {
    pub(crate) columns: Vec<String>,
    pub(crate) rows: Vec<Vec<Value>>,
}

/// Rejects a column list that names the same column twice.
pub(crate) fn check_unique(columns: &[String]) -> Result<(), TableError> {
    let mut seen = IndexSet::with_capacity(columns.len());
    for column in columns {
        if !seen.insert(column.as_str()) {
            Err(TableError::ConfigurationError(format!("duplicate column name \"{column}\"")))?
        }
    }
    Ok(())
}

/// Collects the union of all record keys in first-seen order.
pub(crate) fn detect_columns(records: &[Record]) -> Vec<String> {
    let mut detected = IndexSet::<&str>::new();
    for record in records {
        detected.extend(record.keys().map(String::as_str));
    }
    detected.into_iter().map(str::to_owned).collect()
}

/// Rebuilds every record as a row aligned to `columns`.
///
/// Keys missing from a record become `Null`; keys not in `columns` are dropped.
pub(crate) fn align_records(records: Vec<Record>, columns: &[String]) -> Vec<Vec<Value>> {
    records
        .into_iter()
        .map(|mut record| {
            columns
                .iter()
                .map(|column| record.swap_remove(column).unwrap_or_default())
                .collect()
        })
        .collect()
}

/// Normalizes row records, against explicit columns if given.
pub(crate) fn normalize_records(records: Vec<Record>, columns: Option<Vec<String>>) -> Result<Schema, TableError> {
    let columns = match columns {
        Some(columns) => {
            check_unique(&columns)?;
            columns
        }
        None => detect_columns(&records),
    };
    let rows = align_records(records, &columns);
    Ok(Schema { columns, rows })
}

/// Normalizes a 2-D array against explicit column names.
///
/// Short rows are padded with `Null`, cells past the last column are dropped.
pub(crate) fn normalize_rows(rows: Vec<Vec<Value>>, columns: Option<Vec<String>>) -> Result<Schema, TableError> {
    let columns = columns.ok_or_else(|| {
        TableError::ConfigurationError("column names are required for 2D array data".to_owned())
    })?;
    check_unique(&columns)?;
    let rows = rows
        .into_iter()
        .map(|mut row| {
            row.resize(columns.len(), Value::Null);
            row
        })
        .collect();
    Ok(Schema { columns, rows })
}

/// Normalizes column-oriented data.
///
/// The row count is the length of the first column; shorter columns are padded
/// with `Null` and longer ones truncated.
pub(crate) fn normalize_columns(data: IndexMap<String, Vec<Value>>) -> Schema {
    let row_count = data.first().map_or(0, |(_, values)| values.len());
    let mut columns = Vec::with_capacity(data.len());
    let mut rows: Vec<Vec<Value>> = (0..row_count).map(|_| Vec::with_capacity(data.len())).collect();
    for (column, values) in data {
        let mut values = values.into_iter();
        for row in rows.iter_mut() {
            row.push(values.next().unwrap_or_default());
        }
        columns.push(column);
    }
    Schema { columns, rows }
}
