use crate::table::schema::Schema;
use crate::table::value::Value;
use crate::table::Table;
use crate::table::TableError;
use indexmap::IndexSet;

impl Table {
    /// Pivots the table around `key_column`.
    ///
    /// Every other column becomes a row whose first cell is that column's
    /// name. The output columns are the key label followed by the key values,
    /// rendered as text, in row order. The key label is `key_label` when given
    /// and non-empty, otherwise `key_column`.
    ///
    /// # Errors
    ///
    /// Returns `UnknownColumnError` if `key_column` is absent and
    /// `DuplicateKeyError` if two key values render to the same column name.
    pub fn transpose(&self, key_column: &str, key_label: Option<&str>) -> Result<Table, TableError> {
        let key = self.require_column(key_column)?;
        let label = key_label.filter(|label| !label.is_empty()).unwrap_or(key_column);

        let mut headers = IndexSet::with_capacity(self.rows.len() + 1);
        headers.insert(label.to_owned());
        for row in &self.rows {
            if !headers.insert(row[key].to_string()) {
                Err(TableError::DuplicateKeyError(key_column.to_owned()))?
            }
        }

        let rows = (0..self.columns.len())
            .filter(|index| *index != key)
            .map(|index| {
                std::iter::once(Value::String(self.columns[index].to_owned()))
                    .chain(self.rows.iter().map(|row| row[index].clone()))
                    .collect()
            })
            .collect::<Vec<Vec<Value>>>();
        log::debug!("Transposed {} rows on column \"{}\"", self.rows.len(), key_column);
        Ok(Table::from_schema(Schema {
            columns: headers.into_iter().collect(),
            rows,
        }))
    }
}
