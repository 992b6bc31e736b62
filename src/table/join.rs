use crate::options::JoinKind;
use crate::options::JoinOptions;
use crate::table::schema;
use crate::table::schema::Record;
use crate::table::schema::Schema;
use crate::table::value::Value;
use crate::table::Table;
use crate::table::TableError;
use indexmap::IndexSet;

impl Table {
    /// Joins this table with `other` on the columns named in `on`, using the
    /// default `_r` suffix for colliding right-side columns.
    pub fn join(&self, other: &Table, on: &[&str], how: JoinKind) -> Result<Table, TableError> {
        self.join_with(other, on, &JoinOptions::new(how))
    }

    /// Joins this table with `other` on the columns named in `on`.
    ///
    /// Two rows match when every key column holds strictly equal values, so
    /// `Null` keys match each other and NaN keys never match. A matched pair
    /// yields one row: the left row followed by the right non-key columns,
    /// renamed with `options.suffix` when the left side already has the name.
    /// Matches come out in left-row order, and for each left row in right-row
    /// order. Depending on `options.how`, unmatched left rows follow their
    /// position and unmatched right rows are appended at the end, each with
    /// its own column names.
    ///
    /// The result always has the left columns followed by the carried right
    /// columns, whether or not any row matched. A suffixed name that is
    /// already taken gets the suffix again until it is free.
    ///
    /// # Errors
    ///
    /// Returns `ConfigurationError` if `on` or the suffix is empty and
    /// `UnknownColumnError` if a key column is missing from either table.
    pub fn join_with(&self, other: &Table, on: &[&str], options: &JoinOptions) -> Result<Table, TableError> {
        if on.is_empty() {
            Err(TableError::ConfigurationError("join requires at least one key column".to_owned()))?
        }
        let keys = on
            .iter()
            .map(|key| Ok((self.require_column(key)?, other.require_column(key)?)))
            .collect::<Result<Vec<(usize, usize)>, TableError>>()?;

        if options.suffix.is_empty() {
            Err(TableError::ConfigurationError("join suffix must not be empty".to_owned()))?
        }

        // right columns carried into a matched row, with their output names
        let mut taken: IndexSet<String> = self.columns.iter().cloned().collect();
        taken.extend(other.columns.iter().filter(|column| self.column_index(column).is_none()).cloned());
        let mut carried: Vec<(usize, String)> = Vec::new();
        for (index, column) in other.columns.iter().enumerate() {
            if on.contains(&column.as_str()) {
                continue;
            }
            let mut name = column.to_owned();
            if self.column_index(column).is_some() {
                name.push_str(&options.suffix);
                while taken.contains(&name) {
                    name.push_str(&options.suffix);
                }
                taken.insert(name.to_owned());
            }
            carried.push((index, name));
        }

        let mut records: Vec<Record> = Vec::new();
        let mut matched_right = vec![false; other.rows.len()];
        for left in &self.rows {
            let mut matched = false;
            for (index, right) in other.rows.iter().enumerate() {
                if !keys.iter().all(|(l, r)| left[*l] == right[*r]) {
                    continue;
                }
                matched = true;
                matched_right[index] = true;
                let mut record = self.to_record(left);
                for (column, name) in &carried {
                    record.insert(name.to_owned(), right[*column].clone());
                }
                records.push(record);
            }
            if !matched && options.how.keeps_left() {
                records.push(self.to_record(left));
            }
        }
        if options.how.keeps_right() {
            for (right, _) in other.rows.iter().zip(&matched_right).filter(|(_, matched)| !**matched) {
                records.push(other.to_record(right));
            }
        }

        let mut columns: IndexSet<String> = self.columns.iter().cloned().collect();
        columns.extend(carried.into_iter().map(|(_, name)| name));
        columns.extend(schema::detect_columns(&records));
        let columns: Vec<String> = columns.into_iter().collect();
        log::debug!(
            "Joined {} rows with {} rows on {:?} ({}): {} rows",
            self.rows.len(),
            other.rows.len(),
            on,
            options.how,
            records.len()
        );
        let rows = schema::align_records(records, &columns);
        Ok(Table::from_schema(Schema { columns, rows }))
    }

    /// Pairs a row of this table with the column names.
    pub(crate) fn to_record(&self, row: &[Value]) -> Record {
        self.columns.iter().cloned().zip(row.iter().cloned()).collect()
    }
}

#[cfg(test)]
mod tests {
    use crate::options::JoinKind;
    use crate::options::JoinOptions;
    use crate::table::tests::record;
    use crate::table::*;

    fn people() -> Table {
        Table::from_records(vec![
            record(vec![("id", 1.into()), ("name", "Alice".into()), ("age", 25.into())]),
            record(vec![("id", 2.into()), ("name", "Bob".into()), ("age", 30.into())]),
            record(vec![("id", 3.into()), ("name", "Charlie".into()), ("age", 35.into())]),
        ])
    }

    fn cities() -> Table {
        Table::from_records(vec![
            record(vec![("id", 1.into()), ("city", "New York".into())]),
            record(vec![("id", 4.into()), ("city", "San Francisco".into())]),
        ])
    }

    fn ids(table: &Table) -> Vec<Value> {
        table.rows().iter().map(|row| row[0].clone()).collect()
    }

    #[test]
    fn join_inner() {
        let joined = people().join(&cities(), &["id"], JoinKind::Inner).unwrap();
        assert_eq!(joined.column_names(), ["id", "name", "age", "city"]);
        assert_eq!(joined.rows(), [vec![
            Value::from(1), "Alice".into(), 25.into(), "New York".into(),
        ]]);
    }

    #[test]
    fn join_left() {
        let joined = people().join(&cities(), &["id"], JoinKind::Left).unwrap();
        assert_eq!(joined.row_count(), 3);
        assert_eq!(ids(&joined), vec![Value::from(1), 2.into(), 3.into()]);
        assert_eq!(joined.get(0, "city"), Some(&Value::from("New York")));
        assert_eq!(joined.get(1, "city"), Some(&Value::Null));
        assert_eq!(joined.get(2, "city"), Some(&Value::Null));
        assert!(joined.rows().iter().all(|row| row.len() == 4));
    }

    #[test]
    fn join_right() {
        let joined = people().join(&cities(), &["id"], JoinKind::Right).unwrap();
        assert_eq!(joined.column_names(), ["id", "name", "age", "city"]);
        assert_eq!(joined.rows(), [
            vec![Value::from(1), "Alice".into(), 25.into(), "New York".into()],
            vec![Value::from(4), Value::Null, Value::Null, "San Francisco".into()],
        ]);
    }

    #[test]
    fn join_outer() {
        let joined = people().join(&cities(), &["id"], JoinKind::Outer).unwrap();
        assert_eq!(ids(&joined), vec![Value::from(1), 2.into(), 3.into(), 4.into()]);
        assert_eq!(joined.get(3, "city"), Some(&Value::from("San Francisco")));
        assert_eq!(joined.get(3, "name"), Some(&Value::Null));
        assert_eq!(joined.get(1, "city"), Some(&Value::Null));
    }

    #[test]
    fn join_fan_out() {
        let orders = Table::from_records(vec![
            record(vec![("id", 1.into()), ("item", "pen".into())]),
            record(vec![("id", 1.into()), ("item", "ink".into())]),
            record(vec![("id", 3.into()), ("item", "cap".into())]),
            record(vec![("id", 1.into()), ("item", "pad".into())]),
        ]);
        let joined = people().join(&orders, &["id"], JoinKind::Inner).unwrap();
        assert_eq!(joined.row_count(), 4);
        let items: Vec<Value> = (0..4).filter_map(|row| joined.get(row, "item").cloned()).collect();
        assert_eq!(items, vec![Value::from("pen"), "ink".into(), "pad".into(), "cap".into()]);
    }

    #[test]
    fn join_multiple_keys() {
        let left = Table::from_records(vec![
            record(vec![("id", 1.into()), ("year", 2020.into()), ("value", 10.into())]),
            record(vec![("id", 1.into()), ("year", 2021.into()), ("value", 20.into())]),
            record(vec![("id", 2.into()), ("year", 2020.into()), ("value", 30.into())]),
        ]);
        let right = Table::from_records(vec![
            record(vec![("id", 1.into()), ("year", 2021.into()), ("score", "B".into())]),
            record(vec![("id", 2.into()), ("year", 2021.into()), ("score", "C".into())]),
        ]);

        let joined = left.join(&right, &["id", "year"], JoinKind::Inner).unwrap();
        assert_eq!(joined.rows(), [vec![
            Value::from(1), 2021.into(), 20.into(), "B".into(),
        ]]);

        let joined = left.join(&right, &["id", "year"], JoinKind::Outer).unwrap();
        assert_eq!(joined.row_count(), 4);
        assert_eq!(joined.rows()[3], vec![Value::from(2), 2021.into(), Value::Null, "C".into()]);
    }

    #[test]
    fn join_suffix_collision() {
        let right = Table::from_records(vec![
            record(vec![("id", 1.into()), ("name", "Alicia".into())]),
        ]);
        let joined = people().join(&right, &["id"], JoinKind::Inner).unwrap();
        assert_eq!(joined.column_names(), ["id", "name", "age", "name_r"]);
        assert_eq!(joined.get(0, "name"), Some(&Value::from("Alice")));
        assert_eq!(joined.get(0, "name_r"), Some(&Value::from("Alicia")));

        let options = JoinOptions {
            how: JoinKind::Inner,
            suffix: "_other".to_owned(),
        };
        let joined = people().join_with(&right, &["id"], &options).unwrap();
        assert_eq!(joined.column_names(), ["id", "name", "age", "name_other"]);
    }

    #[test]
    fn join_strict_keys() {
        let left = Table::from_records(vec![
            record(vec![("k", Value::Null), ("a", 1.into())]),
            record(vec![("k", f64::NAN.into()), ("a", 2.into())]),
            record(vec![("k", 1.into()), ("a", 3.into())]),
        ]);
        let right = Table::from_records(vec![
            record(vec![("k", Value::Null), ("b", "null".into())]),
            record(vec![("k", f64::NAN.into()), ("b", "nan".into())]),
            record(vec![("k", "1".into()), ("b", "text".into())]),
        ]);
        let joined = left.join(&right, &["k"], JoinKind::Inner).unwrap();
        assert_eq!(joined.row_count(), 1);
        assert_eq!(joined.get(0, "b"), Some(&Value::from("null")));
    }

    #[test]
    fn join_empty_result_keeps_columns() {
        let right = Table::from_records(vec![
            record(vec![("id", 9.into()), ("name", "Zoe".into()), ("city", "Oslo".into())]),
        ]);
        let joined = people().join(&right, &["id"], JoinKind::Inner).unwrap();
        assert_eq!(joined.row_count(), 0);
        assert_eq!(joined.column_names(), ["id", "name", "age", "name_r", "city"]);
    }

    fn unmatched() -> (Table, Table) {
        let left = Table::from_records(vec![
            record(vec![("id", 1.into()), ("age", 25.into())]),
            record(vec![("id", 2.into()), ("age", 30.into())]),
        ]);
        let right = Table::from_records(vec![
            record(vec![("id", 9.into()), ("city", "NY".into())]),
        ]);
        (left, right)
    }

    #[test]
    fn join_left_without_matches() {
        let (left, right) = unmatched();
        let joined = left.join(&right, &["id"], JoinKind::Left).unwrap();
        assert_eq!(joined.column_names(), ["id", "age", "city"]);
        assert_eq!(joined.row_count(), 2);
        assert!(joined.rows().iter().all(|row| row[2].is_null()));

        let inner = left.join(&right, &["id"], JoinKind::Inner).unwrap();
        assert_eq!(inner.column_names(), joined.column_names());
    }

    #[test]
    fn join_right_without_matches() {
        let (left, right) = unmatched();
        let joined = left.join(&right, &["id"], JoinKind::Right).unwrap();
        assert_eq!(joined.column_names(), ["id", "age", "city"]);
        assert_eq!(joined.rows(), [vec![Value::from(9), Value::Null, "NY".into()]]);
    }

    #[test]
    fn join_suffix_skips_taken_names() {
        let left = Table::from_records(vec![
            record(vec![("id", 1.into()), ("name", "A".into()), ("name_r", "keep".into())]),
        ]);
        let right = Table::from_records(vec![
            record(vec![("id", 1.into()), ("name", "B".into())]),
        ]);
        let joined = left.join(&right, &["id"], JoinKind::Inner).unwrap();
        assert_eq!(joined.column_names(), ["id", "name", "name_r", "name_r_r"]);
        assert_eq!(joined.rows(), [vec![
            Value::from(1), "A".into(), "keep".into(), "B".into(),
        ]]);
    }

    #[test]
    fn join_suffix_skips_right_names() {
        let right = Table::from_records(vec![
            record(vec![("id", 1.into()), ("name", "B".into()), ("name_r", "C".into())]),
        ]);
        let joined = people().join(&right, &["id"], JoinKind::Inner).unwrap();
        assert_eq!(joined.column_names(), ["id", "name", "age", "name_r_r", "name_r"]);
        assert_eq!(joined.get(0, "name_r_r"), Some(&Value::from("B")));
        assert_eq!(joined.get(0, "name_r"), Some(&Value::from("C")));
    }

    #[test]
    fn join_empty_suffix() {
        let options = JoinOptions {
            how: JoinKind::Inner,
            suffix: String::new(),
        };
        let error = people().join_with(&cities(), &["id"], &options).unwrap_err();
        assert!(matches!(error, TableError::ConfigurationError(_)));
    }

    #[test]
    fn join_unknown_key() {
        let error = people().join(&cities(), &["name"], JoinKind::Inner).unwrap_err();
        assert_eq!(error, TableError::UnknownColumnError("name".to_owned()));
        let error = people().join(&cities(), &["zip"], JoinKind::Left).unwrap_err();
        assert_eq!(error, TableError::UnknownColumnError("zip".to_owned()));
    }

    #[test]
    fn join_without_keys() {
        let error = people().join(&cities(), &[], JoinKind::Inner).unwrap_err();
        assert!(matches!(error, TableError::ConfigurationError(_)));
    }

    #[test]
    fn join_leaves_inputs_unchanged() {
        let left = people();
        let right = cities();
        let _ = left.join(&right, &["id"], JoinKind::Outer).unwrap();
        assert_eq!(left, people());
        assert_eq!(right, cities());
    }
}
