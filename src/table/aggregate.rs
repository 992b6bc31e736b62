//! Column aggregates. Only valid (non-NaN) numbers take part; a column without
//! any, or an unknown column, yields NaN rather than an error.
use crate::table::Table;

impl Table {
    /// Returns the number of rows, regardless of missing values.
    /// Same as `row_count`.
    #[inline]
    pub fn count(&self) -> usize {
        self.row_count()
    }

    /// Iterates over the valid numbers of a column.
    fn numbers<'a>(&'a self, column: &str) -> impl Iterator<Item = f64> + 'a {
        let index = self.column_index(column);
        self.rows
            .iter()
            .filter_map(move |row| index.and_then(|index| row[index].as_number()))
    }

    /// Returns the number of valid numbers in a column.
    pub fn value_count(&self, column: &str) -> usize {
        self.numbers(column).count()
    }

    /// Returns the mean of the valid numbers in a column, or NaN if there are none.
    pub fn mean(&self, column: &str) -> f64 {
        let (sum, count) = self
            .numbers(column)
            .fold((0.0, 0usize), |(sum, count), number| (sum + number, count + 1));
        if count == 0 {
            f64::NAN
        } else {
            sum / count as f64
        }
    }

    /// Returns the smallest valid number in a column, or NaN if there are none.
    pub fn min(&self, column: &str) -> f64 {
        self.numbers(column).reduce(f64::min).unwrap_or(f64::NAN)
    }

    /// Returns the largest valid number in a column, or NaN if there are none.
    pub fn max(&self, column: &str) -> f64 {
        self.numbers(column).reduce(f64::max).unwrap_or(f64::NAN)
    }
}
