use crate::options::FillMethod;
use crate::table::value::Value;
use crate::table::Table;

impl Table {
    /// Replaces missing cells in place.
    ///
    /// - `FillMethod::Value`: every `Null` cell becomes `value`.
    /// - `FillMethod::Forward`: every `Null` cell takes the last present value
    ///   above it in the same column; leading `Null`s stay.
    /// - `FillMethod::Backward`: every `Null` cell takes the next present value
    ///   below it in the same column; trailing `Null`s stay.
    ///
    /// NaN counts as present: it is neither filled nor skipped over. `value`
    /// is only used by `FillMethod::Value`.
    pub fn fill_na(&mut self, value: Value, method: FillMethod) {
        log::trace!("Fill missing values of {} columns by {}", self.columns.len(), method);
        match method {
            FillMethod::Value => {
                for cell in self.rows.iter_mut().flatten() {
                    if cell.is_null() {
                        *cell = value.clone();
                    }
                }
            }
            FillMethod::Forward => propagate(self.rows.iter_mut(), self.columns.len()),
            FillMethod::Backward => propagate(self.rows.iter_mut().rev(), self.columns.len()),
        }
        self.refresh_dtypes();
    }
}

/// Carries the last present value of each column into the missing cells that
/// follow it in iteration order.
fn propagate<'a, I>(rows: I, width: usize)
where
    I: Iterator<Item = &'a mut Vec<Value>>,
{
    let mut last: Vec<Option<Value>> = vec![None; width];
    for row in rows {
        for (cell, seen) in row.iter_mut().zip(last.iter_mut()) {
            if !cell.is_null() {
                *seen = Some(cell.clone());
            } else if let Some(value) = seen {
                *cell = value.clone();
            }
        }
    }
}
