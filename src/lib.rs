//! # Rusty Frame
//!
//! An in-memory, column-typed table for small analytical workloads: load
//! irregular records or 2-D arrays, reshape them, join them and fill their gaps.
//!
//! ## Features
//!
//! - **Schema normalization**: records with differing keys and ragged 2-D arrays
//!   are turned into one ordered column list with `Null` in every missing cell
//! - **Type inference**: every column carries a dtype (`number`, `string`,
//!   `mixed` or `undefined`) that is kept in step with its content
//! - **Table operations**: column and row selection, column add / drop / rename,
//!   row append, distinct values and numeric aggregates
//! - **Joins**: inner, left, right and full outer joins on one or more key
//!   columns, with suffixing of colliding column names
//! - **Missing values**: static, forward and backward fill
//! - **Transpose**: pivot a table around a column of unique keys
//! - **Plain data views**: records, column arrays, 2-D arrays and JSON
//!
//! ## Example
//!
//! ```
//! use rusty_frame::{JoinKind, Table};
//!
//! let people = Table::from_json(r#"[{"id": 1, "name": "Alice"}, {"id": 2, "name": "Bob"}]"#)?;
//! let cities = Table::from_json(r#"[{"id": 1, "city": "New York"}]"#)?;
//! let joined = people.join(&cities, &["id"], JoinKind::Left)?;
//! assert_eq!(joined.column_names(), ["id", "name", "city"]);
//! # Ok::<(), rusty_frame::RustyFrameError>(())
//! ```
mod error;
mod options;
mod table;

pub use crate::error::ResultMessage;
pub use crate::error::RustyFrameError;
pub use crate::options::ArrayOptions;
pub use crate::options::FillMethod;
pub use crate::options::JoinKind;
pub use crate::options::JoinOptions;
pub use crate::options::OptionError;
pub use crate::table::dtype::Dtype;
pub use crate::table::value::Value;
pub use crate::table::ColumnData;
pub use crate::table::Record;
pub use crate::table::Table;
pub use crate::table::TableError;
