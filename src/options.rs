//! # Options
//!
//! Named options accepted by the table operations, with their defaults and the
//! textual aliases they can be parsed from.
use std::collections::HashSet;
use std::fmt::Display;
use thiserror::Error;

/// Errors raised while parsing an option from its textual name.
#[derive(Error, Debug, Clone, PartialEq)]
pub enum OptionError {
    /// Unknown value supplied for a named option
    #[error("Invalid option '{name}': {message}")]
    InvalidOption { name: String, message: String },
}

/// Set semantics of a join: which unmatched rows survive.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum JoinKind {
    /// Only matched row pairs
    #[default]
    Inner,
    /// Matched pairs plus unmatched left rows
    Left,
    /// Matched pairs plus unmatched right rows
    Right,
    /// Matched pairs plus unmatched rows from both sides
    Outer,
}

impl JoinKind {
    /// Returns the canonical name of the join kind.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Inner => "inner",
            Self::Left => "left",
            Self::Right => "right",
            Self::Outer => "outer",
        }
    }

    /// Parses a join kind from its name.
    /// Supports various aliases for each kind.
    pub fn parse(name: &str) -> Result<Self, OptionError> {
        match name.to_ascii_uppercase().as_str() {
            "INNER" => Ok(Self::Inner),
            "LEFT" | "LEFT_OUTER" => Ok(Self::Left),
            "RIGHT" | "RIGHT_OUTER" => Ok(Self::Right),
            "OUTER" | "FULL" | "FULL_OUTER" => Ok(Self::Outer),
            _ => Err(OptionError::InvalidOption {
                name: "how".to_owned(),
                message: format!("'{name}' is not a join kind"),
            }),
        }
    }

    /// Returns true if left rows without a match are kept.
    #[inline]
    pub(crate) fn keeps_left(&self) -> bool {
        matches!(self, Self::Left | Self::Outer)
    }

    /// Returns true if right rows without a match are kept.
    #[inline]
    pub(crate) fn keeps_right(&self) -> bool {
        matches!(self, Self::Right | Self::Outer)
    }
}

impl Display for JoinKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Strategy used by `fill_na` to replace missing cells.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq)]
pub enum FillMethod {
    /// Replace every missing cell with a static value
    #[default]
    Value,
    /// Propagate the last present value downwards
    Forward,
    /// Propagate the next present value upwards
    Backward,
}

impl FillMethod {
    /// Returns the canonical name of the fill method.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Value => "value",
            Self::Forward => "ffill",
            Self::Backward => "bfill",
        }
    }

    /// Parses a fill method from its name.
    pub fn parse(name: &str) -> Result<Self, OptionError> {
        match name.to_ascii_uppercase().as_str() {
            "VALUE" | "STATIC" => Ok(Self::Value),
            "FFILL" | "FORWARD" | "PAD" => Ok(Self::Forward),
            "BFILL" | "BACKWARD" | "BACKFILL" => Ok(Self::Backward),
            _ => Err(OptionError::InvalidOption {
                name: "method".to_owned(),
                message: format!("'{name}' is not a fill method"),
            }),
        }
    }
}

impl Display for FillMethod {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

/// Options for joining two tables.
#[derive(Clone, Debug, PartialEq)]
pub struct JoinOptions {
    /// Which unmatched rows survive (default: inner)
    pub how: JoinKind,
    /// Suffix appended to right-side columns that collide with a left column (default: `_r`)
    pub suffix: String,
}

impl JoinOptions {
    /// Creates join options for the given kind with the default suffix.
    pub fn new(how: JoinKind) -> Self {
        JoinOptions {
            how,
            ..Default::default()
        }
    }
}

impl Default for JoinOptions {
    fn default() -> Self {
        JoinOptions {
            how: JoinKind::Inner,
            suffix: "_r".to_owned(),
        }
    }
}

/// Options for building a table from a 2-D array.
#[derive(Clone, Debug, PartialEq)]
pub struct ArrayOptions {
    /// Whether the first row holds the column names (default: true).
    /// Without a header, names are generated as `col1`, `col2`, ...
    pub header: bool,
    /// String literals read as null (default: none)
    pub nulls: HashSet<String>,
}

impl Default for ArrayOptions {
    fn default() -> Self {
        ArrayOptions {
            header: true,
            nulls: HashSet::new(),
        }
    }
}
