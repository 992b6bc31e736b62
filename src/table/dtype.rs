use crate::options::OptionError;
use crate::table::value::Value;
use std::fmt::Display;

/// Inferred semantic type of a column.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub enum Dtype {
    /// Every present value is a number
    Number,
    /// Every present value is a string
    String,
    /// Present values of more than one kind, or booleans
    Mixed,
    /// The column holds at least one NaN number
    Undefined,
}

impl Dtype {
    /// Returns the string representation of the dtype.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Dtype::Number => "number",
            Dtype::String => "string",
            Dtype::Mixed => "mixed",
            Dtype::Undefined => "undefined",
        }
    }

    /// Parses a dtype from its string representation.
    pub fn parse(name: &str) -> Result<Self, OptionError> {
        match name.to_ascii_uppercase().as_str() {
            "NUMBER" => Ok(Self::Number),
            "STRING" => Ok(Self::String),
            "MIXED" => Ok(Self::Mixed),
            "UNDEFINED" => Ok(Self::Undefined),
            _ => Err(OptionError::InvalidOption {
                name: "dtype".to_owned(),
                message: format!("'{name}' is not a dtype"),
            }),
        }
    }

    /// Detects the dtype of a column from its values.
    ///
    /// A single NaN poisons the column to `Undefined`. Otherwise nulls are
    /// ignored and the remaining values must all be numbers or all be strings.
    /// A column without any present value is `Number`.
    pub fn detect<'a, I>(values: I) -> Dtype
    where
        I: IntoIterator<Item = &'a Value>,
    {
        let mut is_number = true;
        let mut is_string = true;
        for value in values {
            match value {
                Value::Null => (),
                Value::Number(number) if number.is_nan() => return Dtype::Undefined,
                Value::Number(_) => is_string = false,
                Value::String(_) => is_number = false,
                Value::Boolean(_) => {
                    is_number = false;
                    is_string = false;
                }
            }
        }
        if is_number {
            Dtype::Number
        } else if is_string {
            Dtype::String
        } else {
            Dtype::Mixed
        }
    }
}

impl Display for Dtype {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}
