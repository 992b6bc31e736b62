use serde::Deserialize;
use serde::Serialize;
use std::fmt::Display;

/// A single cell of a table.
///
/// The derived equality is strict: values of different variants never compare
/// equal, `Null == Null`, and a NaN number is unequal to everything including
/// itself. A NaN number marks an invalid-but-present cell, which is distinct
/// from a missing (`Null`) one.
#[derive(Clone, Debug, Default, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Value {
    /// Missing value
    #[default]
    Null,
    /// Boolean value
    Boolean(bool),
    /// Numeric value, possibly NaN
    Number(f64),
    /// String value
    String(String),
}

impl Value {
    /// Returns true if the cell is missing.
    #[inline]
    pub fn is_null(&self) -> bool {
        matches!(self, Value::Null)
    }

    /// Returns true if the cell holds a NaN number.
    #[inline]
    pub fn is_nan(&self) -> bool {
        matches!(self, Value::Number(number) if number.is_nan())
    }

    /// Returns the number held by the cell, if it is a valid (non-NaN) number.
    #[inline]
    pub fn as_number(&self) -> Option<f64> {
        match self {
            Value::Number(number) if !number.is_nan() => Some(*number),
            _ => None,
        }
    }

    /// Returns the string held by the cell.
    #[inline]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(string) => Some(string.as_str()),
            _ => None,
        }
    }

    /// Returns the boolean held by the cell.
    #[inline]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            Value::Boolean(boolean) => Some(*boolean),
            _ => None,
        }
    }

    /// Equality used for de-duplication: like `==`, except that NaN equals NaN.
    pub fn same_value(&self, other: &Value) -> bool {
        self == other || (self.is_nan() && other.is_nan())
    }

    /// Returns the type name of this value.
    pub const fn type_name(&self) -> &'static str {
        match self {
            Value::Null => "null",
            Value::Boolean(_) => "boolean",
            Value::Number(_) => "number",
            Value::String(_) => "string",
        }
    }
}

impl Display for Value {
    /// Renders the value the way it reads as a column name.
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Value::Null => write!(f, "null"),
            Value::Boolean(boolean) => write!(f, "{}", boolean),
            Value::Number(number) if number.is_nan() => write!(f, "NaN"),
            Value::Number(number) if number.is_infinite() => {
                write!(f, "{}", if *number > 0.0 { "Infinity" } else { "-Infinity" })
            }
            Value::Number(number) if *number == 0.0 => write!(f, "0"), // -0 reads as 0
            Value::Number(number) if number.abs() >= 1e21 || number.abs() < 1e-6 => {
                // exponent form with an explicit sign: 1e+21, 1.5e-7
                let text = format!("{:e}", number);
                match text.split_once('e') {
                    Some((mantissa, exponent)) if !exponent.starts_with('-') => write!(f, "{mantissa}e+{exponent}"),
                    _ => write!(f, "{}", text),
                }
            }
            Value::Number(number) => write!(f, "{}", number),
            Value::String(string) => write!(f, "{}", string),
        }
    }
}

impl From<bool> for Value {
    fn from(value: bool) -> Self {
        Value::Boolean(value)
    }
}

impl From<f64> for Value {
    fn from(value: f64) -> Self {
        Value::Number(value)
    }
}

impl From<f32> for Value {
    fn from(value: f32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i32> for Value {
    fn from(value: i32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<i64> for Value {
    fn from(value: i64) -> Self {
        Value::Number(value as f64)
    }
}

impl From<u32> for Value {
    fn from(value: u32) -> Self {
        Value::Number(value as f64)
    }
}

impl From<usize> for Value {
    fn from(value: usize) -> Self {
        Value::Number(value as f64)
    }
}

impl From<&str> for Value {
    fn from(value: &str) -> Self {
        Value::String(value.to_owned())
    }
}

impl From<String> for Value {
    fn from(value: String) -> Self {
        Value::String(value)
    }
}

impl<T: Into<Value>> From<Option<T>> for Value {
    fn from(value: Option<T>) -> Self {
        match value {
            Some(inner) => inner.into(),
            None => Value::Null,
        }
    }
}
