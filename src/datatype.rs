// used to print out readable forms of a data type
use std::fmt;

/// Types that can live inside a [`Value`].
///
/// Each implementing type carries a stable identifier (`UID`) and a constant
/// type name (`DATA_TYPE`) enabling heterogeneous indexing, plus checked
/// conversions into and out of the tagged union.
pub trait DataType: fmt::Debug + Clone + PartialEq + PartialOrd + Send + Sync {
    // static stuff which needs to be implemented downstream
    const UID: u8;
    const DATA_TYPE: &'static str;
    fn wrap(self) -> Value;
    fn peel(value: &Value) -> Option<&Self>;
    // instance callable with pre-made implementation
    fn data_type(&self) -> &'static str {
        Self::DATA_TYPE
    }
    fn identifier(&self) -> u8 {
        Self::UID
    }
}

// ------------- Value -------------
/// A runtime-tagged value, one variant per supported concrete type.
///
/// The stored concrete type of a key is whatever was last inserted under it.
/// Reading a variant back as the wrong type is a recoverable mismatch, never
/// a reinterpretation.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    Int(i64),
    Unsigned(u64),
    Float(f64),
    Bool(bool),
    Text(String),
    TextList(Vec<String>),
    IntList(Vec<i64>),
    FloatList(Vec<f64>),
}

impl Value {
    pub fn data_type(&self) -> &'static str {
        match self {
            Value::Int(_) => i64::DATA_TYPE,
            Value::Unsigned(_) => u64::DATA_TYPE,
            Value::Float(_) => f64::DATA_TYPE,
            Value::Bool(_) => bool::DATA_TYPE,
            Value::Text(_) => String::DATA_TYPE,
            Value::TextList(_) => Vec::<String>::DATA_TYPE,
            Value::IntList(_) => Vec::<i64>::DATA_TYPE,
            Value::FloatList(_) => Vec::<f64>::DATA_TYPE,
        }
    }
    pub fn identifier(&self) -> u8 {
        match self {
            Value::Int(_) => i64::UID,
            Value::Unsigned(_) => u64::UID,
            Value::Float(_) => f64::UID,
            Value::Bool(_) => bool::UID,
            Value::Text(_) => String::UID,
            Value::TextList(_) => Vec::<String>::UID,
            Value::IntList(_) => Vec::<i64>::UID,
            Value::FloatList(_) => Vec::<f64>::UID,
        }
    }
}

// ------------- Data Types --------------
impl DataType for i64 {
    const UID: u8 = 1;
    const DATA_TYPE: &'static str = "i64";
    fn wrap(self) -> Value {
        Value::Int(self)
    }
    fn peel(value: &Value) -> Option<&i64> {
        match value {
            Value::Int(v) => Some(v),
            _ => None,
        }
    }
}
impl DataType for u64 {
    const UID: u8 = 2;
    const DATA_TYPE: &'static str = "u64";
    fn wrap(self) -> Value {
        Value::Unsigned(self)
    }
    fn peel(value: &Value) -> Option<&u64> {
        match value {
            Value::Unsigned(v) => Some(v),
            _ => None,
        }
    }
}
impl DataType for f64 {
    const UID: u8 = 3;
    const DATA_TYPE: &'static str = "f64";
    fn wrap(self) -> Value {
        Value::Float(self)
    }
    fn peel(value: &Value) -> Option<&f64> {
        match value {
            Value::Float(v) => Some(v),
            _ => None,
        }
    }
}
impl DataType for bool {
    const UID: u8 = 4;
    const DATA_TYPE: &'static str = "bool";
    fn wrap(self) -> Value {
        Value::Bool(self)
    }
    fn peel(value: &Value) -> Option<&bool> {
        match value {
            Value::Bool(v) => Some(v),
            _ => None,
        }
    }
}
impl DataType for String {
    const UID: u8 = 5;
    const DATA_TYPE: &'static str = "String";
    fn wrap(self) -> Value {
        Value::Text(self)
    }
    fn peel(value: &Value) -> Option<&String> {
        match value {
            Value::Text(v) => Some(v),
            _ => None,
        }
    }
}
impl DataType for Vec<String> {
    const UID: u8 = 6;
    const DATA_TYPE: &'static str = "Vec<String>";
    fn wrap(self) -> Value {
        Value::TextList(self)
    }
    fn peel(value: &Value) -> Option<&Vec<String>> {
        match value {
            Value::TextList(v) => Some(v),
            _ => None,
        }
    }
}
impl DataType for Vec<i64> {
    const UID: u8 = 7;
    const DATA_TYPE: &'static str = "Vec<i64>";
    fn wrap(self) -> Value {
        Value::IntList(self)
    }
    fn peel(value: &Value) -> Option<&Vec<i64>> {
        match value {
            Value::IntList(v) => Some(v),
            _ => None,
        }
    }
}
impl DataType for Vec<f64> {
    const UID: u8 = 8;
    const DATA_TYPE: &'static str = "Vec<f64>";
    fn wrap(self) -> Value {
        Value::FloatList(self)
    }
    fn peel(value: &Value) -> Option<&Vec<f64>> {
        match value {
            Value::FloatList(v) => Some(v),
            _ => None,
        }
    }
}
