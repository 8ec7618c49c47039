use serde::{Serialize, Serializer};

/// One element of a numeric-noise payload: a valid number or one of the
/// junk values used to probe input validation.
#[derive(Debug, Clone, PartialEq)]
pub enum NoiseValue {
    Int(i64),
    Float(f64),
    EmptyString,
    Absent,
    Token(String),
}

impl NoiseValue {
    /// Numeric view of the element, `None` for every non-numeric variant.
    pub fn as_number(&self) -> Option<f64> {
        match self {
            NoiseValue::Int(i) => Some(*i as f64),
            NoiseValue::Float(f) => Some(*f),
            _ => None,
        }
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            NoiseValue::Int(_) => "int",
            NoiseValue::Float(_) => "float",
            NoiseValue::EmptyString | NoiseValue::Token(_) => "str",
            NoiseValue::Absent => "null",
        }
    }
}

impl Serialize for NoiseValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            NoiseValue::Int(i) => serializer.serialize_i64(*i),
            NoiseValue::Float(f) => serializer.serialize_f64(*f),
            NoiseValue::EmptyString => serializer.serialize_str(""),
            NoiseValue::Absent => serializer.serialize_none(),
            NoiseValue::Token(t) => serializer.serialize_str(t),
        }
    }
}
