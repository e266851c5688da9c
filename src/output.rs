use serde::Serialize;
use serde_json::Value;

/// A value prepared for display, tagged with its shape at the point it was
/// produced. This makes the null-normalization rules a straight match instead
/// of after-the-fact inspection of a generic value.
#[derive(Debug, Clone, PartialEq)]
pub enum Displayable {
    /// No value at all (e.g. the error slot of a successful call).
    None,
    /// A scalar such as a string or number.
    Scalar(Value),
    /// An object-shaped value.
    Record(Value),
    /// An array-shaped value.
    Sequence(Value),
    /// The value refused to serialize.
    MarshalFailed,
}

impl Displayable {
    pub fn record<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Displayable::Record(v),
            Err(_) => Displayable::MarshalFailed,
        }
    }

    pub fn sequence<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Displayable::Sequence(v),
            Err(_) => Displayable::MarshalFailed,
        }
    }

    pub fn scalar<T: Serialize>(value: T) -> Self {
        match serde_json::to_value(value) {
            Ok(v) => Displayable::Scalar(v),
            Err(_) => Displayable::MarshalFailed,
        }
    }
}

/// Serialize a display value for printing. Absent values render as the empty
/// string; a record or sequence whose JSON form is the null literal renders
/// as `{}` or `[]` so callers get a stable "empty but present" shape.
pub fn render(value: &Displayable) -> String {
    match value {
        Displayable::None => String::new(),
        Displayable::Scalar(Value::Null) => String::new(),
        Displayable::Scalar(Value::String(s)) if s.is_empty() => String::new(),
        Displayable::Scalar(v) => v.to_string(),
        Displayable::Record(Value::Null) => "{}".to_string(),
        Displayable::Record(v) => v.to_string(),
        Displayable::Sequence(Value::Null) => "[]".to_string(),
        Displayable::Sequence(v) => v.to_string(),
        Displayable::MarshalFailed => "marshal fail".to_string(),
    }
}
