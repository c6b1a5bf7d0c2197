//! Value kind classification

use serde::{Deserialize, Serialize};
use serde_json::Value;

/// Primitive kind of a single JSON value
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum ValueKind {
    Number,
    String,
    Boolean,
    Array,
    Object,
    Null,
}

impl ValueKind {
    /// Display name, as used in column descriptors
    pub fn name(&self) -> &'static str {
        match self {
            ValueKind::Number => "Number",
            ValueKind::String => "String",
            ValueKind::Boolean => "Boolean",
            ValueKind::Array => "Array",
            ValueKind::Object => "Object",
            ValueKind::Null => "Null",
        }
    }
}

impl std::fmt::Display for ValueKind {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Classify a JSON value into its primitive kind
pub fn classify(value: &Value) -> ValueKind {
    match value {
        Value::Null => ValueKind::Null,
        Value::Bool(_) => ValueKind::Boolean,
        Value::Number(_) => ValueKind::Number,
        Value::String(_) => ValueKind::String,
        Value::Array(_) => ValueKind::Array,
        Value::Object(_) => ValueKind::Object,
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_classify_every_kind() {
        assert_eq!(classify(&json!(42)), ValueKind::Number);
        assert_eq!(classify(&json!(-1.5)), ValueKind::Number);
        assert_eq!(classify(&json!("text")), ValueKind::String);
        assert_eq!(classify(&json!(true)), ValueKind::Boolean);
        assert_eq!(classify(&json!([1, 2])), ValueKind::Array);
        assert_eq!(classify(&json!({"a": 1})), ValueKind::Object);
        assert_eq!(classify(&Value::Null), ValueKind::Null);
    }

    #[test]
    fn test_display_name() {
        assert_eq!(ValueKind::Boolean.to_string(), "Boolean");
    }
}
