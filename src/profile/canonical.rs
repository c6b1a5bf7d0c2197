//! Canonical textual encoding of JSON values
//!
//! Every distinctness and key-uniqueness check compares values by this
//! encoding rather than by structural equality. Numerically equal integers
//! and integral floats (`1` and `1.0`) encode identically, and object keys
//! are always emitted in sorted order so input key order never matters.

use serde_json::{Number, Value};

/// Encoding of a null (or absent) value
pub const NULL_SENTINEL: &str = "null";

/// Encode a value into its canonical string form
pub fn canonical_string(value: &Value) -> String {
    let mut out = String::new();
    write_canonical(value, &mut out);
    out
}

/// Append the canonical form of a value to `out`
pub fn write_canonical(value: &Value, out: &mut String) {
    match value {
        Value::Null => out.push_str(NULL_SENTINEL),
        Value::Bool(true) => out.push_str("true"),
        Value::Bool(false) => out.push_str("false"),
        Value::Number(n) => write_number(n, out),
        // Display on a string value yields the escaped JSON literal
        Value::String(_) => out.push_str(&value.to_string()),
        Value::Array(items) => {
            out.push('[');
            for (i, item) in items.iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                write_canonical(item, out);
            }
            out.push(']');
        }
        Value::Object(map) => {
            let mut entries: Vec<(&String, &Value)> = map.iter().collect();
            entries.sort_by(|a, b| a.0.cmp(b.0));

            out.push('{');
            for (i, (key, item)) in entries.into_iter().enumerate() {
                if i > 0 {
                    out.push(',');
                }
                out.push_str(&Value::String(key.clone()).to_string());
                out.push(':');
                write_canonical(item, out);
            }
            out.push('}');
        }
    }
}

fn write_number(n: &Number, out: &mut String) {
    if let Some(i) = n.as_i64() {
        out.push_str(&i.to_string());
    } else if let Some(u) = n.as_u64() {
        out.push_str(&u.to_string());
    } else if let Some(f) = n.as_f64() {
        // Integral floats convert exactly whenever they fit the integer range
        if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
            out.push_str(&(f as i64).to_string());
        } else if f.fract() == 0.0 && f >= 0.0 && f < u64::MAX as f64 {
            out.push_str(&(f as u64).to_string());
        } else {
            out.push_str(&n.to_string());
        }
    } else {
        out.push_str(&n.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_integral_float_matches_integer() {
        assert_eq!(canonical_string(&json!(1)), canonical_string(&json!(1.0)));
        assert_eq!(canonical_string(&json!(1.0)), "1");
        assert_eq!(canonical_string(&json!(-0.0)), "0");
    }

    #[test]
    fn test_integral_float_beyond_exact_range_matches_integer() {
        let int: Value = serde_json::from_str("9007199254740994").unwrap();
        let float: Value = serde_json::from_str("9007199254740994.0").unwrap();
        assert_eq!(canonical_string(&int), canonical_string(&float));
        assert_eq!(canonical_string(&float), "9007199254740994");

        let big_int: Value = serde_json::from_str("9223372036854775808").unwrap();
        let big_float: Value = serde_json::from_str("9223372036854775808.0").unwrap();
        assert_eq!(canonical_string(&big_int), canonical_string(&big_float));
    }

    #[test]
    fn test_fractional_and_large_numbers() {
        assert_eq!(canonical_string(&json!(2.5)), "2.5");
        assert_eq!(canonical_string(&json!(u64::MAX)), u64::MAX.to_string());
        assert_ne!(canonical_string(&json!(1e300)), "1");
    }

    #[test]
    fn test_string_is_quoted_and_escaped() {
        assert_eq!(canonical_string(&json!("a\"b")), r#""a\"b""#);
        // A string holding the text null must not collide with null itself
        assert_ne!(canonical_string(&json!("null")), NULL_SENTINEL);
    }

    #[test]
    fn test_object_keys_are_sorted() {
        let a: Value = serde_json::from_str(r#"{"b": 1, "a": [true, null]}"#).unwrap();
        let b: Value = serde_json::from_str(r#"{"a": [true, null], "b": 1.0}"#).unwrap();
        assert_eq!(canonical_string(&a), r#"{"a":[true,null],"b":1}"#);
        assert_eq!(canonical_string(&a), canonical_string(&b));
    }

    #[test]
    fn test_array_order_is_significant() {
        assert_ne!(
            canonical_string(&json!([1, 2])),
            canonical_string(&json!([2, 1]))
        );
    }
}
