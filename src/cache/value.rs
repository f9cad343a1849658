//! Cache Value Module
//!
//! The four scalar kinds a cache entry can hold, their byte encodings, and
//! the standard decode functions for reading them back.

use serde::Serialize;

use crate::error::{CacheError, Result};

// == Value ==
/// A storable scalar: string, raw bytes, integer or float.
///
/// Values are opaque to the cache. They travel to the store encoded as bytes
/// and come back byte-for-byte; any interpretation happens at read time
/// through a decode function.
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// UTF-8 text
    Str(String),
    /// Raw bytes
    Bytes(Vec<u8>),
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit float
    Float(f64),
}

impl Value {
    // == Encoding ==
    /// Encodes the value into the bytes sent to the store.
    ///
    /// Strings become their UTF-8 bytes, integers and floats their base-10
    /// decimal text, and raw bytes pass through untouched. The numeric
    /// encodings round-trip exactly through [`decode_int`] and
    /// [`decode_float`].
    pub fn into_bytes(self) -> Vec<u8> {
        match self {
            Value::Str(s) => s.into_bytes(),
            Value::Bytes(b) => b,
            Value::Int(i) => i.to_string().into_bytes(),
            Value::Float(f) => f.to_string().into_bytes(),
        }
    }

    // == Kind ==
    /// Returns a short name for the kind, used in diagnostics.
    pub fn kind(&self) -> &'static str {
        match self {
            Value::Str(_) => "str",
            Value::Bytes(_) => "bytes",
            Value::Int(_) => "int",
            Value::Float(_) => "float",
        }
    }
}

// == From Impls ==
impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::Str(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::Str(s)
    }
}

impl From<&[u8]> for Value {
    fn from(b: &[u8]) -> Self {
        Value::Bytes(b.to_vec())
    }
}

impl From<Vec<u8>> for Value {
    fn from(b: Vec<u8>) -> Self {
        Value::Bytes(b)
    }
}

impl From<i64> for Value {
    fn from(i: i64) -> Self {
        Value::Int(i)
    }
}

impl From<f64> for Value {
    fn from(f: f64) -> Self {
        Value::Float(f)
    }
}

// == Dynamic Conversion ==
impl TryFrom<serde_json::Value> for Value {
    type Error = CacheError;

    /// Accepts the JSON scalars matching the four kinds.
    ///
    /// Null, booleans, arrays and objects are rejected with
    /// [`CacheError::TypeMismatch`] before any store interaction. Integral
    /// JSON numbers become [`Value::Int`]; anything else numeric becomes
    /// [`Value::Float`].
    fn try_from(json: serde_json::Value) -> Result<Self> {
        match json {
            serde_json::Value::String(s) => Ok(Value::Str(s)),
            serde_json::Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    Ok(Value::Int(i))
                } else if let Some(f) = n.as_f64() {
                    Ok(Value::Float(f))
                } else {
                    Err(CacheError::TypeMismatch(format!(
                        "JSON number {} has no scalar representation",
                        n
                    )))
                }
            }
            other => Err(CacheError::TypeMismatch(format!(
                "cannot store JSON {}: accepted kinds are str, bytes, int and float",
                json_kind(&other)
            ))),
        }
    }
}

/// Names a JSON value's kind for error messages.
fn json_kind(json: &serde_json::Value) -> &'static str {
    match json {
        serde_json::Value::Null => "null",
        serde_json::Value::Bool(_) => "bool",
        serde_json::Value::Number(_) => "number",
        serde_json::Value::String(_) => "string",
        serde_json::Value::Array(_) => "array",
        serde_json::Value::Object(_) => "object",
    }
}

// == Decode Functions ==
/// Decodes raw stored bytes as UTF-8 text.
///
/// Fails with [`CacheError::Decode`] if the bytes are not valid UTF-8.
pub fn decode_str(raw: Vec<u8>) -> Result<String> {
    String::from_utf8(raw).map_err(|e| CacheError::Decode(format!("invalid UTF-8: {}", e)))
}

/// Decodes raw stored bytes as a base-10 integer.
///
/// Surrounding ASCII whitespace is tolerated; anything else fails with
/// [`CacheError::Decode`].
pub fn decode_int(raw: Vec<u8>) -> Result<i64> {
    let text = std::str::from_utf8(&raw)
        .map_err(|e| CacheError::Decode(format!("invalid UTF-8 in integer: {}", e)))?;
    text.trim()
        .parse::<i64>()
        .map_err(|_| CacheError::Decode(format!("not a base-10 integer: {:?}", text)))
}

/// Decodes raw stored bytes as a float.
pub fn decode_float(raw: Vec<u8>) -> Result<f64> {
    let text = std::str::from_utf8(&raw)
        .map_err(|e| CacheError::Decode(format!("invalid UTF-8 in float: {}", e)))?;
    text.trim()
        .parse::<f64>()
        .map_err(|_| CacheError::Decode(format!("not a float: {:?}", text)))
}

// == Unit Tests ==
#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_str_encodes_to_utf8() {
        assert_eq!(Value::from("tomato").into_bytes(), b"tomato".to_vec());
    }

    #[test]
    fn test_bytes_pass_through() {
        let raw = vec![0u8, 159, 146, 150];
        assert_eq!(Value::from(raw.clone()).into_bytes(), raw);
    }

    #[test]
    fn test_int_encodes_as_decimal_text() {
        assert_eq!(Value::from(42i64).into_bytes(), b"42".to_vec());
        assert_eq!(Value::from(-7i64).into_bytes(), b"-7".to_vec());
    }

    #[test]
    fn test_float_encoding_round_trips() {
        let encoded = Value::from(3.14).into_bytes();
        assert_eq!(decode_float(encoded).unwrap(), 3.14);
    }

    #[test]
    fn test_kind_names() {
        assert_eq!(Value::from("x").kind(), "str");
        assert_eq!(Value::from(vec![1u8]).kind(), "bytes");
        assert_eq!(Value::from(1i64).kind(), "int");
        assert_eq!(Value::from(1.5).kind(), "float");
    }

    #[test]
    fn test_json_scalars_are_accepted() {
        assert_eq!(
            Value::try_from(serde_json::json!("abc")).unwrap(),
            Value::Str("abc".to_string())
        );
        assert_eq!(
            Value::try_from(serde_json::json!(42)).unwrap(),
            Value::Int(42)
        );
        assert_eq!(
            Value::try_from(serde_json::json!(2.5)).unwrap(),
            Value::Float(2.5)
        );
    }

    #[test]
    fn test_json_non_scalars_are_rejected() {
        for json in [
            serde_json::json!(null),
            serde_json::json!(true),
            serde_json::json!([1, 2, 3]),
            serde_json::json!({"a": 1}),
        ] {
            let result = Value::try_from(json);
            assert!(matches!(result, Err(CacheError::TypeMismatch(_))));
        }
    }

    #[test]
    fn test_huge_json_number_falls_back_to_float() {
        let json = serde_json::json!(u64::MAX);
        assert!(matches!(Value::try_from(json).unwrap(), Value::Float(_)));
    }

    #[test]
    fn test_serialize_as_bare_scalar() {
        assert_eq!(serde_json::to_string(&Value::from(5i64)).unwrap(), "5");
        assert_eq!(
            serde_json::to_string(&Value::from("abc")).unwrap(),
            "\"abc\""
        );
    }

    #[test]
    fn test_decode_str_valid_and_invalid() {
        assert_eq!(decode_str(b"hello".to_vec()).unwrap(), "hello");

        let result = decode_str(vec![0xff, 0xfe]);
        assert!(matches!(result, Err(CacheError::Decode(_))));
    }

    #[test]
    fn test_decode_int_accepts_surrounding_whitespace() {
        assert_eq!(decode_int(b" 42 ".to_vec()).unwrap(), 42);
        assert_eq!(decode_int(b"-13".to_vec()).unwrap(), -13);
    }

    #[test]
    fn test_decode_int_rejects_text() {
        let result = decode_int(b"not-a-number".to_vec());
        assert!(matches!(result, Err(CacheError::Decode(_))));
    }

    #[test]
    fn test_decode_int_rejects_empty() {
        let result = decode_int(Vec::new());
        assert!(matches!(result, Err(CacheError::Decode(_))));
    }
}
