// ## File: `src/canonical/value.rs`

//! Tagged request values.
//!
//! Design notes:
//! - Every request parameter (query or body) is one of these variants, so the
//!   signing walk is an exhaustive match instead of runtime type inspection.
//! - Maps keep insertion order. Ordering for signing is applied by the extractor;
//!   the wire (query string / JSON body) keeps the caller's order.
//! - Scalar text must match the upstream's expected spelling exactly:
//!   `false`, `27466`, `1.5`, `1e+21`.

use serde_json::{Map, Number, Value};

#[derive(Debug, Clone, PartialEq)]
pub enum ParamValue {
    Null,
    Bool(bool),
    Int(i64),
    UInt(u64),
    Float(f64),
    Str(String),
    Seq(Vec<ParamValue>),
    Map(Vec<(String, ParamValue)>),
}

impl ParamValue {
    /// Empty map, the usual root of a body payload.
    pub fn map() -> Self {
        ParamValue::Map(Vec::new())
    }

    /// Builder-style insert for map values. No-op on other variants.
    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        if let ParamValue::Map(entries) = &mut self {
            entries.push((key.into(), value.into()));
        }
        self
    }

    pub fn kind(&self) -> &'static str {
        match self {
            ParamValue::Null => "null",
            ParamValue::Bool(_) => "bool",
            ParamValue::Int(_) | ParamValue::UInt(_) | ParamValue::Float(_) => "number",
            ParamValue::Str(_) => "string",
            ParamValue::Seq(_) => "sequence",
            ParamValue::Map(_) => "map",
        }
    }

    pub fn is_null(&self) -> bool {
        matches!(self, ParamValue::Null)
    }

    /// Canonical text of a scalar leaf. `None` for sequences and maps.
    pub fn scalar_text(&self) -> Option<String> {
        match self {
            ParamValue::Null => Some("null".to_string()),
            ParamValue::Bool(b) => Some(b.to_string()),
            ParamValue::Int(i) => Some(i.to_string()),
            ParamValue::UInt(u) => Some(u.to_string()),
            ParamValue::Float(f) => Some(format_number(*f)),
            ParamValue::Str(s) => Some(s.clone()),
            ParamValue::Seq(_) | ParamValue::Map(_) => None,
        }
    }

    /// JSON form used as the request body. Non-finite floats become `null`.
    pub fn to_json(&self) -> Value {
        match self {
            ParamValue::Null => Value::Null,
            ParamValue::Bool(b) => Value::Bool(*b),
            ParamValue::Int(i) => Value::Number((*i).into()),
            ParamValue::UInt(u) => Value::Number((*u).into()),
            ParamValue::Float(f) => Number::from_f64(*f).map(Value::Number).unwrap_or(Value::Null),
            ParamValue::Str(s) => Value::String(s.clone()),
            ParamValue::Seq(items) => Value::Array(items.iter().map(ParamValue::to_json).collect()),
            ParamValue::Map(entries) => {
                let mut out = Map::new();
                for (k, v) in entries {
                    out.insert(k.clone(), v.to_json());
                }
                Value::Object(out)
            }
        }
    }
}

/// Number text as the upstream expects it: shortest round-trip digits, no
/// trailing `.0`, exponent form outside `[1e-6, 1e21)` with an explicit sign.
pub fn format_number(v: f64) -> String {
    if v.is_nan() {
        return "NaN".to_string();
    }
    if v.is_infinite() {
        return if v > 0.0 { "Infinity".to_string() } else { "-Infinity".to_string() };
    }
    if v == 0.0 {
        // covers -0.0 as well
        return "0".to_string();
    }

    let abs = v.abs();
    if abs >= 1e21 || abs < 1e-6 {
        let s = format!("{:e}", v);
        match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{}e+{}", mantissa, exp),
            _ => s,
        }
    } else {
        format!("{}", v)
    }
}

impl From<&Value> for ParamValue {
    fn from(v: &Value) -> Self {
        match v {
            Value::Null => ParamValue::Null,
            Value::Bool(b) => ParamValue::Bool(*b),
            Value::Number(n) => {
                if let Some(i) = n.as_i64() {
                    ParamValue::Int(i)
                } else if let Some(u) = n.as_u64() {
                    ParamValue::UInt(u)
                } else {
                    ParamValue::Float(n.as_f64().unwrap_or(f64::NAN))
                }
            }
            Value::String(s) => ParamValue::Str(s.clone()),
            Value::Array(items) => ParamValue::Seq(items.iter().map(ParamValue::from).collect()),
            Value::Object(map) => ParamValue::Map(
                map.iter().map(|(k, v)| (k.clone(), ParamValue::from(v))).collect(),
            ),
        }
    }
}

impl From<Value> for ParamValue {
    fn from(v: Value) -> Self {
        ParamValue::from(&v)
    }
}

impl From<bool> for ParamValue {
    fn from(v: bool) -> Self {
        ParamValue::Bool(v)
    }
}

impl From<i32> for ParamValue {
    fn from(v: i32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<i64> for ParamValue {
    fn from(v: i64) -> Self {
        ParamValue::Int(v)
    }
}

impl From<u32> for ParamValue {
    fn from(v: u32) -> Self {
        ParamValue::Int(v as i64)
    }
}

impl From<u64> for ParamValue {
    fn from(v: u64) -> Self {
        ParamValue::UInt(v)
    }
}

impl From<f64> for ParamValue {
    fn from(v: f64) -> Self {
        ParamValue::Float(v)
    }
}

impl From<&str> for ParamValue {
    fn from(v: &str) -> Self {
        ParamValue::Str(v.to_string())
    }
}

impl From<String> for ParamValue {
    fn from(v: String) -> Self {
        ParamValue::Str(v)
    }
}

impl<T: Into<ParamValue>> From<Option<T>> for ParamValue {
    fn from(v: Option<T>) -> Self {
        v.map(Into::into).unwrap_or(ParamValue::Null)
    }
}

impl<T: Into<ParamValue>> From<Vec<T>> for ParamValue {
    fn from(v: Vec<T>) -> Self {
        ParamValue::Seq(v.into_iter().map(Into::into).collect())
    }
}

/// Flat, ordered query parameters.
///
/// Insertion order is what goes on the wire; signing sorts its own copy.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QueryParams {
    entries: Vec<(String, ParamValue)>,
}

impl QueryParams {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with(mut self, key: impl Into<String>, value: impl Into<ParamValue>) -> Self {
        self.insert(key, value);
        self
    }

    pub fn insert(&mut self, key: impl Into<String>, value: impl Into<ParamValue>) {
        self.entries.push((key.into(), value.into()));
    }

    /// Insert only when a value is present.
    pub fn insert_opt<T: Into<ParamValue>>(&mut self, key: impl Into<String>, value: Option<T>) {
        if let Some(v) = value {
            self.insert(key, v);
        }
    }

    pub fn get(&self, key: &str) -> Option<&ParamValue> {
        self.entries.iter().find(|(k, _)| k == key).map(|(_, v)| v)
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &ParamValue)> {
        self.entries.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// `(key, text)` pairs in insertion order for the outbound query string.
    /// Non-scalar values are skipped; signing rejects them anyway.
    pub fn to_query_pairs(&self) -> Vec<(String, String)> {
        self.entries
            .iter()
            .filter_map(|(k, v)| v.scalar_text().map(|t| (k.clone(), t)))
            .collect()
    }
}

impl<K: Into<String>, V: Into<ParamValue>> FromIterator<(K, V)> for QueryParams {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let mut params = QueryParams::new();
        for (k, v) in iter {
            params.insert(k, v);
        }
        params
    }
}
