use serde_json::{Map, Value};
use crate::errors::*;

/**
 * A position inside a parsed account document.
 *
 * Every accessor reports failures as a `SchemaMismatch` carrying the dotted
 * path of the offending field, e.g. `transactions[0].transaction.amount`.
 */
#[derive(Debug, Clone)]
pub struct Node<'a> {
    value: &'a Value,
    path: String,
}

impl<'a> Node<'a> {
    pub fn root(value: &'a Value) -> Self {
        Node { value, path: String::new() }
    }

    pub fn value(&self) -> &'a Value {
        self.value
    }

    pub fn path(&self) -> &str {
        if self.path.is_empty() { "$" } else { &self.path }
    }

    pub fn mismatch(&self, msg: &str) -> Error {
        ErrorKind::SchemaMismatch(self.path().to_owned(), msg.to_owned()).into()
    }

    fn child_path(&self, key: &str) -> String {
        if self.path.is_empty() {
            key.to_owned()
        } else {
            format!("{}.{}", self.path, key)
        }
    }

    fn object(&self) -> Result<&'a Map<String, Value>> {
        match self.value {
            Value::Object(map) => Ok(map),
            other => Err(self.mismatch(&format!("expected object, found {}", kind(other)))),
        }
    }

    /**
     * A field that must be present and non-null.
     */
    pub fn field(&self, key: &str) -> Result<Node<'a>> {
        let path = self.child_path(key);
        match self.object()?.get(key) {
            Some(Value::Null) => Err(ErrorKind::SchemaMismatch(path, "null where a value is required".to_owned()).into()),
            Some(value) => Ok(Node { value, path }),
            None => Err(ErrorKind::SchemaMismatch(path, "missing required field".to_owned()).into()),
        }
    }

    /**
     * A field that may be absent. Missing keys and JSON `null` both come back as `None`.
     */
    pub fn optional_field(&self, key: &str) -> Result<Option<Node<'a>>> {
        match self.object()?.get(key) {
            None | Some(Value::Null) => Ok(None),
            Some(value) => Ok(Some(Node { value, path: self.child_path(key) })),
        }
    }

    pub fn items(&self) -> Result<Vec<Node<'a>>> {
        match self.value {
            Value::Array(values) => Ok(values
                .iter()
                .enumerate()
                .map(|(i, value)| Node { value, path: format!("{}[{}]", self.path, i) })
                .collect()),
            other => Err(self.mismatch(&format!("expected array, found {}", kind(other)))),
        }
    }

    pub fn as_str(&self) -> Result<&'a str> {
        match self.value {
            Value::String(s) => Ok(s),
            other => Err(self.mismatch(&format!("expected string, found {}", kind(other)))),
        }
    }

    pub fn as_bool(&self) -> Result<bool> {
        match self.value {
            Value::Bool(b) => Ok(*b),
            other => Err(self.mismatch(&format!("expected boolean, found {}", kind(other)))),
        }
    }

    pub fn as_u64(&self) -> Result<u64> {
        self.value
            .as_u64()
            .ok_or_else(|| self.mismatch(&format!("expected non-negative integer, found {}", self.value)))
    }

    pub fn as_i64(&self) -> Result<i64> {
        self.value
            .as_i64()
            .ok_or_else(|| self.mismatch(&format!("expected integer, found {}", self.value)))
    }

    pub fn str_field(&self, key: &str) -> Result<String> {
        Ok(self.field(key)?.as_str()?.to_owned())
    }

    pub fn optional_str_field(&self, key: &str) -> Result<Option<String>> {
        match self.optional_field(key)? {
            Some(node) => Ok(Some(node.as_str()?.to_owned())),
            None => Ok(None),
        }
    }

    pub fn bool_field(&self, key: &str) -> Result<bool> {
        self.field(key)?.as_bool()
    }

    pub fn u64_field(&self, key: &str) -> Result<u64> {
        self.field(key)?.as_u64()
    }
}

fn kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "boolean",
        Value::Number(_) => "number",
        Value::String(_) => "string",
        Value::Array(_) => "array",
        Value::Object(_) => "object",
    }
}
