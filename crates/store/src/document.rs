//! Document, filter and operation result types

use serde::Serialize;
use serde_json::{Map, Value};
use uuid::Uuid;

use crate::error::StoreError;

/// Field holding a document's identifier (a UUID string)
pub const ID_FIELD: &str = "_id";

/// A schema-flexible document
pub type Document = Map<String, Value>;

/// Field-equality filter. An empty filter matches every document.
///
/// Each condition holds when the document's field *contains* the expected
/// value, with JSONB `@>` semantics: scalars compare equal, an object
/// matches when every expected key is contained, an array matches when every
/// expected element is contained in some stored element. Both backends
/// evaluate filters this way, so `{"tags": ["sale"]}` matches a document
/// tagged `["new", "sale"]` on either of them.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Filter {
    fields: Map<String, Value>,
}

impl Filter {
    /// Match every document
    pub fn all() -> Self {
        Self::default()
    }

    /// Match documents whose `field` equals `value`
    pub fn eq(field: impl Into<String>, value: impl Into<Value>) -> Self {
        Self::all().and(field, value)
    }

    /// Match the document with the given identifier
    pub fn by_id(id: Uuid) -> Self {
        Self::eq(ID_FIELD, id.to_string())
    }

    /// Add another equality condition
    pub fn and(mut self, field: impl Into<String>, value: impl Into<Value>) -> Self {
        self.fields.insert(field.into(), value.into());
        self
    }

    pub fn is_empty(&self) -> bool {
        self.fields.is_empty()
    }

    pub fn matches(&self, document: &Document) -> bool {
        self.fields.iter().all(|(field, expected)| {
            document
                .get(field)
                .is_some_and(|stored| contains(stored, expected))
        })
    }

    /// Filter as a JSON object, suitable for JSONB containment (`@>`)
    pub fn to_json(&self) -> Value {
        Value::Object(self.fields.clone())
    }
}

/// Nested JSONB containment (`stored @> expected`)
fn contains(stored: &Value, expected: &Value) -> bool {
    match (stored, expected) {
        (Value::Object(stored), Value::Object(expected)) => expected.iter().all(|(key, value)| {
            stored
                .get(key)
                .is_some_and(|inner| contains(inner, value))
        }),
        (Value::Array(stored), Value::Array(expected)) => expected
            .iter()
            .all(|value| stored.iter().any(|inner| contains(inner, value))),
        (Value::Number(a), Value::Number(b)) => a.as_f64() == b.as_f64(),
        _ => stored == expected,
    }
}

/// Result of `insert_one`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct InsertResult {
    pub acknowledged: bool,
    pub inserted_id: String,
}

/// Result of `update_one`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct UpdateResult {
    pub acknowledged: bool,
    pub matched_count: u64,
    pub modified_count: u64,
}

/// Result of `delete_one`
#[derive(Debug, Clone, PartialEq, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct DeleteResult {
    pub acknowledged: bool,
    pub deleted_count: u64,
}

/// Resolve the identifier of a document about to be inserted.
///
/// Keeps a caller-supplied `_id` when it is a UUID string, assigns a fresh
/// one when absent.
pub(crate) fn prepare_insert(mut document: Document) -> Result<(Uuid, Document), StoreError> {
    let id = match document.get(ID_FIELD) {
        None => Uuid::new_v4(),
        Some(Value::String(raw)) => Uuid::parse_str(raw).map_err(|_| {
            StoreError::InvalidDocument(format!("{} must be a UUID, got {:?}", ID_FIELD, raw))
        })?,
        Some(other) => {
            return Err(StoreError::InvalidDocument(format!(
                "{} must be a string, got {}",
                ID_FIELD, other
            )))
        }
    };

    document.insert(ID_FIELD.to_string(), Value::String(id.to_string()));
    Ok((id, document))
}

/// Reject updates that would rewrite a document's identifier
pub(crate) fn check_update(set: &Document) -> Result<(), StoreError> {
    if set.contains_key(ID_FIELD) {
        return Err(StoreError::InvalidDocument(format!(
            "{} cannot be updated",
            ID_FIELD
        )));
    }
    Ok(())
}

pub(crate) fn into_document(value: Value) -> Result<Document, StoreError> {
    match value {
        Value::Object(map) => Ok(map),
        other => Err(StoreError::InvalidDocument(format!(
            "expected a JSON object, got {}",
            other
        ))),
    }
}
