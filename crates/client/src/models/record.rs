//! Record models.

use serde::{Deserialize, Serialize};
use serde_json::{Map, Value};

/// One row of an Airtable table.
///
/// Top-level keys other than `id`, `createdTime` and `fields` are kept in
/// `extra`, so a record serializes back to the object the API returned.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Record {
    pub id: String,
    #[serde(
        rename = "createdTime",
        default,
        skip_serializing_if = "Option::is_none"
    )]
    pub created_time: Option<String>,
    #[serde(default)]
    pub fields: Map<String, Value>,
    #[serde(flatten)]
    pub extra: Map<String, Value>,
}

impl Record {
    /// Get a field value by name.
    pub fn field(&self, name: &str) -> Option<&Value> {
        self.fields.get(name)
    }
}

/// One element of a batch PATCH: the target record id and the fields to write.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RecordUpdate {
    pub id: String,
    pub fields: Map<String, Value>,
}

impl RecordUpdate {
    pub fn new(id: impl Into<String>, fields: Map<String, Value>) -> Self {
        Self {
            id: id.into(),
            fields,
        }
    }
}

/// Body of a batch PATCH request.
#[derive(Debug, Serialize)]
pub struct UpdateRecordsRequest<'a> {
    pub records: &'a [RecordUpdate],
}
