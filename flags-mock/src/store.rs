use std::collections::HashMap;
use std::sync::Mutex;

use serde::Deserialize;
use serde_json::{json, Map, Value};

use crate::api::FlagsError;

/// The body of a flag creation request: a `key` naming the flag within its
/// project, plus whatever other fields the client sends. The extra fields
/// are stored and echoed back verbatim.
#[derive(Debug, Deserialize)]
pub struct FlagPayload {
    pub key: String,

    #[serde(flatten)]
    pub fields: Map<String, Value>,
}

/// In-memory flag storage: project key -> flag key -> stored record.
///
/// Project namespaces are created implicitly on first insert and never
/// removed, even once emptied by deletes. One instance is shared by all
/// request handlers; nothing survives process exit.
#[derive(Default)]
pub struct FlagStore {
    flags: Mutex<HashMap<String, HashMap<String, Value>>>,
}

impl FlagStore {
    pub fn new() -> Self {
        Self::default()
    }

    /// Inserts or overwrites the flag at `payload.key`, stamping the
    /// server-managed fields. `_version` stays at 1 on overwrite: this mock
    /// does not model version history. Client-supplied `_version` or
    /// `archived` fields are discarded.
    pub fn put(&self, project_key: &str, payload: FlagPayload) -> Value {
        let mut record = payload.fields;
        record.insert("key".to_string(), Value::String(payload.key.clone()));
        record.insert("_version".to_string(), json!(1));
        record.insert("archived".to_string(), Value::Bool(false));
        let record = Value::Object(record);

        let mut flags = self.flags.lock().expect("flag store mutex poisoned");
        flags
            .entry(project_key.to_string())
            .or_default()
            .insert(payload.key, record.clone());

        record
    }

    pub fn get(&self, project_key: &str, flag_key: &str) -> Result<Value, FlagsError> {
        let flags = self.flags.lock().expect("flag store mutex poisoned");
        flags
            .get(project_key)
            .and_then(|project| project.get(flag_key))
            .cloned()
            .ok_or(FlagsError::FlagNotFound)
    }

    pub fn delete(&self, project_key: &str, flag_key: &str) -> Result<(), FlagsError> {
        let mut flags = self.flags.lock().expect("flag store mutex poisoned");
        flags
            .get_mut(project_key)
            .and_then(|project| project.remove(flag_key))
            .map(|_| ())
            .ok_or(FlagsError::FlagNotFound)
    }

    /// Marks the flag archived in place and returns the updated record.
    /// Idempotent: archiving an already archived flag is a no-op success.
    pub fn archive(&self, project_key: &str, flag_key: &str) -> Result<Value, FlagsError> {
        let mut flags = self.flags.lock().expect("flag store mutex poisoned");
        let record = flags
            .get_mut(project_key)
            .and_then(|project| project.get_mut(flag_key))
            .ok_or(FlagsError::FlagNotFound)?;

        record["archived"] = Value::Bool(true);

        Ok(record.clone())
    }
}
