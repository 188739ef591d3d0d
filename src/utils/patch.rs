use serde::{Serialize, de::DeserializeOwned};
use serde_json::Value;

use crate::error::ServiceError;

/// Shallow-merges a JSON object of field updates into a record, the way a
/// partial update payload is applied. The merged value must still
/// deserialize into `T`, so an update can never leave a malformed record;
/// records that deny unknown fields also reject misspelled keys here.
pub fn apply_patch<T>(record: &T, patch: &Value) -> Result<T, ServiceError>
where
    T: Serialize + DeserializeOwned,
{
    let updates = patch
        .as_object()
        .ok_or_else(|| ServiceError::InvalidInput("Payload must be a JSON object".into()))?;

    if updates.is_empty() {
        return Err(ServiceError::InvalidInput("No fields provided for update".into()));
    }
    if updates.contains_key("id") {
        return Err(ServiceError::InvalidInput("Field `id` cannot be updated".into()));
    }

    let mut merged = serde_json::to_value(record)
        .map_err(|e| ServiceError::InvalidInput(format!("Record is not an object: {e}")))?;
    let fields = merged
        .as_object_mut()
        .ok_or_else(|| ServiceError::InvalidInput("Record is not an object".into()))?;

    for (key, value) in updates {
        fields.insert(key.clone(), value.clone());
    }

    serde_json::from_value(merged)
        .map_err(|e| ServiceError::InvalidInput(format!("Invalid update: {e}")))
}
