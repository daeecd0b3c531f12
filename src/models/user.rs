use mongodb::bson::{doc, to_bson, Bson, Document};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::utils::error::AppError;

/// Body of `PATCH /users/{email}`. The value is untyped (the clients send a
/// formatted timestamp string); when absent the field is written as null.
#[derive(Debug, Default, Deserialize, ToSchema)]
pub struct SignInUpdateRequest {
    #[serde(rename = "lastSignInTime")]
    #[schema(value_type = Option<Object>)]
    pub last_sign_in_time: Option<Value>,
}

impl SignInUpdateRequest {
    /// Build the `$set` document for the patch.
    pub fn into_set_document(self) -> Result<Document, AppError> {
        let value = match self.last_sign_in_time {
            Some(v) => to_bson(&v)?,
            None => Bson::Null,
        };
        Ok(doc! { "lastSignInTime": value })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_with_timestamp() {
        let request: SignInUpdateRequest = serde_json::from_value(serde_json::json!({
            "lastSignInTime": "2026-08-07T10:15:00Z"
        }))
        .unwrap();

        let set = request.into_set_document().unwrap();
        assert_eq!(
            set.get_str("lastSignInTime").unwrap(),
            "2026-08-07T10:15:00Z"
        );
    }

    #[test]
    fn test_missing_value_becomes_null() {
        let request: SignInUpdateRequest =
            serde_json::from_value(serde_json::json!({})).unwrap();

        let set = request.into_set_document().unwrap();
        assert_eq!(set.get("lastSignInTime"), Some(&Bson::Null));
    }

    #[test]
    fn test_unknown_fields_are_ignored() {
        let request: SignInUpdateRequest = serde_json::from_value(serde_json::json!({
            "lastSignInTime": "now",
            "email": "someone@example.com"
        }))
        .unwrap();

        let set = request.into_set_document().unwrap();
        assert_eq!(set.len(), 1);
    }
}
