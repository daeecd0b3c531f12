use mongodb::bson::{to_bson, Bson, Document};
use serde::Deserialize;
use serde_json::Value;
use utoipa::ToSchema;

use crate::utils::error::AppError;

/// The fields `PUT /coffee/{id}` replaces. Values are untyped and stored as
/// given; a field missing from the body is written as null. Fields outside
/// this list are never touched by an update.
#[derive(Debug, Deserialize, ToSchema)]
pub struct CoffeeUpdateRequest {
    #[schema(value_type = Option<Object>)]
    pub name: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub quantity: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub supplier: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub taste: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub category: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub details: Option<Value>,
    #[schema(value_type = Option<Object>)]
    pub photo: Option<Value>,
}

impl CoffeeUpdateRequest {
    /// Build the `$set` document for the update.
    pub fn into_set_document(self) -> Result<Document, AppError> {
        let mut set = Document::new();
        set.insert("name", to_field(self.name)?);
        set.insert("quantity", to_field(self.quantity)?);
        set.insert("supplier", to_field(self.supplier)?);
        set.insert("taste", to_field(self.taste)?);
        set.insert("category", to_field(self.category)?);
        set.insert("details", to_field(self.details)?);
        set.insert("photo", to_field(self.photo)?);
        Ok(set)
    }
}

fn to_field(value: Option<Value>) -> Result<Bson, AppError> {
    match value {
        Some(v) => Ok(to_bson(&v)?),
        None => Ok(Bson::Null),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_set_document_keeps_values_as_given() {
        let request: CoffeeUpdateRequest = serde_json::from_value(serde_json::json!({
            "name": "Mocha",
            "quantity": "5",
            "supplier": "Beanland",
            "taste": "Bitter",
            "category": "Dark",
            "details": "Single origin",
            "photo": "https://example.com/mocha.png"
        }))
        .unwrap();

        let set = request.into_set_document().unwrap();
        assert_eq!(set.get_str("name").unwrap(), "Mocha");
        // Quantity arrived as a string and stays a string
        assert_eq!(set.get_str("quantity").unwrap(), "5");
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_set_document_nulls_missing_fields() {
        let request: CoffeeUpdateRequest =
            serde_json::from_value(serde_json::json!({ "name": "Latte" })).unwrap();

        let set = request.into_set_document().unwrap();
        assert_eq!(set.get_str("name").unwrap(), "Latte");
        assert_eq!(set.get("quantity"), Some(&Bson::Null));
        assert_eq!(set.get("photo"), Some(&Bson::Null));
        assert_eq!(set.len(), 7);
    }

    #[test]
    fn test_fields_outside_the_list_are_dropped() {
        let request: CoffeeUpdateRequest = serde_json::from_value(serde_json::json!({
            "name": "Espresso",
            "rating": 9
        }))
        .unwrap();

        let set = request.into_set_document().unwrap();
        assert!(!set.contains_key("rating"));
    }

    #[test]
    fn test_numeric_quantity_stays_numeric() {
        let request: CoffeeUpdateRequest =
            serde_json::from_value(serde_json::json!({ "quantity": 7 })).unwrap();

        let set = request.into_set_document().unwrap();
        assert_eq!(set.get("quantity"), Some(&Bson::Int64(7)));
    }
}
