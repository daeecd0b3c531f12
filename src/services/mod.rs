pub mod coffee_service;
pub mod user_service;

use mongodb::bson::{Bson, Document};

/// Rewrite `_id` from an ObjectId to its hex string so listed documents feed
/// straight back into the `/{id}` routes.
pub(crate) fn stringify_object_id(document: &mut Document) {
    if let Ok(oid) = document.get_object_id("_id") {
        document.insert("_id", Bson::String(oid.to_hex()));
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use mongodb::bson::{doc, oid::ObjectId};

    #[test]
    fn test_object_id_becomes_hex_string() {
        let oid = ObjectId::parse_str("65f0a1b2c3d4e5f6a7b8c9d0").unwrap();
        let mut document = doc! { "_id": oid, "name": "Mocha" };

        stringify_object_id(&mut document);

        assert_eq!(
            document.get_str("_id").unwrap(),
            "65f0a1b2c3d4e5f6a7b8c9d0"
        );
        assert_eq!(document.get_str("name").unwrap(), "Mocha");
    }

    #[test]
    fn test_non_object_ids_are_left_alone() {
        let mut document = doc! { "_id": "custom-key" };
        stringify_object_id(&mut document);
        assert_eq!(document.get_str("_id").unwrap(), "custom-key");

        let mut document = doc! { "name": "no id at all" };
        stringify_object_id(&mut document);
        assert!(!document.contains_key("_id"));
    }
}
