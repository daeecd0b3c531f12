// ==================== COFFEE COLLECTION ====================
// One database call per operation. Callers map errors to the route's
// fixed-message response.

use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, to_document, Document};
use serde_json::Value;

use crate::database::MongoDB;
use crate::models::{CoffeeUpdateRequest, DeleteResponse, InsertOneResponse, UpdateResponse};
use crate::services::stringify_object_id;
use crate::utils::error::AppError;

const COLLECTION: &str = "coffee";

/// All coffee documents, unfiltered, in natural storage order.
pub async fn list_coffee(db: &MongoDB) -> Result<Vec<Document>, AppError> {
    let collection = db.collection::<Document>(COLLECTION);
    let mut cursor = collection.find(doc! {}).await?;

    let mut coffees = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(mut document) => {
                stringify_object_id(&mut document);
                coffees.push(document);
            }
            Err(e) => {
                log::warn!("⚠️ Skipping unreadable coffee document: {}", e);
            }
        }
    }

    Ok(coffees)
}

/// Single document by id, or None when nothing matches.
pub async fn get_coffee(db: &MongoDB, id: &str) -> Result<Option<Document>, AppError> {
    let object_id = ObjectId::parse_str(id)?;

    let collection = db.collection::<Document>(COLLECTION);
    let found = collection.find_one(doc! { "_id": object_id }).await?;

    Ok(found.map(|mut document| {
        stringify_object_id(&mut document);
        document
    }))
}

/// Insert the request body verbatim.
pub async fn insert_coffee(db: &MongoDB, payload: &Value) -> Result<InsertOneResponse, AppError> {
    let document = to_document(payload)?;

    let collection = db.collection::<Document>(COLLECTION);
    let result = collection.insert_one(document).await?;

    Ok(InsertOneResponse::from(result))
}

/// Replace the seven coffee fields on the matching document, inserting a new
/// one when the id matches nothing.
pub async fn update_coffee(
    db: &MongoDB,
    id: &str,
    update: CoffeeUpdateRequest,
) -> Result<UpdateResponse, AppError> {
    let object_id = ObjectId::parse_str(id)?;
    let set = update.into_set_document()?;

    let collection = db.collection::<Document>(COLLECTION);
    let result = collection
        .update_one(doc! { "_id": object_id }, doc! { "$set": set })
        .upsert(true)
        .await?;

    Ok(UpdateResponse::from(result))
}

/// Delete by id. Zero matches is not an error.
pub async fn delete_coffee(db: &MongoDB, id: &str) -> Result<DeleteResponse, AppError> {
    let object_id = ObjectId::parse_str(id)?;

    let collection = db.collection::<Document>(COLLECTION);
    let result = collection.delete_one(doc! { "_id": object_id }).await?;

    Ok(DeleteResponse::from(result))
}
