// ==================== USERS COLLECTION ====================

use futures::stream::StreamExt;
use mongodb::bson::{doc, oid::ObjectId, to_document, Document};
use serde_json::Value;

use crate::database::MongoDB;
use crate::models::{DeleteResponse, InsertOneResponse, SignInUpdateRequest, UpdateResponse};
use crate::services::stringify_object_id;
use crate::utils::error::AppError;

const COLLECTION: &str = "users";

/// All user documents, unfiltered.
pub async fn list_users(db: &MongoDB) -> Result<Vec<Document>, AppError> {
    let collection = db.collection::<Document>(COLLECTION);
    let mut cursor = collection.find(doc! {}).await?;

    let mut users = Vec::new();
    while let Some(result) = cursor.next().await {
        match result {
            Ok(mut document) => {
                stringify_object_id(&mut document);
                users.push(document);
            }
            Err(e) => {
                log::warn!("⚠️ Skipping unreadable user document: {}", e);
            }
        }
    }

    Ok(users)
}

/// Insert the request body verbatim.
pub async fn insert_user(db: &MongoDB, payload: &Value) -> Result<InsertOneResponse, AppError> {
    let document = to_document(payload)?;

    let collection = db.collection::<Document>(COLLECTION);
    let result = collection.insert_one(document).await?;

    Ok(InsertOneResponse::from(result))
}

/// Set `lastSignInTime` on the document whose `email` matches. Email is a
/// plain lookup key here, not enforced unique, and the update never upserts:
/// an unmatched email reports zero matches and creates nothing.
pub async fn update_last_sign_in(
    db: &MongoDB,
    email: &str,
    update: SignInUpdateRequest,
) -> Result<UpdateResponse, AppError> {
    let set = update.into_set_document()?;

    let collection = db.collection::<Document>(COLLECTION);
    let result = collection
        .update_one(doc! { "email": email }, doc! { "$set": set })
        .await?;

    Ok(UpdateResponse::from(result))
}

/// Delete by id. Zero matches is not an error.
pub async fn delete_user(db: &MongoDB, id: &str) -> Result<DeleteResponse, AppError> {
    let object_id = ObjectId::parse_str(id)?;

    let collection = db.collection::<Document>(COLLECTION);
    let result = collection.delete_one(doc! { "_id": object_id }).await?;

    Ok(DeleteResponse::from(result))
}
