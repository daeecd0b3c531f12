use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::{
    database::MongoDB,
    models::{ErrorResponse, SignInUpdateRequest},
    services::user_service,
};

/// GET /users - Lists every user document
#[utoipa::path(
    get,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Array of user documents"),
        (status = 500, description = "Fetch failed", body = ErrorResponse)
    )
)]
pub async fn get_users(db: web::Data<MongoDB>) -> impl Responder {
    match user_service::list_users(&db).await {
        Ok(users) => {
            log::info!("📋 GET /users - {} documents", users.len());
            HttpResponse::Ok().json(users)
        }
        Err(e) => {
            log::error!("❌ Error fetching users: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch users"))
        }
    }
}

/// POST /users - Inserts the body verbatim as a new document
#[utoipa::path(
    post,
    path = "/users",
    tag = "Users",
    responses(
        (status = 200, description = "Insertion acknowledgment", body = crate::models::InsertOneResponse),
        (status = 500, description = "Insert failed", body = ErrorResponse)
    )
)]
pub async fn add_user(db: web::Data<MongoDB>, payload: web::Json<Value>) -> impl Responder {
    let payload = payload.into_inner();
    log::info!("📝 Received user data: {}", payload);

    match user_service::insert_user(&db, &payload).await {
        Ok(response) => {
            log::info!("✅ User saved: {}", response.inserted_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error saving user: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to save user"))
        }
    }
}

/// PATCH /users/{email} - Stamps lastSignInTime on the matching user
///
/// Selects by email, not id. Never upserts: an unmatched email reports zero
/// matches and creates nothing. A missing body writes null.
#[utoipa::path(
    patch,
    path = "/users/{email}",
    tag = "Users",
    params(("email" = String, Path, description = "Email of the user to stamp")),
    request_body = SignInUpdateRequest,
    responses(
        (status = 200, description = "Update acknowledgment", body = crate::models::UpdateResponse),
        (status = 500, description = "Update failed", body = ErrorResponse)
    )
)]
pub async fn update_last_sign_in(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    body: Option<web::Json<SignInUpdateRequest>>,
) -> impl Responder {
    let email = path.into_inner();
    let update = body.map(web::Json::into_inner).unwrap_or_default();
    log::info!("🔧 PATCH /users/{}", email);

    match user_service::update_last_sign_in(&db, &email, update).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Error updating user: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to update user"))
        }
    }
}

/// DELETE /users/{id} - Removes the matching document, if any
#[utoipa::path(
    delete,
    path = "/users/{id}",
    tag = "Users",
    params(("id" = String, Path, description = "User document id")),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = crate::models::DeleteResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse)
    )
)]
pub async fn delete_user(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /users/{}", id);

    match user_service::delete_user(&db, &id).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Error deleting user: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to delete user"))
        }
    }
}
