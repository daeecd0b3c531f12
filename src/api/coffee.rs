use actix_web::{web, HttpResponse, Responder};
use serde_json::Value;

use crate::{
    database::MongoDB,
    models::{CoffeeUpdateRequest, ErrorResponse},
    services::coffee_service,
};

/// GET /coffee - Lists every coffee document
#[utoipa::path(
    get,
    path = "/coffee",
    tag = "Coffee",
    responses(
        (status = 200, description = "Array of coffee documents"),
        (status = 500, description = "Fetch failed", body = ErrorResponse)
    )
)]
pub async fn get_coffees(db: web::Data<MongoDB>) -> impl Responder {
    match coffee_service::list_coffee(&db).await {
        Ok(coffees) => {
            log::info!("📋 GET /coffee - {} documents", coffees.len());
            HttpResponse::Ok().json(coffees)
        }
        Err(e) => {
            log::error!("❌ Error fetching coffee: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to fetch coffee"))
        }
    }
}

/// GET /coffee/{id} - Single coffee document, JSON null when nothing matches
#[utoipa::path(
    get,
    path = "/coffee/{id}",
    tag = "Coffee",
    params(("id" = String, Path, description = "Coffee document id")),
    responses(
        (status = 200, description = "Matching document, or null"),
        (status = 500, description = "Fetch failed", body = ErrorResponse)
    )
)]
pub async fn get_coffee_by_id(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();

    match coffee_service::get_coffee(&db, &id).await {
        Ok(Some(document)) => HttpResponse::Ok().json(document),
        Ok(None) => HttpResponse::Ok().json(Value::Null),
        Err(e) => {
            log::error!("❌ Error fetching coffee by ID: {}", e);
            HttpResponse::InternalServerError()
                .json(ErrorResponse::new("Failed to fetch coffee by ID"))
        }
    }
}

/// POST /coffee - Inserts the body verbatim as a new document
#[utoipa::path(
    post,
    path = "/coffee",
    tag = "Coffee",
    request_body = CoffeeUpdateRequest,
    responses(
        (status = 200, description = "Insertion acknowledgment", body = crate::models::InsertOneResponse),
        (status = 500, description = "Insert failed", body = ErrorResponse)
    )
)]
pub async fn add_coffee(db: web::Data<MongoDB>, payload: web::Json<Value>) -> impl Responder {
    let payload = payload.into_inner();
    log::info!("📝 Adding new coffee: {}", payload);

    match coffee_service::insert_coffee(&db, &payload).await {
        Ok(response) => {
            log::info!("✅ Coffee added: {}", response.inserted_id);
            HttpResponse::Ok().json(response)
        }
        Err(e) => {
            log::error!("❌ Error adding coffee: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to add coffee"))
        }
    }
}

/// PUT /coffee/{id} - Replaces the seven coffee fields, upserting when absent
#[utoipa::path(
    put,
    path = "/coffee/{id}",
    tag = "Coffee",
    params(("id" = String, Path, description = "Coffee document id")),
    request_body = CoffeeUpdateRequest,
    responses(
        (status = 200, description = "Update acknowledgment", body = crate::models::UpdateResponse),
        (status = 500, description = "Update failed", body = ErrorResponse)
    )
)]
pub async fn update_coffee(
    db: web::Data<MongoDB>,
    path: web::Path<String>,
    request: web::Json<CoffeeUpdateRequest>,
) -> impl Responder {
    let id = path.into_inner();
    log::info!("🔧 PUT /coffee/{}", id);

    match coffee_service::update_coffee(&db, &id, request.into_inner()).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Error updating coffee: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to update coffee"))
        }
    }
}

/// DELETE /coffee/{id} - Removes the matching document, if any
#[utoipa::path(
    delete,
    path = "/coffee/{id}",
    tag = "Coffee",
    params(("id" = String, Path, description = "Coffee document id")),
    responses(
        (status = 200, description = "Deletion acknowledgment", body = crate::models::DeleteResponse),
        (status = 500, description = "Delete failed", body = ErrorResponse)
    )
)]
pub async fn delete_coffee(db: web::Data<MongoDB>, path: web::Path<String>) -> impl Responder {
    let id = path.into_inner();
    log::info!("🗑️  DELETE /coffee/{}", id);

    match coffee_service::delete_coffee(&db, &id).await {
        Ok(response) => HttpResponse::Ok().json(response),
        Err(e) => {
            log::error!("❌ Error deleting coffee: {}", e);
            HttpResponse::InternalServerError().json(ErrorResponse::new("Failed to delete coffee"))
        }
    }
}
