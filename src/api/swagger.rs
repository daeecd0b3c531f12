use utoipa::OpenApi;

#[derive(OpenApi)]
#[openapi(
    info(
        title = "Coffee Store API",
        version = "1.0.0",
        description = "HTTP API over the coffee and users collections. \n\nNo authentication: every route maps to a single database operation and returns the raw acknowledgment or document(s)."
    ),
    paths(
        // Health
        crate::api::health::root,
        crate::api::health::health_check,

        // Coffee
        crate::api::coffee::get_coffees,
        crate::api::coffee::get_coffee_by_id,
        crate::api::coffee::add_coffee,
        crate::api::coffee::update_coffee,
        crate::api::coffee::delete_coffee,

        // Users
        crate::api::users::get_users,
        crate::api::users::add_user,
        crate::api::users::update_last_sign_in,
        crate::api::users::delete_user,
    ),
    components(
        schemas(
            crate::api::health::HealthResponse,
            crate::models::coffee::CoffeeUpdateRequest,
            crate::models::user::SignInUpdateRequest,
            crate::models::responses::InsertOneResponse,
            crate::models::responses::UpdateResponse,
            crate::models::responses::DeleteResponse,
            crate::models::responses::ErrorResponse,
        )
    ),
    tags(
        (name = "Health", description = "Liveness endpoints."),
        (name = "Coffee", description = "CRUD over the coffee collection."),
        (name = "Users", description = "CRUD over the users collection; sign-in stamping is keyed by email."),
    )
)]
pub struct ApiDoc;
