mod api;
mod database;
mod models;
mod services;
mod utils;

use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use dotenv::dotenv;
use std::env;
use utoipa::OpenApi;
use utoipa_swagger_ui::SwaggerUi;

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    // Load environment variables
    dotenv().ok();

    // Initialize logger
    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    // Get configuration from environment
    let host = env::var("HOST").unwrap_or_else(|_| "0.0.0.0".to_string());
    let port = env::var("PORT").unwrap_or_else(|_| "5000".to_string());
    let database_uri = database::mongodb_uri_from_env();

    log::info!("🚀 Starting Coffee Service...");

    // Initialize MongoDB connection, held for the process lifetime
    let db = database::MongoDB::new(&database_uri)
        .await
        .expect("Failed to connect to MongoDB");

    let db_data = web::Data::new(db);

    log::info!("✅ Connected to MongoDB!");
    log::info!("🌐 Coffee server is running on port: {}", port);
    log::info!("📚 Swagger UI available at: http://{}:{}/swagger-ui/", host, port);

    // Start HTTP server
    HttpServer::new(move || {
        // Open CORS for the browser storefront
        let cors = Cors::permissive();

        // Generate OpenAPI specification
        let openapi = api::swagger::ApiDoc::openapi();

        App::new()
            .app_data(db_data.clone())
            .wrap(cors)
            .wrap(Logger::default())
            .service(
                SwaggerUi::new("/swagger-ui/{_:.*}")
                    .url("/api-docs/openapi.json", openapi)
            )
            // Liveness
            .route("/", web::get().to(api::health::root))
            .route("/health", web::get().to(api::health::health_check))
            // Coffee collection
            .service(
                web::resource("/coffee")
                    .route(web::get().to(api::coffee::get_coffees))
                    .route(web::post().to(api::coffee::add_coffee)),
            )
            .service(
                web::resource("/coffee/{id}")
                    .route(web::get().to(api::coffee::get_coffee_by_id))
                    .route(web::put().to(api::coffee::update_coffee))
                    .route(web::delete().to(api::coffee::delete_coffee)),
            )
            // Users collection
            .service(
                web::resource("/users")
                    .route(web::get().to(api::users::get_users))
                    .route(web::post().to(api::users::add_user)),
            )
            // PATCH selects by email, DELETE by document id
            .service(
                web::resource("/users/{key}")
                    .route(web::patch().to(api::users::update_last_sign_in))
                    .route(web::delete().to(api::users::delete_user)),
            )
    })
    .bind(format!("{}:{}", host, port))?
    .run()
    .await
}
