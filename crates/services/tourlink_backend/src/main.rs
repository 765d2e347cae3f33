// File: services/tourlink_backend/src/main.rs
use axum::{routing::get, Router};
use std::sync::Arc;
use tokio::net::TcpListener;
use tourlink_auth::{HttpSessionResolver, SessionResolver, StaticSessionResolver};
use tourlink_bookings::routes as bookings_routes;
use tourlink_common::{
    BoxedError, CacheInvalidator, HttpCacheInvalidator, NoopCacheInvalidator,
};
use tourlink_config::{load_config, AppConfig};
use tourlink_db::{
    BookingRepository, DbClient, InMemoryBookingRepository, SqlBookingRepository,
};
use tourlink_nav::routes as nav_routes;
use tower_http::{services::ServeDir, trace::TraceLayer};
use tracing::warn;

/// The booking store: SQL when a database is configured, in-memory
/// otherwise (dev runs lose their state on restart, loudly).
async fn build_store(config: &Arc<AppConfig>) -> Arc<dyn BookingRepository> {
    if config.database.is_some() {
        let db_client = DbClient::new(config)
            .await
            .expect("Failed to connect to the database");
        let store = SqlBookingRepository::new(db_client);
        store
            .init_schema()
            .await
            .expect("Failed to initialize the booking schema");
        Arc::new(store)
    } else {
        warn!("No database configured; using the in-memory booking store");
        Arc::new(InMemoryBookingRepository::new())
    }
}

fn build_sessions(config: &Arc<AppConfig>) -> Arc<dyn SessionResolver> {
    match config.auth.as_ref() {
        Some(auth_config) => Arc::new(HttpSessionResolver::from_config(auth_config)),
        None => {
            warn!("No identity provider configured; all requests resolve unauthenticated");
            Arc::new(StaticSessionResolver::unauthenticated())
        }
    }
}

fn build_cache(config: &Arc<AppConfig>) -> Arc<dyn CacheInvalidator<Error = BoxedError>> {
    match config.cache.as_ref() {
        Some(cache_config) => Arc::new(HttpCacheInvalidator::from_config(cache_config)),
        None => Arc::new(NoopCacheInvalidator),
    }
}

#[tokio::main]
async fn main() {
    tourlink_common::logging::init();
    let config = Arc::new(load_config().expect("Failed to load config"));

    let api_router = Router::new().route("/", get(|| async { "Welcome to Tourlink API!" }));

    let api_router = Router::new().nest("/api", {
        let mut router = api_router;
        if config.use_bookings {
            let store = build_store(&config).await;
            let sessions = build_sessions(&config);
            let cache = build_cache(&config);
            router = router.merge(bookings_routes::routes(config.clone(), store, sessions, cache));
        }
        if config.use_nav {
            router = router.merge(nav_routes::routes());
        }
        router
    });

    let mut app = api_router;

    // Conditionally add Swagger UI and JSON endpoint if openapi feature enabled
    #[cfg(feature = "openapi")]
    {
        use tourlink_bookings::doc::BookingsApiDoc;
        use tourlink_nav::doc::NavApiDoc;
        use utoipa::OpenApi;
        use utoipa_swagger_ui::SwaggerUi;

        // Define the merged OpenAPI documentation struct
        #[derive(OpenApi)]
        #[openapi(
            info(
                title = "Tourlink API",
                version = "0.1.0",
                description = "Tourlink booking-management API docs",
                license(name = "MIT", url = "https://opensource.org/licenses/MIT")
            ),
            components(),
            tags( (name = "Tourlink", description = "Core service endpoints")),
            servers( (url = "/api", description = "Main API prefix")),
        )]
        struct ApiDoc;

        let mut openapi_doc = ApiDoc::openapi();
        openapi_doc.merge(BookingsApiDoc::openapi());
        openapi_doc.merge(NavApiDoc::openapi());
        println!("📖 Adding Swagger UI at /api/docs");

        let swagger_ui =
            SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", openapi_doc.clone());
        app = app.merge(swagger_ui);
    }

    app = app.layer(TraceLayer::new_for_http());

    // Serve static files in dev mode
    if cfg!(debug_assertions) {
        println!("Running in development mode, serving static files from ./public");
        app = app.fallback_service(ServeDir::new("public"));
    }

    // Bind and serve
    let addr = format!("{}:{}", config.server.host, config.server.port);
    let listener = TcpListener::bind(&addr).await.expect("Failed to bind address");
    println!("Starting server at http://{}", addr);
    println!("API endpoints available at http://{}/api", addr);

    axum::serve(listener, app.into_make_service())
        .await
        .expect("Server error");
}
