//! HTTP API Layer
//!
//! This crate provides the REST API for the customer registry using Axum.
//!
//! # Architecture
//!
//! - **Handlers**: Customer CRUD, health probes, ping/pong
//! - **Middleware**: request ids, tracing, request logging
//! - **DTOs**: Request/Response data transfer objects
//! - **Error Handling**: Consistent error responses, including extractor rejections
//!
//! # Example
//!
//! ```rust,ignore
//! use interface_api::{create_router, storage::build_customer_port};
//!
//! let port = build_customer_port(config.storage_backend, pool);
//! let app = create_router(port, config);
//! axum::serve(listener, app).await?;
//! ```

pub mod config;
pub mod error;
pub mod extract;
pub mod middleware;
pub mod handlers;
pub mod dto;
pub mod seed;
pub mod storage;

use std::sync::atomic::AtomicU64;
use std::sync::Arc;

use axum::{
    middleware as axum_middleware,
    routing::get,
    Router,
};
use tower::ServiceBuilder;
use tower_http::cors::{Any, CorsLayer};
use tower_http::request_id::{MakeRequestUuid, PropagateRequestIdLayer, SetRequestIdLayer};
use tower_http::trace::TraceLayer;

use domain_customer::{CustomerPort, CustomerService};

use crate::config::ApiConfig;
use crate::handlers::{customer, health, ping};
use crate::middleware::request_logging_middleware;

/// Application state shared across handlers
#[derive(Clone)]
pub struct AppState {
    pub service: CustomerService,
    pub config: ApiConfig,
    /// Pings served since the router was built
    pub ping_counter: Arc<AtomicU64>,
}

/// Creates the main API router
///
/// # Arguments
///
/// * `port` - Storage adapter backing the customer service
/// * `config` - API configuration
///
/// # Returns
///
/// Configured Axum router with all routes and middleware
pub fn create_router(port: Arc<dyn CustomerPort>, config: ApiConfig) -> Router {
    let state = AppState {
        service: CustomerService::new(port),
        config,
        ping_counter: Arc::new(AtomicU64::new(0)),
    };

    let public_routes = Router::new()
        .route("/health", get(health::health_check))
        .route("/health/ready", get(health::readiness_check))
        .route("/ping", get(ping::ping))
        .route("/pong", get(ping::pong));

    let customer_routes = Router::new()
        .route(
            "/",
            get(customer::list_customers).post(customer::register_customer),
        )
        .route(
            "/:id",
            get(customer::get_customer)
                .put(customer::update_customer)
                .delete(customer::delete_customer),
        );

    let api_routes = Router::new()
        .nest("/customers", customer_routes)
        .layer(axum_middleware::from_fn(request_logging_middleware));

    Router::new()
        .merge(public_routes)
        .nest("/api/v1", api_routes)
        .layer(
            ServiceBuilder::new()
                .layer(SetRequestIdLayer::x_request_id(MakeRequestUuid))
                .layer(TraceLayer::new_for_http())
                .layer(PropagateRequestIdLayer::x_request_id())
                .layer(
                    CorsLayer::new()
                        .allow_origin(Any)
                        .allow_methods(Any)
                        .allow_headers(Any),
                ),
        )
        .with_state(state)
}
