//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI documentation
//! using utoipa. All API endpoints are registered here with their OpenAPI specifications,
//! and Swagger UI is configured to provide interactive API documentation at `/api/docs`.

use axum::{http::HeaderValue, Router};
use tower_http::{
    cors::{Any, CorsLayer},
    services::ServeDir,
    trace::TraceLayer,
};
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::server::{
    config::{AssetBackend, Config},
    controller,
    error::{config::ConfigError, AppError},
    state::AppState,
};

/// Builds the API router with every endpoint and the Swagger UI.
///
/// Each endpoint is annotated with OpenAPI specifications via utoipa, which are collected
/// into a unified OpenAPI document served at `/api/docs/openapi.json`. Handlers sharing a
/// path are registered together.
///
/// # Returns
/// An Axum `Router<AppState>` without layers, ready to be given state.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Highlanders", description = "Highlanders club API"), tags(
        (name = controller::member::MEMBER_TAG, description = "Membership and payment"),
        (name = controller::order::ORDER_TAG, description = "Shop orders and payment"),
        (name = controller::product::PRODUCT_TAG, description = "Shop catalogue"),
        (name = controller::news::NEWS_TAG, description = "Club news"),
        (name = controller::fixture::FIXTURE_TAG, description = "Match fixtures"),
        (name = controller::contact::CONTACT_TAG, description = "Contact form submissions"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::member::get_members,
            controller::member::register_member
        ))
        .routes(routes!(controller::member::get_member))
        .routes(routes!(controller::member::update_member_status))
        .routes(routes!(controller::member::member_payment_notification))
        .routes(routes!(controller::order::initiate_payment))
        .routes(routes!(controller::order::order_payment_notification))
        .routes(routes!(controller::order::get_orders))
        .routes(routes!(controller::order::update_order_status))
        .routes(routes!(controller::product::add_product))
        .routes(routes!(controller::product::get_products))
        .routes(routes!(controller::product::get_product))
        .routes(routes!(controller::product::update_product))
        .routes(routes!(controller::product::delete_product))
        .routes(routes!(controller::news::get_news))
        .routes(routes!(controller::news::get_news_item))
        .routes(routes!(controller::news::add_news))
        .routes(routes!(controller::news::update_news))
        .routes(routes!(controller::news::delete_news))
        .routes(routes!(
            controller::fixture::get_fixtures,
            controller::fixture::create_fixture
        ))
        .routes(routes!(
            controller::fixture::get_fixture,
            controller::fixture::delete_fixture
        ))
        .routes(routes!(controller::fixture::update_fixture))
        .routes(routes!(
            controller::contact::get_contacts,
            controller::contact::create_contact
        ))
        .routes(routes!(
            controller::contact::get_contact,
            controller::contact::update_contact,
            controller::contact::delete_contact
        ))
        .split_for_parts();

    routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api))
}

/// Builds the complete application: API routes, local asset serving and middleware.
///
/// When assets are written to the local filesystem, the asset root is served under
/// `/assets`, so `ASSET_PUBLIC_URL` should point at `<PUBLIC_API_URL>/assets`.
///
/// # Arguments
/// - `config` - Application configuration (CORS origin, asset backend)
/// - `state` - Application state shared by the handlers
///
/// # Returns
/// - `Ok(Router)` - Application ready to be served
/// - `Err(AppError::ConfigErr)` - `CORS_ALLOWED_ORIGIN` is not a valid header value
pub fn app(config: &Config, state: AppState) -> Result<Router, AppError> {
    let mut router = routes();

    if let AssetBackend::Local { root } = &config.assets.backend {
        router = router.nest_service("/assets", ServeDir::new(root));
    }

    Ok(router
        .with_state(state)
        .layer(cors_layer(config.cors_allowed_origin.as_deref())?)
        .layer(TraceLayer::new_for_http()))
}

fn cors_layer(allowed_origin: Option<&str>) -> Result<CorsLayer, ConfigError> {
    let layer = CorsLayer::new().allow_methods(Any).allow_headers(Any);

    match allowed_origin {
        None => Ok(layer.allow_origin(Any)),
        Some(origin) => {
            let origin =
                HeaderValue::from_str(origin).map_err(|e| ConfigError::InvalidEnvVar {
                    name: "CORS_ALLOWED_ORIGIN".to_string(),
                    reason: e.to_string(),
                })?;

            Ok(layer.allow_origin(origin))
        }
    }
}
