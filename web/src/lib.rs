/*
 * SPDX-FileCopyrightText: 2025 Wavelens UG <info@wavelens.io>
 *
 * SPDX-License-Identifier: AGPL-3.0-only
 */

pub mod authorization;
pub mod endpoints;
pub mod error;


use axum::routing::{get, patch, post, put};
use axum::{Router, middleware};
use http::header::{ACCEPT, AUTHORIZATION, CONTENT_TYPE};
use tower_http::cors::{AllowOrigin, CorsLayer};
use tower_http::trace::TraceLayer;

use core::types::ServerState;
use std::sync::Arc;

pub fn build_router(state: Arc<ServerState>) -> Router {
    let cors_allow_origin = if state.cli.log_level == "debug" {
        AllowOrigin::list(vec![
            state.cli.serve_url.clone().try_into().unwrap(),
            format!("http://{}:8000", state.cli.ip.clone())
                .try_into()
                .unwrap(),
        ])
    } else {
        AllowOrigin::exact(state.cli.serve_url.clone().try_into().unwrap())
    };

    let cors = CorsLayer::new()
        .allow_origin(cors_allow_origin)
        .allow_headers(vec![AUTHORIZATION, ACCEPT, CONTENT_TYPE])
        .allow_credentials(true);

    Router::new()
        .route("/api/user", get(endpoints::user::get))
        .route("/api/user/settings", patch(endpoints::user::patch_settings))
        .route("/api/products", post(endpoints::products::post))
        .route(
            "/api/products/{product}",
            put(endpoints::products::put_product).delete(endpoints::products::delete_product),
        )
        .route(
            "/api/products/{product}/verify",
            post(endpoints::products::post_verify),
        )
        .route("/api/projects", post(endpoints::projects::post))
        .route(
            "/api/projects/user",
            get(endpoints::projects::get_user_projects),
        )
        .route(
            "/api/projects/{project}",
            put(endpoints::projects::put_project),
        )
        .route(
            "/api/projects/{project}/status",
            patch(endpoints::projects::patch_status),
        )
        .route(
            "/api/messages",
            get(endpoints::messages::get).post(endpoints::messages::post),
        )
        .route(
            "/api/messages/conversations",
            get(endpoints::messages::get_conversations),
        )
        .route(
            "/api/messages/conversation/{user}",
            get(endpoints::messages::get_conversation),
        )
        .route(
            "/api/messages/{message}/read",
            patch(endpoints::messages::patch_read),
        )
        .route_layer(middleware::from_fn_with_state(
            Arc::clone(&state),
            authorization::authorize,
        ))
        .route("/api/auth/register", post(endpoints::auth::post_register))
        .route("/api/auth/login", post(endpoints::auth::post_login))
        .route("/api/auth/logout", post(endpoints::auth::post_logout))
        .route("/api/products", get(endpoints::products::get))
        .route(
            "/api/products/featured",
            get(endpoints::products::get_featured),
        )
        .route(
            "/api/products/category/{category}",
            get(endpoints::products::get_by_category),
        )
        .route(
            "/api/products/seller/{seller}",
            get(endpoints::products::get_by_seller),
        )
        .route("/api/products/{product}", get(endpoints::products::get_product))
        .route("/api/projects", get(endpoints::projects::get))
        .route(
            "/api/projects/{project}",
            get(endpoints::projects::get_project),
        )
        .route("/api/news", get(endpoints::news::get))
        .route("/api/news/{news}", get(endpoints::news::get_news))
        .route("/api/users/{user}", get(endpoints::user::get_user))
        .route("/api/waitlist", post(endpoints::waitlist::post))
        .route("/api/chat", post(endpoints::chat::post))
        .route("/api/health", get(endpoints::get_health))
        .fallback(endpoints::handle_404)
        .layer(cors)
        .layer(TraceLayer::new_for_http())
        .with_state(state)
}

pub async fn serve_web(state: Arc<ServerState>) -> std::io::Result<()> {
    let server_url = format!("{}:{}", state.cli.ip.clone(), state.cli.port.clone());
    let app = build_router(Arc::clone(&state));

    let listener = tokio::net::TcpListener::bind(&server_url).await?;
    axum::serve(listener, app).await
}
