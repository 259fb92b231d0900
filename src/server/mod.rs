mod handlers;

use std::net::SocketAddr;
use std::sync::Arc;

use axum::{
    extract::Extension,
    routing::{get, post},
    Router,
};
use tower_http::trace::TraceLayer;

use crate::api::{DynAPI, API};
use crate::server::handlers::{recommend, search, share};

pub fn router(api: DynAPI) -> Router {
    Router::new()
        .route("/health", get(health))
        .route("/api/recommend", post(recommend::create))
        .route("/api/search/suggest", get(search::suggest))
        .route("/api/share", post(share::create))
        .route("/api/share/:id", get(share::find))
        .layer(Extension(api))
        .layer(TraceLayer::new_for_http())
}

pub async fn serve<T: API + Sync + Send + 'static>(api: T, addr: SocketAddr) {
    let api = Arc::new(api) as DynAPI;

    let app = router(api);

    tracing::info!("listening on {}", addr);

    axum::Server::bind(&addr)
        .serve(app.into_make_service())
        .await
        .expect("server error");
}

async fn health() -> &'static str {
    "ok"
}
