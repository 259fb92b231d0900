use std::sync::Arc;

use tracing_subscriber::EnvFilter;

use midpoint::cache::MemoryCache;
use midpoint::config::Config;
use midpoint::db::PgShareStore;
use midpoint::engine::Engine;
use midpoint::external::KakaoLocal;
use midpoint::server::serve;

#[tokio::main]
async fn main() {
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("info")),
        )
        .init();

    let config = Config::from_env().expect("invalid configuration");

    let shares = PgShareStore::new(&config.database_url, config.database_max_connections)
        .await
        .expect("failed to connect to database");

    let places = KakaoLocal::new(
        config.kakao_api_base.clone(),
        config.kakao_rest_key.clone(),
        config.kakao_timeout,
    )
    .expect("failed to build place search client");

    let cache = Arc::new(MemoryCache::new());
    cache.clone().spawn_purge(config.cache_purge_interval);

    let engine = Engine::new(
        Arc::new(places),
        cache,
        Arc::new(shares),
        config.frontend_url.clone(),
    );

    serve(engine, config.addr).await;
}
