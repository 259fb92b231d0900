use super::Engine;

use async_trait::async_trait;

use crate::{
    api::SearchAPI,
    cache,
    engine::helpers::{suggest_cache_key, SUGGEST_TTL},
    entities::{Place, MAX_CANDIDATES},
    error::Error,
};

const MIN_QUERY_CHARS: usize = 2;

#[async_trait]
impl SearchAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn suggest(&self, query: String) -> Result<Vec<Place>, Error> {
        let normalized = query.trim().to_lowercase();

        if normalized.chars().count() < MIN_QUERY_CHARS {
            return Ok(vec![]);
        }

        let key = suggest_cache_key(&normalized);

        if let Some(cached) = cache::get_json::<Vec<Place>>(&self.cache, &key).await {
            return Ok(cached);
        }

        let mut places = self
            .places
            .search_keyword(&normalized, MAX_CANDIDATES as u32)
            .await?;
        places.truncate(MAX_CANDIDATES);

        cache::set_json(&self.cache, &key, &places, SUGGEST_TTL).await;

        Ok(places)
    }
}
