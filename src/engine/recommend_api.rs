use super::Engine;

use async_trait::async_trait;

use crate::{
    api::RecommendAPI,
    cache,
    engine::helpers::{
        compute_anchor, recommend_cache_key, search_attempts, validate_participants,
        NO_LANDMARK_MESSAGE, RECOMMEND_TTL,
    },
    entities::{Category, Coordinates, Outcome, Participant, Recommendation, Usage},
    error::{rate_limited_error, Error},
    external::MAX_PAGE_SIZE,
};

#[async_trait]
impl RecommendAPI for Engine {
    #[tracing::instrument(skip(self))]
    async fn recommend(
        &self,
        participants: Vec<Participant>,
        category: Option<Category>,
    ) -> Result<Recommendation, Error> {
        validate_participants(&participants)?;

        let anchor = compute_anchor(&participants);
        let key = recommend_cache_key(anchor, category);

        if let Some(cached) = cache::get_json::<Recommendation>(&self.cache, &key).await {
            tracing::debug!("cache hit for {}", key);
            return Ok(cached);
        }

        let (outcome, attempts) = self.search_landmark(anchor, category).await?;

        let recommendation = Recommendation { anchor, outcome };

        tracing::info!(
            "[RECOMMEND] anchor={:.6},{:.6} used={} attempts={}",
            anchor.lat,
            anchor.lng,
            recommendation
                .used()
                .map(|u| format!("{}/{}", u.category, u.radius))
                .unwrap_or_else(|| "none".into()),
            attempts
        );

        cache::set_json(&self.cache, &key, &recommendation, RECOMMEND_TTL).await;

        Ok(recommendation)
    }
}

impl Engine {
    /// Walks the (category, radius) attempts in order and stops at the first
    /// one with results. Returns the outcome and the number of provider calls
    /// made. Rate limiting aborts the walk; any other failure skips the attempt.
    async fn search_landmark(
        &self,
        anchor: Coordinates,
        category: Option<Category>,
    ) -> Result<(Outcome, usize), Error> {
        let attempts = search_attempts(category);
        let total = attempts.len();

        for (index, (category, radius)) in attempts.into_iter().enumerate() {
            let attempt = index + 1;

            tracing::debug!(
                "attempt {}: searching {} within {}m of ({}, {})",
                attempt,
                category,
                radius,
                anchor.lng,
                anchor.lat
            );

            let results = match self
                .places
                .search_by_category(category, anchor, radius, MAX_PAGE_SIZE)
                .await
            {
                Ok(results) => results,
                Err(err) if err.is_rate_limited() => {
                    tracing::warn!("place search rate limited on attempt {}", attempt);
                    return Err(rate_limited_error());
                }
                Err(err) => {
                    tracing::error!(
                        "category search failed: {}, radius: {}, error: {}",
                        category,
                        radius,
                        err
                    );
                    continue;
                }
            };

            tracing::debug!("attempt {}: found {} results", attempt, results.len());

            if let Some(outcome) = Outcome::found(results, Usage { category, radius }) {
                if let Outcome::Found { place, .. } = &outcome {
                    tracing::info!(
                        "found landmark: {} using category {}, radius {}m",
                        place.name,
                        category,
                        radius
                    );
                }

                return Ok((outcome, attempt));
            }
        }

        tracing::warn!(
            "no landmark found after {} attempts at anchor ({}, {})",
            total,
            anchor.lat,
            anchor.lng
        );

        Ok((Outcome::not_found(NO_LANDMARK_MESSAGE), total))
    }
}
