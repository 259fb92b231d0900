use async_trait::async_trait;
use std::sync::Arc;
use uuid::Uuid;

use crate::entities::{Category, Participant, Place, Recommendation, Share, ShareData, ShareLink};
use crate::error::Error;

#[async_trait]
pub trait RecommendAPI {
    /// Recommends a landmark near the centroid of `participants`, optionally
    /// restricted to one `category`. Fails only on invalid input or when the
    /// place search provider is rate limiting us.
    async fn recommend(
        &self,
        participants: Vec<Participant>,
        category: Option<Category>,
    ) -> Result<Recommendation, Error>;
}

#[async_trait]
pub trait SearchAPI {
    async fn suggest(&self, query: String) -> Result<Vec<Place>, Error>;
}

#[async_trait]
pub trait ShareAPI {
    async fn create_share(&self, data: ShareData) -> Result<ShareLink, Error>;
    async fn find_share(&self, id: Uuid) -> Result<Share, Error>;
}

pub trait API: RecommendAPI + SearchAPI + ShareAPI {}

pub type DynAPI = Arc<dyn API + Send + Sync>;
