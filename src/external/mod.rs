pub mod kakao_local;

use async_trait::async_trait;
use std::sync::Arc;

use crate::entities::{Category, Coordinates, Place};
use crate::error::Error;

pub use kakao_local::KakaoLocal;

/// Upper bound the provider accepts for a single page of results.
pub const MAX_PAGE_SIZE: u32 = 15;

/// Third-party place search. Results come back ordered by distance from
/// `origin`, nearest first. Throttling is reported as
/// [`rate_limited_error`](crate::error::rate_limited_error); every other
/// failure is transient from the caller's point of view.
#[async_trait]
pub trait PlaceSearch {
    async fn search_by_category(
        &self,
        category: Category,
        origin: Coordinates,
        radius: u32,
        limit: u32,
    ) -> Result<Vec<Place>, Error>;

    async fn search_keyword(&self, query: &str, limit: u32) -> Result<Vec<Place>, Error>;
}

pub type DynPlaceSearch = Arc<dyn PlaceSearch + Send + Sync>;
