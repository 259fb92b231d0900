pub mod helpers;
mod recommend_api;
mod search_api;
mod share_api;

use crate::{api::API, cache::DynCache, db::DynShareStore, external::DynPlaceSearch};

/// Implements every API operation over injected collaborators: the place
/// search provider, the response cache and the share store.
pub struct Engine {
    places: DynPlaceSearch,
    cache: DynCache,
    shares: DynShareStore,
    share_base_url: String,
}

impl Engine {
    pub fn new(
        places: DynPlaceSearch,
        cache: DynCache,
        shares: DynShareStore,
        share_base_url: impl Into<String>,
    ) -> Self {
        Self {
            places,
            cache,
            shares,
            share_base_url: share_base_url.into(),
        }
    }
}

impl API for Engine {}
