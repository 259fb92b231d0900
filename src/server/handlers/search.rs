use axum::extract::{rejection::QueryRejection, Extension, Json, Query};
use serde::{Deserialize, Serialize};

use super::rejected;
use crate::{api::DynAPI, entities::Place, error::Error};

#[derive(Serialize, Deserialize)]
pub struct SuggestParams {
    #[serde(default)]
    q: String,
}

pub async fn suggest(
    Extension(api): Extension<DynAPI>,
    params: Result<Query<SuggestParams>, QueryRejection>,
) -> Result<Json<Vec<Place>>, Error> {
    let Query(params) = params.map_err(rejected)?;
    let places = api.suggest(params.q).await?;

    Ok(places.into())
}
