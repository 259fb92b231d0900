use axum::extract::{rejection::JsonRejection, Extension, Json};
use serde::{Deserialize, Serialize};

use super::rejected;
use crate::{
    api::DynAPI,
    entities::{Category, Participant, Recommendation},
    error::Error,
};

#[derive(Serialize, Deserialize)]
pub struct CreateParams {
    participants: Vec<Participant>,
    #[serde(default)]
    category: Option<Category>,
}

pub async fn create(
    Extension(api): Extension<DynAPI>,
    params: Result<Json<CreateParams>, JsonRejection>,
) -> Result<Json<Recommendation>, Error> {
    let Json(params) = params.map_err(rejected)?;
    let recommendation = api.recommend(params.participants, params.category).await?;

    Ok(recommendation.into())
}
