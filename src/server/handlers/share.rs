use axum::extract::{
    rejection::{JsonRejection, PathRejection},
    Extension, Json, Path,
};
use uuid::Uuid;

use super::rejected;
use crate::{
    api::DynAPI,
    entities::{Share, ShareData, ShareLink},
    error::Error,
};

pub async fn create(
    Extension(api): Extension<DynAPI>,
    data: Result<Json<ShareData>, JsonRejection>,
) -> Result<Json<ShareLink>, Error> {
    let Json(data) = data.map_err(rejected)?;
    let link = api.create_share(data).await?;

    Ok(link.into())
}

pub async fn find(
    Extension(api): Extension<DynAPI>,
    id: Result<Path<Uuid>, PathRejection>,
) -> Result<Json<Share>, Error> {
    let Path(id) = id.map_err(rejected)?;
    let share = api.find_share(id).await?;

    Ok(share.into())
}
