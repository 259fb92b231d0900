use async_trait::async_trait;
use reqwest::StatusCode;
use serde::{Deserialize, Serialize};
use std::time::Duration;

use crate::{
    entities::{Category, Coordinates, Place},
    error::{decode_error, invalid_input_error, rate_limited_error, upstream_error, Error},
    external::{PlaceSearch, MAX_PAGE_SIZE},
};

const PLACE_URL_BASE: &str = "http://place.map.kakao.com/m/";

/// Kakao Local REST API client.
#[derive(Clone, Debug)]
pub struct KakaoLocal {
    client: reqwest::Client,
    api_base: String,
    key: String,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Response {
    documents: Vec<Document>,
}

#[derive(Clone, Debug, Serialize, Deserialize)]
struct Document {
    id: String,
    place_name: String,
    address_name: String,
    #[serde(default)]
    road_address_name: Option<String>,
    x: String,
    y: String,
    #[serde(default)]
    place_url: Option<String>,
    #[serde(default)]
    distance: Option<String>,
}

impl TryFrom<Document> for Place {
    type Error = Error;

    fn try_from(doc: Document) -> Result<Self, Self::Error> {
        let lat: f64 = doc.y.parse().map_err(decode_error)?;
        let lng: f64 = doc.x.parse().map_err(decode_error)?;

        let address = match doc.road_address_name {
            Some(road) if !road.is_empty() => road,
            _ => doc.address_name,
        };

        let distance = doc
            .distance
            .as_deref()
            .filter(|d| !d.is_empty())
            .and_then(|d| d.parse().ok());

        let place = Place {
            place_url: Some(normalize_place_url(doc.place_url.as_deref(), &doc.id)),
            place_id: doc.id,
            name: doc.place_name,
            address,
            lat,
            lng,
            distance,
        };

        Ok(place.normalized())
    }
}

/// Maps a non-success provider status to the error recommend and suggest
/// react to. Only 429 is treated as throttling.
fn status_error(status: StatusCode) -> Option<Error> {
    if status == StatusCode::TOO_MANY_REQUESTS {
        Some(rate_limited_error())
    } else if status.is_client_error() {
        Some(invalid_input_error())
    } else if status != StatusCode::OK {
        Some(upstream_error())
    } else {
        None
    }
}

/// Documents with unparsable coordinates are dropped individually.
fn into_places(documents: Vec<Document>) -> Vec<Place> {
    documents
        .into_iter()
        .filter_map(|doc| {
            let id = doc.id.clone();
            match Place::try_from(doc) {
                Ok(place) => Some(place),
                Err(_) => {
                    tracing::warn!("skipping place {} with bad coordinates", id);
                    None
                }
            }
        })
        .collect()
}

/// Mobile place pages live under `/m/`. The API sometimes omits that segment
/// or the URL altogether.
fn normalize_place_url(place_url: Option<&str>, place_id: &str) -> String {
    match place_url {
        Some(url) if url.starts_with("http") => {
            if url.contains("place.map.kakao.com") && !url.contains("/m/") {
                let id = url
                    .rsplit('/')
                    .next()
                    .filter(|s| !s.is_empty())
                    .unwrap_or(place_id);
                return format!("{}{}", PLACE_URL_BASE, id);
            }

            url.to_string()
        }
        _ => format!("{}{}", PLACE_URL_BASE, place_id),
    }
}

impl KakaoLocal {
    pub fn new(api_base: String, key: String, timeout: Duration) -> Result<Self, Error> {
        if key.is_empty() {
            tracing::error!("Kakao REST key is empty, place searches will fail");
        }

        let client = reqwest::Client::builder().timeout(timeout).build()?;

        Ok(Self {
            client,
            api_base,
            key,
        })
    }

    async fn fetch(&self, path: &str, query: &[(&str, String)]) -> Result<Vec<Place>, Error> {
        let url = format!("https://{}/v2/local/search/{}", self.api_base, path);

        let res = self
            .client
            .get(url)
            .header("Authorization", format!("KakaoAK {}", self.key))
            .query(query)
            .send()
            .await?;

        if let Some(err) = status_error(res.status()) {
            tracing::warn!("[{}] {} - {}", res.status().as_u16(), path, err.message);
            return Err(err);
        }

        let data: Response = res.json().await?;

        Ok(into_places(data.documents))
    }
}

#[async_trait]
impl PlaceSearch for KakaoLocal {
    #[tracing::instrument(skip(self))]
    async fn search_by_category(
        &self,
        category: Category,
        origin: Coordinates,
        radius: u32,
        limit: u32,
    ) -> Result<Vec<Place>, Error> {
        let query = [
            ("category_group_code", category.code().to_string()),
            ("x", origin.lng.to_string()),
            ("y", origin.lat.to_string()),
            ("radius", radius.to_string()),
            ("sort", "distance".to_string()),
            ("size", limit.min(MAX_PAGE_SIZE).to_string()),
        ];

        let places = self.fetch("category.json", &query).await?;
        tracing::debug!("searchCategory returned {} places", places.len());

        Ok(places)
    }

    #[tracing::instrument(skip(self))]
    async fn search_keyword(&self, query: &str, limit: u32) -> Result<Vec<Place>, Error> {
        let params = [
            ("query", query.trim().to_string()),
            ("size", limit.min(MAX_PAGE_SIZE).to_string()),
        ];

        let places = self.fetch("keyword.json", &params).await?;
        tracing::debug!("searchKeyword returned {} places", places.len());

        Ok(places)
    }
}
