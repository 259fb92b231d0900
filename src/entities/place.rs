use serde::{Deserialize, Serialize};

use crate::entities::{round_coordinate, Coordinates};

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Place {
    pub place_id: String,
    pub name: String,
    pub address: String,
    pub lat: f64,
    pub lng: f64,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub place_url: Option<String>,
    /// Meters from the search origin, when the provider reports it.
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub distance: Option<u32>,
}

impl Place {
    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    pub fn normalized(mut self) -> Self {
        self.lat = round_coordinate(self.lat);
        self.lng = round_coordinate(self.lng);
        self
    }
}
