use serde::{Deserialize, Serialize};
use std::str::FromStr;

use crate::entities::Coordinates;

#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Label {
    A,
    B,
    C,
    D,
}

impl FromStr for Label {
    type Err = ();

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "A" => Ok(Self::A),
            "B" => Ok(Self::B),
            "C" => Ok(Self::C),
            "D" => Ok(Self::D),
            _ => Err(()),
        }
    }
}

/// One person's starting point. The label stays a plain string on the wire so
/// that an unknown label is reported by validation rather than by the JSON
/// decoder.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct Participant {
    pub label: String,
    pub lat: f64,
    pub lng: f64,
}

impl Participant {
    pub fn new(label: &str, lat: f64, lng: f64) -> Self {
        Self {
            label: label.into(),
            lat,
            lng,
        }
    }

    pub fn coordinates(&self) -> Coordinates {
        Coordinates::new(self.lat, self.lng)
    }

    pub fn rounded(&self) -> Self {
        let Coordinates { lat, lng } = self.coordinates().rounded();

        Self {
            label: self.label.clone(),
            lat,
            lng,
        }
    }
}
