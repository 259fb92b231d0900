use serde::{Deserialize, Serialize};
use std::fmt;

/// Landmark types understood by the place search provider, in the order the
/// recommender falls back through them.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Category {
    #[serde(rename = "SW8")]
    SubwayStation,
    #[serde(rename = "CT1")]
    CulturalFacility,
    #[serde(rename = "PO3")]
    PublicInstitution,
    #[serde(rename = "AT4")]
    TouristAttraction,
}

impl Category {
    pub const ALL: [Category; 4] = [
        Category::SubwayStation,
        Category::CulturalFacility,
        Category::PublicInstitution,
        Category::TouristAttraction,
    ];

    pub fn code(&self) -> &'static str {
        match self {
            Self::SubwayStation => "SW8",
            Self::CulturalFacility => "CT1",
            Self::PublicInstitution => "PO3",
            Self::TouristAttraction => "AT4",
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.code())
    }
}
