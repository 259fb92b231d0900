use serde::{Deserialize, Serialize};

use crate::entities::{Category, Coordinates, Place};

pub const MAX_CANDIDATES: usize = 10;

/// The search attempt that produced a result.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Usage {
    pub category: Category,
    pub radius: u32,
}

#[derive(Clone, Debug, PartialEq)]
pub enum Outcome {
    Found {
        place: Place,
        candidates: Vec<Place>,
        used: Usage,
    },
    NotFound {
        message: String,
    },
}

impl Outcome {
    /// Builds a `Found` outcome from a provider result set ordered by distance.
    /// Returns `None` when the set is empty.
    pub fn found(results: Vec<Place>, used: Usage) -> Option<Self> {
        let candidates: Vec<Place> = results
            .into_iter()
            .take(MAX_CANDIDATES)
            .map(Place::normalized)
            .collect();
        let place = candidates.first()?.clone();

        Some(Self::Found {
            place,
            candidates,
            used,
        })
    }

    pub fn not_found(message: impl Into<String>) -> Self {
        Self::NotFound {
            message: message.into(),
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(into = "RecommendationBody", try_from = "RecommendationBody")]
pub struct Recommendation {
    pub anchor: Coordinates,
    pub outcome: Outcome,
}

impl Recommendation {
    pub fn final_place(&self) -> Option<&Place> {
        match &self.outcome {
            Outcome::Found { place, .. } => Some(place),
            Outcome::NotFound { .. } => None,
        }
    }

    pub fn candidates(&self) -> &[Place] {
        match &self.outcome {
            Outcome::Found { candidates, .. } => candidates,
            Outcome::NotFound { .. } => &[],
        }
    }

    pub fn used(&self) -> Option<Usage> {
        match &self.outcome {
            Outcome::Found { used, .. } => Some(*used),
            Outcome::NotFound { .. } => None,
        }
    }

    pub fn message(&self) -> Option<&str> {
        match &self.outcome {
            Outcome::Found { .. } => None,
            Outcome::NotFound { message } => Some(message),
        }
    }
}

/// Wire and cache shape: `final`, `candidates` and `used` are always present,
/// `message` only when nothing was found.
#[derive(Serialize, Deserialize)]
pub struct RecommendationBody {
    anchor: Coordinates,
    #[serde(rename = "final")]
    final_place: Option<Place>,
    candidates: Vec<Place>,
    used: Option<Usage>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    message: Option<String>,
}

impl From<Recommendation> for RecommendationBody {
    fn from(recommendation: Recommendation) -> Self {
        let anchor = recommendation.anchor;

        match recommendation.outcome {
            Outcome::Found {
                place,
                candidates,
                used,
            } => Self {
                anchor,
                final_place: Some(place),
                candidates,
                used: Some(used),
                message: None,
            },
            Outcome::NotFound { message } => Self {
                anchor,
                final_place: None,
                candidates: vec![],
                used: None,
                message: Some(message),
            },
        }
    }
}

impl TryFrom<RecommendationBody> for Recommendation {
    type Error = String;

    fn try_from(body: RecommendationBody) -> Result<Self, Self::Error> {
        let outcome = match (body.final_place, body.used) {
            (Some(place), Some(used)) if !body.candidates.is_empty() => Outcome::Found {
                place,
                candidates: body.candidates,
                used,
            },
            (None, None) if body.candidates.is_empty() => Outcome::NotFound {
                message: body.message.unwrap_or_default(),
            },
            _ => return Err("final, candidates and used must be all present or all empty".into()),
        };

        Ok(Self {
            anchor: body.anchor,
            outcome,
        })
    }
}
