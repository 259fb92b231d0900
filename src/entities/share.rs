use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::entities::{Coordinates, Participant, Place, Usage, MAX_CANDIDATES};

pub const SHARE_TTL_DAYS: i64 = 7;

/// A recommendation snapshot as handed out through a share link.
#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
pub struct ShareData {
    pub anchor: Coordinates,
    pub participants: Vec<Participant>,
    #[serde(rename = "final")]
    pub final_place: Place,
    #[serde(default)]
    pub candidates: Vec<Place>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub used: Option<Usage>,
}

impl ShareData {
    pub fn normalized(self) -> Self {
        Self {
            anchor: self.anchor.rounded(),
            participants: self.participants.iter().map(Participant::rounded).collect(),
            final_place: self.final_place.normalized(),
            candidates: self
                .candidates
                .into_iter()
                .take(MAX_CANDIDATES)
                .map(Place::normalized)
                .collect(),
            used: self.used,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Share {
    pub id: Uuid,
    pub data: ShareData,
    pub created_at: DateTime<Utc>,
    pub expires_at: DateTime<Utc>,
}

impl Share {
    pub fn new(data: ShareData, now: DateTime<Utc>) -> Self {
        Self {
            id: Uuid::new_v4(),
            data: data.normalized(),
            created_at: now,
            expires_at: now + Duration::days(SHARE_TTL_DAYS),
        }
    }

    pub fn is_expired(&self, now: DateTime<Utc>) -> bool {
        self.expires_at < now
    }
}

#[derive(Clone, Debug, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct ShareLink {
    pub share_id: Uuid,
    pub url: String,
}
