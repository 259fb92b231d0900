use geo_types::Point;
use std::collections::HashSet;
use std::str::FromStr;
use std::time::Duration;

use crate::{
    entities::{Category, Coordinates, Label, Participant},
    error::{validation_error, Error},
};

pub const MIN_PARTICIPANTS: usize = 2;
pub const MAX_PARTICIPANTS: usize = 4;

/// Search radii in meters, tightest first.
pub const RADII: [u32; 4] = [2000, 5000, 10000, 20000];
pub const MAX_ATTEMPTS: usize = Category::ALL.len() * RADII.len();

pub const RECOMMEND_TTL: Duration = Duration::from_secs(5 * 60);
pub const SUGGEST_TTL: Duration = Duration::from_secs(60);

pub const NO_LANDMARK_MESSAGE: &str = "no recommendable landmark found near the midpoint";

/// Checks count, label uniqueness, label range and coordinate range, in that
/// order. The first violated rule is reported.
pub fn validate_participants(participants: &[Participant]) -> Result<(), Error> {
    let count = participants.len();
    if !(MIN_PARTICIPANTS..=MAX_PARTICIPANTS).contains(&count) {
        return Err(validation_error(
            "participant count out of range",
            format!(
                "expected {}..={}, got {}",
                MIN_PARTICIPANTS, MAX_PARTICIPANTS, count
            ),
        ));
    }

    let mut seen = HashSet::new();
    for participant in participants {
        if !seen.insert(participant.label.as_str()) {
            return Err(validation_error("duplicate label", &participant.label));
        }
    }

    for (index, participant) in participants.iter().enumerate() {
        if Label::from_str(&participant.label).is_err() {
            return Err(validation_error(
                "invalid label",
                format!(
                    "participant {} has label {:?}, expected one of A, B, C, D",
                    index, participant.label
                ),
            ));
        }
    }

    for participant in participants {
        if !participant.coordinates().is_valid() {
            return Err(validation_error(
                "coordinate out of range",
                format!(
                    "participant {} (lat: {}, lng: {})",
                    participant.label, participant.lat, participant.lng
                ),
            ));
        }
    }

    Ok(())
}

/// Arithmetic mean of the participants' coordinates, rounded. This is a flat
/// centroid, not a geodesic midpoint; it drifts for groups spread over large
/// distances.
pub fn compute_anchor(participants: &[Participant]) -> Coordinates {
    let count = participants.len() as f64;

    let sum = participants
        .iter()
        .map(|p| Point::from(p.coordinates()))
        .fold(Point::new(0.0, 0.0), |acc, p| acc + p);

    Coordinates::from(sum / count).rounded()
}

pub fn recommend_cache_key(anchor: Coordinates, category: Option<Category>) -> String {
    let Coordinates { lat, lng } = anchor.rounded();

    match category {
        Some(category) => format!("recommend:{:.6},{:.6}:{}", lat, lng, category.code()),
        None => format!("recommend:{:.6},{:.6}", lat, lng),
    }
}

pub fn suggest_cache_key(normalized_query: &str) -> String {
    format!("suggest:{}", normalized_query)
}

/// Every (category, radius) pair to try, categories outermost.
pub fn search_attempts(category: Option<Category>) -> Vec<(Category, u32)> {
    let categories = match category {
        Some(category) => vec![category],
        None => Category::ALL.to_vec(),
    };

    categories
        .into_iter()
        .flat_map(|category| RADII.iter().map(move |&radius| (category, radius)))
        .take(MAX_ATTEMPTS)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn pair() -> Vec<Participant> {
        vec![
            Participant::new("A", 37.5665, 126.9780),
            Participant::new("B", 37.5651, 126.9895),
        ]
    }

    #[test]
    fn accepts_two_to_four() {
        assert!(validate_participants(&pair()).is_ok());

        let mut four = pair();
        four.push(Participant::new("C", 37.5, 127.0));
        four.push(Participant::new("D", 37.6, 127.1));
        assert!(validate_participants(&four).is_ok());
    }

    #[test]
    fn rejects_count_out_of_range() {
        let one = vec![Participant::new("A", 37.5, 127.0)];
        let err = validate_participants(&one).unwrap_err();
        assert!(err.is_invalid_input());
        assert!(err.message.starts_with("participant count out of range"));

        let five: Vec<Participant> = ["A", "B", "C", "D", "A"]
            .iter()
            .map(|l| Participant::new(l, 0.0, 0.0))
            .collect();
        let err = validate_participants(&five).unwrap_err();
        assert!(err.message.starts_with("participant count out of range"));
    }

    #[test]
    fn rejects_duplicate_before_invalid_label() {
        let participants = vec![
            Participant::new("E", 37.5, 127.0),
            Participant::new("E", 37.5, 127.0),
        ];
        let err = validate_participants(&participants).unwrap_err();
        assert!(err.message.starts_with("duplicate label"));
    }

    #[test]
    fn rejects_invalid_label_with_index() {
        let participants = vec![
            Participant::new("A", 37.5, 127.0),
            Participant::new("F", 37.5, 127.0),
        ];
        let err = validate_participants(&participants).unwrap_err();
        assert!(err.message.starts_with("invalid label"));
        assert!(err.message.contains("participant 1"));
        assert!(err.message.contains("\"F\""));
    }

    #[test]
    fn rejects_coordinates_out_of_range() {
        let participants = vec![
            Participant::new("A", 37.5, 127.0),
            Participant::new("B", 91.0, 127.0),
        ];
        let err = validate_participants(&participants).unwrap_err();
        assert!(err.message.starts_with("coordinate out of range"));
        assert!(err.message.contains("participant B"));

        let participants = vec![
            Participant::new("A", 37.5, -180.5),
            Participant::new("B", 37.5, 127.0),
        ];
        let err = validate_participants(&participants).unwrap_err();
        assert!(err.message.starts_with("coordinate out of range"));
    }

    #[test]
    fn anchor_is_rounded_mean() {
        let anchor = compute_anchor(&pair());
        assert_eq!(anchor, Coordinates::new(37.5658, 126.98375));
    }

    #[test]
    fn anchor_ignores_order() {
        let mut reversed = pair();
        reversed.reverse();
        assert_eq!(compute_anchor(&pair()), compute_anchor(&reversed));
    }

    #[test]
    fn cache_key_includes_category_only_when_given() {
        let anchor = Coordinates::new(37.5658, 126.98375);
        assert_eq!(
            recommend_cache_key(anchor, None),
            "recommend:37.565800,126.983750"
        );
        assert_eq!(
            recommend_cache_key(anchor, Some(Category::PublicInstitution)),
            "recommend:37.565800,126.983750:PO3"
        );
    }

    #[test]
    fn attempts_follow_category_then_radius() {
        let attempts = search_attempts(None);
        assert_eq!(attempts.len(), 16);
        assert_eq!(attempts[0], (Category::SubwayStation, 2000));
        assert_eq!(attempts[3], (Category::SubwayStation, 20000));
        assert_eq!(attempts[4], (Category::CulturalFacility, 2000));
        assert_eq!(attempts[15], (Category::TouristAttraction, 20000));
    }

    #[test]
    fn explicit_category_restricts_attempts() {
        let attempts = search_attempts(Some(Category::TouristAttraction));
        assert_eq!(
            attempts,
            vec![
                (Category::TouristAttraction, 2000),
                (Category::TouristAttraction, 5000),
                (Category::TouristAttraction, 10000),
                (Category::TouristAttraction, 20000),
            ]
        );
    }
}
