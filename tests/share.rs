mod common;

use chrono::{Duration, Utc};
use common::{harness, place, seoul_pair, ScriptedPlaces};
use midpoint::api::ShareAPI;
use midpoint::db::ShareStore;
use midpoint::entities::{Category, Coordinates, Participant, Share, ShareData, Usage};
use uuid::Uuid;

fn share_data() -> ShareData {
    ShareData {
        anchor: Coordinates::new(37.56580012, 126.98375),
        participants: seoul_pair(),
        final_place: place("1", 500),
        candidates: vec![place("1", 500), place("2", 700)],
        used: Some(Usage {
            category: Category::SubwayStation,
            radius: 2000,
        }),
    }
}

async fn wait_for_cleanup(shares: &common::MemoryShares) {
    for _ in 0..100 {
        if shares.cleanup_count() > 0 {
            return;
        }
        tokio::task::yield_now().await;
    }
}

#[tokio::test]
async fn created_share_can_be_found() {
    let h = harness(ScriptedPlaces::new());

    let link = h.engine.create_share(share_data()).await.unwrap();

    assert_eq!(
        link.url,
        format!("http://localhost:3000/share/{}", link.share_id)
    );

    let share = h.engine.find_share(link.share_id).await.unwrap();
    assert_eq!(share.id, link.share_id);
    assert_eq!(share.data.anchor, Coordinates::new(37.5658, 126.98375));
    assert_eq!(share.data.candidates.len(), 2);
    assert_eq!(share.expires_at - share.created_at, Duration::days(7));
}

#[tokio::test]
async fn creating_a_share_cleans_expired_ones_in_background() {
    let h = harness(ScriptedPlaces::new());
    let stale = Share::new(share_data(), Utc::now() - Duration::days(8));
    h.shares.insert_share(&stale).await.unwrap();

    h.engine.create_share(share_data()).await.unwrap();
    wait_for_cleanup(&h.shares).await;

    assert_eq!(h.shares.cleanup_count(), 1);
    assert!(h.shares.find_share(stale.id).await.unwrap().is_none());
}

#[tokio::test]
async fn expired_share_is_deleted_on_read() {
    let h = harness(ScriptedPlaces::new());
    let stale = Share::new(share_data(), Utc::now() - Duration::days(8));
    h.shares.insert_share(&stale).await.unwrap();

    let err = h.engine.find_share(stale.id).await.unwrap_err();

    assert_eq!(err.message, "share expired");
    assert!(h.shares.find_share(stale.id).await.unwrap().is_none());
}

#[tokio::test]
async fn unknown_share_is_not_found() {
    let h = harness(ScriptedPlaces::new());

    let err = h.engine.find_share(Uuid::new_v4()).await.unwrap_err();

    assert_eq!(err.message, "share not found");
}

#[tokio::test]
async fn rejects_share_with_invalid_participants() {
    let h = harness(ScriptedPlaces::new());
    let mut data = share_data();
    data.participants.push(Participant::new("Z", 37.0, 127.0));

    let err = h.engine.create_share(data).await.unwrap_err();

    assert!(err.message.starts_with("invalid label"));
    assert!(h.shares.shares.lock().unwrap().is_empty());
}
