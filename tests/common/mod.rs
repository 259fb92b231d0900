#![allow(dead_code)]

use async_trait::async_trait;
use chrono::{DateTime, Utc};
use std::collections::{HashMap, VecDeque};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::{Arc, Mutex};
use uuid::Uuid;

use midpoint::cache::{DynCache, MemoryCache};
use midpoint::db::ShareStore;
use midpoint::engine::Engine;
use midpoint::entities::{Category, Coordinates, Participant, Place};
use midpoint::error::Error;
use midpoint::external::PlaceSearch;

#[derive(Clone, Debug, PartialEq)]
pub enum Call {
    Category(Category, u32),
    Keyword(String),
}

/// Place search double. Replays scripted responses in order and records every
/// call; once the script runs out it answers with an empty result set.
#[derive(Default)]
pub struct ScriptedPlaces {
    script: Mutex<VecDeque<Result<Vec<Place>, Error>>>,
    calls: Mutex<Vec<Call>>,
}

impl ScriptedPlaces {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn then(self, response: Result<Vec<Place>, Error>) -> Self {
        self.script.lock().unwrap().push_back(response);
        self
    }

    pub fn then_empty(self, times: usize) -> Self {
        (0..times).fold(self, |places, _| places.then(Ok(vec![])))
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn call_count(&self) -> usize {
        self.calls.lock().unwrap().len()
    }

    fn next(&self, call: Call) -> Result<Vec<Place>, Error> {
        self.calls.lock().unwrap().push(call);
        self.script.lock().unwrap().pop_front().unwrap_or(Ok(vec![]))
    }
}

#[async_trait]
impl PlaceSearch for ScriptedPlaces {
    async fn search_by_category(
        &self,
        category: Category,
        _origin: Coordinates,
        radius: u32,
        _limit: u32,
    ) -> Result<Vec<Place>, Error> {
        self.next(Call::Category(category, radius))
    }

    async fn search_keyword(&self, query: &str, _limit: u32) -> Result<Vec<Place>, Error> {
        self.next(Call::Keyword(query.to_string()))
    }
}

#[derive(Default)]
pub struct MemoryShares {
    pub shares: Mutex<HashMap<Uuid, midpoint::entities::Share>>,
    pub cleanups: AtomicUsize,
}

impl MemoryShares {
    pub fn cleanup_count(&self) -> usize {
        self.cleanups.load(Ordering::SeqCst)
    }
}

#[async_trait]
impl ShareStore for MemoryShares {
    async fn insert_share(&self, share: &midpoint::entities::Share) -> Result<(), Error> {
        self.shares.lock().unwrap().insert(share.id, share.clone());
        Ok(())
    }

    async fn find_share(&self, id: Uuid) -> Result<Option<midpoint::entities::Share>, Error> {
        Ok(self.shares.lock().unwrap().get(&id).cloned())
    }

    async fn delete_share(&self, id: Uuid) -> Result<(), Error> {
        self.shares.lock().unwrap().remove(&id);
        Ok(())
    }

    async fn delete_expired_shares(&self, now: DateTime<Utc>) -> Result<u64, Error> {
        self.cleanups.fetch_add(1, Ordering::SeqCst);

        let mut shares = self.shares.lock().unwrap();
        let before = shares.len();
        shares.retain(|_, share| !share.is_expired(now));

        Ok((before - shares.len()) as u64)
    }
}

pub struct Harness {
    pub engine: Engine,
    pub places: Arc<ScriptedPlaces>,
    pub cache: DynCache,
    pub shares: Arc<MemoryShares>,
}

pub fn harness(places: ScriptedPlaces) -> Harness {
    let places = Arc::new(places);
    let cache: DynCache = Arc::new(MemoryCache::new());
    let shares = Arc::new(MemoryShares::default());

    let engine = Engine::new(
        places.clone(),
        cache.clone(),
        shares.clone(),
        "http://localhost:3000",
    );

    Harness {
        engine,
        places,
        cache,
        shares,
    }
}

pub fn place(id: &str, distance: u32) -> Place {
    Place {
        place_id: id.into(),
        name: format!("Place {}", id),
        address: "Seoul".into(),
        lat: 37.5658,
        lng: 126.9837,
        place_url: None,
        distance: Some(distance),
    }
}

pub fn seoul_pair() -> Vec<Participant> {
    vec![
        Participant::new("A", 37.5665, 126.9780),
        Participant::new("B", 37.5651, 126.9895),
    ]
}
