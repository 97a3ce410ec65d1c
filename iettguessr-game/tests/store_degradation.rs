//! Gameplay must survive the profile store being unreachable.

use std::cell::RefCell;
use std::convert::Infallible;

use async_trait::async_trait;
use iettguessr_game::{
    DistrictTable, GameError, GamePhase, GameSession, ProfileDraft, ProfileRepository,
    ProfileStore, RideCounts, TransitProfile, seed_profiles,
};

struct DownStore;

#[derive(Debug, thiserror::Error)]
#[error("connection refused")]
struct Unreachable;

#[async_trait(?Send)]
impl ProfileStore for DownStore {
    type Error = Unreachable;

    async fn insert(&self, _draft: &ProfileDraft) -> Result<TransitProfile, Self::Error> {
        Err(Unreachable)
    }

    async fn fetch_all(&self) -> Result<Vec<TransitProfile>, Self::Error> {
        Err(Unreachable)
    }
}

#[derive(Default)]
struct MemoryStore {
    profiles: RefCell<Vec<TransitProfile>>,
}

#[async_trait(?Send)]
impl ProfileStore for MemoryStore {
    type Error = Infallible;

    async fn insert(&self, draft: &ProfileDraft) -> Result<TransitProfile, Self::Error> {
        let mut profiles = self.profiles.borrow_mut();
        let profile = draft.clone().with_id(format!("mem_{}", profiles.len() + 1));
        profiles.insert(0, profile.clone());
        Ok(profile)
    }

    async fn fetch_all(&self) -> Result<Vec<TransitProfile>, Self::Error> {
        Ok(self.profiles.borrow().clone())
    }
}

fn realistic_draft(district: &str) -> ProfileDraft {
    ProfileDraft {
        district: district.to_string(),
        counts: RideCounts {
            metro: 200,
            metrobus: 45,
            marmaray: 120,
            vapur: 85,
            otobus: 50,
        },
    }
}

fn implausible_draft(district: &str) -> ProfileDraft {
    ProfileDraft {
        district: district.to_string(),
        counts: RideCounts {
            otobus: 5,
            ..RideCounts::default()
        },
    }
}

#[tokio::test]
async fn submission_survives_a_store_outage() {
    let mut session = GameSession::new(DownStore, DistrictTable::istanbul(), 0xF00D);
    session.submit(realistic_draft("Fatih")).await.unwrap();

    let state = session.state();
    assert_eq!(state.phase, GamePhase::Playing);
    // Transient identity, seed-only pool.
    assert!(session.my_id().unwrap().starts_with("local_"));
    assert_eq!(state.total_rounds, 5);

    let seed_ids: Vec<String> = seed_profiles().into_iter().map(|p| p.id).collect();
    assert!(seed_ids.contains(&state.current_profile.as_ref().unwrap().id));
}

#[tokio::test]
async fn implausible_submission_is_never_persisted() {
    let store = MemoryStore::default();
    let mut session = GameSession::new(store, DistrictTable::istanbul(), 0xF00D);
    session.submit(implausible_draft("Fatih")).await.unwrap();

    assert_eq!(session.state().phase, GamePhase::Playing);
    assert!(session.my_id().unwrap().starts_with("local_"));
    // Pool is the seed set alone: nothing reached the store.
    assert_eq!(session.repository().count().await, 5);
}

#[tokio::test]
async fn exhausted_pool_blocks_the_session() {
    let repo = ProfileRepository::with_seeds(DownStore, Vec::new());
    let mut session = GameSession::with_repository(repo, DistrictTable::istanbul(), 0xF00D);

    let err = session.submit(realistic_draft("Fatih")).await.unwrap_err();
    assert!(matches!(err, GameError::NoProfilesAvailable));
    // Blocked before play; never silently stalls in Playing.
    assert_eq!(session.state().phase, GamePhase::Loading);
    assert!(session.state().current_profile.is_none());
}

#[tokio::test]
async fn seed_pool_alone_supports_a_full_session() {
    let mut session = GameSession::new(DownStore, DistrictTable::istanbul(), 0xF00D);
    session.submit(realistic_draft("Fatih")).await.unwrap();

    let seed_ids: Vec<String> = seed_profiles().into_iter().map(|p| p.id).collect();
    while session.state().phase == GamePhase::Playing {
        let profile = session.state().current_profile.as_ref().unwrap();
        assert!(seed_ids.contains(&profile.id));
        let truth = profile.district.clone();
        session.guess(&truth).unwrap();
        session.advance().await.unwrap();
    }

    assert_eq!(session.state().phase, GamePhase::GameOver);
    assert_eq!(session.state().score, 50);
    assert_eq!(session.summary().percentage, 100);
}

#[tokio::test]
async fn replay_rechecks_the_pool_size() {
    let store = MemoryStore::default();
    // Two other players are already in the pool.
    store.insert(&realistic_draft("Kadıköy")).await.unwrap();
    store.insert(&realistic_draft("Tuzla")).await.unwrap();

    let mut session = GameSession::new(store, DistrictTable::istanbul(), 0xF00D);
    session.submit(realistic_draft("Fatih")).await.unwrap();
    assert_eq!(session.state().total_rounds, 8);

    while session.state().phase == GamePhase::Playing {
        session.guess("Fatih");
        session.advance().await.unwrap();
    }

    // Another player joins between sessions; the replay sees the bigger pool.
    session
        .repository()
        .add(&realistic_draft("Pendik"))
        .await
        .unwrap();
    session.play_again().await.unwrap();
    assert_eq!(session.state().total_rounds, 9);
}
