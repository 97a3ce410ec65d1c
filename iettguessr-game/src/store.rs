//! Profile pool access: the external store seam plus the fallback policy
//! layered on top of it.

use async_trait::async_trait;
use rand::Rng;

use crate::error::GameError;
use crate::profile::{ProfileDraft, RideCounts, TransitProfile};

/// The external, network-backed profile store.
///
/// Implementations assign ids and creation timestamps; `fetch_all` returns
/// newest-first so fresh submissions surface ahead of old ones. The core
/// never assumes exclusive access: other players may add profiles between
/// any two calls.
#[async_trait(?Send)]
pub trait ProfileStore {
    type Error: std::error::Error + Send + Sync + 'static;

    /// Persist a draft and return it with the store-assigned id.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached or rejects the write.
    async fn insert(&self, draft: &ProfileDraft) -> Result<TransitProfile, Self::Error>;

    /// Every persisted profile, newest first.
    ///
    /// # Errors
    ///
    /// Returns an error if the store cannot be reached.
    async fn fetch_all(&self) -> Result<Vec<TransitProfile>, Self::Error>;
}

#[rustfmt::skip]
const SEEDS: &[(&str, &str, RideCounts)] = &[
    ("seed_1", "Kadıköy",  RideCounts { metro: 200, metrobus: 45,  marmaray: 120, vapur: 85,  otobus: 50 }),
    ("seed_2", "Beşiktaş", RideCounts { metro: 150, metrobus: 180, marmaray: 30,  vapur: 60,  otobus: 90 }),
    ("seed_3", "Üsküdar",  RideCounts { metro: 80,  metrobus: 20,  marmaray: 200, vapur: 150, otobus: 40 }),
    ("seed_4", "Bakırköy", RideCounts { metro: 100, metrobus: 250, marmaray: 15,  vapur: 25,  otobus: 180 }),
    ("seed_5", "Maltepe",  RideCounts { metro: 120, metrobus: 30,  marmaray: 180, vapur: 40,  otobus: 60 }),
];

/// The fixed fallback pool, in its canonical order. Guarantees the game is
/// playable before anyone has submitted and whenever the store is down.
#[must_use]
pub fn seed_profiles() -> Vec<TransitProfile> {
    SEEDS
        .iter()
        .map(|&(id, district, counts)| TransitProfile {
            id: id.to_string(),
            district: district.to_string(),
            counts,
        })
        .collect()
}

/// Store wrapper that owns the degradation policy: reads never fail and
/// never come back empty, writes degrade to the caller's transient path.
#[derive(Debug, Clone)]
pub struct ProfileRepository<S> {
    store: S,
    seeds: Vec<TransitProfile>,
}

impl<S: ProfileStore> ProfileRepository<S> {
    #[must_use]
    pub fn new(store: S) -> Self {
        Self::with_seeds(store, seed_profiles())
    }

    /// Repository with an alternate fallback set, for deterministic tests.
    #[must_use]
    pub const fn with_seeds(store: S, seeds: Vec<TransitProfile>) -> Self {
        Self { store, seeds }
    }

    /// Persist a submission.
    ///
    /// # Errors
    ///
    /// Returns [`GameError::StoreUnavailable`] when the store cannot be
    /// reached; the caller keeps playing with a transient profile.
    pub async fn add(&self, draft: &ProfileDraft) -> Result<TransitProfile, GameError> {
        self.store
            .insert(draft)
            .await
            .map_err(GameError::store_unavailable)
    }

    /// Every available profile: persisted ones newest first, then the seed
    /// set in its fixed order. On store failure returns the seeds alone.
    pub async fn list_all(&self) -> Vec<TransitProfile> {
        match self.store.fetch_all().await {
            Ok(mut profiles) => {
                profiles.extend(self.seeds.iter().cloned());
                profiles
            }
            Err(err) => {
                log::warn!("profile store unreachable, serving seed profiles only: {err}");
                self.seeds.clone()
            }
        }
    }

    pub async fn count(&self) -> usize {
        self.list_all().await.len()
    }

    /// Uniform random draw, optionally excluding one profile id. `None`
    /// only when the filtered pool is empty.
    pub async fn pick_random<R: Rng + ?Sized>(
        &self,
        rng: &mut R,
        exclude_id: Option<&str>,
    ) -> Option<TransitProfile> {
        let mut pool = self.list_all().await;
        if let Some(excluded) = exclude_id {
            pool.retain(|p| p.id != excluded);
        }
        if pool.is_empty() {
            return None;
        }
        let index = rng.gen_range(0..pool.len());
        Some(pool.swap_remove(index))
    }
}
