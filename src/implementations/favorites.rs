use std::collections::BTreeSet;

use log::{ debug, error, warn };

use crate::errors::{ CalcEstateError, CalcResult };
use crate::implementations::catalog;
use crate::traits::storage::KeyValueStorage;

/// Storage key of the liked ratio ids document
pub const LIKED_RATIOS_KEY: &str = "likedRatios";

/// The set of ratios the user marked as favorite, persisted as a JSON array of ids
pub struct FavoritesStore<S: KeyValueStorage> {
    storage: S,
    key: String,
    liked: BTreeSet<u32>,
}

impl<S: KeyValueStorage> FavoritesStore<S> {
    pub async fn open(storage: S) -> Self {
        Self::open_with_key(storage, LIKED_RATIOS_KEY).await
    }

    pub async fn open_with_key(storage: S, key: &str) -> Self {
        let mut store = Self {
            storage,
            key: key.to_string(),
            liked: BTreeSet::new(),
        };
        store.liked = store.load().await.into_iter().collect();
        store
    }

    pub fn storage(&self) -> &S {
        &self.storage
    }

    /// Read the persisted ids. Absent or unreadable documents load as empty.
    pub async fn load(&self) -> Vec<u32> {
        match self.storage.get_item(&self.key).await {
            Ok(Some(json)) =>
                serde_json::from_str::<Vec<u32>>(&json).unwrap_or_else(|e| {
                    warn!("Error loading liked ratios: {}", e);
                    Vec::new()
                }),
            Ok(None) => Vec::new(),
            Err(e) => {
                warn!("Error loading liked ratios: {}", e);
                Vec::new()
            }
        }
    }

    pub fn is_liked(&self, ratio_id: u32) -> bool {
        self.liked.contains(&ratio_id)
    }

    /// Liked ids in catalog order
    pub fn liked(&self) -> Vec<u32> {
        catalog::all()
            .iter()
            .map(|r| r.id)
            .filter(|id| self.liked.contains(id))
            .collect()
    }

    /// Flip the liked state of `ratio_id` and persist. Returns the new state.
    pub async fn toggle(&mut self, ratio_id: u32) -> CalcResult<bool> {
        if catalog::find(ratio_id).is_none() {
            return Err(CalcEstateError::UnknownRatio(ratio_id));
        }

        let now_liked = if self.liked.remove(&ratio_id) {
            false
        } else {
            self.liked.insert(ratio_id);
            true
        };
        debug!("Ratio {} liked: {}", ratio_id, now_liked);

        self.save().await;
        Ok(now_liked)
    }

    async fn save(&self) -> bool {
        let json = match serde_json::to_string(&self.liked()) {
            Ok(json) => json,
            Err(e) => {
                error!("Error saving liked ratios: {}", e);
                return false;
            }
        };
        match self.storage.set_item(&self.key, &json).await {
            Ok(()) => true,
            Err(e) => {
                error!("Error saving liked ratios: {}", e);
                false
            }
        }
    }
}
