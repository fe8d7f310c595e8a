use std::collections::BTreeMap;
use std::fs;
use std::io::ErrorKind;
use std::path::{Path, PathBuf};

use log::{debug, warn};
use serde_json::Value;
use thiserror::Error;

use crate::models::itinerary::{Itinerary, StoredPlan};
use crate::services::catalog_service::PlaceCatalog;
use crate::services::itinerary_service::upgrade_legacy;

/// Every user's raw plan entry, keyed by the identity label they signed in with.
///
/// Entries stay undecoded so that one malformed entry never costs the others.
pub type PlanMap = BTreeMap<String, Value>;

#[derive(Debug, Error)]
pub enum StoreError {
    #[error("plan store I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("plan store is corrupt: {0}")]
    Corrupt(#[from] serde_json::Error),
}

/// Durable identity -> itinerary mapping with load-all / replace-one semantics.
///
/// `save_one` is a full read-modify-write with no locking; concurrent writers race
/// and the last one wins.
pub trait PlanStore: Send + Sync {
    fn load_all(&self) -> Result<PlanMap, StoreError>;

    fn write_all(&self, plans: &PlanMap) -> Result<(), StoreError>;

    /// `load_all`, degrading a corrupt store to an empty one.
    fn load_all_or_empty(&self) -> Result<PlanMap, StoreError> {
        match self.load_all() {
            Ok(plans) => Ok(plans),
            Err(StoreError::Corrupt(err)) => {
                warn!("Plan store could not be parsed, treating as empty: {}", err);
                Ok(PlanMap::new())
            }
            Err(err) => Err(err),
        }
    }

    /// The plan stored for `identity`, upgraded from the legacy flat list if needed.
    fn load_one(&self, identity: &str, catalog: &PlaceCatalog) -> Result<Itinerary, StoreError> {
        let stored = match self.load_all_or_empty()?.remove(identity) {
            Some(raw) => decode_entry(identity, raw),
            None => StoredPlan::default(),
        };
        Ok(match stored {
            StoredPlan::Grouped(itinerary) => itinerary,
            StoredPlan::Legacy(places) => {
                debug!("Upgrading legacy plan for {} ({} places)", identity, places.len());
                upgrade_legacy(&places, catalog)
            }
        })
    }

    fn save_one(&self, identity: &str, itinerary: &Itinerary) -> Result<(), StoreError> {
        let mut plans = self.load_all_or_empty()?;
        let mut itinerary = itinerary.clone();
        itinerary.prune();
        plans.insert(identity.to_string(), serde_json::to_value(itinerary)?);
        self.write_all(&plans)
    }
}

/// Decodes one user's entry; an entry of unexpected shape reads as an empty plan.
fn decode_entry(identity: &str, raw: Value) -> StoredPlan {
    match serde_json::from_value(raw) {
        Ok(stored) => stored,
        Err(err) => {
            warn!("Plan entry for {} is malformed, starting empty: {}", identity, err);
            StoredPlan::default()
        }
    }
}

/// Plan store backed by a single JSON file that is replaced on every save.
pub struct JsonFilePlanStore {
    path: PathBuf,
}

impl JsonFilePlanStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }
}

impl PlanStore for JsonFilePlanStore {
    fn load_all(&self) -> Result<PlanMap, StoreError> {
        let raw = match fs::read_to_string(&self.path) {
            Ok(raw) => raw,
            Err(err) if err.kind() == ErrorKind::NotFound => return Ok(PlanMap::new()),
            Err(err) => return Err(err.into()),
        };
        Ok(serde_json::from_str(&raw)?)
    }

    fn write_all(&self, plans: &PlanMap) -> Result<(), StoreError> {
        let raw = serde_json::to_string(plans)?;
        fs::write(&self.path, raw)?;
        debug!("Wrote {} plans to {}", plans.len(), self.path.display());
        Ok(())
    }
}
