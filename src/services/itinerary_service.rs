//! Day-plan manager
//!
//! Holds one user's itinerary (places grouped by region, in the order they were
//! added) and writes every change straight through to the plan store. When no
//! identity is set the manager still works, but only in memory.

use log::{debug, info, warn};
use serde::Serialize;

use crate::db::plan_store::{PlanStore, StoreError};
use crate::models::itinerary::{DayPlans, Itinerary, RegionPlan, RegionSummary, ScheduleEntry};
use crate::services::catalog_service::PlaceCatalog;
use crate::services::link_service;

/// First visit of every region starts at this hour.
pub const DAY_START_HOUR: u32 = 9;
/// Time budgeted for each place.
pub const VISIT_HOURS: u32 = 3;

#[derive(Debug, Serialize, Clone, Copy, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum AddOutcome {
    Added,
    AlreadyPresent,
    /// The name did not resolve to a catalog row; nothing changed.
    UnknownPlace,
}

pub struct ItineraryManager<'a> {
    identity: Option<String>,
    itinerary: Itinerary,
    catalog: &'a PlaceCatalog,
    store: &'a dyn PlanStore,
}

impl<'a> ItineraryManager<'a> {
    /// Manager for a signed-out visitor: an empty plan that is never persisted.
    pub fn signed_out(catalog: &'a PlaceCatalog, store: &'a dyn PlanStore) -> Self {
        Self {
            identity: None,
            itinerary: Itinerary::new(),
            catalog,
            store,
        }
    }

    /// Loads the stored plan for `identity`, upgrading a legacy entry in memory.
    pub fn load(
        identity: &str,
        catalog: &'a PlaceCatalog,
        store: &'a dyn PlanStore,
    ) -> Result<Self, StoreError> {
        let itinerary = store.load_one(identity, catalog)?;
        Ok(Self {
            identity: Some(identity.to_string()),
            itinerary,
            catalog,
            store,
        })
    }

    pub fn identity(&self) -> Option<&str> {
        self.identity.as_deref()
    }

    pub fn itinerary(&self) -> &Itinerary {
        &self.itinerary
    }

    pub fn add_place(&mut self, place_name: &str) -> Result<AddOutcome, StoreError> {
        let Some(region) = self.catalog.region_of(place_name) else {
            warn!("Ignoring add of unknown place '{}'", place_name);
            return Ok(AddOutcome::UnknownPlace);
        };

        let places = self.itinerary.regions.entry(region.to_string()).or_default();
        if places.iter().any(|p| p == place_name) {
            return Ok(AddOutcome::AlreadyPresent);
        }
        places.push(place_name.to_string());

        self.write_through()?;
        Ok(AddOutcome::Added)
    }

    pub fn remove_region(&mut self, region: &str) -> Result<(), StoreError> {
        if self.itinerary.regions.shift_remove(region).is_some() {
            info!("Removed region '{}' from day plan", region);
        }
        self.write_through()
    }

    pub fn clear_all(&mut self) -> Result<(), StoreError> {
        self.itinerary = Itinerary::new();
        self.write_through()
    }

    /// Visit slots for a region: 09:00 first, then every three hours, with no
    /// upper bound (late entries run past midnight).
    pub fn derive_schedule(&self, region: &str) -> Vec<ScheduleEntry> {
        self.itinerary
            .places(region)
            .iter()
            .enumerate()
            .map(|(i, place)| {
                let start_hour = DAY_START_HOUR + i as u32 * VISIT_HOURS;
                ScheduleEntry {
                    start_hour,
                    time_label: time_label(start_hour),
                    place: place.clone(),
                    maps_link: link_service::place_search_link(place),
                    food_link: self.catalog.find(place).map(link_service::food_link),
                }
            })
            .collect()
    }

    pub fn summary(&self, region: &str) -> RegionSummary {
        let places = self.itinerary.places(region);
        RegionSummary {
            total_places: places.len(),
            total_hours: places.len() as u32 * VISIT_HOURS,
            localities: self.catalog.localities_of(places),
        }
    }

    /// Every non-empty region with its summary and schedule.
    pub fn day_plans(&self) -> DayPlans {
        let regions = self
            .itinerary
            .regions
            .iter()
            .filter(|(_, places)| !places.is_empty())
            .map(|(region, _)| RegionPlan {
                region: region.clone(),
                summary: self.summary(region),
                schedule: self.derive_schedule(region),
            })
            .collect();
        DayPlans { regions }
    }

    fn write_through(&mut self) -> Result<(), StoreError> {
        self.itinerary.prune();
        match &self.identity {
            Some(identity) => self.store.save_one(identity, &self.itinerary),
            None => {
                debug!("No signed-in identity, keeping day plan in memory only");
                Ok(())
            }
        }
    }
}

/// Groups a legacy flat list by each place's region. Unknown names are dropped.
pub fn upgrade_legacy(places: &[String], catalog: &PlaceCatalog) -> Itinerary {
    let mut itinerary = Itinerary::new();
    for name in places {
        if let Some(region) = catalog.region_of(name) {
            let entry = itinerary.regions.entry(region.to_string()).or_default();
            if !entry.contains(name) {
                entry.push(name.clone());
            }
        }
    }
    itinerary
}

/// 12-hour label for an hour counted from midnight of the first day.
///
/// Hours past 24 keep counting ("15:00 PM"); callers rely on this as-is.
pub fn time_label(hour: u32) -> String {
    if hour < 12 {
        format!("{}:00 AM", hour)
    } else if hour == 12 {
        "12:00 PM".to_string()
    } else {
        format!("{}:00 PM", hour - 12)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::db::plan_store::PlanMap;
    use crate::services::catalog_service::tests::sample_catalog;
    use std::sync::Mutex;

    #[derive(Default)]
    struct MemoryPlanStore {
        plans: Mutex<PlanMap>,
        writes: Mutex<usize>,
    }

    impl PlanStore for MemoryPlanStore {
        fn load_all(&self) -> Result<PlanMap, StoreError> {
            Ok(self.plans.lock().unwrap().clone())
        }

        fn write_all(&self, plans: &PlanMap) -> Result<(), StoreError> {
            *self.plans.lock().unwrap() = plans.clone();
            *self.writes.lock().unwrap() += 1;
            Ok(())
        }
    }

    impl MemoryPlanStore {
        fn writes(&self) -> usize {
            *self.writes.lock().unwrap()
        }
    }

    /// Reads as empty and fails every write, like a store on a read-only disk.
    struct ReadOnlyPlanStore;

    impl PlanStore for ReadOnlyPlanStore {
        fn load_all(&self) -> Result<PlanMap, StoreError> {
            Ok(PlanMap::new())
        }

        fn write_all(&self, _plans: &PlanMap) -> Result<(), StoreError> {
            Err(std::io::Error::new(std::io::ErrorKind::PermissionDenied, "read-only").into())
        }
    }

    const USER: &str = "traveller@example.com";

    #[test]
    fn test_add_place_groups_by_region() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();

        assert_eq!(manager.add_place("Baga Beach").unwrap(), AddOutcome::Added);
        assert_eq!(manager.add_place("Amber Fort").unwrap(), AddOutcome::Added);
        assert_eq!(manager.add_place("Palolem Beach").unwrap(), AddOutcome::Added);

        let itinerary = manager.itinerary();
        assert_eq!(itinerary.places("Goa"), ["Baga Beach", "Palolem Beach"]);
        assert_eq!(itinerary.places("Rajasthan"), ["Amber Fort"]);
        assert_eq!(store.writes(), 3);
    }

    #[test]
    fn test_add_place_is_idempotent() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();

        manager.add_place("Baga Beach").unwrap();
        assert_eq!(
            manager.add_place("Baga Beach").unwrap(),
            AddOutcome::AlreadyPresent
        );
        assert_eq!(manager.itinerary().places("Goa"), ["Baga Beach"]);
    }

    #[test]
    fn test_unknown_place_is_ignored() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();

        assert_eq!(
            manager.add_place("Atlantis").unwrap(),
            AddOutcome::UnknownPlace
        );
        assert!(manager.itinerary().is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_remove_missing_region_is_noop() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();
        manager.add_place("Baga Beach").unwrap();
        let before = manager.itinerary().clone();

        manager.remove_region("Kerala").unwrap();
        assert_eq!(manager.itinerary(), &before);
    }

    #[test]
    fn test_remove_region_persists() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();
        manager.add_place("Baga Beach").unwrap();
        manager.add_place("Amber Fort").unwrap();

        manager.remove_region("Goa").unwrap();

        let reloaded = store.load_one(USER, &catalog).unwrap();
        assert!(!reloaded.regions.contains_key("Goa"));
        assert_eq!(reloaded.places("Rajasthan"), ["Amber Fort"]);
    }

    #[test]
    fn test_clear_all_then_load_is_empty() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();
        manager.add_place("Baga Beach").unwrap();

        manager.clear_all().unwrap();

        assert!(store.load_one(USER, &catalog).unwrap().is_empty());
    }

    #[test]
    fn test_signed_out_clear_skips_store() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::signed_out(&catalog, &store);
        manager.add_place("Baga Beach").unwrap();

        manager.clear_all().unwrap();

        assert!(manager.itinerary().is_empty());
        assert_eq!(store.writes(), 0);
    }

    #[test]
    fn test_schedule_starts_at_nine_in_three_hour_steps() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();
        for name in ["Baga Beach", "Aguada Fort", "Palolem Beach", "Calangute Beach"] {
            manager.add_place(name).unwrap();
        }

        let schedule = manager.derive_schedule("Goa");
        assert_eq!(schedule.len(), 4);
        assert_eq!(schedule[0].start_hour, DAY_START_HOUR);
        for pair in schedule.windows(2) {
            assert_eq!(pair[1].start_hour - pair[0].start_hour, VISIT_HOURS);
        }

        let labels: Vec<&str> = schedule.iter().map(|e| e.time_label.as_str()).collect();
        assert_eq!(labels, vec!["9:00 AM", "12:00 PM", "3:00 PM", "6:00 PM"]);
        assert_eq!(schedule[1].place, "Aguada Fort");
        assert!(schedule[0].food_link.is_some());
    }

    #[test]
    fn test_time_label_runs_past_midnight() {
        assert_eq!(time_label(21), "9:00 PM");
        assert_eq!(time_label(24), "12:00 PM");
        assert_eq!(time_label(27), "15:00 PM");
    }

    #[test]
    fn test_summary_counts_and_localities() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();
        manager.add_place("Palolem Beach").unwrap();
        manager.add_place("Baga Beach").unwrap();

        let summary = manager.summary("Goa");
        assert_eq!(summary.total_places, 2);
        assert_eq!(summary.total_hours, 6);
        assert_eq!(summary.localities, vec!["North Goa", "South Goa"]);

        let empty = manager.summary("Kerala");
        assert_eq!(empty.total_places, 0);
        assert!(empty.localities.is_empty());
    }

    #[test]
    fn test_upgrade_legacy_groups_by_region() {
        let catalog = sample_catalog();
        let legacy = vec![
            "Baga Beach".to_string(),
            "Amber Fort".to_string(),
            "Atlantis".to_string(),
        ];
        let upgraded = upgrade_legacy(&legacy, &catalog);
        assert_eq!(upgraded.places("Goa"), ["Baga Beach"]);
        assert_eq!(upgraded.places("Rajasthan"), ["Amber Fort"]);
        assert_eq!(upgraded.regions.len(), 2);
    }

    #[test]
    fn test_load_reads_legacy_entry() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        store
            .plans
            .lock()
            .unwrap()
            .insert(USER.to_string(), serde_json::json!(["Hawa Mahal"]));

        let manager = ItineraryManager::load(USER, &catalog, &store).unwrap();
        assert_eq!(manager.itinerary().places("Rajasthan"), ["Hawa Mahal"]);
        assert_eq!(manager.day_plans().regions.len(), 1);
    }

    #[test]
    fn test_write_failure_is_reported() {
        let catalog = sample_catalog();
        let store = ReadOnlyPlanStore;
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();

        assert!(matches!(
            manager.add_place("Baga Beach"),
            Err(StoreError::Io(_))
        ));
        assert!(matches!(manager.clear_all(), Err(StoreError::Io(_))));

        // Nothing is persisted for a signed-out visitor, so nothing can fail.
        let mut visitor = ItineraryManager::signed_out(&catalog, &store);
        assert_eq!(visitor.add_place("Baga Beach").unwrap(), AddOutcome::Added);
    }

    #[test]
    fn test_regions_listed_in_order_added() {
        let catalog = sample_catalog();
        let store = MemoryPlanStore::default();
        let mut manager = ItineraryManager::load(USER, &catalog, &store).unwrap();
        manager.add_place("Amber Fort").unwrap();
        manager.add_place("Baga Beach").unwrap();
        manager.add_place("Hawa Mahal").unwrap();

        let regions: Vec<String> = manager
            .day_plans()
            .regions
            .into_iter()
            .map(|plan| plan.region)
            .collect();
        assert_eq!(regions, vec!["Rajasthan", "Goa"]);

        let reloaded = ItineraryManager::load(USER, &catalog, &store).unwrap();
        let keys: Vec<&str> = reloaded.itinerary().regions.keys().map(String::as_str).collect();
        assert_eq!(keys, vec!["Rajasthan", "Goa"]);
    }
}
