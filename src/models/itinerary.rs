use indexmap::IndexMap;
use serde::{Deserialize, Serialize};

/// A user's day plan: region name to place names. Regions and places both keep
/// the order they were first added.
#[derive(Debug, Default, Deserialize, Serialize, Clone, PartialEq, Eq)]
#[serde(transparent)]
pub struct Itinerary {
    pub regions: IndexMap<String, Vec<String>>,
}

impl Itinerary {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn places(&self, region: &str) -> &[String] {
        self.regions.get(region).map(Vec::as_slice).unwrap_or(&[])
    }

    pub fn is_empty(&self) -> bool {
        self.regions.values().all(Vec::is_empty)
    }

    /// Drops regions whose place list is empty so they are never persisted.
    pub fn prune(&mut self) {
        self.regions.retain(|_, places| !places.is_empty());
    }
}

/// Shape of a single user's entry in the plan store file.
///
/// Older files hold a flat list of place names; newer ones group them by region.
#[derive(Debug, Deserialize, Serialize, Clone, PartialEq)]
#[serde(untagged)]
pub enum StoredPlan {
    Legacy(Vec<String>),
    Grouped(Itinerary),
}

impl Default for StoredPlan {
    fn default() -> Self {
        StoredPlan::Grouped(Itinerary::default())
    }
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct ScheduleEntry {
    pub start_hour: u32,
    pub time_label: String,
    pub place: String,
    pub maps_link: String,
    pub food_link: Option<String>,
}

#[derive(Debug, Serialize, Clone, PartialEq)]
pub struct RegionSummary {
    pub total_places: usize,
    pub total_hours: u32,
    pub localities: Vec<String>,
}

#[derive(Debug, Serialize, Clone)]
pub struct RegionPlan {
    pub region: String,
    pub summary: RegionSummary,
    pub schedule: Vec<ScheduleEntry>,
}

#[derive(Debug, Serialize, Clone)]
pub struct DayPlans {
    pub regions: Vec<RegionPlan>,
}
