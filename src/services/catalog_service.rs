use std::collections::BTreeSet;

use crate::models::filter::{FilterSelection, ALL, ANY};
use crate::models::place::Place;

/// In-memory place table, loaded once at startup and read-only afterwards.
#[derive(Debug, Default, Clone)]
pub struct PlaceCatalog {
    places: Vec<Place>,
}

impl PlaceCatalog {
    pub fn from_places(places: Vec<Place>) -> Self {
        Self { places }
    }

    pub fn len(&self) -> usize {
        self.places.len()
    }

    pub fn is_empty(&self) -> bool {
        self.places.is_empty()
    }

    pub fn places(&self) -> &[Place] {
        &self.places
    }

    /// All distinct non-empty regions, sorted ascending.
    pub fn regions(&self) -> Vec<String> {
        distinct(self.places.iter().map(|p| p.region.as_str()))
    }

    /// Distinct non-empty localities within `region`, sorted ascending.
    pub fn localities(&self, region: &str) -> Vec<String> {
        distinct(
            self.places
                .iter()
                .filter(|p| p.region == region)
                .map(|p| p.locality.as_str()),
        )
    }

    /// Distinct non-empty categories in `region`, optionally narrowed to one locality.
    pub fn categories(&self, region: &str, locality: Option<&str>) -> Vec<String> {
        distinct(
            self.places
                .iter()
                .filter(|p| p.region == region)
                .filter(|p| locality.map_or(true, |l| p.locality == l))
                .map(|p| p.category.as_str()),
        )
    }

    /// Distinct non-empty recommended seasons across the whole catalog.
    pub fn seasons(&self) -> Vec<String> {
        distinct(self.places.iter().map(|p| p.recommended_season.as_str()))
    }

    pub fn localities_with_sentinel(&self, region: &str) -> Vec<String> {
        with_sentinel(ALL, self.localities(region))
    }

    pub fn categories_with_sentinel(&self, region: &str, locality: Option<&str>) -> Vec<String> {
        with_sentinel(ALL, self.categories(region, locality))
    }

    pub fn seasons_with_sentinel(&self) -> Vec<String> {
        with_sentinel(ANY, self.seasons())
    }

    /// Exact-name lookup. The first row wins when names repeat.
    pub fn find(&self, name: &str) -> Option<&Place> {
        self.places.iter().find(|p| p.name == name)
    }

    pub fn region_of(&self, name: &str) -> Option<&str> {
        self.find(name).map(|p| p.region.as_str())
    }

    /// Rows matching every supplied criterion, in catalog order.
    ///
    /// An empty result is a valid answer; callers fall back to [`Self::in_region`].
    pub fn filter(
        &self,
        region: &str,
        locality: Option<&str>,
        category: Option<&str>,
        season: Option<&str>,
    ) -> Vec<&Place> {
        self.places
            .iter()
            .filter(|p| p.region == region)
            .filter(|p| locality.map_or(true, |l| p.locality == l))
            .filter(|p| category.map_or(true, |c| p.category == c))
            .filter(|p| season.map_or(true, |s| p.recommended_season == s))
            .collect()
    }

    pub fn filter_selection(&self, selection: &FilterSelection) -> Vec<&Place> {
        self.filter(
            &selection.region,
            selection.locality.as_deref(),
            selection.category.as_deref(),
            selection.season.as_deref(),
        )
    }

    pub fn in_region(&self, region: &str) -> Vec<&Place> {
        self.filter(region, None, None, None)
    }

    /// Distinct localities of the rows named in `names`, in catalog order.
    pub fn localities_of(&self, names: &[String]) -> Vec<String> {
        let mut seen = BTreeSet::new();
        let mut localities = Vec::new();
        for place in &self.places {
            if names.contains(&place.name)
                && !place.locality.is_empty()
                && seen.insert(place.locality.as_str())
            {
                localities.push(place.locality.clone());
            }
        }
        localities
    }
}

fn distinct<'a>(values: impl Iterator<Item = &'a str>) -> Vec<String> {
    values
        .filter(|v| !v.is_empty())
        .collect::<BTreeSet<_>>()
        .into_iter()
        .map(str::to_string)
        .collect()
}

fn with_sentinel(sentinel: &str, values: Vec<String>) -> Vec<String> {
    std::iter::once(sentinel.to_string()).chain(values).collect()
}
