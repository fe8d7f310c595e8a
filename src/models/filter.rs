use serde::Deserialize;

pub const ALL: &str = "All";
pub const ANY: &str = "Any";

/// Raw dropdown selections as they arrive on the query string.
#[derive(Debug, Deserialize, Default, Clone)]
pub struct FilterQuery {
    pub region: Option<String>,
    pub locality: Option<String>,
    pub category: Option<String>,
    pub season: Option<String>,
}

/// Cascading filter with the "All"/"Any" sentinels already resolved to `None`.
#[derive(Debug, Clone, PartialEq)]
pub struct FilterSelection {
    pub region: String,
    pub locality: Option<String>,
    pub category: Option<String>,
    pub season: Option<String>,
}

impl FilterSelection {
    /// Resolves a query against a fallback region (used when none was picked).
    pub fn from_query(query: FilterQuery, default_region: &str) -> Self {
        let region = query
            .region
            .filter(|r| !r.trim().is_empty())
            .unwrap_or_else(|| default_region.to_string());

        Self {
            region,
            locality: strip_sentinel(query.locality, ALL),
            category: strip_sentinel(query.category, ALL),
            season: strip_sentinel(query.season, ANY),
        }
    }

    /// Locality if one is picked, otherwise the region.
    pub fn heading(&self) -> &str {
        self.locality.as_deref().unwrap_or(&self.region)
    }
}

fn strip_sentinel(value: Option<String>, sentinel: &str) -> Option<String> {
    value.filter(|v| !v.trim().is_empty() && v != sentinel)
}
