use serde::{Deserialize, Serialize};

use super::enums::ProviderCategory;
use crate::geo::Coordinate;

/// An ambulance provider or medical point of interest shown on the map.
///
/// Providers come from the static seed catalog and are never mutated at
/// runtime.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Provider {
    pub id: u32,
    pub name: String,
    pub coordinate: Coordinate,
    pub category: ProviderCategory,
    /// Average user rating in [0, 5].
    pub rating: f64,
    /// Display text, e.g. "8-12 min".
    pub response_time_range: String,
    pub contact: String,
    pub available: bool,
}
