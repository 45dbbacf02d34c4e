//! Provider catalog + category filter for the map view.
//!
//! The catalog is a static seed list; nothing here mutates it at
//! runtime. Lookups return `Option` — callers supply their own fallback
//! labels.

use std::collections::HashSet;

use crate::geo::{self, Coordinate};
use crate::models::{Provider, ProviderCategory};

/// The seeded provider/POI catalog shown on the map.
pub fn seed_providers() -> Vec<Provider> {
    vec![
        Provider {
            id: 1,
            name: "Ambulance Casablanca".into(),
            coordinate: Coordinate::new(33.5731, -7.5898),
            category: ProviderCategory::Emergency,
            rating: 4.8,
            response_time_range: "8-12 min".into(),
            contact: "+212 522-000-111".into(),
            available: true,
        },
        Provider {
            id: 2,
            name: "Ambulance Rabat".into(),
            coordinate: Coordinate::new(34.0209, -6.8416),
            category: ProviderCategory::Emergency,
            rating: 4.6,
            response_time_range: "10-15 min".into(),
            contact: "+212 537-000-222".into(),
            available: true,
        },
        Provider {
            id: 3,
            name: "Clinique Atlas".into(),
            coordinate: Coordinate::new(33.5892, -7.6036),
            category: ProviderCategory::Premium,
            rating: 4.9,
            response_time_range: "15-20 min".into(),
            contact: "+212 522-111-333".into(),
            available: true,
        },
        Provider {
            id: 4,
            name: "SAMU Mohammedia".into(),
            coordinate: Coordinate::new(33.6866, -7.3830),
            category: ProviderCategory::Standard,
            rating: 4.1,
            response_time_range: "12-18 min".into(),
            contact: "+212 523-000-444".into(),
            available: true,
        },
        Provider {
            id: 5,
            name: "Polyclinique Agdal".into(),
            coordinate: Coordinate::new(33.9916, -6.8498),
            category: ProviderCategory::Premium,
            rating: 4.7,
            response_time_range: "10-14 min".into(),
            contact: "+212 537-111-555".into(),
            available: false,
        },
        Provider {
            id: 6,
            name: "Centre de Santé Salé".into(),
            coordinate: Coordinate::new(34.0531, -6.7985),
            category: ProviderCategory::Standard,
            rating: 3.9,
            response_time_range: "15-25 min".into(),
            contact: "+212 537-222-666".into(),
            available: true,
        },
    ]
}

/// Keep only providers whose category is enabled, preserving input order.
pub fn filter_by_category(
    providers: &[Provider],
    enabled: &HashSet<ProviderCategory>,
) -> Vec<Provider> {
    providers
        .iter()
        .filter(|p| enabled.contains(&p.category))
        .cloned()
        .collect()
}

/// The closest available provider to the user, by great-circle distance.
pub fn nearest_available(user: Coordinate, providers: &[Provider]) -> Option<&Provider> {
    providers
        .iter()
        .filter(|p| p.available)
        .min_by(|a, b| {
            let da = geo::distance_km(user, a.coordinate);
            let db = geo::distance_km(user, b.coordinate);
            da.partial_cmp(&db).unwrap_or(std::cmp::Ordering::Equal)
        })
}

/// Look up a provider by id.
pub fn find_provider(providers: &[Provider], id: u32) -> Option<&Provider> {
    providers.iter().find(|p| p.id == id)
}
