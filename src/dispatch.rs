//! Emergency call log + nearest-provider dispatch.
//!
//! The map screen's "free call" flow: pick the closest available
//! provider, estimate a display route to it, and track the call in a
//! session-local log. Nothing here dials anything — the UI owns the
//! actual call intent.

use chrono::NaiveDateTime;
use rand::Rng;
use serde::Serialize;

use crate::geo::Coordinate;
use crate::models::{DispatchStatus, Provider};
use crate::providers;
use crate::route::{self, RouteEstimate};

/// One dispatched emergency: the chosen provider and its display route.
#[derive(Debug, Clone, Serialize)]
#[serde(rename_all = "camelCase")]
pub struct EmergencyCall {
    pub provider_id: u32,
    pub provider_name: String,
    pub requested_at: NaiveDateTime,
    pub route: RouteEstimate,
}

/// Session-local log of emergencies. Starts idle; reporting a call makes
/// it active; resolving clears the backlog.
pub struct EmergencyLog {
    calls: Vec<EmergencyCall>,
    status: DispatchStatus,
}

impl EmergencyLog {
    pub fn new() -> Self {
        Self {
            calls: Vec::new(),
            status: DispatchStatus::Idle,
        }
    }

    /// Record a dispatched call.
    pub fn report(&mut self, call: EmergencyCall) {
        tracing::info!(provider = %call.provider_name, "emergency dispatched");
        self.calls.push(call);
        self.status = DispatchStatus::Active;
    }

    /// Clear all outstanding emergencies.
    pub fn resolve_all(&mut self) {
        self.calls.clear();
        self.status = DispatchStatus::Resolved;
    }

    pub fn status(&self) -> DispatchStatus {
        self.status
    }

    pub fn calls(&self) -> &[EmergencyCall] {
        &self.calls
    }

    /// The most recent outstanding call, if any.
    pub fn active_call(&self) -> Option<&EmergencyCall> {
        self.calls.last()
    }
}

impl Default for EmergencyLog {
    fn default() -> Self {
        Self::new()
    }
}

/// Pick the closest available provider and build the call record for it.
/// Returns `None` when no provider is available.
pub fn request_dispatch<R: Rng>(
    user: Coordinate,
    providers: &[Provider],
    requested_at: NaiveDateTime,
    rng: &mut R,
) -> Option<EmergencyCall> {
    let provider = providers::nearest_available(user, providers)?;
    let route = route::estimate_route(user, provider.coordinate, rng);

    Some(EmergencyCall {
        provider_id: provider.id,
        provider_name: provider.name.clone(),
        requested_at,
        route,
    })
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::geo::CASABLANCA;
    use chrono::NaiveDate;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    fn noon() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2026, 5, 1)
            .unwrap()
            .and_hms_opt(12, 0, 0)
            .unwrap()
    }

    fn dispatch_from_casablanca() -> EmergencyCall {
        let providers = providers::seed_providers();
        request_dispatch(CASABLANCA, &providers, noon(), &mut StdRng::seed_from_u64(3)).unwrap()
    }

    #[test]
    fn log_starts_idle() {
        let log = EmergencyLog::new();
        assert_eq!(log.status(), DispatchStatus::Idle);
        assert!(log.calls().is_empty());
        assert!(log.active_call().is_none());
    }

    #[test]
    fn report_makes_the_log_active() {
        let mut log = EmergencyLog::new();
        log.report(dispatch_from_casablanca());

        assert_eq!(log.status(), DispatchStatus::Active);
        assert_eq!(log.calls().len(), 1);
        assert_eq!(log.active_call().unwrap().provider_id, 1);
    }

    #[test]
    fn resolve_all_clears_the_backlog() {
        let mut log = EmergencyLog::new();
        log.report(dispatch_from_casablanca());
        log.report(dispatch_from_casablanca());

        log.resolve_all();
        assert_eq!(log.status(), DispatchStatus::Resolved);
        assert!(log.calls().is_empty());
        assert!(log.active_call().is_none());
    }

    #[test]
    fn dispatch_picks_the_nearest_provider_and_routes_to_it() {
        let call = dispatch_from_casablanca();
        assert_eq!(call.provider_id, 1);
        assert_eq!(call.route.waypoints[0], CASABLANCA);
        assert_eq!(
            *call.route.waypoints.last().unwrap(),
            providers::seed_providers()[0].coordinate
        );
    }

    #[test]
    fn dispatch_with_no_available_provider_is_none() {
        let mut providers = providers::seed_providers();
        for p in &mut providers {
            p.available = false;
        }
        let result = request_dispatch(
            CASABLANCA,
            &providers,
            noon(),
            &mut StdRng::seed_from_u64(3),
        );
        assert!(result.is_none());
    }
}
