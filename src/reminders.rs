//! Appointment reminder scheduling.
//!
//! Computes one-shot reminder jobs from the appointment list and pushes
//! them through a [`NotificationGateway`] — the platform collaborator
//! that actually delivers notifications. This module only decides WHAT
//! fires WHEN; OS-level delivery is out of scope.
//!
//! Invariant: at most one active job per appointment id. `reschedule_all`
//! enforces it by cancelling everything before re-registering.

use std::collections::HashSet;

use chrono::{Duration, NaiveDateTime};
use thiserror::Error;
use uuid::Uuid;

use crate::models::{Appointment, ReminderPolicy};

impl ReminderPolicy {
    /// How long before the appointment the reminder fires.
    pub fn lead_time(&self) -> Duration {
        match self {
            Self::OneDay => Duration::hours(24),
            Self::TwoHours => Duration::hours(2),
            Self::ThirtyMinutes => Duration::minutes(30),
        }
    }
}

/// A one-shot notification derived from an appointment and its policy.
#[derive(Debug, Clone, PartialEq)]
pub struct ReminderJob {
    pub appointment_id: Uuid,
    pub fires_at: NaiveDateTime,
    pub title: String,
    pub body: String,
}

/// Opaque handle returned by the notification collaborator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JobHandle(pub u64);

/// Errors surfaced by the notification collaborator.
#[derive(Debug, Error)]
pub enum NotifyError {
    #[error("notification backend rejected the request: {0}")]
    Backend(String),
}

/// Platform notification collaborator.
///
/// `cancel_all` must be idempotent — cancelling when nothing is
/// registered is not an error.
pub trait NotificationGateway {
    fn schedule_one_shot(&mut self, job: &ReminderJob) -> Result<JobHandle, NotifyError>;
    fn cancel_all(&mut self) -> Result<(), NotifyError>;
}

/// Compute the reminder jobs for the given appointment list.
///
/// An appointment yields no job when it starts at or before `now`, or
/// when its reminder would already have fired. Duplicate appointment ids
/// keep the first occurrence only.
pub fn compute_jobs(appointments: &[Appointment], now: NaiveDateTime) -> Vec<ReminderJob> {
    let mut seen: HashSet<Uuid> = HashSet::new();
    let mut jobs = Vec::new();

    for appt in appointments {
        if !seen.insert(appt.id) {
            continue;
        }
        let starts_at = appt.starts_at();
        if starts_at <= now {
            continue;
        }
        let fires_at = starts_at - appt.reminder_policy.lead_time();
        if fires_at <= now {
            continue;
        }
        jobs.push(ReminderJob {
            appointment_id: appt.id,
            fires_at,
            title: "Rappel".to_string(),
            body: format!("{} le {}", appt.title, starts_at.format("%d/%m/%Y à %H:%M")),
        });
    }

    jobs
}

/// Cancel every registered reminder, then register the freshly computed
/// set. Returns the registered jobs.
///
/// Any collaborator failure fails the whole call; the caller treats the
/// operation as not applied and may retry from scratch — recomputation is
/// idempotent, and the next `cancel_all` clears whatever half-state the
/// backend kept.
pub fn reschedule_all<G: NotificationGateway>(
    gateway: &mut G,
    appointments: &[Appointment],
    now: NaiveDateTime,
) -> Result<Vec<ReminderJob>, NotifyError> {
    let jobs = compute_jobs(appointments, now);

    gateway.cancel_all()?;
    for job in &jobs {
        gateway.schedule_one_shot(job)?;
    }

    tracing::debug!(count = jobs.len(), "reminder jobs registered");
    Ok(jobs)
}
