//! Maintenance scheduler — calls the controller's system update once a year.
//!
//! The schedule is a fixed month/day/time in UTC. The task sleeps until the
//! next occurrence, runs the sweep to completion, and repeats until told to
//! shut down.

use std::sync::Arc;

use chrono::{DateTime, Datelike, NaiveDate, Utc};
use smarthome_app::controller::Controller;
use smarthome_domain::event::Event;
use tokio::sync::watch;

/// Years searched ahead for the next occurrence. Covers Feb 29 across a
/// skipped century leap year.
const LOOKAHEAD_YEARS: i32 = 8;

/// A yearly instant, e.g. January 1st at 01:00 UTC.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MaintenanceSchedule {
    month: u32,
    day: u32,
    hour: u32,
    minute: u32,
}

impl Default for MaintenanceSchedule {
    fn default() -> Self {
        Self {
            month: 1,
            day: 1,
            hour: 1,
            minute: 0,
        }
    }
}

impl MaintenanceSchedule {
    /// Create a schedule firing every year at `month`/`day` `hour`:`minute` UTC.
    ///
    /// # Errors
    ///
    /// Returns a [`ScheduleError`] when the date never occurs or the time is
    /// out of range.
    pub fn new(month: u32, day: u32, hour: u32, minute: u32) -> Result<Self, ScheduleError> {
        // 2000 is a leap year, so Feb 29 passes here.
        if NaiveDate::from_ymd_opt(2000, month, day).is_none() {
            return Err(ScheduleError::InvalidDate { month, day });
        }
        if hour > 23 || minute > 59 {
            return Err(ScheduleError::InvalidTime { hour, minute });
        }
        Ok(Self {
            month,
            day,
            hour,
            minute,
        })
    }

    /// The first occurrence strictly after `after`.
    #[must_use]
    pub fn next_after(&self, after: DateTime<Utc>) -> Option<DateTime<Utc>> {
        (after.year()..=after.year() + LOOKAHEAD_YEARS)
            .filter_map(|year| NaiveDate::from_ymd_opt(year, self.month, self.day))
            .filter_map(|date| date.and_hms_opt(self.hour, self.minute, 0))
            .map(|naive| naive.and_utc())
            .find(|at| *at > after)
    }
}

/// Invalid schedule parameters.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ScheduleError {
    #[error("month {month} has no day {day}")]
    InvalidDate { month: u32, day: u32 },
    #[error("{hour:02}:{minute:02} is not a valid time of day")]
    InvalidTime { hour: u32, minute: u32 },
}

/// Background task driving [`Controller::perform_system_update`].
pub struct MaintenanceTask {
    controller: Arc<Controller>,
    schedule: MaintenanceSchedule,
}

impl MaintenanceTask {
    #[must_use]
    pub fn new(controller: Arc<Controller>, schedule: MaintenanceSchedule) -> Self {
        Self {
            controller,
            schedule,
        }
    }

    /// Fire at every occurrence until `shutdown` changes or its sender is dropped.
    pub async fn run(self, mut shutdown: watch::Receiver<bool>) {
        let mut cursor = Utc::now();
        loop {
            match self.run_once(cursor, &mut shutdown).await {
                Some(fired_at) => cursor = fired_at,
                None => return,
            }
        }
    }

    /// Wait for the first occurrence after `after` and run the sweep.
    ///
    /// Returns the occurrence that fired, or `None` when shutdown was
    /// requested first (or no occurrence exists).
    pub async fn run_once(
        &self,
        after: DateTime<Utc>,
        shutdown: &mut watch::Receiver<bool>,
    ) -> Option<DateTime<Utc>> {
        let Some(next) = self.schedule.next_after(after) else {
            tracing::warn!(schedule = ?self.schedule, "maintenance schedule never fires");
            return None;
        };
        let wait = (next - Utc::now()).to_std().unwrap_or_default();
        tracing::info!(next = %next, "next system update scheduled");

        tokio::select! {
            () = tokio::time::sleep(wait) => {
                let events: Vec<Event> = self.controller.perform_system_update();
                tracing::debug!(transitions = events.len(), "maintenance sweep finished");
                Some(next)
            }
            _ = shutdown.changed() => {
                tracing::info!("maintenance scheduler stopping");
                None
            }
        }
    }
}
