//! Scheduling run orchestration.
//!
//! The pure scheduler never touches storage; this module is the collaborator
//! around it: verify ownership, fetch pending tasks and the latest mood
//! check-in, invoke the core, persist the assigned start times one at a time,
//! and report what was scheduled. The ordering is fully computed before any
//! write begins, so a persistence failure partway through never invalidates
//! it.

use chrono::{DateTime, Utc};
use serde::Serialize;

use crate::error::ScheduleRunError;
use crate::scheduler::schedule_tasks;
use crate::storage::{Config, Database};
use crate::task::ScheduledTask;

/// Outcome of a scheduling run.
#[derive(Debug, Clone, Serialize)]
pub struct ScheduleRunReport {
    /// Number of tasks scheduled
    pub count: usize,
    /// Scheduled tasks in assigned order
    pub scheduled: Vec<ScheduledTask>,
}

/// Compute the day plan and persist each assigned start time.
pub fn run_schedule(
    db: &Database,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<ScheduleRunReport, ScheduleRunError> {
    let scheduled = compute(db, config, now)?;

    for item in &scheduled {
        db.update_scheduled_time(&item.id, item.scheduled_time)
            .map_err(|source| ScheduleRunError::PersistFailed {
                task_id: item.id.clone(),
                source,
            })?;
    }

    Ok(ScheduleRunReport {
        count: scheduled.len(),
        scheduled,
    })
}

/// Compute the day plan without writing anything back.
pub fn preview_schedule(
    db: &Database,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<ScheduleRunReport, ScheduleRunError> {
    let scheduled = compute(db, config, now)?;
    Ok(ScheduleRunReport {
        count: scheduled.len(),
        scheduled,
    })
}

fn compute(
    db: &Database,
    config: &Config,
    now: DateTime<Utc>,
) -> Result<Vec<ScheduledTask>, ScheduleRunError> {
    authorize(db, config)?;

    let tasks = db.pending_tasks().map_err(ScheduleRunError::FetchFailed)?;
    let mood = db.latest_checkin().map_err(ScheduleRunError::FetchFailed)?;

    Ok(schedule_tasks(&tasks, mood.as_ref(), now)?)
}

/// The configured profile must own the database. First use claims it.
fn authorize(db: &Database, config: &Config) -> Result<(), ScheduleRunError> {
    let owner = db
        .claim_owner(&config.profile.name)
        .map_err(ScheduleRunError::FetchFailed)?;
    if owner != config.profile.name {
        return Err(ScheduleRunError::Unauthorized {
            owner,
            requested: config.profile.name.clone(),
        });
    }
    Ok(())
}
