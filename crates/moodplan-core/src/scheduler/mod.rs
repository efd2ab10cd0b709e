//! Mood-aware task scheduler.
//!
//! The scheduler is a pure function of (tasks, mood check-in, now). It runs in
//! two phases:
//! - **Ranking**: orders tasks by a mood-aware composite comparator
//! - **Packing**: assigns sequential start times from "now", rounded up to the
//!   next quarter hour, with a fixed rest gap after every task
//!
//! Well-typed input never fails; missing mood data and unrecognized
//! priority/load values degrade to permissive defaults. Contract violations
//! (negative duration, absent id) are rejected with [`InvalidTaskError`].

mod affinity;
mod rank;

pub use affinity::{affinity, DEFAULT_AFFINITY};
pub use rank::{rank, RankStrategy, LOW_MOOD_THRESHOLD};

use chrono::{DateTime, Duration, Timelike, Utc};

use crate::error::InvalidTaskError;
use crate::mood::{EffectiveState, MoodCheckin};
use crate::task::{ScheduledTask, Task};

/// Rest gap after every task, in minutes. Unconditional, not proportional to
/// duration.
pub const REST_GAP_MINUTES: i64 = 15;

/// Start times snap forward to this minute boundary.
pub const SLOT_BOUNDARY_MINUTES: u32 = 15;

/// Rank the given tasks for the current mood state and assign each a start
/// time, packing sequentially from `now`.
///
/// The output is a permutation of the input: no task is dropped, split, or
/// merged, and packing never reorders the ranked sequence. Status filtering
/// is the caller's job; whatever is passed in gets scheduled.
pub fn schedule_tasks(
    tasks: &[Task],
    mood: Option<&MoodCheckin>,
    now: DateTime<Utc>,
) -> Result<Vec<ScheduledTask>, InvalidTaskError> {
    validate(tasks)?;

    let state = EffectiveState::resolve(mood, now.hour());
    let mut ranked: Vec<Task> = tasks.to_vec();
    rank(&mut ranked, &state);

    Ok(pack(&ranked, now))
}

/// Reject contract violations before ranking touches anything.
fn validate(tasks: &[Task]) -> Result<(), InvalidTaskError> {
    for task in tasks {
        if task.id.trim().is_empty() {
            return Err(InvalidTaskError {
                task_id: task.id.clone(),
                field: "id",
                message: "task id must not be empty".to_string(),
            });
        }
        if task.duration_minutes < 0 {
            return Err(InvalidTaskError {
                task_id: task.id.clone(),
                field: "duration_minutes",
                message: format!("duration must be non-negative, got {}", task.duration_minutes),
            });
        }
    }
    Ok(())
}

/// Walk the ranked sequence assigning start times: each task starts at the
/// cursor, then the cursor advances by the task duration plus the rest gap.
fn pack(ranked: &[Task], now: DateTime<Utc>) -> Vec<ScheduledTask> {
    let mut cursor = ceil_to_slot(now);
    ranked
        .iter()
        .map(|task| {
            let scheduled = ScheduledTask::from_task(task, cursor);
            cursor += Duration::minutes(task.duration_minutes + REST_GAP_MINUTES);
            scheduled
        })
        .collect()
}

/// Round a timestamp forward to the next quarter-hour boundary.
/// Exactly on a boundary stays put; anything else, including sub-minute
/// precision on an aligned minute, moves forward. Never returns a time in
/// the past.
fn ceil_to_slot(now: DateTime<Utc>) -> DateTime<Utc> {
    let truncated = now
        .with_second(0)
        .and_then(|t| t.with_nanosecond(0))
        .unwrap_or(now);
    let rem = truncated.minute() % SLOT_BOUNDARY_MINUTES;
    if rem == 0 {
        if truncated == now {
            now
        } else {
            truncated + Duration::minutes(i64::from(SLOT_BOUNDARY_MINUTES))
        }
    } else {
        truncated + Duration::minutes(i64::from(SLOT_BOUNDARY_MINUTES - rem))
    }
}
