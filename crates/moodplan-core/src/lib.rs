//! # Moodplan Core Library
//!
//! Core business logic for moodplan, a mood-aware single-day task scheduler.
//! All operations are available via a standalone CLI binary; any richer
//! frontend is a thin layer over this same library.
//!
//! ## Architecture
//!
//! - **Scheduler**: a pure function of (tasks, mood check-in, now) that ranks
//!   tasks with a mood-aware comparator and packs them into sequential
//!   quarter-hour-aligned slots with fixed rest gaps
//! - **Storage**: SQLite-based task and mood check-in storage and TOML-based
//!   configuration
//! - **Runner**: fetch/persist orchestration around the pure scheduler
//!
//! ## Key Components
//!
//! - [`schedule_tasks`]: the scheduling core
//! - [`Database`]: task and mood check-in persistence
//! - [`Config`]: application configuration management
//! - [`run_schedule`]: a full fetch, schedule, persist cycle

pub mod error;
pub mod mood;
pub mod runner;
pub mod scheduler;
pub mod storage;
pub mod task;

pub use error::{
    ConfigError, CoreError, DatabaseError, InvalidTaskError, ScheduleRunError,
};
pub use mood::{EffectiveState, EnergyLevel, MoodCheckin, DEFAULT_MOOD_SCALE};
pub use runner::{preview_schedule, run_schedule, ScheduleRunReport};
pub use scheduler::{
    affinity, schedule_tasks, RankStrategy, LOW_MOOD_THRESHOLD, REST_GAP_MINUTES,
    SLOT_BOUNDARY_MINUTES,
};
pub use storage::{data_dir, Config, Database};
pub use task::{CognitiveLoad, Priority, ScheduledTask, Task, TaskStatus};
