//! Task types and ranking weight tables.
//!
//! Priority and cognitive load are small closed enumerations on the wire,
//! but inputs may carry values this version does not know about. Unrecognized
//! values deserialize to `Unknown` and fall back to the weakest weight
//! instead of failing.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Task priority, as entered by the user.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum Priority {
    Urgent,
    High,
    Medium,
    Low,
    /// Catch-all for unrecognized wire values.
    #[serde(other)]
    Unknown,
}

impl Priority {
    /// Ranking weight: urgent=4, high=3, medium=2, low=1.
    ///
    /// Unrecognized values get the weakest weight rather than an error.
    pub fn weight(self) -> i64 {
        match self {
            Priority::Urgent => 4,
            Priority::High => 3,
            Priority::Medium => 2,
            Priority::Low => 1,
            Priority::Unknown => 1,
        }
    }

    /// Parse a stored string, mapping unrecognized values to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "urgent" => Priority::Urgent,
            "high" => Priority::High,
            "medium" => Priority::Medium,
            "low" => Priority::Low,
            _ => Priority::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            Priority::Urgent => "urgent",
            Priority::High => "high",
            Priority::Medium => "medium",
            Priority::Low => "low",
            Priority::Unknown => "unknown",
        }
    }
}

impl Default for Priority {
    fn default() -> Self {
        Priority::Medium
    }
}

/// Coarse classification of how much sustained mental effort a task demands.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum CognitiveLoad {
    Light,
    Moderate,
    Heavy,
    /// Catch-all for unrecognized wire values.
    #[serde(other)]
    Unknown,
}

impl CognitiveLoad {
    /// Ranking weight: heavy=3, moderate=2, light=1.
    pub fn weight(self) -> i64 {
        match self {
            CognitiveLoad::Heavy => 3,
            CognitiveLoad::Moderate => 2,
            CognitiveLoad::Light => 1,
            CognitiveLoad::Unknown => 1,
        }
    }

    /// Parse a stored string, mapping unrecognized values to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "light" => CognitiveLoad::Light,
            "moderate" => CognitiveLoad::Moderate,
            "heavy" => CognitiveLoad::Heavy,
            _ => CognitiveLoad::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            CognitiveLoad::Light => "light",
            CognitiveLoad::Moderate => "moderate",
            CognitiveLoad::Heavy => "heavy",
            CognitiveLoad::Unknown => "unknown",
        }
    }
}

impl Default for CognitiveLoad {
    fn default() -> Self {
        CognitiveLoad::Moderate
    }
}

/// Task completion status.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum TaskStatus {
    Pending,
    InProgress,
    Completed,
}

impl TaskStatus {
    /// Parse a stored string, defaulting to `Pending`.
    pub fn parse(value: &str) -> Self {
        match value {
            "in_progress" => TaskStatus::InProgress,
            "completed" => TaskStatus::Completed,
            _ => TaskStatus::Pending,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TaskStatus::Pending => "pending",
            TaskStatus::InProgress => "in_progress",
            TaskStatus::Completed => "completed",
        }
    }
}

impl Default for TaskStatus {
    fn default() -> Self {
        TaskStatus::Pending
    }
}

/// A user task awaiting scheduling.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct Task {
    /// Unique identifier
    pub id: String,
    /// Task title
    pub title: String,
    /// Optional description
    pub description: Option<String>,
    /// User-assigned priority
    pub priority: Priority,
    /// Cognitive load classification
    pub cognitive_load: CognitiveLoad,
    /// Estimated duration in minutes
    pub duration_minutes: i64,
    /// Completion status
    pub status: TaskStatus,
    /// Optional deadline (display only, not a ranking signal)
    pub deadline: Option<DateTime<Utc>>,
    /// Assigned start time from the last scheduling run
    pub scheduled_time: Option<DateTime<Utc>>,
    /// Creation timestamp
    pub created_at: DateTime<Utc>,
}

impl Task {
    /// Create a new pending task with default classification.
    pub fn new(title: impl Into<String>) -> Self {
        Task {
            id: uuid::Uuid::new_v4().to_string(),
            title: title.into(),
            description: None,
            priority: Priority::default(),
            cognitive_load: CognitiveLoad::default(),
            duration_minutes: 30,
            status: TaskStatus::Pending,
            deadline: None,
            scheduled_time: None,
            created_at: Utc::now(),
        }
    }
}

/// A task with its assigned start time, as produced by a scheduling run.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ScheduledTask {
    pub id: String,
    pub title: String,
    pub priority: Priority,
    pub cognitive_load: CognitiveLoad,
    pub duration_minutes: i64,
    /// Assigned start time
    pub scheduled_time: DateTime<Utc>,
}

impl ScheduledTask {
    /// Pair a task with its assigned start time.
    pub fn from_task(task: &Task, scheduled_time: DateTime<Utc>) -> Self {
        ScheduledTask {
            id: task.id.clone(),
            title: task.title.clone(),
            priority: task.priority,
            cognitive_load: task.cognitive_load,
            duration_minutes: task.duration_minutes,
            scheduled_time,
        }
    }
}
