//! Mood check-ins and effective energy resolution.
//!
//! A check-in captures the user's self-reported mood and energy. When no
//! check-in exists the scheduler falls back to a time-of-day energy estimate
//! and a neutral mood; absence of mood data is a normal case, never a failure.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Mood scale assumed when no check-in exists.
///
/// Chosen above the low-mood threshold so the easy-wins ranking branch does
/// not trigger in the absence of data.
pub const DEFAULT_MOOD_SCALE: i32 = 7;

/// The user's current capacity for effortful work.
#[derive(Debug, Clone, Copy, Serialize, Deserialize, PartialEq, Eq)]
#[serde(rename_all = "lowercase")]
pub enum EnergyLevel {
    Low,
    Medium,
    High,
    /// Catch-all for unrecognized wire values.
    #[serde(other)]
    Unknown,
}

impl EnergyLevel {
    /// Time-of-day estimate used when no check-in exists:
    /// morning high, afternoon medium, evening low.
    pub fn from_hour(hour: u32) -> Self {
        if hour < 12 {
            EnergyLevel::High
        } else if hour < 17 {
            EnergyLevel::Medium
        } else {
            EnergyLevel::Low
        }
    }

    /// Parse a stored string, mapping unrecognized values to `Unknown`.
    pub fn parse(value: &str) -> Self {
        match value {
            "low" => EnergyLevel::Low,
            "medium" => EnergyLevel::Medium,
            "high" => EnergyLevel::High,
            _ => EnergyLevel::Unknown,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            EnergyLevel::Low => "low",
            EnergyLevel::Medium => "medium",
            EnergyLevel::High => "high",
            EnergyLevel::Unknown => "unknown",
        }
    }
}

impl Default for EnergyLevel {
    fn default() -> Self {
        EnergyLevel::Medium
    }
}

/// A mood check-in recorded by the user.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MoodCheckin {
    /// Unique identifier
    pub id: String,
    /// Self-reported mood, nominal range 1-10 (not clamped)
    pub mood_scale: i32,
    /// Self-reported energy level
    pub energy_level: EnergyLevel,
    /// Free-form emotion keywords
    pub emotion_keywords: Vec<String>,
    /// Optional notes
    pub notes: Option<String>,
    /// Recording timestamp
    pub created_at: DateTime<Utc>,
}

impl MoodCheckin {
    /// Create a new check-in stamped with the current time.
    pub fn new(mood_scale: i32, energy_level: EnergyLevel) -> Self {
        MoodCheckin {
            id: uuid::Uuid::new_v4().to_string(),
            mood_scale,
            energy_level,
            emotion_keywords: Vec::new(),
            notes: None,
            created_at: Utc::now(),
        }
    }
}

/// Effective mood/energy state driving a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EffectiveState {
    pub energy: EnergyLevel,
    pub mood_scale: i32,
}

impl EffectiveState {
    /// Resolve the effective state from an optional check-in and the current
    /// hour of day (0-23).
    ///
    /// A present check-in wins outright; otherwise energy is estimated from
    /// the hour and mood defaults to [`DEFAULT_MOOD_SCALE`].
    pub fn resolve(checkin: Option<&MoodCheckin>, hour: u32) -> Self {
        match checkin {
            Some(c) => EffectiveState {
                energy: c.energy_level,
                mood_scale: c.mood_scale,
            },
            None => EffectiveState {
                energy: EnergyLevel::from_hour(hour),
                mood_scale: DEFAULT_MOOD_SCALE,
            },
        }
    }
}
