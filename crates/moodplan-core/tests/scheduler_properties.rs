//! Property tests for the scheduling core.

use chrono::{DateTime, TimeZone, Utc};
use moodplan_core::{
    schedule_tasks, CognitiveLoad, EnergyLevel, MoodCheckin, Priority, Task, REST_GAP_MINUTES,
};
use proptest::prelude::*;

fn priority_strategy() -> impl Strategy<Value = Priority> {
    prop_oneof![
        Just(Priority::Urgent),
        Just(Priority::High),
        Just(Priority::Medium),
        Just(Priority::Low),
        Just(Priority::Unknown),
    ]
}

fn load_strategy() -> impl Strategy<Value = CognitiveLoad> {
    prop_oneof![
        Just(CognitiveLoad::Light),
        Just(CognitiveLoad::Moderate),
        Just(CognitiveLoad::Heavy),
        Just(CognitiveLoad::Unknown),
    ]
}

fn energy_strategy() -> impl Strategy<Value = EnergyLevel> {
    prop_oneof![
        Just(EnergyLevel::Low),
        Just(EnergyLevel::Medium),
        Just(EnergyLevel::High),
    ]
}

fn task_strategy() -> impl Strategy<Value = Task> {
    (priority_strategy(), load_strategy(), 0i64..480).prop_map(|(priority, load, duration)| {
        let mut task = Task::new("generated");
        task.priority = priority;
        task.cognitive_load = load;
        task.duration_minutes = duration;
        task
    })
}

fn mood_strategy() -> impl Strategy<Value = Option<MoodCheckin>> {
    proptest::option::of((1i32..=10, energy_strategy()).prop_map(|(scale, energy)| {
        MoodCheckin::new(scale, energy)
    }))
}

fn now_strategy() -> impl Strategy<Value = DateTime<Utc>> {
    (0u32..24, 0u32..60).prop_map(|(hour, minute)| {
        Utc.with_ymd_and_hms(2025, 6, 2, hour, minute, 0).unwrap()
    })
}

proptest! {
    #[test]
    fn output_is_a_permutation_of_input(
        tasks in proptest::collection::vec(task_strategy(), 0..20),
        mood in mood_strategy(),
        now in now_strategy(),
    ) {
        let out = schedule_tasks(&tasks, mood.as_ref(), now).unwrap();
        prop_assert_eq!(out.len(), tasks.len());

        let mut in_ids: Vec<_> = tasks.iter().map(|t| t.id.clone()).collect();
        let mut out_ids: Vec<_> = out.iter().map(|t| t.id.clone()).collect();
        in_ids.sort();
        out_ids.sort();
        prop_assert_eq!(in_ids, out_ids);
    }

    #[test]
    fn slots_are_packed_back_to_back(
        tasks in proptest::collection::vec(task_strategy(), 1..20),
        mood in mood_strategy(),
        now in now_strategy(),
    ) {
        let out = schedule_tasks(&tasks, mood.as_ref(), now).unwrap();

        // First slot lands on a quarter-hour boundary at or after now.
        let first = out[0].scheduled_time;
        prop_assert!(first >= now);
        prop_assert_eq!(first.timestamp() % (60 * 15), 0);

        // Each next slot starts exactly duration + rest gap later.
        for pair in out.windows(2) {
            let expected = pair[0].scheduled_time
                + chrono::Duration::minutes(pair[0].duration_minutes + REST_GAP_MINUTES);
            prop_assert_eq!(pair[1].scheduled_time, expected);
        }
    }

    #[test]
    fn scheduling_is_deterministic(
        tasks in proptest::collection::vec(task_strategy(), 0..12),
        mood in mood_strategy(),
        now in now_strategy(),
    ) {
        let first = schedule_tasks(&tasks, mood.as_ref(), now).unwrap();
        let second = schedule_tasks(&tasks, mood.as_ref(), now).unwrap();
        let a = serde_json::to_string(&first).unwrap();
        let b = serde_json::to_string(&second).unwrap();
        prop_assert_eq!(a, b);
    }
}
