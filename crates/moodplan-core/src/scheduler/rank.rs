//! Ranking strategies for the mood-aware comparator.
//!
//! The three branches use scoring formulas that are not on a common scale, so
//! each is its own strict ordering selected up front by a pure predicate over
//! the effective mood/energy state, never folded into one numeric formula.

use std::cmp::Ordering;

use crate::mood::{EffectiveState, EnergyLevel};
use crate::task::Task;

use super::affinity::affinity;

/// Mood scale values below this select the easy-wins ordering.
pub const LOW_MOOD_THRESHOLD: i32 = 5;

/// Load multiplier in the deep-work key. At 4 (the maximum priority weight)
/// load strictly dominates and priority only orders tasks of equal load.
const LOAD_DOMINANCE: i64 = 4;

/// Affinity multiplier in the balanced key; priority is the secondary signal.
const AFFINITY_WEIGHT: i64 = 2;

/// Ordering strategy for a scheduling run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum RankStrategy {
    /// Low mood: lightest cognitive load first, priority ignored.
    EasyWinsFirst,
    /// High energy: heaviest load first, priority breaks load ties.
    DeepWorkFirst,
    /// Otherwise: best energy/load fit first, priority secondary.
    EnergyBalanced,
}

impl RankStrategy {
    /// Select the strategy for an effective state. Branches are evaluated in
    /// strict precedence: low mood, then high energy, then balanced.
    pub fn select(state: &EffectiveState) -> Self {
        if state.mood_scale < LOW_MOOD_THRESHOLD {
            RankStrategy::EasyWinsFirst
        } else if state.energy == EnergyLevel::High {
            RankStrategy::DeepWorkFirst
        } else {
            RankStrategy::EnergyBalanced
        }
    }

    /// Compare two tasks under this strategy.
    pub fn compare(self, state: &EffectiveState, a: &Task, b: &Task) -> Ordering {
        match self {
            RankStrategy::EasyWinsFirst => a
                .cognitive_load
                .weight()
                .cmp(&b.cognitive_load.weight()),
            RankStrategy::DeepWorkFirst => deep_work_key(b).cmp(&deep_work_key(a)),
            RankStrategy::EnergyBalanced => {
                balanced_key(state, b).cmp(&balanced_key(state, a))
            }
        }
    }
}

fn deep_work_key(task: &Task) -> i64 {
    task.cognitive_load.weight() * LOAD_DOMINANCE + task.priority.weight()
}

fn balanced_key(state: &EffectiveState, task: &Task) -> i64 {
    AFFINITY_WEIGHT * affinity(state.energy, task.cognitive_load) + task.priority.weight()
}

/// Sort tasks in place under the strategy selected for `state`.
///
/// The sort is stable: tasks with equal keys keep their input order, which is
/// creation order when the caller fetched them that way.
pub fn rank(tasks: &mut [Task], state: &EffectiveState) {
    let strategy = RankStrategy::select(state);
    tasks.sort_by(|a, b| strategy.compare(state, a, b));
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::task::{CognitiveLoad, Priority};

    fn task(id: &str, priority: Priority, load: CognitiveLoad) -> Task {
        let mut t = Task::new(id);
        t.id = id.to_string();
        t.priority = priority;
        t.cognitive_load = load;
        t
    }

    fn ids(tasks: &[Task]) -> Vec<&str> {
        tasks.iter().map(|t| t.id.as_str()).collect()
    }

    #[test]
    fn strategy_selection_precedence() {
        // Low mood wins even at high energy.
        let low_mood = EffectiveState {
            energy: EnergyLevel::High,
            mood_scale: 3,
        };
        assert_eq!(RankStrategy::select(&low_mood), RankStrategy::EasyWinsFirst);

        let high_energy = EffectiveState {
            energy: EnergyLevel::High,
            mood_scale: 8,
        };
        assert_eq!(RankStrategy::select(&high_energy), RankStrategy::DeepWorkFirst);

        let balanced = EffectiveState {
            energy: EnergyLevel::Medium,
            mood_scale: 5,
        };
        assert_eq!(RankStrategy::select(&balanced), RankStrategy::EnergyBalanced);
    }

    #[test]
    fn low_mood_orders_by_ascending_load_regardless_of_priority() {
        let state = EffectiveState {
            energy: EnergyLevel::Medium,
            mood_scale: 3,
        };
        let mut tasks = vec![
            task("a", Priority::Urgent, CognitiveLoad::Heavy),
            task("b", Priority::Low, CognitiveLoad::Light),
            task("c", Priority::High, CognitiveLoad::Moderate),
        ];
        rank(&mut tasks, &state);
        assert_eq!(ids(&tasks), vec!["b", "c", "a"]);
    }

    #[test]
    fn high_energy_load_dominates_priority() {
        let state = EffectiveState {
            energy: EnergyLevel::High,
            mood_scale: 8,
        };
        let mut tasks = vec![
            task("light-urgent", Priority::Urgent, CognitiveLoad::Light),
            task("heavy-low", Priority::Low, CognitiveLoad::Heavy),
        ];
        rank(&mut tasks, &state);
        assert_eq!(ids(&tasks), vec!["heavy-low", "light-urgent"]);
    }

    #[test]
    fn high_energy_priority_breaks_load_ties() {
        let state = EffectiveState {
            energy: EnergyLevel::High,
            mood_scale: 8,
        };
        let mut tasks = vec![
            task("heavy-low", Priority::Low, CognitiveLoad::Heavy),
            task("heavy-urgent", Priority::Urgent, CognitiveLoad::Heavy),
        ];
        rank(&mut tasks, &state);
        assert_eq!(ids(&tasks), vec!["heavy-urgent", "heavy-low"]);
    }

    #[test]
    fn balanced_prefers_energy_fit_then_priority() {
        // Medium energy: moderate load has affinity 3, heavy only 1.
        let state = EffectiveState {
            energy: EnergyLevel::Medium,
            mood_scale: 7,
        };
        let mut tasks = vec![
            task("heavy-urgent", Priority::Urgent, CognitiveLoad::Heavy),
            task("moderate-low", Priority::Low, CognitiveLoad::Moderate),
        ];
        rank(&mut tasks, &state);
        // 2*3+1=7 beats 2*1+4=6.
        assert_eq!(ids(&tasks), vec!["moderate-low", "heavy-urgent"]);
    }

    #[test]
    fn balanced_uses_priority_for_equal_affinity() {
        let state = EffectiveState {
            energy: EnergyLevel::Low,
            mood_scale: 7,
        };
        let mut tasks = vec![
            task("light-low", Priority::Low, CognitiveLoad::Light),
            task("light-urgent", Priority::Urgent, CognitiveLoad::Light),
        ];
        rank(&mut tasks, &state);
        assert_eq!(ids(&tasks), vec!["light-urgent", "light-low"]);
    }

    #[test]
    fn equal_keys_keep_input_order() {
        let state = EffectiveState {
            energy: EnergyLevel::Medium,
            mood_scale: 3,
        };
        let mut tasks = vec![
            task("first", Priority::Urgent, CognitiveLoad::Moderate),
            task("second", Priority::Low, CognitiveLoad::Moderate),
            task("third", Priority::High, CognitiveLoad::Moderate),
        ];
        rank(&mut tasks, &state);
        assert_eq!(ids(&tasks), vec!["first", "second", "third"]);
    }

    #[test]
    fn unknown_load_ranks_with_weakest_weight() {
        let state = EffectiveState {
            energy: EnergyLevel::Medium,
            mood_scale: 7,
        };
        let mut tasks = vec![
            task("mystery", Priority::Low, CognitiveLoad::Unknown),
            task("moderate", Priority::Low, CognitiveLoad::Moderate),
        ];
        rank(&mut tasks, &state);
        // Affinity 1 for the unknown load, 3 for moderate.
        assert_eq!(ids(&tasks), vec!["moderate", "mystery"]);
    }
}
