//! Cognitive-load / energy affinity lookup.
//!
//! Encodes the heuristic "light tasks suit low energy, heavy tasks suit high
//! energy, moderate is the universal middle fit" as a read-only table with an
//! explicit default on miss.

use crate::mood::EnergyLevel;
use crate::task::CognitiveLoad;

/// Affinity assigned to (energy, load) pairs missing from the table.
pub const DEFAULT_AFFINITY: i64 = 1;

/// Fixed compatibility scores for every known (energy, load) pair.
static AFFINITY_TABLE: [(EnergyLevel, CognitiveLoad, i64); 9] = [
    (EnergyLevel::High, CognitiveLoad::Light, 1),
    (EnergyLevel::High, CognitiveLoad::Moderate, 2),
    (EnergyLevel::High, CognitiveLoad::Heavy, 3),
    (EnergyLevel::Medium, CognitiveLoad::Light, 2),
    (EnergyLevel::Medium, CognitiveLoad::Moderate, 3),
    (EnergyLevel::Medium, CognitiveLoad::Heavy, 1),
    (EnergyLevel::Low, CognitiveLoad::Light, 3),
    (EnergyLevel::Low, CognitiveLoad::Moderate, 2),
    (EnergyLevel::Low, CognitiveLoad::Heavy, 1),
];

/// Compatibility score in {1,2,3} between the user's energy and a task's
/// cognitive load. Unknown combinations resolve to [`DEFAULT_AFFINITY`].
pub fn affinity(energy: EnergyLevel, load: CognitiveLoad) -> i64 {
    AFFINITY_TABLE
        .iter()
        .find(|(e, l, _)| *e == energy && *l == load)
        .map(|(_, _, score)| *score)
        .unwrap_or(DEFAULT_AFFINITY)
}
