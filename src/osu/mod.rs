use crate::{BeatmapAttributes, GameMods, PlayStatistics};

pub use self::{
    attributes::OsuPerformanceAttributes,
    performance::{calculator::PERFORMANCE_BASE_MULTIPLIER, OsuPerformance},
};

use self::performance::calculator::OsuPerformanceCalculator;

mod attributes;
mod performance;

/// Calculate the performance of a play.
///
/// The attributes must already be adjusted for the mods, e.g. through
/// [`apply_mods`](crate::apply_mods). To start from unmodified attributes use
/// [`OsuPerformance`] instead.
///
/// Plays with Relax, Autopilot, or Autoplay and plays without any hits are
/// worth nothing.
pub fn compute_performance(
    attrs: &BeatmapAttributes,
    state: &PlayStatistics,
    mods: GameMods,
) -> OsuPerformanceAttributes {
    let acc = state.accuracy();

    if mods.unranked() || state.total_hits() == 0 {
        #[cfg(feature = "tracing")]
        tracing::trace!(%mods, total_hits = state.total_hits(), "play is not rated");

        return OsuPerformanceAttributes {
            difficulty: *attrs,
            accuracy: acc,
            ..Default::default()
        };
    }

    OsuPerformanceCalculator::new(attrs, mods, state, acc).calculate()
}
