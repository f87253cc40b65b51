use std::time::SystemTime;

use crate::{
    osu::{compute_performance, OsuPerformanceAttributes},
    BeatmapAttributes, GameMods,
};

/// Hit results of a play.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct PlayStatistics {
    /// Amount of 300s.
    pub n300: u32,
    /// Amount of 100s.
    pub n100: u32,
    /// Amount of 50s.
    pub n50: u32,
    /// Amount of misses.
    pub misses: u32,
    /// Maximum combo of the play. **Not** the maximum possible combo of the
    /// map.
    pub max_combo: u32,
    #[cfg_attr(
        feature = "serde",
        serde(default, deserialize_with = "deserialize_accuracy")
    )]
    accuracy: Option<f64>,
}

/// Applies the same validation as [`PlayStatistics::with_accuracy`].
#[cfg(feature = "serde")]
fn deserialize_accuracy<'de, D>(d: D) -> Result<Option<f64>, D::Error>
where
    D: serde::Deserializer<'de>,
{
    use serde::{de::Error, Deserialize};

    match Option::<f64>::deserialize(d)? {
        Some(accuracy) if accuracy.is_nan() => {
            Err(D::Error::custom(InvalidStatistics::Accuracy(accuracy)))
        }
        accuracy => Ok(accuracy.map(|accuracy| accuracy.clamp(0.0, 1.0))),
    }
}

impl PlayStatistics {
    /// Create new statistics from hit results and the achieved combo.
    pub const fn new(n300: u32, n100: u32, n50: u32, misses: u32, max_combo: u32) -> Self {
        Self {
            n300,
            n100,
            n50,
            misses,
            max_combo,
            accuracy: None,
        }
    }

    /// Create new statistics from signed values, e.g. as stored in a
    /// database.
    ///
    /// Fails if any value is negative or doesn't fit into a `u32`.
    pub fn from_signed(
        n300: i64,
        n100: i64,
        n50: i64,
        misses: i64,
        max_combo: i64,
    ) -> Result<Self, InvalidStatistics> {
        fn count(field: &'static str, value: i64) -> Result<u32, InvalidStatistics> {
            let res = if value < 0 {
                Err(InvalidStatistics::NegativeCount { field, value })
            } else {
                u32::try_from(value).map_err(|_| InvalidStatistics::CountOverflow { field, value })
            };

            #[cfg(feature = "tracing")]
            {
                if let Err(ref err) = res {
                    tracing::debug!("rejected play statistics: {err}");
                }
            }

            res
        }

        Ok(Self::new(
            count("n300", n300)?,
            count("n100", n100)?,
            count("n50", n50)?,
            count("misses", misses)?,
            count("max_combo", max_combo)?,
        ))
    }

    /// Use a precomputed accuracy between `0.0` and `1.0` instead of deriving
    /// it from the hit results.
    ///
    /// Values outside of that range are clamped; NaN is rejected.
    pub fn with_accuracy(self, accuracy: f64) -> Result<Self, InvalidStatistics> {
        if accuracy.is_nan() {
            #[cfg(feature = "tracing")]
            tracing::debug!("rejected NaN accuracy");

            return Err(InvalidStatistics::Accuracy(accuracy));
        }

        Ok(Self {
            accuracy: Some(accuracy.clamp(0.0, 1.0)),
            ..self
        })
    }

    /// The precomputed accuracy, if any.
    pub const fn precomputed_accuracy(&self) -> Option<f64> {
        self.accuracy
    }

    /// Return the total amount of hits by adding everything up.
    pub const fn total_hits(&self) -> u32 {
        self.n300
            .saturating_add(self.n100)
            .saturating_add(self.n50)
            .saturating_add(self.misses)
    }

    /// Return the accuracy between `0.0` and `1.0`.
    ///
    /// Uses the precomputed accuracy if available, and `0.0` if there are no
    /// hits.
    pub fn accuracy(&self) -> f64 {
        if let Some(accuracy) = self.accuracy {
            return accuracy;
        }

        let total_hits = self.total_hits();

        if total_hits == 0 {
            return 0.0;
        }

        let numerator = 50 * u64::from(self.n50)
            + 100 * u64::from(self.n100)
            + 300 * u64::from(self.n300);
        let denominator = 300 * u64::from(total_hits);

        (numerator as f64 / denominator as f64).clamp(0.0, 1.0)
    }
}

/// Rejected play statistics.
#[derive(Copy, Clone, Debug, PartialEq, thiserror::Error)]
pub enum InvalidStatistics {
    #[error("`{field}` must not be negative, got {value}")]
    NegativeCount { field: &'static str, value: i64 },
    #[error("`{field}` is too large, got {value}")]
    CountOverflow { field: &'static str, value: i64 },
    #[error("accuracy must not be NaN")]
    Accuracy(f64),
}

/// Team in a multiplayer lobby.
#[derive(Copy, Clone, Debug, Default, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum Team {
    #[default]
    None,
    Blue,
    Red,
}

/// Context in which a score was set.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum ScoreKind {
    /// A submitted score, e.g. from a leaderboard or a user's top plays.
    Best {
        score_id: u64,
        /// The pp value osu! awarded, if any.
        pp: Option<f64>,
        replay_available: bool,
        timestamp: SystemTime,
    },
    /// A recently set score, passed or failed.
    Recent { timestamp: SystemTime },
    /// A score set in a multiplayer lobby.
    Multiplayer {
        match_id: u64,
        game_id: u64,
        slot: u8,
        team: Team,
        passed: bool,
    },
}

/// A play on a beatmap.
#[derive(Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Score {
    /// The play's hit results.
    pub statistics: PlayStatistics,
    /// The mods of the play.
    pub mods: GameMods,
    /// Where the score was set.
    pub kind: ScoreKind,
}

impl Score {
    /// Create a new [`Score`].
    pub const fn new(statistics: PlayStatistics, mods: GameMods, kind: ScoreKind) -> Self {
        Self {
            statistics,
            mods,
            kind,
        }
    }

    /// Add the mods that were enforced for the whole multiplayer lobby.
    #[must_use]
    pub fn with_lobby_mods(self, lobby_mods: GameMods) -> Self {
        Self {
            mods: self.mods | lobby_mods,
            ..self
        }
    }

    /// When the score was set, if known.
    pub fn timestamp(&self) -> Option<SystemTime> {
        match self.kind {
            ScoreKind::Best { timestamp, .. } | ScoreKind::Recent { timestamp } => Some(timestamp),
            ScoreKind::Multiplayer { .. } => None,
        }
    }

    /// Calculate the performance of this score on the given unmodified
    /// attributes.
    ///
    /// The hit results are used as they are, so failed plays are rated
    /// on the objects they reached.
    pub fn performance(&self, attrs: &BeatmapAttributes) -> OsuPerformanceAttributes {
        let attrs = attrs.apply_mods(self.mods);

        compute_performance(&attrs, &self.statistics, self.mods)
    }
}

#[cfg(test)]
mod tests {
    use std::time::Duration;

    use proptest::prelude::*;

    use crate::GameMod;

    use super::*;

    #[test]
    fn accuracy_from_hits() {
        let state = PlayStatistics::new(90, 8, 1, 1, 100);
        let expected = (90.0 * 300.0 + 8.0 * 100.0 + 50.0) / (100.0 * 300.0);

        assert!((state.accuracy() - expected).abs() < f64::EPSILON);
    }

    #[test]
    fn accuracy_without_hits() {
        assert!(PlayStatistics::default().accuracy().abs() < f64::EPSILON);
    }

    #[test]
    fn precomputed_accuracy() {
        let state = PlayStatistics::new(10, 0, 0, 0, 10)
            .with_accuracy(0.9932)
            .unwrap();

        assert!((state.accuracy() - 0.9932).abs() < f64::EPSILON);
        assert_eq!(state.precomputed_accuracy(), Some(0.9932));

        let clamped = state.with_accuracy(1.5).unwrap();
        assert!((clamped.accuracy() - 1.0).abs() < f64::EPSILON);

        assert!(matches!(
            state.with_accuracy(f64::NAN),
            Err(InvalidStatistics::Accuracy(_))
        ));
    }

    #[test]
    fn reject_negative_counts() {
        let err = PlayStatistics::from_signed(100, -1, 0, 0, 100).unwrap_err();

        assert_eq!(
            err,
            InvalidStatistics::NegativeCount {
                field: "n100",
                value: -1
            }
        );

        let err = PlayStatistics::from_signed(100, 0, 0, 0, -5).unwrap_err();

        assert_eq!(
            err,
            InvalidStatistics::NegativeCount {
                field: "max_combo",
                value: -5
            }
        );
    }

    #[test]
    fn reject_overflowing_counts() {
        let err = PlayStatistics::from_signed(1 << 40, 0, 0, 0, 0).unwrap_err();

        assert!(matches!(
            err,
            InvalidStatistics::CountOverflow { field: "n300", .. }
        ));
    }

    #[test]
    fn from_signed() {
        let state = PlayStatistics::from_signed(300, 20, 3, 2, 412).unwrap();

        assert_eq!(state, PlayStatistics::new(300, 20, 3, 2, 412));
        assert_eq!(state.total_hits(), 325);
    }

    #[test]
    fn lobby_mods() {
        let kind = ScoreKind::Multiplayer {
            match_id: 1,
            game_id: 2,
            slot: 3,
            team: Team::Blue,
            passed: true,
        };

        let score = Score::new(PlayStatistics::default(), GameMod::Hidden.into(), kind)
            .with_lobby_mods(GameMod::DoubleTime.into());

        assert_eq!(score.mods.to_string(), "HDDT");
        assert_eq!(score.timestamp(), None);
    }

    #[test]
    fn timestamp() {
        let timestamp = SystemTime::UNIX_EPOCH + Duration::from_secs(1_600_000_000);
        let score = Score::new(
            PlayStatistics::default(),
            GameMods::NONE,
            ScoreKind::Recent { timestamp },
        );

        assert_eq!(score.timestamp(), Some(timestamp));
    }

    proptest! {
        #[test]
        fn accuracy_in_range(
            n300 in any::<u32>(),
            n100 in any::<u32>(),
            n50 in any::<u32>(),
            misses in any::<u32>(),
        ) {
            let acc = PlayStatistics::new(n300, n100, n50, misses, 0).accuracy();

            prop_assert!((0.0..=1.0).contains(&acc), "{acc}");
        }
    }
}
