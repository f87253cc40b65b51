use crate::{BeatmapAttributes, GameMods, PlayStatistics};

use super::{attributes::OsuPerformanceAttributes, compute_performance};

pub mod calculator;

/// Performance calculator on osu!standard maps.
///
/// Takes *unmodified* attributes and applies the mods itself. Play data that
/// is not specified will be filled in, see
/// [`generate_state`](Self::generate_state).
///
/// # Example
///
/// ```
/// use ppv2::{BeatmapAttributes, GameMod, OsuPerformance};
///
/// let attrs = BeatmapAttributes {
///     ar: 9.4,
///     od: 9.0,
///     aim: 3.28,
///     speed: 3.08,
///     max_combo: 1571,
///     n_circles: 860,
///     n_sliders: 330,
///     n_spinners: 2,
///     ..Default::default()
/// };
///
/// let perf_attrs = OsuPerformance::new(attrs)
///     .mods(GameMod::Hidden)
///     .accuracy(99.32)
///     .misses(2)
///     .calculate();
///
/// assert!(perf_attrs.pp() > perf_attrs.pp_acc);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct OsuPerformance {
    attrs: BeatmapAttributes,
    mods: GameMods,
    acc: Option<f64>,
    combo: Option<u32>,

    n300: Option<u32>,
    n100: Option<u32>,
    n50: Option<u32>,
    misses: Option<u32>,
}

impl OsuPerformance {
    /// Create a new performance calculator for unmodified attributes.
    pub const fn new(attrs: BeatmapAttributes) -> Self {
        Self {
            attrs,
            mods: GameMods::NONE,
            acc: None,
            combo: None,
            n300: None,
            n100: None,
            n50: None,
            misses: None,
        }
    }

    /// Specify mods, e.g. through their bit values or a [`GameMod`].
    ///
    /// [`GameMod`]: crate::GameMod
    pub fn mods(mut self, mods: impl Into<GameMods>) -> Self {
        self.mods = mods.into();

        self
    }

    /// Specify the max combo of the play.
    ///
    /// Defaults to the map's maximum combo.
    pub const fn combo(mut self, combo: u32) -> Self {
        self.combo = Some(combo);

        self
    }

    /// Specify the amount of 300s of a play.
    ///
    /// Ignored if an accuracy is specified.
    pub const fn n300(mut self, n300: u32) -> Self {
        self.n300 = Some(n300);

        self
    }

    /// Specify the amount of 100s of a play.
    pub const fn n100(mut self, n100: u32) -> Self {
        self.n100 = Some(n100);

        self
    }

    /// Specify the amount of 50s of a play.
    pub const fn n50(mut self, n50: u32) -> Self {
        self.n50 = Some(n50);

        self
    }

    /// Specify the amount of misses of a play.
    pub const fn misses(mut self, misses: u32) -> Self {
        self.misses = Some(misses);

        self
    }

    /// Specify the accuracy of a play between `0.0` and `100.0`.
    /// This will be used to generate matching hitresults.
    pub fn accuracy(mut self, acc: f64) -> Self {
        self.acc = Some((acc / 100.0).clamp(0.0, 1.0));

        self
    }

    /// Create the [`PlayStatistics`] that will be used for performance
    /// calculation.
    ///
    /// Misses are capped at the map's amount of objects. If an accuracy was
    /// specified, hitresults are generated to match it as closely as
    /// possible while preferring 100s over 50s. Otherwise remaining objects
    /// count as 300s if `n300` is unspecified, else as 100s if `n100` is
    /// unspecified, else as 50s if `n50` is unspecified, else as additional
    /// 300s.
    pub fn generate_state(&self) -> PlayStatistics {
        let n_objects = self.attrs.n_objects();
        let misses = self.misses.map_or(0, |n| n.min(n_objects));

        let (n300, n100, n50) = match self.acc {
            Some(acc) => self.hitresults_from_accuracy(acc, n_objects, misses),
            None => self.fill_hitresults(n_objects, misses),
        };

        let combo = self.combo.unwrap_or(self.attrs.max_combo);

        PlayStatistics::new(n300, n100, n50, misses, combo)
    }

    /// Calculate all performance related values.
    pub fn calculate(self) -> OsuPerformanceAttributes {
        let state = self.generate_state();
        let attrs = self.attrs.builder().mods(self.mods).build();

        compute_performance(&attrs, &state, self.mods)
    }

    fn hitresults_from_accuracy(&self, acc: f64, n_objects: u32, misses: u32) -> (u32, u32, u32) {
        let n_remaining = n_objects - misses;
        // Points are counted in u64 to not overflow on huge maps
        let target_total = (6.0 * acc * f64::from(n_objects)).round() as u64;

        if self.n100.or(self.n50).is_some() {
            let mut n100 = self.n100.map_or(0, |n| n.min(n_remaining));
            let mut n50 = self.n50.map_or(0, |n| n.min(n_remaining - n100));

            let placed_points = 2 * u64::from(n100) + u64::from(n50);
            let missing_objects = n_remaining - n100 - n50;
            let missing_points = target_total.saturating_sub(placed_points);

            let mut n300 = u64::from(missing_objects).min(missing_points / 6) as u32;
            n50 += missing_objects - n300;

            if let Some(orig_n50) = self.n50.filter(|_| self.n100.is_none()) {
                // Only n50s were changed, try to load some off again onto n100s
                let difference = n50.saturating_sub(orig_n50);
                let n = n300.min(difference / 4);

                n300 -= n;
                n50 -= 4 * n;
                n100 += n;
                n100 += 4 * n;
            }

            (n300, n100, n50)
        } else {
            // Every non-miss is worth at least one point
            let delta = target_total.saturating_sub(u64::from(n_remaining));

            let mut n300 = (delta / 5).min(u64::from(n_remaining)) as u32;
            let mut n100 = ((delta % 5) as u32).min(n_remaining - n300);
            let mut n50 = n_remaining - n300 - n100;

            // Sacrifice n300s to transform n50s into n100s
            let n = n300.min(n50 / 4);
            n300 -= n;
            n50 -= 4 * n;
            n100 += n;
            n100 += 4 * n;

            (n300, n100, n50)
        }
    }

    fn fill_hitresults(&self, n_objects: u32, misses: u32) -> (u32, u32, u32) {
        let mut n300 = self.n300.unwrap_or(0);
        let mut n100 = self.n100.unwrap_or(0);
        let mut n50 = self.n50.unwrap_or(0);

        let remaining = n_objects
            .saturating_sub(n300)
            .saturating_sub(n100)
            .saturating_sub(n50)
            .saturating_sub(misses);

        match (self.n300, self.n100, self.n50) {
            (None, ..) => n300 = remaining,
            (_, None, _) => n100 = remaining,
            (.., None) => n50 = remaining,
            _ => n300 += remaining,
        }

        (n300, n100, n50)
    }
}

impl From<BeatmapAttributes> for OsuPerformance {
    fn from(attrs: BeatmapAttributes) -> Self {
        Self::new(attrs)
    }
}
