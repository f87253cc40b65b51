use crate::{util::difficulty, GameMods};

use super::BeatmapAttributes;

/// AR and OD hit windows
#[derive(Copy, Clone, Debug, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct HitWindows {
    /// Hit window for approach rate i.e. `TimePreempt` in milliseconds.
    pub ar: f64,
    /// Hit window for overall difficulty i.e. time to hit a 300 ("Great") in milliseconds.
    pub od: f64,
}

/// A builder for mod-adjusted [`BeatmapAttributes`] and [`HitWindows`].
///
/// # Example
///
/// ```
/// use ppv2::{BeatmapAttributes, GameMod};
///
/// let attrs = BeatmapAttributes {
///     ar: 9.0,
///     od: 8.0,
///     cs: 4.0,
///     hp: 5.0,
///     ..Default::default()
/// };
///
/// let hr = attrs.builder().mods(GameMod::HardRock).build();
///
/// assert!((hr.cs - 5.2).abs() < 1e-9);
/// assert!((hr.hp - 7.0).abs() < 1e-9);
/// assert!((hr.ar - 10.0).abs() < 1e-9);
/// ```
#[derive(Clone, Debug, PartialEq)]
#[must_use]
pub struct BeatmapAttributesBuilder {
    attrs: BeatmapAttributes,
    mods: GameMods,
    clock_rate: Option<f64>,
}

impl BeatmapAttributesBuilder {
    /// Create a new [`BeatmapAttributesBuilder`] for unmodified attributes.
    pub const fn new(attrs: &BeatmapAttributes) -> Self {
        Self {
            attrs: *attrs,
            mods: GameMods::NONE,
            clock_rate: None,
        }
    }

    /// Specify the mods.
    pub fn mods(self, mods: impl Into<GameMods>) -> Self {
        Self {
            mods: mods.into(),
            ..self
        }
    }

    /// Specify a custom clock rate.
    ///
    /// Overrides the clock rate of DoubleTime, Nightcore, and HalfTime.
    /// Rates that are not positive are ignored.
    pub fn clock_rate(self, clock_rate: f64) -> Self {
        if clock_rate > 0.0 {
            Self {
                clock_rate: Some(clock_rate),
                ..self
            }
        } else {
            #[cfg(feature = "tracing")]
            tracing::debug!(clock_rate, "ignoring non-positive clock rate");

            self
        }
    }

    fn get_clock_rate(&self) -> f64 {
        self.clock_rate.unwrap_or_else(|| self.mods.clock_rate())
    }

    /// Whether [`build`](Self::build) modifies anything.
    fn is_identity(&self) -> bool {
        !self.mods.change_map() && self.clock_rate.is_none()
    }

    /// Calculate the AR and OD hit windows.
    pub fn hit_windows(&self) -> HitWindows {
        let clock_rate = self.get_clock_rate();
        let multiplier = self.mods.od_ar_hp_multiplier();

        let preempt = difficulty::ar_to_ms(self.attrs.ar * multiplier)
            .clamp(difficulty::AR10_MS, difficulty::AR0_MS);

        let great = difficulty::od_to_ms(self.attrs.od * multiplier)
            .clamp(difficulty::OD10_MS, difficulty::OD0_MS);

        HitWindows {
            ar: preempt / clock_rate,
            od: great / clock_rate,
        }
    }

    /// Calculate the [`BeatmapAttributes`].
    ///
    /// Returns an unchanged copy if no mod affects the difficulty settings.
    pub fn build(&self) -> BeatmapAttributes {
        if self.is_identity() {
            return self.attrs;
        }

        let mods = self.mods;

        // HP
        let hp = (self.attrs.hp * mods.od_ar_hp_multiplier()).min(10.0);

        // CS
        let mut cs = self.attrs.cs;

        if mods.hr() {
            cs *= 1.3;
        } else if mods.ez() {
            cs *= 0.5;
        }

        let HitWindows { ar, od } = self.hit_windows();

        BeatmapAttributes {
            ar: difficulty::ms_to_ar(ar),
            od: difficulty::ms_to_od(od),
            cs: cs.min(10.0),
            hp,
            ..self.attrs
        }
    }
}

impl From<&BeatmapAttributes> for BeatmapAttributesBuilder {
    fn from(attrs: &BeatmapAttributes) -> Self {
        Self::new(attrs)
    }
}

/// Return a copy of the attributes with AR, OD, CS, and HP adjusted for the
/// given mods.
///
/// Aim, speed, object counts, and max combo are not affected.
pub fn apply_mods(attrs: &BeatmapAttributes, mods: GameMods) -> BeatmapAttributes {
    BeatmapAttributesBuilder::new(attrs).mods(mods).build()
}
