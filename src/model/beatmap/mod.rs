use crate::{osu::OsuPerformance, GameMods};

pub use self::attributes::{apply_mods, BeatmapAttributesBuilder, HitWindows};

mod attributes;

/// Precomputed difficulty attributes of an osu!standard beatmap.
///
/// These are usually provided by the osu! API or a local `osu!.db`. Aim and
/// speed are the raw skill values, not star ratings.
#[derive(Copy, Clone, Debug, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct BeatmapAttributes {
    /// The approach rate.
    pub ar: f64,
    /// The overall difficulty.
    pub od: f64,
    /// The circle size.
    pub cs: f64,
    /// The health drain rate.
    pub hp: f64,
    /// The difficulty of the aim skill.
    pub aim: f64,
    /// The difficulty of the speed skill.
    pub speed: f64,
    /// The maximum combo.
    pub max_combo: u32,
    /// The amount of circles.
    pub n_circles: u32,
    /// The amount of sliders.
    pub n_sliders: u32,
    /// The amount of spinners.
    pub n_spinners: u32,
}

impl BeatmapAttributes {
    /// Return the amount of hitobjects.
    pub const fn n_objects(&self) -> u32 {
        self.n_circles
            .saturating_add(self.n_sliders)
            .saturating_add(self.n_spinners)
    }

    /// Returns a [`BeatmapAttributesBuilder`] to calculate modified
    /// attributes.
    pub fn builder(&self) -> BeatmapAttributesBuilder {
        BeatmapAttributesBuilder::new(self)
    }

    /// Return a copy with adjusted difficulty settings for the given mods.
    #[must_use]
    pub fn apply_mods(&self, mods: impl Into<GameMods>) -> Self {
        self.builder().mods(mods).build()
    }

    /// Returns a builder for performance calculation.
    ///
    /// The attributes should be unmodified, the builder applies the mods.
    pub fn performance(self) -> OsuPerformance {
        self.into()
    }
}
