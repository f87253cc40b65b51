#![allow(unused)]

use ppv2::{BeatmapAttributes, PlayStatistics};

pub use self::mods::*;

/// Bit values for mods
mod mods {
    pub const NM: u32 = 0;
    pub const NF: u32 = 1 << 0;
    pub const EZ: u32 = 1 << 1;
    pub const TD: u32 = 1 << 2;
    pub const HD: u32 = 1 << 3;
    pub const HR: u32 = 1 << 4;
    pub const SD: u32 = 1 << 5;
    pub const DT: u32 = 1 << 6;
    pub const RX: u32 = 1 << 7;
    pub const HT: u32 = 1 << 8;
    pub const NC: u32 = 1 << 9;
    pub const FL: u32 = 1 << 10;
    pub const AT: u32 = 1 << 11;
    pub const SO: u32 = 1 << 12;
    pub const AP: u32 = 1 << 13;
    pub const PF: u32 = 1 << 14;
    pub const V2: u32 = 1 << 29;
}

/// A mid-length map with 381 objects.
pub const fn map_a() -> BeatmapAttributes {
    BeatmapAttributes {
        ar: 9.0,
        od: 8.0,
        cs: 4.0,
        hp: 6.0,
        aim: 2.85,
        speed: 2.55,
        max_combo: 529,
        n_circles: 250,
        n_sliders: 130,
        n_spinners: 1,
    }
}

/// Full combo with a couple of 100s on [`map_a`].
pub const fn play_a() -> PlayStatistics {
    PlayStatistics::new(341, 39, 1, 0, 529)
}

/// A long map with 1192 objects.
pub const fn map_b() -> BeatmapAttributes {
    BeatmapAttributes {
        ar: 9.4,
        od: 9.0,
        cs: 4.0,
        hp: 5.0,
        aim: 3.28,
        speed: 3.08,
        max_combo: 1571,
        n_circles: 860,
        n_sliders: 330,
        n_spinners: 2,
    }
}

#[track_caller]
pub fn assert_eq_float(a: f64, b: f64) {
    assert!((a - b).abs() < 1e-7, "{a} != {b}");
}
