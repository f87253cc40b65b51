//! Library to calculate legacy [osu!] standard performance points (ppv2) from
//! precomputed difficulty attributes.
//!
//! ## Description
//!
//! `ppv2` does not decode `.osu` files and does not calculate star ratings.
//! Aim and speed difficulty, object counts, and the map's difficulty settings
//! are expected to come from elsewhere, e.g. the osu! API or a local `osu!.db`.
//! Given those and the hit results of a play, the crate applies mods to the
//! map's settings and calculates aim, speed, and accuracy pp as well as their
//! combined value.
//!
//! ## Usage
//!
//! ```
//! use ppv2::{BeatmapAttributes, GameMods};
//!
//! let attrs = BeatmapAttributes {
//!     ar: 9.0,
//!     od: 8.0,
//!     cs: 4.0,
//!     hp: 6.0,
//!     aim: 2.85,
//!     speed: 2.55,
//!     max_combo: 529,
//!     n_circles: 250,
//!     n_sliders: 130,
//!     n_spinners: 1,
//! };
//!
//! let mods: GameMods = "HDHR".parse().unwrap();
//!
//! // Mods are applied to the given attributes before calculating
//! let perf_attrs = attrs
//!     .performance()
//!     .mods(mods)
//!     .combo(500)
//!     .misses(1)
//!     .accuracy(98.5)
//!     .calculate();
//!
//! println!("{mods}: {:.2}pp", perf_attrs.pp());
//!
//! // Hit results of a recorded play can be used as is
//! let state = ppv2::PlayStatistics::new(370, 10, 0, 1, 480);
//! let modded = ppv2::apply_mods(&attrs, mods);
//! let recorded = ppv2::compute_performance(&modded, &state, mods);
//!
//! assert!(recorded.pp() > 0.0);
//! ```
//!
//! ## Features
//!
//! | Flag | Description | Dependencies
//! | - | - | -
//! | `default` | No features |
//! | `tracing` | Rejected input like unknown mod acronyms or negative hit counts, as well as plays that cannot be rated, will be logged through `tracing::debug` and `tracing::trace`. If this feature is not enabled, nothing is logged. | [`tracing`]
//! | `serde` | Implements `Serialize` and `Deserialize` for attributes, statistics, scores, and mods. Mods are represented through their bit value. | [`serde`]
//!
//! [osu!]: https://osu.ppy.sh/home
//! [`tracing`]: https://docs.rs/tracing
//! [`serde`]: https://docs.rs/serde

#![deny(rustdoc::broken_intra_doc_links)]
#![warn(clippy::missing_const_for_fn, clippy::pedantic)]
#![allow(
    clippy::missing_errors_doc,
    clippy::module_name_repetitions,
    clippy::must_use_candidate,
    clippy::cast_possible_truncation,
    clippy::cast_precision_loss,
    clippy::cast_sign_loss,
    clippy::similar_names
)]

#[doc(inline)]
pub use self::{
    model::{
        beatmap::{apply_mods, BeatmapAttributes, BeatmapAttributesBuilder, HitWindows},
        mods::{format_mods, parse_mods, GameMod, GameMods, ParseModsError},
        score::{InvalidStatistics, PlayStatistics, Score, ScoreKind, Team},
    },
    osu::{compute_performance, OsuPerformance, OsuPerformanceAttributes},
};

/// Types for osu!standard performance calculations.
pub mod osu;

/// Types used in and around this crate.
pub mod model;

mod util;
