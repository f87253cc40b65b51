/// Difficulty settings of a beatmap and how mods change them.
pub mod beatmap;

/// Game mods and their acronyms.
pub mod mods;

/// Hit results of a play and where the play was set.
pub mod score;
