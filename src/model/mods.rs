use std::{
    fmt::{Debug, Display, Formatter, Result as FmtResult},
    ops::{BitOr, BitOrAssign},
    str::FromStr,
};

/// A single game mod as known to the legacy osu! API.
#[derive(Copy, Clone, Debug, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub enum GameMod {
    NoFail,
    Easy,
    TouchDevice,
    Hidden,
    HardRock,
    SuddenDeath,
    DoubleTime,
    Relax,
    HalfTime,
    /// Only ever set along with [`GameMod::DoubleTime`] by osu! itself.
    Nightcore,
    Flashlight,
    Autoplay,
    SpunOut,
    Autopilot,
    /// Only ever set along with [`GameMod::SuddenDeath`] by osu! itself.
    Perfect,
    Key4,
    Key5,
    Key6,
    Key7,
    Key8,
    FadeIn,
    Random,
    Cinema,
    Target,
    Key9,
    KeyCoop,
    Key1,
    Key3,
    Key2,
    ScoreV2,
    Mirror,
}

impl GameMod {
    /// All mods in order of their bit value.
    pub const ALL: [Self; 31] = [
        Self::NoFail,
        Self::Easy,
        Self::TouchDevice,
        Self::Hidden,
        Self::HardRock,
        Self::SuddenDeath,
        Self::DoubleTime,
        Self::Relax,
        Self::HalfTime,
        Self::Nightcore,
        Self::Flashlight,
        Self::Autoplay,
        Self::SpunOut,
        Self::Autopilot,
        Self::Perfect,
        Self::Key4,
        Self::Key5,
        Self::Key6,
        Self::Key7,
        Self::Key8,
        Self::FadeIn,
        Self::Random,
        Self::Cinema,
        Self::Target,
        Self::Key9,
        Self::KeyCoop,
        Self::Key1,
        Self::Key3,
        Self::Key2,
        Self::ScoreV2,
        Self::Mirror,
    ];

    /// The mod's bit value.
    ///
    /// See <https://github.com/ppy/osu-api/wiki#mods>
    pub const fn bits(self) -> u32 {
        1 << self as u32
    }

    /// The mod's two-character acronym.
    pub const fn acronym(self) -> &'static str {
        match self {
            Self::NoFail => "NF",
            Self::Easy => "EZ",
            Self::TouchDevice => "TD",
            Self::Hidden => "HD",
            Self::HardRock => "HR",
            Self::SuddenDeath => "SD",
            Self::DoubleTime => "DT",
            Self::Relax => "RX",
            Self::HalfTime => "HT",
            Self::Nightcore => "NC",
            Self::Flashlight => "FL",
            Self::Autoplay => "AT",
            Self::SpunOut => "SO",
            Self::Autopilot => "AP",
            Self::Perfect => "PF",
            Self::Key4 => "4K",
            Self::Key5 => "5K",
            Self::Key6 => "6K",
            Self::Key7 => "7K",
            Self::Key8 => "8K",
            Self::FadeIn => "FI",
            Self::Random => "RD",
            Self::Cinema => "CN",
            Self::Target => "TP",
            Self::Key9 => "9K",
            Self::KeyCoop => "CO",
            Self::Key1 => "1K",
            Self::Key3 => "3K",
            Self::Key2 => "2K",
            Self::ScoreV2 => "V2",
            Self::Mirror => "MR",
        }
    }

    /// Look up a mod through its acronym, ignoring ASCII case.
    pub fn from_acronym(acronym: &str) -> Option<Self> {
        Self::ALL
            .into_iter()
            .find(|gamemod| gamemod.acronym().eq_ignore_ascii_case(acronym))
    }
}

impl Display for GameMod {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.write_str(self.acronym())
    }
}

macro_rules! impl_mods_fn {
    ( $( #[$meta:meta] )* $fn_name:ident, $bits:expr ) => {
        $( #[$meta] )*
        pub const fn $fn_name(self) -> bool {
            self.bits & ($bits) != 0
        }
    };
}

/// Collection of game mods, stored through their combined bit value.
///
/// Nightcore and Perfect may be stored without their implied mods
/// DoubleTime and SuddenDeath. Queries like [`GameMods::dt`] account for
/// that; [`GameMods::canonical`] sets the implied bits explicitly.
///
/// # Example
///
/// ```
/// use ppv2::{GameMod, GameMods};
///
/// let mods: GameMods = "hddt".parse().unwrap();
///
/// assert_eq!(mods.bits(), 8 + 64);
/// assert!(mods.contains(GameMod::Hidden));
/// assert_eq!(mods.to_string(), "HDDT");
///
/// let nc = GameMods::from(GameMod::Nightcore);
///
/// assert!(nc.dt());
/// assert_eq!(nc.canonical().bits(), 576);
/// assert_eq!(nc.canonical().to_string(), "NC");
/// ```
#[derive(Copy, Clone, Default, PartialEq, Eq, Hash)]
#[cfg_attr(
    feature = "serde",
    derive(serde::Serialize, serde::Deserialize),
    serde(from = "u32", into = "u32")
)]
pub struct GameMods {
    bits: u32,
}

impl GameMods {
    /// No mods.
    pub const NONE: Self = Self { bits: 0 };

    /// Display order of mods. Mods that are not listed are still part of the
    /// collection but won't be displayed.
    const DISPLAY_ORDER: [GameMod; 12] = [
        GameMod::Easy,
        GameMod::Hidden,
        GameMod::DoubleTime,
        GameMod::Nightcore,
        GameMod::HalfTime,
        GameMod::HardRock,
        GameMod::Flashlight,
        GameMod::SuddenDeath,
        GameMod::Perfect,
        GameMod::NoFail,
        GameMod::SpunOut,
        GameMod::TouchDevice,
    ];

    const NO_MOD: &'static str = "NM";

    /// Create a new empty collection.
    pub const fn new() -> Self {
        Self::NONE
    }

    /// The combined bit value.
    pub const fn bits(self) -> u32 {
        self.bits
    }

    /// Whether no mod is set.
    pub const fn is_empty(self) -> bool {
        self.bits == 0
    }

    /// Whether the mod's own bit is set.
    ///
    /// Note that this does not consider implied mods i.e.
    /// `contains(GameMod::DoubleTime)` is `false` if only Nightcore is set.
    pub const fn contains(self, gamemod: GameMod) -> bool {
        self.bits & gamemod.bits() != 0
    }

    /// Add a mod.
    pub fn insert(&mut self, gamemod: GameMod) {
        self.bits |= gamemod.bits();
    }

    /// Remove a mod.
    pub fn remove(&mut self, gamemod: GameMod) {
        self.bits &= !gamemod.bits();
    }

    /// Iterate over all contained mods in order of their bit value.
    pub fn iter(self) -> impl Iterator<Item = GameMod> {
        GameMod::ALL
            .into_iter()
            .filter(move |gamemod| self.contains(*gamemod))
    }

    /// Return a copy in which implied mods are set explicitly, i.e.
    /// Nightcore sets DoubleTime and Perfect sets SuddenDeath.
    ///
    /// This matches the bit values that osu! itself submits.
    #[must_use]
    pub const fn canonical(self) -> Self {
        let mut bits = self.bits;

        if bits & GameMod::Nightcore.bits() != 0 {
            bits |= GameMod::DoubleTime.bits();
        }

        if bits & GameMod::Perfect.bits() != 0 {
            bits |= GameMod::SuddenDeath.bits();
        }

        Self { bits }
    }

    /// The mods' clock rate.
    ///
    /// Nightcore counts as DoubleTime exactly once, even if both are set.
    pub fn clock_rate(self) -> f64 {
        let mut clock_rate = if self.dt() { 1.5 } else { 1.0 };

        if self.ht() {
            clock_rate *= 0.75;
        }

        clock_rate
    }

    /// Multiplier for approach rate, overall difficulty, and drain rate.
    pub fn od_ar_hp_multiplier(self) -> f64 {
        let mut multiplier = if self.hr() { 1.4 } else { 1.0 };

        if self.ez() {
            multiplier *= 0.5;
        }

        multiplier
    }

    /// Whether any mod changes the map's difficulty settings.
    pub const fn change_map(self) -> bool {
        self.hr() || self.ez() || self.dt() || self.ht()
    }

    /// Whether plays with these mods cannot be awarded pp.
    pub const fn unranked(self) -> bool {
        self.rx() || self.ap() || self.at()
    }

    impl_mods_fn!(nf, GameMod::NoFail.bits());
    impl_mods_fn!(ez, GameMod::Easy.bits());
    impl_mods_fn!(td, GameMod::TouchDevice.bits());
    impl_mods_fn!(hd, GameMod::Hidden.bits());
    impl_mods_fn!(hr, GameMod::HardRock.bits());
    impl_mods_fn!(
        /// SuddenDeath or Perfect.
        sd,
        GameMod::SuddenDeath.bits() | GameMod::Perfect.bits()
    );
    impl_mods_fn!(
        /// DoubleTime or Nightcore.
        dt,
        GameMod::DoubleTime.bits() | GameMod::Nightcore.bits()
    );
    impl_mods_fn!(rx, GameMod::Relax.bits());
    impl_mods_fn!(ht, GameMod::HalfTime.bits());
    impl_mods_fn!(nc, GameMod::Nightcore.bits());
    impl_mods_fn!(fl, GameMod::Flashlight.bits());
    impl_mods_fn!(at, GameMod::Autoplay.bits());
    impl_mods_fn!(so, GameMod::SpunOut.bits());
    impl_mods_fn!(ap, GameMod::Autopilot.bits());
    impl_mods_fn!(pf, GameMod::Perfect.bits());
    impl_mods_fn!(v2, GameMod::ScoreV2.bits());

    /// Mods to display, in display order.
    fn displayed(self) -> impl Iterator<Item = GameMod> {
        Self::DISPLAY_ORDER
            .into_iter()
            .filter(move |gamemod| match gamemod {
                GameMod::DoubleTime => self.contains(*gamemod) && !self.nc(),
                GameMod::SuddenDeath => self.contains(*gamemod) && !self.pf(),
                _ => self.contains(*gamemod),
            })
    }

    fn lookup(code: &str) -> Option<Self> {
        if code.eq_ignore_ascii_case(Self::NO_MOD) {
            Some(Self::NONE)
        } else {
            GameMod::from_acronym(code).map(Self::from)
        }
    }
}

impl Debug for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        f.debug_list().entries(self.iter()).finish()
    }
}

/// Mods in display order without separator, e.g. `HDDTHR`.
///
/// DoubleTime is omitted if Nightcore is set and SuddenDeath is omitted if
/// Perfect is set. If no mod is displayed, e.g. for no mods or only Relax,
/// the output is `NM`.
impl Display for GameMods {
    fn fmt(&self, f: &mut Formatter<'_>) -> FmtResult {
        let mut displayed = self.displayed().peekable();

        if displayed.peek().is_none() {
            return f.write_str(Self::NO_MOD);
        }

        for gamemod in displayed {
            f.write_str(gamemod.acronym())?;
        }

        Ok(())
    }
}

impl FromStr for GameMods {
    type Err = ParseModsError;

    /// Parse acronyms like `HDHR` or `dt fl`.
    ///
    /// Starting at each position, the candidate acronym grows one character
    /// at a time until it matches a known acronym.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        const MAX_ACRONYM_LEN: usize = 2;

        let chars: Vec<(usize, char)> = s
            .char_indices()
            .filter(|(_, c)| !c.is_whitespace())
            .collect();

        let mut mods = Self::NONE;
        let mut start = 0;

        'tokens: while start < chars.len() {
            let mut candidate = String::with_capacity(MAX_ACRONYM_LEN);

            for (len, (_, c)) in chars[start..].iter().take(MAX_ACRONYM_LEN).enumerate() {
                candidate.push(*c);

                if let Some(token) = Self::lookup(&candidate) {
                    mods |= token;
                    start += len + 1;

                    continue 'tokens;
                }
            }

            let err = ParseModsError::UnrecognizedToken {
                token: chars[start..].iter().map(|(_, c)| c).collect(),
                position: chars[start].0,
            };

            #[cfg(feature = "tracing")]
            tracing::debug!(input = s, "{err}");

            return Err(err);
        }

        Ok(mods)
    }
}

impl From<u32> for GameMods {
    fn from(bits: u32) -> Self {
        Self { bits }
    }
}

impl From<GameMods> for u32 {
    fn from(mods: GameMods) -> Self {
        mods.bits
    }
}

impl From<GameMod> for GameMods {
    fn from(gamemod: GameMod) -> Self {
        Self {
            bits: gamemod.bits(),
        }
    }
}

impl FromIterator<GameMod> for GameMods {
    fn from_iter<I: IntoIterator<Item = GameMod>>(iter: I) -> Self {
        iter.into_iter().fold(Self::NONE, |mods, gamemod| mods | gamemod)
    }
}

impl<T: Into<GameMods>> BitOr<T> for GameMods {
    type Output = Self;

    fn bitor(self, rhs: T) -> Self::Output {
        Self {
            bits: self.bits | rhs.into().bits,
        }
    }
}

impl<T: Into<GameMods>> BitOr<T> for GameMod {
    type Output = GameMods;

    fn bitor(self, rhs: T) -> Self::Output {
        GameMods::from(self) | rhs
    }
}

impl<T: Into<GameMods>> BitOrAssign<T> for GameMods {
    fn bitor_assign(&mut self, rhs: T) {
        self.bits |= rhs.into().bits;
    }
}

/// Error when parsing [`GameMods`] from acronyms.
#[derive(Clone, Debug, PartialEq, Eq, thiserror::Error)]
pub enum ParseModsError {
    #[error("unrecognized mod acronym `{token}` at position {position}")]
    UnrecognizedToken {
        /// The remaining input that could not be matched.
        token: String,
        /// Byte offset of the unmatched input.
        position: usize,
    },
}

/// Parse mods from their acronyms, e.g. `HDDTHR`.
pub fn parse_mods(s: &str) -> Result<GameMods, ParseModsError> {
    s.parse()
}

/// Display mods in their canonical order without separator.
pub fn format_mods(mods: GameMods) -> String {
    mods.to_string()
}
