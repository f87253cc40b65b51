use ppv2::{format_mods, parse_mods, GameMod, GameMods, ParseModsError};
use proptest::prelude::*;

use self::common::*;

mod common;

const DISPLAYED: [GameMod; 12] = [
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

fn displayed_mods() -> impl Strategy<Value = GameMods> {
    prop::sample::subsequence(DISPLAYED.to_vec(), 0..=DISPLAYED.len())
        .prop_map(|mods| mods.into_iter().collect())
}

#[test]
fn known_bit_values() {
    assert_eq!(parse_mods("HDDT").unwrap().bits(), HD | DT);
    assert_eq!(parse_mods("NC").unwrap().canonical().bits(), 576);
    assert_eq!(parse_mods("PF").unwrap().canonical().bits(), 16_416);
    assert_eq!(parse_mods("V2").unwrap().bits(), V2);
}

#[test]
fn display() {
    assert_eq!(format_mods(GameMods::from(HD | HR | DT)), "HDDTHR");
    assert_eq!(format_mods(GameMods::from(NC | DT | HD)), "HDNC");
    assert_eq!(format_mods(GameMods::from(SD | PF)), "PF");
    assert_eq!(format_mods(GameMods::from(EZ | NF | SO | TD)), "EZNFSOTD");
    assert_eq!(format_mods(GameMods::from(NM)), "NM");
}

#[test]
fn error_message() {
    let err = parse_mods("HD!?").unwrap_err();

    assert_eq!(
        err,
        ParseModsError::UnrecognizedToken {
            token: "!?".to_owned(),
            position: 2,
        }
    );

    assert_eq!(
        err.to_string(),
        "unrecognized mod acronym `!?` at position 2"
    );
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn format_then_parse(mods in displayed_mods()) {
        let formatted = format_mods(mods);
        let parsed = parse_mods(&formatted).unwrap();

        prop_assert_eq!(parsed.canonical(), mods.canonical());
        prop_assert_eq!(format_mods(parsed), formatted);
    }

    #[test]
    fn parse_ignores_order(
        mods in prop::sample::subsequence(DISPLAYED.to_vec(), 0..=DISPLAYED.len()).prop_shuffle()
    ) {
        let forward: String = mods.iter().map(|gamemod| gamemod.acronym()).collect();
        let backward: String = mods.iter().rev().map(|gamemod| gamemod.acronym()).collect();

        prop_assert_eq!(parse_mods(&forward).unwrap(), parse_mods(&backward).unwrap());
        prop_assert_eq!(
            parse_mods(&forward.to_lowercase()).unwrap(),
            parse_mods(&forward).unwrap()
        );
    }

    #[test]
    fn any_bits_format(bits in any::<u32>()) {
        let mods = GameMods::from(bits);
        let formatted = format_mods(mods);

        prop_assert_eq!(formatted.len() % 2, 0);
        prop_assert!(!formatted.is_empty());
        prop_assert_eq!(format_mods(parse_mods(&formatted).unwrap()), formatted);
        prop_assert_eq!(u32::from(mods), bits);
        prop_assert_eq!(mods.canonical().canonical(), mods.canonical());
    }

    #[test]
    fn clock_rate_is_known(bits in any::<u32>()) {
        let rate = GameMods::from(bits).clock_rate();

        prop_assert!([0.75, 1.0, 1.125, 1.5].contains(&rate));
    }
}
