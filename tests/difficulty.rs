use ppv2::{apply_mods, BeatmapAttributes, GameMods};
use proptest::prelude::*;

use self::common::*;

mod common;

fn attributes() -> impl Strategy<Value = BeatmapAttributes> {
    (0.0..=10.0, 0.0..=10.0, 0.0..=10.0, 0.0..=10.0).prop_map(|(ar, od, cs, hp)| {
        BeatmapAttributes {
            ar,
            od,
            cs,
            hp,
            ..map_a()
        }
    })
}

#[test]
fn settings_of_map_a() {
    let hr = apply_mods(&map_a(), GameMods::from(HR));
    assert_eq_float(hr.ar, 10.0);
    assert_eq_float(hr.od, 10.0);
    assert_eq_float(hr.cs, 5.2);
    assert_eq_float(hr.hp, 8.4);

    let dt = apply_mods(&map_a(), GameMods::from(DT));
    assert_eq_float(dt.ar, 5.0 + 800.0 / 150.0);

    let ezht = apply_mods(&map_a(), GameMods::from(EZ | HT));
    // 1260ms / 0.75 = 1680ms
    assert_eq_float(ezht.ar, 1.0);
    assert_eq_float(ezht.cs, 2.0);
}

proptest! {
    #![proptest_config(ProptestConfig::with_cases(1000))]

    #[test]
    fn capped_settings(attrs in attributes(), bits in any::<u32>()) {
        let modded = apply_mods(&attrs, GameMods::from(bits));

        prop_assert!(modded.cs <= 10.0);
        prop_assert!(modded.hp <= 10.0);
        prop_assert!((-5.0 - 1e-9..=11.0 + 1e-9).contains(&modded.ar), "{}", modded.ar);
        prop_assert!(modded.od <= 11.2 + 1e-9, "{}", modded.od);
        prop_assert_eq!(modded.aim, attrs.aim);
        prop_assert_eq!(modded.speed, attrs.speed);
        prop_assert_eq!(modded.max_combo, attrs.max_combo);
    }

    #[test]
    fn hardrock_is_harder_than_easy(attrs in attributes()) {
        let hr = apply_mods(&attrs, GameMods::from(HR));
        let ez = apply_mods(&attrs, GameMods::from(EZ));

        prop_assert!(hr.ar >= ez.ar);
        prop_assert!(hr.od >= ez.od);
        prop_assert!(hr.cs >= ez.cs);
        prop_assert!(hr.hp >= ez.hp);
    }

    #[test]
    fn nightcore_is_doubletime(attrs in attributes()) {
        prop_assert_eq!(
            apply_mods(&attrs, GameMods::from(NC)),
            apply_mods(&attrs, GameMods::from(DT))
        );
    }

    #[test]
    fn unrelated_mods_keep_settings(attrs in attributes(), bits in any::<u32>()) {
        let mods = GameMods::from(bits & !(EZ | HR | DT | HT | NC));

        prop_assert_eq!(apply_mods(&attrs, mods), attrs);
    }
}
