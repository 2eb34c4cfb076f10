//! Tests for hint unlocking.

use strictly_geoguess::{
    Country, CountryId, DrivingSide, Hint, HintThresholds, Neighbour, get_hints,
};

fn target() -> Country {
    Country::new(CountryId(9), "QW", "Qwertia")
        .with_landlocked(true)
        .with_driving_side(DrivingSide::Left)
        .with_capital(Some("Qwerty City".to_string()))
        .with_languages(vec!["Js".to_string(), "Ts".to_string(), "Binary".to_string()])
        .with_neighbours(vec![
            Neighbour::new("Jestia", "JT"),
            Neighbour::new("Testia", "TT"),
        ])
}

/// Default thresholds with three fields overridden.
fn thresholds(landlocked: u32, driving_side: u32, capital: u32) -> HintThresholds {
    HintThresholds {
        landlocked,
        driving_side,
        capital,
        ..HintThresholds::default()
    }
}

#[test]
fn test_threshold_is_inclusive() {
    let thresholds = thresholds(2, 400, 900);

    let hints = get_hints(1, &target(), &thresholds);
    assert_eq!(hints.landlocked, Hint::Locked { unlocks_in: 1 });

    let hints = get_hints(2, &target(), &thresholds);
    assert_eq!(hints.landlocked, Hint::Unlocked { value: true });
}

#[test]
fn test_fields_unlock_independently() {
    let hints = get_hints(100, &target(), &thresholds(2, 400, 900));

    assert_eq!(hints.landlocked, Hint::Unlocked { value: true });
    assert_eq!(hints.driving_side, Hint::Locked { unlocks_in: 300 });
    assert_eq!(hints.capital, Hint::Locked { unlocks_in: 800 });
}

#[test]
fn test_nothing_unlocked_before_first_guess() {
    let hints = get_hints(0, &target(), &HintThresholds::default());

    assert_eq!(hints.unlocked_count(), 0);
    assert_eq!(hints.driving_side.unlocks_in(), Some(1));
    assert_eq!(hints.landlocked.unlocks_in(), Some(2));
    assert_eq!(hints.neighbour_count.unlocks_in(), Some(4));
    assert_eq!(hints.language_count.unlocks_in(), Some(4));
    assert_eq!(hints.capital.unlocks_in(), Some(6));
}

#[test]
fn test_default_progression() {
    let target = target();
    let defaults = HintThresholds::default();
    let unlocked: Vec<usize> = (0..=6)
        .map(|count| get_hints(count, &target, &defaults).unlocked_count())
        .collect();
    assert_eq!(unlocked, vec![0, 1, 2, 2, 4, 4, 5]);
}

#[test]
fn test_counts_are_full_totals() {
    let hints = get_hints(10, &target(), &HintThresholds::default());

    assert_eq!(hints.neighbour_count.value(), Some(&2));
    assert_eq!(hints.language_count.value(), Some(&3));
    assert_eq!(hints.driving_side.value(), Some(&DrivingSide::Left));
    assert_eq!(hints.capital.value(), Some(&Some("Qwerty City".to_string())));
}

#[test]
fn test_missing_capital_unlocks_as_none() {
    let target = target().with_capital(None);
    let hints = get_hints(6, &target, &HintThresholds::default());
    assert_eq!(hints.capital, Hint::Unlocked { value: None });
}

#[test]
fn test_locked_and_unlocked_serialize_distinctly() {
    let hints = get_hints(1, &target(), &HintThresholds::default());
    let json = serde_json::to_value(&hints).expect("serializes");

    assert_eq!(json["drivingSide"]["state"], "unlocked");
    assert_eq!(json["drivingSide"]["value"], "left");
    assert_eq!(json["landlocked"]["state"], "locked");
    assert_eq!(json["landlocked"]["unlocksIn"], 1);
    assert!(json["landlocked"].get("value").is_none());
    assert!(json["drivingSide"].get("unlocksIn").is_none());
}
