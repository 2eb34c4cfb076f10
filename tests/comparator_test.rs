//! Tests for guess comparison.

use strictly_geoguess::{Country, CountryId, Difference, Difficulty, Neighbour, compare};

fn strings(items: &[&str]) -> Vec<String> {
    items.iter().map(|s| s.to_string()).collect()
}

/// The guess from the reference scenario.
fn guess() -> Country {
    Country::new(CountryId(1), "TT", "Testia")
        .with_area(400.0)
        .with_population(123)
        .with_latitude(10.5)
        .with_longitude(-80.0)
        .with_region("Testasia")
        .with_subregion("East Testia")
        .with_continents(strings(&["Con"]))
        .with_languages(strings(&["Blabbish", "Binary"]))
        .with_neighbours(vec![
            Neighbour::new("Jestia", "JT"),
            Neighbour::new("West Testia", "WT"),
        ])
}

/// The target from the reference scenario.
fn target() -> Country {
    Country::new(CountryId(2), "ET", "Estia")
        .with_area(400.0)
        .with_population(123)
        .with_latitude(10.5)
        .with_longitude(-80.0)
        .with_region("Testasia")
        .with_subregion("East Testia")
        .with_continents(strings(&["Con", "Tinent"]))
        .with_languages(strings(&["Js", "Ts", "Blabbish", "Binary"]))
        .with_neighbours(vec![
            Neighbour::new("Jestia", "JT"),
            Neighbour::new("Qwertia", "QW"),
        ])
}

#[test]
fn test_reference_scenario() {
    let comparison = compare(&guess(), &target(), Difficulty::Easy);

    assert_eq!(comparison.area_difference, Difference::Equal);
    assert_eq!(comparison.population_difference, Difference::Equal);
    assert_eq!(comparison.latitude_difference, Difference::Equal);
    assert_eq!(comparison.longitude_difference, Difference::Equal);
    assert!(comparison.region_equal);
    assert!(comparison.subregion_equal);
    assert_eq!(comparison.same_continents, strings(&["Con"]));
    assert_eq!(comparison.same_languages, strings(&["Blabbish", "Binary"]));
    assert_eq!(comparison.same_neighbours, vec![Neighbour::new("Jestia", "JT")]);
}

#[test]
fn test_difference_reads_target_relative_to_guess() {
    let guess = guess().with_area(1.23).with_population(123);
    let target = target().with_area(400.0).with_population(3);

    let comparison = compare(&guess, &target, Difficulty::Hard);
    assert_eq!(comparison.area_difference, Difference::More);
    assert_eq!(comparison.population_difference, Difference::Less);
}

#[test]
fn test_coordinate_differences() {
    let guess = guess().with_latitude(0.0).with_longitude(0.0);
    let target = target().with_latitude(-20.0).with_longitude(30.0);

    let comparison = compare(&guess, &target, Difficulty::Hard);
    assert_eq!(comparison.latitude_difference, Difference::Less);
    assert_eq!(comparison.longitude_difference, Difference::More);
}

#[test]
fn test_equality_is_symmetric() {
    let a = guess().with_area(400.000_000_1).with_latitude(10.500_000_01);
    let b = target();

    for (left, right) in [(&a, &b), (&b, &a)] {
        let comparison = compare(left, right, Difficulty::Easy);
        assert_eq!(comparison.area_difference, Difference::Equal);
        assert_eq!(comparison.population_difference, Difference::Equal);
        assert_eq!(comparison.latitude_difference, Difference::Equal);
        assert_eq!(comparison.longitude_difference, Difference::Equal);
    }
}

#[test]
fn test_neighbours_match_by_code_in_target_order() {
    let target = target().with_neighbours(vec![
        Neighbour::new("West Testia", "WT"),
        Neighbour::new("Jestia", "JT"),
    ]);
    // Same name as a target neighbour but a different code must not match.
    let guess = guess().with_neighbours(vec![
        Neighbour::new("West Testia", "XX"),
        Neighbour::new("Jestia", "JT"),
    ]);

    let comparison = compare(&guess, &target, Difficulty::Easy);
    assert_eq!(comparison.same_neighbours, vec![Neighbour::new("Jestia", "JT")]);
}

#[test]
fn test_intersections_follow_target_order() {
    let guess = guess().with_languages(strings(&["Binary", "Ts", "Blabbish"]));
    let comparison = compare(&guess, &target(), Difficulty::Easy);
    assert_eq!(comparison.same_languages, strings(&["Ts", "Blabbish", "Binary"]));
}

#[test]
fn test_disjoint_sets_are_empty() {
    let guess = guess()
        .with_continents(strings(&["Elsewhere"]))
        .with_languages(Vec::new())
        .with_neighbours(Vec::new());

    let comparison = compare(&guess, &target(), Difficulty::Easy);
    assert!(comparison.same_continents.is_empty());
    assert!(comparison.same_languages.is_empty());
    assert!(comparison.same_neighbours.is_empty());
}

#[test]
fn test_region_and_subregion_compare_exactly() {
    let guess = guess().with_region("testasia").with_subregion("West Testia");
    let comparison = compare(&guess, &target(), Difficulty::Easy);
    assert!(!comparison.region_equal);
    assert!(!comparison.subregion_equal);
}

#[test]
fn test_identical_location_has_no_direction() {
    for difficulty in [Difficulty::Easy, Difficulty::Medium, Difficulty::Hard] {
        let comparison = compare(&guess(), &target(), difficulty);
        assert_eq!(comparison.direction, None, "difficulty {difficulty}");
    }
}

#[test]
fn test_comparing_a_country_with_itself() {
    let comparison = compare(&target(), &target(), Difficulty::Easy);
    assert_eq!(comparison.direction, None);
    assert_eq!(comparison.same_neighbours.len(), 2);
}

#[test]
fn test_hard_never_shows_direction() {
    let guess = guess().with_latitude(-30.0);
    let comparison = compare(&guess, &target(), Difficulty::Hard);
    assert!(comparison.region_equal);
    assert_eq!(comparison.direction, None);
}

#[test]
fn test_medium_shows_direction_only_within_region() {
    let same_region = guess().with_latitude(0.5);
    let comparison = compare(&same_region, &target(), Difficulty::Medium);
    assert!(comparison.direction.is_some());

    let other_region = same_region.with_region("Elsewhere");
    let comparison = compare(&other_region, &target(), Difficulty::Medium);
    assert_eq!(comparison.direction, None);
}

#[test]
fn test_easy_shows_direction_across_regions() {
    let guess = guess().with_region("Elsewhere").with_latitude(0.5);
    let comparison = compare(&guess, &target(), Difficulty::Easy);
    let direction = comparison.direction.expect("easy always shows direction");
    // Target is due north of the guess.
    assert!(direction.abs() < 1e-9);
}

#[test]
fn test_direction_points_east_across_antimeridian() {
    let guess = guess().with_latitude(0.0).with_longitude(175.0);
    let target = target().with_latitude(0.0).with_longitude(-175.0);

    let comparison = compare(&guess, &target, Difficulty::Easy);
    let direction = comparison.direction.expect("points differ");
    assert!((direction - 90.0).abs() < 1e-9, "got {direction}");
}

#[test]
fn test_direction_is_omitted_from_json_when_absent() {
    let comparison = compare(&guess(), &target(), Difficulty::Hard);
    let json = serde_json::to_value(&comparison).expect("serializes");

    assert!(json.get("direction").is_none());
    assert_eq!(json["areaDifference"], "equal");
    assert_eq!(json["sameNeighbours"][0]["code"], "JT");
}

#[test]
fn test_neighbour_codes_match_ignoring_case() {
    let guess = guess().with_neighbours(vec![Neighbour::new("Jestia", "jt")]);
    let comparison = compare(&guess, &target(), Difficulty::Easy);
    assert_eq!(comparison.same_neighbours, vec![Neighbour::new("Jestia", "JT")]);
}
