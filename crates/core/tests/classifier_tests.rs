// ═══════════════════════════════════════════════════════════════════
// Classifier Tests — keyword classification, duration/quantity
// extraction, nutrition estimation
// ═══════════════════════════════════════════════════════════════════

use health_tracker_core::classifier::{classify, parse_entry, Classification, ParsedEntry};

// ═══════════════════════════════════════════════════════════════════
// Classification
// ═══════════════════════════════════════════════════════════════════

#[test]
fn exercise_keyword_alone_classifies_as_exercise() {
    assert_eq!(
        classify("Ran for 30 minutes this morning"),
        Classification::Exercise
    );
    assert_eq!(classify("went swimming at the gym"), Classification::Exercise);
}

#[test]
fn food_keyword_classifies_as_food() {
    assert_eq!(
        classify("Ate 1 bowl of oatmeal with berries for breakfast"),
        Classification::Food
    );
}

#[test]
fn both_keyword_sets_prefer_food() {
    // "drank" (food) and "workout" (exercise) both match — food wins.
    assert_eq!(
        classify("Drank a protein shake after workout"),
        Classification::Food
    );
}

#[test]
fn no_keyword_match_is_unclassified() {
    assert_eq!(classify("two scoops of mystery"), Classification::Unclassified);
}

#[test]
fn unclassified_input_parses_as_food() {
    let entry = parse_entry("two scoops of mystery");
    assert!(matches!(entry, ParsedEntry::Food { .. }));
}

#[test]
fn substring_containment_matches_embedded_keywords() {
    // "sidewalk" contains "walk" — containment is by design, not
    // word-boundary matching.
    let entry = parse_entry("strolled along the sidewalk");
    match entry {
        ParsedEntry::Exercise {
            name,
            duration,
            calories_burned,
        } => {
            assert_eq!(name, "Walking");
            assert_eq!(duration, 45);
            assert_eq!(calories_burned, 225);
        }
        other => panic!("expected exercise entry, got {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Exercise estimation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn running_thirty_minutes() {
    let entry = parse_entry("Ran for 30 minutes this morning");
    match entry {
        ParsedEntry::Exercise {
            name,
            duration,
            calories_burned,
        } => {
            assert_eq!(name, "Running");
            assert_eq!(duration, 30);
            assert_eq!(calories_burned, 360); // 30 min × 12 kcal/min
        }
        other => panic!("expected exercise entry, got {other:?}"),
    }
}

#[test]
fn hours_convert_to_minutes() {
    let entry = parse_entry("biked for 2 hours");
    match entry {
        ParsedEntry::Exercise {
            name,
            duration,
            calories_burned,
        } => {
            assert_eq!(name, "Cycling");
            assert_eq!(duration, 120);
            assert_eq!(calories_burned, 1080); // 120 × 9
        }
        other => panic!("expected exercise entry, got {other:?}"),
    }
}

#[test]
fn missing_duration_uses_activity_default() {
    let entry = parse_entry("went to the gym");
    match entry {
        ParsedEntry::Exercise {
            name,
            duration,
            calories_burned,
        } => {
            assert_eq!(name, "Gym Workout");
            assert_eq!(duration, 60);
            assert_eq!(calories_burned, 600); // 60 × 10
        }
        other => panic!("expected exercise entry, got {other:?}"),
    }
}

#[test]
fn unknown_activity_rates_fall_back() {
    // "cardio" has a name but no duration default and no burn rate entry.
    let entry = parse_entry("did some cardio");
    match entry {
        ParsedEntry::Exercise {
            name,
            duration,
            calories_burned,
        } => {
            assert_eq!(name, "Cardio");
            assert_eq!(duration, 30); // generic default
            assert_eq!(calories_burned, 240); // 30 × 8 fallback rate
        }
        other => panic!("expected exercise entry, got {other:?}"),
    }
}

#[test]
fn yoga_session_defaults() {
    let entry = parse_entry("did yoga before work");
    match entry {
        ParsedEntry::Exercise {
            duration,
            calories_burned,
            ..
        } => {
            assert_eq!(duration, 60);
            assert_eq!(calories_burned, 240); // 60 × 4
        }
        other => panic!("expected exercise entry, got {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Food estimation
// ═══════════════════════════════════════════════════════════════════

#[test]
fn oatmeal_bowl_for_breakfast() {
    let entry = parse_entry("Ate 1 bowl of oatmeal with berries for breakfast");
    match entry {
        ParsedEntry::Food {
            name,
            quantity,
            calories,
            carbs,
            protein,
            fat,
        } => {
            assert_eq!(name, "Oatmeal");
            assert_eq!(quantity, "1 bowl");
            assert_eq!(calories, 150);
            assert_eq!(carbs, 19); // round(150 × 0.5 / 4)
            assert_eq!(protein, 8); // round(150 × 0.2 / 4)
            assert_eq!(fat, 5); // round(150 × 0.3 / 9)
        }
        other => panic!("expected food entry, got {other:?}"),
    }
}

#[test]
fn quantity_scales_base_calories() {
    let entry = parse_entry("ate 2 slices of pizza for dinner");
    match entry {
        ParsedEntry::Food {
            name,
            quantity,
            calories,
            ..
        } => {
            assert_eq!(name, "Pizza");
            // Alternation prefers the singular form, so the captured unit
            // is "slice" even when the text says "slices".
            assert_eq!(quantity, "2 slice");
            assert_eq!(calories, 600); // 300 base × 2
        }
        other => panic!("expected food entry, got {other:?}"),
    }
}

#[test]
fn bare_number_becomes_quantity() {
    let entry = parse_entry("ate 3 apples");
    match entry {
        ParsedEntry::Food {
            name,
            quantity,
            calories,
            ..
        } => {
            assert_eq!(name, "Apple");
            assert_eq!(quantity, "3");
            assert_eq!(calories, 240); // 80 × 3
        }
        other => panic!("expected food entry, got {other:?}"),
    }
}

#[test]
fn unknown_food_falls_back_to_first_long_word() {
    let entry = parse_entry("ate some quinoa");
    match entry {
        ParsedEntry::Food {
            name,
            quantity,
            calories,
            ..
        } => {
            assert_eq!(name, "Ate");
            assert_eq!(quantity, "1 serving");
            assert_eq!(calories, 200); // fallback base
        }
        other => panic!("expected food entry, got {other:?}"),
    }
}

#[test]
fn empty_input_yields_generic_food_item() {
    let entry = parse_entry("");
    match entry {
        ParsedEntry::Food {
            name,
            quantity,
            calories,
            carbs,
            protein,
            fat,
        } => {
            assert_eq!(name, "Food Item");
            assert_eq!(quantity, "1 serving");
            assert_eq!(calories, 200);
            assert_eq!(carbs, 25);
            assert_eq!(protein, 10);
            assert_eq!(fat, 7);
        }
        other => panic!("expected food entry, got {other:?}"),
    }
}

// ═══════════════════════════════════════════════════════════════════
// Contract properties
// ═══════════════════════════════════════════════════════════════════

#[test]
fn parsing_is_deterministic() {
    let inputs = [
        "Ran for 30 minutes this morning",
        "Ate 1 bowl of oatmeal with berries for breakfast",
        "two scoops of mystery",
        "",
    ];
    for input in inputs {
        assert_eq!(parse_entry(input), parse_entry(input), "input: {input:?}");
    }
}

#[test]
fn classification_is_case_insensitive() {
    assert_eq!(classify("WENT FOR A RUN"), Classification::Exercise);
    assert_eq!(classify("ATE LUNCH"), Classification::Food);
}

#[test]
fn every_input_produces_a_complete_entry() {
    let inputs = [
        "x",
        "   ",
        "1234567890",
        "ütf-8 čhäracters everywhere",
        "a very long sentence about nothing in particular that mentions no known words",
    ];
    for input in inputs {
        match parse_entry(input) {
            ParsedEntry::Food {
                name, quantity, ..
            } => {
                assert!(!name.is_empty(), "input: {input:?}");
                assert!(!quantity.is_empty(), "input: {input:?}");
            }
            ParsedEntry::Exercise { name, .. } => {
                assert!(!name.is_empty(), "input: {input:?}");
            }
        }
    }
}

#[test]
fn parsed_entry_serializes_with_type_tag() {
    let food = parse_entry("ate an apple");
    let json = serde_json::to_string(&food).unwrap();
    assert!(json.contains(r#""type":"food""#), "json: {json}");

    let exercise = parse_entry("went for a jog");
    let json = serde_json::to_string(&exercise).unwrap();
    assert!(json.contains(r#""type":"exercise""#), "json: {json}");
}
