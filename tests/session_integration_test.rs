//! End-to-end session scenarios: seed, validate, sort, render.

use gradebook::*;
use pretty_assertions::assert_eq;

fn seeded_like_original() -> Session {
    Session::from_seed(vec![
        Student::new("Noah", 73.0),
        Student::new("Ava", 91.5),
        Student::new("Liam", 95.0),
        Student::new("Mia", 88.25),
        Student::new("Emma", 82.0),
    ])
}

#[test]
fn test_ascending_render_matches_expected_block() {
    let session = seeded_like_original();
    let block = session.on_sort(SortDirection::Ascending);

    let expected = format!(
        "Ascending\n{}\n\
         {:<20} {:>6.2}\n\
         {:<20} {:>6.2}\n\
         {:<20} {:>6.2}\n\
         {:<20} {:>6.2}\n\
         {:<20} {:>6.2}\n",
        "-".repeat(29),
        "Noah",
        73.0,
        "Emma",
        82.0,
        "Mia",
        88.25,
        "Ava",
        91.5,
        "Liam",
        95.0
    );
    assert_eq!(block, expected);
}

#[test]
fn test_rejected_input_never_mutates_the_roster() {
    let mut session = seeded_like_original();

    assert_eq!(
        session.on_add("Zoe", "not a number"),
        Err(InputError::NotANumber)
    );
    assert_eq!(session.on_add("", "50"), Err(InputError::MissingField));
    assert_eq!(session.on_add("Max", "150"), Err(InputError::OutOfRange));

    assert_eq!(session.roster().len(), 5);
    let names: Vec<&str> = session.roster().iter().map(|s| s.name.as_str()).collect();
    assert_eq!(names, vec!["Noah", "Ava", "Liam", "Mia", "Emma"]);
}

#[test]
fn test_add_then_sort_then_clear_flow() {
    let mut session = Session::new();

    let added = session.on_add("Zoe", "67.5").unwrap();
    assert!(added.starts_with("Added: Zoe\n"));
    session.on_add("Abe", "90").unwrap();

    let asc = session.on_sort(SortDirection::Ascending);
    let asc_names: Vec<&str> = asc
        .lines()
        .skip(2)
        .map(|l| l.split_whitespace().next().unwrap())
        .collect();
    assert_eq!(asc_names, vec!["Zoe", "Abe"]);

    let cleared = session.on_clear();
    assert_eq!(cleared, format!("Cleared all students.\n{}\n", "-".repeat(29)));
    assert!(session.roster().is_empty());

    // Sorting the now-empty roster yields title and separator only
    let empty = session.on_sort(SortDirection::Ascending);
    assert_eq!(empty, format!("Ascending\n{}\n", "-".repeat(29)));
}

#[test]
fn test_round_trip_with_distinct_scores_reverses() {
    let session = seeded_like_original();

    let asc = insertion_sort(session.roster().snapshot(), SortDirection::Ascending);
    let desc = insertion_sort(asc.clone(), SortDirection::Descending);

    let mut reversed = asc;
    reversed.reverse();
    assert_eq!(desc, reversed);
}

#[test]
fn test_round_trip_with_ties_keeps_tied_group_order() {
    let input = vec![
        Student::new("A", 80.0),
        Student::new("High", 95.0),
        Student::new("B", 80.0),
    ];

    let asc = insertion_sort(input, SortDirection::Ascending);
    let desc = insertion_sort(asc.clone(), SortDirection::Descending);

    // Ascending: A, B, High. Descending keeps the tied pair in the order the
    // ascending pass produced, only the non-tied record moves.
    let asc_names: Vec<&str> = asc.iter().map(|s| s.name.as_str()).collect();
    let desc_names: Vec<&str> = desc.iter().map(|s| s.name.as_str()).collect();
    assert_eq!(asc_names, vec!["A", "B", "High"]);
    assert_eq!(desc_names, vec!["High", "A", "B"]);
}

#[test]
fn test_seeded_session_matches_default_seed() {
    let session = Session::seeded();
    assert_eq!(session.roster().snapshot(), default_seed());
}
