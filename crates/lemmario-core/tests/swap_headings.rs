use lemmario_core::lines::swap_headings;
use lemmario_core::CleanError;

fn lines(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

fn letters(v: &[&str]) -> Vec<String> {
    v.iter().map(|s| s.to_string()).collect()
}

#[test]
fn heading_moves_before_its_first_entry() {
    let mut l = lines(&[
        "gusto s.m.,",
        "hamburger s.m.inv.,",
        "H",
        "harem s.m.inv.,",
    ]);
    swap_headings(&mut l, &letters(&["H"])).unwrap();
    assert_eq!(
        l,
        lines(&[
            "gusto s.m.,",
            "H",
            "hamburger s.m.inv.,",
            "harem s.m.inv.,",
        ])
    );
}

#[test]
fn every_configured_letter_is_swapped() {
    let mut l = lines(&[
        "hamburger s.m.inv.,",
        "H",
        "jazz s.m.inv.,",
        "J",
        "water s.m.inv.,",
        "W",
        "yogurt s.m.inv.,",
        "Y",
    ]);
    swap_headings(&mut l, &letters(&["H", "J", "W", "Y"])).unwrap();
    assert_eq!(
        l,
        lines(&[
            "H",
            "hamburger s.m.inv.,",
            "J",
            "jazz s.m.inv.,",
            "W",
            "water s.m.inv.,",
            "Y",
            "yogurt s.m.inv.,",
        ])
    );
}

#[test]
fn missing_heading_is_a_validation_error() {
    let mut l = lines(&["hamburger s.m.inv.,"]);
    let err = swap_headings(&mut l, &letters(&["H"])).unwrap_err();
    assert!(matches!(err, CleanError::Validation(_)));
    assert!(err.to_string().contains("'H' not found"));
}

#[test]
fn duplicated_heading_is_a_validation_error() {
    let mut l = lines(&["hamburger s.m.inv.,", "H", "harem s.m.inv.,", "H"]);
    let err = swap_headings(&mut l, &letters(&["H"])).unwrap_err();
    assert!(matches!(err, CleanError::Validation(_)));
    assert!(err.to_string().contains("2 times"));
}

#[test]
fn heading_on_the_first_line_is_rejected() {
    let mut l = lines(&["H", "hamburger s.m.inv.,"]);
    let err = swap_headings(&mut l, &letters(&["H"])).unwrap_err();
    assert!(matches!(err, CleanError::Validation(_)));
    assert!(err.to_string().contains("no preceding entry"));
}
