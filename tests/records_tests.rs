use lapboard::records::{normalize_name, RecordBook, RecordSubmission};
use lapboard::timecode::LapTime;
use std::io::Cursor;

fn book() -> RecordBook {
    RecordBook::from_submissions(&[
        RecordSubmission::new("Alice", "Forest", "1'01'00"),
        RecordSubmission::new(" alice ", "forest", "1'00'20"), // Same pair, faster
        RecordSubmission::new("ALICE", "Forest", "1'03'00"), // Slower, ignored
        RecordSubmission::new("Bob", "Forest", "0'00'00"), // Not a finish
        RecordSubmission::new("Bob", "Desert", "garbage"),
        RecordSubmission::new("Bob", "Harbor", "0'40'00"),
    ])
}

#[test]
fn test_normalize_name() {
    assert_eq!(normalize_name("  Alice\t"), "alice");
    assert_eq!(normalize_name("FOREST"), "forest");
}

#[test]
fn test_keeps_best_time_per_pair() {
    let book = book();
    assert_eq!(book.len(), 2);
    assert_eq!(book.personal_best("Alice", "Forest"), LapTime::from_parts(1, 0, 20));
    assert_eq!(book.personal_best("alice", " FOREST "), LapTime::from_parts(1, 0, 20));
    assert_eq!(book.personal_best("Bob", "Harbor"), LapTime::from_parts(0, 40, 0));
}

#[test]
fn test_invalid_submissions_are_skipped() {
    let book = book();
    assert_eq!(book.personal_best("Bob", "Forest"), None);
    assert_eq!(book.personal_best("Bob", "Desert"), None);
}

#[test]
fn test_is_personal_best() {
    let book = book();
    let record = LapTime::from_hundredths(6020);

    assert!(book.is_personal_best("Alice", "Forest", record)); // Matches
    assert!(book.is_personal_best("Alice", "Forest", LapTime::from_hundredths(6000)));
    assert!(!book.is_personal_best("Alice", "Forest", LapTime::from_hundredths(6100)));
    // First ever record for this pair
    assert!(book.is_personal_best("Cleo", "Forest", LapTime::from_hundredths(9000)));
    assert!(!book.is_personal_best("Cleo", "Forest", LapTime::ZERO));
}

#[test]
fn test_empty_book() {
    let book = RecordBook::from_submissions(&[]);
    assert!(book.is_empty());
    assert_eq!(book.personal_best("Alice", "Forest"), None);
}

#[test]
fn test_json_submissions() {
    let json = r#"[
        {"racer": "Alice", "map": "Forest", "time": "1'00'00"},
        {"racer": "Bob", "map": "Forest"}
    ]"#;
    let book = RecordBook::from_json_reader(Cursor::new(json)).unwrap();
    assert_eq!(book.len(), 1);
    assert_eq!(
        book.personal_best("alice", "forest").map(|t| t.hundredths()),
        Some(6000)
    );
}
