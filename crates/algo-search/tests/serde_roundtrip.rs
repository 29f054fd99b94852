use algo_search::SearchBounds;

#[test]
fn bounds_round_trip_json() {
    let bounds = SearchBounds::new(2, 9);
    let json = serde_json::to_string(&bounds).expect("serialize");
    let decoded: SearchBounds = serde_json::from_str(&json).expect("deserialize");
    assert_eq!(decoded, bounds);
}

#[test]
fn unset_bounds_are_omitted() {
    let json = serde_json::to_string(&SearchBounds::full().with_high(3)).expect("serialize");
    assert_eq!(json, r#"{"high":3}"#);

    let decoded: SearchBounds = serde_json::from_str("{}").expect("deserialize");
    assert_eq!(decoded, SearchBounds::full());
}
