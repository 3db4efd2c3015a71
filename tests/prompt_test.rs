use spoticli::prompt::{parse_index, parse_index_range, parse_indices};

#[test]
fn test_parse_index() {
    assert_eq!(parse_index("0", 5).unwrap(), 0);
    assert_eq!(parse_index("4", 5).unwrap(), 4);
    // Surrounding whitespace is tolerated
    assert_eq!(parse_index(" 2 ", 5).unwrap(), 2);
}

#[test]
fn test_parse_index_invalid() {
    assert_eq!(
        parse_index("abc", 5).unwrap_err(),
        "Input abc contains invalid characters"
    );
    assert_eq!(parse_index("5", 5).unwrap_err(), "5 is an invalid index");
    assert_eq!(parse_index("12", 5).unwrap_err(), "12 is an invalid index");
    assert_eq!(
        parse_index("-1", 5).unwrap_err(),
        "Input -1 contains invalid characters"
    );
}

#[test]
fn test_parse_indices() {
    assert_eq!(parse_indices("0,2,4", 5).unwrap(), vec![0, 2, 4]);
    // Spaces around the commas are fine
    assert_eq!(parse_indices("1, 3", 5).unwrap(), vec![1, 3]);
    assert_eq!(parse_indices("3", 5).unwrap(), vec![3]);
}

#[test]
fn test_parse_indices_invalid() {
    assert_eq!(
        parse_indices("1,a", 5).unwrap_err(),
        "Input 1,a contains invalid characters"
    );
    assert_eq!(parse_indices("1,7", 5).unwrap_err(), "7 is an invalid index");
    // An empty segment is not an index
    assert!(parse_indices("1,,2", 5).is_err());
}

#[test]
fn test_parse_index_range() {
    assert_eq!(parse_index_range("1,3", 5).unwrap(), (1, 3));
    assert_eq!(parse_index_range("0, 4", 5).unwrap(), (0, 4));
    // A single-element range is allowed
    assert_eq!(parse_index_range("2,2", 5).unwrap(), (2, 2));
}

#[test]
fn test_parse_index_range_invalid() {
    assert_eq!(
        parse_index_range("1", 5).unwrap_err(),
        "You may only enter a range containing two indices."
    );
    assert_eq!(
        parse_index_range("1,2,3", 5).unwrap_err(),
        "You may only enter a range containing two indices."
    );
    // Reversed bounds are rejected
    assert_eq!(parse_index_range("3,1", 5).unwrap_err(), "3 is greater than 1");
    assert_eq!(parse_index_range("1,9", 5).unwrap_err(), "9 is an invalid index");
}
