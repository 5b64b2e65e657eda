use tiny_static::http::request::{ByteRange, Request};

#[test]
fn test_whole_file_resolves_to_size() {
    let req = Request::new("file.bin");

    assert!(!req.is_partial());
    assert_eq!(
        req.resolve_range(1000),
        Some(ByteRange {
            offset: 0,
            end: 1000,
            total: 1000
        })
    );
}

#[test]
fn test_first_hundred_bytes() {
    let req = Request::with_range("file.bin", 0, 100);
    let range = req.resolve_range(1000).unwrap();

    assert!(req.is_partial());
    assert_eq!(range.offset, 0);
    assert_eq!(range.end, 100);
    assert_eq!(range.len(), 100);
}

#[test]
fn test_open_ended_range_runs_to_end() {
    let range = Request::with_range("file.bin", 900, 0)
        .resolve_range(1000)
        .unwrap();

    assert_eq!((range.offset, range.end), (900, 1000));
}

#[test]
fn test_end_past_size_is_clamped() {
    let range = Request::with_range("file.bin", 10, 5000)
        .resolve_range(1000)
        .unwrap();

    assert_eq!(range.end, 1000);
    assert_eq!(range.len(), 990);
}

#[test]
fn test_offset_at_or_past_end_is_unsatisfiable() {
    assert_eq!(Request::with_range("f", 1000, 0).resolve_range(1000), None);
    assert_eq!(Request::with_range("f", 2000, 0).resolve_range(1000), None);
    assert_eq!(Request::with_range("f", 50, 20).resolve_range(1000), None);
}

#[test]
fn test_empty_file_without_range() {
    let range = Request::new("empty").resolve_range(0).unwrap();
    assert!(range.is_empty());
}
