//! Tests for the iterator validity contract: version-based staleness
//! detection, out-of-range handling, and the begin/end equality protocol.

use vistra_container::container::Container;
use vistra_traversal::error::TraversalError;
use vistra_traversal::view::OrderedViews;

fn fixture() -> Container<i32> {
    let mut c = Container::new();
    c.add(1);
    c.add(2);
    c.add(3);
    c
}

#[test]
fn add_invalidates_live_iterator() {
    let mut c = fixture();
    let mut it = c.ascending().begin();

    c.add(4);

    assert!(matches!(
        it.get(),
        Err(TraversalError::StaleIteration { .. })
    ));
    assert!(matches!(
        it.advance(),
        Err(TraversalError::StaleIteration { .. })
    ));
}

#[test]
fn remove_invalidates_live_iterator() {
    let mut c = fixture();
    let it = c.side_cross().begin();

    c.remove(&2).unwrap();

    assert!(matches!(
        it.get(),
        Err(TraversalError::StaleIteration { .. })
    ));
}

#[test]
fn staleness_is_version_based_not_size_based() {
    let mut c = fixture();
    let it = c.normal().begin();

    // Size returns to its old value; the version still moved twice.
    c.add(4);
    c.remove(&4).unwrap();
    assert_eq!(c.len(), 3);

    assert_eq!(
        it.get(),
        Err(TraversalError::StaleIteration {
            expected: 3,
            observed: 5
        })
    );
}

#[test]
fn stale_error_carries_both_versions() {
    let mut c = fixture();
    let it = c.reverse().begin();
    c.add(4);

    match it.get() {
        Err(TraversalError::StaleIteration { expected, observed }) => {
            assert_eq!(expected, 3);
            assert_eq!(observed, 4);
        }
        other => panic!("expected StaleIteration, got {:?}", other),
    }
}

#[test]
fn failed_remove_does_not_invalidate() {
    let mut c = fixture();
    let it = c.normal().begin();

    // NotFound is an atomic no-op; the iterator stays valid.
    assert!(c.remove(&999).is_err());
    assert_eq!(it.get(), Ok(1));
}

#[test]
fn out_of_range_on_empty_begin() {
    let c: Container<i32> = Container::new();
    let mut it = c.normal().begin();

    assert_eq!(
        it.get(),
        Err(TraversalError::OutOfRange { cursor: 0, len: 0 })
    );
    assert_eq!(
        it.advance(),
        Err(TraversalError::OutOfRange { cursor: 0, len: 0 })
    );
}

#[test]
fn out_of_range_after_advancing_past_last() {
    let c = fixture();
    let mut it = c.descending().begin();
    for _ in 0..c.len() {
        it.advance().unwrap();
    }

    assert!(it.at_end());
    assert_eq!(
        it.get(),
        Err(TraversalError::OutOfRange { cursor: 3, len: 3 })
    );
    assert_eq!(
        it.advance(),
        Err(TraversalError::OutOfRange { cursor: 3, len: 3 })
    );
}

#[test]
fn dereferencing_end_is_out_of_range() {
    let c = fixture();
    let end = c.ascending().end();
    assert_eq!(
        end.get(),
        Err(TraversalError::OutOfRange { cursor: 3, len: 3 })
    );
}

#[test]
fn begin_equals_end_on_empty_for_all_views() {
    let c: Container<i32> = Container::new();
    assert!(c.ascending().begin() == c.ascending().end());
    assert!(c.descending().begin() == c.descending().end());
    assert!(c.side_cross().begin() == c.side_cross().end());
    assert!(c.middle_out().begin() == c.middle_out().end());
    assert!(c.normal().begin() == c.normal().end());
    assert!(c.reverse().begin() == c.reverse().end());
}

#[test]
fn begin_reaches_end_after_len_advances() {
    let c = fixture();
    let view = c.ascending();
    let mut it = view.begin();
    let end = view.end();

    assert!(it != end);
    while it != end {
        it.advance().unwrap();
    }
    assert!(it == end);
    assert_eq!(it.cursor(), c.len());
}

#[test]
fn for_loop_surfaces_stale_error() {
    let mut c = fixture();
    let mut seen = Vec::new();
    let mut failure = None;

    let mut it = c.ascending().begin();
    loop {
        match it.next() {
            Some(Ok(value)) => {
                seen.push(value);
                // Mutate mid-traversal, like the demo does.
                c.add(999);
            }
            Some(Err(e)) => {
                failure = Some(e);
                break;
            }
            None => break,
        }
    }

    assert_eq!(seen, vec![1]);
    assert!(matches!(
        failure,
        Some(TraversalError::StaleIteration { .. })
    ));
}

#[test]
fn exhausted_adapter_returns_none_without_error() {
    let c = fixture();
    let results: Vec<_> = c.normal().into_iter().collect();
    assert_eq!(results.len(), 3);
    assert!(results.iter().all(|r| r.is_ok()));

    let mut it = c.normal().begin();
    for _ in 0..3 {
        it.next();
    }
    assert_eq!(it.next(), None);
    assert_eq!(it.next(), None);
}
