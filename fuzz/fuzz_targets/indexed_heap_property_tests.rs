#![no_main]

use heapdex::ds::IndexedMinHeap;
use libfuzzer_sys::fuzz_target;

// Fuzz property-based tests for IndexedMinHeap
//
// Tests specific invariants and properties:
// - Pop order is non-decreasing
// - Heapify and incremental builds agree
// - Push then remove restores the previous state
// - Multiset containment under duplicate removal
// - Removal from arbitrary slots keeps the heap ordered
fuzz_target!(|data: &[u8]| {
    if data.len() < 2 {
        return;
    }

    let test_type = data[0] % 5;

    match test_type {
        0 => test_pop_order(&data[1..]),
        1 => test_builds_agree(&data[1..]),
        2 => test_push_remove_round_trip(&data[1..]),
        3 => test_duplicate_containment(&data[1..]),
        4 => test_remove_at_any_slot(&data[1..]),
        _ => unreachable!(),
    }
});

// Property: pop returns elements in non-decreasing order
fn test_pop_order(data: &[u8]) {
    let mut heap: IndexedMinHeap<u8> = data.iter().copied().collect();

    let mut last = None;
    while let Some(value) = heap.pop() {
        if let Some(prev) = last {
            assert!(value >= prev);
        }
        last = Some(value);
    }

    assert!(heap.is_empty());
}

// Property: heapify (O(n)) and repeated push (O(n log n)) drain identically
fn test_builds_agree(data: &[u8]) {
    let heapified = IndexedMinHeap::from_vec(data.to_vec());
    let incremental = IndexedMinHeap::from_iter_incremental(data.iter().copied());

    assert!(heapified.is_min_heap(0));
    heapified.check_invariants().unwrap();
    incremental.check_invariants().unwrap();

    let mut expected = data.to_vec();
    expected.sort_unstable();
    assert_eq!(heapified.into_sorted_vec(), expected);
    assert_eq!(incremental.into_sorted_vec(), expected);
}

// Property: push(x) followed by remove(&x) keeps len and multiplicity
fn test_push_remove_round_trip(data: &[u8]) {
    let Some((&extra, rest)) = data.split_last() else {
        return;
    };
    let mut heap = IndexedMinHeap::from_vec(rest.to_vec());
    let before = heap.len();
    let count = heap.count(&extra);

    heap.push(extra);
    assert!(heap.remove(&extra));

    assert_eq!(heap.len(), before);
    assert_eq!(heap.count(&extra), count);
    heap.check_invariants().unwrap();
}

// Property: a value stays contained until removed as often as it was added
fn test_duplicate_containment(data: &[u8]) {
    let value = data[0];
    let copies = (data.len() % 8) + 1;
    let mut heap = IndexedMinHeap::from_vec(data[1..].iter().map(|b| b ^ value).collect());
    let existing = heap.count(&value);

    for _ in 0..copies {
        heap.push(value);
    }

    for remaining in (0..existing + copies).rev() {
        assert!(heap.contains(&value));
        assert!(heap.remove(&value));
        assert_eq!(heap.count(&value), remaining);
    }

    assert!(!heap.contains(&value));
    assert!(!heap.remove(&value));
    heap.check_invariants().unwrap();
}

// Property: removing any slot keeps heap order and index agreement
fn test_remove_at_any_slot(data: &[u8]) {
    let mut heap = IndexedMinHeap::from_vec(data.to_vec());

    let mut idx = 0;
    while !heap.is_empty() {
        let slot = usize::from(data[idx % data.len()]) % heap.len();
        let expected = heap.iter().nth(slot).copied();

        assert_eq!(heap.remove_at(slot), expected);
        assert!(heap.is_min_heap(0));
        heap.check_invariants().unwrap();
        idx += 1;
    }
}
