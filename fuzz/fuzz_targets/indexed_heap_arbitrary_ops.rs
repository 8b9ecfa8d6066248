#![no_main]

use heapdex::ds::IndexedMinHeap;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on IndexedMinHeap
//
// Tests random sequences of push, pop, remove, remove_at, contains, peek
// and clear, validating heap order and index agreement after each step.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut heap: IndexedMinHeap<u8> = IndexedMinHeap::new();

    for chunk in data.chunks(2) {
        if chunk.len() < 2 {
            break;
        }

        let op = chunk[0] % 8;
        let value = chunk[1] % 32; // narrow range to force duplicates

        match op {
            0 | 1 => {
                // push
                let old_len = heap.len();
                let old_count = heap.count(&value);
                heap.push(value);

                assert_eq!(heap.len(), old_len + 1);
                assert_eq!(heap.count(&value), old_count + 1);
                assert!(heap.contains(&value));
            }
            2 => {
                // pop
                let old_len = heap.len();
                let expected = heap.peek().copied();
                let popped = heap.pop();

                assert_eq!(popped, expected);
                match popped {
                    Some(_) => assert_eq!(heap.len(), old_len - 1),
                    None => assert!(heap.is_empty()),
                }
            }
            3 => {
                // remove
                let old_len = heap.len();
                let old_count = heap.count(&value);
                let removed = heap.remove(&value);

                assert_eq!(removed, old_count > 0);
                if removed {
                    assert_eq!(heap.len(), old_len - 1);
                    assert_eq!(heap.count(&value), old_count - 1);
                }
            }
            4 => {
                // remove_at
                let slot = usize::from(chunk[1]);
                let expected = heap.iter().nth(slot).copied();
                assert_eq!(heap.remove_at(slot), expected);
            }
            5 => {
                // contains vs count (read-only)
                assert_eq!(heap.contains(&value), heap.count(&value) > 0);
            }
            6 => {
                // peek is the minimum
                if let Some(&top) = heap.peek() {
                    assert!(heap.iter().all(|&v| top <= v));
                }
            }
            7 => {
                // clear
                heap.clear();

                assert!(heap.is_empty());
                assert_eq!(heap.peek(), None);
                assert!(!heap.contains(&value));
            }
            _ => unreachable!(),
        }

        assert!(heap.is_min_heap(0));
        heap.check_invariants().unwrap();
    }
});
