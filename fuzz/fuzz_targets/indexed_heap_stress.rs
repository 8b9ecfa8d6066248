#![no_main]

use heapdex::ds::IndexedMinHeap;
use libfuzzer_sys::fuzz_target;
use std::cmp::Reverse;
use std::collections::BinaryHeap;

// Fuzz stress test with heavy operations and reference validation
//
// Mirrors every operation on a std BinaryHeap (arbitrary removal via
// retain) to check pop results and lengths against an unindexed reference.
fuzz_target!(|data: &[u8]| {
    if data.is_empty() {
        return;
    }

    let mut heap: IndexedMinHeap<u16> = IndexedMinHeap::new();
    let mut reference: BinaryHeap<Reverse<u16>> = BinaryHeap::new();

    for chunk in data.chunks(3) {
        if chunk.len() < 3 {
            break;
        }

        let op = chunk[0] % 4;
        let value = u16::from_le_bytes([chunk[1], chunk[2] % 4]);

        match op {
            0 | 1 => {
                heap.push(value);
                reference.push(Reverse(value));
            }
            2 => {
                let popped = heap.pop();
                let expected = reference.pop().map(|Reverse(v)| v);
                assert_eq!(popped, expected);
            }
            3 => {
                let removed = heap.remove(&value);

                let mut found = false;
                reference.retain(|&Reverse(v)| {
                    if !found && v == value {
                        found = true;
                        return false;
                    }
                    true
                });
                assert_eq!(removed, found);
            }
            _ => unreachable!(),
        }

        assert_eq!(heap.len(), reference.len());
        assert_eq!(heap.peek().copied(), reference.peek().map(|&Reverse(v)| v));
    }

    heap.check_invariants().unwrap();
});
