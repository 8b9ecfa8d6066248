#![no_main]

use heapdex::ds::PositionIndex;
use libfuzzer_sys::fuzz_target;

// Fuzz arbitrary operation sequences on PositionIndex
//
// Drives the index with a shadow storage vector (append, truncate, swap)
// and checks every set against a rescan of that storage.
fuzz_target!(|data: &[u8]| {
    let mut index: PositionIndex<u8> = PositionIndex::new();
    let mut storage: Vec<u8> = Vec::new();

    for chunk in data.chunks(3) {
        if chunk.len() < 3 {
            break;
        }

        match chunk[0] % 4 {
            0 | 1 => {
                let value = chunk[1] % 16;
                index.insert(&value, storage.len());
                storage.push(value);
            }
            2 => {
                if let Some(value) = storage.pop() {
                    index.remove(&value, storage.len());
                }
            }
            3 => {
                if !storage.is_empty() {
                    let i = usize::from(chunk[1]) % storage.len();
                    let j = usize::from(chunk[2]) % storage.len();
                    storage.swap(i, j);
                    index.swap(&storage[j], &storage[i], i, j);
                }
            }
            _ => unreachable!(),
        }

        assert_eq!(index.total_positions(), storage.len());
        for value in 0u8..16 {
            let expected: Vec<usize> = storage
                .iter()
                .enumerate()
                .filter(|&(_, v)| *v == value)
                .map(|(pos, _)| pos)
                .collect();
            assert_eq!(index.positions(&value), expected.as_slice());
            assert_eq!(index.contains(&value), !expected.is_empty());
            assert_eq!(index.last_position(&value), expected.last().copied());
        }
    }
});
