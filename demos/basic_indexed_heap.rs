use heapdex::ds::IndexedMinHeap;

fn main() {
    let mut heap = IndexedMinHeap::new();
    for value in [7, 2, 9, 2, 4] {
        heap.push(value);
    }

    println!("storage: {}", heap);
    println!("peek: {:?}", heap.peek());
    println!("remove 9? {}", heap.remove(&9));

    while let Some(value) = heap.pop() {
        println!("pop {} (2 still queued? {})", value, heap.contains(&2));
    }
}

// Expected output:
// storage: [2, 2, 9, 7, 4]
// peek: Some(2)
// remove 9? true
// pop 2 (2 still queued? true)
// pop 2 (2 still queued? false)
// pop 4 (2 still queued? false)
// pop 7 (2 still queued? false)
//
// Explanation: the second 2 swims past the first (equal keys keep swapping),
// and contains() follows multiset semantics while duplicates drain.
