use heapdex::ds::IndexedMinHeap;

#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
struct Job {
    deadline: u32,
    name: &'static str,
}

fn main() {
    let mut jobs: IndexedMinHeap<Job> = vec![
        Job { deadline: 30, name: "report" },
        Job { deadline: 10, name: "backup" },
        Job { deadline: 20, name: "reindex" },
        Job { deadline: 15, name: "email" },
    ]
    .into();

    // cancel a queued job without draining the queue
    let cancelled = Job { deadline: 20, name: "reindex" };
    println!("cancelled reindex? {}", jobs.remove(&cancelled));

    while let Some(job) = jobs.pop() {
        println!("run {} @ {}", job.name, job.deadline);
    }
}

// Expected output:
// cancelled reindex? true
// run backup @ 10
// run email @ 15
// run report @ 30
//
// Explanation: the vector is heapified in O(n); removal finds the job through
// the position index instead of scanning.
