use tracing::trace;

pub const DEFAULT_QUICKSORT_INPUT: [i64; 10] = [64, 34, 25, 12, 22, 11, 90, 88, 45, 50];

/// Snapshot of the array right after one partition pass.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PartitionStep {
    /// Recursion depth of the call that performed the partition.
    pub depth: usize,
    pub low: usize,
    pub high: usize,
    /// Final resting index of the pivot.
    pub pivot_index: usize,
    pub snapshot: Vec<i64>,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct QuicksortTrace {
    pub original: Vec<i64>,
    pub steps: Vec<PartitionStep>,
    pub sorted: Vec<i64>,
}

/// Sorts a copy of `values` with a Lomuto quicksort, recording each partition.
pub fn quicksort_trace(values: &[i64]) -> QuicksortTrace {
    let mut working = values.to_vec();
    let mut steps = Vec::new();
    if !working.is_empty() {
        let high = working.len() - 1;
        quicksort(&mut working, 0, high, 0, &mut steps);
    }
    QuicksortTrace {
        original: values.to_vec(),
        steps,
        sorted: working,
    }
}

fn quicksort(
    values: &mut [i64],
    low: usize,
    high: usize,
    depth: usize,
    steps: &mut Vec<PartitionStep>,
) {
    if low >= high {
        return;
    }

    let pivot_index = partition(values, low, high);
    trace!(depth, low, high, pivot_index, "Partitioned slice.");
    steps.push(PartitionStep {
        depth,
        low,
        high,
        pivot_index,
        snapshot: values.to_vec(),
    });

    if pivot_index > low {
        quicksort(values, low, pivot_index - 1, depth + 1, steps);
    }
    quicksort(values, pivot_index + 1, high, depth + 1, steps);
}

/// Lomuto partition around `values[high]`; elements `<=` the pivot move left.
fn partition(values: &mut [i64], low: usize, high: usize) -> usize {
    let pivot = values[high];
    let mut boundary = low;
    for j in low..high {
        if values[j] <= pivot {
            values.swap(boundary, j);
            boundary += 1;
        }
    }
    values.swap(boundary, high);
    boundary
}
