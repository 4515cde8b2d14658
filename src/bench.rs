//! Hybrid mergesort benchmark sweep: generates the results CSV the plot
//! side consumes.
//!
//! For a master array of random integers, times one full sort per threshold
//! value `s`, with `s` sampled evenly between 1 and the array length. The
//! master array is filled from a fixed-seed PRNG so runs are repeatable.

use anyhow::{Context, Result};
use serde::Serialize;
use std::path::Path;
use std::time::Instant;

/// One timed run of the sweep
#[derive(Debug, Clone, Copy, Serialize)]
pub struct SweepRecord {
    /// Insertion-sort threshold used for the run
    pub s: usize,
    /// Wall-clock time of the full sort in milliseconds
    pub time_ms: f64,
}

/// Minimal deterministic PRNG (xoshiro256**)
struct SimpleRng {
    state: [u64; 4],
}

impl SimpleRng {
    fn new(seed: u64) -> Self {
        let mut s = [0u64; 4];
        let mut x = seed;
        for slot in &mut s {
            x = x.wrapping_mul(6364136223846793005).wrapping_add(1);
            *slot = x;
        }
        SimpleRng { state: s }
    }

    fn next_u64(&mut self) -> u64 {
        let result = (self.state[1].wrapping_mul(5))
            .rotate_left(7)
            .wrapping_mul(9);
        let t = self.state[1] << 17;
        self.state[2] ^= self.state[0];
        self.state[3] ^= self.state[1];
        self.state[1] ^= self.state[2];
        self.state[0] ^= self.state[3];
        self.state[2] ^= t;
        self.state[3] = self.state[3].rotate_left(45);
        result
    }

    fn next_i32(&mut self) -> i32 {
        self.next_u64() as i32
    }
}

/// Sort `arr`, switching from mergesort to insertion sort for runs of
/// `threshold` elements or fewer.
pub fn hybrid_merge_sort(arr: &mut [i32], threshold: usize) {
    let len = arr.len();
    if len <= 1 {
        return;
    }
    if len <= threshold.max(1) {
        insertion_sort(arr);
        return;
    }
    let mid = len / 2;
    hybrid_merge_sort(&mut arr[..mid], threshold);
    hybrid_merge_sort(&mut arr[mid..], threshold);
    merge(arr, mid);
}

fn insertion_sort(arr: &mut [i32]) {
    for i in 1..arr.len() {
        let key = arr[i];
        let mut j = i;
        while j > 0 && arr[j - 1] > key {
            arr[j] = arr[j - 1];
            j -= 1;
        }
        arr[j] = key;
    }
}

/// Merge the two sorted halves `arr[..mid]` and `arr[mid..]` in place.
fn merge(arr: &mut [i32], mid: usize) {
    let left: Vec<i32> = arr[..mid].to_vec();
    let right: Vec<i32> = arr[mid..].to_vec();

    let (mut i, mut j, mut k) = (0, 0, 0);
    while i < left.len() && j < right.len() {
        if left[i] <= right[j] {
            arr[k] = left[i];
            i += 1;
        } else {
            arr[k] = right[j];
            j += 1;
        }
        k += 1;
    }
    while i < left.len() {
        arr[k] = left[i];
        i += 1;
        k += 1;
    }
    while j < right.len() {
        arr[k] = right[j];
        j += 1;
        k += 1;
    }
}

/// Threshold values to test: `points` values evenly spaced between 1 and
/// `n` inclusive, deduplicated and ascending. Small `n` collapses to fewer
/// values than requested.
pub fn sample_thresholds(n: usize, points: usize) -> Vec<usize> {
    let m = points.max(2);
    let mut values: Vec<usize> = (0..m)
        .map(|i| {
            let frac = i as f64 / (m - 1) as f64;
            (1.0 + frac * (n.saturating_sub(1)) as f64).round() as usize
        })
        .map(|s| s.clamp(1, n.max(1)))
        .collect();
    values.sort_unstable();
    values.dedup();
    values
}

/// Run the full sweep: one timed hybrid sort of an `n`-element random array
/// per sampled threshold. Progress goes to stderr; the records come back in
/// ascending threshold order.
pub fn run_sweep(n: usize, points: usize, seed: u64) -> Vec<SweepRecord> {
    let mut rng = SimpleRng::new(seed);
    let master: Vec<i32> = (0..n).map(|_| rng.next_i32()).collect();

    let thresholds = sample_thresholds(n, points);
    eprintln!("Timing {} threshold values on {} elements", thresholds.len(), n);

    let mut records = Vec::with_capacity(thresholds.len());
    for s in thresholds {
        let mut copy = master.clone();
        let start = Instant::now();
        hybrid_merge_sort(&mut copy, s);
        let time_ms = start.elapsed().as_secs_f64() * 1_000.0;
        eprintln!("  s = {}: {:.3} ms", s, time_ms);
        records.push(SweepRecord { s, time_ms });
    }
    records
}

/// Write sweep records as CSV with an `s,time_ms` header, overwriting any
/// existing file.
pub fn write_results<P: AsRef<Path>>(records: &[SweepRecord], path: P) -> Result<()> {
    let path = path.as_ref();
    let mut writer = csv::Writer::from_path(path)
        .with_context(|| format!("Failed to create results file: {}", path.display()))?;
    for record in records {
        writer.serialize(record)?;
    }
    writer
        .flush()
        .with_context(|| format!("Failed to write results file: {}", path.display()))?;
    Ok(())
}
