//! In-process sorting benchmark.
//!
//! Times a hand-written quicksort against the standard library's unstable sort
//! on fresh pseudo-random data of the same size.
//!
//! ```
//! let report = kindle_bench::run(10_000, 1);
//! assert_eq!(report.len, 10_000);
//! ```

pub mod quicksort;
pub mod rng;

use std::fmt;
use std::time::{Duration, Instant};

pub use quicksort::quicksort;
pub use rng::XorShift32;

/// Element count used by the demo when nothing else is configured.
pub const DEFAULT_LEN: usize = 1_000_000;

/// Wall-clock results of one benchmark run.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct SortReport {
    pub len: usize,
    pub quicksort: Duration,
    pub std_sort: Duration,
}

/// Fills a vector of `len` values in `[0, len)`.
pub fn random_data(len: usize, rng: &mut XorShift32) -> Vec<i32> {
    let bound = len.clamp(1, i32::MAX as usize) as u32;
    (0..len).map(|_| rng.below(bound) as i32).collect()
}

/// Runs both sorts on separately generated data sets and times each.
pub fn run(len: usize, seed: u32) -> SortReport {
    let mut rng = XorShift32::new(seed);

    let mut data = random_data(len, &mut rng);
    let start = Instant::now();
    quicksort(&mut data);
    let quick = start.elapsed();
    debug_assert!(data.is_sorted());

    let mut data = random_data(len, &mut rng);
    let start = Instant::now();
    data.sort_unstable();
    let std_sort = start.elapsed();

    SortReport {
        len,
        quicksort: quick,
        std_sort,
    }
}

impl fmt::Display for SortReport {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        writeln!(f, "Quick Sort Time: {} seconds", self.quicksort.as_secs_f64())?;
        write!(f, "Standard Sort Time: {} seconds", self.std_sort.as_secs_f64())
    }
}
