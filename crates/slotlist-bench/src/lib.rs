//! Benchmark workloads for the slotlist containers.
//!
//! Provides seeded, reproducible inputs for benchmarks:
//!
//! - [`random_values`]: integers for numeric lists
//! - [`random_words`]: short ASCII words for text lists
//! - [`filled_int_list`] / [`filled_text_list`]: lists pre-populated from
//!   the above

#![forbid(unsafe_code)]
#![deny(rustdoc::broken_intra_doc_links)]

use rand_chacha::rand_core::{RngCore, SeedableRng};
use rand_chacha::ChaCha8Rng;
use slotlist_array::{IntList, TextList};
use slotlist_core::ListError;

/// Growth quantum used by the benchmark lists.
pub const BENCH_QUANTUM: usize = 64;

/// Generate `n` integers from a seeded ChaCha8 stream.
pub fn random_values(n: usize, seed: u64) -> Vec<i64> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n).map(|_| rng.next_u64() as i64).collect()
}

/// Generate `n` lowercase words of 1..=12 letters.
pub fn random_words(n: usize, seed: u64) -> Vec<String> {
    let mut rng = ChaCha8Rng::seed_from_u64(seed);
    (0..n)
        .map(|_| {
            let len = 1 + (rng.next_u32() % 12) as usize;
            (0..len)
                .map(|_| char::from(b'a' + (rng.next_u32() % 26) as u8))
                .collect()
        })
        .collect()
}

/// An `IntList` holding [`random_values`].
pub fn filled_int_list(n: usize, seed: u64) -> Result<IntList, ListError> {
    let mut list = IntList::new(0, BENCH_QUANTUM)?;
    for v in random_values(n, seed) {
        list.push(v)?;
    }
    Ok(list)
}

/// A `TextList` holding [`random_words`].
pub fn filled_text_list(n: usize, seed: u64) -> Result<TextList, ListError> {
    let mut list = TextList::new(0, BENCH_QUANTUM)?;
    for word in random_words(n, seed) {
        list.push(&word)?;
    }
    Ok(list)
}
