//! Seeded input generators for the sort harness, the benches and the palindrome tests.
//!
//! Every generator builds its own rng from [`random_init_seed`], so two calls with the same length
//! return the same values for the whole process. Set `OVERRIDE_SEED=<u64>` to replay a failure.

use std::cmp::Reverse;
use std::env;
use std::sync::atomic::{AtomicBool, Ordering};

use once_cell::sync::OnceCell;
use rand::distributions::Uniform;
use rand::prelude::*;

static PROCESS_SEED: OnceCell<u64> = OnceCell::new();
static FRESH_SEED_PER_CALL: AtomicBool = AtomicBool::new(false);

/// Uniformly random over the whole `i32` range. Duplicates are rare.
pub fn random(len: usize) -> Vec<i32> {
    let mut rng = rng();

    (0..len).map(|_| rng.gen()).collect()
}

/// Uniformly random within `range`, eg. `0..=1` for a binary input.
pub fn random_uniform<R>(len: usize, range: R) -> Vec<i32>
where
    R: Into<Uniform<i32>>,
{
    let dist: Uniform<i32> = range.into();

    rng().sample_iter(dist).take(len).collect()
}

pub fn all_equal(len: usize) -> Vec<i32> {
    vec![66; len]
}

pub fn ascending(len: usize) -> Vec<i32> {
    (0..len as i32).collect()
}

pub fn descending(len: usize) -> Vec<i32> {
    (0..len as i32).rev().collect()
}

/// `saw_count` sorted runs of random values, each one ascending or descending at random.
pub fn saw_mixed(len: usize, saw_count: usize) -> Vec<i32> {
    let mut vals = random(len);
    if len == 0 {
        return vals;
    }

    let run_len = (len / saw_count.max(1)).max(1);
    let directions = random_uniform(len.div_ceil(run_len), 0..=1);

    for (run, descending) in vals.chunks_mut(run_len).zip(directions) {
        if descending == 1 {
            run.sort_unstable_by_key(|&e| Reverse(e));
        } else {
            run.sort_unstable();
        }
    }

    vals
}

/// Rises to a peak in the middle and falls off again.
pub fn pipe_organ(len: usize) -> Vec<i32> {
    let mut vals = random(len);

    let (rising, falling) = vals.split_at_mut(len / 2);
    rising.sort_unstable();
    falling.sort_unstable_by_key(|&e| Reverse(e));

    vals
}

/// A word of `len` random lowercase letters drawn from the first `alphabet_len` letters.
///
/// Small alphabets make accidental palindromes likely, which is useful for short lengths.
pub fn random_word(len: usize, alphabet_len: u8) -> String {
    let alphabet = Uniform::from(b'a'..b'a' + alphabet_len.clamp(1, 26));

    rng()
        .sample_iter(alphabet)
        .take(len)
        .map(char::from)
        .collect()
}

/// A palindrome of exactly `len` letters, odd lengths get a random middle letter.
pub fn palindrome(len: usize) -> String {
    let half = random_word(len / 2 + len % 2, 26);

    let mirrored = half.chars().rev().skip(len % 2);
    half.chars().chain(mirrored).collect()
}

/// A palindrome of `len` letters with one letter in the first half changed, so it reads
/// differently backwards. Needs `len >= 2`, shorter words can't be anything but palindromes.
pub fn near_palindrome(len: usize) -> String {
    assert!(len >= 2, "no word of len {len} fails to be a palindrome");

    let mut letters = palindrome(len).into_bytes();
    let idx = rng().gen_range(0..len / 2);
    // Rotate within a-z so it can never match the mirrored letter again.
    letters[idx] = b'a' + (letters[idx] - b'a' + 1) % 26;

    letters.into_iter().map(char::from).collect()
}

/// From now on every generator call draws a new seed, so repeated calls differ. Meant for the
/// benches, where a fixed input would let the branch predictor learn it.
///
/// Panics if `OVERRIDE_SEED` is set, the two can't both hold.
pub fn use_random_seed_each_time() {
    assert!(
        env::var_os("OVERRIDE_SEED").is_none(),
        "use_random_seed_each_time conflicts with OVERRIDE_SEED"
    );

    FRESH_SEED_PER_CALL.store(true, Ordering::Relaxed);
}

/// The seed the generators use, fixed for the process unless [`use_random_seed_each_time`] was
/// called.
pub fn random_init_seed() -> u64 {
    if FRESH_SEED_PER_CALL.load(Ordering::Relaxed) {
        return thread_rng().gen();
    }

    *PROCESS_SEED.get_or_init(|| match env::var("OVERRIDE_SEED") {
        Ok(seed) => seed
            .parse()
            .unwrap_or_else(|_| panic!("OVERRIDE_SEED must be a u64, got {seed:?}")),
        Err(_) => thread_rng().gen(),
    })
}

fn rng() -> StdRng {
    StdRng::seed_from_u64(random_init_seed())
}
