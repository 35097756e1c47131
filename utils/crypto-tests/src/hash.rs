use crypto_digest::Digest;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

pub struct Test {
    pub name: &'static str,
    pub input: &'static [u8],
    pub output: &'static [u8],
}

#[macro_export]
macro_rules! new_tests {
    ( $( $name:expr ),*  ) => {
        [$(
            Test {
                name: $name,
                input: include_bytes!(concat!("data/", $name, ".input")),
                output: include_bytes!(concat!("data/", $name, ".output")),
            },
        )*]
    };
}

/// Seed shared by the randomized helpers so failures are reproducible.
const SEED: u64 = 0x5a82_7999_6ed9_eba1;

pub fn main_test<D: Digest>(tests: &[Test]) {
    // Test that it works when accepting the message all at once
    for t in tests.iter() {
        let mut sh = D::new();
        sh.input(t.input);

        let out = sh.result();

        assert_eq!(out[..], t.output[..], "vector {}", t.name);
    }

    // Test that it works when accepting the message in pieces
    for t in tests.iter() {
        let mut sh = D::new();
        let len = t.input.len();
        let mut left = len;
        while left > 0 {
            let take = (left + 1) / 2;
            sh.input(&t.input[len - left..take + len - left]);
            left -= take;
        }

        let out = sh.result();

        assert_eq!(out[..], t.output[..], "vector {} (pieces)", t.name);
    }

    // Test that a single instance can be reused across messages
    let mut sh = D::new();
    for t in tests.iter() {
        sh.input(t.input);
        let out = sh.result();
        assert_eq!(out[..], t.output[..], "vector {} (reused)", t.name);
        sh.reset();
    }
}

pub fn one_million_a<D: Digest>(expected: &[u8]) {
    let mut sh = D::new();
    for _ in 0..50000 {
        sh.input(&[b'a'; 10]);
    }
    sh.input(&[b'a'; 500000]);
    let out = sh.result();
    assert_eq!(out[..], expected[..]);
}

/// Feed 1,000,000 'a's into the digest with varying input sizes and check that
/// the result is correct.
pub fn one_million_random<D: Digest>(blocksize: usize, expected: &str) {
    let total_size = 1000000;
    let buffer = vec![b'a'; blocksize * 2];
    let mut rng = StdRng::seed_from_u64(SEED);
    let mut count = 0;

    let mut digest = D::new();
    while count < total_size {
        let next = rng.random_range(0..=2 * blocksize);
        let size = next.min(total_size - count);
        digest.input(&buffer[..size]);
        count += size;
    }

    assert_eq!(hex::encode(digest.result()), expected);
}

/// Check that splitting `input` into non-empty chunks never changes the
/// digest: every single split point, then `rounds` random partitions.
pub fn partition_test<D: Digest>(input: &[u8], rounds: usize) {
    let expected = D::digest(input);

    for mid in 1..input.len() {
        let mut sh = D::new();
        sh.input(&input[..mid]);
        sh.input(&input[mid..]);
        assert_eq!(sh.result(), expected, "split at {}", mid);
    }

    let mut rng = StdRng::seed_from_u64(SEED ^ input.len() as u64);
    for _ in 0..rounds {
        let mut sh = D::new();
        let mut rest = input;
        while !rest.is_empty() {
            let take = rng.random_range(1..=rest.len());
            let (chunk, tail) = rest.split_at(take);
            sh.input(chunk);
            rest = tail;
        }
        assert_eq!(sh.result(), expected);
    }
}
