use byte_tools::read_u32v_be;

use crate::consts::{BLOCK_LEN, K, STATE_LEN};

/// Number of words in the expanded message schedule.
const SCHEDULE_LEN: usize = 80;

#[inline(always)]
fn ch(b: u32, c: u32, d: u32) -> u32 { (b & c) | (!b & d) }

#[inline(always)]
fn parity(b: u32, c: u32, d: u32) -> u32 { b ^ c ^ d }

#[inline(always)]
fn maj(b: u32, c: u32, d: u32) -> u32 { (b & c) | (b & d) | (c & d) }

/// Expand 16 message words into the 80-word schedule.
fn schedule(block: &[u32; BLOCK_LEN]) -> [u32; SCHEDULE_LEN] {
    let mut w = [0u32; SCHEDULE_LEN];
    w[..BLOCK_LEN].copy_from_slice(block);
    for t in BLOCK_LEN..SCHEDULE_LEN {
        w[t] = (w[t - 3] ^ w[t - 8] ^ w[t - 14] ^ w[t - 16]).rotate_left(1);
    }
    w
}

/// Process a block with the SHA-1 algorithm, the block given as 16
/// big-endian words.
pub fn sha1_digest_block_u32(state: &mut [u32; STATE_LEN], block: &[u32; BLOCK_LEN]) {
    let w = schedule(block);

    let mut a = state[0];
    let mut b = state[1];
    let mut c = state[2];
    let mut d = state[3];
    let mut e = state[4];

    macro_rules! rounds {
        ($range:expr, $f:ident, $k:expr) => {
            for t in $range {
                let temp = a.rotate_left(5)
                    .wrapping_add($f(b, c, d))
                    .wrapping_add(e)
                    .wrapping_add(w[t])
                    .wrapping_add($k);
                e = d;
                d = c;
                c = b.rotate_left(30);
                b = a;
                a = temp;
            }
        };
    }

    rounds!(0..20, ch, K[0]);
    rounds!(20..40, parity, K[1]);
    rounds!(40..60, maj, K[2]);
    rounds!(60..80, parity, K[3]);

    state[0] = state[0].wrapping_add(a);
    state[1] = state[1].wrapping_add(b);
    state[2] = state[2].wrapping_add(c);
    state[3] = state[3].wrapping_add(d);
    state[4] = state[4].wrapping_add(e);
}

/// Process a 64-byte block with the SHA-1 algorithm.
pub fn sha1_digest_block(state: &mut [u32; STATE_LEN], block: &[u8]) {
    assert_eq!(block.len(), BLOCK_LEN * 4);
    let mut words = [0u32; BLOCK_LEN];
    read_u32v_be(&mut words, block);
    sha1_digest_block_u32(state, &words);
}

#[cfg(test)]
mod tests {
    use super::{schedule, sha1_digest_block, sha1_digest_block_u32};
    use crate::consts::{BLOCK_LEN, H};

    fn abc_block() -> [u8; 64] {
        let mut block = [0u8; 64];
        block[..3].copy_from_slice(b"abc");
        block[3] = 0x80;
        block[63] = 24;
        block
    }

    #[test]
    fn single_padded_block() {
        let mut state = H;
        sha1_digest_block(&mut state, &abc_block());
        assert_eq!(state, [0xa9993e36, 0x4706816a, 0xba3e2571, 0x7850c26c, 0x9cd0d89d]);
    }

    #[test]
    fn byte_and_word_entry_points_agree() {
        let block = abc_block();
        let mut words = [0u32; BLOCK_LEN];
        for (i, w) in words.iter_mut().enumerate() {
            *w = u32::from_be_bytes([block[4 * i], block[4 * i + 1],
                                     block[4 * i + 2], block[4 * i + 3]]);
        }
        let mut s1 = H;
        let mut s2 = H;
        sha1_digest_block(&mut s1, &block);
        sha1_digest_block_u32(&mut s2, &words);
        assert_eq!(s1, s2);
    }

    #[test]
    fn schedule_rotates_instead_of_shifting() {
        let mut block = [0u32; BLOCK_LEN];
        block[0] = 0x8000_0000;
        let w = schedule(&block);
        // W[16] = rotl(W[0], 1) carries the top bit around to bit 0.
        assert_eq!(w[16], 1);
        assert_eq!(&w[..BLOCK_LEN], &block[..]);
    }

    #[test]
    fn blocks_are_order_dependent() {
        let first = abc_block();
        let second = [0x5au8; 64];

        let mut forward = H;
        sha1_digest_block(&mut forward, &first);
        sha1_digest_block(&mut forward, &second);

        let mut backward = H;
        sha1_digest_block(&mut backward, &second);
        sha1_digest_block(&mut backward, &first);

        assert_ne!(forward, backward);
    }

    #[test]
    #[should_panic]
    fn short_block_is_rejected() {
        let mut state = H;
        sha1_digest_block(&mut state, &[0u8; 63]);
    }
}
