/// Number of 32-bit words in the SHA-1 state.
pub const STATE_LEN: usize = 5;

/// Number of 32-bit words in one message block.
pub const BLOCK_LEN: usize = 16;

/// Initial hash value.
pub const H: [u32; STATE_LEN] = [
    0x67452301,
    0xefcdab89,
    0x98badcfe,
    0x10325476,
    0xc3d2e1f0,
];

/// Round constants, one per 20-round phase.
pub const K: [u32; 4] = [0x5a827999, 0x6ed9eba1, 0x8f1bbcdc, 0xca62c1d6];
