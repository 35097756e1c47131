//! An implementation of the SHA-1 cryptographic hash algorithm.
//!
//! First create a `Sha1` object using the `Sha1` constructor, then feed it
//! input using the `input` method, which may be called any number of times.
//!
//! After the entire input has been fed to the hash read the result using
//! the `result` method. Once a result has been taken the object refuses
//! further input until it is `reset`, which also makes it reusable for
//! an independent message.
//!
//! # Usage
//!
//! ```rust
//! use sha1::{Digest, Sha1};
//!
//! let mut hasher = Sha1::new();
//! hasher.input(b"hello ");
//! hasher.input(b"world");
//! let out = hasher.result();
//!
//! assert_eq!(out[..], sha1::digest(b"hello world")[..]);
//! ```
//!
//! The message length is tracked as a 64-bit bit count. Input that would
//! push it past `2^64 - 1` bits is rejected by `try_input` with
//! `DigestError::InputTooLarge` before any state is touched.

#![no_std]
#[cfg(test)]
#[macro_use]
extern crate crypto_tests;
#[cfg(test)]
extern crate std;

use core::fmt;

use byte_tools::{write_u32v_be, write_u64_be};
use crypto_fixed_buffer::{FixedBuffer64, StandardPadding};
use generic_array::GenericArray;
use generic_array::typenum::{U20, U64};
use log::{debug, trace};

pub use crypto_digest::{Digest, DigestError};

mod consts;
pub use consts::{BLOCK_LEN, H, K, STATE_LEN};

mod utils;
pub use utils::{sha1_digest_block, sha1_digest_block_u32};

/// Structure representing the state of a SHA-1 computation
#[derive(Clone)]
pub struct Sha1 {
    h: [u32; STATE_LEN],
    length_bits: u64,
    buffer: FixedBuffer64,
    finalized: bool,
}

impl Sha1 {
    /// Number of message bytes absorbed since the last reset.
    pub fn len(&self) -> u64 { self.length_bits >> 3 }

    /// Whether no message bytes have been absorbed since the last reset.
    pub fn is_empty(&self) -> bool { self.length_bits == 0 }

    /// Whether a result has been taken and the object awaits a reset.
    pub fn is_finalized(&self) -> bool { self.finalized }
}

impl Default for Sha1 {
    fn default() -> Self {
        Sha1 {
            h: H,
            length_bits: 0,
            buffer: FixedBuffer64::new(),
            finalized: false,
        }
    }
}

impl Digest for Sha1 {
    type OutputSize = U20;
    type BlockSize = U64;

    fn try_input(&mut self, input: &[u8]) -> Result<(), DigestError> {
        if self.finalized {
            return Err(DigestError::Finalized);
        }
        let length_bits = (input.len() as u64)
            .checked_mul(8)
            .and_then(|bits| self.length_bits.checked_add(bits))
            .ok_or(DigestError::InputTooLarge)?;

        trace!("sha1: absorbing {} bytes, {} already buffered",
               input.len(), self.buffer.position());

        self.length_bits = length_bits;
        let st_h = &mut self.h;
        self.buffer.input(input, |d: &[u8]| sha1_digest_block(st_h, d));
        Ok(())
    }

    fn try_result(&mut self) -> Result<GenericArray<u8, U20>, DigestError> {
        if self.finalized {
            return Err(DigestError::Finalized);
        }

        let st_h = &mut self.h;
        self.buffer.standard_padding(8, |d: &[u8]| sha1_digest_block(st_h, d));
        write_u64_be(self.buffer.next(8), self.length_bits);
        sha1_digest_block(st_h, self.buffer.full_buffer());

        let mut out = GenericArray::<u8, U20>::default();
        write_u32v_be(&mut out[..], &self.h);

        debug!("sha1: finalized {} byte message in {} blocks",
               self.len(), (self.len() + 8) / 64 + 1);

        self.buffer.reset();
        self.length_bits = 0;
        self.finalized = true;
        Ok(out)
    }

    fn reset(&mut self) {
        trace!("sha1: reset");
        self.h = H;
        self.length_bits = 0;
        self.buffer.reset();
        self.finalized = false;
    }
}

impl fmt::Debug for Sha1 {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        f.debug_struct("Sha1")
            .field("len", &self.len())
            .field("finalized", &self.finalized)
            .finish_non_exhaustive()
    }
}

/// Compute the SHA-1 digest of `data` in one call.
pub fn digest(data: &[u8]) -> GenericArray<u8, U20> {
    <Sha1 as Digest>::digest(data)
}
