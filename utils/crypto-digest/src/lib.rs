#![no_std]
use generic_array::{GenericArray, ArrayLength};
use generic_array::typenum::Unsigned;

/// Errors reported by the fallible digest methods.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum DigestError {
    /// The digest was already finalized and has not been reset since.
    #[error("digest already finalized, call reset() before reusing it")]
    Finalized,
    /// Absorbing the input would overflow the 64-bit message length counter.
    #[error("input too large: message length exceeds 2^64 - 1 bits")]
    InputTooLarge,
}

/// The Digest trait specifies an interface common to digest functions
pub trait Digest : Default {
    type OutputSize: ArrayLength<u8>;
    type BlockSize: ArrayLength<u8>;

    /// Create new digest instance.
    fn new() -> Self {
        Default::default()
    }

    /// Digest input data. This method can be called repeatedly
    /// for use with streaming messages.
    fn try_input(&mut self, input: &[u8]) -> Result<(), DigestError>;

    /// Pad the message, run the final compression and return the digest.
    /// The instance must be reset before it can absorb another message.
    fn try_result(&mut self) -> Result<GenericArray<u8, Self::OutputSize>, DigestError>;

    /// Return the instance to its freshly constructed state.
    fn reset(&mut self);

    /// Like `try_input`, but panics on misuse.
    fn input(&mut self, input: &[u8]) {
        if let Err(e) = self.try_input(input) {
            panic!("{}", e);
        }
    }

    /// Like `try_result`, but panics on misuse.
    fn result(&mut self) -> GenericArray<u8, Self::OutputSize> {
        match self.try_result() {
            Ok(out) => out,
            Err(e) => panic!("{}", e),
        }
    }

    /// Hash `input` in one call.
    fn digest(input: &[u8]) -> GenericArray<u8, Self::OutputSize> {
        let mut d = Self::new();
        d.input(input);
        d.result()
    }

    /// Get the block size in bytes.
    fn block_bytes(&self) -> usize { Self::BlockSize::to_usize() }

    /// Get the block size in bits.
    fn block_bits(&self) -> usize { 8 * Self::BlockSize::to_usize() }

    /// Get the output size in bytes.
    fn output_bytes(&self) -> usize { Self::OutputSize::to_usize() }

    /// Get the output size in bits.
    fn output_bits(&self) -> usize { 8 * Self::OutputSize::to_usize() }
}
