#![no_std]
use byte_tools::zero;
use generic_array::{ArrayLength, GenericArray};
use generic_array::typenum::{Unsigned, U64};

/// A `FixedBuffer`, likes its name implies, is a fixed size buffer. When the
/// buffer becomes full, it must be processed. The input() method takes care of
/// processing and then clearing the buffer automatically. However, other
/// methods do not and require the caller to process the buffer. Any method that
/// modifies the buffer directly or provides the caller with bytes that can be
/// modified results in those bytes being marked as used by the buffer.
///
/// The position is always strictly less than the buffer size between calls.
pub struct FixedBuffer<N: ArrayLength<u8>> {
    buffer: GenericArray<u8, N>,
    buffer_idx: usize,
}

/// A fixed size buffer of 64 bytes, the block size of the MD4 family.
pub type FixedBuffer64 = FixedBuffer<U64>;

impl<N: ArrayLength<u8>> FixedBuffer<N> {
    /// Create a new, empty buffer.
    pub fn new() -> Self {
        FixedBuffer {
            buffer: GenericArray::default(),
            buffer_idx: 0,
        }
    }

    /// Input a slice of bytes. Every time the buffer becomes full it is
    /// processed with the provided function and then cleared. Whole blocks
    /// are handed to `func` straight from `input` without being copied.
    pub fn input<F: FnMut(&[u8])>(&mut self, input: &[u8], mut func: F) {
        let size = self.size();
        let mut input = input;

        // If there is already data in the buffer, copy as much as we can
        // into it and process the data if the buffer becomes full.
        if self.buffer_idx != 0 {
            let buffer_remaining = size - self.buffer_idx;
            if input.len() < buffer_remaining {
                let end = self.buffer_idx + input.len();
                self.buffer[self.buffer_idx..end].copy_from_slice(input);
                self.buffer_idx = end;
                return;
            }
            let (head, tail) = input.split_at(buffer_remaining);
            self.buffer[self.buffer_idx..].copy_from_slice(head);
            self.buffer_idx = 0;
            func(&self.buffer[..]);
            input = tail;
        }

        let mut blocks = input.chunks_exact(size);
        for block in &mut blocks {
            func(block);
        }

        // Less than a block is left and the buffer is empty.
        let rest = blocks.remainder();
        self.buffer[..rest.len()].copy_from_slice(rest);
        self.buffer_idx = rest.len();
    }

    /// Reset the buffer, wiping any bytes it still holds.
    pub fn reset(&mut self) {
        zero(&mut self.buffer[..]);
        self.buffer_idx = 0;
    }

    /// Zero the buffer up until the specified index. The buffer position
    /// currently must not be greater than that index.
    pub fn zero_until(&mut self, idx: usize) {
        assert!(idx >= self.buffer_idx && idx <= self.size());
        zero(&mut self.buffer[self.buffer_idx..idx]);
        self.buffer_idx = idx;
    }

    /// Get a slice of the buffer of the specified size. There must be at least
    /// that many bytes remaining in the buffer.
    pub fn next(&mut self, len: usize) -> &mut [u8] {
        assert!(len <= self.remaining());
        self.buffer_idx += len;
        &mut self.buffer[self.buffer_idx - len..self.buffer_idx]
    }

    /// Get the current buffer. The buffer must already be full. This clears the
    /// buffer position as well.
    pub fn full_buffer(&mut self) -> &[u8] {
        assert_eq!(self.buffer_idx, self.size());
        self.buffer_idx = 0;
        &self.buffer[..]
    }

    /// Get the current position of the buffer.
    pub fn position(&self) -> usize { self.buffer_idx }

    /// Get the number of bytes remaining in the buffer until it is full.
    pub fn remaining(&self) -> usize { self.size() - self.buffer_idx }

    /// Get the size of the buffer
    pub fn size(&self) -> usize { N::to_usize() }
}

impl<N: ArrayLength<u8>> Clone for FixedBuffer<N> {
    fn clone(&self) -> Self {
        FixedBuffer {
            buffer: self.buffer.clone(),
            buffer_idx: self.buffer_idx,
        }
    }
}

impl<N: ArrayLength<u8>> Default for FixedBuffer<N> {
    fn default() -> Self { Self::new() }
}

/// The `StandardPadding` trait adds a method useful for various hash algorithms
/// to a `FixedBuffer` struct.
pub trait StandardPadding {
    /// Add standard padding to the buffer. The buffer must not be full when
    /// this method is called and is guaranteed to have exactly rem remaining
    /// bytes when it returns. If there are not at least rem bytes available,
    /// the buffer will be zero padded, processed, cleared, and then filled with
    /// zeros again until only rem bytes are remaining.
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, func: F);
}

impl<N: ArrayLength<u8>> StandardPadding for FixedBuffer<N> {
    fn standard_padding<F: FnMut(&[u8])>(&mut self, rem: usize, mut func: F) {
        let size = self.size();

        self.next(1)[0] = 0x80;

        if self.remaining() < rem {
            self.zero_until(size);
            func(self.full_buffer());
        }

        self.zero_until(size - rem);
    }
}
