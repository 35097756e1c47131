//! Shared test helpers for the digest implementations in this workspace.
//!
//! Test vectors live next to the tests that use them, as pairs of
//! `data/<name>.input` and `data/<name>.output` files, and are loaded with
//! the `new_tests!` macro.

pub mod hash;
