//! Unit test suite for KYP search.
//!
//! Covers error classification and edge cases across the public API.

#![allow(clippy::unwrap_used)]
#![allow(clippy::expect_used)]

mod unit;
