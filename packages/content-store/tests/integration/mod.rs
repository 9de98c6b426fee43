//! Integration test suite for the content store.
//!
//! 1. Record lifecycle through the public API
//! 2. Concurrent access

pub mod concurrency_tests;
pub mod lifecycle_tests;
