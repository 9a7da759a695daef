//! Property-based tests for the record filter.
