//! Property-based tests for evaluation guarantees
