//! Property-based tests for email validation.
