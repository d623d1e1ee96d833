//! Property-based tests checked against `num-bigint`.
