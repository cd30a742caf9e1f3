//! Board module tests.
//!
//! - `movegen.rs` - Knight-move generation and first placement
//! - `edge_cases.rs` - Win/loss predicates, forecasting, illegal moves
//! - `proptest.rs` - Property-based tests
