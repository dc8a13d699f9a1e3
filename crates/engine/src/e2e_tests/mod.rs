//! End-to-end ledger tests.
//!
//! These tests drive a complete `App` over the in-memory store, so every
//! store call is real and the persisted records can be inspected afterwards.
//!
//! ```bash
//! cargo test -p questledger-engine --lib e2e_tests
//! ```

mod e2e_helpers;

pub use e2e_helpers::*;
