//! # Policyd Test Suite
//!
//! Unified test crate containing:
//!
//! ## Structure
//!
//! ```text
//! tests/src/
//! └── integration/      # Mapper + rule validator end-to-end
//!     ├── flows.rs      # Decode/encode flows against the shipped rules
//!     └── properties.rs # Round-trip and ordering properties (proptest)
//! ```
//!
//! ## Running Tests
//!
//! ```bash
//! # All tests
//! cargo test -p policyd-tests
//!
//! # By category
//! cargo test -p policyd-tests integration::
//! ```

#![allow(unused_imports)]
#![allow(dead_code)]
