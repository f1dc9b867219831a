//! Test fixtures shared by unit tests.
//!
//! # Example
//!
//! ```rust,ignore
//! use crate::test_support::{provider_with_javacopts, sample_provider};
//!
//! #[test]
//! fn test_example() {
//!     let provider = provider_with_javacopts(["-source", "8"]);
//!     // Bind it to an AnalysisContext and build a view...
//! }
//! ```

pub mod fixtures;

// Re-export fixtures for convenience
pub use fixtures::*;
