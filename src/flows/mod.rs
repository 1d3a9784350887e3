//! Flows module - End-to-end operations built on the core
//!
//! Provides:
//! - count: read a file, tally words, write the sorted report

pub mod count;
