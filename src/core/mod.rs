//! Core module - Tokenizing, counting, ordering and rendering
//!
//! This module provides:
//! - The separator alphabet and the maximal-run tokenizer
//! - The first-seen-order frequency table
//! - Case-insensitive word ordering
//! - The report model and its renderers
//! - Input reading and stderr logging

pub mod error;
pub mod file_reader;
pub mod logging;
pub mod model;
pub mod render;
pub mod separators;
pub mod sorter;
pub mod table;
pub mod tokenizer;
