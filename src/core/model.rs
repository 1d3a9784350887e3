//! Report model
//!
//! Every output format renders from this one structure. Rows are already
//! in report order when the model is built.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::core::error::CoreError;
use crate::core::sorter::sorted_words;
use crate::core::table::FrequencyTable;

/// One report row
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WordCount {
    pub word: String,
    pub count: usize,
}

impl WordCount {
    pub fn new(word: impl Into<String>, count: usize) -> Self {
        Self {
            word: word.into(),
            count,
        }
    }
}

/// Metadata about the input that produced a report
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct Meta {
    /// Input size in bytes
    #[serde(skip_serializing_if = "Option::is_none")]
    pub size: Option<u64>,

    /// Number of lines read
    pub lines: usize,

    /// Content hash (XXH3)
    #[serde(skip_serializing_if = "Option::is_none")]
    pub hash: Option<String>,

    /// Whether invalid UTF-8 was replaced while reading
    #[serde(default)]
    pub lossy: bool,

    /// When the report was produced
    #[serde(skip_serializing_if = "Option::is_none")]
    pub generated_at: Option<DateTime<Utc>>,
}

/// Sorted word frequency report
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Report {
    /// Name of the input, as shown in titles
    pub source: String,

    /// Number of word tokens counted
    pub total_words: usize,

    /// Number of distinct words
    pub distinct_words: usize,

    pub rows: Vec<WordCount>,

    pub meta: Meta,
}

impl Report {
    /// Walk the sorted distinct words and look up each count.
    pub fn assemble(source: impl Into<String>, table: &FrequencyTable) -> Result<Self, CoreError> {
        let rows = sorted_words(table.keys())
            .into_iter()
            .map(|word| table.value(word).map(|count| WordCount::new(word, count)))
            .collect::<Result<Vec<_>, CoreError>>()?;

        Ok(Self {
            source: source.into(),
            total_words: table.total(),
            distinct_words: table.len(),
            rows,
            meta: Meta::default(),
        })
    }

    /// Set metadata
    pub fn with_meta(mut self, meta: Meta) -> Self {
        self.meta = meta;
        self
    }

    #[allow(dead_code)]
    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }
}
