//! Count flow - read a file, tally its words, write the sorted report

use anyhow::{Context, Result};
use chrono::Utc;
use std::fs::File;
use std::io::{self, BufWriter};
use std::path::Path;

use crate::core::file_reader::{read_source, ReadConfig};
use crate::core::model::{Meta, Report};
use crate::core::render::{RenderConfig, Renderer};
use crate::core::separators::SeparatorSet;
use crate::core::table::FrequencyTable;
use crate::core::tokenizer::words;

/// Lines per parallel work unit
#[cfg(feature = "parallel")]
const CHUNK_LINES: usize = 1024;

/// Record every word token of `line` in `table`.
pub fn count_line(line: &str, separators: &SeparatorSet, table: &mut FrequencyTable) {
    for word in words(line, separators) {
        table.record_occurrence(word);
    }
}

/// Tally the words of a sequence of lines.
pub fn count_lines<'a>(
    lines: impl IntoIterator<Item = &'a str>,
    separators: &SeparatorSet,
) -> FrequencyTable {
    let mut table = FrequencyTable::new();
    for line in lines {
        count_line(line, separators, &mut table);
    }
    table
}

/// Tally lines in parallel chunks.
///
/// Each chunk gets its own table; the tables are merged by one writer in
/// chunk order, so the result equals [`count_lines`] exactly.
#[cfg(feature = "parallel")]
pub fn count_lines_parallel(lines: &[&str], separators: &SeparatorSet) -> FrequencyTable {
    use rayon::prelude::*;

    lines
        .par_chunks(CHUNK_LINES)
        .map(|chunk| count_lines(chunk.iter().copied(), separators))
        .collect::<Vec<_>>()
        .into_iter()
        .fold(FrequencyTable::new(), |mut merged, table| {
            merged.merge(table);
            merged
        })
}

#[cfg(feature = "parallel")]
fn tally(lines: &[&str], separators: &SeparatorSet) -> FrequencyTable {
    count_lines_parallel(lines, separators)
}

#[cfg(not(feature = "parallel"))]
fn tally(lines: &[&str], separators: &SeparatorSet) -> FrequencyTable {
    count_lines(lines.iter().copied(), separators)
}

/// Build the report for one input file.
pub fn build_report(
    input: &Path,
    separators: &SeparatorSet,
    read_config: &ReadConfig,
) -> Result<Report> {
    let source = read_source(input, read_config)?;
    let lines: Vec<&str> = source.lines().collect();
    let table = tally(&lines, separators);

    log::info!(
        "{}: {} lines, {} words, {} distinct",
        input.display(),
        lines.len(),
        table.total(),
        table.len()
    );

    let meta = Meta {
        size: Some(source.size),
        lines: lines.len(),
        hash: Some(source.hash.clone()),
        lossy: source.lossy,
        generated_at: Some(Utc::now()),
    };

    let report = Report::assemble(input.display().to_string(), &table)?.with_meta(meta);
    Ok(report)
}

/// Run the count command
///
/// `output` of `None` or `-` writes to stdout.
pub fn run_count(
    input: &Path,
    output: Option<&Path>,
    separators: &SeparatorSet,
    read_config: ReadConfig,
    config: RenderConfig,
) -> Result<()> {
    let report = build_report(input, separators, &read_config)?;
    let renderer = Renderer::with_config(config);

    match output {
        Some(path) if path != Path::new("-") => {
            let file = File::create(path)
                .with_context(|| format!("Failed to create output file: {:?}", path))?;
            renderer
                .render_to(&report, BufWriter::new(file))
                .with_context(|| format!("Failed to write report to {:?}", path))?;
            log::info!("wrote {} rows to {}", report.rows.len(), path.display());
        }
        _ => {
            let stdout = io::stdout();
            renderer
                .render_to(&report, stdout.lock())
                .context("Failed to write report to stdout")?;
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::WordCount;
    use crate::core::render::OutputFormat;
    use std::fs;
    use tempfile::tempdir;

    #[test]
    fn test_count_line_scenario() {
        let seps = SeparatorSet::default();
        let mut table = FrequencyTable::new();
        count_line("The cat sat. The dog ran!", &seps, &mut table);

        let pairs: Vec<_> = table.iter().collect();
        assert_eq!(
            pairs,
            vec![("The", 2), ("cat", 1), ("sat", 1), ("dog", 1), ("ran", 1)]
        );
    }

    #[test]
    fn test_count_digits_as_separators() {
        let seps = SeparatorSet::default();
        let table = count_lines(["a1 a2"], &seps);
        assert_eq!(table.len(), 1);
        assert_eq!(table.value("a"), Ok(2));
    }

    #[test]
    fn test_count_conservation() {
        let seps = SeparatorSet::default();
        let lines = [
            "The cat sat. The dog ran!",
            "",
            "   ",
            "2024: a year; a Year!",
            "unicode café naïve",
        ];
        let table = count_lines(lines, &seps);
        let word_tokens: usize = lines.iter().map(|l| words(l, &seps).count()).sum();
        assert_eq!(table.total(), word_tokens);
    }

    #[test]
    fn test_count_lines_spans_lines() {
        let seps = SeparatorSet::default();
        let table = count_lines(["hello world", "", "Hello world"], &seps);
        assert_eq!(table.value("world"), Ok(2));
        assert_eq!(table.value("hello"), Ok(1));
        assert_eq!(table.value("Hello"), Ok(1));
        let keys: Vec<_> = table.keys().collect();
        assert_eq!(keys, vec!["hello", "world", "Hello"]);
    }

    #[test]
    fn test_build_report() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("story.txt");
        fs::write(&input, "The cat sat.\nThe dog ran!\n").unwrap();

        let report = build_report(&input, &SeparatorSet::default(), &ReadConfig::default())
            .unwrap();
        assert_eq!(
            report.rows,
            vec![
                WordCount::new("cat", 1),
                WordCount::new("dog", 1),
                WordCount::new("ran", 1),
                WordCount::new("sat", 1),
                WordCount::new("The", 2),
            ]
        );
        assert_eq!(report.meta.lines, 2);
        assert_eq!(report.meta.size, Some(26));
        assert!(report.meta.generated_at.is_some());
    }

    #[test]
    fn test_build_report_cr_line_endings() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("cr.txt");
        fs::write(&input, "cat\rdog\r").unwrap();

        let report = build_report(&input, &SeparatorSet::default(), &ReadConfig::default())
            .unwrap();
        assert_eq!(
            report.rows,
            vec![WordCount::new("cat", 1), WordCount::new("dog", 1)]
        );
        assert_eq!(report.meta.lines, 2);
    }

    #[test]
    fn test_build_report_empty_file() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("empty.txt");
        fs::write(&input, "").unwrap();

        let report = build_report(&input, &SeparatorSet::default(), &ReadConfig::default())
            .unwrap();
        assert!(report.is_empty());
        assert_eq!(report.meta.lines, 0);
    }

    #[test]
    fn test_run_count_writes_file() {
        let temp = tempdir().unwrap();
        let input = temp.path().join("in.txt");
        let output = temp.path().join("out.html");
        fs::write(&input, "b a b").unwrap();

        run_count(
            &input,
            Some(&output),
            &SeparatorSet::default(),
            ReadConfig::default(),
            RenderConfig::new(OutputFormat::Text),
        )
        .unwrap();

        assert_eq!(fs::read_to_string(&output).unwrap(), "a\t1\nb\t2\n");
    }

    #[test]
    fn test_run_count_missing_input() {
        let temp = tempdir().unwrap();
        let result = run_count(
            &temp.path().join("missing.txt"),
            None,
            &SeparatorSet::default(),
            ReadConfig::default(),
            RenderConfig::default(),
        );
        assert!(result.is_err());
    }

    #[cfg(feature = "parallel")]
    #[test]
    fn test_parallel_matches_sequential() {
        let seps = SeparatorSet::default();
        let text: Vec<String> = (0..5000)
            .map(|i| format!("word{} Line {} the The alpha{}", i % 7, i, i % 13))
            .collect();
        let lines: Vec<&str> = text.iter().map(String::as_str).collect();

        let sequential = count_lines(lines.iter().copied(), &seps);
        let parallel = count_lines_parallel(&lines, &seps);
        assert_eq!(parallel, sequential);
    }
}
