//! CLI module - Command-line interface definition and handler

use anyhow::{bail, Context, Result};
use clap::Parser;
use std::io::{self, BufRead, Write};
use std::path::PathBuf;

use crate::core::file_reader::{EncodingStrategy, ReadConfig};
use crate::core::render::{OutputFormat, RenderConfig};
use crate::core::separators::SeparatorSet;

/// wordtally - count the words of a text file and emit a sorted report.
#[derive(Parser, Debug)]
#[command(name = "wordtally")]
#[command(
    author,
    version,
    about,
    long_about = r#"wordtally splits a text file into words and separators, counts every
distinct word (case-sensitive), and writes a report sorted alphabetically
ignoring case.

Separators are space, the punctuation , . ? / ; : " [ ] { } ! and the
symbols @ # $ % ^ & * ( ) _ + - =, plus the digits 0-9. Digits never
count as words.

Output formats:
- html: a page with a Words/Counts table (default)
- md: Markdown table
- json: the whole report as one JSON document
- jsonl: one {"word","count"} object per line
- text: word<TAB>count per line

If INPUT is omitted, the input and output file names are read from stdin.

Examples:
    wordtally story.txt -o story.html
    wordtally story.txt --format text -o -
    wordtally notes.txt --extra-separators "'" --format md
"#
)]
pub struct Cli {
    /// Input text file.
    #[arg(value_name = "INPUT")]
    pub input: Option<PathBuf>,

    /// Output file ("-" for stdout).
    #[arg(
        short,
        long,
        value_name = "FILE",
        long_help = "Write the report to FILE. Use \"-\" or omit to write to stdout.\n\n\
When INPUT is omitted, the output name is prompted for as well."
    )]
    pub output: Option<PathBuf>,

    /// Report format (html/md/json/jsonl/text).
    #[arg(
        short,
        long,
        default_value = "html",
        value_name = "FORMAT",
        env = "WORDTALLY_FORMAT",
        long_help = "Select the report format.\n\n\
Supported values:\n\
- html (default)\n\
- md (markdown)\n\
- json\n\
- jsonl\n\
- text"
    )]
    pub format: String,

    /// Pretty-print JSON/JSONL output with indentation.
    #[arg(long)]
    pub pretty: bool,

    /// Replace the separator alphabet with these characters.
    #[arg(
        long,
        value_name = "CHARS",
        env = "WORDTALLY_SEPARATORS",
        long_help = "Use exactly these characters as separators instead of the default\n\
alphabet. Every other character is part of a word."
    )]
    pub separators: Option<String>,

    /// Add these characters to the separator alphabet.
    #[arg(
        long,
        value_name = "CHARS",
        long_help = "Treat these characters as separators in addition to the alphabet in use.\n\n\
Example: --extra-separators \"'\" splits don't into don and t."
    )]
    pub extra_separators: Option<String>,

    /// How to handle invalid UTF-8 (strict/lossy).
    #[arg(long, default_value = "lossy", value_name = "STRATEGY")]
    pub encoding: String,

    /// Disable colored log output.
    #[arg(long)]
    pub no_color: bool,

    /// Quiet mode (errors only on stderr).
    #[arg(short, long)]
    pub quiet: bool,

    /// Verbose mode (debug diagnostics on stderr).
    #[arg(short, long)]
    pub verbose: bool,
}

impl Cli {
    /// Build the separator set from the alphabet options
    pub fn separator_set(&self) -> SeparatorSet {
        let base = match &self.separators {
            Some(chars) => SeparatorSet::new(chars.chars()),
            None => SeparatorSet::default(),
        };
        match &self.extra_separators {
            Some(extra) => base.with_extra(extra.chars()),
            None => base,
        }
    }
}

/// Ask for a file name on stderr and read one line from stdin
fn prompt_path<R: BufRead, W: Write>(label: &str, input: &mut R, prompt: &mut W) -> Result<PathBuf> {
    writeln!(prompt, "Please enter the name of the {} file: ", label)?;
    prompt.flush()?;

    let mut line = String::new();
    input
        .read_line(&mut line)
        .with_context(|| format!("Failed to read {} file name", label))?;

    let name = line.trim();
    if name.is_empty() {
        bail!("No {} file name given", label);
    }
    Ok(PathBuf::from(name))
}

/// Run the CLI with parsed arguments
pub fn run(cli: Cli) -> Result<()> {
    crate::core::logging::init(cli.quiet, cli.verbose, cli.no_color);

    let format: OutputFormat = cli.format.parse().unwrap_or_else(|err: String| {
        log::warn!("{}; falling back to html", err);
        OutputFormat::default()
    });
    let render_config = RenderConfig::with_pretty(format, cli.pretty);

    let encoding: EncodingStrategy = cli
        .encoding
        .parse()
        .map_err(|err: String| anyhow::anyhow!(err))?;
    let read_config = ReadConfig { encoding };

    let separators = cli.separator_set();
    log::debug!("{} separator characters", separators.len());

    let (input, output) = match cli.input {
        Some(input) => (input, cli.output),
        None => {
            let stdin = io::stdin();
            let mut stdin = stdin.lock();
            let mut stderr = io::stderr();
            let input = prompt_path("input", &mut stdin, &mut stderr)?;
            let output = match cli.output {
                Some(output) => output,
                None => prompt_path("output", &mut stdin, &mut stderr)?,
            };
            (input, Some(output))
        }
    };

    crate::flows::count::run_count(
        &input,
        output.as_deref(),
        &separators,
        read_config,
        render_config,
    )
}
