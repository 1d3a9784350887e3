//! Renderer module
//!
//! Renders a Report to different output formats: html, md, json, jsonl, text

use crate::core::model::Report;
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Html,
    Markdown,
    Json,
    Jsonl,
    Text,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "html" | "htm" => Ok(OutputFormat::Html),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "json" => Ok(OutputFormat::Json),
            "jsonl" => Ok(OutputFormat::Jsonl),
            "text" | "txt" | "tsv" => Ok(OutputFormat::Text),
            _ => Err(format!("Unknown format: {}", s)),
        }
    }
}

/// Render configuration combining format and options
#[derive(Debug, Clone, Copy, Default)]
pub struct RenderConfig {
    pub format: OutputFormat,
    pub pretty: bool,
}

impl RenderConfig {
    /// Create a new render config with default options
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    /// Create a new render config with pretty option
    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for word count reports
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    #[allow(dead_code)]
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    /// Create a new renderer with render config
    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a report to a string
    ///
    /// Only the JSON formats can fail, when serialization fails.
    pub fn render(&self, report: &Report) -> serde_json::Result<String> {
        match self.config.format {
            OutputFormat::Html => Ok(self.render_html(report)),
            OutputFormat::Markdown => Ok(self.render_markdown(report)),
            OutputFormat::Json => self.render_json(report),
            OutputFormat::Jsonl => self.render_jsonl(report),
            OutputFormat::Text => Ok(self.render_text(report)),
        }
    }

    /// Render to a writer
    pub fn render_to<W: Write>(&self, report: &Report, mut writer: W) -> std::io::Result<()> {
        let output = self.render(report).map_err(std::io::Error::other)?;
        writer.write_all(output.as_bytes())?;
        writer.flush()
    }

    /// Render as an HTML page with a two-column table
    fn render_html(&self, report: &Report) -> String {
        let title = format!("Words Counted in {}", escape_html(&report.source));
        let mut output = String::new();

        output.push_str("<html> <head>\n");
        output.push_str(&format!("<title>{}</title>\n", title));
        output.push_str("</head>\n<body>\n");
        output.push_str(&format!("<h2>{}</h2>\n", title));
        output.push_str("<table border=\"1\">\n");
        output.push_str("<tr>\n<th>Words</th>\n<th>Counts</th>\n</tr>\n");

        for row in &report.rows {
            output.push_str(&format!(
                "<tr>\n<td>{}</td>\n<td>{}</td>\n</tr>\n",
                escape_html(&row.word),
                row.count
            ));
        }

        output.push_str("</table>\n</body>\n</html>\n");
        output
    }

    /// Render as Markdown
    fn render_markdown(&self, report: &Report) -> String {
        let mut output = String::new();

        output.push_str(&format!("## Words Counted in `{}`\n\n", report.source));
        output.push_str(&format!(
            "{} words, {} distinct\n\n",
            report.total_words, report.distinct_words
        ));
        output.push_str("| Word | Count |\n");
        output.push_str("|------|------:|\n");
        for row in &report.rows {
            output.push_str(&format!("| {} | {} |\n", escape_markdown(&row.word), row.count));
        }

        output
    }

    /// Render the whole report as one JSON document
    fn render_json(&self, report: &Report) -> serde_json::Result<String> {
        let mut output = if self.config.pretty {
            serde_json::to_string_pretty(report)?
        } else {
            serde_json::to_string(report)?
        };
        output.push('\n');
        Ok(output)
    }

    /// Render as JSON Lines (one row object per line)
    fn render_jsonl(&self, report: &Report) -> serde_json::Result<String> {
        let lines = report
            .rows
            .iter()
            .map(|row| {
                let line = if self.config.pretty {
                    serde_json::to_string_pretty(row)?
                } else {
                    serde_json::to_string(row)?
                };
                Ok(line + "\n")
            })
            .collect::<serde_json::Result<Vec<_>>>()?;
        Ok(lines.join(if self.config.pretty { "\n" } else { "" }))
    }

    /// Render as tab-separated `word<TAB>count` lines
    fn render_text(&self, report: &Report) -> String {
        report
            .rows
            .iter()
            .map(|row| format!("{}\t{}\n", row.word, row.count))
            .collect()
    }
}

/// Escape the characters HTML treats specially
pub fn escape_html(s: &str) -> String {
    let mut escaped = String::with_capacity(s.len());
    for c in s.chars() {
        match c {
            '&' => escaped.push_str("&amp;"),
            '<' => escaped.push_str("&lt;"),
            '>' => escaped.push_str("&gt;"),
            '"' => escaped.push_str("&quot;"),
            '\'' => escaped.push_str("&#39;"),
            _ => escaped.push(c),
        }
    }
    escaped
}

fn escape_markdown(s: &str) -> String {
    s.replace('|', "\\|")
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::core::model::Report;
    use crate::core::table::FrequencyTable;

    fn sample_report() -> Report {
        let table: FrequencyTable = ["The", "cat", "sat", "The", "dog", "ran"]
            .into_iter()
            .collect();
        Report::assemble("story.txt", &table).unwrap()
    }

    fn empty_report() -> Report {
        Report::assemble("empty.txt", &FrequencyTable::new()).unwrap()
    }

    #[test]
    fn test_render_html() {
        let output = Renderer::new(OutputFormat::Html).render(&sample_report()).unwrap();

        assert!(output.starts_with("<html> <head>\n"));
        assert!(output.contains("<title>Words Counted in story.txt</title>"));
        assert!(output.contains("<h2>Words Counted in story.txt</h2>"));
        assert!(output.contains("<th>Words</th>\n<th>Counts</th>"));
        assert!(output.contains("<td>The</td>\n<td>2</td>"));
        assert!(output.trim_end().ends_with("</html>"));

        let cat = output.find("<td>cat</td>").unwrap();
        let dog = output.find("<td>dog</td>").unwrap();
        let the = output.find("<td>The</td>").unwrap();
        assert!(cat < dog && dog < the);
    }

    #[test]
    fn test_render_html_empty_has_no_rows() {
        let output = Renderer::new(OutputFormat::Html).render(&empty_report()).unwrap();
        assert!(output.contains("<th>Words</th>"));
        assert!(!output.contains("<td>"));
        assert!(output.contains("</table>"));
    }

    #[test]
    fn test_render_html_escapes_source() {
        let report = Report::assemble("<a&b>.txt", &FrequencyTable::new()).unwrap();
        let output = Renderer::new(OutputFormat::Html).render(&report).unwrap();
        assert!(output.contains("Words Counted in &lt;a&amp;b&gt;.txt"));
    }

    #[test]
    fn test_render_markdown() {
        let output = Renderer::new(OutputFormat::Markdown).render(&sample_report()).unwrap();
        assert!(output.contains("## Words Counted in `story.txt`"));
        assert!(output.contains("6 words, 5 distinct"));
        assert!(output.contains("| cat | 1 |"));
        assert!(output.contains("| The | 2 |"));
    }

    #[test]
    fn test_render_json() {
        let output = Renderer::new(OutputFormat::Json).render(&sample_report()).unwrap();
        let value: serde_json::Value = serde_json::from_str(&output).unwrap();
        assert_eq!(value["total_words"], 6);
        assert_eq!(value["rows"][0]["word"], "cat");
        assert_eq!(value["rows"][4]["count"], 2);
    }

    #[test]
    fn test_render_json_pretty() {
        let config = RenderConfig::with_pretty(OutputFormat::Json, true);
        let output = Renderer::with_config(config).render(&sample_report()).unwrap();
        assert!(output.contains("  \"source\""));
    }

    #[test]
    fn test_render_jsonl() {
        let output = Renderer::new(OutputFormat::Jsonl).render(&sample_report()).unwrap();
        let lines: Vec<_> = output.lines().collect();
        assert_eq!(lines.len(), 5);
        assert_eq!(lines[0], r#"{"word":"cat","count":1}"#);
        assert_eq!(lines[4], r#"{"word":"The","count":2}"#);
    }

    #[test]
    fn test_render_jsonl_empty() {
        let output = Renderer::new(OutputFormat::Jsonl).render(&empty_report()).unwrap();
        assert!(output.is_empty());
    }

    #[test]
    fn test_render_text() {
        let output = Renderer::new(OutputFormat::Text).render(&sample_report()).unwrap();
        assert_eq!(output, "cat\t1\ndog\t1\nran\t1\nsat\t1\nThe\t2\n");
    }

    #[test]
    fn test_render_json_formats_succeed() {
        for format in [OutputFormat::Json, OutputFormat::Jsonl] {
            for pretty in [false, true] {
                let config = RenderConfig::with_pretty(format, pretty);
                assert!(Renderer::with_config(config).render(&sample_report()).is_ok());
            }
        }
    }

    #[test]
    fn test_render_to_writer() {
        let renderer = Renderer::new(OutputFormat::Text);
        let mut buffer = Vec::new();
        renderer.render_to(&sample_report(), &mut buffer).unwrap();
        assert!(String::from_utf8(buffer).unwrap().starts_with("cat\t1"));
    }

    #[test]
    fn test_output_format_parse() {
        assert_eq!("html".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("md".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
        assert_eq!("json".parse::<OutputFormat>().unwrap(), OutputFormat::Json);
        assert_eq!("jsonl".parse::<OutputFormat>().unwrap(), OutputFormat::Jsonl);
        assert_eq!("text".parse::<OutputFormat>().unwrap(), OutputFormat::Text);
    }

    #[test]
    fn test_output_format_parse_case_insensitive() {
        assert_eq!("HTML".parse::<OutputFormat>().unwrap(), OutputFormat::Html);
        assert_eq!("Markdown".parse::<OutputFormat>().unwrap(), OutputFormat::Markdown);
    }

    #[test]
    fn test_output_format_parse_invalid() {
        let result = "yaml".parse::<OutputFormat>();
        assert!(result.unwrap_err().contains("Unknown format"));
    }

    #[test]
    fn test_render_config_default() {
        let config = RenderConfig::default();
        assert_eq!(config.format, OutputFormat::Html);
        assert!(!config.pretty);
    }

    #[test]
    fn test_escape_html() {
        assert_eq!(escape_html(r#"a<b>&"c'"#), "a&lt;b&gt;&amp;&quot;c&#39;");
        assert_eq!(escape_html("plain"), "plain");
    }

    #[test]
    fn test_escape_markdown() {
        assert_eq!(escape_markdown("a|b"), "a\\|b");
    }
}
