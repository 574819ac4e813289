//! Renderer module
//!
//! Renders ResultSet to different output formats: jsonl, json, md, raw

use crate::core::model::{Kind, ResultItem, ResultSet};
use std::io::Write;

/// Output format
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum OutputFormat {
    #[default]
    Jsonl,
    Json,
    Markdown,
    Raw,
}

impl std::str::FromStr for OutputFormat {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "jsonl" => Ok(OutputFormat::Jsonl),
            "json" => Ok(OutputFormat::Json),
            "md" | "markdown" => Ok(OutputFormat::Markdown),
            "raw" => Ok(OutputFormat::Raw),
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
    pub fn new(format: OutputFormat) -> Self {
        Self {
            format,
            pretty: false,
        }
    }

    pub fn with_pretty(format: OutputFormat, pretty: bool) -> Self {
        Self { format, pretty }
    }
}

/// Renderer for result sets
pub struct Renderer {
    config: RenderConfig,
}

impl Renderer {
    pub fn new(format: OutputFormat) -> Self {
        Self {
            config: RenderConfig::new(format),
        }
    }

    pub fn with_config(config: RenderConfig) -> Self {
        Self { config }
    }

    /// Render a result set to a string
    pub fn render(&self, result_set: &ResultSet) -> String {
        match self.config.format {
            OutputFormat::Jsonl => self.render_jsonl(result_set),
            OutputFormat::Json => self.render_json(result_set),
            OutputFormat::Markdown => self.render_markdown(result_set),
            OutputFormat::Raw => self.render_raw(result_set),
        }
    }

    /// Render to a writer, followed by a newline when there is any output
    pub fn render_to<W: Write>(&self, result_set: &ResultSet, mut writer: W) -> std::io::Result<()> {
        let output = self.render(result_set);
        if output.is_empty() {
            return Ok(());
        }
        writeln!(writer, "{}", output)
    }

    /// Render as JSON Lines (one JSON object per line)
    fn render_jsonl(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| {
                if self.config.pretty {
                    serde_json::to_string_pretty(item).ok()
                } else {
                    serde_json::to_string(item).ok()
                }
            })
            .collect::<Vec<_>>()
            .join(if self.config.pretty { "\n\n" } else { "\n" })
    }

    /// Render as a single JSON array
    fn render_json(&self, result_set: &ResultSet) -> String {
        if self.config.pretty {
            serde_json::to_string_pretty(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        } else {
            serde_json::to_string(&result_set.items).unwrap_or_else(|_| "[]".to_string())
        }
    }

    /// Render as Markdown
    fn render_markdown(&self, result_set: &ResultSet) -> String {
        let mut output = String::new();

        let mut matches = Vec::new();
        let mut checks = Vec::new();
        let mut lists = Vec::new();

        for item in &result_set.items {
            match item.kind {
                Kind::Match => matches.push(item),
                Kind::Check => checks.push(item),
                Kind::List => lists.push(item),
            }
        }

        if !matches.is_empty() {
            output.push_str("## Matches\n\n");
            for item in matches {
                self.render_match_md(&mut output, item);
            }
            output.push('\n');
        }

        if !checks.is_empty() {
            output.push_str("## Checks\n\n");
            for item in checks {
                let anagram = item
                    .data
                    .as_ref()
                    .and_then(|d| d.get("anagram"))
                    .and_then(|v| v.as_bool())
                    .unwrap_or(false);
                output.push_str(&format!(
                    "- `{}` / `{}`: {}\n",
                    item.pattern.as_deref().unwrap_or_default(),
                    item.word.as_deref().unwrap_or_default(),
                    if anagram { "anagram" } else { "not an anagram" }
                ));
            }
            output.push('\n');
        }

        if !lists.is_empty() {
            output.push_str("## Word Lists\n\n");
            for item in lists {
                let name = item
                    .data
                    .as_ref()
                    .and_then(|d| d.get("name"))
                    .and_then(|v| v.as_str())
                    .unwrap_or("?");
                output.push_str(&format!("- **{}**\n", name));
            }
            output.push('\n');
        }

        output
    }

    fn render_match_md(&self, output: &mut String, item: &ResultItem) {
        let word = item.word.as_deref().unwrap_or_default();
        output.push_str(&format!("- `{}`", word));
        if let Some(p) = &item.placement {
            output.push_str(&format!(
                " at row {}, col {} ({})",
                p.row,
                p.col,
                p.direction.as_str()
            ));
        }
        output.push('\n');
    }

    /// Render as raw output, one line per item: the word for matches, the
    /// verdict for checks, the name for word lists
    fn render_raw(&self, result_set: &ResultSet) -> String {
        result_set
            .items
            .iter()
            .filter_map(|item| match item.kind {
                Kind::Match => item.word.clone(),
                Kind::Check => item
                    .data
                    .as_ref()
                    .and_then(|d| d.get("anagram"))
                    .and_then(|v| v.as_bool())
                    .map(|anagram| anagram.to_string()),
                Kind::List => item
                    .data
                    .as_ref()
                    .and_then(|d| d.get("name"))
                    .and_then(|v| v.as_str())
                    .map(str::to_string),
            })
            .collect::<Vec<_>>()
            .join("\n")
    }
}

/// Render a result set to stdout
pub fn emit(result_set: &ResultSet, config: RenderConfig) -> std::io::Result<()> {
    let renderer = Renderer::with_config(config);
    renderer.render_to(result_set, std::io::stdout().lock())
}
