use console::style;
use serde::Serialize;
use std::fmt::Display;
use tabled::{settings::Style, Table, Tabled};

/// Width of the label column for `field` lines
const LABEL_WIDTH: usize = 22;

/// Output format mode
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum OutputFormat {
    Human,
    Json,
}

/// Writes either terminal text or a single JSON envelope per command.
///
/// In JSON mode every human-only method is silent, so commands can call them
/// unconditionally and finish with [`OutputWriter::result`].
pub struct OutputWriter {
    format: OutputFormat,
}

impl OutputWriter {
    pub fn new(json: bool) -> Self {
        let format = if json { OutputFormat::Json } else { OutputFormat::Human };
        Self { format }
    }

    fn human(&self) -> bool {
        self.format == OutputFormat::Human
    }

    pub fn note(&self, message: impl Display) {
        if self.human() {
            println!("{} {}", style("›").cyan(), style(message).dim());
        }
    }

    /// Labelled value, labels padded into one column
    pub fn field(&self, label: impl Display, value: impl Display) {
        if self.human() {
            let label = format!("{:<width$}", label.to_string(), width = LABEL_WIDTH);
            println!("  {} {}", style(label).bold(), value);
        }
    }

    pub fn heading(&self, title: impl Display) {
        if self.human() {
            println!("\n{}", style(title).bold().underlined());
        }
    }

    pub fn table<T: Tabled>(&self, rows: Vec<T>) {
        if !self.human() {
            return;
        }
        if rows.is_empty() {
            println!("  {}", style("(none)").dim());
            return;
        }
        let mut table = Table::new(rows);
        table.with(Style::rounded());
        println!("{}", table);
    }

    /// `{"status": "success", "data": ...}` in JSON mode, nothing otherwise
    pub fn result<T: Serialize>(&self, data: T) -> anyhow::Result<()> {
        if self.format == OutputFormat::Json {
            let envelope = serde_json::json!({ "status": "success", "data": data });
            println!("{}", serde_json::to_string_pretty(&envelope)?);
        }
        Ok(())
    }

    pub fn is_json(&self) -> bool {
        self.format == OutputFormat::Json
    }
}
